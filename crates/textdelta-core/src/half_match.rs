//! Speculative long-common-substring split.

use crate::affix;

/// Decomposition of both texts around a shared middle:
/// `a_head + common + a_tail == A` and `b_head + common + b_tail == B`.
pub(crate) struct HalfMatch {
    pub a_head: Vec<char>,
    pub a_tail: Vec<char>,
    pub b_head: Vec<char>,
    pub b_tail: Vec<char>,
    pub common: Vec<char>,
}

/// Looks for a substring shared by both texts that is at least half as
/// long as the longer text. Linear probes from two quarter-point seeds;
/// misses real splits sometimes, which only costs optimality, never
/// correctness.
pub(crate) fn half_match(a: &[char], b: &[char]) -> Option<HalfMatch> {
    let a_is_long = a.len() > b.len();
    let (long, short) = if a_is_long { (a, b) } else { (b, a) };
    if long.len() < 4 || short.len() * 2 < long.len() {
        return None;
    }

    // Seed once from the second quarter and once from the third.
    let hm1 = half_match_at(long, short, (long.len() + 3) / 4);
    let hm2 = half_match_at(long, short, (long.len() + 1) / 2);
    let (long_head, long_tail, short_head, short_tail, common) = match (hm1, hm2) {
        (None, None) => return None,
        (Some(hm), None) => hm,
        (None, Some(hm)) => hm,
        (Some(hm1), Some(hm2)) => {
            if hm1.4.len() > hm2.4.len() {
                hm1
            } else {
                hm2
            }
        }
    };

    if a_is_long {
        Some(HalfMatch {
            a_head: long_head,
            a_tail: long_tail,
            b_head: short_head,
            b_tail: short_tail,
            common,
        })
    } else {
        Some(HalfMatch {
            a_head: short_head,
            a_tail: short_tail,
            b_head: long_head,
            b_tail: long_tail,
            common,
        })
    }
}

type Quarters = (Vec<char>, Vec<char>, Vec<char>, Vec<char>, Vec<char>);

/// Tries every occurrence in `short` of the quarter-length seed starting at
/// `i` in `long`, extending each hit in both directions. Keeps the hit only
/// if the extended match spans at least half of `long`.
fn half_match_at(long: &[char], short: &[char], i: usize) -> Option<Quarters> {
    let seed = &long[i..i + long.len() / 4];
    let mut best_common: &[char] = &[];
    let mut best_long = (0, 0);
    let mut best_short = (0, 0);

    let mut j = 0;
    while let Some(found) = affix::find(&short[j..], seed) {
        let at = j + found;
        let prefix_len = affix::prefix(&long[i..], &short[at..]);
        let suffix_len = affix::suffix(&long[..i], &short[..at]);
        if best_common.len() < suffix_len + prefix_len {
            best_common = &short[at - suffix_len..at + prefix_len];
            best_long = (i - suffix_len, i + prefix_len);
            best_short = (at - suffix_len, at + prefix_len);
        }
        j = at + 1;
    }

    if best_common.len() * 2 >= long.len() {
        Some((
            long[..best_long.0].to_vec(),
            long[best_long.1..].to_vec(),
            short[..best_short.0].to_vec(),
            short[best_short.1..].to_vec(),
            best_common.to_vec(),
        ))
    } else {
        None
    }
}
