//! Semantic cleanup: factor out equalities that only fragment the edits,
//! then align the remaining boundaries with what a human would pick.

use crate::affix;
use crate::merge::cleanup_merge;
use crate::script::{EditScript, Op};
use crate::DiffError;

/// Reduces a script to a more readable shape: eliminates equalities that
/// are dominated by the edits around them, re-normalizes, nudges edit
/// boundaries, and finally surfaces overlaps between adjacent deletions
/// and insertions as explicit equalities. Idempotent on its own output.
pub fn cleanup_semantic(script: &mut EditScript) -> Result<(), DiffError> {
    let mut changes = false;
    // Positions of candidate equalities, most recent last.
    let mut equalities: Vec<usize> = Vec::new();
    let mut last_equality: Option<String> = None;
    let mut pointer: isize = 0;
    // Code points inserted and deleted before the candidate equality.
    let mut insertions1 = 0;
    let mut deletions1 = 0;
    // And after it.
    let mut insertions2 = 0;
    let mut deletions2 = 0;

    while (pointer as usize) < script.len() {
        let at = pointer as usize;
        if script[at].0 == Op::Eql {
            equalities.push(at);
            insertions1 = insertions2;
            deletions1 = deletions2;
            insertions2 = 0;
            deletions2 = 0;
            last_equality = Some(script[at].1.clone());
        } else {
            if script[at].0 == Op::Ins {
                insertions2 += script[at].1.chars().count();
            } else {
                deletions2 += script[at].1.chars().count();
            }
            // An equality no longer than the edit run on each side of it
            // carries no information; fold it into the edits.
            let dominated = last_equality.as_ref().is_some_and(|equality| {
                let length = equality.chars().count();
                length > 0
                    && length <= insertions1.max(deletions1)
                    && length <= insertions2.max(deletions2)
            });
            if dominated {
                let at = *equalities.last().expect("candidate equality was recorded");
                let text = last_equality.take().expect("dominated requires a candidate");
                script[at].0 = Op::Ins;
                script.insert(at, (Op::Del, text));
                // The surrounding context changed; re-evaluate from the
                // equality before the one just removed.
                equalities.pop();
                equalities.pop();
                pointer = equalities.last().map_or(-1, |&back| back as isize);
                insertions1 = 0;
                deletions1 = 0;
                insertions2 = 0;
                deletions2 = 0;
                changes = true;
            }
        }
        pointer += 1;
    }

    if changes {
        cleanup_merge(script)?;
    }
    cleanup_semantic_lossless(script);
    splice_overlaps(script);
    Ok(())
}

/// Extracts overlaps between adjacent delete/insert pairs: a shared run
/// counts only if it spans at least half of either side. A forward overlap
/// yields delete–equal–insert, a reverse one insert–equal–delete.
fn splice_overlaps(script: &mut EditScript) {
    let mut pointer = 1;
    while pointer < script.len() {
        if script[pointer - 1].0 == Op::Del && script[pointer].0 == Op::Ins {
            let deletion: Vec<char> = script[pointer - 1].1.chars().collect();
            let insertion: Vec<char> = script[pointer].1.chars().collect();
            let overlap1 = affix::overlap(&deletion, &insertion);
            let overlap2 = affix::overlap(&insertion, &deletion);
            if overlap1 >= overlap2 {
                if overlap1 * 2 >= deletion.len() || overlap1 * 2 >= insertion.len() {
                    script.insert(pointer, (Op::Eql, insertion[..overlap1].iter().collect()));
                    script[pointer - 1].1 = deletion[..deletion.len() - overlap1].iter().collect();
                    script[pointer + 1].1 = insertion[overlap1..].iter().collect();
                    pointer += 1;
                }
            } else if overlap2 * 2 >= deletion.len() || overlap2 * 2 >= insertion.len() {
                // The tail of the insertion matches the head of the
                // deletion; swap the pair around the shared text.
                script.insert(pointer, (Op::Eql, deletion[..overlap2].iter().collect()));
                script[pointer - 1] = (
                    Op::Ins,
                    insertion[..insertion.len() - overlap2].iter().collect(),
                );
                script[pointer + 1] = (Op::Del, deletion[overlap2..].iter().collect());
                pointer += 1;
            }
            pointer += 1;
        }
        pointer += 1;
    }
}

/// Shifts each single edit that is surrounded by equalities to the
/// boundary position that scores best, without changing either projected
/// text. Ties go to the later position so whitespace trails the edit.
pub fn cleanup_semantic_lossless(script: &mut EditScript) {
    let mut pointer: isize = 1;
    while pointer + 1 < script.len() as isize {
        if pointer < 1 {
            pointer += 1;
            continue;
        }
        let at = pointer as usize;
        if script[at - 1].0 == Op::Eql && script[at + 1].0 == Op::Eql {
            let mut equality1: Vec<char> = script[at - 1].1.chars().collect();
            let mut edit: Vec<char> = script[at].1.chars().collect();
            let mut equality2: Vec<char> = script[at + 1].1.chars().collect();

            // First shift the edit as far left as it will go.
            let offset = affix::suffix(&equality1, &edit);
            if offset > 0 {
                let common: Vec<char> = edit[edit.len() - offset..].to_vec();
                equality1.truncate(equality1.len() - offset);
                let mut shifted = common.clone();
                shifted.extend_from_slice(&edit[..edit.len() - offset]);
                edit = shifted;
                let mut rest = common;
                rest.extend_from_slice(&equality2);
                equality2 = rest;
            }

            // Then walk right one code point at a time, keeping the best
            // boundary.
            let mut best_equality1 = equality1.clone();
            let mut best_edit = edit.clone();
            let mut best_equality2 = equality2.clone();
            let mut best_score =
                boundary_score(&equality1, &edit) + boundary_score(&edit, &equality2);
            while !edit.is_empty() && !equality2.is_empty() && edit[0] == equality2[0] {
                let moved = edit.remove(0);
                equality1.push(moved);
                edit.push(equality2.remove(0));
                let score = boundary_score(&equality1, &edit) + boundary_score(&edit, &equality2);
                if score >= best_score {
                    best_score = score;
                    best_equality1 = equality1.clone();
                    best_edit = edit.clone();
                    best_equality2 = equality2.clone();
                }
            }

            let best_equality1: String = best_equality1.iter().collect();
            if script[at - 1].1 != best_equality1 {
                // An improvement was found.
                if best_equality1.is_empty() {
                    script.remove(at - 1);
                    pointer -= 1;
                } else {
                    script[at - 1].1 = best_equality1;
                }
                script[pointer as usize].1 = best_edit.iter().collect();
                if best_equality2.is_empty() {
                    script.remove(pointer as usize + 1);
                    pointer -= 1;
                } else {
                    script[pointer as usize + 1].1 = best_equality2.iter().collect();
                }
            }
        }
        pointer += 1;
    }
}

/// Score for splitting two texts at this boundary: 6 for an edge, 5 for a
/// blank line, 4 for a line break, 3 for the end of a sentence, 2 for
/// whitespace, 1 for punctuation, 0 inside a word.
fn boundary_score(one: &[char], two: &[char]) -> u32 {
    let (Some(&char1), Some(&char2)) = (one.last(), two.first()) else {
        return 6;
    };
    let non_alnum1 = !char1.is_alphanumeric();
    let non_alnum2 = !char2.is_alphanumeric();
    let whitespace1 = non_alnum1 && char1.is_whitespace();
    let whitespace2 = non_alnum2 && char2.is_whitespace();
    let line_break1 = whitespace1 && (char1 == '\n' || char1 == '\r');
    let line_break2 = whitespace2 && (char2 == '\n' || char2 == '\r');
    let blank_line1 = line_break1 && ends_with_blank_line(one);
    let blank_line2 = line_break2 && starts_with_blank_line(two);

    if blank_line1 || blank_line2 {
        5
    } else if line_break1 || line_break2 {
        4
    } else if non_alnum1 && !whitespace1 && whitespace2 {
        3
    } else if whitespace1 || whitespace2 {
        2
    } else if non_alnum1 || non_alnum2 {
        1
    } else {
        0
    }
}

fn ends_with_blank_line(text: &[char]) -> bool {
    matches!(text, [.., '\n', '\n'] | [.., '\n', '\r', '\n'])
}

fn starts_with_blank_line(text: &[char]) -> bool {
    matches!(
        text,
        ['\n', '\n', ..] | ['\n', '\r', '\n', ..] | ['\r', '\n', '\n', ..] | ['\r', '\n', '\r', '\n', ..]
    )
}
