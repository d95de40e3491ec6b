//! Edit script data model and projections.

/// A single edit operation. `Eql` is the neutral element: it contributes to
/// both sides of the script's round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Del = -1,
    Eql = 0,
    Ins = 1,
}

/// One span of the edit script: an operation and the text it covers.
pub type Segment = (Op, String);

/// Ordered sequence of segments. After [`crate::cleanup_merge`] the script
/// is normalized: no two adjacent segments share an op, no segment is
/// empty, and adjacent delete/insert pairs share no common affix.
pub type EditScript = Vec<Segment>;

/// Reconstructs the source text: everything that is not an insertion.
pub fn text_source(script: &EditScript) -> String {
    let mut text = String::new();
    for (op, segment) in script {
        if *op != Op::Ins {
            text.push_str(segment);
        }
    }
    text
}

/// Reconstructs the target text: everything that is not a deletion.
pub fn text_target(script: &EditScript) -> String {
    let mut text = String::new();
    for (op, segment) in script {
        if *op != Op::Del {
            text.push_str(segment);
        }
    }
    text
}

/// Swaps deletions and insertions, turning a script from A to B into one
/// from B to A.
pub fn invert(script: &EditScript) -> EditScript {
    script
        .iter()
        .map(|(op, text)| match op {
            Op::Eql => (Op::Eql, text.clone()),
            Op::Ins => (Op::Del, text.clone()),
            Op::Del => (Op::Ins, text.clone()),
        })
        .collect()
}

/// Replays a script against a buffer of `src_len` code points, walking in
/// reverse so reported positions stay valid as the callbacks mutate the
/// buffer. Positions and lengths are in code points.
pub fn apply<FIns, FDel>(script: &EditScript, src_len: usize, mut on_insert: FIns, mut on_delete: FDel)
where
    FIns: FnMut(usize, &str),
    FDel: FnMut(usize, usize, &str),
{
    let mut pos = src_len;
    for (op, text) in script.iter().rev() {
        match op {
            Op::Eql => pos = pos.saturating_sub(text.chars().count()),
            Op::Ins => on_insert(pos, text),
            Op::Del => {
                let len = text.chars().count();
                pos = pos.saturating_sub(len);
                on_delete(pos, len, text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EditScript {
        vec![
            (Op::Eql, "jump".into()),
            (Op::Del, "s".into()),
            (Op::Ins, "ed".into()),
            (Op::Eql, " over ".into()),
            (Op::Del, "the".into()),
            (Op::Ins, "a".into()),
            (Op::Eql, " lazy".into()),
        ]
    }

    #[test]
    fn test_text_projections() {
        let script = sample();
        assert_eq!(text_source(&script), "jumps over the lazy");
        assert_eq!(text_target(&script), "jumped over a lazy");
    }

    #[test]
    fn test_invert_swaps_projections() {
        let script = sample();
        let inverted = invert(&script);
        assert_eq!(text_source(&inverted), "jumped over a lazy");
        assert_eq!(text_target(&inverted), "jumps over the lazy");
    }

    #[test]
    fn test_apply_reports_reverse_order_positions() {
        let script = vec![
            (Op::Eql, "ab".into()),
            (Op::Del, "cd".into()),
            (Op::Ins, "XY".into()),
            (Op::Eql, "e".into()),
        ];
        let mut inserts = Vec::new();
        let mut deletes = Vec::new();
        apply(
            &script,
            5,
            |pos, text| inserts.push((pos, text.to_string())),
            |pos, len, text| deletes.push((pos, len, text.to_string())),
        );
        assert_eq!(inserts, vec![(4, "XY".to_string())]);
        assert_eq!(deletes, vec![(2, 2, "cd".to_string())]);
    }

    #[test]
    fn test_apply_counts_code_points() {
        let script = vec![(Op::Eql, "🙂🙂".into()), (Op::Del, "🙃".into())];
        let mut deletes = Vec::new();
        apply(&script, 3, |_, _| {}, |pos, len, _| deletes.push((pos, len)));
        assert_eq!(deletes, vec![(2, 1)]);
    }
}
