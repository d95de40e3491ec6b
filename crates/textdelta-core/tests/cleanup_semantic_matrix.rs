use textdelta_core::{cleanup_semantic, cleanup_semantic_lossless, EditScript, Op};

fn cleaned(mut script: EditScript) -> EditScript {
    cleanup_semantic(&mut script).unwrap();
    script
}

#[test]
fn cleanup_semantic_no_elimination_matrix() {
    let untouched: [EditScript; 3] = [
        vec![
            (Op::Del, "ab".into()),
            (Op::Ins, "cd".into()),
            (Op::Eql, "12".into()),
            (Op::Del, "e".into()),
        ],
        vec![
            (Op::Del, "abc".into()),
            (Op::Ins, "ABC".into()),
            (Op::Eql, "1234".into()),
            (Op::Del, "wxyz".into()),
        ],
        // A balanced split: elimination folds the equalities in and the
        // overlap pass restores them, so the net result is unchanged.
        vec![
            (Op::Eql, "2016-09-01T03:07:1".into()),
            (Op::Ins, "5.15".into()),
            (Op::Eql, "4".into()),
            (Op::Del, ".".into()),
            (Op::Eql, "80".into()),
            (Op::Ins, "0".into()),
            (Op::Eql, "78".into()),
            (Op::Del, "3074".into()),
            (Op::Eql, "1Z".into()),
        ],
    ];
    for script in untouched {
        assert_eq!(cleaned(script.clone()), script);
    }
}

#[test]
fn cleanup_semantic_multiple_eliminations() {
    assert_eq!(
        cleaned(vec![
            (Op::Ins, "1".into()),
            (Op::Eql, "A".into()),
            (Op::Del, "B".into()),
            (Op::Ins, "2".into()),
            (Op::Eql, "_".into()),
            (Op::Ins, "1".into()),
            (Op::Eql, "A".into()),
            (Op::Del, "B".into()),
            (Op::Ins, "2".into()),
        ]),
        vec![(Op::Del, "AB_AB".into()), (Op::Ins, "1A2_1A2".into())]
    );
}

#[test]
fn cleanup_semantic_word_boundaries() {
    assert_eq!(
        cleaned(vec![
            (Op::Eql, "The c".into()),
            (Op::Del, "ow and the c".into()),
            (Op::Eql, "at.".into()),
        ]),
        vec![
            (Op::Eql, "The ".into()),
            (Op::Del, "cow and the ".into()),
            (Op::Eql, "cat.".into()),
        ]
    );
}

#[test]
fn cleanup_semantic_two_overlap_eliminations() {
    assert_eq!(
        cleaned(vec![
            (Op::Del, "abcd1212".into()),
            (Op::Ins, "1212efghi".into()),
            (Op::Eql, "----".into()),
            (Op::Del, "A3".into()),
            (Op::Ins, "3BC".into()),
        ]),
        vec![
            (Op::Del, "abcd".into()),
            (Op::Eql, "1212".into()),
            (Op::Ins, "efghi".into()),
            (Op::Eql, "----".into()),
            (Op::Del, "A".into()),
            (Op::Eql, "3".into()),
            (Op::Ins, "BC".into()),
        ]
    );
}

#[test]
fn cleanup_semantic_rearranges_trailing_edits() {
    assert_eq!(
        cleaned(vec![
            (Op::Eql, "James McCarthy ".into()),
            (Op::Del, "close to ".into()),
            (Op::Eql, "sign".into()),
            (Op::Del, "ing".into()),
            (Op::Ins, "s".into()),
            (Op::Eql, " new ".into()),
            (Op::Del, "E".into()),
            (Op::Ins, "fi".into()),
            (Op::Eql, "ve".into()),
            (Op::Ins, "-yea".into()),
            (Op::Eql, "r".into()),
            (Op::Del, "ton".into()),
            (Op::Eql, " deal".into()),
            (Op::Ins, " at Everton".into()),
        ]),
        vec![
            (Op::Eql, "James McCarthy ".into()),
            (Op::Del, "close to ".into()),
            (Op::Eql, "sign".into()),
            (Op::Del, "ing".into()),
            (Op::Ins, "s".into()),
            (Op::Eql, " new ".into()),
            (Op::Ins, "five-year deal at ".into()),
            (Op::Eql, "Everton".into()),
            (Op::Del, " deal".into()),
        ]
    );
}

#[test]
fn cleanup_semantic_mixed_scripts() {
    assert_eq!(
        cleaned(vec![
            (Op::Ins, "星球大戰：新的希望 ".into()),
            (Op::Eql, "star wars: ".into()),
            (Op::Del, "episodio iv - un".into()),
            (Op::Eql, "a n".into()),
            (Op::Del, "u".into()),
            (Op::Eql, "e".into()),
            (Op::Del, "va".into()),
            (Op::Ins, "w".into()),
            (Op::Eql, " ".into()),
            (Op::Del, "es".into()),
            (Op::Ins, "ho".into()),
            (Op::Eql, "pe".into()),
            (Op::Del, "ranza".into()),
        ]),
        vec![
            (Op::Ins, "星球大戰：新的希望 ".into()),
            (Op::Eql, "star wars: ".into()),
            (Op::Del, "episodio iv - una nueva esperanza".into()),
            (Op::Ins, "a new hope".into()),
        ]
    );
}

#[test]
fn cleanup_semantic_keeps_balanced_hangul_split() {
    let script: EditScript = vec![
        (Op::Ins, "킬러 인 ".into()),
        (Op::Eql, "리커버리".into()),
        (Op::Del, " 보이즈".into()),
    ];
    assert_eq!(cleaned(script.clone()), script);
}

#[test]
fn cleanup_semantic_is_idempotent() {
    let scripts: [EditScript; 3] = [
        vec![(Op::Del, "abcxxx".into()), (Op::Ins, "xxxdef".into())],
        vec![
            (Op::Del, "abcd1212".into()),
            (Op::Ins, "1212efghi".into()),
            (Op::Eql, "----".into()),
            (Op::Del, "A3".into()),
            (Op::Ins, "3BC".into()),
        ],
        vec![
            (Op::Del, "a".into()),
            (Op::Eql, "b".into()),
            (Op::Del, "c".into()),
        ],
    ];
    for script in scripts {
        let once = cleaned(script);
        let twice = cleaned(once.clone());
        assert_eq!(twice, once);
    }
}

#[test]
fn cleanup_lossless_blank_and_line_boundaries() {
    let mut script: EditScript = vec![
        (Op::Eql, "AAA\r\n\r\nBBB".into()),
        (Op::Ins, "\r\nDDD\r\n\r\nBBB".into()),
        (Op::Eql, "\r\nEEE".into()),
    ];
    cleanup_semantic_lossless(&mut script);
    assert_eq!(
        script,
        vec![
            (Op::Eql, "AAA\r\n\r\n".into()),
            (Op::Ins, "BBB\r\nDDD\r\n\r\n".into()),
            (Op::Eql, "BBB\r\nEEE".into()),
        ]
    );

    let mut script: EditScript = vec![
        (Op::Eql, "AAA\r\nBBB".into()),
        (Op::Ins, " DDD\r\nBBB".into()),
        (Op::Eql, " EEE".into()),
    ];
    cleanup_semantic_lossless(&mut script);
    assert_eq!(
        script,
        vec![
            (Op::Eql, "AAA\r\n".into()),
            (Op::Ins, "BBB DDD\r\n".into()),
            (Op::Eql, "BBB EEE".into()),
        ]
    );

    let mut script: EditScript = vec![
        (Op::Eql, "The-c".into()),
        (Op::Ins, "ow-and-the-c".into()),
        (Op::Eql, "at.".into()),
    ];
    cleanup_semantic_lossless(&mut script);
    assert_eq!(
        script,
        vec![
            (Op::Eql, "The-".into()),
            (Op::Ins, "cow-and-the-".into()),
            (Op::Eql, "cat.".into()),
        ]
    );
}
