use textdelta_core::{lines_to_symbols, symbols_to_lines, text_source, text_target, Differ, EditScript, Op};

/// Builds a line-structured text from a pattern of line numbers.
fn numbered_lines(numbers: &[usize]) -> String {
    let mut text = String::new();
    for n in numbers {
        text.push_str(&format!("line {n} with some padding text\n"));
    }
    text
}

#[test]
fn line_mode_round_trips_large_inputs() {
    let a = numbered_lines(&[1, 2, 3, 4, 5, 6, 7, 8, 1, 2, 3]);
    let b = numbered_lines(&[1, 2, 9, 4, 5, 5, 6, 7, 8, 3]);
    assert!(a.chars().count() > 100 && b.chars().count() > 100);

    let differ = Differ::new();
    let script = differ.diff(&a, &b).unwrap();
    assert_eq!(text_source(&script), a);
    assert_eq!(text_target(&script), b);
}

#[test]
fn line_mode_agrees_with_character_mode() {
    // Same inputs through both paths must reconstruct the same texts even
    // though the scripts may differ in shape.
    let a = numbered_lines(&[1, 2, 3, 4, 5, 1, 2, 3, 4, 5]);
    let b = numbered_lines(&[1, 2, 3, 6, 5, 1, 7, 3, 4]);

    let differ = Differ::new();
    let with_lines = differ.diff_checklines(&a, &b, true).unwrap();
    let without_lines = differ.diff_checklines(&a, &b, false).unwrap();
    for script in [&with_lines, &without_lines] {
        assert_eq!(text_source(script), a);
        assert_eq!(text_target(script), b);
    }
}

#[test]
fn line_mode_rediffs_replacement_runs_in_place() {
    // One changed word in each of three lines scattered through the text,
    // so no affix strip or half-match can bypass the line-mode pass. The
    // re-diff must narrow each edit back down to word size, in document
    // order.
    let mut a = String::new();
    let mut b = String::new();
    for n in 0..30 {
        if n % 10 == 5 {
            a.push_str(&format!("line {n} keeps the brown fox busy with padding\n"));
            b.push_str(&format!("line {n} keeps the hungry fox busy with padding\n"));
        } else {
            let line = format!("line {n} is unchanged filler text with padding\n");
            a.push_str(&line);
            b.push_str(&line);
        }
    }

    let differ = Differ::new();
    let script = differ.diff(&a, &b).unwrap();
    assert_eq!(text_source(&script), a);
    assert_eq!(text_target(&script), b);
    // Word-level edits, not whole replaced lines.
    let deleted: usize = script
        .iter()
        .filter(|(op, _)| *op == Op::Del)
        .map(|(_, text)| text.chars().count())
        .sum();
    let inserted: usize = script
        .iter()
        .filter(|(op, _)| *op == Op::Ins)
        .map(|(_, text)| text.chars().count())
        .sum();
    assert!(deleted < 40, "deletions stayed line-sized: {deleted}");
    assert!(inserted < 40, "insertions stayed line-sized: {inserted}");
    // The edits stay in document order: source positions re-assemble A.
    let mut rebuilt = String::new();
    for (op, text) in &script {
        if *op != Op::Ins {
            rebuilt.push_str(text);
        }
    }
    assert_eq!(rebuilt, a);
}

#[test]
fn symbol_coding_round_trips_through_public_api() {
    let a = "alpha\nbeta\ngamma\n";
    let b = "alpha\ngamma\nbeta\n";
    let (sym_a, sym_b, table) = lines_to_symbols(a, b).unwrap();
    assert_eq!(sym_a.chars().count(), 3);
    assert_eq!(sym_b.chars().count(), 3);

    let mut script: EditScript = vec![(Op::Del, sym_a), (Op::Ins, sym_b)];
    symbols_to_lines(&mut script, &table).unwrap();
    assert_eq!(script, vec![(Op::Del, a.into()), (Op::Ins, b.into())]);
}
