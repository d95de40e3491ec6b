//! Script normalization.

use crate::affix;
use crate::script::{EditScript, Op};
use crate::DiffError;

/// Normalizes a script: coalesces runs that share an op, factors common
/// affixes of paired delete+insert runs into the neighbouring equalities,
/// and slides single edits over bordering equalities. Repeats until
/// nothing changes. Idempotent on its own output.
pub fn cleanup_merge(script: &mut EditScript) -> Result<(), DiffError> {
    // Sentinel equality so the final run is flushed like any other.
    script.push((Op::Eql, String::new()));

    let mut pointer = 0;
    let mut count_delete = 0;
    let mut count_insert = 0;
    let mut text_delete: Vec<char> = Vec::new();
    let mut text_insert: Vec<char> = Vec::new();

    while pointer < script.len() {
        if pointer < script.len() - 1 && script[pointer].1.is_empty() {
            script.remove(pointer);
            continue;
        }
        match script[pointer].0 {
            Op::Ins => {
                count_insert += 1;
                text_insert.extend(script[pointer].1.chars());
                pointer += 1;
            }
            Op::Del => {
                count_delete += 1;
                text_delete.extend(script[pointer].1.chars());
                pointer += 1;
            }
            Op::Eql => {
                if count_delete + count_insert > 1 {
                    if count_delete != 0 && count_insert != 0 {
                        // Factor a shared prefix out into the preceding
                        // equality, creating one at the front if needed.
                        let shared = affix::prefix(&text_insert, &text_delete);
                        if shared != 0 {
                            let run_start = pointer - count_delete - count_insert;
                            let prefix: String = text_insert[..shared].iter().collect();
                            if run_start > 0 {
                                if script[run_start - 1].0 != Op::Eql {
                                    return Err(DiffError::InvariantViolation(
                                        "factored prefix lacks a preceding equality",
                                    ));
                                }
                                script[run_start - 1].1.push_str(&prefix);
                            } else {
                                script.insert(0, (Op::Eql, prefix));
                                pointer += 1;
                            }
                            text_insert.drain(..shared);
                            text_delete.drain(..shared);
                        }
                        // And a shared suffix into the current equality.
                        let shared = affix::suffix(&text_insert, &text_delete);
                        if shared != 0 {
                            let mut suffix: String =
                                text_insert[text_insert.len() - shared..].iter().collect();
                            suffix.push_str(&script[pointer].1);
                            script[pointer].1 = suffix;
                            text_insert.truncate(text_insert.len() - shared);
                            text_delete.truncate(text_delete.len() - shared);
                        }
                    }
                    // Collapse the run to at most one delete and one insert.
                    let run_start = pointer - count_delete - count_insert;
                    let mut merged: EditScript = Vec::with_capacity(2);
                    if !text_delete.is_empty() {
                        merged.push((Op::Del, text_delete.iter().collect()));
                    }
                    if !text_insert.is_empty() {
                        merged.push((Op::Ins, text_insert.iter().collect()));
                    }
                    let merged_len = merged.len();
                    script.splice(run_start..pointer, merged);
                    pointer = run_start + merged_len;
                } else if pointer != 0 && script[pointer - 1].0 == Op::Eql {
                    // Merge this equality into the previous one.
                    let text = std::mem::take(&mut script[pointer].1);
                    script[pointer - 1].1.push_str(&text);
                    script.remove(pointer);
                } else {
                    pointer += 1;
                }
                count_insert = 0;
                count_delete = 0;
                text_delete.clear();
                text_insert.clear();
            }
        }
    }
    if script.last().is_some_and(|(_, text)| text.is_empty()) {
        script.pop();
    }

    // Second pass: slide single edits surrounded by equalities sideways to
    // swallow one of them, e.g. A<ins>BA</ins>C becomes <ins>AB</ins>AC.
    let mut changed = false;
    let mut pointer = 1;
    while pointer + 1 < script.len() {
        if script[pointer - 1].0 == Op::Eql && script[pointer + 1].0 == Op::Eql {
            let previous = script[pointer - 1].1.clone();
            let current = script[pointer].1.clone();
            if current.ends_with(&previous) {
                // Shift the edit over the previous equality.
                let head = &current[..current.len() - previous.len()];
                script[pointer].1 = format!("{previous}{head}");
                let next = std::mem::take(&mut script[pointer + 1].1);
                script[pointer + 1].1 = format!("{previous}{next}");
                script.remove(pointer - 1);
                changed = true;
            } else {
                let next = script[pointer + 1].1.clone();
                if let Some(tail) = current.strip_prefix(next.as_str()) {
                    // Shift the edit over the next equality.
                    script[pointer].1 = format!("{tail}{next}");
                    script[pointer - 1].1.push_str(&next);
                    script.remove(pointer + 1);
                    changed = true;
                }
            }
        }
        pointer += 1;
    }
    // Any shift can expose new coalescing work.
    if changed {
        cleanup_merge(script)?;
    }
    Ok(())
}
