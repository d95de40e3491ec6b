//! Edit-cost-driven consolidation.

use crate::merge::cleanup_merge;
use crate::script::{EditScript, Op};
use crate::DiffError;

/// Folds equalities shorter than `edit_cost` into the surrounding edits
/// when that lowers the total number of edit operations: always when edits
/// flank the equality on all four sides (an insert and a delete both
/// before and after), and for sub-half-cost equalities already on three.
/// An `edit_cost` of zero disables the pass.
pub fn cleanup_efficiency(script: &mut EditScript, edit_cost: u16) -> Result<(), DiffError> {
    if edit_cost == 0 {
        return Ok(());
    }
    let mut changes = false;
    // Positions of candidate equalities, most recent last.
    let mut equalities: Vec<usize> = Vec::new();
    let mut last_equality: Option<String> = None;
    let mut pointer: isize = 0;
    // Edit kinds seen before and after the candidate equality.
    let mut pre_ins = false;
    let mut pre_del = false;
    let mut post_ins = false;
    let mut post_del = false;

    while (pointer as usize) < script.len() {
        let at = pointer as usize;
        if script[at].0 == Op::Eql {
            if script[at].1.chars().count() < edit_cost as usize && (post_ins || post_del) {
                // Candidate found.
                equalities.push(at);
                pre_ins = post_ins;
                pre_del = post_del;
                last_equality = Some(script[at].1.clone());
            } else {
                // Not a candidate, and can never become one.
                equalities.clear();
                last_equality = None;
            }
            post_ins = false;
            post_del = false;
        } else {
            if script[at].0 == Op::Del {
                post_del = true;
            } else {
                post_ins = true;
            }
            let collapse = last_equality.as_ref().is_some_and(|equality| {
                let length = equality.chars().count();
                let flanks = u8::from(pre_ins)
                    + u8::from(pre_del)
                    + u8::from(post_ins)
                    + u8::from(post_del);
                length > 0
                    && ((pre_ins && pre_del && post_ins && post_del)
                        || (length * 2 < edit_cost as usize && flanks == 3))
            });
            if collapse {
                let at = *equalities.last().expect("candidate equality was recorded");
                let text = last_equality.take().expect("collapse requires a candidate");
                script[at].0 = Op::Ins;
                script.insert(at, (Op::Del, text));
                equalities.pop();
                if pre_ins && pre_del {
                    // Nothing earlier can be affected; keep walking.
                    post_ins = true;
                    post_del = true;
                    equalities.clear();
                } else {
                    // Re-evaluate from the equality before the one removed.
                    equalities.pop();
                    pointer = equalities.last().map_or(-1, |&back| back as isize);
                    post_ins = false;
                    post_del = false;
                }
                changes = true;
            }
        }
        pointer += 1;
    }

    if changes {
        cleanup_merge(script)?;
    }
    Ok(())
}
