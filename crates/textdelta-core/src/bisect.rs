//! Myers bidirectional midpoint search.

use std::time::Instant;

use crate::engine::Differ;
use crate::script::{EditScript, Op};
use crate::DiffError;

impl Differ {
    /// Extends forward and reverse shortest-edit frontiers until they
    /// cross, then splits the problem at the crossing point. Falls back to
    /// a coarse delete+insert pair when the deadline passes or the texts
    /// share nothing at all.
    pub(crate) fn bisect(
        &self,
        a: &[char],
        b: &[char],
        deadline: Option<Instant>,
    ) -> Result<EditScript, DiffError> {
        let n = a.len() as isize;
        let m = b.len() as isize;
        let max_d = (a.len() + b.len() + 1) / 2;
        let v_offset = max_d as isize;
        // One slot of slack: the outermost diagonal reads `k_offset + 1`.
        let v_length = 2 * max_d + 2;
        let mut v1 = vec![-1isize; v_length];
        let mut v2 = vec![-1isize; v_length];
        v1[max_d + 1] = 0;
        v2[max_d + 1] = 0;

        let delta = n - m;
        // With an odd delta the paths collide on the forward sweep, with an
        // even delta on the reverse sweep.
        let front = delta % 2 != 0;
        // Trim diagonals that have run off an edge of the grid.
        let mut k1start = 0isize;
        let mut k1end = 0isize;
        let mut k2start = 0isize;
        let mut k2end = 0isize;

        for d in 0..max_d as isize {
            if let Some(deadline) = deadline {
                if Instant::now() > deadline {
                    break;
                }
            }

            // Walk the forward path one step.
            let mut k1 = -d + k1start;
            while k1 <= d - k1end {
                let k1_offset = (v_offset + k1) as usize;
                let mut x1 = if k1 == -d || (k1 != d && v1[k1_offset - 1] < v1[k1_offset + 1]) {
                    v1[k1_offset + 1]
                } else {
                    v1[k1_offset - 1] + 1
                };
                let mut y1 = x1 - k1;
                while x1 < n && y1 < m && a[x1 as usize] == b[y1 as usize] {
                    x1 += 1;
                    y1 += 1;
                }
                v1[k1_offset] = x1;
                if x1 > n {
                    k1end += 2;
                } else if y1 > m {
                    k1start += 2;
                } else if front {
                    let k2_offset = v_offset + delta - k1;
                    if k2_offset >= 0 && (k2_offset as usize) < v_length && v2[k2_offset as usize] != -1 {
                        // Mirror the reverse frontier into forward coordinates.
                        let x2 = n - v2[k2_offset as usize];
                        if x1 >= x2 {
                            return self.bisect_split(a, b, x1 as usize, y1 as usize, deadline);
                        }
                    }
                }
                k1 += 2;
            }

            // Walk the reverse path one step.
            let mut k2 = -d + k2start;
            while k2 <= d - k2end {
                let k2_offset = (v_offset + k2) as usize;
                let mut x2 = if k2 == -d || (k2 != d && v2[k2_offset - 1] < v2[k2_offset + 1]) {
                    v2[k2_offset + 1]
                } else {
                    v2[k2_offset - 1] + 1
                };
                let mut y2 = x2 - k2;
                while x2 < n && y2 < m && a[(n - x2 - 1) as usize] == b[(m - y2 - 1) as usize] {
                    x2 += 1;
                    y2 += 1;
                }
                v2[k2_offset] = x2;
                if x2 > n {
                    k2end += 2;
                } else if y2 > m {
                    k2start += 2;
                } else if !front {
                    let k1_offset = v_offset + delta - k2;
                    if k1_offset >= 0 && (k1_offset as usize) < v_length && v1[k1_offset as usize] != -1 {
                        let x1 = v1[k1_offset as usize];
                        let y1 = v_offset + x1 - k1_offset;
                        let x2 = n - x2;
                        if x1 >= x2 {
                            return self.bisect_split(a, b, x1 as usize, y1 as usize, deadline);
                        }
                    }
                }
                k2 += 2;
            }
        }

        // Deadline hit, or the texts have no code point in common.
        Ok(vec![
            (Op::Del, a.iter().collect()),
            (Op::Ins, b.iter().collect()),
        ])
    }

    fn bisect_split(
        &self,
        a: &[char],
        b: &[char],
        x: usize,
        y: usize,
        deadline: Option<Instant>,
    ) -> Result<EditScript, DiffError> {
        let mut script = self.diff_main(&a[..x], &b[..y], false, deadline)?;
        let tail = self.diff_main(&a[x..], &b[y..], false, deadline)?;
        script.extend(tail);
        Ok(script)
    }
}
