//! Recursive diff driver.

use std::time::{Duration, Instant};

use crate::affix;
use crate::config::DiffConfig;
use crate::half_match;
use crate::lines;
use crate::merge::cleanup_merge;
use crate::script::{EditScript, Op};
use crate::semantic::cleanup_semantic;
use crate::{efficiency, DiffError};

/// Text-differencing engine. Owns the tuning configuration; every call is
/// otherwise stateless and single-threaded.
pub struct Differ {
    config: DiffConfig,
}

impl Differ {
    pub fn new() -> Self {
        Self::with_config(DiffConfig::default())
    }

    pub fn with_config(config: DiffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Diffs two texts with line-mode speedups enabled and the configured
    /// timeout.
    pub fn diff(&self, a: &str, b: &str) -> Result<EditScript, DiffError> {
        self.diff_checklines(a, b, true)
    }

    /// Diffs two texts; `checklines` enables the line-granularity pre-pass
    /// for large inputs.
    pub fn diff_checklines(&self, a: &str, b: &str, checklines: bool) -> Result<EditScript, DiffError> {
        let deadline = match self.config.diff_timeout_ms {
            0 => None,
            ms => Some(Instant::now() + Duration::from_millis(ms)),
        };
        self.diff_with_deadline(a, b, checklines, deadline)
    }

    /// Diffs against an explicit absolute deadline; `None` runs unbounded.
    /// Past the deadline the bisect stage returns coarse delete+insert
    /// pairs, so the script stays valid but may not be minimal.
    pub fn diff_with_deadline(
        &self,
        a: &str,
        b: &str,
        checklines: bool,
        deadline: Option<Instant>,
    ) -> Result<EditScript, DiffError> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        self.diff_main(&a, &b, checklines, deadline)
    }

    pub(crate) fn diff_main(
        &self,
        a: &[char],
        b: &[char],
        checklines: bool,
        deadline: Option<Instant>,
    ) -> Result<EditScript, DiffError> {
        if a == b {
            if a.is_empty() {
                return Ok(Vec::new());
            }
            return Ok(vec![(Op::Eql, a.iter().collect())]);
        }

        let prefix_len = affix::prefix(a, b);
        let prefix: String = a[..prefix_len].iter().collect();
        let (a, b) = (&a[prefix_len..], &b[prefix_len..]);

        let suffix_len = affix::suffix(a, b);
        let suffix: String = a[a.len() - suffix_len..].iter().collect();
        let (a, b) = (&a[..a.len() - suffix_len], &b[..b.len() - suffix_len]);

        let mut script = self.diff_compute(a, b, checklines, deadline)?;

        if !prefix.is_empty() {
            script.insert(0, (Op::Eql, prefix));
        }
        if !suffix.is_empty() {
            script.push((Op::Eql, suffix));
        }
        cleanup_merge(&mut script)?;
        Ok(script)
    }

    /// The middle block: both inputs are non-equal and share no affix.
    fn diff_compute(
        &self,
        a: &[char],
        b: &[char],
        checklines: bool,
        deadline: Option<Instant>,
    ) -> Result<EditScript, DiffError> {
        if a.is_empty() {
            return Ok(vec![(Op::Ins, b.iter().collect())]);
        }
        if b.is_empty() {
            return Ok(vec![(Op::Del, a.iter().collect())]);
        }

        let (long, short) = if a.len() > b.len() { (a, b) } else { (b, a) };
        if let Some(at) = affix::find(long, short) {
            // The shorter text sits whole inside the longer one.
            let op = if a.len() > b.len() { Op::Del } else { Op::Ins };
            return Ok(vec![
                (op, long[..at].iter().collect()),
                (Op::Eql, short.iter().collect()),
                (op, long[at + short.len()..].iter().collect()),
            ]);
        }

        if short.len() == 1 {
            // A single code point that is not contained above cannot be an
            // equality.
            return Ok(vec![
                (Op::Del, a.iter().collect()),
                (Op::Ins, b.iter().collect()),
            ]);
        }

        if self.config.diff_timeout_ms != 0 {
            if let Some(hm) = half_match::half_match(a, b) {
                // Diff the two halves separately and join on the common middle.
                let mut script = self.diff_main(&hm.a_head, &hm.b_head, checklines, deadline)?;
                let tail = self.diff_main(&hm.a_tail, &hm.b_tail, checklines, deadline)?;
                script.push((Op::Eql, hm.common.iter().collect()));
                script.extend(tail);
                return Ok(script);
            }
        }

        if checklines && a.len() > 100 && b.len() > 100 {
            return self.diff_line_mode(a, b, deadline);
        }

        self.bisect(a, b, deadline)
    }

    /// Line-granularity pre-pass: diff line symbols first, then re-diff
    /// each replacement run character by character.
    fn diff_line_mode(
        &self,
        a: &[char],
        b: &[char],
        deadline: Option<Instant>,
    ) -> Result<EditScript, DiffError> {
        let a: String = a.iter().collect();
        let b: String = b.iter().collect();
        let (sym_a, sym_b, table) = lines::lines_to_symbols(&a, &b)?;
        let sym_a: Vec<char> = sym_a.chars().collect();
        let sym_b: Vec<char> = sym_b.chars().collect();

        let mut script = self.diff_main(&sym_a, &sym_b, false, deadline)?;
        lines::symbols_to_lines(&mut script, &table)?;
        // Whole-line equalities can be freak matches, e.g. blank lines.
        cleanup_semantic(&mut script)?;

        script.push((Op::Eql, String::new()));
        let mut pointer = 0;
        let mut count_delete = 0;
        let mut count_insert = 0;
        let mut text_delete = String::new();
        let mut text_insert = String::new();
        while pointer < script.len() {
            match script[pointer].0 {
                Op::Ins => {
                    count_insert += 1;
                    text_insert.push_str(&script[pointer].1);
                    pointer += 1;
                }
                Op::Del => {
                    count_delete += 1;
                    text_delete.push_str(&script[pointer].1);
                    pointer += 1;
                }
                Op::Eql => {
                    if count_delete >= 1 && count_insert >= 1 {
                        // Replace the paired runs with a character-level diff,
                        // spliced in place to keep document order.
                        let start = pointer - count_delete - count_insert;
                        let del: Vec<char> = text_delete.chars().collect();
                        let ins: Vec<char> = text_insert.chars().collect();
                        let fine = self.diff_main(&del, &ins, false, deadline)?;
                        let fine_len = fine.len();
                        script.splice(start..pointer, fine);
                        pointer = start + fine_len;
                    }
                    count_insert = 0;
                    count_delete = 0;
                    text_delete.clear();
                    text_insert.clear();
                    pointer += 1;
                }
            }
        }
        script.pop();
        Ok(script)
    }

    /// Half-match split for the configured engine, or `None` when the
    /// configuration demands an optimal diff (`diff_timeout_ms == 0`).
    pub fn half_match(&self, a: &str, b: &str) -> Option<(String, String, String, String, String)> {
        if self.config.diff_timeout_ms == 0 {
            return None;
        }
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        half_match::half_match(&a, &b).map(|hm| {
            (
                hm.a_head.iter().collect(),
                hm.a_tail.iter().collect(),
                hm.b_head.iter().collect(),
                hm.b_tail.iter().collect(),
                hm.common.iter().collect(),
            )
        })
    }

    /// Efficiency cleanup using the configured `edit_cost`.
    pub fn cleanup_efficiency(&self, script: &mut EditScript) -> Result<(), DiffError> {
        efficiency::cleanup_efficiency(script, self.config.edit_cost)
    }
}

impl Default for Differ {
    fn default() -> Self {
        Self::new()
    }
}
