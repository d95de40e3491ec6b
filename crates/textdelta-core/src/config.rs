//! Engine tuning knobs.

use serde::{Deserialize, Serialize};

/// Configuration for a [`crate::Differ`]. Caller-owned and read-only during
/// a call.
///
/// The `match_*` and `patch_*` fields belong to the fuzzy-locate and
/// patch-application layers that share this configuration block; the diff
/// core carries them for interface parity and never reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Soft deadline for one diff run, in milliseconds. `0` means
    /// unlimited, which also disables the half-match speculation so the
    /// result is provably minimal.
    pub diff_timeout_ms: u64,
    /// Cost of an empty edit operation in terms of edit characters, used
    /// by the efficiency cleanup. `0` disables that pass.
    pub edit_cost: u16,
    /// At what point no match is declared (0.0 = perfection, 1.0 = very
    /// loose).
    pub match_threshold: f32,
    /// How far to search for a match (0 = exact location, 1000+ = broad).
    pub match_distance: i32,
    /// How closely the contents of a large deleted block must match the
    /// expected contents (0.0 = perfection, 1.0 = very loose).
    pub patch_delete_threshold: f32,
    /// Chunk size for patch context length.
    pub patch_margin: u16,
    /// Number of bits in the match bitmask integer.
    pub match_max_bits: u16,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            diff_timeout_ms: 1000,
            edit_cost: 4,
            match_threshold: 0.5,
            match_distance: 1000,
            patch_delete_threshold: 0.5,
            patch_margin: 4,
            match_max_bits: 32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DiffConfig::default();
        assert_eq!(config.diff_timeout_ms, 1000);
        assert_eq!(config.edit_cost, 4);
        assert_eq!(config.match_threshold, 0.5);
        assert_eq!(config.match_distance, 1000);
        assert_eq!(config.patch_delete_threshold, 0.5);
        assert_eq!(config.patch_margin, 4);
        assert_eq!(config.match_max_bits, 32);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = DiffConfig {
            diff_timeout_ms: 0,
            edit_cost: 6,
            ..DiffConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: DiffConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: DiffConfig = serde_json::from_str(r#"{"edit_cost": 2}"#).unwrap();
        assert_eq!(config.edit_cost, 2);
        assert_eq!(config.diff_timeout_ms, 1000);
    }
}
