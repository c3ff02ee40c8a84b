//! Environment-driven run configuration.
//!
//! Every variable is optional.  Missing or unparsable values fall back to the
//! defaults, so a bare `cargo run` always works.

use std::env;
use std::path::PathBuf;

use hf_core::SimConfig;
use hf_core::config::{DEFAULT_EDGE_TRAVERSE_MS, DEFAULT_TRAVEL_DWELL_MS};
use hf_layout::HexGridConfig;

pub const ENV_SEED: &str = "HEXFOLD_SEED";
pub const ENV_COLS: &str = "HEXFOLD_COLS";
pub const ENV_ROWS: &str = "HEXFOLD_ROWS";
pub const ENV_EDGE_TRAVERSE_MS: &str = "HEXFOLD_EDGE_TRAVERSE_MS";
pub const ENV_TRAVEL_DWELL_MS: &str = "HEXFOLD_TRAVEL_DWELL_MS";
pub const ENV_AGENTS: &str = "HEXFOLD_AGENTS";
pub const ENV_OUTPUT_DIR: &str = "HEXFOLD_OUTPUT_DIR";

/// Everything `main` needs to build and run one simulation.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub grid:       HexGridConfig,
    pub sim:        SimConfig,
    pub output_dir: Option<PathBuf>,
    /// `true` when the seed came from entropy rather than `HEXFOLD_SEED`.
    pub seed_is_random: bool,
}

impl RunConfig {
    pub fn from_env() -> Self {
        let var = |name: &str| env::var(name).ok();
        Self::from_lookup(var, rand::random::<u32>() as u64)
    }

    /// Build from an arbitrary variable lookup.  `fallback_seed` is used when
    /// the seed variable is missing or invalid.
    pub fn from_lookup<F>(lookup: F, fallback_seed: u64) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let grid_defaults = HexGridConfig::default();
        let grid = HexGridConfig {
            target_cols: parse_positive(lookup(ENV_COLS).as_deref(), grid_defaults.target_cols as u64) as u32,
            target_rows: parse_positive(lookup(ENV_ROWS).as_deref(), grid_defaults.target_rows as u64) as u32,
            ..grid_defaults
        };

        let parsed_seed = parse_seed(lookup(ENV_SEED).as_deref());
        let sim = SimConfig {
            seed:             parsed_seed.unwrap_or(fallback_seed),
            edge_traverse_ms: parse_positive(lookup(ENV_EDGE_TRAVERSE_MS).as_deref(), DEFAULT_EDGE_TRAVERSE_MS),
            travel_dwell_ms:  parse_non_negative(lookup(ENV_TRAVEL_DWELL_MS).as_deref(), DEFAULT_TRAVEL_DWELL_MS),
            agent_count:      parse_positive(lookup(ENV_AGENTS).as_deref(), 1) as usize,
            ..SimConfig::default()
        };

        let output_dir = lookup(ENV_OUTPUT_DIR)
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self { grid, sim, output_dir, seed_is_random: parsed_seed.is_none() }
    }
}

/// Accepts any integer (negative values wrap into the `u64` seed space).
pub fn parse_seed(raw: Option<&str>) -> Option<u64> {
    let raw = raw?.trim();
    raw.parse::<u64>().ok().or_else(|| raw.parse::<i64>().ok().map(|v| v as u64))
}

pub fn parse_positive(raw: Option<&str>, default: u64) -> u64 {
    match raw.and_then(|s| s.trim().parse::<u64>().ok()) {
        Some(v) if v > 0 && v <= u32::MAX as u64 => v,
        _ => default,
    }
}

pub fn parse_non_negative(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok()).unwrap_or(default)
}
