//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BIKE_DASH_SEED` | clock-derived | RNG seed |
//! | `BIKE_DASH_FRAME_MS` | 16 | Frame interval in ms |
//! | `BIKE_DASH_LOG_PATH` | unset | Log file (logging off when unset) |
//! | `BIKE_DASH_LOG` | `info` | `env_logger` filter spec |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::FRAME_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub frame_ms: u32,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 1,
            frame_ms: FRAME_MS,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Create from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    ///
    /// Unparsable numbers fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("BIKE_DASH_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let frame_ms = lookup("BIKE_DASH_FRAME_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|ms| ms.max(1))
            .unwrap_or(FRAME_MS);

        let log_path = lookup("BIKE_DASH_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let log_filter = lookup("BIKE_DASH_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "info".to_string());

        Self {
            seed,
            frame_ms,
            log_path,
            log_filter,
        }
    }
}

/// Seed derived from the wall clock, for unseeded runs.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
