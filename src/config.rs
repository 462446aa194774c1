//! CLI configuration.
//!
//! Engine constants are fixed at build time (see the crate root). This only
//! covers knobs of the `plinko-fair` binary.

use std::str::FromStr;

use crate::game::path::{validate_drop_column, CENTER_COLUMN};
use crate::proof::commitment::DEFAULT_SEED_BYTES;

/// Binary configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Byte length of newly minted server seeds.
    pub seed_bytes: usize,
    /// Drop column used when none is given.
    pub default_drop_column: i32,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed_bytes: DEFAULT_SEED_BYTES,
            default_drop_column: CENTER_COLUMN,
            log_filter: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Create config from environment variables.
    ///
    /// - `PLINKO_SEED_BYTES`
    /// - `PLINKO_DROP_COLUMN`
    /// - `PLINKO_LOG`
    ///
    /// Also returns one message per value that fell back to its default.
    /// Config is read before logging is set up, so the caller logs them.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    ///
    /// Unparseable or out-of-range values fall back to the default and
    /// add a message to the returned list.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut warnings = Vec::new();

        let seed_bytes =
            parse_or(&lookup, "PLINKO_SEED_BYTES", defaults.seed_bytes, &mut warnings).max(1);

        let default_drop_column = parse_or(
            &lookup,
            "PLINKO_DROP_COLUMN",
            defaults.default_drop_column,
            &mut warnings,
        );
        let default_drop_column = match validate_drop_column(default_drop_column) {
            Ok(column) => column,
            Err(e) => {
                warnings.push(format!(
                    "PLINKO_DROP_COLUMN: {}, using {}",
                    e, defaults.default_drop_column
                ));
                defaults.default_drop_column
            }
        };

        let log_filter = lookup("PLINKO_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        let config = Self {
            seed_bytes,
            default_drop_column,
            log_filter,
        };
        (config, warnings)
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T, warnings: &mut Vec<String>) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warnings.push(format!("Ignoring invalid {}={:?}, using {}", key, raw, default));
            default
        }),
    }
}

// =============================================================================
// TESTS
// =============================================================================
