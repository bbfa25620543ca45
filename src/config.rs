use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// value has a default; only malformed values are errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Simulated accounts generated per trend (TRENDLENS_ACCOUNTS_PER_TREND)
    pub accounts_per_trend: usize,
    /// Accounts scoring strictly above this are flagged as bots (TRENDLENS_BOT_THRESHOLD)
    pub bot_threshold: u8,
    /// Largest sentiment drift applied per refresh, in points (TRENDLENS_MAX_DRIFT)
    pub max_drift: u8,
    /// Seconds between refreshes (TRENDLENS_REFRESH_SECS)
    pub refresh_secs: u64,
    /// Fixed RNG seed for reproducible runs (TRENDLENS_SEED)
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accounts_per_trend: 5,
            bot_threshold: 50,
            max_drift: 5,
            refresh_secs: 60,
            seed: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `load` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            accounts_per_trend: parse_or(
                &lookup,
                "TRENDLENS_ACCOUNTS_PER_TREND",
                defaults.accounts_per_trend,
            )?,
            bot_threshold: parse_or(&lookup, "TRENDLENS_BOT_THRESHOLD", defaults.bot_threshold)?,
            max_drift: parse_or(&lookup, "TRENDLENS_MAX_DRIFT", defaults.max_drift)?,
            refresh_secs: parse_or(&lookup, "TRENDLENS_REFRESH_SECS", defaults.refresh_secs)?,
            seed: match lookup("TRENDLENS_SEED").filter(|v| !v.trim().is_empty()) {
                Some(raw) => Some(
                    raw.trim()
                        .parse()
                        .with_context(|| format!("TRENDLENS_SEED is not a valid u64: {raw:?}"))?,
                ),
                None => None,
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.bot_threshold > 100 {
            anyhow::bail!(
                "TRENDLENS_BOT_THRESHOLD must be between 0 and 100 (got {})",
                self.bot_threshold
            );
        }
        if self.max_drift > 100 {
            anyhow::bail!(
                "TRENDLENS_MAX_DRIFT must be between 0 and 100 (got {})",
                self.max_drift
            );
        }
        if self.refresh_secs == 0 {
            anyhow::bail!("TRENDLENS_REFRESH_SECS must be at least 1");
        }
        Ok(())
    }
}

/// Parse an optional variable, falling back to `default` when unset or blank.
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} is not a valid number: {raw:?}")),
        _ => Ok(default),
    }
}
