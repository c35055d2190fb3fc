//! Runtime configuration, read from environment variables.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use eventboard_events::{Clock, FixedClock, SeedDataset, SeedError, SystemClock};
use eventboard_observability::LogFormat;

pub const SEED_PATH_VAR: &str = "EVENTBOARD_SEED_PATH";
pub const TODAY_VAR: &str = "EVENTBOARD_TODAY";
pub const LOG_FORMAT_VAR: &str = "EVENTBOARD_LOG_FORMAT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("EVENTBOARD_TODAY must be a YYYY-MM-DD date, got {0:?}")]
    InvalidToday(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed file to load instead of the bundled dataset.
    pub seed_path: Option<PathBuf>,
    /// Pins the "today" anchor; the system clock is used otherwise.
    pub today: Option<NaiveDate>,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (tests pass a closure over a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed_path = lookup(SEED_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let today = match lookup(TODAY_VAR).filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|_| ConfigError::InvalidToday(raw.clone()))?,
            ),
            None => None,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => LogFormat::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(var = LOG_FORMAT_VAR, value = %raw, "unknown log format; using json");
                LogFormat::Json
            }),
            None => LogFormat::Json,
        };

        Ok(Self {
            seed_path,
            today,
            log_format,
        })
    }

    pub fn clock(&self) -> AppClock {
        match self.today {
            Some(day) => AppClock::Fixed(FixedClock(day)),
            None => AppClock::System(SystemClock),
        }
    }

    /// Load the configured seed (file if set, bundled dataset otherwise).
    pub fn load_seed(&self) -> Result<SeedDataset, SeedError> {
        match &self.seed_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading seed file");
                SeedDataset::from_path(path)
            }
            None => SeedDataset::bundled(),
        }
    }
}

/// Clock selected by configuration.
#[derive(Debug, Clone, Copy)]
pub enum AppClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for AppClock {
    fn today(&self) -> NaiveDate {
        match self {
            AppClock::System(c) => c.today(),
            AppClock::Fixed(c) => c.today(),
        }
    }
}
