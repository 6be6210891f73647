//! Demo configuration, read from environment variables.
//!
//! - `CONTACTBOOK_WINDOW_DAYS`: birthday look-ahead in days (default 7)
//! - `CONTACTBOOK_TODAY`: fixed "today" as `DD.MM.YYYY` (default: system clock)
//! - `CONTACTBOOK_LOG_FORMAT`: `json` or `pretty` (default `json`)
//!
//! Bad values are logged and replaced by the default rather than aborting.

use chrono::NaiveDate;

use contactbook_contacts::{Birthday, DEFAULT_WINDOW_DAYS};
use contactbook_core::{Clock, FixedClock, SystemClock};
use contactbook_observability::LogFormat;

pub const WINDOW_DAYS_VAR: &str = "CONTACTBOOK_WINDOW_DAYS";
pub const TODAY_VAR: &str = "CONTACTBOOK_TODAY";
pub const LOG_FORMAT_VAR: &str = "CONTACTBOOK_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub window_days: u32,
    /// Fixed date to use instead of the system clock.
    pub today: Option<NaiveDate>,
    pub log_format: LogFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            today: None,
            log_format: LogFormat::default(),
        }
    }
}

impl DemoConfig {
    /// Only the log format; read before tracing is up so it cannot warn.
    /// `None` when unset or unrecognized.
    pub fn log_format_from_env() -> Option<LogFormat> {
        std::env::var(LOG_FORMAT_VAR)
            .ok()
            .and_then(|raw| LogFormat::from_name(&raw))
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let window_days = match lookup(WINDOW_DAYS_VAR) {
            Some(raw) => parse_window_days(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    value = %raw,
                    default = DEFAULT_WINDOW_DAYS,
                    "{WINDOW_DAYS_VAR} is not a non-negative integer; using default"
                );
                DEFAULT_WINDOW_DAYS
            }),
            None => DEFAULT_WINDOW_DAYS,
        };

        let today = lookup(TODAY_VAR).and_then(|raw| match Birthday::parse(raw.trim()) {
            Ok(date) => Some(date.date()),
            Err(e) => {
                tracing::warn!(value = %raw, error = %e, "{TODAY_VAR} ignored; using system clock");
                None
            }
        });

        let log_format = lookup(LOG_FORMAT_VAR)
            .and_then(|raw| LogFormat::from_name(&raw))
            .unwrap_or_default();

        Self {
            window_days,
            today,
            log_format,
        }
    }

    /// Where "today" comes from for this run.
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.today {
            Some(date) => Box::new(FixedClock::new(date)),
            None => Box::new(SystemClock),
        }
    }
}

fn parse_window_days(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}
