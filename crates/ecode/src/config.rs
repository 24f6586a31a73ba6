//! Diagnostics configuration.
//!
//! Defaults come from the environment; the builder methods override them.
//!
//! | Variable             | Effect                                   |
//! |----------------------|------------------------------------------|
//! | `ECODE_LOG_LEVEL`    | log level (off, error, warn, ... trace)  |
//! | `ECODE_FLUSH_EPRINT` | flush stderr after every write           |
//! | `ECODE_DETAIL`       | add the origin line to rendered reports  |
//!
//! ```ignore
//! let config = Config::default().detail(true);
//! config.apply();
//! ```

use std::str::FromStr;

use crate::log::{self, Level, FLUSH_ENV, LEVEL_ENV};

pub use crate::log::DETAIL_ENV;

/// Read `key` and parse it as `T`. Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use ecode::config::env_get_opt;
/// use ecode::Level;
///
/// std::env::set_var("ECODE_DOC_OPT", " info ");
/// assert_eq!(env_get_opt::<Level>("ECODE_DOC_OPT"), Some(Level::Info));
/// assert_eq!(env_get_opt::<Level>("ECODE_DOC_OPT_UNSET"), None);
/// ```
#[inline]
pub fn env_get_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    let raw = std::env::var(key).ok()?;
    raw.trim().parse().ok()
}

/// Like [`env_get_opt`], with `default` for unset or unparsable values.
///
/// # Examples
///
/// ```
/// use ecode::config::env_get;
/// use ecode::Level;
///
/// std::env::set_var("ECODE_DOC_LEVEL", "loud");
/// assert_eq!(env_get("ECODE_DOC_LEVEL", Level::Warn), Level::Warn);
/// ```
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env_get_opt(key).unwrap_or(default)
}

/// Read `key` as an on/off switch.
///
/// `1`/`true`/`yes`/`on` and `0`/`false`/`no`/`off` are recognised in any
/// case. Unset or anything else gives `default`.
///
/// # Examples
///
/// ```
/// use ecode::config::env_get_bool;
///
/// std::env::set_var("ECODE_DOC_SWITCH", "Off");
/// assert!(!env_get_bool("ECODE_DOC_SWITCH", true));
/// std::env::set_var("ECODE_DOC_SWITCH", "maybe");
/// assert!(env_get_bool("ECODE_DOC_SWITCH", true));
/// ```
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    env_get_opt::<String>(key)
        .and_then(|v| parse_switch(&v))
        .unwrap_or(default)
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Minimum level written by the `e*!` log macros.
    pub log_level: Level,

    /// Flush stderr after every log line and printed report.
    pub flush: bool,

    /// Add the origin line (raising module, resolution, line range) to
    /// printed reports.
    pub detail: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: env_get(LEVEL_ENV, Level::Warn),
            flush: env_get_bool(FLUSH_ENV, false),
            detail: env_get_bool(DETAIL_ENV, false),
        }
    }
}

impl Config {
    /// Same as `default()`: every field from the environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum level for the log macros.
    pub fn log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    /// Flush stderr after every write.
    pub fn flush(mut self, enable: bool) -> Self {
        self.flush = enable;
        self
    }

    /// Add the origin line to printed reports.
    pub fn detail(mut self, enable: bool) -> Self {
        self.detail = enable;
        self
    }

    /// Install these settings process-wide. Later log lines and
    /// [`Registry::print_error`](crate::Registry::print_error) follow them.
    pub fn apply(&self) {
        log::set_level(self.log_level);
        log::set_flush(self.flush);
        log::set_detail(self.detail);
        edebug!("config applied: {:?}", self);
    }
}
