//! Leveled stderr logging.
//!
//! Each call writes one whole line under the stderr lock, prefixed with its
//! level. Settings live in atomics and are read from the environment on
//! first use:
//!
//! - `ECODE_LOG_LEVEL` - off, error, warn, info, debug, trace (or 0-5)
//! - `ECODE_FLUSH_EPRINT=1` - flush stderr after every line
//! - `ECODE_DETAIL=1` - add the origin line to printed reports
//!
//! ```ignore
//! einfo!("registry has {} modules", n);
//! ewarn!("registry: {}", problem);
//! ```

use std::io::Write;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Log verbosity. Each level includes the ones before it.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl Level {
    /// Convert from the stored byte. Out-of-range values mean `Trace`.
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => Level::Off,
            1 => Level::Error,
            2 => Level::Warn,
            3 => Level::Info,
            4 => Level::Debug,
            _ => Level::Trace,
        }
    }

    /// Prefix written before each line.
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Off => "",
            Level::Error => "ecode[E]",
            Level::Warn => "ecode[W]",
            Level::Info => "ecode[I]",
            Level::Debug => "ecode[D]",
            Level::Trace => "ecode[T]",
        }
    }
}

impl FromStr for Level {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "0" => Ok(Level::Off),
            "error" | "1" => Ok(Level::Error),
            "warn" | "2" => Ok(Level::Warn),
            "info" | "3" => Ok(Level::Info),
            "debug" | "4" => Ok(Level::Debug),
            "trace" | "5" => Ok(Level::Trace),
            _ => Err(()),
        }
    }
}

pub const LEVEL_ENV: &str = "ECODE_LOG_LEVEL";
pub const FLUSH_ENV: &str = "ECODE_FLUSH_EPRINT";
pub const DETAIL_ENV: &str = "ECODE_DETAIL";

static LEVEL: AtomicU8 = AtomicU8::new(Level::Warn as u8);
static FLUSH: AtomicBool = AtomicBool::new(false);
static DETAIL: AtomicBool = AtomicBool::new(false);
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Read the environment once. Later calls are no-ops.
pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }
    if let Some(level) = crate::config::env_get_opt::<Level>(LEVEL_ENV) {
        LEVEL.store(level as u8, Ordering::Relaxed);
    }
    let flush = crate::config::env_get_bool(FLUSH_ENV, false);
    FLUSH.store(flush, Ordering::Relaxed);
    let detail = crate::config::env_get_bool(DETAIL_ENV, false);
    DETAIL.store(detail, Ordering::Relaxed);
}

#[inline]
fn ensure_init() {
    if !INITIALIZED.load(Ordering::Relaxed) {
        init();
    }
}

#[inline]
pub fn level() -> Level {
    ensure_init();
    Level::from_u8(LEVEL.load(Ordering::Relaxed))
}

/// Override the level. Also marks logging initialised so the
/// environment cannot clobber it later.
pub fn set_level(level: Level) {
    INITIALIZED.store(true, Ordering::SeqCst);
    LEVEL.store(level as u8, Ordering::Relaxed);
}

#[inline]
pub fn flush_enabled() -> bool {
    ensure_init();
    FLUSH.load(Ordering::Relaxed)
}

pub fn set_flush(enabled: bool) {
    INITIALIZED.store(true, Ordering::SeqCst);
    FLUSH.store(enabled, Ordering::Relaxed);
}

/// Whether printed reports carry the origin line.
#[inline]
pub fn detail_enabled() -> bool {
    ensure_init();
    DETAIL.load(Ordering::Relaxed)
}

/// Turn the origin line in printed reports on or off.
pub fn set_detail(enabled: bool) {
    INITIALIZED.store(true, Ordering::SeqCst);
    DETAIL.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn enabled(level: Level) -> bool {
    level != Level::Off && level <= self::level()
}

/// Write pre-formatted text to stderr under its lock, flushing if asked.
pub(crate) fn write_stderr(args: std::fmt::Arguments<'_>) -> std::io::Result<()> {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    handle.write_fmt(args)?;
    if flush_enabled() {
        handle.flush()?;
    }
    Ok(())
}

#[doc(hidden)]
pub fn _log_impl(level: Level, args: std::fmt::Arguments<'_>) {
    if !enabled(level) {
        return;
    }
    let _ = write_stderr(format_args!("{} {}\n", level.tag(), args));
}

#[macro_export]
macro_rules! eerror {
    ($($arg:tt)*) => {
        $crate::log::_log_impl($crate::log::Level::Error, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! ewarn {
    ($($arg:tt)*) => {
        $crate::log::_log_impl($crate::log::Level::Warn, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! einfo {
    ($($arg:tt)*) => {
        $crate::log::_log_impl($crate::log::Level::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! edebug {
    ($($arg:tt)*) => {
        $crate::log::_log_impl($crate::log::Level::Debug, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! etrace {
    ($($arg:tt)*) => {
        $crate::log::_log_impl($crate::log::Level::Trace, format_args!($($arg)*))
    };
}
