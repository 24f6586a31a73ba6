//! Text reports for error codes.
//!
//! ```text
//! ***** ::
//! Error   : 0x80290201
//! Module  : EXAMPLE - example.rs:42
//! Details : ERR_EXAMPLE_1_FAIL - Example 1 failure.
//! *****
//! ```
//!
//! Unregistered codes still render, with `UNDEFINED_MODULE` /
//! `UNDEFINED_ERROR` in place of the names.

use core::fmt;
use std::io;

use crate::code::ErrorCode;
use crate::registry::Registry;

/// `Display` adapter for one code against one registry.
#[derive(Clone, Copy)]
pub struct Report<'r, 'a> {
    registry: &'r Registry<'a>,
    code: ErrorCode,
    detail: bool,
}

impl<'r, 'a> Report<'r, 'a> {
    /// Also print the raising module, resolution and line bucket.
    pub fn detail(mut self, enable: bool) -> Self {
        self.detail = enable;
        self
    }
}

impl fmt::Display for Report<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reg = self.registry;
        let code = self.code;

        writeln!(f, "***** ::")?;
        writeln!(f, "Error   : {}", code)?;
        writeln!(
            f,
            "Module  : {} - {}:{}",
            reg.module_name(code),
            reg.module_description(code),
            code.line()
        )?;
        writeln!(f, "Details : {} - {}", reg.error_name(code), reg.error_description(code))?;
        if self.detail && code.is_error() {
            let range = code.line_range();
            writeln!(
                f,
                "Origin  : module {}, resolution {}, lines {}..={}",
                code.module(),
                code.resolution(),
                range.start(),
                range.end()
            )?;
        }
        writeln!(f, "*****")?;
        writeln!(f)
    }
}

impl<'a> Registry<'a> {
    pub fn report(&self, code: ErrorCode) -> Report<'_, 'a> {
        Report {
            registry: self,
            code,
            detail: false,
        }
    }

    /// Write the report for `code` to `sink`.
    pub fn render<W: io::Write>(&self, code: ErrorCode, sink: &mut W) -> io::Result<()> {
        write!(sink, "{}", self.report(code))
    }

    pub fn render_to_string(&self, code: ErrorCode) -> String {
        self.report(code).to_string()
    }

    /// Write the report to stderr. Detail follows `ECODE_DETAIL` unless a
    /// [`Config`](crate::Config) has been applied.
    pub fn print_error(&self, code: ErrorCode) {
        let _ = crate::log::write_stderr(format_args!("{}", self.printed_report(code)));
    }

    /// The report [`Registry::print_error`] writes.
    pub fn printed_report(&self, code: ErrorCode) -> Report<'_, 'a> {
        self.report(code).detail(crate::log::detail_enabled())
    }
}
