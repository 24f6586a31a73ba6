//! The packed 32-bit error code.
//!
//! ```text
//!  31  30  29..28   27..16        15..8    7..0
//! ┌───┬───┬───────┬────────────┬────────┬────────┐
//! │ E │ G │  RES  │ LINE-FIELD │ MODULE │  CODE  │
//! └───┴───┴───────┴────────────┴────────┴────────┘
//! ```
//!
//! `E` makes every error negative as an `i32`. `G` marks the shared global
//! error space. `RES` + `LINE-FIELD` hold the call-site line (see
//! [`crate::line`]). `0` is the one and only success value.

use core::fmt;
use core::ops::RangeInclusive;

use crate::line::LineField;

/// Set on every error.
pub const ERROR_BIT: u32 = 0x8000_0000;
/// Set on errors from the shared global space.
pub const GLOBAL_BIT: u32 = 0x4000_0000;
/// Line resolution selector, bits 29..28.
pub const RESOLUTION_MASK: u32 = 0x3000_0000;
/// 12-bit line field, bits 27..16.
pub const LINE_MASK: u32 = 0x0fff_0000;
/// Module id, bits 15..8.
pub const MODULE_MASK: u32 = 0x0000_ff00;
/// Per-module error id, bits 7..0.
pub const CODE_MASK: u32 = 0x0000_00ff;

/// Bits that identify the kind of error, independent of call site.
pub const KIND_MASK: u32 = ERROR_BIT | GLOBAL_BIT | MODULE_MASK | CODE_MASK;

const RESOLUTION_SHIFT: u32 = 28;
const LINE_SHIFT: u32 = 16;
const MODULE_SHIFT: u32 = 8;

/// Module id of the shared global error space.
pub const GLOBAL_MODULE: u8 = 0;

/// A flat, self-describing error code.
///
/// Definitions (`ErrorCode::local`, `ErrorCode::global`) carry no line.
/// Raising one with [`ErrorCode::at`] or `raise!` pins the call site.
///
/// Two raises of the same definition at different lines are different
/// values; compare with [`ErrorCode::canonical_eq`], not `==`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct ErrorCode(i32);

impl ErrorCode {
    /// The success value.
    pub const SUCCESS: ErrorCode = ErrorCode(0);

    /// Wrap a raw value as received from a C-style return.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// The packed `i32`.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    const fn bits(self) -> u32 {
        self.0 as u32
    }

    /// Define a module-local error. Code `0` is success.
    ///
    /// ```
    /// use ecode::ErrorCode;
    /// const ERR_TIMEOUT: ErrorCode = ErrorCode::local(4, 7);
    /// assert!(ERR_TIMEOUT.is_error());
    /// assert_eq!(ERR_TIMEOUT.module(), 4);
    /// assert_eq!(ErrorCode::local(4, 0), ErrorCode::SUCCESS);
    /// ```
    #[inline]
    pub const fn local(module: u8, code: u8) -> Self {
        if code == 0 {
            return Self::SUCCESS;
        }
        Self((ERROR_BIT | ((module as u32) << MODULE_SHIFT) | code as u32) as i32)
    }

    /// Define an error in the global space. Code `0` is success.
    #[inline]
    pub const fn global(code: u8) -> Self {
        if code == 0 {
            return Self::SUCCESS;
        }
        Self((ERROR_BIT | GLOBAL_BIT | code as u32) as i32)
    }

    /// Pin this error to a call site.
    ///
    /// Success stays `0`. A local error keeps the module it was defined in;
    /// a global error records `module` as the raiser. Any previous line is
    /// replaced.
    pub const fn at(self, module: u8, line: u32) -> Self {
        if self.is_success() {
            return Self::SUCCESS;
        }
        let lf = LineField::encode(line);
        let mut bits = self.bits() & !(RESOLUTION_MASK | LINE_MASK);
        if self.is_global() {
            bits = (bits & !MODULE_MASK) | ((module as u32) << MODULE_SHIFT);
        }
        bits |= (lf.resolution() << RESOLUTION_SHIFT) & RESOLUTION_MASK;
        bits |= (lf.field() << LINE_SHIFT) & LINE_MASK;
        Self(bits as i32)
    }

    /// True if `self` may be raised from `module`: success, any global
    /// error, or a local error of `module` itself.
    #[inline]
    pub const fn in_scope(self, module: u8) -> bool {
        self.is_success() || self.is_global() || self.module() == module
    }

    /// True for anything that is not an error.
    #[inline]
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }

    /// True if the error bit is set.
    #[inline]
    pub const fn is_error(self) -> bool {
        self.bits() & ERROR_BIT != 0
    }

    /// True if the code is in the global error space.
    #[inline]
    pub const fn is_global(self) -> bool {
        self.bits() & GLOBAL_BIT != 0
    }

    /// Line resolution `0..=3`. Each step halves the line precision.
    #[inline]
    pub const fn resolution(self) -> u32 {
        (self.bits() & RESOLUTION_MASK) >> RESOLUTION_SHIFT
    }

    /// Raw 12-bit line field.
    #[inline]
    pub const fn line_field(self) -> u32 {
        (self.bits() & LINE_MASK) >> LINE_SHIFT
    }

    #[inline]
    const fn line_parts(self) -> LineField {
        LineField::from_parts(self.resolution(), self.line_field())
    }

    /// Decoded call-site line, or `0` if this is not an error.
    ///
    /// Success reports `0`, not the `1` that a bare decode of an all-zero
    /// line field would give.
    #[inline]
    pub const fn line(self) -> u32 {
        if !self.is_error() {
            return 0;
        }
        self.line_parts().line()
    }

    /// All lines the call site could have been on.
    pub fn line_range(self) -> RangeInclusive<u32> {
        if !self.is_error() {
            return 0..=0;
        }
        self.line_parts().line_range()
    }

    /// MODULE field. For global errors this is the raising module.
    #[inline]
    pub const fn module(self) -> u8 {
        ((self.bits() & MODULE_MASK) >> MODULE_SHIFT) as u8
    }

    /// Module whose table names this code.
    #[inline]
    pub const fn owner(self) -> u8 {
        if self.is_global() {
            GLOBAL_MODULE
        } else {
            self.module()
        }
    }

    /// Per-module error id.
    #[inline]
    pub const fn code(self) -> u8 {
        (self.bits() & CODE_MASK) as u8
    }

    /// The code with its call site stripped: flags, module (local only)
    /// and id. Equal to the definition it was raised from.
    #[inline]
    pub const fn canonical(self) -> Self {
        let mask = if self.is_global() {
            KIND_MASK & !MODULE_MASK
        } else {
            KIND_MASK
        };
        Self((self.bits() & mask) as i32)
    }

    /// Same kind of error, wherever it was raised.
    #[inline]
    pub const fn canonical_eq(self, other: ErrorCode) -> bool {
        self.canonical().0 == other.canonical().0
    }

    /// Unpack every field.
    #[inline]
    pub const fn decode(self) -> Decoded {
        Decoded {
            is_error: self.is_error(),
            is_global: self.is_global(),
            resolution: self.resolution(),
            line: self.line(),
            module: self.module(),
            code: self.code(),
        }
    }

    /// `Ok(())` for anything that is not an error.
    #[inline]
    pub fn into_result(self) -> Result<(), ErrorCode> {
        if self.is_error() {
            Err(self)
        } else {
            Ok(())
        }
    }

    /// Split the "negative is an error, otherwise a value" convention.
    ///
    /// ```
    /// use ecode::ErrorCode;
    /// assert_eq!(ErrorCode::check_value(12), Ok(12));
    /// assert!(ErrorCode::check_value(ErrorCode::global(1).raw()).is_err());
    /// ```
    #[inline]
    pub fn check_value(raw: i32) -> Result<i32, ErrorCode> {
        let code = Self(raw);
        if code.is_error() {
            Err(code)
        } else {
            Ok(raw)
        }
    }
}

/// Encode a module-local error raised at `line`.
#[inline]
pub const fn encode(module: u8, code: u8, line: u32) -> ErrorCode {
    ErrorCode::local(module, code).at(module, line)
}

/// Encode a global error raised from `module` at `line`.
#[inline]
pub const fn encode_global(module: u8, code: u8, line: u32) -> ErrorCode {
    ErrorCode::global(code).at(module, line)
}

/// Unpack every field of `code`.
#[inline]
pub const fn decode(code: ErrorCode) -> Decoded {
    code.decode()
}

/// Every field of an [`ErrorCode`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Decoded {
    pub is_error: bool,
    pub is_global: bool,
    pub resolution: u32,
    pub line: u32,
    pub module: u8,
    pub code: u8,
}

impl From<ErrorCode> for i32 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

impl From<i32> for ErrorCode {
    #[inline]
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.bits())
    }
}

impl fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            return write!(f, "ErrorCode(SUCCESS)");
        }
        f.debug_struct("ErrorCode")
            .field("raw", &format_args!("{:#010x}", self.bits()))
            .field("global", &self.is_global())
            .field("module", &self.module())
            .field("code", &self.code())
            .field("line", &self.line())
            .finish()
    }
}

impl std::error::Error for ErrorCode {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::MAX_LINE;

    const MODULE_NET: u8 = 9;
    const ERR_RESET: ErrorCode = ErrorCode::local(MODULE_NET, 3);
    const ERR_BUSY: ErrorCode = ErrorCode::global(5);

    #[test]
    fn success_is_zero() {
        assert_eq!(ErrorCode::SUCCESS.raw(), 0);
        assert!(!ErrorCode::SUCCESS.is_error());
        assert_eq!(encode(7, 0, 1234), ErrorCode::SUCCESS);
        assert_eq!(encode_global(7, 0, 99), ErrorCode::SUCCESS);
        assert_eq!(ErrorCode::SUCCESS.at(3, 500), ErrorCode::SUCCESS);
    }

    #[test]
    fn errors_are_negative() {
        assert!(ERR_RESET.raw() < 0);
        assert!(encode(255, 255, MAX_LINE).raw() < 0);
    }

    #[test]
    fn encode_decode() {
        let c = encode(2, 1, 42);
        assert_eq!(
            c.decode(),
            Decoded {
                is_error: true,
                is_global: false,
                resolution: 0,
                line: 42,
                module: 2,
                code: 1,
            }
        );
    }

    #[test]
    fn exact_round_trip_for_all_ids() {
        for module in [0u8, 1, 2, 127, 255] {
            for code in 1..=255u8 {
                for line in [1, 2, 100, 4095, 4096] {
                    let d = decode(encode(module, code, line));
                    assert_eq!((d.module, d.code, d.line), (module, code, line));
                    assert!(d.is_error);
                    assert!(!d.is_global);
                }
            }
        }
    }

    #[test]
    fn coarse_lines_stay_in_range() {
        for line in [4097, 9000, 12289, 30001, MAX_LINE] {
            let c = encode(1, 1, line);
            assert!(c.line_range().contains(&line));
            assert_eq!(c.line(), *c.line_range().end());
        }
    }

    #[test]
    fn global_records_raiser() {
        let c = ERR_BUSY.at(2, 100);
        assert!(c.is_global());
        assert_eq!(c.module(), 2);
        assert_eq!(c.owner(), GLOBAL_MODULE);
        assert_eq!(c.line(), 100);
        assert_eq!(c.canonical(), ERR_BUSY);
    }

    #[test]
    fn local_keeps_its_module() {
        let c = ERR_RESET.at(4, 10);
        assert_eq!(c.module(), MODULE_NET);
    }

    #[test]
    fn canonical_ignores_call_site() {
        let a = ERR_RESET.at(MODULE_NET, 10);
        let b = ERR_RESET.at(MODULE_NET, 20_000);
        assert_ne!(a, b);
        assert!(a.canonical_eq(b));
        assert!(a.canonical_eq(ERR_RESET));

        let g1 = ERR_BUSY.at(1, 5);
        let g2 = ERR_BUSY.at(2, 6);
        assert!(g1.canonical_eq(g2));
        assert!(!g1.canonical_eq(ErrorCode::global(6).at(1, 5)));
        assert!(!a.canonical_eq(ErrorCode::local(MODULE_NET + 1, 3).at(MODULE_NET + 1, 10)));
    }

    #[test]
    fn repinning_replaces_line() {
        let c = ERR_RESET.at(MODULE_NET, 30_000).at(MODULE_NET, 12);
        assert_eq!(c.resolution(), 0);
        assert_eq!(c.line(), 12);
    }

    #[test]
    fn scope_rules() {
        assert!(ERR_RESET.in_scope(MODULE_NET));
        assert!(!ERR_RESET.in_scope(1));
        assert!(ERR_BUSY.in_scope(1));
        assert!(ErrorCode::SUCCESS.in_scope(200));
    }

    #[test]
    fn non_errors_have_no_line() {
        assert_eq!(ErrorCode::from_raw(17).line(), 0);
        assert_eq!(ErrorCode::SUCCESS.line_range(), 0..=0);
    }

    #[test]
    fn result_interop() {
        assert_eq!(ErrorCode::SUCCESS.into_result(), Ok(()));
        let c = ERR_RESET.at(MODULE_NET, 3);
        assert_eq!(c.into_result(), Err(c));
        assert_eq!(ErrorCode::check_value(0), Ok(0));
        assert_eq!(ErrorCode::check_value(c.raw()), Err(c));
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(format!("{}", ErrorCode::SUCCESS), "0x00000000");
        assert_eq!(format!("{}", encode(2, 1, 42)), "0x80290201");
    }

    #[test]
    fn debug_shows_fields() {
        assert_eq!(format!("{:?}", ErrorCode::SUCCESS), "ErrorCode(SUCCESS)");
        let s = format!("{:?}", encode(2, 1, 42));
        assert!(s.contains("module: 2"), "{}", s);
        assert!(s.contains("line: 42"), "{}", s);
    }

    #[test]
    fn size_check() {
        assert_eq!(std::mem::size_of::<ErrorCode>(), 4);
    }
}
