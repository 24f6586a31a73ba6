//! # ecode: Packed Error Codes
//!
//! An error is a single `i32`. It carries the error flag, a global/local
//! flag, the raising module, a per-module error id, and the source line it
//! was raised on, with no allocation and no out-of-band state. A read-only
//! [`Registry`] turns codes back into names and descriptions for
//! diagnostics.
//!
//! ## Layout
//!
//! ```text
//!  31  30  29..28   27..16        15..8    7..0
//!  E   G   RES      LINE-FIELD    MODULE   CODE
//! ```
//!
//! The line field is only 12 bits wide; `RES` picks how many low bits of the
//! line are dropped so files up to [`MAX_LINE`] lines fit (see [`line`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use ecode::{raise, ErrorCode};
//! use ecode::codes::*;
//!
//! const ERR_MODULE: u8 = MODULE_EXAMPLE;
//!
//! fn step(ok: bool) -> ErrorCode {
//!     if !ok {
//!         return raise!(ERR_EXAMPLE_2_FAIL);
//!     }
//!     ERR_NONE
//! }
//!
//! let e = step(false);
//! assert!(e.is_error());
//! assert!(e.canonical_eq(ERR_EXAMPLE_2_FAIL));
//! assert_eq!(REGISTRY.error_name(e), "ERR_EXAMPLE_2_FAIL");
//! assert_eq!(step(true), ErrorCode::SUCCESS);
//! ```
//!
//! ## Feature Flags
//!
//! | Flag         | Effect |
//! |--------------|--------|
//! | `production` | Strips descriptions from module tables at compile time |
//! | `serde`      | `ErrorCode` (de)serialises as its raw `i32` |

#[macro_use]
pub mod log;
#[macro_use]
mod macros;
pub mod config;
pub mod line;
mod code;
mod error;
mod registry;
mod render;
pub mod codes;

// ── Public API ────────────────────────────────────────────────────

pub use code::{
    decode, encode, encode_global, Decoded, ErrorCode, CODE_MASK, ERROR_BIT, GLOBAL_BIT,
    GLOBAL_MODULE, KIND_MASK, LINE_MASK, MODULE_MASK, RESOLUTION_MASK,
};
pub use config::Config;
pub use error::{RegistryError, RegistryResult};
pub use line::{LineField, BINS, MAX_LINE, MAX_RESOLUTION};
pub use log::{set_level as set_log_level, Level};
pub use registry::{ErrorEntry, Module, Registry, UNDEFINED_ERROR, UNDEFINED_MODULE};
pub use render::Report;

/// True if `code` is an error.
#[inline]
pub const fn is_error(code: ErrorCode) -> bool {
    code.is_error()
}

/// True if `code` is in the global error space.
#[inline]
pub const fn is_global(code: ErrorCode) -> bool {
    code.is_global()
}

/// Same kind of error, ignoring where each was raised.
#[inline]
pub const fn canonical_eq(a: ErrorCode, b: ErrorCode) -> bool {
    a.canonical_eq(b)
}
