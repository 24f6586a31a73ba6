//! Built-in module tables.
//!
//! | Id  | Module    | Contents                                   |
//! |-----|-----------|--------------------------------------------|
//! | `0` | `GLOBAL`  | Shared errors any module may raise         |
//! | `1` | `MAIN`    | Program entry point                        |
//! | `2` | `EXAMPLE` | Demo module                                |
//!
//! Applications that declare their own tables with
//! [`error_module!`](crate::error_module) build their own [`Registry`],
//! usually including [`GLOBAL`] first.
//!
//! ```rust
//! use ecode::codes::*;
//!
//! let e = ecode::encode(MODULE_EXAMPLE, ERR_EXAMPLE_1_FAIL.code(), 42);
//! assert_eq!(REGISTRY.error_name(e), "ERR_EXAMPLE_1_FAIL");
//! ```

mod global;
mod main;
mod example;

pub use global::*;
pub use main::*;
pub use example::*;

use crate::registry::{Module, Registry};

static MODULES: [&Module; 3] = [&GLOBAL, &MAIN, &EXAMPLE];

/// Registry over every built-in table.
pub static REGISTRY: Registry<'static> = Registry::new(&MODULES);
