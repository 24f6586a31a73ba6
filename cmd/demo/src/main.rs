//! ecode demo
//!
//! Raises a few errors from two modules and prints their reports.
//!
//! # Environment Variables
//!
//! - `ECODE_LOG_LEVEL=debug` - Set log level (off, error, warn, info, debug, trace)
//! - `ECODE_FLUSH_EPRINT=1` - Flush stderr after every write
//! - `ECODE_DETAIL=1` - Add raising module, resolution and line range to reports

use ecode::codes::*;
use ecode::{einfo, raise, Config, ErrorCode};

const ERR_MODULE: u8 = MODULE_EXAMPLE;

/// Stand-in for code in another module: returns a value, or an error.
mod numbers {
    use ecode::codes::*;
    use ecode::{check, raise, ErrorCode};

    const ERR_MODULE: u8 = MODULE_MAIN;

    /// `1` fails with a local error, `2` with a global one, anything else
    /// is returned doubled.
    pub fn get_number(which: i32) -> i32 {
        match which {
            1 => raise!(ERR_NO_MEMORY).raw(),
            2 => raise!(ERR_INVAL).raw(),
            n => n * 2,
        }
    }

    pub fn write_all(buf: &[u8]) -> ErrorCode {
        check!(!buf.is_empty(), ERR_WRITE_FAIL);
        ERR_NONE
    }
}

// ECODE_LOG_LEVEL=info ECODE_DETAIL=1 cargo run -p ecode-demo
fn main() {
    println!("=== ecode demo ===\n");

    Config::default().apply();

    if let Err(e) = REGISTRY.validate() {
        eprintln!("built-in registry is inconsistent: {}", e);
        std::process::exit(1);
    }
    einfo!("registry: {} modules", REGISTRY.modules().len());

    // Success is always 0, however it is produced.
    let mut code = raise!(ERR_NONE);
    REGISTRY.print_error(code);
    code = ERR_NONE;
    REGISTRY.print_error(code);

    // Any module may raise a global error.
    code = raise!(ERR_GENERIC);
    REGISTRY.print_error(code);

    // Raising another module's local error does not compile:
    // code = raise!(ERR_NO_MEMORY);

    if code.canonical_eq(ERR_GENERIC) {
        println!("Encountered ERR_GENERIC, continuing...\n");
    }

    // Errors from other modules are passed on unchanged.
    if let Err(e) = ErrorCode::check_value(numbers::get_number(1)) {
        REGISTRY.print_error(e);
    }

    // Negative is an error, anything else is a value.
    match ErrorCode::check_value(numbers::get_number(2)) {
        Ok(v) => println!("got {}", v),
        Err(e) => REGISTRY.print_error(e),
    }
    match ErrorCode::check_value(numbers::get_number(21)) {
        Ok(v) => println!("got {}\n", v),
        Err(e) => REGISTRY.print_error(e),
    }

    let written = numbers::write_all(&[]);
    if written.is_error() {
        let mut stdout = std::io::stdout();
        if let Err(e) = REGISTRY.render(written, &mut stdout) {
            eprintln!("could not write report: {}", e);
        }
    }

    // Far down a long file the line is only known to a bucket; the origin
    // line shows it when detail is on.
    let far = ecode::encode(MODULE_EXAMPLE, ERR_EXAMPLE_2_FAIL.code(), 30_001);
    REGISTRY.print_error(far);

    std::process::exit(ERR_NONE.raw() | raise!(ERR_NONE).raw());
}
