//! End-to-end behaviour of the codec and the built-in registry.

use ecode::codes::*;
use ecode::{
    canonical_eq, check, decode, encode, encode_global, is_error, is_global, propagate, raise,
    Config, Decoded, ErrorCode, Level, LineField, MAX_LINE, UNDEFINED_ERROR, UNDEFINED_MODULE,
};

mod example {
    use super::*;

    pub const ERR_MODULE: u8 = MODULE_EXAMPLE;

    pub fn fail_first() -> ErrorCode {
        raise!(ERR_EXAMPLE_1_FAIL)
    }

    pub fn fail_generic() -> ErrorCode {
        raise!(ERR_GENERIC)
    }

    pub fn succeed() -> ErrorCode {
        raise!(ERR_NONE)
    }

    pub fn bounded(n: u32) -> ErrorCode {
        check!(n < 10, ERR_INVAL);
        ERR_NONE
    }

    pub fn bounded_result(n: u32) -> Result<u32, ErrorCode> {
        check!(n < 10, ERR_EXAMPLE_2_FAIL, Err);
        Ok(n * 2)
    }
}

mod main_module {
    use super::*;

    const ERR_MODULE: u8 = MODULE_MAIN;

    pub fn forward(fail: bool) -> ErrorCode {
        let code = if fail { example::fail_first() } else { example::succeed() };
        propagate!(code);
        raise!(ERR_WRITE_FAIL)
    }
}

#[test]
fn example_error_at_line_42() {
    let code = encode(2, 1, 42);
    assert_eq!(
        decode(code),
        Decoded {
            is_error: true,
            is_global: false,
            resolution: 0,
            line: 42,
            module: 2,
            code: 1,
        }
    );
    let entry = REGISTRY.lookup_error(code).expect("registered");
    assert_eq!(entry.name(), "ERR_EXAMPLE_1_FAIL");
    assert_eq!(REGISTRY.error_name(code), "ERR_EXAMPLE_1_FAIL");
    #[cfg(not(feature = "production"))]
    assert_eq!(REGISTRY.error_description(code), "Example 1 failure.");
}

#[test]
fn global_error_from_example_module() {
    let code = encode_global(MODULE_EXAMPLE, ERR_GENERIC.code(), 100);
    assert!(is_error(code));
    assert!(is_global(code));
    assert_eq!(code.line(), 100);

    let module = REGISTRY.lookup_module(code).expect("global module");
    assert_eq!(module.id(), MODULE_GLOBAL);
    assert_eq!(module.name(), "GLOBAL");
    assert_eq!(REGISTRY.error_name(code), "ERR_GENERIC");
}

#[test]
fn success_is_canonical() {
    for module in [0u8, 1, 2, 200] {
        for line in [1, 42, 5000, MAX_LINE] {
            assert_eq!(encode(module, 0, line), ErrorCode::SUCCESS);
        }
    }
    assert!(!is_error(ErrorCode::SUCCESS));
    assert_eq!(example::succeed(), ErrorCode::SUCCESS);
}

#[test]
fn same_error_different_sites() {
    let a = encode(MODULE_MAIN, 2, 10);
    let b = encode(MODULE_MAIN, 2, 30_000);
    assert_ne!(a, b);
    assert!(canonical_eq(a, b));
    assert_eq!(REGISTRY.error_name(a), REGISTRY.error_name(b));
}

#[test]
fn tier_boundaries() {
    for boundary in [4096u32, 12288, 28672] {
        let below = LineField::encode(boundary);
        let above = LineField::encode(boundary + 1);
        assert_eq!(below.line(), boundary, "last line of a tier is exact");
        assert_eq!(above.resolution(), below.resolution() + 1);
        assert_eq!(above.first_line(), boundary + 1, "next tier starts right after");
        assert!(above.line_range().contains(&(boundary + 1)));

        let code = encode(MODULE_EXAMPLE, 1, boundary);
        assert_eq!(code.line(), boundary);
    }
}

#[test]
fn unregistered_codes_degrade() {
    let code = encode(42, 1, 7);
    assert!(REGISTRY.lookup_module(code).is_none());
    assert!(REGISTRY.lookup_error(code).is_none());
    assert_eq!(REGISTRY.module_name(code), UNDEFINED_MODULE);
    assert_eq!(REGISTRY.error_name(code), UNDEFINED_ERROR);

    let code = encode(MODULE_EXAMPLE, 99, 7);
    assert_eq!(REGISTRY.module_name(code), "EXAMPLE");
    assert_eq!(REGISTRY.error_name(code), UNDEFINED_ERROR);
}

#[test]
fn raise_pins_the_call_site() {
    let line = line!() + 1;
    let code = raise!(ERR_EXAMPLE_2_FAIL, module = MODULE_EXAMPLE);
    assert_eq!(code.line(), line);
    assert_eq!(code.module(), MODULE_EXAMPLE);
    assert!(code.canonical_eq(ERR_EXAMPLE_2_FAIL));
}

#[test]
fn raise_from_module_scope() {
    let code = example::fail_first();
    assert!(code.canonical_eq(ERR_EXAMPLE_1_FAIL));
    assert!(code.line() > 0);

    let code = example::fail_generic();
    assert!(code.is_global());
    assert_eq!(code.module(), MODULE_EXAMPLE);
    assert_eq!(REGISTRY.module_name(code), "GLOBAL");
}

#[test]
fn check_returns_raised_code() {
    assert_eq!(example::bounded(3), ERR_NONE);
    let code = example::bounded(30);
    assert!(code.canonical_eq(ERR_INVAL));
    assert_eq!(code.module(), MODULE_EXAMPLE);

    assert_eq!(example::bounded_result(4), Ok(8));
    let err = example::bounded_result(11).unwrap_err();
    assert!(err.canonical_eq(ERR_EXAMPLE_2_FAIL));
}

#[test]
fn propagate_keeps_origin() {
    let inner = example::fail_first();
    let outer = main_module::forward(true);
    assert_eq!(outer, inner);
    assert_eq!(outer.module(), MODULE_EXAMPLE);

    let own = main_module::forward(false);
    assert!(own.canonical_eq(ERR_WRITE_FAIL));
    assert_eq!(own.module(), MODULE_MAIN);
}

#[test]
fn codes_are_thread_safe() {
    let handles: Vec<_> = (1..=4u8)
        .map(|c| {
            std::thread::spawn(move || {
                let code = encode(MODULE_MAIN, c, 100 * c as u32);
                (REGISTRY.error_name(code), code.line())
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], ("ERR_NO_MEMORY", 100));
    assert_eq!(results[1], ("ERR_WRITE_FAIL", 200));
    assert_eq!(results[2], (UNDEFINED_ERROR, 300));
}

#[cfg(not(feature = "production"))]
#[test]
fn rendered_block() {
    let mut out = Vec::new();
    REGISTRY.render(encode(MODULE_EXAMPLE, 1, 42), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "***** ::\n\
         Error   : 0x80290201\n\
         Module  : EXAMPLE - example.rs:42\n\
         Details : ERR_EXAMPLE_1_FAIL - Example 1 failure.\n\
         *****\n\n"
    );
}

#[test]
fn config_detail_reaches_printed_reports() {
    let code = encode(MODULE_EXAMPLE, 1, 5000);
    Config::new().log_level(Level::Error).detail(true).apply();
    let text = REGISTRY.printed_report(code).to_string();
    assert!(text.contains("Origin  : module 2, resolution 1, lines 4999..=5000\n"), "{}", text);
    REGISTRY.print_error(code);
}

#[cfg(feature = "serde")]
#[test]
fn serde_is_raw_i32() {
    let code = encode(MODULE_EXAMPLE, 1, 42);
    let json = serde_json::to_string(&code).unwrap();
    assert_eq!(json, code.raw().to_string());
    let back: ErrorCode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, code);
}
