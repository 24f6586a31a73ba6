/// Raise an error at the current line.
///
/// Needs a `const ERR_MODULE: u8` in scope naming the module the calling
/// code belongs to. The code, module and line are packed at compile time,
/// and raising a local error of any other module fails to compile.
///
/// ```
/// use ecode::raise;
/// use ecode::codes::*;
///
/// const ERR_MODULE: u8 = MODULE_EXAMPLE;
///
/// let e = raise!(ERR_EXAMPLE_1_FAIL);
/// assert!(e.canonical_eq(ERR_EXAMPLE_1_FAIL));
/// assert_eq!(e.line(), line!() - 2);
///
/// let g = raise!(ERR_GENERIC); // global errors are always in scope
/// assert!(g.is_global());
/// ```
///
/// ```compile_fail
/// use ecode::raise;
/// use ecode::codes::*;
///
/// const ERR_MODULE: u8 = MODULE_EXAMPLE;
/// let e = raise!(ERR_NO_MEMORY); // belongs to MODULE_MAIN
/// ```
///
/// The module can also be given explicitly:
///
/// ```ignore
/// raise!(ERR_WRITE_FAIL, module = MODULE_MAIN)
/// ```
#[macro_export]
macro_rules! raise {
    ($code:expr, module = $module:expr) => {{
        const __ECODE_RAISED: $crate::ErrorCode = {
            let code: $crate::ErrorCode = $code;
            let module: u8 = $module;
            ::core::assert!(
                code.in_scope(module),
                "out-of-scope error raised: only global errors or errors of the calling module may be raised"
            );
            code.at(module, ::core::line!())
        };
        __ECODE_RAISED
    }};
    ($code:expr) => {
        $crate::raise!($code, module = ERR_MODULE)
    };
}

/// Return a raised error from the enclosing function if a condition fails.
///
/// The function must return `ErrorCode`, or anything `From<ErrorCode>`
/// wrapped in `Err` when used as `check!(cond, CODE, Err)`.
///
/// ```ignore
/// check!(len <= MAX, ERR_INVAL);
/// ```
#[macro_export]
macro_rules! check {
    ($cond:expr, $code:expr, Err) => {
        if !$cond {
            return ::core::result::Result::Err($crate::raise!($code).into());
        }
    };
    ($cond:expr, $code:expr) => {
        if !$cond {
            return $crate::raise!($code);
        }
    };
}

/// Return a received error code unchanged, keeping its original module
/// and line. Non-error values pass through as the expression's value.
///
/// ```ignore
/// let n = propagate!(read_count(dev));
/// ```
#[macro_export]
macro_rules! propagate {
    ($expr:expr) => {{
        let __code: $crate::ErrorCode = $expr;
        if __code.is_error() {
            return __code;
        }
        __code
    }};
}

/// Declare a module's error table.
///
/// Generates a `u8` module-id constant, one `ErrorCode` constant per entry,
/// and a `static` [`Module`](crate::Module) for the registry. Entry id `0`
/// declares success. Use `global` for the shared error space.
///
/// ```
/// ecode::error_module! {
///     /// Disk driver.
///     pub DISK: MODULE_DISK = 7, "disk.rs" {
///         ERR_DISK_FULL = 1 => "No space left",
///         ERR_DISK_GONE = 2 => "Device removed",
///     }
/// }
///
/// assert_eq!(MODULE_DISK, 7);
/// assert_eq!(ERR_DISK_FULL.module(), 7);
/// assert_eq!(DISK.entries().len(), 2);
/// assert_eq!(DISK.entry(2).map(|e| e.name()), Some("ERR_DISK_GONE"));
/// ```
#[macro_export]
macro_rules! error_module {
    (@code global, $id_name:ident, $code:expr) => {
        $crate::ErrorCode::global($code)
    };
    (@code local, $id_name:ident, $code:expr) => {
        $crate::ErrorCode::local($id_name, $code)
    };
    (
        @emit $kind:ident;
        $(#[$meta:meta])*
        $vis:vis $name:ident : $id_name:ident = $id:expr, $desc:literal {
            $( $(#[$emeta:meta])* $err:ident = $code:expr => $edesc:literal ),*
        }
    ) => {
        $vis const $id_name: u8 = $id;

        $(
            $(#[$emeta])*
            $vis const $err: $crate::ErrorCode = $crate::error_module!(@code $kind, $id_name, $code);
        )*

        $(#[$meta])*
        $vis static $name: $crate::Module = {
            const ENTRIES: &[$crate::ErrorEntry] = &[
                $( $crate::ErrorEntry::new($code, ::core::stringify!($err), $edesc) ),*
            ];
            $crate::Module::new($id_name, ::core::stringify!($name), $desc, ENTRIES)
        };
    };
    (
        $(#[$meta:meta])*
        $vis:vis global $name:ident : $id_name:ident = $id:expr, $desc:literal {
            $( $(#[$emeta:meta])* $err:ident = $code:expr => $edesc:literal ),* $(,)?
        }
    ) => {
        $crate::error_module! {
            @emit global;
            $(#[$meta])*
            $vis $name : $id_name = $id, $desc {
                $( $(#[$emeta])* $err = $code => $edesc ),*
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident : $id_name:ident = $id:expr, $desc:literal {
            $( $(#[$emeta:meta])* $err:ident = $code:expr => $edesc:literal ),* $(,)?
        }
    ) => {
        $crate::error_module! {
            @emit local;
            $(#[$meta])*
            $vis $name : $id_name = $id, $desc {
                $( $(#[$emeta])* $err = $code => $edesc ),*
            }
        }
    };
}
