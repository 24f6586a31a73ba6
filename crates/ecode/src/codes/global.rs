//! The shared global error space. Any module may raise these.

crate::error_module! {
    /// Errors meaningful in every module.
    pub global GLOBAL: MODULE_GLOBAL = crate::code::GLOBAL_MODULE, "Global error-space" {
        /// Success. Always `0`.
        ERR_NONE = 0 => "No Error / Success",
        ERR_GENERIC = 1 => "Generic error",
        ERR_INVAL = 2 => "Invalid parameter/value",
    }
}
