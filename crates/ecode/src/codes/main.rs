crate::error_module! {
    pub MAIN: MODULE_MAIN = 1, "main.rs" {
        ERR_NO_MEMORY = 1 => "Could not allocate memory",
        ERR_WRITE_FAIL = 2 => "Write failed",
    }
}
