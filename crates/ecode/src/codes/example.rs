crate::error_module! {
    pub EXAMPLE: MODULE_EXAMPLE = 2, "example.rs" {
        ERR_EXAMPLE_1_FAIL = 1 => "Example 1 failure.",
        ERR_EXAMPLE_2_FAIL = 2 => "Example 2 failure.",
    }
}
