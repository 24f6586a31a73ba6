//! Error types for registry validation

use core::fmt;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Problems found in a module table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two modules share an id; lookups only ever see the first
    DuplicateModule { id: u8, first: &'static str, second: &'static str },

    /// Two entries of one module share an id
    DuplicateEntry { module: &'static str, id: u8 },

    /// Id 0 is success and belongs to the global module only
    ReservedId { module: &'static str, name: &'static str },

    /// No module is registered under the global id
    MissingGlobal,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateModule { id, first, second } => {
                write!(f, "module id {} used by both {} and {}", id, first, second)
            }
            RegistryError::DuplicateEntry { module, id } => {
                write!(f, "error id {} defined twice in module {}", id, module)
            }
            RegistryError::ReservedId { module, name } => {
                write!(f, "{} in module {} uses reserved id 0", name, module)
            }
            RegistryError::MissingGlobal => write!(f, "no global module registered"),
        }
    }
}

impl std::error::Error for RegistryError {}
