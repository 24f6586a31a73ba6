//! Name/description tables for decoded error codes.
//!
//! Everything here is read-only after construction. A [`Registry`] is a
//! borrowed slice of [`Module`]s, each owning a slice of [`ErrorEntry`]s.
//! Lookups are linear scans; the first match wins.

use crate::code::{ErrorCode, GLOBAL_MODULE};
use crate::error::{RegistryError, RegistryResult};

/// Module name reported when no table matches.
pub const UNDEFINED_MODULE: &str = "UNDEFINED_MODULE";

/// Error name reported when no table matches.
pub const UNDEFINED_ERROR: &str = "UNDEFINED_ERROR";

cfg_if::cfg_if! {
    if #[cfg(feature = "production")] {
        #[derive(Clone, Copy, Debug)]
        struct Text;

        impl Text {
            #[inline]
            const fn new(_s: &'static str) -> Self {
                Text
            }

            #[inline]
            const fn get(&self) -> &'static str {
                ""
            }
        }
    } else {
        #[derive(Clone, Copy, Debug)]
        struct Text(&'static str);

        impl Text {
            #[inline]
            const fn new(s: &'static str) -> Self {
                Text(s)
            }

            #[inline]
            const fn get(&self) -> &'static str {
                self.0
            }
        }
    }
}

/// One named error of a module.
#[derive(Clone, Copy, Debug)]
pub struct ErrorEntry {
    id: u8,
    name: &'static str,
    description: Text,
}

impl ErrorEntry {
    /// Entry `id` named `name`. Id `0` is reserved for success.
    pub const fn new(id: u8, name: &'static str, description: &'static str) -> Self {
        Self {
            id,
            name,
            description: Text::new(description),
        }
    }

    /// Per-module id.
    #[inline]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Constant name, e.g. `ERR_GENERIC`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Empty in `production` builds.
    #[inline]
    pub const fn description(&self) -> &'static str {
        self.description.get()
    }
}

/// A module and its error table.
#[derive(Clone, Copy, Debug)]
pub struct Module {
    id: u8,
    name: &'static str,
    description: Text,
    entries: &'static [ErrorEntry],
}

impl Module {
    /// Table for module `id`. Usually built by `error_module!`.
    pub const fn new(
        id: u8,
        name: &'static str,
        description: &'static str,
        entries: &'static [ErrorEntry],
    ) -> Self {
        Self {
            id,
            name,
            description: Text::new(description),
            entries,
        }
    }

    #[inline]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Table name, e.g. `GLOBAL`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Empty in `production` builds.
    #[inline]
    pub const fn description(&self) -> &'static str {
        self.description.get()
    }

    /// Entries in declaration order.
    #[inline]
    pub const fn entries(&self) -> &'static [ErrorEntry] {
        self.entries
    }

    /// True for the shared global table.
    #[inline]
    pub const fn is_global(&self) -> bool {
        self.id == GLOBAL_MODULE
    }

    /// Entry with per-module id `id`.
    pub fn entry(&self, id: u8) -> Option<&'static ErrorEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

/// The set of modules known to the diagnostics layer.
#[derive(Clone, Copy, Debug)]
pub struct Registry<'a> {
    modules: &'a [&'a Module],
}

impl<'a> Registry<'a> {
    /// Registry over `modules`. Earlier modules win on duplicate ids.
    pub const fn new(modules: &'a [&'a Module]) -> Self {
        Self { modules }
    }

    /// Modules in lookup order.
    #[inline]
    pub fn modules(&self) -> &'a [&'a Module] {
        self.modules
    }

    fn module_by_id(&self, id: u8) -> Option<&'a Module> {
        self.modules.iter().copied().find(|m| m.id == id)
    }

    /// Module that owns `code`. Global codes always resolve to the global
    /// module, whatever their MODULE field says.
    pub fn lookup_module(&self, code: ErrorCode) -> Option<&'a Module> {
        let found = self.module_by_id(code.owner());
        if found.is_none() {
            etrace!("no module {} for {}", code.owner(), code);
        }
        found
    }

    /// Table entry for `code`. Only errors and success are looked up.
    pub fn lookup_error(&self, code: ErrorCode) -> Option<&'static ErrorEntry> {
        if !code.is_error() && !code.is_success() {
            return None;
        }
        let found = self.lookup_module(code)?.entry(code.code());
        if found.is_none() {
            etrace!("no entry {} in module {} for {}", code.code(), code.owner(), code);
        }
        found
    }

    /// Name of the owning module, or [`UNDEFINED_MODULE`].
    pub fn module_name(&self, code: ErrorCode) -> &'a str {
        self.lookup_module(code).map_or(UNDEFINED_MODULE, |m| m.name())
    }

    /// Description of the owning module, or empty.
    pub fn module_description(&self, code: ErrorCode) -> &'a str {
        self.lookup_module(code).map_or("", |m| m.description())
    }

    /// Name of the table entry, or [`UNDEFINED_ERROR`].
    pub fn error_name(&self, code: ErrorCode) -> &'static str {
        self.lookup_error(code).map_or(UNDEFINED_ERROR, |e| e.name())
    }

    /// Description of the table entry, or empty.
    pub fn error_description(&self, code: ErrorCode) -> &'static str {
        self.lookup_error(code).map_or("", |e| e.description())
    }

    /// Check the tables for ambiguities lookups would silently resolve.
    ///
    /// Every problem is logged at warn level; the first one is returned.
    pub fn validate(&self) -> RegistryResult<()> {
        let problems = self.problems();
        for p in &problems {
            ewarn!("registry: {}", p);
        }
        match problems.into_iter().next() {
            Some(p) => Err(p),
            None => Ok(()),
        }
    }

    /// Every problem [`Registry::validate`] would report.
    pub fn problems(&self) -> Vec<RegistryError> {
        let mut out = Vec::new();

        if self.module_by_id(GLOBAL_MODULE).is_none() {
            out.push(RegistryError::MissingGlobal);
        }

        for (i, m) in self.modules.iter().enumerate() {
            if let Some(first) = self.modules[..i].iter().find(|o| o.id == m.id) {
                out.push(RegistryError::DuplicateModule {
                    id: m.id,
                    first: first.name,
                    second: m.name,
                });
            }

            for (j, e) in m.entries.iter().enumerate() {
                if e.id == 0 && !m.is_global() {
                    out.push(RegistryError::ReservedId { module: m.name, name: e.name });
                }
                if m.entries[..j].iter().any(|o| o.id == e.id) {
                    out.push(RegistryError::DuplicateEntry { module: m.name, id: e.id });
                }
            }
        }

        out
    }
}
