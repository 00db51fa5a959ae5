//! Elm module name derived from an artist short name.

use std::fmt;

/// Capitalised short name used as the suffix of generated module names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName(String);

impl ModuleName {
    /// Upper-cases the first character of `short_name`.
    ///
    /// Returns `None` for an empty short name.
    #[must_use]
    pub fn from_short_name(short_name: &str) -> Option<Self> {
        let mut chars = short_name.chars();
        let first = chars.next()?;
        Some(Self(first.to_uppercase().chain(chars).collect()))
    }

    /// Returns module name as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the per-artist storage module.
    #[must_use]
    pub fn storage_module(&self) -> String {
        format!("AlbumStorage{}", self.0)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
