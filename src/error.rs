//! Error types for the binding layer.
//!
//! Replaces generic `Result<T, String>` with a typed error enum so callers
//! can tell an unknown name from a missing library from a missing export.

use std::error::Error as StdError;
use std::fmt;

/// Errors produced while binding exports against a shared library.
///
/// All three kinds propagate synchronously to the caller of the failing
/// `resolve`/`preload`; the cache never retries, logs-and-swallows, or
/// falls back. A failed bind leaves its registry slot unbound, so a later
/// call may retry once the environment changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The requested name is not in the descriptor table. Detected before
    /// any linking is attempted; recoverable by fixing the name.
    UnknownSymbol { name: String },

    /// The shared library itself could not be located or opened. Fatal to
    /// every subsequent bind until the library becomes available.
    LibraryOpen { path: String, reason: String },

    /// The library opened, but the named export does not exist in it
    /// (platform or version mismatch). Scoped to the requested symbol(s).
    Link {
        library: String,
        symbol: String,
        reason: String,
    },
}

/// Result alias used throughout the binding layer.
pub type BindResult<T> = Result<T, BindError>;

impl BindError {
    pub fn unknown_symbol(name: impl Into<String>) -> Self {
        BindError::UnknownSymbol { name: name.into() }
    }

    pub fn library_open(path: impl Into<String>, reason: impl Into<String>) -> Self {
        BindError::LibraryOpen {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn link(
        library: impl Into<String>,
        symbol: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BindError::Link {
            library: library.into(),
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Get a human-readable description of the error
    pub fn description(&self) -> String {
        match self {
            BindError::UnknownSymbol { name } => {
                format!("Unknown symbol: '{}' is not in the export table", name)
            }
            BindError::LibraryOpen { path, reason } => {
                format!("Failed to open library '{}': {}", path, reason)
            }
            BindError::Link {
                library,
                symbol,
                reason,
            } => {
                format!("Symbol '{}' not found in {}: {}", symbol, library, reason)
            }
        }
    }
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl StdError for BindError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_symbol_description() {
        let err = BindError::unknown_symbol("NotAFunction");
        assert_eq!(
            err.description(),
            "Unknown symbol: 'NotAFunction' is not in the export table"
        );
    }

    #[test]
    fn test_library_open_description() {
        let err = BindError::library_open("user32.dll", "file not found");
        assert_eq!(
            err.description(),
            "Failed to open library 'user32.dll': file not found"
        );
    }

    #[test]
    fn test_link_description() {
        let err = BindError::link("user32.dll", "MessageBoxZ", "undefined symbol");
        assert_eq!(
            err.description(),
            "Symbol 'MessageBoxZ' not found in user32.dll: undefined symbol"
        );
    }

    #[test]
    fn test_display_matches_description() {
        let err = BindError::unknown_symbol("Foo");
        assert_eq!(err.to_string(), err.description());
    }
}
