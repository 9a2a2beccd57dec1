//! Shared-library access behind the [`Linker`] capability.
//!
//! The cache does not talk to the platform loader directly; it asks a
//! `Linker` to resolve batches of names. [`DlLinker`] is the production
//! implementation over `libloading`; tests substitute counting fakes.

use std::ffi::c_void;

use log::{debug, trace};

use crate::error::{BindError, BindResult};

/// Address of one bound export.
///
/// Comparing two `RawSymbol`s compares addresses; the cache relies on
/// this to guarantee that repeated resolution observes the same callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSymbol(*const c_void);

impl RawSymbol {
    pub fn new(addr: *const c_void) -> Self {
        RawSymbol(addr)
    }

    /// The raw entry-point address. Reinterpret it as a concrete function
    /// pointer type matching the export's signature before calling.
    pub fn addr(self) -> *const c_void {
        self.0
    }
}

/// Host capability the cache builds on: resolve a batch of one or more
/// export names against a single shared library.
///
/// The batch is all-or-nothing. Implementations must either return one
/// address per requested name, in request order, or fail without partial
/// results; the cache commits nothing from a failed batch.
pub trait Linker {
    fn link(&mut self, names: &[&'static str]) -> BindResult<Vec<RawSymbol>>;
}

/// [`Linker`] over the platform dynamic loader.
///
/// The library is opened lazily on the first link and stays open for the
/// life of the process; resolved addresses remain valid exactly as long.
/// There is no unload path.
pub struct DlLinker {
    path: String,
    lib: Option<libloading::Library>,
}

impl DlLinker {
    /// Create a linker for `path`. Nothing is opened until the first
    /// [`Linker::link`] call.
    pub fn new(path: impl Into<String>) -> Self {
        DlLinker {
            path: path.into(),
            lib: None,
        }
    }

    /// Library name or path this linker resolves against.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the underlying library has been opened yet.
    pub fn is_open(&self) -> bool {
        self.lib.is_some()
    }

    fn ensure_open(&mut self) -> BindResult<&libloading::Library> {
        if self.lib.is_none() {
            let lib = unsafe { libloading::Library::new(&self.path) }
                .map_err(|e| BindError::library_open(&self.path, e.to_string()))?;
            debug!("opened library {}", self.path);
            self.lib = Some(lib);
        }
        match self.lib.as_ref() {
            Some(lib) => Ok(lib),
            None => unreachable!("library was just opened"),
        }
    }
}

impl Linker for DlLinker {
    fn link(&mut self, names: &[&'static str]) -> BindResult<Vec<RawSymbol>> {
        let library = self.path.clone();
        let lib = self.ensure_open()?;

        // Collect every address before the caller commits anything, so a
        // missing export partway through the batch resolves nothing.
        let mut out = Vec::with_capacity(names.len());
        for &name in names {
            let addr = unsafe { lib.get::<*const c_void>(name.as_bytes()) }
                .map(|sym| RawSymbol::new(*sym))
                .map_err(|e| BindError::link(&library, name, e.to_string()))?;
            out.push(addr);
        }
        trace!("linked {} symbol(s) from {}", out.len(), library);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_os = "linux")]
    fn libc_linker() -> DlLinker {
        for path in [
            "/lib/x86_64-linux-gnu/libc.so.6",
            "/lib64/libc.so.6",
            "libc.so.6",
        ] {
            let mut linker = DlLinker::new(path);
            if linker.link(&["strlen"]).is_ok() {
                return DlLinker::new(path);
            }
        }
        panic!("could not open libc from any standard path");
    }

    #[test]
    fn test_nothing_opened_eagerly() {
        let linker = DlLinker::new("/nonexistent/library.so");
        assert!(!linker.is_open());
        assert_eq!(linker.path(), "/nonexistent/library.so");
    }

    #[test]
    fn test_missing_library() {
        let mut linker = DlLinker::new("/nonexistent/library.so");
        let err = linker.link(&["strlen"]).unwrap_err();
        assert!(matches!(err, BindError::LibraryOpen { .. }));
        assert!(!linker.is_open());
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_link_strlen() {
        let mut linker = libc_linker();
        let syms = linker.link(&["strlen"]).unwrap();
        assert_eq!(syms.len(), 1);
        assert!(!syms[0].addr().is_null());
        assert!(linker.is_open());
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_link_batch() {
        let mut linker = libc_linker();
        let syms = linker.link(&["strlen", "abs", "getpid"]).unwrap();
        assert_eq!(syms.len(), 3);
        // Distinct exports land at distinct addresses.
        assert_ne!(syms[0], syms[1]);
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_link_missing_symbol() {
        let mut linker = libc_linker();
        let err = linker
            .link(&["strlen", "this_function_does_not_exist_in_libc_12345"])
            .unwrap_err();
        assert!(matches!(err, BindError::Link { .. }));
    }
}
