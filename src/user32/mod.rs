//! Lazily-bound `user32.dll` surface.
//!
//! [`User32`] owns a [`SymbolCache`] aimed at `user32.dll`. Constructing
//! it touches nothing: the library opens on the first wrapper call or
//! preload, each export links at most once, and bound entry points stay
//! valid for the life of the process.
//!
//! # Example
//!
//! ```no_run
//! use user32_dyn::ffi::memory::wide;
//! use user32_dyn::user32::consts::{MB_ICONINFORMATION, MB_OK};
//! use user32_dyn::user32::User32;
//!
//! let mut user32 = User32::new();
//! let text = wide("Hello from user32-dyn!");
//! let caption = wide("Welcome");
//! let result = unsafe {
//!     user32.MessageBoxW(
//!         std::ptr::null_mut(),
//!         text.as_ptr(),
//!         caption.as_ptr(),
//!         MB_OK | MB_ICONINFORMATION,
//!     )?
//! };
//! println!("MessageBox returned: {}", result);
//! # Ok::<(), user32_dyn::BindError>(())
//! ```

mod api;
pub mod consts;
pub mod windef;

pub use api::{Export, TABLE};

use crate::error::BindResult;
use crate::ffi::cache::SymbolCache;
use crate::ffi::loader::DlLinker;

/// The `user32.dll` binding.
///
/// Every wrapper method resolves its export through the cache on first
/// call; see [`Export`] for the full surface. Methods take `&mut self`
/// because a first call may bind; wrap the value in a lock if it must be
/// shared across threads.
pub struct User32 {
    cache: SymbolCache<DlLinker>,
}

impl User32 {
    /// Create an unbound instance. The library is not opened until the
    /// first wrapper call or preload.
    pub fn new() -> Self {
        User32 {
            cache: SymbolCache::new(&api::TABLE, DlLinker::new(api::TABLE.library)),
        }
    }

    /// Bind the given exports ahead of use, in one batch.
    ///
    /// Already-bound exports are skipped; if any requested export fails
    /// to link, the whole batch fails and binds nothing.
    pub fn preload(&mut self, exports: &[Export]) -> BindResult<()> {
        let names: Vec<&str> = exports.iter().map(|e| e.name()).collect();
        self.cache.preload(&names)
    }

    /// Bind every export in the table that is not bound yet, in one
    /// batch. Idempotent; never re-links.
    pub fn preload_all(&mut self) -> BindResult<()> {
        self.cache.preload_all()
    }

    /// Has this export been bound yet?
    pub fn is_bound(&self, export: Export) -> bool {
        self.cache.is_bound_index(export as usize)
    }

    /// Number of exports bound so far.
    pub fn bound_count(&self) -> usize {
        self.cache.bound_count()
    }
}

impl Default for User32 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_binds_nothing() {
        let user32 = User32::new();
        assert_eq!(user32.bound_count(), 0);
        assert!(!user32.is_bound(Export::MessageBoxW));
        assert!(!user32.is_bound(Export::GetCursorPos));
    }

    #[test]
    fn test_default_matches_new() {
        let user32 = User32::default();
        assert_eq!(user32.bound_count(), 0);
    }

    #[test]
    fn test_table_is_complete() {
        assert_eq!(TABLE.len(), Export::COUNT);
        assert_eq!(TABLE.library, "user32.dll");
    }
}
