//! # user32-dyn - lazily-bound `user32.dll` for scripting hosts
//!
//! A binding layer over the `user32.dll` export table, loaded at runtime
//! through the platform dynamic loader instead of link-time imports.
//! Every export is declared twice: once as a raw signature in a static
//! descriptor table, and once as a typed wrapper method that binds the
//! export on first call.
//!
//! ## Quick Start
//!
//! ```no_run
//! use user32_dyn::ffi::memory::wide;
//! use user32_dyn::user32::consts::{MB_ICONINFORMATION, MB_OK};
//! use user32_dyn::user32::User32;
//!
//! let mut user32 = User32::new();
//! let text = wide("Hello!");
//! let caption = wide("user32-dyn");
//! let clicked = unsafe {
//!     user32.MessageBoxW(
//!         std::ptr::null_mut(),
//!         text.as_ptr(),
//!         caption.as_ptr(),
//!         MB_OK | MB_ICONINFORMATION,
//!     )?
//! };
//! # Ok::<(), user32_dyn::BindError>(())
//! ```
//!
//! ## Architecture
//!
//! 1. **Descriptor table** - static declarations of every export's name
//!    and primitive signature, fixed at build time
//! 2. **Symbol cache** - binds each export at most once, on first use or
//!    in bulk via preload, and memoizes the entry point for the life of
//!    the process
//! 3. **Typed wrappers** - one generated method per export; resolve
//!    through the cache, forward the call, return the raw result
//!
//! The cache layer is generic: [`ffi`] binds any C-ABI shared library a
//! descriptor table describes, and `user32.dll` is one such table.
//!
//! ## Performance
//!
//! - First call per export pays one symbol lookup; every later call is an
//!   indexed cache hit
//! - [`User32::preload_all`](user32::User32::preload_all) binds the whole
//!   table in one pass, amortizing the loader round-trip across all
//!   exports
//! - Binding errors surface at the exact call site as [`BindError`]

pub mod error;
pub mod ffi;
pub mod user32;

pub use error::{BindError, BindResult};
pub use ffi::cache::SymbolCache;
pub use ffi::loader::{DlLinker, Linker, RawSymbol};
pub use ffi::memory::{from_wide, wide, NativePtr};
pub use ffi::types::{Descriptor, Signature, SymbolTable, Tag};
pub use user32::{Export, User32};
