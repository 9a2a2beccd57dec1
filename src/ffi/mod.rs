//! Generic symbol-binding machinery over C-ABI shared libraries.
//!
//! Nothing in this module knows about user32: it binds any library a
//! [`SymbolTable`](types::SymbolTable) describes, through any
//! [`Linker`](loader::Linker) the host supplies.
//!
//! # Example
//!
//! ```no_run
//! use user32_dyn::ffi::cache::SymbolCache;
//! use user32_dyn::ffi::loader::DlLinker;
//! use user32_dyn::ffi::types::{Descriptor, Signature, SymbolTable, Tag};
//!
//! static LIBC: SymbolTable = SymbolTable {
//!     library: "libc.so.6",
//!     descriptors: &[Descriptor {
//!         name: "getpid",
//!         sig: Signature { args: &[], ret: Tag::I32 },
//!     }],
//! };
//!
//! let mut cache = SymbolCache::new(&LIBC, DlLinker::new(LIBC.library));
//! let getpid = cache.resolve("getpid")?;
//! println!("getpid bound at {:p}", getpid.addr());
//! # Ok::<(), user32_dyn::BindError>(())
//! ```

pub mod cache;
pub mod loader;
pub mod memory;
pub mod types;
