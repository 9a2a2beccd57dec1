//! Integration tests for the generic symbol-binding cache.
//!
//! Covers:
//! - Lazy binding against a real shared library (libc, Linux only)
//! - Bulk preload and the no-partial-commit contract
//! - Property tests over resolve/preload interleavings

use std::ffi::c_void;

use proptest::prelude::*;

use user32_dyn::ffi::cache::SymbolCache;
use user32_dyn::ffi::loader::{DlLinker, Linker, RawSymbol};
use user32_dyn::ffi::types::{Descriptor, Signature, SymbolTable, Tag};
use user32_dyn::{BindError, BindResult};

static LIBC_TABLE: SymbolTable = SymbolTable {
    library: "libc.so.6",
    descriptors: &[
        Descriptor {
            name: "strlen",
            sig: Signature {
                args: &[Tag::Ptr],
                ret: Tag::U64,
            },
        },
        Descriptor {
            name: "abs",
            sig: Signature {
                args: &[Tag::I32],
                ret: Tag::I32,
            },
        },
        Descriptor {
            name: "getpid",
            sig: Signature {
                args: &[],
                ret: Tag::I32,
            },
        },
    ],
};

/// A libc table with one name that no libc exports, for failure paths.
#[cfg(target_os = "linux")]
static BROKEN_TABLE: SymbolTable = SymbolTable {
    library: "libc.so.6",
    descriptors: &[
        Descriptor {
            name: "abs",
            sig: Signature {
                args: &[Tag::I32],
                ret: Tag::I32,
            },
        },
        Descriptor {
            name: "this_function_does_not_exist_in_libc_12345",
            sig: Signature {
                args: &[],
                ret: Tag::Void,
            },
        },
    ],
};

#[cfg(target_os = "linux")]
fn libc_path() -> &'static str {
    for path in ["/lib/x86_64-linux-gnu/libc.so.6", "/lib64/libc.so.6"] {
        if std::path::Path::new(path).exists() {
            return path;
        }
    }
    // Fall back to letting the loader search.
    "libc.so.6"
}

#[test]
#[cfg(target_os = "linux")]
fn test_cold_start_resolves_and_calls() {
    let mut cache = SymbolCache::new(&LIBC_TABLE, DlLinker::new(libc_path()));
    assert_eq!(cache.bound_count(), 0);

    let sym = cache.resolve("strlen").unwrap();
    assert!(!sym.addr().is_null());
    assert!(cache.is_bound("strlen"));
    assert!(!cache.is_bound("abs"));

    let strlen: unsafe extern "C" fn(*const u8) -> usize =
        unsafe { std::mem::transmute(sym.addr()) };
    assert_eq!(unsafe { strlen(b"hello\0".as_ptr()) }, 5);
}

#[test]
#[cfg(target_os = "linux")]
fn test_resolve_is_idempotent_against_real_library() {
    let mut cache = SymbolCache::new(&LIBC_TABLE, DlLinker::new(libc_path()));
    let first = cache.resolve("abs").unwrap();
    let second = cache.resolve("abs").unwrap();
    assert_eq!(first, second);

    let abs: unsafe extern "C" fn(i32) -> i32 = unsafe { std::mem::transmute(first.addr()) };
    assert_eq!(unsafe { abs(-42) }, 42);
}

#[test]
#[cfg(target_os = "linux")]
fn test_bulk_warm_start() {
    let mut cache = SymbolCache::new(&LIBC_TABLE, DlLinker::new(libc_path()));
    cache.preload_all().unwrap();
    assert_eq!(cache.bound_count(), LIBC_TABLE.len());
    for desc in LIBC_TABLE.descriptors {
        assert!(cache.is_bound(desc.name));
        cache.resolve(desc.name).unwrap();
    }
}

#[test]
#[cfg(target_os = "linux")]
fn test_mixed_lazy_then_preload() {
    let mut cache = SymbolCache::new(&LIBC_TABLE, DlLinker::new(libc_path()));
    let strlen_before = cache.resolve("strlen").unwrap();
    cache.preload(&["strlen", "getpid"]).unwrap();
    assert_eq!(cache.resolve("strlen").unwrap(), strlen_before);
    assert!(cache.is_bound("getpid"));
    assert!(!cache.is_bound("abs"));
}

#[test]
#[cfg(target_os = "linux")]
fn test_partial_batch_failure_against_real_library() {
    let mut cache = SymbolCache::new(&BROKEN_TABLE, DlLinker::new(libc_path()));
    let err = cache.preload_all().unwrap_err();
    assert!(matches!(err, BindError::Link { .. }));
    // "abs" would have resolved, but the batch failed as a whole.
    assert!(!cache.is_bound("abs"));
    assert_eq!(cache.bound_count(), 0);

    // The lazy path still works afterwards.
    assert!(cache.resolve("abs").is_ok());
}

#[test]
fn test_unknown_symbol_needs_no_library() {
    // The descriptor check happens before any open, so this passes even
    // where the library itself could never load.
    let mut cache = SymbolCache::new(&LIBC_TABLE, DlLinker::new("/nonexistent/libc.so.6"));
    let err = cache.resolve("not_in_table").unwrap_err();
    assert_eq!(err, BindError::unknown_symbol("not_in_table"));
}

#[test]
fn test_missing_library_is_reported_and_retryable() {
    let mut cache = SymbolCache::new(&LIBC_TABLE, DlLinker::new("/nonexistent/libc.so.6"));
    let err = cache.resolve("strlen").unwrap_err();
    assert!(matches!(err, BindError::LibraryOpen { .. }));
    assert!(!cache.is_bound("strlen"));
    // Failing again must report the same condition, not a stale state.
    let err = cache.preload_all().unwrap_err();
    assert!(matches!(err, BindError::LibraryOpen { .. }));
}

// ---------------------------------------------------------------------------
// Property tests over resolve/preload interleavings, with a counting
// in-memory linker standing in for the platform loader.
// ---------------------------------------------------------------------------

static PROP_TABLE: SymbolTable = SymbolTable {
    library: "libprop.so",
    descriptors: &[
        Descriptor {
            name: "sym0",
            sig: Signature {
                args: &[],
                ret: Tag::Void,
            },
        },
        Descriptor {
            name: "sym1",
            sig: Signature {
                args: &[Tag::Ptr],
                ret: Tag::I32,
            },
        },
        Descriptor {
            name: "sym2",
            sig: Signature {
                args: &[Tag::U32],
                ret: Tag::U64,
            },
        },
        Descriptor {
            name: "sym3",
            sig: Signature {
                args: &[Tag::I64, Tag::I64],
                ret: Tag::I64,
            },
        },
        Descriptor {
            name: "sym4",
            sig: Signature {
                args: &[Tag::Ptr, Tag::U32],
                ret: Tag::Ptr,
            },
        },
        Descriptor {
            name: "sym5",
            sig: Signature {
                args: &[Tag::U16],
                ret: Tag::U16,
            },
        },
    ],
};

struct CountingLinker {
    linked: Vec<&'static str>,
}

impl Linker for CountingLinker {
    fn link(&mut self, names: &[&'static str]) -> BindResult<Vec<RawSymbol>> {
        let mut out = Vec::with_capacity(names.len());
        for &name in names {
            self.linked.push(name);
            out.push(RawSymbol::new(name.as_ptr() as *const c_void));
        }
        Ok(out)
    }
}

#[derive(Debug, Clone)]
enum Op {
    Resolve(usize),
    Preload(Vec<usize>),
    PreloadAll,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..PROP_TABLE.len()).prop_map(Op::Resolve),
        proptest::collection::vec(0..PROP_TABLE.len(), 0..8).prop_map(Op::Preload),
        Just(Op::PreloadAll),
    ]
}

proptest! {
    /// Whatever the interleaving, every touched export ends up bound,
    /// no export is ever linked twice, and repeated resolution observes
    /// a stable entry point.
    #[test]
    fn prop_interleavings_bind_at_most_once(ops in proptest::collection::vec(op_strategy(), 1..24)) {
        let mut cache = SymbolCache::new(&PROP_TABLE, CountingLinker { linked: Vec::new() });
        let mut touched = std::collections::HashSet::new();
        let mut seen: Vec<Option<RawSymbol>> = vec![None; PROP_TABLE.len()];

        for op in &ops {
            match op {
                Op::Resolve(idx) => {
                    let name = PROP_TABLE.descriptors[*idx].name;
                    let sym = cache.resolve(name).unwrap();
                    if let Some(prev) = seen[*idx] {
                        prop_assert_eq!(prev, sym);
                    }
                    seen[*idx] = Some(sym);
                    touched.insert(*idx);
                }
                Op::Preload(indices) => {
                    let names: Vec<&str> =
                        indices.iter().map(|&i| PROP_TABLE.descriptors[i].name).collect();
                    cache.preload(&names).unwrap();
                    touched.extend(indices.iter().copied());
                }
                Op::PreloadAll => {
                    cache.preload_all().unwrap();
                    touched.extend(0..PROP_TABLE.len());
                }
            }
        }

        for idx in 0..PROP_TABLE.len() {
            prop_assert_eq!(cache.is_bound_index(idx), touched.contains(&idx));
        }

        // The linker saw each export at most once across the whole run.
        let log = cache.linker().linked.clone();
        let mut unique = log.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(log.len(), unique.len());
        prop_assert_eq!(cache.bound_count(), touched.len());
    }
}
