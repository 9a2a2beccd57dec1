//! The lazy symbol-binding cache.
//!
//! [`SymbolCache`] owns an append-only registry mapping a descriptor
//! table's exports to bound native entry points. Each export is linked at
//! most once: the first `resolve` (or a `preload` batch covering it)
//! binds the slot, and every later access is a registry hit with zero
//! linking work. Bound slots are permanent: there is no invalidation and
//! no unbind, mirroring the fact that a loaded shared library stays
//! valid until process exit.
//!
//! Preloading exists to amortize the fixed overhead of touching the
//! library: one bulk link call covers any number of still-unbound
//! exports, instead of paying that overhead once per symbol on the lazy
//! path.
//!
//! All mutating operations take `&mut self`, so a host that wants to
//! share a cache across threads supplies its own lock.

use log::trace;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::loader::{Linker, RawSymbol};
use super::types::SymbolTable;
use crate::error::{BindError, BindResult};

/// Per-slot scratch capacity for preload partitioning; batches larger
/// than this spill to the heap.
const PRELOAD_INLINE: usize = 32;

/// Registry of bound exports over one descriptor table.
///
/// State per export is `Unbound -> Bound`, with `Bound` terminal. A
/// failed bind leaves the slot unbound, so the caller may retry after
/// the environment changes (e.g. the library gets installed).
pub struct SymbolCache<L> {
    table: &'static SymbolTable,
    /// Name -> descriptor index, for the string-keyed entry points.
    index: FxHashMap<&'static str, usize>,
    /// Bound entry points, index-parallel with the descriptor table.
    slots: Box<[Option<RawSymbol>]>,
    linker: L,
}

impl<L: Linker> SymbolCache<L> {
    /// Create a cache over `table`. Nothing is linked until first use.
    pub fn new(table: &'static SymbolTable, linker: L) -> Self {
        let index = table
            .descriptors
            .iter()
            .enumerate()
            .map(|(i, d)| (d.name, i))
            .collect();
        SymbolCache {
            table,
            index,
            slots: vec![None; table.len()].into_boxed_slice(),
            linker,
        }
    }

    /// The descriptor table this cache binds against.
    pub fn table(&self) -> &'static SymbolTable {
        self.table
    }

    /// The underlying linker, for host inspection (e.g.
    /// [`DlLinker::is_open`](super::loader::DlLinker::is_open)).
    pub fn linker(&self) -> &L {
        &self.linker
    }

    /// Resolve one export by name, binding it on first use.
    ///
    /// # Errors
    /// * [`BindError::UnknownSymbol`] if `name` is not in the descriptor
    ///   table; no linking is attempted.
    /// * [`BindError::LibraryOpen`] / [`BindError::Link`] from the linker;
    ///   the slot stays unbound.
    pub fn resolve(&mut self, name: &str) -> BindResult<RawSymbol> {
        let idx = self.lookup(name)?;
        self.resolve_index(idx)
    }

    /// Resolve by descriptor-table index: the O(1) path generated
    /// wrappers use, bypassing the name map.
    ///
    /// # Panics
    /// Panics if `idx` is out of range of the descriptor table. Indices
    /// are expected to come from a generated per-export enumeration.
    pub fn resolve_index(&mut self, idx: usize) -> BindResult<RawSymbol> {
        if let Some(sym) = self.slots[idx] {
            return Ok(sym);
        }
        let name = self.table.descriptors[idx].name;
        let linked = self.linker.link(&[name])?;
        debug_assert_eq!(linked.len(), 1);
        let sym = linked[0];
        self.slots[idx] = Some(sym);
        trace!("bound {}", name);
        Ok(sym)
    }

    /// Bind the named exports ahead of use, in one batch.
    ///
    /// Already-bound names are skipped and keep their existing entry
    /// points; only the unbound remainder is linked. If any requested
    /// name fails to link, the whole batch fails and none of its slots
    /// are bound.
    ///
    /// # Errors
    /// [`BindError::UnknownSymbol`] if any name is absent from the
    /// descriptor table (checked for the full list before any linking),
    /// otherwise whatever the linker reports.
    pub fn preload(&mut self, names: &[&str]) -> BindResult<()> {
        let mut pending: SmallVec<[usize; PRELOAD_INLINE]> = SmallVec::new();
        let mut queued = vec![false; self.table.len()];
        for name in names {
            let idx = self.lookup(name)?;
            if self.slots[idx].is_none() && !queued[idx] {
                queued[idx] = true;
                pending.push(idx);
            }
        }
        self.link_pending(&pending)
    }

    /// Bind every export in the descriptor table that is not bound yet.
    ///
    /// Idempotent: exports already bound (individually or by an earlier
    /// preload) are never re-linked.
    pub fn preload_all(&mut self) -> BindResult<()> {
        let pending: SmallVec<[usize; PRELOAD_INLINE]> = (0..self.table.len())
            .filter(|&i| self.slots[i].is_none())
            .collect();
        self.link_pending(&pending)
    }

    /// Has this export been bound yet?
    pub fn is_bound(&self, name: &str) -> bool {
        self.index
            .get(name)
            .is_some_and(|&idx| self.slots[idx].is_some())
    }

    /// Index-addressed variant of [`is_bound`](Self::is_bound).
    ///
    /// # Panics
    /// Panics if `idx` is out of range of the descriptor table.
    pub fn is_bound_index(&self, idx: usize) -> bool {
        self.slots[idx].is_some()
    }

    /// Number of exports bound so far.
    pub fn bound_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    fn lookup(&self, name: &str) -> BindResult<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| BindError::unknown_symbol(name))
    }

    /// One bulk link for `pending`, committing slots only if the whole
    /// batch resolved.
    fn link_pending(&mut self, pending: &[usize]) -> BindResult<()> {
        if pending.is_empty() {
            return Ok(());
        }
        let names: Vec<&'static str> = pending
            .iter()
            .map(|&idx| self.table.descriptors[idx].name)
            .collect();
        let linked = self.linker.link(&names)?;
        debug_assert_eq!(linked.len(), pending.len());
        for (&idx, &sym) in pending.iter().zip(linked.iter()) {
            self.slots[idx] = Some(sym);
        }
        trace!("preloaded {} symbol(s)", pending.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::types::{Descriptor, Signature, Tag};
    use std::ffi::c_void;

    static TABLE: SymbolTable = SymbolTable {
        library: "libtest.so",
        descriptors: &[
            Descriptor {
                name: "alpha",
                sig: Signature {
                    args: &[Tag::Ptr],
                    ret: Tag::I32,
                },
            },
            Descriptor {
                name: "beta",
                sig: Signature {
                    args: &[Tag::U32, Tag::U32],
                    ret: Tag::U64,
                },
            },
            Descriptor {
                name: "gamma",
                sig: Signature {
                    args: &[],
                    ret: Tag::Ptr,
                },
            },
            Descriptor {
                name: "delta",
                sig: Signature {
                    args: &[Tag::I64],
                    ret: Tag::Void,
                },
            },
        ],
    };

    /// In-memory linker that hands out stable fake addresses and records
    /// every batch it is asked for.
    struct CountingLinker {
        calls: usize,
        linked: Vec<&'static str>,
        missing: &'static [&'static str],
    }

    impl CountingLinker {
        fn new() -> Self {
            CountingLinker {
                calls: 0,
                linked: Vec::new(),
                missing: &[],
            }
        }

        fn with_missing(missing: &'static [&'static str]) -> Self {
            CountingLinker {
                calls: 0,
                linked: Vec::new(),
                missing,
            }
        }
    }

    impl Linker for CountingLinker {
        fn link(&mut self, names: &[&'static str]) -> BindResult<Vec<RawSymbol>> {
            self.calls += 1;
            let mut out = Vec::with_capacity(names.len());
            for &name in names {
                if self.missing.contains(&name) {
                    return Err(BindError::link("libtest.so", name, "undefined symbol"));
                }
                self.linked.push(name);
                // The interned name's address doubles as a stable fake
                // entry point, unique per export.
                out.push(RawSymbol::new(name.as_ptr() as *const c_void));
            }
            Ok(out)
        }
    }

    fn cache() -> SymbolCache<CountingLinker> {
        SymbolCache::new(&TABLE, CountingLinker::new())
    }

    #[test]
    fn test_nothing_bound_at_construction() {
        let cache = cache();
        assert_eq!(cache.bound_count(), 0);
        assert_eq!(cache.linker.calls, 0);
        assert!(!cache.is_bound("alpha"));
    }

    #[test]
    fn test_resolve_binds_once() {
        let mut cache = cache();
        let first = cache.resolve("alpha").unwrap();
        let second = cache.resolve("alpha").unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.linker.calls, 1);
        assert_eq!(cache.linker.linked, vec!["alpha"]);
        assert!(cache.is_bound("alpha"));
        assert_eq!(cache.bound_count(), 1);
    }

    #[test]
    fn test_unknown_symbol_never_links() {
        let mut cache = cache();
        let err = cache.resolve("DoesNotExist").unwrap_err();
        assert_eq!(err, BindError::unknown_symbol("DoesNotExist"));
        assert_eq!(cache.linker.calls, 0);
        assert_eq!(cache.bound_count(), 0);
    }

    #[test]
    fn test_preload_all_then_resolve_is_pure_hit() {
        let mut cache = cache();
        cache.preload_all().unwrap();
        assert_eq!(cache.linker.calls, 1);
        assert_eq!(cache.bound_count(), TABLE.len());
        for desc in TABLE.descriptors {
            cache.resolve(desc.name).unwrap();
        }
        // Every resolve after the bulk bind is a registry hit.
        assert_eq!(cache.linker.calls, 1);
    }

    #[test]
    fn test_preload_skips_already_bound() {
        let mut cache = cache();
        let alpha_before = cache.resolve("alpha").unwrap();
        cache.preload(&["alpha", "beta"]).unwrap();
        assert_eq!(cache.linker.calls, 2);
        // Second batch linked only "beta".
        assert_eq!(cache.linker.linked, vec!["alpha", "beta"]);
        let alpha_after = cache.resolve("alpha").unwrap();
        assert_eq!(alpha_before, alpha_after);
    }

    #[test]
    fn test_preload_all_after_partial_resolves() {
        let mut cache = cache();
        cache.resolve("beta").unwrap();
        cache.resolve("delta").unwrap();
        cache.preload_all().unwrap();
        assert_eq!(cache.bound_count(), TABLE.len());
        // Two lazy binds plus one bulk pass over the remainder.
        assert_eq!(cache.linker.calls, 3);
        assert_eq!(cache.linker.linked, vec!["beta", "delta", "alpha", "gamma"]);
    }

    #[test]
    fn test_preload_deduplicates_requests() {
        let mut cache = cache();
        cache.preload(&["alpha", "alpha", "beta", "alpha"]).unwrap();
        assert_eq!(cache.linker.linked, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_preload_unknown_name_fails_before_linking() {
        let mut cache = cache();
        let err = cache.preload(&["alpha", "DoesNotExist"]).unwrap_err();
        assert_eq!(err, BindError::unknown_symbol("DoesNotExist"));
        assert_eq!(cache.linker.calls, 0);
        assert!(!cache.is_bound("alpha"));
    }

    #[test]
    fn test_partial_batch_failure_commits_nothing() {
        let mut cache = SymbolCache::new(&TABLE, CountingLinker::with_missing(&["beta"]));
        let err = cache.preload(&["alpha", "beta"]).unwrap_err();
        assert!(matches!(err, BindError::Link { .. }));
        assert!(!cache.is_bound("alpha"));
        assert!(!cache.is_bound("beta"));
        assert_eq!(cache.bound_count(), 0);
    }

    #[test]
    fn test_failed_resolve_leaves_slot_unbound_and_retryable() {
        let mut cache = SymbolCache::new(&TABLE, CountingLinker::with_missing(&["gamma"]));
        assert!(cache.resolve("gamma").is_err());
        assert!(!cache.is_bound("gamma"));
        // Environment "changes": the symbol becomes available.
        cache.linker.missing = &[];
        let sym = cache.resolve("gamma").unwrap();
        assert!(cache.is_bound("gamma"));
        assert_eq!(cache.resolve("gamma").unwrap(), sym);
    }

    #[test]
    fn test_empty_preload_is_a_no_op() {
        let mut cache = cache();
        cache.preload(&[]).unwrap();
        assert_eq!(cache.linker.calls, 0);
    }

    #[test]
    fn test_resolve_index_matches_resolve_by_name() {
        let mut cache = cache();
        let by_index = cache.resolve_index(1).unwrap();
        let by_name = cache.resolve("beta").unwrap();
        assert_eq!(by_index, by_name);
        assert!(cache.is_bound_index(1));
        assert_eq!(cache.linker.calls, 1);
    }
}
