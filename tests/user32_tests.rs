//! Integration tests for the generated user32 surface.
//!
//! The descriptor table and enum are checked on every platform; tests
//! that bind against a real `user32.dll` only run on Windows.

use std::collections::HashSet;

use user32_dyn::ffi::cache::SymbolCache;
use user32_dyn::ffi::loader::DlLinker;
use user32_dyn::user32::{Export, User32, TABLE};
use user32_dyn::{BindError, Tag};

#[test]
fn test_table_covers_the_generated_surface() {
    assert_eq!(TABLE.library, "user32.dll");
    assert_eq!(TABLE.len(), Export::COUNT);
    // The generated surface is large; catch accidental truncation.
    assert!(TABLE.len() > 500, "table has {} entries", TABLE.len());
}

#[test]
fn test_export_names_are_unique() {
    let names: HashSet<&str> = TABLE.descriptors.iter().map(|d| d.name).collect();
    assert_eq!(names.len(), TABLE.len());
}

#[test]
fn test_enum_discriminants_are_table_indices() {
    for (idx, export) in Export::ALL.iter().enumerate() {
        assert_eq!(*export as usize, idx);
        assert_eq!(TABLE.descriptors[idx].name, export.name());
    }
}

#[test]
fn test_from_name_round_trips_every_export() {
    for export in Export::ALL {
        assert_eq!(Export::from_name(export.name()), Some(*export));
    }
    assert_eq!(Export::from_name("NotARealExport"), None);
    assert_eq!(Export::from_name(""), None);
}

#[test]
fn test_void_only_appears_as_return_kind() {
    for desc in TABLE.descriptors {
        for tag in desc.sig.args {
            assert_ne!(*tag, Tag::Void, "{} has a void argument", desc.name);
        }
    }
}

#[test]
fn test_well_known_signatures() {
    let msgbox = Export::MessageBoxW.signature();
    assert_eq!(msgbox.arity(), 4);
    assert_eq!(msgbox.ret, Tag::I32);

    let cursor = Export::GetCursorPos.signature();
    assert_eq!(cursor.args, &[Tag::Ptr]);
    assert_eq!(cursor.ret, Tag::I32);

    let desktop = Export::GetDesktopWindow.signature();
    assert_eq!(desktop.arity(), 0);
    assert_eq!(desktop.ret, Tag::Ptr);
}

#[test]
fn test_construction_is_inert() {
    let user32 = User32::new();
    assert_eq!(user32.bound_count(), 0);
    for export in [
        Export::MessageBoxW,
        Export::GetDesktopWindow,
        Export::RegisterHotKey,
    ] {
        assert!(!user32.is_bound(export));
    }
}

#[test]
fn test_unknown_name_fails_before_the_library_opens() {
    // Runs on every platform: the name check precedes any open, so no
    // user32.dll is required.
    let mut cache = SymbolCache::new(&TABLE, DlLinker::new(TABLE.library));
    let err = cache.resolve("GetProcAddress").unwrap_err();
    assert_eq!(err, BindError::unknown_symbol("GetProcAddress"));
    assert!(!cache.linker().is_open());
}

#[cfg(windows)]
mod windows {
    use super::*;
    use user32_dyn::user32::consts::SM_CXSCREEN;

    #[test]
    fn test_cold_start_get_desktop_window() {
        let mut user32 = User32::new();
        let hwnd = unsafe { user32.GetDesktopWindow() }.unwrap();
        assert!(!hwnd.is_null());
        assert!(user32.is_bound(Export::GetDesktopWindow));
        assert_eq!(user32.bound_count(), 1);
    }

    #[test]
    fn test_get_system_metrics() {
        let mut user32 = User32::new();
        let width = unsafe { user32.GetSystemMetrics(SM_CXSCREEN) }.unwrap();
        assert!(width > 0);
    }

    #[test]
    fn test_preload_subset_then_call() {
        let mut user32 = User32::new();
        user32
            .preload(&[Export::GetCursorPos, Export::GetForegroundWindow])
            .unwrap();
        assert!(user32.is_bound(Export::GetCursorPos));
        assert!(user32.is_bound(Export::GetForegroundWindow));
        assert!(!user32.is_bound(Export::MessageBoxW));

        let mut point = [0i32; 2];
        let ok = unsafe { user32.GetCursorPos(point.as_mut_ptr() as *mut _) }.unwrap();
        assert_ne!(ok, 0);
    }

    #[test]
    fn test_preload_all_binds_everything() {
        let mut user32 = User32::new();
        user32.preload_all().unwrap();
        assert_eq!(user32.bound_count(), Export::COUNT);
        for export in Export::ALL {
            assert!(user32.is_bound(*export));
        }
    }
}
