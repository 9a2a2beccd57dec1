//! Countdown dialog - auto-dismissing MessageBox demo.
//!
//! Demonstrates the undocumented but commonly used `MessageBoxTimeoutW`
//! export: a message box that closes itself after a timeout.

use std::ptr;

use user32_dyn::user32::consts::{
    IDNO, IDOK, IDTIMEOUT, IDYES, MB_DEFBUTTON1, MB_ICONINFORMATION, MB_ICONQUESTION,
    MB_ICONWARNING, MB_OK, MB_OKCANCEL, MB_YESNO,
};
use user32_dyn::user32::windef::{INT, UINT};
use user32_dyn::user32::User32;
use user32_dyn::{wide, BindResult};

fn show_timed_dialog(
    user32: &mut User32,
    title: &str,
    message: &str,
    kind: UINT,
    timeout_ms: u32,
) -> BindResult<INT> {
    let text = wide(message);
    let caption = wide(title);
    unsafe {
        user32.MessageBoxTimeoutW(
            ptr::null_mut(),
            text.as_ptr(),
            caption.as_ptr(),
            kind,
            0, // default language
            timeout_ms,
        )
    }
}

fn main() -> BindResult<()> {
    let mut user32 = User32::new();

    println!("Countdown Dialog Demo");

    println!("Showing info dialog (3 second timeout)...");
    let result = show_timed_dialog(
        &mut user32,
        "Auto-Close Demo",
        "This dialog will close automatically in 3 seconds!\n\nOr click OK to close it now.",
        MB_OK | MB_ICONINFORMATION,
        3000,
    )?;
    println!(
        "   Result: {}",
        if result == IDTIMEOUT {
            "Timed out"
        } else {
            "User clicked OK"
        }
    );

    println!("Showing Yes/No dialog (5 second timeout)...");
    let result = show_timed_dialog(
        &mut user32,
        "Quick Decision",
        "Do you like user32-dyn?\n\n(Auto-selects \"Yes\" in 5 seconds)",
        MB_YESNO | MB_ICONQUESTION | MB_DEFBUTTON1,
        5000,
    )?;
    let answer = match result {
        IDYES => "Yes!",
        IDNO => "No",
        IDTIMEOUT => "Timed out (we assume Yes!)",
        _ => "Unknown",
    };
    println!("   Result: {}", answer);

    println!("Showing warning dialog (4 second timeout)...");
    let result = show_timed_dialog(
        &mut user32,
        "Important Notice",
        "This is your final warning!\n\n(Just kidding, this closes in 4 seconds)",
        MB_OKCANCEL | MB_ICONWARNING,
        4000,
    )?;
    println!(
        "   Result: {}",
        if result == IDTIMEOUT {
            "Timed out"
        } else if result == IDOK {
            "OK clicked"
        } else {
            "Cancel clicked"
        }
    );

    println!("Rapid countdown sequence...");
    for i in (1..=3).rev() {
        show_timed_dialog(
            &mut user32,
            &format!("Countdown: {}", i),
            &format!("{}...", i),
            MB_OK | MB_ICONWARNING,
            800,
        )?;
    }
    show_timed_dialog(
        &mut user32,
        "Blast Off!",
        "Launch sequence complete!",
        MB_OK | MB_ICONINFORMATION,
        1500,
    )?;

    println!("Demo complete!");
    Ok(())
}
