//! Hotkey demo - system-wide hotkey registration.
//!
//! Registers global hotkeys that fire even when the process has no
//! focused window, then pumps messages waiting for them:
//!
//! - Ctrl+Alt+1: show a notification
//! - Ctrl+Alt+2: report the active window's title
//! - Ctrl+Alt+Q: quit

use std::ptr;

use user32_dyn::user32::consts::{
    MB_ICONINFORMATION, MB_OK, MOD_ALT, MOD_CONTROL, MOD_NOREPEAT, WM_HOTKEY,
};
use user32_dyn::user32::User32;
use user32_dyn::{from_wide, wide, BindResult};

const HOTKEY_NOTIFY: i32 = 1;
const HOTKEY_WINDOW_INFO: i32 = 2;
const HOTKEY_QUIT: i32 = 3;

/// MSG structure layout on x64 (48 bytes): hwnd at 0, message at 8,
/// wParam at 16, lParam at 24, time at 32, pt at 36.
const MSG_SIZE: usize = 48;

fn message_of(msg: &[u8; MSG_SIZE]) -> u32 {
    u32::from_ne_bytes([msg[8], msg[9], msg[10], msg[11]])
}

fn wparam_of(msg: &[u8; MSG_SIZE]) -> u64 {
    u64::from_ne_bytes([
        msg[16], msg[17], msg[18], msg[19], msg[20], msg[21], msg[22], msg[23],
    ])
}

fn active_window_info(user32: &mut User32) -> BindResult<String> {
    let hwnd = unsafe { user32.GetForegroundWindow()? };
    if hwnd.is_null() {
        return Ok("No active window".to_string());
    }

    let mut title = vec![0u16; 256];
    let length = unsafe { user32.GetWindowTextW(hwnd, title.as_mut_ptr(), 256)? };
    if length > 0 {
        Ok(format!("Window: \"{}\"", from_wide(&title)))
    } else {
        Ok(format!("Window handle: {:p} (no title)", hwnd))
    }
}

fn main() -> BindResult<()> {
    let mut user32 = User32::new();

    println!("Hotkey Demo - starting\n");

    // Null hwnd makes the hotkeys system-wide.
    let modifiers = MOD_CONTROL | MOD_ALT | MOD_NOREPEAT;
    let registered = [
        (HOTKEY_NOTIFY, 0x31, "Ctrl+Alt+1"),
        (HOTKEY_WINDOW_INFO, 0x32, "Ctrl+Alt+2"),
        (HOTKEY_QUIT, 0x51, "Ctrl+Alt+Q"),
    ];

    for (id, key, label) in registered {
        let ok = unsafe { user32.RegisterHotKey(ptr::null_mut(), id, modifiers, key)? };
        if ok != 0 {
            println!("Registered: {}", label);
        } else {
            eprintln!("Failed to register: {}", label);
        }
    }

    println!("\nAvailable hotkeys:");
    println!("   Ctrl+Alt+1  -> show notification");
    println!("   Ctrl+Alt+2  -> active window info");
    println!("   Ctrl+Alt+Q  -> quit\n");
    println!("Listening for hotkeys...\n");

    let mut msg = [0u8; MSG_SIZE];
    loop {
        // GetMessageW blocks; returns 0 for WM_QUIT, -1 on error.
        let result = unsafe {
            user32.GetMessageW(msg.as_mut_ptr() as *mut _, ptr::null_mut(), 0, 0)?
        };
        if result <= 0 {
            break;
        }

        if message_of(&msg) == WM_HOTKEY {
            match wparam_of(&msg) as i32 {
                HOTKEY_NOTIFY => {
                    println!("Hotkey 1 pressed - showing notification");
                    let text = wide("Hello from user32-dyn!\n\nThis is a system-wide hotkey demo.");
                    let caption = wide("Hotkey Notification");
                    unsafe {
                        user32.MessageBoxW(
                            ptr::null_mut(),
                            text.as_ptr(),
                            caption.as_ptr(),
                            MB_OK | MB_ICONINFORMATION,
                        )?
                    };
                }
                HOTKEY_WINDOW_INFO => {
                    println!("Hotkey 2 pressed - getting window info");
                    let info = active_window_info(&mut user32)?;
                    println!("   {}", info);
                    let text = wide(&info);
                    let caption = wide("Active Window Info");
                    unsafe {
                        user32.MessageBoxW(
                            ptr::null_mut(),
                            text.as_ptr(),
                            caption.as_ptr(),
                            MB_OK | MB_ICONINFORMATION,
                        )?
                    };
                }
                HOTKEY_QUIT => {
                    println!("Hotkey Q pressed - exiting");
                    break;
                }
                _ => {}
            }
        }

        unsafe {
            user32.TranslateMessage(msg.as_ptr() as *mut _)?;
            user32.DispatchMessageW(msg.as_ptr() as *mut _)?;
        }
    }

    println!("\nCleaning up hotkeys...");
    for (id, _, label) in registered {
        unsafe { user32.UnregisterHotKey(ptr::null_mut(), id)? };
        println!("   Unregistered: {}", label);
    }
    Ok(())
}
