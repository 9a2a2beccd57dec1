//! Mouse stalker - a tooltip-style window that follows the cursor.
//!
//! Creates a layered, topmost tool window and moves it alongside the
//! mouse, updating its title with the current coordinates. Exercises
//! window creation with extended styles, cursor polling, and window
//! positioning.

use std::ptr;
use std::thread;
use std::time::Duration;

use user32_dyn::user32::consts::{
    LWA_ALPHA, SWP_NOACTIVATE, SWP_NOSIZE, SWP_NOZORDER, SW_SHOWNOACTIVATE, WS_EX_LAYERED,
    WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_POPUP, WS_VISIBLE,
};
use user32_dyn::user32::User32;
use user32_dyn::{wide, BindResult};

fn main() -> BindResult<()> {
    let mut user32 = User32::new();

    println!("Mouse Stalker - starting");
    println!("   Press Ctrl+C to exit\n");

    let class_name = wide("STATIC");
    let title = wide("Mouse Stalker");

    // Layered topmost tool window that stays out of the taskbar and
    // never takes focus.
    let hwnd = unsafe {
        user32.CreateWindowExW(
            WS_EX_LAYERED | WS_EX_TOPMOST | WS_EX_TOOLWINDOW | WS_EX_NOACTIVATE,
            class_name.as_ptr(),
            title.as_ptr(),
            WS_POPUP | WS_VISIBLE,
            0,
            0,
            200,
            40,
            ptr::null_mut(),
            ptr::null_mut(),
            ptr::null_mut(),
            ptr::null_mut(),
        )?
    };
    if hwnd.is_null() {
        eprintln!("Failed to create window");
        std::process::exit(1);
    }
    println!("Window created: {:p}", hwnd);

    // Slight transparency.
    unsafe { user32.SetLayeredWindowAttributes(hwnd, 0, 220, LWA_ALPHA)? };
    unsafe { user32.ShowWindow(hwnd, SW_SHOWNOACTIVATE)? };

    println!("Tracking mouse position...\n");

    // POINT structure: { x: i32, y: i32 }
    let mut point = [0i32; 2];
    let mut prev = (i32::MIN, i32::MIN);

    loop {
        unsafe { user32.GetCursorPos(point.as_mut_ptr() as *mut _)? };
        let (x, y) = (point[0], point[1]);

        if (x, y) != prev {
            // Offset the window slightly from the cursor.
            unsafe {
                user32.SetWindowPos(
                    hwnd,
                    ptr::null_mut(),
                    x + 20,
                    y + 20,
                    0,
                    0,
                    SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE,
                )?
            };

            let new_title = wide(&format!("X: {}, Y: {}", x, y));
            unsafe { user32.SetWindowTextW(hwnd, new_title.as_ptr())? };
            prev = (x, y);
        }

        thread::sleep(Duration::from_millis(16));
    }
}
