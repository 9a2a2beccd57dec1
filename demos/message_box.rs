//! Simple MessageBox example.
//!
//! Displays a Windows message box through the lazily-bound wrappers:
//! the first call opens `user32.dll`, links `MessageBoxW`, and forwards
//! the arguments.

use std::ptr;

use user32_dyn::user32::consts::{MB_ICONINFORMATION, MB_OK};
use user32_dyn::user32::User32;
use user32_dyn::{wide, BindResult};

fn main() -> BindResult<()> {
    let mut user32 = User32::new();

    let text = wide("Hello from user32-dyn!");
    let caption = wide("Welcome");

    let result = unsafe {
        user32.MessageBoxW(
            ptr::null_mut(),
            text.as_ptr(),
            caption.as_ptr(),
            MB_OK | MB_ICONINFORMATION,
        )?
    };

    println!("MessageBox returned: {}", result);
    Ok(())
}
