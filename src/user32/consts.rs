//! Windows constant tables for the user32 surface.
//!
//! Static data transcribed from the vendor headers: window styles,
//! show-window commands, message identifiers, message-box flags, virtual
//! keys, and the handful of flag words the wrapped calls take. Values
//! are plain constants; combine flags with `|` as usual.

use super::windef::{DWORD, HWND, INT, UINT, WPARAM};

// Special HWND values for SetWindowPos's insert-after parameter
pub const HWND_TOP: HWND = std::ptr::null_mut();
pub const HWND_BOTTOM: HWND = 1 as HWND;
pub const HWND_TOPMOST: HWND = -1isize as HWND;
pub const HWND_NOTOPMOST: HWND = -2isize as HWND;

// ShowWindow commands
pub const SW_HIDE: INT = 0;
pub const SW_SHOWNORMAL: INT = 1;
pub const SW_NORMAL: INT = 1;
pub const SW_SHOWMINIMIZED: INT = 2;
pub const SW_SHOWMAXIMIZED: INT = 3;
pub const SW_MAXIMIZE: INT = 3;
pub const SW_SHOWNOACTIVATE: INT = 4;
pub const SW_SHOW: INT = 5;
pub const SW_MINIMIZE: INT = 6;
pub const SW_SHOWMINNOACTIVE: INT = 7;
pub const SW_SHOWNA: INT = 8;
pub const SW_RESTORE: INT = 9;
pub const SW_SHOWDEFAULT: INT = 10;
pub const SW_FORCEMINIMIZE: INT = 11;

// Window styles
pub const WS_OVERLAPPED: DWORD = 0x0000_0000;
pub const WS_POPUP: DWORD = 0x8000_0000;
pub const WS_CHILD: DWORD = 0x4000_0000;
pub const WS_MINIMIZE: DWORD = 0x2000_0000;
pub const WS_VISIBLE: DWORD = 0x1000_0000;
pub const WS_DISABLED: DWORD = 0x0800_0000;
pub const WS_CLIPSIBLINGS: DWORD = 0x0400_0000;
pub const WS_CLIPCHILDREN: DWORD = 0x0200_0000;
pub const WS_MAXIMIZE: DWORD = 0x0100_0000;
pub const WS_CAPTION: DWORD = 0x00c0_0000;
pub const WS_BORDER: DWORD = 0x0080_0000;
pub const WS_DLGFRAME: DWORD = 0x0040_0000;
pub const WS_VSCROLL: DWORD = 0x0020_0000;
pub const WS_HSCROLL: DWORD = 0x0010_0000;
pub const WS_SYSMENU: DWORD = 0x0008_0000;
pub const WS_THICKFRAME: DWORD = 0x0004_0000;
pub const WS_GROUP: DWORD = 0x0002_0000;
pub const WS_TABSTOP: DWORD = 0x0001_0000;
pub const WS_MINIMIZEBOX: DWORD = 0x0002_0000;
pub const WS_MAXIMIZEBOX: DWORD = 0x0001_0000;
pub const WS_TILED: DWORD = WS_OVERLAPPED;
pub const WS_ICONIC: DWORD = WS_MINIMIZE;
pub const WS_SIZEBOX: DWORD = WS_THICKFRAME;
pub const WS_OVERLAPPEDWINDOW: DWORD = 0x00cf_0000;
pub const WS_TILEDWINDOW: DWORD = WS_OVERLAPPEDWINDOW;
pub const WS_POPUPWINDOW: DWORD = 0x8088_0000;
pub const WS_CHILDWINDOW: DWORD = WS_CHILD;

// Extended window styles
pub const WS_EX_DLGMODALFRAME: DWORD = 0x0000_0001;
pub const WS_EX_NOPARENTNOTIFY: DWORD = 0x0000_0004;
pub const WS_EX_TOPMOST: DWORD = 0x0000_0008;
pub const WS_EX_ACCEPTFILES: DWORD = 0x0000_0010;
pub const WS_EX_TRANSPARENT: DWORD = 0x0000_0020;
pub const WS_EX_MDICHILD: DWORD = 0x0000_0040;
pub const WS_EX_TOOLWINDOW: DWORD = 0x0000_0080;
pub const WS_EX_WINDOWEDGE: DWORD = 0x0000_0100;
pub const WS_EX_CLIENTEDGE: DWORD = 0x0000_0200;
pub const WS_EX_CONTEXTHELP: DWORD = 0x0000_0400;
pub const WS_EX_LEFT: DWORD = 0x0000_0000;
pub const WS_EX_RIGHT: DWORD = 0x0000_1000;
pub const WS_EX_LTRREADING: DWORD = 0x0000_0000;
pub const WS_EX_RTLREADING: DWORD = 0x0000_2000;
pub const WS_EX_LEFTSCROLLBAR: DWORD = 0x0000_4000;
pub const WS_EX_RIGHTSCROLLBAR: DWORD = 0x0000_0000;
pub const WS_EX_CONTROLPARENT: DWORD = 0x0001_0000;
pub const WS_EX_STATICEDGE: DWORD = 0x0002_0000;
pub const WS_EX_APPWINDOW: DWORD = 0x0004_0000;
pub const WS_EX_OVERLAPPEDWINDOW: DWORD = 0x0000_0300;
pub const WS_EX_PALETTEWINDOW: DWORD = 0x0000_0188;
pub const WS_EX_LAYERED: DWORD = 0x0008_0000;
pub const WS_EX_NOINHERITLAYOUT: DWORD = 0x0010_0000;
pub const WS_EX_NOREDIRECTIONBITMAP: DWORD = 0x0020_0000;
pub const WS_EX_LAYOUTRTL: DWORD = 0x0040_0000;
pub const WS_EX_COMPOSITED: DWORD = 0x0200_0000;
pub const WS_EX_NOACTIVATE: DWORD = 0x0800_0000;

// MessageBox flags
pub const MB_OK: UINT = 0x0000_0000;
pub const MB_OKCANCEL: UINT = 0x0000_0001;
pub const MB_ABORTRETRYIGNORE: UINT = 0x0000_0002;
pub const MB_YESNOCANCEL: UINT = 0x0000_0003;
pub const MB_YESNO: UINT = 0x0000_0004;
pub const MB_RETRYCANCEL: UINT = 0x0000_0005;
pub const MB_CANCELTRYCONTINUE: UINT = 0x0000_0006;
pub const MB_ICONHAND: UINT = 0x0000_0010;
pub const MB_ICONQUESTION: UINT = 0x0000_0020;
pub const MB_ICONEXCLAMATION: UINT = 0x0000_0030;
pub const MB_ICONASTERISK: UINT = 0x0000_0040;
pub const MB_USERICON: UINT = 0x0000_0080;
pub const MB_ICONWARNING: UINT = MB_ICONEXCLAMATION;
pub const MB_ICONERROR: UINT = MB_ICONHAND;
pub const MB_ICONINFORMATION: UINT = MB_ICONASTERISK;
pub const MB_DEFBUTTON1: UINT = 0x0000_0000;
pub const MB_DEFBUTTON2: UINT = 0x0000_0100;
pub const MB_DEFBUTTON3: UINT = 0x0000_0200;
pub const MB_DEFBUTTON4: UINT = 0x0000_0300;

// MessageBox return values
pub const IDOK: INT = 1;
pub const IDCANCEL: INT = 2;
pub const IDABORT: INT = 3;
pub const IDRETRY: INT = 4;
pub const IDIGNORE: INT = 5;
pub const IDYES: INT = 6;
pub const IDNO: INT = 7;
pub const IDTRYAGAIN: INT = 10;
pub const IDCONTINUE: INT = 11;
/// Returned by `MessageBoxTimeoutW` when the dialog times out.
pub const IDTIMEOUT: INT = 32000;

// PeekMessage removal flags
pub const PM_NOREMOVE: UINT = 0x0000;
pub const PM_REMOVE: UINT = 0x0001;
pub const PM_NOYIELD: UINT = 0x0002;

// GetWindowLong / SetWindowLong indices
pub const GWL_WNDPROC: INT = -4;
pub const GWL_HINSTANCE: INT = -6;
pub const GWL_HWNDPARENT: INT = -8;
pub const GWL_ID: INT = -12;
pub const GWL_STYLE: INT = -16;
pub const GWL_EXSTYLE: INT = -20;
pub const GWL_USERDATA: INT = -21;

// GetClassLong / SetClassLong indices
pub const GCL_MENUNAME: INT = -8;
pub const GCL_HBRBACKGROUND: INT = -10;
pub const GCL_HCURSOR: INT = -12;
pub const GCL_HICON: INT = -14;
pub const GCL_HMODULE: INT = -16;
pub const GCL_CBWNDEXTRA: INT = -18;
pub const GCL_CBCLSEXTRA: INT = -20;
pub const GCL_WNDPROC: INT = -24;

// SetWindowPos flags
pub const SWP_NOSIZE: UINT = 0x0001;
pub const SWP_NOMOVE: UINT = 0x0002;
pub const SWP_NOZORDER: UINT = 0x0004;
pub const SWP_NOREDRAW: UINT = 0x0008;
pub const SWP_NOACTIVATE: UINT = 0x0010;
pub const SWP_FRAMECHANGED: UINT = 0x0020;
pub const SWP_SHOWWINDOW: UINT = 0x0040;
pub const SWP_HIDEWINDOW: UINT = 0x0080;
pub const SWP_NOCOPYBITS: UINT = 0x0100;
pub const SWP_NOOWNERZORDER: UINT = 0x0200;
pub const SWP_NOSENDCHANGING: UINT = 0x0400;

// SetLayeredWindowAttributes flags
pub const LWA_COLORKEY: DWORD = 0x0001;
pub const LWA_ALPHA: DWORD = 0x0002;

// RegisterHotKey modifiers
pub const MOD_ALT: UINT = 0x0001;
pub const MOD_CONTROL: UINT = 0x0002;
pub const MOD_SHIFT: UINT = 0x0004;
pub const MOD_WIN: UINT = 0x0008;
pub const MOD_NOREPEAT: UINT = 0x4000;

// Common virtual key codes (subset)
pub const VK_LBUTTON: WPARAM = 0x01;
pub const VK_RBUTTON: WPARAM = 0x02;
pub const VK_CANCEL: WPARAM = 0x03;
pub const VK_MBUTTON: WPARAM = 0x04;
pub const VK_XBUTTON1: WPARAM = 0x05;
pub const VK_XBUTTON2: WPARAM = 0x06;
pub const VK_BACK: WPARAM = 0x08;
pub const VK_TAB: WPARAM = 0x09;
pub const VK_RETURN: WPARAM = 0x0d;
pub const VK_SHIFT: WPARAM = 0x10;
pub const VK_CONTROL: WPARAM = 0x11;
pub const VK_MENU: WPARAM = 0x12;
pub const VK_PAUSE: WPARAM = 0x13;
pub const VK_CAPITAL: WPARAM = 0x14;
pub const VK_ESCAPE: WPARAM = 0x1b;
pub const VK_SPACE: WPARAM = 0x20;
pub const VK_PRIOR: WPARAM = 0x21;
pub const VK_NEXT: WPARAM = 0x22;
pub const VK_END: WPARAM = 0x23;
pub const VK_HOME: WPARAM = 0x24;
pub const VK_LEFT: WPARAM = 0x25;
pub const VK_UP: WPARAM = 0x26;
pub const VK_RIGHT: WPARAM = 0x27;
pub const VK_DOWN: WPARAM = 0x28;
pub const VK_INSERT: WPARAM = 0x2d;
pub const VK_DELETE: WPARAM = 0x2e;

// Window messages (subset)
pub const WM_NULL: UINT = 0x0000;
pub const WM_CREATE: UINT = 0x0001;
pub const WM_DESTROY: UINT = 0x0002;
pub const WM_MOVE: UINT = 0x0003;
pub const WM_SIZE: UINT = 0x0005;
pub const WM_ACTIVATE: UINT = 0x0006;
pub const WM_SETFOCUS: UINT = 0x0007;
pub const WM_KILLFOCUS: UINT = 0x0008;
pub const WM_ENABLE: UINT = 0x000a;
pub const WM_SETREDRAW: UINT = 0x000b;
pub const WM_SETTEXT: UINT = 0x000c;
pub const WM_GETTEXT: UINT = 0x000d;
pub const WM_GETTEXTLENGTH: UINT = 0x000e;
pub const WM_PAINT: UINT = 0x000f;
pub const WM_CLOSE: UINT = 0x0010;
pub const WM_QUIT: UINT = 0x0012;
pub const WM_KEYDOWN: UINT = 0x0100;
pub const WM_KEYUP: UINT = 0x0101;
pub const WM_TIMER: UINT = 0x0113;
pub const WM_HOTKEY: UINT = 0x0312;

// Hook types for SetWindowsHookExW
pub const WH_MSGFILTER: INT = -1;
pub const WH_JOURNALRECORD: INT = 0;
pub const WH_JOURNALPLAYBACK: INT = 1;
pub const WH_KEYBOARD: INT = 2;
pub const WH_GETMESSAGE: INT = 3;
pub const WH_CALLWNDPROC: INT = 4;
pub const WH_CBT: INT = 5;
pub const WH_SYSMSGFILTER: INT = 6;
pub const WH_MOUSE: INT = 7;
pub const WH_HARDWARE: INT = 8;
pub const WH_DEBUG: INT = 9;
pub const WH_SHELL: INT = 10;
pub const WH_FOREGROUNDIDLE: INT = 11;
pub const WH_CALLWNDPROCRET: INT = 12;
pub const WH_KEYBOARD_LL: INT = 13;
pub const WH_MOUSE_LL: INT = 14;

// GetWindow commands
pub const GW_HWNDFIRST: UINT = 0;
pub const GW_HWNDLAST: UINT = 1;
pub const GW_HWNDNEXT: UINT = 2;
pub const GW_HWNDPREV: UINT = 3;
pub const GW_OWNER: UINT = 4;
pub const GW_CHILD: UINT = 5;
pub const GW_ENABLEDPOPUP: UINT = 6;

// GetAncestor flags
pub const GA_PARENT: UINT = 1;
pub const GA_ROOT: UINT = 2;
pub const GA_ROOTOWNER: UINT = 3;

// SystemParametersInfo actions (subset)
pub const SPI_SETWORKAREA: UINT = 0x002f;
pub const SPI_GETWORKAREA: UINT = 0x0030;
pub const SPI_GETWHEELSCROLLLINES: UINT = 0x0068;
pub const SPI_SETWHEELSCROLLLINES: UINT = 0x0069;

// GetSystemMetrics indices (subset)
pub const SM_CXSCREEN: INT = 0;
pub const SM_CYSCREEN: INT = 1;
pub const SM_CMONITORS: INT = 80;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_styles() {
        assert_eq!(
            WS_OVERLAPPEDWINDOW,
            WS_OVERLAPPED
                | WS_CAPTION
                | WS_SYSMENU
                | WS_THICKFRAME
                | WS_MINIMIZEBOX
                | WS_MAXIMIZEBOX
        );
        assert_eq!(WS_POPUPWINDOW, WS_POPUP | WS_BORDER | WS_SYSMENU);
    }

    #[test]
    fn test_messagebox_aliases() {
        assert_eq!(MB_ICONERROR, MB_ICONHAND);
        assert_eq!(MB_ICONWARNING, MB_ICONEXCLAMATION);
        assert_eq!(MB_ICONINFORMATION, MB_ICONASTERISK);
    }

    #[test]
    fn test_special_hwnds_are_distinct() {
        assert!(HWND_TOP.is_null());
        assert_ne!(HWND_TOPMOST, HWND_NOTOPMOST);
        assert_ne!(HWND_BOTTOM, HWND_TOP);
    }
}
