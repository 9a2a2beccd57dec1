//! Win32 primitive type aliases used by the generated wrappers.
//!
//! Scalars carry their native width; handles, struct pointers, and
//! callback slots are opaque pointers. Structs are never marshaled by
//! value (see the crate docs), so every `LP*`/`P*` struct alias is just
//! a raw address the caller owns.

#![allow(non_camel_case_types)]

use std::ffi::c_void;

// Core integer types
pub type BOOL = i32;
pub type BOOLEAN = u8;
pub type BYTE = u8;
pub type WORD = u16;
pub type DWORD = u32;
pub type SHORT = i16;
pub type USHORT = u16;
pub type INT = i32;
pub type UINT = u32;
pub type LONG = i32;
pub type ULONG = u32;
pub type ATOM = u16;
pub type WCHAR = u16;
pub type COLORREF = u32;
pub type ACCESS_MASK = u32;

// Pointer-sized integers
pub type INT_PTR = isize;
pub type UINT_PTR = usize;
pub type LONG_PTR = isize;
pub type ULONG_PTR = usize;
pub type DWORD_PTR = usize;
pub type WPARAM = usize;
pub type LPARAM = isize;
pub type LRESULT = isize;

// String pointers (UTF-16 for the W APIs, bytes for the A APIs)
pub type LPCWSTR = *const u16;
pub type LPWSTR = *mut u16;
pub type LPCSTR = *const u8;
pub type LPSTR = *mut u8;


// Opaque handle types
pub type HACCEL = *mut c_void;
pub type HANDLE = *mut c_void;
pub type HBITMAP = *mut c_void;
pub type HBRUSH = *mut c_void;
pub type HCONV = *mut c_void;
pub type HCONVLIST = *mut c_void;
pub type HCURSOR = *mut c_void;
pub type HDC = *mut c_void;
pub type HDDEDATA = *mut c_void;
pub type HDESK = *mut c_void;
pub type HDEVNOTIFY = *mut c_void;
pub type HDWP = *mut c_void;
pub type HGESTUREINFO = *mut c_void;
pub type HHOOK = *mut c_void;
pub type HICON = *mut c_void;
pub type HINSTANCE = *mut c_void;
pub type HKL = *mut c_void;
pub type HMENU = *mut c_void;
pub type HMODULE = *mut c_void;
pub type HMONITOR = *mut c_void;
pub type HPOWERNOTIFY = *mut c_void;
pub type HRAWINPUT = *mut c_void;
pub type HRGN = *mut c_void;
pub type HSYNTHETICPOINTERDEVICE = *mut c_void;
pub type HSZ = *mut c_void;
pub type HTOUCHINPUT = *mut c_void;
pub type HWINEVENTHOOK = *mut c_void;
pub type HWINSTA = *mut c_void;
pub type HWND = *mut c_void;

// Callback function pointers, passed through as opaque addresses
pub type DESKTOPENUMPROCW = *mut c_void;
pub type DLGPROC = *mut c_void;
pub type DRAWSTATEPROC = *mut c_void;
pub type GRAYSTRINGPROC = *mut c_void;
pub type HOOKPROC = *mut c_void;
pub type MONITORENUMPROC = *mut c_void;
pub type PFNCALLBACK = *mut c_void;
pub type PROPENUMPROCA = *mut c_void;
pub type PROPENUMPROCEXA = *mut c_void;
pub type PROPENUMPROCEXW = *mut c_void;
pub type PROPENUMPROCW = *mut c_void;
pub type SENDASYNCPROC = *mut c_void;
pub type TIMERPROC = *mut c_void;
pub type WINEVENTPROC = *mut c_void;
pub type WINSTAENUMPROCW = *mut c_void;
pub type WNDENUMPROC = *mut c_void;
pub type WNDPROC = *mut c_void;

// Struct and out-parameter pointers
pub type BLENDFUNCTION = *mut c_void;
pub type DEVMODEW = *mut c_void;
pub type DISPLAYCONFIG_DEVICE_INFO_HEADER = *mut c_void;
pub type DPI_AWARENESS_CONTEXT = *mut c_void;
pub type INPUT_MESSAGE_SOURCE = *mut c_void;
pub type INPUT_TRANSFORM = *mut c_void;
pub type LPACCEL = *mut c_void;
pub type LPBYTE = *mut c_void;
pub type LPCDLGTEMPLATEW = *mut c_void;
pub type LPCGUID = *mut c_void;
pub type LPCMENUINFO = *mut c_void;
pub type LPCMENUITEMINFOW = *mut c_void;
pub type LPCRECT = *mut c_void;
pub type LPCSCROLLINFO = *mut c_void;
pub type LPDRAWTEXTPARAMS = *mut c_void;
pub type LPDWORD = *mut c_void;
pub type LPINPUT = *mut c_void;
pub type LPINT = *mut c_void;
pub type LPMENUINFO = *mut c_void;
pub type LPMENUITEMINFOW = *mut c_void;
pub type LPMONITORINFO = *mut c_void;
pub type LPMOUSEMOVEPOINT = *mut c_void;
pub type LPMSG = *mut c_void;
pub type LPPAINTSTRUCT = *mut c_void;
pub type LPPOINT = *mut c_void;
pub type LPRECT = *mut c_void;
pub type LPSCROLLINFO = *mut c_void;
pub type LPSECURITY_ATTRIBUTES = *mut c_void;
pub type LPTPMPARAMS = *mut c_void;
pub type LPTRACKMOUSEEVENT = *mut c_void;
pub type LPVOID = *mut c_void;
pub type LPWNDCLASSEXW = *mut c_void;
pub type LPWNDCLASSW = *mut c_void;
pub type MENUTEMPLATEW = *mut c_void;
pub type MSGBOXPARAMSW = *mut c_void;
pub type PAINTSTRUCT = *mut c_void;
pub type PALTTABINFO = *mut c_void;
pub type PBSMINFO = *mut c_void;
pub type PBYTE = *mut c_void;
pub type PCHANGEFILTERSTRUCT = *mut c_void;
pub type PCOMBOBOXINFO = *mut c_void;
pub type PCONVCONTEXT = *mut c_void;
pub type PCONVINFO = *mut c_void;
pub type PCRAWINPUTDEVICE = *mut c_void;
pub type PCURSORINFO = *mut c_void;
pub type PDISPLAY_DEVICEW = *mut c_void;
pub type PDWORD_PTR = *mut c_void;
pub type PFLASHWINFO = *mut c_void;
pub type PGESTURECONFIG = *mut c_void;
pub type PGESTUREINFO = *mut c_void;
pub type PGUITHREADINFO = *mut c_void;
pub type PICONINFO = *mut c_void;
pub type PICONINFOEXW = *mut c_void;
pub type PLASTINPUTINFO = *mut c_void;
pub type PMENUBARINFO = *mut c_void;
pub type POINTER_DEVICE_INFO = *mut c_void;
pub type POINTER_DEVICE_PROPERTY = *mut c_void;
pub type POINTER_INFO = *mut c_void;
pub type POINTER_PEN_INFO = *mut c_void;
pub type POINTER_TOUCH_INFO = *mut c_void;
pub type POINTER_TYPE_INFO = *mut c_void;
pub type PRAWINPUT = *mut c_void;
pub type PRAWINPUTDEVICE = *mut c_void;
pub type PRAWINPUTDEVICELIST = *mut c_void;
pub type PSCROLLBARINFO = *mut c_void;
pub type PSECURITY_DESCRIPTOR = *mut c_void;
pub type PSECURITY_INFORMATION = *mut c_void;
pub type PTITLEBARINFO = *mut c_void;
pub type PTOUCHINPUT = *mut c_void;
pub type PUINT = *mut c_void;
pub type PULONG = *mut c_void;
pub type PVOID = *mut c_void;
pub type PWINDOWINFO = *mut c_void;
pub type SIZE = *mut c_void;
pub type TOUCH_HIT_TESTING_INPUT = *mut c_void;
pub type TOUCH_HIT_TESTING_PROXIMITY_EVALUATION = *mut c_void;
pub type WINDOWPLACEMENT = *mut c_void;
pub type WNDCLASSEXW = *mut c_void;
pub type WNDCLASSW = *mut c_void;
