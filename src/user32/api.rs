//! Generated `user32.dll` export table and typed wrappers.
//!
//! One line per export, mechanically derived from the vendor
//! documentation. Each line carries both declarations the binding needs:
//! the typed parameter list the wrapper method exposes, and the raw tag
//! signature recorded in the descriptor table. Adding or regenerating a
//! function means editing exactly one line here.
//!
//! The wrapper methods are `unsafe`: the cache performs no validation of
//! pointer arguments, and a signature mismatch is native undefined
//! behavior, exactly as it would be with a hand-written `extern` block.

use std::mem;

use crate::error::BindResult;
use crate::ffi::types::{Descriptor, Signature, SymbolTable, Tag};

use super::windef::*;
use super::User32;

/// Declares the full export surface in one pass: the [`Export`]
/// enumeration, the descriptor [`TABLE`], and one typed wrapper method
/// per export on [`User32`].
macro_rules! user32_api {
    (
        $(
            $(#[$meta:meta])*
            fn $name:ident ( $($arg:ident : $argty:ty),* ) -> $ret:ty => [ $($tag:ident),* ] -> $rtag:ident;
        )*
    ) => {
        /// One variant per export, in descriptor-table order.
        ///
        /// The discriminant is the export's index in [`TABLE`], which is
        /// also its slot index in the cache -- wrappers bind in O(1)
        /// without touching the name map.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[allow(non_camel_case_types)]
        #[repr(u16)]
        pub enum Export {
            $($name,)*
        }

        impl Export {
            /// Every export, in descriptor-table order.
            pub const ALL: &'static [Export] = &[$(Export::$name,)*];

            /// Number of exports in the table.
            pub const COUNT: usize = Self::ALL.len();

            /// The export's name in `user32.dll`.
            pub fn name(self) -> &'static str {
                TABLE.descriptors[self as usize].name
            }

            /// The export's raw signature from the descriptor table.
            pub fn signature(self) -> Signature {
                TABLE.descriptors[self as usize].sig
            }

            /// Look an export up by its exported name.
            pub fn from_name(name: &str) -> Option<Export> {
                TABLE.position(name).map(|idx| Self::ALL[idx])
            }
        }

        /// The `user32.dll` descriptor table, index-parallel with
        /// [`Export`].
        pub static TABLE: SymbolTable = SymbolTable {
            library: "user32.dll",
            descriptors: &[
                $(
                    Descriptor {
                        name: stringify!($name),
                        sig: Signature {
                            args: &[$(Tag::$tag),*],
                            ret: Tag::$rtag,
                        },
                    },
                )*
            ],
        };

        #[allow(non_snake_case, clippy::missing_safety_doc, clippy::too_many_arguments)]
        impl User32 {
            $(
                $(#[$meta])*
                pub unsafe fn $name(&mut self, $($arg: $argty),*) -> BindResult<$ret> {
                    let sym = self.cache.resolve_index(Export::$name as usize)?;
                    let func: unsafe extern "system" fn($($argty),*) -> $ret =
                        mem::transmute(sym.addr());
                    Ok(func($($arg),*))
                }
            )*
        }
    };
}

user32_api! {
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-activatekeyboardlayout>
    fn ActivateKeyboardLayout(hkl: HKL, flags: UINT) -> HKL => [Ptr, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-addclipboardformatlistener>
    fn AddClipboardFormatListener(hwnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-adjustwindowrect>
    fn AdjustWindowRect(lp_rect: LPRECT, dw_style: DWORD, b_menu: BOOL) -> BOOL => [Ptr, U32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-adjustwindowrectex>
    fn AdjustWindowRectEx(lp_rect: LPRECT, dw_style: DWORD, b_menu: BOOL, dw_ex_style: DWORD) -> BOOL => [Ptr, U32, I32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-adjustwindowrectexfordpi>
    fn AdjustWindowRectExForDpi(lp_rect: LPRECT, dw_style: DWORD, b_menu: BOOL, dw_ex_style: DWORD, dpi: UINT) -> BOOL => [Ptr, U32, I32, U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-allowsetforegroundwindow>
    fn AllowSetForegroundWindow(dw_process_id: DWORD) -> BOOL => [U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-animatewindow>
    fn AnimateWindow(h_wnd: HWND, dw_time: DWORD, dw_flags: DWORD) -> BOOL => [Ptr, U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-anypopup>
    fn AnyPopup() -> BOOL => [] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-appendmenuw>
    fn AppendMenuW(h_menu: HMENU, u_flags: UINT, u_id_new_item: UINT_PTR, lp_new_item: LPCWSTR) -> BOOL => [Ptr, U32, U64, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-aredpiawarenesscontextsequal>
    fn AreDpiAwarenessContextsEqual(dpi_context_a: DPI_AWARENESS_CONTEXT, dpi_context_b: DPI_AWARENESS_CONTEXT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-arrangeiconicwindows>
    fn ArrangeIconicWindows(h_wnd: HWND) -> UINT => [Ptr] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-attachthreadinput>
    fn AttachThreadInput(id_attach: DWORD, id_attach_to: DWORD, f_attach: BOOL) -> BOOL => [U32, U32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-begindeferwindowpos>
    fn BeginDeferWindowPos(n_num_windows: INT) -> HDWP => [I32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-beginpaint>
    fn BeginPaint(h_wnd: HWND, lp_paint: LPPAINTSTRUCT) -> HDC => [Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-blockinput>
    fn BlockInput(f_block_it: BOOL) -> BOOL => [I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-bringwindowtotop>
    fn BringWindowToTop(h_wnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-broadcastsystemmessageexw>
    fn BroadcastSystemMessageExW(flags: DWORD, lp_info: LPDWORD, msg: UINT, w_param: WPARAM, l_param: LPARAM, pbsm_info: PBSMINFO) -> LONG => [U32, Ptr, U32, U64, I64, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-broadcastsystemmessagew>
    fn BroadcastSystemMessageW(flags: DWORD, lp_info: LPDWORD, msg: UINT, w_param: WPARAM, l_param: LPARAM) -> LONG => [U32, Ptr, U32, U64, I64] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-calculatepopupwindowposition>
    fn CalculatePopupWindowPosition(anchor_point: LPPOINT, window_size: SIZE, flags: UINT, exclude_rect: LPRECT, popup_window_position: LPRECT) -> BOOL => [Ptr, Ptr, U32, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-callmsgfilterw>
    fn CallMsgFilterW(lp_msg: LPMSG, n_code: INT) -> BOOL => [Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-callnexthookex>
    fn CallNextHookEx(hhk: HHOOK, n_code: INT, w_param: WPARAM, l_param: LPARAM) -> LRESULT => [Ptr, I32, U64, I64] -> I64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-callwindowprocw>
    fn CallWindowProcW(lp_prev_wnd_func: WNDPROC, h_wnd: HWND, msg: UINT, w_param: WPARAM, l_param: LPARAM) -> LRESULT => [Ptr, Ptr, U32, U64, I64] -> I64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-cascadewindows>
    fn CascadeWindows(hwnd_parent: HWND, w_how: UINT, lp_rect: LPRECT, c_kids: UINT, lp_kids: HWND) -> WORD => [Ptr, U32, Ptr, U32, Ptr] -> U16;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-changeclipboardchain>
    fn ChangeClipboardChain(h_wnd_remove: HWND, h_wnd_new_next: HWND) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-changedisplaysettingsexw>
    fn ChangeDisplaySettingsExW(lpsz_device_name: LPCWSTR, lp_dev_mode: DEVMODEW, hwnd: HWND, dwflags: DWORD, l_param: LPVOID) -> LONG => [Ptr, Ptr, Ptr, U32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-changedisplaysettingsw>
    fn ChangeDisplaySettingsW(lp_dev_mode: DEVMODEW, dw_flags: DWORD) -> LONG => [Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-changewindowmessagefilter>
    fn ChangeWindowMessageFilter(message: UINT, dw_flag: DWORD) -> BOOL => [U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-changewindowmessagefilterex>
    fn ChangeWindowMessageFilterEx(hwnd: HWND, message: UINT, action: DWORD, p_change_filter_struct: PCHANGEFILTERSTRUCT) -> BOOL => [Ptr, U32, U32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-charlowerbuffw>
    fn CharLowerBuffW(lpsz: LPWSTR, cch_length: DWORD) -> DWORD => [Ptr, U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-charlowerw>
    fn CharLowerW(lpsz: LPWSTR) -> LPWSTR => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-charnextw>
    fn CharNextW(lpsz: LPCWSTR) -> LPWSTR => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-charprevw>
    fn CharPrevW(lpsz_start: LPCWSTR, lpsz_current: LPCWSTR) -> LPWSTR => [Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-chartooembuffw>
    fn CharToOemBuffW(lpsz_src: LPCWSTR, lpsz_dst: LPSTR, cch_dst_length: DWORD) -> BOOL => [Ptr, Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-chartooemw>
    fn CharToOemW(p_src: LPCWSTR, p_dst: LPSTR) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-charupperbuffw>
    fn CharUpperBuffW(lpsz: LPWSTR, cch_length: DWORD) -> DWORD => [Ptr, U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-charupperw>
    fn CharUpperW(lpsz: LPWSTR) -> LPWSTR => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-checkdlgbutton>
    fn CheckDlgButton(h_dlg: HWND, n_id_button: INT, u_check: UINT) -> BOOL => [Ptr, I32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-checkmenuitem>
    fn CheckMenuItem(h_menu: HMENU, u_id_check_item: UINT, u_check: UINT) -> DWORD => [Ptr, U32, U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-checkmenuradioitem>
    fn CheckMenuRadioItem(hmenu: HMENU, first: UINT, last: UINT, check: UINT, flags: UINT) -> BOOL => [Ptr, U32, U32, U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-checkradiobutton>
    fn CheckRadioButton(h_dlg: HWND, n_id_first_button: INT, n_id_last_button: INT, n_id_check_button: INT) -> BOOL => [Ptr, I32, I32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-childwindowfrompoint>
    fn ChildWindowFromPoint(h_wnd_parent: HWND, point: LPPOINT) -> HWND => [Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-childwindowfrompointex>
    fn ChildWindowFromPointEx(hwnd: HWND, pt: LPPOINT, flags: UINT) -> HWND => [Ptr, Ptr, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-clienttoscreen>
    fn ClientToScreen(h_wnd: HWND, lp_point: LPPOINT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-clipcursor>
    fn ClipCursor(lp_rect: LPRECT) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-closeclipboard>
    fn CloseClipboard() -> BOOL => [] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-closedesktop>
    fn CloseDesktop(h_desktop: HDESK) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-closegestureinfohandle>
    fn CloseGestureInfoHandle(h_gesture_info: HGESTUREINFO) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-closetouchinputhandle>
    fn CloseTouchInputHandle(h_touch_input: HTOUCHINPUT) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-closewindow>
    fn CloseWindow(h_wnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-closewindowstation>
    fn CloseWindowStation(h_win_sta: HWINSTA) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-copyacceleratortablew>
    fn CopyAcceleratorTableW(h_accel_src: HACCEL, lp_accel_dst: LPACCEL, c_accel_entries: INT) -> INT => [Ptr, Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-copyicon>
    fn CopyIcon(h_icon: HICON) -> HICON => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-copyimage>
    fn CopyImage(h: HANDLE, type_: UINT, cx: INT, cy: INT, flags: UINT) -> HANDLE => [Ptr, U32, I32, I32, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-copyrect>
    fn CopyRect(lprc_dst: LPRECT, lprc_src: LPRECT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-countclipboardformats>
    fn CountClipboardFormats() -> INT => [] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-createacceleratortablew>
    fn CreateAcceleratorTableW(paccel: LPACCEL, c_accel: INT) -> HACCEL => [Ptr, I32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-createcaret>
    fn CreateCaret(h_wnd: HWND, h_bitmap: HBITMAP, n_width: INT, n_height: INT) -> BOOL => [Ptr, Ptr, I32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-createcursor>
    fn CreateCursor(h_inst: HINSTANCE, x_hot_spot: INT, y_hot_spot: INT, n_width: INT, n_height: INT, pv_and_plane: PBYTE, pv_xor_plane: PBYTE) -> HCURSOR => [Ptr, I32, I32, I32, I32, Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-createdesktopw>
    fn CreateDesktopW(lpsz_desktop: LPCWSTR, lpsz_device: LPCWSTR, p_devmode: DEVMODEW, dw_flags: DWORD, dw_desired_access: ACCESS_MASK, lpsa: LPSECURITY_ATTRIBUTES) -> HDESK => [Ptr, Ptr, Ptr, U32, U32, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-createdialogindirectparamw>
    fn CreateDialogIndirectParamW(h_instance: HINSTANCE, lp_template: LPCDLGTEMPLATEW, h_wnd_parent: HWND, lp_dialog_func: DLGPROC, dw_init_param: LPARAM) -> HWND => [Ptr, Ptr, Ptr, Ptr, I64] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-createdialogparamw>
    fn CreateDialogParamW(h_instance: HINSTANCE, lp_template_name: LPCWSTR, h_wnd_parent: HWND, lp_dialog_func: DLGPROC, dw_init_param: LPARAM) -> HWND => [Ptr, Ptr, Ptr, Ptr, I64] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-createiconfromresource>
    fn CreateIconFromResource(presbits: PBYTE, dw_res_size: DWORD, f_icon: BOOL, dw_ver: DWORD) -> HICON => [Ptr, U32, I32, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-createiconfromresourceex>
    fn CreateIconFromResourceEx(presbits: PBYTE, dw_res_size: DWORD, f_icon: BOOL, dw_ver: DWORD, cx_desired: INT, cy_desired: INT, flags: UINT) -> HICON => [Ptr, U32, I32, U32, I32, I32, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-createiconindirect>
    fn CreateIconIndirect(piconinfo: PICONINFO) -> HICON => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-createmdiwindoww>
    fn CreateMDIWindowW(lp_class_name: LPCWSTR, lp_window_name: LPCWSTR, dw_style: DWORD, x: INT, y: INT, n_width: INT, n_height: INT, h_wnd_parent: HWND, h_instance: HINSTANCE, l_param: LPARAM) -> HWND => [Ptr, Ptr, U32, I32, I32, I32, I32, Ptr, Ptr, I64] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-createmenu>
    fn CreateMenu() -> HMENU => [] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-createpopupmenu>
    fn CreatePopupMenu() -> HMENU => [] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-createsyntheticpointerdevice>
    fn CreateSyntheticPointerDevice(pointer_type: UINT, max_count: ULONG, mode: UINT) -> HSYNTHETICPOINTERDEVICE => [U32, U32, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-createwindowexw>
    fn CreateWindowExW(dw_ex_style: DWORD, lp_class_name: LPCWSTR, lp_window_name: LPCWSTR, dw_style: DWORD, x: INT, y: INT, n_width: INT, n_height: INT, h_wnd_parent: HWND, h_menu: HMENU, h_instance: HINSTANCE, lp_param: LPVOID) -> HWND => [U32, Ptr, Ptr, U32, I32, I32, I32, I32, Ptr, Ptr, Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-createwindowstationw>
    fn CreateWindowStationW(lpwinsta: LPCWSTR, dw_flags: DWORD, dw_desired_access: ACCESS_MASK, lpsa: LPSECURITY_ATTRIBUTES) -> HWINSTA => [Ptr, U32, U32, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddeabandontransaction>
    fn DdeAbandonTransaction(id_inst: DWORD, h_conv: HCONV, id_transaction: DWORD) -> BOOL => [U32, Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddeaccessdata>
    fn DdeAccessData(h_data: HDDEDATA, pcb_data_size: LPDWORD) -> LPBYTE => [Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddeclienttransaction>
    fn DdeClientTransaction(p_data: LPBYTE, cb_data: DWORD, h_conv: HCONV, hsz_item: HSZ, w_fmt: UINT, w_type: UINT, dw_timeout: DWORD, pdw_result: LPDWORD) -> HDDEDATA => [Ptr, U32, Ptr, Ptr, U32, U32, U32, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddecmpstringhandles>
    fn DdeCmpStringHandles(hsz1: HSZ, hsz2: HSZ) -> INT => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddeconnect>
    fn DdeConnect(id_inst: DWORD, hsz_service: HSZ, hsz_topic: HSZ, p_cc: PCONVCONTEXT) -> HCONV => [U32, Ptr, Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddeconnectlist>
    fn DdeConnectList(id_inst: DWORD, hsz_service: HSZ, hsz_topic: HSZ, h_conv_list: HCONVLIST, p_cc: PCONVCONTEXT) -> HCONVLIST => [U32, Ptr, Ptr, Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddecreatestringhandlew>
    fn DdeCreateStringHandleW(id_inst: DWORD, psz: LPCWSTR, i_code_page: INT) -> HSZ => [U32, Ptr, I32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddedisconnect>
    fn DdeDisconnect(h_conv: HCONV) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddedisconnectlist>
    fn DdeDisconnectList(h_conv_list: HCONVLIST) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddeenablecallback>
    fn DdeEnableCallback(id_inst: DWORD, h_conv: HCONV, w_cmd: UINT) -> BOOL => [U32, Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddefreedatahandle>
    fn DdeFreeDataHandle(h_data: HDDEDATA) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddefreestringhandle>
    fn DdeFreeStringHandle(id_inst: DWORD, hsz: HSZ) -> BOOL => [U32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddegetdata>
    fn DdeGetData(h_data: HDDEDATA, p_dst: LPBYTE, cb_max: DWORD, cb_off: DWORD) -> DWORD => [Ptr, Ptr, U32, U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddegetlasterror>
    fn DdeGetLastError(id_inst: DWORD) -> UINT => [U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddeimpersonateclient>
    fn DdeImpersonateClient(h_conv: HCONV) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddeinitializew>
    fn DdeInitializeW(pid_inst: LPDWORD, pfn_callback: PFNCALLBACK, af_cmd: DWORD, ul_res: DWORD) -> UINT => [Ptr, Ptr, U32, U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddekeepstringhandle>
    fn DdeKeepStringHandle(id_inst: DWORD, hsz: HSZ) -> BOOL => [U32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddequeryconvinfo>
    fn DdeQueryConvInfo(h_conv: HCONV, id_transaction: DWORD, p_conv_info: PCONVINFO) -> UINT => [Ptr, U32, Ptr] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddequerynextserver>
    fn DdeQueryNextServer(h_conv_list: HCONVLIST, h_conv_prev: HCONV) -> HCONV => [Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddequerystringw>
    fn DdeQueryStringW(id_inst: DWORD, hsz: HSZ, psz: LPWSTR, cch_max: DWORD, i_code_page: INT) -> DWORD => [U32, Ptr, Ptr, U32, I32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddeunaccessdata>
    fn DdeUnaccessData(h_data: HDDEDATA) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/ddeml/nf-ddeml-ddeuninitialize>
    fn DdeUninitialize(id_inst: DWORD) -> BOOL => [U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-defdlgprocw>
    fn DefDlgProcW(h_dlg: HWND, msg: UINT, w_param: WPARAM, l_param: LPARAM) -> LRESULT => [Ptr, U32, U64, I64] -> I64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-deferwindowpos>
    fn DeferWindowPos(h_win_pos_info: HDWP, h_wnd: HWND, h_wnd_insert_after: HWND, x: INT, y: INT, cx: INT, cy: INT, u_flags: UINT) -> HDWP => [Ptr, Ptr, Ptr, I32, I32, I32, I32, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-defframeprocw>
    fn DefFrameProcW(h_wnd: HWND, h_wnd_mdi_client: HWND, u_msg: UINT, w_param: WPARAM, l_param: LPARAM) -> LRESULT => [Ptr, Ptr, U32, U64, I64] -> I64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-defmdichildprocw>
    fn DefMDIChildProcW(h_wnd: HWND, u_msg: UINT, w_param: WPARAM, l_param: LPARAM) -> LRESULT => [Ptr, U32, U64, I64] -> I64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-defrawinputproc>
    fn DefRawInputProc(pa_raw_input: PRAWINPUT, n_input: INT, cb_size_header: UINT) -> LRESULT => [Ptr, I32, U32] -> I64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-defwindowprocw>
    fn DefWindowProcW(h_wnd: HWND, msg: UINT, w_param: WPARAM, l_param: LPARAM) -> LRESULT => [Ptr, U32, U64, I64] -> I64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-deletemenu>
    fn DeleteMenu(h_menu: HMENU, u_position: UINT, u_flags: UINT) -> BOOL => [Ptr, U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-deregistershellhookwindow>
    fn DeregisterShellHookWindow(hwnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-destroyacceleratortable>
    fn DestroyAcceleratorTable(h_accel: HACCEL) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-destroycaret>
    fn DestroyCaret() -> BOOL => [] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-destroycursor>
    fn DestroyCursor(h_cursor: HCURSOR) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-destroyicon>
    fn DestroyIcon(h_icon: HICON) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-destroymenu>
    fn DestroyMenu(h_menu: HMENU) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-destroysyntheticpointerdevice>
    fn DestroySyntheticPointerDevice(device: HSYNTHETICPOINTERDEVICE) -> () => [Ptr] -> Void;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-destroywindow>
    fn DestroyWindow(h_wnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-dialogboxindirectparamw>
    fn DialogBoxIndirectParamW(h_instance: HINSTANCE, h_dialog_template: LPCDLGTEMPLATEW, h_wnd_parent: HWND, lp_dialog_func: DLGPROC, dw_init_param: LPARAM) -> INT_PTR => [Ptr, Ptr, Ptr, Ptr, I64] -> I64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-dialogboxparamw>
    fn DialogBoxParamW(h_instance: HINSTANCE, lp_template_name: LPCWSTR, h_wnd_parent: HWND, lp_dialog_func: DLGPROC, dw_init_param: LPARAM) -> INT_PTR => [Ptr, Ptr, Ptr, Ptr, I64] -> I64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-disableprocesswindowsghosting>
    fn DisableProcessWindowsGhosting() -> () => [] -> Void;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-dispatchmessagew>
    fn DispatchMessageW(lp_msg: LPMSG) -> LRESULT => [Ptr] -> I64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-displayconfiggetdeviceinfo>
    fn DisplayConfigGetDeviceInfo(request_packet: DISPLAYCONFIG_DEVICE_INFO_HEADER) -> LONG => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-displayconfigsetdeviceinfo>
    fn DisplayConfigSetDeviceInfo(set_packet: DISPLAYCONFIG_DEVICE_INFO_HEADER) -> LONG => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-dlgdirlistcomboboxw>
    fn DlgDirListComboBoxW(h_dlg: HWND, lp_path_spec: LPWSTR, n_id_combo_box: INT, n_id_static_path: INT, u_filetype: UINT) -> INT => [Ptr, Ptr, I32, I32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-dlgdirlistw>
    fn DlgDirListW(h_dlg: HWND, lp_path_spec: LPWSTR, n_id_list_box: INT, n_id_static_path: INT, u_file_type: UINT) -> INT => [Ptr, Ptr, I32, I32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-dlgdirselectcomboboxexw>
    fn DlgDirSelectComboBoxExW(hwnd_dlg: HWND, lp_string: LPWSTR, cch_out: INT, id_combo_box: INT) -> BOOL => [Ptr, Ptr, I32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-dlgdirselectexw>
    fn DlgDirSelectExW(hwnd_dlg: HWND, lp_string: LPWSTR, ch_count: INT, id_list_box: INT) -> BOOL => [Ptr, Ptr, I32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-dragdetect>
    fn DragDetect(hwnd: HWND, pt: LPPOINT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-drawanimatedrects>
    fn DrawAnimatedRects(hwnd: HWND, id_ani: INT, lprc_from: LPRECT, lprc_to: LPRECT) -> BOOL => [Ptr, I32, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-drawcaption>
    fn DrawCaption(hwnd: HWND, hdc: HDC, lprect: LPRECT, flags: UINT) -> BOOL => [Ptr, Ptr, Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-drawedge>
    fn DrawEdge(hdc: HDC, qrc: LPRECT, edge: UINT, grf_flags: UINT) -> BOOL => [Ptr, Ptr, U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-drawfocusrect>
    fn DrawFocusRect(h_dc: HDC, lprc: LPRECT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-drawframecontrol>
    fn DrawFrameControl(hdc: HDC, lprc: LPRECT, u_type: UINT, u_state: UINT) -> BOOL => [Ptr, Ptr, U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-drawicon>
    fn DrawIcon(h_dc: HDC, x: INT, y: INT, h_icon: HICON) -> BOOL => [Ptr, I32, I32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-drawiconex>
    fn DrawIconEx(hdc: HDC, x_left: INT, y_top: INT, h_icon: HICON, cx_width: INT, cy_width: INT, istep_if_ani_cur: UINT, hbr_flicker_free_draw: HBRUSH, di_flags: UINT) -> BOOL => [Ptr, I32, I32, Ptr, I32, I32, U32, Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-drawmenubar>
    fn DrawMenuBar(h_wnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-drawstatew>
    fn DrawStateW(hdc: HDC, hbr_fore: HBRUSH, qfn_call_back: DRAWSTATEPROC, l_data: LPARAM, w_data: WPARAM, x: INT, y: INT, cx: INT, cy: INT, u_flags: UINT) -> BOOL => [Ptr, Ptr, Ptr, I64, U64, I32, I32, I32, I32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-drawtextexw>
    fn DrawTextExW(hdc: HDC, lpch_text: LPWSTR, cch_text: INT, lprc: LPRECT, format: UINT, lpdtp: LPDRAWTEXTPARAMS) -> INT => [Ptr, Ptr, I32, Ptr, U32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-drawtextw>
    fn DrawTextW(hdc: HDC, lpch_text: LPCWSTR, cch_text: INT, lprc: LPRECT, format: UINT) -> INT => [Ptr, Ptr, I32, Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-emptyclipboard>
    fn EmptyClipboard() -> BOOL => [] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enablemenuitem>
    fn EnableMenuItem(h_menu: HMENU, u_id_enable_item: UINT, u_enable: UINT) -> BOOL => [Ptr, U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enablemouseinpointer>
    fn EnableMouseInPointer(f_enable: BOOL) -> BOOL => [I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enablenonclientdpiscaling>
    fn EnableNonClientDpiScaling(hwnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enablescrollbar>
    fn EnableScrollBar(h_wnd: HWND, w_s_bflags: UINT, w_arrows: UINT) -> BOOL => [Ptr, U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enablewindow>
    fn EnableWindow(h_wnd: HWND, b_enable: BOOL) -> BOOL => [Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enddeferwindowpos>
    fn EndDeferWindowPos(h_win_pos_info: HDWP) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enddialog>
    fn EndDialog(h_dlg: HWND, n_result: INT_PTR) -> BOOL => [Ptr, I64] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-endmenu>
    fn EndMenu() -> BOOL => [] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-endpaint>
    fn EndPaint(h_wnd: HWND, lp_paint: PAINTSTRUCT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-endtask>
    fn EndTask(h_wnd: HWND, f_shut_down: BOOL, f_force: BOOL) -> BOOL => [Ptr, I32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enumchildwindows>
    fn EnumChildWindows(h_wnd_parent: HWND, lp_enum_func: WNDENUMPROC, l_param: LPARAM) -> BOOL => [Ptr, Ptr, I64] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enumclipboardformats>
    fn EnumClipboardFormats(format: UINT) -> UINT => [U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enumdesktopsw>
    fn EnumDesktopsW(hwinsta: HWINSTA, lp_enum_func: DESKTOPENUMPROCW, l_param: LPARAM) -> BOOL => [Ptr, Ptr, I64] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enumdesktopwindows>
    fn EnumDesktopWindows(h_desktop: HDESK, lpfn: WNDENUMPROC, l_param: LPARAM) -> BOOL => [Ptr, Ptr, I64] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enumdisplaydevicesw>
    fn EnumDisplayDevicesW(lp_device: LPCWSTR, i_dev_num: DWORD, lp_display_device: PDISPLAY_DEVICEW, dw_flags: DWORD) -> BOOL => [Ptr, U32, Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enumdisplaymonitors>
    fn EnumDisplayMonitors(hdc: HDC, lprc_clip: LPCRECT, lpfn_enum: MONITORENUMPROC, dw_data: LPARAM) -> BOOL => [Ptr, Ptr, Ptr, I64] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enumdisplaysettingsexw>
    fn EnumDisplaySettingsExW(lpsz_device_name: LPCWSTR, i_mode_num: DWORD, lp_dev_mode: DEVMODEW, dw_flags: DWORD) -> BOOL => [Ptr, U32, Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enumdisplaysettingsw>
    fn EnumDisplaySettingsW(lpsz_device_name: LPCWSTR, i_mode_num: DWORD, lp_dev_mode: DEVMODEW) -> BOOL => [Ptr, U32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enumpropsa>
    fn EnumPropsA(h_wnd: HWND, lp_enum_func: PROPENUMPROCA) -> INT => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enumpropsexa>
    fn EnumPropsExA(h_wnd: HWND, lp_enum_func: PROPENUMPROCEXA, l_param: LPARAM) -> INT => [Ptr, Ptr, I64] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enumpropsexw>
    fn EnumPropsExW(h_wnd: HWND, lp_enum_func: PROPENUMPROCEXW, l_param: LPARAM) -> INT => [Ptr, Ptr, I64] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enumpropsw>
    fn EnumPropsW(h_wnd: HWND, lp_enum_func: PROPENUMPROCW) -> INT => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enumthreadwindows>
    fn EnumThreadWindows(dw_thread_id: DWORD, lpfn: WNDENUMPROC, l_param: LPARAM) -> BOOL => [U32, Ptr, I64] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enumwindows>
    fn EnumWindows(lp_enum_func: WNDENUMPROC, l_param: LPARAM) -> BOOL => [Ptr, I64] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enumwindowstationsw>
    fn EnumWindowStationsW(lp_enum_func: WINSTAENUMPROCW, l_param: LPARAM) -> BOOL => [Ptr, I64] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-equalrect>
    fn EqualRect(lprc1: LPRECT, lprc2: LPRECT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-evaluateproximitytorect>
    fn EvaluateProximityToRect(control_bounding_box: LPRECT, p_hit_testing_input: TOUCH_HIT_TESTING_INPUT, p_proximity_eval: TOUCH_HIT_TESTING_PROXIMITY_EVALUATION) -> BOOL => [Ptr, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-excludeupdatergn>
    fn ExcludeUpdateRgn(h_dc: HDC, h_wnd: HWND) -> INT => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-exitwindowsex>
    fn ExitWindowsEx(u_flags: UINT, dw_reason: DWORD) -> BOOL => [U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-fillrect>
    fn FillRect(h_dc: HDC, lprc: LPRECT, hbr: HBRUSH) -> INT => [Ptr, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-findwindowexw>
    fn FindWindowExW(h_wnd_parent: HWND, h_wnd_child_after: HWND, lpsz_class: LPCWSTR, lpsz_window: LPCWSTR) -> HWND => [Ptr, Ptr, Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-findwindoww>
    fn FindWindowW(lp_class_name: LPCWSTR, lp_window_name: LPCWSTR) -> HWND => [Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-flashwindow>
    fn FlashWindow(h_wnd: HWND, b_invert: BOOL) -> BOOL => [Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-flashwindowex>
    fn FlashWindowEx(pfwi: PFLASHWINFO) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-framerect>
    fn FrameRect(h_dc: HDC, lprc: LPRECT, hbr: HBRUSH) -> INT => [Ptr, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getactivewindow>
    fn GetActiveWindow() -> HWND => [] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getalttabinfow>
    fn GetAltTabInfoW(hwnd: HWND, i_item: INT, pati: PALTTABINFO, psz_item_text: LPWSTR, cch_item_text: UINT) -> BOOL => [Ptr, I32, Ptr, Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getancestor>
    fn GetAncestor(hwnd: HWND, ga_flags: UINT) -> HWND => [Ptr, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getasynckeystate>
    fn GetAsyncKeyState(v_key: INT) -> SHORT => [I32] -> I16;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getautorotationstate>
    fn GetAutoRotationState(p_state: PVOID) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getawarenessfromdpiawarenesscontext>
    fn GetAwarenessFromDpiAwarenessContext(value: DPI_AWARENESS_CONTEXT) -> INT => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getcapture>
    fn GetCapture() -> HWND => [] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getcaretblinktime>
    fn GetCaretBlinkTime() -> UINT => [] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getcaretpos>
    fn GetCaretPos(lp_point: LPPOINT) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getclassinfoexw>
    fn GetClassInfoExW(h_instance: HINSTANCE, lpsz_class: LPCWSTR, lpwcx: LPWNDCLASSEXW) -> BOOL => [Ptr, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getclassinfow>
    fn GetClassInfoW(h_instance: HINSTANCE, lp_class_name: LPCWSTR, lp_wnd_class: LPWNDCLASSW) -> BOOL => [Ptr, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getclasslongptrw>
    fn GetClassLongPtrW(h_wnd: HWND, n_index: INT) -> ULONG_PTR => [Ptr, I32] -> U64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getclasslongw>
    fn GetClassLongW(h_wnd: HWND, n_index: INT) -> DWORD => [Ptr, I32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getclassnamew>
    fn GetClassNameW(h_wnd: HWND, lp_class_name: LPWSTR, n_max_count: INT) -> INT => [Ptr, Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getclassword>
    fn GetClassWord(h_wnd: HWND, n_index: INT) -> WORD => [Ptr, I32] -> U16;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getclientrect>
    fn GetClientRect(h_wnd: HWND, lp_rect: LPRECT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getclipboarddata>
    fn GetClipboardData(u_format: UINT) -> HANDLE => [U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getclipboardformatnamew>
    fn GetClipboardFormatNameW(format: UINT, lpsz_format_name: LPWSTR, cch_max_count: INT) -> INT => [U32, Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getclipboardowner>
    fn GetClipboardOwner() -> HWND => [] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getclipboardsequencenumber>
    fn GetClipboardSequenceNumber() -> DWORD => [] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getclipboardviewer>
    fn GetClipboardViewer() -> HWND => [] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getclipcursor>
    fn GetClipCursor(lp_rect: LPRECT) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getcomboboxinfo>
    fn GetComboBoxInfo(hwnd_combo: HWND, pcbi: PCOMBOBOXINFO) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getcurrentinputmessagesource>
    fn GetCurrentInputMessageSource(input_message_source: INPUT_MESSAGE_SOURCE) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getcursor>
    fn GetCursor() -> HCURSOR => [] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getcursorinfo>
    fn GetCursorInfo(pci: PCURSORINFO) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getcursorpos>
    fn GetCursorPos(lp_point: LPPOINT) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getdc>
    fn GetDC(h_wnd: HWND) -> HDC => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getdcex>
    fn GetDCEx(h_wnd: HWND, hrgn_clip: HRGN, flags: DWORD) -> HDC => [Ptr, Ptr, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getdesktopwindow>
    fn GetDesktopWindow() -> HWND => [] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getdialogbaseunits>
    fn GetDialogBaseUnits() -> LONG => [] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getdialogcontroldpichangebehavior>
    fn GetDialogControlDpiChangeBehavior(h_wnd: HWND) -> UINT => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getdialogdpichangebehavior>
    fn GetDialogDpiChangeBehavior(h_dlg: HWND) -> UINT => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getdisplayconfigbuffersizes>
    fn GetDisplayConfigBufferSizes(flags: UINT, num_path_array_elements: PUINT, num_mode_info_array_elements: PUINT) -> LONG => [U32, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getdlgctrlid>
    fn GetDlgCtrlID(h_wnd: HWND) -> INT => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getdlgitem>
    fn GetDlgItem(h_dlg: HWND, n_id_dlg_item: INT) -> HWND => [Ptr, I32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getdlgitemtextw>
    fn GetDlgItemTextW(h_dlg: HWND, n_id_dlg_item: INT, lp_string: LPWSTR, cch_max: INT) -> UINT => [Ptr, I32, Ptr, I32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getdoubleclicktime>
    fn GetDoubleClickTime() -> UINT => [] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getdpiforsystem>
    fn GetDpiForSystem() -> UINT => [] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getdpiforwindow>
    fn GetDpiForWindow(hwnd: HWND) -> UINT => [Ptr] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getdpifromdpiawarenesscontext>
    fn GetDpiFromDpiAwarenessContext(value: DPI_AWARENESS_CONTEXT) -> UINT => [Ptr] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getfocus>
    fn GetFocus() -> HWND => [] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getforegroundwindow>
    fn GetForegroundWindow() -> HWND => [] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getgestureconfig>
    fn GetGestureConfig(hwnd: HWND, dw_reserved: DWORD, dw_flags: DWORD, pc_i_ds: PUINT, p_gesture_config: PGESTURECONFIG, cb_size: UINT) -> BOOL => [Ptr, U32, U32, Ptr, Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getgestureextraargs>
    fn GetGestureExtraArgs(h_gesture_info: HGESTUREINFO, cb_extra_args: UINT, p_extra_args: PBYTE) -> BOOL => [Ptr, U32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getgestureinfo>
    fn GetGestureInfo(h_gesture_info: HGESTUREINFO, p_gesture_info: PGESTUREINFO) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getguiresources>
    fn GetGuiResources(h_process: HANDLE, ui_flags: DWORD) -> DWORD => [Ptr, U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getguithreadinfo>
    fn GetGUIThreadInfo(id_thread: DWORD, pgui: PGUITHREADINFO) -> BOOL => [U32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-geticoninfo>
    fn GetIconInfo(h_icon: HICON, piconinfo: PICONINFO) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-geticoninfoexw>
    fn GetIconInfoExW(hicon: HICON, piconinfo: PICONINFOEXW) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getinputstate>
    fn GetInputState() -> BOOL => [] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getkeyboardlayout>
    fn GetKeyboardLayout(id_thread: DWORD) -> HKL => [U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getkeyboardlayoutlist>
    fn GetKeyboardLayoutList(n_buff: INT, lp_list: HKL) -> INT => [I32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getkeyboardlayoutnamew>
    fn GetKeyboardLayoutNameW(pwsz_klid: LPWSTR) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getkeyboardstate>
    fn GetKeyboardState(lp_key_state: PBYTE) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getkeyboardtype>
    fn GetKeyboardType(n_type_flag: INT) -> INT => [I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getkeynametextw>
    fn GetKeyNameTextW(l_param: LONG, lp_string: LPWSTR, cch_size: INT) -> INT => [I32, Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getkeystate>
    fn GetKeyState(n_virt_key: INT) -> SHORT => [I32] -> I16;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getlastactivepopup>
    fn GetLastActivePopup(h_wnd: HWND) -> HWND => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getlastinputinfo>
    fn GetLastInputInfo(plii: PLASTINPUTINFO) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getlayeredwindowattributes>
    fn GetLayeredWindowAttributes(hwnd: HWND, pcr_key: LPDWORD, pb_alpha: LPBYTE, pdw_flags: LPDWORD) -> BOOL => [Ptr, Ptr, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getlistboxinfo>
    fn GetListBoxInfo(hwnd: HWND) -> DWORD => [Ptr] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getmenu>
    fn GetMenu(h_wnd: HWND) -> HMENU => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getmenubarinfo>
    fn GetMenuBarInfo(hwnd: HWND, id_object: LONG, id_item: LONG, pmbi: PMENUBARINFO) -> BOOL => [Ptr, I32, I32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getmenucheckmarkdimensions>
    fn GetMenuCheckMarkDimensions() -> LONG => [] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getmenucontexthelpid>
    fn GetMenuContextHelpId(unnamed_param1: HMENU) -> DWORD => [Ptr] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getmenudefaultitem>
    fn GetMenuDefaultItem(h_menu: HMENU, f_by_pos: UINT, gmdi_flags: UINT) -> UINT => [Ptr, U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getmenuinfo>
    fn GetMenuInfo(unnamed_param1: HMENU, unnamed_param2: LPMENUINFO) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getmenuitemcount>
    fn GetMenuItemCount(h_menu: HMENU) -> INT => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getmenuitemid>
    fn GetMenuItemID(h_menu: HMENU, n_pos: INT) -> UINT => [Ptr, I32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getmenuiteminfow>
    fn GetMenuItemInfoW(hmenu: HMENU, item: UINT, f_by_position: BOOL, lpmii: LPMENUITEMINFOW) -> BOOL => [Ptr, U32, I32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getmenuitemrect>
    fn GetMenuItemRect(h_wnd: HWND, h_menu: HMENU, u_item: UINT, lprc_item: LPRECT) -> BOOL => [Ptr, Ptr, U32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getmenustate>
    fn GetMenuState(h_menu: HMENU, u_id: UINT, u_flags: UINT) -> UINT => [Ptr, U32, U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getmenustringw>
    fn GetMenuStringW(h_menu: HMENU, u_id_item: UINT, lp_string: LPWSTR, cch_max: INT, flags: UINT) -> INT => [Ptr, U32, Ptr, I32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getmessageextrainfo>
    fn GetMessageExtraInfo() -> LPARAM => [] -> I64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getmessagepos>
    fn GetMessagePos() -> DWORD => [] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getmessagetime>
    fn GetMessageTime() -> LONG => [] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getmessagew>
    fn GetMessageW(lp_msg: LPMSG, h_wnd: HWND, w_msg_filter_min: UINT, w_msg_filter_max: UINT) -> BOOL => [Ptr, Ptr, U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getmonitorinfow>
    fn GetMonitorInfoW(h_monitor: HMONITOR, lpmi: LPMONITORINFO) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getmousemovepointsex>
    fn GetMouseMovePointsEx(cb_size: UINT, lppt: LPMOUSEMOVEPOINT, lppt_buf: LPMOUSEMOVEPOINT, n_buf_points: INT, resolution: DWORD) -> INT => [U32, Ptr, Ptr, I32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getnextdlggroupitem>
    fn GetNextDlgGroupItem(h_dlg: HWND, h_ctl: HWND, b_previous: BOOL) -> HWND => [Ptr, Ptr, I32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getnextdlgtabitem>
    fn GetNextDlgTabItem(h_dlg: HWND, h_ctl: HWND, b_previous: BOOL) -> HWND => [Ptr, Ptr, I32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getopenclipboardwindow>
    fn GetOpenClipboardWindow() -> HWND => [] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getparent>
    fn GetParent(h_wnd: HWND) -> HWND => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getphysicalcursorpos>
    fn GetPhysicalCursorPos(lp_point: LPPOINT) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getpointerdevice>
    fn GetPointerDevice(device: HANDLE, pointer_device: POINTER_DEVICE_INFO) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getpointerdevicerects>
    fn GetPointerDeviceRects(device: HANDLE, pointer_device_rect: LPRECT, display_rect: LPRECT) -> BOOL => [Ptr, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getpointerinfo>
    fn GetPointerInfo(pointer_id: UINT, pointer_info: POINTER_INFO) -> BOOL => [U32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getpointerinputtransform>
    fn GetPointerInputTransform(pointer_id: UINT, history_count: UINT, input_transform: INPUT_TRANSFORM) -> BOOL => [U32, U32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getpointerpeninfo>
    fn GetPointerPenInfo(pointer_id: UINT, pen_info: POINTER_PEN_INFO) -> BOOL => [U32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getpointertouchinfo>
    fn GetPointerTouchInfo(pointer_id: UINT, touch_info: POINTER_TOUCH_INFO) -> BOOL => [U32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getprocesswindowstation>
    fn GetProcessWindowStation() -> HWINSTA => [] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getpropa>
    fn GetPropA(h_wnd: HWND, lp_string: LPCSTR) -> HANDLE => [Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getpropw>
    fn GetPropW(h_wnd: HWND, lp_string: LPCWSTR) -> HANDLE => [Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getqueuestatus>
    fn GetQueueStatus(flags: UINT) -> DWORD => [U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getrawinputbuffer>
    fn GetRawInputBuffer(p_data: PRAWINPUT, pcb_size: PUINT, cb_size_header: UINT) -> UINT => [Ptr, Ptr, U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getrawinputdata>
    fn GetRawInputData(h_raw_input: HRAWINPUT, ui_command: UINT, p_data: LPVOID, pcb_size: PUINT, cb_size_header: UINT) -> UINT => [Ptr, U32, Ptr, Ptr, U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getrawinputdeviceinfow>
    fn GetRawInputDeviceInfoW(h_device: HANDLE, ui_command: UINT, p_data: LPVOID, pcb_size: PUINT) -> UINT => [Ptr, U32, Ptr, Ptr] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getrawinputdevicelist>
    fn GetRawInputDeviceList(p_raw_input_device_list: PRAWINPUTDEVICELIST, pui_num_devices: PUINT, cb_size: UINT) -> UINT => [Ptr, Ptr, U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getrawpointerdevicedata>
    fn GetRawPointerDeviceData(pointer_id: UINT, history_count: UINT, properties_count: UINT, p_properties: POINTER_DEVICE_PROPERTY, p_values: LPINT) -> BOOL => [U32, U32, U32, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getregisteredrawinputdevices>
    fn GetRegisteredRawInputDevices(p_raw_input_devices: PRAWINPUTDEVICE, pui_num_devices: PUINT, cb_size: UINT) -> UINT => [Ptr, Ptr, U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getscrollbarinfo>
    fn GetScrollBarInfo(hwnd: HWND, id_object: LONG, psbi: PSCROLLBARINFO) -> BOOL => [Ptr, I32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getscrollinfo>
    fn GetScrollInfo(hwnd: HWND, n_bar: INT, lpsi: LPSCROLLINFO) -> BOOL => [Ptr, I32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getscrollpos>
    fn GetScrollPos(h_wnd: HWND, n_bar: INT) -> INT => [Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getscrollrange>
    fn GetScrollRange(h_wnd: HWND, n_bar: INT, lp_min_pos: LPINT, lp_max_pos: LPINT) -> BOOL => [Ptr, I32, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getshellwindow>
    fn GetShellWindow() -> HWND => [] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getsubmenu>
    fn GetSubMenu(h_menu: HMENU, n_pos: INT) -> HMENU => [Ptr, I32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getsyscolor>
    fn GetSysColor(n_index: INT) -> DWORD => [I32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getsyscolorbrush>
    fn GetSysColorBrush(n_index: INT) -> HBRUSH => [I32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getsystemdpiforprocess>
    fn GetSystemDpiForProcess(h_process: HANDLE) -> UINT => [Ptr] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getsystemmenu>
    fn GetSystemMenu(h_wnd: HWND, b_revert: BOOL) -> HMENU => [Ptr, I32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getsystemmetrics>
    fn GetSystemMetrics(n_index: INT) -> INT => [I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getsystemmetricsfordpi>
    fn GetSystemMetricsForDpi(n_index: INT, dpi: UINT) -> INT => [I32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-gettabbedtextextentw>
    fn GetTabbedTextExtentW(hdc: HDC, lp_string: LPCWSTR, ch_count: INT, n_tab_positions: INT, lpn_tab_stop_positions: LPINT) -> DWORD => [Ptr, Ptr, I32, I32, Ptr] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getthreaddesktop>
    fn GetThreadDesktop(dw_thread_id: DWORD) -> HDESK => [U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getthreaddpiawarenesscontext>
    fn GetThreadDpiAwarenessContext() -> DPI_AWARENESS_CONTEXT => [] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getthreaddpihostingbehavior>
    fn GetThreadDpiHostingBehavior() -> INT => [] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-gettitlebarinfo>
    fn GetTitleBarInfo(hwnd: HWND, pti: PTITLEBARINFO) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-gettopwindow>
    fn GetTopWindow(h_wnd: HWND) -> HWND => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-gettouchinputinfo>
    fn GetTouchInputInfo(h_touch_input: HTOUCHINPUT, c_inputs: UINT, p_inputs: PTOUCHINPUT, cb_size: INT) -> BOOL => [Ptr, U32, Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getunpredictedmessagepos>
    fn GetUnpredictedMessagePos() -> DWORD => [] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getupdatedclipboardformats>
    fn GetUpdatedClipboardFormats(lpui_formats: PUINT, c_formats: UINT, pc_formats_out: PUINT) -> BOOL => [Ptr, U32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getupdaterect>
    fn GetUpdateRect(h_wnd: HWND, lp_rect: LPRECT, b_erase: BOOL) -> BOOL => [Ptr, Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getupdatergn>
    fn GetUpdateRgn(h_wnd: HWND, h_rgn: HRGN, b_erase: BOOL) -> INT => [Ptr, Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getuserobjectinformationw>
    fn GetUserObjectInformationW(h_obj: HANDLE, n_index: INT, pv_info: PVOID, n_length: DWORD, lpn_length_needed: LPDWORD) -> BOOL => [Ptr, I32, Ptr, U32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getuserobjectsecurity>
    fn GetUserObjectSecurity(h_obj: HANDLE, p_si_requested: PSECURITY_INFORMATION, p_sid: PSECURITY_DESCRIPTOR, n_length: DWORD, lpn_length_needed: LPDWORD) -> BOOL => [Ptr, Ptr, Ptr, U32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getwindow>
    fn GetWindow(h_wnd: HWND, u_cmd: UINT) -> HWND => [Ptr, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getwindowcontexthelpid>
    fn GetWindowContextHelpId(unnamed_param1: HWND) -> DWORD => [Ptr] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getwindowdc>
    fn GetWindowDC(h_wnd: HWND) -> HDC => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getwindowdisplayaffinity>
    fn GetWindowDisplayAffinity(h_wnd: HWND, pdw_affinity: LPDWORD) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getwindowdpiawarenesscontext>
    fn GetWindowDpiAwarenessContext(hwnd: HWND) -> DPI_AWARENESS_CONTEXT => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getwindowdpihostingbehavior>
    fn GetWindowDpiHostingBehavior(hwnd: HWND) -> INT => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getwindowinfo>
    fn GetWindowInfo(hwnd: HWND, pwi: PWINDOWINFO) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getwindowlongptrw>
    fn GetWindowLongPtrW(h_wnd: HWND, n_index: INT) -> LONG_PTR => [Ptr, I32] -> I64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getwindowlongw>
    fn GetWindowLongW(h_wnd: HWND, n_index: INT) -> LONG => [Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getwindowmodulefilenamew>
    fn GetWindowModuleFileNameW(hwnd: HWND, psz_file_name: LPWSTR, cch_file_name_max: UINT) -> UINT => [Ptr, Ptr, U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getwindowplacement>
    fn GetWindowPlacement(h_wnd: HWND, lpwndpl: WINDOWPLACEMENT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getwindowrect>
    fn GetWindowRect(h_wnd: HWND, lp_rect: LPRECT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getwindowrgn>
    fn GetWindowRgn(h_wnd: HWND, h_rgn: HRGN) -> INT => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getwindowrgnbox>
    fn GetWindowRgnBox(h_wnd: HWND, lprc: LPRECT) -> INT => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getwindowtextlengthw>
    fn GetWindowTextLengthW(h_wnd: HWND) -> INT => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getwindowtextw>
    fn GetWindowTextW(h_wnd: HWND, lp_string: LPWSTR, n_max_count: INT) -> INT => [Ptr, Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getwindowthreadprocessid>
    fn GetWindowThreadProcessId(h_wnd: HWND, lpdw_process_id: LPDWORD) -> DWORD => [Ptr, Ptr] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getwindowword>
    fn GetWindowWord(h_wnd: HWND, n_index: INT) -> WORD => [Ptr, I32] -> U16;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-graystringw>
    fn GrayStringW(h_dc: HDC, h_brush: HBRUSH, lp_output_func: GRAYSTRINGPROC, lp_data: LPARAM, n_count: INT, x: INT, y: INT, n_width: INT, n_height: INT) -> BOOL => [Ptr, Ptr, Ptr, I64, I32, I32, I32, I32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-hidecaret>
    fn HideCaret(h_wnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-hilitemenuitem>
    fn HiliteMenuItem(h_wnd: HWND, h_menu: HMENU, u_id_hilite_item: UINT, u_hilite: UINT) -> BOOL => [Ptr, Ptr, U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-inflaterect>
    fn InflateRect(lprc: LPRECT, dx: INT, dy: INT) -> BOOL => [Ptr, I32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-initializetouchinjection>
    fn InitializeTouchInjection(max_count: UINT, dw_mode: DWORD) -> BOOL => [U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-injectsyntheticpointerinput>
    fn InjectSyntheticPointerInput(device: HSYNTHETICPOINTERDEVICE, pointer_info: POINTER_TYPE_INFO, count: UINT) -> BOOL => [Ptr, Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-injecttouchinput>
    fn InjectTouchInput(count: UINT, contacts: POINTER_TOUCH_INFO) -> BOOL => [U32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-insendmessage>
    fn InSendMessage() -> BOOL => [] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-insendmessageex>
    fn InSendMessageEx(lp_reserved: LPVOID) -> DWORD => [Ptr] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-insertmenuitemw>
    fn InsertMenuItemW(hmenu: HMENU, item: UINT, f_by_position: BOOL, lpmi: LPCMENUITEMINFOW) -> BOOL => [Ptr, U32, I32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-insertmenuw>
    fn InsertMenuW(h_menu: HMENU, u_position: UINT, u_flags: UINT, u_id_new_item: UINT_PTR, lp_new_item: LPCWSTR) -> BOOL => [Ptr, U32, U32, U64, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-intersectrect>
    fn IntersectRect(lprc_dst: LPRECT, lprc_src1: LPRECT, lprc_src2: LPRECT) -> BOOL => [Ptr, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-invalidaterect>
    fn InvalidateRect(h_wnd: HWND, lp_rect: LPRECT, b_erase: BOOL) -> BOOL => [Ptr, Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-invalidatergn>
    fn InvalidateRgn(h_wnd: HWND, h_rgn: HRGN, b_erase: BOOL) -> BOOL => [Ptr, Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-invertrect>
    fn InvertRect(h_dc: HDC, lprc: LPRECT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-ischaralphanumericw>
    fn IsCharAlphaNumericW(ch: WCHAR) -> BOOL => [U16] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-ischaralphaw>
    fn IsCharAlphaW(ch: WCHAR) -> BOOL => [U16] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-ischarlowerw>
    fn IsCharLowerW(ch: WCHAR) -> BOOL => [U16] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-ischarupperw>
    fn IsCharUpperW(ch: WCHAR) -> BOOL => [U16] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-ischild>
    fn IsChild(h_wnd_parent: HWND, h_wnd: HWND) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-isclipboardformatavailable>
    fn IsClipboardFormatAvailable(format: UINT) -> BOOL => [U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-isdialogmessagew>
    fn IsDialogMessageW(h_dlg: HWND, lp_msg: LPMSG) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-isdlgbuttonchecked>
    fn IsDlgButtonChecked(h_dlg: HWND, n_id_button: INT) -> UINT => [Ptr, I32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-isguithread>
    fn IsGUIThread(b_convert: BOOL) -> BOOL => [I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-ishungappwindow>
    fn IsHungAppWindow(hwnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-isiconic>
    fn IsIconic(h_wnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-isimmersiveprocess>
    fn IsImmersiveProcess(h_process: HANDLE) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-ismenu>
    fn IsMenu(h_menu: HMENU) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-ismouseinpointerenabled>
    fn IsMouseInPointerEnabled() -> BOOL => [] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-isprocessdpiaware>
    fn IsProcessDPIAware() -> BOOL => [] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-isrectempty>
    fn IsRectEmpty(lprc: LPRECT) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-istouchwindow>
    fn IsTouchWindow(hwnd: HWND, pul_flags: PULONG) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-isvaliddpiawarenesscontext>
    fn IsValidDpiAwarenessContext(value: DPI_AWARENESS_CONTEXT) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-iswindow>
    fn IsWindow(h_wnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-iswindowarranged>
    fn IsWindowArranged(hwnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-iswindowenabled>
    fn IsWindowEnabled(h_wnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-iswindowunicode>
    fn IsWindowUnicode(h_wnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-iswindowvisible>
    fn IsWindowVisible(h_wnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-iswineventhookinstalled>
    fn IsWinEventHookInstalled(event: DWORD) -> BOOL => [U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-iswow64message>
    fn IsWow64Message() -> BOOL => [] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-iszoomed>
    fn IsZoomed(h_wnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-killtimer>
    fn KillTimer(h_wnd: HWND, u_id_event: UINT_PTR) -> BOOL => [Ptr, U64] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-loadacceleratorsw>
    fn LoadAcceleratorsW(h_instance: HINSTANCE, lp_table_name: LPCWSTR) -> HACCEL => [Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-loadbitmapw>
    fn LoadBitmapW(h_instance: HINSTANCE, lp_bitmap_name: LPCWSTR) -> HBITMAP => [Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-loadcursorfromfilew>
    fn LoadCursorFromFileW(lp_file_name: LPCWSTR) -> HCURSOR => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-loadcursorw>
    fn LoadCursorW(h_instance: HINSTANCE, lp_cursor_name: LPCWSTR) -> HCURSOR => [Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-loadiconw>
    fn LoadIconW(h_instance: HINSTANCE, lp_icon_name: LPCWSTR) -> HICON => [Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-loadimagew>
    fn LoadImageW(h_inst: HINSTANCE, name: LPCWSTR, type_: UINT, cx: INT, cy: INT, fu_load: UINT) -> HANDLE => [Ptr, Ptr, U32, I32, I32, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-loadkeyboardlayoutw>
    fn LoadKeyboardLayoutW(pwsz_klid: LPCWSTR, flags: UINT) -> HKL => [Ptr, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-loadmenuindirectw>
    fn LoadMenuIndirectW(lp_menu_template: MENUTEMPLATEW) -> HMENU => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-loadmenuw>
    fn LoadMenuW(h_instance: HINSTANCE, lp_menu_name: LPCWSTR) -> HMENU => [Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-loadstringw>
    fn LoadStringW(h_instance: HINSTANCE, u_id: UINT, lp_buffer: LPWSTR, cch_buffer_max: INT) -> INT => [Ptr, U32, Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-locksetforegroundwindow>
    fn LockSetForegroundWindow(u_lock_code: UINT) -> BOOL => [U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-lockwindowupdate>
    fn LockWindowUpdate(h_wnd_lock: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-lockworkstation>
    fn LockWorkStation() -> BOOL => [] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-logicaltophysicalpoint>
    fn LogicalToPhysicalPoint(h_wnd: HWND, lp_point: LPPOINT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-logicaltophysicalpointforpermonitordpi>
    fn LogicalToPhysicalPointForPerMonitorDPI(h_wnd: HWND, lp_point: LPPOINT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-lookupiconidfromdirectory>
    fn LookupIconIdFromDirectory(presbits: PBYTE, f_icon: BOOL) -> INT => [Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-lookupiconidfromdirectoryex>
    fn LookupIconIdFromDirectoryEx(presbits: PBYTE, f_icon: BOOL, cx_desired: INT, cy_desired: INT, flags: UINT) -> INT => [Ptr, I32, I32, I32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-mapdialogrect>
    fn MapDialogRect(h_dlg: HWND, lp_rect: LPRECT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-mapvirtualkeyexw>
    fn MapVirtualKeyExW(u_code: UINT, u_map_type: UINT, dwhkl: HKL) -> UINT => [U32, U32, Ptr] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-mapvirtualkeyw>
    fn MapVirtualKeyW(u_code: UINT, u_map_type: UINT) -> UINT => [U32, U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-mapwindowpoints>
    fn MapWindowPoints(h_wnd_from: HWND, h_wnd_to: HWND, lp_points: LPPOINT, c_points: UINT) -> INT => [Ptr, Ptr, Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-menuitemfrompoint>
    fn MenuItemFromPoint(h_wnd: HWND, h_menu: HMENU, pt_screen: LPPOINT) -> INT => [Ptr, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-messagebeep>
    fn MessageBeep(u_type: UINT) -> BOOL => [U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-messageboxexw>
    fn MessageBoxExW(h_wnd: HWND, lp_text: LPCWSTR, lp_caption: LPCWSTR, u_type: UINT, w_language_id: WORD) -> INT => [Ptr, Ptr, Ptr, U32, U16] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-messageboxindirectw>
    fn MessageBoxIndirectW(lpmbp: MSGBOXPARAMSW) -> INT => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-messageboxw>
    fn MessageBoxW(h_wnd: HWND, lp_text: LPCWSTR, lp_caption: LPCWSTR, u_type: UINT) -> INT => [Ptr, Ptr, Ptr, U32] -> I32;
    /// Undocumented timed variant of `MessageBoxW`: the dialog dismisses
    /// itself after `dw_milliseconds`, returning `32000` on timeout.
    fn MessageBoxTimeoutW(h_wnd: HWND, lp_text: LPCWSTR, lp_caption: LPCWSTR, u_type: UINT, w_language_id: WORD, dw_milliseconds: DWORD) -> INT => [Ptr, Ptr, Ptr, U32, U16, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-modifymenuw>
    fn ModifyMenuW(h_mnu: HMENU, u_position: UINT, u_flags: UINT, u_id_new_item: UINT_PTR, lp_new_item: LPCWSTR) -> BOOL => [Ptr, U32, U32, U64, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-monitorfrompoint>
    fn MonitorFromPoint(pt: LPPOINT, dw_flags: DWORD) -> HMONITOR => [Ptr, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-monitorfromrect>
    fn MonitorFromRect(lprc: LPCRECT, dw_flags: DWORD) -> HMONITOR => [Ptr, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-monitorfromwindow>
    fn MonitorFromWindow(hwnd: HWND, dw_flags: DWORD) -> HMONITOR => [Ptr, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-movewindow>
    fn MoveWindow(h_wnd: HWND, x: INT, y: INT, n_width: INT, n_height: INT, b_repaint: BOOL) -> BOOL => [Ptr, I32, I32, I32, I32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-msgwaitformultipleobjects>
    fn MsgWaitForMultipleObjects(n_count: DWORD, p_handles: HANDLE, f_wait_all: BOOL, dw_milliseconds: DWORD, dw_wake_mask: DWORD) -> DWORD => [U32, Ptr, I32, U32, U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-msgwaitformultipleobjectsex>
    fn MsgWaitForMultipleObjectsEx(n_count: DWORD, p_handles: HANDLE, dw_milliseconds: DWORD, dw_wake_mask: DWORD, dw_flags: DWORD) -> DWORD => [U32, Ptr, U32, U32, U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-notifywinevent>
    fn NotifyWinEvent(event: DWORD, hwnd: HWND, id_object: LONG, id_child: LONG) -> () => [U32, Ptr, I32, I32] -> Void;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-oemkeyscan>
    fn OemKeyScan(w_oem_char: WORD) -> DWORD => [U16] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-oemtocharbuffw>
    fn OemToCharBuffW(lpsz_src: LPCSTR, lpsz_dst: LPWSTR, cch_dst_length: DWORD) -> BOOL => [Ptr, Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-oemtocharw>
    fn OemToCharW(p_src: LPCSTR, p_dst: LPWSTR) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-offsetrect>
    fn OffsetRect(lprc: LPRECT, dx: INT, dy: INT) -> BOOL => [Ptr, I32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-openclipboard>
    fn OpenClipboard(h_wnd_new_owner: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-opendesktopw>
    fn OpenDesktopW(lpsz_desktop: LPCWSTR, dw_flags: DWORD, f_inherit: BOOL, dw_desired_access: ACCESS_MASK) -> HDESK => [Ptr, U32, I32, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-openicon>
    fn OpenIcon(h_wnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-openinputdesktop>
    fn OpenInputDesktop(dw_flags: DWORD, f_inherit: BOOL, dw_desired_access: ACCESS_MASK) -> HDESK => [U32, I32, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-openwindowstationw>
    fn OpenWindowStationW(lpsz_win_sta: LPCWSTR, f_inherit: BOOL, dw_desired_access: ACCESS_MASK) -> HWINSTA => [Ptr, I32, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-paintdesktop>
    fn PaintDesktop(hdc: HDC) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-peekmessagew>
    fn PeekMessageW(lp_msg: LPMSG, h_wnd: HWND, w_msg_filter_min: UINT, w_msg_filter_max: UINT, w_remove_msg: UINT) -> BOOL => [Ptr, Ptr, U32, U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-physicaltologicalpoint>
    fn PhysicalToLogicalPoint(h_wnd: HWND, lp_point: LPPOINT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-physicaltologicalpointforpermonitordpi>
    fn PhysicalToLogicalPointForPerMonitorDPI(h_wnd: HWND, lp_point: LPPOINT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-postmessagew>
    fn PostMessageW(h_wnd: HWND, msg: UINT, w_param: WPARAM, l_param: LPARAM) -> BOOL => [Ptr, U32, U64, I64] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-postquitmessage>
    fn PostQuitMessage(n_exit_code: INT) -> () => [I32] -> Void;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-postthreadmessagew>
    fn PostThreadMessageW(id_thread: DWORD, msg: UINT, w_param: WPARAM, l_param: LPARAM) -> BOOL => [U32, U32, U64, I64] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-printwindow>
    fn PrintWindow(hwnd: HWND, hdc_blt: HDC, n_flags: UINT) -> BOOL => [Ptr, Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-ptinrect>
    fn PtInRect(lprc: LPRECT, pt: LPPOINT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-realchildwindowfrompoint>
    fn RealChildWindowFromPoint(hwnd_parent: HWND, pt_parent_client_coords: LPPOINT) -> HWND => [Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-realgetwindowclassw>
    fn RealGetWindowClassW(hwnd: HWND, ptsz_class_name: LPWSTR, cch_class_name_max: UINT) -> UINT => [Ptr, Ptr, U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-redrawwindow>
    fn RedrawWindow(h_wnd: HWND, lprc_update: LPRECT, hrgn_update: HRGN, flags: UINT) -> BOOL => [Ptr, Ptr, Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-registerclassexw>
    fn RegisterClassExW(unnamed_param1: WNDCLASSEXW) -> ATOM => [Ptr] -> U16;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-registerclassw>
    fn RegisterClassW(lp_wnd_class: WNDCLASSW) -> ATOM => [Ptr] -> U16;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-registerclipboardformatw>
    fn RegisterClipboardFormatW(lpsz_format: LPCWSTR) -> UINT => [Ptr] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-registerdevicenotificationw>
    fn RegisterDeviceNotificationW(h_recipient: HANDLE, notification_filter: LPVOID, flags: DWORD) -> HDEVNOTIFY => [Ptr, Ptr, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-registerhotkey>
    fn RegisterHotKey(h_wnd: HWND, id: INT, fs_modifiers: UINT, vk: UINT) -> BOOL => [Ptr, I32, U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-registerpointerdevicenotifications>
    fn RegisterPointerDeviceNotifications(window: HWND, notify_range: BOOL) -> BOOL => [Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-registerpointerinputtarget>
    fn RegisterPointerInputTarget(hwnd: HWND, pointer_type: UINT) -> BOOL => [Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-registerpowersettingnotification>
    fn RegisterPowerSettingNotification(h_recipient: HANDLE, power_setting_guid: LPCGUID, flags: DWORD) -> HPOWERNOTIFY => [Ptr, Ptr, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-registerrawinputdevices>
    fn RegisterRawInputDevices(p_raw_input_devices: PCRAWINPUTDEVICE, ui_num_devices: UINT, cb_size: UINT) -> BOOL => [Ptr, U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-registershellhookwindow>
    fn RegisterShellHookWindow(hwnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-registersuspendresumenotification>
    fn RegisterSuspendResumeNotification(h_recipient: HANDLE, flags: DWORD) -> HPOWERNOTIFY => [Ptr, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-registertouchhittestingwindow>
    fn RegisterTouchHitTestingWindow(hwnd: HWND, value: ULONG) -> BOOL => [Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-registertouchwindow>
    fn RegisterTouchWindow(hwnd: HWND, ul_flags: ULONG) -> BOOL => [Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-registerwindowmessagew>
    fn RegisterWindowMessageW(lp_string: LPCWSTR) -> UINT => [Ptr] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-releasecapture>
    fn ReleaseCapture() -> BOOL => [] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-releasedc>
    fn ReleaseDC(h_wnd: HWND, h_dc: HDC) -> INT => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-removeclipboardformatlistener>
    fn RemoveClipboardFormatListener(hwnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-removemenu>
    fn RemoveMenu(h_menu: HMENU, u_position: UINT, u_flags: UINT) -> BOOL => [Ptr, U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-removepropa>
    fn RemovePropA(h_wnd: HWND, lp_string: LPCSTR) -> HANDLE => [Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-removepropw>
    fn RemovePropW(h_wnd: HWND, lp_string: LPCWSTR) -> HANDLE => [Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-replymessage>
    fn ReplyMessage(l_result: LRESULT) -> BOOL => [I64] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-screentoclient>
    fn ScreenToClient(h_wnd: HWND, lp_point: LPPOINT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-scrolldc>
    fn ScrollDC(h_dc: HDC, dx: INT, dy: INT, lprc_scroll: LPRECT, lprc_clip: LPRECT, hrgn_update: HRGN, lprc_update: LPRECT) -> BOOL => [Ptr, I32, I32, Ptr, Ptr, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-scrollwindow>
    fn ScrollWindow(h_wnd: HWND, x_amount: INT, y_amount: INT, lp_rect: LPRECT, lp_clip_rect: LPRECT) -> BOOL => [Ptr, I32, I32, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-scrollwindowex>
    fn ScrollWindowEx(h_wnd: HWND, dx: INT, dy: INT, prc_scroll: LPRECT, prc_clip: LPRECT, hrgn_update: HRGN, prc_update: LPRECT, flags: UINT) -> INT => [Ptr, I32, I32, Ptr, Ptr, Ptr, Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-senddlgitemmessagew>
    fn SendDlgItemMessageW(h_dlg: HWND, n_id_dlg_item: INT, msg: UINT, w_param: WPARAM, l_param: LPARAM) -> LRESULT => [Ptr, I32, U32, U64, I64] -> I64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-sendinput>
    fn SendInput(c_inputs: UINT, p_inputs: LPINPUT, cb_size: INT) -> UINT => [U32, Ptr, I32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-sendmessagecallbackw>
    fn SendMessageCallbackW(h_wnd: HWND, msg: UINT, w_param: WPARAM, l_param: LPARAM, lp_result_call_back: SENDASYNCPROC, dw_data: ULONG_PTR) -> BOOL => [Ptr, U32, U64, I64, Ptr, U64] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-sendmessagetimeoutw>
    fn SendMessageTimeoutW(h_wnd: HWND, msg: UINT, w_param: WPARAM, l_param: LPARAM, fu_flags: UINT, u_timeout: UINT, lpdw_result: PDWORD_PTR) -> LRESULT => [Ptr, U32, U64, I64, U32, U32, Ptr] -> I64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-sendmessagew>
    fn SendMessageW(h_wnd: HWND, msg: UINT, w_param: WPARAM, l_param: LPARAM) -> LRESULT => [Ptr, U32, U64, I64] -> I64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-sendnotifymessagew>
    fn SendNotifyMessageW(h_wnd: HWND, msg: UINT, w_param: WPARAM, l_param: LPARAM) -> BOOL => [Ptr, U32, U64, I64] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setactivewindow>
    fn SetActiveWindow(h_wnd: HWND) -> HWND => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setcapture>
    fn SetCapture(h_wnd: HWND) -> HWND => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setcaretblinktime>
    fn SetCaretBlinkTime(u_m_seconds: UINT) -> BOOL => [U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setcaretpos>
    fn SetCaretPos(x: INT, y: INT) -> BOOL => [I32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setclasslongptrw>
    fn SetClassLongPtrW(h_wnd: HWND, n_index: INT, dw_new_long: LONG_PTR) -> ULONG_PTR => [Ptr, I32, I64] -> U64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setclasslongw>
    fn SetClassLongW(h_wnd: HWND, n_index: INT, dw_new_long: LONG) -> DWORD => [Ptr, I32, I32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setclassword>
    fn SetClassWord(h_wnd: HWND, n_index: INT, w_new_word: WORD) -> WORD => [Ptr, I32, U16] -> U16;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setclipboarddata>
    fn SetClipboardData(u_format: UINT, h_mem: HANDLE) -> HANDLE => [U32, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setclipboardviewer>
    fn SetClipboardViewer(h_wnd_new_viewer: HWND) -> HWND => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setcoalescabletimer>
    fn SetCoalescableTimer(h_wnd: HWND, n_id_event: UINT_PTR, u_elapse: UINT, lp_timer_func: TIMERPROC, u_tolerance_delay: ULONG) -> UINT_PTR => [Ptr, U64, U32, Ptr, U32] -> U64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setcursor>
    fn SetCursor(h_cursor: HCURSOR) -> HCURSOR => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setcursorpos>
    fn SetCursorPos(x: INT, y: INT) -> BOOL => [I32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setdialogcontroldpichangebehavior>
    fn SetDialogControlDpiChangeBehavior(h_wnd: HWND, mask: UINT, values: UINT) -> BOOL => [Ptr, U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setdialogdpichangebehavior>
    fn SetDialogDpiChangeBehavior(h_dlg: HWND, mask: UINT, values: UINT) -> BOOL => [Ptr, U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setdisplayautorotationpreferences>
    fn SetDisplayAutoRotationPreferences(orientation: INT) -> BOOL => [U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setdlgitemint>
    fn SetDlgItemInt(h_dlg: HWND, n_id_dlg_item: INT, u_value: UINT, b_signed: BOOL) -> BOOL => [Ptr, I32, U32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setdlgitemtextw>
    fn SetDlgItemTextW(h_dlg: HWND, n_id_dlg_item: INT, lp_string: LPCWSTR) -> BOOL => [Ptr, I32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setdoubleclicktime>
    fn SetDoubleClickTime(unnamed_param1: UINT) -> BOOL => [U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setfocus>
    fn SetFocus(h_wnd: HWND) -> HWND => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setforegroundwindow>
    fn SetForegroundWindow(h_wnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setkeyboardstate>
    fn SetKeyboardState(lp_key_state: LPBYTE) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setlasterrorex>
    fn SetLastErrorEx(dw_err_code: DWORD, dw_type: DWORD) -> () => [U32, U32] -> Void;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setlayeredwindowattributes>
    fn SetLayeredWindowAttributes(hwnd: HWND, cr_key: COLORREF, b_alpha: BYTE, dw_flags: DWORD) -> BOOL => [Ptr, U32, U8, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setmenu>
    fn SetMenu(h_wnd: HWND, h_menu: HMENU) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setmenucontexthelpid>
    fn SetMenuContextHelpId(unnamed_param1: HMENU, unnamed_param2: DWORD) -> BOOL => [Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setmenudefaultitem>
    fn SetMenuDefaultItem(h_menu: HMENU, u_item: UINT, f_by_pos: UINT) -> BOOL => [Ptr, U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setmenuinfo>
    fn SetMenuInfo(unnamed_param1: HMENU, unnamed_param2: LPCMENUINFO) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setmenuitembitmaps>
    fn SetMenuItemBitmaps(h_menu: HMENU, u_position: UINT, u_flags: UINT, h_bitmap_unchecked: HBITMAP, h_bitmap_checked: HBITMAP) -> BOOL => [Ptr, U32, U32, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setmenuiteminfow>
    fn SetMenuItemInfoW(hmenu: HMENU, item: UINT, f_by_position: BOOL, lpmii: LPCMENUITEMINFOW) -> BOOL => [Ptr, U32, I32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setmessageextrainfo>
    fn SetMessageExtraInfo(l_param: LPARAM) -> LPARAM => [I64] -> I64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setparent>
    fn SetParent(h_wnd_child: HWND, h_wnd_new_parent: HWND) -> HWND => [Ptr, Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setphysicalcursorpos>
    fn SetPhysicalCursorPos(x: INT, y: INT) -> BOOL => [I32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setprocessdefaultlayout>
    fn SetProcessDefaultLayout(dw_default_layout: DWORD) -> BOOL => [U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setprocessdpiaware>
    fn SetProcessDPIAware() -> BOOL => [] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setprocessdpiawarenesscontext>
    fn SetProcessDpiAwarenessContext(value: DPI_AWARENESS_CONTEXT) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setprocesswindowstation>
    fn SetProcessWindowStation(h_win_sta: HWINSTA) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setpropa>
    fn SetPropA(h_wnd: HWND, lp_string: LPCSTR, h_data: HANDLE) -> BOOL => [Ptr, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setpropw>
    fn SetPropW(h_wnd: HWND, lp_string: LPCWSTR, h_data: HANDLE) -> BOOL => [Ptr, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setrect>
    fn SetRect(lprc: LPRECT, x_left: INT, y_top: INT, x_right: INT, y_bottom: INT) -> BOOL => [Ptr, I32, I32, I32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setrectempty>
    fn SetRectEmpty(lprc: LPRECT) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setscrollinfo>
    fn SetScrollInfo(hwnd: HWND, n_bar: INT, lpsi: LPCSCROLLINFO, redraw: BOOL) -> INT => [Ptr, I32, Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setscrollpos>
    fn SetScrollPos(h_wnd: HWND, n_bar: INT, n_pos: INT, b_redraw: BOOL) -> INT => [Ptr, I32, I32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setscrollrange>
    fn SetScrollRange(h_wnd: HWND, n_bar: INT, n_min_pos: INT, n_max_pos: INT, b_redraw: BOOL) -> BOOL => [Ptr, I32, I32, I32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setsyscolors>
    fn SetSysColors(c_elements: INT, lpa_elements: LPINT, lpa_rgb_values: LPDWORD) -> BOOL => [I32, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setsystemcursor>
    fn SetSystemCursor(hcur: HCURSOR, id: DWORD) -> BOOL => [Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setthreaddesktop>
    fn SetThreadDesktop(h_desktop: HDESK) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setthreaddpiawarenesscontext>
    fn SetThreadDpiAwarenessContext(dpi_context: DPI_AWARENESS_CONTEXT) -> DPI_AWARENESS_CONTEXT => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setthreaddpihostingbehavior>
    fn SetThreadDpiHostingBehavior(value: INT) -> INT => [I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-settimer>
    fn SetTimer(h_wnd: HWND, n_id_event: UINT_PTR, u_elapse: UINT, lp_timer_func: TIMERPROC) -> UINT_PTR => [Ptr, U64, U32, Ptr] -> U64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setuserobjectinformationw>
    fn SetUserObjectInformationW(h_obj: HANDLE, n_index: INT, pv_info: PVOID, n_length: DWORD) -> BOOL => [Ptr, I32, Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setuserobjectsecurity>
    fn SetUserObjectSecurity(h_obj: HANDLE, p_si_requested: PSECURITY_INFORMATION, p_sid: PSECURITY_DESCRIPTOR) -> BOOL => [Ptr, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setwindowcontexthelpid>
    fn SetWindowContextHelpId(unnamed_param1: HWND, unnamed_param2: DWORD) -> BOOL => [Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setwindowdisplayaffinity>
    fn SetWindowDisplayAffinity(h_wnd: HWND, dw_affinity: DWORD) -> BOOL => [Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setwindowfeedbacksetting>
    fn SetWindowFeedbackSetting(hwnd: HWND, feedback: UINT, dw_flags: DWORD, size: UINT, configuration: PVOID) -> BOOL => [Ptr, U32, U32, U32, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setwindowlongptrw>
    fn SetWindowLongPtrW(h_wnd: HWND, n_index: INT, dw_new_long: LONG_PTR) -> LONG_PTR => [Ptr, I32, I64] -> I64;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setwindowlongw>
    fn SetWindowLongW(h_wnd: HWND, n_index: INT, dw_new_long: LONG) -> LONG => [Ptr, I32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setwindowplacement>
    fn SetWindowPlacement(h_wnd: HWND, lpwndpl: WINDOWPLACEMENT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setwindowpos>
    fn SetWindowPos(h_wnd: HWND, h_wnd_insert_after: HWND, x: INT, y: INT, cx: INT, cy: INT, u_flags: UINT) -> BOOL => [Ptr, Ptr, I32, I32, I32, I32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setwindowrgn>
    fn SetWindowRgn(h_wnd: HWND, h_rgn: HRGN, b_redraw: BOOL) -> INT => [Ptr, Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setwindowshookexw>
    fn SetWindowsHookExW(id_hook: INT, lpfn: HOOKPROC, hmod: HINSTANCE, dw_thread_id: DWORD) -> HHOOK => [I32, Ptr, Ptr, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setwindowtextw>
    fn SetWindowTextW(h_wnd: HWND, lp_string: LPCWSTR) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setwineventhook>
    fn SetWinEventHook(event_min: DWORD, event_max: DWORD, hmod_win_event_proc: HMODULE, pfn_win_event_proc: WINEVENTPROC, id_process: DWORD, id_thread: DWORD, dw_flags: DWORD) -> HWINEVENTHOOK => [U32, U32, Ptr, Ptr, U32, U32, U32] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-showcaret>
    fn ShowCaret(h_wnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-showcursor>
    fn ShowCursor(b_show: BOOL) -> INT => [I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-showownedpopups>
    fn ShowOwnedPopups(h_wnd: HWND, f_show: BOOL) -> BOOL => [Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-showscrollbar>
    fn ShowScrollBar(h_wnd: HWND, w_bar: INT, b_show: BOOL) -> BOOL => [Ptr, I32, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-showwindow>
    fn ShowWindow(h_wnd: HWND, n_cmd_show: INT) -> BOOL => [Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-showwindowasync>
    fn ShowWindowAsync(h_wnd: HWND, n_cmd_show: INT) -> BOOL => [Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-shutdownblockreasoncreate>
    fn ShutdownBlockReasonCreate(h_wnd: HWND, pwsz_reason: LPCWSTR) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-shutdownblockreasondestroy>
    fn ShutdownBlockReasonDestroy(h_wnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-skippointerframemessages>
    fn SkipPointerFrameMessages(pointer_id: UINT) -> BOOL => [U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-subtractrect>
    fn SubtractRect(lprc_dst: LPRECT, lprc_src1: LPRECT, lprc_src2: LPRECT) -> BOOL => [Ptr, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-swapmousebutton>
    fn SwapMouseButton(f_swap: BOOL) -> BOOL => [I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-switchdesktop>
    fn SwitchDesktop(h_desktop: HDESK) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-switchtothiswindow>
    fn SwitchToThisWindow(hwnd: HWND, f_unknown: BOOL) -> () => [Ptr, I32] -> Void;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-systemparametersinfofordpi>
    fn SystemParametersInfoForDpi(ui_action: UINT, ui_param: UINT, pv_param: PVOID, f_win_ini: UINT, dpi: UINT) -> BOOL => [U32, U32, Ptr, U32, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-systemparametersinfow>
    fn SystemParametersInfoW(ui_action: UINT, ui_param: UINT, pv_param: PVOID, f_win_ini: UINT) -> BOOL => [U32, U32, Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-tabbedtextoutw>
    fn TabbedTextOutW(hdc: HDC, x: INT, y: INT, lp_string: LPCWSTR, ch_count: INT, n_tab_positions: INT, lpn_tab_stop_positions: LPINT, n_tab_origin: INT) -> LONG => [Ptr, I32, I32, Ptr, I32, I32, Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-tilewindows>
    fn TileWindows(hwnd_parent: HWND, w_how: UINT, lp_rect: LPRECT, c_kids: UINT, lp_kids: HWND) -> WORD => [Ptr, U32, Ptr, U32, Ptr] -> U16;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-trackmouseevent>
    fn TrackMouseEvent(lp_event_track: LPTRACKMOUSEEVENT) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-trackpopupmenu>
    fn TrackPopupMenu(h_menu: HMENU, u_flags: UINT, x: INT, y: INT, n_reserved: INT, h_wnd: HWND, prc_rect: LPRECT) -> BOOL => [Ptr, U32, I32, I32, I32, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-trackpopupmenuex>
    fn TrackPopupMenuEx(h_menu: HMENU, u_flags: UINT, x: INT, y: INT, hwnd: HWND, lptpm: LPTPMPARAMS) -> BOOL => [Ptr, U32, I32, I32, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-translateacceleratorw>
    fn TranslateAcceleratorW(h_wnd: HWND, h_acc_table: HACCEL, lp_msg: LPMSG) -> INT => [Ptr, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-translatemdisysaccel>
    fn TranslateMDISysAccel(h_wnd_client: HWND, lp_msg: LPMSG) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-translatemessage>
    fn TranslateMessage(lp_msg: LPMSG) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-unhookwindowshookex>
    fn UnhookWindowsHookEx(hhk: HHOOK) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-unhookwinevent>
    fn UnhookWinEvent(h_win_event_hook: HWINEVENTHOOK) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-unionrect>
    fn UnionRect(lprc_dst: LPRECT, lprc_src1: LPRECT, lprc_src2: LPRECT) -> BOOL => [Ptr, Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-unloadkeyboardlayout>
    fn UnloadKeyboardLayout(hkl: HKL) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-unregisterclassw>
    fn UnregisterClassW(lp_class_name: LPCWSTR, h_instance: HINSTANCE) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-unregisterdevicenotification>
    fn UnregisterDeviceNotification(handle: HDEVNOTIFY) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-unregisterhotkey>
    fn UnregisterHotKey(h_wnd: HWND, id: INT) -> BOOL => [Ptr, I32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-unregisterpointerinputtarget>
    fn UnregisterPointerInputTarget(hwnd: HWND, pointer_type: UINT) -> BOOL => [Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-unregisterpowersettingnotification>
    fn UnregisterPowerSettingNotification(handle: HPOWERNOTIFY) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-unregistersuspendresumenotification>
    fn UnregisterSuspendResumeNotification(handle: HPOWERNOTIFY) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-unregistertouchwindow>
    fn UnregisterTouchWindow(hwnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-updatelayeredwindow>
    fn UpdateLayeredWindow(h_wnd: HWND, hdc_dst: HDC, ppt_dst: LPPOINT, psize: SIZE, hdc_src: HDC, ppt_src: LPPOINT, cr_key: COLORREF, pblend: BLENDFUNCTION, dw_flags: DWORD) -> BOOL => [Ptr, Ptr, Ptr, Ptr, Ptr, Ptr, U32, Ptr, U32] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-updatewindow>
    fn UpdateWindow(h_wnd: HWND) -> BOOL => [Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-validaterect>
    fn ValidateRect(h_wnd: HWND, lp_rect: LPRECT) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-validatergn>
    fn ValidateRgn(h_wnd: HWND, h_rgn: HRGN) -> BOOL => [Ptr, Ptr] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-vkkeyscanexw>
    fn VkKeyScanExW(ch: WCHAR, dwhkl: HKL) -> SHORT => [U16, Ptr] -> I16;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-vkkeyscanw>
    fn VkKeyScanW(ch: WCHAR) -> SHORT => [U16] -> I16;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-waitforinputidle>
    fn WaitForInputIdle(h_process: HANDLE, dw_milliseconds: DWORD) -> DWORD => [Ptr, U32] -> U32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-waitmessage>
    fn WaitMessage() -> BOOL => [] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-windowfromdc>
    fn WindowFromDC(h_dc: HDC) -> HWND => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-windowfromphysicalpoint>
    fn WindowFromPhysicalPoint(point: LPPOINT) -> HWND => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-windowfrompoint>
    fn WindowFromPoint(point: LPPOINT) -> HWND => [Ptr] -> Ptr;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-winhelpw>
    fn WinHelpW(h_wnd_main: HWND, lpsz_help: LPCWSTR, u_command: UINT, dw_data: ULONG_PTR) -> BOOL => [Ptr, Ptr, U32, U64] -> I32;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-keybd_event>
    fn keybd_event(b_vk: BYTE, b_scan: BYTE, dw_flags: DWORD, dw_extra_info: ULONG_PTR) -> () => [U8, U8, U32, U64] -> Void;
    /// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-mouse_event>
    fn mouse_event(dw_flags: DWORD, dx: DWORD, dy: DWORD, dw_data: DWORD, dw_extra_info: ULONG_PTR) -> () => [U32, U32, U32, U32, U64] -> Void;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::types::Tag;

    #[test]
    fn test_enum_and_table_are_parallel() {
        assert_eq!(Export::COUNT, TABLE.len());
        assert_eq!(Export::ALL.len(), TABLE.len());
        for (idx, export) in Export::ALL.iter().enumerate() {
            assert_eq!(*export as usize, idx);
            assert_eq!(export.name(), TABLE.descriptors[idx].name);
        }
    }

    #[test]
    fn test_from_name_round_trips() {
        for export in Export::ALL {
            assert_eq!(Export::from_name(export.name()), Some(*export));
        }
        assert_eq!(Export::from_name("NotARealExport"), None);
    }

    #[test]
    fn test_known_signatures() {
        let sig = Export::MessageBoxW.signature();
        assert_eq!(sig.args, &[Tag::Ptr, Tag::Ptr, Tag::Ptr, Tag::U32]);
        assert_eq!(sig.ret, Tag::I32);

        let sig = Export::GetDesktopWindow.signature();
        assert!(sig.args.is_empty());
        assert_eq!(sig.ret, Tag::Ptr);

        let sig = Export::PostQuitMessage.signature();
        assert_eq!(sig.args, &[Tag::I32]);
        assert_eq!(sig.ret, Tag::Void);
    }

    #[test]
    fn test_names_match_exports() {
        assert_eq!(Export::GetCursorPos.name(), "GetCursorPos");
        assert_eq!(Export::keybd_event.name(), "keybd_event");
    }
}
