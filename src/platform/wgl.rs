//! Windows: `opengl32.dll` with `wglGetProcAddress`

use crate::raw::GlProc;
use libc::c_void;

pub const LIBRARY_NAMES: &[&str] = &["opengl32.dll"];

pub const CONTEXT_RESOLVER: Option<&str> = Some("wglGetProcAddress");

/// Some ICDs return small integers or -1 from `wglGetProcAddress` instead of
/// null for unknown names.
pub fn accept(ptr: *const c_void) -> Option<GlProc> {
    match ptr as isize {
        1 | 2 | 3 | -1 => None,
        _ => super::proc_from_ptr(ptr),
    }
}
