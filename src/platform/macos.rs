//! macOS: the OpenGL framework. Every entry point is exported directly from
//! the framework binary, so there is no context-aware tier.

use crate::raw::GlProc;
use libc::c_void;

pub const LIBRARY_NAMES: &[&str] = &["/System/Library/Frameworks/OpenGL.framework/OpenGL"];

pub const CONTEXT_RESOLVER: Option<&str> = None;

pub fn accept(ptr: *const c_void) -> Option<GlProc> {
    super::proc_from_ptr(ptr)
}
