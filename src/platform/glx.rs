//! Linux and the BSDs: `libGL` with `glXGetProcAddressARB`

use crate::raw::GlProc;
use libc::c_void;

pub const LIBRARY_NAMES: &[&str] = &["libGL.so.1", "libGL.so"];

pub const CONTEXT_RESOLVER: Option<&str> = Some("glXGetProcAddressARB");

pub fn accept(ptr: *const c_void) -> Option<GlProc> {
    super::proc_from_ptr(ptr)
}
