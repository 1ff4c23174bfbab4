//! Runtime loader for the OpenGL core profile.
//!
//! Opens the system GL library, resolves every entry point in the compiled-in
//! catalog into a [`ProcTable`], and reports which GL version the current
//! context provides. Vendor extension entry points are included with the
//! `extensions` feature.

pub extern crate dlopen;

#[macro_use]
mod macros;

pub mod catalog;
mod error;
pub mod loader;
pub mod platform;
pub mod raw;
pub mod table;

use crate::raw::GlProc;
use std::ffi::CString;

pub use catalog::{CatalogBuilder, InclusionPolicy, SymbolEntry};
pub use error::*;
pub use loader::{Loader, Version};
pub use platform::{Library, ProcResolver, RawResolver};
pub use raw::Symbol;
pub use table::ProcTable;

/// Load GL from the system library into a new [`Loader`]. A GL context must be
/// current on the calling thread.
pub fn load_gl() -> Result<Loader> {
    let mut loader = Loader::new();
    loader.init()?;
    Ok(loader)
}

/// Resolve a single entry point from the process-wide system GL library,
/// without a [`Loader`].
pub fn get_proc_address(name: &str) -> Option<GlProc> {
    let name = CString::new(name).ok()?;
    platform::system_library()?.resolve(&name)
}
