//! Platform binding
//!
//! Opens the system GL library and resolves entry points from it. Lookups try
//! the platform's context-aware resolver first (`glXGetProcAddressARB`,
//! `wglGetProcAddress`), which only knows about entry points while a GL
//! context is current, and fall back to a plain symbol lookup in the library
//! when that finds nothing. Exactly one platform module is compiled in.

#[cfg(all(unix, not(target_os = "macos")))]
mod glx;
#[cfg(all(unix, not(target_os = "macos")))]
use glx as imp;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
use macos as imp;

#[cfg(windows)]
mod wgl;
#[cfg(windows)]
use wgl as imp;

use crate::raw::{GetProcAddressFn, GlProc};
use crate::{Error, Result};
use lazy_static::lazy_static;
use libc::c_void;
use log::{debug, warn};
use std::ffi::CStr;
use std::fmt::{self, Debug, Formatter};
use std::mem;

pub use imp::LIBRARY_NAMES;

/// A source of GL entry points.
///
/// Implemented for closures taking the nul-terminated entry point name, and
/// for [`RawResolver`]. Returning `None` marks the entry point unavailable;
/// that is an expected outcome, not an error.
///
/// Closures need an explicit argument type to be accepted:
///
/// ```
/// use dynamic_gl3::raw::GlProc;
/// use dynamic_gl3::Loader;
/// use std::ffi::CStr;
///
/// let mut loader = Loader::new();
/// let result = loader.init_with(|_name: &CStr| -> Option<GlProc> { None });
/// assert!(result.is_err());
/// ```
pub trait ProcResolver {
    fn resolve(&mut self, name: &CStr) -> Option<GlProc>;
}

impl<F> ProcResolver for F
where
    F: FnMut(&CStr) -> Option<GlProc>,
{
    fn resolve(&mut self, name: &CStr) -> Option<GlProc> {
        self(name)
    }
}

/// Adapts a C `*GetProcAddress`-style function, such as one handed over by a
/// windowing library, into a [`ProcResolver`].
#[derive(Clone, Copy)]
pub struct RawResolver(GetProcAddressFn);

impl RawResolver {
    /// Wrap the given resolver function.
    ///
    /// # Safety
    ///
    /// The function must accept any nul-terminated name and return either null
    /// or the address of the named entry point, for as long as this resolver
    /// or any entry point it returned is in use.
    pub unsafe fn new(get_proc_address: GetProcAddressFn) -> Self {
        Self(get_proc_address)
    }
}

impl ProcResolver for RawResolver {
    fn resolve(&mut self, name: &CStr) -> Option<GlProc> {
        proc_from_ptr(unsafe { (self.0)(name.as_ptr()) })
    }
}

impl Debug for RawResolver {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("RawResolver")
            .field(&(self.0 as *const ()))
            .finish()
    }
}

pub(crate) fn proc_from_ptr(ptr: *const c_void) -> Option<GlProc> {
    if ptr.is_null() {
        None
    } else {
        Some(unsafe { mem::transmute::<*const c_void, GlProc>(ptr) })
    }
}

/// An open handle to the system GL library.
///
/// The handle is released when this value is dropped.
pub struct Library {
    lib: dlopen::raw::Library,
    name: String,
    get_proc_address: Option<GetProcAddressFn>,
}

impl Library {
    /// Open the system GL library, trying each of [`LIBRARY_NAMES`] in turn.
    pub fn open() -> Result<Self> {
        Self::open_from(LIBRARY_NAMES)
    }

    /// Open the first library that can be loaded from the given candidate
    /// names or paths.
    pub fn open_from(names: &[&str]) -> Result<Self> {
        let mut error = Error::NoPlatformLibrary;

        for &name in names {
            match dlopen::raw::Library::open(name) {
                Ok(lib) => {
                    let get_proc_address = imp::CONTEXT_RESOLVER.and_then(|resolver| {
                        unsafe { lib.symbol::<GetProcAddressFn>(resolver) }.ok()
                    });

                    debug!(
                        "Opened {} (context resolver {})",
                        name,
                        if get_proc_address.is_some() {
                            "available"
                        } else {
                            "unavailable"
                        }
                    );

                    return Ok(Self {
                        lib,
                        name: name.to_owned(),
                        get_proc_address,
                    });
                }
                Err(source) => {
                    debug!("Couldn't open {}: {}", name, source);
                    error = Error::LibraryOpen {
                        name: name.to_owned(),
                        source,
                    };
                }
            }
        }

        Err(error)
    }

    /// The name or path the library was opened from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up one entry point: the context-aware resolver first, then the
    /// library's exported symbols.
    pub fn resolve(&self, name: &CStr) -> Option<GlProc> {
        self.context_proc(name).or_else(|| self.exported_proc(name))
    }

    /// Release the library. Equivalent to dropping it.
    pub fn close(self) {}

    fn context_proc(&self, name: &CStr) -> Option<GlProc> {
        let get_proc_address = self.get_proc_address?;
        imp::accept(unsafe { get_proc_address(name.as_ptr()) })
    }

    fn exported_proc(&self, name: &CStr) -> Option<GlProc> {
        unsafe { self.lib.symbol_cstr::<GlProc>(name) }.ok()
    }
}

impl Debug for Library {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Library")
            .field("name", &self.name)
            .field(
                "get_proc_address",
                &self.get_proc_address.map(|f| f as *const ()),
            )
            .finish()
    }
}

lazy_static! {
    static ref SYSTEM_LIBRARY: Option<Library> = match Library::open() {
        Ok(lib) => Some(lib),
        Err(e) => {
            warn!("{}", e);
            None
        }
    };
}

/// The process-wide system GL library, opened on first use and kept open
/// until the process exits. `None` if it couldn't be opened.
pub fn system_library() -> Option<&'static Library> {
    SYSTEM_LIBRARY.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use libc::c_char;

    unsafe extern "system" fn fake_get_proc_address(name: *const c_char) -> *const c_void {
        extern "system" fn found() {}

        if CStr::from_ptr(name).to_bytes() == b"glFlush" {
            found as *const c_void
        } else {
            std::ptr::null()
        }
    }

    #[test]
    fn null_is_absent() {
        assert!(proc_from_ptr(std::ptr::null()).is_none());
    }

    #[test]
    fn raw_resolver_maps_null_to_none() {
        let mut resolver = unsafe { RawResolver::new(fake_get_proc_address) };

        let flush = CStr::from_bytes_with_nul(b"glFlush\0").unwrap();
        let finish = CStr::from_bytes_with_nul(b"glFinish\0").unwrap();

        assert!(resolver.resolve(flush).is_some());
        assert!(resolver.resolve(finish).is_none());
    }

    #[test]
    fn no_candidates() {
        match Library::open_from(&[]) {
            Err(Error::NoPlatformLibrary) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn missing_library_reports_last_candidate() {
        let names = &["no-such-gl-library-1", "no-such-gl-library-2"];

        match Library::open_from(names) {
            Err(Error::LibraryOpen { name, .. }) => assert_eq!(name, "no-such-gl-library-2"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn context_resolver_wins_then_exports() {
        extern "system" fn context_malloc() {}

        unsafe extern "system" fn context_knows_malloc(name: *const c_char) -> *const c_void {
            if CStr::from_ptr(name).to_bytes() == b"malloc" {
                context_malloc as *const c_void
            } else {
                std::ptr::null()
            }
        }

        let library = Library {
            lib: dlopen::raw::Library::open("libc.so.6").unwrap(),
            name: "libc.so.6".to_owned(),
            get_proc_address: Some(context_knows_malloc),
        };

        let malloc = CStr::from_bytes_with_nul(b"malloc\0").unwrap();
        let free = CStr::from_bytes_with_nul(b"free\0").unwrap();
        let missing = CStr::from_bytes_with_nul(b"glNotARealFunction\0").unwrap();

        let exported = library.exported_proc(malloc).map(|f| f as usize);
        assert!(exported.is_some());

        let resolved = library.resolve(malloc).map(|f| f as usize);
        assert_eq!(resolved, Some(context_malloc as GlProc as usize));
        assert_ne!(resolved, exported);

        assert!(library.context_proc(free).is_none());
        assert_eq!(
            library.resolve(free).map(|f| f as usize),
            library.exported_proc(free).map(|f| f as usize)
        );
        assert!(library.resolve(free).is_some());

        assert!(library.resolve(missing).is_none());
    }

    #[cfg(windows)]
    #[test]
    fn bogus_wgl_results_are_absent() {
        for &bogus in &[1isize, 2, 3, -1] {
            assert!(imp::accept(bogus as *const c_void).is_none());
        }
    }
}
