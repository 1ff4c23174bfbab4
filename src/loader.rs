//! The loader: fills the proc table and works out which GL version it got.

use crate::platform::{self, Library, ProcResolver};
use crate::raw::{GLint, GlProc, GL_MAJOR_VERSION, GL_MINOR_VERSION, GL_NO_ERROR};
use crate::table::ProcTable;
use crate::{Error, GlError, Result};
use log::{info, warn};
use std::ffi::{CStr, CString};
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Deref;

/// Contexts older than this major version are never reported as supported.
pub const MIN_MAJOR_VERSION: GLint = 3;

/// Upper bound on `glGetError` calls per `check_error`, since a lost context
/// may keep reporting the same error.
const MAX_ERROR_DRAIN: usize = 64;

/// A GL context version, as reported by `GL_MAJOR_VERSION` and
/// `GL_MINOR_VERSION`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: GLint,
    pub minor: GLint,
}

impl Version {
    pub const fn new(major: GLint, minor: GLint) -> Self {
        Self { major, minor }
    }

    /// Check whether a context of this version provides the requested
    /// version. Within the same major version the minor version must be at
    /// least the requested one; a newer major version satisfies any minor.
    pub fn supports(self, major: GLint, minor: GLint) -> bool {
        if major < MIN_MAJOR_VERSION {
            return false;
        }

        if self.major == major {
            self.minor >= minor
        } else {
            self.major >= major
        }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Resolves the catalog's GL entry points and tracks the context version.
///
/// A loader starts out uninitialized. [`Loader::init`] opens the system GL
/// library itself; [`Loader::init_with`] takes entry points from a resolver
/// supplied by the host instead. Either one resolves every catalog entry into
/// the proc table, then queries the context version through the freshly
/// resolved `glGetIntegerv`. Calling either again repopulates the table from
/// scratch.
///
/// Both need a GL context to be current on the calling thread, which is the
/// host's responsibility.
///
/// # Thread safety
///
/// Initialization takes `&mut self`, so it can't overlap with reads of the
/// same loader. Entry points in the table are only meaningful on threads where
/// a compatible context is current.
pub struct Loader {
    procs: Box<ProcTable>,
    version: Option<Version>,
    library: Option<Library>,
}

impl Loader {
    /// Create an uninitialized loader. Every slot is unresolved and no version
    /// is supported until one of the `init` functions succeeds.
    pub fn new() -> Self {
        Self {
            procs: Box::new(ProcTable::new()),
            version: None,
            library: None,
        }
    }

    /// Open the system GL library, resolve every catalog entry point from it,
    /// and query the context version.
    ///
    /// The library stays open until the loader is dropped or initialized
    /// again. If it can't be opened every entry point ends up unresolved and
    /// this fails with [`Error::VersionQueryUnavailable`].
    pub fn init(&mut self) -> Result<Version> {
        self.init_from(platform::LIBRARY_NAMES)
    }

    pub(crate) fn init_from(&mut self, names: &[&str]) -> Result<Version> {
        self.version = None;

        let library = match Library::open_from(names) {
            Ok(library) => Some(library),
            Err(e) => {
                warn!("{}, no GL entry points will resolve", e);
                None
            }
        };

        self.procs
            .load(|name: &CStr| library.as_ref().and_then(|lib| lib.resolve(name)));

        // The previous library, if any, is released only after the new one has
        // taken over.
        self.library = library;

        self.parse_version()
    }

    /// Resolve every catalog entry point through the given resolver and query
    /// the context version. The loader doesn't open or own any library.
    pub fn init_with<R: ProcResolver>(&mut self, resolver: R) -> Result<Version> {
        self.version = None;
        self.procs.load(resolver);
        self.library = None;
        self.parse_version()
    }

    fn parse_version(&mut self) -> Result<Version> {
        let get_integerv = self
            .procs
            .GetIntegerv()
            .ok_or(Error::VersionQueryUnavailable)?;

        let mut version = Version::default();

        unsafe {
            get_integerv(GL_MAJOR_VERSION, &mut version.major);
            get_integerv(GL_MINOR_VERSION, &mut version.minor);
        }

        if version.major < MIN_MAJOR_VERSION {
            warn!("GL {} is too old", version);
            return Err(Error::UnsupportedVersion { actual: version });
        }

        info!("Loaded GL {}", version);
        self.version = Some(version);
        Ok(version)
    }

    /// The context version recorded by the last successful initialization
    pub fn version(&self) -> Option<Version> {
        self.version
    }

    /// Check whether the context provides at least the given GL version.
    /// Always `false` unless the last initialization succeeded.
    pub fn is_supported(&self, major: GLint, minor: GLint) -> bool {
        self.version.map_or(false, |version| version.supports(major, minor))
    }

    /// Resolve an arbitrary entry point by name, bypassing the proc table.
    ///
    /// Uses the library opened by [`Loader::init`]; otherwise the process-wide
    /// system library, opened on first use.
    pub fn get_proc_address(&self, name: &str) -> Option<GlProc> {
        let name = CString::new(name).ok()?;

        self.library
            .as_ref()
            .or_else(|| platform::system_library())
            .and_then(|lib| lib.resolve(&name))
    }

    /// The resolved entry points
    pub fn procs(&self) -> &ProcTable {
        &self.procs
    }

    /// The library opened by [`Loader::init`], if any
    pub fn library(&self) -> Option<&Library> {
        self.library.as_ref()
    }

    /// Drain the GL error queue, returning the first error found.
    pub fn check_error(&self, context: &'static str) -> Result<()> {
        let get_error = self
            .procs
            .GetError()
            .ok_or(Error::Unresolved { name: "glGetError" })?;

        let mut first = None;

        for _ in 0..MAX_ERROR_DRAIN {
            let code = unsafe { get_error() };
            if code == GL_NO_ERROR {
                break;
            }
            first.get_or_insert(code);
        }

        match first {
            Some(code) => Err(GlError::new(code, context).into()),
            None => Ok(()),
        }
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Loader {
    type Target = ProcTable;

    fn deref(&self) -> &Self::Target {
        &self.procs
    }
}

impl Debug for Loader {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Loader")
            .field("version", &self.version)
            .field("procs", &self.procs)
            .field("library", &self.library)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{GLenum, GL_INVALID_ENUM, GL_INVALID_VALUE};
    use std::cell::RefCell;
    use std::mem;

    thread_local! {
        static ERRORS: RefCell<Vec<GLenum>> = RefCell::new(Vec::new());
    }

    extern "system" fn fake_get_error() -> GLenum {
        ERRORS.with(|errors| errors.borrow_mut().pop().unwrap_or(GL_NO_ERROR))
    }

    extern "system" fn fake_get_integerv_4_1(pname: GLenum, data: *mut GLint) {
        let value = match pname {
            GL_MAJOR_VERSION => 4,
            GL_MINOR_VERSION => 1,
            _ => return,
        };
        unsafe { *data = value }
    }

    fn resolver(name: &CStr) -> Option<GlProc> {
        match name.to_bytes() {
            b"glGetError" => Some(unsafe {
                mem::transmute::<extern "system" fn() -> GLenum, GlProc>(fake_get_error)
            }),
            b"glGetIntegerv" => Some(unsafe {
                mem::transmute::<extern "system" fn(GLenum, *mut GLint), GlProc>(
                    fake_get_integerv_4_1,
                )
            }),
            _ => None,
        }
    }

    #[test]
    fn version_rule() {
        let v = Version::new(4, 1);

        assert!(v.supports(3, 0));
        assert!(v.supports(3, 9));
        assert!(v.supports(4, 0));
        assert!(v.supports(4, 1));
        assert!(!v.supports(4, 2));
        assert!(!v.supports(5, 0));
        assert!(!v.supports(2, 1));
        assert!(!v.supports(1, 0));
    }

    #[test]
    fn version_display() {
        assert_eq!(Version::new(3, 3).to_string(), "3.3");
    }

    #[test]
    fn uninitialized_supports_nothing() {
        let loader = Loader::new();

        assert_eq!(loader.version(), None);
        assert!(!loader.is_supported(3, 0));
        assert_eq!(loader.procs().resolved_count(), 0);
    }

    #[test]
    fn init_with_records_version() {
        let mut loader = Loader::new();

        assert_eq!(loader.init_with(resolver).unwrap(), Version::new(4, 1));
        assert_eq!(loader.version(), Some(Version::new(4, 1)));
        assert_eq!(loader.procs().resolved_count(), 2);
        assert!(loader.library().is_none());
    }

    #[test]
    fn check_error_reports_first_and_drains() {
        let mut loader = Loader::new();
        loader.init_with(resolver).unwrap();

        // popped from the back: GL_INVALID_ENUM is reported first
        ERRORS.with(|errors| *errors.borrow_mut() = vec![GL_INVALID_VALUE, GL_INVALID_ENUM]);

        match loader.check_error("test") {
            Err(Error::GlError(e)) => assert_eq!(e.code(), GL_INVALID_ENUM),
            other => panic!("unexpected result {:?}", other),
        }

        assert!(ERRORS.with(|errors| errors.borrow().is_empty()));
        assert!(loader.check_error("test").is_ok());
    }

    #[test]
    fn init_without_library_resolves_nothing() {
        let mut loader = Loader::new();
        loader.init_with(resolver).unwrap();

        match loader.init_from(&["no-such-gl-library"]) {
            Err(Error::VersionQueryUnavailable) => {}
            other => panic!("unexpected result {:?}", other),
        }

        assert!(loader.library().is_none());
        assert_eq!(loader.procs().resolved_count(), 0);
        assert_eq!(loader.version(), None);
        assert!(!loader.is_supported(3, 0));
    }

    #[test]
    fn check_error_needs_get_error() {
        let loader = Loader::new();

        match loader.check_error("test") {
            Err(Error::Unresolved { name }) => assert_eq!(name, "glGetError"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn get_proc_address_rejects_interior_nul() {
        assert!(Loader::new().get_proc_address("glGet\0Error").is_none());
    }

    #[test]
    fn gl_error_display_names_code() {
        let e = GlError::new(GL_INVALID_ENUM, "glEnable");
        assert_eq!(e.to_string(), "glEnable: GL error 0x0500 (GL_INVALID_ENUM)");
    }
}
