use crate::loader::Version;
use crate::raw::{error_name, GLenum};
use std::fmt::{self, Debug, Display, Formatter};

/// An error code reported by `glGetError`
#[derive(thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub struct GlError {
    code: GLenum,
    context: &'static str,
}

impl GlError {
    /// Create a new `GlError` with the given error code and context
    pub fn new(code: GLenum, context: &'static str) -> Self {
        Self { code, context }
    }

    pub fn code(&self) -> GLenum {
        self.code
    }
}

impl Debug for GlError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Display for GlError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{}: GL error {:#06x} ({})",
            self.context,
            self.code,
            error_name(self.code).unwrap_or("unknown error code")
        )
    }
}

/// An error loading or querying GL
#[derive(thiserror::Error)]
pub enum Error {
    /// None of the platform's GL library names could be opened
    #[error("Couldn't open GL library {name}: {source}")]
    LibraryOpen {
        name: String,
        #[source]
        source: dlopen::Error,
    },

    /// There is no GL library to try on this platform
    #[error("No GL library candidates to open")]
    NoPlatformLibrary,

    /// `glGetIntegerv` couldn't be resolved, so the version can't be queried
    #[error("glGetIntegerv is unavailable, can't query the GL version")]
    VersionQueryUnavailable,

    /// The context reports a GL version older than 3.0
    #[error("GL {actual} is not supported, 3.0 or newer is required")]
    UnsupportedVersion { actual: Version },

    /// An entry point needed for an operation couldn't be resolved
    #[error("{name} is unavailable")]
    Unresolved { name: &'static str },

    /// Error reported by the GL implementation
    #[error("{0}")]
    GlError(#[from] GlError),
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

/// A GL loader result type
pub type Result<T> = std::result::Result<T, Error>;
