use dynamic_gl3::raw::{
    GLenum, GLint, GlProc, GL_INVALID_OPERATION, GL_MAJOR_VERSION, GL_MINOR_VERSION, GL_NO_ERROR,
};
use dynamic_gl3::{Error, Loader, RawResolver, Symbol, Version};
use libc::{c_char, c_void};
use std::cell::Cell;
use std::ffi::CStr;
use std::mem;

// Each test runs on its own thread, so the fake context state doesn't leak
// between tests.
thread_local! {
    static VERSION: Cell<(GLint, GLint)> = Cell::new((4, 5));
    static PENDING_ERRORS: Cell<usize> = Cell::new(0);
}

extern "system" fn fake_get_integerv(pname: GLenum, data: *mut GLint) {
    let (major, minor) = VERSION.with(Cell::get);
    let value = match pname {
        GL_MAJOR_VERSION => major,
        GL_MINOR_VERSION => minor,
        _ => return,
    };
    unsafe { *data = value }
}

extern "system" fn fake_get_error() -> GLenum {
    PENDING_ERRORS.with(|pending| match pending.get() {
        0 => GL_NO_ERROR,
        n => {
            pending.set(n - 1);
            GL_INVALID_OPERATION
        }
    })
}

extern "system" fn fake_flush() {}

fn get_integerv() -> GlProc {
    unsafe { mem::transmute::<extern "system" fn(GLenum, *mut GLint), GlProc>(fake_get_integerv) }
}

fn get_error() -> GlProc {
    unsafe { mem::transmute::<extern "system" fn() -> GLenum, GlProc>(fake_get_error) }
}

/// A context that only provides the two entry points the loader itself needs
fn minimal_context(name: &CStr) -> Option<GlProc> {
    match name.to_bytes() {
        b"glGetIntegerv" => Some(get_integerv()),
        b"glGetError" => Some(get_error()),
        _ => None,
    }
}

fn with_version(major: GLint, minor: GLint) {
    VERSION.with(|version| version.set((major, minor)));
}

#[test]
fn init_with_reports_context_version() {
    let mut loader = Loader::new();

    assert_eq!(loader.init_with(minimal_context).unwrap(), Version::new(4, 5));
    assert_eq!(loader.version(), Some(Version::new(4, 5)));

    assert!(loader.is_supported(3, 0));
    assert!(loader.is_supported(3, 2));
    assert!(loader.is_supported(4, 5));
    assert!(!loader.is_supported(4, 6));
    assert!(!loader.is_supported(5, 0));
    assert!(!loader.is_supported(2, 0));
}

#[test]
fn minor_version_only_matters_within_the_same_major() {
    with_version(3, 1);
    let mut loader = Loader::new();
    loader.init_with(minimal_context).unwrap();

    assert!(loader.is_supported(3, 0));
    assert!(loader.is_supported(3, 1));
    assert!(!loader.is_supported(3, 2));
    assert!(!loader.is_supported(4, 0));

    with_version(4, 0);
    loader.init_with(minimal_context).unwrap();

    assert!(loader.is_supported(3, 2));
    assert!(loader.is_supported(3, 9));
    assert!(!loader.is_supported(4, 1));
}

#[test]
fn unresolved_entry_points_are_absent_without_failing() {
    let mut loader = Loader::new();
    loader.init_with(minimal_context).unwrap();

    assert_eq!(loader.procs().resolved_count(), 2);
    assert!(loader.DrawArrays().is_none());
    assert!(loader.get_symbol(Symbol::CompileShader).is_none());
    assert!(loader.GetIntegerv().is_some());
}

#[test]
fn init_fails_without_get_integerv() {
    let mut loader = Loader::new();

    let result = loader.init_with(|name: &CStr| {
        if name.to_bytes() == b"glGetError" {
            Some(get_error())
        } else {
            None
        }
    });

    match result {
        Err(Error::VersionQueryUnavailable) => {}
        other => panic!("unexpected result {:?}", other),
    }

    for &(major, minor) in &[(3, 0), (3, 3), (4, 6)] {
        assert!(!loader.is_supported(major, minor));
    }
    assert!(loader.GetError().is_some());
}

#[test]
fn init_rejects_pre_3_contexts() {
    with_version(2, 1);
    let mut loader = Loader::new();

    match loader.init_with(minimal_context) {
        Err(Error::UnsupportedVersion { actual }) => assert_eq!(actual, Version::new(2, 1)),
        other => panic!("unexpected result {:?}", other),
    }

    assert_eq!(loader.version(), None);
    assert!(!loader.is_supported(2, 1));
    assert!(!loader.is_supported(3, 0));
}

#[test]
fn failed_reinit_clears_previous_version() {
    let mut loader = Loader::new();
    loader.init_with(minimal_context).unwrap();
    assert!(loader.is_supported(3, 3));

    assert!(loader.init_with(|_: &CStr| -> Option<GlProc> { None }).is_err());

    assert!(!loader.is_supported(3, 3));
    assert_eq!(loader.procs().resolved_count(), 0);
}

#[test]
fn reinit_overwrites_every_slot() {
    let mut loader = Loader::new();

    loader
        .init_with(|name: &CStr| match name.to_bytes() {
            b"glFlush" => Some(unsafe {
                mem::transmute::<extern "system" fn(), GlProc>(fake_flush)
            }),
            _ => minimal_context(name),
        })
        .unwrap();
    assert!(loader.Flush().is_some());

    loader.init_with(minimal_context).unwrap();
    assert!(loader.Flush().is_none());
    assert_eq!(loader.procs().resolved_count(), 2);
}

#[test]
fn resolver_sees_full_names_in_catalog_order() {
    let mut names = Vec::new();
    let mut loader = Loader::new();

    loader
        .init_with(|name: &CStr| {
            names.push(name.to_str().unwrap().to_owned());
            minimal_context(name)
        })
        .unwrap();

    assert_eq!(names.len(), loader.len());
    assert_eq!(names[Symbol::GetIntegerv.index()], "glGetIntegerv");
    assert!(names.iter().all(|name| name.starts_with("gl")));
}

#[test]
fn check_error_drains_queue() {
    let mut loader = Loader::new();
    loader.init_with(minimal_context).unwrap();

    PENDING_ERRORS.with(|pending| pending.set(3));

    match loader.check_error("glDrawArrays") {
        Err(Error::GlError(e)) => assert_eq!(e.code(), GL_INVALID_OPERATION),
        other => panic!("unexpected result {:?}", other),
    }

    assert_eq!(PENDING_ERRORS.with(Cell::get), 0);
    assert!(loader.check_error("glDrawArrays").is_ok());
}

unsafe extern "system" fn host_get_proc_address(name: *const c_char) -> *const c_void {
    match CStr::from_ptr(name).to_bytes() {
        b"glGetIntegerv" => fake_get_integerv as *const c_void,
        _ => std::ptr::null(),
    }
}

#[test]
fn raw_resolver_from_host() {
    with_version(3, 3);
    let mut loader = Loader::new();

    let version = loader
        .init_with(unsafe { RawResolver::new(host_get_proc_address) })
        .unwrap();

    assert_eq!(version, Version::new(3, 3));
    assert_eq!(loader.procs().resolved_count(), 1);
    assert!(loader.GetError().is_none());
}

#[test]
fn get_proc_address_rejects_interior_nul() {
    assert!(Loader::new().get_proc_address("glGet\0Integerv").is_none());
    assert!(dynamic_gl3::get_proc_address("glGet\0Integerv").is_none());
}
