use libc::{
    c_char, c_double, c_float, c_int, c_schar, c_short, c_uchar, c_uint, c_ushort, c_void,
    ptrdiff_t,
};

pub type GLenum = c_uint;
pub type GLboolean = c_uchar;
pub type GLbitfield = c_uint;
pub type GLbyte = c_schar;
pub type GLubyte = c_uchar;
pub type GLshort = c_short;
pub type GLushort = c_ushort;
pub type GLint = c_int;
pub type GLuint = c_uint;
pub type GLsizei = c_int;
pub type GLfloat = c_float;
pub type GLdouble = c_double;
pub type GLchar = c_char;
pub type GLhalf = c_ushort;
pub type GLintptr = ptrdiff_t;
pub type GLsizeiptr = ptrdiff_t;
pub type GLint64 = i64;
pub type GLuint64 = u64;

opaque_type!(__GLsync);

pub type GLsync = *const __GLsync;

pub type GLDEBUGPROC = Option<
    extern "system" fn(
        source: GLenum,
        type_: GLenum,
        id: GLuint,
        severity: GLenum,
        length: GLsizei,
        message: *const GLchar,
        user_param: *mut c_void,
    ),
>;

/// An untyped GL entry point, as stored in the proc table. Cast it to the
/// entry's real signature before calling it.
pub type GlProc = unsafe extern "system" fn();

/// A C-ABI resolver of the `*GetProcAddress` family, as handed over by a host
/// that manages its own GL context.
pub type GetProcAddressFn = unsafe extern "system" fn(name: *const c_char) -> *const c_void;

pub const GL_FALSE: GLboolean = 0;
pub const GL_TRUE: GLboolean = 1;

pub const GL_VENDOR: GLenum = 0x1F00;
pub const GL_RENDERER: GLenum = 0x1F01;
pub const GL_VERSION: GLenum = 0x1F02;
pub const GL_EXTENSIONS: GLenum = 0x1F03;
pub const GL_SHADING_LANGUAGE_VERSION: GLenum = 0x8B8C;

pub const GL_MAJOR_VERSION: GLenum = 0x821B;
pub const GL_MINOR_VERSION: GLenum = 0x821C;
pub const GL_NUM_EXTENSIONS: GLenum = 0x821D;
pub const GL_CONTEXT_FLAGS: GLenum = 0x821E;
pub const GL_CONTEXT_PROFILE_MASK: GLenum = 0x9126;

pub const GL_CONTEXT_CORE_PROFILE_BIT: GLbitfield = 0x0000_0001;
pub const GL_CONTEXT_COMPATIBILITY_PROFILE_BIT: GLbitfield = 0x0000_0002;

pub const GL_NO_ERROR: GLenum = 0;

error_codes! {
    GL_INVALID_ENUM = 0x0500,
    GL_INVALID_VALUE = 0x0501,
    GL_INVALID_OPERATION = 0x0502,
    GL_STACK_OVERFLOW = 0x0503,
    GL_STACK_UNDERFLOW = 0x0504,
    GL_OUT_OF_MEMORY = 0x0505,
    GL_INVALID_FRAMEBUFFER_OPERATION = 0x0506,
    GL_CONTEXT_LOST = 0x0507,
}
