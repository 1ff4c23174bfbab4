//! The baked symbol catalog.
//!
//! Generated from the Khronos `glcorearb.h` registry header: every `GLAPI`
//! prototype, split into the core profile and the vendor-suffixed extension
//! entry points, each group sorted by name. Do not edit by hand; regenerate
//! the whole file when the registry changes.

use super::types::*;
use libc::c_void;

gl_symbols! {
    core {
        fn ActiveShaderProgram(pipeline: GLuint, program: GLuint);
        fn ActiveTexture(texture: GLenum);
        fn AttachShader(program: GLuint, shader: GLuint);
        fn BeginConditionalRender(id: GLuint, mode: GLenum);
        fn BeginQuery(target: GLenum, id: GLuint);
        fn BeginQueryIndexed(target: GLenum, index: GLuint, id: GLuint);
        fn BeginTransformFeedback(primitive_mode: GLenum);
        fn BindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar);
        fn BindBuffer(target: GLenum, buffer: GLuint);
        fn BindBufferBase(target: GLenum, index: GLuint, buffer: GLuint);
        fn BindBufferRange(target: GLenum, index: GLuint, buffer: GLuint, offset: GLintptr, size: GLsizeiptr);
        fn BindBuffersBase(target: GLenum, first: GLuint, count: GLsizei, buffers: *const GLuint);
        fn BindBuffersRange(target: GLenum, first: GLuint, count: GLsizei, buffers: *const GLuint, offsets: *const GLintptr, sizes: *const GLsizeiptr);
        fn BindFragDataLocation(program: GLuint, color: GLuint, name: *const GLchar);
        fn BindFragDataLocationIndexed(program: GLuint, color_number: GLuint, index: GLuint, name: *const GLchar);
        fn BindFramebuffer(target: GLenum, framebuffer: GLuint);
        fn BindImageTexture(unit: GLuint, texture: GLuint, level: GLint, layered: GLboolean, layer: GLint, access: GLenum, format: GLenum);
        fn BindImageTextures(first: GLuint, count: GLsizei, textures: *const GLuint);
        fn BindProgramPipeline(pipeline: GLuint);
        fn BindRenderbuffer(target: GLenum, renderbuffer: GLuint);
        fn BindSampler(unit: GLuint, sampler: GLuint);
        fn BindSamplers(first: GLuint, count: GLsizei, samplers: *const GLuint);
        fn BindTexture(target: GLenum, texture: GLuint);
        fn BindTextureUnit(unit: GLuint, texture: GLuint);
        fn BindTextures(first: GLuint, count: GLsizei, textures: *const GLuint);
        fn BindTransformFeedback(target: GLenum, id: GLuint);
        fn BindVertexArray(array: GLuint);
        fn BindVertexBuffer(bindingindex: GLuint, buffer: GLuint, offset: GLintptr, stride: GLsizei);
        fn BindVertexBuffers(first: GLuint, count: GLsizei, buffers: *const GLuint, offsets: *const GLintptr, strides: *const GLsizei);
        fn BlendBarrierKHR();
        fn BlendColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
        fn BlendEquation(mode: GLenum);
        fn BlendEquationSeparate(mode_rgb: GLenum, mode_alpha: GLenum);
        fn BlendEquationSeparatei(buf: GLuint, mode_rgb: GLenum, mode_alpha: GLenum);
        fn BlendEquationi(buf: GLuint, mode: GLenum);
        fn BlendFunc(sfactor: GLenum, dfactor: GLenum);
        fn BlendFuncSeparate(sfactor_rgb: GLenum, dfactor_rgb: GLenum, sfactor_alpha: GLenum, dfactor_alpha: GLenum);
        fn BlendFuncSeparatei(buf: GLuint, src_rgb: GLenum, dst_rgb: GLenum, src_alpha: GLenum, dst_alpha: GLenum);
        fn BlendFunci(buf: GLuint, src: GLenum, dst: GLenum);
        fn BlitFramebuffer(src_x0: GLint, src_y0: GLint, src_x1: GLint, src_y1: GLint, dst_x0: GLint, dst_y0: GLint, dst_x1: GLint, dst_y1: GLint, mask: GLbitfield, filter: GLenum);
        fn BlitNamedFramebuffer(read_framebuffer: GLuint, draw_framebuffer: GLuint, src_x0: GLint, src_y0: GLint, src_x1: GLint, src_y1: GLint, dst_x0: GLint, dst_y0: GLint, dst_x1: GLint, dst_y1: GLint, mask: GLbitfield, filter: GLenum);
        fn BufferData(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum);
        fn BufferStorage(target: GLenum, size: GLsizeiptr, data: *const c_void, flags: GLbitfield);
        fn BufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const c_void);
        fn CheckFramebufferStatus(target: GLenum) -> GLenum;
        fn CheckNamedFramebufferStatus(framebuffer: GLuint, target: GLenum) -> GLenum;
        fn ClampColor(target: GLenum, clamp: GLenum);
        fn Clear(mask: GLbitfield);
        fn ClearBufferData(target: GLenum, internalformat: GLenum, format: GLenum, type_: GLenum, data: *const c_void);
        fn ClearBufferSubData(target: GLenum, internalformat: GLenum, offset: GLintptr, size: GLsizeiptr, format: GLenum, type_: GLenum, data: *const c_void);
        fn ClearBufferfi(buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint);
        fn ClearBufferfv(buffer: GLenum, drawbuffer: GLint, value: *const GLfloat);
        fn ClearBufferiv(buffer: GLenum, drawbuffer: GLint, value: *const GLint);
        fn ClearBufferuiv(buffer: GLenum, drawbuffer: GLint, value: *const GLuint);
        fn ClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
        fn ClearDepth(depth: GLdouble);
        fn ClearDepthf(d: GLfloat);
        fn ClearNamedBufferData(buffer: GLuint, internalformat: GLenum, format: GLenum, type_: GLenum, data: *const c_void);
        fn ClearNamedBufferSubData(buffer: GLuint, internalformat: GLenum, offset: GLintptr, size: GLsizeiptr, format: GLenum, type_: GLenum, data: *const c_void);
        fn ClearNamedFramebufferfi(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint);
        fn ClearNamedFramebufferfv(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint, value: *const GLfloat);
        fn ClearNamedFramebufferiv(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint, value: *const GLint);
        fn ClearNamedFramebufferuiv(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint, value: *const GLuint);
        fn ClearStencil(s: GLint);
        fn ClearTexImage(texture: GLuint, level: GLint, format: GLenum, type_: GLenum, data: *const c_void);
        fn ClearTexSubImage(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, data: *const c_void);
        fn ClientWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum;
        fn ClipControl(origin: GLenum, depth: GLenum);
        fn ColorMask(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean);
        fn ColorMaski(index: GLuint, r: GLboolean, g: GLboolean, b: GLboolean, a: GLboolean);
        fn CompileShader(shader: GLuint);
        fn CompressedTexImage1D(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, border: GLint, image_size: GLsizei, data: *const c_void);
        fn CompressedTexImage2D(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, border: GLint, image_size: GLsizei, data: *const c_void);
        fn CompressedTexImage3D(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, image_size: GLsizei, data: *const c_void);
        fn CompressedTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void);
        fn CompressedTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void);
        fn CompressedTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void);
        fn CompressedTextureSubImage1D(texture: GLuint, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void);
        fn CompressedTextureSubImage2D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void);
        fn CompressedTextureSubImage3D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void);
        fn CopyBufferSubData(read_target: GLenum, write_target: GLenum, read_offset: GLintptr, write_offset: GLintptr, size: GLsizeiptr);
        fn CopyImageSubData(src_name: GLuint, src_target: GLenum, src_level: GLint, src_x: GLint, src_y: GLint, src_z: GLint, dst_name: GLuint, dst_target: GLenum, dst_level: GLint, dst_x: GLint, dst_y: GLint, dst_z: GLint, src_width: GLsizei, src_height: GLsizei, src_depth: GLsizei);
        fn CopyNamedBufferSubData(read_buffer: GLuint, write_buffer: GLuint, read_offset: GLintptr, write_offset: GLintptr, size: GLsizeiptr);
        fn CopyTexImage1D(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, border: GLint);
        fn CopyTexImage2D(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei, border: GLint);
        fn CopyTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, x: GLint, y: GLint, width: GLsizei);
        fn CopyTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn CopyTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn CopyTextureSubImage1D(texture: GLuint, level: GLint, xoffset: GLint, x: GLint, y: GLint, width: GLsizei);
        fn CopyTextureSubImage2D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn CopyTextureSubImage3D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn CreateBuffers(n: GLsizei, buffers: *mut GLuint);
        fn CreateFramebuffers(n: GLsizei, framebuffers: *mut GLuint);
        fn CreateProgram() -> GLuint;
        fn CreateProgramPipelines(n: GLsizei, pipelines: *mut GLuint);
        fn CreateQueries(target: GLenum, n: GLsizei, ids: *mut GLuint);
        fn CreateRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint);
        fn CreateSamplers(n: GLsizei, samplers: *mut GLuint);
        fn CreateShader(type_: GLenum) -> GLuint;
        fn CreateShaderProgramv(type_: GLenum, count: GLsizei, strings: *const *const GLchar) -> GLuint;
        fn CreateTextures(target: GLenum, n: GLsizei, textures: *mut GLuint);
        fn CreateTransformFeedbacks(n: GLsizei, ids: *mut GLuint);
        fn CreateVertexArrays(n: GLsizei, arrays: *mut GLuint);
        fn CullFace(mode: GLenum);
        fn DebugMessageCallback(callback: GLDEBUGPROC, user_param: *const c_void);
        fn DebugMessageControl(source: GLenum, type_: GLenum, severity: GLenum, count: GLsizei, ids: *const GLuint, enabled: GLboolean);
        fn DebugMessageInsert(source: GLenum, type_: GLenum, id: GLuint, severity: GLenum, length: GLsizei, buf: *const GLchar);
        fn DeleteBuffers(n: GLsizei, buffers: *const GLuint);
        fn DeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint);
        fn DeleteProgram(program: GLuint);
        fn DeleteProgramPipelines(n: GLsizei, pipelines: *const GLuint);
        fn DeleteQueries(n: GLsizei, ids: *const GLuint);
        fn DeleteRenderbuffers(n: GLsizei, renderbuffers: *const GLuint);
        fn DeleteSamplers(count: GLsizei, samplers: *const GLuint);
        fn DeleteShader(shader: GLuint);
        fn DeleteSync(sync: GLsync);
        fn DeleteTextures(n: GLsizei, textures: *const GLuint);
        fn DeleteTransformFeedbacks(n: GLsizei, ids: *const GLuint);
        fn DeleteVertexArrays(n: GLsizei, arrays: *const GLuint);
        fn DepthFunc(func: GLenum);
        fn DepthMask(flag: GLboolean);
        fn DepthRange(n: GLdouble, f: GLdouble);
        fn DepthRangeArrayv(first: GLuint, count: GLsizei, v: *const GLdouble);
        fn DepthRangeIndexed(index: GLuint, n: GLdouble, f: GLdouble);
        fn DepthRangef(n: GLfloat, f: GLfloat);
        fn DetachShader(program: GLuint, shader: GLuint);
        fn Disable(cap: GLenum);
        fn DisableVertexArrayAttrib(vaobj: GLuint, index: GLuint);
        fn DisableVertexAttribArray(index: GLuint);
        fn Disablei(target: GLenum, index: GLuint);
        fn DispatchCompute(num_groups_x: GLuint, num_groups_y: GLuint, num_groups_z: GLuint);
        fn DispatchComputeIndirect(indirect: GLintptr);
        fn DrawArrays(mode: GLenum, first: GLint, count: GLsizei);
        fn DrawArraysIndirect(mode: GLenum, indirect: *const c_void);
        fn DrawArraysInstanced(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei);
        fn DrawArraysInstancedBaseInstance(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei, baseinstance: GLuint);
        fn DrawBuffer(buf: GLenum);
        fn DrawBuffers(n: GLsizei, bufs: *const GLenum);
        fn DrawElements(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void);
        fn DrawElementsBaseVertex(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, basevertex: GLint);
        fn DrawElementsIndirect(mode: GLenum, type_: GLenum, indirect: *const c_void);
        fn DrawElementsInstanced(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei);
        fn DrawElementsInstancedBaseInstance(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei, baseinstance: GLuint);
        fn DrawElementsInstancedBaseVertex(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei, basevertex: GLint);
        fn DrawElementsInstancedBaseVertexBaseInstance(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei, basevertex: GLint, baseinstance: GLuint);
        fn DrawRangeElements(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, type_: GLenum, indices: *const c_void);
        fn DrawRangeElementsBaseVertex(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, type_: GLenum, indices: *const c_void, basevertex: GLint);
        fn DrawTransformFeedback(mode: GLenum, id: GLuint);
        fn DrawTransformFeedbackInstanced(mode: GLenum, id: GLuint, instancecount: GLsizei);
        fn DrawTransformFeedbackStream(mode: GLenum, id: GLuint, stream: GLuint);
        fn DrawTransformFeedbackStreamInstanced(mode: GLenum, id: GLuint, stream: GLuint, instancecount: GLsizei);
        fn Enable(cap: GLenum);
        fn EnableVertexArrayAttrib(vaobj: GLuint, index: GLuint);
        fn EnableVertexAttribArray(index: GLuint);
        fn Enablei(target: GLenum, index: GLuint);
        fn EndConditionalRender();
        fn EndQuery(target: GLenum);
        fn EndQueryIndexed(target: GLenum, index: GLuint);
        fn EndTransformFeedback();
        fn FenceSync(condition: GLenum, flags: GLbitfield) -> GLsync;
        fn Finish();
        fn Flush();
        fn FlushMappedBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr);
        fn FlushMappedNamedBufferRange(buffer: GLuint, offset: GLintptr, length: GLsizeiptr);
        fn FramebufferParameteri(target: GLenum, pname: GLenum, param: GLint);
        fn FramebufferRenderbuffer(target: GLenum, attachment: GLenum, renderbuffertarget: GLenum, renderbuffer: GLuint);
        fn FramebufferTexture(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint);
        fn FramebufferTexture1D(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint);
        fn FramebufferTexture2D(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint);
        fn FramebufferTexture3D(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint, zoffset: GLint);
        fn FramebufferTextureLayer(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint, layer: GLint);
        fn FrontFace(mode: GLenum);
        fn GenBuffers(n: GLsizei, buffers: *mut GLuint);
        fn GenFramebuffers(n: GLsizei, framebuffers: *mut GLuint);
        fn GenProgramPipelines(n: GLsizei, pipelines: *mut GLuint);
        fn GenQueries(n: GLsizei, ids: *mut GLuint);
        fn GenRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint);
        fn GenSamplers(count: GLsizei, samplers: *mut GLuint);
        fn GenTextures(n: GLsizei, textures: *mut GLuint);
        fn GenTransformFeedbacks(n: GLsizei, ids: *mut GLuint);
        fn GenVertexArrays(n: GLsizei, arrays: *mut GLuint);
        fn GenerateMipmap(target: GLenum);
        fn GenerateTextureMipmap(texture: GLuint);
        fn GetActiveAtomicCounterBufferiv(program: GLuint, buffer_index: GLuint, pname: GLenum, params: *mut GLint);
        fn GetActiveAttrib(program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum, name: *mut GLchar);
        fn GetActiveSubroutineName(program: GLuint, shadertype: GLenum, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, name: *mut GLchar);
        fn GetActiveSubroutineUniformName(program: GLuint, shadertype: GLenum, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, name: *mut GLchar);
        fn GetActiveSubroutineUniformiv(program: GLuint, shadertype: GLenum, index: GLuint, pname: GLenum, values: *mut GLint);
        fn GetActiveUniform(program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum, name: *mut GLchar);
        fn GetActiveUniformBlockName(program: GLuint, uniform_block_index: GLuint, buf_size: GLsizei, length: *mut GLsizei, uniform_block_name: *mut GLchar);
        fn GetActiveUniformBlockiv(program: GLuint, uniform_block_index: GLuint, pname: GLenum, params: *mut GLint);
        fn GetActiveUniformName(program: GLuint, uniform_index: GLuint, buf_size: GLsizei, length: *mut GLsizei, uniform_name: *mut GLchar);
        fn GetActiveUniformsiv(program: GLuint, uniform_count: GLsizei, uniform_indices: *const GLuint, pname: GLenum, params: *mut GLint);
        fn GetAttachedShaders(program: GLuint, max_count: GLsizei, count: *mut GLsizei, shaders: *mut GLuint);
        fn GetAttribLocation(program: GLuint, name: *const GLchar) -> GLint;
        fn GetBooleani_v(target: GLenum, index: GLuint, data: *mut GLboolean);
        fn GetBooleanv(pname: GLenum, data: *mut GLboolean);
        fn GetBufferParameteri64v(target: GLenum, pname: GLenum, params: *mut GLint64);
        fn GetBufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn GetBufferPointerv(target: GLenum, pname: GLenum, params: *mut *mut c_void);
        fn GetBufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *mut c_void);
        fn GetCompressedTexImage(target: GLenum, level: GLint, img: *mut c_void);
        fn GetCompressedTextureImage(texture: GLuint, level: GLint, buf_size: GLsizei, pixels: *mut c_void);
        fn GetCompressedTextureSubImage(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, buf_size: GLsizei, pixels: *mut c_void);
        fn GetDebugMessageLog(count: GLuint, buf_size: GLsizei, sources: *mut GLenum, types: *mut GLenum, ids: *mut GLuint, severities: *mut GLenum, lengths: *mut GLsizei, message_log: *mut GLchar) -> GLuint;
        fn GetDoublei_v(target: GLenum, index: GLuint, data: *mut GLdouble);
        fn GetDoublev(pname: GLenum, data: *mut GLdouble);
        fn GetError() -> GLenum;
        fn GetFloati_v(target: GLenum, index: GLuint, data: *mut GLfloat);
        fn GetFloatv(pname: GLenum, data: *mut GLfloat);
        fn GetFragDataIndex(program: GLuint, name: *const GLchar) -> GLint;
        fn GetFragDataLocation(program: GLuint, name: *const GLchar) -> GLint;
        fn GetFramebufferAttachmentParameteriv(target: GLenum, attachment: GLenum, pname: GLenum, params: *mut GLint);
        fn GetFramebufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn GetGraphicsResetStatus() -> GLenum;
        fn GetInteger64i_v(target: GLenum, index: GLuint, data: *mut GLint64);
        fn GetInteger64v(pname: GLenum, data: *mut GLint64);
        fn GetIntegeri_v(target: GLenum, index: GLuint, data: *mut GLint);
        fn GetIntegerv(pname: GLenum, data: *mut GLint);
        fn GetInternalformati64v(target: GLenum, internalformat: GLenum, pname: GLenum, count: GLsizei, params: *mut GLint64);
        fn GetInternalformativ(target: GLenum, internalformat: GLenum, pname: GLenum, count: GLsizei, params: *mut GLint);
        fn GetMultisamplefv(pname: GLenum, index: GLuint, val: *mut GLfloat);
        fn GetNamedBufferParameteri64v(buffer: GLuint, pname: GLenum, params: *mut GLint64);
        fn GetNamedBufferParameteriv(buffer: GLuint, pname: GLenum, params: *mut GLint);
        fn GetNamedBufferPointerv(buffer: GLuint, pname: GLenum, params: *mut *mut c_void);
        fn GetNamedBufferSubData(buffer: GLuint, offset: GLintptr, size: GLsizeiptr, data: *mut c_void);
        fn GetNamedFramebufferAttachmentParameteriv(framebuffer: GLuint, attachment: GLenum, pname: GLenum, params: *mut GLint);
        fn GetNamedFramebufferParameteriv(framebuffer: GLuint, pname: GLenum, param: *mut GLint);
        fn GetNamedRenderbufferParameteriv(renderbuffer: GLuint, pname: GLenum, params: *mut GLint);
        fn GetObjectLabel(identifier: GLenum, name: GLuint, buf_size: GLsizei, length: *mut GLsizei, label: *mut GLchar);
        fn GetObjectPtrLabel(ptr: *const c_void, buf_size: GLsizei, length: *mut GLsizei, label: *mut GLchar);
        fn GetPointerv(pname: GLenum, params: *mut *mut c_void);
        fn GetProgramBinary(program: GLuint, buf_size: GLsizei, length: *mut GLsizei, binary_format: *mut GLenum, binary: *mut c_void);
        fn GetProgramInfoLog(program: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
        fn GetProgramInterfaceiv(program: GLuint, program_interface: GLenum, pname: GLenum, params: *mut GLint);
        fn GetProgramPipelineInfoLog(pipeline: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
        fn GetProgramPipelineiv(pipeline: GLuint, pname: GLenum, params: *mut GLint);
        fn GetProgramResourceIndex(program: GLuint, program_interface: GLenum, name: *const GLchar) -> GLuint;
        fn GetProgramResourceLocation(program: GLuint, program_interface: GLenum, name: *const GLchar) -> GLint;
        fn GetProgramResourceLocationIndex(program: GLuint, program_interface: GLenum, name: *const GLchar) -> GLint;
        fn GetProgramResourceName(program: GLuint, program_interface: GLenum, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, name: *mut GLchar);
        fn GetProgramResourceiv(program: GLuint, program_interface: GLenum, index: GLuint, prop_count: GLsizei, props: *const GLenum, count: GLsizei, length: *mut GLsizei, params: *mut GLint);
        fn GetProgramStageiv(program: GLuint, shadertype: GLenum, pname: GLenum, values: *mut GLint);
        fn GetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint);
        fn GetQueryBufferObjecti64v(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
        fn GetQueryBufferObjectiv(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
        fn GetQueryBufferObjectui64v(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
        fn GetQueryBufferObjectuiv(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
        fn GetQueryIndexediv(target: GLenum, index: GLuint, pname: GLenum, params: *mut GLint);
        fn GetQueryObjecti64v(id: GLuint, pname: GLenum, params: *mut GLint64);
        fn GetQueryObjectiv(id: GLuint, pname: GLenum, params: *mut GLint);
        fn GetQueryObjectui64v(id: GLuint, pname: GLenum, params: *mut GLuint64);
        fn GetQueryObjectuiv(id: GLuint, pname: GLenum, params: *mut GLuint);
        fn GetQueryiv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn GetRenderbufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn GetSamplerParameterIiv(sampler: GLuint, pname: GLenum, params: *mut GLint);
        fn GetSamplerParameterIuiv(sampler: GLuint, pname: GLenum, params: *mut GLuint);
        fn GetSamplerParameterfv(sampler: GLuint, pname: GLenum, params: *mut GLfloat);
        fn GetSamplerParameteriv(sampler: GLuint, pname: GLenum, params: *mut GLint);
        fn GetShaderInfoLog(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
        fn GetShaderPrecisionFormat(shadertype: GLenum, precisiontype: GLenum, range: *mut GLint, precision: *mut GLint);
        fn GetShaderSource(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, source: *mut GLchar);
        fn GetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint);
        fn GetString(name: GLenum) -> *const GLubyte;
        fn GetStringi(name: GLenum, index: GLuint) -> *const GLubyte;
        fn GetSubroutineIndex(program: GLuint, shadertype: GLenum, name: *const GLchar) -> GLuint;
        fn GetSubroutineUniformLocation(program: GLuint, shadertype: GLenum, name: *const GLchar) -> GLint;
        fn GetSynciv(sync: GLsync, pname: GLenum, count: GLsizei, length: *mut GLsizei, values: *mut GLint);
        fn GetTexImage(target: GLenum, level: GLint, format: GLenum, type_: GLenum, pixels: *mut c_void);
        fn GetTexLevelParameterfv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLfloat);
        fn GetTexLevelParameteriv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLint);
        fn GetTexParameterIiv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn GetTexParameterIuiv(target: GLenum, pname: GLenum, params: *mut GLuint);
        fn GetTexParameterfv(target: GLenum, pname: GLenum, params: *mut GLfloat);
        fn GetTexParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn GetTextureImage(texture: GLuint, level: GLint, format: GLenum, type_: GLenum, buf_size: GLsizei, pixels: *mut c_void);
        fn GetTextureLevelParameterfv(texture: GLuint, level: GLint, pname: GLenum, params: *mut GLfloat);
        fn GetTextureLevelParameteriv(texture: GLuint, level: GLint, pname: GLenum, params: *mut GLint);
        fn GetTextureParameterIiv(texture: GLuint, pname: GLenum, params: *mut GLint);
        fn GetTextureParameterIuiv(texture: GLuint, pname: GLenum, params: *mut GLuint);
        fn GetTextureParameterfv(texture: GLuint, pname: GLenum, params: *mut GLfloat);
        fn GetTextureParameteriv(texture: GLuint, pname: GLenum, params: *mut GLint);
        fn GetTextureSubImage(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, buf_size: GLsizei, pixels: *mut c_void);
        fn GetTransformFeedbackVarying(program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, size: *mut GLsizei, type_: *mut GLenum, name: *mut GLchar);
        fn GetTransformFeedbacki64_v(xfb: GLuint, pname: GLenum, index: GLuint, param: *mut GLint64);
        fn GetTransformFeedbacki_v(xfb: GLuint, pname: GLenum, index: GLuint, param: *mut GLint);
        fn GetTransformFeedbackiv(xfb: GLuint, pname: GLenum, param: *mut GLint);
        fn GetUniformBlockIndex(program: GLuint, uniform_block_name: *const GLchar) -> GLuint;
        fn GetUniformIndices(program: GLuint, uniform_count: GLsizei, uniform_names: *const *const GLchar, uniform_indices: *mut GLuint);
        fn GetUniformLocation(program: GLuint, name: *const GLchar) -> GLint;
        fn GetUniformSubroutineuiv(shadertype: GLenum, location: GLint, params: *mut GLuint);
        fn GetUniformdv(program: GLuint, location: GLint, params: *mut GLdouble);
        fn GetUniformfv(program: GLuint, location: GLint, params: *mut GLfloat);
        fn GetUniformiv(program: GLuint, location: GLint, params: *mut GLint);
        fn GetUniformuiv(program: GLuint, location: GLint, params: *mut GLuint);
        fn GetVertexArrayIndexed64iv(vaobj: GLuint, index: GLuint, pname: GLenum, param: *mut GLint64);
        fn GetVertexArrayIndexediv(vaobj: GLuint, index: GLuint, pname: GLenum, param: *mut GLint);
        fn GetVertexArrayiv(vaobj: GLuint, pname: GLenum, param: *mut GLint);
        fn GetVertexAttribIiv(index: GLuint, pname: GLenum, params: *mut GLint);
        fn GetVertexAttribIuiv(index: GLuint, pname: GLenum, params: *mut GLuint);
        fn GetVertexAttribLdv(index: GLuint, pname: GLenum, params: *mut GLdouble);
        fn GetVertexAttribPointerv(index: GLuint, pname: GLenum, pointer: *mut *mut c_void);
        fn GetVertexAttribdv(index: GLuint, pname: GLenum, params: *mut GLdouble);
        fn GetVertexAttribfv(index: GLuint, pname: GLenum, params: *mut GLfloat);
        fn GetVertexAttribiv(index: GLuint, pname: GLenum, params: *mut GLint);
        fn GetnCompressedTexImage(target: GLenum, lod: GLint, buf_size: GLsizei, pixels: *mut c_void);
        fn GetnTexImage(target: GLenum, level: GLint, format: GLenum, type_: GLenum, buf_size: GLsizei, pixels: *mut c_void);
        fn GetnUniformdv(program: GLuint, location: GLint, buf_size: GLsizei, params: *mut GLdouble);
        fn GetnUniformfv(program: GLuint, location: GLint, buf_size: GLsizei, params: *mut GLfloat);
        fn GetnUniformiv(program: GLuint, location: GLint, buf_size: GLsizei, params: *mut GLint);
        fn GetnUniformuiv(program: GLuint, location: GLint, buf_size: GLsizei, params: *mut GLuint);
        fn Hint(target: GLenum, mode: GLenum);
        fn InvalidateBufferData(buffer: GLuint);
        fn InvalidateBufferSubData(buffer: GLuint, offset: GLintptr, length: GLsizeiptr);
        fn InvalidateFramebuffer(target: GLenum, num_attachments: GLsizei, attachments: *const GLenum);
        fn InvalidateNamedFramebufferData(framebuffer: GLuint, num_attachments: GLsizei, attachments: *const GLenum);
        fn InvalidateNamedFramebufferSubData(framebuffer: GLuint, num_attachments: GLsizei, attachments: *const GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn InvalidateSubFramebuffer(target: GLenum, num_attachments: GLsizei, attachments: *const GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn InvalidateTexImage(texture: GLuint, level: GLint);
        fn InvalidateTexSubImage(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei);
        fn IsBuffer(buffer: GLuint) -> GLboolean;
        fn IsEnabled(cap: GLenum) -> GLboolean;
        fn IsEnabledi(target: GLenum, index: GLuint) -> GLboolean;
        fn IsFramebuffer(framebuffer: GLuint) -> GLboolean;
        fn IsProgram(program: GLuint) -> GLboolean;
        fn IsProgramPipeline(pipeline: GLuint) -> GLboolean;
        fn IsQuery(id: GLuint) -> GLboolean;
        fn IsRenderbuffer(renderbuffer: GLuint) -> GLboolean;
        fn IsSampler(sampler: GLuint) -> GLboolean;
        fn IsShader(shader: GLuint) -> GLboolean;
        fn IsSync(sync: GLsync) -> GLboolean;
        fn IsTexture(texture: GLuint) -> GLboolean;
        fn IsTransformFeedback(id: GLuint) -> GLboolean;
        fn IsVertexArray(array: GLuint) -> GLboolean;
        fn LineWidth(width: GLfloat);
        fn LinkProgram(program: GLuint);
        fn LogicOp(opcode: GLenum);
        fn MapBuffer(target: GLenum, access: GLenum) -> *mut c_void;
        fn MapBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr, access: GLbitfield) -> *mut c_void;
        fn MapNamedBuffer(buffer: GLuint, access: GLenum) -> *mut c_void;
        fn MapNamedBufferRange(buffer: GLuint, offset: GLintptr, length: GLsizeiptr, access: GLbitfield) -> *mut c_void;
        fn MaxShaderCompilerThreadsKHR(count: GLuint);
        fn MemoryBarrier(barriers: GLbitfield);
        fn MemoryBarrierByRegion(barriers: GLbitfield);
        fn MinSampleShading(value: GLfloat);
        fn MultiDrawArrays(mode: GLenum, first: *const GLint, count: *const GLsizei, drawcount: GLsizei);
        fn MultiDrawArraysIndirect(mode: GLenum, indirect: *const c_void, drawcount: GLsizei, stride: GLsizei);
        fn MultiDrawArraysIndirectCount(mode: GLenum, indirect: *const c_void, drawcount: GLintptr, maxdrawcount: GLsizei, stride: GLsizei);
        fn MultiDrawElements(mode: GLenum, count: *const GLsizei, type_: GLenum, indices: *const *const c_void, drawcount: GLsizei);
        fn MultiDrawElementsBaseVertex(mode: GLenum, count: *const GLsizei, type_: GLenum, indices: *const *const c_void, drawcount: GLsizei, basevertex: *const GLint);
        fn MultiDrawElementsIndirect(mode: GLenum, type_: GLenum, indirect: *const c_void, drawcount: GLsizei, stride: GLsizei);
        fn MultiDrawElementsIndirectCount(mode: GLenum, type_: GLenum, indirect: *const c_void, drawcount: GLintptr, maxdrawcount: GLsizei, stride: GLsizei);
        fn NamedBufferData(buffer: GLuint, size: GLsizeiptr, data: *const c_void, usage: GLenum);
        fn NamedBufferStorage(buffer: GLuint, size: GLsizeiptr, data: *const c_void, flags: GLbitfield);
        fn NamedBufferSubData(buffer: GLuint, offset: GLintptr, size: GLsizeiptr, data: *const c_void);
        fn NamedFramebufferDrawBuffer(framebuffer: GLuint, buf: GLenum);
        fn NamedFramebufferDrawBuffers(framebuffer: GLuint, n: GLsizei, bufs: *const GLenum);
        fn NamedFramebufferParameteri(framebuffer: GLuint, pname: GLenum, param: GLint);
        fn NamedFramebufferReadBuffer(framebuffer: GLuint, src: GLenum);
        fn NamedFramebufferRenderbuffer(framebuffer: GLuint, attachment: GLenum, renderbuffertarget: GLenum, renderbuffer: GLuint);
        fn NamedFramebufferTexture(framebuffer: GLuint, attachment: GLenum, texture: GLuint, level: GLint);
        fn NamedFramebufferTextureLayer(framebuffer: GLuint, attachment: GLenum, texture: GLuint, level: GLint, layer: GLint);
        fn NamedRenderbufferStorage(renderbuffer: GLuint, internalformat: GLenum, width: GLsizei, height: GLsizei);
        fn NamedRenderbufferStorageMultisample(renderbuffer: GLuint, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
        fn ObjectLabel(identifier: GLenum, name: GLuint, length: GLsizei, label: *const GLchar);
        fn ObjectPtrLabel(ptr: *const c_void, length: GLsizei, label: *const GLchar);
        fn PatchParameterfv(pname: GLenum, values: *const GLfloat);
        fn PatchParameteri(pname: GLenum, value: GLint);
        fn PauseTransformFeedback();
        fn PixelStoref(pname: GLenum, param: GLfloat);
        fn PixelStorei(pname: GLenum, param: GLint);
        fn PointParameterf(pname: GLenum, param: GLfloat);
        fn PointParameterfv(pname: GLenum, params: *const GLfloat);
        fn PointParameteri(pname: GLenum, param: GLint);
        fn PointParameteriv(pname: GLenum, params: *const GLint);
        fn PointSize(size: GLfloat);
        fn PolygonMode(face: GLenum, mode: GLenum);
        fn PolygonOffset(factor: GLfloat, units: GLfloat);
        fn PolygonOffsetClamp(factor: GLfloat, units: GLfloat, clamp: GLfloat);
        fn PopDebugGroup();
        fn PrimitiveRestartIndex(index: GLuint);
        fn ProgramBinary(program: GLuint, binary_format: GLenum, binary: *const c_void, length: GLsizei);
        fn ProgramParameteri(program: GLuint, pname: GLenum, value: GLint);
        fn ProgramUniform1d(program: GLuint, location: GLint, v0: GLdouble);
        fn ProgramUniform1dv(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
        fn ProgramUniform1f(program: GLuint, location: GLint, v0: GLfloat);
        fn ProgramUniform1fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
        fn ProgramUniform1i(program: GLuint, location: GLint, v0: GLint);
        fn ProgramUniform1iv(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
        fn ProgramUniform1ui(program: GLuint, location: GLint, v0: GLuint);
        fn ProgramUniform1uiv(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
        fn ProgramUniform2d(program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble);
        fn ProgramUniform2dv(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
        fn ProgramUniform2f(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat);
        fn ProgramUniform2fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
        fn ProgramUniform2i(program: GLuint, location: GLint, v0: GLint, v1: GLint);
        fn ProgramUniform2iv(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
        fn ProgramUniform2ui(program: GLuint, location: GLint, v0: GLuint, v1: GLuint);
        fn ProgramUniform2uiv(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
        fn ProgramUniform3d(program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble, v2: GLdouble);
        fn ProgramUniform3dv(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
        fn ProgramUniform3f(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
        fn ProgramUniform3fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
        fn ProgramUniform3i(program: GLuint, location: GLint, v0: GLint, v1: GLint, v2: GLint);
        fn ProgramUniform3iv(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
        fn ProgramUniform3ui(program: GLuint, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint);
        fn ProgramUniform3uiv(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
        fn ProgramUniform4d(program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble, v2: GLdouble, v3: GLdouble);
        fn ProgramUniform4dv(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
        fn ProgramUniform4f(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
        fn ProgramUniform4fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
        fn ProgramUniform4i(program: GLuint, location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint);
        fn ProgramUniform4iv(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
        fn ProgramUniform4ui(program: GLuint, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint);
        fn ProgramUniform4uiv(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
        fn ProgramUniformMatrix2dv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn ProgramUniformMatrix2fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn ProgramUniformMatrix2x3dv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn ProgramUniformMatrix2x3fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn ProgramUniformMatrix2x4dv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn ProgramUniformMatrix2x4fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn ProgramUniformMatrix3dv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn ProgramUniformMatrix3fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn ProgramUniformMatrix3x2dv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn ProgramUniformMatrix3x2fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn ProgramUniformMatrix3x4dv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn ProgramUniformMatrix3x4fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn ProgramUniformMatrix4dv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn ProgramUniformMatrix4fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn ProgramUniformMatrix4x2dv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn ProgramUniformMatrix4x2fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn ProgramUniformMatrix4x3dv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn ProgramUniformMatrix4x3fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn ProvokingVertex(mode: GLenum);
        fn PushDebugGroup(source: GLenum, id: GLuint, length: GLsizei, message: *const GLchar);
        fn QueryCounter(id: GLuint, target: GLenum);
        fn ReadBuffer(src: GLenum);
        fn ReadPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *mut c_void);
        fn ReadnPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, buf_size: GLsizei, data: *mut c_void);
        fn ReleaseShaderCompiler();
        fn RenderbufferStorage(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei);
        fn RenderbufferStorageMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
        fn ResumeTransformFeedback();
        fn SampleCoverage(value: GLfloat, invert: GLboolean);
        fn SampleMaski(mask_number: GLuint, mask: GLbitfield);
        fn SamplerParameterIiv(sampler: GLuint, pname: GLenum, param: *const GLint);
        fn SamplerParameterIuiv(sampler: GLuint, pname: GLenum, param: *const GLuint);
        fn SamplerParameterf(sampler: GLuint, pname: GLenum, param: GLfloat);
        fn SamplerParameterfv(sampler: GLuint, pname: GLenum, param: *const GLfloat);
        fn SamplerParameteri(sampler: GLuint, pname: GLenum, param: GLint);
        fn SamplerParameteriv(sampler: GLuint, pname: GLenum, param: *const GLint);
        fn Scissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn ScissorArrayv(first: GLuint, count: GLsizei, v: *const GLint);
        fn ScissorIndexed(index: GLuint, left: GLint, bottom: GLint, width: GLsizei, height: GLsizei);
        fn ScissorIndexedv(index: GLuint, v: *const GLint);
        fn ShaderBinary(count: GLsizei, shaders: *const GLuint, binary_format: GLenum, binary: *const c_void, length: GLsizei);
        fn ShaderSource(shader: GLuint, count: GLsizei, string: *const *const GLchar, length: *const GLint);
        fn ShaderStorageBlockBinding(program: GLuint, storage_block_index: GLuint, storage_block_binding: GLuint);
        fn SpecializeShader(shader: GLuint, entry_point: *const GLchar, num_specialization_constants: GLuint, constant_index: *const GLuint, constant_value: *const GLuint);
        fn StencilFunc(func: GLenum, ref_: GLint, mask: GLuint);
        fn StencilFuncSeparate(face: GLenum, func: GLenum, ref_: GLint, mask: GLuint);
        fn StencilMask(mask: GLuint);
        fn StencilMaskSeparate(face: GLenum, mask: GLuint);
        fn StencilOp(fail: GLenum, zfail: GLenum, zpass: GLenum);
        fn StencilOpSeparate(face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum);
        fn TexBuffer(target: GLenum, internalformat: GLenum, buffer: GLuint);
        fn TexBufferRange(target: GLenum, internalformat: GLenum, buffer: GLuint, offset: GLintptr, size: GLsizeiptr);
        fn TexImage1D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void);
        fn TexImage2D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void);
        fn TexImage2DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, fixedsamplelocations: GLboolean);
        fn TexImage3D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void);
        fn TexImage3DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, fixedsamplelocations: GLboolean);
        fn TexParameterIiv(target: GLenum, pname: GLenum, params: *const GLint);
        fn TexParameterIuiv(target: GLenum, pname: GLenum, params: *const GLuint);
        fn TexParameterf(target: GLenum, pname: GLenum, param: GLfloat);
        fn TexParameterfv(target: GLenum, pname: GLenum, params: *const GLfloat);
        fn TexParameteri(target: GLenum, pname: GLenum, param: GLint);
        fn TexParameteriv(target: GLenum, pname: GLenum, params: *const GLint);
        fn TexStorage1D(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei);
        fn TexStorage2D(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
        fn TexStorage2DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, fixedsamplelocations: GLboolean);
        fn TexStorage3D(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei);
        fn TexStorage3DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, fixedsamplelocations: GLboolean);
        fn TexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
        fn TexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
        fn TexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
        fn TextureBarrier();
        fn TextureBuffer(texture: GLuint, internalformat: GLenum, buffer: GLuint);
        fn TextureBufferRange(texture: GLuint, internalformat: GLenum, buffer: GLuint, offset: GLintptr, size: GLsizeiptr);
        fn TextureParameterIiv(texture: GLuint, pname: GLenum, params: *const GLint);
        fn TextureParameterIuiv(texture: GLuint, pname: GLenum, params: *const GLuint);
        fn TextureParameterf(texture: GLuint, pname: GLenum, param: GLfloat);
        fn TextureParameterfv(texture: GLuint, pname: GLenum, param: *const GLfloat);
        fn TextureParameteri(texture: GLuint, pname: GLenum, param: GLint);
        fn TextureParameteriv(texture: GLuint, pname: GLenum, param: *const GLint);
        fn TextureStorage1D(texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei);
        fn TextureStorage2D(texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
        fn TextureStorage2DMultisample(texture: GLuint, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, fixedsamplelocations: GLboolean);
        fn TextureStorage3D(texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei);
        fn TextureStorage3DMultisample(texture: GLuint, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, fixedsamplelocations: GLboolean);
        fn TextureSubImage1D(texture: GLuint, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
        fn TextureSubImage2D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
        fn TextureSubImage3D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
        fn TextureView(texture: GLuint, target: GLenum, origtexture: GLuint, internalformat: GLenum, minlevel: GLuint, numlevels: GLuint, minlayer: GLuint, numlayers: GLuint);
        fn TransformFeedbackBufferBase(xfb: GLuint, index: GLuint, buffer: GLuint);
        fn TransformFeedbackBufferRange(xfb: GLuint, index: GLuint, buffer: GLuint, offset: GLintptr, size: GLsizeiptr);
        fn TransformFeedbackVaryings(program: GLuint, count: GLsizei, varyings: *const *const GLchar, buffer_mode: GLenum);
        fn Uniform1d(location: GLint, x: GLdouble);
        fn Uniform1dv(location: GLint, count: GLsizei, value: *const GLdouble);
        fn Uniform1f(location: GLint, v0: GLfloat);
        fn Uniform1fv(location: GLint, count: GLsizei, value: *const GLfloat);
        fn Uniform1i(location: GLint, v0: GLint);
        fn Uniform1iv(location: GLint, count: GLsizei, value: *const GLint);
        fn Uniform1ui(location: GLint, v0: GLuint);
        fn Uniform1uiv(location: GLint, count: GLsizei, value: *const GLuint);
        fn Uniform2d(location: GLint, x: GLdouble, y: GLdouble);
        fn Uniform2dv(location: GLint, count: GLsizei, value: *const GLdouble);
        fn Uniform2f(location: GLint, v0: GLfloat, v1: GLfloat);
        fn Uniform2fv(location: GLint, count: GLsizei, value: *const GLfloat);
        fn Uniform2i(location: GLint, v0: GLint, v1: GLint);
        fn Uniform2iv(location: GLint, count: GLsizei, value: *const GLint);
        fn Uniform2ui(location: GLint, v0: GLuint, v1: GLuint);
        fn Uniform2uiv(location: GLint, count: GLsizei, value: *const GLuint);
        fn Uniform3d(location: GLint, x: GLdouble, y: GLdouble, z: GLdouble);
        fn Uniform3dv(location: GLint, count: GLsizei, value: *const GLdouble);
        fn Uniform3f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
        fn Uniform3fv(location: GLint, count: GLsizei, value: *const GLfloat);
        fn Uniform3i(location: GLint, v0: GLint, v1: GLint, v2: GLint);
        fn Uniform3iv(location: GLint, count: GLsizei, value: *const GLint);
        fn Uniform3ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint);
        fn Uniform3uiv(location: GLint, count: GLsizei, value: *const GLuint);
        fn Uniform4d(location: GLint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
        fn Uniform4dv(location: GLint, count: GLsizei, value: *const GLdouble);
        fn Uniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
        fn Uniform4fv(location: GLint, count: GLsizei, value: *const GLfloat);
        fn Uniform4i(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint);
        fn Uniform4iv(location: GLint, count: GLsizei, value: *const GLint);
        fn Uniform4ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint);
        fn Uniform4uiv(location: GLint, count: GLsizei, value: *const GLuint);
        fn UniformBlockBinding(program: GLuint, uniform_block_index: GLuint, uniform_block_binding: GLuint);
        fn UniformMatrix2dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn UniformMatrix2fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn UniformMatrix2x3dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn UniformMatrix2x3fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn UniformMatrix2x4dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn UniformMatrix2x4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn UniformMatrix3dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn UniformMatrix3fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn UniformMatrix3x2dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn UniformMatrix3x2fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn UniformMatrix3x4dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn UniformMatrix3x4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn UniformMatrix4dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn UniformMatrix4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn UniformMatrix4x2dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn UniformMatrix4x2fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn UniformMatrix4x3dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn UniformMatrix4x3fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn UniformSubroutinesuiv(shadertype: GLenum, count: GLsizei, indices: *const GLuint);
        fn UnmapBuffer(target: GLenum) -> GLboolean;
        fn UnmapNamedBuffer(buffer: GLuint) -> GLboolean;
        fn UseProgram(program: GLuint);
        fn UseProgramStages(pipeline: GLuint, stages: GLbitfield, program: GLuint);
        fn ValidateProgram(program: GLuint);
        fn ValidateProgramPipeline(pipeline: GLuint);
        fn VertexArrayAttribBinding(vaobj: GLuint, attribindex: GLuint, bindingindex: GLuint);
        fn VertexArrayAttribFormat(vaobj: GLuint, attribindex: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, relativeoffset: GLuint);
        fn VertexArrayAttribIFormat(vaobj: GLuint, attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint);
        fn VertexArrayAttribLFormat(vaobj: GLuint, attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint);
        fn VertexArrayBindingDivisor(vaobj: GLuint, bindingindex: GLuint, divisor: GLuint);
        fn VertexArrayElementBuffer(vaobj: GLuint, buffer: GLuint);
        fn VertexArrayVertexBuffer(vaobj: GLuint, bindingindex: GLuint, buffer: GLuint, offset: GLintptr, stride: GLsizei);
        fn VertexArrayVertexBuffers(vaobj: GLuint, first: GLuint, count: GLsizei, buffers: *const GLuint, offsets: *const GLintptr, strides: *const GLsizei);
        fn VertexAttrib1d(index: GLuint, x: GLdouble);
        fn VertexAttrib1dv(index: GLuint, v: *const GLdouble);
        fn VertexAttrib1f(index: GLuint, x: GLfloat);
        fn VertexAttrib1fv(index: GLuint, v: *const GLfloat);
        fn VertexAttrib1s(index: GLuint, x: GLshort);
        fn VertexAttrib1sv(index: GLuint, v: *const GLshort);
        fn VertexAttrib2d(index: GLuint, x: GLdouble, y: GLdouble);
        fn VertexAttrib2dv(index: GLuint, v: *const GLdouble);
        fn VertexAttrib2f(index: GLuint, x: GLfloat, y: GLfloat);
        fn VertexAttrib2fv(index: GLuint, v: *const GLfloat);
        fn VertexAttrib2s(index: GLuint, x: GLshort, y: GLshort);
        fn VertexAttrib2sv(index: GLuint, v: *const GLshort);
        fn VertexAttrib3d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble);
        fn VertexAttrib3dv(index: GLuint, v: *const GLdouble);
        fn VertexAttrib3f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat);
        fn VertexAttrib3fv(index: GLuint, v: *const GLfloat);
        fn VertexAttrib3s(index: GLuint, x: GLshort, y: GLshort, z: GLshort);
        fn VertexAttrib3sv(index: GLuint, v: *const GLshort);
        fn VertexAttrib4Nbv(index: GLuint, v: *const GLbyte);
        fn VertexAttrib4Niv(index: GLuint, v: *const GLint);
        fn VertexAttrib4Nsv(index: GLuint, v: *const GLshort);
        fn VertexAttrib4Nub(index: GLuint, x: GLubyte, y: GLubyte, z: GLubyte, w: GLubyte);
        fn VertexAttrib4Nubv(index: GLuint, v: *const GLubyte);
        fn VertexAttrib4Nuiv(index: GLuint, v: *const GLuint);
        fn VertexAttrib4Nusv(index: GLuint, v: *const GLushort);
        fn VertexAttrib4bv(index: GLuint, v: *const GLbyte);
        fn VertexAttrib4d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
        fn VertexAttrib4dv(index: GLuint, v: *const GLdouble);
        fn VertexAttrib4f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
        fn VertexAttrib4fv(index: GLuint, v: *const GLfloat);
        fn VertexAttrib4iv(index: GLuint, v: *const GLint);
        fn VertexAttrib4s(index: GLuint, x: GLshort, y: GLshort, z: GLshort, w: GLshort);
        fn VertexAttrib4sv(index: GLuint, v: *const GLshort);
        fn VertexAttrib4ubv(index: GLuint, v: *const GLubyte);
        fn VertexAttrib4uiv(index: GLuint, v: *const GLuint);
        fn VertexAttrib4usv(index: GLuint, v: *const GLushort);
        fn VertexAttribBinding(attribindex: GLuint, bindingindex: GLuint);
        fn VertexAttribDivisor(index: GLuint, divisor: GLuint);
        fn VertexAttribFormat(attribindex: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, relativeoffset: GLuint);
        fn VertexAttribI1i(index: GLuint, x: GLint);
        fn VertexAttribI1iv(index: GLuint, v: *const GLint);
        fn VertexAttribI1ui(index: GLuint, x: GLuint);
        fn VertexAttribI1uiv(index: GLuint, v: *const GLuint);
        fn VertexAttribI2i(index: GLuint, x: GLint, y: GLint);
        fn VertexAttribI2iv(index: GLuint, v: *const GLint);
        fn VertexAttribI2ui(index: GLuint, x: GLuint, y: GLuint);
        fn VertexAttribI2uiv(index: GLuint, v: *const GLuint);
        fn VertexAttribI3i(index: GLuint, x: GLint, y: GLint, z: GLint);
        fn VertexAttribI3iv(index: GLuint, v: *const GLint);
        fn VertexAttribI3ui(index: GLuint, x: GLuint, y: GLuint, z: GLuint);
        fn VertexAttribI3uiv(index: GLuint, v: *const GLuint);
        fn VertexAttribI4bv(index: GLuint, v: *const GLbyte);
        fn VertexAttribI4i(index: GLuint, x: GLint, y: GLint, z: GLint, w: GLint);
        fn VertexAttribI4iv(index: GLuint, v: *const GLint);
        fn VertexAttribI4sv(index: GLuint, v: *const GLshort);
        fn VertexAttribI4ubv(index: GLuint, v: *const GLubyte);
        fn VertexAttribI4ui(index: GLuint, x: GLuint, y: GLuint, z: GLuint, w: GLuint);
        fn VertexAttribI4uiv(index: GLuint, v: *const GLuint);
        fn VertexAttribI4usv(index: GLuint, v: *const GLushort);
        fn VertexAttribIFormat(attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint);
        fn VertexAttribIPointer(index: GLuint, size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void);
        fn VertexAttribL1d(index: GLuint, x: GLdouble);
        fn VertexAttribL1dv(index: GLuint, v: *const GLdouble);
        fn VertexAttribL2d(index: GLuint, x: GLdouble, y: GLdouble);
        fn VertexAttribL2dv(index: GLuint, v: *const GLdouble);
        fn VertexAttribL3d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble);
        fn VertexAttribL3dv(index: GLuint, v: *const GLdouble);
        fn VertexAttribL4d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
        fn VertexAttribL4dv(index: GLuint, v: *const GLdouble);
        fn VertexAttribLFormat(attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint);
        fn VertexAttribLPointer(index: GLuint, size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void);
        fn VertexAttribP1ui(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
        fn VertexAttribP1uiv(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
        fn VertexAttribP2ui(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
        fn VertexAttribP2uiv(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
        fn VertexAttribP3ui(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
        fn VertexAttribP3uiv(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
        fn VertexAttribP4ui(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
        fn VertexAttribP4uiv(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
        fn VertexAttribPointer(index: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, stride: GLsizei, pointer: *const c_void);
        fn VertexBindingDivisor(bindingindex: GLuint, divisor: GLuint);
        fn Viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn ViewportArrayv(first: GLuint, count: GLsizei, v: *const GLfloat);
        fn ViewportIndexedf(index: GLuint, x: GLfloat, y: GLfloat, w: GLfloat, h: GLfloat);
        fn ViewportIndexedfv(index: GLuint, v: *const GLfloat);
        fn WaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64);
    }

    extensions {
        fn ApplyFramebufferAttachmentCMAAINTEL();
        fn BeginPerfQueryINTEL(query_handle: GLuint);
        fn BlendBarrierNV();
        fn BlendParameteriNV(pname: GLenum, value: GLint);
        fn BufferPageCommitmentARB(target: GLenum, offset: GLintptr, size: GLsizeiptr, commit: GLboolean);
        fn CompileShaderIncludeARB(shader: GLuint, count: GLsizei, path: *const *const GLchar, length: *const GLint);
        fn ConservativeRasterParameteriNV(pname: GLenum, param: GLint);
        fn DebugMessageCallbackARB(callback: GLDEBUGPROC, user_param: *const c_void);
        fn DebugMessageControlARB(source: GLenum, type_: GLenum, severity: GLenum, count: GLsizei, ids: *const GLuint, enabled: GLboolean);
        fn DebugMessageInsertARB(source: GLenum, type_: GLenum, id: GLuint, severity: GLenum, length: GLsizei, buf: *const GLchar);
        fn DeleteNamedStringARB(namelen: GLint, name: *const GLchar);
        fn DeletePerfQueryINTEL(query_handle: GLuint);
        fn DispatchComputeGroupSizeARB(num_groups_x: GLuint, num_groups_y: GLuint, num_groups_z: GLuint, group_size_x: GLuint, group_size_y: GLuint, group_size_z: GLuint);
        fn EndPerfQueryINTEL(query_handle: GLuint);
        fn EvaluateDepthValuesARB();
        fn FramebufferSampleLocationsfvARB(target: GLenum, start: GLuint, count: GLsizei, v: *const GLfloat);
        fn FramebufferSamplePositionsfvAMD(target: GLenum, numsamples: GLuint, pixelindex: GLuint, values: *const GLfloat);
        fn FramebufferTextureMultiviewOVR(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint, base_view_index: GLint, num_views: GLsizei);
        fn GetDebugMessageLogARB(count: GLuint, buf_size: GLsizei, sources: *mut GLenum, types: *mut GLenum, ids: *mut GLuint, severities: *mut GLenum, lengths: *mut GLsizei, message_log: *mut GLchar) -> GLuint;
        fn GetGraphicsResetStatusARB() -> GLenum;
        fn GetImageHandleARB(texture: GLuint, level: GLint, layered: GLboolean, layer: GLint, format: GLenum) -> GLuint64;
        fn GetNamedStringARB(namelen: GLint, name: *const GLchar, buf_size: GLsizei, stringlen: *mut GLint, string: *mut GLchar);
        fn GetNamedStringivARB(namelen: GLint, name: *const GLchar, pname: GLenum, params: *mut GLint);
        fn GetTextureHandleARB(texture: GLuint) -> GLuint64;
        fn GetTextureSamplerHandleARB(texture: GLuint, sampler: GLuint) -> GLuint64;
        fn GetVertexAttribLui64vARB(index: GLuint, pname: GLenum, params: *mut GLuint64);
        fn GetnCompressedTexImageARB(target: GLenum, lod: GLint, buf_size: GLsizei, img: *mut c_void);
        fn GetnTexImageARB(target: GLenum, level: GLint, format: GLenum, type_: GLenum, buf_size: GLsizei, img: *mut c_void);
        fn GetnUniformdvARB(program: GLuint, location: GLint, buf_size: GLsizei, params: *mut GLdouble);
        fn GetnUniformfvARB(program: GLuint, location: GLint, buf_size: GLsizei, params: *mut GLfloat);
        fn GetnUniformivARB(program: GLuint, location: GLint, buf_size: GLsizei, params: *mut GLint);
        fn GetnUniformuivARB(program: GLuint, location: GLint, buf_size: GLsizei, params: *mut GLuint);
        fn IsImageHandleResidentARB(handle: GLuint64) -> GLboolean;
        fn IsNamedStringARB(namelen: GLint, name: *const GLchar) -> GLboolean;
        fn IsTextureHandleResidentARB(handle: GLuint64) -> GLboolean;
        fn MakeImageHandleNonResidentARB(handle: GLuint64);
        fn MakeImageHandleResidentARB(handle: GLuint64, access: GLenum);
        fn MakeTextureHandleNonResidentARB(handle: GLuint64);
        fn MakeTextureHandleResidentARB(handle: GLuint64);
        fn MaxShaderCompilerThreadsARB(count: GLuint);
        fn MinSampleShadingARB(value: GLfloat);
        fn NamedBufferPageCommitmentARB(buffer: GLuint, offset: GLintptr, size: GLsizeiptr, commit: GLboolean);
        fn NamedBufferPageCommitmentEXT(buffer: GLuint, offset: GLintptr, size: GLsizeiptr, commit: GLboolean);
        fn NamedFramebufferSampleLocationsfvARB(framebuffer: GLuint, start: GLuint, count: GLsizei, v: *const GLfloat);
        fn NamedFramebufferSamplePositionsfvAMD(framebuffer: GLuint, numsamples: GLuint, pixelindex: GLuint, values: *const GLfloat);
        fn NamedStringARB(type_: GLenum, namelen: GLint, name: *const GLchar, stringlen: GLint, string: *const GLchar);
        fn PolygonOffsetClampEXT(factor: GLfloat, units: GLfloat, clamp: GLfloat);
        fn PrimitiveBoundingBoxARB(min_x: GLfloat, min_y: GLfloat, min_z: GLfloat, min_w: GLfloat, max_x: GLfloat, max_y: GLfloat, max_z: GLfloat, max_w: GLfloat);
        fn ProgramUniformHandleui64ARB(program: GLuint, location: GLint, value: GLuint64);
        fn ProgramUniformHandleui64vARB(program: GLuint, location: GLint, count: GLsizei, values: *const GLuint64);
        fn RasterSamplesEXT(samples: GLuint, fixedsamplelocations: GLboolean);
        fn ReadnPixelsARB(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, buf_size: GLsizei, data: *mut c_void);
        fn SubpixelPrecisionBiasNV(xbits: GLuint, ybits: GLuint);
        fn TexPageCommitmentARB(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, commit: GLboolean);
        fn UniformHandleui64ARB(location: GLint, value: GLuint64);
        fn UniformHandleui64vARB(location: GLint, count: GLsizei, value: *const GLuint64);
        fn VertexAttribL1ui64ARB(index: GLuint, x: GLuint64);
        fn VertexAttribL1ui64vARB(index: GLuint, v: *const GLuint64);
        fn ViewportSwizzleNV(index: GLuint, swizzlex: GLenum, swizzley: GLenum, swizzlez: GLenum, swizzlew: GLenum);
        fn WindowRectanglesEXT(mode: GLenum, count: GLsizei, box_: *const GLint);
    }
}
