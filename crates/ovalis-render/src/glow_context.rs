//! [`GlContext`] backed by a real OpenGL context through `glow`.

use std::num::NonZeroU32;

use glow::HasContext;
use ovalis_test_utils::{BufferHandle, BufferTarget, BufferUsage, GlContext};

/// A `glow` context that is current on the calling thread.
pub struct GlowContext {
    gl: glow::Context,
}

impl GlowContext {
    /// Wrap a `glow` context.
    ///
    /// # Safety
    ///
    /// `gl` must stay current on the calling thread for as long as this
    /// value, or any index buffer created from it, is used.
    pub unsafe fn new(gl: glow::Context) -> Self {
        Self { gl }
    }

    /// The wrapped `glow` context.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Unwrap into the `glow` context.
    pub fn into_inner(self) -> glow::Context {
        self.gl
    }
}

fn native(buffer: BufferHandle) -> glow::NativeBuffer {
    glow::NativeBuffer(buffer.as_non_zero())
}

// SAFETY (all methods): `GlowContext::new` requires the context to be
// current on this thread, and every buffer name passed in was produced by
// `create_buffer` on the same context.
impl GlContext for GlowContext {
    fn create_buffer(&self) -> Result<BufferHandle, String> {
        let buffer = unsafe { self.gl.create_buffer() }?;
        Ok(BufferHandle::from(buffer.0))
    }

    fn delete_buffer(&self, buffer: BufferHandle) {
        unsafe { self.gl.delete_buffer(native(buffer)) }
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<BufferHandle>) {
        unsafe { self.gl.bind_buffer(target.gl_enum(), buffer.map(native)) }
    }

    fn buffer_binding(&self, target: BufferTarget) -> Option<BufferHandle> {
        let name = unsafe { self.gl.get_parameter_i32(target.binding_enum()) };
        NonZeroU32::new(name as u32).map(BufferHandle::from)
    }

    fn buffer_data_size(&self, target: BufferTarget, size: i32, usage: BufferUsage) {
        unsafe { self.gl.buffer_data_size(target.gl_enum(), size, usage.gl_enum()) }
    }

    fn buffer_sub_data(&self, target: BufferTarget, offset: i32, data: &[u8]) {
        unsafe {
            self.gl
                .buffer_sub_data_u8_slice(target.gl_enum(), offset, data)
        }
    }

    fn get_error(&self) -> u32 {
        unsafe { self.gl.get_error() }
    }
}
