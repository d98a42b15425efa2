//! Trait abstracting the OpenGL buffer-object API.
//!
//! The `GlContext` trait covers the handful of driver entry points needed
//! to manage buffer objects, allowing for both real GL usage and mock
//! implementations for testing.

use crate::gl_types::{BufferHandle, BufferTarget, BufferUsage};

/// Trait abstracting GL buffer-object operations.
///
/// Every method maps to one driver call. Binding state is global to the
/// context: `bind_buffer` changes what later `buffer_data_size` and
/// `buffer_sub_data` calls on the same target operate on.
///
/// # Threading
///
/// A GL context is current on exactly one thread. This trait has no
/// `Send + Sync` bound; callers must keep all use on the owning thread.
///
/// # Errors
///
/// Driver errors are not returned from the calls themselves. They are
/// latched by the driver and reported by [`get_error`](Self::get_error),
/// which callers query after state-changing calls.
///
/// # Example
///
/// ```rust,no_run
/// use ovalis_test_utils::{BufferTarget, BufferUsage, GlContext};
///
/// fn upload(ctx: &dyn GlContext, bytes: &[u8]) {
///     let buffer = ctx.create_buffer().expect("buffer");
///     ctx.bind_buffer(BufferTarget::Array, Some(buffer));
///     ctx.buffer_data_size(BufferTarget::Array, bytes.len() as i32, BufferUsage::StaticDraw);
///     ctx.buffer_sub_data(BufferTarget::Array, 0, bytes);
///     ctx.bind_buffer(BufferTarget::Array, None);
/// }
/// ```
pub trait GlContext {
    /// Generate a new buffer name (`glGenBuffers`).
    fn create_buffer(&self) -> Result<BufferHandle, String>;

    /// Delete a buffer (`glDeleteBuffers`).
    ///
    /// Any target the buffer is bound to reverts to the null buffer.
    fn delete_buffer(&self, buffer: BufferHandle);

    /// Bind a buffer, or the null buffer, to `target` (`glBindBuffer`).
    fn bind_buffer(&self, target: BufferTarget, buffer: Option<BufferHandle>);

    /// Query the buffer bound to `target` (`glGetIntegerv(*_BINDING)`).
    fn buffer_binding(&self, target: BufferTarget) -> Option<BufferHandle>;

    /// Allocate uninitialized storage for the bound buffer (`glBufferData`
    /// with a null pointer).
    fn buffer_data_size(&self, target: BufferTarget, size: i32, usage: BufferUsage);

    /// Upload `data` into the bound buffer at `offset` (`glBufferSubData`).
    fn buffer_sub_data(&self, target: BufferTarget, offset: i32, data: &[u8]);

    /// Pop the next latched error (`glGetError`), `gl::NO_ERROR` if none.
    fn get_error(&self) -> u32;
}
