//! Scoped buffer bindings.
//!
//! GL keeps one "current buffer" per binding target for the whole context.
//! Code that binds a buffer only to operate on it should leave that slot as
//! it found it; [`BindingGuard`] does this on every exit path, including
//! early returns through `?`.

use ovalis_test_utils::{BufferHandle, BufferTarget, GlContext};

/// Binds a buffer for the guard's lifetime, then restores the previous one.
///
/// ```rust,ignore
/// {
///     let _guard = BindingGuard::bind(ctx, BufferTarget::ElementArray, handle);
///     ctx.buffer_sub_data(BufferTarget::ElementArray, 0, &bytes);
///     check_gl_errors(ctx, mode, "glBufferSubData")?;
/// } // previous binding restored here
/// ```
#[must_use = "the previous binding is restored when the guard is dropped"]
pub struct BindingGuard<'a> {
    context: &'a dyn GlContext,
    target: BufferTarget,
    previous: Option<BufferHandle>,
}

impl<'a> BindingGuard<'a> {
    /// Record what is bound to `target`, then bind `buffer` there.
    pub fn bind(context: &'a dyn GlContext, target: BufferTarget, buffer: BufferHandle) -> Self {
        let previous = context.buffer_binding(target);
        context.bind_buffer(target, Some(buffer));
        Self {
            context,
            target,
            previous,
        }
    }

    /// The binding that will be restored.
    pub fn previous(&self) -> Option<BufferHandle> {
        self.previous
    }
}

impl Drop for BindingGuard<'_> {
    fn drop(&mut self) {
        tracing::trace!(
            "restoring {:?} binding to {:?}",
            self.target,
            self.previous.map(BufferHandle::get)
        );
        self.context.bind_buffer(self.target, self.previous);
    }
}
