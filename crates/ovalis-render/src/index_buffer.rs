//! GPU index buffers.
//!
//! An [`IndexBuffer`] owns one GL buffer object holding element indices for
//! indexed draws. It is fixed in size and index type at creation, can be
//! bound and partially rewritten any number of times, and is destroyed
//! exactly once.
//!
//! # Example
//!
//! ```ignore
//! use ovalis_render::*;
//!
//! let mut indices = IndexBuffer::create(context.clone(), 6, IndexType::U16)?;
//! indices.write_indices(&[0u16, 1, 2, 2, 3, 0], 0)?;
//!
//! indices.bind()?;
//! // ... draw ...
//! indices.unbind()?;
//!
//! indices.destroy()?;
//! ```

use std::sync::Arc;

use ovalis_core::config::{Config, GlErrorCheck};
use ovalis_core::profiling::profile_function;
use ovalis_test_utils::{BufferHandle, BufferTarget, BufferUsage, GlContext, gl};

use crate::{BindingGuard, IndexBufferError, check_gl_errors};

const TARGET: BufferTarget = BufferTarget::ElementArray;

/// Element type of an index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexType {
    /// 16-bit unsigned indices (`GL_UNSIGNED_SHORT`)
    U16,
    /// 32-bit unsigned indices (`GL_UNSIGNED_INT`)
    U32,
}

impl IndexType {
    /// Size of one index in bytes.
    pub const fn size_in_bytes(self) -> usize {
        match self {
            IndexType::U16 => 2,
            IndexType::U32 => 4,
        }
    }

    /// The GL enum passed to indexed draw calls.
    pub const fn gl_enum(self) -> u32 {
        match self {
            IndexType::U16 => gl::UNSIGNED_SHORT,
            IndexType::U32 => gl::UNSIGNED_INT,
        }
    }
}

impl TryFrom<u32> for IndexType {
    type Error = IndexBufferError;

    /// Map a GL type enum to an index type.
    ///
    /// `GL_UNSIGNED_BYTE` indices are valid GL but not supported here.
    fn try_from(gl_type: u32) -> Result<Self, Self::Error> {
        match gl_type {
            gl::UNSIGNED_SHORT => Ok(IndexType::U16),
            gl::UNSIGNED_INT => Ok(IndexType::U32),
            other => Err(IndexBufferError::UnsupportedIndexType(other)),
        }
    }
}

/// Lifecycle of the underlying buffer object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BufferState {
    Live(BufferHandle),
    Destroyed,
}

/// A GL element-array buffer with a fixed capacity.
///
/// All methods except [`destroy`](Self::destroy) and
/// [`unbind`](Self::unbind) fail with [`IndexBufferError::Destroyed`] once
/// the buffer has been destroyed, before touching the driver.
///
/// `create` and `write` bind the buffer only for the duration of the call
/// and put back whatever was bound before. `bind` deliberately leaves the
/// buffer bound for subsequent draws.
///
/// The buffer is tied to the thread owning its GL context; it is neither
/// `Send` nor `Sync`.
pub struct IndexBuffer {
    context: Arc<dyn GlContext>,
    state: BufferState,
    index_type: IndexType,
    element_count: usize,
    error_check: GlErrorCheck,
}

impl IndexBuffer {
    /// Allocate an index buffer with room for `element_count` indices,
    /// using the default [`Config`].
    pub fn create(
        context: Arc<dyn GlContext>,
        element_count: usize,
        index_type: IndexType,
    ) -> Result<Self, IndexBufferError> {
        Self::create_with_config(context, element_count, index_type, &Config::default())
    }

    /// Allocate an index buffer with an explicit configuration.
    ///
    /// Storage is allocated uninitialized with a dynamic usage hint. If
    /// allocation fails the buffer name is released again.
    pub fn create_with_config(
        context: Arc<dyn GlContext>,
        element_count: usize,
        index_type: IndexType,
        config: &Config,
    ) -> Result<Self, IndexBufferError> {
        profile_function!();

        let size = element_count
            .checked_mul(index_type.size_in_bytes())
            .and_then(|size| i32::try_from(size).ok())
            .ok_or(IndexBufferError::CapacityOverflow {
                element_count,
                index_type,
            })?;

        let handle = context
            .create_buffer()
            .map_err(IndexBufferError::CreateFailed)?;

        let error_check = config.gl_error_check;
        if let Err(err) = Self::allocate(&*context, handle, size, error_check) {
            context.delete_buffer(handle);
            return Err(err);
        }

        tracing::debug!(
            "created index buffer {} ({} x {:?}, {} bytes)",
            handle,
            element_count,
            index_type,
            size
        );

        Ok(Self {
            context,
            state: BufferState::Live(handle),
            index_type,
            element_count,
            error_check,
        })
    }

    fn allocate(
        context: &dyn GlContext,
        handle: BufferHandle,
        size: i32,
        error_check: GlErrorCheck,
    ) -> Result<(), IndexBufferError> {
        let _guard = BindingGuard::bind(context, TARGET, handle);
        check_gl_errors(context, error_check, "glBindBuffer")?;
        context.buffer_data_size(TARGET, size, BufferUsage::DynamicDraw);
        check_gl_errors(context, error_check, "glBufferData")?;
        Ok(())
    }

    fn live_handle(&self) -> Result<BufferHandle, IndexBufferError> {
        match self.state {
            BufferState::Live(handle) => Ok(handle),
            BufferState::Destroyed => Err(IndexBufferError::Destroyed),
        }
    }

    /// Index element type.
    pub fn index_type(&self) -> IndexType {
        self.index_type
    }

    /// Capacity in indices.
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Capacity in bytes.
    pub fn size_in_bytes(&self) -> usize {
        self.element_count * self.index_type.size_in_bytes()
    }

    /// Whether [`destroy`](Self::destroy) has been called.
    pub fn is_destroyed(&self) -> bool {
        self.state == BufferState::Destroyed
    }

    /// The GL buffer name, while the buffer is live.
    pub fn handle(&self) -> Option<BufferHandle> {
        self.live_handle().ok()
    }

    /// Error checking mode used after driver calls.
    pub fn error_check(&self) -> GlErrorCheck {
        self.error_check
    }

    /// Make this the active element-array buffer for subsequent draws.
    pub fn bind(&self) -> Result<(), IndexBufferError> {
        let handle = self.live_handle()?;
        tracing::trace!("binding index buffer {}", handle);
        self.context.bind_buffer(TARGET, Some(handle));
        check_gl_errors(&*self.context, self.error_check, "glBindBuffer")?;
        Ok(())
    }

    /// Bind the null element-array buffer.
    ///
    /// Allowed in any state; only driver errors are reported.
    pub fn unbind(&self) -> Result<(), IndexBufferError> {
        tracing::trace!("unbinding index buffer");
        self.context.bind_buffer(TARGET, None);
        check_gl_errors(&*self.context, self.error_check, "glBindBuffer")?;
        Ok(())
    }

    /// Upload `data` starting at `byte_offset`.
    ///
    /// The buffer does not need to be bound; the previous binding is
    /// restored afterwards. Writes past the end of the buffer are rejected
    /// by the driver (`GL_INVALID_VALUE`), which surfaces as
    /// [`IndexBufferError::Driver`] under strict error checking.
    pub fn write(&self, data: &[u8], byte_offset: usize) -> Result<(), IndexBufferError> {
        profile_function!();

        let handle = self.live_handle()?;
        let offset = i32::try_from(byte_offset).map_err(|_| IndexBufferError::OffsetOverflow {
            offset: byte_offset,
        })?;

        tracing::trace!(
            "writing {} bytes to index buffer {} at offset {}",
            data.len(),
            handle,
            byte_offset
        );

        let context = &*self.context;
        let _guard = BindingGuard::bind(context, TARGET, handle);
        context.buffer_sub_data(TARGET, offset, data);
        check_gl_errors(context, self.error_check, "glBufferSubData")?;
        Ok(())
    }

    /// Upload typed indices starting at `byte_offset`.
    ///
    /// The element size of `T` must match [`index_type`](Self::index_type).
    pub fn write_indices<T: bytemuck::Pod>(
        &self,
        indices: &[T],
        byte_offset: usize,
    ) -> Result<(), IndexBufferError> {
        self.live_handle()?;

        let element_size = std::mem::size_of::<T>();
        if element_size != self.index_type.size_in_bytes() {
            return Err(IndexBufferError::IndexTypeMismatch {
                expected: self.index_type,
                element_size,
            });
        }

        self.write(bytemuck::cast_slice(indices), byte_offset)
    }

    /// Release the GL buffer.
    ///
    /// Calling this again returns [`IndexBufferError::Destroyed`] without
    /// touching the driver.
    pub fn destroy(&mut self) -> Result<(), IndexBufferError> {
        let handle = self.live_handle()?;
        self.state = BufferState::Destroyed;

        tracing::debug!("destroying index buffer {}", handle);
        self.context.delete_buffer(handle);
        check_gl_errors(&*self.context, self.error_check, "glDeleteBuffers")?;
        Ok(())
    }
}

impl Drop for IndexBuffer {
    fn drop(&mut self) {
        if let BufferState::Live(handle) = self.state {
            tracing::debug!("index buffer {} dropped without destroy, deleting", handle);
            self.context.delete_buffer(handle);
        }
    }
}

impl std::fmt::Debug for IndexBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexBuffer")
            .field("state", &self.state)
            .field("index_type", &self.index_type)
            .field("element_count", &self.element_count)
            .field("error_check", &self.error_check)
            .finish()
    }
}
