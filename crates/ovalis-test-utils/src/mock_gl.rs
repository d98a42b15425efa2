//! Mock implementation of GlContext for testing.
//!
//! This module provides a mock GL context that records operations and
//! simulates buffer-object state (names, bindings, storage and the error
//! queue) without a real driver.

use crate::{
    gl_context::GlContext,
    gl_types::{BufferHandle, BufferTarget, BufferUsage, gl},
};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};

/// Records a GL call for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlCall {
    CreateBuffer {
        buffer: Option<BufferHandle>,
    },
    DeleteBuffer {
        buffer: BufferHandle,
    },
    BindBuffer {
        target: BufferTarget,
        buffer: Option<BufferHandle>,
    },
    QueryBinding {
        target: BufferTarget,
    },
    BufferData {
        target: BufferTarget,
        size: i32,
        usage: BufferUsage,
    },
    BufferSubData {
        target: BufferTarget,
        offset: i32,
        len: usize,
    },
    GetError,
}

/// Mock buffer object stored in the context.
#[derive(Debug, Clone, Default)]
struct MockBuffer {
    storage: Vec<u8>,
    usage: Option<BufferUsage>,
}

/// Simulated driver state.
#[derive(Debug)]
struct MockGlState {
    next_name: u32,
    buffers: HashMap<BufferHandle, MockBuffer>,
    bindings: HashMap<BufferTarget, BufferHandle>,
    errors: VecDeque<u32>,
    fail_buffer_creation: bool,
}

impl MockGlState {
    fn bound(&self, target: BufferTarget) -> Option<BufferHandle> {
        self.bindings.get(&target).copied()
    }

    fn bound_buffer_mut(&mut self, target: BufferTarget) -> Option<&mut MockBuffer> {
        let handle = self.bound(target)?;
        self.buffers.get_mut(&handle)
    }
}

/// Mock implementation of GlContext for testing.
///
/// # Borrow Checking Pattern: Interior Mutability
///
/// Trait methods take `&self` (like a real GL context, whose state lives in
/// the driver) but need to mutate the simulated state. Both the state and
/// the call log sit behind `parking_lot::Mutex`.
///
/// # Simulated errors
///
/// The mock latches the errors a conforming driver would raise:
/// - binding a name that was never generated or was deleted:
///   `GL_INVALID_OPERATION`
/// - allocating or uploading with nothing bound: `GL_INVALID_OPERATION`
/// - negative sizes/offsets, or uploads past the end of the storage:
///   `GL_INVALID_VALUE`
///
/// # Example
///
/// ```rust
/// use ovalis_test_utils::{BufferTarget, BufferUsage, GlContext, MockGlContext, gl};
///
/// let mock = MockGlContext::new();
/// let buffer = mock.create_buffer().unwrap();
/// mock.bind_buffer(BufferTarget::ElementArray, Some(buffer));
/// mock.buffer_data_size(BufferTarget::ElementArray, 8, BufferUsage::DynamicDraw);
/// mock.buffer_sub_data(BufferTarget::ElementArray, 4, &[0u8; 8]);
///
/// assert_eq!(mock.get_error(), gl::INVALID_VALUE);
/// assert_eq!(mock.get_error(), gl::NO_ERROR);
/// ```
pub struct MockGlContext {
    /// Recorded calls for verification
    calls: Mutex<Vec<GlCall>>,

    /// Simulated driver state
    state: Mutex<MockGlState>,
}

impl MockGlContext {
    /// Create a new mock GL context with nothing bound.
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            state: Mutex::new(MockGlState {
                next_name: 1,
                buffers: HashMap::new(),
                bindings: HashMap::new(),
                errors: VecDeque::new(),
                fail_buffer_creation: false,
            }),
        }
    }

    fn record(&self, call: GlCall) {
        self.calls.lock().push(call);
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.lock().clone()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Get total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Count `bind_buffer` calls, including binds of the null buffer.
    pub fn count_binds(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, GlCall::BindBuffer { .. }))
            .count()
    }

    /// Count buffer upload operations.
    pub fn count_sub_data(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, GlCall::BufferSubData { .. }))
            .count()
    }

    /// Count `get_error` queries.
    pub fn count_error_queries(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, GlCall::GetError))
            .count()
    }

    /// Count buffer deletions.
    pub fn count_deletes(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, GlCall::DeleteBuffer { .. }))
            .count()
    }

    /// Inspect the buffer bound to `target` without recording a call.
    pub fn binding(&self, target: BufferTarget) -> Option<BufferHandle> {
        self.state.lock().bound(target)
    }

    /// Bind `buffer` to `target` without recording a call or validating it,
    /// standing in for state left behind by other code.
    pub fn set_binding(&self, target: BufferTarget, buffer: Option<BufferHandle>) {
        let mut state = self.state.lock();
        match buffer {
            Some(handle) => {
                state.bindings.insert(target, handle);
            }
            None => {
                state.bindings.remove(&target);
            }
        }
    }

    /// Contents of a live buffer's storage.
    pub fn buffer_contents(&self, buffer: BufferHandle) -> Option<Vec<u8>> {
        self.state
            .lock()
            .buffers
            .get(&buffer)
            .map(|b| b.storage.clone())
    }

    /// Usage hint given when the buffer's storage was allocated.
    pub fn buffer_usage(&self, buffer: BufferHandle) -> Option<BufferUsage> {
        self.state.lock().buffers.get(&buffer).and_then(|b| b.usage)
    }

    /// Whether `buffer` has been generated and not deleted.
    pub fn is_live(&self, buffer: BufferHandle) -> bool {
        self.state.lock().buffers.contains_key(&buffer)
    }

    /// Number of generated, not yet deleted buffers.
    pub fn live_buffer_count(&self) -> usize {
        self.state.lock().buffers.len()
    }

    /// Latch an error as if the driver had raised it.
    pub fn inject_error(&self, code: u32) {
        self.state.lock().errors.push_back(code);
    }

    /// Errors latched and not yet queried.
    pub fn pending_errors(&self) -> Vec<u32> {
        self.state.lock().errors.iter().copied().collect()
    }

    /// Make subsequent `create_buffer` calls fail.
    pub fn fail_buffer_creation(&self, fail: bool) {
        self.state.lock().fail_buffer_creation = fail;
    }
}

impl Default for MockGlContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GlContext for MockGlContext {
    fn create_buffer(&self) -> Result<BufferHandle, String> {
        let result = {
            let mut state = self.state.lock();
            if state.fail_buffer_creation {
                Err("mock buffer creation disabled".to_string())
            } else {
                let name = state.next_name;
                state.next_name += 1;
                // next_name starts at 1 and only grows
                let handle = BufferHandle::new(name).ok_or_else(|| "buffer names exhausted".to_string())?;
                state.buffers.insert(handle, MockBuffer::default());
                Ok(handle)
            }
        };

        self.record(GlCall::CreateBuffer {
            buffer: result.as_ref().ok().copied(),
        });
        result
    }

    fn delete_buffer(&self, buffer: BufferHandle) {
        {
            let mut state = self.state.lock();
            if state.buffers.remove(&buffer).is_some() {
                state.bindings.retain(|_, bound| *bound != buffer);
            }
        }
        self.record(GlCall::DeleteBuffer { buffer });
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<BufferHandle>) {
        {
            let mut state = self.state.lock();
            match buffer {
                Some(handle) if !state.buffers.contains_key(&handle) => {
                    state.errors.push_back(gl::INVALID_OPERATION);
                }
                Some(handle) => {
                    state.bindings.insert(target, handle);
                }
                None => {
                    state.bindings.remove(&target);
                }
            }
        }
        self.record(GlCall::BindBuffer { target, buffer });
    }

    fn buffer_binding(&self, target: BufferTarget) -> Option<BufferHandle> {
        self.record(GlCall::QueryBinding { target });
        self.state.lock().bound(target)
    }

    fn buffer_data_size(&self, target: BufferTarget, size: i32, usage: BufferUsage) {
        {
            let mut state = self.state.lock();
            if size < 0 {
                state.errors.push_back(gl::INVALID_VALUE);
            } else if let Some(buffer) = state.bound_buffer_mut(target) {
                buffer.storage = vec![0; size as usize];
                buffer.usage = Some(usage);
            } else {
                state.errors.push_back(gl::INVALID_OPERATION);
            }
        }
        self.record(GlCall::BufferData {
            target,
            size,
            usage,
        });
    }

    fn buffer_sub_data(&self, target: BufferTarget, offset: i32, data: &[u8]) {
        {
            let mut state = self.state.lock();
            let error = match state.bound_buffer_mut(target) {
                None => Some(gl::INVALID_OPERATION),
                Some(_) if offset < 0 => Some(gl::INVALID_VALUE),
                Some(buffer) => {
                    let start = offset as usize;
                    let end = start + data.len();
                    if end > buffer.storage.len() {
                        Some(gl::INVALID_VALUE)
                    } else {
                        buffer.storage[start..end].copy_from_slice(data);
                        None
                    }
                }
            };
            if let Some(code) = error {
                state.errors.push_back(code);
            }
        }
        self.record(GlCall::BufferSubData {
            target,
            offset,
            len: data.len(),
        });
    }

    fn get_error(&self) -> u32 {
        self.record(GlCall::GetError);
        self.state.lock().errors.pop_front().unwrap_or(gl::NO_ERROR)
    }
}
