//! Ovalis Render - GL buffer resources
//!
//! This crate provides:
//! - [`IndexBuffer`], an element-array buffer with an explicit
//!   create/bind/write/destroy lifecycle
//! - [`BindingGuard`], which restores a target's previous binding on drop
//! - Driver error checking controlled by [`GlErrorCheck`]
//! - `GlowContext`, a [`GlContext`] over a real OpenGL context (requires the
//!   `glow` feature)
//!
//! Everything talks to the driver through the [`GlContext`] trait, so the
//! same code runs against `MockGlContext` in tests.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use ovalis_render::*;
//!
//! let context: Arc<dyn GlContext> = Arc::new(unsafe { GlowContext::new(gl) });
//!
//! let mut indices = IndexBuffer::create(context, 6, IndexType::U16)?;
//! indices.write_indices(&[0u16, 1, 2, 2, 3, 0], 0)?;
//! indices.bind()?;
//! ```

mod binding;
mod error;
mod error_check;
#[cfg(feature = "glow")]
mod glow_context;
mod index_buffer;

pub use binding::*;
pub use error::*;
pub use error_check::*;
#[cfg(feature = "glow")]
pub use glow_context::*;
pub use index_buffer::*;

pub use ovalis_core::config::{Config, GlErrorCheck};
pub use ovalis_test_utils::{BufferHandle, BufferTarget, BufferUsage, GlContext};
