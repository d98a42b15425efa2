//! Test utilities for Ovalis.
//!
//! This crate provides the GL context abstraction used by the render crate,
//! along with a mock driver for tests.
//!
//! # Overview
//!
//! The main components are:
//!
//! - [`GlContext`] - Trait abstracting the GL buffer-object API
//! - GL handle and enum types ([`BufferHandle`], [`BufferTarget`], ...)
//! - `MockGlContext` - Simulated driver for testing (requires `mock` feature)
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use ovalis_test_utils::{BufferTarget, GlContext, MockGlContext};
//!
//! let mock = MockGlContext::new();
//! let buffer = mock.create_buffer().unwrap();
//! mock.bind_buffer(BufferTarget::ElementArray, Some(buffer));
//!
//! assert_eq!(mock.binding(BufferTarget::ElementArray), Some(buffer));
//! assert_eq!(mock.count_binds(), 1);
//! # }
//! ```
//!
//! # Design
//!
//! `GlContext` methods take `&self`: GL state lives in the driver, not in
//! the Rust value. The mock keeps its simulated state behind a `Mutex` so
//! it can follow the same signatures. Both are object-safe and used as
//! `dyn GlContext`.

pub mod gl_context;
pub mod gl_types;
#[cfg(feature = "mock")]
pub mod mock_gl;

// Re-export main types at crate root
pub use gl_context::*;
pub use gl_types::*;
#[cfg(feature = "mock")]
pub use mock_gl::*;
