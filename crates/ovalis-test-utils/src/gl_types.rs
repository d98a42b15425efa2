//! OpenGL handle and enum types shared by real and mock contexts.

use std::fmt;
use std::num::NonZeroU32;

/// Raw OpenGL enum values used by the buffer-object API.
pub mod gl {
    pub const NO_ERROR: u32 = 0;
    pub const INVALID_ENUM: u32 = 0x0500;
    pub const INVALID_VALUE: u32 = 0x0501;
    pub const INVALID_OPERATION: u32 = 0x0502;
    pub const STACK_OVERFLOW: u32 = 0x0503;
    pub const STACK_UNDERFLOW: u32 = 0x0504;
    pub const OUT_OF_MEMORY: u32 = 0x0505;
    pub const INVALID_FRAMEBUFFER_OPERATION: u32 = 0x0506;

    pub const UNSIGNED_BYTE: u32 = 0x1401;
    pub const UNSIGNED_SHORT: u32 = 0x1403;
    pub const UNSIGNED_INT: u32 = 0x1405;

    pub const ARRAY_BUFFER: u32 = 0x8892;
    pub const ELEMENT_ARRAY_BUFFER: u32 = 0x8893;
    pub const ARRAY_BUFFER_BINDING: u32 = 0x8894;
    pub const ELEMENT_ARRAY_BUFFER_BINDING: u32 = 0x8895;

    pub const STREAM_DRAW: u32 = 0x88E0;
    pub const STATIC_DRAW: u32 = 0x88E4;
    pub const DYNAMIC_DRAW: u32 = 0x88E8;
}

/// Symbolic name of a `glGetError` code.
pub fn gl_error_name(code: u32) -> &'static str {
    match code {
        gl::NO_ERROR => "GL_NO_ERROR",
        gl::INVALID_ENUM => "GL_INVALID_ENUM",
        gl::INVALID_VALUE => "GL_INVALID_VALUE",
        gl::INVALID_OPERATION => "GL_INVALID_OPERATION",
        gl::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
        gl::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
        gl::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        gl::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        _ => "unknown GL error",
    }
}

/// A generated buffer object name.
///
/// Name `0` is the null buffer in GL and is represented as `None` wherever a
/// binding may be empty, so a `BufferHandle` always names a real buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferHandle(NonZeroU32);

impl BufferHandle {
    /// Wrap a raw GL buffer name. Returns `None` for the null name.
    pub fn new(name: u32) -> Option<Self> {
        NonZeroU32::new(name).map(Self)
    }

    /// The raw GL buffer name.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The raw GL buffer name as a `NonZeroU32`.
    pub fn as_non_zero(self) -> NonZeroU32 {
        self.0
    }
}

impl From<NonZeroU32> for BufferHandle {
    fn from(name: NonZeroU32) -> Self {
        Self(name)
    }
}

impl fmt::Display for BufferHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Buffer binding points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    /// `GL_ARRAY_BUFFER`, vertex attributes
    Array,
    /// `GL_ELEMENT_ARRAY_BUFFER`, indices for indexed draws
    ElementArray,
}

impl BufferTarget {
    /// The GL enum naming this target.
    pub fn gl_enum(self) -> u32 {
        match self {
            BufferTarget::Array => gl::ARRAY_BUFFER,
            BufferTarget::ElementArray => gl::ELEMENT_ARRAY_BUFFER,
        }
    }

    /// The GL enum for querying what is bound to this target.
    pub fn binding_enum(self) -> u32 {
        match self {
            BufferTarget::Array => gl::ARRAY_BUFFER_BINDING,
            BufferTarget::ElementArray => gl::ELEMENT_ARRAY_BUFFER_BINDING,
        }
    }
}

/// Storage usage hints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferUsage {
    StreamDraw,
    StaticDraw,
    DynamicDraw,
}

impl BufferUsage {
    /// The GL enum for this usage hint.
    pub fn gl_enum(self) -> u32 {
        match self {
            BufferUsage::StreamDraw => gl::STREAM_DRAW,
            BufferUsage::StaticDraw => gl::STATIC_DRAW,
            BufferUsage::DynamicDraw => gl::DYNAMIC_DRAW,
        }
    }
}
