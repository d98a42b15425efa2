//! Error types for GL resources.

use std::fmt;

use ovalis_test_utils::gl_error_name;

use crate::IndexType;

/// Errors reported by the driver after a GL call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlError {
    /// The GL call after which the errors were observed.
    pub operation: &'static str,
    /// Every latched error code, oldest first.
    pub codes: Vec<u32>,
}

impl GlError {
    /// Whether `code` is among the latched errors.
    pub fn contains(&self, code: u32) -> bool {
        self.codes.contains(&code)
    }
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GL error after {}:", self.operation)?;
        for code in &self.codes {
            write!(f, " {} (0x{:04X})", gl_error_name(*code), code)?;
        }
        Ok(())
    }
}

impl std::error::Error for GlError {}

/// Errors that can occur during index buffer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexBufferError {
    /// The buffer was used after `destroy`.
    Destroyed,

    /// The GL index type enum is not one of `UNSIGNED_SHORT`/`UNSIGNED_INT`.
    UnsupportedIndexType(u32),

    /// The requested capacity does not fit in a GL buffer size.
    CapacityOverflow {
        /// Requested number of indices.
        element_count: usize,
        /// Requested index type.
        index_type: IndexType,
    },

    /// The byte offset of a write does not fit in a GL offset.
    OffsetOverflow {
        /// Requested byte offset.
        offset: usize,
    },

    /// Typed indices do not match the buffer's index type.
    IndexTypeMismatch {
        /// The buffer's index type.
        expected: IndexType,
        /// Size in bytes of the provided index elements.
        element_size: usize,
    },

    /// The driver could not generate a buffer name.
    CreateFailed(String),

    /// The driver reported an error (strict error checking only).
    Driver(GlError),
}

impl fmt::Display for IndexBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Destroyed => write!(f, "Index buffer is destroyed"),
            Self::UnsupportedIndexType(ty) => {
                write!(f, "Unsupported index type 0x{:04X}", ty)
            }
            Self::CapacityOverflow {
                element_count,
                index_type,
            } => write!(
                f,
                "Index buffer of {} {:?} indices exceeds the maximum buffer size",
                element_count, index_type
            ),
            Self::OffsetOverflow { offset } => {
                write!(f, "Write offset {} exceeds the maximum buffer size", offset)
            }
            Self::IndexTypeMismatch {
                expected,
                element_size,
            } => write!(
                f,
                "Expected {}-byte {:?} indices, got {}-byte elements",
                expected.size_in_bytes(),
                expected,
                element_size
            ),
            Self::CreateFailed(msg) => write!(f, "Failed to create index buffer: {}", msg),
            Self::Driver(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for IndexBufferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Driver(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GlError> for IndexBufferError {
    fn from(err: GlError) -> Self {
        Self::Driver(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovalis_test_utils::gl;

    #[test]
    fn test_gl_error_display_names_every_code() {
        let err = GlError {
            operation: "glBufferSubData",
            codes: vec![gl::INVALID_VALUE, gl::OUT_OF_MEMORY],
        };
        assert_eq!(
            err.to_string(),
            "GL error after glBufferSubData: GL_INVALID_VALUE (0x0501) GL_OUT_OF_MEMORY (0x0505)"
        );
        assert!(err.contains(gl::OUT_OF_MEMORY));
    }

    #[test]
    fn test_driver_error_source() {
        use std::error::Error;

        let err = IndexBufferError::from(GlError {
            operation: "glBindBuffer",
            codes: vec![gl::INVALID_OPERATION],
        });
        assert!(err.source().is_some());
        assert!(IndexBufferError::Destroyed.source().is_none());
    }
}
