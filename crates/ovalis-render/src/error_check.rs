//! Driver error checking after GL calls.

use ovalis_core::config::GlErrorCheck;
use ovalis_test_utils::{GlContext, gl};

use crate::GlError;

/// Upper bound on errors drained per check.
///
/// A lost context can report errors forever; stop after this many.
pub const MAX_DRAINED_ERRORS: usize = 8;

/// Drain the driver's error queue after `operation`.
///
/// - [`GlErrorCheck::Off`] skips the query entirely.
/// - [`GlErrorCheck::Log`] logs any errors and returns `Ok`.
/// - [`GlErrorCheck::Strict`] returns them as `Err`.
pub fn check_gl_errors(
    context: &dyn GlContext,
    mode: GlErrorCheck,
    operation: &'static str,
) -> Result<(), GlError> {
    if !mode.is_enabled() {
        return Ok(());
    }

    let mut codes = Vec::new();
    while codes.len() < MAX_DRAINED_ERRORS {
        match context.get_error() {
            gl::NO_ERROR => break,
            code => codes.push(code),
        }
    }

    if codes.is_empty() {
        return Ok(());
    }

    let error = GlError { operation, codes };
    match mode {
        GlErrorCheck::Strict => Err(error),
        GlErrorCheck::Log | GlErrorCheck::Off => {
            tracing::error!("{}", error);
            Ok(())
        }
    }
}
