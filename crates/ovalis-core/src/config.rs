/// Configurations for the Ovalis crates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// How GL errors are checked after state-changing driver calls.
    pub gl_error_check: GlErrorCheck,
}

impl Config {
    /// Configuration that fails fast on every driver error.
    pub fn strict() -> Self {
        Self {
            gl_error_check: GlErrorCheck::Strict,
        }
    }
}

/// Strictness of driver error checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlErrorCheck {
    /// Never query the driver for errors
    Off,
    /// Query the driver and log errors, but carry on
    Log,
    /// Query the driver and turn errors into `Err` results
    Strict,
}

impl GlErrorCheck {
    /// Whether the driver should be queried at all.
    pub fn is_enabled(self) -> bool {
        !matches!(self, GlErrorCheck::Off)
    }
}

impl Default for GlErrorCheck {
    /// `Strict` in debug builds, `Off` in release builds.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            GlErrorCheck::Strict
        } else {
            GlErrorCheck::Off
        }
    }
}
