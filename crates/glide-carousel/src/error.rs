#![forbid(unsafe_code)]

//! Configuration errors.
//!
//! Runtime operations never fail: indices are clamped and operations on a
//! destroyed carousel are no-ops. Only building a configuration from
//! external input can be rejected.

/// Rejected carousel configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The option object is not valid JSON or has the wrong shape.
    #[error("invalid carousel options: {0}")]
    Parse(#[from] serde_json::Error),

    /// A pixel radius is negative or not a finite number.
    #[error("{name} must be a finite, non-negative pixel count (got {value})")]
    InvalidRadius {
        /// Option name as written in the option object.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
}
