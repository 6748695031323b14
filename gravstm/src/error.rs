//! Error types for gravity evaluation and gradient assembly.

use thiserror::Error;

/// Errors raised by gravity fields, the gradient builder and the
/// configuration/export helpers.
#[derive(Debug, Error)]
pub enum GravityError {
    /// Degree 0 cannot be evaluated.
    #[error("Invalid gravity degree: {0}")]
    InvalidDegree(u32),

    /// The field does not carry coefficients up to the requested degree.
    #[error("Gravity degree {degree} exceeds supported maximum {max}")]
    DegreeOutOfRange { degree: u32, max: u32 },

    /// Position at the origin or inside the reference body.
    #[error("Non-physical position at radius {radius}")]
    NonPhysicalPosition { radius: f64 },

    /// NaN or infinite position or acceleration.
    #[error("Non-finite state or acceleration")]
    NonFinite,

    /// Differencing step is zero or not finite.
    #[error("Invalid differencing step: {0}")]
    InvalidStep(f64),

    /// Input slice too short to hold the state block.
    #[error("State block needs {required} values, got {len}")]
    StateTooShort { required: usize, len: usize },

    /// Output buffer too short for the requested layout.
    #[error("Output buffer needs {required} values, got {len}")]
    BufferTooSmall { required: usize, len: usize },

    /// Two rows of the layout write to the same buffer index.
    #[error("Rows {first} and {second} both write buffer index {index}")]
    OverlappingLayout {
        first: usize,
        second: usize,
        index: usize,
    },

    /// Configuration value outside its valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Result type for gravity operations.
pub type GravityResult<T> = std::result::Result<T, GravityError>;
