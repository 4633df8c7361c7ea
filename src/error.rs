use thiserror::Error;

/// Validation failures raised by the offset calculator.
///
/// Every variant is detected before any computation runs, and every message
/// names the offending field and its allowed domain so a host can show it
/// to the user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OffsetError {
    #[error("offset distance must be a finite number greater than 0, got {}", shown(.value))]
    InvalidOffsetDistance { value: f64 },

    #[error("angle must be a finite number of degrees, got {}", shown(.value))]
    InvalidAngle { value: f64 },

    #[error("angle {value}° is not supported; supported angles are {}", join_angles(.supported))]
    UnsupportedAngle { value: f64, supported: Vec<f64> },

    #[error("pipe diameter must be a finite number greater than or equal to 0, got {}", shown(.value))]
    InvalidPipeDiameter { value: f64 },
}

/// Payload-free discriminant of [`OffsetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidOffsetDistance,
    InvalidAngle,
    UnsupportedAngle,
    InvalidPipeDiameter,
}

impl OffsetError {
    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidOffsetDistance { .. } => ErrorKind::InvalidOffsetDistance,
            Self::InvalidAngle { .. } => ErrorKind::InvalidAngle,
            Self::UnsupportedAngle { .. } => ErrorKind::UnsupportedAngle,
            Self::InvalidPipeDiameter { .. } => ErrorKind::InvalidPipeDiameter,
        }
    }
}

/// Renders an offending value. NaN is what a missing or non-numeric
/// JSON field turns into.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn shown(value: &f64) -> String {
    if value.is_nan() {
        "NaN (missing or not a number)".to_owned()
    } else {
        value.to_string()
    }
}

fn join_angles(angles: &[f64]) -> String {
    angles
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience type alias for results using [`OffsetError`].
pub type Result<T> = std::result::Result<T, OffsetError>;
