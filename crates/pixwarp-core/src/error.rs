//! Error types for raster operations.

use thiserror::Error;

/// Errors raised by buffer access and geometric transforms.
///
/// A failing call never hands back a partially written buffer, and the
/// source raster is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RasterError {
    /// Pixel coordinate outside the buffer extent.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Requested width or height is not positive.
    #[error("invalid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimensions { width: i64, height: i64 },

    /// Rotation angle is NaN or infinite.
    #[error("invalid rotation angle: {0}")]
    InvalidAngle(f64),

    /// Pixel vector length does not match `width * height`.
    #[error("pixel count mismatch: expected {expected}, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },
}

impl RasterError {
    pub(crate) fn invalid_dimensions(width: impl Into<i64>, height: impl Into<i64>) -> Self {
        RasterError::InvalidDimensions {
            width: width.into(),
            height: height.into(),
        }
    }
}

/// Result type for raster operations
pub type RasterResult<T> = Result<T, RasterError>;
