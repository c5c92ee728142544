//! Pixwarp Core - Geometric raster transforms
//!
//! This crate provides resize and rotation of packed ARGB rasters with
//! nearest-neighbor, bilinear and bicubic resampling, scoped by a
//! rectangular region of interest.
//!
//! The [`Raster`] type is the usual entry point. The free functions in
//! [`transform`] operate on a bare [`PixelBuffer`] for callers that manage
//! ROI and settings themselves.

pub mod buffer;
pub mod error;
pub mod raster;
pub mod roi;
pub mod transform;

pub use buffer::{PackedPixel, PixelBuffer};
pub use error::{RasterError, RasterResult};
pub use raster::Raster;
pub use roi::Roi;
pub use transform::{
    flip_horizontal, flip_vertical, normalize_angle, resize, rotate, rotate_left, rotate_right,
    InterpolationMode, ParseInterpolationError,
};

/// Per-raster transform configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransformSettings {
    /// Resampling kernel used by resize and rotate
    pub interpolation: InterpolationMode,
    /// Fill value for pixels a rotation leaves uncovered
    pub background: PackedPixel,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            interpolation: InterpolationMode::Bilinear,
            background: PackedPixel::WHITE,
        }
    }
}

impl TransformSettings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
