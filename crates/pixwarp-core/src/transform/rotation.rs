//! Arbitrary-angle rotation about the raster center.
//!
//! The canvas keeps its size: corners that rotate out of view are lost and
//! destination pixels with no source behind them receive the background
//! value.
//!
//! # Algorithm
//!
//! The rotation uses inverse mapping: for each pixel in the output, we
//! calculate which source coordinate lands there and sample it with the
//! configured kernel. With center `(cx, cy) = (width / 2, height / 2)`:
//!
//! ```text
//! src_x = cx + (dst_x - cx) * cos(θ) + (dst_y - cy) * sin(θ)
//! src_y = cy - (dst_x - cx) * sin(θ) + (dst_y - cy) * cos(θ)
//! ```
//!
//! A source coordinate is outside the raster when its nearest pixel is,
//! i.e. `src_x < -0.5` or `src_x >= width - 0.5` (same for y).

use tracing::debug;

use super::{render, InterpolationMode};
use crate::buffer::{PackedPixel, PixelBuffer};
use crate::error::{RasterError, RasterResult};

/// Reduce an angle in degrees to `[0, 360)`.
///
/// Negative and oversized angles map to their equivalent: `405 -> 45`,
/// `-45 -> 315`, `-360 -> 0`.
pub fn normalize_angle(angle_degrees: f64) -> f64 {
    let angle = angle_degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if angle >= 360.0 {
        0.0
    } else {
        angle
    }
}

/// Exact sine and cosine for quarter turns, trigonometry otherwise.
fn sin_cos(angle: f64) -> (f64, f64) {
    if angle == 90.0 {
        (1.0, 0.0)
    } else if angle == 180.0 {
        (0.0, -1.0)
    } else if angle == 270.0 {
        (-1.0, 0.0)
    } else {
        angle.to_radians().sin_cos()
    }
}

/// Rotate `source` by `angle_degrees` (clockwise) about its center.
///
/// The result has the same dimensions as `source`. An angle equivalent to
/// 0 modulo 360 returns an exact copy.
///
/// # Errors
///
/// `InvalidAngle` when `angle_degrees` is NaN or infinite.
///
/// # Example
///
/// ```ignore
/// use pixwarp_core::{rotate, InterpolationMode, PackedPixel};
///
/// let rotated = rotate(&buffer, 15.0, InterpolationMode::Bilinear, PackedPixel::WHITE)?;
/// assert_eq!(rotated.width(), buffer.width());
/// ```
pub fn rotate(
    source: &PixelBuffer,
    angle_degrees: f64,
    mode: InterpolationMode,
    background: PackedPixel,
) -> RasterResult<PixelBuffer> {
    if !angle_degrees.is_finite() {
        return Err(RasterError::InvalidAngle(angle_degrees));
    }

    let angle = normalize_angle(angle_degrees);
    let (width, height) = (source.width(), source.height());

    // Fast path: no rotation needed
    if angle == 0.0 {
        debug!(angle_degrees, "rotate: identity");
        return Ok(source.copy());
    }
    debug!(angle_degrees, angle, %mode, width, height, "rotate");

    let (sin, cos) = sin_cos(angle);
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;
    let x_limit = width as f64 - 0.5;
    let y_limit = height as f64 - 0.5;

    let pixels = render(width, height, |ox, oy| {
        let dx = ox as f64 - cx;
        let dy = oy as f64 - cy;

        let src_x = cx + dx * cos + dy * sin;
        let src_y = cy - dx * sin + dy * cos;

        if src_x < -0.5 || src_x >= x_limit || src_y < -0.5 || src_y >= y_limit {
            background
        } else {
            mode.sample(source, src_x, src_y)
        }
    });

    Ok(PixelBuffer::from_parts(width, height, pixels))
}
