//! Interpolation kernels: nearest, bilinear and bicubic sampling.
//!
//! Every kernel answers one question: given a fractional coordinate in
//! source pixel space, what packed value should the destination receive?
//! Integer coordinates address pixel centers, so `(2.0, 3.0)` is exactly
//! the stored pixel at column 2, row 3.
//!
//! # Edge policy
//!
//! Coordinates outside the sampling region are clamped to the nearest valid
//! pixel (replicate-edge). Nothing wraps and nothing is zero-filled; the
//! rotation background is decided by the caller before a kernel runs.
//!
//! # Channels
//!
//! The four 8-bit lanes of a [`PackedPixel`] are interpolated independently
//! and each result is rounded and clamped into `0..=255`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::buffer::{PackedPixel, PixelBuffer};
use crate::roi::Roi;

/// Catmull-Rom coefficient for the cubic convolution kernel.
const CUBIC_A: f64 = -0.5;

/// Interpolation kernel used by resize and rotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMode {
    /// Nearest neighbor. Output values are always copies of source values.
    Nearest,
    /// Linear interpolation over the 2x2 neighborhood.
    #[default]
    Bilinear,
    /// Cubic convolution (Catmull-Rom, a = -0.5) over the 4x4 neighborhood.
    Bicubic,
}

impl InterpolationMode {
    /// All modes, in numeric order.
    pub const ALL: [InterpolationMode; 3] = [
        InterpolationMode::Nearest,
        InterpolationMode::Bilinear,
        InterpolationMode::Bicubic,
    ];

    /// Map a numeric code to a mode.
    ///
    /// Values:
    /// - 0 = Nearest
    /// - 1 = Bilinear
    /// - 2 = Bicubic
    ///
    /// Any other value falls back to Bilinear.
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => InterpolationMode::Nearest,
            2 => InterpolationMode::Bicubic,
            _ => InterpolationMode::Bilinear,
        }
    }

    /// Numeric code, inverse of [`InterpolationMode::from_u8`].
    pub fn as_u8(self) -> u8 {
        match self {
            InterpolationMode::Nearest => 0,
            InterpolationMode::Bilinear => 1,
            InterpolationMode::Bicubic => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            InterpolationMode::Nearest => "nearest",
            InterpolationMode::Bilinear => "bilinear",
            InterpolationMode::Bicubic => "bicubic",
        }
    }

    /// Sample `buffer` at `(fx, fy)`, clamping to the buffer edges.
    #[inline]
    pub fn sample(self, buffer: &PixelBuffer, fx: f64, fy: f64) -> PackedPixel {
        let region = Roi::full(buffer.width(), buffer.height());
        self.sample_within(buffer, &region, fx, fy)
    }

    /// Sample `buffer` at `(fx, fy)`, treating `region` as the source extent.
    ///
    /// Neighbors that fall outside `region` are replaced by the nearest pixel
    /// inside it, so no value outside the region is ever read. `region` is
    /// clamped to `buffer` first; one that misses it samples the whole buffer.
    #[inline]
    pub fn sample_within(self, buffer: &PixelBuffer, region: &Roi, fx: f64, fy: f64) -> PackedPixel {
        let window = Window::new(buffer, region);
        match self {
            InterpolationMode::Nearest => sample_nearest(&window, fx, fy),
            InterpolationMode::Bilinear => sample_bilinear(&window, fx, fy),
            InterpolationMode::Bicubic => sample_bicubic(&window, fx, fy),
        }
    }
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown interpolation name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown interpolation method: {0}")]
pub struct ParseInterpolationError(pub String);

impl FromStr for InterpolationMode {
    type Err = ParseInterpolationError;

    /// Accepts `none`/`nearest`, `bilinear`, `bicubic`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "nearest" => Ok(InterpolationMode::Nearest),
            "bilinear" => Ok(InterpolationMode::Bilinear),
            "bicubic" => Ok(InterpolationMode::Bicubic),
            _ => Err(ParseInterpolationError(s.to_string())),
        }
    }
}

/// A buffer plus the inclusive index range kernels may read.
struct Window<'a> {
    buffer: &'a PixelBuffer,
    x_min: i64,
    x_max: i64,
    y_min: i64,
    y_max: i64,
}

impl<'a> Window<'a> {
    fn new(buffer: &'a PixelBuffer, region: &Roi) -> Self {
        let region = region.clamp_to(buffer.width(), buffer.height());
        Self {
            buffer,
            x_min: region.x() as i64,
            x_max: region.right() as i64 - 1,
            y_min: region.y() as i64,
            y_max: region.bottom() as i64 - 1,
        }
    }

    /// Fetch with replicate-edge clamping.
    #[inline]
    fn get(&self, x: i64, y: i64) -> PackedPixel {
        let cx = x.clamp(self.x_min, self.x_max);
        let cy = y.clamp(self.y_min, self.y_max);
        // Both lie inside a region clamped to the buffer
        self.buffer.at(cx as u32, cy as u32)
    }

    #[inline]
    fn get_f64(&self, x: i64, y: i64) -> [f64; 4] {
        self.get(x, y).channels().map(f64::from)
    }
}

/// Round half up (`floor(x + 0.5)`) and clamp to the byte range.
#[inline]
fn to_channel(v: f64) -> u8 {
    (v + 0.5).floor().clamp(0.0, 255.0) as u8
}

#[inline]
fn pack(values: [f64; 4]) -> PackedPixel {
    PackedPixel::from_channels(values.map(to_channel))
}

/// Nearest neighbor: `floor(f + 0.5)`, ties go to the larger index.
fn sample_nearest(window: &Window, fx: f64, fy: f64) -> PackedPixel {
    let x = (fx + 0.5).floor() as i64;
    let y = (fy + 0.5).floor() as i64;
    window.get(x, y)
}

/// Bilinear interpolation over the 2x2 neighborhood around `(fx, fy)`.
fn sample_bilinear(window: &Window, fx: f64, fy: f64) -> PackedPixel {
    let x0f = fx.floor();
    let y0f = fy.floor();
    let tx = fx - x0f;
    let ty = fy - y0f;
    let x0 = x0f as i64;
    let y0 = y0f as i64;

    let p00 = window.get_f64(x0, y0);
    let p10 = window.get_f64(x0 + 1, y0);
    let p01 = window.get_f64(x0, y0 + 1);
    let p11 = window.get_f64(x0 + 1, y0 + 1);

    let mut result = [0.0f64; 4];
    for i in 0..4 {
        let top = p00[i] * (1.0 - tx) + p10[i] * tx;
        let bottom = p01[i] * (1.0 - tx) + p11[i] * tx;
        result[i] = top * (1.0 - ty) + bottom * ty;
    }

    pack(result)
}

/// Bicubic convolution over the 4x4 neighborhood around `(fx, fy)`.
fn sample_bicubic(window: &Window, fx: f64, fy: f64) -> PackedPixel {
    let x0f = fx.floor();
    let y0f = fy.floor();
    let tx = fx - x0f;
    let ty = fy - y0f;
    let x0 = x0f as i64;
    let y0 = y0f as i64;

    // Taps at offsets -1, 0, 1, 2
    let wx = [
        cubic_weight(tx + 1.0),
        cubic_weight(tx),
        cubic_weight(tx - 1.0),
        cubic_weight(tx - 2.0),
    ];
    let wy = [
        cubic_weight(ty + 1.0),
        cubic_weight(ty),
        cubic_weight(ty - 1.0),
        cubic_weight(ty - 2.0),
    ];

    let mut sum = [0.0f64; 4];
    for (j, wyj) in wy.iter().enumerate() {
        let py = y0 - 1 + j as i64;
        let mut row = [0.0f64; 4];
        for (i, wxi) in wx.iter().enumerate() {
            let p = window.get_f64(x0 - 1 + i as i64, py);
            for c in 0..4 {
                row[c] += p[c] * wxi;
            }
        }
        for c in 0..4 {
            sum[c] += row[c] * wyj;
        }
    }

    pack(sum)
}

/// Cubic convolution kernel weight.
///
/// ```text
/// W(x) = (a+2)|x|^3 - (a+3)|x|^2 + 1        for |x| <= 1
/// W(x) = a|x|^3 - 5a|x|^2 + 8a|x| - 4a      for 1 < |x| < 2
/// W(x) = 0                                  otherwise
/// ```
pub(crate) fn cubic_weight(x: f64) -> f64 {
    let x = x.abs();
    if x <= 1.0 {
        ((CUBIC_A + 2.0) * x - (CUBIC_A + 3.0)) * x * x + 1.0
    } else if x < 2.0 {
        ((CUBIC_A * x - 5.0 * CUBIC_A) * x + 8.0 * CUBIC_A) * x - 4.0 * CUBIC_A
    } else {
        0.0
    }
}
