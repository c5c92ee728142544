//! In-memory raster storage.
//!
//! A [`PixelBuffer`] is a flat, row-major store of [`PackedPixel`] values:
//!
//! ```text
//! data[y * width + x]
//! ```
//!
//! Each pixel packs four 8-bit lanes (`0xAARRGGBB`). Kernels treat the lanes
//! independently; there is no color-space conversion.

mod packed;
mod pixel_buffer;

pub use packed::PackedPixel;
pub use pixel_buffer::PixelBuffer;
