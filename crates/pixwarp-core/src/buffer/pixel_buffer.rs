//! Row-major packed pixel storage.

use super::PackedPixel;
use crate::error::{RasterError, RasterResult};

/// A flat, row-major buffer of packed pixels.
///
/// The buffer owns its storage; `copy()` (or `clone()`) yields a buffer with
/// independent storage. `data.len() == width * height` holds for every
/// buffer that can be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<PackedPixel>,
}

impl PixelBuffer {
    /// Create a zero-filled buffer.
    pub fn new(width: u32, height: u32) -> RasterResult<Self> {
        Self::filled(width, height, PackedPixel::TRANSPARENT)
    }

    /// Create a buffer with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: PackedPixel) -> RasterResult<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![pixel; len],
        })
    }

    /// Wrap existing pixel data.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` for a zero width or height, `PixelCountMismatch`
    /// when `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<PackedPixel>) -> RasterResult<Self> {
        let expected = checked_len(width, height)?;
        if pixels.len() != expected {
            return Err(RasterError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data: pixels,
        })
    }

    /// Assemble a buffer whose size the caller has already validated.
    pub(crate) fn from_parts(width: u32, height: u32, data: Vec<PackedPixel>) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap raw `0xAARRGGBB` values.
    pub fn from_raw(width: u32, height: u32, raw: Vec<u32>) -> RasterResult<Self> {
        Self::from_pixels(width, height, raw.into_iter().map(PackedPixel).collect())
    }

    /// Build a buffer from an `image::RgbaImage`.
    pub fn from_rgba_image(img: &image::RgbaImage) -> RasterResult<Self> {
        let (width, height) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| PackedPixel::from_argb(p[3], p[0], p[1], p[2]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Convert to an `image::RgbaImage` for further processing.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for p in &self.data {
            bytes.extend_from_slice(&[p.red(), p.green(), p.blue(), p.alpha()]);
        }
        image::RgbaImage::from_raw(self.width, self.height, bytes)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a constructed buffer; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Read the pixel at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> RasterResult<PackedPixel> {
        let idx = self.index_of(x, y)?;
        Ok(self.data[idx])
    }

    /// Write the pixel at `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, pixel: PackedPixel) -> RasterResult<()> {
        let idx = self.index_of(x, y)?;
        self.data[idx] = pixel;
        Ok(())
    }

    /// Unchecked read for kernel inner loops. Callers clamp first.
    #[inline]
    pub(crate) fn at(&self, x: u32, y: u32) -> PackedPixel {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Deep copy with independent storage.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    #[inline]
    pub fn as_slice(&self) -> &[PackedPixel] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [PackedPixel] {
        &mut self.data
    }

    /// One row of pixels.
    pub fn row(&self, y: u32) -> RasterResult<&[PackedPixel]> {
        if y >= self.height {
            return Err(RasterError::OutOfBounds {
                x: 0,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let start = y as usize * self.width as usize;
        Ok(&self.data[start..start + self.width as usize])
    }

    /// Copy out the raw `0xAARRGGBB` values.
    pub fn to_raw(&self) -> Vec<u32> {
        self.data.iter().map(|p| p.0).collect()
    }

    /// Fill a rectangle, clipped to the buffer. Empty intersections are a no-op.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, pixel: PackedPixel) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        if x >= x_end || y >= y_end {
            return;
        }
        let stride = self.width as usize;
        for row in y..y_end {
            let start = row as usize * stride;
            self.data[start + x as usize..start + x_end as usize].fill(pixel);
        }
    }

    fn index_of(&self, x: u32, y: u32) -> RasterResult<usize> {
        if !self.contains(x, y) {
            return Err(RasterError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

fn checked_len(width: u32, height: u32) -> RasterResult<usize> {
    if width == 0 || height == 0 {
        return Err(RasterError::invalid_dimensions(width, height));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| RasterError::invalid_dimensions(width, height))
}
