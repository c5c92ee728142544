//! Rectangular region of interest.
//!
//! A [`Roi`] scopes resize and crop to a sub-area of a buffer. Requested
//! rectangles may hang off the buffer or have negative origins; they are
//! intersected with `[0, width) x [0, height)` before use.
//!
//! # Degenerate regions
//!
//! When the intersection is empty (zero or negative size, or entirely
//! outside the buffer) the region falls back to the full buffer, the same
//! as having no ROI at all. This is logged, never reported as an error.

use tracing::debug;

use crate::buffer::PixelBuffer;

/// An axis-aligned integer rectangle inside a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Roi {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl Roi {
    /// Region covering an entire `width x height` buffer.
    ///
    /// A zero dimension is raised to 1; a region is never empty.
    pub const fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width: if width == 0 { 1 } else { width },
            height: if height == 0 { 1 } else { height },
        }
    }

    /// Intersect a requested rectangle with `[0, buffer_width) x [0, buffer_height)`.
    ///
    /// Empty intersections degenerate to [`Roi::full`].
    ///
    /// # Example
    ///
    /// ```
    /// use pixwarp_core::Roi;
    ///
    /// let roi = Roi::clamped(-2, 1, 5, 100, 4, 4);
    /// assert_eq!((roi.x(), roi.y(), roi.width(), roi.height()), (0, 1, 3, 3));
    /// ```
    pub fn clamped(
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        buffer_width: u32,
        buffer_height: u32,
    ) -> Self {
        let left = x.max(0);
        let top = y.max(0);
        let right = x.saturating_add(width).min(buffer_width as i64);
        let bottom = y.saturating_add(height).min(buffer_height as i64);

        if right <= left || bottom <= top {
            debug!(
                x,
                y,
                width,
                height,
                buffer_width,
                buffer_height,
                "degenerate region, using full buffer"
            );
            return Self::full(buffer_width, buffer_height);
        }

        // All four values now lie in [0, buffer dimension]
        Self {
            x: left as u32,
            y: top as u32,
            width: (right - left) as u32,
            height: (bottom - top) as u32,
        }
    }

    /// Re-clamp this region against a (possibly different) buffer size.
    pub fn clamp_to(&self, buffer_width: u32, buffer_height: u32) -> Self {
        Self::clamped(
            self.x as i64,
            self.y as i64,
            self.width as i64,
            self.height as i64,
            buffer_width,
            buffer_height,
        )
    }

    #[inline]
    pub fn x(&self) -> u32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> u32 {
        self.y
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Exclusive right edge.
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// True when the region spans the whole `width x height` buffer.
    pub fn is_full(&self, width: u32, height: u32) -> bool {
        *self == Self::full(width, height)
    }

    /// Copy the pixels inside the region into a new buffer, no resampling.
    ///
    /// The region is clamped to `buffer` first, so the output is at most the
    /// size of the source.
    pub fn crop(&self, buffer: &PixelBuffer) -> PixelBuffer {
        let roi = self.clamp_to(buffer.width(), buffer.height());
        let src = buffer.as_slice();
        let stride = buffer.width() as usize;

        let mut output = Vec::with_capacity(roi.width as usize * roi.height as usize);
        for y in roi.y..roi.bottom() {
            let start = y as usize * stride + roi.x as usize;
            output.extend_from_slice(&src[start..start + roi.width as usize]);
        }

        PixelBuffer::from_parts(roi.width, roi.height, output)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
