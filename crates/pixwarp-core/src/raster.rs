//! The caller-facing raster: pixels plus transform configuration.
//!
//! A [`Raster`] owns a [`PixelBuffer`] and carries the settings transforms
//! read at call time: the region of interest, the interpolation mode and
//! the rotation background. None of these are latched; changing the mode
//! between two `resize` calls changes the second result.
//!
//! It also keeps an optional single snapshot of its pixels, the hook an
//! undo layer uses to restore the state before a destructive operation.
//! That layer owns the raster it works on; nothing here is global.

use tracing::debug;

use crate::buffer::{PackedPixel, PixelBuffer};
use crate::error::RasterResult;
use crate::roi::Roi;
use crate::transform::{self, InterpolationMode};
use crate::TransformSettings;

/// An in-memory raster with ROI, interpolation mode and background value.
#[derive(Debug, Clone)]
pub struct Raster {
    pixels: PixelBuffer,
    roi: Roi,
    settings: TransformSettings,
    snapshot: Option<PixelBuffer>,
}

impl Raster {
    /// Wrap a buffer with default settings and a full-buffer ROI.
    pub fn new(pixels: PixelBuffer) -> Self {
        Self::with_settings(pixels, TransformSettings::default())
    }

    pub fn with_settings(pixels: PixelBuffer, settings: TransformSettings) -> Self {
        let roi = Roi::full(pixels.width(), pixels.height());
        Self {
            pixels,
            roi,
            settings,
            snapshot: None,
        }
    }

    /// Build a raster from raw `0xAARRGGBB` values.
    pub fn from_raw(width: u32, height: u32, raw: Vec<u32>) -> RasterResult<Self> {
        Ok(Self::new(PixelBuffer::from_raw(width, height, raw)?))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> RasterResult<PackedPixel> {
        self.pixels.get(x, y)
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: PackedPixel) -> RasterResult<()> {
        self.pixels.set(x, y, pixel)
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    pub fn settings(&self) -> TransformSettings {
        self.settings
    }

    pub fn apply_settings(&mut self, settings: TransformSettings) {
        self.settings = settings;
    }

    pub fn interpolation_method(&self) -> InterpolationMode {
        self.settings.interpolation
    }

    pub fn set_interpolation_method(&mut self, mode: InterpolationMode) {
        self.settings.interpolation = mode;
    }

    pub fn background_value(&self) -> PackedPixel {
        self.settings.background
    }

    /// Value written where a rotation leaves no source pixel.
    pub fn set_background_value(&mut self, pixel: PackedPixel) {
        self.settings.background = pixel;
    }

    // ------------------------------------------------------------------
    // Region of interest
    // ------------------------------------------------------------------

    /// Current region of interest (the full raster when none is set).
    pub fn roi(&self) -> Roi {
        self.roi
    }

    /// Set the region of interest, clamped to the raster.
    ///
    /// A rectangle that does not overlap the raster resets to the full raster.
    pub fn set_roi(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.roi = Roi::clamped(
            x.into(),
            y.into(),
            width.into(),
            height.into(),
            self.width(),
            self.height(),
        );
    }

    pub fn reset_roi(&mut self) {
        self.roi = Roi::full(self.width(), self.height());
    }

    // ------------------------------------------------------------------
    // Pixel access
    // ------------------------------------------------------------------

    /// Live view of the pixels.
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Live mutable view; writes go straight into the raster.
    pub fn pixels_mut(&mut self) -> &mut PixelBuffer {
        &mut self.pixels
    }

    /// Independent copy of the pixels.
    pub fn pixels_copy(&self) -> PixelBuffer {
        self.pixels.copy()
    }

    pub fn into_pixels(self) -> PixelBuffer {
        self.pixels
    }

    // ------------------------------------------------------------------
    // Transforms
    // ------------------------------------------------------------------

    /// New raster holding the pixels inside the ROI, no resampling.
    pub fn crop(&self) -> Raster {
        if self.roi.is_full(self.width(), self.height()) {
            return self.derive(self.pixels.copy());
        }
        self.derive(self.roi.crop(&self.pixels))
    }

    /// New raster with the ROI scaled to `width x height`.
    ///
    /// Uses the interpolation mode set at the time of the call. This raster
    /// is not modified.
    pub fn resize(&self, width: u32, height: u32) -> RasterResult<Raster> {
        let resized = transform::resize(
            &self.pixels,
            &self.roi,
            self.settings.interpolation,
            width,
            height,
        )?;
        Ok(self.derive(resized))
    }

    /// Rotate in place about the center; width and height are unchanged.
    ///
    /// On error the raster is left as it was.
    pub fn rotate(&mut self, angle_degrees: f64) -> RasterResult<()> {
        self.pixels = transform::rotate(
            &self.pixels,
            angle_degrees,
            self.settings.interpolation,
            self.settings.background,
        )?;
        Ok(())
    }

    pub fn flip_horizontal(&mut self) {
        transform::flip_horizontal(&mut self.pixels);
    }

    pub fn flip_vertical(&mut self) {
        transform::flip_vertical(&mut self.pixels);
    }

    /// Quarter turn clockwise. Swaps width and height and resets the ROI.
    pub fn rotate_right(&mut self) {
        self.pixels = transform::rotate_right(&self.pixels);
        self.reset_roi();
    }

    /// Quarter turn counter-clockwise. Swaps width and height and resets the ROI.
    pub fn rotate_left(&mut self) {
        self.pixels = transform::rotate_left(&self.pixels);
        self.reset_roi();
    }

    // ------------------------------------------------------------------
    // Snapshot
    // ------------------------------------------------------------------

    /// Remember the current pixels, replacing any earlier snapshot.
    pub fn snapshot(&mut self) {
        debug!(width = self.width(), height = self.height(), "snapshot");
        self.snapshot = Some(self.pixels.copy());
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Restore the snapshot taken by [`Raster::snapshot`].
    ///
    /// Returns `false` (and changes nothing) when there is no snapshot or
    /// its dimensions no longer match the raster. The snapshot is kept, so
    /// `reset` can be called again.
    pub fn reset(&mut self) -> bool {
        match &self.snapshot {
            Some(saved) if saved.width() == self.width() && saved.height() == self.height() => {
                debug!(width = self.width(), height = self.height(), "reset to snapshot");
                self.pixels.as_mut_slice().copy_from_slice(saved.as_slice());
                true
            }
            _ => false,
        }
    }

    pub fn clear_snapshot(&mut self) {
        self.snapshot = None;
    }

    /// A new raster that inherits this raster's settings.
    fn derive(&self, pixels: PixelBuffer) -> Raster {
        Raster::with_settings(pixels, self.settings)
    }
}

impl From<PixelBuffer> for Raster {
    fn from(pixels: PixelBuffer) -> Self {
        Raster::new(pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RasterError;

    fn gradient(width: u32, height: u32) -> Raster {
        let raw = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| 0xFF00_0000 | (x * 10) << 16 | (y * 10) << 8 | (x + y))
            })
            .collect();
        Raster::from_raw(width, height, raw).unwrap()
    }

    #[test]
    fn test_defaults() {
        let raster = gradient(4, 4);
        assert_eq!(raster.interpolation_method(), InterpolationMode::Bilinear);
        assert_eq!(raster.background_value(), PackedPixel::WHITE);
        assert_eq!(raster.roi(), Roi::full(4, 4));
        assert!(!raster.has_snapshot());
    }

    #[test]
    fn test_set_roi_clamps() {
        let mut raster = gradient(4, 4);
        raster.set_roi(2, 2, 10, 10);
        let roi = raster.roi();
        assert_eq!((roi.x(), roi.y(), roi.width(), roi.height()), (2, 2, 2, 2));

        raster.set_roi(9, 9, 2, 2);
        assert_eq!(raster.roi(), Roi::full(4, 4));

        raster.set_roi(1, 1, 2, 2);
        raster.reset_roi();
        assert_eq!(raster.roi(), Roi::full(4, 4));
    }

    #[test]
    fn test_crop_uses_roi() {
        let mut raster = gradient(4, 4);
        raster.set_roi(1, 1, 2, 2);
        let cropped = raster.crop();
        assert_eq!(cropped.width(), 2);
        assert_eq!(cropped.pixel(0, 0).unwrap(), raster.pixel(1, 1).unwrap());
        assert_eq!(cropped.roi(), Roi::full(2, 2));
    }

    #[test]
    fn test_crop_without_roi_copies_everything() {
        let raster = gradient(3, 2);
        let cropped = raster.crop();
        assert_eq!(cropped.pixels(), raster.pixels());
    }

    #[test]
    fn test_mode_read_at_call_time() {
        let mut raster = gradient(4, 4);
        raster.set_roi(1, 1, 2, 2);

        raster.set_interpolation_method(InterpolationMode::Nearest);
        let nearest = raster.resize(6, 6).unwrap();
        raster.set_interpolation_method(InterpolationMode::Bilinear);
        let bilinear = raster.resize(6, 6).unwrap();

        assert_ne!(nearest.pixels(), bilinear.pixels());
    }

    #[test]
    fn test_resize_inherits_settings() {
        let mut raster = gradient(4, 4);
        raster.set_interpolation_method(InterpolationMode::Bicubic);
        raster.set_background_value(PackedPixel::BLACK);
        raster.set_roi(0, 0, 2, 2);

        let out = raster.resize(8, 8).unwrap();
        assert_eq!(out.interpolation_method(), InterpolationMode::Bicubic);
        assert_eq!(out.background_value(), PackedPixel::BLACK);
        assert_eq!(out.roi(), Roi::full(8, 8));
    }

    #[test]
    fn test_resize_error_leaves_raster() {
        let raster = gradient(4, 4);
        let before = raster.pixels_copy();
        assert!(matches!(
            raster.resize(0, 3),
            Err(RasterError::InvalidDimensions { .. })
        ));
        assert_eq!(raster.pixels(), &before);
    }

    #[test]
    fn test_rotate_in_place() {
        let mut raster = gradient(6, 4);
        let before = raster.pixels_copy();
        raster.rotate(30.0).unwrap();
        assert_eq!(raster.width(), 6);
        assert_eq!(raster.height(), 4);
        assert_ne!(raster.pixels(), &before);
    }

    #[test]
    fn test_rotate_zero_is_noop() {
        let mut raster = gradient(6, 4);
        let before = raster.pixels_copy();
        raster.rotate(-360.0).unwrap();
        assert_eq!(raster.pixels(), &before);
    }

    #[test]
    fn test_rotate_error_leaves_raster() {
        let mut raster = gradient(6, 4);
        let before = raster.pixels_copy();
        assert!(raster.rotate(f64::NAN).is_err());
        assert_eq!(raster.pixels(), &before);
    }

    #[test]
    fn test_pixels_mut_is_live() {
        let mut raster = gradient(2, 2);
        raster.pixels_mut().set(0, 0, PackedPixel::BLACK).unwrap();
        assert_eq!(raster.pixel(0, 0).unwrap(), PackedPixel::BLACK);
    }

    #[test]
    fn test_pixels_copy_is_independent() {
        let mut raster = gradient(2, 2);
        let copy = raster.pixels_copy();
        raster.set_pixel(1, 1, PackedPixel::BLACK).unwrap();
        assert_ne!(copy.get(1, 1).unwrap(), PackedPixel::BLACK);
    }

    #[test]
    fn test_quarter_turn_swaps_and_resets_roi() {
        let mut raster = gradient(5, 3);
        raster.set_roi(1, 1, 2, 1);
        raster.rotate_right();
        assert_eq!((raster.width(), raster.height()), (3, 5));
        assert_eq!(raster.roi(), Roi::full(3, 5));
        raster.rotate_left();
        assert_eq!(raster.pixels(), gradient(5, 3).pixels());
    }

    #[test]
    fn test_flips() {
        let mut raster = Raster::from_raw(2, 2, vec![1, 2, 3, 4]).unwrap();
        raster.flip_horizontal();
        assert_eq!(raster.pixels().to_raw(), vec![2, 1, 4, 3]);
        raster.flip_vertical();
        assert_eq!(raster.pixels().to_raw(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_snapshot_and_reset() {
        let mut raster = gradient(8, 8);
        assert!(!raster.reset());

        let original = raster.pixels_copy();
        raster.snapshot();
        raster.rotate(45.0).unwrap();
        assert_ne!(raster.pixels(), &original);

        assert!(raster.reset());
        assert_eq!(raster.pixels(), &original);
        // Snapshot survives a reset
        assert!(raster.has_snapshot());

        raster.clear_snapshot();
        assert!(!raster.reset());
    }

    #[test]
    fn test_reset_refuses_mismatched_snapshot() {
        let mut raster = gradient(4, 2);
        raster.snapshot();
        raster.rotate_right();
        let turned = raster.pixels_copy();
        assert!(!raster.reset());
        assert_eq!(raster.pixels(), &turned);
    }

    #[test]
    fn test_apply_settings() {
        let mut raster = gradient(2, 2);
        let settings = TransformSettings {
            interpolation: InterpolationMode::Nearest,
            background: PackedPixel::TRANSPARENT,
        };
        raster.apply_settings(settings);
        assert_eq!(raster.settings(), settings);
    }
}
