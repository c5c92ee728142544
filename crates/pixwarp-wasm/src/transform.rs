//! WASM bindings for raster transform operations.
//!
//! This module adds the configuration and transform methods to [`JsRaster`]:
//! region of interest, interpolation mode, background value, resize, rotate,
//! crop, flips, quarter turns and the single-step snapshot used for undo.

use crate::types::{to_js_error, JsRaster};
use pixwarp_core::{InterpolationMode, PackedPixel, TransformSettings};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
impl JsRaster {
    /// Get the interpolation mode (0 = nearest, 1 = bilinear, 2 = bicubic)
    #[wasm_bindgen(getter)]
    pub fn interpolation(&self) -> u8 {
        self.raster().interpolation_method().as_u8()
    }

    /// Set the interpolation mode. Unknown values select bilinear.
    #[wasm_bindgen(setter)]
    pub fn set_interpolation(&mut self, value: u8) {
        self.raster_mut()
            .set_interpolation_method(InterpolationMode::from_u8(value));
    }

    /// Set the interpolation mode by name: "none"/"nearest", "bilinear" or "bicubic".
    pub fn set_interpolation_name(&mut self, name: &str) -> Result<(), JsValue> {
        let mode: InterpolationMode = name.parse().map_err(to_js_error)?;
        self.raster_mut().set_interpolation_method(mode);
        Ok(())
    }

    /// Get the rotation background as a packed ARGB value
    #[wasm_bindgen(getter)]
    pub fn background(&self) -> u32 {
        self.raster().background_value().into()
    }

    /// Set the rotation background as a packed ARGB value
    #[wasm_bindgen(setter)]
    pub fn set_background(&mut self, value: u32) {
        self.raster_mut().set_background_value(PackedPixel(value));
    }

    /// Set the region of interest. The rectangle is clamped to the raster;
    /// one that misses the raster entirely selects the whole raster.
    pub fn set_roi(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.raster_mut().set_roi(x, y, width, height);
    }

    /// Reset the region of interest to the whole raster.
    pub fn reset_roi(&mut self) {
        self.raster_mut().reset_roi();
    }

    /// Current region of interest as `[x, y, width, height]`.
    pub fn roi(&self) -> Vec<u32> {
        let roi = self.raster().roi();
        vec![roi.x(), roi.y(), roi.width(), roi.height()]
    }

    /// New raster containing the region of interest, no resampling.
    pub fn crop(&self) -> JsRaster {
        JsRaster::from_raster(self.raster().crop())
    }

    /// Resize the region of interest to `width x height` using the current
    /// interpolation mode. This raster is not modified.
    ///
    /// # Example (TypeScript)
    ///
    /// ```typescript
    /// raster.set_roi(10, 10, 64, 64);
    /// raster.interpolation = 2; // bicubic
    /// const zoomed = raster.resize(256, 256);
    /// ```
    pub fn resize(&self, width: u32, height: u32) -> Result<JsRaster, JsValue> {
        self.raster()
            .resize(width, height)
            .map(JsRaster::from_raster)
            .map_err(to_js_error)
    }

    /// Rotate in place about the center by `angle_degrees` (positive = clockwise).
    ///
    /// Width and height are unchanged; uncovered pixels receive the background.
    pub fn rotate(&mut self, angle_degrees: f64) -> Result<(), JsValue> {
        self.raster_mut().rotate(angle_degrees).map_err(to_js_error)
    }

    /// Mirror left-right in place.
    pub fn flip_horizontal(&mut self) {
        self.raster_mut().flip_horizontal();
    }

    /// Mirror top-bottom in place.
    pub fn flip_vertical(&mut self) {
        self.raster_mut().flip_vertical();
    }

    /// Exact quarter turn clockwise; swaps width and height.
    pub fn rotate_right(&mut self) {
        self.raster_mut().rotate_right();
    }

    /// Exact quarter turn counter-clockwise; swaps width and height.
    pub fn rotate_left(&mut self) {
        self.raster_mut().rotate_left();
    }

    /// Remember the current pixels for a later `reset()`.
    pub fn snapshot(&mut self) {
        self.raster_mut().snapshot();
    }

    /// Restore the last snapshot. Returns false when there is none or the
    /// raster has changed size since it was taken.
    pub fn reset(&mut self) -> bool {
        self.raster_mut().reset()
    }

    /// Drop the stored snapshot.
    pub fn clear_snapshot(&mut self) {
        self.raster_mut().clear_snapshot();
    }

    /// Serialize the transform settings for storage
    pub fn settings(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.raster().settings()).map_err(to_js_error)
    }

    /// Apply transform settings from a JS object
    /// (`{ interpolation: "bicubic", background: 4294967295 }`).
    pub fn apply_settings(&mut self, value: JsValue) -> Result<(), JsValue> {
        let settings: TransformSettings =
            serde_wasm_bindgen::from_value(value).map_err(to_js_error)?;
        self.raster_mut().apply_settings(settings);
        Ok(())
    }
}
