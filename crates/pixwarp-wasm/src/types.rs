//! WASM-compatible wrapper types for raster data.
//!
//! This module provides JavaScript-friendly types that wrap the core pixwarp types,
//! handling the conversion between Rust and JavaScript data representations.

use pixwarp_core::{PackedPixel, Raster};
use wasm_bindgen::prelude::*;

/// A raster wrapper for JavaScript.
///
/// Pixels cross the boundary as a `Uint32Array`, one `0xAARRGGBB` value per
/// pixel in row-major order. The raster also carries its region of
/// interest, interpolation mode, background value and undo snapshot; the
/// transform methods live in the `transform` module.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory. For performance-critical code, keep the raster in WASM memory
/// and chain transforms before extracting pixels.
#[wasm_bindgen]
pub struct JsRaster {
    inner: Raster,
}

#[wasm_bindgen]
impl JsRaster {
    /// Create a new JsRaster from dimensions and packed pixel data.
    ///
    /// # Arguments
    /// * `width` - Raster width in pixels
    /// * `height` - Raster height in pixels
    /// * `pixels` - Packed ARGB values (one per pixel, row-major order)
    ///
    /// # Errors
    /// Fails when a dimension is zero or `pixels.length != width * height`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Result<JsRaster, JsValue> {
        let inner = Raster::from_raw(width, height, pixels).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    /// Get the raster width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the raster height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of pixels (width * height)
    #[wasm_bindgen(getter)]
    pub fn pixel_count(&self) -> usize {
        self.inner.pixels().len()
    }

    /// Returns packed pixel data as Uint32Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u32> {
        self.inner.pixels().to_raw()
    }

    /// Read one packed pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Result<u32, JsValue> {
        self.inner.pixel(x, y).map(u32::from).map_err(to_js_error)
    }

    /// Write one packed pixel.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u32) -> Result<(), JsValue> {
        self.inner
            .set_pixel(x, y, PackedPixel(value))
            .map_err(to_js_error)
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsRaster {
    pub(crate) fn from_raster(inner: Raster) -> Self {
        Self { inner }
    }

    pub(crate) fn raster(&self) -> &Raster {
        &self.inner
    }

    pub(crate) fn raster_mut(&mut self) -> &mut Raster {
        &mut self.inner
    }
}

/// Map any displayable core error onto a JS string error.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
