//! Pixwarp WASM - WebAssembly bindings for Pixwarp
//!
//! This crate provides WASM bindings to expose the pixwarp-core raster
//! engine to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - The `JsRaster` wrapper and pixel access
//! - `transform` - ROI, interpolation, resize, rotate and undo snapshot bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsRaster } from '@pixwarp/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const raster = new JsRaster(width, height, new Uint32Array(argbPixels));
//! raster.interpolation = 2; // bicubic
//! raster.rotate(15);
//! const thumb = raster.resize(128, 128);
//! ```

use wasm_bindgen::prelude::*;

mod transform;
mod types;

// Re-export public types
pub use types::JsRaster;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
