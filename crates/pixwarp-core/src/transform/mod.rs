//! Geometric transforms: resize, rotation and orthogonal flips/turns.
//!
//! Resize and rotate both use inverse mapping: for each destination pixel
//! the source coordinate it comes from is computed, and an
//! [`InterpolationMode`] kernel samples the source there. The source buffer
//! is only ever read; every transform writes into a freshly allocated
//! buffer.
//!
//! # Coordinate System
//!
//! - Origin is the top-left pixel, x grows right, y grows down
//! - Integer coordinates address pixel centers
//! - Rotation angles are in degrees, positive = clockwise on screen
//!
//! # Parallelism
//!
//! Destination pixels are independent. With the `parallel` feature enabled,
//! rows are distributed over the rayon pool; the output is identical either
//! way.

mod interpolation;
mod orthogonal;
mod resize;
mod rotation;

pub use interpolation::{InterpolationMode, ParseInterpolationError};
pub use orthogonal::{flip_horizontal, flip_vertical, rotate_left, rotate_right};
pub use resize::resize;
pub use rotation::{normalize_angle, rotate};

use crate::buffer::PackedPixel;

/// Evaluate `f(x, y)` for every pixel of a `width x height` grid, row-major.
pub(crate) fn render<F>(width: u32, height: u32, f: F) -> Vec<PackedPixel>
where
    F: Fn(u32, u32) -> PackedPixel + Sync,
{
    #[cfg(feature = "parallel")]
    {
        render_parallel(width, height, f)
    }
    #[cfg(not(feature = "parallel"))]
    {
        render_serial(width, height, f)
    }
}

fn fill_row<F>(f: &F, y: usize, row: &mut [PackedPixel])
where
    F: Fn(u32, u32) -> PackedPixel,
{
    for (x, out) in row.iter_mut().enumerate() {
        *out = f(x as u32, y as u32);
    }
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn render_serial<F>(width: u32, height: u32, f: F) -> Vec<PackedPixel>
where
    F: Fn(u32, u32) -> PackedPixel,
{
    let stride = width as usize;
    let mut output = vec![PackedPixel::TRANSPARENT; stride * height as usize];
    for (y, row) in output.chunks_mut(stride).enumerate() {
        fill_row(&f, y, row);
    }
    output
}

#[cfg(feature = "parallel")]
fn render_parallel<F>(width: u32, height: u32, f: F) -> Vec<PackedPixel>
where
    F: Fn(u32, u32) -> PackedPixel + Sync,
{
    use rayon::prelude::*;

    let stride = width as usize;
    let mut output = vec![PackedPixel::TRANSPARENT; stride * height as usize];
    output
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| fill_row(&f, y, row));
    output
}
