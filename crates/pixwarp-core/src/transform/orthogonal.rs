//! Exact flips and quarter turns.
//!
//! These are pure pixel permutations: no kernel, no background, no values
//! synthesized. Quarter turns swap width and height.

use crate::buffer::PixelBuffer;

/// Mirror left-right in place.
pub fn flip_horizontal(buffer: &mut PixelBuffer) {
    let width = buffer.width() as usize;
    for row in buffer.as_mut_slice().chunks_exact_mut(width) {
        row.reverse();
    }
}

/// Mirror top-bottom in place.
pub fn flip_vertical(buffer: &mut PixelBuffer) {
    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    let data = buffer.as_mut_slice();
    for y in 0..height / 2 {
        let (top, bottom) = data.split_at_mut((height - 1 - y) * width);
        top[y * width..(y + 1) * width].swap_with_slice(&mut bottom[..width]);
    }
}

/// Rotate 90 degrees clockwise into a new `height x width` buffer.
pub fn rotate_right(buffer: &PixelBuffer) -> PixelBuffer {
    let (width, height) = (buffer.width(), buffer.height());
    let mut output = Vec::with_capacity(buffer.len());
    for y in 0..width {
        for x in 0..height {
            output.push(buffer.at(y, height - 1 - x));
        }
    }
    PixelBuffer::from_parts(height, width, output)
}

/// Rotate 90 degrees counter-clockwise into a new `height x width` buffer.
pub fn rotate_left(buffer: &PixelBuffer) -> PixelBuffer {
    let (width, height) = (buffer.width(), buffer.height());
    let mut output = Vec::with_capacity(buffer.len());
    for y in 0..width {
        for x in 0..height {
            output.push(buffer.at(width - 1 - y, x));
        }
    }
    PixelBuffer::from_parts(height, width, output)
}
