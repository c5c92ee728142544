//! Packed 32-bit pixel values.

use serde::{Deserialize, Serialize};

/// A pixel stored as one `u32` holding four independent 8-bit lanes.
///
/// Lane order is alpha, red, green, blue from the most significant byte
/// down (`0xAARRGGBB`). Packing and unpacking are pure bit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackedPixel(pub u32);

impl PackedPixel {
    /// Opaque white, the default rotation background.
    pub const WHITE: PackedPixel = PackedPixel(0xFFFF_FFFF);
    /// Opaque black.
    pub const BLACK: PackedPixel = PackedPixel(0xFF00_0000);
    /// All lanes zero.
    pub const TRANSPARENT: PackedPixel = PackedPixel(0);

    /// Pack four lanes into a pixel.
    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        PackedPixel(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Pack an opaque color (alpha = 255).
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    /// Pack lanes given in `[a, r, g, b]` order.
    #[inline]
    pub const fn from_channels(channels: [u8; 4]) -> Self {
        Self::from_argb(channels[0], channels[1], channels[2], channels[3])
    }

    /// Unpack into `[a, r, g, b]`.
    #[inline]
    pub const fn channels(self) -> [u8; 4] {
        [self.alpha(), self.red(), self.green(), self.blue()]
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl From<u32> for PackedPixel {
    fn from(value: u32) -> Self {
        PackedPixel(value)
    }
}

impl From<PackedPixel> for u32 {
    fn from(pixel: PackedPixel) -> Self {
        pixel.0
    }
}
