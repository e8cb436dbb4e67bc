use alloc::vec::Vec;

use crate::bmp::{self, DEFAULT_PIXELS_PER_METER};
use crate::error::BmpError;
use crate::image::Image;
use crate::pixel::BmpPixel;

/// Encode options.
///
/// Every other header field is fixed: 24 bits per pixel, no compression,
/// pixel data at offset 54.
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest {
    pub(crate) pixels_per_meter: (i32, i32),
}

impl Default for EncodeRequest {
    fn default() -> Self {
        Self {
            pixels_per_meter: (DEFAULT_PIXELS_PER_METER, DEFAULT_PIXELS_PER_METER),
        }
    }
}

impl EncodeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolution written to the header. Defaults to 11811 (about 300 DPI).
    pub fn with_pixels_per_meter(mut self, x: i32, y: i32) -> Self {
        self.pixels_per_meter = (x, y);
        self
    }

    /// Encode to a complete BMP file in memory.
    pub fn encode<P: BmpPixel>(&self, image: &Image<P>) -> Result<Vec<u8>, BmpError> {
        bmp::encode::encode_bmp(image, self.pixels_per_meter)
    }
}
