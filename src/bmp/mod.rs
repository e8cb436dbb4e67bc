//! 24-bit uncompressed BMP: header layout, row stride, row transcoding.
//!
//! Use the top-level [`crate::encode_bmp`], [`crate::decode_bmp`], or the
//! request builders.

pub(crate) mod decode;
pub(crate) mod encode;
mod header;

pub use decode::Validation;
pub use header::{
    BmpHeader, DEFAULT_PIXELS_PER_METER, FILE_HEADER_SIZE, FileHeader, HEADER_SIZE,
    IMPORTANT_COLORS, INFO_HEADER_SIZE, InfoHeader,
};

/// Bytes per encoded row for an image `width` pixels wide: 3 bytes per
/// pixel, padded up to a multiple of 4.
///
/// ```
/// assert_eq!(zenbmp::row_stride(0), 0);
/// assert_eq!(zenbmp::row_stride(1), 4);
/// assert_eq!(zenbmp::row_stride(5), 16);
/// ```
#[inline]
pub const fn row_stride(width: u32) -> u64 {
    4 * ((3 * width as u64 + 3) / 4)
}
