//! # zenbmp
//!
//! Byte-exact encoder and decoder for 24-bit uncompressed BMP files.
//!
//! An [`Image`] (row-major, row 0 at the top) becomes a 54-byte header
//! followed by BGR rows stored bottom-up, each padded to a multiple of
//! 4 bytes; decoding reverses it. Alpha is never stored: encoding drops it
//! and decoding sets it to 255.
//!
//! ## File layout
//!
//! | Offset | Size | Field | Value |
//! |---|---|---|---|
//! | 0 | 2 | signature | `BM` |
//! | 2 | 4 | file size | 54 + stride × height |
//! | 6 | 4 | reserved | 0 |
//! | 10 | 4 | pixel data offset | 54 |
//! | 14 | 4 | info header size | 40 |
//! | 18 | 4 | width (signed) | image width |
//! | 22 | 4 | height (signed) | image height |
//! | 26 | 2 | planes | 1 |
//! | 28 | 2 | bits per pixel | 24 |
//! | 30 | 4 | compression | 0 |
//! | 34 | 4 | image data size | stride × height |
//! | 38 | 4 | x pixels/meter | 11811 |
//! | 42 | 4 | y pixels/meter | 11811 |
//! | 46 | 4 | colors used | 0 |
//! | 50 | 4 | important colors | 0x1000000 |
//!
//! All integers are little-endian regardless of host.
//!
//! ## Non-Goals
//!
//! - Compressed (RLE, bitfields), palette, or non-24-bit BMP
//! - Top-down (negative height) files
//! - Color management
//!
//! ## Features
//!
//! - `std` (default): [`read_bmp`], [`write_bmp`], [`load_bmp`], [`save_bmp`]
//!   and the `read`/`write`/`load`/`save` request methods. Without it the
//!   crate is `no_std` + `alloc` and works on byte slices.
//! - `imgref`: conversions between [`Image`] and `imgref` buffers.
//!
//! ## Usage
//!
//! ```
//! use zenbmp::{Image, RGBA8};
//!
//! let mut image = Image::new(3, 2, RGBA8::new(0, 0, 0, 255));
//! image.row_mut(0)[1] = RGBA8::new(255, 0, 0, 128);
//!
//! let bytes = zenbmp::encode_bmp(&image)?;
//! assert_eq!(bytes.len(), 54 + zenbmp::row_stride(3) as usize * 2);
//!
//! let decoded: Image<RGBA8> = zenbmp::decode_bmp(&bytes)?;
//! // alpha is not stored
//! assert_eq!(decoded.row(0)[1], RGBA8::new(255, 0, 0, 255));
//! # Ok::<(), zenbmp::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bmp;
mod decode;
mod encode;
mod error;
mod image;
#[cfg(feature = "std")]
mod io;
mod limits;
mod pixel;

use alloc::vec::Vec;

// Re-exports
pub use bmp::{
    BmpHeader, DEFAULT_PIXELS_PER_METER, FILE_HEADER_SIZE, FileHeader, HEADER_SIZE,
    IMPORTANT_COLORS, INFO_HEADER_SIZE, InfoHeader, Validation, row_stride,
};
pub use decode::DecodeRequest;
pub use encode::EncodeRequest;
pub use error::BmpError;
pub use image::Image;
#[cfg(feature = "std")]
pub use io::{load_bmp, read_bmp, save_bmp, write_bmp};
pub use limits::Limits;
pub use pixel::BmpPixel;
pub use rgb;
pub use rgb::alt::{BGR8, BGRA8};
pub use rgb::{RGB8, RGBA8};

/// Encode `image` to a complete BMP file with default options.
pub fn encode_bmp<P: BmpPixel>(image: &Image<P>) -> Result<Vec<u8>, BmpError> {
    EncodeRequest::new().encode(image)
}

/// Decode a complete in-memory BMP file with default options.
pub fn decode_bmp<P: BmpPixel>(data: &[u8]) -> Result<Image<P>, BmpError> {
    DecodeRequest::new().decode(data)
}
