//! BMP encoder: uncompressed 24-bit, bottom-up rows.

use alloc::vec;
use alloc::vec::Vec;

use super::header::BmpHeader;
use crate::error::BmpError;
use crate::image::Image;
use crate::pixel::BmpPixel;

/// Headers and row stride for `image`, checked against the format's
/// 32-bit fields.
pub(crate) fn plan<P>(
    image: &Image<P>,
    pixels_per_meter: (i32, i32),
) -> Result<(BmpHeader, usize), BmpError> {
    let header = BmpHeader::for_image(image.width(), image.height(), pixels_per_meter)?;
    let stride =
        usize::try_from(header.row_stride()).map_err(|_| BmpError::DimensionsTooLarge {
            width: image.width().into(),
            height: image.height().into(),
        })?;
    Ok((header, stride))
}

/// Feed each encoded row of `image` to `sink`, bottom row first.
///
/// Every row is exactly `stride` bytes; padding bytes are zero.
pub(crate) fn write_rows<P, E>(
    image: &Image<P>,
    stride: usize,
    mut sink: impl FnMut(&[u8]) -> Result<(), E>,
) -> Result<(), E>
where
    P: BmpPixel,
{
    if image.height() == 0 {
        return Ok(());
    }
    // Zeroed once; pack_row only overwrites the pixel bytes.
    let mut row_buf = vec![0u8; stride];
    for row in image.rows().rev() {
        P::pack_row(row, &mut row_buf);
        sink(&row_buf)?;
    }
    Ok(())
}

/// Encode `image` to a complete BMP file in memory.
pub(crate) fn encode_bmp<P: BmpPixel>(
    image: &Image<P>,
    pixels_per_meter: (i32, i32),
) -> Result<Vec<u8>, BmpError> {
    let (header, stride) = plan(image, pixels_per_meter)?;

    let mut out = Vec::with_capacity(header.file.file_size as usize);
    out.extend_from_slice(&header.to_bytes());
    write_rows(image, stride, |row| -> Result<(), BmpError> {
        out.extend_from_slice(row);
        Ok(())
    })?;

    debug_assert_eq!(out.len(), header.file.file_size as usize);
    Ok(out)
}
