//! BMP decoder: header validation and bottom-up BGR row transcoding.

use alloc::string::ToString;

use super::header::{BmpHeader, HEADER_SIZE, INFO_HEADER_SIZE};
use super::row_stride;
use crate::error::BmpError;
use crate::image::Image;
use crate::limits::Limits;
use crate::pixel::BmpPixel;

/// Controls how strictly the decoder validates header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Check the `BM` signature and that dimensions are non-negative.
    /// Bit depth, compression, planes and size fields are read but
    /// not enforced; pixel data is always interpreted as 24-bit BGR.
    #[default]
    Standard,

    /// Additionally reject anything other than a 40-byte info header,
    /// one plane, 24 bits per pixel, no compression, pixel data at
    /// offset 54, and size fields consistent with the dimensions.
    Strict,
}

/// Row layout derived from a validated header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Geometry {
    pub width: u32,
    pub height: u32,
    /// Bytes per row on disk.
    pub stride: usize,
    /// Bytes of pixel data following the header, `stride * height`.
    pub data_len: usize,
}

/// Check the signature and derive row geometry.
pub(crate) fn parse_header(
    head: &[u8; HEADER_SIZE],
    validation: Validation,
) -> Result<(BmpHeader, Geometry), BmpError> {
    let header = BmpHeader::from_array(head);
    if !header.file.has_signature() {
        log::debug!("bmp: bad signature {:02x?}", header.file.signature);
        return Err(BmpError::UnrecognizedFormat);
    }

    let info = &header.info;
    log::trace!(
        "bmp header: {}x{} bpp={} compression={} offset={}",
        info.width,
        info.height,
        info.bits_per_pixel,
        info.compression,
        header.file.pixel_offset
    );

    if info.width < 0 {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "negative width {}",
            info.width
        )));
    }
    if info.height < 0 {
        return Err(BmpError::InvalidHeader(
            "negative height (top-down rows) is not supported".to_string(),
        ));
    }
    let width = info.width as u32;
    let height = info.height as u32;

    let too_large = || BmpError::DimensionsTooLarge {
        width: width.into(),
        height: height.into(),
    };
    let stride = usize::try_from(row_stride(width)).map_err(|_| too_large())?;
    let data_len = stride.checked_mul(height as usize).ok_or_else(too_large)?;

    match validation {
        Validation::Strict => check_strict(&header, data_len)?,
        Validation::Standard => {
            if info.bits_per_pixel != 24 || info.compression != 0 {
                log::warn!(
                    "bmp: header declares {} bpp, compression {}; decoding as uncompressed 24-bit",
                    info.bits_per_pixel,
                    info.compression
                );
            }
        }
    }

    Ok((
        header,
        Geometry {
            width,
            height,
            stride,
            data_len,
        },
    ))
}

fn check_strict(header: &BmpHeader, data_len: usize) -> Result<(), BmpError> {
    let info = &header.info;
    if info.header_size != INFO_HEADER_SIZE as u32 {
        return Err(BmpError::UnsupportedVariant(alloc::format!(
            "info header size {} (only BITMAPINFOHEADER is supported)",
            info.header_size
        )));
    }
    if info.planes != 1 {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "planes must be 1, got {}",
            info.planes
        )));
    }
    if info.bits_per_pixel != 24 {
        return Err(BmpError::UnsupportedVariant(alloc::format!(
            "{} bits per pixel (only 24 is supported)",
            info.bits_per_pixel
        )));
    }
    if info.compression != 0 {
        return Err(BmpError::UnsupportedVariant(alloc::format!(
            "compression method {} (only uncompressed is supported)",
            info.compression
        )));
    }
    if header.file.pixel_offset != HEADER_SIZE as u32 {
        return Err(BmpError::UnsupportedVariant(alloc::format!(
            "pixel data offset {} (expected {HEADER_SIZE})",
            header.file.pixel_offset
        )));
    }
    // BI_RGB files may leave the image size as 0.
    if info.image_size != 0 && info.image_size as usize != data_len {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "image size field {} does not match {data_len} bytes of rows",
            info.image_size
        )));
    }
    if header.file.file_size as usize != HEADER_SIZE + data_len {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "file size field {} does not match {}",
            header.file.file_size,
            HEADER_SIZE + data_len
        )));
    }
    Ok(())
}

/// Check dimensions and the output allocation against `limits`.
pub(crate) fn check_limits<P>(geom: &Geometry, limits: Option<&Limits>) -> Result<(), BmpError> {
    if let Some(limits) = limits {
        limits.check(geom.width, geom.height)?;
        let out_bytes = u64::from(geom.width)
            * u64::from(geom.height)
            * core::mem::size_of::<P>() as u64;
        limits.check_memory(out_bytes)?;
    }
    Ok(())
}

/// Transcode `stride * height` bytes of bottom-up BGR rows into an image.
///
/// `data` starts at the first pixel row. Fails with
/// [`BmpError::UnexpectedEof`] if it holds fewer bytes than the rows need;
/// no partial image is returned.
pub(crate) fn decode_rows<P: BmpPixel>(geom: &Geometry, data: &[u8]) -> Result<Image<P>, BmpError> {
    let rows = data.get(..geom.data_len).ok_or_else(|| {
        log::debug!(
            "bmp: truncated pixel data, {} of {} bytes",
            data.len(),
            geom.data_len
        );
        BmpError::UnexpectedEof
    })?;

    let mut image = Image::new(geom.width, geom.height, P::black());
    if geom.stride == 0 {
        return Ok(image);
    }
    // First row on disk is the bottom image row.
    for (y, src) in (0..geom.height as usize)
        .rev()
        .zip(rows.chunks_exact(geom.stride))
    {
        P::unpack_row(src, image.row_mut(y));
    }
    Ok(image)
}

/// Decode a complete in-memory BMP file.
pub(crate) fn decode_bmp<P: BmpPixel>(
    data: &[u8],
    limits: Option<&Limits>,
    validation: Validation,
) -> Result<Image<P>, BmpError> {
    let head: &[u8; HEADER_SIZE] = data
        .get(..HEADER_SIZE)
        .and_then(|s| s.try_into().ok())
        .ok_or(BmpError::UnexpectedEof)?;
    let (_, geom) = parse_header(head, validation)?;
    check_limits::<P>(&geom, limits)?;
    decode_rows(&geom, &data[HEADER_SIZE..])
}
