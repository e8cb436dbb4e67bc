//! BITMAPFILEHEADER + BITMAPINFOHEADER, serialised field by field.
//!
//! Every field is written at a fixed offset with `to_le_bytes`, so the
//! on-disk layout never depends on struct layout or host endianness.

use crate::error::BmpError;

use super::row_stride;

/// Size of [`FileHeader`] on disk.
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of [`InfoHeader`] on disk.
pub const INFO_HEADER_SIZE: usize = 40;
/// Combined header size; pixel rows start at this offset.
pub const HEADER_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// Written resolution, pixels per meter (about 300 DPI).
pub const DEFAULT_PIXELS_PER_METER: i32 = 11811;

/// Value written to the important-colors field. A convention, not a count.
pub const IMPORTANT_COLORS: u32 = 0x0100_0000;

#[inline]
fn le_u16(b: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([b[at], b[at + 1]])
}

#[inline]
fn le_u32(b: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

#[inline]
fn le_i32(b: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

/// The 14-byte file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    /// `BM` for a bitmap.
    pub signature: [u8; 2],
    /// Total file size in bytes.
    pub file_size: u32,
    pub reserved: u32,
    /// Offset of the first pixel row from the start of the file.
    pub pixel_offset: u32,
}

impl Default for FileHeader {
    fn default() -> Self {
        Self {
            signature: *b"BM",
            file_size: 0,
            reserved: 0,
            pixel_offset: HEADER_SIZE as u32,
        }
    }
}

impl FileHeader {
    pub fn has_signature(&self) -> bool {
        &self.signature == b"BM"
    }

    pub fn to_bytes(&self) -> [u8; FILE_HEADER_SIZE] {
        let mut b = [0u8; FILE_HEADER_SIZE];
        b[0..2].copy_from_slice(&self.signature);
        b[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        b[6..10].copy_from_slice(&self.reserved.to_le_bytes());
        b[10..14].copy_from_slice(&self.pixel_offset.to_le_bytes());
        b
    }

    pub fn from_bytes(b: &[u8; FILE_HEADER_SIZE]) -> Self {
        Self {
            signature: [b[0], b[1]],
            file_size: le_u32(b, 2),
            reserved: le_u32(b, 6),
            pixel_offset: le_u32(b, 10),
        }
    }
}

/// The 40-byte BITMAPINFOHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    /// Positive means bottom-up rows.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    /// 0 = uncompressed (BI_RGB).
    pub compression: u32,
    /// Pixel data size in bytes, stride × height.
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl Default for InfoHeader {
    fn default() -> Self {
        Self {
            header_size: INFO_HEADER_SIZE as u32,
            width: 0,
            height: 0,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            image_size: 0,
            x_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
            y_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
            colors_used: 0,
            colors_important: IMPORTANT_COLORS,
        }
    }
}

impl InfoHeader {
    pub fn to_bytes(&self) -> [u8; INFO_HEADER_SIZE] {
        let mut b = [0u8; INFO_HEADER_SIZE];
        b[0..4].copy_from_slice(&self.header_size.to_le_bytes());
        b[4..8].copy_from_slice(&self.width.to_le_bytes());
        b[8..12].copy_from_slice(&self.height.to_le_bytes());
        b[12..14].copy_from_slice(&self.planes.to_le_bytes());
        b[14..16].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        b[16..20].copy_from_slice(&self.compression.to_le_bytes());
        b[20..24].copy_from_slice(&self.image_size.to_le_bytes());
        b[24..28].copy_from_slice(&self.x_pixels_per_meter.to_le_bytes());
        b[28..32].copy_from_slice(&self.y_pixels_per_meter.to_le_bytes());
        b[32..36].copy_from_slice(&self.colors_used.to_le_bytes());
        b[36..40].copy_from_slice(&self.colors_important.to_le_bytes());
        b
    }

    pub fn from_bytes(b: &[u8; INFO_HEADER_SIZE]) -> Self {
        Self {
            header_size: le_u32(b, 0),
            width: le_i32(b, 4),
            height: le_i32(b, 8),
            planes: le_u16(b, 12),
            bits_per_pixel: le_u16(b, 14),
            compression: le_u32(b, 16),
            image_size: le_u32(b, 20),
            x_pixels_per_meter: le_i32(b, 24),
            y_pixels_per_meter: le_i32(b, 28),
            colors_used: le_u32(b, 32),
            colors_important: le_u32(b, 36),
        }
    }
}

/// Both headers, as they appear at the start of a file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BmpHeader {
    pub file: FileHeader,
    pub info: InfoHeader,
}

impl BmpHeader {
    /// Headers for a `width` × `height` 24-bit image.
    ///
    /// Fails with [`BmpError::DimensionsTooLarge`] when a dimension does not
    /// fit the signed 32-bit fields or the file size does not fit 32 bits.
    pub(crate) fn for_image(
        width: u32,
        height: u32,
        pixels_per_meter: (i32, i32),
    ) -> Result<Self, BmpError> {
        let too_large = BmpError::DimensionsTooLarge {
            width: width.into(),
            height: height.into(),
        };
        let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
            return Err(too_large);
        };
        let image_size = row_stride(width)
            .checked_mul(u64::from(height))
            .filter(|&n| n <= u64::from(u32::MAX) - HEADER_SIZE as u64)
            .ok_or(too_large)? as u32;

        Ok(Self {
            file: FileHeader {
                file_size: HEADER_SIZE as u32 + image_size,
                ..FileHeader::default()
            },
            info: InfoHeader {
                width: w,
                height: h,
                image_size,
                x_pixels_per_meter: pixels_per_meter.0,
                y_pixels_per_meter: pixels_per_meter.1,
                ..InfoHeader::default()
            },
        })
    }

    /// Bytes per encoded row for the declared width (0 if negative).
    pub fn row_stride(&self) -> u64 {
        row_stride(self.info.width.max(0) as u32)
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut b = [0u8; HEADER_SIZE];
        b[..FILE_HEADER_SIZE].copy_from_slice(&self.file.to_bytes());
        b[FILE_HEADER_SIZE..].copy_from_slice(&self.info.to_bytes());
        b
    }

    pub fn from_array(b: &[u8; HEADER_SIZE]) -> Self {
        let mut fb = [0u8; FILE_HEADER_SIZE];
        let mut ib = [0u8; INFO_HEADER_SIZE];
        fb.copy_from_slice(&b[..FILE_HEADER_SIZE]);
        ib.copy_from_slice(&b[FILE_HEADER_SIZE..]);
        Self {
            file: FileHeader::from_bytes(&fb),
            info: InfoHeader::from_bytes(&ib),
        }
    }

    /// Parse the 54 header bytes at the start of `data` without touching
    /// pixel data.
    ///
    /// Only length is checked here; signature and geometry are checked by
    /// the decoder.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
        let head: &[u8; HEADER_SIZE] = data
            .get(..HEADER_SIZE)
            .and_then(|s| s.try_into().ok())
            .ok_or(BmpError::UnexpectedEof)?;
        Ok(Self::from_array(head))
    }
}
