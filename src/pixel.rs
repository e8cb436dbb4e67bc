use rgb::ComponentBytes as _;
use rgb::alt::{BGR8, BGRA8};
use rgb::{RGB8, RGBA8};

/// A pixel type the BMP codec can transcode to and from on-disk BGR.
///
/// Alpha, where the type has it, never reaches the file: encoding drops it
/// and decoding sets it to 255.
pub trait BmpPixel: Copy {
    /// The pixel's color as the three bytes stored on disk.
    fn to_bgr(self) -> [u8; 3];

    /// Build an opaque pixel from the three bytes stored on disk.
    fn from_bgr(bgr: [u8; 3]) -> Self;

    /// Opaque black, the color of a freshly allocated decode buffer.
    fn black() -> Self {
        Self::from_bgr([0, 0, 0])
    }

    /// Write `row` as packed BGR into the first `3 * row.len()` bytes of `out`.
    ///
    /// Bytes of `out` past that point (row padding) are not touched.
    fn pack_row(row: &[Self], out: &mut [u8]) {
        for (px, dst) in row.iter().zip(out.chunks_exact_mut(3)) {
            dst.copy_from_slice(&px.to_bgr());
        }
    }

    /// Fill `row` from packed BGR bytes at the start of `src`.
    fn unpack_row(src: &[u8], row: &mut [Self]) {
        for (px, bgr) in row.iter_mut().zip(src.chunks_exact(3)) {
            *px = Self::from_bgr([bgr[0], bgr[1], bgr[2]]);
        }
    }
}

impl BmpPixel for RGBA8 {
    #[inline]
    fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    #[inline]
    fn from_bgr([b, g, r]: [u8; 3]) -> Self {
        rgb::Rgba { r, g, b, a: 255 }
    }
}

impl BmpPixel for RGB8 {
    #[inline]
    fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    #[inline]
    fn from_bgr([b, g, r]: [u8; 3]) -> Self {
        rgb::Rgb { r, g, b }
    }
}

impl BmpPixel for BGRA8 {
    #[inline]
    fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    #[inline]
    fn from_bgr([b, g, r]: [u8; 3]) -> Self {
        rgb::Bgra { b, g, r, a: 255 }
    }
}

impl BmpPixel for BGR8 {
    #[inline]
    fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    #[inline]
    fn from_bgr([b, g, r]: [u8; 3]) -> Self {
        rgb::Bgr { b, g, r }
    }

    // BGR rows are already in file byte order: direct copy.
    fn pack_row(row: &[Self], out: &mut [u8]) {
        let bytes = row.as_bytes();
        out[..bytes.len()].copy_from_slice(bytes);
    }

    fn unpack_row(src: &[u8], row: &mut [Self]) {
        let bytes = row.as_bytes_mut();
        let n = bytes.len();
        bytes.copy_from_slice(&src[..n]);
    }
}
