use alloc::vec;
use alloc::vec::Vec;

use crate::error::BmpError;

/// Owned pixel grid, row-major, row 0 at the top.
///
/// Unlike [`imgref::ImgVec`](https://docs.rs/imgref), zero-width images are
/// representable, so a 0×0 BMP decodes to an `Image` rather than an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image<P> {
    pixels: Vec<P>,
    width: u32,
    height: u32,
}

impl<P> Default for Image<P> {
    fn default() -> Self {
        Self {
            pixels: Vec::new(),
            width: 0,
            height: 0,
        }
    }
}

impl<P: Clone> Image<P> {
    /// Allocate a `width` × `height` image with every pixel set to `fill`.
    pub fn new(width: u32, height: u32, fill: P) -> Self {
        let len = width as usize * height as usize;
        Self {
            pixels: vec![fill; len],
            width,
            height,
        }
    }
}

impl<P> Image<P> {
    /// Wrap a row-major pixel buffer.
    ///
    /// Pixels past `width * height` are dropped. Returns
    /// [`BmpError::BufferTooSmall`] if there are fewer.
    pub fn from_pixels(mut pixels: Vec<P>, width: u32, height: u32) -> Result<Self, BmpError> {
        let needed = (width as usize)
            .checked_mul(height as usize)
            .ok_or(BmpError::DimensionsTooLarge {
                width: width.into(),
                height: height.into(),
            })?;
        if pixels.len() < needed {
            return Err(BmpError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }
        pixels.truncate(needed);
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when the image has no pixels (either dimension is zero).
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixels of row `y`, counted from the top.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    pub fn row(&self, y: usize) -> &[P] {
        assert!(y < self.height as usize, "row {y} out of bounds");
        let w = self.width as usize;
        &self.pixels[y * w..(y + 1) * w]
    }

    /// Mutable pixels of row `y`, counted from the top.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    pub fn row_mut(&mut self, y: usize) -> &mut [P] {
        assert!(y < self.height as usize, "row {y} out of bounds");
        let w = self.width as usize;
        &mut self.pixels[y * w..(y + 1) * w]
    }

    /// Rows from top to bottom. Yields `height` rows even when `width` is zero.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[P]> + ExactSizeIterator + '_ {
        (0..self.height as usize).map(move |y| self.row(y))
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&P> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize)
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[P] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [P] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<P> {
        self.pixels
    }
}

#[cfg(feature = "imgref")]
impl<P: Copy> Image<P> {
    /// Borrow as an [`imgref::ImgRef`].
    ///
    /// Returns `None` for images with a zero dimension, which `imgref`
    /// cannot represent.
    pub fn as_imgref(&self) -> Option<imgref::ImgRef<'_, P>> {
        if self.is_empty() {
            return None;
        }
        Some(imgref::ImgRef::new(
            &self.pixels[..],
            self.width as usize,
            self.height as usize,
        ))
    }

    /// Convert into an [`imgref::ImgVec`]. `None` for zero-area images.
    pub fn into_imgvec(self) -> Option<imgref::ImgVec<P>> {
        if self.is_empty() {
            return None;
        }
        let (w, h) = (self.width as usize, self.height as usize);
        Some(imgref::ImgVec::new(self.pixels, w, h))
    }
}

#[cfg(feature = "imgref")]
impl<P: Copy> From<imgref::ImgRef<'_, P>> for Image<P> {
    fn from(img: imgref::ImgRef<'_, P>) -> Self {
        let pixels: Vec<P> = img.pixels().collect();
        Self {
            pixels,
            width: img.width() as u32,
            height: img.height() as u32,
        }
    }
}

#[cfg(feature = "imgref")]
impl<P: Copy> From<imgref::ImgVec<P>> for Image<P> {
    fn from(img: imgref::ImgVec<P>) -> Self {
        let (pixels, w, h) = img.into_contiguous_buf();
        Self {
            pixels,
            width: w as u32,
            height: h as u32,
        }
    }
}
