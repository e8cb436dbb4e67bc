//! `std::io` and file path entry points.
//!
//! Streams are consumed strictly in order: 54 header bytes, then
//! `stride * height` bytes of rows. Nothing is read past the last row and
//! nothing is sought.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::bmp::{self, HEADER_SIZE};
use crate::decode::DecodeRequest;
use crate::encode::EncodeRequest;
use crate::error::BmpError;
use crate::image::Image;
use crate::pixel::BmpPixel;

/// A short read means the file is truncated, not that the reader failed.
fn map_read_err(e: io::Error) -> BmpError {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        BmpError::UnexpectedEof
    } else {
        BmpError::Io(e)
    }
}

impl EncodeRequest {
    /// Write a complete BMP file to `writer`, then flush it.
    ///
    /// On error the writer may hold a partial file; the caller decides
    /// whether to discard it.
    pub fn write<P: BmpPixel, W: Write>(
        &self,
        image: &Image<P>,
        mut writer: W,
    ) -> Result<(), BmpError> {
        let (header, stride) = bmp::encode::plan(image, self.pixels_per_meter)?;
        writer.write_all(&header.to_bytes())?;
        bmp::encode::write_rows(image, stride, |row| writer.write_all(row))?;
        writer.flush()?;
        Ok(())
    }

    /// Create (or truncate) the file at `path` and write `image` to it.
    pub fn save<P: BmpPixel>(
        &self,
        image: &Image<P>,
        path: impl AsRef<Path>,
    ) -> Result<(), BmpError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write(image, BufWriter::new(file))?;
        log::debug!(
            "bmp: saved {}x{} image to {}",
            image.width(),
            image.height(),
            path.display()
        );
        Ok(())
    }
}

impl DecodeRequest<'_> {
    /// Decode a BMP file from `reader`.
    pub fn read<P: BmpPixel, R: Read>(&self, mut reader: R) -> Result<Image<P>, BmpError> {
        let mut head = [0u8; HEADER_SIZE];
        reader.read_exact(&mut head).map_err(map_read_err)?;
        let (_, geom) = bmp::decode::parse_header(&head, self.validation)?;
        bmp::decode::check_limits::<P>(&geom, self.limits)?;

        // Grows with what the reader actually yields, so a lying header
        // cannot force a large allocation before the data runs out.
        let mut data = Vec::new();
        reader
            .take(geom.data_len as u64)
            .read_to_end(&mut data)?;
        bmp::decode::decode_rows(&geom, &data)
    }

    /// Open the file at `path` and decode it.
    pub fn load<P: BmpPixel>(&self, path: impl AsRef<Path>) -> Result<Image<P>, BmpError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let image = self.read(BufReader::new(file))?;
        log::debug!(
            "bmp: loaded {}x{} image from {}",
            image.width(),
            image.height(),
            path.display()
        );
        Ok(image)
    }
}

/// Write `image` as a BMP file to `writer` with default options.
pub fn write_bmp<P: BmpPixel, W: Write>(image: &Image<P>, writer: W) -> Result<(), BmpError> {
    EncodeRequest::new().write(image, writer)
}

/// Read a BMP file from `reader` with default options.
pub fn read_bmp<P: BmpPixel, R: Read>(reader: R) -> Result<Image<P>, BmpError> {
    DecodeRequest::new().read(reader)
}

/// Save `image` as a BMP file at `path` with default options.
pub fn save_bmp<P: BmpPixel>(image: &Image<P>, path: impl AsRef<Path>) -> Result<(), BmpError> {
    EncodeRequest::new().save(image, path)
}

/// Load the BMP file at `path` with default options.
pub fn load_bmp<P: BmpPixel>(path: impl AsRef<Path>) -> Result<Image<P>, BmpError> {
    DecodeRequest::new().load(path)
}
