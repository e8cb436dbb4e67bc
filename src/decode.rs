use crate::bmp::{self, Validation};
use crate::error::BmpError;
use crate::image::Image;
use crate::limits::Limits;
use crate::pixel::BmpPixel;

/// Decode options: resource limits and header validation strictness.
///
/// ```no_run
/// use zenbmp::{DecodeRequest, Limits, Validation, RGBA8};
///
/// let data: &[u8] = &[]; // your BMP bytes
/// let limits = Limits { max_pixels: Some(1 << 24), ..Default::default() };
/// let image = DecodeRequest::new()
///     .with_limits(&limits)
///     .with_validation(Validation::Strict)
///     .decode::<RGBA8>(data)?;
/// # Ok::<(), zenbmp::BmpError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodeRequest<'a> {
    pub(crate) limits: Option<&'a Limits>,
    pub(crate) validation: Validation,
}

impl<'a> DecodeRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject headers whose dimensions or output size exceed `limits`.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Decode a complete BMP file held in memory.
    pub fn decode<P: BmpPixel>(&self, data: &[u8]) -> Result<Image<P>, BmpError> {
        bmp::decode::decode_bmp(data, self.limits, self.validation)
    }
}
