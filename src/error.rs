use alloc::string::String;

/// Errors from BMP decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    /// The first two bytes are not `BM`.
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u64, height: u64 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// The header or a pixel row ended early.
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("buffer too small: need {needed} pixels, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// The sink or source failed: could not be opened, read, written or flushed.
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
