use thiserror::Error;

/// Errors raised by the fallible constructors of the core.
///
/// Per-frame updates and per-pixel shading never fail; they handle missing
/// render objects and images locally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandheldError {
    #[error("unknown element name '{0}'")]
    UnknownElement(String),
    #[error("source image has zero size ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("source image buffer holds {actual} bytes, expected {expected} for {width}x{height} RGBA8")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, HandheldError>;
