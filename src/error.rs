use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding, encoding, file access and transforms.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[cfg(feature = "std")]
    #[error("failed to open {}", path.display())]
    FileOpen {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[cfg(feature = "std")]
    #[error("error reading or writing file")]
    Io(#[source] std::io::Error),

    #[error("invalid or incompatible file, only 24-bit uncompressed BMP is supported: {0}")]
    InvalidFormat(ProfileViolation),

    #[error("crop bounds out of range: {0}")]
    OutOfRange(CropViolation),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("invalid pixel grid: {0}")]
    InvalidGrid(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for BmpError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => BmpError::UnexpectedEof,
            _ => BmpError::Io(e),
        }
    }
}

/// The first header field that falls outside the supported profile
/// (24-bit, uncompressed, no palette, 40-byte info header).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ProfileViolation {
    #[error("signature is {0:#06x}, expected \"BM\"")]
    Signature(u16),
    #[error("pixel data offset is {0}, expected 54")]
    DataOffset(u32),
    #[error("info header size is {0}, expected 40")]
    InfoHeaderSize(u32),
    #[error("planes is {0}, expected 1")]
    Planes(u16),
    #[error("compression type is {0}, expected 0")]
    Compression(u32),
    #[error("bits per pixel is {0}, expected 24")]
    BitsPerPixel(u16),
    #[error("colors used is {0}, expected 0")]
    ColorsUsed(u32),
    #[error("important colors is {0}, expected 0")]
    ImportantColors(u32),
}

/// Which crop bound check failed. Checks run in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CropViolation {
    #[error("x_begin and x_end must be smaller than width")]
    XBeyondWidth,
    #[error("x_begin must be smaller than or equal to x_end")]
    XInverted,
    #[error("y_begin and y_end must be smaller than height")]
    YBeyondHeight,
    #[error("y_begin must be smaller than or equal to y_end")]
    YInverted,
}
