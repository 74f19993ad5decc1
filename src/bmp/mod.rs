//! 24-bit uncompressed BMP codec.
//!
//! Use [`crate::Image`] for decoding and encoding; this module exposes the
//! header types, the profile check, and the size calculators.

pub(crate) mod decode;
pub(crate) mod encode;
mod header;
mod info;
mod validate;

pub use header::{FILE_HEADER_SIZE, FileHeader, SIGNATURE};
pub use info::{INFO_HEADER_SIZE, InfoHeader};
pub use validate::{check_profile, is_compatible};

/// Offset of the pixel data when no color table is present (14 + 40).
pub const PIXEL_DATA_OFFSET: u32 = (FILE_HEADER_SIZE + INFO_HEADER_SIZE) as u32;

const BYTES_PER_PIXEL: u64 = 3;

/// Zero bytes appended to each row so it spans a multiple of four bytes.
///
/// Always in `0..=3`.
pub fn row_padding(width: u32) -> usize {
    let remainder = (u64::from(width) * BYTES_PER_PIXEL) % 4;
    ((4 - remainder) % 4) as usize
}

/// Size in bytes of a 24-bit BMP file with the given geometry.
pub fn calculate_size(width: u32, height: u32) -> u64 {
    let stride = BYTES_PER_PIXEL * u64::from(width) + row_padding(width) as u64;
    stride * u64::from(height) + u64::from(PIXEL_DATA_OFFSET)
}
