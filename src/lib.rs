//! # zenbmp
//!
//! Decoder and encoder for uncompressed 24-bit BMP files, plus in-place
//! geometric and color transforms on the decoded pixel grid.
//!
//! ## Supported Format
//!
//! Exactly one BMP profile is accepted: a 14-byte file header, a 40-byte
//! BITMAPINFOHEADER, one plane, 24 bits per pixel, no compression and no
//! color table (pixel data at offset 54). Rows are bottom-up, B/G/R, padded
//! to four bytes. Anything else is rejected with
//! [`BmpError::InvalidFormat`] rather than decoded on a best-effort basis.
//!
//! ## Transforms
//!
//! - Color: [`Image::invert_colors`], [`Image::grayscale`],
//!   [`Image::isolate_red`], [`Image::isolate_green`],
//!   [`Image::isolate_blue`], [`Image::sepia`]
//! - Geometry: [`Image::flip_horizontal`], [`Image::flip_vertical`],
//!   [`Image::transpose`], [`Image::rotate90_left`],
//!   [`Image::rotate90_right`], [`Image::crop`]
//!
//! Geometric transforms keep the header width, height and file size in
//! step with the grid.
//!
//! ## Non-Goals
//!
//! - RLE compression, palettes, bit depths other than 24, alpha
//! - Streaming or partial decoding
//! - Printing or dumping image metadata (use the read accessors)
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmp::{Image, Operation};
//!
//! let mut image = Image::load("input.bmp")?;
//! println!("{}x{}", image.width(), image.height());
//!
//! image.rotate90_left();
//! image.apply(Operation::Crop { x_begin: 0, y_begin: 0, x_end: 10, y_end: 10 })?;
//! image.sepia();
//!
//! image.save("output.bmp")?;
//! # Ok::<(), zenbmp::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod image;
mod limits;
mod pixel;

pub mod bmp;
pub mod transform;

mod decode;

// Re-exports
pub use bmp::{FileHeader, InfoHeader, calculate_size, row_padding};
pub use decode::DecodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::{BmpError, CropViolation, ProfileViolation};
pub use image::Image;
pub use limits::Limits;
pub use pixel::Pixel;
pub use transform::Operation;

/// Decode a BMP file held in memory.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<Image, BmpError> {
    Image::decode(data, stop)
}

/// Encode an image to BMP bytes.
pub fn encode_bmp(image: &Image, stop: impl Stop) -> Result<alloc::vec::Vec<u8>, BmpError> {
    image.encode(stop)
}

/// Read and decode the BMP file at `path`.
#[cfg(feature = "std")]
pub fn load(path: impl AsRef<std::path::Path>) -> Result<Image, BmpError> {
    Image::load(path)
}

/// Encode `image` and write it to `path`.
#[cfg(feature = "std")]
pub fn save(image: &Image, path: impl AsRef<std::path::Path>) -> Result<(), BmpError> {
    image.save(path)
}
