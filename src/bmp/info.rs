//! The 40-byte BITMAPINFOHEADER.

use alloc::vec::Vec;

use super::decode::Cursor;
use crate::error::BmpError;

/// Size of the info header on the wire, whatever its `size` field says.
pub const INFO_HEADER_SIZE: usize = 40;

/// 72 DPI expressed in pixels per meter.
const DEFAULT_PIXELS_PER_METER: u32 = 2835;

/// BMP info (DIB) header. All fields are little-endian on disk.
///
/// `height` is always positive; rows are stored bottom-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct InfoHeader {
    pub size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    /// Advisory size of the pixel region.
    pub image_size: u32,
    pub x_pixels_per_meter: u32,
    pub y_pixels_per_meter: u32,
    pub colors_used: u32,
    pub important_colors: u32,
}

impl InfoHeader {
    /// A header for an uncompressed 24-bit image of the given size.
    pub fn rgb24(width: u32, height: u32) -> Self {
        let image_size =
            super::calculate_size(width, height) - u64::from(super::PIXEL_DATA_OFFSET);
        Self {
            size: INFO_HEADER_SIZE as u32,
            width,
            height,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            image_size: u32::try_from(image_size).unwrap_or(u32::MAX),
            x_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
            y_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
            colors_used: 0,
            important_colors: 0,
        }
    }

    pub(crate) fn read(bytes: &mut Cursor<'_>) -> Result<Self, BmpError> {
        // Only planes and bits_per_pixel are words.
        Ok(Self {
            size: bytes.get_u32_le()?,
            width: bytes.get_u32_le()?,
            height: bytes.get_u32_le()?,
            planes: bytes.get_u16_le()?,
            bits_per_pixel: bytes.get_u16_le()?,
            compression: bytes.get_u32_le()?,
            image_size: bytes.get_u32_le()?,
            x_pixels_per_meter: bytes.get_u32_le()?,
            y_pixels_per_meter: bytes.get_u32_le()?,
            colors_used: bytes.get_u32_le()?,
            important_colors: bytes.get_u32_le()?,
        })
    }

    pub(crate) fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.image_size.to_le_bytes());
        out.extend_from_slice(&self.x_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.y_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.colors_used.to_le_bytes());
        out.extend_from_slice(&self.important_colors.to_le_bytes());
    }
}
