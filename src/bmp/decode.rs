//! BMP decoder for the 24-bit uncompressed profile.
//!
//! Headers are read first, then checked against the profile, and only
//! then is the pixel region touched. Rows are stored bottom-up on disk in
//! B, G, R order and padded to a multiple of four bytes.

use alloc::vec::Vec;

use enough::Stop;
use log::{trace, warn};

use super::{FileHeader, InfoHeader, calculate_size, row_padding, validate};
use crate::error::BmpError;
use crate::image::Image;
use crate::limits::Limits;
use crate::pixel::Pixel;

// ── Cursor for reading from &[u8] ───────────────────────────────────

pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn set_position(&mut self, pos: usize) -> Result<(), BmpError> {
        if pos > self.data.len() {
            return Err(BmpError::UnexpectedEof);
        }
        self.pos = pos;
        Ok(())
    }

    /// Advance up to `n` bytes, stopping at end of input.
    fn skip_lenient(&mut self, n: usize) -> usize {
        let step = n.min(self.remaining());
        self.pos += step;
        step
    }

    pub(crate) fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BmpError> {
        let end = self.pos.checked_add(N).ok_or(BmpError::UnexpectedEof)?;
        let bytes = self.data.get(self.pos..end).ok_or(BmpError::UnexpectedEof)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        self.pos = end;
        Ok(buf)
    }

    pub(crate) fn get_u16_le(&mut self) -> Result<u16, BmpError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    pub(crate) fn get_u32_le(&mut self) -> Result<u32, BmpError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }
}

// ── Full decode ─────────────────────────────────────────────────────

/// Decode a complete BMP file held in memory.
pub(crate) fn decode_image(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, BmpError> {
    let mut bytes = Cursor::new(data);
    let header = FileHeader::read(&mut bytes)?;
    let info = InfoHeader::read(&mut bytes)?;

    trace!("Width: {}", info.width);
    trace!("Height: {}", info.height);
    trace!("Bit depth: {}", info.bits_per_pixel);
    trace!("Compression: {}", info.compression);

    validate::check_profile(&header, &info).map_err(BmpError::InvalidFormat)?;

    if let Some(limits) = limits {
        limits.check(info.width, info.height)?;
    }
    stop.check()?;

    let computed = calculate_size(info.width, info.height);
    if u64::from(header.file_size) != computed {
        warn!(
            "BMP file size field ({}) differs from computed size ({computed})",
            header.file_size
        );
    }

    let pixels = read_pixels(&mut bytes, &header, &info, stop)?;

    if bytes.remaining() > 0 {
        warn!("{} trailing bytes after BMP pixel data", bytes.remaining());
    }

    Ok(Image::from_decoded(header, info, pixels))
}

/// Read the pixel region into a grid whose row 0 is the top of the image.
fn read_pixels(
    bytes: &mut Cursor<'_>,
    header: &FileHeader,
    info: &InfoHeader,
    stop: &dyn Stop,
) -> Result<Vec<Vec<Pixel>>, BmpError> {
    let too_large = || BmpError::DimensionsTooLarge {
        width: info.width,
        height: info.height,
    };
    let width = info.width as usize;
    let height = info.height as usize;
    let padding = row_padding(info.width);
    let row_bytes = width.checked_mul(3).ok_or_else(too_large)?;

    bytes.set_position(header.data_offset as usize)?;

    // The last row's padding may be missing; everything before it must exist.
    if width > 0 && height > 0 {
        let needed = row_bytes
            .checked_add(padding)
            .and_then(|stride| stride.checked_mul(height - 1))
            .and_then(|n| n.checked_add(row_bytes))
            .ok_or(BmpError::UnexpectedEof)?;
        if bytes.remaining() < needed {
            return Err(BmpError::UnexpectedEof);
        }
    }

    let mut rows = Vec::new();
    rows.try_reserve_exact(height).map_err(|_| too_large())?;

    // File order is bottom row first.
    for file_row in 0..height {
        if file_row % 16 == 0 {
            stop.check()?;
        }
        let mut row = Vec::with_capacity(width);
        for _ in 0..width {
            row.push(Pixel::from_bgr(bytes.read_fixed_bytes()?));
        }
        if bytes.skip_lenient(padding) < padding {
            warn!("BMP row {file_row} is missing its padding bytes");
        }
        rows.push(row);
    }
    rows.reverse();

    Ok(rows)
}
