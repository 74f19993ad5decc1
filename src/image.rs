use alloc::vec::Vec;

use enough::Stop;
use log::warn;

use crate::bmp::{self, FileHeader, InfoHeader, PIXEL_DATA_OFFSET, SIGNATURE};
use crate::error::BmpError;
use crate::pixel::Pixel;

/// A decoded 24-bit image: both headers plus a grid of pixel rows.
///
/// Row 0 of the grid is the topmost visual row; each row runs left to right.
/// The grid always has `info_header().height` rows of `info_header().width`
/// pixels, and `header().file_size` tracks every geometry change made by a
/// transform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pub(crate) header: FileHeader,
    pub(crate) info: InfoHeader,
    pub(crate) pixels: Vec<Vec<Pixel>>,
}

impl Image {
    /// Assemble an image from headers and a grid.
    ///
    /// The headers must describe the supported 24-bit profile and the grid
    /// must match the geometry the info header declares.
    pub fn new(
        header: FileHeader,
        info: InfoHeader,
        pixels: Vec<Vec<Pixel>>,
    ) -> Result<Self, BmpError> {
        bmp::check_profile(&header, &info).map_err(BmpError::InvalidFormat)?;
        let image = Self::from_decoded(header, info, pixels);
        image.check_grid()?;
        Ok(image)
    }

    /// Build a 24-bit image with standard headers from a rectangular grid.
    pub fn from_pixels(pixels: Vec<Vec<Pixel>>) -> Result<Self, BmpError> {
        let height = u32::try_from(pixels.len())
            .map_err(|_| BmpError::InvalidGrid(alloc::format!("{} rows", pixels.len())))?;
        let width = pixels.first().map_or(0, Vec::len);
        let width = u32::try_from(width)
            .map_err(|_| BmpError::InvalidGrid(alloc::format!("{width} columns")))?;
        let header = FileHeader {
            signature: SIGNATURE,
            file_size: file_size_field(width, height),
            reserved: 0,
            data_offset: PIXEL_DATA_OFFSET,
        };
        Self::new(header, InfoHeader::rgb24(width, height), pixels)
    }

    pub(crate) fn from_decoded(
        header: FileHeader,
        info: InfoHeader,
        pixels: Vec<Vec<Pixel>>,
    ) -> Self {
        Self {
            header,
            info,
            pixels,
        }
    }

    /// Decode a BMP file held in memory.
    pub fn decode(data: &[u8], stop: impl Stop) -> Result<Self, BmpError> {
        bmp::decode::decode_image(data, None, &stop)
    }

    /// Encode to a complete BMP file.
    ///
    /// Both headers are written as stored, except the signature, which is
    /// always `BM`. Edits made through [`Image::header_mut`] or
    /// [`Image::info_header_mut`] are not checked against the profile.
    pub fn encode(&self, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
        bmp::encode::encode_image(self, &stop)
    }

    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut FileHeader {
        &mut self.header
    }

    pub fn replace_header(&mut self, header: FileHeader) {
        self.header = header;
    }

    pub fn info_header(&self) -> &InfoHeader {
        &self.info
    }

    /// Mutable access to the info header.
    ///
    /// Changing `width` or `height` here does not resize the grid; encoding
    /// fails with [`BmpError::InvalidGrid`] until the two agree again.
    pub fn info_header_mut(&mut self) -> &mut InfoHeader {
        &mut self.info
    }

    /// Replace the info header. Row padding follows the new width.
    pub fn replace_info_header(&mut self, info: InfoHeader) {
        self.info = info;
    }

    pub fn pixels(&self) -> &[Vec<Pixel>] {
        &self.pixels
    }

    /// Mutable access to the rows, top row first.
    ///
    /// Rows are handed out as slices so their lengths stay fixed; use
    /// [`Image::replace_pixels`] to change the grid shape.
    pub fn pixels_mut(&mut self) -> impl ExactSizeIterator<Item = &mut [Pixel]> + '_ {
        self.pixels.iter_mut().map(Vec::as_mut_slice)
    }

    /// Replace the whole grid. It must match the current width and height.
    pub fn replace_pixels(&mut self, pixels: Vec<Vec<Pixel>>) -> Result<(), BmpError> {
        check_grid(&pixels, self.info.width, self.info.height)?;
        self.pixels = pixels;
        Ok(())
    }

    /// Row padding bytes for the current width.
    pub fn padding(&self) -> usize {
        bmp::row_padding(self.info.width)
    }

    /// File size the current geometry encodes to.
    pub fn calculate_size(&self) -> u64 {
        bmp::calculate_size(self.info.width, self.info.height)
    }

    /// Record new dimensions after a geometric transform.
    pub(crate) fn set_dimensions(&mut self, width: u32, height: u32) {
        self.info.width = width;
        self.info.height = height;
        self.header.file_size = file_size_field(width, height);
    }

    pub(crate) fn check_grid(&self) -> Result<(), BmpError> {
        check_grid(&self.pixels, self.info.width, self.info.height)
    }

    /// Copy the grid into an [`imgref::ImgVec`] of RGB8 pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGB8> {
        let buf = self.pixels.iter().flatten().map(|&p| p.into()).collect();
        imgref::ImgVec::new(buf, self.info.width as usize, self.info.height as usize)
    }

    /// Build an image from an [`imgref::ImgRef`] of RGB8 pixels.
    #[cfg(feature = "imgref")]
    pub fn from_imgref(img: imgref::ImgRef<'_, rgb::RGB8>) -> Result<Self, BmpError> {
        let rows = img
            .rows()
            .map(|row| row.iter().map(|&p| Pixel::from(p)).collect())
            .collect();
        Self::from_pixels(rows)
    }
}

#[cfg(feature = "std")]
impl Image {
    /// Read and decode a BMP file.
    ///
    /// The file is closed before this returns, on success or failure.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, BmpError> {
        use std::io::Read;

        let path = path.as_ref();
        log::debug!("loading BMP from {}", path.display());
        let mut file = std::fs::File::open(path).map_err(|source| BmpError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        drop(file);
        Self::decode(&data, enough::Unstoppable)
    }

    /// Encode and write to `path`, creating or truncating the file.
    ///
    /// Nothing is created if encoding fails.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<(), BmpError> {
        let path = path.as_ref();
        let data = self.encode(enough::Unstoppable)?;
        log::debug!("saving {} byte BMP to {}", data.len(), path.display());
        let file = std::fs::File::create(path).map_err(|source| BmpError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        write_all(file, &data)
    }

    /// Encode and stream to any writer.
    pub fn write_to<W: std::io::Write>(&self, writer: W) -> Result<(), BmpError> {
        let data = self.encode(enough::Unstoppable)?;
        write_all(writer, &data)
    }
}

#[cfg(feature = "std")]
fn write_all<W: std::io::Write>(mut writer: W, data: &[u8]) -> Result<(), BmpError> {
    writer.write_all(data).map_err(BmpError::Io)?;
    writer.flush().map_err(BmpError::Io)
}

/// `file_size` header value for a geometry, saturating at the field width.
fn file_size_field(width: u32, height: u32) -> u32 {
    let size = bmp::calculate_size(width, height);
    u32::try_from(size).unwrap_or_else(|_| {
        warn!("BMP size {size} does not fit the file size field");
        u32::MAX
    })
}

fn check_grid(pixels: &[Vec<Pixel>], width: u32, height: u32) -> Result<(), BmpError> {
    if pixels.len() != height as usize {
        return Err(BmpError::InvalidGrid(alloc::format!(
            "{} rows, header height is {height}",
            pixels.len()
        )));
    }
    if let Some((y, row)) = pixels
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != width as usize)
    {
        return Err(BmpError::InvalidGrid(alloc::format!(
            "row {y} has {} pixels, header width is {width}",
            row.len()
        )));
    }
    Ok(())
}
