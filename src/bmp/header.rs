//! The 14-byte file header.

use alloc::vec::Vec;

use super::decode::Cursor;
use crate::error::BmpError;

/// Size of the file header on the wire.
pub const FILE_HEADER_SIZE: usize = 14;

/// `"BM"` read as a big-endian word.
pub const SIGNATURE: u16 = 0x424d;

/// BMP file header.
///
/// `signature` holds the first two bytes assembled big-endian, so a
/// well-formed file reads `0x424D`. Every other field is little-endian.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FileHeader {
    pub signature: u16,
    /// Advisory; not checked against the real file length.
    pub file_size: u32,
    pub reserved: u32,
    /// Byte offset from the start of the file to the pixel data.
    pub data_offset: u32,
}

impl FileHeader {
    pub(crate) fn read(bytes: &mut Cursor<'_>) -> Result<Self, BmpError> {
        let signature = u16::from_be_bytes(bytes.read_fixed_bytes()?);
        let file_size = bytes.get_u32_le()?;
        let reserved = bytes.get_u32_le()?;
        let data_offset = bytes.get_u32_le()?;
        Ok(Self {
            signature,
            file_size,
            reserved,
            data_offset,
        })
    }

    /// Append the header. The signature is always written as the literal `BM`.
    pub(crate) fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&self.reserved.to_le_bytes());
        out.extend_from_slice(&self.data_offset.to_le_bytes());
    }
}
