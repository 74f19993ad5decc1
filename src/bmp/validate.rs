//! Profile check: only 24-bit, uncompressed, palette-free BMP is accepted.
//!
//! `file_size` and `image_size` are deliberately not compared with the
//! geometry. Some editors append zero bytes to the file, which makes
//! those fields disagree with the computed size while the pixels are fine.

use super::{FileHeader, InfoHeader, PIXEL_DATA_OFFSET, SIGNATURE};
use crate::error::ProfileViolation;

const INFO_HEADER_SIZE: u32 = 40;
const PLANES: u16 = 1;
const COMPRESSION_NONE: u32 = 0;
const BITS_PER_PIXEL: u16 = 24;

/// Report the first header field outside the supported profile.
pub fn check_profile(header: &FileHeader, info: &InfoHeader) -> Result<(), ProfileViolation> {
    if header.signature != SIGNATURE {
        return Err(ProfileViolation::Signature(header.signature));
    }
    if header.data_offset != PIXEL_DATA_OFFSET {
        return Err(ProfileViolation::DataOffset(header.data_offset));
    }
    if info.size != INFO_HEADER_SIZE {
        return Err(ProfileViolation::InfoHeaderSize(info.size));
    }
    if info.planes != PLANES {
        return Err(ProfileViolation::Planes(info.planes));
    }
    if info.compression != COMPRESSION_NONE {
        return Err(ProfileViolation::Compression(info.compression));
    }
    if info.bits_per_pixel != BITS_PER_PIXEL {
        return Err(ProfileViolation::BitsPerPixel(info.bits_per_pixel));
    }
    if info.colors_used != 0 {
        return Err(ProfileViolation::ColorsUsed(info.colors_used));
    }
    if info.important_colors != 0 {
        return Err(ProfileViolation::ImportantColors(info.important_colors));
    }
    Ok(())
}

/// Whether the headers describe a file this crate can decode.
pub fn is_compatible(header: &FileHeader, info: &InfoHeader) -> bool {
    check_profile(header, info).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good() -> (FileHeader, InfoHeader) {
        let header = FileHeader {
            signature: SIGNATURE,
            file_size: 70,
            reserved: 0,
            data_offset: 54,
        };
        (header, InfoHeader::rgb24(2, 2))
    }

    #[test]
    fn accepts_profile() {
        let (h, i) = good();
        assert!(is_compatible(&h, &i));
    }

    #[test]
    fn ignores_advisory_sizes() {
        let (mut h, mut i) = good();
        h.file_size = 72;
        i.image_size = 0;
        i.x_pixels_per_meter = 0;
        assert_eq!(check_profile(&h, &i), Ok(()));
    }

    #[test]
    fn each_field_is_checked() {
        let cases: [(fn(&mut FileHeader, &mut InfoHeader), ProfileViolation); 8] = [
            (|h, _| h.signature = 0x5859, ProfileViolation::Signature(0x5859)),
            (|h, _| h.data_offset = 1078, ProfileViolation::DataOffset(1078)),
            (|_, i| i.size = 124, ProfileViolation::InfoHeaderSize(124)),
            (|_, i| i.planes = 2, ProfileViolation::Planes(2)),
            (|_, i| i.compression = 1, ProfileViolation::Compression(1)),
            (|_, i| i.bits_per_pixel = 32, ProfileViolation::BitsPerPixel(32)),
            (|_, i| i.colors_used = 256, ProfileViolation::ColorsUsed(256)),
            (|_, i| i.important_colors = 3, ProfileViolation::ImportantColors(3)),
        ];
        for (mutate, expected) in cases {
            let (mut h, mut i) = good();
            mutate(&mut h, &mut i);
            assert_eq!(check_profile(&h, &i), Err(expected));
        }
    }

    #[test]
    fn first_failure_wins() {
        let (mut h, mut i) = good();
        i.bits_per_pixel = 8;
        i.colors_used = 256;
        h.data_offset = 1078;
        assert_eq!(check_profile(&h, &i), Err(ProfileViolation::DataOffset(1078)));
    }
}
