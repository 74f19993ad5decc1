//! BMP encoder: writes the stored headers followed by the padded, bottom-up
//! B, G, R pixel region.

use alloc::vec::Vec;

use enough::Stop;
use log::trace;

use super::{PIXEL_DATA_OFFSET, row_padding};
use crate::error::BmpError;
use crate::image::Image;

/// Encode an image to a complete BMP file.
pub(crate) fn encode_image(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, BmpError> {
    image.check_grid()?;

    let info = image.info_header();
    let too_large = || BmpError::DimensionsTooLarge {
        width: info.width,
        height: info.height,
    };
    let w = info.width as usize;
    let h = info.height as usize;
    let pad_bytes = row_padding(info.width);
    let row_stride = w
        .checked_mul(3)
        .and_then(|r| r.checked_add(pad_bytes))
        .ok_or_else(too_large)?;
    let file_size = row_stride
        .checked_mul(h)
        .and_then(|n| n.checked_add(PIXEL_DATA_OFFSET as usize))
        .ok_or_else(too_large)?;

    stop.check()?;

    let mut out = Vec::new();
    out.try_reserve_exact(file_size).map_err(|_| too_large())?;
    image.header().write(&mut out);
    info.write(&mut out);

    for (i, row) in image.pixels().iter().rev().enumerate() {
        if i % 16 == 0 {
            stop.check()?;
        }
        for pixel in row {
            out.extend_from_slice(&pixel.to_bgr());
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    trace!("Encoded {w}x{h} BMP, {} bytes", out.len());
    Ok(out)
}
