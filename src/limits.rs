use alloc::vec::Vec;

use crate::error::BmpError;
use crate::pixel::Pixel;

/// Resource limits applied while decoding, before the pixel grid is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    ///
    /// A zero-width image has no pixels however tall it is, yet still
    /// allocates one empty row per line. Bound that with `max_height` or
    /// `max_memory_bytes`.
    pub max_pixels: Option<u64>,
    /// Maximum bytes the decoded grid (rows plus their pixels) may occupy.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check a header's geometry against every configured bound.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), BmpError> {
        let pixels = u64::from(width) * u64::from(height);
        ensure_within("width", u64::from(width), self.max_width)?;
        ensure_within("height", u64::from(height), self.max_height)?;
        ensure_within("pixel count", pixels, self.max_pixels)?;
        ensure_within(
            "grid allocation bytes",
            grid_bytes(width, height),
            self.max_memory_bytes,
        )
    }
}

/// Heap bytes needed for a `height`-row grid of `width` pixels each.
pub(crate) fn grid_bytes(width: u32, height: u32) -> u64 {
    let row_header = core::mem::size_of::<Vec<Pixel>>() as u64;
    let pixel = core::mem::size_of::<Pixel>() as u64;
    u64::from(height).saturating_mul(row_header.saturating_add(u64::from(width) * pixel))
}

fn ensure_within(what: &str, value: u64, limit: Option<u64>) -> Result<(), BmpError> {
    match limit {
        Some(max) if value > max => Err(BmpError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unlimited() {
        assert!(Limits::default().check(u32::MAX, u32::MAX).is_ok());
    }

    #[test]
    fn each_bound_is_enforced() {
        let limits = Limits {
            max_width: Some(10),
            max_height: Some(20),
            max_pixels: Some(150),
            ..Default::default()
        };
        assert!(limits.check(10, 15).is_ok());
        assert!(matches!(limits.check(11, 1), Err(BmpError::LimitExceeded(_))));
        assert!(matches!(limits.check(1, 21), Err(BmpError::LimitExceeded(_))));
        assert!(matches!(limits.check(10, 16), Err(BmpError::LimitExceeded(_))));
    }

    #[test]
    fn memory_bound_counts_row_overhead() {
        let exact = grid_bytes(4, 4);
        assert!(exact > 4 * 4 * 3);
        let limits = Limits {
            max_memory_bytes: Some(exact),
            ..Default::default()
        };
        assert!(limits.check(4, 4).is_ok());
        assert!(matches!(limits.check(4, 5), Err(BmpError::LimitExceeded(_))));
    }
}
