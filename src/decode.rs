use enough::Stop;

use crate::error::BmpError;
use crate::image::Image;
use crate::limits::Limits;

/// Decode request with optional resource limits.
///
/// ```no_run
/// use zenbmp::{DecodeRequest, Limits, Unstoppable};
///
/// let data: &[u8] = &[]; // your BMP bytes
/// let limits = Limits {
///     max_pixels: Some(4096 * 4096),
///     ..Default::default()
/// };
/// let image = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// println!("{}x{}", image.width(), image.height());
/// # Ok::<(), zenbmp::BmpError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images whose geometry exceeds `limits`, before any pixel is read.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<Image, BmpError> {
        crate::bmp::decode::decode_image(self.data, self.limits, &stop)
    }
}
