//! Per-pixel color filters. None of these change the geometry.

use crate::image::Image;
use crate::pixel::Pixel;

const CHANNEL_MAX: u8 = 0xff;

/// Color matrix used by [`Image::sepia`], rows are output R, G, B.
const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Unweighted channel average.
///
/// Each channel is divided separately and the remainders are averaged on
/// their own, so no intermediate exceeds a byte.
#[inline]
pub fn average(pixel: Pixel) -> u8 {
    let Pixel { red, green, blue } = pixel;
    (red / 3 + green / 3 + blue / 3) + ((red % 3 + green % 3 + blue % 3) / 3)
}

/// Sepia tone of one pixel. Results above 255 clamp; fractions truncate.
#[inline]
pub fn sepia_tone(pixel: Pixel) -> Pixel {
    let rgb = [
        f64::from(pixel.red),
        f64::from(pixel.green),
        f64::from(pixel.blue),
    ];
    let channel = |coeffs: [f64; 3]| -> u8 {
        let v = coeffs[0] * rgb[0] + coeffs[1] * rgb[1] + coeffs[2] * rgb[2];
        v.min(f64::from(CHANNEL_MAX)) as u8
    };
    Pixel::new(channel(SEPIA[0]), channel(SEPIA[1]), channel(SEPIA[2]))
}

impl Image {
    fn map_pixels(&mut self, f: impl Fn(Pixel) -> Pixel) {
        for pixel in self.pixels.iter_mut().flatten() {
            *pixel = f(*pixel);
        }
    }

    /// Replace every channel value `v` with `255 - v`.
    pub fn invert_colors(&mut self) {
        self.map_pixels(|p| {
            Pixel::new(
                CHANNEL_MAX - p.red,
                CHANNEL_MAX - p.green,
                CHANNEL_MAX - p.blue,
            )
        });
    }

    /// Set all three channels to their average.
    pub fn grayscale(&mut self) {
        self.map_pixels(|p| {
            let avg = average(p);
            Pixel::new(avg, avg, avg)
        });
    }

    pub fn isolate_red(&mut self) {
        self.map_pixels(|p| Pixel::new(p.red, 0, 0));
    }

    pub fn isolate_green(&mut self) {
        self.map_pixels(|p| Pixel::new(0, p.green, 0));
    }

    pub fn isolate_blue(&mut self) {
        self.map_pixels(|p| Pixel::new(0, 0, p.blue));
    }

    /// Sepia filter using Microsoft's recommended coefficients.
    pub fn sepia(&mut self) {
        self.map_pixels(sepia_tone);
    }
}
