/// One 24-bit RGB pixel. Channel values are plain bytes, so every value
/// is always within 0..=255.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Build from on-disk channel order (B, G, R).
    #[inline]
    pub(crate) const fn from_bgr(bgr: [u8; 3]) -> Self {
        Self::new(bgr[2], bgr[1], bgr[0])
    }

    /// Channels in on-disk order (B, G, R).
    #[inline]
    pub(crate) const fn to_bgr(self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for Pixel {
    fn from(p: rgb::RGB8) -> Self {
        Self::new(p.r, p.g, p.b)
    }
}

#[cfg(feature = "rgb")]
impl From<Pixel> for rgb::RGB8 {
    fn from(p: Pixel) -> Self {
        rgb::RGB8::new(p.red, p.green, p.blue)
    }
}
