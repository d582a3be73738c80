// MIT/Apache2 License

/// A four-element, 8-bit-per-channel color. Channels are not premultiplied.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_rgba8(0, 0, 0, 0);
    pub const WHITE: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::from_rgb8(0x00, 0x00, 0x00);
    pub const GRAY: Color = Color::from_rgb8(0x88, 0x88, 0x88);
    pub const RED: Color = Color::from_rgb8(0xFF, 0x00, 0x00);
    pub const GREEN: Color = Color::from_rgb8(0x00, 0xFF, 0x00);
    pub const BLUE: Color = Color::from_rgb8(0x00, 0x00, 0xFF);
    pub const YELLOW: Color = Color::from_rgb8(0xFF, 0xFF, 0x00);

    /// Create a new color from its four channels.
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new, fully opaque color.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 0xFF)
    }

    /// Create a color from a packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb32(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Gets the red element.
    #[inline]
    pub fn red(self) -> u8 {
        self.r
    }

    /// Gets the green element.
    #[inline]
    pub fn green(self) -> u8 {
        self.g
    }

    /// Gets the blue element.
    #[inline]
    pub fn blue(self) -> u8 {
        self.b
    }

    /// Gets the alpha element.
    #[inline]
    pub fn alpha(self) -> u8 {
        self.a
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 0xFF
    }
}

impl From<Color> for tiny_skia::Color {
    #[inline]
    fn from(color: Color) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_argb_matches_named_colors() {
        assert_eq!(Color::from_argb32(0xFF88_8888), Color::GRAY);
        assert_eq!(Color::from_argb32(0xFFFF_FF00), Color::YELLOW);
        assert_eq!(Color::from_argb32(0x0000_0000), Color::TRANSPARENT);
    }

    #[test]
    fn channel_accessors() {
        let c = Color::from_rgba8(1, 2, 3, 4);
        assert_eq!((c.red(), c.green(), c.blue(), c.alpha()), (1, 2, 3, 4));
        assert!(!c.is_opaque());
        assert!(Color::BLUE.is_opaque());
    }
}
