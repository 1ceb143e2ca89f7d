//! Pixel values of a monochrome panel.

/// A pixel is either lit or dark.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Color {
    /// Pixel dark (bit clear in display RAM).
    #[default]
    Off,
    /// Pixel lit (bit set in display RAM).
    On,
}

impl Color {
    pub fn is_on(self) -> bool {
        self == Color::On
    }

    /// The opposite color.
    pub fn inverse(self) -> Self {
        match self {
            Color::Off => Color::On,
            Color::On => Color::Off,
        }
    }

    /// A full byte of this color, i.e. eight vertically adjacent pixels.
    pub fn byte(self) -> u8 {
        match self {
            Color::Off => 0x00,
            Color::On => 0xFF,
        }
    }
}

impl From<bool> for Color {
    fn from(lit: bool) -> Self {
        if lit {
            Color::On
        } else {
            Color::Off
        }
    }
}

impl From<Color> for bool {
    fn from(color: Color) -> Self {
        color.is_on()
    }
}

#[cfg(feature = "graphics")]
mod binary_color {
    use super::Color;
    use embedded_graphics_core::pixelcolor::BinaryColor;

    impl From<BinaryColor> for Color {
        fn from(color: BinaryColor) -> Self {
            Color::from(color.is_on())
        }
    }

    impl From<Color> for BinaryColor {
        fn from(color: Color) -> Self {
            BinaryColor::from(color.is_on())
        }
    }
}
