//! `embedded-graphics` support: both the bare `Canvas` and a `Display` can be drawn on with any
//! embedded-graphics primitive, image or font.

use core::convert::Infallible;

use embedded_graphics::mono_font::{ascii::FONT_5X8, MonoTextStyle};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;
use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Point, Size};
use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_graphics_core::Pixel;

use super::Display;
use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::raster::Raster;

/// For use with embedded_graphics
impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.set_pixel(x, y, color.into());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.into());
        Ok(())
    }
}

/// For use with embedded_graphics
impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

/// For use with embedded_graphics. Drawing before `init` fails with `Error::NotInitialized`.
impl<DI> DrawTarget for Display<DI>
where
    DI: DisplayInterface,
{
    type Color = BinaryColor;
    type Error = Error<DI::Error>;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.ensure_ready()?;
        match self.canvas.draw_iter(pixels) {
            Ok(()) => Ok(()),
            Err(never) => match never {},
        }
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.into())
    }
}

impl<DI> OriginDimensions for Display<DI>
where
    DI: DisplayInterface,
{
    fn size(&self) -> Size {
        let (width, height) = self.dimensions();
        Size::new(width as u32, height as u32)
    }
}

impl<DI> Display<DI>
where
    DI: DisplayInterface,
{
    /// Draw `text` with its top-left corner at `(x, y)` in the built-in 5x8 font. Lines are
    /// eight pixels apart and glyphs six pixels apart; whatever runs off the canvas is clipped.
    pub fn text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
    ) -> Result<(), Error<DI::Error>> {
        self.ensure_ready()?;
        let style = MonoTextStyle::new(&FONT_5X8, BinaryColor::from(color));
        let text = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top);
        match text.draw(&mut self.canvas) {
            Ok(_) => Ok(()),
            Err(never) => match never {},
        }
    }
}
