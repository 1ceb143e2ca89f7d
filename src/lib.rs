//! Driver library for the Sino Wealth SH1107 monochrome OLED display controller over I2C.
//!
//! Drawing happens in an in-memory `Canvas` laid out in logical (application) coordinates, in
//! either a 128x64 landscape or a 64x128 portrait orientation. `Display::show` streams the
//! canvas to the controller page by page, remapping it onto the controller's fixed RAM layout.
//!
//! ```ignore
//! let iface = I2cInterface::new(i2c);
//! let mut disp = Display::new(iface, Config::new(Orientation::Portrait));
//! disp.init()?;
//! disp.circle(32, 64, 20, Color::On, false)?;
//! disp.show()?;
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

// Declared first so its test macros are visible in the modules below.
#[macro_use]
pub mod interface;

pub mod canvas;
pub mod color;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod orientation;
pub mod raster;

// Re-exports for primary API.
pub use canvas::Canvas;
pub use color::Color;
pub use config::Config;
pub use display::{Display, SessionState};
pub use error::Error;
pub use interface::i2c::I2cInterface;
pub use interface::{hardware_reset, DisplayInterface};
pub use orientation::Orientation;
pub use raster::Raster;

/// Everything needed for everyday drawing.
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::color::Color;
    pub use crate::config::Config;
    pub use crate::display::Display;
    pub use crate::interface::i2c::I2cInterface;
    pub use crate::orientation::Orientation;
    pub use crate::raster::Raster;
}
