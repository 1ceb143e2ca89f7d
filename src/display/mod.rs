//! The main API to the display driver. A `Display` owns the interface, the canvas and the
//! controller state; drawing goes into the canvas and `show`/`show_dirty` push it to the panel.

#[cfg(feature = "graphics")]
pub mod graphics;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::command::{AddressingMode, Command};
use crate::config::Config;
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::orientation::{Orientation, PhysicalWindow, PHYSICAL_COLUMNS, PHYSICAL_ROWS};
use crate::raster::Raster;

/// Where a `Display` is in its lifecycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    /// Constructed, nothing sent yet.
    Uninitialized,
    /// The bring-up sequence is on the wire.
    Initializing,
    /// Brought up and showing RAM.
    Ready,
    /// Brought up, panel switched off. RAM and the canvas are kept.
    PoweredOff,
}

/// A driver for an SH1107 display.
pub struct Display<DI>
where
    DI: DisplayInterface,
{
    iface: DI,
    config: Config,
    canvas: Canvas,
    state: SessionState,
    contrast: u8,
    inverted: bool,
}

impl<DI> Display<DI>
where
    DI: DisplayInterface,
{
    /// Construct a new display driver for a panel connected to `iface`. Nothing is sent until
    /// `init`.
    pub fn new(iface: DI, config: Config) -> Self {
        Display {
            iface,
            canvas: Canvas::for_orientation(config.orientation),
            state: SessionState::Uninitialized,
            contrast: config.contrast,
            inverted: false,
            config,
        }
    }

    /// Bring the controller up, then clear the panel. Only the first successful call does
    /// anything; later calls fail with `AlreadyInitialized`. If a transfer fails the display
    /// goes back to `Uninitialized` and `init` may be retried.
    pub fn init(&mut self) -> Result<(), Error<DI::Error>> {
        if self.state != SessionState::Uninitialized {
            return Err(Error::AlreadyInitialized);
        }
        self.state = SessionState::Initializing;
        log::debug!("sh1107: bring-up, {:?}", self.config.orientation);
        match self.bring_up() {
            Ok(()) => {
                self.state = SessionState::Ready;
                log::debug!("sh1107: ready");
                Ok(())
            }
            Err(e) => {
                self.state = SessionState::Uninitialized;
                log::debug!("sh1107: bring-up failed");
                Err(e)
            }
        }
    }

    fn bring_up(&mut self) -> Result<(), Error<DI::Error>> {
        let cfg = self.config;
        let iface = &mut self.iface;
        Command::SetDisplayOn(false).send(iface)?;
        Command::SetStartLine(cfg.start_line).send(iface)?;
        Command::SetContrast(cfg.contrast).send(iface)?;
        Command::SetAddressingMode(AddressingMode::Page).send(iface)?;
        Command::SetSegmentRemap(cfg.orientation.segment_remap()).send(iface)?;
        Command::SetComScanDirection(cfg.orientation.com_scan_direction()).send(iface)?;
        Command::SetMuxRatio(PHYSICAL_ROWS).send(iface)?;
        Command::SetDisplayOffset(cfg.display_offset).send(iface)?;
        cfg.send(iface)?;
        Command::SetDcDc(!cfg.external_power_supply).send(iface)?;
        Command::SetEntireDisplayOn(false).send(iface)?;
        Command::SetInverted(false).send(iface)?;
        Command::SetDisplayOn(true).send(iface)?;
        self.contrast = cfg.contrast;
        self.inverted = false;

        self.canvas.fill(Color::Off);
        self.flush(PhysicalWindow::FULL)?;
        self.canvas.mark_clean();
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), Error<DI::Error>> {
        match self.state {
            SessionState::Ready | SessionState::PoweredOff => Ok(()),
            SessionState::Uninitialized | SessionState::Initializing => Err(Error::NotInitialized),
        }
    }

    /// Set the contrast. Anything that does not fit in a `u8` is rejected, not clamped.
    pub fn contrast<V>(&mut self, level: V) -> Result<(), Error<DI::Error>>
    where
        V: TryInto<u8>,
    {
        self.ensure_ready()?;
        let level = level.try_into().map_err(|_| Error::InvalidArgument)?;
        Command::SetContrast(level).send(&mut self.iface)?;
        self.contrast = level;
        log::debug!("sh1107: contrast {}", level);
        Ok(())
    }

    /// Show RAM inverted or normally. The canvas is not touched.
    pub fn invert(&mut self, inverted: bool) -> Result<(), Error<DI::Error>> {
        self.ensure_ready()?;
        Command::SetInverted(inverted).send(&mut self.iface)?;
        self.inverted = inverted;
        log::debug!("sh1107: inverted {}", inverted);
        Ok(())
    }

    /// Switch the panel off. RAM and the canvas keep their contents, and drawing and flushing
    /// still work while it is off.
    pub fn power_off(&mut self) -> Result<(), Error<DI::Error>> {
        self.ensure_ready()?;
        Command::SetDisplayOn(false).send(&mut self.iface)?;
        self.state = SessionState::PoweredOff;
        log::debug!("sh1107: power off");
        Ok(())
    }

    pub fn power_on(&mut self) -> Result<(), Error<DI::Error>> {
        self.ensure_ready()?;
        Command::SetDisplayOn(true).send(&mut self.iface)?;
        self.state = SessionState::Ready;
        log::debug!("sh1107: power on");
        Ok(())
    }

    /// Send the whole canvas to the panel.
    ///
    /// On error the canvas keeps its contents and its dirty region, so the call can simply be
    /// repeated.
    pub fn show(&mut self) -> Result<(), Error<DI::Error>> {
        self.ensure_ready()?;
        self.flush(PhysicalWindow::FULL)?;
        self.canvas.mark_clean();
        Ok(())
    }

    /// Send only the part of the panel covering what was drawn since the last flush. Does
    /// nothing when the canvas is clean.
    pub fn show_dirty(&mut self) -> Result<(), Error<DI::Error>> {
        self.ensure_ready()?;
        let orientation = self.config.orientation;
        let window = match self.canvas.dirty().and_then(|r| orientation.physical_window(r)) {
            Some(window) => window,
            None => return Ok(()),
        };
        self.flush(window)?;
        self.canvas.mark_clean();
        Ok(())
    }

    fn flush(&mut self, window: PhysicalWindow) -> Result<(), Error<DI::Error>> {
        let orientation = self.config.orientation;
        let mut page_buf = [0u8; PHYSICAL_COLUMNS as usize];
        let bytes = &mut page_buf[..window.width()];
        for page in window.pages() {
            log::trace!(
                "sh1107: page {} columns {}..={}",
                page,
                window.first_column,
                window.last_column
            );
            Command::SetPageAddress(page).send(&mut self.iface)?;
            Command::SetColumnAddress(window.first_column).send(&mut self.iface)?;
            orientation.render_page(&self.canvas, page, window.columns(), bytes);
            self.iface.send_data(bytes).map_err(Error::Transport)?;
        }
        Ok(())
    }

    /// Shift the canvas contents, wrapping around at the edges.
    pub fn scroll(&mut self, dx: i32, dy: i32) -> Result<(), Error<DI::Error>> {
        self.ensure_ready()?;
        self.canvas.scroll(dx, dy);
        Ok(())
    }

    pub fn pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), Error<DI::Error>> {
        self.ensure_ready()?;
        self.canvas.set_pixel(x, y, color);
        Ok(())
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Result<Color, Error<DI::Error>> {
        self.ensure_ready()?;
        Ok(self.canvas.get_pixel(x, y))
    }

    pub fn fill(&mut self, color: Color) -> Result<(), Error<DI::Error>> {
        self.ensure_ready()?;
        self.canvas.fill(color);
        Ok(())
    }

    pub fn line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    ) -> Result<(), Error<DI::Error>> {
        self.ensure_ready()?;
        self.canvas.line(x0, y0, x1, y1, color);
        Ok(())
    }

    pub fn hline(&mut self, x: i32, y: i32, w: i32, color: Color) -> Result<(), Error<DI::Error>> {
        self.ensure_ready()?;
        self.canvas.hline(x, y, w, color);
        Ok(())
    }

    pub fn vline(&mut self, x: i32, y: i32, h: i32, color: Color) -> Result<(), Error<DI::Error>> {
        self.ensure_ready()?;
        self.canvas.vline(x, y, h, color);
        Ok(())
    }

    pub fn rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
    ) -> Result<(), Error<DI::Error>> {
        self.ensure_ready()?;
        self.canvas.rect(x, y, w, h, color);
        Ok(())
    }

    pub fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
    ) -> Result<(), Error<DI::Error>> {
        self.ensure_ready()?;
        self.canvas.fill_rect(x, y, w, h, color);
        Ok(())
    }

    /// Circle of radius `r` around `(x, y)`. A negative radius is an `InvalidArgument`.
    pub fn circle(
        &mut self,
        x: i32,
        y: i32,
        r: i32,
        color: Color,
        filled: bool,
    ) -> Result<(), Error<DI::Error>> {
        self.ensure_ready()?;
        if r < 0 {
            return Err(Error::InvalidArgument);
        }
        self.canvas.circle(x, y, r, color, filled);
        Ok(())
    }

    /// Ellipse with radii `a` (horizontal) and `b` (vertical) around `(x, y)`. A negative radius
    /// is an `InvalidArgument`.
    pub fn ellipse(
        &mut self,
        x: i32,
        y: i32,
        a: i32,
        b: i32,
        color: Color,
        filled: bool,
    ) -> Result<(), Error<DI::Error>> {
        self.ensure_ready()?;
        if a < 0 || b < 0 {
            return Err(Error::InvalidArgument);
        }
        self.canvas.ellipse(x, y, a, b, color, filled);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
        filled: bool,
    ) -> Result<(), Error<DI::Error>> {
        self.ensure_ready()?;
        self.canvas.triangle(x0, y0, x1, y1, x2, y2, color, filled);
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    /// Logical `(width, height)` of the canvas.
    pub fn dimensions(&self) -> (i32, i32) {
        self.config.orientation.dimensions()
    }

    /// Contrast last sent to the controller, or the configured one before `init`.
    pub fn contrast_level(&self) -> u8 {
        self.contrast
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn is_powered_on(&self) -> bool {
        self.state == SessionState::Ready
    }

    /// The canvas, readable in any state.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The canvas, writable in any state. Changes show up on the next flush.
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Give back the interface.
    pub fn release(self) -> DI {
        self.iface
    }
}
