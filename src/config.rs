//! Bring-up parameters for the SH1107. Builder methods offer a declarative way to either send a
//! configuration command at init time with a chosen value, or to keep the usual defaults for the
//! 128x64 FeatherWing-style modules.

use crate::command::Command;
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::orientation::Orientation;

/// Contrast after bring-up unless the `Config` says otherwise.
pub const DEFAULT_CONTRAST: u8 = 0x2F;

/// A configuration for the display.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub(crate) orientation: Orientation,
    pub(crate) external_power_supply: bool,
    pub(crate) contrast: u8,
    pub(crate) display_offset: u8,
    pub(crate) start_line: u8,
    clock_divide_cmd: Option<Command>,
    precharge_period_cmd: Option<Command>,
    vcom_deselect_level_cmd: Option<Command>,
}

impl Config {
    /// Create a new configuration. The orientation is mandatory because it decides the canvas
    /// size and how the controller scans its RAM. Everything else starts at the common module
    /// defaults and can be changed by calling the builder methods on `Config`.
    pub fn new(orientation: Orientation) -> Self {
        Config {
            orientation,
            external_power_supply: false,
            contrast: DEFAULT_CONTRAST,
            display_offset: 0,
            start_line: 0,
            clock_divide_cmd: Some(Command::SetClockDivide(2, 5)),
            precharge_period_cmd: Some(Command::SetPrechargePeriod(2, 2)),
            vcom_deselect_level_cmd: Some(Command::SetVcomDeselectLevel(0x35)),
        }
    }

    /// Whether the panel's high voltage comes from outside. When it does, the internal DC-DC
    /// converter is switched off at bring-up.
    pub fn external_power_supply(self, external: bool) -> Self {
        Self {
            external_power_supply: external,
            ..self
        }
    }

    /// Contrast level sent at bring-up. See `Command::SetContrast`.
    pub fn contrast(self, level: u8) -> Self {
        Self {
            contrast: level,
            ..self
        }
    }

    /// COM line that maps to display row 0. See `Command::SetDisplayOffset`.
    pub fn display_offset(self, offset: u8) -> Self {
        Self {
            display_offset: offset,
            ..self
        }
    }

    /// RAM row shown on the first COM line. See `Command::SetStartLine`.
    pub fn start_line(self, line: u8) -> Self {
        Self {
            start_line: line,
            ..self
        }
    }

    /// Display clock divide ratio and oscillator frequency step. See `Command::SetClockDivide`.
    pub fn clock_divide(self, ratio: u8, fosc: u8) -> Self {
        Self {
            clock_divide_cmd: Some(Command::SetClockDivide(ratio, fosc)),
            ..self
        }
    }

    /// Precharge and discharge periods in display clocks. See `Command::SetPrechargePeriod`.
    pub fn precharge_period(self, precharge: u8, discharge: u8) -> Self {
        Self {
            precharge_period_cmd: Some(Command::SetPrechargePeriod(precharge, discharge)),
            ..self
        }
    }

    /// Raw VCOM deselect level. See `Command::SetVcomDeselectLevel`.
    pub fn vcom_deselect_level(self, level: u8) -> Self {
        Self {
            vcom_deselect_level_cmd: Some(Command::SetVcomDeselectLevel(level)),
            ..self
        }
    }

    /// Leave the clock, precharge and VCOM registers at the chip's power-on-reset values.
    pub fn chip_defaults(self) -> Self {
        Self {
            clock_divide_cmd: None,
            precharge_period_cmd: None,
            vcom_deselect_level_cmd: None,
            ..self
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Transmit the optional timing commands encoded in `self`.
    pub(crate) fn send<DI>(&self, iface: &mut DI) -> Result<(), Error<DI::Error>>
    where
        DI: DisplayInterface,
    {
        self.clock_divide_cmd.map_or(Ok(()), |c| c.send(iface))?;
        self.precharge_period_cmd
            .map_or(Ok(()), |c| c.send(iface))?;
        self.vcom_deselect_level_cmd
            .map_or(Ok(()), |c| c.send(iface))
    }
}
