//! The command set for the SH1107.
//!
//! Note 1: The SH1107 RAM is 128 columns by 128 rows, organised as 16 pages of 8 rows. A page
//! byte holds 8 vertically adjacent pixels of one column, least significant bit on top. In page
//! addressing mode the column address increments after every data byte and the page address
//! stays put, so a frame is written one page at a time.

use crate::error::Error;
use crate::interface::DisplayInterface;

pub const NUM_RAM_COLUMNS: u8 = 128;
pub const NUM_RAM_ROWS: u8 = 128;
pub const NUM_RAM_PAGES: u8 = NUM_RAM_ROWS / 8;
pub const COLUMN_MAX: u8 = NUM_RAM_COLUMNS - 1;
pub const ROW_MAX: u8 = NUM_RAM_ROWS - 1;
pub const PAGE_MAX: u8 = NUM_RAM_PAGES - 1;

/// How the RAM address pointer moves as image data is written.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddressingMode {
    /// The column address increments after each byte; the page address is fixed.
    Page,
    /// The page address increments after each byte; the column address is fixed.
    Vertical,
}

/// Setting of segment (column) remapping.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SegmentRemap {
    /// Column address 0 drives segment 0.
    Normal,
    /// Column address 0 drives the last segment, mirroring the image horizontally.
    Reverse,
}

/// Setting of the COM line scanning of rows. Changing this setting will flip the image
/// vertically.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComScanDirection {
    /// COM lines scan from COM0 upwards.
    Normal,
    /// COM lines scan from the last COM line downwards.
    Reverse,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    /// Turn the panel on (`true`) or put it to sleep (`false`). RAM keeps its contents while the
    /// panel is off.
    SetDisplayOn(bool),
    /// Set the contrast current. Range 0-255.
    SetContrast(u8),
    /// Select page or vertical addressing mode.
    SetAddressingMode(AddressingMode),
    /// Set segment remapping. See `SegmentRemap`.
    SetSegmentRemap(SegmentRemap),
    /// Set COM scan direction. See `ComScanDirection`.
    SetComScanDirection(ComScanDirection),
    /// Set the multiplex ratio, the number of active COM lines. Range 1-128.
    SetMuxRatio(u8),
    /// Set the display offset, which COM line row 0 of RAM is shown on. Range 0-127.
    SetDisplayOffset(u8),
    /// Set the RAM row shown on the first active COM line. Range 0-127.
    SetStartLine(u8),
    /// Set the display clock divide ratio (1-16) and oscillator frequency step (0-15).
    SetClockDivide(u8, u8),
    /// Set the pre-charge (1-15) and dis-charge (1-15) periods in DCLKs.
    SetPrechargePeriod(u8, u8),
    /// Set the VCOM deselect level register. Any value is accepted; see the datasheet for the
    /// resulting voltage.
    SetVcomDeselectLevel(u8),
    /// Enable (`true`) or disable the built-in DC-DC converter. Disable it when the panel runs
    /// from an external high-voltage supply.
    SetDcDc(bool),
    /// Light every pixel regardless of RAM (`true`), or show RAM contents (`false`).
    SetEntireDisplayOn(bool),
    /// Show RAM inverted (`true`) or normally (`false`).
    SetInverted(bool),
    /// Set the page address for following data writes. Range 0-15.
    SetPageAddress(u8),
    /// Set the column address for following data writes. Range 0-127. (Note 1)
    SetColumnAddress(u8),
}

macro_rules! ok_command {
    ($buf:ident,[$arg0:expr]) => {{
        $buf[0] = $arg0;
        Ok(&$buf[..1])
    }};
    ($buf:ident,[$arg0:expr, $arg1:expr]) => {{
        $buf[0] = $arg0;
        $buf[1] = $arg1;
        Ok(&$buf[..2])
    }};
}

impl Command {
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), Error<DI::Error>>
    where
        DI: DisplayInterface,
    {
        let mut arg_buf = [0u8; 2];
        let bytes: Result<&[u8], Error<DI::Error>> = match self {
            Command::SetDisplayOn(on) => ok_command!(arg_buf, [0xAE | on as u8]),
            Command::SetContrast(level) => ok_command!(arg_buf, [0x81, level]),
            Command::SetAddressingMode(mode) => ok_command!(
                arg_buf,
                [match mode {
                    AddressingMode::Page => 0x20,
                    AddressingMode::Vertical => 0x21,
                }]
            ),
            Command::SetSegmentRemap(remap) => ok_command!(
                arg_buf,
                [match remap {
                    SegmentRemap::Normal => 0xA0,
                    SegmentRemap::Reverse => 0xA1,
                }]
            ),
            Command::SetComScanDirection(dir) => ok_command!(
                arg_buf,
                [match dir {
                    ComScanDirection::Normal => 0xC0,
                    ComScanDirection::Reverse => 0xC8,
                }]
            ),
            Command::SetMuxRatio(ratio) => match ratio {
                1..=NUM_RAM_ROWS => ok_command!(arg_buf, [0xA8, ratio - 1]),
                _ => Err(Error::InvalidArgument),
            },
            Command::SetDisplayOffset(offset) => match offset {
                0..=ROW_MAX => ok_command!(arg_buf, [0xD3, offset]),
                _ => Err(Error::InvalidArgument),
            },
            Command::SetStartLine(line) => match line {
                0..=ROW_MAX => ok_command!(arg_buf, [0xDC, line]),
                _ => Err(Error::InvalidArgument),
            },
            Command::SetClockDivide(ratio, fosc) => match (ratio, fosc) {
                (1..=16, 0..=15) => ok_command!(arg_buf, [0xD5, fosc << 4 | (ratio - 1)]),
                _ => Err(Error::InvalidArgument),
            },
            Command::SetPrechargePeriod(precharge, discharge) => match (precharge, discharge) {
                (1..=15, 1..=15) => ok_command!(arg_buf, [0xD9, discharge << 4 | precharge]),
                _ => Err(Error::InvalidArgument),
            },
            Command::SetVcomDeselectLevel(level) => ok_command!(arg_buf, [0xDB, level]),
            Command::SetDcDc(on) => ok_command!(arg_buf, [0xAD, 0x8A | on as u8]),
            Command::SetEntireDisplayOn(on) => ok_command!(arg_buf, [0xA4 | on as u8]),
            Command::SetInverted(inverted) => ok_command!(arg_buf, [0xA6 | inverted as u8]),
            Command::SetPageAddress(page) => match page {
                0..=PAGE_MAX => ok_command!(arg_buf, [0xB0 | page]),
                _ => Err(Error::InvalidArgument),
            },
            Command::SetColumnAddress(column) => match column {
                0..=COLUMN_MAX => ok_command!(arg_buf, [column & 0x0F, 0x10 | column >> 4]),
                _ => Err(Error::InvalidArgument),
            },
        };
        iface.send_commands(bytes?).map_err(Error::Transport)
    }
}
