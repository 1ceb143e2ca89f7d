//! Mapping between the logical canvas and the controller's page-organised RAM.
//!
//! The driven area of controller RAM is `PHYSICAL_COLUMNS` wide and `PHYSICAL_ROWS` tall,
//! split into horizontal pages of eight rows. Each byte of a page is one column of eight
//! pixels, bit 0 on top. That layout never changes; the orientation only decides where each
//! logical pixel lands in it.

use core::ops::RangeInclusive;

use crate::canvas::{Canvas, DirtyRegion};
use crate::command::{ComScanDirection, SegmentRemap};

pub const PHYSICAL_COLUMNS: u8 = 128;
pub const PHYSICAL_ROWS: u8 = 64;
pub const PHYSICAL_PAGES: u8 = PHYSICAL_ROWS / 8;

/// How the application holds the panel.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// 128 pixels wide, 64 tall. Logical coordinates are physical coordinates.
    #[default]
    Landscape,
    /// 64 pixels wide, 128 tall. The logical image is rotated a quarter turn onto the
    /// physical RAM: logical rows become physical columns and logical columns run bottom to top
    /// through the physical rows.
    Portrait,
}

/// One bit of controller RAM.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct PhysicalAddress {
    pub page: u8,
    pub column: u8,
    pub bit: u8,
}

/// A rectangle of controller RAM in whole pages, inclusive on both ends.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PhysicalWindow {
    pub first_page: u8,
    pub last_page: u8,
    pub first_column: u8,
    pub last_column: u8,
}

impl PhysicalWindow {
    /// All of the driven RAM.
    pub const FULL: PhysicalWindow = PhysicalWindow {
        first_page: 0,
        last_page: PHYSICAL_PAGES - 1,
        first_column: 0,
        last_column: PHYSICAL_COLUMNS - 1,
    };

    pub fn pages(&self) -> RangeInclusive<u8> {
        self.first_page..=self.last_page
    }

    pub fn columns(&self) -> RangeInclusive<u8> {
        self.first_column..=self.last_column
    }

    /// Number of bytes one page of this window occupies.
    pub fn width(&self) -> usize {
        (self.last_column - self.first_column) as usize + 1
    }
}

impl Orientation {
    /// Logical `(width, height)` in pixels.
    pub fn dimensions(self) -> (i32, i32) {
        match self {
            Orientation::Landscape => (PHYSICAL_COLUMNS as i32, PHYSICAL_ROWS as i32),
            Orientation::Portrait => (PHYSICAL_ROWS as i32, PHYSICAL_COLUMNS as i32),
        }
    }

    /// Where the logical pixel `(x, y)` is stored, or `None` if it is off the canvas.
    pub fn map_to_physical(self, x: i32, y: i32) -> Option<PhysicalAddress> {
        let (width, height) = self.dimensions();
        if x < 0 || y < 0 || x >= width || y >= height {
            return None;
        }
        let (column, row) = match self {
            Orientation::Landscape => (x, y),
            Orientation::Portrait => (y, PHYSICAL_ROWS as i32 - 1 - x),
        };
        Some(PhysicalAddress {
            page: (row / 8) as u8,
            column: column as u8,
            bit: (row % 8) as u8,
        })
    }

    /// The logical pixel stored at `addr`, or `None` if `addr` is outside the driven RAM.
    pub fn map_to_logical(self, addr: PhysicalAddress) -> Option<(i32, i32)> {
        if addr.page >= PHYSICAL_PAGES || addr.column >= PHYSICAL_COLUMNS || addr.bit >= 8 {
            return None;
        }
        let row = addr.page as i32 * 8 + addr.bit as i32;
        let column = addr.column as i32;
        Some(match self {
            Orientation::Landscape => (column, row),
            Orientation::Portrait => (PHYSICAL_ROWS as i32 - 1 - row, column),
        })
    }

    /// The smallest physical window holding every pixel of the logical `region`.
    pub fn physical_window(self, region: DirtyRegion) -> Option<PhysicalWindow> {
        let a = self.map_to_physical(region.left, region.top)?;
        let b = self.map_to_physical(region.right, region.bottom)?;
        Some(PhysicalWindow {
            first_page: a.page.min(b.page),
            last_page: a.page.max(b.page),
            first_column: a.column.min(b.column),
            last_column: a.column.max(b.column),
        })
    }

    /// Fill `out` with the RAM bytes of `page` for `columns`, taken from `canvas`.
    ///
    /// `out` must hold at least as many bytes as `columns` spans. Canvas pixels that have no
    /// place in this orientation are left out.
    pub fn render_page(
        self,
        canvas: &Canvas,
        page: u8,
        columns: RangeInclusive<u8>,
        out: &mut [u8],
    ) {
        let direct = self == Orientation::Landscape
            && (canvas.width(), canvas.height()) == self.dimensions();
        for (slot, column) in out.iter_mut().zip(columns) {
            *slot = if direct {
                canvas.buffer()[page as usize * PHYSICAL_COLUMNS as usize + column as usize]
            } else {
                (0..8u8).fold(0u8, |byte, bit| {
                    let addr = PhysicalAddress { page, column, bit };
                    match self.map_to_logical(addr) {
                        Some((x, y)) if canvas.get_pixel(x, y).is_on() => byte | 1 << bit,
                        _ => byte,
                    }
                })
            };
        }
    }

    /// Segment (column) remap used at bring-up.
    pub(crate) fn segment_remap(self) -> SegmentRemap {
        match self {
            Orientation::Landscape => SegmentRemap::Normal,
            Orientation::Portrait => SegmentRemap::Reverse,
        }
    }

    /// COM (row) scan direction used at bring-up. Together with `segment_remap` this turns the
    /// panel half a turn in portrait so the quarter-turn mapping reads upright.
    pub(crate) fn com_scan_direction(self) -> ComScanDirection {
        match self {
            Orientation::Landscape => ComScanDirection::Normal,
            Orientation::Portrait => ComScanDirection::Reverse,
        }
    }
}
