//! The in-memory pixel buffer the application draws into.
//!
//! Pixels are packed eight to a byte in vertical strips: byte `(y / 8) * width + x` holds the
//! column of eight pixels starting at row `y - y % 8`, least significant bit on top. This is the
//! same packing the controller uses for its own RAM, which keeps the landscape flush a straight
//! copy.

use itertools::iproduct;

use crate::color::Color;
use crate::orientation::Orientation;
use crate::raster::Raster;

/// Size in bytes of every canvas: one full 128x64 (or 64x128) frame.
pub const BUFFER_SIZE: usize = 1024;

/// Error from constructing a canvas of an unsupported size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CanvasError {
    /// A dimension was zero, or the frame does not fit in `BUFFER_SIZE` bytes.
    UnsupportedSize,
}

/// The bounding box, inclusive on all sides, of every pixel written since the canvas was last
/// marked clean.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DirtyRegion {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl DirtyRegion {
    fn point(x: i32, y: i32) -> Self {
        DirtyRegion {
            left: x,
            top: y,
            right: x,
            bottom: y,
        }
    }

    fn include(self, x: i32, y: i32) -> Self {
        DirtyRegion {
            left: self.left.min(x),
            top: self.top.min(y),
            right: self.right.max(x),
            bottom: self.bottom.max(y),
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.left..=self.right).contains(&x) && (self.top..=self.bottom).contains(&y)
    }
}

/// A fixed-size monochrome bitmap in logical (application) coordinates.
#[derive(Clone)]
pub struct Canvas {
    buffer: [u8; BUFFER_SIZE],
    width: i32,
    height: i32,
    dirty: Option<DirtyRegion>,
}

impl Canvas {
    /// Create a blank canvas. Any size whose packed frame fits in `BUFFER_SIZE` bytes is
    /// accepted; the display itself only ever uses 128x64 and 64x128.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let pages = (height as usize + 7) / 8;
        let len = (width as usize).checked_mul(pages);
        if width == 0 || height == 0 || len.map_or(true, |len| len > BUFFER_SIZE) {
            return Err(CanvasError::UnsupportedSize);
        }
        Ok(Canvas {
            buffer: [0u8; BUFFER_SIZE],
            width: width as i32,
            height: height as i32,
            dirty: None,
        })
    }

    /// A blank canvas sized for `orientation`.
    pub fn for_orientation(orientation: Orientation) -> Self {
        let (width, height) = orientation.dimensions();
        Canvas {
            buffer: [0u8; BUFFER_SIZE],
            width,
            height,
            dirty: None,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The packed pixel bytes in use by this canvas.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer[..self.len()]
    }

    /// Read a pixel. Coordinates outside the canvas read as `Color::Off`.
    pub fn get_pixel(&self, x: i32, y: i32) -> Color {
        match self.index(x, y) {
            Some((index, mask)) => Color::from(self.buffer[index] & mask != 0),
            None => Color::Off,
        }
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        let len = self.len();
        self.buffer[..len].fill(color.byte());
        self.mark_all_dirty();
    }

    /// Shift the whole image by `dx` columns and `dy` rows. Pixels pushed off one edge wrap
    /// around to the opposite edge, so nothing is lost and no new pixels appear.
    pub fn scroll(&mut self, dx: i32, dy: i32) {
        let source = self.clone();
        for (y, x) in iproduct!(0..self.height, 0..self.width) {
            let to_x = (x + dx).rem_euclid(self.width);
            let to_y = (y + dy).rem_euclid(self.height);
            self.put(to_x, to_y, source.get_pixel(x, y));
        }
        self.mark_all_dirty();
    }

    /// The region touched since the last call to `mark_clean`, if any.
    pub fn dirty(&self) -> Option<DirtyRegion> {
        self.dirty
    }

    /// The dirty region, leaving the canvas marked clean.
    pub fn take_dirty(&mut self) -> Option<DirtyRegion> {
        self.dirty.take()
    }

    pub fn mark_clean(&mut self) {
        self.dirty = None;
    }

    pub fn mark_all_dirty(&mut self) {
        self.dirty = Some(DirtyRegion {
            left: 0,
            top: 0,
            right: self.width - 1,
            bottom: self.height - 1,
        });
    }

    fn len(&self) -> usize {
        self.width as usize * ((self.height as usize + 7) / 8)
    }

    fn index(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize / 8) * self.width as usize + x as usize;
        Some((index, 1 << (y % 8)))
    }

    // Write without touching the dirty region.
    fn put(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.index(x, y) {
            Some((index, mask)) => {
                match color {
                    Color::On => self.buffer[index] |= mask,
                    Color::Off => self.buffer[index] &= !mask,
                }
                true
            }
            None => false,
        }
    }
}

impl Raster for Canvas {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Set or clear one pixel. Out-of-range coordinates are ignored.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.put(x, y, color) {
            self.dirty = Some(match self.dirty {
                Some(region) => region.include(x, y),
                None => DirtyRegion::point(x, y),
            });
        }
    }
}
