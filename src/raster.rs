//! Shape rasterization on top of a single pixel-set operation.
//!
//! Every routine here only calls `Raster::set_pixel` (directly or through `hline`), so any pixel
//! sink can draw shapes by implementing two methods. Coordinates are signed and may lie off the
//! canvas; whatever falls outside is clipped. When two shapes overlap, the one drawn last wins.

use crate::color::Color;

pub trait Raster {
    /// `(width, height)` of the drawable area.
    fn size(&self) -> (i32, i32);

    /// Set one pixel. Must ignore coordinates outside `size`.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Horizontal run of `w` pixels starting at `(x, y)` and going right.
    fn hline(&mut self, x: i32, y: i32, w: i32, color: Color) {
        let (width, height) = self.size();
        if w <= 0 || y < 0 || y >= height {
            return;
        }
        let end = x.saturating_add(w).min(width);
        for x in x.max(0)..end {
            self.set_pixel(x, y, color);
        }
    }

    /// Vertical run of `h` pixels starting at `(x, y)` and going down.
    fn vline(&mut self, x: i32, y: i32, h: i32, color: Color) {
        let (width, height) = self.size();
        if h <= 0 || x < 0 || x >= width {
            return;
        }
        let end = y.saturating_add(h).min(height);
        for y in y.max(0)..end {
            self.set_pixel(x, y, color);
        }
    }

    /// Bresenham line, both endpoints included. The pixels drawn do not depend on which end is
    /// given first. Each column (or row, for steep lines) gets the pixel nearest the ideal line,
    /// so only the columns or rows on the canvas are visited.
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        // Always step from the lexicographically smaller end, so x never decreases.
        let ((x0, y0), (x1, y1)) = if (x0, y0) <= (x1, y1) {
            ((x0, y0), (x1, y1))
        } else {
            ((x1, y1), (x0, y0))
        };
        let (width, height) = self.size();
        let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let sy = if y1 < y0 { -1 } else { 1 };

        if dx == 0 && dy == 0 {
            return self.set_pixel(x0 as i32, y0 as i32, color);
        }
        if dx >= dy {
            let first = (-x0).max(0);
            let last = (width as i64 - 1 - x0).min(dx);
            for t in first..=last {
                let y = y0 + sy * nearest_step(dy, t, dx);
                self.set_pixel((x0 + t) as i32, y as i32, color);
            }
        } else {
            let (first, last) = if sy > 0 {
                ((-y0).max(0), (height as i64 - 1 - y0).min(dy))
            } else {
                ((y0 - (height as i64 - 1)).max(0), y0.min(dy))
            };
            for t in first..=last {
                let x = x0 + nearest_step(dx, t, dy);
                self.set_pixel(x as i32, (y0 + sy * t) as i32, color);
            }
        }
    }

    /// Outline of the `w` by `h` box with top-left corner `(x, y)`.
    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        self.hline(x, y, w, color);
        self.vline(x, y, h, color);
        // An edge whose coordinate does not fit in an i32 is off the canvas anyway.
        if let Ok(bottom) = i32::try_from(y as i64 + h as i64 - 1) {
            self.hline(x, bottom, w, color);
        }
        if let Ok(right) = i32::try_from(x as i64 + w as i64 - 1) {
            self.vline(right, y, h, color);
        }
    }

    /// Every pixel of the `w` by `h` box with top-left corner `(x, y)`.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let (_, height) = self.size();
        if w <= 0 || h <= 0 {
            return;
        }
        for y in y.max(0)..y.saturating_add(h).min(height) {
            self.hline(x, y, w, color);
        }
    }

    /// Circle of radius `r` around `(x, y)`. A pixel belongs to the disk when its centre lies
    /// within `r + 1/2` of the centre, so everything within `r` is covered and nothing past
    /// `r + 1/2` is touched. The outline is the rim of that disk, 8-connected. A negative radius
    /// draws nothing.
    fn circle(&mut self, x: i32, y: i32, r: i32, color: Color, filled: bool) {
        if r < 0 {
            return;
        }
        // Midpoint test: dx² + dy² <= r² + r.
        let limit = r as i128 * r as i128 + r as i128;
        let half_width = |dy: i64| {
            largest_inside(r as i64, |dx| {
                dx as i128 * dx as i128 + dy as i128 * dy as i128 <= limit
            })
        };
        symmetric_spans(self, x, y, r as i64, half_width, color, filled);
    }

    /// Axis-aligned ellipse around `(x, y)` with horizontal radius `a` and vertical radius `b`.
    /// Pixel membership uses the same half-pixel margin as `circle`, so an ellipse with `a == b`
    /// is exactly the circle of that radius. A zero radius degenerates to a line; a negative one
    /// draws nothing.
    fn ellipse(&mut self, x: i32, y: i32, a: i32, b: i32, color: Color, filled: bool) {
        if a < 0 || b < 0 {
            return;
        }
        // Midpoint test against radii a + 1/2 and b + 1/2, scaled to integers with
        // A = 2a + 1, B = 2b + 1: (2dx·B)² <= A²·(B² - 4dy²). Both sides stay below 2^128.
        let big_a = 2 * a as u128 + 1;
        let big_b = 2 * b as u128 + 1;
        let half_width = |dy: i64| {
            let rest = (big_b - 2 * dy as u128) * (big_b + 2 * dy as u128);
            largest_inside(a as i64, |dx| {
                let run = 2 * dx as u128 * big_b;
                run * run <= big_a * big_a * rest
            })
        };
        symmetric_spans(self, x, y, b as i64, half_width, color, filled);
    }

    /// Triangle with the given corners. The outline is three `line`s. The filled variant sets
    /// exactly the pixels whose centres lie inside the triangle or on its edges.
    #[allow(clippy::too_many_arguments)]
    fn triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
        filled: bool,
    ) {
        if !filled {
            self.line(x0, y0, x1, y1, color);
            self.line(x1, y1, x2, y2, color);
            self.line(x2, y2, x0, y0, color);
            return;
        }

        let (_, height) = self.size();
        let edges = [((x0, y0), (x1, y1)), ((x1, y1), (x2, y2)), ((x2, y2), (x0, y0))];
        let top = y0.min(y1).min(y2).max(0);
        let bottom = y0.max(y1).max(y2).min(height - 1);
        for y in top..=bottom {
            // Intersect the scanline with each edge; the triangle's span is the hull of the
            // intersections, rounded inwards to pixel centres.
            let mut left = i64::MAX;
            let mut right = i64::MIN;
            for &((ax, ay), (bx, by)) in edges.iter() {
                if y < ay.min(by) || y > ay.max(by) {
                    continue;
                }
                let (lo, hi) = if ay == by {
                    (ax.min(bx) as i64, ax.max(bx) as i64)
                } else {
                    edge_crossing(ax, ay, bx, by, y)
                };
                left = left.min(lo);
                right = right.max(hi);
            }
            span(self, left, right, y, color);
        }
    }
}

/// `round(n * t / d)` for `0 <= n <= d`, `d > 0`, with halves rounded up.
fn nearest_step(n: i64, t: i64, d: i64) -> i64 {
    ((2 * n as i128 * t as i128 + d as i128) / (2 * d as i128)) as i64
}

/// The largest `d` in `0..=limit` for which `inside(d)` holds. `inside(0)` must hold and `inside`
/// must stay false once it turns false.
fn largest_inside<F>(limit: i64, inside: F) -> i64
where
    F: Fn(i64) -> bool,
{
    let (mut lo, mut hi) = (0, limit);
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if inside(mid) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

/// Where the scanline `y` crosses the edge `(ax, ay)`-`(bx, by)` (with `ay != by`), as the
/// `(ceil, floor)` of the exact crossing.
fn edge_crossing(ax: i32, ay: i32, bx: i32, by: i32, y: i32) -> (i64, i64) {
    let num = (bx as i128 - ax as i128) * (y as i128 - ay as i128);
    let den = by as i128 - ay as i128;
    let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
    let floor = num.div_euclid(den);
    let ceil = floor + (num.rem_euclid(den) != 0) as i128;
    ((ax as i128 + ceil) as i64, (ax as i128 + floor) as i64)
}

/// Set pixels `left..=right` of row `y`, clipped to the canvas.
fn span<R>(target: &mut R, left: i64, right: i64, y: i32, color: Color)
where
    R: Raster + ?Sized,
{
    let (width, _) = target.size();
    let (left, right) = (left.max(0), right.min(width as i64 - 1));
    if left <= right {
        target.hline(left as i32, y, (right - left + 1) as i32, color);
    }
}

/// Draw a shape that is symmetric about both axes through `(cx, cy)`. `half_width(dy)` is the
/// half width of the row `dy` away from the centre row, for `dy` in `0..=rows`, and must not
/// grow with `dy`. Only rows that land on the canvas are visited.
fn symmetric_spans<R, F>(
    target: &mut R,
    cx: i32,
    cy: i32,
    rows: i64,
    half_width: F,
    color: Color,
    filled: bool,
) where
    R: Raster + ?Sized,
    F: Fn(i64) -> i64,
{
    let (_, height) = target.size();
    let (cx, cy) = (cx as i64, cy as i64);
    let last_row = height as i64 - 1;
    let below = ((-cy).max(0)..=(last_row - cy).min(rows)).map(|dy| (dy, cy + dy));
    // The centre row is already part of `below`.
    let above = ((cy - last_row).max(1)..=cy.min(rows)).map(|dy| (dy, cy - dy));
    for (dy, y) in below.chain(above) {
        let outer = half_width(dy);
        let inner = if filled || dy == rows {
            0
        } else {
            // Rim pixels of this row are those not covered by the next row out.
            (half_width(dy + 1) + 1).min(outer)
        };
        span(target, cx + inner, cx + outer, y as i32, color);
        span(target, cx - outer, cx - inner, y as i32, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::orientation::Orientation;
    use itertools::iproduct;

    fn canvas() -> Canvas {
        Canvas::for_orientation(Orientation::Landscape)
    }

    fn lit(canvas: &Canvas) -> Vec<(i32, i32)> {
        iproduct!(0..canvas.height(), 0..canvas.width())
            .filter(|&(y, x)| canvas.get_pixel(x, y).is_on())
            .map(|(y, x)| (x, y))
            .collect()
    }

    #[test]
    fn degenerate_line_is_one_pixel() {
        let mut c = canvas();
        c.line(7, 9, 7, 9, Color::On);
        assert_eq!(lit(&c), vec![(7, 9)]);
    }

    #[test]
    fn line_includes_endpoints() {
        for &(x0, y0, x1, y1) in &[(0, 0, 127, 63), (3, 50, 90, 2), (10, 10, 10, 40), (5, 5, 60, 5)]
        {
            let mut c = canvas();
            c.line(x0, y0, x1, y1, Color::On);
            assert!(c.get_pixel(x0, y0).is_on());
            assert!(c.get_pixel(x1, y1).is_on());
            let expected = (x1 - x0).abs().max((y1 - y0).abs()) + 1;
            assert_eq!(lit(&c).len() as i32, expected);
        }
    }

    #[test]
    fn line_is_swap_symmetric() {
        for &(x0, y0, x1, y1) in &[(0, 0, 127, 63), (3, 50, 90, 2), (1, 2, 4, 40), (100, 7, 3, 8)] {
            let mut forward = canvas();
            forward.line(x0, y0, x1, y1, Color::On);
            let mut backward = canvas();
            backward.line(x1, y1, x0, y0, Color::On);
            assert_eq!(forward.buffer(), backward.buffer());
        }
    }

    #[test]
    fn line_clips() {
        let mut c = canvas();
        c.line(-10, -10, 10, 10, Color::On);
        assert_eq!(lit(&c).len(), 11);
        assert!(c.get_pixel(0, 0).is_on());
    }

    #[test]
    fn hline_vline() {
        let mut c = canvas();
        c.hline(120, 3, 20, Color::On);
        assert_eq!(lit(&c).len(), 8);
        c.fill(Color::Off);
        c.vline(3, -5, 10, Color::On);
        assert_eq!(lit(&c), (0..5).map(|y| (3, y)).collect::<Vec<_>>());
        c.fill(Color::Off);
        c.hline(3, 3, 0, Color::On);
        c.hline(3, 3, -4, Color::On);
        c.vline(3, 3, 0, Color::On);
        c.vline(3, 3, -1, Color::On);
        assert!(lit(&c).is_empty());
    }

    #[test]
    fn rect_outline_and_fill() {
        let mut c = canvas();
        c.rect(10, 10, 5, 4, Color::On);
        // 2 * 5 + 2 * (4 - 2) edge pixels.
        assert_eq!(lit(&c).len(), 14);
        assert!(!c.get_pixel(12, 12).is_on());
        c.fill(Color::Off);
        c.fill_rect(10, 10, 5, 4, Color::On);
        assert_eq!(lit(&c).len(), 20);
        for (y, x) in iproduct!(10..14, 10..15) {
            assert!(c.get_pixel(x, y).is_on());
        }
        c.fill(Color::Off);
        c.rect(10, 10, 0, 4, Color::On);
        c.fill_rect(10, 10, 5, -1, Color::On);
        assert!(lit(&c).is_empty());
    }

    #[test]
    fn one_pixel_rect() {
        let mut c = canvas();
        c.rect(4, 4, 1, 1, Color::On);
        assert_eq!(lit(&c), vec![(4, 4)]);
    }

    fn distance(x: i32, y: i32, cx: i32, cy: i32) -> f64 {
        (((x - cx).pow(2) + (y - cy).pow(2)) as f64).sqrt()
    }

    #[test]
    fn filled_circle_has_no_gaps_or_overshoot() {
        for &r in &[5, 10, 20] {
            let (cx, cy) = (64, 32);
            let mut c = canvas();
            c.circle(cx, cy, r, Color::On, true);
            for (y, x) in iproduct!(0..64, 0..128) {
                let d = distance(x, y, cx, cy);
                if d <= r as f64 {
                    assert!(c.get_pixel(x, y).is_on(), "gap at ({}, {}) r={}", x, y, r);
                }
                if d > r as f64 + 0.5 {
                    assert!(!c.get_pixel(x, y).is_on(), "overshoot at ({}, {}) r={}", x, y, r);
                }
            }
        }
    }

    #[test]
    fn circle_outline_is_rim_of_disk() {
        for &r in &[1, 4, 13, 25] {
            let (cx, cy) = (60, 31);
            let mut disk = canvas();
            disk.circle(cx, cy, r, Color::On, true);
            let mut rim = canvas();
            rim.circle(cx, cy, r, Color::On, false);
            for (y, x) in iproduct!(0..64, 0..128) {
                if rim.get_pixel(x, y).is_on() {
                    assert!(disk.get_pixel(x, y).is_on());
                    let d = distance(x, y, cx, cy);
                    assert!(d > r as f64 - 1.5 && d <= r as f64 + 0.5);
                }
            }
            // Extremes of the rim.
            for &(x, y) in &[(cx + r, cy), (cx - r, cy), (cx, cy + r), (cx, cy - r)] {
                assert!(rim.get_pixel(x, y).is_on());
            }
            assert!(!rim.get_pixel(cx, cy).is_on() || r == 0);
        }
    }

    #[test]
    fn circle_is_symmetric() {
        let mut c = canvas();
        c.circle(40, 30, 17, Color::On, false);
        for (y, x) in iproduct!(0..64, 0..128) {
            let (dx, dy) = (x - 40, y - 30);
            let on = c.get_pixel(x, y).is_on();
            assert_eq!(on, c.get_pixel(40 - dx, 30 + dy).is_on());
            assert_eq!(on, c.get_pixel(40 + dx, 30 - dy).is_on());
            if (40 + dy) >= 0 && (30 + dx) >= 0 && (30 + dx) < 64 {
                assert_eq!(on, c.get_pixel(40 + dy, 30 + dx).is_on());
            }
        }
    }

    #[test]
    fn tiny_and_negative_circles() {
        let mut c = canvas();
        c.circle(5, 5, 0, Color::On, true);
        assert_eq!(lit(&c), vec![(5, 5)]);
        c.fill(Color::Off);
        c.circle(5, 5, -3, Color::On, true);
        c.circle(5, 5, -3, Color::On, false);
        assert!(lit(&c).is_empty());
    }

    #[test]
    fn ellipse_with_equal_radii_is_a_circle() {
        for &filled in &[true, false] {
            let mut circle = canvas();
            circle.circle(50, 30, 14, Color::On, filled);
            let mut ellipse = canvas();
            ellipse.ellipse(50, 30, 14, 14, Color::On, filled);
            assert_eq!(circle.buffer(), ellipse.buffer());
        }
    }

    #[test]
    fn filled_ellipse_matches_reference() {
        for &(a, b) in &[(30, 10), (8, 25), (20, 20), (3, 1)] {
            let (cx, cy) = (64, 32);
            let mut c = canvas();
            c.ellipse(cx, cy, a, b, Color::On, true);
            for (y, x) in iproduct!(0..64, 0..128) {
                let (dx, dy) = ((x - cx) as f64, (y - cy) as f64);
                let inner = (dx / a as f64).powi(2) + (dy / b as f64).powi(2);
                let outer = (dx / (a as f64 + 0.5)).powi(2) + (dy / (b as f64 + 0.5)).powi(2);
                if inner <= 1.0 {
                    assert!(c.get_pixel(x, y).is_on(), "gap at ({}, {})", x, y);
                }
                if outer > 1.0 {
                    assert!(!c.get_pixel(x, y).is_on(), "overshoot at ({}, {})", x, y);
                }
            }
        }
    }

    #[test]
    fn flat_ellipses_are_lines() {
        let mut c = canvas();
        c.ellipse(20, 20, 6, 0, Color::On, false);
        assert_eq!(lit(&c), (14..=26).map(|x| (x, 20)).collect::<Vec<_>>());
        c.fill(Color::Off);
        c.ellipse(20, 20, 0, 3, Color::On, true);
        assert_eq!(lit(&c), (17..=23).map(|y| (20, y)).collect::<Vec<_>>());
        c.fill(Color::Off);
        c.ellipse(20, 20, -1, 3, Color::On, true);
        assert!(lit(&c).is_empty());
    }

    // Sign of the cross product of (b - a) and (p - a).
    fn side(a: (i32, i32), b: (i32, i32), p: (i32, i32)) -> i32 {
        ((b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)).signum()
    }

    fn inside_or_on(v: [(i32, i32); 3], p: (i32, i32)) -> bool {
        let s = [side(v[0], v[1], p), side(v[1], v[2], p), side(v[2], v[0], p)];
        !(s.contains(&1) && s.contains(&-1))
    }

    #[test]
    fn filled_triangle_covers_exactly_its_inside() {
        let v = [(10, 55), (30, 20), (50, 55)];
        let mut c = canvas();
        c.triangle(v[0].0, v[0].1, v[1].0, v[1].1, v[2].0, v[2].1, Color::On, true);
        for (y, x) in iproduct!(0..64, 0..128) {
            assert_eq!(
                c.get_pixel(x, y).is_on(),
                inside_or_on(v, (x, y)),
                "at ({}, {})",
                x,
                y
            );
        }
    }

    #[test]
    fn filled_triangle_any_vertex_order() {
        let v = [(3, 60), (120, 41), (64, 2)];
        let mut reference = canvas();
        reference.triangle(v[0].0, v[0].1, v[1].0, v[1].1, v[2].0, v[2].1, Color::On, true);
        for &(i, j, k) in &[(1, 0, 2), (2, 1, 0), (0, 2, 1)] {
            let mut c = canvas();
            c.triangle(v[i].0, v[i].1, v[j].0, v[j].1, v[k].0, v[k].1, Color::On, true);
            assert_eq!(c.buffer(), reference.buffer());
        }
        for (y, x) in iproduct!(0..64, 0..128) {
            assert_eq!(reference.get_pixel(x, y).is_on(), inside_or_on(v, (x, y)));
        }
    }

    #[test]
    fn triangle_outline_hits_corners() {
        let mut c = canvas();
        c.triangle(10, 55, 30, 20, 50, 55, Color::On, false);
        for &(x, y) in &[(10, 55), (30, 20), (50, 55)] {
            assert!(c.get_pixel(x, y).is_on());
        }
        assert!(!c.get_pixel(30, 45).is_on());
        // The bottom edge is a straight run.
        for x in 10..=50 {
            assert!(c.get_pixel(x, 55).is_on());
        }
    }

    #[test]
    fn flat_and_clipped_triangles() {
        let mut c = canvas();
        c.triangle(5, 5, 9, 5, 7, 5, Color::On, true);
        assert_eq!(lit(&c), (5..=9).map(|x| (x, 5)).collect::<Vec<_>>());
        c.fill(Color::Off);
        let v = [(-20, -20), (200, 10), (10, 200)];
        c.triangle(v[0].0, v[0].1, v[1].0, v[1].1, v[2].0, v[2].1, Color::On, true);
        assert!(c.get_pixel(0, 0).is_on());
        for (y, x) in iproduct!(0..64, 0..128) {
            assert_eq!(c.get_pixel(x, y).is_on(), inside_or_on(v, (x, y)));
        }
    }

    #[test]
    fn last_write_wins() {
        let mut c = canvas();
        c.fill_rect(0, 0, 20, 20, Color::On);
        c.circle(10, 10, 4, Color::Off, true);
        assert!(!c.get_pixel(10, 10).is_on());
        assert!(c.get_pixel(0, 0).is_on());
        c.line(0, 10, 19, 10, Color::On);
        assert!(c.get_pixel(10, 10).is_on());
    }

    #[test]
    fn huge_ellipse_is_clipped() {
        let mut c = canvas();
        c.ellipse(64, 32, 30_000, 30_000, Color::On, false);
        assert!(lit(&c).is_empty());
        c.ellipse(64, 32, 30_000, 30_000, Color::On, true);
        assert_eq!(lit(&c).len(), 128 * 64);
        c.fill(Color::Off);
        c.ellipse(64, 32, i32::MAX, i32::MAX, Color::On, true);
        assert_eq!(lit(&c).len(), 128 * 64);
    }

    #[test]
    fn huge_rim_crossing_the_canvas() {
        let (cx, cy, r) = (30_064, 32, 30_000);
        let mut circle = canvas();
        circle.circle(cx, cy, r, Color::On, false);
        let mut ellipse = canvas();
        ellipse.ellipse(cx, cy, r, r, Color::On, false);
        assert_eq!(circle.buffer(), ellipse.buffer());
        let rim = lit(&circle);
        assert!(rim.len() >= 64);
        for (x, y) in rim {
            let d = distance(x, y, cx, cy);
            assert!(d > r as f64 - 1.5 && d <= r as f64 + 0.5, "({}, {})", x, y);
        }
    }

    #[test]
    fn extreme_lines_are_clipped() {
        let mut c = canvas();
        c.line(i32::MIN, 5, i32::MAX, 5, Color::On);
        assert_eq!(lit(&c), (0..128).map(|x| (x, 5)).collect::<Vec<_>>());

        c.fill(Color::Off);
        c.line(5, i32::MAX, 5, i32::MIN, Color::On);
        assert_eq!(lit(&c), (0..64).map(|y| (5, y)).collect::<Vec<_>>());

        c.fill(Color::Off);
        c.line(i32::MIN, i32::MIN, i32::MAX, i32::MAX, Color::On);
        assert_eq!(lit(&c), (0..64).map(|k| (k, k)).collect::<Vec<_>>());

        // Only the columns on the canvas are stepped through.
        c.fill(Color::Off);
        c.line(0, 0, 1_000_000_000, 1, Color::On);
        assert_eq!(lit(&c), (0..128).map(|x| (x, 0)).collect::<Vec<_>>());
    }

    #[test]
    fn extreme_boxes_are_clipped() {
        let mut c = canvas();
        c.rect(10, i32::MAX, 5, 5, Color::On);
        c.rect(i32::MAX, 10, 5, 5, Color::On);
        c.rect(i32::MIN, i32::MIN, i32::MAX, i32::MAX, Color::On);
        c.hline(i32::MAX, 0, i32::MAX, Color::On);
        c.vline(0, i32::MIN, 10, Color::On);
        c.fill_rect(i32::MIN, i32::MIN, i32::MAX, i32::MAX, Color::On);
        assert!(lit(&c).is_empty());

        c.rect(3, 4, i32::MAX, i32::MAX, Color::On);
        // Top and left edges only; they share the corner.
        assert_eq!(lit(&c).len(), 125 + 60 - 1);

        c.fill(Color::Off);
        c.fill_rect(-10, -10, i32::MAX, i32::MAX, Color::On);
        assert_eq!(lit(&c).len(), 128 * 64);
    }

    #[test]
    fn extreme_circles_are_clipped() {
        let mut c = canvas();
        c.circle(10, i32::MAX - 2, 5, Color::On, true);
        c.circle(i32::MIN, 32, i32::MAX, Color::On, true);
        c.circle(0, 0, i32::MAX, Color::On, false);
        c.ellipse(i32::MAX, i32::MIN, i32::MAX, i32::MAX, Color::On, true);
        c.ellipse(i32::MIN, i32::MAX, i32::MAX, 0, Color::On, false);
        assert!(lit(&c).is_empty());

        c.circle(0, 0, i32::MAX, Color::On, true);
        assert_eq!(lit(&c).len(), 128 * 64);
    }

    #[test]
    fn extreme_triangles_are_clipped() {
        let mut c = canvas();
        c.triangle(i32::MIN, 0, i32::MAX, 0, 0, 10, Color::On, true);
        let mut expected: Vec<_> = iproduct!(0..10, 0..128).map(|(y, x)| (x, y)).collect();
        expected.push((0, 10));
        assert_eq!(lit(&c), expected);

        c.fill(Color::Off);
        let (lo, hi) = (i32::MIN, i32::MAX);
        c.triangle(lo, lo, hi, hi, lo, hi, Color::On, false);
        assert_eq!(lit(&c), (0..64).map(|k| (k, k)).collect::<Vec<_>>());
    }
}
