//! Integer rectangles, lines and circles.
//!
//! Line and circle math runs in `i64` so endpoints near the `i32` limits
//! cannot overflow; every plotted point still goes through the canvas bounds
//! check.

use ochre_css::{ColorValue, Rect};

use crate::canvas::Canvas;

/// An axis-aligned rectangle in device pixels.
///
/// A rectangle with zero or negative width or height is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl PixelRect {
    /// Create a rectangle from its origin and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Snap a layout rectangle to device pixels.
    #[must_use]
    pub fn from_rect(rect: &Rect) -> Self {
        Self::from_edges(rect.x, rect.y, rect.right(), rect.bottom())
    }

    /// Snap fractional edges to device pixels.
    ///
    /// Each edge rounds independently, so two rectangles sharing an edge
    /// never overlap or leave a gap. Non-finite edges collapse to an empty
    /// rectangle.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        if !(left.is_finite() && top.is_finite() && right.is_finite() && bottom.is_finite()) {
            return Self::default();
        }
        let (x0, y0) = (left.round() as i32, top.round() as i32);
        let (x1, y1) = (right.round() as i32, bottom.round() as i32);
        Self::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }

    /// Exclusive right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Whether the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// The overlap of two rectangles, if any.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        if self.is_empty() || other.is_empty() {
            return None;
        }
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        (x1 > x0 && y1 > y0)
            .then(|| Self::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0)))
    }
}

impl Canvas {
    /// Draw a one-pixel line with Bresenham's algorithm.
    ///
    /// Both endpoints are painted. Writes are blended.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: ColorValue) {
        let (mut x, mut y) = (i64::from(x1), i64::from(y1));
        let (x_end, y_end) = (i64::from(x2), i64::from(y2));

        let dx = (x_end - x).abs();
        let dy = -(y_end - y).abs();
        let step_x = if x < x_end { 1 } else { -1 };
        let step_y = if y < y_end { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, color);
            if x == x_end && y == y_end {
                break;
            }
            let doubled = 2 * err;
            if doubled >= dy {
                err += dy;
                x += step_x;
            }
            if doubled <= dx {
                err += dx;
                y += step_y;
            }
        }
    }

    /// Draw a circle outline with the midpoint algorithm.
    ///
    /// Points shared between octants are plotted once so translucent colors
    /// do not darken them. Negative radii draw nothing.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, color: ColorValue) {
        if radius < 0 {
            return;
        }
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        for (x, y) in midpoint_octant(i64::from(radius)) {
            let mut points = [
                (cx + x, cy + y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx - x, cy + y),
                (cx - x, cy - y),
                (cx - y, cy - x),
                (cx + y, cy - x),
                (cx + x, cy - y),
            ];
            points.sort_unstable();
            let mut previous = None;
            for point in points {
                if previous != Some(point) {
                    self.plot(point.0, point.1, color);
                }
                previous = Some(point);
            }
        }
    }

    /// Fill a circle with horizontal spans.
    ///
    /// Each row is painted exactly once, spanning the widest extent the
    /// octants reach on it. Negative radii draw nothing.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: ColorValue) {
        if radius < 0 || color.is_transparent() {
            return;
        }
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        let rows = usize::try_from(self.height()).unwrap_or(usize::MAX);
        let mut half_widths: Vec<Option<i64>> = vec![None; rows];

        let mut widen = |row: i64, half: i64| {
            if let Some(slot) = usize::try_from(row)
                .ok()
                .and_then(|row| half_widths.get_mut(row))
            {
                *slot = Some(slot.map_or(half, |current| current.max(half)));
            }
        };
        for (x, y) in midpoint_octant(i64::from(radius)) {
            widen(cy + y, x);
            widen(cy - y, x);
            widen(cy + x, y);
            widen(cy - x, y);
        }

        for (row, half) in half_widths.into_iter().enumerate() {
            if let (Some(half), Ok(row)) = (half, i64::try_from(row)) {
                self.fill_span(row, cx - half, cx + half, color);
            }
        }
    }

    fn plot(&mut self, x: i64, y: i64, color: ColorValue) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set_pixel_blend(x, y, color);
        }
    }

    /// Fill the inclusive span `x0..=x1` on `row`.
    fn fill_span(&mut self, row: i64, x0: i64, x1: i64, color: ColorValue) {
        let last = i64::from(self.width()) - 1;
        let (x0, x1) = (x0.max(0), x1.min(last));
        if x0 > x1 {
            return;
        }
        if let (Ok(x), Ok(y), Ok(width)) = (
            i32::try_from(x0),
            i32::try_from(row),
            i32::try_from(x1 - x0 + 1),
        ) {
            self.fill_pixel_rect(PixelRect::new(x, y, width, 1), color);
        }
    }
}

/// Points of the first octant of a midpoint circle, from `(r, 0)` until
/// `x < y`.
const fn midpoint_octant(radius: i64) -> MidpointOctant {
    MidpointOctant {
        x: radius,
        y: 0,
        decision: 1 - radius,
    }
}

struct MidpointOctant {
    x: i64,
    y: i64,
    decision: i64,
}

impl Iterator for MidpointOctant {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x < self.y {
            return None;
        }
        let point = (self.x, self.y);
        self.y += 1;
        if self.decision < 0 {
            self.decision += 2 * self.y + 1;
        } else {
            self.x -= 1;
            self.decision += 2 * (self.y - self.x) + 1;
        }
        Some(point)
    }
}
