//! Border edge rasterizers.
//!
//! [§ 4.2 Border Style](https://www.w3.org/TR/css-backgrounds-3/#border-style)
//!
//! A border box is split into four edge rectangles. The top and bottom edges
//! span the full border-box width; the left and right edges fill the height
//! between them, so corners belong to the horizontal edges. Each edge is then
//! handed to the rasterizer for its style.

use ochre_css::{BorderStyle, ColorValue, EdgeSizes, Rect};

use crate::canvas::Canvas;
use crate::raster::PixelRect;

/// Dash length along the edge.
const DASH_RUN: i32 = 6;
/// Gap between dashes.
const DASH_GAP: i32 = 3;
/// Dot length along the edge.
const DOT_RUN: i32 = 2;
/// Gap between dots.
const DOT_GAP: i32 = 2;

/// Which way an edge runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeAxis {
    /// Top and bottom edges: runs along x, thickness along y.
    Horizontal,
    /// Left and right edges: runs along y, thickness along x.
    Vertical,
}

impl EdgeAxis {
    const fn length(self, edge: PixelRect) -> i32 {
        match self {
            Self::Horizontal => edge.width,
            Self::Vertical => edge.height,
        }
    }

    const fn thickness(self, edge: PixelRect) -> i32 {
        match self {
            Self::Horizontal => edge.height,
            Self::Vertical => edge.width,
        }
    }
}

impl Canvas {
    /// Draw all four edges of a border box with one color and style.
    ///
    /// Edge widths are in CSS pixels and snap to device pixels the same way
    /// rectangles do. `none` and `hidden` draw nothing.
    pub fn draw_border(
        &mut self,
        border_box: Rect,
        widths: EdgeSizes,
        color: ColorValue,
        style: BorderStyle,
    ) {
        if !style.is_visible() || color.is_transparent() {
            return;
        }
        let left = border_box.x;
        let top = border_box.y;
        let right = border_box.right();
        let bottom = border_box.bottom();
        let top_width = widths.top.max(0.0);
        let bottom_width = widths.bottom.max(0.0);

        let edges = [
            (
                PixelRect::from_edges(left, top, right, top + top_width),
                EdgeAxis::Horizontal,
            ),
            (
                PixelRect::from_edges(left, bottom - bottom_width, right, bottom),
                EdgeAxis::Horizontal,
            ),
            (
                PixelRect::from_edges(
                    left,
                    top + top_width,
                    left + widths.left.max(0.0),
                    bottom - bottom_width,
                ),
                EdgeAxis::Vertical,
            ),
            (
                PixelRect::from_edges(
                    right - widths.right.max(0.0),
                    top + top_width,
                    right,
                    bottom - bottom_width,
                ),
                EdgeAxis::Vertical,
            ),
        ];

        for (edge, axis) in edges {
            self.draw_border_edge(edge, color, style, axis);
        }
    }

    /// Draw one edge with the rasterizer for `style`.
    ///
    /// Styles without a dedicated rasterizer paint solid.
    pub fn draw_border_edge(
        &mut self,
        edge: PixelRect,
        color: ColorValue,
        style: BorderStyle,
        axis: EdgeAxis,
    ) {
        match style {
            BorderStyle::None | BorderStyle::Hidden => {}
            BorderStyle::Dashed => self.draw_dashed_border(edge, color, axis),
            BorderStyle::Dotted => self.draw_dotted_border(edge, color, axis),
            BorderStyle::Double => self.draw_double_border(edge, color, axis),
            BorderStyle::Solid
            | BorderStyle::Groove
            | BorderStyle::Ridge
            | BorderStyle::Inset
            | BorderStyle::Outset => self.draw_solid_border(edge, color),
        }
    }

    /// A solid edge is one filled rectangle.
    pub fn draw_solid_border(&mut self, edge: PixelRect, color: ColorValue) {
        self.fill_pixel_rect(edge, color);
    }

    /// Dashes of 6px separated by 3px gaps. The last dash is cut at the end
    /// of the edge.
    pub fn draw_dashed_border(&mut self, edge: PixelRect, color: ColorValue, axis: EdgeAxis) {
        self.draw_broken_edge(edge, color, axis, DASH_RUN, DASH_GAP);
    }

    /// Dots of 2px separated by 2px gaps.
    pub fn draw_dotted_border(&mut self, edge: PixelRect, color: ColorValue, axis: EdgeAxis) {
        self.draw_broken_edge(edge, color, axis, DOT_RUN, DOT_GAP);
    }

    /// Two parallel lines with a gap between them.
    ///
    /// The thickness is split into thirds (at least 1px each); the outer and
    /// inner thirds are painted and the middle is left alone. Edges thinner
    /// than three pixels degrade to a solid edge.
    pub fn draw_double_border(&mut self, edge: PixelRect, color: ColorValue, axis: EdgeAxis) {
        if edge.is_empty() {
            return;
        }
        let thickness = axis.thickness(edge);
        let band = (thickness / 3).max(1);
        let inner_offset = thickness.saturating_sub(band);

        let (outer, inner) = match axis {
            EdgeAxis::Horizontal => (
                PixelRect::new(edge.x, edge.y, edge.width, band),
                PixelRect::new(edge.x, edge.y.saturating_add(inner_offset), edge.width, band),
            ),
            EdgeAxis::Vertical => (
                PixelRect::new(edge.x, edge.y, band, edge.height),
                PixelRect::new(edge.x.saturating_add(inner_offset), edge.y, band, edge.height),
            ),
        };

        self.fill_pixel_rect(outer, color);
        if inner != outer {
            self.fill_pixel_rect(inner, color);
        }
    }

    /// Repeat `run`-long segments separated by `gap` along the edge.
    ///
    /// Only the periods that can land on the canvas are visited.
    fn draw_broken_edge(
        &mut self,
        edge: PixelRect,
        color: ColorValue,
        axis: EdgeAxis,
        run: i32,
        gap: i32,
    ) {
        if edge.is_empty() || self.clip_rect(edge).is_none() {
            return;
        }
        let period = i64::from(run) + i64::from(gap);
        let length = i64::from(axis.length(edge));
        let (start, limit) = match axis {
            EdgeAxis::Horizontal => (i64::from(edge.x), i64::from(self.width())),
            EdgeAxis::Vertical => (i64::from(edge.y), i64::from(self.height())),
        };

        let first_visible = (-start).max(0);
        let end = length.min(limit - start);
        let mut offset = first_visible / period * period;

        while offset < end {
            let span = i64::from(run).min(length - offset);
            let (Ok(along), Ok(span)) = (i32::try_from(start + offset), i32::try_from(span))
            else {
                break;
            };
            let segment = match axis {
                EdgeAxis::Horizontal => PixelRect::new(along, edge.y, span, edge.height),
                EdgeAxis::Vertical => PixelRect::new(edge.x, along, edge.width, span),
            };
            self.fill_pixel_rect(segment, color);
            offset += period;
        }
    }
}
