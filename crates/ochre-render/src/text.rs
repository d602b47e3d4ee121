//! Scaled bitmap text.
//!
//! Glyphs from [`crate::bitmap_font`] are scaled by a factor
//! derived from the font size and painted block by block with blended
//! writes. There is no shaping, kerning or line breaking: text is a single
//! run advancing left to right.

use ochre_common::warning::warn_once;
use ochre_css::ColorValue;

use crate::bitmap_font::{
    FALLBACK_CHAR, GLYPH_HEIGHT, GLYPH_WIDTH, Glyph, fallback_glyph, glyph, is_set,
};
use crate::canvas::Canvas;
use crate::raster::PixelRect;

/// Blank source columns between glyphs.
const GLYPH_SPACING: f32 = 1.0;

/// [§ 3.2 'font-weight'](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
///
/// Keywords that select the synthesized bold face.
const BOLD_WEIGHTS: [&str; 4] = ["bold", "700", "800", "900"];

/// Device pixels per glyph source pixel: `max(font_size / 7, 1)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn glyph_scale(font_size: f32) -> f32 {
    (font_size / GLYPH_HEIGHT as f32).max(1.0)
}

/// Horizontal distance from one glyph origin to the next.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn char_advance(font_size: f32) -> f32 {
    let scale = glyph_scale(font_size);
    (GLYPH_WIDTH as f32).mul_add(scale, GLYPH_SPACING * scale)
}

/// Width of `text` when drawn at `font_size`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * char_advance(font_size)
}

/// Whether a `font-weight` keyword selects bold.
#[must_use]
pub fn is_bold(font_weight: &str) -> bool {
    let weight = font_weight.trim();
    BOLD_WEIGHTS
        .iter()
        .any(|bold| weight.eq_ignore_ascii_case(bold))
}

impl Canvas {
    /// Draw a single line of text with its top-left corner at `(x, y)`.
    ///
    /// Characters outside printable ASCII draw as `?` and are reported once.
    /// Bold is synthesized by painting every pixel a second time one device
    /// pixel to the right.
    pub fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font_size: f32,
        color: ColorValue,
        font_weight: &str,
    ) {
        if color.is_transparent() {
            return;
        }
        let scale = glyph_scale(font_size);
        let advance = char_advance(font_size);
        let bold = is_bold(font_weight);

        let mut cursor = x;
        for ch in text.chars() {
            let glyph = glyph(ch).unwrap_or_else(|| {
                warn_once(
                    "Text",
                    &format!("no glyph for {ch:?}, drawing '{FALLBACK_CHAR}' instead"),
                );
                fallback_glyph()
            });
            self.draw_glyph(glyph, cursor, y, scale, color, bold);
            cursor += advance;
        }
    }

    fn draw_glyph(
        &mut self,
        glyph: &Glyph,
        x: f32,
        y: f32,
        scale: f32,
        color: ColorValue,
        bold: bool,
    ) {
        for row in 0..GLYPH_HEIGHT {
            let (y0, y1) = block_span(y, row, scale);
            for col in (0..GLYPH_WIDTH).filter(|col| is_set(glyph, row, *col)) {
                let (x0, x1) = block_span(x, col, scale);
                let block = PixelRect::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0));
                self.fill_pixel_rect(block, color);
                if bold {
                    let shifted = PixelRect {
                        x: block.x.saturating_add(1),
                        ..block
                    };
                    self.fill_pixel_rect(shifted, color);
                }
            }
        }
    }
}

/// Device pixel range covered by source pixel `index` along one axis.
///
/// Always at least one pixel wide so small fonts stay legible.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn block_span(origin: f32, index: usize, scale: f32) -> (i32, i32) {
    let start = (index as f32).mul_add(scale, origin).floor() as i32;
    let end = ((index + 1) as f32).mul_add(scale, origin).floor() as i32;
    (start, end.max(start.saturating_add(1)))
}
