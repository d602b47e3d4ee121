//! CSS Length values
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! Lengths reach the painter already resolved to device pixels, so only the
//! `px` unit (or a bare number) is understood here.

/// User agent default font size.
/// [§ 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
pub const DEFAULT_FONT_SIZE_PX: f32 = 16.0;

/// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
///
/// Parse a resolved length such as `"12px"`, `"12.5"` or `"0"`.
#[must_use]
pub fn parse_px(input: &str) -> Option<f32> {
    let trimmed = input.trim();
    let number = trimmed
        .strip_suffix("px")
        .or_else(|| trimmed.strip_suffix("PX"))
        .unwrap_or(trimmed);
    number.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}
