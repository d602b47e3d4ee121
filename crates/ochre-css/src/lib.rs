//! Box tree input contract and display list builder for the Ochre painter.
//!
//! # Scope
//!
//! This crate implements:
//! - **Style values** ([CSS Color Level 4](https://www.w3.org/TR/css-color-4/),
//!   [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/))
//!   - Colors (hex, named), resolved pixel lengths, border styles
//!   - Per-box computed style lookup by property name
//!
//! - **Layout tree** ([CSS Box Model Level 3](https://www.w3.org/TR/css-box-3/))
//!   - Box dimensions as produced by the layout pass
//!   - Stacking context collection and ordering
//!
//! - **Painting** ([CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html))
//!   - Display list of background, border and text commands in painting order
//!
//! # Not Yet Implemented
//!
//! - The full seven-layer Appendix E ordering (floats and inline content are
//!   not sequenced separately)
//! - Per-edge border colors and styles (the top edge applies to all four)
//! - rgb(), hsl() color functions

/// Box model and layout tree per [CSS Box Model Level 3](https://www.w3.org/TR/css-box-3/).
pub mod layout;
/// Display list and painting per [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html).
pub mod paint;
/// Computed style representation per [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/).
pub mod style;

// Re-exports for convenience
pub use layout::{
    BoxDimensions, BoxType, EdgeSizes, LayoutBox, Rect, StackingContextEntry,
    collect_stacking_contexts, sort_stacking_contexts,
};
pub use paint::{DisplayCommand, DisplayList, Painter};
pub use style::{
    BorderStyle, ColorParseError, ColorValue, ComputedStyle, DEFAULT_FONT_SIZE_PX, StyleValue,
    parse_px,
};
