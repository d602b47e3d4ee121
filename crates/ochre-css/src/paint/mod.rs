//! CSS Painting
//!
//! [CSS 2.1 Appendix E - Elaborate description of Stacking Contexts](https://www.w3.org/TR/CSS2/zindex.html)
//!
//! This module implements the painting phase, which converts a layout tree into
//! a display list of drawing commands. The display list is then executed by the
//! software canvas in `ochre-render`.
//!
//! # Architecture
//!
//! ```text
//! Layout → Paint → Raster
//!            ↓
//!      DisplayList
//! ```
//!
//! # Painting order
//!
//! Ordering is a simplified two-pass version of Appendix E: stacking contexts
//! are sorted by stack level, then each one is painted as a single in-order
//! walk of its subtree. Negative-z children, block descendants, floats, inline
//! content and positive-z children are not sequenced separately.

mod display_list;
mod painter;

pub use display_list::{DisplayCommand, DisplayList};
pub use painter::Painter;
