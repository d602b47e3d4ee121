//! The laid-out box tree consumed by the painter.
//!
//! # Relevant Specifications
//!
//! - [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//! - [CSS 2.1 Visual Formatting Model](https://www.w3.org/TR/CSS2/visuren.html)
//! - [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html)
//!
//! # Module Structure
//!
//! - [`box_model`] - Box dimensions, rectangles, and edge sizes
//! - [`layout_box`] - Layout box types
//! - [`stacking`] - Stacking context collection and ordering

pub mod box_model;
pub mod layout_box;
pub mod stacking;

// Re-exports for convenience
pub use box_model::{BoxDimensions, EdgeSizes, Rect};
pub use layout_box::{BoxType, LayoutBox};
pub use stacking::{StackingContextEntry, collect_stacking_contexts, sort_stacking_contexts};
