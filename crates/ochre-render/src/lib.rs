//! Software rasterizer for the Ochre painter.
//!
//! # Architecture
//!
//! The canvas is the final stage in the pipeline:
//!
//! ```text
//! Layout → Paint → Raster
//!            ↓        ↓
//!      DisplayList → Pixels
//! ```
//!
//! [`Canvas::paint`] builds a display list with [`ochre_css::Painter`] and
//! executes it. The canvas knows nothing about CSS beyond the commands
//! themselves: every primitive is implemented here, without an external
//! graphics library, and none of them can fail.
//!
//! # Modules
//!
//! - [`canvas`] - pixel buffer, point/rect primitives, compositing, export
//! - [`raster`] - integer rectangles, lines and circles
//! - [`border`] - solid, dashed, dotted and double border edges
//! - [`bitmap_font`] - the built-in 5×7 glyph table
//! - [`text`] - scaled bitmap text
//! - [`renderer`] - display list execution

pub mod bitmap_font;
pub mod border;
pub mod canvas;
pub mod raster;
pub mod renderer;
pub mod text;

pub use border::EdgeAxis;
pub use canvas::{Canvas, MAX_CANVAS_DIMENSION};
pub use raster::PixelRect;
pub use text::{glyph_scale, is_bold, text_width};
