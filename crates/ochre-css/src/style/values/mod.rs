//! CSS Value types and parsing
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//! - [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/)

mod border;
mod color;
mod length;

pub use border::BorderStyle;
pub use color::{ColorParseError, ColorValue};
pub use length::{DEFAULT_FONT_SIZE_PX, parse_px};
