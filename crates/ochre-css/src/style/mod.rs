//! Computed style as seen by the painter.
//!
//! [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//!
//! The cascade runs upstream; the painter only looks values up by property
//! name. Every lookup tolerates a missing value.

mod computed;
mod values;

pub use computed::{ComputedStyle, StyleValue};
pub use values::{BorderStyle, ColorParseError, ColorValue, DEFAULT_FONT_SIZE_PX, parse_px};
