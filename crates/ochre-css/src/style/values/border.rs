//! CSS Border values
//!
//! [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
///
/// "<line-style> = none | hidden | dotted | dashed | solid | double | groove |
/// ridge | inset | outset"
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// "No border. Color and width are ignored."
    None,
    /// "Same as none, but has different behavior in the border conflict
    /// resolution for table elements."
    Hidden,
    /// "A series of round dots."
    Dotted,
    /// "A series of square-ended dashes."
    Dashed,
    /// "A single line segment."
    #[default]
    Solid,
    /// "Two parallel solid lines with some space between them."
    Double,
    /// "Looks as if it were carved in the canvas."
    Groove,
    /// "Looks as if it were coming out of the canvas."
    Ridge,
    /// "Looks as if the content on the inside of the border is sunken into the canvas."
    Inset,
    /// "Looks as if the content on the inside of the border is coming out of the canvas."
    Outset,
}

impl BorderStyle {
    /// `none` and `hidden` draw nothing.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::None | Self::Hidden)
    }

    /// Whether the raster stage has a dedicated edge rasterizer for this style.
    #[must_use]
    pub const fn has_rasterizer(self) -> bool {
        matches!(self, Self::Solid | Self::Dashed | Self::Dotted | Self::Double)
    }
}
