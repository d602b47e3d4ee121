//! CSS Computed Style
//!
//! [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//! "The computed value is the result of resolving the specified value..."

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::values::{ColorValue, parse_px};

/// A single computed property value.
///
/// The style resolver hands over the value's keyword together with whatever it
/// resolved to. Each consumer picks the facet it needs: `background-color`
/// reads [`StyleValue::color`], `font-size` reads [`StyleValue::length`],
/// `border-top-style` reads [`StyleValue::keyword`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct StyleValue {
    /// The value as written, trimmed and ASCII-lowercased.
    pub keyword: String,
    /// The value resolved as a color, if it is one.
    pub color: Option<ColorValue>,
    /// The value resolved as a length in device pixels, if it is one.
    pub length: Option<f32>,
}

impl StyleValue {
    /// Resolve a raw value string into every facet it can represent.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let keyword = raw.trim().to_ascii_lowercase();
        let color = ColorValue::parse(&keyword).ok();
        let length = parse_px(&keyword);
        Self {
            keyword,
            color,
            length,
        }
    }

    /// A bare keyword with no resolved color or length.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self {
        Self {
            keyword: keyword.trim().to_ascii_lowercase(),
            color: None,
            length: None,
        }
    }

    /// An already-resolved color.
    #[must_use]
    pub fn from_color(color: ColorValue) -> Self {
        Self {
            keyword: color.to_hex_string(),
            color: Some(color),
            length: None,
        }
    }

    /// An already-resolved pixel length.
    #[must_use]
    pub fn from_length(px: f32) -> Self {
        Self {
            keyword: format!("{px}px"),
            color: None,
            length: Some(px),
        }
    }

    /// Case-insensitive keyword comparison.
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.keyword.eq_ignore_ascii_case(keyword)
    }
}

impl From<String> for StyleValue {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for StyleValue {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<StyleValue> for String {
    fn from(value: StyleValue) -> Self {
        value.keyword
    }
}

/// Computed styles for one box, keyed by CSS property name.
///
/// [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
///
/// Absent properties are simply missing; callers substitute the initial value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComputedStyle {
    properties: HashMap<String, StyleValue>,
}

impl ComputedStyle {
    /// Create an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `property` to `value`, replacing any previous value.
    pub fn set(&mut self, property: &str, value: impl Into<StyleValue>) {
        let _ = self
            .properties
            .insert(normalize_property(property), value.into());
    }

    /// Builder form of [`ComputedStyle::set`].
    #[must_use]
    pub fn with(mut self, property: &str, value: impl Into<StyleValue>) -> Self {
        self.set(property, value);
        self
    }

    /// Look up a property by name.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.properties.get(&normalize_property(property))
    }

    /// The resolved color of `property`, if set and a color.
    #[must_use]
    pub fn color(&self, property: &str) -> Option<ColorValue> {
        self.get(property).and_then(|v| v.color)
    }

    /// The resolved pixel length of `property`, if set and a length.
    #[must_use]
    pub fn length(&self, property: &str) -> Option<f32> {
        self.get(property).and_then(|v| v.length)
    }

    /// The keyword of `property`, if set.
    #[must_use]
    pub fn keyword(&self, property: &str) -> Option<&str> {
        self.get(property).map(|v| v.keyword.as_str())
    }

    /// Number of properties set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True when no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Property names are ASCII case-insensitive.
fn normalize_property(property: &str) -> String {
    property.trim().to_ascii_lowercase()
}
