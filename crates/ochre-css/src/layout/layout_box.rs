//! Layout box types.
//!
//! [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
//!
//! A [`LayoutBox`] is the output of the layout pass: geometry, computed style
//! and the stacking flags decided upstream. Each box exclusively owns its
//! children.

use serde::{Deserialize, Serialize};

use crate::style::ComputedStyle;

use super::box_model::{BoxDimensions, EdgeSizes, Rect};

/// [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
///
/// The kind of box the layout pass produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoxType {
    /// [§ 9.2.1](https://www.w3.org/TR/CSS2/visuren.html#block-boxes)
    /// A block-level box.
    #[default]
    Block,
    /// [§ 9.2.2](https://www.w3.org/TR/CSS2/visuren.html#inline-boxes)
    /// An inline-level box.
    Inline,
    /// [§ 9.2.4](https://www.w3.org/TR/CSS2/visuren.html#display-prop)
    /// "This value causes an element to generate an inline-level block container."
    InlineBlock,
    /// [§ 9.2.1.1](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    /// A box generated for text or to wrap mixed content.
    Anonymous,
    /// [§ 2.6 display: none](https://www.w3.org/TR/css-display-3/#valdef-display-none)
    ///
    /// "The element and its descendants generate no boxes or text runs."
    None,
}

impl BoxType {
    /// False for `display: none`, whose whole subtree is never painted.
    #[must_use]
    pub const fn generates_box(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// A laid-out box, ready to paint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutBox {
    /// The kind of box.
    pub box_type: BoxType,
    /// Resolved geometry in device pixels.
    pub dimensions: BoxDimensions,
    /// Computed style. `None` means every property takes its default.
    pub style: Option<ComputedStyle>,
    /// Children in document order.
    pub children: Vec<LayoutBox>,
    /// Text of a leaf inline run. Empty for element boxes.
    pub text_content: String,
    /// [§ 9.9.1 'z-index'](https://www.w3.org/TR/CSS2/visuren.html#z-index)
    ///
    /// Stack level within the parent stacking context.
    pub z_index: i32,
    /// Whether this box establishes a stacking context.
    pub is_stacking_context: bool,
}

impl LayoutBox {
    /// Create an empty box of the given type.
    #[must_use]
    pub fn new(box_type: BoxType) -> Self {
        Self {
            box_type,
            ..Self::default()
        }
    }

    /// Create an anonymous inline box carrying a text run.
    #[must_use]
    pub fn text(text: &str) -> Self {
        Self::new(BoxType::Inline).with_text(text)
    }

    /// Set the content rectangle.
    #[must_use]
    pub fn with_content(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.dimensions.content = Rect::new(x, y, width, height);
        self
    }

    /// Set the padding edge sizes.
    #[must_use]
    pub fn with_padding(mut self, padding: EdgeSizes) -> Self {
        self.dimensions.padding = padding;
        self
    }

    /// Set the border edge sizes.
    #[must_use]
    pub fn with_border(mut self, border: EdgeSizes) -> Self {
        self.dimensions.border = border;
        self
    }

    /// Set the margin edge sizes.
    #[must_use]
    pub fn with_margin(mut self, margin: EdgeSizes) -> Self {
        self.dimensions.margin = margin;
        self
    }

    /// Attach a computed style.
    #[must_use]
    pub fn with_style(mut self, style: ComputedStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Append a child.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Set the text run.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Mark the box as establishing a stacking context at `z_index`.
    #[must_use]
    pub fn with_stacking_context(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self.is_stacking_context = true;
        self
    }

    /// Whether the box carries a non-empty text run.
    #[must_use]
    pub fn has_text(&self) -> bool {
        !self.text_content.is_empty()
    }

    /// The lowest margin-box bottom edge in this subtree, ignoring
    /// `display: none` subtrees. Used to size the canvas.
    #[must_use]
    pub fn content_bottom(&self) -> f32 {
        self.children
            .iter()
            .filter(|child| child.box_type.generates_box())
            .map(Self::content_bottom)
            .fold(self.dimensions.margin_box().bottom(), f32::max)
    }
}
