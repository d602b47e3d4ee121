//! Painter - generates display list from layout tree
//!
//! [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
//!
//! The painter collects the stacking contexts of a layout tree, orders them
//! by stack level, and walks each one emitting drawing commands back to front.

use std::str::FromStr;

use ochre_common::warning::warn_once;

use crate::layout::{LayoutBox, collect_stacking_contexts, sort_stacking_contexts};
use crate::style::{BorderStyle, ColorValue, ComputedStyle, DEFAULT_FONT_SIZE_PX};

use super::{DisplayCommand, DisplayList};

/// [§ 4.2 'font-weight'](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
/// Initial value.
const DEFAULT_FONT_WEIGHT: &str = "normal";

/// Painter that generates a display list from a layout tree.
///
/// [CSS 2.1 Appendix E.2](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
///
/// Apart from the display list it accumulates, the painter holds no state;
/// each paint pass starts from a fresh `Painter`.
#[derive(Debug, Default)]
pub struct Painter {
    display_list: DisplayList,
}

impl Painter {
    /// Create a new painter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            display_list: DisplayList::new(),
        }
    }

    /// Paint a layout tree and return the display list.
    ///
    /// [CSS 2.1 Appendix E.2](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
    ///
    /// An absent root produces an empty list.
    #[must_use]
    pub fn paint(mut self, root: Option<&LayoutBox>) -> DisplayList {
        let Some(root) = root else {
            return self.display_list;
        };

        // STEP 1: Collect stacking contexts, root first, in tree order.
        let mut contexts = collect_stacking_contexts(root);

        // STEP 2: Back to front by stack level; equal levels keep tree order.
        sort_stacking_contexts(&mut contexts);

        // STEP 3: Paint each context as one unit.
        for context in &contexts {
            let layout_box = context.layout_box;
            if !layout_box.box_type.generates_box() {
                continue;
            }
            self.paint_box(layout_box, 0);
            self.paint_descendants(layout_box, 1);
        }

        self.display_list
    }

    /// Paint the descendants of a stacking context in tree order.
    ///
    /// Descendants that establish their own stacking context are skipped along
    /// with their subtrees; they are painted as separate entries of the
    /// sorted context list.
    fn paint_descendants(&mut self, parent: &LayoutBox, depth: usize) {
        for child in &parent.children {
            if child.is_stacking_context || !child.box_type.generates_box() {
                continue;
            }
            self.paint_box(child, depth);
            self.paint_descendants(child, depth + 1);
        }
    }

    /// Paint a single box: background, border, then text.
    fn paint_box(&mut self, layout_box: &LayoutBox, depth: usize) {
        let style = layout_box.style.as_ref();

        // [CSS 2.1 Appendix E.2 Step 2](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
        // "the background color of the element"
        if let Some(command) = background_command(layout_box, style) {
            self.emit(depth, command);
        }

        // "the border of the element"
        if let Some(command) = border_command(layout_box, style) {
            self.emit(depth, command);
        }

        // [CSS 2.1 Appendix E.2 Step 7](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
        // "the element's text"
        if let Some(command) = text_command(layout_box, style) {
            self.emit(depth, command);
        }
    }

    fn emit(&mut self, depth: usize, command: DisplayCommand) {
        trace(depth, &command);
        self.display_list.push(command);
    }
}

/// [CSS Backgrounds § 3.7](https://www.w3.org/TR/css-backgrounds-3/#background-painting-area)
///
/// "The initial value of 'background-clip' is 'border-box', meaning
/// the background is painted within the border box."
fn background_command(
    layout_box: &LayoutBox,
    style: Option<&ComputedStyle>,
) -> Option<DisplayCommand> {
    let value = style?.get("background-color")?;
    if value.is_keyword("transparent") {
        return None;
    }
    let color = value.color.filter(|c| !c.is_transparent())?;

    let border_box = layout_box.dimensions.border_box();
    Some(DisplayCommand::FillRect {
        x: border_box.x,
        y: border_box.y,
        width: border_box.width,
        height: border_box.height,
        color,
    })
}

/// [CSS Backgrounds and Borders § 4](https://www.w3.org/TR/css-backgrounds-3/#borders)
///
/// Widths come from layout. Color and style are read from the top edge
/// only and applied to all four edges.
fn border_command(
    layout_box: &LayoutBox,
    style: Option<&ComputedStyle>,
) -> Option<DisplayCommand> {
    let widths = layout_box.dimensions.border;
    if widths.is_zero() {
        return None;
    }

    let border_style = resolve_border_style(style);
    if !border_style.is_visible() {
        return None;
    }

    let border_box = layout_box.dimensions.border_box();
    Some(DisplayCommand::DrawBorder {
        x: border_box.x,
        y: border_box.y,
        width: border_box.width,
        height: border_box.height,
        widths,
        color: resolve_border_color(style),
        style: border_style,
    })
}

/// Text runs are drawn at the content-box origin.
fn text_command(
    layout_box: &LayoutBox,
    style: Option<&ComputedStyle>,
) -> Option<DisplayCommand> {
    if !layout_box.has_text() {
        return None;
    }

    let font_size = style
        .and_then(|s| s.length("font-size"))
        .unwrap_or(DEFAULT_FONT_SIZE_PX);
    let font_weight = style
        .and_then(|s| s.keyword("font-weight"))
        .unwrap_or(DEFAULT_FONT_WEIGHT)
        .to_string();

    let content = layout_box.dimensions.content_box();
    Some(DisplayCommand::DrawText {
        x: content.x,
        y: content.y,
        text: layout_box.text_content.clone(),
        font_size,
        color: current_color(style),
        font_weight,
    })
}

/// [§ 3.1 'color'](https://www.w3.org/TR/css-color-4/#the-color-property)
///
/// The box's own `color`, opaque black when absent.
fn current_color(style: Option<&ComputedStyle>) -> ColorValue {
    style
        .and_then(|s| s.color("color"))
        .unwrap_or(ColorValue::BLACK)
}

/// [§ 4.1 'border-color'](https://www.w3.org/TR/css-backgrounds-3/#border-color)
///
/// "If an element's border color is not specified with a border property,
/// user agents must use the value of the element's 'color' property as the
/// computed value for the border color."
fn resolve_border_color(style: Option<&ComputedStyle>) -> ColorValue {
    style
        .and_then(|s| s.get("border-top-color"))
        .filter(|value| !value.is_keyword("currentcolor"))
        .and_then(|value| value.color)
        .unwrap_or_else(|| current_color(style))
}

/// [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
///
/// A missing style on a box that layout gave border widths paints solid.
/// Styles without a dedicated rasterizer also fall back to solid.
fn resolve_border_style(style: Option<&ComputedStyle>) -> BorderStyle {
    let Some(keyword) = style.and_then(|s| s.keyword("border-top-style")) else {
        return BorderStyle::Solid;
    };

    match BorderStyle::from_str(keyword) {
        Ok(border_style) if !border_style.is_visible() || border_style.has_rasterizer() => {
            border_style
        }
        Ok(border_style) => {
            warn_once(
                "Paint",
                &format!("border-style '{border_style}' is painted as solid"),
            );
            BorderStyle::Solid
        }
        Err(_) => {
            warn_once(
                "Paint",
                &format!("unknown border-style '{keyword}' is painted as solid"),
            );
            BorderStyle::Solid
        }
    }
}

#[cfg(feature = "paint-trace")]
fn trace(depth: usize, command: &DisplayCommand) {
    eprintln!("[PAINT] depth={depth} {command:?}");
}

#[cfg(not(feature = "paint-trace"))]
const fn trace(_depth: usize, _command: &DisplayCommand) {}
