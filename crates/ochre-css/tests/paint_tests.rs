//! Integration tests for the display list builder.

use ochre_css::{
    BorderStyle, BoxType, ColorValue, ComputedStyle, DisplayCommand, EdgeSizes, LayoutBox,
    Painter,
};

const RED: ColorValue = ColorValue::rgb(255, 0, 0);
const GREEN: ColorValue = ColorValue::rgb(0, 128, 0);
const BLUE: ColorValue = ColorValue::rgb(0, 0, 255);

fn filled(color: &str) -> LayoutBox {
    LayoutBox::new(BoxType::Block)
        .with_content(0.0, 0.0, 10.0, 10.0)
        .with_style(ComputedStyle::new().with("background-color", color))
}

/// Colors of every `FillRect`, in painting order.
fn fill_colors(root: &LayoutBox) -> Vec<ColorValue> {
    Painter::new()
        .paint(Some(root))
        .iter()
        .filter_map(|command| match command {
            DisplayCommand::FillRect { color, .. } => Some(*color),
            _ => None,
        })
        .collect()
}

#[test]
fn test_paint_none_root_is_empty() {
    assert!(Painter::new().paint(None).is_empty());
}

#[test]
fn test_background_covers_border_box() {
    let root = LayoutBox::new(BoxType::Block)
        .with_content(10.0, 10.0, 50.0, 50.0)
        .with_padding(EdgeSizes::uniform(2.0))
        .with_style(ComputedStyle::new().with("background-color", "red"));

    let list = Painter::new().paint(Some(&root));
    assert_eq!(
        list.commands(),
        &[DisplayCommand::FillRect {
            x: 8.0,
            y: 8.0,
            width: 54.0,
            height: 54.0,
            color: RED,
        }]
    );
}

#[test]
fn test_transparent_background_emits_nothing() {
    for value in ["transparent", "#ff000000", "inherit"] {
        let root = filled(value);
        assert!(
            Painter::new().paint(Some(&root)).is_empty(),
            "background {value} should not paint"
        );
    }
}

#[test]
fn test_missing_style_emits_nothing_for_plain_box() {
    let root = LayoutBox::new(BoxType::Block).with_content(0.0, 0.0, 10.0, 10.0);
    assert!(Painter::new().paint(Some(&root)).is_empty());
}

#[test]
fn test_display_none_root_hides_stacking_descendants() {
    let root = LayoutBox::new(BoxType::None)
        .with_child(filled("red").with_stacking_context(1))
        .with_child(
            LayoutBox::new(BoxType::Block).with_child(filled("blue").with_stacking_context(-2)),
        );
    assert!(Painter::new().paint(Some(&root)).is_empty());
}

#[test]
fn test_document_order_within_context() {
    let root = filled("red")
        .with_child(filled("green").with_child(filled("blue")))
        .with_child(filled("white"));
    assert_eq!(fill_colors(&root), vec![RED, GREEN, BLUE, ColorValue::WHITE]);
}

#[test]
fn test_stacking_contexts_painted_by_z_index() {
    // Root z-index 0; children with z 1, 2, -1 in that document order.
    let root = filled("white")
        .with_child(filled("red").with_stacking_context(1))
        .with_child(filled("green").with_stacking_context(2))
        .with_child(filled("blue").with_stacking_context(-1));
    assert_eq!(fill_colors(&root), vec![BLUE, ColorValue::WHITE, RED, GREEN]);
}

#[test]
fn test_stacking_context_subtree_painted_with_its_context() {
    // The red context's plain child paints with it, after the root's later sibling.
    let root = filled("white")
        .with_child(
            filled("red")
                .with_stacking_context(1)
                .with_child(filled("#ff00ff")),
        )
        .with_child(filled("green"));
    assert_eq!(
        fill_colors(&root),
        vec![
            ColorValue::WHITE,
            GREEN,
            RED,
            ColorValue::rgb(255, 0, 255)
        ]
    );
}

#[test]
fn test_display_none_subtree_is_pruned() {
    let root = filled("white").with_child(
        LayoutBox::new(BoxType::None)
            .with_style(ComputedStyle::new().with("background-color", "red"))
            .with_child(filled("green"))
            .with_child(filled("blue").with_stacking_context(9)),
    );
    assert_eq!(fill_colors(&root), vec![ColorValue::WHITE]);
}

#[test]
fn test_display_none_root_paints_nothing() {
    let root = LayoutBox::new(BoxType::None)
        .with_style(ComputedStyle::new().with("background-color", "red"))
        .with_child(filled("green"));
    assert!(Painter::new().paint(Some(&root)).is_empty());
}

#[test]
fn test_border_uses_top_edge_for_all_sides() {
    let style = ComputedStyle::new()
        .with("border-top-color", "blue")
        .with("border-top-style", "dashed")
        .with("border-left-color", "red")
        .with("border-left-style", "dotted");
    let root = LayoutBox::new(BoxType::Block)
        .with_content(10.0, 10.0, 20.0, 20.0)
        .with_border(EdgeSizes {
            top: 2.0,
            right: 0.0,
            bottom: 4.0,
            left: 1.0,
        })
        .with_style(style);

    let list = Painter::new().paint(Some(&root));
    match list.commands() {
        [DisplayCommand::DrawBorder {
            x,
            y,
            width,
            height,
            widths,
            color,
            style,
        }] => {
            assert_eq!((*x, *y, *width, *height), (9.0, 8.0, 21.0, 26.0));
            assert_eq!(widths.bottom, 4.0);
            assert_eq!(*color, BLUE);
            assert_eq!(*style, BorderStyle::Dashed);
        }
        other => panic!("expected a single border command, got {other:?}"),
    }
}

#[test]
fn test_border_suppressed_by_none_and_hidden() {
    for keyword in ["none", "hidden"] {
        let root = LayoutBox::new(BoxType::Block)
            .with_content(0.0, 0.0, 10.0, 10.0)
            .with_border(EdgeSizes::uniform(3.0))
            .with_style(ComputedStyle::new().with("border-top-style", keyword));
        assert!(Painter::new().paint(Some(&root)).is_empty());
    }
}

#[test]
fn test_zero_width_border_emits_nothing() {
    let root = LayoutBox::new(BoxType::Block)
        .with_content(0.0, 0.0, 10.0, 10.0)
        .with_style(ComputedStyle::new().with("border-top-style", "solid"));
    assert!(Painter::new().paint(Some(&root)).is_empty());
}

#[test]
fn test_border_without_style_is_solid_black() {
    let root = LayoutBox::new(BoxType::Block)
        .with_content(0.0, 0.0, 10.0, 10.0)
        .with_border(EdgeSizes::uniform(1.0));
    let list = Painter::new().paint(Some(&root));
    assert!(matches!(
        list.commands(),
        [DisplayCommand::DrawBorder {
            color: ColorValue::BLACK,
            style: BorderStyle::Solid,
            ..
        }]
    ));
}

#[test]
fn test_text_defaults() {
    let root = LayoutBox::new(BoxType::Block)
        .with_child(LayoutBox::text("Hello").with_content(4.0, 6.0, 30.0, 16.0));
    let list = Painter::new().paint(Some(&root));
    assert_eq!(
        list.commands(),
        &[DisplayCommand::DrawText {
            x: 4.0,
            y: 6.0,
            text: "Hello".to_string(),
            font_size: 16.0,
            color: ColorValue::BLACK,
            font_weight: "normal".to_string(),
        }]
    );
}

#[test]
fn test_text_uses_style() {
    let style = ComputedStyle::new()
        .with("color", "#336699")
        .with("font-size", "28px")
        .with("font-weight", "Bold");
    let root = LayoutBox::text("Hi").with_style(style);
    let list = Painter::new().paint(Some(&root));
    match list.commands() {
        [DisplayCommand::DrawText {
            font_size,
            color,
            font_weight,
            ..
        }] => {
            assert_eq!(*font_size, 28.0);
            assert_eq!(*color, ColorValue::rgb(0x33, 0x66, 0x99));
            assert_eq!(font_weight, "bold");
        }
        other => panic!("expected a single text command, got {other:?}"),
    }
}

#[test]
fn test_text_keeps_small_explicit_font_size() {
    for (size, expected) in [("0px", 0.0), ("3px", 3.0)] {
        let root = LayoutBox::text("A").with_style(ComputedStyle::new().with("font-size", size));
        match Painter::new().paint(Some(&root)).commands() {
            [DisplayCommand::DrawText { font_size, .. }] => {
                assert!((*font_size - expected).abs() < f32::EPSILON, "{size}");
            }
            other => panic!("expected a single text command, got {other:?}"),
        }
    }
}

#[test]
fn test_background_border_text_order_for_one_box() {
    let style = ComputedStyle::new()
        .with("background-color", "yellow")
        .with("border-top-style", "double");
    let root = LayoutBox::text("x")
        .with_content(0.0, 0.0, 10.0, 10.0)
        .with_border(EdgeSizes::uniform(3.0))
        .with_style(style);
    let list = Painter::new().paint(Some(&root));
    let kinds: Vec<&str> = list
        .iter()
        .map(|command| match command {
            DisplayCommand::FillRect { .. } => "fill",
            DisplayCommand::DrawBorder { .. } => "border",
            DisplayCommand::DrawText { .. } => "text",
        })
        .collect();
    assert_eq!(kinds, vec!["fill", "border", "text"]);
}
