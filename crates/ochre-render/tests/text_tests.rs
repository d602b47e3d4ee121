//! Integration tests for bitmap text rendering.

use ochre_common::warning::has_warned;
use ochre_css::ColorValue;
use ochre_render::bitmap_font::{GLYPH_HEIGHT, GLYPH_WIDTH, glyph, is_set};
use ochre_render::text::char_advance;
use ochre_render::{Canvas, glyph_scale, is_bold, text_width};

const BLACK: ColorValue = ColorValue::BLACK;
const WHITE: ColorValue = ColorValue::WHITE;

fn painted(canvas: &Canvas) -> Vec<(i32, i32)> {
    let width = i32::try_from(canvas.width()).unwrap();
    let height = i32::try_from(canvas.height()).unwrap();
    (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .filter(|(x, y)| canvas.get_pixel(*x, *y) != WHITE)
        .collect()
}

fn set_bits(ch: char) -> usize {
    let glyph = glyph(ch).unwrap();
    (0..GLYPH_HEIGHT)
        .flat_map(|row| (0..GLYPH_WIDTH).map(move |col| (row, col)))
        .filter(|(row, col)| is_set(glyph, *row, *col))
        .count()
}

#[test]
fn test_glyph_scale_never_below_one() {
    assert!((glyph_scale(14.0) - 2.0).abs() < f32::EPSILON);
    assert!((glyph_scale(7.0) - 1.0).abs() < f32::EPSILON);
    assert!((glyph_scale(3.0) - 1.0).abs() < f32::EPSILON);
    assert!((glyph_scale(0.0) - 1.0).abs() < f32::EPSILON);
}

#[test]
fn test_advance_is_six_source_columns() {
    assert!((char_advance(7.0) - 6.0).abs() < f32::EPSILON);
    assert!((char_advance(14.0) - 12.0).abs() < f32::EPSILON);
    assert!((text_width("abc", 14.0) - 36.0).abs() < f32::EPSILON);
    assert!(text_width("", 16.0).abs() < f32::EPSILON);
}

#[test]
fn test_is_bold() {
    for weight in ["bold", "BOLD", "700", "800", "900", " bold "] {
        assert!(is_bold(weight), "{weight}");
    }
    for weight in ["normal", "400", "600", "bolder", ""] {
        assert!(!is_bold(weight), "{weight}");
    }
}

#[test]
fn test_unscaled_glyph_matches_table() {
    let mut canvas = Canvas::new(10, 10);
    canvas.draw_text("H", 0.0, 0.0, 7.0, BLACK, "normal");
    let pixels = painted(&canvas);
    assert_eq!(pixels.len(), set_bits('H'));
    // 'H' has both vertical strokes on every row.
    assert!(pixels.contains(&(0, 0)));
    assert!(pixels.contains(&(4, 6)));
    assert!(!pixels.contains(&(2, 0)));
    assert!(pixels.iter().all(|(x, y)| *x < 5 && *y < 7));
}

#[test]
fn test_scaled_glyph_paints_blocks() {
    let mut canvas = Canvas::new(20, 20);
    canvas.draw_text("H", 0.0, 0.0, 14.0, BLACK, "normal");
    assert_eq!(painted(&canvas).len(), set_bits('H') * 4);
    assert_eq!(canvas.get_pixel(1, 1), BLACK);
    assert_eq!(canvas.get_pixel(9, 13), BLACK);
    assert_eq!(canvas.get_pixel(10, 0), WHITE);
}

#[test]
fn test_text_advances_between_characters() {
    let mut canvas = Canvas::new(20, 10);
    canvas.draw_text("II", 0.0, 0.0, 7.0, BLACK, "normal");
    // 'I' has its stem in column 2; the second copy is 6px to the right.
    assert_eq!(canvas.get_pixel(2, 3), BLACK);
    assert_eq!(canvas.get_pixel(8, 3), BLACK);
    assert_eq!(painted(&canvas).len(), set_bits('I') * 2);
}

#[test]
fn test_space_draws_nothing() {
    let mut canvas = Canvas::new(20, 10);
    canvas.draw_text("   ", 0.0, 0.0, 7.0, BLACK, "normal");
    assert!(painted(&canvas).is_empty());
}

#[test]
fn test_bold_adds_pixels_to_the_right() {
    let mut regular = Canvas::new(10, 10);
    regular.draw_text("I", 0.0, 0.0, 7.0, BLACK, "normal");
    let mut bold = Canvas::new(10, 10);
    bold.draw_text("I", 0.0, 0.0, 7.0, BLACK, "bold");

    let regular_pixels = painted(&regular);
    let bold_pixels = painted(&bold);
    assert!(bold_pixels.len() > regular_pixels.len());
    for (x, y) in regular_pixels {
        assert!(bold_pixels.contains(&(x, y)));
        assert!(bold_pixels.contains(&(x + 1, y)));
    }
}

#[test]
fn test_unknown_character_uses_fallback_and_warns() {
    let mut fallback = Canvas::new(10, 10);
    fallback.draw_text("\u{263a}", 0.0, 0.0, 7.0, BLACK, "normal");
    let mut question = Canvas::new(10, 10);
    question.draw_text("?", 0.0, 0.0, 7.0, BLACK, "normal");

    assert_eq!(fallback, question);
    assert!(has_warned("Text", "no glyph for '☺', drawing '?' instead"));
}

#[test]
fn test_translucent_text_blends() {
    let mut canvas = Canvas::new(10, 10);
    canvas.draw_text("I", 0.0, 0.0, 7.0, ColorValue::rgba(0, 0, 0, 128), "normal");
    let px = canvas.get_pixel(2, 3);
    assert_eq!(px.a, 255);
    assert!(px.r > 100 && px.r < 160);
}

#[test]
fn test_transparent_text_draws_nothing() {
    let mut canvas = Canvas::new(10, 10);
    canvas.draw_text("H", 0.0, 0.0, 7.0, ColorValue::TRANSPARENT, "bold");
    assert!(painted(&canvas).is_empty());
}

#[test]
fn test_text_off_canvas_is_clipped() {
    let mut canvas = Canvas::new(10, 10);
    canvas.draw_text("HHHH", -6.0, -3.0, 7.0, BLACK, "normal");
    assert!(!painted(&canvas).is_empty());
    canvas.draw_text("H", 1e9, 1e9, 1e6, BLACK, "normal");
}

#[test]
fn test_fractional_origin_snaps_down() {
    let mut canvas = Canvas::new(10, 10);
    canvas.draw_text("H", 0.9, 0.9, 7.0, BLACK, "normal");
    assert_eq!(canvas.get_pixel(0, 0), BLACK);
}
