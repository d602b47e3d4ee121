//! Integration tests for style values and computed style lookup.

use std::str::FromStr;

use ochre_css::{BorderStyle, ColorValue, ComputedStyle, StyleValue, parse_px};

#[test]
fn test_color_from_hex_6() {
    assert_eq!(ColorValue::from_hex("#ff0000"), Some(ColorValue::rgb(255, 0, 0)));
}

#[test]
fn test_color_from_hex_3() {
    assert_eq!(ColorValue::from_hex("#f00"), Some(ColorValue::rgb(255, 0, 0)));
}

#[test]
fn test_color_from_hex_with_alpha() {
    assert_eq!(
        ColorValue::from_hex("#0000ff80"),
        Some(ColorValue::rgba(0, 0, 255, 128))
    );
    assert_eq!(
        ColorValue::from_hex("#0f08"),
        Some(ColorValue::rgba(0, 255, 0, 136))
    );
    assert_eq!(
        ColorValue::from_hex("#ff00"),
        Some(ColorValue::rgba(255, 255, 0, 0))
    );
}

#[test]
fn test_color_from_hex_invalid() {
    assert_eq!(ColorValue::from_hex("#12345"), None);
    assert_eq!(ColorValue::from_hex("#gggggg"), None);
    assert_eq!(ColorValue::from_hex("#ééé"), None);
    assert_eq!(ColorValue::from_hex("#+fffff"), None);
}

#[test]
fn test_color_named_case_insensitive() {
    assert_eq!(ColorValue::from_named("Red"), Some(ColorValue::rgb(255, 0, 0)));
    assert_eq!(ColorValue::from_named("TRANSPARENT"), Some(ColorValue::TRANSPARENT));
    assert_eq!(ColorValue::from_named("notacolor"), None);
}

#[test]
fn test_color_parse_error() {
    let err = ColorValue::parse("chartreuse-ish").unwrap_err();
    assert_eq!(err.to_string(), "invalid color 'chartreuse-ish'");
}

#[test]
fn test_color_hex_string_roundtrip_alpha() {
    assert_eq!(ColorValue::rgb(255, 0, 0).to_hex_string(), "#ff0000");
    assert_eq!(ColorValue::rgba(0, 0, 255, 128).to_hex_string(), "#0000ff80");
}

#[test]
fn test_parse_px() {
    assert_eq!(parse_px("12px"), Some(12.0));
    assert_eq!(parse_px(" 7.5 "), Some(7.5));
    assert_eq!(parse_px("0"), Some(0.0));
    assert_eq!(parse_px("solid"), None);
    assert_eq!(parse_px("NaN"), None);
}

#[test]
fn test_style_value_parse_facets() {
    let red = StyleValue::parse("Red");
    assert_eq!(red.keyword, "red");
    assert_eq!(red.color, Some(ColorValue::rgb(255, 0, 0)));
    assert_eq!(red.length, None);

    let size = StyleValue::parse("24px");
    assert_eq!(size.color, None);
    assert_eq!(size.length, Some(24.0));

    let dashed = StyleValue::parse("dashed");
    assert!(dashed.is_keyword("DASHED"));
    assert_eq!(dashed.color, None);
    assert_eq!(dashed.length, None);
}

#[test]
fn test_computed_style_lookup() {
    let style = ComputedStyle::new()
        .with("Background-Color", "#00ff00")
        .with("font-size", StyleValue::from_length(20.0))
        .with("font-weight", "bold");

    assert_eq!(style.len(), 3);
    assert_eq!(style.color("background-color"), Some(ColorValue::rgb(0, 255, 0)));
    assert_eq!(style.length("font-size"), Some(20.0));
    assert_eq!(style.keyword("font-weight"), Some("bold"));
    assert!(style.get("color").is_none());
}

#[test]
fn test_computed_style_get_ignores_property_case() {
    let mut style = ComputedStyle::new();
    style.set("Background-Color", "red");
    assert!(style.get("Background-Color").is_some());
    assert!(style.get(" BACKGROUND-COLOR ").is_some());
    assert_eq!(style.color("Background-Color"), Some(ColorValue::rgb(255, 0, 0)));
    assert_eq!(style.keyword("BORDER-TOP-STYLE"), None);
}

#[test]
fn test_computed_style_set_replaces() {
    let mut style = ComputedStyle::new();
    style.set("color", "red");
    style.set("color", StyleValue::from_color(ColorValue::BLACK));
    assert_eq!(style.len(), 1);
    assert_eq!(style.color("color"), Some(ColorValue::BLACK));
}

#[test]
fn test_computed_style_from_json() {
    let style: ComputedStyle =
        serde_json::from_str(r##"{"color": "#0000ff", "border-top-style": "dotted"}"##).unwrap();
    assert_eq!(style.color("color"), Some(ColorValue::rgb(0, 0, 255)));
    assert_eq!(style.keyword("border-top-style"), Some("dotted"));
}

#[test]
fn test_color_serde_uses_hex() {
    let json = serde_json::to_string(&ColorValue::rgba(1, 2, 3, 4)).unwrap();
    assert_eq!(json, "\"#01020304\"");
    let back: ColorValue = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ColorValue::rgba(1, 2, 3, 4));
    assert!(serde_json::from_str::<ColorValue>("\"nope\"").is_err());
}

#[test]
fn test_border_style_keywords() {
    assert_eq!(BorderStyle::from_str("Dashed"), Ok(BorderStyle::Dashed));
    assert_eq!(BorderStyle::from_str("double"), Ok(BorderStyle::Double));
    assert!(BorderStyle::from_str("wavy").is_err());
    assert!(!BorderStyle::None.is_visible());
    assert!(!BorderStyle::Hidden.is_visible());
    assert!(BorderStyle::Groove.is_visible());
    assert!(!BorderStyle::Groove.has_rasterizer());
    assert_eq!(BorderStyle::Dotted.to_string(), "dotted");
}
