use crate::background::BackgroundRepeat;
use crate::border::BorderStyle;
use crate::dimension::Dimension;
use crate::style::BoxStyle;
use boxpaint_types::{Color, Edges};

#[test]
fn test_declarations_build_inline_style() {
    let style = BoxStyle::from_declarations([
        ("border", "2pt solid black"),
        ("backgroundColor", "red"),
        ("margin-left", "5pt"),
    ])
    .unwrap();

    assert_eq!(style.width, Dimension::Auto);
    assert_eq!(style.border.widths(), Edges::all(2.0));
    assert_eq!(style.border.left.style, BorderStyle::Solid);
    assert_eq!(style.background.color, Some(Color::RED));
    assert_eq!(style.margin.left, 5.0);
}

#[test]
fn test_later_side_declaration_overrides_shorthand() {
    let style = BoxStyle::from_declarations([
        ("border", "1pt dashed blue"),
        ("border-left-style", "none"),
        ("borderRightColor", "transparent"),
        ("border-top-width", "thick"),
    ])
    .unwrap();

    assert_eq!(style.border.left.style, BorderStyle::None);
    assert_eq!(style.border.widths().left, 0.0);
    assert_eq!(style.border.right.color, None);
    assert!(!style.border.right.is_visible());
    assert_eq!(style.border.top.width, 5.0);
    assert_eq!(style.border.bottom.style, BorderStyle::Dashed);
}

#[test]
fn test_background_longhands_refine_image() {
    let style = BoxStyle::from_declarations([
        ("background-image", "url(dots.png)"),
        ("background-repeat", "no-repeat"),
        ("background-position", "right bottom"),
    ])
    .unwrap();

    let image = style.background.image.unwrap();
    assert_eq!(image.src, "dots.png");
    assert_eq!(image.repeat, BackgroundRepeat::NoRepeat);
    assert_eq!(image.position.x, Dimension::Percent(100.0));
}

#[test]
fn test_invalid_value_is_an_error() {
    assert!(BoxStyle::from_declarations([("width", "wide")]).is_err());
    assert!(BoxStyle::from_declarations([("border-color", "#12")]).is_err());
}

#[test]
fn test_unknown_property_is_ignored() {
    let style = BoxStyle::from_declarations([("font-size", "12pt")]).unwrap();
    assert_eq!(style, BoxStyle::default());
}

#[test]
fn test_box_style_deserializes_from_json() {
    let style: BoxStyle = serde_json::from_value(serde_json::json!({
        "width": "100pt",
        "border": { "left": "4pt double #000" },
        "opacity": 0.5
    }))
    .unwrap();
    assert_eq!(style.width, Dimension::Pt(100.0));
    assert_eq!(style.border.left.style, BorderStyle::Double);
    assert_eq!(style.border.left.width, 4.0);
    assert_eq!(style.opacity, 0.5);
}
