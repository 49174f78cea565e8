//! Integration tests for typed CSS values.

use quill_css::parser::{ComponentValue, parse_value};
use quill_css::values::background::{parse_background_repeat, parse_background_size};
use quill_css::values::border_image::{
    parse_border_image_outset, parse_border_image_repeat, parse_border_image_slice,
    parse_border_image_width,
};
use quill_css::values::color::parse_single_color;
use quill_css::values::image::parse_image;
use quill_css::values::length::{parse_single_length, parse_single_strict_length};
use quill_css::values::position::parse_position;
use quill_css::{
    AutoLength, BackgroundRepeat, BackgroundSize, BorderImageSideWidth, Color, ColorValue, Edge,
    ImageRepeat, ImageSource, LengthOrNumber, LengthValue, NumberOrPercentage, Point,
    PositionOffset, Sides,
};

fn run(css: &str) -> Vec<ComponentValue> {
    parse_value(css).unwrap().into_iter().collect()
}

/// Helper for colours with known channels
fn rgba(css: &str) -> Option<ColorValue> {
    parse_single_color(&one(css)).and_then(Color::rgba)
}

fn one(css: &str) -> ComponentValue {
    let mut values = run(css);
    assert_eq!(values.len(), 1, "expected a single value in `{css}`");
    values.remove(0)
}

// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)

#[test]
fn test_lengths() {
    assert_eq!(parse_single_length(&one("10px")), Some(LengthValue::Px(10.0)));
    assert_eq!(parse_single_length(&one("2em")), Some(LengthValue::Em(2.0)));
    assert_eq!(parse_single_length(&one("25%")), Some(LengthValue::Percent(25.0)));
    // "a unitless zero is a length"
    assert_eq!(parse_single_length(&one("0")), Some(LengthValue::Px(0.0)));
    assert_eq!(parse_single_length(&one("5")), None);
    assert_eq!(parse_single_length(&one("3furlongs")), None);
}

#[test]
fn test_strict_length_rejects_percentages() {
    assert_eq!(parse_single_strict_length(&one("25%")), None);
    assert_eq!(parse_single_strict_length(&one("1in")), Some(LengthValue::In(1.0)));
}

#[test]
fn test_length_display() {
    assert_eq!(LengthValue::Px(10.0).to_string(), "10px");
    assert_eq!(LengthValue::Percent(12.5).to_string(), "12.5%");
    assert!(!LengthValue::Rem(-1.0).is_non_negative());
    assert!(AutoLength::Auto.is_auto());
    assert!(!AutoLength::Length(LengthValue::Px(0.0)).is_auto());
}

// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)

#[test]
fn test_named_colors() {
    assert_eq!(rgba("black"), Some(ColorValue::BLACK));
    assert_eq!(rgba("TRANSPARENT"), Some(ColorValue::TRANSPARENT));
    // The full named colour table, not just the basic sixteen
    assert_eq!(rgba("beige"), Some(ColorValue { r: 245, g: 245, b: 220, a: 255 }));
    assert_eq!(rgba("RebeccaPurple"), Some(ColorValue { r: 102, g: 51, b: 153, a: 255 }));
    assert_eq!(rgba("fixed"), None);
}

#[test]
fn test_currentcolor() {
    assert_eq!(parse_single_color(&one("currentColor")), Some(Color::CurrentColor));
    assert_eq!(Color::CurrentColor.rgba(), None);
    assert_eq!(Color::from(ColorValue::BLACK), Color::Rgba(ColorValue::BLACK));
}

#[test]
fn test_hex_colors() {
    let red = ColorValue { r: 255, g: 0, b: 0, a: 255 };
    assert_eq!(rgba("#f00"), Some(red));
    assert_eq!(rgba("#ff0000"), Some(red));
    assert_eq!(rgba("#FF0000"), Some(red));
    assert_eq!(rgba("#ff000080").map(|c| c.a), Some(128));
    assert_eq!(rgba("#ff00").map(|c| c.to_hex_string()), Some("#ffff0000".to_string()));
    assert_eq!(rgba("#ff00000"), None);
}

#[test]
fn test_color_functions() {
    assert_eq!(rgba("rgb(255, 0, 0)"), Some(ColorValue { r: 255, g: 0, b: 0, a: 255 }));
    assert_eq!(rgba("rgba(0, 0, 0, 0.5)").map(|c| c.a), Some(128));
    assert_eq!(rgba("hsl(120, 100%, 50%)"), Some(ColorValue { r: 0, g: 255, b: 0, a: 255 }));
    // Non-numeric arguments make the function invalid
    assert_eq!(parse_single_color(&one("rgb(red, 0, 0)")), None);
    assert_eq!(parse_single_color(&one("rgb(1, 2)")), None);
}

#[test]
fn test_to_hex_string() {
    assert_eq!(ColorValue::BLACK.to_hex_string(), "#000000");
    assert_eq!(ColorValue::TRANSPARENT.to_hex_string(), "#00000000");
}

// [§ 2 Image values](https://www.w3.org/TR/css-images-3/#image-values)

#[test]
fn test_images() {
    assert!(parse_image(&one("none")).is_some_and(|image| image.is_none()));
    assert_eq!(
        parse_image(&one("url(a.png)")),
        Some(ImageSource::Url("a.png".to_string()))
    );
    match parse_image(&one("linear-gradient(red, blue)")) {
        Some(ImageSource::Gradient { name, arguments }) => {
            assert_eq!(name, "linear-gradient");
            assert_eq!(arguments.to_string(), "red, blue");
        }
        other => panic!("Expected Gradient, got {other:?}"),
    }
    assert_eq!(parse_image(&one("rgb(0, 0, 0)")), None);
    assert_eq!(parse_image(&one("red")), None);
}

// [§ 3.6 background-position](https://www.w3.org/TR/css-backgrounds-3/#background-position)

#[test]
fn test_position_single_keyword() {
    assert_eq!(parse_position(&run("center")), Some(Point::CENTER));
    assert_eq!(
        parse_position(&run("top")),
        Some(Point {
            x: PositionOffset::CENTER,
            y: PositionOffset::start(LengthValue::Percent(0.0)),
        })
    );
}

#[test]
fn test_position_keywords_in_either_order() {
    let expected = Some(Point {
        x: PositionOffset::end(LengthValue::Percent(0.0)),
        y: PositionOffset::start(LengthValue::Percent(0.0)),
    });
    assert_eq!(parse_position(&run("right top")), expected);
    assert_eq!(parse_position(&run("top right")), expected);
}

#[test]
fn test_position_lengths() {
    assert_eq!(
        parse_position(&run("10px 20%")),
        Some(Point {
            x: PositionOffset::start(LengthValue::Px(10.0)),
            y: PositionOffset::start(LengthValue::Percent(20.0)),
        })
    );
    // A length on the first value fixes the horizontal axis
    assert_eq!(parse_position(&run("10px left")), None);
}

#[test]
fn test_position_edge_offsets() {
    let point = parse_position(&run("bottom 10px right 20px")).unwrap();
    assert_eq!(point.x.edge, Edge::End);
    assert_eq!(point.x.distance, LengthValue::Px(20.0));
    assert_eq!(point.y.edge, Edge::End);
    assert_eq!(point.y.distance, LengthValue::Px(10.0));

    let point = parse_position(&run("left 5% center")).unwrap();
    assert_eq!(point.x, PositionOffset::start(LengthValue::Percent(5.0)));
    assert_eq!(point.y, PositionOffset::CENTER);

    assert_eq!(parse_position(&run("left 10px right 20px")), None);
    assert_eq!(parse_position(&run("left top center")), None);
}

// [§ 3.9 background-size](https://www.w3.org/TR/css-backgrounds-3/#background-size)

#[test]
fn test_background_size() {
    assert_eq!(parse_background_size(&run("cover")), Some(BackgroundSize::Cover));
    assert_eq!(parse_background_size(&run("auto")), Some(BackgroundSize::AUTO));
    assert_eq!(
        parse_background_size(&run("50% auto")),
        Some(BackgroundSize::Explicit {
            width: AutoLength::Length(LengthValue::Percent(50.0)),
            height: AutoLength::Auto,
        })
    );
    assert_eq!(parse_background_size(&run("-10px")), None);
    assert_eq!(parse_background_size(&run("cover contain")), None);
}

// [§ 3.4 background-repeat](https://www.w3.org/TR/css-backgrounds-3/#background-repeat)

#[test]
fn test_background_repeat() {
    assert_eq!(
        parse_background_repeat(&run("repeat-x")),
        Some((BackgroundRepeat::Repeat, BackgroundRepeat::NoRepeat))
    );
    assert_eq!(
        parse_background_repeat(&run("repeat-y")),
        Some((BackgroundRepeat::NoRepeat, BackgroundRepeat::Repeat))
    );
    assert_eq!(
        parse_background_repeat(&run("space")),
        Some((BackgroundRepeat::Space, BackgroundRepeat::Space))
    );
    assert_eq!(
        parse_background_repeat(&run("round no-repeat")),
        Some((BackgroundRepeat::Round, BackgroundRepeat::NoRepeat))
    );
    assert_eq!(parse_background_repeat(&run("repeat-x repeat")), None);
}

// [§ 6 Border Images](https://www.w3.org/TR/css-backgrounds-3/#border-images)

#[test]
fn test_sides_expansion() {
    assert_eq!(Sides::expand(&[1, 2]), Some(Sides { top: 1, right: 2, bottom: 1, left: 2 }));
    assert_eq!(Sides::expand(&[1, 2, 3]), Some(Sides { top: 1, right: 2, bottom: 3, left: 2 }));
    assert_eq!(Sides::expand(&[1, 2, 3, 4, 5]), None);
    assert_eq!(Sides::<i32>::expand(&[]), None);
}

#[test]
fn test_border_image_slice() {
    let slice = parse_border_image_slice(&run("10 20%")).unwrap();
    assert!(!slice.fill);
    assert_eq!(slice.offsets.top, NumberOrPercentage::Number(10.0));
    assert_eq!(slice.offsets.right, NumberOrPercentage::Percentage(20.0));

    // `fill` may lead or trail
    assert!(parse_border_image_slice(&run("fill 10")).unwrap().fill);
    assert!(parse_border_image_slice(&run("10 fill")).unwrap().fill);

    assert_eq!(parse_border_image_slice(&run("fill")), None);
    assert_eq!(parse_border_image_slice(&run("-1")), None);
    assert_eq!(parse_border_image_slice(&run("10px")), None);
}

#[test]
fn test_border_image_width() {
    let width = parse_border_image_width(&run("1 auto 5px")).unwrap();
    assert_eq!(width.top, BorderImageSideWidth::Number(1.0));
    assert_eq!(width.right, BorderImageSideWidth::Auto);
    assert_eq!(width.bottom, BorderImageSideWidth::Length(LengthValue::Px(5.0)));
    assert_eq!(width.left, BorderImageSideWidth::Auto);
    assert_eq!(parse_border_image_width(&run("-2")), None);
}

#[test]
fn test_border_image_outset() {
    assert_eq!(
        parse_border_image_outset(&run("2")),
        Some(Sides::all(LengthOrNumber::Number(2.0)))
    );
    assert_eq!(
        parse_border_image_outset(&run("1em")),
        Some(Sides::all(LengthOrNumber::Length(LengthValue::Em(1.0))))
    );
    // Percentages are not outsets
    assert_eq!(parse_border_image_outset(&run("10%")), None);
}

#[test]
fn test_border_image_repeat() {
    let repeat = parse_border_image_repeat(&run("round")).unwrap();
    assert_eq!(repeat.horizontal, ImageRepeat::Round);
    assert_eq!(repeat.vertical, ImageRepeat::Round);

    let repeat = parse_border_image_repeat(&run("stretch space")).unwrap();
    assert_eq!(repeat.horizontal, ImageRepeat::Stretch);
    assert_eq!(repeat.vertical, ImageRepeat::Space);

    assert_eq!(parse_border_image_repeat(&run("no-repeat")), None);
}
