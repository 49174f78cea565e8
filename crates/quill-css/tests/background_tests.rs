//! Integration tests for the `background` shorthand.

use quill_css::parser::parse_value;
use quill_css::{
    BackgroundAttachment, BackgroundRepeat, BackgroundSize, BoxModel, Color, ColorValue,
    ImageSource, LengthValue, LonghandId, Point, PositionOffset, Rejection, ShorthandId,
    StyleDeclaration, ValueList,
};

/// Helper to build a declaration block with `background` already applied
fn background(css: &str) -> StyleDeclaration {
    let mut style = StyleDeclaration::new();
    style
        .set_property("background", css)
        .unwrap_or_else(|error| panic!("`{css}` should be accepted: {error}"));
    style
}

/// Helper to assign `background` and return the rejection
fn reject(css: &str) -> Rejection {
    let value = parse_value(css).unwrap();
    let mut style = StyleDeclaration::new();
    style
        .set_value(ShorthandId::Background, value)
        .expect_err("value should be rejected")
}

fn longhand(style: &StyleDeclaration, id: LonghandId) -> String {
    style.longhand(id).value.to_string()
}

// [§ 3.10 background](https://www.w3.org/TR/css-backgrounds-3/#background)
// "If a value is omitted from the shorthand, it is set to its initial value."

#[test]
fn test_color_only_sets_every_default() {
    let style = background("red");
    let view = style.background().snapshot();

    assert_eq!(view.images, vec![ImageSource::None]);
    assert_eq!(view.positions, vec![Point::CENTER]);
    assert_eq!(view.sizes, vec![BackgroundSize::AUTO]);
    assert_eq!(view.horizontal_repeats, vec![BackgroundRepeat::Repeat]);
    assert_eq!(view.vertical_repeats, vec![BackgroundRepeat::Repeat]);
    assert_eq!(view.attachments, vec![BackgroundAttachment::Scroll]);
    assert_eq!(view.origins, vec![BoxModel::BorderBox]);
    assert_eq!(view.clips, vec![BoxModel::BorderBox]);
    assert_eq!(view.color, Color::Rgba(ColorValue { r: 255, g: 0, b: 0, a: 255 }));
}

#[test]
fn test_every_longhand_is_explicitly_set() {
    let style = background("red");
    for &id in ShorthandId::Background.longhands() {
        assert!(style.longhand(id).explicitly_set, "{id} should be set");
    }
    assert!(!style.longhand(LonghandId::BorderImageSource).explicitly_set);
}

#[test]
fn test_multiple_layers() {
    let style = background("url(a.png) top, url(b.png) bottom");
    let view = style.background();

    assert_eq!(
        view.images(),
        vec![
            ImageSource::Url("a.png".to_string()),
            ImageSource::Url("b.png".to_string())
        ]
    );
    assert_eq!(longhand(&style, LonghandId::BackgroundPosition), "top, bottom");
    assert_eq!(
        view.positions()[1].y,
        PositionOffset::end(LengthValue::Percent(0.0))
    );
    assert_eq!(view.color(), Color::Rgba(ColorValue::TRANSPARENT));
}

#[test]
fn test_layer_alignment() {
    let style = background("url(a.png), fixed, content-box blue");
    for id in LonghandId::ALL.into_iter().filter(|id| id.is_layered()) {
        assert_eq!(style.longhand(id).value.layer_count(), 3, "{id}");
    }
    assert_eq!(longhand(&style, LonghandId::BackgroundImage), "url(a.png), none, none");
    assert_eq!(longhand(&style, LonghandId::BackgroundAttachment), "scroll, fixed, scroll");
    assert_eq!(longhand(&style, LonghandId::BackgroundColor), "blue");
}

#[test]
fn test_entries_in_any_order() {
    let a = background("url(a.png) no-repeat fixed center red");
    let b = background("red fixed center no-repeat url(a.png)");
    assert_eq!(a.background().snapshot(), b.background().snapshot());
}

// [§ 3.10 background](https://www.w3.org/TR/css-backgrounds-3/#background)
// "<bg-size> ... may only be included immediately after <bg-position>,
// separated with the '/' character"

#[test]
fn test_position_with_size() {
    let style = background("url(a.png) 10px 20px / cover");
    assert_eq!(longhand(&style, LonghandId::BackgroundPosition), "10px 20px");
    assert_eq!(style.background().sizes(), vec![BackgroundSize::Cover]);
}

#[test]
fn test_position_with_two_value_size() {
    let style = background("center / 50% auto");
    assert_eq!(longhand(&style, LonghandId::BackgroundSize), "50% auto");
}

#[test]
fn test_trailing_slash_rejected() {
    assert!(matches!(
        reject("url(a.png) 10px 20px /"),
        Rejection::DelimiterMismatch {
            expected: LonghandId::BackgroundSize,
            ..
        }
    ));
}

#[test]
fn test_size_without_position_rejected() {
    assert!(matches!(
        reject("url(a.png) / cover"),
        Rejection::DelimiterMismatch { .. }
    ));
}

#[test]
fn test_slash_followed_by_non_size_rejected() {
    assert!(matches!(
        reject("center / red"),
        Rejection::DelimiterMismatch { .. }
    ));
}

#[test]
fn test_color_outside_last_layer() {
    assert_eq!(
        reject("red, url(a.png)"),
        Rejection::ColorOutsideLastLayer {
            property: ShorthandId::Background.into(),
            token: "red".to_string(),
            layer: 0,
        }
    );
}

// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)

#[test]
fn test_any_named_color_in_final_layer() {
    for name in ["beige", "coral", "rebeccapurple", "LightGoldenRodYellow"] {
        let style = background(&format!("url(a.png) {name}"));
        assert_eq!(longhand(&style, LonghandId::BackgroundColor), name);
        assert!(matches!(style.background().color(), Color::Rgba(_)));
    }
}

#[test]
fn test_currentcolor_in_final_layer() {
    let style = background("url(a.png), url(b.png) currentcolor");
    assert_eq!(longhand(&style, LonghandId::BackgroundColor), "currentcolor");
    assert_eq!(style.background().color(), Color::CurrentColor);
    assert_eq!(
        style.property_value(ShorthandId::Background),
        "url(a.png), url(b.png) currentcolor"
    );
}

#[test]
fn test_currentcolor_outside_last_layer() {
    assert_eq!(
        reject("currentcolor url(a.png), url(b.png)"),
        Rejection::ColorOutsideLastLayer {
            property: ShorthandId::Background.into(),
            token: "currentcolor".to_string(),
            layer: 0,
        }
    );
}

#[test]
fn test_second_color_rejected() {
    assert!(matches!(
        reject("url(a.png) red blue"),
        Rejection::CategoryConflict {
            longhand: LonghandId::BackgroundColor,
            ..
        }
    ));
}

#[test]
fn test_category_conflicts() {
    let conflict = |css: &str| match reject(css) {
        Rejection::CategoryConflict { longhand, .. } => longhand,
        other => panic!("`{css}`: expected CategoryConflict, got {other:?}"),
    };
    assert_eq!(conflict("url(a.png) url(b.png)"), LonghandId::BackgroundImage);
    assert_eq!(conflict("fixed scroll"), LonghandId::BackgroundAttachment);
    assert_eq!(conflict("no-repeat repeat-x"), LonghandId::BackgroundRepeat);
    assert_eq!(conflict("center / cover left"), LonghandId::BackgroundPosition);
    assert_eq!(
        conflict("padding-box content-box border-box"),
        LonghandId::BackgroundOrigin
    );
}

#[test]
fn test_unknown_token_rejected() {
    assert_eq!(
        reject("url(a.png) bogus"),
        Rejection::SyntaxRejected {
            property: ShorthandId::Background.into(),
            token: "bogus".to_string(),
        }
    );
}

#[test]
fn test_invalid_run_rejected() {
    // Both entries are position entries, but not a valid position together
    assert!(matches!(
        reject("left right"),
        Rejection::SyntaxRejected { .. }
    ));
    assert!(matches!(
        reject("repeat-x no-repeat"),
        Rejection::SyntaxRejected { .. }
    ));
}

#[test]
fn test_empty_layers_rejected() {
    assert_eq!(
        reject("url(a.png),"),
        Rejection::EmptyLayer {
            property: ShorthandId::Background.into(),
            layer: 1,
        }
    );

    let mut style = StyleDeclaration::new();
    assert!(matches!(
        style.set_value(ShorthandId::Background, ValueList::new()),
        Err(Rejection::EmptyLayer { layer: 0, .. })
    ));
}

#[test]
fn test_rejection_leaves_longhands_untouched() {
    let mut style = background("url(a.png) top fixed");
    let before = style.clone();

    let error = style
        .set_property("background", "url(b.png) bottom bogus")
        .unwrap_err();
    assert!(error.to_string().contains("bogus"));
    assert_eq!(style, before);
    assert_eq!(longhand(&style, LonghandId::BackgroundImage), "url(a.png)");
}

#[test]
fn test_lone_box_keyword_sets_origin_only() {
    let view = background("padding-box").background().snapshot();
    assert_eq!(view.origins, vec![BoxModel::PaddingBox]);
    assert_eq!(view.clips, vec![BoxModel::BorderBox]);

    let view = background("padding-box content-box").background().snapshot();
    assert_eq!(view.origins, vec![BoxModel::PaddingBox]);
    assert_eq!(view.clips, vec![BoxModel::ContentBox]);
}

#[test]
fn test_repeat_x_expands() {
    let style = background("repeat-x");
    let view = style.background();
    assert_eq!(view.horizontal_repeats(), vec![BackgroundRepeat::Repeat]);
    assert_eq!(view.vertical_repeats(), vec![BackgroundRepeat::NoRepeat]);
}

#[test]
fn test_gradient_layer() {
    let style = background("linear-gradient(red, blue), url(a.png) green");
    assert_eq!(style.background().images().len(), 2);
    assert_eq!(longhand(&style, LonghandId::BackgroundColor), "green");
}

#[test]
fn test_decompose_without_store() {
    let value = parse_value("url(a.png) fixed, red").unwrap();
    let decomposition = ShorthandId::Background.decompose(&value).unwrap();

    assert_eq!(decomposition.entries().len(), 8);
    assert_eq!(
        decomposition
            .get(LonghandId::BackgroundColor)
            .map(ToString::to_string)
            .as_deref(),
        Some("red")
    );
    assert_eq!(
        decomposition
            .get(LonghandId::BackgroundAttachment)
            .map(ToString::to_string)
            .as_deref(),
        Some("fixed, scroll")
    );
    assert!(ShorthandId::Background.is_valid(&value));
}

// [§ 6.7.2 Serializing CSS Values](https://drafts.csswg.org/cssom/#serialize-a-css-value)

#[test]
fn test_serialize_omits_defaults() {
    let style = background("red");
    assert_eq!(style.property_value(ShorthandId::Background), "red");

    let style = background("none");
    assert_eq!(style.property_value(ShorthandId::Background), "none");

    let style = background("url(a.png) center repeat scroll border-box transparent");
    assert_eq!(style.property_value(ShorthandId::Background), "url(a.png)");
}

#[test]
fn test_serialize_multiple_layers() {
    let style = background("url(a.png) top, url(b.png) bottom");
    assert_eq!(
        style.property_value(ShorthandId::Background),
        "url(a.png) top, url(b.png) bottom"
    );

    let style = background("none, url(b.png) red");
    assert_eq!(
        style.property_value(ShorthandId::Background),
        "none, url(b.png) red"
    );
}

#[test]
fn test_serialize_keeps_position_for_size() {
    let style = background("center / cover");
    assert_eq!(style.property_value(ShorthandId::Background), "center / cover");
}

#[test]
fn test_serialize_keeps_origin_for_clip() {
    let style = background("border-box content-box");
    assert_eq!(
        style.property_value(ShorthandId::Background),
        "border-box content-box"
    );
}

#[test]
fn test_round_trip() {
    let inputs = [
        "url(a.png) left 10px top 20px / 50% auto no-repeat fixed padding-box content-box blue",
        "url(a.png) top, url(b.png) bottom",
        "linear-gradient(red, blue) repeat-y, none local #00ff00",
        "red",
    ];
    for css in inputs {
        let first = background(css);
        let text = first.property_value(ShorthandId::Background);
        let second = background(&text);

        for &id in ShorthandId::Background.longhands() {
            assert_eq!(
                first.longhand(id).value,
                second.longhand(id).value,
                "{id} differs after re-parsing `{text}`"
            );
        }
    }
}

#[test]
fn test_serialize_requires_every_longhand() {
    let mut style = StyleDeclaration::new();
    style
        .set_property("background-image", "url(a.png)")
        .unwrap();
    assert_eq!(style.property_value(ShorthandId::Background), "");
}

#[test]
fn test_serialize_requires_matching_layer_counts() {
    let mut style = background("url(a.png), url(b.png)");
    style.set_property("background-position", "left").unwrap();
    assert_eq!(style.property_value(ShorthandId::Background), "");
}
