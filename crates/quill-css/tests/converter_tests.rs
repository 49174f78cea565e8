//! Integration tests for the grammar combinators.

use quill_css::LonghandId;
use quill_css::converter::{
    Converter, Mismatch, match_any, optional, ordered_group, starts_with_delimiter, value_of,
    verify,
};
use quill_css::parser::{ComponentValue, ValueList, parse_value};

fn input(css: &str) -> Vec<ComponentValue> {
    parse_value(css).unwrap().into_iter().collect()
}

fn text(value: &ValueList) -> String {
    value.to_string()
}

#[test]
fn test_value_of_takes_longest_prefix() {
    let (value, consumed) = value_of(LonghandId::BorderImageSlice)
        .convert(&input("10 20 30 round"))
        .unwrap();
    assert_eq!(consumed, 3);
    assert_eq!(text(&value), "10 20 30");
}

#[test]
fn test_value_of_stops_at_delimiter() {
    let (value, consumed) = value_of(LonghandId::BorderImageSlice)
        .convert(&input("10 / 20"))
        .unwrap();
    assert_eq!(consumed, 1);
    assert_eq!(text(&value), "10");
}

#[test]
fn test_value_of_no_match() {
    assert!(
        value_of(LonghandId::BorderImageRepeat)
            .convert(&input("10"))
            .is_none()
    );
    assert!(value_of(LonghandId::BorderImageRepeat).convert(&[]).is_none());
}

#[test]
fn test_optional_never_fails() {
    let converter = optional(value_of(LonghandId::BackgroundAttachment));
    assert_eq!(converter.convert(&input("red")), Some((None, 0)));
    let (value, consumed) = converter.convert(&input("fixed red")).unwrap();
    assert_eq!(consumed, 1);
    assert_eq!(value.as_ref().map(text).as_deref(), Some("fixed"));
}

#[test]
fn test_starts_with_delimiter() {
    let converter = starts_with_delimiter(value_of(LonghandId::BorderImageWidth));
    let (value, consumed) = converter.convert(&input("/ 5px 2")).unwrap();
    assert_eq!(consumed, 3);
    assert_eq!(text(&value), "5px 2");

    assert!(converter.convert(&input("5px")).is_none());
    // A `/` with nothing usable after it does not match
    assert!(converter.convert(&input("/ round")).is_none());
}

#[test]
fn test_verify_filters_output() {
    let converter = verify(value_of(LonghandId::BorderImageSlice), |value: &ValueList| {
        value.len() > 1
    });
    assert!(converter.convert(&input("10 20")).is_some());
    assert!(converter.convert(&input("10")).is_none());
}

#[test]
fn test_ordered_group_requires_order() {
    let converter = ordered_group((
        value_of(LonghandId::BackgroundAttachment),
        value_of(LonghandId::BackgroundOrigin),
    ));
    let ((attachment, origin), consumed) = converter.convert(&input("fixed padding-box")).unwrap();
    assert_eq!(consumed, 2);
    assert_eq!(text(&attachment), "fixed");
    assert_eq!(text(&origin), "padding-box");

    assert!(converter.convert(&input("padding-box fixed")).is_none());
}

#[test]
fn test_match_any_accepts_any_order() {
    let converter = match_any((
        optional(value_of(LonghandId::BackgroundAttachment)),
        optional(value_of(LonghandId::BackgroundOrigin)),
        optional(value_of(LonghandId::BackgroundColor)),
    ));

    let (attachment, origin, color) = converter.try_convert(&input("red fixed")).unwrap();
    assert_eq!(attachment.as_ref().map(text).as_deref(), Some("fixed"));
    assert_eq!(origin, None);
    assert_eq!(color.as_ref().map(text).as_deref(), Some("red"));

    let (attachment, origin, color) = converter
        .try_convert(&input("content-box red scroll"))
        .unwrap();
    assert!(attachment.is_some() && origin.is_some() && color.is_some());
}

#[test]
fn test_match_any_uses_each_member_once() {
    let converter = match_any((
        optional(value_of(LonghandId::BackgroundAttachment)),
        optional(value_of(LonghandId::BackgroundOrigin)),
    ));
    assert_eq!(
        converter.try_convert(&input("fixed padding-box scroll")),
        Err(Mismatch { position: 2 })
    );
}

#[test]
fn test_match_any_reports_unclaimed_entry() {
    let converter = match_any((
        optional(value_of(LonghandId::BackgroundAttachment)),
        optional(value_of(LonghandId::BackgroundOrigin)),
    ));
    assert_eq!(
        converter.try_convert(&input("fixed bogus")),
        Err(Mismatch { position: 1 })
    );
}

#[test]
fn test_match_any_required_member_missing() {
    let converter = match_any((
        value_of(LonghandId::BackgroundAttachment),
        value_of(LonghandId::BackgroundOrigin),
    ));
    assert_eq!(
        converter.try_convert(&input("fixed")),
        Err(Mismatch { position: 1 })
    );
    assert!(converter.try_convert(&input("border-box local")).is_ok());
}

#[test]
fn test_match_any_as_converter_consumes_everything() {
    let converter = match_any((
        optional(value_of(LonghandId::BorderImageSource)),
        optional(value_of(LonghandId::BorderImageRepeat)),
    ));
    let (_, consumed) = converter.convert(&input("round url(a.png)")).unwrap();
    assert_eq!(consumed, 2);
}
