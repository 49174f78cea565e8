//! Per-layer `background-size` and `background-repeat` values.

use serde::Serialize;

use super::keyword::{BackgroundRepeat, keyword};
use super::length::{AutoLength, parse_single_auto_length};
use crate::parser::ComponentValue;

/// [§ 3.9 background-size](https://www.w3.org/TR/css-backgrounds-3/#background-size)
///
/// "`<bg-size> = [ <length-percentage [0,∞]> | auto ]{1,2} | cover | contain`"
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundSize {
    /// "Scale the image ... to the smallest size such that both its width and
    /// its height can completely cover the background positioning area."
    Cover,
    /// "Scale the image ... to the largest size such that both its width and
    /// its height can fit inside the background positioning area."
    Contain,
    /// Explicit width and height.
    Explicit {
        /// The width (first value).
        width: AutoLength,
        /// The height. "If only one value is given the second is assumed to be auto."
        height: AutoLength,
    },
}

impl BackgroundSize {
    /// `auto auto`, the initial value.
    pub const AUTO: Self = Self::Explicit {
        width: AutoLength::Auto,
        height: AutoLength::Auto,
    };
}

/// "Negative values are not allowed."
fn size_component(v: &ComponentValue) -> Option<AutoLength> {
    parse_single_auto_length(v).filter(|size| match size {
        AutoLength::Auto => true,
        AutoLength::Length(length) => length.is_non_negative(),
    })
}

/// Returns true for an entry that may follow the position `/` in a layer.
#[must_use]
pub fn is_size_entry(v: &ComponentValue) -> bool {
    v.is_ident("cover") || v.is_ident("contain") || size_component(v).is_some()
}

/// Returns true for an entry that may be the second value of a size.
#[must_use]
pub fn is_size_component(v: &ComponentValue) -> bool {
    size_component(v).is_some()
}

/// Parse one layer's size run.
#[must_use]
pub fn parse_background_size(run: &[ComponentValue]) -> Option<BackgroundSize> {
    match run {
        [v] if v.is_ident("cover") => Some(BackgroundSize::Cover),
        [v] if v.is_ident("contain") => Some(BackgroundSize::Contain),
        [width] => Some(BackgroundSize::Explicit {
            width: size_component(width)?,
            height: AutoLength::Auto,
        }),
        [width, height] => Some(BackgroundSize::Explicit {
            width: size_component(width)?,
            height: size_component(height)?,
        }),
        _ => None,
    }
}

/// Returns true for a keyword that may start a repeat run.
#[must_use]
pub fn is_repeat_entry(v: &ComponentValue) -> bool {
    v.is_ident("repeat-x") || v.is_ident("repeat-y") || is_repeat_axis(v)
}

/// Returns true for a single-axis repeat keyword.
#[must_use]
pub fn is_repeat_axis(v: &ComponentValue) -> bool {
    keyword::<BackgroundRepeat>(v).is_some()
}

/// Parse one layer's repeat run into `(horizontal, vertical)`.
///
/// "`repeat-x` Computes to `repeat no-repeat`." "`repeat-y` Computes to
/// `no-repeat repeat`." "If only one `[repeat | space | round | no-repeat]`
/// keyword is given, it sets both."
#[must_use]
pub fn parse_background_repeat(
    run: &[ComponentValue],
) -> Option<(BackgroundRepeat, BackgroundRepeat)> {
    match run {
        [v] if v.is_ident("repeat-x") => {
            Some((BackgroundRepeat::Repeat, BackgroundRepeat::NoRepeat))
        }
        [v] if v.is_ident("repeat-y") => {
            Some((BackgroundRepeat::NoRepeat, BackgroundRepeat::Repeat))
        }
        [v] => {
            let both = keyword(v)?;
            Some((both, both))
        }
        [horizontal, vertical] => Some((keyword(horizontal)?, keyword(vertical)?)),
        _ => None,
    }
}
