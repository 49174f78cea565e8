//! [§ 6 Border Images](https://www.w3.org/TR/css-backgrounds-3/#border-images)
//!
//! Typed values for the `border-image-*` longhands. Every parser takes the
//! whole run for its longhand and rejects anything left over.

use serde::Serialize;

use super::keyword::{ImageRepeat, keyword};
use super::length::{LengthValue, parse_single_length, parse_single_strict_length};
use crate::parser::ComponentValue;

/// A `<number>` or a `<percentage>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberOrPercentage {
    /// A plain number (image pixels for slices).
    Number(f32),
    /// A percentage of the image size.
    Percentage(f32),
}

/// A value for each of the four sides.
///
/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
/// uses the same expansion: "If there is only one component value, it applies
/// to all sides. If there are two values, the top and bottom are set to the
/// first value and the right and left are set to the second. If there are
/// three values, the top is set to the first value, the left and right are set
/// to the second, and the bottom is set to the third."
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sides<T> {
    /// Top side.
    pub top: T,
    /// Right side.
    pub right: T,
    /// Bottom side.
    pub bottom: T,
    /// Left side.
    pub left: T,
}

impl<T: Copy> Sides<T> {
    /// The same value on every side.
    #[must_use]
    pub const fn all(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Expand 1 to 4 values into four sides.
    #[must_use]
    pub fn expand(values: &[T]) -> Option<Self> {
        match *values {
            [all] => Some(Self::all(all)),
            [vertical, horizontal] => Some(Self {
                top: vertical,
                right: horizontal,
                bottom: vertical,
                left: horizontal,
            }),
            [top, horizontal, bottom] => Some(Self {
                top,
                right: horizontal,
                bottom,
                left: horizontal,
            }),
            [top, right, bottom, left] => Some(Self {
                top,
                right,
                bottom,
                left,
            }),
            _ => None,
        }
    }
}

/// Parse a 1–4 value run through `parse_one`.
fn parse_sides<T: Copy>(
    run: &[ComponentValue],
    parse_one: impl Fn(&ComponentValue) -> Option<T>,
) -> Option<Sides<T>> {
    let values = run.iter().map(parse_one).collect::<Option<Vec<_>>>()?;
    Sides::expand(&values)
}

/// [§ 6.2 border-image-slice](https://www.w3.org/TR/css-backgrounds-3/#border-image-slice)
///
/// "`[<number [0,∞]> | <percentage [0,∞]>]{1,4} && fill?`"
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BorderImageSlice {
    /// Inward offsets from the image edges.
    pub offsets: Sides<NumberOrPercentage>,
    /// "The fill keyword, if present, causes the middle part of the border-image
    /// to be preserved."
    pub fill: bool,
}

fn slice_offset(v: &ComponentValue) -> Option<NumberOrPercentage> {
    match v {
        ComponentValue::Number(n) if *n >= 0.0 => Some(NumberOrPercentage::Number(*n)),
        ComponentValue::Percentage(p) if *p >= 0.0 => Some(NumberOrPercentage::Percentage(*p)),
        _ => None,
    }
}

/// Parse a `border-image-slice` run. `fill` may lead or trail the offsets.
#[must_use]
pub fn parse_border_image_slice(run: &[ComponentValue]) -> Option<BorderImageSlice> {
    let (offsets, fill) = match run {
        [first, rest @ ..] if first.is_ident("fill") => (rest, true),
        [rest @ .., last] if last.is_ident("fill") => (rest, true),
        _ => (run, false),
    };
    Some(BorderImageSlice {
        offsets: parse_sides(offsets, slice_offset)?,
        fill,
    })
}

/// [§ 6.3 border-image-width](https://www.w3.org/TR/css-backgrounds-3/#border-image-width)
///
/// "`[ <length-percentage [0,∞]> | <number [0,∞]> | auto ]{1,4}`"
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderImageSideWidth {
    /// "Numbers represent multiples of the corresponding computed border-width."
    Number(f32),
    /// An absolute width, or a percentage of the border image area.
    Length(LengthValue),
    /// "the width is the intrinsic width or height ... of the corresponding image slice"
    Auto,
}

fn side_width(v: &ComponentValue) -> Option<BorderImageSideWidth> {
    if v.is_ident("auto") {
        return Some(BorderImageSideWidth::Auto);
    }
    match v {
        ComponentValue::Number(n) if *n >= 0.0 => Some(BorderImageSideWidth::Number(*n)),
        _ => parse_single_length(v)
            .filter(LengthValue::is_non_negative)
            .map(BorderImageSideWidth::Length),
    }
}

/// Parse a `border-image-width` run.
#[must_use]
pub fn parse_border_image_width(run: &[ComponentValue]) -> Option<Sides<BorderImageSideWidth>> {
    parse_sides(run, side_width)
}

/// [§ 6.4 border-image-outset](https://www.w3.org/TR/css-backgrounds-3/#border-image-outset)
///
/// "`[ <length [0,∞]> | <number [0,∞]> ]{1,4}`"
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LengthOrNumber {
    /// "Numbers represent multiples of the corresponding computed border-width."
    Number(f32),
    /// An absolute distance.
    Length(LengthValue),
}

fn outset(v: &ComponentValue) -> Option<LengthOrNumber> {
    match v {
        ComponentValue::Number(n) if *n >= 0.0 => Some(LengthOrNumber::Number(*n)),
        _ => parse_single_strict_length(v)
            .filter(LengthValue::is_non_negative)
            .map(LengthOrNumber::Length),
    }
}

/// Parse a `border-image-outset` run.
#[must_use]
pub fn parse_border_image_outset(run: &[ComponentValue]) -> Option<Sides<LengthOrNumber>> {
    parse_sides(run, outset)
}

/// [§ 6.5 border-image-repeat](https://www.w3.org/TR/css-backgrounds-3/#border-image-repeat)
///
/// "`[ stretch | repeat | round | space ]{1,2}`"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BorderImageRepeat {
    /// "The first keyword applies to the horizontal sides."
    pub horizontal: ImageRepeat,
    /// "The second to the vertical ones. If the second keyword is absent, it is
    /// assumed to be the same as the first."
    pub vertical: ImageRepeat,
}

/// Parse a `border-image-repeat` run.
#[must_use]
pub fn parse_border_image_repeat(run: &[ComponentValue]) -> Option<BorderImageRepeat> {
    match run {
        [both] => {
            let both = keyword(both)?;
            Some(BorderImageRepeat {
                horizontal: both,
                vertical: both,
            })
        }
        [horizontal, vertical] => Some(BorderImageRepeat {
            horizontal: keyword(horizontal)?,
            vertical: keyword(vertical)?,
        }),
        _ => None,
    }
}
