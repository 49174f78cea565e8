//! Keyword tables for the background and border-image longhands.
//!
//! Each table is a closed enum; parsing goes through `strum`'s `EnumString`
//! (ASCII case-insensitive, kebab-case) and printing through `Display`.

use core::str::FromStr;

use serde::Serialize;
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::parser::ComponentValue;

/// Parse an ident component value as a keyword of table `K`.
#[must_use]
pub fn keyword<K: FromStr>(v: &ComponentValue) -> Option<K> {
    v.as_ident()?.parse().ok()
}

/// [§ 3.6 background-position](https://www.w3.org/TR/css-backgrounds-3/#background-position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum PositionKeyword {
    /// Horizontal start edge.
    Left,
    /// Either axis, 50%.
    Center,
    /// Horizontal end edge.
    Right,
    /// Vertical start edge.
    Top,
    /// Vertical end edge.
    Bottom,
}

impl PositionKeyword {
    /// May name the horizontal axis (`left`, `center`, `right`).
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Center | Self::Right)
    }

    /// May name the vertical axis (`top`, `center`, `bottom`).
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Center | Self::Bottom)
    }
}

/// [§ 3.4 background-repeat](https://www.w3.org/TR/css-backgrounds-3/#background-repeat)
///
/// "`<repeat-style> = repeat-x | repeat-y | [repeat | space | round | no-repeat]{1,2}`"
///
/// This is the per-axis keyword; `repeat-x` and `repeat-y` are shorthands
/// for an axis pair and are handled by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundRepeat {
    /// "The image is repeated in this direction as often as needed."
    Repeat,
    /// "The image is repeated as often as will fit ... and then spaced out."
    Space,
    /// "The image is repeated as often as will fit ... and then rescaled."
    Round,
    /// "The image is placed once and not repeated in this direction."
    NoRepeat,
}

/// [§ 3.5 background-attachment](https://www.w3.org/TR/css-backgrounds-3/#background-attachment)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundAttachment {
    /// "The background is fixed with regard to the element itself."
    Scroll,
    /// "The background is fixed with regard to the viewport."
    Fixed,
    /// "The background is fixed with regard to the element's contents."
    Local,
}

/// [§ 3.7 background-origin](https://www.w3.org/TR/css-backgrounds-3/#background-origin)
///
/// "`<box> = border-box | padding-box | content-box`"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum BoxModel {
    /// The border box.
    BorderBox,
    /// The padding box.
    PaddingBox,
    /// The content box.
    ContentBox,
}

/// [§ 6.5 border-image-repeat](https://www.w3.org/TR/css-backgrounds-3/#border-image-repeat)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum ImageRepeat {
    /// "The image is stretched to fill the area."
    Stretch,
    /// "The image is tiled (repeated) to fill the area."
    Repeat,
    /// "The image is tiled ... and rescaled so that it fits a whole number of times."
    Round,
    /// "The image is tiled ... and the extra space is distributed around the tiles."
    Space,
}
