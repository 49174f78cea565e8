//! CSS Length values and parsing
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use core::fmt;

use serde::Serialize;

use crate::parser::ComponentValue;

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
/// "Lengths refer to distance measurements and are denoted by `<length>` in the
/// property definitions."
///
/// Also carries `<percentage>`, since every property here takes
/// `<length-percentage>` wherever it takes a length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LengthValue {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    Px(f32),
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "Equal to the computed value of the font-size property of the element"
    Em(f32),
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "Equal to the computed value of the font-size property of the root element."
    Rem(f32),
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vw = 1% of viewport width"
    Vw(f32),
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vh = 1% of viewport height"
    Vh(f32),
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1pt = 1/72th of 1in"
    Pt(f32),
    /// "1cm = 96px/2.54"
    Cm(f32),
    /// "1mm = 1/10th of 1cm"
    Mm(f32),
    /// "1in = 2.54cm = 96px"
    In(f32),
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    /// "A <percentage> value is denoted by <percentage>, and consists of a
    /// <number> immediately followed by a percent sign '%'."
    Percent(f32),
}

impl LengthValue {
    /// The numeric part, whatever the unit.
    #[must_use]
    pub const fn value(&self) -> f32 {
        match self {
            Self::Px(v)
            | Self::Em(v)
            | Self::Rem(v)
            | Self::Vw(v)
            | Self::Vh(v)
            | Self::Pt(v)
            | Self::Cm(v)
            | Self::Mm(v)
            | Self::In(v)
            | Self::Percent(v) => *v,
        }
    }

    /// Returns true for a `<percentage>` rather than a `<length>`.
    #[must_use]
    pub const fn is_percent(&self) -> bool {
        matches!(self, Self::Percent(_))
    }

    /// [§ 3.3 background-size](https://www.w3.org/TR/css-backgrounds-3/#background-size)
    ///
    /// "Negative values are invalid."
    #[must_use]
    pub fn is_non_negative(&self) -> bool {
        self.value() >= 0.0
    }
}

impl fmt::Display for LengthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (value, unit) = match self {
            Self::Px(v) => (v, "px"),
            Self::Em(v) => (v, "em"),
            Self::Rem(v) => (v, "rem"),
            Self::Vw(v) => (v, "vw"),
            Self::Vh(v) => (v, "vh"),
            Self::Pt(v) => (v, "pt"),
            Self::Cm(v) => (v, "cm"),
            Self::Mm(v) => (v, "mm"),
            Self::In(v) => (v, "in"),
            Self::Percent(v) => (v, "%"),
        };
        write!(f, "{value}{unit}")
    }
}

/// [§ 4.4 Automatic values](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
///
/// "Some properties can take the keyword 'auto' as a value. This keyword
/// allows the user agent to compute the value based on other properties."
///
/// Used by `background-size`, where "An auto value for one dimension is
/// resolved by using the image's intrinsic ratio and the size of the other
/// dimension".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum AutoLength {
    /// The keyword `auto`.
    Auto,

    /// A specific length or percentage.
    Length(LengthValue),
}

impl AutoLength {
    /// Check if the value is 'auto'.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
/// Parse a single component value as a `<length-percentage>`.
///
/// A unitless `0` is a length. Unknown units are rejected.
#[must_use]
pub fn parse_single_length(v: &ComponentValue) -> Option<LengthValue> {
    match v {
        ComponentValue::Dimension { value, unit } => {
            let value = *value;
            match unit.as_str() {
                "px" => Some(LengthValue::Px(value)),
                "em" => Some(LengthValue::Em(value)),
                "rem" => Some(LengthValue::Rem(value)),
                "vw" => Some(LengthValue::Vw(value)),
                "vh" => Some(LengthValue::Vh(value)),
                "pt" => Some(LengthValue::Pt(value)),
                "cm" => Some(LengthValue::Cm(value)),
                "mm" => Some(LengthValue::Mm(value)),
                "in" => Some(LengthValue::In(value)),
                _ => None,
            }
        }
        // [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
        ComponentValue::Percentage(value) => Some(LengthValue::Percent(*value)),
        ComponentValue::Number(value) if *value == 0.0 => Some(LengthValue::Px(0.0)),
        _ => None,
    }
}

/// Whether `unit` names a supported `<length>` unit.
#[must_use]
pub fn is_length_unit(unit: &str) -> bool {
    LENGTH_UNITS.contains(&unit)
}

/// [§ 6 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
const LENGTH_UNITS: &[&str] = &["px", "em", "rem", "vw", "vh", "pt", "cm", "mm", "in"];

/// Parse a single component value as a `<length>` (no percentages).
#[must_use]
pub fn parse_single_strict_length(v: &ComponentValue) -> Option<LengthValue> {
    parse_single_length(v).filter(|length| !length.is_percent())
}

/// Parse a single component value as 'auto' or a `<length-percentage>`.
#[must_use]
pub fn parse_single_auto_length(v: &ComponentValue) -> Option<AutoLength> {
    if v.is_ident("auto") {
        return Some(AutoLength::Auto);
    }
    parse_single_length(v).map(AutoLength::Length)
}
