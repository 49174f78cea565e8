//! CSS Color values and parsing
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//!
//! Named and hex colours come from the `cssparser` tables; `rgb()` and `hsl()`
//! are resolved here.

use cssparser::color::{parse_hash_color, parse_named_color};
use serde::Serialize;

use crate::parser::ComponentValue;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
///
/// A `<color>` as far as a declaration can resolve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    /// [§ 6.4 The currentcolor keyword](https://www.w3.org/TR/css-color-4/#currentcolor-color)
    ///
    /// "The keyword currentcolor represents value of the color property on
    /// the same element."
    #[serde(rename = "currentcolor")]
    CurrentColor,
    /// Any colour with known channels.
    Rgba(ColorValue),
}

impl Color {
    /// The channels, unless the colour depends on the `color` property.
    #[must_use]
    pub const fn rgba(self) -> Option<ColorValue> {
        match self {
            Self::Rgba(value) => Some(value),
            Self::CurrentColor => None,
        }
    }
}

impl From<ColorValue> for Color {
    fn from(value: ColorValue) -> Self {
        Self::Rgba(value)
    }
}

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color represented as RGBA components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorValue {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

impl ColorValue {
    /// Black (#000000)
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 255 };

    /// [§ 6.1.1 The transparent keyword](https://www.w3.org/TR/css-color-4/#transparent-color)
    ///
    /// "The keyword transparent specifies a transparent black."
    /// Also the initial value of `background-color`.
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    /// "The syntax of a <hex-color> is a <hash-token> token whose value consists of
    /// 3, 4, 6, or 8 hexadecimal digits."
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let (r, g, b, alpha) = parse_hash_color(hex.as_bytes()).ok()?;
        let a = (alpha * 255.0).round().clamp(0.0, 255.0) as u8;
        Some(Self { r, g, b, a })
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    /// "CSS defines a large set of named colors..."
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("transparent") {
            return Some(Self::TRANSPARENT);
        }
        let (r, g, b) = parse_named_color(name).ok()?;
        Some(Self { r, g, b, a: 255 })
    }

    /// Convert to hex string notation (#RRGGBB or #RRGGBBAA if alpha != 255)
    ///
    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse a single component value as a color.
#[must_use]
pub fn parse_single_color(v: &ComponentValue) -> Option<Color> {
    match v {
        ComponentValue::Ident(name) if name.eq_ignore_ascii_case("currentcolor") => {
            Some(Color::CurrentColor)
        }
        ComponentValue::Hash(value) => ColorValue::from_hex(value).map(Color::Rgba),
        ComponentValue::Ident(name) => ColorValue::from_named(name).map(Color::Rgba),
        ComponentValue::Function { name, arguments } => {
            parse_color_function(name, arguments).map(Color::Rgba)
        }
        _ => None,
    }
}

/// [§ 4.1 The RGB Functions: rgb() and rgba()](https://www.w3.org/TR/css-color-4/#rgb-functions)
/// [§ 4.1 The HSL Functions: hsl() and hsla()](https://www.w3.org/TR/css-color-4/#the-hsl-notation)
///
/// Per CSS Color 4, rgb()/rgba() and hsl()/hsla() are aliases.
fn parse_color_function(name: &str, args: &[ComponentValue]) -> Option<ColorValue> {
    let args = extract_color_args(args)?;
    if !(3..=4).contains(&args.len()) {
        return None;
    }

    // "The final argument, <alpha-value>, specifies the alpha of the color."
    // "If omitted, it defaults to 100%."
    let a = args.get(3).copied().map_or(255, alpha_to_u8);

    match name.to_ascii_lowercase().as_str() {
        "rgb" | "rgba" => Some(ColorValue {
            r: color_channel_to_u8(args[0]),
            g: color_channel_to_u8(args[1]),
            b: color_channel_to_u8(args[2]),
            a,
        }),
        "hsl" | "hsla" => {
            // "Because this value is so often given in degrees, the argument
            // can also be given as a number, which is interpreted as degrees."
            let hue = match args[0] {
                ColorArg::Number(v) => v,
                ColorArg::Percentage(v) => v * 3.6,
            };
            let (r, g, b) = hsl_to_rgb(hue, args[1].fraction(), args[2].fraction());
            Some(ColorValue { r, g, b, a })
        }
        _ => None,
    }
}

/// A numeric color function argument.
#[derive(Debug, Clone, Copy)]
enum ColorArg {
    Number(f32),
    Percentage(f32),
}

impl ColorArg {
    /// Saturation and lightness: both forms read as percentages.
    const fn fraction(self) -> f32 {
        match self {
            Self::Number(v) | Self::Percentage(v) => v / 100.0,
        }
    }
}

/// Extract numeric arguments, accepting both the legacy comma syntax and the
/// modern `r g b / alpha` syntax. Any other argument makes the function invalid.
fn extract_color_args(args: &[ComponentValue]) -> Option<Vec<ColorArg>> {
    let mut result = Vec::with_capacity(4);
    for arg in args {
        match arg {
            ComponentValue::Number(value) => result.push(ColorArg::Number(*value)),
            ComponentValue::Percentage(value) => result.push(ColorArg::Percentage(*value)),
            // A hue given as an angle.
            ComponentValue::Dimension { value, unit } if unit == "deg" => {
                result.push(ColorArg::Number(*value));
            }
            ComponentValue::Separator | ComponentValue::Delimiter => {}
            _ => return None,
        }
    }
    Some(result)
}

/// "Values outside these ranges are not invalid, but are clamped."
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn color_channel_to_u8(arg: ColorArg) -> u8 {
    let v = match arg {
        ColorArg::Number(n) => n,
        ColorArg::Percentage(p) => p * 255.0 / 100.0,
    };
    v.round().clamp(0.0, 255.0) as u8
}

/// "The <alpha-value> can be a <number> (clamped to [0, 1]) or a
/// <percentage> (clamped to [0%, 100%])."
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn alpha_to_u8(arg: ColorArg) -> u8 {
    let v = match arg {
        ColorArg::Number(n) => n * 255.0,
        ColorArg::Percentage(p) => p * 255.0 / 100.0,
    };
    v.round().clamp(0.0, 255.0) as u8
}

/// [§ 4.2.4 HSL-to-RGB](https://www.w3.org/TR/css-color-4/#hsl-to-rgb)
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (u8, u8, u8) {
    let h = hue.rem_euclid(360.0);
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    let c = (1.0 - 2.0f32.mul_add(l, -1.0).abs()) * s;
    let h_prime = h / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match h_prime as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = l - c / 2.0;
    let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

    (to_u8(r1), to_u8(g1), to_u8(b1))
}
