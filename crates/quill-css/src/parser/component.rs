//! Component values and value lists.
//!
//! [§ 5.3.7 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
//!
//! "A component value is one of the preserved tokens, a function, or a simple
//! block." Shorthand grammars only ever see whitespace-free values, so
//! whitespace is dropped on the way in and the two tokens that carry grammar
//! structure (`,` and `/`) get their own variants.

use core::fmt;

use serde::Serialize;

/// A single parsed CSS value unit, prior to semantic interpretation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ComponentValue {
    /// "`<ident-token>`", e.g. `center`, `no-repeat`, `red`.
    Ident(String),

    /// "`<number-token>`", e.g. `30` in `border-image-slice: 30`.
    Number(f32),

    /// "`<percentage-token>`", stored as written (`50%` is `50.0`).
    Percentage(f32),

    /// "`<dimension-token>`", e.g. `10px`. The unit is stored lowercase.
    Dimension {
        /// "a numeric value"
        value: f32,
        /// "a unit"
        unit: String,
    },

    /// "`<hash-token>`", e.g. `#ff0000`, value without the `#`.
    Hash(String),

    /// "`<string-token>`", value without the quotes.
    String(String),

    /// "`<url-token>`" or a `url()` function holding a single string.
    Url(String),

    /// A function with its (whitespace-free) arguments, e.g. `rgb(0, 0, 0)`.
    Function {
        /// The function name, without the opening parenthesis.
        name: String,
        /// The function arguments.
        arguments: Vec<ComponentValue>,
    },

    /// The literal `/` separating grammatically distinct groups within one value.
    Delimiter,

    /// The `,` separating layers of a repeatable value.
    Separator,

    /// Any other "`<delim-token>`".
    Delim(char),
}

impl ComponentValue {
    /// Create a new ident value.
    #[must_use]
    pub fn ident(value: impl Into<String>) -> Self {
        Self::Ident(value.into())
    }

    /// Create a new dimension value.
    #[must_use]
    pub fn dimension(value: f32, unit: impl Into<String>) -> Self {
        Self::Dimension {
            value,
            unit: unit.into().to_ascii_lowercase(),
        }
    }

    /// Create a new url value.
    #[must_use]
    pub fn url(value: impl Into<String>) -> Self {
        Self::Url(value.into())
    }

    /// Create a new function value.
    #[must_use]
    pub fn function(name: impl Into<String>, arguments: Vec<Self>) -> Self {
        Self::Function {
            name: name.into(),
            arguments,
        }
    }

    /// The identifier text, if this is an ident.
    #[must_use]
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Self::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if this is an ident matching `keyword` (ASCII case-insensitive).
    #[must_use]
    pub fn is_ident(&self, keyword: &str) -> bool {
        self.as_ident()
            .is_some_and(|name| name.eq_ignore_ascii_case(keyword))
    }

    /// Returns true if this is the `/` delimiter.
    #[must_use]
    pub const fn is_delimiter(&self) -> bool {
        matches!(self, Self::Delimiter)
    }

    /// Returns true if this is the `,` layer separator.
    #[must_use]
    pub const fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }

    /// The numeric value of a number, percentage or dimension.
    #[must_use]
    pub const fn numeric_value(&self) -> Option<f32> {
        match self {
            Self::Number(value) | Self::Percentage(value) | Self::Dimension { value, .. } => {
                Some(*value)
            }
            _ => None,
        }
    }
}

/// [§ 2.1 Serializing strings](https://drafts.csswg.org/cssom/#serialize-a-string)
///
/// Write `value` wrapped in double quotes, escaping quotes and backslashes.
fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        if c == '"' || c == '\\' {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("\"")
}

/// Write a run of values separated by single spaces, with `,` attached to the
/// value before it.
fn write_values(f: &mut fmt::Formatter<'_>, values: &[ComponentValue]) -> fmt::Result {
    for (index, value) in values.iter().enumerate() {
        if index > 0 && !value.is_separator() {
            f.write_str(" ")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}

impl fmt::Display for ComponentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(name) => f.write_str(name),
            Self::Number(value) => write!(f, "{value}"),
            Self::Percentage(value) => write!(f, "{value}%"),
            Self::Dimension { value, unit } => write!(f, "{value}{unit}"),
            Self::Hash(value) => write!(f, "#{value}"),
            Self::String(value) => write_quoted(f, value),
            Self::Url(value) => {
                // Unquoted urls cannot hold whitespace, quotes or parentheses.
                let needs_quotes = value
                    .chars()
                    .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '(' | ')' | '\\'));
                if needs_quotes {
                    f.write_str("url(")?;
                    write_quoted(f, value)?;
                    f.write_str(")")
                } else {
                    write!(f, "url({value})")
                }
            }
            Self::Function { name, arguments } => {
                write!(f, "{name}(")?;
                write_values(f, arguments)?;
                f.write_str(")")
            }
            Self::Delimiter => f.write_str("/"),
            Self::Separator => f.write_str(","),
            Self::Delim(c) => write!(f, "{c}"),
        }
    }
}

/// An ordered sequence of component values, possibly containing
/// [`ComponentValue::Separator`] and [`ComponentValue::Delimiter`] markers.
///
/// This is both the input to a shorthand and the stored value of a longhand.
/// For layered longhands the list holds one separator-delimited run per layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValueList {
    values: Vec<ComponentValue>,
}

impl ValueList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Wrap a single value as a one-element list.
    #[must_use]
    pub fn singleton(value: ComponentValue) -> Self {
        Self {
            values: vec![value],
        }
    }

    /// Append a value.
    pub fn push(&mut self, value: ComponentValue) {
        self.values.push(value);
    }

    /// Append a layer separator.
    pub fn push_separator(&mut self) {
        self.values.push(ComponentValue::Separator);
    }

    /// Number of entries, markers included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the list holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ComponentValue] {
        &self.values
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> core::slice::Iter<'_, ComponentValue> {
        self.values.iter()
    }

    /// Split on layer separators. Always yields at least one (possibly empty) layer.
    pub fn layers(&self) -> impl Iterator<Item = &[ComponentValue]> + Clone {
        self.values.split(ComponentValue::is_separator)
    }

    /// Number of separator-delimited layers.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers().count()
    }
}

impl From<ComponentValue> for ValueList {
    fn from(value: ComponentValue) -> Self {
        Self::singleton(value)
    }
}

impl From<Vec<ComponentValue>> for ValueList {
    fn from(values: Vec<ComponentValue>) -> Self {
        Self { values }
    }
}

impl From<&[ComponentValue]> for ValueList {
    fn from(values: &[ComponentValue]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }
}

impl FromIterator<ComponentValue> for ValueList {
    fn from_iter<I: IntoIterator<Item = ComponentValue>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<ComponentValue> for ValueList {
    fn extend<I: IntoIterator<Item = ComponentValue>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl IntoIterator for ValueList {
    type Item = ComponentValue;
    type IntoIter = std::vec::IntoIter<ComponentValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueList {
    type Item = &'a ComponentValue;
    type IntoIter = core::slice::Iter<'a, ComponentValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for ValueList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_values(f, &self.values)
    }
}
