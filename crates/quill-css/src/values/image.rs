//! [§ 2 Image values](https://www.w3.org/TR/css-images-3/#image-values)
//!
//! "`<image> = <url> | <gradient>`". Resource fetching is someone else's
//! problem; an image here is just its reference.

use serde::Serialize;

use crate::parser::{ComponentValue, ValueList};

/// [§ 3 Gradients](https://www.w3.org/TR/css-images-3/#gradients)
const GRADIENT_FUNCTIONS: &[&str] = &[
    "linear-gradient",
    "radial-gradient",
    "conic-gradient",
    "repeating-linear-gradient",
    "repeating-radial-gradient",
    "repeating-conic-gradient",
];

/// A `background-image` / `border-image-source` layer value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageSource {
    /// "A value of none counts as an image layer but draws nothing."
    None,
    /// A `url()` reference.
    Url(String),
    /// A gradient function with its unparsed arguments.
    Gradient {
        /// The function name, e.g. `linear-gradient`.
        name: String,
        /// The function arguments.
        arguments: ValueList,
    },
}

impl ImageSource {
    /// Returns true for the keyword `none`.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Parse a single component value as `none | <image>`.
#[must_use]
pub fn parse_image(v: &ComponentValue) -> Option<ImageSource> {
    match v {
        ComponentValue::Ident(_) if v.is_ident("none") => Some(ImageSource::None),
        ComponentValue::Url(url) => Some(ImageSource::Url(url.clone())),
        ComponentValue::Function { name, arguments }
            if GRADIENT_FUNCTIONS.contains(&name.as_str()) && !arguments.is_empty() =>
        {
            Some(ImageSource::Gradient {
                name: name.clone(),
                arguments: ValueList::from(arguments.as_slice()),
            })
        }
        _ => None,
    }
}
