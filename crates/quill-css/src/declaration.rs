//! [§ 6.6 The CSSStyleDeclaration Interface](https://drafts.csswg.org/cssom/#the-cssstyledeclaration-interface)
//!
//! A declaration block owns one value per longhand. Shorthands are not stored;
//! assigning one writes its longhands and reading one serializes them back.

use core::fmt;
use core::str::FromStr;

use serde::Serialize;

use quill_common::warning::warn_once;

use crate::error::{DeclarationError, Rejection};
use crate::longhand::{Longhand, LonghandId, LonghandStore};
use crate::parser::{ComponentValue, ValueList, parse_declarations, parse_value};
use crate::shorthand::{BackgroundView, BorderImageView, ShorthandId, try_set_value};
use crate::values::length::is_length_unit;

/// A supported property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PropertyId {
    /// A shorthand such as `background`.
    Shorthand(ShorthandId),
    /// A longhand such as `background-color`.
    Longhand(LonghandId),
}

impl FromStr for PropertyId {
    type Err = DeclarationError;

    /// Property names are ASCII case-insensitive.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        if let Ok(shorthand) = name.parse::<ShorthandId>() {
            return Ok(Self::Shorthand(shorthand));
        }
        name.parse::<LonghandId>()
            .map(Self::Longhand)
            .map_err(|_| DeclarationError::UnknownProperty(name.to_string()))
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shorthand(id) => write!(f, "{id}"),
            Self::Longhand(id) => write!(f, "{id}"),
        }
    }
}

impl From<ShorthandId> for PropertyId {
    fn from(id: ShorthandId) -> Self {
        Self::Shorthand(id)
    }
}

impl From<LonghandId> for PropertyId {
    fn from(id: LonghandId) -> Self {
        Self::Longhand(id)
    }
}

/// A block of declarations for the supported shorthands and their longhands.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleDeclaration {
    longhands: LonghandStore,
}

impl StyleDeclaration {
    /// A declaration block with every longhand at its initial value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// [§ 6.6.1 setProperty()](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-setproperty)
    ///
    /// Parse `value` and assign it to the property called `name`.
    ///
    /// # Errors
    ///
    /// Returns a [`DeclarationError`] if the name is unknown, the text does
    /// not tokenize, or the property's grammar refuses the value. Nothing is
    /// modified in any of these cases.
    pub fn set_property(&mut self, name: &str, value: &str) -> Result<(), DeclarationError> {
        let id: PropertyId = name.parse()?;
        let value = parse_value(value)?;
        self.set_value(id, value)?;
        Ok(())
    }

    /// Assign an already tokenized value.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] if the property's grammar refuses the value.
    /// Unsupported units in a refused value are reported once.
    pub fn set_value(
        &mut self,
        id: impl Into<PropertyId>,
        value: impl Into<ValueList>,
    ) -> Result<(), Rejection> {
        let value = value.into();
        let unknown_units = unknown_units(&value);
        let result = self.assign(id.into(), value);
        if result.is_err() {
            for unit in unknown_units {
                warn_once("CSS", &format!("unsupported unit '{unit}'"));
            }
        }
        result
    }

    fn assign(&mut self, id: PropertyId, value: ValueList) -> Result<(), Rejection> {
        match id {
            PropertyId::Shorthand(shorthand) => try_set_value(&mut self.longhands, shorthand, value),
            PropertyId::Longhand(longhand) => {
                if value.is_empty() {
                    return Err(Rejection::EmptyLayer {
                        property: longhand.into(),
                        layer: 0,
                    });
                }
                if !longhand.accepts(&value) {
                    return Err(Rejection::SyntaxRejected {
                        property: longhand.into(),
                        token: value.to_string(),
                    });
                }
                self.longhands.set(longhand, value);
                Ok(())
            }
        }
    }

    /// [§ 6.6.1 getPropertyValue()](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-getpropertyvalue)
    ///
    /// The serialized value, or the empty string for a longhand that was
    /// never set and for a shorthand its longhands cannot express.
    #[must_use]
    pub fn property_value(&self, id: impl Into<PropertyId>) -> String {
        match id.into() {
            PropertyId::Shorthand(shorthand) => shorthand.serialize(&self.longhands),
            PropertyId::Longhand(longhand) => {
                let longhand = self.longhands.get(longhand);
                if longhand.explicitly_set {
                    longhand.value.to_string()
                } else {
                    String::new()
                }
            }
        }
    }

    /// Read one longhand, set or not.
    #[must_use]
    pub fn longhand(&self, id: LonghandId) -> &Longhand {
        self.longhands.get(id)
    }

    /// Every longhand, in store order.
    pub fn longhands(&self) -> impl Iterator<Item = &Longhand> {
        self.longhands.iter()
    }

    /// Typed access to the background longhands.
    #[must_use]
    pub const fn background(&self) -> BackgroundView<'_> {
        BackgroundView::new(&self.longhands)
    }

    /// Typed access to the border-image longhands.
    #[must_use]
    pub const fn border_image(&self) -> BorderImageView<'_> {
        BorderImageView::new(&self.longhands)
    }

    /// [§ 6.6.1 cssText](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-csstext)
    ///
    /// Shorthands are used where they can express their longhands; every
    /// other explicitly set longhand is listed on its own.
    #[must_use]
    pub fn css_text(&self) -> String {
        let mut declarations = Vec::new();
        let mut covered: Vec<LonghandId> = Vec::new();

        for shorthand in ShorthandId::ALL {
            let text = shorthand.serialize(&self.longhands);
            if !text.is_empty() {
                declarations.push(format!("{shorthand}: {text};"));
                covered.extend_from_slice(shorthand.longhands());
            }
        }

        for longhand in self.longhands.iter() {
            if longhand.explicitly_set && !covered.contains(&longhand.id) {
                declarations.push(format!("{}: {};", longhand.id, longhand.value));
            }
        }

        declarations.join(" ")
    }

    /// Apply every declaration in `css` (the inside of a `{}` block), in order.
    ///
    /// Declarations that fail are skipped and reported; the rest still apply.
    pub fn apply_block(&mut self, css: &str) -> Vec<DeclarationError> {
        let mut errors = Vec::new();

        for declaration in parse_declarations(css) {
            let result = declaration
                .name
                .parse::<PropertyId>()
                .and_then(|id| {
                    self.set_value(id, declaration.value)
                        .map_err(DeclarationError::from)
                });

            if let Err(error) = result {
                warn_once("CSS", &format!("ignored declaration: {error}"));
                errors.push(error);
            }
        }

        errors
    }
}

/// Top-level dimensions whose unit no grammar understands.
fn unknown_units(value: &ValueList) -> Vec<String> {
    value
        .iter()
        .filter_map(|entry| match entry {
            ComponentValue::Dimension { unit, .. } if !is_length_unit(unit) => Some(unit.clone()),
            _ => None,
        })
        .collect()
}
