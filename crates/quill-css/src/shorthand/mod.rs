//! Shorthand properties: validation, expansion into longhands, and
//! serialization back to shorthand text.

pub mod background;
pub mod border_image;
pub mod serialize;

use serde::Serialize;
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::declaration::PropertyId;
use crate::error::Rejection;
use crate::longhand::{Decomposition, LonghandId, LonghandStore};
use crate::parser::ValueList;

pub use background::{Background, BackgroundSnapshot, BackgroundView};
pub use border_image::{BorderImage, BorderImageSnapshot, BorderImageView};

/// A shorthand property with a fixed set of longhands.
pub trait Shorthand {
    /// Which shorthand this is.
    const ID: ShorthandId;

    /// The longhands this shorthand sets, in canonical order.
    const LONGHANDS: &'static [LonghandId];

    /// Validate `value` and compute every longhand it implies, without
    /// touching any store.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] if `value` is not valid for this shorthand.
    fn decompose(value: &ValueList) -> Result<Decomposition, Rejection>;

    /// Canonical shorthand text for the current longhand values, or the empty
    /// string when the longhands cannot be expressed by this shorthand.
    fn serialize(store: &LonghandStore) -> String;
}

/// Every supported shorthand.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum ShorthandId {
    /// [§ 3.10 background](https://www.w3.org/TR/css-backgrounds-3/#background)
    Background,
    /// [§ 6.6 border-image](https://www.w3.org/TR/css-backgrounds-3/#border-image)
    BorderImage,
}

impl ShorthandId {
    /// Every shorthand.
    pub const ALL: [Self; 2] = [Self::Background, Self::BorderImage];

    /// The longhands this shorthand sets.
    #[must_use]
    pub const fn longhands(self) -> &'static [LonghandId] {
        match self {
            Self::Background => Background::LONGHANDS,
            Self::BorderImage => BorderImage::LONGHANDS,
        }
    }

    /// See [`Shorthand::decompose`].
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] if `value` is not valid for this shorthand.
    pub fn decompose(self, value: &ValueList) -> Result<Decomposition, Rejection> {
        match self {
            Self::Background => Background::decompose(value),
            Self::BorderImage => BorderImage::decompose(value),
        }
    }

    /// See [`Shorthand::serialize`].
    #[must_use]
    pub fn serialize(self, store: &LonghandStore) -> String {
        match self {
            Self::Background => Background::serialize(store),
            Self::BorderImage => BorderImage::serialize(store),
        }
    }

    /// Returns true if `value` would be accepted.
    #[must_use]
    pub fn is_valid(self, value: &ValueList) -> bool {
        self.decompose(value).is_ok()
    }

    /// The shorthand as a property id, for error reporting.
    #[must_use]
    pub const fn property(self) -> PropertyId {
        PropertyId::Shorthand(self)
    }
}

/// Assign `value` to shorthand `id`.
///
/// The value is fully decomposed before anything is written, so on error
/// every longhand keeps its previous value. A scalar value is treated as a
/// one-element list.
///
/// # Errors
///
/// Returns a [`Rejection`] if `value` is not valid for the shorthand.
pub fn try_set_value(
    store: &mut LonghandStore,
    id: ShorthandId,
    value: impl Into<ValueList>,
) -> Result<(), Rejection> {
    let decomposition = id.decompose(&value.into())?;

    #[cfg(feature = "shorthand-trace")]
    for (longhand, value) in decomposition.entries() {
        match value {
            Some(value) => eprintln!("[{id}] commit {longhand}: {value}"),
            None => eprintln!("[{id}] reset {longhand}"),
        }
    }

    store.commit(decomposition);
    Ok(())
}
