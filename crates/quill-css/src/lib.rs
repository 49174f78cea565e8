//! CSS shorthand validation, expansion and serialization for the Quill toolkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Component values** ([§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing))
//!   - A thin `cssparser` front end for property values and declaration blocks
//!   - `,` layer separators and `/` delimiters kept as structural markers
//!   - `!important` detection
//!
//! - **Typed values** ([CSS Values Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Lengths and percentages, colors (hex, named, `currentcolor`, rgb(), hsl()), images
//!   - Background position, size and repeat
//!   - Border-image slice, width, outset and repeat
//!
//! - **Shorthands** ([CSS Backgrounds Level 3](https://www.w3.org/TR/css-backgrounds-3/))
//!   - `background`: multi-layer, single-pass layer classifier
//!   - `border-image`: declarative combinator grammar
//!   - All-or-nothing assignment into the longhand store
//!   - Canonical serialization back to shorthand text
//!
//! # Not Implemented
//!
//! - General stylesheet parsing, selectors and the cascade
//! - Resolving image URLs or computing used values
//! - Shorthands other than `background` and `border-image`

/// Grammar combinators per [§ 2.2 Component value combinators](https://www.w3.org/TR/css-values-4/#component-combinators).
pub mod converter;
/// Property names and the declaration block per [CSSOM § 6.6](https://drafts.csswg.org/cssom/#the-cssstyledeclaration-interface).
pub mod declaration;
/// Rejections and syntax errors.
pub mod error;
/// Longhand ids, initial values and the longhand store.
pub mod longhand;
/// Component values and the `cssparser` front end per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;
/// The `background` and `border-image` shorthands.
pub mod shorthand;
/// Typed CSS values.
pub mod values;

// Re-exports for convenience
pub use declaration::{PropertyId, StyleDeclaration};
pub use error::{DeclarationError, Rejection, SyntaxError};
pub use longhand::{Decomposition, Longhand, LonghandId, LonghandStore};
pub use parser::{ComponentValue, Declaration, ValueList, parse_declarations, parse_value};
pub use shorthand::{
    BackgroundSnapshot, BackgroundView, BorderImageSnapshot, BorderImageView, Shorthand,
    ShorthandId, try_set_value,
};
pub use values::{
    AutoLength, BackgroundAttachment, BackgroundRepeat, BackgroundSize, BorderImageRepeat,
    BorderImageSideWidth, BorderImageSlice, BoxModel, Color, ColorValue, Edge, ImageRepeat,
    ImageSource, LengthOrNumber, LengthValue, NumberOrPercentage, Point, PositionKeyword,
    PositionOffset, Sides,
};
