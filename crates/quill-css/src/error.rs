//! Error types for value parsing and shorthand assignment.

use thiserror::Error;

use crate::declaration::PropertyId;
use crate::longhand::LonghandId;

/// Why a value was refused by a property's grammar.
///
/// Every rejection is all-or-nothing: when one is returned no longhand has
/// been modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// A token matches no remaining category, or a completed run does not
    /// satisfy its longhand's own grammar.
    #[error("{property}: `{token}` is not valid here")]
    SyntaxRejected {
        /// The property being assigned.
        property: PropertyId,
        /// The offending token (or run) as CSS text.
        token: String,
    },

    /// A token would fill a category that is already filled in this layer.
    #[error("{property}: `{token}` would set {longhand} a second time")]
    CategoryConflict {
        /// The property being assigned.
        property: PropertyId,
        /// The longhand that was already filled.
        longhand: LonghandId,
        /// The offending token as CSS text.
        token: String,
    },

    /// A `/` that is not followed by a legal value for what it introduces.
    #[error("{property}: `/` must be followed by a {expected} value")]
    DelimiterMismatch {
        /// The property being assigned.
        property: PropertyId,
        /// The longhand the delimiter introduces.
        expected: LonghandId,
    },

    /// A colour in any layer but the last.
    #[error("{property}: color `{token}` in layer {layer} (only the last layer may set a color)")]
    ColorOutsideLastLayer {
        /// The property being assigned.
        property: PropertyId,
        /// The colour token as CSS text.
        token: String,
        /// Zero-based index of the offending layer.
        layer: usize,
    },

    /// An empty value, or an empty comma-separated layer.
    #[error("{property}: layer {layer} is empty")]
    EmptyLayer {
        /// The property being assigned.
        property: PropertyId,
        /// Zero-based index of the empty layer.
        layer: usize,
    },
}

impl Rejection {
    /// The property whose assignment was refused.
    #[must_use]
    pub const fn property(&self) -> PropertyId {
        match self {
            Self::SyntaxRejected { property, .. }
            | Self::CategoryConflict { property, .. }
            | Self::DelimiterMismatch { property, .. }
            | Self::ColorOutsideLastLayer { property, .. }
            | Self::EmptyLayer { property, .. } => *property,
        }
    }
}

/// CSS text that could not be turned into component values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at {line}:{column}: {message}")]
pub struct SyntaxError {
    /// Human-readable description.
    pub message: String,
    /// One-based line of the offending token.
    pub line: u32,
    /// One-based column of the offending token.
    pub column: u32,
}

/// Failure to apply one `name: value` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// The property name is neither a supported shorthand nor a longhand.
    #[error("unknown property `{0}`")]
    UnknownProperty(String),

    /// The value text could not be tokenized.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// The value was refused by the property's grammar.
    #[error(transparent)]
    Rejected(#[from] Rejection),
}
