//! Component values and the `cssparser` text front end.

mod component;
mod tokenize;

pub use component::{ComponentValue, ValueList};
pub use tokenize::{Declaration, parse_declarations, parse_value};
