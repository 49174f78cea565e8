//! Common utilities for the Quill shorthand resolver.
//!
//! This crate provides shared infrastructure used by the CSS library and the CLI:
//! - **Warning System** - deduplicated, colored stderr diagnostics for input the
//!   library drops or cannot represent

pub mod warning;
