//! Inline `style="..."` handling for sticky elements.
//!
//! Sticky offsets live in an element's inline style (`top: 20px`,
//! `bottom: 8px`, `transform: translateY(-4px)`). This crate parses and
//! rewrites those declarations without touching the rest of the attribute.

#![forbid(unsafe_code)]

pub mod declaration;
pub mod inline_style;
pub mod length;

pub use declaration::Declaration;
pub use inline_style::InlineStyle;
pub use length::{format_px, format_translate_y, parse_leading_number, parse_offset_px};

/// Parse error for the value helpers in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The value was empty or whitespace only.
    Empty,
    /// The first token was not numeric.
    NotNumeric,
    /// The numeric token was NaN or infinite.
    NonFinite,
}
