//! Vertical geometry for sticky positioning.
//!
//! Rectangles are viewport-relative snapshots as returned by a bounding-box
//! query. Only the block axis matters to the positioner, so most helpers work
//! on [`Span`] (a top/bottom pair).

#![forbid(unsafe_code)]

pub mod rect;
pub mod relation;

pub use rect::{Edge, Rect, Span};
pub use relation::Relation;
