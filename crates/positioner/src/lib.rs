//! Sticky header and footer positioning against a scrolling viewport.
//!
//! Given the viewport rectangle, the rectangle of the block that scrolls
//! through it, and two ordered groups of elements (pinned to the top edge and
//! to the bottom edge), [`compute_sticky_positions`] decides for each element
//! whether it floats at the viewport edge or follows the block, and writes the
//! result back as an inline `top`/`bottom` offset.
//!
//! Everything is derived from the elements' current rectangles and inline
//! styles, so the computation is idempotent and cheap enough to run on every
//! scroll, resize or layout mutation.

#![forbid(unsafe_code)]

pub mod context;
pub mod element;
pub mod options;
pub mod plan;
pub mod resolve;
pub mod row;
pub mod scenario;

pub use context::{StickyContext, StickySpec};
pub use element::{MemoryElement, StickyElement};
pub use options::StickyOptions;
pub use plan::{StickyPlan, commit, compute_sticky_positions, plan};
pub use resolve::{Pin, Resolved, resolve_bottom, resolve_top};
pub use row::{RowFooter, RowStatus, footer_translate, header_translate, sticky_row};
pub use scenario::{ElementReport, ElementSeed, Scenario, ScenarioReport};
pub use sticky_geometry::{Edge, Rect, Relation, Span};

/// Log target used by every module in this crate.
pub(crate) const LOG_TARGET: &str = "sticky";
