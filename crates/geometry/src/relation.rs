//! Classification of how a scrolling viewport sees a bounded container.

use crate::Span;
use serde::{Deserialize, Serialize};

/// Vertical relationship between the viewport and the container.
///
/// ```text
///  ContainerBelow     ContainerVisible   ViewportInside     ContainerAbove
///  ┏━━━━━━━━━┓        ┏━━━━━━━━━┓          ┌─────┐            ┌─────┐
///  ┃  view   ┃        ┃ ┌─────┐ ┃        ┏━┿━━━━━┿━┓          │     │
///  ┃ ┌─────┐ ┃        ┃ └─────┘ ┃        ┃ │     │ ┃        ┏━┿━━━━━┿━┓
///  ┗━┿━━━━━┿━┛        ┗━━━━━━━━━┛        ┗━┿━━━━━┿━┛        ┃ └─────┘ ┃
///    └─────┘                               └─────┘          ┗━━━━━━━━━┛
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// No shared height. Nothing is visible, nothing is pinned.
    Disjoint,
    /// Container top is inside the view and its bottom runs past the view
    /// bottom. Footers may need to float.
    ContainerBelow,
    /// The whole container is visible.
    ContainerVisible,
    /// The view sits inside a taller container. Headers and footers float.
    ViewportInside,
    /// Container top has scrolled out above the view and its bottom is inside
    /// the view. Headers may need to float.
    ContainerAbove,
}

impl Relation {
    /// Classify `viewport` against `container`.
    ///
    /// Every overlapping configuration maps to one of the four non-disjoint
    /// variants. Edge ties are resolved in this order: a view that contains
    /// the container wins, then a container top at or below the view top,
    /// then a container that contains the view.
    pub fn classify(viewport: Span, container: Span) -> Self {
        if !viewport.overlaps(&container) {
            return Self::Disjoint;
        }
        if viewport.contains(&container) {
            return Self::ContainerVisible;
        }
        if viewport.top <= container.top {
            return Self::ContainerBelow;
        }
        if container.contains(&viewport) {
            return Self::ViewportInside;
        }
        Self::ContainerAbove
    }

    /// Whether top-pinned elements are resolved in this relation.
    pub const fn pins_top(self) -> bool {
        matches!(self, Self::ViewportInside | Self::ContainerAbove)
    }

    /// Whether bottom-pinned elements are resolved in this relation.
    pub const fn pins_bottom(self) -> bool {
        matches!(self, Self::ContainerBelow | Self::ViewportInside)
    }
}
