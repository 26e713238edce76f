//! Rectangles, vertical spans and edges.

use serde::{Deserialize, Serialize};

/// Which edge of the viewport an element is pinned against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
}

impl Edge {
    /// The inline style property that carries an offset for this edge.
    pub const fn property(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    /// The edge on the other side of the box.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

/// A viewport-relative bounding rectangle.
///
/// `left` and `right` are carried for completeness; the positioner never
/// reads them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub right: f64,
}

impl Rect {
    /// A rectangle with only its vertical extent known.
    pub const fn vertical(top: f64, bottom: f64) -> Self {
        Self {
            top,
            bottom,
            left: 0.0,
            right: 0.0,
        }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// The block-axis extent of this rectangle.
    pub const fn span(&self) -> Span {
        Span {
            top: self.top,
            bottom: self.bottom,
        }
    }

    /// Same rectangle moved down by `delta` (up when negative).
    pub fn translate_y(self, delta: f64) -> Self {
        Self {
            top: self.top + delta,
            bottom: self.bottom + delta,
            ..self
        }
    }

    /// True when the rectangle can be positioned against: both vertical
    /// coordinates finite and a non-negative height.
    pub fn is_measurable(&self) -> bool {
        self.span().is_measurable()
    }
}

/// A vertical extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub top: f64,
    pub bottom: f64,
}

impl Span {
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// A span of `height` whose top edge sits at `top`.
    pub fn from_top(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    /// A span of `height` whose bottom edge sits at `bottom`.
    pub fn from_bottom(bottom: f64, height: f64) -> Self {
        Self {
            top: bottom - height,
            bottom,
        }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Move both edges by `delta`. Height is unchanged.
    pub fn translate(self, delta: f64) -> Self {
        Self {
            top: self.top + delta,
            bottom: self.bottom + delta,
        }
    }

    pub fn is_measurable(&self) -> bool {
        self.top.is_finite() && self.bottom.is_finite() && self.top <= self.bottom
    }

    /// True when the two spans share at least some height.
    ///
    /// Spans that only touch at an edge do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.top < other.bottom && other.top < self.bottom
    }

    /// True when `other` lies entirely within `self` (edges may coincide).
    pub fn contains(&self, other: &Self) -> bool {
        self.top <= other.top && other.bottom <= self.bottom
    }
}

impl From<Rect> for Span {
    fn from(rect: Rect) -> Self {
        rect.span()
    }
}
