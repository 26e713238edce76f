//! The element seam: measuring a node and editing its inline style.

use sticky_geometry::{Edge, Rect};
use sticky_style_attr::{InlineStyle, format_px, parse_leading_number, parse_offset_px};

/// A node the positioner can measure and offset.
///
/// Implementations wrap whatever the host renders with: a DOM element, a
/// retained layout box, or [`MemoryElement`] in tests.
pub trait StickyElement {
    /// Current viewport-relative bounding rectangle, including any offset
    /// already applied through the inline style.
    fn bounding_rect(&self) -> Rect;

    /// Raw inline value of `property`, if declared.
    fn inline_style(&self, property: &str) -> Option<String>;

    /// Declare `property: value`, or remove the declaration for `None`.
    fn set_inline_style(&mut self, property: &str, value: Option<&str>);

    /// Offset currently applied on `edge`. Missing or unparsable values read
    /// as 0.
    fn applied_offset(&self, edge: Edge) -> f64 {
        self.inline_style(edge.property())
            .map_or(0.0, |value| parse_offset_px(&value))
    }

    /// Vertical displacement the inline offsets produce, positive downward.
    /// A usable `top` wins over `bottom`, as for a relatively positioned box.
    fn applied_shift(&self) -> f64 {
        self.inline_style(Edge::Top.property())
            .and_then(|value| parse_leading_number(&value).ok())
            .unwrap_or_else(|| -self.applied_offset(Edge::Bottom))
    }

    /// Write a pixel offset on `edge`, or clear it.
    fn set_offset(&mut self, edge: Edge, px: Option<f64>) {
        let formatted = px.map(format_px);
        self.set_inline_style(edge.property(), formatted.as_deref());
    }
}

/// An element with a fixed natural rectangle whose measured rectangle follows
/// its inline `top`, `bottom` and `transform: translateY(..)` declarations,
/// the way a relatively positioned box does.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryElement {
    natural: Rect,
    style: InlineStyle,
}

impl MemoryElement {
    pub fn new(natural: Rect) -> Self {
        Self {
            natural,
            style: InlineStyle::new(),
        }
    }

    /// An element that starts with the given `style` attribute.
    pub fn with_style(natural: Rect, attribute: &str) -> Self {
        Self {
            natural,
            style: InlineStyle::parse(attribute),
        }
    }

    /// Where the element sits with no offsets applied.
    pub const fn natural(&self) -> Rect {
        self.natural
    }

    pub const fn style(&self) -> &InlineStyle {
        &self.style
    }

    /// Scroll the surrounding content by `delta` pixels (positive scrolls
    /// down, moving the element up the viewport).
    pub fn scroll_by(&mut self, delta: f64) {
        self.natural = self.natural.translate_y(-delta);
    }

    fn style_shift(&self) -> f64 {
        self.applied_shift() + self.translate_y()
    }

    fn translate_y(&self) -> f64 {
        self.style
            .get("transform")
            .and_then(|value| value.trim().strip_prefix("translateY("))
            .and_then(|inner| parse_leading_number(inner).ok())
            .unwrap_or(0.0)
    }
}

impl StickyElement for MemoryElement {
    fn bounding_rect(&self) -> Rect {
        self.natural.translate_y(self.style_shift())
    }

    fn inline_style(&self, property: &str) -> Option<String> {
        self.style.get(property).map(str::to_owned)
    }

    fn set_inline_style(&mut self, property: &str, value: Option<&str>) {
        self.style.assign(property, value);
    }
}
