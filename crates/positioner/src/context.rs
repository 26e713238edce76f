//! Per-call snapshots of sticky elements.

use crate::StickyOptions;
use crate::element::StickyElement;
use sticky_geometry::{Edge, Rect, Span};

/// An element handed to the positioner, with its gap from the viewport edge.
///
/// The element is borrowed for the duration of one call; the caller keeps
/// ownership.
pub struct StickySpec<'el, E: ?Sized> {
    pub element: &'el mut E,
    /// Gap from the viewport edge. `None` uses the configured default.
    pub offset: Option<f64>,
}

impl<'el, E: ?Sized> StickySpec<'el, E> {
    pub fn new(element: &'el mut E) -> Self {
        Self {
            element,
            offset: None,
        }
    }

    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// What the positioner knows about one element at the start of a call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StickyContext {
    /// Measured rectangle, offset included.
    pub rect: Rect,
    /// Offset already applied on the pinned edge.
    pub base: f64,
    /// Net vertical displacement of the inline offsets, whichever edge
    /// declares them. Positive moves the box down.
    pub shift: f64,
    /// Gap to keep from the viewport edge.
    pub offset: f64,
    /// Where the element sits with `shift` removed.
    pub origin: Span,
    /// Where the element sits now.
    pub current: Span,
}

impl StickyContext {
    /// Build a context for an element offset only on its pinned edge.
    ///
    /// A `top` offset pushes the box down and a `bottom` offset pushes it up,
    /// so removing `base` moves a top-pinned box up and a bottom-pinned box
    /// down.
    pub fn new(edge: Edge, rect: Rect, base: f64, offset: f64) -> Self {
        let shift = match edge {
            Edge::Top => base,
            Edge::Bottom => -base,
        };
        Self::shifted(rect, base, shift, offset)
    }

    /// Build a context from measurements, with `shift` being the full
    /// displacement of the inline offsets. This differs from `base` when the
    /// element still carries an offset on the other edge.
    pub fn shifted(rect: Rect, base: f64, shift: f64, offset: f64) -> Self {
        let current = rect.span();
        Self {
            rect,
            base,
            shift,
            offset,
            origin: current.translate(-shift),
            current,
        }
    }

    /// Measure `spec.element` for pinning against `edge`.
    pub fn snapshot<E: StickyElement + ?Sized>(
        edge: Edge,
        spec: &StickySpec<'_, E>,
        options: &StickyOptions,
    ) -> Self {
        Self::shifted(
            spec.element.bounding_rect(),
            spec.element.applied_offset(edge),
            spec.element.applied_shift(),
            options.offset_or_default(spec.offset),
        )
    }

    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// Zero-height, inverted or non-finite measurements cannot be pinned
    /// meaningfully.
    pub fn is_degenerate(&self) -> bool {
        !self.rect.is_measurable()
            || self.height() <= 0.0
            || !self.base.is_finite()
            || !self.shift.is_finite()
            || !self.offset.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryElement;

    #[test]
    fn top_origin_removes_base() {
        let context = StickyContext::new(Edge::Top, Rect::vertical(-480.0, -440.0), 20.0, 0.0);
        assert_eq!(context.origin, Span::new(-500.0, -460.0));
        assert_eq!(context.current, Span::new(-480.0, -440.0));
        assert_eq!(context.origin.height(), context.height());
    }

    #[test]
    fn bottom_origin_adds_base() {
        let context = StickyContext::new(Edge::Bottom, Rect::vertical(740.0, 780.0), 20.0, 0.0);
        assert_eq!(context.origin, Span::new(760.0, 800.0));
        assert_eq!(context.origin.height(), context.height());
    }

    #[test]
    fn snapshot_reads_inline_style_and_default_offset() {
        let mut element =
            MemoryElement::with_style(Rect::vertical(100.0, 130.0), "bottom: 12px; width: 10px");
        let options = StickyOptions {
            default_offset: 4.0,
            ..StickyOptions::default()
        };
        let spec = StickySpec::new(&mut element);
        let context = StickyContext::snapshot(Edge::Bottom, &spec, &options);
        assert_eq!(context.base, 12.0);
        assert_eq!(context.offset, 4.0);
        assert_eq!(context.current, Span::new(88.0, 118.0));
        assert_eq!(context.origin, Span::new(100.0, 130.0));
    }

    #[test]
    fn snapshot_removes_offset_left_on_the_other_edge() {
        let mut element =
            MemoryElement::with_style(Rect::vertical(-500.0, -460.0), "bottom: 3px");
        let spec = StickySpec::new(&mut element);
        let context = StickyContext::snapshot(Edge::Top, &spec, &StickyOptions::default());
        assert_eq!(context.base, 0.0);
        assert_eq!(context.shift, -3.0);
        assert_eq!(context.current, Span::new(-503.0, -463.0));
        assert_eq!(context.origin, Span::new(-500.0, -460.0));
    }

    #[test]
    fn top_declaration_wins_over_bottom() {
        let mut element =
            MemoryElement::with_style(Rect::vertical(0.0, 40.0), "top: 5px; bottom: 9px");
        let spec = StickySpec::new(&mut element);
        let context = StickyContext::snapshot(Edge::Bottom, &spec, &StickyOptions::default());
        assert_eq!(context.base, 9.0);
        assert_eq!(context.current, Span::new(5.0, 45.0));
        assert_eq!(context.origin, Span::new(0.0, 40.0));
    }

    #[test]
    fn degenerate_measurements() {
        assert!(StickyContext::new(Edge::Top, Rect::vertical(5.0, 5.0), 0.0, 0.0).is_degenerate());
        assert!(StickyContext::new(Edge::Top, Rect::vertical(f64::NAN, 5.0), 0.0, 0.0).is_degenerate());
        assert!(!StickyContext::new(Edge::Top, Rect::vertical(0.0, 5.0), 0.0, 0.0).is_degenerate());
    }
}
