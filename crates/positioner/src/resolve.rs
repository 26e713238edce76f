//! Resolution of each sticky group into target positions.
//!
//! Each group is a fold over its elements that threads one boundary value:
//! the floor for top-pinned elements (nothing resolved earlier may be
//! crossed from above) and the ceiling for bottom-pinned elements.

use crate::LOG_TARGET;
use crate::context::StickyContext;
use log::trace;
use sticky_geometry::{Edge, Span};

/// The inline offset an element ends up with. An element is never offset
/// from both edges at once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pin {
    /// No offset; the element follows its container.
    Free,
    /// `top: <px>`
    Top(f64),
    /// `bottom: <px>`
    Bottom(f64),
}

impl Pin {
    /// `top` offset of `px`. Zero and non-finite offsets mean no offset.
    pub fn top(px: f64) -> Self {
        if px.is_finite() && px != 0.0 {
            Self::Top(px)
        } else {
            Self::Free
        }
    }

    /// `bottom` offset of `px`. Zero and non-finite offsets mean no offset.
    pub fn bottom(px: f64) -> Self {
        if px.is_finite() && px != 0.0 {
            Self::Bottom(px)
        } else {
            Self::Free
        }
    }

    /// Offset to write on `edge`, `None` to clear it.
    pub const fn offset(self, edge: Edge) -> Option<f64> {
        match (self, edge) {
            (Self::Top(px), Edge::Top) | (Self::Bottom(px), Edge::Bottom) => Some(px),
            _ => None,
        }
    }

    pub const fn is_free(self) -> bool {
        matches!(self, Self::Free)
    }
}

/// One element after resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolved {
    pub context: StickyContext,
    /// Where the element will sit once `pin` is applied.
    pub target: Span,
    pub pin: Pin,
}

impl Resolved {
    /// The element stays where document flow puts it.
    pub const fn natural(context: StickyContext) -> Self {
        Self {
            context,
            target: context.origin,
            pin: Pin::Free,
        }
    }

    /// True when the element floats away from its natural position.
    pub fn is_floating(&self) -> bool {
        !self.pin.is_free()
    }
}

/// Resolve top-pinned elements, last to first.
///
/// An element floats at `viewport.top + offset` once its natural top (less
/// its gap) has scrolled above the viewport. A floating element never
/// reaches below the floor: the natural or target top of the element after
/// it, or the container bottom.
///
/// The result is in the same order as `contexts`.
pub fn resolve_top(
    contexts: &[StickyContext],
    viewport: Span,
    container: Span,
    skip_degenerate: bool,
) -> Vec<Resolved> {
    let (mut resolved, _floor) = contexts.iter().rev().fold(
        (Vec::with_capacity(contexts.len()), container.bottom),
        |(mut acc, floor), context| {
            if skip_degenerate && context.is_degenerate() {
                trace!(target: LOG_TARGET, "skipping degenerate top element {:?}", context.rect);
                acc.push(Resolved::natural(*context));
                return (acc, floor);
            }
            let item = resolve_top_one(*context, viewport.top, floor);
            let next_floor = item
                .target
                .top
                .min(context.origin.top)
                .min(container.bottom);
            acc.push(item);
            (acc, next_floor)
        },
    );
    resolved.reverse();
    resolved
}

fn resolve_top_one(context: StickyContext, viewport_top: f64, floor: f64) -> Resolved {
    if viewport_top <= context.origin.top - context.offset {
        return Resolved::natural(context);
    }
    let mut target = Span::from_top(viewport_top + context.offset, context.height());
    if floor < target.bottom {
        target = target.translate(floor - target.bottom);
    }
    let pin = Pin::top(target.top - context.origin.top);
    trace!(target: LOG_TARGET, "top element floats to {target:?} ({pin:?})");
    Resolved {
        context,
        target,
        pin,
    }
}

/// Resolve bottom-pinned elements, first to last.
///
/// An element floats at `viewport.bottom - offset` once its natural bottom
/// (plus its gap) has scrolled below the viewport. A floating element never
/// reaches above the ceiling: the natural or target bottom of the element
/// before it, or the container top.
pub fn resolve_bottom(
    contexts: &[StickyContext],
    viewport: Span,
    container: Span,
    skip_degenerate: bool,
) -> Vec<Resolved> {
    let (resolved, _ceiling) = contexts.iter().fold(
        (Vec::with_capacity(contexts.len()), container.top),
        |(mut acc, ceiling), context| {
            if skip_degenerate && context.is_degenerate() {
                trace!(target: LOG_TARGET, "skipping degenerate bottom element {:?}", context.rect);
                acc.push(Resolved::natural(*context));
                return (acc, ceiling);
            }
            let item = resolve_bottom_one(*context, viewport.bottom, ceiling);
            let next_ceiling = item
                .target
                .bottom
                .max(context.origin.bottom)
                .max(container.top);
            acc.push(item);
            (acc, next_ceiling)
        },
    );
    resolved
}

fn resolve_bottom_one(context: StickyContext, viewport_bottom: f64, ceiling: f64) -> Resolved {
    if context.origin.bottom + context.offset <= viewport_bottom {
        return Resolved::natural(context);
    }
    let mut target = Span::from_bottom(viewport_bottom - context.offset, context.height());
    if target.top < ceiling {
        target = target.translate(ceiling - target.top);
    }
    let pin = Pin::bottom(context.origin.bottom - target.bottom);
    trace!(target: LOG_TARGET, "bottom element floats to {target:?} ({pin:?})");
    Resolved {
        context,
        target,
        pin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sticky_geometry::Rect;

    fn top(rect: (f64, f64), base: f64, offset: f64) -> StickyContext {
        StickyContext::new(Edge::Top, Rect::vertical(rect.0, rect.1), base, offset)
    }

    fn bottom(rect: (f64, f64), base: f64, offset: f64) -> StickyContext {
        StickyContext::new(Edge::Bottom, Rect::vertical(rect.0, rect.1), base, offset)
    }

    const VIEW: Span = Span::new(0.0, 800.0);

    #[test]
    fn top_element_pins_flush_to_viewport() {
        let resolved = resolve_top(&[top((-500.0, -460.0), 0.0, 0.0)], VIEW, Span::new(-500.0, 500.0), true);
        assert_eq!(resolved[0].target, Span::new(0.0, 40.0));
        assert_eq!(resolved[0].pin, Pin::Top(500.0));
    }

    #[test]
    fn top_element_at_viewport_edge_stays_natural() {
        let resolved = resolve_top(&[top((0.0, 40.0), 0.0, 0.0)], VIEW, Span::new(-500.0, 500.0), true);
        assert_eq!(resolved[0], Resolved::natural(top((0.0, 40.0), 0.0, 0.0)));

        // One pixel past the edge and it floats back to the edge.
        let resolved = resolve_top(&[top((-1.0, 39.0), 0.0, 0.0)], VIEW, Span::new(-500.0, 500.0), true);
        assert_eq!(resolved[0].target, Span::new(0.0, 40.0));
        assert_eq!(resolved[0].pin, Pin::Top(1.0));
    }

    #[test]
    fn gap_is_kept_from_viewport_top() {
        let resolved = resolve_top(&[top((-100.0, -70.0), 0.0, 12.0)], VIEW, Span::new(-500.0, 500.0), true);
        assert_eq!(resolved[0].target, Span::new(12.0, 42.0));
        assert_eq!(resolved[0].pin, Pin::Top(112.0));
        // Natural top still below the gap: no pin.
        let resolved = resolve_top(&[top((20.0, 50.0), 0.0, 12.0)], VIEW, Span::new(-500.0, 500.0), true);
        assert!(!resolved[0].is_floating());
    }

    #[test]
    fn container_bottom_pushes_header_out() {
        // Only 25px of the container is left in view; a 40px header slides up.
        let resolved = resolve_top(&[top((-500.0, -460.0), 0.0, 0.0)], VIEW, Span::new(-500.0, 25.0), true);
        assert_eq!(resolved[0].target, Span::new(-15.0, 25.0));
        assert_eq!(resolved[0].pin, Pin::Top(485.0));
    }

    #[test]
    fn next_header_pushes_previous_one_up() {
        let first = top((-500.0, -460.0), 0.0, 0.0);
        let second = top((30.0, 80.0), 0.0, 0.0);
        let resolved = resolve_top(&[first, second], VIEW, Span::new(-500.0, 500.0), true);
        assert!(!resolved[1].is_floating());
        assert_eq!(resolved[0].target.bottom, resolved[1].target.top);
        assert_eq!(resolved[0].target, Span::new(-10.0, 30.0));
    }

    #[test]
    fn top_result_keeps_input_order() {
        let contexts = [
            top((-500.0, -460.0), 0.0, 0.0),
            top((-460.0, -410.0), 0.0, 40.0),
            top((300.0, 330.0), 0.0, 0.0),
        ];
        let resolved = resolve_top(&contexts, VIEW, Span::new(-500.0, 500.0), true);
        for (item, context) in resolved.iter().zip(&contexts) {
            assert_eq!(item.context, *context);
        }
    }

    #[test]
    fn already_pinned_top_element_resolves_to_same_place() {
        let fresh = resolve_top(&[top((-500.0, -460.0), 0.0, 0.0)], VIEW, Span::new(-500.0, 500.0), true);
        let pinned = resolve_top(&[top((-480.0, -440.0), 20.0, 0.0)], VIEW, Span::new(-500.0, 500.0), true);
        assert_eq!(fresh[0].target, pinned[0].target);
        assert_eq!(fresh[0].pin, pinned[0].pin);
    }

    #[test]
    fn leftover_bottom_offset_does_not_leak_into_top_pin() {
        // `bottom: 3px` lifted the header; the pin is measured from where
        // the header sits without it.
        let lifted = StickyContext::shifted(Rect::vertical(-503.0, -463.0), 0.0, -3.0, 0.0);
        let resolved = resolve_top(&[lifted], VIEW, Span::new(-500.0, 500.0), true);
        assert_eq!(resolved[0].target, Span::new(0.0, 40.0));
        assert_eq!(resolved[0].pin, Pin::Top(500.0));
    }

    #[test]
    fn bottom_element_pins_flush_to_viewport() {
        let resolved = resolve_bottom(&[bottom((1200.0, 1240.0), 0.0, 0.0)], VIEW, Span::new(600.0, 1240.0), true);
        assert_eq!(resolved[0].target, Span::new(760.0, 800.0));
        assert_eq!(resolved[0].pin, Pin::Bottom(440.0));
    }

    #[test]
    fn already_pinned_bottom_element_resolves_to_same_place() {
        // `bottom: 440px` lifts the footer from 1200 to 760.
        let pinned = resolve_bottom(&[bottom((760.0, 800.0), 440.0, 0.0)], VIEW, Span::new(600.0, 1240.0), true);
        assert_eq!(pinned[0].target, Span::new(760.0, 800.0));
        assert_eq!(pinned[0].pin, Pin::Bottom(440.0));
    }

    #[test]
    fn container_top_pushes_footer_down() {
        // The container starts 780px down; a 40px footer cannot rise above it.
        let resolved = resolve_bottom(&[bottom((1200.0, 1240.0), 0.0, 0.0)], VIEW, Span::new(780.0, 1240.0), true);
        assert_eq!(resolved[0].target, Span::new(780.0, 820.0));
        assert_eq!(resolved[0].pin, Pin::Bottom(420.0));
    }

    #[test]
    fn previous_footer_pushes_next_one_down() {
        let first = bottom((700.0, 790.0), 0.0, 0.0);
        let second = bottom((1200.0, 1240.0), 0.0, 0.0);
        let resolved = resolve_bottom(&[first, second], VIEW, Span::new(0.0, 1240.0), true);
        assert!(!resolved[0].is_floating());
        assert_eq!(resolved[1].target, Span::new(790.0, 830.0));
        assert_eq!(resolved[0].target.bottom, resolved[1].target.top);
    }

    #[test]
    fn degenerate_elements_are_transparent() {
        let ghost = top((-300.0, -300.0), 0.0, 0.0);
        let header = top((-500.0, -460.0), 0.0, 0.0);
        let resolved = resolve_top(&[header, ghost], VIEW, Span::new(-500.0, 500.0), true);
        assert!(!resolved[1].is_floating());
        assert_eq!(resolved[0].target, Span::new(0.0, 40.0));
    }

    #[test]
    fn zero_pin_collapses_to_free() {
        assert_eq!(Pin::top(0.0), Pin::Free);
        assert_eq!(Pin::bottom(f64::NAN), Pin::Free);
        assert_eq!(Pin::Top(3.0).offset(Edge::Top), Some(3.0));
        assert_eq!(Pin::Top(3.0).offset(Edge::Bottom), None);
    }
}
