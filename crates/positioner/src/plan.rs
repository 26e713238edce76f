//! Entry point: measure, classify, resolve, commit.

use crate::context::{StickyContext, StickySpec};
use crate::element::StickyElement;
use crate::resolve::{Resolved, resolve_bottom, resolve_top};
use crate::{LOG_TARGET, StickyOptions};
use log::debug;
use sticky_geometry::{Edge, Rect, Relation};

/// The outcome of one positioning pass, before or after it is committed.
#[derive(Clone, Debug, PartialEq)]
pub struct StickyPlan {
    pub relation: Relation,
    /// Top-pinned elements, in input order.
    pub top: Vec<Resolved>,
    /// Bottom-pinned elements, in input order.
    pub bottom: Vec<Resolved>,
}

impl StickyPlan {
    /// Every resolved element, top group first.
    pub fn iter(&self) -> impl Iterator<Item = &Resolved> {
        self.top.iter().chain(&self.bottom)
    }

    /// Number of elements that float away from their natural position.
    pub fn floating_count(&self) -> usize {
        self.iter().filter(|item| item.is_floating()).count()
    }
}

/// Work out where each element goes without touching any element.
///
/// Returns `None` when there is nothing to do: both groups are empty, the
/// viewport and container do not overlap, or either rectangle is unusable.
/// Groups that the relation does not pin come back unpinned.
pub fn plan(
    viewport: Rect,
    container: Rect,
    top: &[StickyContext],
    bottom: &[StickyContext],
    options: &StickyOptions,
) -> Option<StickyPlan> {
    if top.is_empty() && bottom.is_empty() {
        return None;
    }
    if !viewport.is_measurable() || !container.is_measurable() {
        debug!(target: LOG_TARGET, "unmeasurable viewport {viewport:?} or container {container:?}");
        return None;
    }
    let view_span = viewport.span();
    let container_span = container.span();
    let relation = Relation::classify(view_span, container_span);
    if relation == Relation::Disjoint {
        return None;
    }

    let top_resolved = if relation.pins_top() {
        resolve_top(top, view_span, container_span, options.skip_degenerate)
    } else {
        top.iter().copied().map(Resolved::natural).collect()
    };
    let bottom_resolved = if relation.pins_bottom() {
        resolve_bottom(bottom, view_span, container_span, options.skip_degenerate)
    } else {
        bottom.iter().copied().map(Resolved::natural).collect()
    };

    Some(StickyPlan {
        relation,
        top: top_resolved,
        bottom: bottom_resolved,
    })
}

/// Write a plan back onto the elements it was computed from.
///
/// Each element gets its pinned edge set and the other edge cleared; unpinned
/// elements get both cleared. `top` and `bottom` must be the same slices, in
/// the same order, that the plan's contexts were taken from.
pub fn commit<E: StickyElement + ?Sized>(
    plan: &StickyPlan,
    top: &mut [StickySpec<'_, E>],
    bottom: &mut [StickySpec<'_, E>],
) {
    for (spec, item) in top.iter_mut().zip(&plan.top) {
        apply(spec, item);
    }
    for (spec, item) in bottom.iter_mut().zip(&plan.bottom) {
        apply(spec, item);
    }
}

fn apply<E: StickyElement + ?Sized>(spec: &mut StickySpec<'_, E>, item: &Resolved) {
    spec.element.set_offset(Edge::Top, item.pin.offset(Edge::Top));
    spec.element.set_offset(Edge::Bottom, item.pin.offset(Edge::Bottom));
}

/// Pin `top` elements against the viewport top and `bottom` elements against
/// the viewport bottom while `container` scrolls through `viewport`.
///
/// Top elements are ordered as they appear in the container, first to last;
/// so are bottom elements. Returns the committed plan, or `None` when nothing
/// was touched.
pub fn compute_sticky_positions<E: StickyElement + ?Sized>(
    viewport: Rect,
    container: Rect,
    top: &mut [StickySpec<'_, E>],
    bottom: &mut [StickySpec<'_, E>],
    options: &StickyOptions,
) -> Option<StickyPlan> {
    if top.is_empty() && bottom.is_empty() {
        return None;
    }
    let top_context: Vec<StickyContext> = top
        .iter()
        .map(|spec| StickyContext::snapshot(Edge::Top, spec, options))
        .collect();
    let bottom_context: Vec<StickyContext> = bottom
        .iter()
        .map(|spec| StickyContext::snapshot(Edge::Bottom, spec, options))
        .collect();

    let resolved = plan(viewport, container, &top_context, &bottom_context, options)?;
    debug!(
        target: LOG_TARGET,
        "{:?}: {} of {} elements floating",
        resolved.relation,
        resolved.floating_count(),
        top.len() + bottom.len()
    );
    commit(&resolved, top, bottom);
    Some(resolved)
}
