//! Header and footer rows of a table block kept in view with
//! `transform: translateY(..)`.
//!
//! This is the lighter sibling of [`crate::compute_sticky_positions`] used by
//! database tables: a single header and a single footer, shifted by whole
//! pixels relative to the table's scroll area.

use crate::LOG_TARGET;
use crate::element::StickyElement;
use log::trace;
use serde::{Deserialize, Serialize};
use sticky_geometry::Rect;
use sticky_style_attr::format_translate_y;

/// Which rows to update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStatus {
    Top,
    Bottom,
    All,
}

impl RowStatus {
    pub const fn updates_header(self) -> bool {
        matches!(self, Self::Top | Self::All)
    }

    pub const fn updates_footer(self) -> bool {
        matches!(self, Self::Bottom | Self::All)
    }
}

/// The footer row and the measurements it is positioned by.
pub struct RowFooter<'el, E: ?Sized> {
    pub element: &'el mut E,
    /// Rectangle of the footer's parent (the table body).
    pub parent: Rect,
    /// Footers only float while they show a calculation result.
    pub shows_calculation: bool,
}

/// Shift for a header whose table's scroll area starts above the visible
/// content. `None` means the header sits naturally.
pub fn header_translate(content: Rect, scroll: Rect) -> Option<f64> {
    let distance = (content.top - scroll.top).floor();
    (distance > 0.0 && distance < scroll.height()).then_some(distance)
}

/// Shift (negative, upward) for a footer whose table body runs below the
/// visible content. `None` means the footer sits naturally.
pub fn footer_translate(content: Rect, footer_parent: Rect, scroll: Rect) -> Option<f64> {
    let distance = (content.bottom - footer_parent.bottom).ceil();
    (distance < 0.0 && -distance < scroll.height()).then_some(distance)
}

/// Update the header and footer transforms of one table block.
///
/// `content` is the visible editor content rectangle and `scroll` the table's
/// scroll area.
pub fn sticky_row<E: StickyElement + ?Sized>(
    content: Rect,
    scroll: Rect,
    header: Option<&mut E>,
    footer: Option<RowFooter<'_, E>>,
    status: RowStatus,
) {
    if let Some(element) = header.filter(|_| status.updates_header()) {
        let shift = header_translate(content, scroll);
        trace!(target: LOG_TARGET, "row header shift {shift:?}");
        set_translate_y(element, shift);
    }
    if let Some(row) = footer.filter(|_| status.updates_footer()) {
        let shift = if row.shows_calculation {
            footer_translate(content, row.parent, scroll)
        } else {
            None
        };
        trace!(target: LOG_TARGET, "row footer shift {shift:?}");
        set_translate_y(row.element, shift);
    }
}

fn set_translate_y<E: StickyElement + ?Sized>(element: &mut E, shift: Option<f64>) {
    let formatted = shift.map(format_translate_y);
    element.set_inline_style("transform", formatted.as_deref());
}
