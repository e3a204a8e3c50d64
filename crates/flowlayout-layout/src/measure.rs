//! Container measurement: resolve the flow container's own size.

use flowlayout_core::{Insets, Size, SizeSpec};

use crate::row::{pack, rows_height, ChildBox};

/// Width of all visible children laid out in a single row, plus padding.
///
/// Accumulates in the same order as [`pack`] so that packing at this width
/// keeps every visible child on one row.
#[must_use]
pub fn natural_width(children: &[ChildBox], padding: Insets) -> f32 {
    children
        .iter()
        .filter(|child| !child.collapsed)
        .fold(padding.left + padding.right, |width, child| {
            width + child.outer_width()
        })
}

/// Height of the children wrapped at `max_width`, plus padding.
#[must_use]
pub fn wrapped_height(children: &[ChildBox], max_width: f32, padding: Insets) -> f32 {
    let rows = pack(children, max_width, padding.left, padding.right);
    padding.vertical() + rows_height(&rows)
}

/// Resolve the container size from already measured children.
///
/// An exact spec is taken as-is. An `AtMost` width is the single-row
/// natural width capped at the bound; an `AtMost` height is the wrapped
/// height at the resolved width, capped at the bound.
#[must_use]
pub fn measure(
    children: &[ChildBox],
    width: SizeSpec,
    height: SizeSpec,
    padding: Insets,
) -> Size {
    let resolved_width = match width {
        SizeSpec::Exactly(w) => w,
        SizeSpec::AtMost(bound) => natural_width(children, padding).min(bound),
    };

    let resolved_height = match height {
        SizeSpec::Exactly(h) => h,
        SizeSpec::AtMost(bound) => wrapped_height(children, resolved_width, padding).min(bound),
    };

    Size::new(resolved_width, resolved_height)
}
