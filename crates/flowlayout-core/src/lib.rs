//! Core types and traits for the flowlayout container.
//!
//! This crate provides the foundational types shared by the layout passes:
//! - Geometric primitives: [`Size`], [`Rect`], [`Insets`]
//! - Sizing modes: [`SizeSpec`], [`Constraints`], [`Dimension`]
//! - The child contract: [`Widget`], [`LayoutParams`], [`Visibility`]
//! - An ordered item holder: [`Adapter`]

mod adapter;
mod constraints;
mod geometry;
pub mod widget;

pub use adapter::Adapter;
pub use constraints::{Constraints, Dimension, SizeSpec};
pub use geometry::{Insets, Rect, Size};
pub use widget::{FixedWidget, LayoutParams, Visibility, Widget};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_resolve_at_most_never_exceeds_bound(content in 0.0f32..1000.0, bound in 0.0f32..1000.0) {
            let resolved = SizeSpec::AtMost(bound).resolve(content);
            prop_assert!(resolved <= bound);
            prop_assert!(resolved <= content);
        }

        #[test]
        fn prop_resolve_exactly_ignores_content(content in 0.0f32..1000.0, exact in 0.0f32..1000.0) {
            prop_assert_eq!(SizeSpec::Exactly(exact).resolve(content), exact);
        }

        #[test]
        fn prop_child_spec_never_negative(parent in 0.0f32..500.0, used in 0.0f32..1000.0) {
            for dim in [Dimension::MatchParent, Dimension::WrapContent] {
                prop_assert!(SizeSpec::AtMost(parent).for_child(used, dim).value() >= 0.0);
                prop_assert!(SizeSpec::Exactly(parent).for_child(used, dim).value() >= 0.0);
            }
        }

        #[test]
        fn prop_fixed_widget_fits_loose_bounds(w in 0.0f32..500.0, h in 0.0f32..500.0, bw in 0.0f32..500.0, bh in 0.0f32..500.0) {
            let mut widget = FixedWidget::new(w, h);
            let size = widget.measure(SizeSpec::AtMost(bw), SizeSpec::AtMost(bh));
            prop_assert!(size.width <= bw && size.height <= bh);
        }
    }
}
