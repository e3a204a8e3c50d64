#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
//! Flow layout for the flowlayout UI container.
//!
//! Places children left to right and wraps onto a new row whenever the next
//! child would overflow the available width, the way inline text wraps.
//!
//! # Passes
//!
//! - **Measure**: [`measure`] resolves the container size from measured
//!   [`ChildBox`]es and a pair of [`SizeSpec`](flowlayout_core::SizeSpec)s.
//! - **Pack**: [`pack`] splits visible children into [`Row`]s.
//! - **Position**: [`position`] turns rows into [`Placement`]s.
//!
//! [`FlowLayout`] wires the three passes behind the
//! [`Widget`](flowlayout_core::Widget) contract so a host can drive it with
//! `on_measure` / `on_layout`.

mod flow;
mod measure;
mod position;
mod row;

pub use flow::FlowLayout;
pub use measure::{measure, natural_width, wrapped_height};
pub use position::{position, row_members, Placement};
pub use row::{pack, rows_height, ChildBox, Row};

#[cfg(test)]
mod tests {
    use super::*;
    use flowlayout_core::{Insets, SizeSpec};
    use proptest::prelude::*;

    fn arb_box() -> impl Strategy<Value = ChildBox> {
        (0.0f32..120.0, 0.0f32..60.0, 0.0f32..8.0, 0.0f32..8.0, any::<bool>()).prop_map(
            |(w, h, mh, mv, collapsed)| {
                let b = ChildBox::new(w, h).with_margins(Insets::symmetric(mh, mv));
                if collapsed {
                    b.collapsed()
                } else {
                    b
                }
            },
        )
    }

    proptest! {
        #[test]
        fn prop_every_visible_box_in_exactly_one_row_in_order(
            children in proptest::collection::vec(arb_box(), 0..40),
            max_width in 1.0f32..400.0,
        ) {
            let rows = pack(&children, max_width, 0.0, 0.0);
            let flattened: Vec<usize> = rows.iter().flat_map(|r| r.members.iter().copied()).collect();
            let expected: Vec<usize> = children
                .iter()
                .enumerate()
                .filter(|(_, c)| !c.collapsed)
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(flattened, expected);
        }

        #[test]
        fn prop_rows_never_empty(
            children in proptest::collection::vec(arb_box(), 0..40),
            max_width in 1.0f32..400.0,
        ) {
            for row in pack(&children, max_width, 2.0, 2.0) {
                prop_assert!(!row.is_empty());
            }
        }

        #[test]
        fn prop_oversized_box_is_alone(
            children in proptest::collection::vec(arb_box(), 1..30),
            max_width in 1.0f32..100.0,
        ) {
            let rows = pack(&children, max_width, 0.0, 0.0);
            for row in &rows {
                for &i in &row.members {
                    if children[i].outer_width() > max_width {
                        prop_assert_eq!(row.len(), 1);
                    }
                }
            }
        }

        #[test]
        fn prop_multi_member_rows_fit(
            children in proptest::collection::vec(arb_box(), 0..40),
            max_width in 1.0f32..400.0,
            pad in 0.0f32..10.0,
        ) {
            for row in pack(&children, max_width, pad, pad) {
                if row.len() > 1 {
                    let width: f32 = 2.0 * pad
                        + row.members.iter().map(|&i| children[i].outer_width()).sum::<f32>();
                    prop_assert!(width <= max_width + 0.01);
                }
            }
        }

        #[test]
        fn prop_at_most_height_is_rows_plus_padding(
            children in proptest::collection::vec(arb_box(), 0..40),
            max_width in 1.0f32..400.0,
            pad in 0.0f32..10.0,
        ) {
            let padding = Insets::uniform(pad);
            let size = measure(&children, SizeSpec::AtMost(max_width), SizeSpec::unbounded(), padding);
            let rows = pack(&children, size.width, pad, pad);
            prop_assert_eq!(size.height, rows_height(&rows) + padding.vertical());
        }

        #[test]
        fn prop_natural_width_fits_single_row(
            children in proptest::collection::vec(arb_box(), 1..40),
            pad in 0.0f32..16.0,
        ) {
            let padding = Insets::new(pad, pad * 0.5, pad * 1.37, pad);
            let size = measure(&children, SizeSpec::AtMost(1.0e6), SizeSpec::unbounded(), padding);
            let rows = pack(&children, size.width, padding.left, padding.right);
            prop_assert!(rows.len() <= 1);
        }

        #[test]
        fn prop_pack_and_position_idempotent(
            children in proptest::collection::vec(arb_box(), 0..40),
            max_width in 1.0f32..400.0,
        ) {
            let first_rows = pack(&children, max_width, 3.0, 3.0);
            let first = position(&children, &first_rows, 3.0, 3.0);
            let second_rows = pack(&children, max_width, 3.0, 3.0);
            let second = position(&children, &second_rows, 3.0, 3.0);
            prop_assert_eq!(first_rows, second_rows);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_collapsed_never_placed(
            children in proptest::collection::vec(arb_box(), 0..40),
            max_width in 1.0f32..400.0,
        ) {
            let rows = pack(&children, max_width, 0.0, 0.0);
            for placement in position(&children, &rows, 0.0, 0.0) {
                prop_assert!(!children[placement.index].collapsed);
            }
        }

        #[test]
        fn prop_exact_width_is_verbatim(
            children in proptest::collection::vec(arb_box(), 0..20),
            exact in 0.0f32..500.0,
        ) {
            let size = measure(&children, SizeSpec::Exactly(exact), SizeSpec::unbounded(), Insets::ZERO);
            prop_assert_eq!(size.width, exact);
        }
    }
}
