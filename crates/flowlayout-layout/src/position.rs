//! Positioning: turn packed rows into child frames.

use flowlayout_core::Rect;
use serde::{Deserialize, Serialize};

use crate::row::{ChildBox, Row};

/// Final frame for one child.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Index into the child list
    pub index: usize,
    /// Index of the row the child was packed into
    pub row: usize,
    /// Frame in container coordinates, margins excluded
    pub frame: Rect,
}

/// Assign a frame to every member of every row.
///
/// Rows stack downward from `padding_top`; members run rightward from
/// `padding_left`, each offset by its own leading margins. Indices that do
/// not resolve to a visible child are skipped.
#[must_use]
pub fn position(
    children: &[ChildBox],
    rows: &[Row],
    padding_left: f32,
    padding_top: f32,
) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(rows.iter().map(Row::len).sum());
    let mut row_top = padding_top;

    for (row_index, row) in rows.iter().enumerate() {
        let mut row_left = padding_left;
        for &index in &row.members {
            let Some(child) = children.get(index).filter(|c| !c.collapsed) else {
                tracing::trace!(index, "skipping unresolved row member");
                continue;
            };
            let left = row_left + child.margins.left;
            let top = row_top + child.margins.top;
            placements.push(Placement {
                index,
                row: row_index,
                frame: Rect::new(left, top, child.size.width, child.size.height),
            });
            row_left += child.outer_width();
        }
        row_top += row.height;
    }

    placements
}

/// Child indices grouped by the row they were placed in.
///
/// Rows with no placed member are dropped.
#[must_use]
pub fn row_members(placements: &[Placement]) -> Vec<Vec<usize>> {
    let mut rows: Vec<(usize, Vec<usize>)> = Vec::new();
    for placement in placements {
        match rows.last_mut() {
            Some((row, members)) if *row == placement.row => members.push(placement.index),
            _ => rows.push((placement.row, vec![placement.index])),
        }
    }
    rows.into_iter().map(|(_, members)| members).collect()
}
