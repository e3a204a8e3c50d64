//! Row packing: split an ordered run of children into wrapped rows.

use flowlayout_core::{Insets, Size, Widget};
use serde::{Deserialize, Serialize};

/// A child's measured size together with its margins.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChildBox {
    /// Measured size
    pub size: Size,
    /// Outer margins
    pub margins: Insets,
    /// Collapsed children are skipped entirely
    pub collapsed: bool,
}

impl ChildBox {
    /// Create a visible box with no margins.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            margins: Insets::ZERO,
            collapsed: false,
        }
    }

    /// Set the margins.
    #[must_use]
    pub const fn with_margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }

    /// Mark the box as collapsed.
    #[must_use]
    pub const fn collapsed(mut self) -> Self {
        self.collapsed = true;
        self
    }

    /// Snapshot a widget's measured size, margins and visibility.
    #[must_use]
    pub fn from_widget(widget: &dyn Widget) -> Self {
        Self {
            size: widget.measured_size(),
            margins: widget.layout_params().margins,
            collapsed: widget.visibility().is_gone(),
        }
    }

    /// Width including left and right margins.
    #[must_use]
    pub fn outer_width(&self) -> f32 {
        self.size.width + self.margins.horizontal()
    }

    /// Height including top and bottom margins.
    #[must_use]
    pub fn outer_height(&self) -> f32 {
        self.size.height + self.margins.vertical()
    }
}

/// One visual line of children.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    /// Indices into the child list, in input order
    pub members: Vec<usize>,
    /// Tallest member's outer height
    pub height: f32,
}

impl Row {
    fn push(&mut self, index: usize, child: &ChildBox) {
        self.members.push(index);
        self.height = self.height.max(child.outer_height());
    }

    /// Number of children in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the row has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Pack visible children into rows no wider than `max_width`.
///
/// Row width starts at the horizontal padding. A child that would push the
/// row strictly past `max_width` starts a new row, except when it is the
/// first child tried for the current row: then it is placed alone and the
/// row is closed. No child is ever dropped.
#[must_use]
pub fn pack(
    children: &[ChildBox],
    max_width: f32,
    padding_left: f32,
    padding_right: f32,
) -> Vec<Row> {
    let base = padding_left + padding_right;
    let mut rows = Vec::new();
    let mut current = Row::default();
    let mut row_width = base;

    for (index, child) in children.iter().enumerate() {
        if child.collapsed {
            continue;
        }
        let span = child.outer_width();

        if row_width + span > max_width {
            if current.is_empty() {
                current.push(index, child);
                rows.push(std::mem::take(&mut current));
                row_width = base;
            } else {
                rows.push(std::mem::take(&mut current));
                current.push(index, child);
                row_width = base + span;
            }
        } else {
            current.push(index, child);
            row_width += span;
        }
    }

    if !current.is_empty() {
        rows.push(current);
    }

    tracing::trace!(rows = rows.len(), max_width, "packed flow rows");
    rows
}

/// Sum of all row heights.
#[must_use]
pub fn rows_height(rows: &[Row]) -> f32 {
    rows.iter().map(|row| row.height).sum()
}
