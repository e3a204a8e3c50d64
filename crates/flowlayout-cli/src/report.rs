//! Layout reports printed by the `layout` subcommand.

use flowlayout_core::{Rect, Size};
use flowlayout_layout::{row_members, FlowLayout};
use flowlayout_yaml::{ParseError, Scene};
use serde::Serialize;
use std::fmt::Write as _;

/// One placed child.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PlacedChild {
    pub(crate) index: usize,
    pub(crate) id: Option<String>,
    pub(crate) row: usize,
    pub(crate) frame: Rect,
}

/// Result of a measure + layout pass over a scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct LayoutReport {
    pub(crate) size: Size,
    pub(crate) rows: Vec<Vec<usize>>,
    pub(crate) children: Vec<PlacedChild>,
}

impl LayoutReport {
    /// Build, measure and lay out a scene.
    pub(crate) fn run(scene: &Scene) -> Result<Self, ParseError> {
        let mut flow: FlowLayout = scene.build()?;
        let size = flow.on_measure(scene.constraints()?);
        let placements = flow.on_layout(Rect::from_size(size));

        let children = placements
            .iter()
            .map(|p| PlacedChild {
                index: p.index,
                id: flow
                    .child(p.index)
                    .and_then(|c| c.id())
                    .map(str::to_string),
                row: p.row,
                frame: p.frame,
            })
            .collect();

        Ok(Self {
            size,
            rows: row_members(&placements),
            children,
        })
    }

    /// Human-readable rendering.
    pub(crate) fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Size: {} x {}", self.size.width, self.size.height);
        let _ = writeln!(out, "Rows: {}", self.rows.len());
        for child in &self.children {
            let name = child
                .id
                .clone()
                .unwrap_or_else(|| format!("#{}", child.index));
            let _ = writeln!(
                out,
                "  [{}] {:<12} x={} y={} w={} h={}",
                child.row, name, child.frame.x, child.frame.y, child.frame.width, child.frame.height
            );
        }
        out
    }
}
