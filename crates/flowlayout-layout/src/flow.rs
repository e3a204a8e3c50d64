//! The flow container: a [`Widget`] that wraps its children into rows.

use flowlayout_core::{
    Adapter, Constraints, Insets, LayoutParams, Rect, Size, SizeSpec, Visibility, Widget,
};
use std::fmt;

use crate::measure::measure;
use crate::position::{position, Placement};
use crate::row::{pack, ChildBox, Row};

/// Container that places children left to right and wraps on overflow.
///
/// The host drives two passes: [`FlowLayout::on_measure`] resolves the
/// container size, then [`FlowLayout::on_layout`] assigns every visible
/// child its frame. Row groupings are recomputed in each pass and never
/// stored on the container.
#[derive(Default)]
pub struct FlowLayout {
    id: Option<String>,
    children: Vec<Box<dyn Widget>>,
    padding: Insets,
    params: LayoutParams,
    visibility: Visibility,
    measured: Size,
    frame: Option<Rect>,
}

impl FlowLayout {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one child per adapter item, in adapter order.
    pub fn from_adapter<T, F>(adapter: &Adapter<T>, mut factory: F) -> Self
    where
        F: FnMut(&T) -> Box<dyn Widget>,
    {
        let mut flow = Self::new();
        flow.children.reserve(adapter.count());
        for item in adapter {
            flow.children.push(factory(item));
        }
        flow
    }

    /// Set the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the container padding.
    #[must_use]
    pub const fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Set the params used when this container is nested in another.
    #[must_use]
    pub const fn with_params(mut self, params: LayoutParams) -> Self {
        self.params = params;
        self
    }

    /// Set the visibility.
    #[must_use]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Append a child.
    #[must_use]
    pub fn with_child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Append a boxed child.
    pub fn push_child(&mut self, child: Box<dyn Widget>) {
        self.children.push(child);
    }

    /// Container padding.
    #[must_use]
    pub const fn padding(&self) -> Insets {
        self.padding
    }

    /// Children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    /// Child at `index`, if any.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<&dyn Widget> {
        self.children.get(index).map(AsRef::as_ref)
    }

    /// Number of children, including collapsed ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the container has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Snapshot of every child's measured box, in child order.
    #[must_use]
    pub fn boxes(&self) -> Vec<ChildBox> {
        self.children
            .iter()
            .map(|child| ChildBox::from_widget(child.as_ref()))
            .collect()
    }

    fn measure_children(&mut self, constraints: Constraints) {
        let padding = self.padding;
        for child in &mut self.children {
            if child.visibility().is_gone() {
                continue;
            }
            let params = *child.layout_params();
            let width = constraints.width.for_child(
                padding.horizontal() + params.margins.horizontal(),
                params.width,
            );
            let height = constraints.height.for_child(
                padding.vertical() + params.margins.vertical(),
                params.height,
            );
            child.measure(width, height);
        }
    }

    /// Measurement callback: measure children, then resolve our own size.
    pub fn on_measure(&mut self, constraints: Constraints) -> Size {
        self.measure_children(constraints);
        let boxes = self.boxes();
        self.measured = measure(&boxes, constraints.width, constraints.height, self.padding);
        tracing::debug!(
            children = boxes.len(),
            width = self.measured.width,
            height = self.measured.height,
            "flow measured"
        );
        self.measured
    }

    /// Whether `rows` group the children differently from a pack at the
    /// measured width.
    fn rows_differ_from_measure(&self, boxes: &[ChildBox], rows: &[Row]) -> bool {
        let measured = pack(boxes, self.measured.width, self.padding.left, self.padding.right);
        measured.len() != rows.len()
            || measured.iter().zip(rows).any(|(a, b)| a.members != b.members)
    }

    /// Layout callback: pack against `bounds.width` and place every child.
    ///
    /// Returned frames are absolute, i.e. offset by the origin of `bounds`,
    /// and each carries the row it was packed into.
    pub fn on_layout(&mut self, bounds: Rect) -> Vec<Placement> {
        let boxes = self.boxes();
        let rows = pack(&boxes, bounds.width, self.padding.left, self.padding.right);
        if tracing::enabled!(tracing::Level::DEBUG)
            && self.rows_differ_from_measure(&boxes, &rows)
        {
            tracing::debug!(
                measured = self.measured.width,
                given = bounds.width,
                "flow rows at layout width differ from the measure pass"
            );
        }
        let mut placements = position(&boxes, &rows, self.padding.left, self.padding.top);

        for placement in &mut placements {
            placement.frame = placement.frame.translate(bounds.x, bounds.y);
            if let Some(child) = self.children.get_mut(placement.index) {
                child.layout(placement.frame);
            }
        }
        self.frame = Some(bounds);

        tracing::debug!(
            rows = rows.len(),
            placed = placements.len(),
            "flow laid out"
        );
        placements
    }
}

impl fmt::Debug for FlowLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowLayout")
            .field("id", &self.id)
            .field("children", &self.children.len())
            .field("padding", &self.padding)
            .field("measured", &self.measured)
            .field("frame", &self.frame)
            .finish()
    }
}

impl Widget for FlowLayout {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn measure(&mut self, width: SizeSpec, height: SizeSpec) -> Size {
        self.on_measure(Constraints::new(width, height))
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn layout_params(&self) -> &LayoutParams {
        &self.params
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn layout(&mut self, frame: Rect) {
        let _ = self.on_layout(frame);
    }

    fn frame(&self) -> Option<Rect> {
        self.frame
    }
}
