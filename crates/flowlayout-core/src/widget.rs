//! Child contract between a container and the elements it arranges.
//!
//! A container asks each child to measure itself against a derived
//! [`SizeSpec`] pair, reads back the measured size together with the
//! child's [`LayoutParams`], and finally hands it a frame via
//! [`Widget::layout`]. The child owns its own measurement; the container
//! only reads results.

use crate::constraints::{Dimension, SizeSpec};
use crate::geometry::{Insets, Rect, Size};
use serde::{Deserialize, Serialize};

/// Whether a child takes part in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Measured, packed and positioned
    #[default]
    Visible,
    /// Collapsed: takes no space and receives no position
    Gone,
}

impl Visibility {
    /// Check if the child is collapsed out of layout.
    #[must_use]
    pub const fn is_gone(self) -> bool {
        matches!(self, Self::Gone)
    }
}

/// Margin-aware layout parameters attached to every child.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Requested width
    #[serde(default)]
    pub width: Dimension,
    /// Requested height
    #[serde(default)]
    pub height: Dimension,
    /// Outer margins
    #[serde(default)]
    pub margins: Insets,
}

impl LayoutParams {
    /// Create params with the given dimensions and no margins.
    #[must_use]
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self {
            width,
            height,
            margins: Insets::ZERO,
        }
    }

    /// Wrap content on both axes.
    #[must_use]
    pub const fn wrap_content() -> Self {
        Self::new(Dimension::WrapContent, Dimension::WrapContent)
    }

    /// Set the margins.
    #[must_use]
    pub const fn margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }
}

/// A child element that can be measured and positioned by a container.
pub trait Widget: Send + Sync {
    /// Optional identifier used in diagnostics and layout reports.
    fn id(&self) -> Option<&str> {
        None
    }

    /// Measure against the given specs and remember the result.
    fn measure(&mut self, width: SizeSpec, height: SizeSpec) -> Size;

    /// Size recorded by the most recent [`Widget::measure`] call.
    fn measured_size(&self) -> Size;

    /// Layout parameters, including margins.
    fn layout_params(&self) -> &LayoutParams;

    /// Visibility; `Gone` children are skipped by containers.
    fn visibility(&self) -> Visibility {
        Visibility::Visible
    }

    /// Accept the final frame chosen by the container.
    fn layout(&mut self, frame: Rect);

    /// Frame assigned by the most recent [`Widget::layout`] call.
    fn frame(&self) -> Option<Rect>;
}

/// Leaf widget with a fixed intrinsic content size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FixedWidget {
    id: Option<String>,
    content: Size,
    params: LayoutParams,
    visibility: Visibility,
    measured: Size,
    frame: Option<Rect>,
}

impl FixedWidget {
    /// Create a widget whose content is `width` x `height`.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            content: Size::new(width, height),
            params: LayoutParams::wrap_content(),
            ..Self::default()
        }
    }

    /// Set the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Replace the layout params.
    #[must_use]
    pub const fn with_params(mut self, params: LayoutParams) -> Self {
        self.params = params;
        self
    }

    /// Set the margins, keeping the requested dimensions.
    #[must_use]
    pub const fn with_margins(mut self, margins: Insets) -> Self {
        self.params.margins = margins;
        self
    }

    /// Set the visibility.
    #[must_use]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Intrinsic content size.
    #[must_use]
    pub const fn content(&self) -> Size {
        self.content
    }
}

impl Widget for FixedWidget {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn measure(&mut self, width: SizeSpec, height: SizeSpec) -> Size {
        self.measured = Size::new(
            width.resolve(self.content.width),
            height.resolve(self.content.height),
        );
        self.measured
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
        self.frame = Some(frame);
    }

    fn frame(&self) -> Option<Rect> {
        self.frame
    }
}
