//! Geometric primitives: Size, Rect, `Insets`.

use serde::{Deserialize, Serialize};

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from size at origin.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Bottom edge (y + height).
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Move the rectangle by the given offset.
    #[must_use]
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Edge insets used for both container padding and child margins.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    /// Left inset
    #[serde(default)]
    pub left: f32,
    /// Top inset
    #[serde(default)]
    pub top: f32,
    /// Right inset
    #[serde(default)]
    pub right: f32,
    /// Bottom inset
    #[serde(default)]
    pub bottom: f32,
}

impl Insets {
    /// No insets
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Create insets with individual values.
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same inset on all four sides.
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Symmetric insets: `horizontal` on left/right, `vertical` on top/bottom.
    #[must_use]
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Sum of left and right.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Check that every side is finite and non-negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.left, self.top, self.right, self.bottom]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_default() {
        assert_eq!(Size::default(), Size::ZERO);
    }

    #[test]
    fn test_rect_bottom() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(Rect::from_size(Size::new(30.0, 40.0)).bottom(), 40.0);
    }

    #[test]
    fn test_rect_translate() {
        let r = Rect::new(0.0, 0.0, 5.0, 5.0).translate(3.0, 4.0);
        assert_eq!(r, Rect::new(3.0, 4.0, 5.0, 5.0));
    }

    #[test]
    fn test_insets_sums() {
        let i = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(i.horizontal(), 4.0);
        assert_eq!(i.vertical(), 6.0);
        assert_eq!(Insets::symmetric(5.0, 6.0), Insets::new(5.0, 6.0, 5.0, 6.0));
    }

    #[test]
    fn test_insets_validity() {
        assert!(Insets::uniform(2.0).is_valid());
        assert!(!Insets::new(-1.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!Insets::new(0.0, f32::NAN, 0.0, 0.0).is_valid());
    }

    #[test]
    fn test_insets_deserialize_partial() {
        let i: Insets = serde_json::from_str(r#"{"left": 4.0}"#).unwrap();
        assert_eq!(i, Insets::new(4.0, 0.0, 0.0, 0.0));
    }
}
