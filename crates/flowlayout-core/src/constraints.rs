//! Layout constraints passed from a container to its children.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Sizing mode for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeSpec {
    /// The resolved dimension must be exactly this value.
    Exactly(f32),
    /// The resolved dimension may be anything up to this value.
    AtMost(f32),
}

impl SizeSpec {
    /// An upper bound that never clamps.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::AtMost(f32::INFINITY)
    }

    /// The value carried by the spec, regardless of mode.
    #[must_use]
    pub const fn value(&self) -> f32 {
        match *self {
            Self::Exactly(v) | Self::AtMost(v) => v,
        }
    }

    /// Resolve a content-derived dimension against this spec.
    ///
    /// `Exactly` ignores the content; `AtMost` takes the smaller of the two.
    #[must_use]
    pub fn resolve(&self, content: f32) -> f32 {
        match *self {
            Self::Exactly(v) => v,
            Self::AtMost(bound) => content.min(bound),
        }
    }

    /// Same mode with `used` removed from the value, never below zero.
    #[must_use]
    pub fn shrink(&self, used: f32) -> Self {
        match *self {
            Self::Exactly(v) => Self::Exactly((v - used).max(0.0)),
            Self::AtMost(v) => Self::AtMost((v - used).max(0.0)),
        }
    }

    /// Derive the spec a child is measured against.
    ///
    /// `used` is the space already consumed on this axis by the parent's
    /// padding and the child's margins.
    #[must_use]
    pub fn for_child(&self, used: f32, dimension: Dimension) -> Self {
        let available = self.shrink(used);
        match (dimension, available) {
            (Dimension::Exact(d), _) => Self::Exactly(d),
            (Dimension::MatchParent, Self::Exactly(s)) => Self::Exactly(s),
            (Dimension::MatchParent | Dimension::WrapContent, _) => {
                Self::AtMost(available.value())
            }
        }
    }
}

impl Default for SizeSpec {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Requested size for one axis of a child.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Fixed size
    Exact(f32),
    /// Fill the parent's available space
    MatchParent,
    /// Size to content
    #[default]
    WrapContent,
}

/// Width and height specs for a measurement request.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Constraints {
    /// Width spec
    pub width: SizeSpec,
    /// Height spec
    pub height: SizeSpec,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(width: SizeSpec, height: SizeSpec) -> Self {
        Self { width, height }
    }

    /// Create tight constraints that allow only the exact size.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self::new(SizeSpec::Exactly(size.width), SizeSpec::Exactly(size.height))
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(SizeSpec::AtMost(size.width), SizeSpec::AtMost(size.height))
    }

    /// Create unbounded constraints.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(SizeSpec::unbounded(), SizeSpec::unbounded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_spec_default_is_unbounded() {
        let s = SizeSpec::default();
        assert_eq!(s, SizeSpec::AtMost(f32::INFINITY));
        assert_eq!(s.resolve(1234.0), 1234.0);
    }

    #[test]
    fn test_size_spec_resolve() {
        assert_eq!(SizeSpec::Exactly(200.0).resolve(50.0), 200.0);
        assert_eq!(SizeSpec::Exactly(200.0).resolve(500.0), 200.0);
        assert_eq!(SizeSpec::AtMost(100.0).resolve(50.0), 50.0);
        assert_eq!(SizeSpec::AtMost(100.0).resolve(150.0), 100.0);
    }

    #[test]
    fn test_size_spec_shrink_floors_at_zero() {
        assert_eq!(SizeSpec::AtMost(10.0).shrink(4.0), SizeSpec::AtMost(6.0));
        assert_eq!(SizeSpec::Exactly(10.0).shrink(40.0), SizeSpec::Exactly(0.0));
    }

    #[test]
    fn test_for_child_exact_parent() {
        let parent = SizeSpec::Exactly(100.0);
        assert_eq!(
            parent.for_child(10.0, Dimension::Exact(30.0)),
            SizeSpec::Exactly(30.0)
        );
        assert_eq!(
            parent.for_child(10.0, Dimension::MatchParent),
            SizeSpec::Exactly(90.0)
        );
        assert_eq!(
            parent.for_child(10.0, Dimension::WrapContent),
            SizeSpec::AtMost(90.0)
        );
    }

    #[test]
    fn test_for_child_at_most_parent() {
        let parent = SizeSpec::AtMost(100.0);
        assert_eq!(
            parent.for_child(20.0, Dimension::Exact(300.0)),
            SizeSpec::Exactly(300.0)
        );
        assert_eq!(
            parent.for_child(20.0, Dimension::MatchParent),
            SizeSpec::AtMost(80.0)
        );
        assert_eq!(
            parent.for_child(20.0, Dimension::WrapContent),
            SizeSpec::AtMost(80.0)
        );
    }

    #[test]
    fn test_for_child_unbounded_parent_stays_unbounded() {
        let spec = SizeSpec::unbounded().for_child(50.0, Dimension::MatchParent);
        assert_eq!(spec, SizeSpec::AtMost(f32::INFINITY));
    }

    #[test]
    fn test_constraints_tight_and_loose() {
        let tight = Constraints::tight(Size::new(100.0, 50.0));
        assert_eq!(tight.width, SizeSpec::Exactly(100.0));
        assert_eq!(tight.height, SizeSpec::Exactly(50.0));

        let loose = Constraints::loose(Size::new(100.0, 50.0));
        assert_eq!(loose.width, SizeSpec::AtMost(100.0));
        assert_eq!(loose.height, SizeSpec::AtMost(50.0));
        assert_eq!(Constraints::default(), Constraints::unbounded());
    }

    #[test]
    fn test_size_spec_serde_shape() {
        let json = serde_json::to_string(&SizeSpec::AtMost(100.0)).unwrap();
        assert_eq!(json, r#"{"at_most":100.0}"#);
        let back: SizeSpec = serde_json::from_str(r#"{"exactly":200.0}"#).unwrap();
        assert_eq!(back, SizeSpec::Exactly(200.0));
    }
}
