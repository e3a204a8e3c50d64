//! YAML scene manifests: a flow container plus its children.
//!
//! ```yaml
//! container:
//!   padding: { left: 4, top: 4, right: 4, bottom: 4 }
//!   width: { at_most: 320 }
//!   height: unbounded
//! children:
//!   - id: tag-rust
//!     content: [48, 20]
//!     attributes:
//!       layout_margin: 2dp
//!   - id: hidden
//!     content: [100, 20]
//!     visibility: gone
//! ```

use flowlayout_core::{Constraints, FixedWidget, Insets, SizeSpec, Visibility};
use flowlayout_layout::FlowLayout;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::attributes::{generate_layout_params, AttributeSet};
use crate::error::ParseError;

/// Keyword form of a [`SpecConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecKeyword {
    /// No bound
    #[default]
    Unbounded,
}

/// Bounded form of a [`SpecConfig`].
///
/// At most one of the two fields may be set; neither means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecBounds {
    /// Exact size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exactly: Option<f32>,
    /// Upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at_most: Option<f32>,
}

/// A width or height spec as written in a scene: `unbounded`,
/// `{ exactly: v }` or `{ at_most: v }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecConfig {
    /// Bare keyword, e.g. `width: unbounded`
    Keyword(SpecKeyword),
    /// Mapping with `exactly` or `at_most`
    Bounds(SpecBounds),
}

impl Default for SpecConfig {
    fn default() -> Self {
        Self::Keyword(SpecKeyword::Unbounded)
    }
}

impl SpecConfig {
    /// Convert to a [`SizeSpec`], validating the value.
    pub fn to_spec(&self, field: &str) -> Result<SizeSpec, ParseError> {
        let bounds = match self {
            Self::Keyword(SpecKeyword::Unbounded) => return Ok(SizeSpec::unbounded()),
            Self::Bounds(bounds) => bounds,
        };
        let spec = match (bounds.exactly, bounds.at_most) {
            (Some(_), Some(_)) => {
                return Err(ParseError::invalid(
                    field,
                    "set either 'exactly' or 'at_most', not both",
                ))
            }
            (Some(v), None) => SizeSpec::Exactly(v),
            (None, Some(v)) => SizeSpec::AtMost(v),
            (None, None) => return Ok(SizeSpec::unbounded()),
        };
        let value = spec.value();
        if !value.is_finite() || value < 0.0 {
            return Err(ParseError::invalid(
                field,
                "must be a finite, non-negative size",
            ));
        }
        Ok(spec)
    }
}

/// Container section of a scene.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContainerConfig {
    /// Container ID
    #[serde(default)]
    pub id: Option<String>,
    /// Inner padding
    #[serde(default)]
    pub padding: Insets,
    /// Width spec
    #[serde(default)]
    pub width: SpecConfig,
    /// Height spec
    #[serde(default)]
    pub height: SpecConfig,
}

/// One child entry of a scene.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChildConfig {
    /// Child ID
    #[serde(default)]
    pub id: Option<String>,
    /// Intrinsic content size `[width, height]`
    #[serde(default)]
    pub content: Option<[f32; 2]>,
    /// Visibility
    #[serde(default)]
    pub visibility: Visibility,
    /// Construction attributes (layout_width, layout_margin, ...)
    #[serde(default)]
    pub attributes: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ChildConfig {
    /// Flatten YAML attribute scalars into an [`AttributeSet`].
    pub fn attribute_set(&self, path: &str) -> Result<AttributeSet, ParseError> {
        let mut attrs = AttributeSet::new();
        for (key, value) in &self.attributes {
            let text = match value {
                serde_yaml_ng::Value::String(s) => s.clone(),
                serde_yaml_ng::Value::Number(n) => n.to_string(),
                _ => {
                    return Err(ParseError::invalid(
                        format!("{path}.attributes.{key}"),
                        "expected a string or number",
                    ))
                }
            };
            attrs.insert(key.clone(), text);
        }
        Ok(attrs)
    }
}

/// A flow container scene loaded from YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    /// Container configuration
    #[serde(default)]
    pub container: ContainerConfig,
    /// Children in layout order
    #[serde(default)]
    pub children: Vec<ChildConfig>,
}

impl Scene {
    /// Parse and validate a scene.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        let scene: Self = serde_yaml_ng::from_str(yaml)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Serialize the scene back to YAML.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check sizes, attributes and id uniqueness.
    pub fn validate(&self) -> Result<(), ParseError> {
        if !self.container.padding.is_valid() {
            return Err(ParseError::invalid(
                "container.padding",
                "every side must be finite and non-negative",
            ));
        }
        self.constraints()?;

        let mut seen = HashSet::new();
        for (i, child) in self.children.iter().enumerate() {
            let path = format!("children[{i}]");
            let [w, h] = child
                .content
                .ok_or_else(|| ParseError::MissingField(format!("{path}.content")))?;
            if !(w.is_finite() && h.is_finite() && w >= 0.0 && h >= 0.0) {
                return Err(ParseError::invalid(
                    format!("{path}.content"),
                    "must be a finite, non-negative size",
                ));
            }
            generate_layout_params(&child.attribute_set(&path)?)?;
            if let Some(id) = &child.id {
                if !seen.insert(id.as_str()) {
                    return Err(ParseError::DuplicateId(id.clone()));
                }
            }
        }
        Ok(())
    }

    /// Constraints the host passes to the container's measure pass.
    pub fn constraints(&self) -> Result<Constraints, ParseError> {
        Ok(Constraints::new(
            self.container.width.to_spec("container.width")?,
            self.container.height.to_spec("container.height")?,
        ))
    }

    /// Build the container with one [`FixedWidget`] per child.
    pub fn build(&self) -> Result<FlowLayout, ParseError> {
        let mut flow = FlowLayout::new().with_padding(self.container.padding);
        if let Some(id) = &self.container.id {
            flow = flow.with_id(id.clone());
        }

        for (i, child) in self.children.iter().enumerate() {
            let path = format!("children[{i}]");
            let [w, h] = child
                .content
                .ok_or_else(|| ParseError::MissingField(format!("{path}.content")))?;
            let params = generate_layout_params(&child.attribute_set(&path)?)?;

            let mut widget = FixedWidget::new(w, h)
                .with_params(params)
                .with_visibility(child.visibility);
            if let Some(id) = &child.id {
                widget = widget.with_id(id.clone());
            }
            flow.push_child(Box::new(widget));
        }

        tracing::debug!("built flow scene with {} children", flow.len());
        Ok(flow)
    }
}
