//! Attribute parsing and YAML scene manifests for the flowlayout container.

mod attributes;
mod error;
mod scene;

pub use attributes::{generate_layout_params, parse_dimension, parse_length, AttributeSet};
pub use error::ParseError;
pub use scene::{ChildConfig, ContainerConfig, Scene, SpecBounds, SpecConfig, SpecKeyword};
