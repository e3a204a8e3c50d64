//! Construction-time attributes and the layout params factory.
//!
//! Attributes are plain string pairs, e.g. `layout_width = "wrap_content"`
//! or `layout_marginLeft = "4dp"`. Only the generic margin-aware keys are
//! recognized; anything else is ignored.

use flowlayout_core::{Dimension, Insets, LayoutParams};
use std::collections::BTreeMap;

use crate::error::ParseError;

const LAYOUT_WIDTH: &str = "layout_width";
const LAYOUT_HEIGHT: &str = "layout_height";
const MARGIN: &str = "layout_margin";
const MARGIN_HORIZONTAL: &str = "layout_marginHorizontal";
const MARGIN_VERTICAL: &str = "layout_marginVertical";
const MARGIN_LEFT: &str = "layout_marginLeft";
const MARGIN_TOP: &str = "layout_marginTop";
const MARGIN_RIGHT: &str = "layout_marginRight";
const MARGIN_BOTTOM: &str = "layout_marginBottom";

const KNOWN_KEYS: [&str; 9] = [
    LAYOUT_WIDTH,
    LAYOUT_HEIGHT,
    MARGIN,
    MARGIN_HORIZONTAL,
    MARGIN_VERTICAL,
    MARGIN_LEFT,
    MARGIN_TOP,
    MARGIN_RIGHT,
    MARGIN_BOTTOM,
];

/// Ordered set of string attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    values: BTreeMap<String, String>,
}

impl AttributeSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace an attribute.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up an attribute.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Iterate attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parse a length such as `12`, `12.5px` or `8dp`.
///
/// Density-independent units are taken 1:1; scaling is the host's job.
pub fn parse_length(field: &str, raw: &str) -> Result<f32, ParseError> {
    let trimmed = raw.trim();
    let number = trimmed
        .strip_suffix("dp")
        .or_else(|| trimmed.strip_suffix("dip"))
        .or_else(|| trimmed.strip_suffix("px"))
        .unwrap_or(trimmed)
        .trim_end();

    let value: f32 = number
        .parse()
        .map_err(|_| ParseError::invalid(field, format!("'{raw}' is not a length")))?;

    if !value.is_finite() {
        return Err(ParseError::invalid(field, "must be finite"));
    }
    if value < 0.0 {
        return Err(ParseError::invalid(field, "must not be negative"));
    }
    Ok(value)
}

/// Parse a `layout_width` / `layout_height` value.
pub fn parse_dimension(field: &str, raw: &str) -> Result<Dimension, ParseError> {
    match raw.trim() {
        "match_parent" | "fill_parent" | "-1" => Ok(Dimension::MatchParent),
        "wrap_content" | "-2" => Ok(Dimension::WrapContent),
        other => parse_length(field, other).map(Dimension::Exact),
    }
}

fn length_attr(attrs: &AttributeSet, key: &str) -> Result<Option<f32>, ParseError> {
    attrs.get(key).map(|raw| parse_length(key, raw)).transpose()
}

/// Build margin-aware layout params from construction attributes.
///
/// Missing dimensions default to `wrap_content`. `layout_margin` sets all
/// four sides, the horizontal/vertical shorthands override it, and the
/// per-side keys override both.
pub fn generate_layout_params(attrs: &AttributeSet) -> Result<LayoutParams, ParseError> {
    for (key, _) in attrs.iter() {
        if !KNOWN_KEYS.contains(&key) {
            tracing::debug!("ignoring unknown layout attribute: {}", key);
        }
    }

    let width = attrs
        .get(LAYOUT_WIDTH)
        .map(|raw| parse_dimension(LAYOUT_WIDTH, raw))
        .transpose()?
        .unwrap_or_default();
    let height = attrs
        .get(LAYOUT_HEIGHT)
        .map(|raw| parse_dimension(LAYOUT_HEIGHT, raw))
        .transpose()?
        .unwrap_or_default();

    let all = length_attr(attrs, MARGIN)?.unwrap_or(0.0);
    let horizontal = length_attr(attrs, MARGIN_HORIZONTAL)?.unwrap_or(all);
    let vertical = length_attr(attrs, MARGIN_VERTICAL)?.unwrap_or(all);

    let margins = Insets::new(
        length_attr(attrs, MARGIN_LEFT)?.unwrap_or(horizontal),
        length_attr(attrs, MARGIN_TOP)?.unwrap_or(vertical),
        length_attr(attrs, MARGIN_RIGHT)?.unwrap_or(horizontal),
        length_attr(attrs, MARGIN_BOTTOM)?.unwrap_or(vertical),
    );

    Ok(LayoutParams::new(width, height).margins(margins))
}
