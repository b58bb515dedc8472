//! The validated drawing model.
//!
//! This module defines the [`Document`] produced by schema validation and
//! the [`DiagramNode`] elements it contains. A `Document` is immutable once
//! built; every later pipeline stage (normalization, screen extraction,
//! classification, emission) only reads it or produces a new one.
//!
//! Serialization uses the drawing file's camelCase field names, and the
//! serialized form doubles as the canonical byte stream for content
//! fingerprinting, so field order and `Option` skipping here are part of
//! the fingerprint contract.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::geometry::{Point, Rect, Size};

/// The closed set of shape kinds the generator understands.
///
/// Connectors/edges and richer shape taxonomies are deliberately not part
/// of this set; unknown shapes are rejected during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Rectangle,
    Icon,
    Text,
}

/// Per-corner radii of a rectangle node.
///
/// Drawing tools store each corner independently; classification and
/// emission both reduce this to a single radius via [`first_defined`],
/// using a fixed corner priority so the reduction is deterministic.
///
/// [`first_defined`]: CornerRadii::first_defined
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerRadii {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_left: Option<f64>,
}

impl CornerRadii {
    /// Returns the first defined corner radius in the fixed priority order
    /// top-left, top-right, bottom-left, bottom-right.
    pub fn first_defined(&self) -> Option<f64> {
        self.top_left
            .or(self.top_right)
            .or(self.bottom_left)
            .or(self.bottom_right)
    }
}

/// Visual style attributes of a drawing node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    /// Fill color value as stored by the drawing tool (not necessarily a
    /// valid CSS color).
    #[serde(rename = "fillStyle", skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,

    /// Stroke color value as stored by the drawing tool.
    #[serde(rename = "strokeStyle", skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_opacity: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radii: Option<CornerRadii>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_provider: Option<String>,

    /// Icon identifier; its presence promotes a node to the icon kind
    /// regardless of shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
}

/// Text attributes of a drawing node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeText {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
}

/// One visual element of the drawing.
///
/// Invariants established by validation: `id` is non-empty and unique
/// within the document, and both size components are non-negative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramNode {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,

    pub position: Point,

    pub size: Size,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<NodeStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<NodeText>,

    /// Free-form metadata passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl DiagramNode {
    /// Returns the bounding rectangle of this node.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Returns the trimmed text content, or `None` when there is no text
    /// or it is only whitespace.
    pub fn text_content(&self) -> Option<&str> {
        let content = self.text.as_ref()?.content.as_deref()?.trim();
        (!content.is_empty()).then_some(content)
    }

    /// Returns the text font size, defaulting to zero when unset.
    pub fn font_size(&self) -> f64 {
        self.text
            .as_ref()
            .and_then(|text| text.font_size)
            .unwrap_or(0.0)
    }

    /// Returns the first defined corner radius, if any corner is set.
    pub fn corner_radius(&self) -> Option<f64> {
        self.style
            .as_ref()
            .and_then(|style| style.corner_radii.as_ref())
            .and_then(CornerRadii::first_defined)
    }
}

/// Declared schema version of a drawing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Optional document-level metadata carried by the drawing file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<SchemaVersion>,
}

/// The validated root of a drawing.
///
/// Element order is the drawing file's insertion order and serves as the
/// z-order tie-break downstream. Each pipeline invocation owns its
/// document exclusively; nothing is shared across requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub elements: Vec<DiagramNode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMeta>,
}
