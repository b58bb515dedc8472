//! Structural and type validation of raw drawing JSON.
//!
//! The validator is an explicit recursive walk over a [`serde_json::Value`]
//! rather than a derive-based deserialize: every problem in the document is
//! collected with its field path before the whole document is rejected, and
//! unrecognized fields are tolerated for forward compatibility.
//!
//! Validation is all-or-nothing. A single invalid element fails the whole
//! document; there is no partial acceptance.

use std::collections::HashSet;

use log::debug;
use serde_json::Value;

use stencil_core::geometry::{Point, Size};
use stencil_core::model::{
    CornerRadii, DiagramNode, Document, DocumentMeta, NodeStyle, NodeText, SchemaVersion, Shape,
};

use crate::error::{Diagnostic, DiagnosticCollector, ValidateError};

/// File-type marker accepted in the optional root `fileType` field.
const FILE_TYPE: &str = "stencil-drawing";

/// Validate an arbitrary parsed-JSON value into a [`Document`].
///
/// # Errors
///
/// Returns a [`ValidateError`] carrying the full ordered list of
/// path-qualified diagnostics when the value does not conform to the
/// drawing schema.
pub fn validate(value: &Value) -> Result<Document, ValidateError> {
    let mut collector = DiagnosticCollector::new();
    let document = validate_root(value, &mut collector);

    collector.finish()?;

    match document {
        Some(document) => {
            debug!(elements = document.elements.len(); "Drawing validated");
            Ok(document)
        }
        // Unreachable in practice: a missing document always comes with
        // at least one collected error.
        None => Err(Diagnostic::error("unknown validation failure").into()),
    }
}

fn validate_root(value: &Value, collector: &mut DiagnosticCollector) -> Option<Document> {
    let Some(root) = value.as_object() else {
        collector.emit(Diagnostic::error("expected the document root to be an object"));
        return None;
    };

    if let Some(file_type) = root.get("fileType") {
        match file_type.as_str() {
            Some(FILE_TYPE) => {}
            _ => collector.emit(
                Diagnostic::error(format!("expected file type `{FILE_TYPE}`"))
                    .with_path("fileType"),
            ),
        }
    }

    let elements = match root.get("elements") {
        Some(Value::Array(items)) => validate_elements(items, collector),
        Some(_) => {
            collector.emit(Diagnostic::error("expected an array").with_path("elements"));
            None
        }
        None => {
            collector.emit(Diagnostic::error("missing required field `elements`"));
            None
        }
    };

    let metadata = match root.get("metadata") {
        Some(value) => validate_metadata(value, collector),
        None => None,
    };

    Some(Document {
        elements: elements?,
        metadata,
    })
}

fn validate_elements(
    items: &[Value],
    collector: &mut DiagnosticCollector,
) -> Option<Vec<DiagramNode>> {
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut elements = Vec::with_capacity(items.len());
    let mut all_valid = true;

    for (index, item) in items.iter().enumerate() {
        match validate_element(item, index, collector) {
            Some(node) => {
                if !seen_ids.insert(node.id.clone()) {
                    collector.emit(
                        Diagnostic::error(format!("duplicate element id `{}`", node.id))
                            .with_path(format!("elements.{index}.id")),
                    );
                    all_valid = false;
                }
                elements.push(node);
            }
            None => all_valid = false,
        }
    }

    all_valid.then_some(elements)
}

fn validate_element(
    value: &Value,
    index: usize,
    collector: &mut DiagnosticCollector,
) -> Option<DiagramNode> {
    let path = format!("elements.{index}");

    let Some(element) = value.as_object() else {
        collector.emit(Diagnostic::error("expected an object").with_path(path));
        return None;
    };

    let mut valid = true;

    let id = match element.get("id").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => id.to_owned(),
        _ => {
            collector.emit(
                Diagnostic::error("expected a non-empty string").with_path(format!("{path}.id")),
            );
            valid = false;
            String::new()
        }
    };

    match element.get("type").and_then(Value::as_str) {
        Some("node") => {}
        _ => {
            collector
                .emit(Diagnostic::error("expected `\"node\"`").with_path(format!("{path}.type")));
            valid = false;
        }
    }

    let shape = match element.get("shape") {
        None | Some(Value::Null) => None,
        Some(value) => match value.as_str() {
            Some("rectangle") => Some(Shape::Rectangle),
            Some("icon") => Some(Shape::Icon),
            Some("text") => Some(Shape::Text),
            _ => {
                collector.emit(
                    Diagnostic::error("expected one of `rectangle`, `icon`, `text`")
                        .with_path(format!("{path}.shape")),
                );
                valid = false;
                None
            }
        },
    };

    let position = validate_position(element.get("position"), &path, collector);
    let size = validate_size(element.get("size"), &path, collector);

    let z_index = optional_number(element.get("zIndex"), &format!("{path}.zIndex"), collector);
    let angle = optional_number(element.get("angle"), &format!("{path}.angle"), collector);

    let style = match element.get("style") {
        Some(value) => {
            let style = validate_style(value, &path, collector);
            valid &= style.is_some();
            style.flatten()
        }
        None => None,
    };

    let text = match element.get("text") {
        Some(value) => {
            let text = validate_text(value, &path, collector);
            valid &= text.is_some();
            text.flatten()
        }
        None => None,
    };

    let metadata = match element.get("metadata") {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map.clone()),
        Some(_) => {
            collector
                .emit(Diagnostic::error("expected an object").with_path(format!("{path}.metadata")));
            valid = false;
            None
        }
    };

    // Ports are tolerated but not modeled; only their shape is checked.
    if let Some(ports) = element.get("ports") {
        if !matches!(ports, Value::Array(_) | Value::Null) {
            collector
                .emit(Diagnostic::error("expected an array").with_path(format!("{path}.ports")));
            valid = false;
        }
    }

    valid &= z_index.is_some() && angle.is_some();

    let (position, size) = match (position, size) {
        (Some(position), Some(size)) if valid => (position, size),
        _ => return None,
    };

    Some(DiagramNode {
        id,
        shape,
        position,
        size,
        z_index: z_index.flatten(),
        angle: angle.flatten(),
        style,
        text,
        metadata,
    })
}

fn validate_position(
    value: Option<&Value>,
    parent: &str,
    collector: &mut DiagnosticCollector,
) -> Option<Point> {
    let path = format!("{parent}.position");

    let Some(position) = value.and_then(Value::as_object) else {
        collector.emit(Diagnostic::error("expected an object").with_path(path));
        return None;
    };

    let x = required_number(position.get("x"), &format!("{path}.x"), collector);
    let y = required_number(position.get("y"), &format!("{path}.y"), collector);

    Some(Point::new(x?, y?))
}

fn validate_size(
    value: Option<&Value>,
    parent: &str,
    collector: &mut DiagnosticCollector,
) -> Option<Size> {
    let path = format!("{parent}.size");

    let Some(size) = value.and_then(Value::as_object) else {
        collector.emit(Diagnostic::error("expected an object").with_path(path));
        return None;
    };

    let width = required_number(size.get("width"), &format!("{path}.width"), collector);
    let height = required_number(size.get("height"), &format!("{path}.height"), collector);

    let (width, height) = (width?, height?);

    let mut valid = true;
    if width < 0.0 {
        collector.emit(
            Diagnostic::error("expected a non-negative number").with_path(format!("{path}.width")),
        );
        valid = false;
    }
    if height < 0.0 {
        collector.emit(
            Diagnostic::error("expected a non-negative number").with_path(format!("{path}.height")),
        );
        valid = false;
    }

    valid.then(|| Size::new(width, height))
}

/// Outer `None` marks a structural failure; `Some(None)` means the style
/// object was absent or null.
fn validate_style(
    value: &Value,
    parent: &str,
    collector: &mut DiagnosticCollector,
) -> Option<Option<NodeStyle>> {
    let path = format!("{parent}.style");

    if value.is_null() {
        return Some(None);
    }
    let Some(style) = value.as_object() else {
        collector.emit(Diagnostic::error("expected an object").with_path(path));
        return None;
    };

    let fill = optional_string(style.get("fillStyle"), &format!("{path}.fillStyle"), collector);
    let stroke = optional_string(
        style.get("strokeStyle"),
        &format!("{path}.strokeStyle"),
        collector,
    );
    let line_width = optional_number(
        style.get("lineWidth"),
        &format!("{path}.lineWidth"),
        collector,
    );
    let fill_opacity = optional_number(
        style.get("fillOpacity"),
        &format!("{path}.fillOpacity"),
        collector,
    );
    let stroke_opacity = optional_number(
        style.get("strokeOpacity"),
        &format!("{path}.strokeOpacity"),
        collector,
    );
    let icon_provider = optional_string(
        style.get("iconProvider"),
        &format!("{path}.iconProvider"),
        collector,
    );
    let icon_name = optional_string(style.get("iconName"), &format!("{path}.iconName"), collector);

    let corner_radii = match style.get("cornerRadii") {
        Some(value) => validate_corner_radii(value, &path, collector),
        None => Some(None),
    };

    Some(Some(NodeStyle {
        fill: fill?,
        stroke: stroke?,
        line_width: line_width?,
        fill_opacity: fill_opacity?,
        stroke_opacity: stroke_opacity?,
        corner_radii: corner_radii?,
        icon_provider: icon_provider?,
        icon_name: icon_name?,
    }))
}

fn validate_corner_radii(
    value: &Value,
    parent: &str,
    collector: &mut DiagnosticCollector,
) -> Option<Option<CornerRadii>> {
    let path = format!("{parent}.cornerRadii");

    if value.is_null() {
        return Some(None);
    }
    let Some(radii) = value.as_object() else {
        collector.emit(Diagnostic::error("expected an object").with_path(path));
        return None;
    };

    let top_left = optional_number(radii.get("topLeft"), &format!("{path}.topLeft"), collector);
    let top_right = optional_number(radii.get("topRight"), &format!("{path}.topRight"), collector);
    let bottom_right = optional_number(
        radii.get("bottomRight"),
        &format!("{path}.bottomRight"),
        collector,
    );
    let bottom_left = optional_number(
        radii.get("bottomLeft"),
        &format!("{path}.bottomLeft"),
        collector,
    );

    Some(Some(CornerRadii {
        top_left: top_left?,
        top_right: top_right?,
        bottom_right: bottom_right?,
        bottom_left: bottom_left?,
    }))
}

fn validate_text(
    value: &Value,
    parent: &str,
    collector: &mut DiagnosticCollector,
) -> Option<Option<NodeText>> {
    let path = format!("{parent}.text");

    if value.is_null() {
        return Some(None);
    }
    let Some(text) = value.as_object() else {
        collector.emit(Diagnostic::error("expected an object").with_path(path));
        return None;
    };

    let content = optional_string(text.get("content"), &format!("{path}.content"), collector);
    let font_size = optional_number(text.get("fontSize"), &format!("{path}.fontSize"), collector);
    let font_family = optional_string(
        text.get("fontFamily"),
        &format!("{path}.fontFamily"),
        collector,
    );
    let color = optional_string(text.get("color"), &format!("{path}.color"), collector);
    let text_align = optional_string(
        text.get("textAlign"),
        &format!("{path}.textAlign"),
        collector,
    );
    let vertical_align = optional_string(
        text.get("verticalAlign"),
        &format!("{path}.verticalAlign"),
        collector,
    );
    let padding = optional_number(text.get("padding"), &format!("{path}.padding"), collector);
    let line_height = optional_number(
        text.get("lineHeight"),
        &format!("{path}.lineHeight"),
        collector,
    );

    Some(Some(NodeText {
        content: content?,
        font_size: font_size?,
        font_family: font_family?,
        color: color?,
        text_align: text_align?,
        vertical_align: vertical_align?,
        padding: padding?,
        line_height: line_height?,
    }))
}

fn validate_metadata(value: &Value, collector: &mut DiagnosticCollector) -> Option<DocumentMeta> {
    if value.is_null() {
        return None;
    }
    let Some(metadata) = value.as_object() else {
        collector.emit(Diagnostic::error("expected an object").with_path("metadata"));
        return None;
    };

    let version = optional_string(metadata.get("version"), "metadata.version", collector);
    let saved_at = optional_string(metadata.get("savedAt"), "metadata.savedAt", collector);

    let schema_version = match metadata.get("schemaVersion") {
        None | Some(Value::Null) => Some(None),
        Some(value) => validate_schema_version(value, collector),
    };

    Some(DocumentMeta {
        version: version?,
        saved_at: saved_at?,
        schema_version: schema_version?,
    })
}

fn validate_schema_version(
    value: &Value,
    collector: &mut DiagnosticCollector,
) -> Option<Option<SchemaVersion>> {
    let path = "metadata.schemaVersion";

    let Some(version) = value.as_object() else {
        collector.emit(Diagnostic::error("expected an object").with_path(path));
        return None;
    };

    let mut component = |key: &str| match version.get(key).and_then(Value::as_u64) {
        Some(number) => Some(number),
        None => {
            collector.emit(
                Diagnostic::error("expected a non-negative integer")
                    .with_path(format!("{path}.{key}")),
            );
            None
        }
    };

    let major = component("major");
    let minor = component("minor");
    let patch = component("patch");

    Some(Some(SchemaVersion {
        major: major?,
        minor: minor?,
        patch: patch?,
    }))
}

fn required_number(
    value: Option<&Value>,
    path: &str,
    collector: &mut DiagnosticCollector,
) -> Option<f64> {
    match value.and_then(Value::as_f64) {
        Some(number) => Some(number),
        None => {
            collector.emit(Diagnostic::error("expected a number").with_path(path));
            None
        }
    }
}

/// Outer `None` marks a type error; `Some(None)` means the field is absent.
fn optional_number(
    value: Option<&Value>,
    path: &str,
    collector: &mut DiagnosticCollector,
) -> Option<Option<f64>> {
    match value {
        None | Some(Value::Null) => Some(None),
        Some(value) => match value.as_f64() {
            Some(number) => Some(Some(number)),
            None => {
                collector.emit(Diagnostic::error("expected a number").with_path(path));
                None
            }
        },
    }
}

/// Outer `None` marks a type error; `Some(None)` means the field is absent.
fn optional_string(
    value: Option<&Value>,
    path: &str,
    collector: &mut DiagnosticCollector,
) -> Option<Option<String>> {
    match value {
        None | Some(Value::Null) => Some(None),
        Some(value) => match value.as_str() {
            Some(string) => Some(Some(string.to_owned())),
            None => {
                collector.emit(Diagnostic::error("expected a string").with_path(path));
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn minimal_element(id: &str) -> Value {
        json!({
            "id": id,
            "type": "node",
            "position": { "x": 0.0, "y": 0.0 },
            "size": { "width": 10.0, "height": 10.0 }
        })
    }

    fn paths(err: &ValidateError) -> Vec<&str> {
        err.diagnostics().iter().map(|d| d.path()).collect()
    }

    #[test]
    fn test_minimal_valid_document() {
        let value = json!({ "elements": [minimal_element("a")] });

        let document = validate(&value).unwrap();
        assert_eq!(document.elements.len(), 1);
        assert_eq!(document.elements[0].id, "a");
        assert!(document.elements[0].shape.is_none());
    }

    #[test]
    fn test_root_must_be_object() {
        let err = validate(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(paths(&err), vec!["(root)"]);
    }

    #[test]
    fn test_missing_elements_field() {
        let err = validate(&json!({})).unwrap_err();
        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(
            err.diagnostics()[0].message(),
            "missing required field `elements`"
        );
    }

    #[test]
    fn test_elements_must_be_array() {
        let err = validate(&json!({ "elements": "nope" })).unwrap_err();
        assert_eq!(paths(&err), vec!["elements"]);
    }

    #[test]
    fn test_file_type_literal() {
        let ok = json!({ "fileType": "stencil-drawing", "elements": [] });
        assert!(validate(&ok).is_ok());

        let bad = json!({ "fileType": "something-else", "elements": [] });
        let err = validate(&bad).unwrap_err();
        assert_eq!(paths(&err), vec!["fileType"]);
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut element = minimal_element("");
        element["id"] = json!("");
        let err = validate(&json!({ "elements": [element] })).unwrap_err();
        assert_eq!(paths(&err), vec!["elements.0.id"]);
    }

    #[test]
    fn test_missing_type_rejected() {
        let mut element = minimal_element("a");
        element.as_object_mut().unwrap().remove("type");
        let err = validate(&json!({ "elements": [element] })).unwrap_err();
        assert_eq!(paths(&err), vec!["elements.0.type"]);
    }

    #[test]
    fn test_unknown_shape_rejected() {
        let mut element = minimal_element("a");
        element["shape"] = json!("hexagon");
        let err = validate(&json!({ "elements": [element] })).unwrap_err();
        assert_eq!(paths(&err), vec!["elements.0.shape"]);
    }

    #[test]
    fn test_known_shapes_accepted() {
        for shape in ["rectangle", "icon", "text"] {
            let mut element = minimal_element("a");
            element["shape"] = json!(shape);
            assert!(validate(&json!({ "elements": [element] })).is_ok());
        }
    }

    #[test]
    fn test_non_numeric_position_path_qualified() {
        let mut element = minimal_element("a");
        element["position"]["x"] = json!("left");
        let err = validate(&json!({ "elements": [element] })).unwrap_err();
        assert_eq!(paths(&err), vec!["elements.0.position.x"]);
    }

    #[test]
    fn test_negative_size_rejected() {
        let mut element = minimal_element("a");
        element["size"]["height"] = json!(-5.0);
        let err = validate(&json!({ "elements": [element] })).unwrap_err();
        assert_eq!(paths(&err), vec!["elements.0.size.height"]);
    }

    #[test]
    fn test_duplicate_ids_rejected_at_second_occurrence() {
        let value = json!({ "elements": [minimal_element("a"), minimal_element("a")] });
        let err = validate(&value).unwrap_err();
        assert_eq!(paths(&err), vec!["elements.1.id"]);
    }

    #[test]
    fn test_all_errors_accumulated() {
        let mut first = minimal_element("");
        first["id"] = json!("");
        let mut second = minimal_element("b");
        second["size"]["width"] = json!("wide");

        let err = validate(&json!({ "elements": [first, second] })).unwrap_err();
        assert_eq!(paths(&err), vec!["elements.0.id", "elements.1.size.width"]);
    }

    #[test]
    fn test_unrecognized_fields_tolerated() {
        let mut element = minimal_element("a");
        element["futureField"] = json!({ "anything": true });
        element["ports"] = json!([{ "side": "left" }]);

        let value = json!({ "elements": [element], "futureRootField": 42 });
        assert!(validate(&value).is_ok());
    }

    #[test]
    fn test_style_and_text_fields_validated() {
        let mut element = minimal_element("a");
        element["style"] = json!({
            "fillStyle": "#4caf50",
            "cornerRadii": { "topLeft": 8.0 },
            "iconName": "home"
        });
        element["text"] = json!({ "content": "Hello", "fontSize": 24.0 });

        let document = validate(&json!({ "elements": [element] })).unwrap();
        let node = &document.elements[0];
        assert_eq!(node.style.as_ref().unwrap().fill.as_deref(), Some("#4caf50"));
        assert_eq!(node.corner_radius(), Some(8.0));
        assert_eq!(node.text_content(), Some("Hello"));
        assert_eq!(node.font_size(), 24.0);
    }

    #[test]
    fn test_wrongly_typed_style_field_path_qualified() {
        let mut element = minimal_element("a");
        element["style"] = json!({ "lineWidth": "thick" });
        let err = validate(&json!({ "elements": [element] })).unwrap_err();
        assert_eq!(paths(&err), vec!["elements.0.style.lineWidth"]);
    }

    #[test]
    fn test_document_metadata_parsed() {
        let value = json!({
            "elements": [],
            "metadata": {
                "version": "1.2.0",
                "savedAt": "2026-08-01T12:00:00Z",
                "schemaVersion": { "major": 1, "minor": 2, "patch": 0 }
            }
        });

        let document = validate(&value).unwrap();
        let metadata = document.metadata.unwrap();
        assert_eq!(metadata.version.as_deref(), Some("1.2.0"));
        assert_eq!(
            metadata.schema_version,
            Some(SchemaVersion {
                major: 1,
                minor: 2,
                patch: 0
            })
        );
    }

    #[test]
    fn test_insertion_order_preserved() {
        let value = json!({
            "elements": [minimal_element("z"), minimal_element("a"), minimal_element("m")]
        });

        let document = validate(&value).unwrap();
        let ids: Vec<_> = document.elements.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }
}
