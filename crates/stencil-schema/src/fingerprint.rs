//! Content fingerprinting for cross-run provenance.
//!
//! The fingerprint is a SHA-256 digest over the canonical serialization of
//! a normalized document. Struct field order fixes the serialization, so
//! two documents that normalize to the same structure hash identically no
//! matter how the source JSON was formatted or key-ordered.
//!
//! The hash detects change between generation runs; it carries no security
//! guarantee.

use sha2::{Digest, Sha256};

use stencil_core::model::Document;

/// Compute the content fingerprint of a normalized document.
///
/// Returns the lowercase hex SHA-256 digest of the document's canonical
/// JSON serialization.
pub fn fingerprint(document: &Document) -> String {
    let canonical =
        serde_json::to_vec(document).expect("document serialization has no failing variants");

    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use stencil_core::geometry::Size;

    use crate::validate;

    use super::*;

    fn document_from(value: serde_json::Value) -> Document {
        validate(&value).unwrap()
    }

    fn element(id: &str, x: f64) -> serde_json::Value {
        json!({
            "id": id,
            "type": "node",
            "position": { "x": x, "y": 0.0 },
            "size": { "width": 100.0, "height": 40.0 },
            "text": { "content": "Save", "fontSize": 16.0 }
        })
    }

    #[test]
    fn test_fingerprint_is_hex_sha256() {
        let hash = fingerprint(&Document::default());
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_key_order_does_not_affect_hash() {
        // Same structure, different source key order.
        let a = document_from(json!({
            "elements": [{
                "id": "n1",
                "type": "node",
                "position": { "x": 1.0, "y": 2.0 },
                "size": { "width": 3.0, "height": 4.0 }
            }]
        }));
        let b = document_from(json!({
            "elements": [{
                "size": { "height": 4.0, "width": 3.0 },
                "position": { "y": 2.0, "x": 1.0 },
                "type": "node",
                "id": "n1"
            }]
        }));

        assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn test_position_change_changes_hash() {
        let a = document_from(json!({ "elements": [element("n1", 0.0)] }));
        let b = document_from(json!({ "elements": [element("n1", 1.0)] }));
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn test_size_change_changes_hash() {
        let a = document_from(json!({ "elements": [element("n1", 0.0)] }));
        let mut b = a.clone();
        b.elements[0].size = Size::new(101.0, 40.0);
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn test_text_change_changes_hash() {
        let a = document_from(json!({ "elements": [element("n1", 0.0)] }));
        let mut b = a.clone();
        b.elements[0].text.as_mut().unwrap().content = Some("Submit".to_owned());
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn test_style_change_changes_hash() {
        let a = document_from(json!({ "elements": [element("n1", 0.0)] }));
        let mut b = a.clone();
        b.elements[0].style = Some(stencil_core::model::NodeStyle {
            fill: Some("#4caf50".to_owned()),
            ..Default::default()
        });
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn test_stable_across_calls() {
        let a = document_from(json!({ "elements": [element("n1", 0.0)] }));
        assert_eq!(fingerprint(&a), fingerprint(&a));
    }
}
