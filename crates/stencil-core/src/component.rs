//! Classification result types.
//!
//! This module defines the types produced by the analysis stages: screens
//! promoted from drawing nodes ([`ScreenSpec`]) and elements paired with an
//! inferred semantic kind ([`ClassifiedElement`]). Both are derived views
//! over [`DiagramNode`]s and are never persisted on their own.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::model::DiagramNode;

/// The closed set of semantic component kinds an element can classify to.
///
/// Classification maps every screen element to exactly one of these via an
/// ordered rule cascade; anything no rule claims stays [`Unknown`].
///
/// [`Unknown`]: ComponentKind::Unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Heading,
    Paragraph,
    ButtonPrimary,
    ButtonSecondary,
    Icon,
    ProgressBar,
    Card,
    TextRaw,
    Unknown,
}

impl ComponentKind {
    /// Returns `true` for the button kinds.
    pub fn is_button(self) -> bool {
        matches!(self, Self::ButtonPrimary | Self::ButtonSecondary)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::ButtonPrimary => "button-primary",
            Self::ButtonSecondary => "button-secondary",
            Self::Icon => "icon",
            Self::ProgressBar => "progress-bar",
            Self::Card => "card",
            Self::TextRaw => "text-raw",
            Self::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// A drawing node promoted to a screen container.
///
/// The `elements` list is this screen's slice of the document's non-screen
/// nodes, in document order. Assignment guarantees each non-screen node
/// appears in at most one screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenSpec {
    /// Id of the originating drawing node.
    pub id: String,

    /// Inferred route path, always starting with `/`.
    pub route: String,

    /// The screen node's rectangle in drawing coordinates.
    pub frame: Rect,

    /// Elements assigned to this screen by geometric containment.
    pub elements: Vec<DiagramNode>,
}

/// A drawing node paired with its inferred semantic kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedElement {
    /// The source node.
    pub node: DiagramNode,

    /// The inferred component kind.
    pub kind: ComponentKind,

    /// Advisory display name; never feeds back into classification.
    pub inferred_name: String,

    /// Free-form role tags, e.g. `"clickable"`.
    pub role_hints: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_is_kebab_case() {
        assert_eq!(ComponentKind::ButtonPrimary.to_string(), "button-primary");
        assert_eq!(ComponentKind::ProgressBar.to_string(), "progress-bar");
        assert_eq!(ComponentKind::TextRaw.to_string(), "text-raw");
    }

    #[test]
    fn test_kind_serde_matches_display() {
        for kind in [
            ComponentKind::Heading,
            ComponentKind::Paragraph,
            ComponentKind::ButtonPrimary,
            ComponentKind::ButtonSecondary,
            ComponentKind::Icon,
            ComponentKind::ProgressBar,
            ComponentKind::Card,
            ComponentKind::TextRaw,
            ComponentKind::Unknown,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn test_is_button() {
        assert!(ComponentKind::ButtonPrimary.is_button());
        assert!(ComponentKind::ButtonSecondary.is_button());
        assert!(!ComponentKind::Card.is_button());
    }
}
