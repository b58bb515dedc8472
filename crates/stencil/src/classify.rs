//! Heuristic component classification.
//!
//! Each screen element is mapped to a [`ComponentKind`] by an ordered rule
//! cascade. The rules are not independent guards: later rules may override
//! the verdict of earlier ones, and that layering is part of the contract.
//! The cascade order is:
//!
//! 1. [`icon_rule`]: icon shape or explicit icon identifier.
//! 2. [`text_rule`]: heading/paragraph/raw by font size; only when the
//!    element has text and rule 1 did not fire.
//! 3. [`button_rule`]: primary/secondary buttons; **overrides** rule 2,
//!    so a short filled rectangle with action text becomes a button, not
//!    a paragraph.
//! 4. [`progress_rule`]: very flat, wide, textless rectangles;
//!    unconditional, so it can also override an icon verdict from rule 1
//!    on textless rectangles.
//! 5. [`card_rule`]: rounded, card-sized rectangles; fires only when the
//!    element is still unclassified.
//!
//! Inferred display names are advisory only and never feed back into
//! classification.

use stencil_core::component::{ClassifiedElement, ComponentKind};
use stencil_core::model::{DiagramNode, Shape};

use crate::config::GeneratorConfig;

/// Font size at or above which text classifies as a heading.
const HEADING_FONT_SIZE: f64 = 24.0;
/// Font size at or above which text classifies as a paragraph.
const PARAGRAPH_FONT_SIZE: f64 = 16.0;

/// Leading tokens that mark text as an action. Prefix match without a word
/// boundary, so "Okay" counts via "ok".
const ACTION_VERBS: [&str; 7] = ["add", "create", "save", "submit", "confirm", "ok", "start"];

/// Maximum height for a progress-bar rectangle.
const PROGRESS_MAX_HEIGHT: f64 = 14.0;
/// Minimum width for a progress-bar rectangle.
const PROGRESS_MIN_WIDTH: f64 = 50.0;

/// Minimum corner radius for a card rectangle.
const CARD_MIN_RADIUS: f64 = 8.0;
/// Minimum width for a card rectangle.
const CARD_MIN_WIDTH: f64 = 150.0;
/// Minimum height for a card rectangle.
const CARD_MIN_HEIGHT: f64 = 60.0;

/// Classify one screen element into a [`ClassifiedElement`].
pub fn classify_node(node: &DiagramNode, config: &GeneratorConfig) -> ClassifiedElement {
    let mut kind = ComponentKind::Unknown;
    let mut inferred_name = node.id.clone();
    let mut role_hints: Vec<String> = Vec::new();

    icon_rule(node, &mut kind, &mut inferred_name);
    if kind != ComponentKind::Icon {
        text_rule(node, &mut kind, &mut inferred_name);
    }
    button_rule(node, config, &mut kind, &mut inferred_name, &mut role_hints);
    progress_rule(node, &mut kind);
    card_rule(node, &mut kind);

    ClassifiedElement {
        node: node.clone(),
        kind,
        inferred_name,
        role_hints,
    }
}

/// Rule 1: icon shape or an explicit icon identifier.
fn icon_rule(node: &DiagramNode, kind: &mut ComponentKind, name: &mut String) {
    let icon_name = node.style.as_ref().and_then(|style| style.icon_name.clone());
    if node.shape == Some(Shape::Icon) || icon_name.is_some() {
        *kind = ComponentKind::Icon;
        if let Some(icon_name) = icon_name {
            *name = icon_name;
        }
    }
}

/// Rule 2: classify non-empty text by font size.
fn text_rule(node: &DiagramNode, kind: &mut ComponentKind, name: &mut String) {
    let Some(text) = node.text_content() else {
        return;
    };

    if node.font_size() >= HEADING_FONT_SIZE {
        *kind = ComponentKind::Heading;
        let leading: Vec<&str> = text.split_whitespace().take(4).collect();
        *name = to_pascal(&leading.join(" "));
    } else if node.font_size() >= PARAGRAPH_FONT_SIZE {
        *kind = ComponentKind::Paragraph;
    } else {
        *kind = ComponentKind::TextRaw;
    }
}

/// Rule 3: buttons by primary fill color, action text, or a "button" id
/// token. Deliberately overrides rule 2's verdict.
fn button_rule(
    node: &DiagramNode,
    config: &GeneratorConfig,
    kind: &mut ComponentKind,
    name: &mut String,
    role_hints: &mut Vec<String>,
) {
    if node.shape != Some(Shape::Rectangle) {
        return;
    }
    let Some(text) = node.text_content() else {
        return;
    };

    let fill = node
        .style
        .as_ref()
        .and_then(|style| style.fill.as_deref())
        .map(str::to_lowercase);
    let primary = fill.as_deref() == Some(&config.primary_action_color().to_lowercase());

    let text_lower = text.to_lowercase();
    let action_text = ACTION_VERBS
        .iter()
        .any(|verb| text_lower.starts_with(verb));
    let button_id = node.id.to_lowercase().contains("button");

    if primary || action_text || button_id {
        *kind = if primary {
            ComponentKind::ButtonPrimary
        } else {
            ComponentKind::ButtonSecondary
        };
        let stripped: String = text
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
            .collect();
        *name = to_pascal(&stripped);
        role_hints.push("clickable".to_owned());
    }
}

/// Rule 4: very flat, wide, textless rectangles are progress bars.
fn progress_rule(node: &DiagramNode, kind: &mut ComponentKind) {
    if node.shape == Some(Shape::Rectangle)
        && node.text_content().is_none()
        && node.size.height() <= PROGRESS_MAX_HEIGHT
        && node.size.width() >= PROGRESS_MIN_WIDTH
    {
        *kind = ComponentKind::ProgressBar;
    }
}

/// Rule 5: rounded, card-sized rectangles; only fires on still-unknown
/// elements.
fn card_rule(node: &DiagramNode, kind: &mut ComponentKind) {
    if *kind != ComponentKind::Unknown {
        return;
    }
    let Some(radius) = node.corner_radius() else {
        return;
    };
    if node.shape == Some(Shape::Rectangle)
        && radius >= CARD_MIN_RADIUS
        && node.size.width() >= CARD_MIN_WIDTH
        && node.size.height() >= CARD_MIN_HEIGHT
    {
        *kind = ComponentKind::Card;
    }
}

/// Title-cases alphanumeric words and joins them without separators.
fn to_pascal(input: &str) -> String {
    input
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect()
}
