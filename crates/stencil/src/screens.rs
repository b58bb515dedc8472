//! Screen extraction and geometric element assignment.
//!
//! A drawing node qualifies as a screen container either by carrying the
//! reserved id prefix or by having a device-viewport-like size. Every other
//! node is assigned to the screen whose rectangle fully encloses it; when
//! several screens enclose a node the smallest-area (innermost) screen
//! wins, with ties broken by candidate order. Nodes no screen encloses are
//! reported as unassigned, which is a warning and never an error.
//!
//! The assignment is a plain O(screens × elements) scan; documents are
//! bounded by the element ceiling, so no spatial index is needed.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::debug;

use stencil_core::model::DiagramNode;

use crate::config::GeneratorConfig;

/// Viewport-like width range for screen candidates, inclusive.
const SCREEN_WIDTH_RANGE: (f64, f64) = (320.0, 450.0);
/// Minimum height (exclusive) for a viewport-like screen candidate.
const SCREEN_MIN_HEIGHT: f64 = 600.0;

/// The result of partitioning non-screen elements across screens.
///
/// Every non-screen node lands either in exactly one entry of `by_screen`
/// or in `unassigned`; no node is assigned twice.
#[derive(Debug, Default)]
pub struct AssignmentOutcome {
    /// Elements per screen id, in screen candidate order; element order
    /// within a screen follows document order.
    pub by_screen: IndexMap<String, Vec<DiagramNode>>,

    /// Elements no screen encloses.
    pub unassigned: Vec<DiagramNode>,
}

/// Checks whether a node qualifies as a screen container.
///
/// A node qualifies when its lowercased id starts with the reserved screen
/// prefix, or when its size falls in a device-viewport-like range (width
/// within 320 to 450 inclusive, height above 600).
pub fn is_screen_candidate(node: &DiagramNode, config: &GeneratorConfig) -> bool {
    if node
        .id
        .to_lowercase()
        .starts_with(&config.screen_id_prefix().to_lowercase())
    {
        return true;
    }

    let (min_width, max_width) = SCREEN_WIDTH_RANGE;
    let width = node.size.width();
    let height = node.size.height();
    width >= min_width && width <= max_width && height > SCREEN_MIN_HEIGHT
}

/// Extract screen candidate nodes in document order.
pub fn extract_screens<'a>(
    elements: &'a [DiagramNode],
    config: &GeneratorConfig,
) -> Vec<&'a DiagramNode> {
    let screens: Vec<&DiagramNode> = elements
        .iter()
        .filter(|node| is_screen_candidate(node, config))
        .collect();

    debug!(screens = screens.len(); "Extracted screen candidates");
    screens
}

/// Infer the route path for a screen node.
///
/// The first screen (`<prefix>1`) maps to `/`. Any other id is stripped of
/// the prefix (case-insensitively), its underscore/whitespace runs are
/// collapsed to `-`, and the result is lowercased. Ids that leave nothing
/// usable fall back to the lowercased full id.
pub fn infer_route(screen: &DiagramNode, config: &GeneratorConfig) -> String {
    let prefix = config.screen_id_prefix();
    if screen.id == format!("{prefix}1") {
        return "/".to_owned();
    }

    let lowered = screen.id.to_lowercase();
    let remainder = lowered
        .strip_prefix(&prefix.to_lowercase())
        .unwrap_or(&lowered);
    let base = slugify(remainder);

    if base.is_empty() || base == "1" {
        let fallback = if screen.id.is_empty() {
            "screen".to_owned()
        } else {
            screen.id.to_lowercase()
        };
        return format!("/{fallback}");
    }

    format!("/{base}")
}

/// Collapses runs of underscores and whitespace into single hyphens.
fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch == '_' || ch.is_whitespace() {
            if !slug.ends_with('-') {
                slug.push('-');
            }
        } else {
            slug.push(ch);
        }
    }
    slug.trim_matches('-').to_owned()
}

/// Assign every non-screen element to the screen that encloses it.
pub fn assign_elements(
    screens: &[&DiagramNode],
    elements: &[DiagramNode],
    config: &GeneratorConfig,
) -> AssignmentOutcome {
    let mut by_screen: IndexMap<String, Vec<DiagramNode>> = screens
        .iter()
        .map(|screen| (screen.id.clone(), Vec::new()))
        .collect();
    let mut unassigned = Vec::new();

    let screen_ids: HashSet<&str> = screens.iter().map(|screen| screen.id.as_str()).collect();
    let tolerance = config.containment_tolerance();

    for element in elements {
        if screen_ids.contains(element.id.as_str()) {
            continue;
        }

        let bounds = element.bounds();
        let mut target: Option<&DiagramNode> = None;

        for screen in screens {
            if !screen.bounds().contains_rect(bounds, tolerance) {
                continue;
            }
            // Strict less-than keeps the earlier candidate on equal areas.
            let smaller = target
                .map(|current| screen.bounds().area() < current.bounds().area())
                .unwrap_or(true);
            if smaller {
                target = Some(screen);
            }
        }

        match target {
            Some(screen) => by_screen
                .get_mut(&screen.id)
                .expect("every screen id was seeded above")
                .push(element.clone()),
            None => unassigned.push(element.clone()),
        }
    }

    debug!(
        screens = by_screen.len(),
        unassigned = unassigned.len();
        "Assigned elements to screens"
    );

    AssignmentOutcome {
        by_screen,
        unassigned,
    }
}

#[cfg(test)]
mod tests {
    use stencil_core::geometry::{Point, Size};

    use super::*;

    fn node(id: &str, x: f64, y: f64, w: f64, h: f64) -> DiagramNode {
        DiagramNode {
            id: id.to_owned(),
            position: Point::new(x, y),
            size: Size::new(w, h),
            ..DiagramNode::default()
        }
    }

    fn config() -> GeneratorConfig {
        GeneratorConfig::default()
    }

    #[test]
    fn test_screen_candidate_by_prefix() {
        let small = node("mobile_screen_settings", 0.0, 0.0, 100.0, 100.0);
        assert!(is_screen_candidate(&small, &config()));

        let uppercase = node("Mobile_Screen_2", 0.0, 0.0, 100.0, 100.0);
        assert!(is_screen_candidate(&uppercase, &config()));
    }

    #[test]
    fn test_screen_candidate_by_viewport_size() {
        assert!(is_screen_candidate(
            &node("frame", 0.0, 0.0, 375.0, 667.0),
            &config()
        ));
        assert!(is_screen_candidate(
            &node("frame", 0.0, 0.0, 320.0, 601.0),
            &config()
        ));
        assert!(is_screen_candidate(
            &node("frame", 0.0, 0.0, 450.0, 900.0),
            &config()
        ));
    }

    #[test]
    fn test_non_candidates() {
        // Too narrow, too wide, too short.
        assert!(!is_screen_candidate(
            &node("a", 0.0, 0.0, 319.0, 700.0),
            &config()
        ));
        assert!(!is_screen_candidate(
            &node("b", 0.0, 0.0, 451.0, 700.0),
            &config()
        ));
        assert!(!is_screen_candidate(
            &node("c", 0.0, 0.0, 375.0, 600.0),
            &config()
        ));
    }

    #[test]
    fn test_infer_route_first_screen_is_root() {
        let screen = node("mobile_screen_1", 0.0, 0.0, 375.0, 667.0);
        assert_eq!(infer_route(&screen, &config()), "/");
    }

    #[test]
    fn test_infer_route_slugifies_remainder() {
        let screen = node("mobile_screen_Create_Goal", 0.0, 0.0, 375.0, 667.0);
        assert_eq!(infer_route(&screen, &config()), "/create-goal");

        let spaced = node("mobile_screen_my page", 0.0, 0.0, 375.0, 667.0);
        assert_eq!(infer_route(&spaced, &config()), "/my-page");
    }

    #[test]
    fn test_infer_route_non_prefixed_id() {
        let screen = node("Checkout_Flow", 0.0, 0.0, 375.0, 667.0);
        assert_eq!(infer_route(&screen, &config()), "/checkout-flow");
    }

    #[test]
    fn test_infer_route_degenerate_remainder_falls_back_to_id() {
        // Case-insensitive prefix strip leaves "1", which is reserved for
        // the exact-match root rule only.
        let screen = node("Mobile_Screen_1", 0.0, 0.0, 375.0, 667.0);
        assert_eq!(infer_route(&screen, &config()), "/mobile_screen_1");
    }

    #[test]
    fn test_assignment_partitions_elements() {
        let screen_a = node("mobile_screen_1", 0.0, 0.0, 375.0, 667.0);
        let screen_b = node("mobile_screen_two", 500.0, 0.0, 375.0, 667.0);
        let inside_a = node("title", 20.0, 30.0, 100.0, 40.0);
        let inside_b = node("body", 520.0, 30.0, 100.0, 40.0);
        let outside = node("stray", 1000.0, 1000.0, 10.0, 10.0);

        let elements = vec![
            screen_a.clone(),
            screen_b.clone(),
            inside_a.clone(),
            inside_b.clone(),
            outside.clone(),
        ];
        let screens = vec![&screen_a, &screen_b];

        let outcome = assign_elements(&screens, &elements, &config());

        assert_eq!(outcome.by_screen["mobile_screen_1"].len(), 1);
        assert_eq!(outcome.by_screen["mobile_screen_1"][0].id, "title");
        assert_eq!(outcome.by_screen["mobile_screen_two"].len(), 1);
        assert_eq!(outcome.by_screen["mobile_screen_two"][0].id, "body");
        assert_eq!(outcome.unassigned.len(), 1);
        assert_eq!(outcome.unassigned[0].id, "stray");
    }

    #[test]
    fn test_nested_screens_prefer_smaller_area() {
        let outer = node("mobile_screen_outer", 0.0, 0.0, 450.0, 900.0);
        let inner = node("mobile_screen_inner", 10.0, 10.0, 375.0, 667.0);
        let element = node("label", 50.0, 50.0, 80.0, 20.0);

        let elements = vec![outer.clone(), inner.clone(), element.clone()];
        let screens = vec![&outer, &inner];

        let outcome = assign_elements(&screens, &elements, &config());

        assert!(outcome.by_screen["mobile_screen_outer"].is_empty());
        assert_eq!(outcome.by_screen["mobile_screen_inner"].len(), 1);
    }

    #[test]
    fn test_equal_area_tie_breaks_by_candidate_order() {
        let first = node("mobile_screen_a", 0.0, 0.0, 375.0, 667.0);
        let second = node("mobile_screen_b", 0.0, 0.0, 375.0, 667.0);
        let element = node("label", 50.0, 50.0, 80.0, 20.0);

        let elements = vec![first.clone(), second.clone(), element.clone()];
        let screens = vec![&first, &second];

        let outcome = assign_elements(&screens, &elements, &config());

        assert_eq!(outcome.by_screen["mobile_screen_a"].len(), 1);
        assert!(outcome.by_screen["mobile_screen_b"].is_empty());
    }

    #[test]
    fn test_tolerance_admits_slight_overhang() {
        let screen = node("mobile_screen_1", 0.0, 0.0, 375.0, 667.0);
        let overhang = node("edge", -1.0, 10.0, 50.0, 20.0);

        let elements = vec![screen.clone(), overhang.clone()];
        let screens = vec![&screen];

        let strict = assign_elements(&screens, &elements, &config());
        assert_eq!(strict.unassigned.len(), 1);

        let relaxed: GeneratorConfig =
            serde_json::from_str(r#"{ "containment_tolerance": 2.0 }"#).unwrap();
        let tolerant = assign_elements(&screens, &elements, &relaxed);
        assert!(tolerant.unassigned.is_empty());
    }

    #[test]
    fn test_screen_nodes_never_assigned() {
        let outer = node("mobile_screen_outer", 0.0, 0.0, 450.0, 900.0);
        let inner = node("mobile_screen_inner", 10.0, 10.0, 375.0, 667.0);

        let elements = vec![outer.clone(), inner.clone()];
        let screens = vec![&outer, &inner];

        let outcome = assign_elements(&screens, &elements, &config());

        assert!(outcome.by_screen.values().all(Vec::is_empty));
        assert!(outcome.unassigned.is_empty());
    }
}
