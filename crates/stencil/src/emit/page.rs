//! Page source rendering.
//!
//! Each classified screen renders to one page component source file. The
//! templates replicate the drawing's absolute positions verbatim; no
//! reflow, grouping or resizing happens here. Rendering is pure and
//! byte-stable: the same classified input always produces identical
//! output.

use stencil_core::color::Color;
use stencil_core::component::{ClassifiedElement, ComponentKind};
use stencil_core::model::DiagramNode;

use crate::AnalyzedScreen;

/// Fixed inner fill width for progress bars, in percent.
///
/// The drawing format carries no fill ratio, and deriving one from sibling
/// geometry is out of scope, so every progress bar renders half full.
const PROGRESS_FILL_PERCENT: u32 = 50;

/// Minimum container width for the centered page wrapper.
const MIN_PAGE_WIDTH: f64 = 400.0;

/// Render a classified screen into a page component source file.
pub fn render_page(screen: &AnalyzedScreen, route: &str) -> String {
    let frame = screen.screen.frame;
    let max_width = frame.size().width().max(MIN_PAGE_WIDTH);

    let children: Vec<String> = screen
        .classified
        .iter()
        .map(render_element)
        .collect();
    let body = indent_lines(&children.join("\n"), 10);

    let import_block = if screen
        .classified
        .iter()
        .any(|element| element.kind.is_button())
    {
        "import { Button } from '@/components/ui/button';\n\n"
    } else {
        ""
    };

    format!(
        "// Auto-generated from a drawing import. Route: {route}\n\
         // DO NOT EDIT DIRECTLY (will be overwritten on regeneration)\n\
         {import_block}\
         export default function Page() {{\n\
         \x20 return (\n\
         \x20   <div className=\"relative w-full min-h-screen overflow-auto bg-neutral-50\">\n\
         \x20     <div className=\"mx-auto p-4\" style={{{{ maxWidth: {max_width}, minHeight: {height} }}}}>\n\
         \x20       <div className=\"relative border rounded-md bg-white shadow-sm\" style={{{{ width: {width}, height: {height} }}}}>\n\
         {body}\n\
         \x20       </div>\n\
         \x20     </div>\n\
         \x20   </div>\n\
         \x20 );\n\
         }}\n",
        route = route,
        import_block = import_block,
        max_width = format_number(max_width),
        width = format_number(frame.size().width()),
        height = format_number(frame.size().height()),
        body = body,
    )
}

/// Render one classified element to markup.
///
/// Everything stays absolutely positioned with inline style to replicate
/// the drawing's coordinates.
fn render_element(element: &ClassifiedElement) -> String {
    let style = style_object(&element.node);
    let text = element
        .node
        .text
        .as_ref()
        .and_then(|text| text.content.as_deref())
        .unwrap_or("");

    match element.kind {
        ComponentKind::Heading => format!(
            "<h1 style={{{style}}} className=\"text-gray-900 font-semibold\">{}</h1>",
            escape_html(text)
        ),
        ComponentKind::Paragraph => format!(
            "<p style={{{style}}} className=\"text-gray-700\">{}</p>",
            escape_html(text)
        ),
        ComponentKind::ButtonPrimary | ComponentKind::ButtonSecondary => {
            let variant = if element.kind == ComponentKind::ButtonPrimary {
                "default"
            } else {
                "secondary"
            };
            let label = if text.is_empty() { "Action" } else { text };
            format!(
                "<div style={{{style}}}>\n\
                 \x20 <Button variant=\"{variant}\" className=\"w-full h-full\">{}</Button>\n\
                 </div>",
                escape_html(label)
            )
        }
        ComponentKind::Icon => {
            let icon = element
                .node
                .style
                .as_ref()
                .and_then(|style| style.icon_name.as_deref())
                .unwrap_or("icon");
            format!(
                "<div style={{{style}}} className=\"flex items-center justify-center text-gray-600\">{{\n\
                 \x20 /* icon placeholder: {icon} */\n\
                 }}</div>"
            )
        }
        ComponentKind::ProgressBar => format!(
            "<div style={{{style}}} className=\"bg-gray-200 overflow-hidden\">\n\
             \x20 <div className=\"h-full bg-emerald-500\" style={{{{ width: '{PROGRESS_FILL_PERCENT}%' }}}} />\n\
             </div>"
        ),
        ComponentKind::Card => format!("<div style={{{style}}} className=\"shadow-sm\" />"),
        ComponentKind::TextRaw => format!(
            "<span style={{{style}}} className=\"text-xs text-gray-600 leading-snug\">{}</span>",
            escape_html(text)
        ),
        ComponentKind::Unknown => {
            format!("<div style={{{style}}} className=\"text-[10px] text-gray-400\">/* unknown */</div>")
        }
    }
}

/// Build the inline JSX style object for a node.
///
/// Background is only emitted when the fill value parses as a CSS color;
/// border only when a stroke is present and not "transparent"; the corner
/// radius comes from the first defined corner and is skipped when zero.
fn style_object(node: &DiagramNode) -> String {
    let mut parts = vec![
        "position: 'absolute'".to_owned(),
        format!("left: {}", format_number(node.position.x())),
        format!("top: {}", format_number(node.position.y())),
        format!("width: {}", format_number(node.size.width())),
        format!("height: {}", format_number(node.size.height())),
    ];

    if let Some(style) = &node.style {
        if let Some(fill) = &style.fill {
            if Color::is_renderable(fill) {
                parts.push(format!("background: '{fill}'"));
            }
        }
        if let Some(stroke) = &style.stroke {
            if stroke != "transparent" {
                parts.push(format!("border: '1px solid {stroke}'"));
            }
        }
    }

    if let Some(radius) = node.corner_radius() {
        if radius != 0.0 {
            parts.push(format!("borderRadius: {}", format_number(radius)));
        }
    }

    format!("{{ {} }}", parts.join(", "))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Formats a drawing number the way JSON/JS would print it: integral
/// values without a fractional part.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn indent_lines(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    text.lines()
        .filter(|line| !line.is_empty())
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
