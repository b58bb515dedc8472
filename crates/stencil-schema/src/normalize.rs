//! Sanitization of free-text fields in a validated document.
//!
//! Drawing text ends up verbatim inside emitted source files, so embedded
//! `<script>` and `<iframe>` markup is stripped before anything downstream
//! sees the document. No other field is altered.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use stencil_core::model::Document;

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[\s\S]*?</script>").expect("script block pattern is valid")
});
static SCRIPT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?script>").expect("script tag pattern is valid"));
static IFRAME_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<iframe[\s\S]*?</iframe>").expect("iframe block pattern is valid")
});

/// Strip unsafe embedded markup from every node's text content.
///
/// Stripping runs to a fixed point, so normalization is idempotent even for
/// adversarial input where removing one tag splices a new one together
/// (e.g. `<scr<script></script>ipt>`):
/// `normalize(normalize(d)) == normalize(d)` for every validated document.
pub fn normalize(mut document: Document) -> Document {
    let mut stripped = 0usize;

    for node in &mut document.elements {
        let Some(content) = node.text.as_mut().and_then(|text| text.content.as_mut()) else {
            continue;
        };

        let safe = strip_markup(content);
        if safe != *content {
            stripped += 1;
            *content = safe;
        }
    }

    if stripped > 0 {
        debug!(nodes = stripped; "Stripped unsafe markup from text content");
    }

    document
}

fn strip_markup(content: &str) -> String {
    let mut current = content.to_owned();
    loop {
        let pass = SCRIPT_BLOCK.replace_all(&current, "");
        let pass = SCRIPT_TAG.replace_all(&pass, "");
        let pass = IFRAME_BLOCK.replace_all(&pass, "").into_owned();
        if pass == current {
            return current;
        }
        current = pass;
    }
}
