//! # Rich-Text Formatting
//!
//! Turns user-authored plain text into an HTML fragment that is safe to embed
//! in an e-mail or the dashboard.
//!
//! ## Pipeline
//!
//! `escape` → `linkify` → `preserve_leading_spaces` → `convert_newlines` →
//! [`convert_markdown`].
//!
//! The order matters. Escaping comes first so user markup cannot inject tags
//! and the URL patterns can rely on the entity form of `:` and `/`. Linkify
//! runs before markdown conversion so the anchors it produces are treated as
//! raw zones there. Newlines are converted before markdown conversion because
//! lists and headings are found by the `<br>` markers.
//!
//! Formatting is one-directional: running it over its own output escapes the
//! generated markup again.

pub mod escape;
pub mod linkify;
pub mod whitespace;

pub use escape::{escape, unescape};
pub use linkify::{LinkStyle, linkify};
pub use whitespace::{LINE_BREAK, NBSP, TAB_WIDTH, convert_newlines, preserve_leading_spaces};

use crate::markdown::convert_markdown;

/// Formatting pipeline with configurable link presentation.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    pub links: LinkStyle,
}

impl Formatter {
    pub fn new(links: LinkStyle) -> Self {
        Self { links }
    }

    /// Runs the full pipeline over `raw`.
    pub fn format(&self, raw: &str) -> String {
        let escaped = escape(raw);
        let linked = linkify(&escaped, &self.links);
        let indented = preserve_leading_spaces(&linked);
        let lines = convert_newlines(&indented);
        convert_markdown(&lines)
    }
}

/// Formats `raw` with the default link style.
pub fn format(raw: &str) -> String {
    Formatter::default().format(raw)
}
