//! # Markdown-lite Kinds
//!
//! Each construct owns its delimiter constants and the check for whether it
//! starts at a given point. Scanner and parsers call these; they never
//! hardcode `<br>` or the escaped backticks themselves.
//!
//! - **`Fence`**: escaped triple backtick, raw zone rendered as `<pre>`
//! - **`LineBreak`**: the `<br>` marker that separates lines
//! - **`Anchor`**: an `<a …>…</a>` tag produced by linkify, raw zone
//! - **`InlineStyle`**: `*bold*`, `_italic_`, `~strike~`
//! - **`LineMarker`**: list bullets, ordered markers and headings at line start

pub mod anchor;
pub mod fence;
pub mod inline_style;
pub mod line_marker;

pub use anchor::Anchor;
pub use fence::{Fence, FenceMatch, LineBreak};
pub use inline_style::InlineStyle;
pub use line_marker::{LineMarker, MarkerKind};
