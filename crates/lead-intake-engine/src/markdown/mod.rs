//! # Markdown-lite Conversion
//!
//! Converts the escaped, linkified, `<br>`-separated text of the formatting
//! pipeline into HTML.
//!
//! ## Phases
//!
//! 1. **Scan** (`scan`): a cursor walks the text once and emits `Text`,
//!    `Break` and `Fence` tokens. Fences are raw zones.
//! 2. **Blocks** (`blocks`): `BlockBuilder` groups tokens into lines and
//!    classifies each line's marker (bullet, numbered item, heading). A fence
//!    at the start of a line becomes a block; one after text stays in the line.
//! 3. **Inline** (`inline`): each line's content is parsed into text, anchor
//!    and fence raw zones and `*bold*` / `_italic_` / `~strike~` spans.
//! 4. **Render** (`render`): blocks are written out as HTML, merging
//!    consecutive list items into one list.
//!
//! Protected content (fences, anchors) is never rewritten, only copied, so it
//! comes out exactly as it went in and in source order.
//!
//! ## Modules
//!
//! - **`span`**: byte ranges into the text
//! - **`cursor`**: byte cursor with absolute positions
//! - **`kinds`**: delimiter owners (`Fence`, `LineBreak`, `Anchor`, `InlineStyle`, `LineMarker`)

pub mod blocks;
pub mod cursor;
pub mod inline;
pub mod kinds;
pub mod render;
pub mod scan;
pub mod span;


/// Converts markdown-lite markers to HTML. Total: text with no markers, or
/// with unbalanced ones, comes back unchanged.
pub fn convert_markdown(text: &str) -> String {
    let tokens = scan::tokenize(text);
    let blocks = blocks::build_blocks(text, &tokens);
    render::render(text, &blocks)
}
