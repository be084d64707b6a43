use super::{
    cursor::Cursor,
    kinds::{Anchor, Fence, InlineStyle},
    span::Span,
};

/// A parsed inline node with byte spans into the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// An anchor tag. Raw zone: emitted verbatim.
    Link(Span),
    /// A fence that follows text on its line. Raw zone: `inner` is emitted
    /// verbatim inside `<pre>`.
    Fence { full: Span, inner: Span },
    /// Delimited styled text. Children never contain the same delimiter.
    Styled {
        style: InlineStyle,
        /// Full span including delimiters.
        full: Span,
        children: Vec<InlineNode>,
    },
}

impl InlineNode {
    /// Extracts the full span from any inline node variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) | InlineNode::Link(sp) => *sp,
            InlineNode::Fence { full, .. } | InlineNode::Styled { full, .. } => *full,
        }
    }
}

/// Parses the content of one line into [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the full text where `s` begins
/// - `s`: The line content (a `<br>` marker can only appear inside a fence)
///
/// # Raw Zone Precedence
/// Anchors and fences are checked first. A delimiter inside either neither
/// opens nor closes a style, so link text, URLs and code survive intact.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span::new(start, end)));
        }
    }

    while !cur.eof() {
        if let Some(node) = try_parse_link(&mut cur)
            .or_else(|| try_parse_fence(&mut cur))
            .or_else(|| try_parse_styled(&mut cur))
        {
            let span = node.span();
            flush_text(&mut out, text_start, span.start);
            text_start = span.end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Anchor::OPEN) {
        return None;
    }
    let len = Anchor::len_at(cur.rest())?;
    let start = cur.pos();
    cur.bump_n(len);
    Some(InlineNode::Link(Span::new(start, cur.pos())))
}

fn try_parse_fence(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Fence::MARKER) {
        return None;
    }
    let m = Fence::match_at(cur.rest())?;
    let start = cur.pos();
    cur.bump_n(m.len);
    Some(InlineNode::Fence {
        full: Span::new(start, cur.pos()),
        inner: Span::new(start + m.inner.start, start + m.inner.end),
    })
}

/// Byte length of a raw zone starting at the beginning of `s`, if any.
fn raw_zone_len(s: &str) -> Option<usize> {
    Anchor::len_at(s).or_else(|| Fence::match_at(s).map(|m| m.len))
}

/// Attempts to parse a styled span starting at the current position.
///
/// Returns `None` if not at a delimiter or if it isn't closed; the cursor is
/// then restored. An empty pair such as `**` comes back as text.
fn try_parse_styled(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let style = InlineStyle::from_delimiter(cur.peek()?)?;
    let delimiter = style.delimiter();

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump();
    let inner_start = cur.i;

    while !cur.eof() && cur.peek() != Some(delimiter) {
        match raw_zone_len(cur.rest()) {
            Some(len) => cur.bump_n(len),
            None => {
                cur.bump();
            }
        }
    }

    if cur.peek() != Some(delimiter) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    let inner_end = cur.i;
    cur.bump();
    let full = Span::new(start, cur.pos());

    if inner_end == inner_start {
        return Some(InlineNode::Text(full));
    }

    let children = parse_inline(cur.base + inner_start, &cur.s[inner_start..inner_end]);
    Some(InlineNode::Styled {
        style,
        full,
        children,
    })
}
