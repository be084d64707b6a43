use super::{
    cursor::Cursor,
    kinds::{Fence, LineBreak},
    span::Span,
};

/// A block-level token of the converted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A run of text that is neither a line break nor part of a fence.
    Text(Span),
    /// A `<br>` marker.
    Break(Span),
    /// A fenced block. Raw zone: nothing inside `inner` is interpreted.
    Fence {
        /// Full span including delimiters and an absorbed trailing break.
        full: Span,
        /// Content between the delimiters.
        inner: Span,
    },
}

/// Splits `src` into text runs, line breaks and fences in one pass.
///
/// Fences are checked before breaks, so `<br>` markers inside a fence stay
/// part of its content.
pub fn tokenize(src: &str) -> Vec<Token> {
    let mut cur = Cursor::new(src, 0);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<Token>, start: usize, end: usize) {
        if end > start {
            out.push(Token::Text(Span::new(start, end)));
        }
    }

    while !cur.eof() {
        if cur.starts_with(Fence::MARKER)
            && let Some(m) = Fence::match_at(cur.rest())
        {
            let start = cur.pos();
            flush_text(&mut out, text_start, start);
            out.push(Token::Fence {
                full: Span::new(start, start + m.len),
                inner: Span::new(start + m.inner.start, start + m.inner.end),
            });
            cur.bump_n(m.len);
            text_start = cur.pos();
            continue;
        }
        if cur.starts_with(LineBreak::MARKER) {
            let start = cur.pos();
            flush_text(&mut out, text_start, start);
            cur.bump_n(LineBreak::MARKER.len());
            out.push(Token::Break(Span::new(start, cur.pos())));
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}
