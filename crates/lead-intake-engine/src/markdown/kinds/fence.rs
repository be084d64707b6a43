use crate::markdown::span::Span;

/// Line-break marker emitted by newline conversion.
pub struct LineBreak;

impl LineBreak {
    pub const MARKER: &'static str = "<br>";
}

/// Fenced monospace block delimited by escaped triple backticks.
pub struct Fence;

/// Byte offsets of a fence match, relative to the start of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceMatch {
    /// Content between the delimiters, without the line break after the opener.
    pub inner: Span,
    /// Total bytes consumed, including one line break after the closer.
    pub len: usize,
}

impl Fence {
    /// Three backticks as they appear after escaping.
    pub const MARKER: &'static str = "&#x60;&#x60;&#x60;";

    /// Matches a fence at the start of `s`. The content is everything up to
    /// the nearest closing marker; without one there is no fence.
    pub fn match_at(s: &str) -> Option<FenceMatch> {
        if !s.starts_with(Self::MARKER) {
            return None;
        }
        let mut inner_start = Self::MARKER.len();
        if s[inner_start..].starts_with(LineBreak::MARKER) {
            inner_start += LineBreak::MARKER.len();
        }
        let inner_end = inner_start + s[inner_start..].find(Self::MARKER)?;

        let mut len = inner_end + Self::MARKER.len();
        if s[len..].starts_with(LineBreak::MARKER) {
            len += LineBreak::MARKER.len();
        }

        Some(FenceMatch {
            inner: Span::new(inner_start, inner_end),
            len,
        })
    }
}
