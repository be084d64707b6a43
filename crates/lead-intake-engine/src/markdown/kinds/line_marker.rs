use crate::format::NBSP;

/// What a line marker turns the line into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `- item`
    Bullet,
    /// `1. item` or `1) item`; `marker_len` covers digit, punctuation and the
    /// whitespace after them, all shown verbatim.
    Numbered { marker_len: usize },
    /// `# title` (escaped `#`)
    Heading,
}

/// A marker found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMarker {
    pub kind: MarkerKind,
    /// Number of leading `&nbsp;` before the marker.
    pub indent: usize,
    /// Byte length of the indent run.
    pub indent_len: usize,
    /// Byte length of indent plus marker; the item content starts here.
    pub prefix_len: usize,
}

impl LineMarker {
    pub const BULLET: u8 = b'-';
    /// `#` as it appears after escaping.
    pub const HEADING: &'static str = "&#x23;";

    /// Classifies the start of a line. Headings only count without indent.
    pub fn classify(line: &str) -> Option<Self> {
        let mut indent = 0;
        let mut rest = line;
        while let Some(r) = rest.strip_prefix(NBSP) {
            indent += 1;
            rest = r;
        }
        let indent_len = line.len() - rest.len();

        let bytes = rest.as_bytes();
        let (kind, marker_len) = if bytes.first() == Some(&Self::BULLET) {
            (MarkerKind::Bullet, 1 + whitespace_len(&rest[1..])?)
        } else if bytes.first().is_some_and(u8::is_ascii_digit)
            && matches!(bytes.get(1), Some(b'.' | b')'))
        {
            let len = 2 + whitespace_len(&rest[2..])?;
            (MarkerKind::Numbered { marker_len: len }, len)
        } else if indent == 0 && rest.starts_with(Self::HEADING) {
            let len = Self::HEADING.len() + whitespace_len(&rest[Self::HEADING.len()..])?;
            (MarkerKind::Heading, len)
        } else {
            return None;
        };

        Some(Self {
            kind,
            indent,
            indent_len,
            prefix_len: indent_len + marker_len,
        })
    }
}

/// Length of the single whitespace character required after a marker.
fn whitespace_len(s: &str) -> Option<usize> {
    s.chars()
        .next()
        .filter(|c| c.is_whitespace())
        .map(char::len_utf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- item", MarkerKind::Bullet, 0, 2)]
    #[case("-\titem", MarkerKind::Bullet, 0, 2)]
    #[case("&nbsp;&nbsp;- nested", MarkerKind::Bullet, 2, 14)]
    #[case("1. first", MarkerKind::Numbered { marker_len: 3 }, 0, 3)]
    #[case("7) seventh", MarkerKind::Numbered { marker_len: 3 }, 0, 3)]
    #[case("&nbsp;3. three", MarkerKind::Numbered { marker_len: 3 }, 1, 9)]
    #[case("&#x23; Title", MarkerKind::Heading, 0, 7)]
    fn recognises_markers(
        #[case] line: &str,
        #[case] kind: MarkerKind,
        #[case] indent: usize,
        #[case] prefix_len: usize,
    ) {
        let marker = LineMarker::classify(line).unwrap();
        assert_eq!(marker.kind, kind);
        assert_eq!(marker.indent, indent);
        assert_eq!(marker.prefix_len, prefix_len);
    }

    #[rstest]
    #[case("")]
    #[case("plain text")]
    #[case("-no space")]
    #[case("-")]
    #[case("10. two digits")]
    #[case("1.no space")]
    #[case("&#x23;NoSpace")]
    #[case("&nbsp;&#x23; indented heading")]
    #[case("a - b")]
    fn ignores_non_markers(#[case] line: &str) {
        assert_eq!(LineMarker::classify(line), None);
    }
}
