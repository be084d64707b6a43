/// Anchor tag inline type. Anchors are raw zones: markdown rules never touch
/// their attributes or text.
pub struct Anchor;

impl Anchor {
    pub const OPEN: &'static str = "<a";
    pub const CLOSE: &'static str = "</a>";

    /// Byte length of the anchor element starting at the beginning of `s`,
    /// or `None` if `s` does not start with a complete `<a …>…</a>`.
    pub fn len_at(s: &str) -> Option<usize> {
        let after_open = s.strip_prefix(Self::OPEN)?;
        if !matches!(after_open.bytes().next(), Some(b' ' | b'>')) {
            return None;
        }
        let tag_end = Self::OPEN.len() + after_open.find('>')? + 1;
        let close = s[tag_end..].find(Self::CLOSE)?;
        Some(tag_end + close + Self::CLOSE.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_complete_anchor() {
        let s = r#"<a href="x">x_y_z</a> tail"#;
        assert_eq!(Anchor::len_at(s), Some(s.len() - " tail".len()));
    }

    #[test]
    fn rejects_other_tags() {
        assert_eq!(Anchor::len_at("<abbr>x</abbr>"), None);
        assert_eq!(Anchor::len_at("<b>x</b>"), None);
    }

    #[test]
    fn rejects_unclosed_anchor() {
        assert_eq!(Anchor::len_at(r#"<a href="x">never closed"#), None);
        assert_eq!(Anchor::len_at("<a href"), None);
    }
}
