//! Whitespace stages of the formatting pipeline.

/// Non-breaking space entity emitted for indentation.
pub const NBSP: &str = "&nbsp;";
/// Line-break marker emitted for `\n`.
pub const LINE_BREAK: &str = "<br>";
/// Number of [`NBSP`]s a leading tab expands to.
pub const TAB_WIDTH: usize = 4;

/// Turns the leading spaces and tabs of every line into [`NBSP`] runs.
///
/// One entity per space, [`TAB_WIDTH`] per tab. Whitespace after the first
/// other character of a line is left as it is.
pub fn preserve_leading_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let indent_len = line.len() - line.trim_start_matches([' ', '\t']).len();
        for b in line[..indent_len].bytes() {
            let width = if b == b'\t' { TAB_WIDTH } else { 1 };
            for _ in 0..width {
                out.push_str(NBSP);
            }
        }
        out.push_str(&line[indent_len..]);
    }

    out
}

/// Replaces every `\n` with [`LINE_BREAK`].
pub fn convert_newlines(text: &str) -> String {
    text.replace('\n', LINE_BREAK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("no indent", "no indent")]
    #[case("  two", "&nbsp;&nbsp;two")]
    #[case("\tone tab", "&nbsp;&nbsp;&nbsp;&nbsp;one tab")]
    #[case(" \t mixed", "&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;mixed")]
    #[case("a  b\tc", "a  b\tc")]
    #[case("top\n  nested\n\n    deeper", "top\n&nbsp;&nbsp;nested\n\n&nbsp;&nbsp;&nbsp;&nbsp;deeper")]
    #[case("   ", "&nbsp;&nbsp;&nbsp;")]
    #[case("x\n ", "x\n&nbsp;")]
    fn leading_whitespace(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(preserve_leading_spaces(input), expected);
    }

    #[rstest]
    #[case("", "")]
    #[case("one line", "one line")]
    #[case("a\nb", "a<br>b")]
    #[case("\n\n", "<br><br>")]
    #[case("crlf\r\nline", "crlf\r<br>line")]
    fn newlines(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert_newlines(input), expected);
    }
}
