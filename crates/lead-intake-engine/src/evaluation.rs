//! Formatting of the assistant's profile evaluation for the staff e-mail.
//!
//! The assistant answers in a loose markdown dialect (`**bold**`, `### title`,
//! numbered sections). This is a separate, smaller converter from
//! [`crate::format`]: its input is machine-written and its output only ever
//! lands in the e-mail body.

use std::sync::OnceLock;

use regex::Regex;

/// Inline style of every evaluation paragraph.
pub const PARAGRAPH_STYLE: &str = "margin: 10px 0; font-size: inherit; color: inherit;";

fn bold_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid bold regex"))
}

fn heading_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^###[ \t]*([^\r\n]*)").expect("Invalid heading regex"))
}

fn paragraph_break_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n|\n\d+\.\s").expect("Invalid paragraph regex"))
}

/// Converts an evaluation to HTML paragraphs.
///
/// The text is HTML-escaped first. Paragraphs are split on blank lines and
/// before numbered sections (`\n2. `); the section number itself is dropped.
pub fn format_evaluation(text: &str) -> String {
    let escaped = html_escape::encode_text(text);
    let bolded = bold_regex().replace_all(&escaped, "<strong>$1</strong>");
    let titled = heading_regex().replace_all(&bolded, r#"<h3 style="font-size: 1.2rem;">$1</h3>"#);

    paragraph_break_regex()
        .split(&titled)
        .map(|paragraph| format!(r#"<p style="{PARAGRAPH_STYLE}">{}</p>"#, paragraph.trim()))
        .collect()
}
