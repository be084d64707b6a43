//! Small string helpers for labels and dashboard previews.

use std::sync::OnceLock;

use regex::Regex;

/// Words kept by [`shorten_string`].
pub const PREVIEW_WORDS: usize = 30;

fn lower_upper_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z])([A-Z])").expect("Invalid camel case regex"))
}

fn acronym_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Z])([A-Z][a-z])").expect("Invalid acronym regex"))
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("Invalid tag regex"))
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Splits a camelCase field name into capitalised words:
/// `yearsOfExperience` → `Years Of Experience`, `HTMLParser` → `HTML Parser`.
pub fn camel_case_to_spaced(camel: &str) -> String {
    let spaced = lower_upper_regex().replace_all(camel, "$1 $2");
    let spaced = acronym_regex().replace_all(&spaced, "$1 $2");
    capitalize_first(&spaced)
}

/// Upper-cases the first letter of every space-separated word.
pub fn capitalize_words(s: &str) -> String {
    s.split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strips HTML tags and keeps the first [`PREVIEW_WORDS`] words, appending
/// `...` when anything was cut.
pub fn shorten_string(text: &str) -> String {
    let cleaned = tag_regex().replace_all(text, " ");
    let words: Vec<&str> = cleaned.split(' ').collect();
    if words.len() <= PREVIEW_WORDS {
        return words.join(" ");
    }
    format!("{}...", words[..PREVIEW_WORDS].join(" "))
}
