//! Detection of URLs and e-mail addresses in escaped text.
//!
//! Input has already been through [`escape`](super::escape::escape), so the
//! `:` and `/` of a protocol separator appear as `&#x3A;&#47;&#47;` and the
//! patterns below match the entity form.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Escaped form of `://`.
pub const PROTOCOL_SEPARATOR: &str = "&#x3A;&#47;&#47;";

/// Top-level domains accepted for URLs written without a protocol.
pub const BARE_DOMAIN_TLDS: [&str; 30] = [
    "com", "org", "net", "edu", "gov", "mil", "io", "co", "us", "uk", "ca", "de", "es", "it", "fr",
    "ru", "jp", "me", "store", "biz", "info", "name", "tv", "app", "ai", "gg", "xyz", "site", "ly",
    "dev",
];

const PROTOCOL: &str = r"(?:https?&#x3A;&#47;&#47;|ftp&#x3A;&#47;&#47;|@)";
const HOST: &str = r"(?:www\.)?(?:[^\x00-\x7F]|[A-Z0-9.-]){2,}";
const PATH: &str =
    r"(?:&#47;(?:[^\x00-\x7F]|[A-Z0-9.\-;,$+~_@%]|&amp;|&#47;|&#x3D;|&#x3A;|&#x3F;|&#x23;)*)?";

fn protocol_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern =
            format!(r"(?i){PROTOCOL}{HOST}(?:\.[A-Z]{{2,}}|&#x3A;[0-9]{{2,5}}|\.[0-9]{{1,3}}){PATH}");
        Regex::new(&pattern).expect("Invalid protocol URL regex")
    })
}

fn bare_domain_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let tlds = BARE_DOMAIN_TLDS.join("|");
        // ASCII word boundary: a non-ASCII letter right after the TLD ends it.
        let pattern = format!(r"(?i){PROTOCOL}?{HOST}\.(?:{tlds})(?-u:\b){PATH}");
        Regex::new(&pattern).expect("Invalid bare domain regex")
    })
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9._-]+")
            .expect("Invalid email regex")
    })
}

/// Presentation of generated anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkStyle {
    /// CSS colour value for link text.
    pub color: String,
    /// Matches longer than this many characters get `word-break: break-all;`.
    pub break_threshold: usize,
}

impl Default for LinkStyle {
    fn default() -> Self {
        Self {
            color: "var(--complementary)".to_string(),
            break_threshold: 40,
        }
    }
}

impl LinkStyle {
    fn style_attr(&self, text: &str) -> String {
        let mut style = format!("text-decoration: underline; color: {};", self.color);
        if text.chars().count() > self.break_threshold {
            style.push_str(" word-break: break-all;");
        }
        style
    }

    fn web_anchor(&self, href: &str, text: &str) -> String {
        format!(
            r#"<a style="{}" href="{href}" target="_blank">{text}</a>"#,
            self.style_attr(text)
        )
    }

    fn mail_anchor(&self, address: &str) -> String {
        format!(
            r#"<a style="{}" href="mailto:{address}">{address}</a>"#,
            self.style_attr(address)
        )
    }
}

/// Wraps URLs and e-mail addresses of escaped text in anchors.
///
/// Three passes run in order: protocol URLs, bare domains from
/// [`BARE_DOMAIN_TLDS`], then e-mail addresses. The first two leave anything
/// containing `@` alone so addresses reach the e-mail pass intact.
pub fn linkify(escaped: &str, style: &LinkStyle) -> String {
    let text = protocol_url_regex().replace_all(escaped, |caps: &Captures| {
        let m = &caps[0];
        if m.contains('@') {
            return m.to_string();
        }
        style.web_anchor(m, m)
    });

    let text = bare_domain_regex().replace_all(&text, |caps: &Captures| {
        let m = &caps[0];
        // Protocol URLs were wrapped by the first pass.
        if m.contains('@') || m.contains(PROTOCOL_SEPARATOR) {
            return m.to_string();
        }
        style.web_anchor(&format!("https://{m}"), m)
    });

    email_regex()
        .replace_all(&text, |caps: &Captures| style.mail_anchor(&caps[0]))
        .into_owned()
}
