//! Entity escaping for user-authored text.
//!
//! The alphabet is wider than plain HTML escaping: besides `& < > " '` it
//! covers `/ ` = : ? #` so that later stages can recognise URLs and headings
//! by their entity form without raw user punctuation getting in the way.

/// Character to entity table. Every entity ends with `;`, so no entity is a
/// prefix of another and unescaping never has to pick between candidates.
pub const ENTITIES: [(char, &str); 11] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
    ('/', "&#47;"),
    ('`', "&#x60;"),
    ('=', "&#x3D;"),
    (':', "&#x3A;"),
    ('?', "&#x3F;"),
    ('#', "&#x23;"),
];

fn entity_for(ch: char) -> Option<&'static str> {
    ENTITIES
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, entity)| *entity)
}

/// Replaces every character of the escape alphabet with its entity.
///
/// Single pass: the `&` of an emitted entity is never escaped again.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match entity_for(ch) {
            Some(entity) => out.push_str(entity),
            None => out.push(ch),
        }
    }
    out
}

/// Inverse of [`escape`]. Only complete entity codes from the table are
/// decoded; anything else, including truncated codes such as `&#x3A`, is
/// copied through unchanged.
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        match ENTITIES
            .iter()
            .find(|(_, entity)| rest.starts_with(entity))
        {
            Some((ch, entity)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
