//! As-you-type phone number masking.
//!
//! The mask remembers the last value it produced so an unchanged result does
//! not cause a rewrite of the input field. That memory lives in a
//! [`PhoneMask`] owned by the form, one per phone field.

/// Result of masking a field value that changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneEdit {
    pub value: String,
    /// Caret position adjusted for inserted or removed separators.
    pub cursor: Option<usize>,
}

/// Phone mask state for one input field.
#[derive(Debug, Clone, Default)]
pub struct PhoneMask {
    previous: String,
}

impl PhoneMask {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last value emitted.
    pub fn previous(&self) -> &str {
        &self.previous
    }

    /// Forgets the last value, e.g. when the form is cleared.
    pub fn reset(&mut self) {
        self.previous.clear();
    }

    /// Masks `value`. Returns `None` when the result is what this mask emitted
    /// last time, so the field should be left alone.
    pub fn apply(&mut self, value: &str, cursor: Option<usize>) -> Option<PhoneEdit> {
        let separators_before = count_separators(value);
        let masked = format_phone(value);
        if masked == self.previous {
            return None;
        }

        let shift = count_separators(&masked) as isize - separators_before as isize;
        let cursor = cursor.map(|c| match c {
            0 => 0,
            c => c.saturating_add_signed(shift),
        });

        self.previous.clone_from(&masked);
        Some(PhoneEdit {
            value: masked,
            cursor,
        })
    }
}

fn count_separators(s: &str) -> usize {
    s.chars().filter(|c| !c.is_ascii_digit()).count()
}

/// Formats the digits of `value` as a phone number.
///
/// A leading `1` is read as the North American country code:
/// `+1 (809) 555-1234`. Otherwise eight to ten digits give `(809) 555-1234`
/// and four to seven give `555-1234`. Other digit counts come back as bare
/// digits.
pub fn format_phone(value: &str) -> String {
    let d: String = value.chars().filter(char::is_ascii_digit).collect();
    let n = d.len();

    if d.starts_with('1') {
        match n {
            0..2 => format!("+{d} "),
            2..4 => format!("+{} ({}", &d[..1], &d[1..]),
            4..8 => format!("+{} ({}) {}", &d[..1], &d[1..4], &d[4..]),
            8..12 => format!("+{} ({}) {}-{}", &d[..1], &d[1..4], &d[4..7], &d[7..]),
            _ => d,
        }
    } else {
        match n {
            8..11 => format!("({}) {}-{}", &d[..3], &d[3..6], &d[6..]),
            4..8 => format!("{}-{}", &d[..3], &d[3..]),
            _ => d,
        }
    }
}
