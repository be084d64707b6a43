/// Inline styles recognised between a pair of single-character delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStyle {
    /// `*text*`
    Strong,
    /// `_text_`
    Emphasis,
    /// `~text~`
    Strike,
}

impl InlineStyle {
    pub fn from_delimiter(b: u8) -> Option<Self> {
        match b {
            b'*' => Some(Self::Strong),
            b'_' => Some(Self::Emphasis),
            b'~' => Some(Self::Strike),
            _ => None,
        }
    }

    pub fn delimiter(self) -> u8 {
        match self {
            Self::Strong => b'*',
            Self::Emphasis => b'_',
            Self::Strike => b'~',
        }
    }

    /// HTML element name used when rendering.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Emphasis => "em",
            Self::Strike => "s",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiters_round_trip() {
        for style in [InlineStyle::Strong, InlineStyle::Emphasis, InlineStyle::Strike] {
            assert_eq!(InlineStyle::from_delimiter(style.delimiter()), Some(style));
        }
        assert_eq!(InlineStyle::from_delimiter(b'#'), None);
    }
}
