use super::{
    kinds::{LineBreak, LineMarker, MarkerKind},
    scan::Token,
    span::Span,
};

/// The kind of a line block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Ordinary text.
    Paragraph,
    /// `# title`
    Heading,
    /// `- item`, `indent` counts leading `&nbsp;`.
    Bullet { indent: usize },
    /// `1. item`, the marker is rendered verbatim.
    Numbered { indent: usize, marker: Span },
}

impl LineKind {
    /// List and heading lines are blocks of their own and swallow the line
    /// break that ends them.
    pub fn absorbs_break(self) -> bool {
        !matches!(self, LineKind::Paragraph)
    }
}

/// A block produced from the token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Line {
        kind: LineKind,
        /// Line content after any marker, for inline parsing.
        content: Span,
        /// Whether a `<br>` ended this line.
        line_break: bool,
    },
    Fence {
        inner: Span,
    },
}

/// Groups tokens into line and fence blocks.
///
/// A line runs from the start of the text, a break or a block fence up to the
/// next break. A fence that starts a line is a block of its own; one that
/// follows text stays in the line and is rendered inline. Its marker is
/// classified once the line is complete.
pub struct BlockBuilder<'a> {
    src: &'a str,
    line: Option<Span>,
    out: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            line: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, token: &Token) {
        match *token {
            Token::Text(span) => {
                let start = self.line.map_or(span.start, |l| l.start);
                self.line = Some(Span::new(start, span.end));
            }
            Token::Break(span) => {
                let line = self.line.take().unwrap_or(Span::new(span.start, span.start));
                self.close_line(line, true);
            }
            Token::Fence { full, inner } => match self.line.take() {
                Some(line) => {
                    // A break absorbed by the fence ends the line.
                    let line = Span::new(line.start, full.end);
                    if full.text(self.src).ends_with(LineBreak::MARKER) {
                        self.close_line(line, false);
                    } else {
                        self.line = Some(line);
                    }
                }
                None => self.out.push(Block::Fence { inner }),
            },
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        if let Some(line) = self.line.take() {
            self.close_line(line, false);
        }
        self.out
    }

    fn close_line(&mut self, line: Span, line_break: bool) {
        let (kind, content) = match LineMarker::classify(line.text(self.src)) {
            Some(marker) => {
                let content = Span::new(line.start + marker.prefix_len, line.end);
                let kind = match marker.kind {
                    MarkerKind::Bullet => LineKind::Bullet {
                        indent: marker.indent,
                    },
                    MarkerKind::Numbered { marker_len } => {
                        let start = line.start + marker.indent_len;
                        LineKind::Numbered {
                            indent: marker.indent,
                            marker: Span::new(start, start + marker_len),
                        }
                    }
                    MarkerKind::Heading => LineKind::Heading,
                };
                (kind, content)
            }
            None => (LineKind::Paragraph, line),
        };

        self.out.push(Block::Line {
            kind,
            content,
            line_break,
        });
    }
}

/// Builds the block list for `src` from its tokens.
pub fn build_blocks(src: &str, tokens: &[Token]) -> Vec<Block> {
    let mut builder = BlockBuilder::new(src);
    for token in tokens {
        builder.push(token);
    }
    builder.finish()
}
