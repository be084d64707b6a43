use super::{
    blocks::{Block, LineKind},
    inline::{InlineNode, parse_inline},
    kinds::LineBreak,
    span::Span,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListTag {
    Unordered,
    Ordered,
}

impl ListTag {
    fn open(self) -> &'static str {
        match self {
            ListTag::Unordered => "<ul>",
            ListTag::Ordered => "<ol>",
        }
    }

    fn close(self) -> &'static str {
        match self {
            ListTag::Unordered => "</ul>",
            ListTag::Ordered => "</ol>",
        }
    }
}

/// Renders blocks to an HTML fragment.
///
/// Consecutive list items of the same kind share one list element.
pub fn render(src: &str, blocks: &[Block]) -> String {
    let mut html = HtmlWriter {
        src,
        out: String::with_capacity(src.len() + src.len() / 4),
        list: None,
    };
    for block in blocks {
        html.block(block);
    }
    html.set_list(None);
    html.out
}

struct HtmlWriter<'a> {
    src: &'a str,
    out: String,
    list: Option<ListTag>,
}

impl HtmlWriter<'_> {
    fn set_list(&mut self, list: Option<ListTag>) {
        if self.list == list {
            return;
        }
        if let Some(open) = self.list {
            self.out.push_str(open.close());
        }
        if let Some(next) = list {
            self.out.push_str(next.open());
        }
        self.list = list;
    }

    fn block(&mut self, block: &Block) {
        match *block {
            Block::Fence { inner } => {
                self.set_list(None);
                self.pre(inner);
            }
            Block::Line {
                kind,
                content,
                line_break,
            } => {
                self.line(kind, content);
                if line_break && !kind.absorbs_break() {
                    self.out.push_str(LineBreak::MARKER);
                }
            }
        }
    }

    fn line(&mut self, kind: LineKind, content: Span) {
        match kind {
            LineKind::Paragraph => {
                self.set_list(None);
                self.inline(content);
            }
            LineKind::Heading => {
                self.set_list(None);
                self.out.push_str("<h2>");
                self.inline(content);
                self.out.push_str("</h2>");
            }
            LineKind::Bullet { indent } => {
                self.set_list(Some(ListTag::Unordered));
                self.out
                    .push_str(&format!(r#"<li style="margin-left: {indent}ch;">"#));
                self.inline(content);
                self.out.push_str("</li>");
            }
            LineKind::Numbered { indent, marker } => {
                self.set_list(Some(ListTag::Ordered));
                self.out.push_str(&format!(
                    r#"<li style="position: relative; margin-left: {indent}ch;"><span style="position: absolute; left: -2ch; top: 0;">{}</span>"#,
                    marker.text(self.src)
                ));
                self.inline(content);
                self.out.push_str("</li>");
            }
        }
    }

    fn pre(&mut self, inner: Span) {
        self.out.push_str("<pre>");
        self.out.push_str(inner.text(self.src));
        self.out.push_str("</pre>");
    }

    fn inline(&mut self, content: Span) {
        let nodes = parse_inline(content.start, content.text(self.src));
        self.nodes(&nodes);
    }

    fn nodes(&mut self, nodes: &[InlineNode]) {
        for node in nodes {
            match node {
                InlineNode::Text(sp) | InlineNode::Link(sp) => {
                    self.out.push_str(sp.text(self.src));
                }
                InlineNode::Fence { inner, .. } => self.pre(*inner),
                InlineNode::Styled {
                    style, children, ..
                } => {
                    let tag = style.tag();
                    self.out.push('<');
                    self.out.push_str(tag);
                    self.out.push('>');
                    self.nodes(children);
                    self.out.push_str("</");
                    self.out.push_str(tag);
                    self.out.push('>');
                }
            }
        }
    }
}
