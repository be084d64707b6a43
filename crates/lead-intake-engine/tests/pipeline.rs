//! End-to-end checks of the public formatting API on raw user text.

use insta::assert_snapshot;
use lead_intake_engine::{Formatter, LinkStyle, format, unescape};
use pretty_assertions::assert_eq;

#[test]
fn empty_input_formats_to_empty_output() {
    assert_eq!(format(""), "");
}

#[test]
fn plain_text_is_only_escaped() {
    assert_eq!(format("Hola mundo"), "Hola mundo");
    assert_eq!(format("a = b?"), "a &#x3D; b&#x3F;");
}

#[test]
fn email_address() {
    assert_eq!(
        format("Contact me at a@b.com"),
        r#"Contact me at <a style="text-decoration: underline; color: var(--complementary);" href="mailto:a@b.com">a@b.com</a>"#
    );
}

#[test]
fn url_with_query() {
    let html = format("Visit https://example.com/path?x=1");
    assert_eq!(html.matches("<a ").count(), 1);
    assert!(html.starts_with("Visit <a "));
    let href = html
        .split("href=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .map(unescape);
    assert_eq!(href.as_deref(), Some("https://example.com/path?x=1"));
}

#[test]
fn bullets_become_one_list() {
    assert_snapshot!(format("- first\n- second"), @r#"<ul><li style="margin-left: 0ch;">first</li><li style="margin-left: 0ch;">second</li></ul>"#);
}

#[test]
fn code_fence_keeps_markers_literal() {
    let html = format("```\nlet *x* = 1;\n```\nfin");
    assert_eq!(html, "<pre>let *x* &#x3D; 1;<br></pre>fin");
}

#[test]
fn inline_fence_stays_inside_list_item_and_heading() {
    assert_eq!(
        format("- see ```x``` here\n- next"),
        r#"<ul><li style="margin-left: 0ch;">see <pre>x</pre> here</li><li style="margin-left: 0ch;">next</li></ul>"#
    );
    assert_eq!(format("# Title ```x``` end"), "<h2>Title <pre>x</pre> end</h2>");
}

#[test]
fn indented_item_with_link() {
    let html = format("Hola *Ana*,\n  - item con www.example.com");
    assert_snapshot!(html, @r#"Hola <strong>Ana</strong>,<br><ul><li style="margin-left: 2ch;">item con <a style="text-decoration: underline; color: var(--complementary);" href="https://www.example.com" target="_blank">www.example.com</a></li></ul>"#);
}

#[test]
fn heading_and_styles() {
    assert_eq!(
        format("# Perfil\n_importante_ y ~viejo~"),
        "<h2>Perfil</h2><em>importante</em> y <s>viejo</s>"
    );
}

#[test]
fn user_markup_never_reaches_output() {
    let html = format("<script>alert('x')</script>\n<img src=x onerror=alert(1)>");
    assert!(!html.contains("<script"));
    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn formatting_is_not_idempotent() {
    let once = format("*a*");
    assert_eq!(once, "<strong>a</strong>");
    let twice = format(&once);
    assert_ne!(twice, once);
    assert!(twice.contains("&lt;strong&gt;"));
}

#[test]
fn custom_link_style() {
    let formatter = Formatter::new(LinkStyle {
        color: "red".to_string(),
        break_threshold: 100,
    });
    assert_eq!(
        formatter.format("example.com"),
        r#"<a style="text-decoration: underline; color: red;" href="https://example.com" target="_blank">example.com</a>"#
    );
}
