use super::*;
use crate::ast::{Attribute, Document, Node};
use crate::parser;

fn doc(input: &str) -> Document {
    parser::parse(input).expect("parse error in test")
}

fn text(content: &str) -> Document {
    Document {
        children: vec![Node::Text {
            content: content.to_string(),
        }],
    }
}

#[test]
fn text_escapes_html_characters() {
    assert_eq!(render_html(&text("1 < 2 > 0 & x")), "1 &lt; 2 &gt; 0 &amp; x");
}

#[test]
fn decoded_entities_re_escape() {
    assert_eq!(render_html(&doc("a &amp; b")), "a &amp; b");
}

#[test]
fn static_attribute_value_escapes_quotes() {
    let document = Document {
        children: vec![Node::Element {
            tag: "div".to_string(),
            attributes: vec![Attribute::Static {
                name: "title".to_string(),
                value: "say \"hi\"".to_string(),
            }],
            children: Vec::new(),
            self_closing: false,
        }],
    };
    assert_eq!(
        render_html(&document),
        r#"<div title="say &quot;hi&quot;"></div>"#
    );
}

#[test]
fn void_element_renders_self_closed() {
    assert_eq!(render_html(&doc("<br>")), "<br />");
}

#[test]
fn component_renders_children_then_slots() {
    let input = "<.card><:header>H</:header>body</.card>";
    assert_eq!(
        render_html(&doc(input)),
        "<.card>body<:header>H</:header></.card>"
    );
}

#[test]
fn empty_component_self_closes() {
    assert_eq!(render_html(&doc("<.icon></.icon>")), "<.icon />");
}

#[test]
fn comment_body_is_not_padded() {
    assert_eq!(render_html(&doc("<!--  note  -->")), "<!--  note  -->");
}

#[test]
fn eex_forms_render_their_markers() {
    assert_eq!(render_html(&doc("<% run() %>")), "<% run() %>");
    assert_eq!(render_html(&doc("<%= @x %>")), "<%= @x %>");
    assert_eq!(render_html(&doc("<%# note %>")), "<%# note %>");
}

#[test]
fn block_renders_all_clause_markers() {
    let input = "<%= if @show do %>yes<% else %>no<% end %>";
    assert_eq!(render_html(&doc(input)), input);
}

#[test]
fn arrow_clauses_round_trip() {
    let input = "<%= case @x do %><% :a -> %>A<% end %>";
    assert_eq!(render_html(&doc(input)), input);
}

#[test]
fn debug_dump_shape() {
    let out = render_debug(&doc("<div class=\"c\">Hi</div>"));
    assert_eq!(
        out,
        "Document\n  Element: <div>\n    Attribute: class=\"c\"\n    Text: \"Hi\"\n"
    );
}

#[test]
fn debug_dump_nests_component_slots() {
    let out = render_debug(&doc("<.card><:header>T</:header></.card>"));
    assert_eq!(
        out,
        "Document\n  Component: .card\n    Slot: <:header>\n      Text: \"T\"\n"
    );
}

#[test]
fn debug_escapes_control_characters() {
    let out = render_debug(&text("a\nb\tc\rd"));
    assert!(out.contains(r#"Text: "a\nb\tc\rd""#), "{out}");
}

#[test]
fn json_document_envelope() {
    let out = render_json(&doc("<.button>Click</.button>"));
    assert!(out.starts_with('{') && out.ends_with('}'), "{out}");
    assert!(out.contains(r#""type":"document""#), "{out}");
    assert!(out.contains(r#""type":"component""#), "{out}");
    assert!(out.contains(r#""componentType":"local""#), "{out}");
}

#[test]
fn json_attribute_variants() {
    let out = render_json(&doc(r#"<div class="c" id={@i} {@r} :if={@s}></div>"#));
    for needle in [
        r#""type":"static""#,
        r#""name":"class""#,
        r#""value":"c""#,
        r#""type":"dynamic""#,
        r#""type":"spread""#,
        r#""type":"special""#,
        r#""kind":"if""#,
        r#""type":"expression""#,
        r#""selfClosing":false"#,
    ] {
        assert!(out.contains(needle), "missing {needle} in {out}");
    }
}

#[test]
fn json_slot_carries_let_binding() {
    let out = render_json(&doc("<.t><:col :let={v}>x</:col></.t>"));
    assert!(out.contains(r#""type":"slot""#), "{out}");
    assert!(out.contains(r#""letBinding":"v""#), "{out}");
}

#[test]
fn json_escapes_strings() {
    let out = render_json(&text("a\"b\\c\nd"));
    assert_eq!(
        out,
        r#"{"type":"document","children":[{"type":"text","content":"a\"b\\c\nd"}]}"#
    );
}

#[test]
fn json_block_shape() {
    let out = render_json(&doc("<%= if @x do %>y<% end %>"));
    for needle in [
        r#""type":"eex_block""#,
        r#""blockType":"if""#,
        r#""expression":"@x""#,
        r#""clauseType":"do""#,
        r#""clauseType":"end""#,
    ] {
        assert!(out.contains(needle), "missing {needle} in {out}");
    }
}
