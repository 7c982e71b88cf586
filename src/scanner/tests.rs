use super::*;
use crate::token::TokenKind::*;

fn scan(input: &str) -> Vec<(TokenKind, String)> {
    Scanner::new(input)
        .tokenize()
        .expect("scan error in test")
        .into_iter()
        .map(|t| (t.kind, t.value))
        .collect()
}

fn kinds(input: &str) -> Vec<TokenKind> {
    scan(input).into_iter().map(|(kind, _)| kind).collect()
}

fn scan_err(input: &str) -> String {
    Scanner::new(input)
        .tokenize()
        .expect_err("expected a scan error")
        .to_string()
}

#[test]
fn plain_element() {
    assert_eq!(kinds("<div>"), vec![TagOpen, TagEnd, Eof]);
}

#[test]
fn self_closing_element() {
    assert_eq!(kinds("<br/>"), vec![TagOpen, TagSelfClose, Eof]);
}

#[test]
fn closing_tag() {
    assert_eq!(kinds("</div>"), vec![TagClose, Eof]);
}

#[test]
fn local_component_keeps_leading_dot() {
    let tokens = scan("<.button>");
    assert_eq!(tokens[0], (ComponentOpen, ".button".to_string()));
    assert_eq!(tokens[1].0, TagEnd);
}

#[test]
fn remote_component_keeps_module_path() {
    let tokens = scan("<MyApp.Button>");
    assert_eq!(tokens[0], (ComponentOpen, "MyApp.Button".to_string()));
}

#[test]
fn component_close_variants() {
    assert_eq!(scan("</.button>")[0], (ComponentClose, ".button".to_string()));
    assert_eq!(
        scan("</MyApp.Button>")[0],
        (ComponentClose, "MyApp.Button".to_string())
    );
}

#[test]
fn slot_open_drops_the_colon() {
    let tokens = scan("<:header>");
    assert_eq!(tokens[0], (SlotOpen, "header".to_string()));
    assert_eq!(tokens[1].0, TagEnd);
}

#[test]
fn slot_close_allows_trailing_whitespace() {
    assert_eq!(scan("</:header >")[0], (SlotClose, "header".to_string()));
}

#[test]
fn expression_tokens() {
    assert_eq!(
        scan("{@name}"),
        vec![
            (ExprOpen, "{".to_string()),
            (ExprContent, "@name".to_string()),
            (ExprClose, "}".to_string()),
            (Eof, String::new()),
        ]
    );
}

#[test]
fn eex_output_tokens() {
    let tokens = scan("<%= @name %>");
    assert_eq!(kinds("<%= @name %>"), vec![EexOutput, EexContent, EexClose, Eof]);
    assert_eq!(tokens[1].1, "@name");
}

#[test]
fn eex_exec_and_comment_markers() {
    assert_eq!(kinds("<% run() %>"), vec![EexOpen, EexContent, EexClose, Eof]);
    assert_eq!(kinds("<%# note %>"), vec![EexComment, EexContent, EexClose, Eof]);
}

#[test]
fn eex_content_is_trimmed() {
    assert_eq!(scan("<%=   @x   %>")[1], (EexContent, "@x".to_string()));
}

#[test]
fn html_comment_keeps_exact_body() {
    let tokens = scan("<!-- x -->");
    assert_eq!(tokens[0], (CommentOpen, "<!--".to_string()));
    assert_eq!(tokens[1], (CommentContent, " x ".to_string()));
    assert_eq!(tokens[2], (CommentClose, "-->".to_string()));
}

#[test]
fn nested_braces_stay_in_one_expression() {
    let tokens = scan("{%{a: 1}}");
    assert_eq!(kinds("{%{a: 1}}"), vec![ExprOpen, ExprContent, ExprClose, Eof]);
    assert_eq!(tokens[1], (ExprContent, "%{a: 1}".to_string()));
}

#[test]
fn brace_inside_string_does_not_nest() {
    let tokens = scan(r#"{"hello {world}"}"#);
    assert_eq!(tokens[1], (ExprContent, r#""hello {world}""#.to_string()));
    assert_eq!(tokens[2].0, ExprClose);
}

#[test]
fn escaped_quote_inside_expression_string() {
    let tokens = scan(r#"{"a\"b"}"#);
    assert_eq!(tokens[1], (ExprContent, r#""a\"b""#.to_string()));
}

#[test]
fn attributes_tokenize_in_order() {
    assert_eq!(
        kinds(r#"<div class="box">"#),
        vec![TagOpen, AttrName, AttrEquals, AttrValue, TagEnd, Eof]
    );
}

#[test]
fn special_attribute_keeps_colon_in_name() {
    let tokens = scan("<div :if={@show}>");
    assert_eq!(tokens[1], (AttrName, ":if".to_string()));
    assert_eq!(tokens[2].0, AttrEquals);
    assert_eq!(tokens[3].0, ExprOpen);
    assert_eq!(tokens[4], (ExprContent, "@show".to_string()));
}

#[test]
fn spread_attribute_is_an_inline_expression() {
    assert_eq!(
        kinds("<div {@attrs}>"),
        vec![TagOpen, ExprOpen, ExprContent, ExprClose, TagEnd, Eof]
    );
}

#[test]
fn boolean_attribute_has_no_value_tokens() {
    assert_eq!(kinds("<input disabled/>"), vec![TagOpen, AttrName, TagSelfClose, Eof]);
}

#[test]
fn unquoted_attribute_value() {
    assert_eq!(scan("<div id=main>")[3], (AttrValue, "main".to_string()));
}

#[test]
fn single_quoted_attribute_value() {
    assert_eq!(scan("<div id='main'>")[3], (AttrValue, "main".to_string()));
}

#[test]
fn text_decodes_the_five_entities() {
    let tokens = scan("a &amp; b &lt;c&gt; &quot;d&quot; &#39;e&#39;");
    assert_eq!(tokens[0], (Text, "a & b <c> \"d\" 'e'".to_string()));
}

#[test]
fn unknown_entities_pass_through() {
    assert_eq!(scan("a &nbsp; b")[0], (Text, "a &nbsp; b".to_string()));
}

#[test]
fn quoted_value_decodes_entities() {
    let tokens = scan(r#"<div title="a &quot;b&quot;">"#);
    assert_eq!(tokens[3], (AttrValue, r#"a "b""#.to_string()));
}

#[test]
fn text_runs_break_at_construct_openers() {
    assert_eq!(
        kinds("before{@x}after<br/>"),
        vec![Text, ExprOpen, ExprContent, ExprClose, Text, TagOpen, TagSelfClose, Eof]
    );
}

#[test]
fn spans_track_lines_and_offsets() {
    let tokens = Scanner::new("a\n<div>").tokenize().expect("scan error in test");
    assert_eq!(tokens[1].span.start.line, 2);
    assert_eq!(tokens[1].span.start.column, 1);
    assert_eq!(tokens[1].span.start.offset, 2);
}

#[test]
fn unterminated_expression_is_an_error() {
    let message = scan_err("{@name");
    assert!(message.contains("Unterminated expression"), "{message}");
    assert!(message.starts_with("1:1:"), "{message}");
}

#[test]
fn unterminated_eex_is_an_error() {
    assert!(scan_err("<%= @x").contains("Unterminated EEx expression"));
}

#[test]
fn unterminated_comment_is_an_error() {
    assert!(scan_err("<!-- x").contains("Unterminated comment"));
}

#[test]
fn unterminated_string_is_an_error() {
    assert!(scan_err(r#"<div class="x"#).contains("Unterminated string"));
}

#[test]
fn unterminated_tag_is_an_error() {
    assert!(scan_err("<div class=x").contains("Unterminated tag"));
}

#[test]
fn missing_tag_name_is_an_error() {
    assert!(scan_err("< >").contains("Expected tag name after <"));
}

#[test]
fn errors_accumulate_across_the_input() {
    let message = scan_err("< > {x");
    assert_eq!(message.lines().count(), 2, "{message}");
}
