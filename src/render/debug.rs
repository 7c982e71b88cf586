//! Debug renderer: an indented structural dump for humans.

use super::attribute_source;
use crate::ast::{ClauseType, Document, EExClause, EExType, Node, Slot};

/// Renders the tree as an indented dump, one node per line with a
/// two-space indent step.
pub fn render_debug(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str("Document\n");
    for node in &doc.children {
        write_node(&mut out, node, 1);
    }
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    match node {
        Node::Text { content } => {
            line(out, depth, &format!("Text: \"{}\"", escape_control(content)));
        }
        Node::Element {
            tag,
            attributes,
            children,
            ..
        } => {
            line(out, depth, &format!("Element: <{tag}>"));
            for attribute in attributes {
                line(out, depth + 1, &format!("Attribute: {}", attribute_source(attribute)));
            }
            for child in children {
                write_node(out, child, depth + 1);
            }
        }
        Node::Component {
            name,
            attributes,
            children,
            slots,
            ..
        } => {
            line(out, depth, &format!("Component: {name}"));
            for attribute in attributes {
                line(out, depth + 1, &format!("Attribute: {}", attribute_source(attribute)));
            }
            for child in children {
                write_node(out, child, depth + 1);
            }
            for slot in slots {
                write_slot(out, slot, depth + 1);
            }
        }
        Node::Slot(slot) => write_slot(out, slot, depth),
        Node::Expression(expression) => {
            line(out, depth, &format!("Expression: {{{}}}", expression.code));
        }
        Node::EEx { eex_type, code } => {
            let open = match eex_type {
                EExType::Output => "<%=",
                EExType::Exec => "<%",
                EExType::Comment => "<%#",
            };
            line(out, depth, &format!("EEx: {open} {code} %>"));
        }
        Node::EExBlock {
            block_type,
            expression,
            clauses,
        } => {
            line(out, depth, &format!("EExBlock: {block_type} {expression}"));
            for clause in clauses {
                write_clause(out, clause, depth + 1);
            }
        }
        Node::Comment { content } => {
            line(out, depth, &format!("Comment: \"{}\"", escape_control(content)));
        }
    }
}

fn write_slot(out: &mut String, slot: &Slot, depth: usize) {
    line(out, depth, &format!("Slot: <:{}>", slot.name));
    for attribute in &slot.attributes {
        line(out, depth + 1, &format!("Attribute: {}", attribute_source(attribute)));
    }
    for child in &slot.children {
        write_node(out, child, depth + 1);
    }
}

fn write_clause(out: &mut String, clause: &EExClause, depth: usize) {
    let label = match clause.clause_type {
        ClauseType::Arrow => {
            format!("Clause: {}", clause.expression.as_deref().unwrap_or("->"))
        }
        other => format!("Clause: {}", other.as_str()),
    };
    line(out, depth, &label);
    for child in &clause.children {
        write_node(out, child, depth + 1);
    }
}

fn line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(text);
    out.push('\n');
}

/// Makes newlines, carriage returns, and tabs visible.
fn escape_control(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
