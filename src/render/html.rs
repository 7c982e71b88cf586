//! HTML renderer: the round-trippable HEEx source form.

use super::{attribute_source, escape_text};
use crate::ast::{is_void_element, Attribute, ClauseType, Document, EExClause, EExType, Node, Slot};

/// Renders a document back to HEEx source. Output of a clean parse
/// reparses without error.
pub fn render_html(doc: &Document) -> String {
    let mut out = String::new();
    for node in &doc.children {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text { content } => out.push_str(&escape_text(content)),
        Node::Element {
            tag,
            attributes,
            children,
            self_closing,
        } => {
            out.push('<');
            out.push_str(tag);
            write_attributes(out, attributes);
            if *self_closing || is_void_element(tag) {
                out.push_str(" />");
                return;
            }
            out.push('>');
            for child in children {
                write_node(out, child);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        Node::Component {
            name,
            attributes,
            children,
            slots,
            ..
        } => {
            out.push('<');
            out.push_str(name);
            write_attributes(out, attributes);
            if children.is_empty() && slots.is_empty() {
                out.push_str(" />");
                return;
            }
            out.push('>');
            for child in children {
                write_node(out, child);
            }
            for slot in slots {
                write_slot(out, slot);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        Node::Slot(slot) => write_slot(out, slot),
        Node::Expression(expression) => {
            out.push('{');
            out.push_str(&expression.code);
            out.push('}');
        }
        Node::EEx { eex_type, code } => {
            let open = match eex_type {
                EExType::Output => "<%=",
                EExType::Exec => "<%",
                EExType::Comment => "<%#",
            };
            out.push_str(open);
            out.push(' ');
            out.push_str(code);
            out.push_str(" %>");
        }
        Node::EExBlock {
            block_type,
            expression,
            clauses,
        } => {
            out.push_str("<%= ");
            out.push_str(block_type);
            out.push(' ');
            out.push_str(expression);
            out.push_str(" do %>");
            for clause in clauses {
                write_clause(out, clause);
            }
        }
        Node::Comment { content } => {
            out.push_str("<!--");
            out.push_str(content);
            out.push_str("-->");
        }
    }
}

fn write_clause(out: &mut String, clause: &EExClause) {
    match clause.clause_type {
        ClauseType::Do => {}
        ClauseType::Else => out.push_str("<% else %>"),
        ClauseType::End => {
            out.push_str("<% end %>");
            return;
        }
        ClauseType::Arrow => {
            out.push_str("<% ");
            if let Some(expression) = &clause.expression {
                out.push_str(expression);
            }
            out.push_str(" %>");
        }
    }
    for child in &clause.children {
        write_node(out, child);
    }
}

fn write_slot(out: &mut String, slot: &Slot) {
    out.push_str("<:");
    out.push_str(&slot.name);
    write_attributes(out, &slot.attributes);
    if slot.children.is_empty() {
        out.push_str(" />");
        return;
    }
    out.push('>');
    for child in &slot.children {
        write_node(out, child);
    }
    out.push_str("</:");
    out.push_str(&slot.name);
    out.push('>');
}

fn write_attributes(out: &mut String, attributes: &[Attribute]) {
    for attribute in attributes {
        out.push(' ');
        out.push_str(&attribute_source(attribute));
    }
}
