//! JSON renderer: the crate's compatibility-sensitive wire shape.
//!
//! The key set and the lowercase variant names are a stable contract, so
//! every type carries a hand-written `Serialize` impl instead of a
//! derive; `serde_json` does the escaping and the writing.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::ast::{Attribute, Document, EExClause, Expression, Node, Slot};

/// Renders the document as compact JSON.
pub fn render_json(doc: &Document) -> String {
    serde_json::to_string(doc).expect("document serialization is infallible")
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "document")?;
        map.serialize_entry("children", &self.children)?;
        map.end()
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Text { content } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "text")?;
                map.serialize_entry("content", content)?;
                map.end()
            }
            Node::Element {
                tag,
                attributes,
                children,
                self_closing,
            } => {
                let mut map = serializer.serialize_map(Some(5))?;
                map.serialize_entry("type", "element")?;
                map.serialize_entry("tag", tag)?;
                map.serialize_entry("attributes", attributes)?;
                map.serialize_entry("children", children)?;
                map.serialize_entry("selfClosing", self_closing)?;
                map.end()
            }
            Node::Component {
                component_type,
                name,
                attributes,
                children,
                slots,
            } => {
                let mut map = serializer.serialize_map(Some(6))?;
                map.serialize_entry("type", "component")?;
                map.serialize_entry("name", name)?;
                map.serialize_entry("componentType", component_type.as_str())?;
                map.serialize_entry("attributes", attributes)?;
                map.serialize_entry("children", children)?;
                map.serialize_entry("slots", slots)?;
                map.end()
            }
            Node::Slot(slot) => slot.serialize(serializer),
            Node::Expression(expression) => expression.serialize(serializer),
            Node::EEx { eex_type, code } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "eex")?;
                map.serialize_entry("eexType", eex_type.as_str())?;
                map.serialize_entry("code", code)?;
                map.end()
            }
            Node::EExBlock {
                block_type,
                expression,
                clauses,
            } => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("type", "eex_block")?;
                map.serialize_entry("blockType", block_type)?;
                map.serialize_entry("expression", expression)?;
                map.serialize_entry("clauses", clauses)?;
                map.end()
            }
            Node::Comment { content } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "comment")?;
                map.serialize_entry("content", content)?;
                map.end()
            }
        }
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = if self.let_binding.is_some() { 5 } else { 4 };
        let mut map = serializer.serialize_map(Some(entries))?;
        map.serialize_entry("type", "slot")?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("attributes", &self.attributes)?;
        map.serialize_entry("children", &self.children)?;
        if let Some(binding) = &self.let_binding {
            map.serialize_entry("letBinding", binding)?;
        }
        map.end()
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "expression")?;
        map.serialize_entry("code", &self.code)?;
        map.end()
    }
}

impl Serialize for Attribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Attribute::Static { name, value } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "static")?;
                map.serialize_entry("name", name)?;
                map.serialize_entry("value", value)?;
                map.end()
            }
            Attribute::Dynamic { name, expression } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "dynamic")?;
                map.serialize_entry("name", name)?;
                map.serialize_entry("expression", expression)?;
                map.end()
            }
            Attribute::Spread { expression } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "spread")?;
                map.serialize_entry("expression", expression)?;
                map.end()
            }
            Attribute::Special { kind, expression } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "special")?;
                map.serialize_entry("kind", kind)?;
                map.serialize_entry("expression", expression)?;
                map.end()
            }
        }
    }
}

impl Serialize for EExClause {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = if self.expression.is_some() { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(entries))?;
        map.serialize_entry("clauseType", self.clause_type.as_str())?;
        if let Some(expression) = &self.expression {
            map.serialize_entry("expression", expression)?;
        }
        map.serialize_entry("children", &self.children)?;
        map.end()
    }
}
