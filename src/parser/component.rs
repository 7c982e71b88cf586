use super::*;
use crate::ast::{Attribute, ComponentType, Slot};

impl TreeBuilder {
    /// Parses a function component, routing slot children into `slots`
    /// and every other body node into `children`.
    pub(super) fn parse_component(&mut self) -> Node {
        let name = self.advance().value; // component_open
        let component_type = if name.starts_with('.') {
            ComponentType::Local
        } else {
            ComponentType::Remote
        };
        let attributes = self.parse_attributes();

        if self.check(TokenKind::TagSelfClose) {
            self.advance();
            return Node::Component {
                component_type,
                name,
                attributes,
                children: Vec::new(),
                slots: Vec::new(),
            };
        }

        self.expect(TokenKind::TagEnd);

        let mut children = Vec::new();
        let mut slots = Vec::new();
        loop {
            match self.current().kind {
                TokenKind::ComponentClose | TokenKind::Eof => break,
                TokenKind::SlotOpen => slots.push(self.parse_slot()),
                _ => {
                    if let Some(node) = self.parse_node() {
                        children.push(node);
                    }
                }
            }
        }

        if self.check(TokenKind::ComponentClose) {
            let close = self.advance();
            if close.value != name {
                self.error_at(
                    &close,
                    format!(
                        "Mismatched component close: expected </{name}>, got </{}>",
                        close.value
                    ),
                );
            }
        } else {
            self.error(format!("Expected closing tag </{name}>"));
        }
        Node::Component {
            component_type,
            name,
            attributes,
            children,
            slots,
        }
    }

    /// Parses a named slot. A `:let` special attribute doubles as the
    /// slot's binding; it stays in the attribute list as well.
    pub(super) fn parse_slot(&mut self) -> Slot {
        let name = self.advance().value; // slot_open
        let attributes = self.parse_attributes();
        let let_binding = attributes.iter().find_map(|attr| match attr {
            Attribute::Special { kind, expression } if kind == "let" => {
                Some(expression.code.clone())
            }
            _ => None,
        });

        if self.check(TokenKind::TagSelfClose) {
            self.advance();
            return Slot {
                name,
                attributes,
                children: Vec::new(),
                let_binding,
            };
        }

        self.expect(TokenKind::TagEnd);
        let children = self.parse_children();
        if self.check(TokenKind::SlotClose) {
            let close = self.advance();
            if close.value != name {
                self.error_at(
                    &close,
                    format!(
                        "Mismatched closing tag: expected </:{name}>, got </:{}>",
                        close.value
                    ),
                );
            }
        } else {
            self.error(format!("Expected closing tag </:{name}>"));
        }
        Slot {
            name,
            attributes,
            children,
            let_binding,
        }
    }
}
