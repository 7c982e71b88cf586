use super::*;
use crate::ast::{is_void_element, Attribute};

impl TreeBuilder {
    /// Parses an HTML element and its subtree.
    ///
    /// Void elements close themselves no matter how they were written;
    /// everything else must find its matching `</tag>`.
    pub(super) fn parse_element(&mut self) -> Node {
        let tag = self.advance().value; // tag_open
        let attributes = self.parse_attributes();

        if self.check(TokenKind::TagSelfClose) {
            self.advance();
            return Node::Element {
                tag,
                attributes,
                children: Vec::new(),
                self_closing: true,
            };
        }

        self.expect(TokenKind::TagEnd);

        if is_void_element(&tag) {
            return Node::Element {
                tag,
                attributes,
                children: Vec::new(),
                self_closing: true,
            };
        }

        let children = self.parse_children();
        if self.check(TokenKind::TagClose) {
            let close = self.advance();
            if close.value != tag {
                self.error_at(
                    &close,
                    format!(
                        "Mismatched closing tag: expected </{tag}>, got </{}>",
                        close.value
                    ),
                );
            }
        } else {
            self.error(format!("Expected closing tag </{tag}>"));
        }
        Node::Element {
            tag,
            attributes,
            children,
            self_closing: false,
        }
    }

    /// Parses the attribute list of an open tag, stopping at the tag
    /// terminator.
    pub(super) fn parse_attributes(&mut self) -> Vec<Attribute> {
        let mut attributes = Vec::new();
        loop {
            match self.current().kind {
                TokenKind::ExprOpen => {
                    let expression = self.parse_expression();
                    attributes.push(Attribute::Spread { expression });
                }
                TokenKind::AttrName => {
                    let name = self.advance().value;
                    if self.check(TokenKind::AttrEquals) {
                        self.advance();
                        match self.current().kind {
                            TokenKind::ExprOpen => {
                                let expression = self.parse_expression();
                                if let Some(kind) = name.strip_prefix(':') {
                                    attributes.push(Attribute::Special {
                                        kind: kind.to_string(),
                                        expression,
                                    });
                                } else {
                                    attributes.push(Attribute::Dynamic { name, expression });
                                }
                            }
                            TokenKind::AttrValue => {
                                let value = self.advance().value;
                                attributes.push(Attribute::Static { name, value });
                            }
                            _ => self.error("Expected attribute value"),
                        }
                    } else {
                        // Boolean attribute.
                        attributes.push(Attribute::Static {
                            name,
                            value: "true".to_string(),
                        });
                    }
                }
                _ => break,
            }
        }
        attributes
    }
}
