use super::*;
use crate::ast::{ClauseType, EExClause};

/// Keywords that turn an EEx output expression into a block. The
/// trailing space is what separates `if cond` from an identifier that
/// merely starts with the keyword.
const BLOCK_KEYWORDS: [&str; 5] = ["if", "for", "case", "cond", "unless"];

impl TreeBuilder {
    /// Parses one EEx construct. Output expressions headed by a block
    /// keyword grow into an [`Node::EExBlock`]; everything else stays a
    /// leaf.
    pub(super) fn parse_eex(&mut self, eex_type: EExType) -> Node {
        self.advance(); // eex_open / eex_output / eex_comment
        let code = if self.check(TokenKind::EexContent) {
            self.advance().value
        } else {
            String::new()
        };
        self.expect(TokenKind::EexClose);

        if eex_type == EExType::Output {
            if let Some(keyword) = block_keyword(&code) {
                return self.parse_eex_block(keyword, &code);
            }
        }
        Node::EEx { eex_type, code }
    }

    /// Parses the clause sequence of a block whose head was just
    /// consumed. A block missing its `<% end %>` closes implicitly.
    fn parse_eex_block(&mut self, block_type: &'static str, head: &str) -> Node {
        let expression = head[block_type.len()..].trim_start();
        let expression = expression
            .strip_suffix(" do")
            .unwrap_or(expression)
            .to_string();

        let mut clauses = vec![EExClause {
            clause_type: ClauseType::Do,
            expression: None,
            children: self.parse_eex_block_body(),
        }];

        while let Some(content) = self.clause_boundary() {
            if content == "end" {
                self.consume_clause_marker();
                clauses.push(EExClause {
                    clause_type: ClauseType::End,
                    expression: None,
                    children: Vec::new(),
                });
                break;
            } else if content == "else" {
                self.consume_clause_marker();
                clauses.push(EExClause {
                    clause_type: ClauseType::Else,
                    expression: None,
                    children: self.parse_eex_block_body(),
                });
            } else {
                // An arrow arm; the head keeps its `->`.
                self.consume_clause_marker();
                clauses.push(EExClause {
                    clause_type: ClauseType::Arrow,
                    expression: Some(content),
                    children: self.parse_eex_block_body(),
                });
            }
        }

        Node::EExBlock {
            block_type: block_type.to_string(),
            expression,
            clauses,
        }
    }

    /// A clause body: the generic children loop, additionally stopped by
    /// the next clause marker.
    fn parse_eex_block_body(&mut self) -> Vec<Node> {
        self.collect_children(true)
    }

    /// The trimmed text of the clause marker at the cursor, when one is
    /// there. This is the builder's only two-token lookahead: the content
    /// token behind an `<%`/`<%=` opener decides.
    pub(super) fn clause_boundary(&self) -> Option<String> {
        if !matches!(
            self.current().kind,
            TokenKind::EexOpen | TokenKind::EexOutput
        ) {
            return None;
        }
        let next = self.tokens.get(self.pos + 1)?;
        if next.kind != TokenKind::EexContent {
            return None;
        }
        let content = next.value.trim();
        if content == "end" || content == "else" || content.contains("->") {
            Some(content.to_string())
        } else {
            None
        }
    }

    pub(super) fn at_clause_boundary(&self) -> bool {
        self.clause_boundary().is_some()
    }

    /// Consumes the three tokens of an `<% end %>`-shaped marker.
    fn consume_clause_marker(&mut self) {
        self.advance(); // eex_open / eex_output
        self.advance(); // eex_content
        self.expect(TokenKind::EexClose);
    }
}

fn block_keyword(code: &str) -> Option<&'static str> {
    BLOCK_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| {
            code.len() > keyword.len()
                && code.starts_with(keyword)
                && code.as_bytes()[keyword.len()] == b' '
        })
}
