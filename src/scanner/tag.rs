use super::*;

impl Scanner {
    /// Tag path: everything starting with a bare `<`.
    ///
    /// One character of lookahead picks the subvariant: `/` for closing
    /// tags, `:` for slots, `.` for local components, an uppercase first
    /// letter for remote components, anything else for an HTML tag.
    pub(super) fn scan_tag(&mut self) {
        let start = self.location();
        self.bump(); // <
        match self.peek() {
            Some('/') => {
                self.bump();
                self.scan_closing_tag(start);
            }
            Some(':') => {
                self.bump();
                let name = self.read_name();
                self.push_token(TokenKind::SlotOpen, name, start);
                self.scan_attributes();
                self.scan_tag_terminator();
            }
            Some('.') => {
                self.bump();
                let name = self.read_name();
                self.push_token(TokenKind::ComponentOpen, format!(".{name}"), start);
                self.scan_attributes();
                self.scan_tag_terminator();
            }
            _ => {
                let name = self.read_name();
                if name.is_empty() {
                    self.error_at(start, "Expected tag name after <");
                    return;
                }
                let kind = if name.starts_with(|c: char| c.is_ascii_uppercase()) {
                    TokenKind::ComponentOpen
                } else {
                    TokenKind::TagOpen
                };
                self.push_token(kind, name, start);
                self.scan_attributes();
                self.scan_tag_terminator();
            }
        }
    }

    /// Closing tags: `</name>`, `</.name>`, `</:name>`, `</Module.Name>`.
    fn scan_closing_tag(&mut self, start: Location) {
        match self.peek() {
            Some(':') => {
                self.bump();
                let name = self.read_name();
                self.skip_whitespace();
                self.expect_char('>');
                self.push_token(TokenKind::SlotClose, name, start);
            }
            Some('.') => {
                self.bump();
                let name = self.read_name();
                self.expect_char('>');
                self.push_token(TokenKind::ComponentClose, format!(".{name}"), start);
            }
            _ => {
                let name = self.read_name();
                self.expect_char('>');
                let kind = if name.starts_with(|c: char| c.is_ascii_uppercase()) {
                    TokenKind::ComponentClose
                } else {
                    TokenKind::TagClose
                };
                self.push_token(kind, name, start);
            }
        }
    }

    /// Consumes `>` or `/>` after the attribute list.
    pub(super) fn scan_tag_terminator(&mut self) {
        self.skip_whitespace();
        let start = self.location();
        if self.remaining().starts_with("/>") {
            self.bump_n(2);
            self.push_token(TokenKind::TagSelfClose, "/>", start);
        } else if self.eat('>') {
            self.push_token(TokenKind::TagEnd, ">", start);
        } else {
            self.error_at(start, "Unterminated tag");
        }
    }

    fn expect_char(&mut self, expected: char) {
        if !self.eat(expected) {
            let at = self.location();
            self.error_at(at, "Unterminated tag");
        }
    }
}
