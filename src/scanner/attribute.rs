use super::*;

impl Scanner {
    /// Attribute path: names, `=`, values, and spreads, repeated until
    /// the tag terminator (or end of input) comes up next.
    pub(super) fn scan_attributes(&mut self) {
        loop {
            self.skip_whitespace();
            match self.peek() {
                None | Some('>') | Some('/') => break,
                Some('{') => {
                    // Spread: the expression tokens land inline in the
                    // stream; the tree builder recognizes the shape.
                    self.scan_expression();
                }
                Some(':') => {
                    let start = self.location();
                    self.bump();
                    let name = self.read_name();
                    if name.is_empty() {
                        self.error_at(start, "Expected attribute name");
                        continue;
                    }
                    self.push_token(TokenKind::AttrName, format!(":{name}"), start);
                    self.scan_attr_value_opt();
                }
                _ => {
                    let start = self.location();
                    let name = self.read_name();
                    if name.is_empty() {
                        self.error_at(start, "Expected attribute name");
                        self.bump();
                        continue;
                    }
                    self.push_token(TokenKind::AttrName, name, start);
                    self.scan_attr_value_opt();
                }
            }
        }
    }

    /// Consumes `= value` when one follows; a bare name is a boolean
    /// attribute and produces no further tokens.
    fn scan_attr_value_opt(&mut self) {
        self.skip_whitespace();
        if self.peek() != Some('=') {
            return;
        }
        let at = self.location();
        self.bump();
        self.push_token(TokenKind::AttrEquals, "=", at);
        self.scan_attr_value();
    }

    fn scan_attr_value(&mut self) {
        self.skip_whitespace();
        match self.peek() {
            Some('{') => self.scan_expression(),
            Some(quote @ ('"' | '\'')) => self.scan_quoted_value(quote),
            _ => self.scan_unquoted_value(),
        }
    }

    /// A quoted value: everything up to the matching quote, entity-decoded.
    /// Backslashes have no meaning here.
    fn scan_quoted_value(&mut self, quote: char) {
        let open = self.location();
        self.bump(); // opening quote
        let start = self.location();
        let mut value = String::new();
        loop {
            match self.peek() {
                None => {
                    self.error_at(open, "Unterminated string");
                    break;
                }
                Some(c) if c == quote => {
                    self.bump();
                    break;
                }
                Some(_) => self.bump_decoded(&mut value),
            }
        }
        self.push_token(TokenKind::AttrValue, value, start);
    }

    /// An unquoted value: a run up to whitespace or the tag terminator.
    fn scan_unquoted_value(&mut self) {
        let start = self.location();
        let mut value = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '>' || c == '/' {
                break;
            }
            self.bump_decoded(&mut value);
        }
        if !value.is_empty() {
            self.push_token(TokenKind::AttrValue, value, start);
        }
    }
}
