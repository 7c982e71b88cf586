use super::*;

impl Scanner {
    /// Expression path: `{ … }` with balanced braces.
    ///
    /// The body is opaque: a single depth counter tracks nested braces,
    /// and quoted runs are skipped wholesale so a `{` inside a string
    /// never opens a nested expression. No sub-parser is involved.
    pub(super) fn scan_expression(&mut self) {
        let open = self.location();
        self.bump(); // {
        self.push_token(TokenKind::ExprOpen, "{", open);

        let body_start = self.location();
        let mut code = String::new();
        let mut depth = 1u32;
        loop {
            match self.peek() {
                None => {
                    self.error_at(open, "Unterminated expression");
                    if !code.is_empty() {
                        self.push_token(TokenKind::ExprContent, code, body_start);
                    }
                    return;
                }
                Some('{') => {
                    depth += 1;
                    code.push('{');
                    self.bump();
                }
                Some('}') => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                    code.push('}');
                    self.bump();
                }
                Some(quote @ ('"' | '\'')) => {
                    code.push(quote);
                    self.bump();
                    self.copy_quoted(quote, &mut code);
                }
                Some(c) => {
                    code.push(c);
                    self.bump();
                }
            }
        }
        if !code.is_empty() {
            self.push_token(TokenKind::ExprContent, code, body_start);
        }
        let close = self.location();
        self.bump(); // }
        self.push_token(TokenKind::ExprClose, "}", close);
    }

    /// Copies a quoted run inside an expression body verbatim, honoring
    /// single-character backslash escapes, until the matching quote is
    /// copied or the input ends.
    fn copy_quoted(&mut self, quote: char, code: &mut String) {
        while let Some(c) = self.peek() {
            if c == '\\' {
                code.push(c);
                self.bump();
                if let Some(escaped) = self.bump() {
                    code.push(escaped);
                }
            } else {
                code.push(c);
                self.bump();
                if c == quote {
                    return;
                }
            }
        }
    }
}
