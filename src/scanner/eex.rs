use super::*;

impl Scanner {
    /// EEx path: `<% … %>`, `<%= … %>`, and `<%# … %>`.
    ///
    /// The body runs to the next `%>` with no nesting; it is stored
    /// trimmed of surrounding whitespace.
    pub(super) fn scan_eex(&mut self) {
        let start = self.location();
        self.bump_n(2); // <%
        let kind = if self.eat('=') {
            TokenKind::EexOutput
        } else if self.eat('#') {
            TokenKind::EexComment
        } else {
            TokenKind::EexOpen
        };
        self.push_token(kind, "", start);

        let body_start = self.location();
        let mut body = String::new();
        loop {
            if self.remaining().starts_with("%>") {
                break;
            }
            match self.bump() {
                Some(c) => body.push(c),
                None => {
                    self.error_at(start, "Unterminated EEx expression");
                    return;
                }
            }
        }
        let trimmed = body.trim();
        if !trimmed.is_empty() {
            self.push_token(TokenKind::EexContent, trimmed, body_start);
        }
        let close = self.location();
        self.bump_n(2); // %>
        self.push_token(TokenKind::EexClose, "%>", close);
    }
}
