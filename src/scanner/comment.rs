use super::*;

impl Scanner {
    /// HTML comment path: `<!-- … -->` with the body kept verbatim,
    /// whitespace included.
    pub(super) fn scan_comment(&mut self) {
        let start = self.location();
        self.bump_n(4); // <!--
        self.push_token(TokenKind::CommentOpen, "<!--", start);

        let body_start = self.location();
        let mut body = String::new();
        loop {
            if self.remaining().starts_with("-->") {
                break;
            }
            match self.bump() {
                Some(c) => body.push(c),
                None => {
                    self.error_at(start, "Unterminated comment");
                    return;
                }
            }
        }
        if !body.is_empty() {
            self.push_token(TokenKind::CommentContent, body, body_start);
        }
        let close = self.location();
        self.bump_n(3); // -->
        self.push_token(TokenKind::CommentClose, "-->", close);
    }
}
