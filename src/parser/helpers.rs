/*
 * ==========================================================================
 * PHPIF - Check your conditionals!
 * ==========================================================================
 * 
 * Author:   Sam Wilcox
 * 
 * License:
 * This file is part of the PHPIF syntax checker project.
 * 
 * PHPIF is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use crate::error::SyntaxError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;
use log::debug;

impl<'t> Parser<'t> {
    /// Returns the token under the cursor.
    ///
    /// Past the last token this is the synthetic end-of-input token, so
    /// grammar rules never have to bounds-check.
    pub(crate) fn peek(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or(&self.eof)
    }

    /// Returns the token after the cursor, with the same end-of-input rule.
    pub(crate) fn peek_next(&self) -> &Token {
        self.tokens.get(self.current + 1).unwrap_or(&self.eof)
    }

    /// 1-based position of the cursor, as reported in diagnostics.
    pub(crate) fn position(&self) -> usize {
        self.current + 1
    }

    /// Returns true once every token has been consumed.
    pub(crate) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Moves past one token. Never moves past the end of input.
    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    /// Checks the current token's kind without advancing.
    pub(crate) fn check_kind(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Checks for a keyword without consuming it.
    pub(crate) fn check_keyword(&self, kw: &str) -> bool {
        self.peek().is(TokenKind::Keyword, kw)
    }

    /// Checks if the current token is the given delimiter.
    pub(crate) fn check_symbol(&self, sym: &str) -> bool {
        self.peek().is(TokenKind::Delimiter, sym)
    }

    /// Checks if the current token is the given operator.
    pub(crate) fn check_operator(&self, op: &str) -> bool {
        self.peek().is(TokenKind::Operator, op)
    }

    /// Matches a keyword and consumes it if present.
    ///
    /// Leaves the cursor untouched on a mismatch.
    pub(crate) fn match_keyword(&mut self, kw: &str) -> bool {
        if self.check_keyword(kw) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a required token or records a diagnostic and skips one.
    ///
    /// With `value` of `None` any token of `kind` is accepted. Either way
    /// the cursor moves (unless already at end of input), so the caller's
    /// next expectation is checked against the following token.
    ///
    /// # Returns
    /// - `true` if the token matched
    /// - `false` if a diagnostic was recorded
    pub(crate) fn expect(&mut self, kind: TokenKind, value: Option<&str>) -> bool {
        let token = self.peek();
        let matched = token.kind == kind && value.map_or(true, |v| token.text == v);

        if matched {
            self.advance();
            return true;
        }

        let err = SyntaxError::expected(kind, value, token, self.position());
        self.error_and_skip(err);
        false
    }

    /// Like [`Parser::expect`], but any of `kinds` is acceptable.
    pub(crate) fn expect_any(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.contains(&self.peek().kind) {
            self.advance();
            return true;
        }

        let err = SyntaxError::expected_any(kinds, self.peek(), self.position());
        self.error_and_skip(err);
        false
    }

    /// Records a diagnostic and skips the offending token.
    pub(crate) fn error_and_skip(&mut self, err: SyntaxError) {
        self.record(err);
        self.advance();
    }

    pub(crate) fn record(&mut self, err: SyntaxError) {
        debug!("{}", err);
        self.errors.push(err);
    }

    /// Skips trailing tokens up to the next statement boundary.
    ///
    /// Stops on `;`, `}` or one of `if`, `else`, `while`, `for` without
    /// consuming it. Never records diagnostics.
    pub(crate) fn synchronize(&mut self) {
        while !self.is_at_end() {
            let token = self.peek();

            let boundary = match token.kind {
                TokenKind::Delimiter => token.text == ";" || token.text == "}",
                TokenKind::Keyword => matches!(token.text.as_str(), "if" | "else" | "while" | "for"),
                _ => false,
            };

            if boundary {
                return;
            }

            self.advance();
        }
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// At the depth limit the rule is not entered: one diagnostic is
    /// recorded and the construct under the cursor is skipped wholesale.
    pub(crate) fn nested(&mut self, rule: impl FnOnce(&mut Self)) {
        if self.depth >= self.options.max_depth {
            let err = SyntaxError::too_deep(self.options.max_depth, self.peek(), self.position());
            self.record(err);
            self.skip_construct();
            return;
        }

        self.depth += 1;
        rule(self);
        self.depth -= 1;
    }

    /// Skips one statement-shaped run of tokens, keeping braces balanced.
    ///
    /// Ends after a top-level `;` or after the `}` that closes the first
    /// brace, unless an `else` follows either one. Also ends before an
    /// unmatched `}`.
    /// Always consumes at least one token when any remain.
    fn skip_construct(&mut self) {
        let start = self.current;
        let mut braces = 0usize;

        while !self.is_at_end() {
            if self.check_symbol("{") {
                braces += 1;
            } else if self.check_symbol("}") {
                if braces == 0 {
                    if self.current == start {
                        self.advance();
                    }
                    return;
                }

                braces -= 1;
                if braces == 0 {
                    self.advance();
                    if self.check_keyword("else") {
                        continue;
                    }
                    return;
                }
            } else if self.check_symbol(";") && braces == 0 {
                self.advance();
                if self.check_keyword("else") {
                    continue;
                }
                return;
            }

            self.advance();
        }
    }
}

/// `&&`, `||`, and the single-character `&` / `|` forms.
pub(crate) fn is_logical_operator(op: &str) -> bool {
    matches!(op, "&&" | "||" | "&" | "|")
}

pub(crate) fn is_comparison_operator(op: &str) -> bool {
    matches!(op, "==" | "===" | "!=" | "!==" | "<" | ">" | "<=" | ">=")
}

pub(crate) fn is_assignment_operator(op: &str) -> bool {
    matches!(op, "=" | "+=" | "-=" | "*=" | "/=" | ".=" | "%=")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn test_peek_past_end_is_end_of_input() {
        let tokens = tokenize("$x");
        let mut parser = Parser::new(&tokens);

        parser.advance();
        parser.advance();
        parser.advance();

        assert_eq!(parser.current, 1);
        assert_eq!(parser.peek().kind, TokenKind::EndOfInput);
        assert_eq!(parser.peek_next().kind, TokenKind::EndOfInput);
    }

    #[test]
    fn test_expect_skips_mismatched_token() {
        let tokens = tokenize("{ )");
        let mut parser = Parser::new(&tokens);

        assert!(!parser.expect(TokenKind::Delimiter, Some("(")));
        assert_eq!(parser.current, 1);
        assert!(parser.expect(TokenKind::Delimiter, Some(")")));
        assert_eq!(parser.errors.len(), 1);
        assert_eq!(parser.errors[0].position, 1);
    }

    #[test]
    fn test_match_keyword_does_not_move_on_mismatch() {
        let tokens = tokenize("echo");
        let mut parser = Parser::new(&tokens);

        assert!(!parser.match_keyword("else"));
        assert_eq!(parser.current, 0);
        assert!(parser.match_keyword("echo"));
        assert!(parser.is_at_end());
    }

    #[test]
    fn test_synchronize_stops_at_boundaries() {
        let tokens = tokenize("$a $b while");
        let mut parser = Parser::new(&tokens);

        parser.synchronize();
        assert!(parser.check_keyword("while"));
        assert!(parser.errors.is_empty());
    }

    #[test]
    fn test_skip_construct_balances_braces() {
        let tokens = tokenize("{ { $a; } } else { $b; } $c;");
        let mut parser = Parser::new(&tokens);

        parser.skip_construct();
        assert_eq!(parser.peek().text, "$c");
    }

    #[test]
    fn test_skip_construct_follows_braceless_else() {
        let tokens = tokenize("if ($b) $c = 1; else if ($d) $c = 2; else $c = 3; $e;");
        let mut parser = Parser::new(&tokens);

        parser.skip_construct();
        assert_eq!(parser.peek().text, "$e");
    }

    #[test]
    fn test_skip_construct_stops_before_unmatched_brace() {
        let tokens = tokenize("$a = 1 }");
        let mut parser = Parser::new(&tokens);

        parser.skip_construct();
        assert!(parser.check_symbol("}"));
    }

    #[test]
    fn test_operator_tables() {
        assert!(is_comparison_operator(">="));
        assert!(!is_comparison_operator("="));
        assert!(is_assignment_operator("%="));
        assert!(is_logical_operator("|"));
        assert!(!is_logical_operator("!"));
    }
}
