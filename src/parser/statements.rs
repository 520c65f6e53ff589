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
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use log::debug;

impl<'t> Parser<'t> {
    /// Parses an if statement with its optional else branch.
    ///
    /// ```text
    /// 'if' '(' Condition ')' Statement ( 'else' ( IfStmt | Statement ) )?
    /// ```
    ///
    /// The else branch is permissive: `else if (...)`, a block, or a bare
    /// statement such as `else $y = 2;` are all accepted. An `else` at end
    /// of input is reported as a missing statement.
    pub(crate) fn if_statement(&mut self) {
        debug!("if statement at token {}", self.position());

        self.expect(TokenKind::Keyword, Some("if"));
        self.expect(TokenKind::Delimiter, Some("("));
        self.condition();
        self.expect(TokenKind::Delimiter, Some(")"));
        self.statement("`if` condition");

        if !self.match_keyword("else") {
            return;
        }

        if self.check_keyword("if") {
            self.nested(|p| p.if_statement());
        } else {
            self.statement("`else`");
        }
    }

    /// ```text
    /// 'while' '(' Condition ')' Statement
    /// ```
    pub(crate) fn while_statement(&mut self) {
        debug!("while statement at token {}", self.position());

        self.expect(TokenKind::Keyword, Some("while"));
        self.expect(TokenKind::Delimiter, Some("("));
        self.condition();
        self.expect(TokenKind::Delimiter, Some(")"));
        self.statement("`while` condition");
    }

    /// Parses a C-style for loop.
    ///
    /// ```text
    /// 'for' '(' Expr? ';' Condition ';' Expr? ')' Statement
    /// ```
    ///
    /// Init and step are optional; the condition is not.
    pub(crate) fn for_statement(&mut self) {
        debug!("for statement at token {}", self.position());

        self.expect(TokenKind::Keyword, Some("for"));
        self.expect(TokenKind::Delimiter, Some("("));

        if !self.check_symbol(";") {
            self.expression();
        }
        self.expect(TokenKind::Delimiter, Some(";"));

        self.condition();
        self.expect(TokenKind::Delimiter, Some(";"));

        if !self.check_symbol(")") {
            self.expression();
        }
        self.expect(TokenKind::Delimiter, Some(")"));

        self.statement("`for` header");
    }

    /// Parses the body of a control structure, one nesting level deeper.
    ///
    /// `after` names what the statement follows and only appears in the
    /// diagnostic for a body cut off by end of input.
    pub(crate) fn statement(&mut self, after: &str) {
        self.nested(|p| {
            if p.is_at_end() {
                let err = SyntaxError::missing_statement(after, p.peek(), p.position());
                p.record(err);
            } else if p.check_symbol("{") {
                p.block();
            } else {
                p.simple_statement();
            }
        });
    }

    /// ```text
    /// '{' Statement* '}'
    /// ```
    fn block(&mut self) {
        self.expect(TokenKind::Delimiter, Some("{"));

        while !self.is_at_end() && !self.check_symbol("}") {
            self.statement("`{`");
        }

        self.expect(TokenKind::Delimiter, Some("}"));
    }

    /// Dispatches nested control flow, otherwise parses an expression
    /// statement with an optional trailing `;`.
    fn simple_statement(&mut self) {
        if self.check_keyword("if") {
            self.if_statement();
            return;
        }

        if self.check_keyword("while") {
            self.while_statement();
            return;
        }

        if self.check_keyword("for") {
            self.for_statement();
            return;
        }

        self.expression();

        if self.check_symbol(";") {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse_if_else;

    #[test]
    fn test_else_if_chain() {
        let result = parse_if_else(
            "if ($x > 0) { $y = 1; } else if ($x < 0) { $y = -1; } else { $y = 0; }",
        );
        assert!(result.success, "{:?}", result.messages());
    }

    #[test]
    fn test_bare_else_statement_is_accepted() {
        let result = parse_if_else("if ($x) { $y = 1; } else $y = 2;");
        assert!(result.success, "{:?}", result.messages());
    }

    #[test]
    fn test_else_at_end_of_input() {
        let result = parse_if_else("if ($x) { $y = 1; } else");
        assert_eq!(
            result.messages(),
            vec!["Token 12: expected statement after `else`, found end of input"]
        );
    }

    #[test]
    fn test_missing_if_body() {
        let result = parse_if_else("if ($x)");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].code, "E_STATEMENT");
    }

    #[test]
    fn test_loops_inside_blocks() {
        let result = parse_if_else(
            "if ($n > 0) { while ($n > 0) { $n--; } for ($i = 0; $i < 10; $i++) echo $i; }",
        );
        assert!(result.success, "{:?}", result.messages());
    }

    #[test]
    fn test_for_with_empty_init_and_step() {
        let result = parse_if_else("if (true) for (; $i < 3;) { $i += 1; }");
        assert!(result.success, "{:?}", result.messages());
    }

    #[test]
    fn test_for_requires_condition() {
        let result = parse_if_else("if (true) for ($i = 0;; $i++) { }");
        assert!(!result.success);
        assert_eq!(result.diagnostics[0].code, "E_CONDITION");
        assert_eq!(result.diagnostics[0].position, 11);
    }

    #[test]
    fn test_nested_if_inside_block() {
        let result = parse_if_else("if ($a) { if ($b) { echo 'both'; } else { echo 'a'; } }");
        assert!(result.success, "{:?}", result.messages());
    }

    #[test]
    fn test_unclosed_block() {
        let result = parse_if_else("if ($a) { echo $a;");
        assert_eq!(
            result.messages(),
            vec!["Token 9: expected Delimiter [}], found end of input"]
        );
    }
}
