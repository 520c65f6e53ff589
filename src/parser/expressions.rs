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
use crate::parser::helpers::{is_assignment_operator, is_comparison_operator, is_logical_operator};
use crate::parser::parser::Parser;

impl<'t> Parser<'t> {
    /// Parses a flat, left-to-right condition chain.
    ///
    /// ```text
    /// Condition := Term ( LogicalOp Term )*
    /// ```
    ///
    /// There is no precedence: `$a && $b || $c` is simply three terms.
    pub(crate) fn condition(&mut self) {
        self.condition_term();

        while self.check_kind(TokenKind::Operator) && is_logical_operator(&self.peek().text) {
            self.advance();
            self.condition_term();
        }
    }

    /// Parses one term of a condition.
    ///
    /// ```text
    /// Term := '!' Variable
    ///       | ( Variable | 'true' | 'false' ) ( CompareOp Operand )?
    /// ```
    ///
    /// An invalid start is reported and skipped, and the comparison is
    /// still attempted on whatever follows.
    fn condition_term(&mut self) {
        if self.check_operator("!") {
            self.advance();
            self.expect(TokenKind::Variable, None);
            return;
        }

        if self.check_kind(TokenKind::Variable)
            || self.check_keyword("true")
            || self.check_keyword("false")
        {
            self.advance();
        } else {
            let err = SyntaxError::invalid_condition(self.peek(), self.position());
            self.error_and_skip(err);
        }

        if self.check_kind(TokenKind::Operator) && is_comparison_operator(&self.peek().text) {
            self.advance();
            self.operand(&[
                TokenKind::Number,
                TokenKind::String,
                TokenKind::Variable,
                TokenKind::Keyword,
            ]);
        }
    }

    /// Parses a simple expression statement (without its `;`).
    ///
    /// ```text
    /// Expr := 'echo' Operand
    ///       | Variable ( '++' | '--' | AssignOp Operand )?
    /// ```
    pub(crate) fn expression(&mut self) {
        if self.match_keyword("echo") {
            self.operand(&[TokenKind::Variable, TokenKind::String, TokenKind::Number]);
            return;
        }

        if self.check_kind(TokenKind::Variable) {
            self.advance();

            if self.check_operator("++") || self.check_operator("--") {
                self.advance();
            } else if self.check_kind(TokenKind::Operator)
                && is_assignment_operator(&self.peek().text)
            {
                self.advance();
                self.operand(&[TokenKind::Number, TokenKind::Variable, TokenKind::String]);
            }
            return;
        }

        let err = SyntaxError::invalid_expression(self.peek(), self.position());
        self.error_and_skip(err);
    }

    /// Parses a value of one of `kinds`.
    ///
    /// A `-` directly in front of a number is taken as its sign, so
    /// `$y = -1` and `$x < -5` are valid. A `-` before anything else is
    /// left for `expect_any` to report.
    fn operand(&mut self, kinds: &[TokenKind]) {
        if self.check_operator("-") && self.peek_next().kind == TokenKind::Number {
            self.advance();
        }

        self.expect_any(kinds);
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse_if_else;

    fn codes(source: &str) -> Vec<&'static str> {
        parse_if_else(source).diagnostics.iter().map(|d| d.code).collect()
    }

    #[test]
    fn test_logical_chain() {
        assert!(codes("if ($a && !$b || $c == 'x' && true) { }").is_empty());
    }

    #[test]
    fn test_comparison_against_keyword() {
        assert!(codes("if ($done === false) { echo 'pending'; }").is_empty());
    }

    #[test]
    fn test_all_comparison_operators() {
        for op in ["==", "===", "!=", "!==", "<", ">", "<=", ">="] {
            let source = format!("if ($a {} 1) {{ }}", op);
            assert!(codes(&source).is_empty(), "{}", op);
        }
    }

    #[test]
    fn test_negation_requires_variable() {
        let result = parse_if_else("if (!true) { }");
        assert_eq!(
            result.messages(),
            vec!["Token 4: expected Variable [*], found Keyword 'true'"]
        );
    }

    #[test]
    fn test_invalid_condition_term() {
        let result = parse_if_else("if (5 > $x) { }");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].code, "E_CONDITION");
        assert_eq!(result.diagnostics[0].position, 3);
    }

    #[test]
    fn test_negative_operands() {
        assert!(codes("if ($x < -5) { $y = -1; echo -2; }").is_empty());
    }

    #[test]
    fn test_minus_without_number_is_reported() {
        assert_eq!(codes("if ($x) { $y = -$z; }"), vec!["E_EXPECTED_ANY"]);
    }

    #[test]
    fn test_compound_assignments_and_increments() {
        assert!(codes("if ($x) { $s .= 'a'; $n += 2; $n -= 1; $n *= 3; $n /= 2; $n++; $n--; }").is_empty());
    }

    #[test]
    fn test_echo_operand_kinds() {
        assert!(codes("if ($x) { echo $x; echo \"s\"; echo 1.5; }").is_empty());
        assert_eq!(codes("if ($x) { echo true; }"), vec!["E_EXPECTED_ANY"]);
    }

    #[test]
    fn test_invalid_expression() {
        let result = parse_if_else("if ($x) { ( }");
        assert_eq!(
            result.messages(),
            vec!["Token 6: invalid expression, found Delimiter '('"]
        );
    }
}
