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

use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// A single grammar violation found by the parser.
///
/// Errors are data: the parser records one per violation and keeps going,
/// so a `SyntaxError` never aborts anything by itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxError {
    /// Stable error code (E_EXPECTED, E_CONDITION, …)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// 1-based index of the token the parser was looking at
    pub position: usize,

    /// Source location of that token
    pub span: Span,

    /// Optional note / help text
    pub help: Option<String>,
}

impl SyntaxError {
    /// Generic constructor
    pub fn new(
        code: &'static str,
        message: impl Into<String>,
        position: usize,
        span: Span,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            position,
            span,
            help: None,
        }
    }

    /// A required token was missing or different.
    ///
    /// `value` of `None` means any token of `kind` would have done, rendered
    /// as `[*]`.
    pub fn expected(
        kind: TokenKind,
        value: Option<&str>,
        found: &Token,
        position: usize,
    ) -> Self {
        Self::new(
            "E_EXPECTED",
            format!(
                "expected {} [{}], found {}",
                kind,
                value.unwrap_or("*"),
                describe(found)
            ),
            position,
            found.span,
        )
    }

    /// None of several acceptable token kinds was present.
    pub fn expected_any(kinds: &[TokenKind], found: &Token, position: usize) -> Self {
        let wanted: Vec<String> = kinds.iter().map(|k| k.to_string()).collect();

        Self::new(
            "E_EXPECTED_ANY",
            format!("expected one of {}, found {}", wanted.join("|"), describe(found)),
            position,
            found.span,
        )
    }

    /// The start of a condition term was neither `!`, a variable, nor a boolean.
    pub fn invalid_condition(found: &Token, position: usize) -> Self {
        Self::new(
            "E_CONDITION",
            format!("invalid condition term, found {}", describe(found)),
            position,
            found.span,
        )
        .with_help("conditions start with a variable, `true`, `false` or `!$variable`")
    }

    /// A statement did not start with `echo` or a variable.
    pub fn invalid_expression(found: &Token, position: usize) -> Self {
        Self::new(
            "E_EXPRESSION",
            format!("invalid expression, found {}", describe(found)),
            position,
            found.span,
        )
        .with_help("statements are `echo <value>`, assignments, `$x++` or `$x--`")
    }

    /// Input ended where a statement body was required.
    pub fn missing_statement(after: &str, found: &Token, position: usize) -> Self {
        Self::new(
            "E_STATEMENT",
            format!("expected statement after {}, found {}", after, describe(found)),
            position,
            found.span,
        )
    }

    /// Nesting went past the configured depth limit.
    pub fn too_deep(limit: usize, found: &Token, position: usize) -> Self {
        Self::new(
            "E_DEPTH",
            format!("nesting deeper than {} levels, found {}", limit, describe(found)),
            position,
            found.span,
        )
        .with_help("the nested construct was skipped without further checks")
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Renders the "found" half of a message: `Operator '>'` or `end of input`.
fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::EndOfInput => "end of input".to_string(),
        kind => format!("{} '{}'", kind, token.text),
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token {}: {}", self.position, self.message)
    }
}

impl std::error::Error for SyntaxError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_message() {
        let found = Token::new(TokenKind::Operator, ">", Span::new(1, 4));
        let err = SyntaxError::expected(TokenKind::Delimiter, Some(")"), &found, 3);

        assert_eq!(err.to_string(), "Token 3: expected Delimiter [)], found Operator '>'");
        assert_eq!(err.span, Span::new(1, 4));
    }

    #[test]
    fn test_expected_without_value_and_at_end() {
        let eof = Token::end_of_input(Span::new(1, 4));
        let err = SyntaxError::expected(TokenKind::Variable, None, &eof, 3);

        assert_eq!(err.to_string(), "Token 3: expected Variable [*], found end of input");
    }

    #[test]
    fn test_expected_any_lists_kinds() {
        let found = Token::new(TokenKind::Delimiter, ";", Span::new(1, 9));
        let err = SyntaxError::expected_any(
            &[TokenKind::Variable, TokenKind::String, TokenKind::Number],
            &found,
            4,
        );

        assert_eq!(
            err.to_string(),
            "Token 4: expected one of Variable|String|Number, found Delimiter ';'"
        );
        assert_eq!(err.code, "E_EXPECTED_ANY");
    }
}
