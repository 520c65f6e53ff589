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
use crate::lexer::token::Token;
use crate::lexer::tokenize;
use crate::span::Span;
use log::{debug, info};
use serde::Serialize;

/// Default ceiling on statement nesting (blocks, loop bodies, `else if`).
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Tunables for one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Nesting level past which a construct is reported and skipped
    /// instead of being descended into.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Outcome of one parse.
///
/// `success` is exactly `diagnostics.is_empty()`. No syntax tree is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub success: bool,

    /// Every violation found, in left-to-right discovery order.
    pub diagnostics: Vec<SyntaxError>,

    /// 1-based token position where the parser stopped, after the
    /// trailing resynchronization.
    pub position: usize,
}

impl ParseResult {
    /// The diagnostics rendered as `Token <n>: ...` lines.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.to_string()).collect()
    }
}

/// The error-recovering recursive-descent parser.
///
/// This structure bundles all per-call state:
/// - The token slice being checked
/// - The cursor into that slice (only ever moves forward)
/// - The current nesting depth
/// - The diagnostics collected so far
///
/// A `Parser` is consumed by [`Parser::parse`], so cursor and diagnostics
/// can never leak from one parse into the next. The grammar rules live in
/// `statements`, `expressions` and `helpers` via additional `impl Parser`
/// blocks.
pub struct Parser<'t> {
    pub(crate) tokens: &'t [Token],
    pub(crate) current: usize,
    pub(crate) depth: usize,
    pub(crate) options: ParseOptions,
    pub(crate) errors: Vec<SyntaxError>,

    /// Returned by every peek past the last token.
    pub(crate) eof: Token,
}

/// Tokenizes `source` and checks it as an if/else statement.
///
/// The parser owns its own token stream here; callers that already
/// tokenized can use [`parse_tokens`] instead.
///
/// # Example
/// ```rust
/// let result = phpif::parser::parse_if_else("if ($x > 0) { echo $x; }");
/// assert!(result.success);
/// ```
pub fn parse_if_else(source: &str) -> ParseResult {
    let tokens = tokenize(source);
    parse_tokens(&tokens)
}

/// Checks an existing token slice with the default options.
pub fn parse_tokens(tokens: &[Token]) -> ParseResult {
    Parser::new(tokens).parse()
}

impl<'t> Parser<'t> {
    /// Creates a new parser over `tokens` with the default options.
    pub fn new(tokens: &'t [Token]) -> Self {
        Self::with_options(tokens, ParseOptions::default())
    }

    /// Creates a new parser over `tokens` with explicit options.
    pub fn with_options(tokens: &'t [Token], options: ParseOptions) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
            options,
            errors: Vec::new(),
            eof: Token::end_of_input(end_span(tokens)),
        }
    }

    /// Runs the parse to completion.
    ///
    /// # Behavior
    /// - Only input that starts with `if` is checked; anything else
    ///   trivially succeeds
    /// - Exactly one top-level if statement is parsed
    /// - Trailing tokens are then skipped up to the next statement boundary
    ///   without producing diagnostics
    /// - Never panics, whatever the input
    pub fn parse(mut self) -> ParseResult {
        info!("parsing {} tokens", self.tokens.len());

        if self.check_keyword("if") {
            self.if_statement();
        } else {
            debug!("input does not start with `if`, nothing to check");
        }

        self.synchronize();

        info!(
            "parse finished at token {} with {} diagnostic(s)",
            self.position(),
            self.errors.len()
        );

        ParseResult {
            success: self.errors.is_empty(),
            position: self.position(),
            diagnostics: self.errors,
        }
    }
}

/// Location just past the last token, used for the end-of-input marker.
fn end_span(tokens: &[Token]) -> Span {
    match tokens.last() {
        Some(last) if !last.text.contains('\n') => {
            Span::new(last.span.line, last.span.column + last.text.chars().count())
        }
        Some(last) => last.span,
        None => Span::new(1, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_if_input_trivially_succeeds() {
        let result = parse_if_else("$x = ;");
        assert!(result.success);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let result = parse_if_else("");
        assert!(result.success);
        assert_eq!(result.position, 1);
    }

    #[test]
    fn test_trailing_tokens_are_skipped_silently() {
        let result = parse_if_else("if ($x) { echo $x; } $y = ; $z");
        assert!(result.success, "{:?}", result.messages());
        // Stops at the `;` after `$y =`.
        assert_eq!(result.position, 12);
    }

    #[test]
    fn test_end_of_input_span_follows_last_token() {
        let tokens = tokenize("if ($abc");
        let parser = Parser::new(&tokens);
        assert_eq!(parser.eof.span, Span::new(1, 8));
    }

    #[test]
    fn test_success_matches_diagnostics() {
        for source in ["if ($x) { }", "if ($x", "if", "if ($x) $y++; else"] {
            let result = parse_if_else(source);
            assert_eq!(result.success, result.diagnostics.is_empty(), "{}", source);
        }
    }
}
