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

use crate::lexer::keywords::{is_delimiter, is_keyword, is_single_operator, MULTI_CHAR_OPERATORS};
use crate::lexer::token::{Token, TokenKind, TokenStream};
use crate::span::Span;

/// Single-pass scanner over one snippet of PHP source.
///
/// A `Lexer` is created per input and consumed by [`Lexer::scan_tokens`];
/// nothing is shared between runs.
pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    column: usize,

    /// Index of the first character of the token being scanned.
    start: usize,
    start_span: Span,

    tokens: Vec<Token>,
}

impl Lexer {
    /// Creates a new lexer instance from raw source code.
    ///
    /// The cursor starts at position `0`, line `1`, column `0`.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            column: 0,
            start: 0,
            start_span: Span::new(1, 0),
            tokens: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// # Behavior
    /// - Ignores whitespace and `//` comments
    /// - Never fails: malformed input becomes `TokenKind::Error` tokens
    /// - Does **not** append an end-of-input token; the parser synthesizes
    ///   one when it reads past the last token
    pub fn scan_tokens(mut self) -> TokenStream {
        while !self.is_at_end() {
            self.scan_token();
        }

        TokenStream::new(self.tokens)
    }

    /// Scans a single lexical unit starting at the cursor.
    ///
    /// Every call consumes at least one character, whatever the input.
    ///
    /// # Dispatch order
    /// 1. whitespace
    /// 2. `//` line comment
    /// 3. string literal
    /// 4. number
    /// 5. keyword / variable / bare identifier
    /// 6. multi-character operator (longest match)
    /// 7. single-character operator
    /// 8. delimiter
    /// 9. anything else is an unknown character
    fn scan_token(&mut self) {
        self.start = self.current;
        self.start_span = Span::new(self.line, self.column);

        let ch = match self.advance() {
            Some(ch) => ch,
            None => return,
        };

        match ch {
            c if c.is_whitespace() => {}

            '/' if self.peek() == Some('/') => self.line_comment(),

            '"' | '\'' => self.string_with_delimiter(ch),

            c if c.is_ascii_digit() => self.number(),

            c if c.is_alphabetic() || c == '$' => self.identifier(),

            _ => self.operator_or_delimiter(ch),
        }
    }

    /// Skips a `//` comment up to (not including) the next newline.
    fn line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Parses a string literal using the provided quote delimiter.
    ///
    /// A backslash escapes the following character verbatim, so `\"` does
    /// not close a double-quoted literal. The emitted text keeps both
    /// quotes and any escapes exactly as written.
    ///
    /// Running out of input before the closing quote produces one `Error`
    /// token spanning from the opening quote to the end of the source.
    fn string_with_delimiter(&mut self, delimiter: char) {
        loop {
            match self.peek() {
                None => {
                    self.add_token(TokenKind::Error);
                    return;
                }
                Some('\\') => {
                    self.advance();
                    self.advance();
                }
                Some(c) if c == delimiter => {
                    self.advance();
                    self.add_token(TokenKind::String);
                    return;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Parses a numeric literal.
    ///
    /// Digits and dots are taken greedily with no further validation:
    /// `3.14` and `1.2.3` are both single `Number` tokens.
    fn number(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '.' {
                self.advance();
            } else {
                break;
            }
        }

        self.add_token(TokenKind::Number);
    }

    /// Parses a keyword, variable or bare identifier.
    ///
    /// # Classification
    /// - reserved word → `TokenKind::Keyword`
    /// - starts with `$` → `TokenKind::Variable`
    /// - otherwise → `TokenKind::Error` (missing sigil)
    fn identifier(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let text = self.lexeme();

        let kind = if is_keyword(&text) {
            TokenKind::Keyword
        } else if text.starts_with('$') {
            TokenKind::Variable
        } else {
            TokenKind::Error
        };

        self.push(kind, text);
    }

    /// Matches operators (longest first), then delimiters.
    ///
    /// `ch` has already been consumed. An unmatched character becomes a
    /// one-character `Error` token.
    fn operator_or_delimiter(&mut self, ch: char) {
        let multi = MULTI_CHAR_OPERATORS
            .iter()
            .find(|op| self.matches_at(self.start, op));

        if let Some(op) = multi {
            // The first character is already consumed.
            for _ in 1..op.chars().count() {
                self.advance();
            }
            self.add_token(TokenKind::Operator);
        } else if is_single_operator(ch) {
            self.add_token(TokenKind::Operator);
        } else if is_delimiter(ch) {
            self.add_token(TokenKind::Delimiter);
        } else {
            self.add_token(TokenKind::Error);
        }
    }

    /// Returns `true` if `text` appears verbatim at character index `pos`.
    fn matches_at(&self, pos: usize, text: &str) -> bool {
        text.chars()
            .enumerate()
            .all(|(i, c)| self.chars.get(pos + i) == Some(&c))
    }

    /// Collects the source slice of the token being scanned.
    fn lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind) {
        let text = self.lexeme();
        self.push(kind, text);
    }

    fn push(&mut self, kind: TokenKind, text: String) {
        self.tokens.push(Token::new(kind, text, self.start_span));
    }

    /// Advances the cursor by one character, tracking line and column.
    ///
    /// Returns `None` (and does not move) at end of input.
    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.get(self.current).copied()?;
        self.current += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(source)
            .scan_tokens()
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
        (kind, text.to_string())
    }

    #[test]
    fn test_every_scan_step_makes_progress() {
        let inputs = ["\\", "\"", "'", "=", "!=", "!==", "$", "@", "1.", "a", "//", " ", "\n", "é", "'\\"];

        for input in inputs {
            let mut lexer = Lexer::new(input);
            while !lexer.is_at_end() {
                let before = lexer.current;
                lexer.scan_token();
                assert!(lexer.current > before, "no progress on {:?}", input);
            }
        }
    }

    #[test]
    fn test_longest_operator_match() {
        assert_eq!(kinds("==="), vec![tok(TokenKind::Operator, "===")]);
        assert_eq!(kinds("!=="), vec![tok(TokenKind::Operator, "!==")]);
        assert_eq!(
            kinds("===="),
            vec![tok(TokenKind::Operator, "==="), tok(TokenKind::Operator, "=")]
        );
    }

    #[test]
    fn test_comment_is_skipped_to_end_of_line() {
        assert_eq!(
            kinds("$a // trailing $b\n$c"),
            vec![tok(TokenKind::Variable, "$a"), tok(TokenKind::Variable, "$c")]
        );
    }

    #[test]
    fn test_single_slash_is_operator() {
        assert_eq!(
            kinds("$a / $b"),
            vec![
                tok(TokenKind::Variable, "$a"),
                tok(TokenKind::Operator, "/"),
                tok(TokenKind::Variable, "$b"),
            ]
        );
    }

    #[test]
    fn test_escaped_quote_does_not_close_string() {
        assert_eq!(
            kinds(r#""say \"hi\"";"#),
            vec![
                tok(TokenKind::String, r#""say \"hi\"""#),
                tok(TokenKind::Delimiter, ";"),
            ]
        );
    }

    #[test]
    fn test_unclosed_string_consumes_rest_of_input() {
        assert_eq!(kinds("echo 'abc ; $x"), vec![
            tok(TokenKind::Keyword, "echo"),
            tok(TokenKind::Error, "'abc ; $x"),
        ]);
    }

    #[test]
    fn test_trailing_backslash_in_string() {
        assert_eq!(kinds("\"ab\\"), vec![tok(TokenKind::Error, "\"ab\\")]);
    }

    #[test]
    fn test_permissive_numbers() {
        assert_eq!(kinds("1.2.3"), vec![tok(TokenKind::Number, "1.2.3")]);
        assert_eq!(kinds("42"), vec![tok(TokenKind::Number, "42")]);
    }

    #[test]
    fn test_identifier_classification() {
        assert_eq!(
            kinds("while $i_2 count"),
            vec![
                tok(TokenKind::Keyword, "while"),
                tok(TokenKind::Variable, "$i_2"),
                tok(TokenKind::Error, "count"),
            ]
        );
    }

    #[test]
    fn test_unknown_characters_are_single_error_tokens() {
        assert_eq!(
            kinds("$a & $b"),
            vec![
                tok(TokenKind::Variable, "$a"),
                tok(TokenKind::Error, "&"),
                tok(TokenKind::Variable, "$b"),
            ]
        );
        assert_eq!(kinds("@#"), vec![tok(TokenKind::Error, "@"), tok(TokenKind::Error, "#")]);
    }

    #[test]
    fn test_percent_equals_is_two_tokens() {
        assert_eq!(
            kinds("%="),
            vec![tok(TokenKind::Operator, "%"), tok(TokenKind::Operator, "=")]
        );
    }

    #[test]
    fn test_spans_track_lines_and_columns() {
        let tokens = Lexer::new("if ($x)\n  echo $x;").scan_tokens();
        assert_eq!(tokens[0].span, Span::new(1, 0));
        assert_eq!(tokens[2].span, Span::new(1, 4));
        assert_eq!(tokens[4].span, Span::new(2, 2));
        assert_eq!(tokens[5].span, Span::new(2, 7));
    }
}
