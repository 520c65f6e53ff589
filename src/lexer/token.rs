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

use crate::span::Span;
use serde::Serialize;
use std::fmt;
use std::ops::Deref;

/// Represents the **category of a lexical token** in a PHP snippet.
///
/// `TokenKind` identifies how a run of characters from the source should be
/// interpreted by the parser.
///
/// # Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → Diagnostics
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// A reserved word: `if`, `else`, `echo`, `true`, `false`, `while`, `for`.
    Keyword,

    /// A `$`-prefixed PHP variable such as `$count`.
    Variable,

    /// An arithmetic, comparison, logical or assignment operator.
    ///
    /// Multi-character operators (`===`, `!=`, `+=`, `++`, ...) are always
    /// emitted as a single token.
    Operator,

    /// Structural punctuation: `(`, `)`, `{`, `}`, `;`, `,`.
    Delimiter,

    /// A numeric literal.
    ///
    /// The lexer is permissive here: `1.2.3` is accepted as one token.
    Number,

    /// A quoted string literal, quotes included.
    ///
    /// Examples:
    /// - `"hello"`
    /// - `'world'`
    String,

    /// A lexical error embedded in the stream.
    ///
    /// See [`LexErrorKind`] for the categories.
    Error,

    /// Synthetic marker produced by the parser when it reads past the last
    /// token. The lexer never emits it.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Variable => "Variable",
            TokenKind::Operator => "Operator",
            TokenKind::Delimiter => "Delimiter",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Error => "Error",
            TokenKind::EndOfInput => "EndOfInput",
        };
        // Honour width/alignment so the token table can pad kinds.
        f.pad(name)
    }
}

/// The three kinds of malformed input the lexer can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LexErrorKind {
    /// A character that starts no token (`@`, `#`, a lone `&`, ...).
    UnknownCharacter,

    /// A string literal still open when the input ran out.
    UnclosedString,

    /// A bare word that is neither a keyword nor a `$` variable.
    MissingSigil,
}

impl LexErrorKind {
    /// Stable error code used by the diagnostic printer.
    pub fn code(&self) -> &'static str {
        match self {
            LexErrorKind::UnknownCharacter => "E_UNKNOWN_CHAR",
            LexErrorKind::UnclosedString => "E_UNCLOSED_STRING",
            LexErrorKind::MissingSigil => "E_MISSING_SIGIL",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            LexErrorKind::UnknownCharacter => "unknown character",
            LexErrorKind::UnclosedString => "unclosed string literal",
            LexErrorKind::MissingSigil => "identifier is missing the `$` sigil",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            LexErrorKind::UnknownCharacter => "remove the character or replace it with a valid operator",
            LexErrorKind::UnclosedString => "add the matching closing quote",
            LexErrorKind::MissingSigil => "PHP variables are written with a leading `$`, e.g. `$x`",
        }
    }
}

/// Represents a **single lexical token** produced by the lexer.
///
/// A `Token` is a fully classified unit of source code consisting of:
/// - A token category (`TokenKind`)
/// - The exact source slice that produced it (`text`)
/// - The location of its first character (`span`)
///
/// # Example Tokens
/// ```text
/// if   →  { kind: Keyword,  text: "if", span: 1:0 }
/// $x   →  { kind: Variable, text: "$x", span: 1:4 }
/// 42   →  { kind: Number,   text: "42", span: 1:9 }
/// ```
///
/// `text` is never empty, except on the synthetic `EndOfInput` token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Builds the synthetic end-of-input token placed at `span`.
    pub fn end_of_input(span: Span) -> Self {
        Self::new(TokenKind::EndOfInput, "", span)
    }

    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    /// Classifies an `Error` token.
    ///
    /// The category follows from the first character of the offending slice:
    /// a quote means the literal was never closed, a letter or `$` means a
    /// bare identifier, anything else is an unknown character.
    ///
    /// Returns `None` for every other kind.
    pub fn lex_error(&self) -> Option<LexErrorKind> {
        if self.kind != TokenKind::Error {
            return None;
        }

        match self.text.chars().next() {
            Some('"') | Some('\'') => Some(LexErrorKind::UnclosedString),
            Some(c) if c.is_alphabetic() || c == '$' => Some(LexErrorKind::MissingSigil),
            _ => Some(LexErrorKind::UnknownCharacter),
        }
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**.
    ///
    /// Only the source text is printed; the end-of-input marker prints as
    /// `end of input` since it has no text of its own.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::EndOfInput {
            write!(f, "end of input")
        } else {
            write!(f, "{}", self.text)
        }
    }
}

/// The ordered output of one `tokenize` call.
///
/// Immutable once produced. Dereferences to a token slice so it can be
/// handed straight to the parser.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TokenStream(Vec<Token>);

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    /// All `Error` tokens, in source order.
    pub fn lexical_errors(&self) -> impl Iterator<Item = &Token> {
        self.0.iter().filter(|t| t.kind == TokenKind::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.lexical_errors().next().is_some()
    }
}

impl Deref for TokenStream {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.0
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(text: &str) -> Token {
        Token::new(TokenKind::Error, text, Span::new(1, 0))
    }

    #[test]
    fn test_lex_error_categories() {
        assert_eq!(error("@").lex_error(), Some(LexErrorKind::UnknownCharacter));
        assert_eq!(error("\"abc").lex_error(), Some(LexErrorKind::UnclosedString));
        assert_eq!(error("'").lex_error(), Some(LexErrorKind::UnclosedString));
        assert_eq!(error("count").lex_error(), Some(LexErrorKind::MissingSigil));
    }

    #[test]
    fn test_lex_error_only_for_error_tokens() {
        let token = Token::new(TokenKind::Variable, "$x", Span::new(1, 0));
        assert_eq!(token.lex_error(), None);
    }

    #[test]
    fn test_end_of_input_display() {
        let eof = Token::end_of_input(Span::new(1, 5));
        assert_eq!(eof.to_string(), "end of input");
        assert!(eof.text.is_empty());
    }

    #[test]
    fn test_kind_display_pads() {
        assert_eq!(format!("{:<9}", TokenKind::Keyword), "Keyword  ");
    }
}
