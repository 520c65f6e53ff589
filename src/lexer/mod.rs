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

/// Token model: kinds, spans, lexical error categories and the
/// `TokenStream` container.
pub mod token;

/// Reserved words and operator/delimiter tables.
pub mod keywords;

/// The character scanner.
pub mod lexer;

pub use lexer::Lexer;
pub use token::{LexErrorKind, Token, TokenKind, TokenStream};

/// Tokenizes one snippet of PHP source.
///
/// Total: every input, including the empty string, yields a stream.
/// Malformed input shows up as `TokenKind::Error` tokens rather than a
/// failure.
///
/// # Example
/// ```rust
/// use phpif::lexer::{tokenize, TokenKind};
///
/// let tokens = tokenize("echo $x;");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].kind, TokenKind::Variable);
/// ```
pub fn tokenize(source: &str) -> TokenStream {
    Lexer::new(source).scan_tokens()
}
