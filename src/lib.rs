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

//! Lexer and error-recovering parser for PHP `if`/`else` snippets.
//!
//! ```text
//! Source → Lexer → TokenStream → Parser → ParseResult
//! ```
//!
//! Both stages are total: malformed input becomes `Error` tokens or
//! diagnostics, never a panic or an early exit.

pub mod analysis;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

pub use analysis::{analyze, analyze_with, Analysis, Outcome};
pub use error::SyntaxError;
pub use lexer::{tokenize, Token, TokenKind, TokenStream};
pub use parser::{parse_if_else, parse_tokens, ParseOptions, ParseResult};
