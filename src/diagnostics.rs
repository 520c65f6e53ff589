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

use crate::analysis::{Analysis, Outcome};
use crate::error::SyntaxError;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for a checked snippet.
///
/// This printer:
/// - Lists the token stream with a per-token status
/// - Formats lexical and syntax errors with line/column information
/// - Displays the offending source line
/// - Highlights the error position using carets (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// Rendering returns `String`s so callers decide where output goes.
pub struct DiagnosticPrinter {
    /// Full source text of the snippet being checked.
    source: String,

    /// Name shown in the `-->` location line (e.g. `<stdin>`).
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a snippet.
    ///
    /// Both parameters accept any type convertible into `String`
    /// for ergonomic call-sites.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders the numbered token table.
    ///
    /// # Output Example
    /// ```text
    ///   1 ok  [Keyword  ] 'echo'
    ///   2 ERR [Error    ] 'x'
    /// ```
    pub fn render_tokens(&self, tokens: &[Token]) -> String {
        let mut out = String::new();

        for (i, token) in tokens.iter().enumerate() {
            let status = if token.kind == TokenKind::Error { "ERR" } else { "ok " };
            out.push_str(&format!(
                "{:>3} {} [{:<9}] '{}'\n",
                i + 1,
                status,
                token.kind,
                token.text
            ));
        }

        out
    }

    /// Renders one lexical error token, underlining the whole offending
    /// slice on its first line.
    ///
    /// Returns `None` for tokens that are not errors.
    pub fn render_lexical(&self, token: &Token) -> Option<String> {
        let kind = token.lex_error()?;

        let width = token
            .text
            .lines()
            .next()
            .map_or(1, |first| first.chars().count().max(1));

        let mut out = format!("error[{}]: {}: '{}'\n", kind.code(), kind.describe(), token.text);
        out.push_str(&self.location(token.span, width, None));
        out.push_str(&format!("help: {}\n", kind.help()));

        Some(out)
    }

    /// Renders a syntax error.
    ///
    /// # Output Example
    /// ```text
    /// error[E_EXPECTED_ANY]: expected one of Number|String|Variable|Keyword, found Delimiter ')'
    ///   --> <stdin>:1:10 (token 5)
    ///    |
    ///  1 | if ($x > ) { $y = ; }
    ///    |          ^
    /// ```
    pub fn render_syntax(&self, error: &SyntaxError) -> String {
        let mut out = format!("error[{}]: {}\n", error.code, error.message);
        out.push_str(&self.location(error.span, 1, Some(error.position)));

        if let Some(help) = &error.help {
            out.push_str(&format!("help: {}\n", help));
        }

        out
    }

    /// Renders a full report: token table, errors, and a verdict line.
    pub fn render_analysis(&self, analysis: &Analysis) -> String {
        let tokens = &analysis.tokens;
        let mut out = format!("LEXER ({} tokens):\n", tokens.len());
        out.push_str(&self.render_tokens(tokens));
        out.push('\n');

        match analysis.outcome {
            Outcome::LexicalErrors(count) => {
                for token in tokens.lexical_errors() {
                    if let Some(rendered) = self.render_lexical(token) {
                        out.push_str(&rendered);
                        out.push('\n');
                    }
                }
                out.push_str(&format!(
                    "{} lexical error(s), syntax check skipped\n",
                    count
                ));
            }
            Outcome::SyntaxErrors(count) => {
                for error in &analysis.parse.diagnostics {
                    out.push_str(&self.render_syntax(error));
                    out.push('\n');
                }
                out.push_str(&format!("{} syntax error(s)\n", count));
            }
            Outcome::Valid => out.push_str("valid PHP syntax\n"),
        }

        if !analysis.is_valid() {
            out.push_str(&format!(
                "stopped at token {}/{}\n",
                analysis.parse.position,
                tokens.len()
            ));
        }

        out
    }

    /// Builds the `-->` line, the source line, and the caret underline.
    ///
    /// `token` appends ` (token N)` to the `-->` line.
    fn location(&self, span: Span, width: usize, token: Option<usize>) -> String {
        let Span { line, column } = span;

        // Lines are 1-indexed in diagnostics, but iterators are 0-indexed.
        let src_line = self.source.lines().nth(line.saturating_sub(1)).unwrap_or("");

        let mut out = format!("  --> {}:{}:{}", self.file_name, line, column + 1);
        if let Some(position) = token {
            out.push_str(&format!(" (token {})", position));
        }
        out.push('\n');
        out.push_str("   |\n");
        out.push_str(&format!("{:>3} | {}\n", line, src_line));
        out.push_str(&format!("   | {}{}\n", " ".repeat(column), "^".repeat(width)));
        out
    }
}
