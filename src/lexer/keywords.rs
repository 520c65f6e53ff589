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

/// Determines whether a given word is a **reserved keyword**.
///
/// Used by the lexer once an identifier has been scanned, before the `$`
/// sigil rule is applied. Matching is case-sensitive, so `IF` is not a
/// keyword (and, lacking a `$`, becomes a lexical error).
///
/// # Examples
/// ```text
/// if      -> keyword
/// echo    -> keyword
/// $if     -> variable
/// count   -> lexical error
/// ```
pub fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        "if" |
        "else" |
        "echo" |
        "true" |
        "false" |
        "while" |
        "for"
    )
}

/// Multi-character operators, longest first.
///
/// The lexer walks this table in order and takes the first hit, so the
/// three-character forms must stay ahead of their two-character prefixes
/// (`===` before `==`).
pub const MULTI_CHAR_OPERATORS: &[&str] = &[
    "===", "!==",
    "==", "!=", "<=", ">=", "&&", "||",
    "+=", "-=", "*=", "/=", ".=", "++", "--",
];

/// Single-character operators, tried after [`MULTI_CHAR_OPERATORS`].
pub fn is_single_operator(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '=' | '!' | '<' | '>' | '.' | '%')
}

/// Structural punctuation.
pub fn is_delimiter(ch: char) -> bool {
    matches!(ch, '(' | ')' | '{' | '}' | ';' | ',')
}
