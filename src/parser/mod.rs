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

/// Core parser orchestration:
/// - Owns the `Parser` struct and its per-call state
/// - Exposes the `parse_if_else` / `parse_tokens` entry points
pub mod parser;

/// Statement-level rules:
/// - if / else / else if
/// - while / for
/// - blocks and simple statements
pub mod statements;

/// Condition and expression rules:
/// - flat logical chains of comparison terms
/// - echo, assignments, increments
pub mod expressions;

/// Shared recovery helpers:
/// - end-of-input-safe lookahead
/// - expect / expect-any with skip-one recovery
/// - trailing resynchronization
/// - nesting depth guard
pub mod helpers;

pub use parser::{parse_if_else, parse_tokens, ParseOptions, ParseResult, Parser, DEFAULT_MAX_DEPTH};
