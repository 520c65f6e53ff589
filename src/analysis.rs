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

use crate::lexer::{tokenize, TokenStream};
use crate::parser::{ParseOptions, ParseResult, Parser};
use serde::Serialize;

/// Overall verdict on a snippet.
///
/// Lexical errors take precedence: when the lexer already rejected the
/// input, syntax diagnostics are not reported as the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "count", rename_all = "snake_case")]
pub enum Outcome {
    Valid,
    LexicalErrors(usize),
    SyntaxErrors(usize),
}

/// Tokens and parse result for one snippet.
///
/// The parser always runs, even with lexical errors present, so the stop
/// position is available for reporting either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub tokens: TokenStream,
    pub parse: ParseResult,
    pub outcome: Outcome,
}

impl Analysis {
    pub fn is_valid(&self) -> bool {
        self.outcome == Outcome::Valid
    }
}

/// Analyzes `source` with the default parse options.
pub fn analyze(source: &str) -> Analysis {
    analyze_with(source, ParseOptions::default())
}

pub fn analyze_with(source: &str, options: ParseOptions) -> Analysis {
    let tokens = tokenize(source);
    let parse = Parser::with_options(&tokens, options).parse();

    let lexical = tokens.lexical_errors().count();
    let outcome = if lexical > 0 {
        Outcome::LexicalErrors(lexical)
    } else if !parse.success {
        Outcome::SyntaxErrors(parse.diagnostics.len())
    } else {
        Outcome::Valid
    };

    Analysis {
        tokens,
        parse,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_snippet() {
        let analysis = analyze("if ($x) { echo $x; }");
        assert!(analysis.is_valid());
        assert_eq!(analysis.tokens.len(), 9);
    }

    #[test]
    fn test_lexical_errors_take_precedence() {
        let analysis = analyze("if (x) { echo @; }");
        assert_eq!(analysis.outcome, Outcome::LexicalErrors(2));
        assert!(!analysis.parse.success);
    }

    #[test]
    fn test_syntax_errors() {
        let analysis = analyze("if ($x > ) { $y = ; }");
        assert_eq!(analysis.outcome, Outcome::SyntaxErrors(3));
    }

    #[test]
    fn test_outcome_json_shape() {
        let json = serde_json::to_value(Outcome::SyntaxErrors(2)).unwrap_or_default();
        assert_eq!(json, serde_json::json!({ "status": "syntax_errors", "count": 2 }));

        let json = serde_json::to_value(Outcome::Valid).unwrap_or_default();
        assert_eq!(json, serde_json::json!({ "status": "valid" }));
    }

    #[test]
    fn test_depth_option_is_forwarded() {
        let analysis = analyze_with(
            "if ($a) { { { echo $a; } } }",
            ParseOptions { max_depth: 2 },
        );
        assert_eq!(analysis.outcome, Outcome::SyntaxErrors(1));
        assert_eq!(analysis.parse.diagnostics[0].code, "E_DEPTH");
    }
}
