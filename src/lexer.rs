/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      lexer.rs
 * Purpose:   Root of the lexical analysis stage.
 *
 * Author:    Sam Wilcox
 *
 * License:
 * This file is part of the SIMLAN programming language project.
 *
 * SIMLAN is dual-licensed under the terms of:
 *   - The MIT License
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

/// Reserved word table.
pub mod keywords;

/// The scanner itself.
#[allow(clippy::module_inception)]
pub mod lexer;

/// Token kinds and the `Token` record.
pub mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};

use crate::error::LexError;

/// Scans the whole of `source` eagerly.
///
/// # Returns
/// - `Ok(tokens)`, always ending with a single [`TokenKind::EndOfFile`]
/// - `Err(LexError)` for the first error token encountered
///
/// The parser does not use this; it pulls from a [`Lexer`] directly.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    match scan(source) {
        (tokens, None) => Ok(tokens),
        (_, Some(err)) => Err(err),
    }
}

/// Scans `source` up to its end or its first lexical error.
///
/// Unlike [`tokenize`], the tokens read before an error are kept, so a
/// token dump can show how far scanning got.
pub fn scan(source: &str) -> (Vec<Token>, Option<LexError>) {
    let mut tokens = Vec::new();

    for token in Lexer::new(source) {
        if token.kind == TokenKind::Error {
            return (tokens, Some(LexError::from_token(&token)));
        }
        tokens.push(token);
    }

    (tokens, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    #[test]
    fn tokenize_ends_with_single_eof() {
        let tokens = tokenize("PRINT 1;").expect("valid source");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[3].kind, TokenKind::EndOfFile);
    }

    #[test]
    fn tokenize_reports_first_error() {
        let err = tokenize("PRINT 1;\nPRINT foo;").expect_err("foo is not a keyword");
        assert_eq!(err.message, "Unexpected identifier or keyword: foo");
        assert_eq!(err.span, Span::new(2, 7));
    }

    #[test]
    fn empty_source_is_just_eof() {
        let tokens = tokenize("").expect("empty source");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].span, Span::new(1, 1));
    }

    #[test]
    fn scan_keeps_tokens_before_an_error() {
        let (tokens, err) = scan("PRINT 1 + $;");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Print, TokenKind::Number, TokenKind::Plus]
        );
        let err = err.expect("'$' is not a token");
        assert_eq!(err.message, "Unexpected character: $");
        assert_eq!(err.span, Span::new(1, 11));
    }

    #[test]
    fn scan_without_errors_ends_in_eof() {
        let (tokens, err) = scan("PRINT 2;");
        assert!(err.is_none());
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfFile));
    }
}
