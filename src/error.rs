/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      error.rs
 * Purpose:   Error types for every stage of the pipeline.
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

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::lexer::token::Token;
use crate::span::Span;

/// A lexical error: unrecognized character, malformed or out-of-range
/// numeric literal, or an unsupported word.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct LexError {
    /// Human-readable message
    pub message: String,

    /// Position of the offending text
    pub span: Span,
}

impl LexError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    /// Lifts an error token produced by the lexer.
    pub fn from_token(token: &Token) -> Self {
        Self::new(token.lexeme.clone(), token.span)
    }
}

/// A grammar violation. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The lexer produced an error token where the parser wanted input.
    #[error("Lexical error: {0}")]
    Lexical(#[from] LexError),

    /// The current token does not fit the grammar at this point.
    #[error("{message}")]
    UnexpectedToken {
        message: String,
        span: Span,
        help: Option<&'static str>,
    },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lexical(err) => err.span,
            ParseError::UnexpectedToken { span, .. } => *span,
        }
    }
}

/// A failure while walking the tree.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Division by zero")]
    DivisionByZero { span: Span },

    /// The output sink rejected a value.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl RuntimeError {
    pub fn span(&self) -> Option<Span> {
        match self {
            RuntimeError::DivisionByZero { span } => Some(*span),
            RuntimeError::Output(_) => None,
        }
    }
}

/// Any error the SIMLAN pipeline can report to its host.
#[derive(Debug, Error)]
pub enum SimlanError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("Could not read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a token or tree dump failed.
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl SimlanError {
    /// Stable error code shown in diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            SimlanError::Lex(_) => "E_LEX",
            SimlanError::Parse(ParseError::Lexical(_)) => "E_LEX",
            SimlanError::Parse(_) => "E_PARSE",
            SimlanError::Runtime(_) => "E_RUNTIME",
            SimlanError::Io { .. } | SimlanError::Output(_) => "E_IO",
        }
    }

    /// Primary source location, when the error has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            SimlanError::Lex(err) => Some(err.span),
            SimlanError::Parse(err) => Some(err.span()),
            SimlanError::Runtime(err) => err.span(),
            SimlanError::Io { .. } | SimlanError::Output(_) => None,
        }
    }

    /// Optional follow-up hint.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SimlanError::Parse(ParseError::UnexpectedToken { help, .. }) => *help,
            SimlanError::Runtime(RuntimeError::DivisionByZero { .. }) => {
                Some("the right-hand side of '/' evaluated to zero")
            }
            SimlanError::Lex(_) | SimlanError::Parse(ParseError::Lexical(_)) => {
                Some("only PRINT, numbers, + - * / ( ) ; and // comments are allowed")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_errors_keep_their_code_through_the_parser() {
        let lex = LexError::new("Unexpected character: $", Span::new(1, 7));
        let err = SimlanError::from(ParseError::from(lex));
        assert_eq!(err.code(), "E_LEX");
        assert_eq!(err.span(), Some(Span::new(1, 7)));
        assert_eq!(err.to_string(), "Lexical error: Unexpected character: $");
    }

    #[test]
    fn runtime_errors_expose_span_and_help() {
        let err = SimlanError::from(RuntimeError::DivisionByZero {
            span: Span::new(2, 9),
        });
        assert_eq!(err.code(), "E_RUNTIME");
        assert_eq!(err.span(), Some(Span::new(2, 9)));
        assert!(err.help().is_some());
        assert_eq!(err.to_string(), "Division by zero");
    }

    #[test]
    fn output_failures_have_no_span() {
        let io = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let err = SimlanError::from(RuntimeError::from(io));
        assert_eq!(err.span(), None);
        assert_eq!(err.to_string(), "Failed to write output: closed");
    }
}
