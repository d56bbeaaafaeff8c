/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      lexer/token.rs
 * Purpose:   Defines the fundamental lexical token types used by the SIMLAN
 *            pipeline during the lexing and parsing stages.
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

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// Represents the **category of a lexical token** in SIMLAN.
///
/// # Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → AST
/// ```
///
/// The set is closed: the parser matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// The `PRINT` keyword.
    Print,

    /// A numeric literal such as `42` or `3.14`.
    ///
    /// The converted value lives in [`Token::value`].
    Number,

    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,

    /// `;` terminating a statement.
    Semicolon,

    /// End-of-file marker.
    ///
    /// Returned once the source is exhausted, and on every request after
    /// that.
    EndOfFile,

    /// A lexical error.
    ///
    /// The token's lexeme carries the diagnostic message instead of source
    /// text.
    Error,

    /// Reserved for general identifiers. The current grammar never produces
    /// it: any word other than `PRINT` is an `Error`.
    Identifier,
}

impl TokenKind {
    /// Stable upper-case name used by token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Print => "PRINT",
            TokenKind::Number => "NUMBER",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::EndOfFile => "EOF",
            TokenKind::Error => "ERROR",
            TokenKind::Identifier => "IDENTIFIER",
        }
    }

    /// Maps a single punctuation/operator character to its token kind.
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            ';' => Some(TokenKind::Semicolon),
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents a **single lexical token** produced by the SIMLAN lexer.
///
/// # Example Tokens
/// ```text
/// PRINT  →  { kind: Print,     lexeme: "PRINT", value: None,      span: 1:1 }
/// 42     →  { kind: Number,    lexeme: "42",    value: Some(42.0), span: 1:7 }
/// ;      →  { kind: Semicolon, lexeme: ";",     value: None,      span: 1:9 }
/// ```
///
/// Tokens are immutable once produced; the parser consumes and drops them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token, or the diagnostic
    /// message for [`TokenKind::Error`]. Empty for end-of-file.
    pub lexeme: String,

    /// Converted literal value, present only for [`TokenKind::Number`].
    pub value: Option<f64>,

    /// Position of the token's first character.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            value: None,
            span,
        }
    }

    pub fn number(lexeme: impl Into<String>, value: f64, span: Span) -> Self {
        Self {
            kind: TokenKind::Number,
            lexeme: lexeme.into(),
            value: Some(value),
            span,
        }
    }

    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(TokenKind::Error, message, span)
    }

    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::EndOfFile, "", span)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn line(&self) -> usize {
        self.span.line
    }

    pub fn column(&self) -> usize {
        self.span.column
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**: only its lexeme.
    ///
    /// Error messages quote what the user wrote, not the token's internals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_match_dump_format() {
        assert_eq!(TokenKind::Print.to_string(), "PRINT");
        assert_eq!(TokenKind::EndOfFile.to_string(), "EOF");
        assert_eq!(TokenKind::LParen.name(), "LPAREN");
    }

    #[test]
    fn symbols_map_to_kinds() {
        assert_eq!(TokenKind::from_symbol('*'), Some(TokenKind::Star));
        assert_eq!(TokenKind::from_symbol(';'), Some(TokenKind::Semicolon));
        assert_eq!(TokenKind::from_symbol('%'), None);
    }

    #[test]
    fn only_number_tokens_carry_a_value() {
        let n = Token::number("2.5", 2.5, Span::new(1, 1));
        let p = Token::new(TokenKind::Plus, "+", Span::new(1, 4));
        assert_eq!(n.value, Some(2.5));
        assert_eq!(p.value, None);
        assert_eq!(p.to_string(), "+");
    }

    #[test]
    fn position_accessors_read_the_span() {
        let t = Token::new(TokenKind::Semicolon, ";", Span::new(3, 14));
        assert_eq!((t.line(), t.column()), (3, 14));
    }
}
