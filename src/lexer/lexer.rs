/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      lexer/lexer.rs
 * Purpose:   Pull-based scanner turning SIMLAN source text into tokens.
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

use log::trace;

use crate::lexer::keywords::keyword;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// The SIMLAN scanner.
///
/// The lexer does not pre-scan the whole file. Each call to
/// [`Lexer::next_token`] scans exactly one token from the cursor onwards, so
/// the parser can pull tokens in lockstep without any buffering.
///
/// Cursor state:
/// - `current`    → index of the next unread character
/// - `line`       → 1-based line of the next unread character
/// - `line_start` → index of the first character of that line
pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    line_start: usize,
    finished: bool,
}

impl Lexer {
    /// Creates a new lexer positioned at `1:1` of `source`.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            line_start: 0,
            finished: false,
        }
    }

    /// Scans and returns the next token.
    ///
    /// # Behavior
    /// - Skips whitespace and `//` comments first
    /// - Routes to specialized scanners for numbers and words
    /// - Maps `( ) ; + - * /` directly to their kinds
    /// - Never fails: problems are reported as [`TokenKind::Error`] tokens
    ///   whose lexeme is the diagnostic message
    ///
    /// Once the input is exhausted every call returns an end-of-file token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        let start = self.current;
        let span = self.span_at(start);

        let token = if self.is_at_end() {
            Token::eof(span)
        } else {
            let ch = self.advance();

            match ch {
                '0'..='9' => self.number(start),

                'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(start),

                _ => match TokenKind::from_symbol(ch) {
                    Some(kind) => Token::new(kind, ch.to_string(), span),
                    None => Token::error(format!("Unexpected character: {}", ch), span),
                },
            }
        };

        trace!(
            "token {} '{}' at {}",
            token.kind,
            token.lexeme,
            token.span
        );

        token
    }

    /// Skips runs of whitespace and single-line comments.
    ///
    /// A `//` comment runs up to, but not including, the terminating
    /// newline; the newline itself is then handled as whitespace so line
    /// tracking stays in one place.
    fn skip_whitespace_and_comments(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                '\n' => {
                    self.advance();
                    self.line += 1;
                    self.line_start = self.current;
                }
                ' ' | '\t' | '\r' | '\x0B' | '\x0C' => {
                    self.advance();
                }
                '/' if self.peek_next() == '/' => {
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    /// Scans an integer or decimal literal whose first digit is already
    /// consumed.
    ///
    /// A `.` only belongs to the literal when a digit follows it, so `1.`
    /// scans as `1` and leaves the dot behind.
    fn number(&mut self, start: usize) -> Token {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume '.'
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let lexeme: String = self.chars[start..self.current].iter().collect();
        let span = self.span_at(start);

        match lexeme.parse::<f64>() {
            Ok(value) if value.is_finite() => Token::number(lexeme, value, span),
            Ok(_) => Token::error(format!("Numeric literal out of range: {}", lexeme), span),
            Err(_) => Token::error(format!("Invalid numeric literal: {}", lexeme), span),
        }
    }

    /// Scans a word and resolves it against the keyword table.
    ///
    /// There are no general identifiers in this version of the language,
    /// so any word that is not a keyword becomes an error token.
    fn identifier_or_keyword(&mut self, start: usize) -> Token {
        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let text: String = self.chars[start..self.current].iter().collect();
        let span = self.span_at(start);

        match keyword(&text) {
            Some(kind) => Token::new(kind, text, span),
            None => Token::error(format!("Unexpected identifier or keyword: {}", text), span),
        }
    }

    /// Position of the character at `index`, which must be on the current
    /// line.
    fn span_at(&self, index: usize) -> Span {
        Span::new(self.line, index - self.line_start + 1)
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    /// Returns the current character, or `'\0'` at end of input.
    fn peek(&self) -> char {
        self.chars.get(self.current).copied().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        self.chars.get(self.current + 1).copied().unwrap_or('\0')
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

/// Iterates the token stream up to and including the first end-of-file or
/// error token.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if matches!(token.kind, TokenKind::EndOfFile | TokenKind::Error) {
            self.finished = true;
        }

        Some(token)
    }
}
