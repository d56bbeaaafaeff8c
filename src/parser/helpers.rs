/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      parser/helpers.rs
 * Purpose:   Token navigation, matching and error helpers for the parser.
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

use std::mem;

use crate::ast::BinaryOp;
use crate::error::{LexError, ParseError};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser {
    /// Checks the current token's kind without consuming it.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    /// Consumes the current token and pulls the next one from the lexer.
    ///
    /// If the lexer hands back an error token it is surfaced immediately
    /// as [`ParseError::Lexical`]; the parser never looks past it.
    pub fn advance(&mut self) -> Result<(), ParseError> {
        let next = self.lexer.next_token();

        if next.is(TokenKind::Error) {
            return Err(LexError::from_token(&next).into());
        }

        self.previous = mem::replace(&mut self.current, next);
        Ok(())
    }

    /// Returns the previously consumed token.
    pub fn previous(&self) -> &Token {
        &self.previous
    }

    /// Consumes a required token kind or fails with `message`.
    pub fn consume(
        &mut self,
        kind: TokenKind,
        message: &str,
        help: Option<&'static str>,
    ) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.error_at_current(message, help))
        }
    }

    /// Attempts to match one of `operators` and consume it if present.
    ///
    /// # Returns
    /// - `Ok(Some(op))` if the current token was one of the operators; the
    ///   operator token is then available through [`Parser::previous`]
    /// - `Ok(None)` otherwise, with the token stream untouched
    pub fn match_operator(
        &mut self,
        operators: &[BinaryOp],
    ) -> Result<Option<BinaryOp>, ParseError> {
        match BinaryOp::from_token_kind(self.current.kind) {
            Some(op) if operators.contains(&op) => {
                self.advance()?;
                Ok(Some(op))
            }
            _ => Ok(None),
        }
    }

    /// Builds an error located at the current token.
    ///
    /// The message is suffixed with `at end of file` or `near '<lexeme>'`
    /// so the user can see what the parser tripped over.
    pub fn error_at_current(&self, message: &str, help: Option<&'static str>) -> ParseError {
        let token = &self.current;

        let message = if token.is(TokenKind::EndOfFile) {
            format!("{} at end of file", message)
        } else {
            format!("{} near '{}'", message, token.lexeme)
        };

        ParseError::UnexpectedToken {
            message,
            span: token.span,
            help,
        }
    }
}
