/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver function used to transform SIMLAN source into a `Program` tree.
 *
 * The grammar itself is split across sibling modules:
 * - `statements.rs`   → `PRINT expression ;`
 * - `expressions.rs`  → expression grammar & operator precedence
 * - `helpers.rs`      → token matching, consumption and error construction
 *
 * --------------------------------------------------------------------------
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

use log::debug;

use crate::ast::Program;
use crate::error::{LexError, ParseError};
use crate::lexer::token::{Token, TokenKind};
use crate::lexer::Lexer;
use crate::span::Span;

/// The SIMLAN recursive-descent parser.
///
/// The parser pulls tokens from its [`Lexer`] one at a time and keeps only
/// two of them:
/// - `current`  → the one-token lookahead
/// - `previous` → the most recently consumed token (operator spans, error
///   context)
///
/// The grammar logic is implemented through extension modules
/// (`statements`, `expressions`, `helpers`) via additional `impl Parser`
/// blocks.
pub struct Parser {
    pub(crate) lexer: Lexer,

    pub(crate) current: Token,

    /// Before the first advance this is a placeholder end-of-file token at
    /// `1:1`.
    pub(crate) previous: Token,

    /// Open parentheses around the current token.
    pub(crate) nesting: usize,
}

/// Public entry point for the SIMLAN parsing phase.
///
/// # Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → AST → Interpreter
/// ```
///
/// # Example
/// ```
/// let program = simlan::parser::parse("PRINT 1 + 2;").unwrap();
/// assert_eq!(program.len(), 1);
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    Parser::new(Lexer::new(source)).parse_program()
}

impl Parser {
    /// Creates a parser and primes the lookahead with the first token.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();

        Self {
            lexer,
            current,
            previous: Token::eof(Span::default()),
            nesting: 0,
        }
    }

    /// Parses the entire token stream into a [`Program`].
    ///
    /// # Behavior
    /// - Consumes statements until the end-of-file token.
    /// - Statements keep their source order.
    /// - The first error aborts parsing; no partial tree is returned.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        while !self.check(TokenKind::EndOfFile) {
            // Only the very first token can still be an unchecked error here;
            // `advance` rejects every later one.
            if self.check(TokenKind::Error) {
                return Err(LexError::from_token(&self.current).into());
            }

            program.push(self.statement()?);
        }

        debug!("parsed {} statement(s)", program.len());

        Ok(program)
    }
}
