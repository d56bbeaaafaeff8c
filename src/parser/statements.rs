/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      parser/statements.rs
 * Purpose:   Statement-level grammar.
 *
 *   statement → PRINT expression ";"
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

use crate::ast::Stmt;
use crate::error::ParseError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;

impl Parser {
    /// Parses a single top-level statement.
    ///
    /// `PRINT` is the only statement form, so anything else at statement
    /// position is an error.
    pub fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.check(TokenKind::Print) {
            return self.print_statement();
        }

        Err(self.error_at_current(
            "Expected a statement (e.g., PRINT)",
            Some("statements start with the PRINT keyword"),
        ))
    }

    /// print_statement → PRINT expression ";"
    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::Print, "Expected 'PRINT' keyword", None)?;
        let span = self.previous().span;

        let expression = self.expression()?;

        self.consume(
            TokenKind::Semicolon,
            "Expected ';' after PRINT statement's expression",
            Some("every PRINT statement ends with ';'"),
        )?;

        Ok(Stmt::Print { expression, span })
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ParseError;
    use crate::parser::parse;
    use crate::span::Span;

    fn unexpected(source: &str) -> (String, Span) {
        match parse(source) {
            Err(ParseError::UnexpectedToken { message, span, .. }) => (message, span),
            other => panic!("expected a syntax error, got {:?}", other),
        }
    }

    #[test]
    fn missing_semicolon_at_end_of_file() {
        let (message, span) = unexpected("PRINT 5");
        assert_eq!(
            message,
            "Expected ';' after PRINT statement's expression at end of file"
        );
        assert_eq!(span, Span::new(1, 8));
    }

    #[test]
    fn missing_semicolon_before_next_statement() {
        let (message, span) = unexpected("PRINT 5\nPRINT 6;");
        assert_eq!(
            message,
            "Expected ';' after PRINT statement's expression near 'PRINT'"
        );
        assert_eq!(span, Span::new(2, 1));
    }

    #[test]
    fn statement_must_start_with_print() {
        let (message, span) = unexpected("PRINT 1; 2;");
        assert_eq!(message, "Expected a statement (e.g., PRINT) near '2'");
        assert_eq!(span, Span::new(1, 10));
    }

    #[test]
    fn stray_semicolon_is_not_a_statement() {
        let (message, _) = unexpected(";");
        assert_eq!(message, "Expected a statement (e.g., PRINT) near ';'");
    }
}
