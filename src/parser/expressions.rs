/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      parser/expressions.rs
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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * This module contains the **entire SIMLAN expression grammar**.
 *
 * Parsing order follows mathematical precedence, lowest first:
 *
 *   expression → term → factor
 *
 * Each binary level folds its operators in a loop rather than by
 * recursion, which yields left-leaning trees: `1 - 2 - 3` is
 * `(1 - 2) - 3`.
 *
 * ==========================================================================
 */

use crate::ast::{BinaryOp, Expr};
use crate::error::ParseError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::span::Span;

const FACTOR_HELP: &str = "operands are numbers or parenthesized expressions";

const NESTING_HELP: &str = "split the expression across several PRINT statements";

/// Deepest expression tree the parser will build. A literal has depth 1.
///
/// Evaluation, tree printing and dropping all recurse once per level, so
/// this keeps every later stage within the stack.
pub const MAX_EXPR_DEPTH: usize = 1000;

/// Deepest parenthesis nesting. Each level costs several parser frames.
pub const MAX_PAREN_NESTING: usize = 256;

/// A parsed subtree together with its depth.
type Subtree = (Expr, usize);

impl Parser {
    /// expression → term ( ( "+" | "-" ) term )*
    pub fn expression(&mut self) -> Result<Expr, ParseError> {
        self.sum().map(|(expr, _)| expr)
    }

    fn sum(&mut self) -> Result<Subtree, ParseError> {
        let (mut expr, mut depth) = self.term()?;

        while let Some(operator) = self.match_operator(&[BinaryOp::Add, BinaryOp::Subtract])? {
            let span = self.previous().span;
            let (right, right_depth) = self.term()?;
            depth = deeper(depth.max(right_depth), span)?;
            expr = Expr::binary(operator, expr, right, span);
        }

        Ok((expr, depth))
    }

    /// term → factor ( ( "*" | "/" ) factor )*
    fn term(&mut self) -> Result<Subtree, ParseError> {
        let (mut expr, mut depth) = self.factor()?;

        while let Some(operator) = self.match_operator(&[BinaryOp::Multiply, BinaryOp::Divide])? {
            let span = self.previous().span;
            let (right, right_depth) = self.factor()?;
            depth = deeper(depth.max(right_depth), span)?;
            expr = Expr::binary(operator, expr, right, span);
        }

        Ok((expr, depth))
    }

    /// factor → NUMBER | "(" expression ")"
    fn factor(&mut self) -> Result<Subtree, ParseError> {
        match self.current.kind {
            TokenKind::Number => {
                let span = self.current.span;
                let Some(value) = self.current.value else {
                    return Err(self.error_at_current("Malformed numeric literal", None));
                };

                self.advance()?;
                Ok((Expr::number(value, span), 1))
            }

            TokenKind::LParen => {
                if self.nesting >= MAX_PAREN_NESTING {
                    return Err(too_deep(self.current.span));
                }

                self.nesting += 1;
                self.advance()?; // consume '('
                let inner = self.sum()?;
                self.consume(
                    TokenKind::RParen,
                    "Expected ')' after expression in parentheses",
                    Some("every '(' needs a matching ')'"),
                )?;
                self.nesting -= 1;

                Ok(inner)
            }

            _ => Err(self.error_at_current(
                "Expected a number or a parenthesized expression",
                Some(FACTOR_HELP),
            )),
        }
    }
}

/// Depth of a new binary node over a child of depth `child`.
fn deeper(child: usize, operator: Span) -> Result<usize, ParseError> {
    let depth = child + 1;
    if depth > MAX_EXPR_DEPTH {
        return Err(too_deep(operator));
    }
    Ok(depth)
}

fn too_deep(span: Span) -> ParseError {
    ParseError::UnexpectedToken {
        message: "Expression nested too deeply".to_string(),
        span,
        help: Some(NESTING_HELP),
    }
}
