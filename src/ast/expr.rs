/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      ast/expr.rs
 * Purpose:   Expression nodes of the SIMLAN syntax tree.
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

use serde::Serialize;
use std::fmt;

use crate::lexer::token::TokenKind;
use crate::span::Span;

/// The four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl BinaryOp {
    /// Maps an operator token to its operator, if it is one.
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Subtract),
            TokenKind::Star => Some(BinaryOp::Multiply),
            TokenKind::Slash => Some(BinaryOp::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An arithmetic expression.
///
/// Every `Binary` node owns both operands outright, so the tree can have
/// neither sharing nor cycles. Parentheses leave no trace: `(1 + 2)` is
/// just the `Binary` node for `1 + 2`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node")]
pub enum Expr {
    /// A numeric literal.
    Number { value: f64, span: Span },

    /// `left operator right`, where `span` points at the operator token.
    Binary {
        operator: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn number(value: f64, span: Span) -> Self {
        Expr::Number { value, span }
    }

    pub fn binary(operator: BinaryOp, left: Expr, right: Expr, span: Span) -> Self {
        Expr::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Expr::Number { span, .. } | Expr::Binary { span, .. } => *span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_tokens_map_to_operators() {
        assert_eq!(BinaryOp::from_token_kind(TokenKind::Plus), Some(BinaryOp::Add));
        assert_eq!(BinaryOp::from_token_kind(TokenKind::Slash), Some(BinaryOp::Divide));
        assert_eq!(BinaryOp::from_token_kind(TokenKind::Semicolon), None);
    }

    #[test]
    fn binary_nodes_serialize_with_operator_symbol() {
        let expr = Expr::binary(
            BinaryOp::Multiply,
            Expr::number(2.0, Span::new(1, 1)),
            Expr::number(3.0, Span::new(1, 5)),
            Span::new(1, 3),
        );
        let json = serde_json::to_value(&expr).expect("serializable");
        assert_eq!(json["node"], "Binary");
        assert_eq!(json["operator"], "*");
        assert_eq!(json["left"]["value"], 2.0);
        assert_eq!(json["span"]["column"], 3);
    }
}
