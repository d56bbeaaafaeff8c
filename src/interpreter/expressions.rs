/*
 * ============================================================================
 * SIMLAN - Simple Language
 * ============================================================================
 *
 * File:      interpreter/expressions.rs
 * Purpose:   Expression evaluation.
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
 * ============================================================================
 */

use crate::ast::{BinaryOp, Expr};
use crate::error::RuntimeError;
use crate::span::Span;

/// Evaluates a single SIMLAN expression.
///
/// This is the **core expression dispatcher**: every expression in the
/// language passes through here.
///
/// # Returns
/// - The computed `f64`
/// - `RuntimeError::DivisionByZero` if any division in the tree has a zero
///   divisor
pub fn eval_expr(expr: &Expr) -> Result<f64, RuntimeError> {
    match expr {
        // ---------------------------------------------------------------------
        // Literal Values
        // ---------------------------------------------------------------------
        Expr::Number { value, .. } => Ok(*value),

        // ---------------------------------------------------------------------
        // Binary Operators (left operand fully before right)
        // ---------------------------------------------------------------------
        Expr::Binary {
            operator,
            left,
            right,
            span,
        } => {
            let lhs = eval_expr(left)?;
            let rhs = eval_expr(right)?;
            apply_binary(*operator, lhs, rhs, *span)
        }
    }
}

fn apply_binary(operator: BinaryOp, lhs: f64, rhs: f64, span: Span) -> Result<f64, RuntimeError> {
    match operator {
        BinaryOp::Add => Ok(lhs + rhs),
        BinaryOp::Subtract => Ok(lhs - rhs),
        BinaryOp::Multiply => Ok(lhs * rhs),
        BinaryOp::Divide => {
            // Matches -0.0 too.
            if rhs == 0.0 {
                return Err(RuntimeError::DivisionByZero { span });
            }
            Ok(lhs / rhs)
        }
    }
}
