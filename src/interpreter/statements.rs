/*!
 * SIMLAN Statement Executor
 * -------------------------
 *
 * Executes statements against an output sink.
 *
 * It does NOT evaluate expressions (handled by `expressions.rs`).
 * It does NOT format numbers (handled by the sink via `display.rs`).
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
 */

use log::debug;

use crate::ast::Stmt;
use crate::error::RuntimeError;
use crate::interpreter::expressions::eval_expr;
use crate::interpreter::output::OutputSink;

/// Executes a single SIMLAN statement.
///
/// For `PRINT` the expression is evaluated completely before anything
/// reaches the sink, so a failing statement emits nothing.
pub fn exec_stmt<S: OutputSink + ?Sized>(stmt: &Stmt, sink: &mut S) -> Result<(), RuntimeError> {
    match stmt {
        Stmt::Print { expression, span } => {
            let value = eval_expr(expression)?;
            debug!("PRINT at {} -> {}", span, value);
            sink.emit(value)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, Expr};
    use crate::span::Span;

    #[test]
    fn print_emits_the_value() {
        let stmt = Stmt::Print {
            expression: Expr::binary(
                BinaryOp::Multiply,
                Expr::number(6.0, Span::default()),
                Expr::number(7.0, Span::default()),
                Span::default(),
            ),
            span: Span::default(),
        };
        let mut out: Vec<f64> = Vec::new();
        exec_stmt(&stmt, &mut out).expect("no failure");
        assert_eq!(out, vec![42.0]);
    }

    #[test]
    fn failing_print_emits_nothing() {
        let stmt = Stmt::Print {
            expression: Expr::binary(
                BinaryOp::Divide,
                Expr::number(1.0, Span::default()),
                Expr::number(0.0, Span::default()),
                Span::new(4, 2),
            ),
            span: Span::default(),
        };
        let mut out: Vec<f64> = Vec::new();
        assert!(exec_stmt(&stmt, &mut out).is_err());
        assert!(out.is_empty());
    }
}
