/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      interpreter/mod.rs
 * Purpose:   Tree-walking interpreter: runs a parsed `Program`.
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

pub mod display;
pub mod expressions;
pub mod output;
pub mod statements;

use log::{debug, info};

use crate::ast::Program;
use crate::error::RuntimeError;

pub use display::format_number;
pub use expressions::eval_expr;
pub use output::{OutputSink, WriterSink};
pub use statements::exec_stmt;

/// Executes a full SIMLAN program.
///
/// Statements run strictly in source order. The first failure stops the
/// run: later statements never execute, while output already emitted by
/// earlier ones stays in the sink.
pub fn run<S: OutputSink + ?Sized>(program: &Program, sink: &mut S) -> Result<(), RuntimeError> {
    debug!("running {} statement(s)", program.len());

    for (index, stmt) in program.statements.iter().enumerate() {
        if let Err(err) = exec_stmt(stmt, &mut *sink) {
            info!(
                "execution halted at statement {} ({}): {}",
                index + 1,
                stmt.span(),
                err
            );
            return Err(err);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn run_source(source: &str) -> (Vec<f64>, Result<(), RuntimeError>) {
        let program = parse(source).expect("valid program");
        let mut out: Vec<f64> = Vec::new();
        let result = run(&program, &mut out);
        (out, result)
    }

    #[test]
    fn statements_run_in_order() {
        let (out, result) = run_source("PRINT 1 + 1; PRINT 2 + 2;");
        assert!(result.is_ok());
        assert_eq!(out, vec![2.0, 4.0]);
    }

    #[test]
    fn failure_halts_later_statements() {
        let (out, result) = run_source("PRINT 1;\nPRINT 1 / 0;\nPRINT 3;");
        assert!(matches!(result, Err(RuntimeError::DivisionByZero { .. })));
        assert_eq!(out, vec![1.0]);
    }

    #[test]
    fn empty_program_prints_nothing() {
        let (out, result) = run_source("");
        assert!(result.is_ok());
        assert!(out.is_empty());
    }
}
