/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      ast/display.rs
 * Purpose:   Indented tree rendering of a parsed program.
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

use std::fmt::{self, Write};

use crate::ast::expr::Expr;
use crate::ast::stmt::{Program, Stmt};
use crate::interpreter::display::format_number;

const INDENT: &str = "  ";

/// Renders the tree one node per line, two spaces per level.
///
/// ```text
/// Program
///   Print
///     Binary '+'
///       Left:
///         Number 1
///       Right:
///         Number 2
/// ```
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Program")?;
        for stmt in &self.statements {
            write_stmt(f, stmt, 1)?;
        }
        Ok(())
    }
}

fn write_stmt(out: &mut impl Write, stmt: &Stmt, depth: usize) -> fmt::Result {
    match stmt {
        Stmt::Print { expression, .. } => {
            write_line(out, depth, "Print")?;
            write_expr(out, expression, depth + 1)
        }
    }
}

fn write_expr(out: &mut impl Write, expr: &Expr, depth: usize) -> fmt::Result {
    match expr {
        Expr::Number { value, .. } => {
            write_line(out, depth, &format!("Number {}", format_number(*value)))
        }
        Expr::Binary {
            operator,
            left,
            right,
            ..
        } => {
            write_line(out, depth, &format!("Binary '{}'", operator))?;
            write_line(out, depth + 1, "Left:")?;
            write_expr(out, left, depth + 2)?;
            write_line(out, depth + 1, "Right:")?;
            write_expr(out, right, depth + 2)
        }
    }
}

fn write_line(out: &mut impl Write, depth: usize, text: &str) -> fmt::Result {
    for _ in 0..depth {
        out.write_str(INDENT)?;
    }
    writeln!(out, "{}", text)
}

#[cfg(test)]
mod tests {
    use crate::ast::{BinaryOp, Expr, Program, Stmt};
    use crate::span::Span;

    #[test]
    fn renders_nested_tree() {
        let at = Span::default();
        let mut program = Program::new();
        program.push(Stmt::Print {
            expression: Expr::binary(
                BinaryOp::Add,
                Expr::number(1.0, at),
                Expr::binary(
                    BinaryOp::Multiply,
                    Expr::number(2.5, at),
                    Expr::number(3.0, at),
                    at,
                ),
                at,
            ),
            span: at,
        });

        let expected = "\
Program
  Print
    Binary '+'
      Left:
        Number 1
      Right:
        Binary '*'
          Left:
            Number 2.5
          Right:
            Number 3
";
        assert_eq!(program.to_string(), expected);
    }

    #[test]
    fn empty_program_is_a_single_line() {
        assert_eq!(Program::new().to_string(), "Program\n");
    }
}
