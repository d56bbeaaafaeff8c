/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      ast.rs
 * Purpose:   The abstract syntax tree built by the parser and walked by the
 *            interpreter.
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

/// Tree rendering for `--emit ast`.
pub mod display;

/// Arithmetic expression nodes.
pub mod expr;

/// `PRINT` statements and the program root.
pub mod stmt;

pub use expr::{BinaryOp, Expr};
pub use stmt::{Program, Stmt};
