/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      lib.rs
 * Purpose:   Crate root: lexer → parser → interpreter pipeline.
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

//! # simlan
//!
//! A tiny language of `PRINT` statements over `+ - * /` arithmetic:
//!
//! ```text
//! // comments run to the end of the line
//! PRINT (2 + 3) * 4;
//! PRINT 10 - 2 - 3;
//! ```
//!
//! The pipeline is a pull-based [`lexer`], a recursive-descent [`parser`]
//! producing an owned [`ast`], and a tree-walking [`interpreter`] writing to
//! an [`OutputSink`].

/// Abstract syntax tree: expressions, `PRINT` statements and the program
/// root. Built bottom-up by the parser, never mutated afterwards.
pub mod ast;

/// Command-line configuration for the `simlan` binary.
pub mod config;

/// Compiler-style error rendering with a caret under the failing column.
pub mod diagnostics;

/// Token and tree dumps in text and JSON.
pub mod emit;

/// Lexical, parse and runtime error types.
///
/// Every stage returns `Result`; nothing is caught internally. The
/// crate-level [`SimlanError`] carries a stable code, an optional position
/// and an optional help line for diagnostics.
pub mod error;

/// Tree-walking evaluation of a parsed program.
pub mod interpreter;

/// Scanning source text into tokens.
pub mod lexer;

/// `log` backend used by the binary.
pub mod logger;

/// Recursive-descent parsing with one-token lookahead.
pub mod parser;

/// 1-based source positions.
pub mod span;

pub use ast::Program;
pub use error::{LexError, ParseError, RuntimeError, SimlanError};
pub use interpreter::{OutputSink, WriterSink};
pub use span::Span;

/// Parses and executes `source`, sending every printed value to `sink`.
///
/// The whole program is parsed before anything runs, so a syntax error
/// anywhere means no output at all. A runtime error stops execution at the
/// failing statement; values printed before it remain in `sink`.
///
/// # Examples
/// ```
/// let mut out: Vec<f64> = Vec::new();
/// simlan::run_source("PRINT 2 + 3 * 4; PRINT (2 + 3) * 4;", &mut out).unwrap();
/// assert_eq!(out, vec![14.0, 20.0]);
///
/// assert!(simlan::run_source("PRINT 1 / 0;", &mut out).is_err());
/// ```
pub fn run_source<S: OutputSink + ?Sized>(source: &str, sink: &mut S) -> Result<(), SimlanError> {
    let program = parser::parse(source)?;
    interpreter::run(&program, sink)?;
    Ok(())
}
