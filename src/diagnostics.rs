/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      diagnostics.rs
 * Purpose:   Compiler-style rendering of pipeline errors.
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

use std::fmt::Write;

use crate::error::SimlanError;
use crate::span::Span;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for SIMLAN errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is inspired by `rustc` diagnostics but stays readable
/// without color.
pub struct DiagnosticPrinter {
    /// Full source code of the file being interpreted.
    source: String,

    /// Name of the source file (e.g. `main.sim`). Display only.
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders a diagnostic for `error`.
    ///
    /// # Output Example
    /// ```text
    /// error[E_PARSE]: Expected ';' after PRINT statement's expression at end of file
    ///   --> prog.sim:1:8
    ///     |
    ///   1 | PRINT 5
    ///     |        ^
    /// help: every PRINT statement ends with ';'
    /// ```
    ///
    /// Errors without a position (I/O failures) render the header only.
    pub fn render(&self, error: &SimlanError) -> String {
        let mut out = String::new();

        // `write!` into a String cannot fail.
        let _ = writeln!(out, "error[{}]: {}", error.code(), error);

        if let Some(span) = error.span() {
            self.render_location(&mut out, span);
        }

        if let Some(help) = error.help() {
            let _ = writeln!(out, "help: {}", help);
        }

        out
    }

    /// Prints the rendered diagnostic to stderr.
    pub fn print(&self, error: &SimlanError) {
        eprint!("{}", self.render(error));
    }

    fn render_location(&self, out: &mut String, span: Span) {
        let Span { line, column } = span;

        // Lines are 1-indexed in diagnostics, but iterators are 0-indexed.
        // The end-of-file position may sit on a line `lines()` does not yield.
        let src_line = self.source.lines().nth(line.saturating_sub(1)).unwrap_or("");

        let _ = writeln!(out, "  --> {}:{}:{}", self.file_name, line, column);
        let _ = writeln!(out, "    |");
        let _ = writeln!(out, "{:>3} | {}", line, src_line);

        // Tabs are kept so the caret lines up under tab-indented source.
        let underline: String = src_line
            .chars()
            .take(column.saturating_sub(1))
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .chain(
                std::iter::repeat(' ')
                    .take(column.saturating_sub(1).saturating_sub(src_line.chars().count())),
            )
            .collect();

        let _ = writeln!(out, "    | {}^", underline);
    }
}
