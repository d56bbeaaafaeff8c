/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      span.rs
 * Purpose:   Source positions shared by tokens, AST nodes and errors.
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

/// A position inside SIMLAN source text.
///
/// Both fields are **1-based**. The column is the character offset of the
/// first character of a token from the start of its line, so the very first
/// character of a file sits at `1:1`.
///
/// ```text
/// PRINT 1 + 2;
/// ^     ^ ^
/// 1:1   1:7 1:9
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// 1-based line number.
    pub line: usize,

    /// 1-based column number.
    pub column: usize,
}

impl Span {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_line_colon_column() {
        assert_eq!(Span::new(3, 14).to_string(), "3:14");
    }

    #[test]
    fn default_is_start_of_file() {
        assert_eq!(Span::default(), Span::new(1, 1));
    }
}
