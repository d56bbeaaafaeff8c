/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      lexer/keywords.rs
 * Purpose:   Defines all reserved keywords for the SIMLAN language.
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

use crate::lexer::token::TokenKind;

/// Resolves a scanned word to its **keyword token kind**.
///
/// # Returns
/// - `Some(kind)` if the word is a reserved SIMLAN keyword.
/// - `None` otherwise. The grammar has no general identifiers yet, so the
///   lexer turns every `None` into an error token.
///
/// # Behavior
/// - Case-sensitive: `print` and `Print` are not keywords.
/// - Any future language keywords should be added here.
pub fn keyword(word: &str) -> Option<TokenKind> {
    match word {
        "PRINT" => Some(TokenKind::Print),
        _ => None,
    }
}
