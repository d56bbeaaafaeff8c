/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      emit.rs
 * Purpose:   Text and JSON dumps of the token stream and the parsed tree.
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

use crate::ast::Program;
use crate::interpreter::format_number;
use crate::lexer::Token;

/// One line per token: `line:column KIND 'lexeme'`, followed by
/// `= value` for numbers.
///
/// ```text
/// 1:1 PRINT 'PRINT'
/// 1:7 NUMBER '42' = 42
/// 1:9 SEMICOLON ';'
/// 1:10 EOF ''
/// ```
pub fn tokens_text(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| {
            let mut line = format!(
                "{}:{} {} '{}'",
                token.line(),
                token.column(),
                token.kind,
                token.lexeme
            );
            if let Some(value) = token.value {
                line.push_str(" = ");
                line.push_str(&format_number(value));
            }
            line.push('\n');
            line
        })
        .collect()
}

pub fn tokens_json(tokens: &[Token]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tokens)
}

/// Indented tree, see the `Display` impl of [`Program`].
pub fn ast_text(program: &Program) -> String {
    program.to_string()
}

pub fn ast_json(program: &Program) -> serde_json::Result<String> {
    serde_json::to_string_pretty(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::parse;

    #[test]
    fn token_text_dump() {
        let tokens = tokenize("PRINT 42;").expect("valid");
        assert_eq!(
            tokens_text(&tokens),
            "1:1 PRINT 'PRINT'\n1:7 NUMBER '42' = 42\n1:9 SEMICOLON ';'\n1:10 EOF ''\n"
        );
    }

    #[test]
    fn token_json_dump_is_an_array() {
        let tokens = tokenize("PRINT 1.5;").expect("valid");
        let json: serde_json::Value =
            serde_json::from_str(&tokens_json(&tokens).expect("serializable")).expect("json");
        let items = json.as_array().expect("array");
        assert_eq!(items.len(), 4);
        assert_eq!(items[1]["kind"], "Number");
        assert_eq!(items[1]["value"], 1.5);
        assert_eq!(items[0]["value"], serde_json::Value::Null);
        assert_eq!(items[3]["span"]["column"], 11);
    }

    #[test]
    fn ast_json_dump_nests_statements() {
        let program = parse("PRINT 1 + 2;").expect("valid");
        let json: serde_json::Value =
            serde_json::from_str(&ast_json(&program).expect("serializable")).expect("json");
        let stmt = &json["statements"][0];
        assert_eq!(stmt["node"], "Print");
        assert_eq!(stmt["expression"]["operator"], "+");
        assert_eq!(stmt["expression"]["right"]["value"], 2.0);
    }
}
