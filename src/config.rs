/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      config.rs
 * Purpose:   Command-line configuration of the simlan binary.
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

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// What the binary produces from the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Emit {
    /// Execute the program.
    #[default]
    Run,
    /// Dump the token stream.
    Tokens,
    /// Dump the parsed tree.
    Ast,
}

/// Output format for `tokens` and `ast` dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Simlan runs PRINT statements over + - * / arithmetic.
#[derive(Parser, Debug, Clone)]
#[command(name = "simlan", version, about, long_about = None)]
pub struct Config {
    /// Source file to read.
    pub file: PathBuf,

    /// What to produce.
    #[arg(short, long, value_enum, default_value_t = Emit::Run)]
    pub emit: Emit,

    /// Format of token and AST dumps.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Console log level (off, error, warn, info, debug, trace).
    #[arg(short, long, env = "SIMLAN_LOG", default_value = "warn")]
    pub log_level: LevelFilter,

    /// Also append logs to this file, at debug level.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration from the process arguments and environment.
    pub fn load() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_running_the_file() {
        let config = Config::try_parse_from(["simlan", "prog.sim"]).expect("valid args");
        assert_eq!(config.file, PathBuf::from("prog.sim"));
        assert_eq!(config.emit, Emit::Run);
        assert_eq!(config.format, Format::Text);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn parses_dump_options() {
        let config = Config::try_parse_from([
            "simlan", "--emit", "ast", "-f", "json", "-l", "debug", "prog.sim",
        ])
        .expect("valid args");
        assert_eq!(config.emit, Emit::Ast);
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn file_is_required() {
        assert!(Config::try_parse_from(["simlan"]).is_err());
    }
}
