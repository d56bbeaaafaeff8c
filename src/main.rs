/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      main.rs
 * Purpose:   The `simlan` command-line front end.
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

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use log::{error, info, LevelFilter};

use simlan::config::{Config, Emit, Format};
use simlan::diagnostics::DiagnosticPrinter;
use simlan::{emit, lexer, logger, parser, run_source, SimlanError, WriterSink};

fn main() -> ExitCode {
    let config = Config::load();

    if let Err(e) = logger::init(config.log_level, config.log_file.as_deref(), LevelFilter::Debug) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let file_name = config.file.display().to_string();

    let source = match fs::read_to_string(&config.file) {
        Ok(source) => source,
        Err(source) => {
            let err = SimlanError::Io {
                path: config.file.clone(),
                source,
            };
            DiagnosticPrinter::new(file_name, "").print(&err);
            return ExitCode::FAILURE;
        }
    };

    info!("{} ({} bytes), emit {:?}", file_name, source.len(), config.emit);

    match execute(&config, &source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{} failed: {}", file_name, err);
            DiagnosticPrinter::new(file_name, source).print(&err);
            ExitCode::FAILURE
        }
    }
}

fn execute(config: &Config, source: &str) -> Result<(), SimlanError> {
    match config.emit {
        Emit::Run => {
            let mut sink = WriterSink::new(io::stdout().lock());
            run_source(source, &mut sink)
        }

        Emit::Tokens => {
            // Tokens scanned before a lexical error are still dumped.
            let (tokens, lex_error) = lexer::scan(source);
            let text = match config.format {
                Format::Text => emit::tokens_text(&tokens),
                Format::Json => emit::tokens_json(&tokens).map_err(json_error)? + "\n",
            };
            write_stdout(&text)?;

            match lex_error {
                Some(err) => Err(err.into()),
                None => Ok(()),
            }
        }

        Emit::Ast => {
            let program = parser::parse(source)?;
            let text = match config.format {
                Format::Text => emit::ast_text(&program),
                Format::Json => emit::ast_json(&program).map_err(json_error)? + "\n",
            };
            write_stdout(&text)
        }
    }
}

fn json_error(err: serde_json::Error) -> SimlanError {
    SimlanError::Output(io::Error::from(err))
}

fn write_stdout(text: &str) -> Result<(), SimlanError> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(SimlanError::Output)
}
