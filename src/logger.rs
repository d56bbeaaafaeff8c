/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      logger.rs
 * Purpose:   `log` backend for the simlan binary.
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

use std::path::Path;

use chrono::Local;
use colored::Colorize;
use log::{Level, LevelFilter};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Installs the global logger.
///
/// Console records go to **stderr**, never stdout: stdout belongs to the
/// program's `PRINT` output. When `log_file` is given, records at
/// `file_level` and above are also appended there, uncolored and with
/// their source location.
pub fn init(
    console_level: LevelFilter,
    log_file: Option<&Path>,
    file_level: LevelFilter,
) -> Result<(), fern::InitError> {
    let console = fern::Dispatch::new()
        .format(|out, message, record| {
            let level = match record.level() {
                Level::Error => "ERROR".red().bold(),
                Level::Warn => "WARN ".yellow().bold(),
                Level::Info => "INFO ".green().bold(),
                Level::Debug => "DEBUG".blue().bold(),
                Level::Trace => "TRACE".magenta().bold(),
            };

            out.finish(format_args!(
                "[{}] [{}] [{}] {}",
                Local::now().format(TIMESTAMP_FORMAT),
                level,
                record.target(),
                message
            ))
        })
        .level(console_level)
        .chain(std::io::stderr());

    let mut base = fern::Dispatch::new()
        .level(LevelFilter::Trace)
        .chain(console);

    if let Some(path) = log_file {
        let file = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] [{:<5}] [{}] [{}:{}] {}",
                    Local::now().format(TIMESTAMP_FORMAT),
                    record.level(),
                    record.target(),
                    record.file().unwrap_or("?"),
                    record.line().unwrap_or(0),
                    message
                ))
            })
            .level(file_level)
            .chain(fern::log_file(path)?);

        base = base.chain(file);
    }

    base.apply()?;

    log::debug!("logger initialized, console level {}", console_level);
    if let Some(path) = log_file {
        log::debug!("writing logs to {}", path.display());
    }

    Ok(())
}
