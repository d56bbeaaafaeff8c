/*
 * ==========================================================================
 * SIMLAN - Simple Language
 * ==========================================================================
 *
 * File:      interpreter/output.rs
 * Purpose:   Destinations for the values produced by PRINT statements.
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

use std::io::{self, Write};

use crate::interpreter::display::format_number;

/// Receives one value per executed `PRINT`, in execution order.
pub trait OutputSink {
    fn emit(&mut self, value: f64) -> io::Result<()>;
}

/// Collects raw values. Handy for embedding and tests.
impl OutputSink for Vec<f64> {
    fn emit(&mut self, value: f64) -> io::Result<()> {
        self.push(value);
        Ok(())
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn emit(&mut self, value: f64) -> io::Result<()> {
        (**self).emit(value)
    }
}

/// Writes each value as one formatted line.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn emit(&mut self, value: f64) -> io::Result<()> {
        writeln!(self.writer, "{}", format_number(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_sink_prints_one_line_per_value() {
        let mut sink = WriterSink::new(Vec::new());
        sink.emit(2.0).expect("in-memory write");
        sink.emit(0.5).expect("in-memory write");
        let text = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert_eq!(text, "2\n0.5\n");
    }

    #[test]
    fn vec_sink_keeps_raw_values() {
        let mut values: Vec<f64> = Vec::new();
        values.emit(1.25).expect("infallible");
        assert_eq!(values, vec![1.25]);
    }
}
