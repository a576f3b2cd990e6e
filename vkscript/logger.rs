// vkscript
//
// Copyright 2023 Neil Roberts
//
// Permission is hereby granted, free of charge, to any person obtaining a
// copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice (including the next
// paragraph) shall be included in all copies or substantial portions of the
// Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.  IN NO EVENT SHALL
// THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
// DEALINGS IN THE SOFTWARE.

//! A [log::Log] implementation that collects the formatted messages
//! and writes them out one complete line at a time.

use log::{LevelFilter, Log, Metadata, Record};
use std::fmt;
use std::io;
use std::str;
use std::sync::{Mutex, PoisonError};

/// Buffers written data until there is a complete line to pass on to
/// the writer.
struct LineWriter {
    writer: Box<dyn io::Write + Send>,

    // The data is collected into this buffer until we have a complete
    // line to send to the writer.
    buf: Vec<u8>,

    // True if any data was added from a u8 slice so it might not be
    // valid UTF-8.
    maybe_invalid_utf8: bool,
}

impl LineWriter {
    fn new(writer: Box<dyn io::Write + Send>) -> LineWriter {
        LineWriter {
            writer,
            buf: Vec::new(),
            maybe_invalid_utf8: false,
        }
    }

    fn send_range(&mut self, start: usize, end: usize) {
        if self.maybe_invalid_utf8 {
            let mut pos = start;

            while let Err(e) = str::from_utf8(&self.buf[pos..end]) {
                // Replace the offending byte with a question mark.
                // This should result in valid UTF-8 without having
                // to move the bytes around.
                self.buf[pos + e.valid_up_to()] = b'?';
                pos += e.valid_up_to() + 1;
            }
        }

        // There’s nowhere to report a failure to write a log message
        let _ = self.writer.write_all(&self.buf[start..end]);
        let _ = self.writer.write_all(b"\n");
    }

    fn flush_lines(&mut self) {
        let mut pos = 0;

        while let Some(line_len) = self.buf[pos..]
            .iter()
            .position(|&c| c == b'\n')
        {
            self.send_range(pos, pos + line_len);
            pos += line_len + 1;
        }

        // Remove the lines that we successfully processed
        self.buf.drain(0..pos);

        if self.buf.is_empty() {
            self.maybe_invalid_utf8 = false;
        }
    }
}

impl io::Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !buf.is_empty() {
            self.maybe_invalid_utf8 = true;
            self.buf.extend_from_slice(buf);
            self.flush_lines();
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let len = self.buf.len();
            self.send_range(0, len);
            self.buf.clear();
            self.maybe_invalid_utf8 = false;
        }

        self.writer.flush()
    }
}

impl fmt::Write for LineWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.extend_from_slice(s.as_bytes());
        self.flush_lines();
        Ok(())
    }
}

pub struct Logger {
    level: LevelFilter,
    writer: Mutex<LineWriter>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Logger").field("level", &self.level).finish()
    }
}

impl Logger {
    /// Constructs a logger that writes messages up to `level` on the
    /// standard error.
    pub fn new(level: LevelFilter) -> Logger {
        Logger::with_writer(level, Box::new(io::stderr()))
    }

    /// Constructs a logger that will write to the given writer
    /// instead. The writer only ever receives whole lines.
    pub fn with_writer(
        level: LevelFilter,
        writer: Box<dyn io::Write + Send>,
    ) -> Logger {
        Logger {
            level,
            writer: Mutex::new(LineWriter::new(writer)),
        }
    }

    /// Installs the logger as the global logger for the [log] macros.
    /// This can only be done once per process.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;

        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);

        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut writer =
            self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let _ = fmt::Write::write_fmt(
            &mut *writer,
            format_args!("{}: {}\n", record.level(), record.args()),
        );
    }

    fn flush(&self) {
        let mut writer =
            self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let _ = io::Write::flush(&mut *writer);
    }
}
