//! Output transports.
//!
//! A transport receives one rendered line per logging call and appends the
//! trailing newline itself.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Destination for rendered lines.
pub trait Transport: Send + Sync {
    /// Write one line, followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error. Loggers report it through
    /// `tracing` and carry on.
    fn write(&self, line: &str) -> io::Result<()>;
}

/// Writes to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutTransport;

impl Transport for StdoutTransport {
    fn write(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")
    }
}

/// Writes to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrTransport;

impl Transport for StderrTransport {
    fn write(&self, line: &str) -> io::Result<()> {
        let mut out = io::stderr().lock();
        writeln!(out, "{line}")
    }
}

/// Writes to any [`Write`] implementation, such as a file or a buffer.
#[derive(Debug, Default)]
pub struct WriterTransport<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterTransport<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Transport for WriterTransport<W> {
    fn write(&self, line: &str) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{line}")?;
        writer.flush()
    }
}
