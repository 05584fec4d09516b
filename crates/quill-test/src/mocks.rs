//! Mock transports.

use std::io;
use std::sync::{Arc, Mutex};

use quill_logger::Transport;

/// Transport that keeps every written line in memory.
///
/// Clones share the same buffer, so one clone can be given to a logger and
/// another kept for assertions.
#[derive(Debug, Clone, Default)]
pub struct CaptureTransport {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureTransport {
    /// Create an empty capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A shared handle to hand to a logger.
    #[must_use]
    pub fn handle(&self) -> Arc<dyn Transport> {
        Arc::new(self.clone())
    }

    /// Every captured line, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// The most recent line.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.lines().pop()
    }

    /// Number of captured lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Whether nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget captured lines.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.lines.lock() {
            guard.clear();
        }
    }
}

impl Transport for CaptureTransport {
    fn write(&self, line: &str) -> io::Result<()> {
        if let Ok(mut guard) = self.lines.lock() {
            guard.push(line.to_owned());
        }
        Ok(())
    }
}

/// Transport whose writes always fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingTransport;

impl Transport for FailingTransport {
    fn write(&self, _line: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "transport closed"))
    }
}
