// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trace channel over any `io::Write`

use super::TraceChannel;
use std::io::Write;
use std::sync::Mutex;

/// A channel that writes each trace line to an underlying writer.
///
/// Write failures are dropped on the floor: the trace contract forbids
/// surfacing channel errors into the instrumented code path.
pub struct WriterChannel<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterChannel<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the channel and hand the writer back.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> TraceChannel for WriterChannel<W> {
    fn write_line(&self, line: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        let _ = writeln!(writer, "{line}");
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
