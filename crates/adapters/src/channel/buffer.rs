// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory trace channel

use super::TraceChannel;
use std::sync::{Arc, Mutex};

/// A channel that captures trace lines in memory.
///
/// Clones share the same buffer, so a test can hand one clone to the scope
/// and read the transcript back through another.
#[derive(Clone, Default)]
pub struct BufferChannel {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines, in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// The full transcript joined with newlines.
    pub fn transcript(&self) -> String {
        self.lines().join("\n")
    }
}

impl TraceChannel for BufferChannel {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(line.to_string());
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
