// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trace output channels

mod buffer;
mod writer;

pub use buffer::BufferChannel;
pub use writer::WriterChannel;

/// Destination for trace lines.
///
/// Writing is infallible by contract: an implementation that can fail must
/// swallow its own errors, because a trace call must never throw back into
/// the instrumented code path.
pub trait TraceChannel: Send + Sync {
    fn write_line(&self, line: &str);
}
