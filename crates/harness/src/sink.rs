// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Nesting-aware trace sink
//!
//! One sink lives for one logical unit of work. Lines are timestamped and
//! indented two spaces per open block; a trace call never fails, whatever
//! the caller feeds it.

use chrono::Local;
use quill_adapters::TraceChannel;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

struct SinkInner {
    channel: Option<Arc<dyn TraceChannel>>,
    blocks: Vec<String>,
    verbose: bool,
    closed: bool,
}

impl SinkInner {
    fn write_raw(&self, text: &str) {
        if let Some(channel) = &self.channel {
            channel.write_line(text);
        }
    }

    fn write_line(&self, message: &str) {
        if let Some(channel) = &self.channel {
            let stamp = Local::now().format("%H:%M:%S%.3f");
            let indent = "  ".repeat(self.blocks.len());
            channel.write_line(&format!("{stamp}\t{indent}{message}"));
        }
    }

    fn push_block(&mut self, label: &str) {
        self.write_line(&format!("BEGIN {label}"));
        self.blocks.push(label.to_string());
    }

    fn pop_block(&mut self) {
        let label = self.blocks.pop().unwrap_or_else(|| "?".to_string());
        self.write_line(&format!("END {label}"));
    }
}

/// Cloneable handle to the per-scope trace sink.
///
/// The scope owns the sink; the store proxy holds a clone of the handle.
/// Clones share one block stack, which is the whole point: indentation
/// reflects every open block regardless of who opened it.
#[derive(Clone)]
pub struct TraceSink {
    inner: Arc<Mutex<SinkInner>>,
}

impl TraceSink {
    /// Create a sink over an optional channel.
    ///
    /// With a channel present this writes the `YYYY-MM-DD` date line and the
    /// `*** Enter` marker; with `None` the sink is a permanent no-op.
    pub fn new(channel: Option<Arc<dyn TraceChannel>>) -> Self {
        let sink = Self {
            inner: Arc::new(Mutex::new(SinkInner {
                channel,
                blocks: Vec::new(),
                verbose: false,
                closed: false,
            })),
        };
        {
            let inner = sink.lock();
            inner.write_raw(&Local::now().format("%Y-%m-%d").to_string());
            inner.write_line("*** Enter");
        }
        sink
    }

    /// Convenience for the common single-channel case.
    pub fn with_channel(channel: impl TraceChannel + 'static) -> Self {
        Self::new(Some(Arc::new(channel)))
    }

    /// A sink with no channel: every call is a no-op.
    pub fn disabled() -> Self {
        Self::new(None)
    }

    fn lock(&self) -> MutexGuard<'_, SinkInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Write one timestamped, indented line.
    ///
    /// `format` may carry positional `{0}`-style placeholders. When the
    /// placeholders and `args` disagree (unknown index, malformed braces,
    /// or an argument no placeholder consumes), the unformatted text is
    /// written with the raw arguments appended instead; this call never
    /// fails.
    pub fn trace(&self, format: &str, args: &[&dyn fmt::Display]) {
        let inner = self.lock();
        if inner.channel.is_none() {
            return;
        }
        let message = if args.is_empty() {
            format.to_string()
        } else {
            match format_positional(format, args) {
                Some(formatted) => formatted,
                None => {
                    let rendered: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                    format!("{format}\nTrace Parameters:\n {}", rendered.join("\n "))
                }
            }
        };
        inner.write_line(&message);
    }

    /// Write text verbatim: no timestamp, no indentation.
    pub fn trace_raw(&self, text: &str) {
        self.lock().write_raw(text);
    }

    /// Open a named block: `BEGIN <label>` at the current depth, then one
    /// more level of indentation until the matching end.
    pub fn block_begin(&self, label: &str) {
        self.lock().push_block(label);
    }

    /// Close the innermost open block. On an empty stack this is a caller
    /// bug; a sentinel `END ?` is written rather than failing.
    pub fn block_end(&self) {
        self.lock().pop_block();
    }

    /// Number of currently open blocks.
    pub fn depth(&self) -> usize {
        self.lock().blocks.len()
    }

    pub fn verbose(&self) -> bool {
        self.lock().verbose
    }

    pub fn set_verbose(&self, verbose: bool) {
        self.lock().verbose = verbose;
    }

    /// Close the sink: force any still-open blocks shut (with one
    /// consistency warning), then write the `*** Exit` marker.
    ///
    /// Idempotent; repeated calls do nothing.
    pub fn close(&self) {
        let mut inner = self.lock();
        if inner.closed {
            return;
        }
        if !inner.blocks.is_empty() {
            tracing::warn!(
                open_blocks = inner.blocks.len(),
                "trace sink closed with unended blocks"
            );
            inner.write_raw("[TraceSink] Ending unended blocks - check code consistency!");
            while !inner.blocks.is_empty() {
                inner.pop_block();
            }
        }
        inner.write_line("*** Exit");
        inner.closed = true;
    }
}

/// C#-style positional formatting: `{0}`, `{1}`, ... with `{{`/`}}` escapes.
///
/// Returns `None` on any mismatch: malformed braces, an index with no
/// argument, or an argument no placeholder references.
fn format_positional(format: &str, args: &[&dyn fmt::Display]) -> Option<String> {
    let mut out = String::with_capacity(format.len() + 16);
    let mut used = vec![false; args.len()];
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut digits = String::new();
                loop {
                    match chars.next() {
                        Some(d) if d.is_ascii_digit() => digits.push(d),
                        Some('}') => break,
                        _ => return None,
                    }
                }
                if digits.is_empty() {
                    return None;
                }
                let index: usize = digits.parse().ok()?;
                let arg = args.get(index)?;
                *used.get_mut(index)? = true;
                out.push_str(&arg.to_string());
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return None;
                }
            }
            c => out.push(c),
        }
    }

    if used.iter().all(|u| *u) {
        Some(out)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
