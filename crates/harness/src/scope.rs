// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution scope: one unit of work, one sink, one proxy
//!
//! The scope wires a [`TraceSink`] and a [`StoreProxy`] together for the
//! lifetime of a single logical invocation. Business logic reaches the
//! store only through [`ExecutionScope::store`], so every store interaction
//! is observed; teardown closes the sink exactly once on every exit path.

use crate::context::ExecutionContext;
use crate::proxy::StoreProxy;
use crate::sink::TraceSink;
use crate::APP_TAG;
use quill_adapters::{RecordStore, TraceChannel};
use quill_core::{Clock, SystemClock};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

pub struct ExecutionScope<S: RecordStore, C: Clock = SystemClock> {
    sink: TraceSink,
    proxy: StoreProxy<S, C>,
    context: Option<ExecutionContext>,
    clock: C,
    started: Instant,
}

impl<S: RecordStore> ExecutionScope<S> {
    /// Scope over an explicit store and trace channel.
    pub fn new(store: S, channel: Option<Arc<dyn TraceChannel>>) -> Self {
        Self::with_clock(store, channel, None, SystemClock, false)
    }

    /// Scope for a host invocation: context details are logged up front,
    /// and an incoming target record is dumped against its pre-image.
    pub fn with_context(
        store: S,
        channel: Option<Arc<dyn TraceChannel>>,
        context: ExecutionContext,
    ) -> Self {
        Self::with_clock(store, channel, Some(context), SystemClock, false)
    }
}

impl<S: RecordStore, C: Clock> ExecutionScope<S, C> {
    /// Full-control constructor. `verbose` must be known here because the
    /// context is logged during construction.
    pub fn with_clock(
        store: S,
        channel: Option<Arc<dyn TraceChannel>>,
        context: Option<ExecutionContext>,
        clock: C,
        verbose: bool,
    ) -> Self {
        let sink = TraceSink::new(channel);
        sink.set_verbose(verbose);
        let proxy = StoreProxy::with_clock(store, sink.clone(), clock.clone());
        let started = clock.now();
        let scope = Self {
            sink,
            proxy,
            context,
            clock,
            started,
        };
        if let Some(ctx) = &scope.context {
            scope.log_context(ctx);
            if let Some(target) = ctx.target_record() {
                scope.trace(
                    &format!(
                        "Incoming {}\n{}\n",
                        target.record_type,
                        target.dump(ctx.pre_image())
                    ),
                    &[],
                );
            }
        }
        scope
    }

    /// The instrumented store handle. The sole way business logic should
    /// reach the store from inside this scope.
    pub fn store(&self) -> &StoreProxy<S, C> {
        &self.proxy
    }

    pub fn context(&self) -> Option<&ExecutionContext> {
        self.context.as_ref()
    }

    /// The owned sink, for untagged or block-level access.
    pub fn sink(&self) -> &TraceSink {
        &self.sink
    }

    pub fn verbose(&self) -> bool {
        self.sink.verbose()
    }

    pub fn set_verbose(&self, verbose: bool) {
        self.sink.set_verbose(verbose);
    }

    /// Tagged trace: the application tag is prefixed so this system's lines
    /// stand out from co-mingled host output.
    pub fn trace(&self, format: &str, args: &[&dyn fmt::Display]) {
        self.sink.trace(&format!("{APP_TAG} {format}"), args);
    }

    /// Verbatim trace, no tag, no timestamp, no indentation.
    pub fn trace_raw(&self, text: &str) {
        self.sink.trace_raw(text);
    }

    /// Open a named block; lines indent until the matching [`Self::block_end`].
    pub fn block_start(&self, label: &str) {
        self.sink.block_begin(label);
    }

    /// Close the innermost open block.
    pub fn block_end(&self) {
        self.sink.block_end();
    }

    /// Run `f` against this scope, tracing any error's detail before it
    /// propagates unchanged. Consumes the scope: teardown (the internal
    /// execution time line and the sink close) happens on return.
    pub fn run<T, E: fmt::Display>(self, f: impl FnOnce(&Self) -> Result<T, E>) -> Result<T, E> {
        let result = f(&self);
        if let Err(e) = &result {
            self.trace(&format!("*** Error ***\n{e}"), &[]);
        }
        result
    }

    fn log_context(&self, ctx: &ExecutionContext) {
        self.trace(
            &format!(
                "Context details:\n  Step:  {}\n  Msg:   {}\n  Stage: {}\n  Mode:  {}\n  Depth: {}\n  Corr-Id: {}\n  Type:  {}\n  Id:    {}\n  User:  {}\n  IUser: {}",
                ctx.step.as_deref().unwrap_or("null"),
                ctx.message,
                ctx.stage,
                ctx.mode,
                ctx.depth,
                ctx.correlation_id,
                ctx.record_type,
                ctx.record_id,
                ctx.user_id,
                ctx.initiating_user_id,
            ),
            &[],
        );
        if self.verbose() {
            if let Some(parent) = &ctx.parent {
                self.log_context(parent);
            }
        }
    }
}

impl<S: RecordStore, C: Clock> Drop for ExecutionScope<S, C> {
    fn drop(&mut self) {
        let elapsed = self.clock.elapsed_ms(self.started);
        self.trace(&format!("Internal execution time: {elapsed} ms"), &[]);
        self.sink.close();
    }
}

/// Last path segment of a closure's type name; the enclosing function.
#[doc(hidden)]
pub fn caller_name<T>(_witness: T) -> &'static str {
    let name = std::any::type_name::<T>();
    let name = name.strip_suffix("::{{closure}}").unwrap_or(name);
    name.rsplit("::").next().unwrap_or(name)
}

/// Open a block labeled with the name of the enclosing function.
///
/// Convenience sugar over [`ExecutionScope::block_start`]; the explicit
/// label remains the primary API.
#[macro_export]
macro_rules! block_here {
    ($scope:expr) => {
        $scope.block_start($crate::scope::caller_name(|| {}))
    };
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
