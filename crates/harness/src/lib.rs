// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! quill-harness: instrumentation harness around a record-store client
//!
//! This crate provides:
//! - `TraceSink`: a nesting-aware, timestamped trace writer
//! - `StoreProxy`: a decorator that times and traces every store operation
//! - `ExecutionScope`: the per-unit-of-work composition of the two
//! - `ExecutionContext`: the platform invocation context a scope can carry
//! - Operation helpers layered on the scope's proxy

pub mod context;
pub mod ops;
pub mod proxy;
pub mod scope;
pub mod sink;

pub use context::{ExecutionContext, Target};
pub use proxy::StoreProxy;
pub use scope::ExecutionScope;
pub use sink::TraceSink;

/// Tag prefixed to every line this system formats, so its output stands out
/// from co-mingled host trace output.
pub const APP_TAG: &str = "[quill]";
