//! quill-core: Domain types for the quill record-store harness
//!
//! This crate provides:
//! - Typed attribute values with coercion helpers
//! - Records, record references, and image-merge semantics
//! - Structured queries and generic store requests
//! - A clock abstraction for testable elapsed-time measurement
//! - Business-day calendar arithmetic

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod calendar;
pub mod clock;
pub mod query;
pub mod record;
pub mod request;
pub mod value;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use query::{ColumnSelector, Condition, Operator, Query, QueryExpression};
pub use record::{Record, RecordRef};
pub use request::{GenericRequest, GenericResponse};
pub use value::AttributeValue;
