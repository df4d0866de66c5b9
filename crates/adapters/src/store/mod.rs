// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record-store client contract

mod memory;

pub use memory::MemoryStore;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeStore, StoreCall};

use quill_core::{ColumnSelector, GenericRequest, GenericResponse, Query, Record, RecordRef};
use thiserror::Error;
use uuid::Uuid;

/// Errors from store operations
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("record not found: {record_type} {id}")]
    NotFound { record_type: String, id: Uuid },
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    #[error("unsupported request: {0}")]
    UnsupportedRequest(String),
    #[error("store failure: {0}")]
    Backend(String),
}

/// Client contract of the transactional record store.
///
/// All operations are synchronous and blocking: a call either returns or
/// fails, and the next statement runs only after it does.
pub trait RecordStore: Clone + Send + Sync {
    /// Create a record, returning its id (assigned by the store when nil)
    fn create(&self, record: &Record) -> Result<Uuid, StoreError>;

    /// Update an existing record
    fn update(&self, record: &Record) -> Result<(), StoreError>;

    /// Delete a record by type and id
    fn delete(&self, record_type: &str, id: Uuid) -> Result<(), StoreError>;

    /// Associate related records through a named relationship
    fn associate(
        &self,
        record_type: &str,
        id: Uuid,
        relationship: &str,
        related: &[RecordRef],
    ) -> Result<(), StoreError>;

    /// Remove an existing association
    fn disassociate(
        &self,
        record_type: &str,
        id: Uuid,
        relationship: &str,
        related: &[RecordRef],
    ) -> Result<(), StoreError>;

    /// Retrieve one record
    fn retrieve(
        &self,
        record_type: &str,
        id: Uuid,
        columns: &ColumnSelector,
    ) -> Result<Record, StoreError>;

    /// Retrieve all records matching a query
    fn retrieve_multiple(&self, query: &Query) -> Result<Vec<Record>, StoreError>;

    /// Execute an arbitrary named request
    fn execute(&self, request: &GenericRequest) -> Result<GenericResponse, StoreError>;
}
