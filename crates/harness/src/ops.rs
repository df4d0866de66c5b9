// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operation helpers layered on the scope's instrumented store
//!
//! Each helper runs inside its own named trace block so the transcript
//! shows the operation as one indented unit.

use crate::scope::ExecutionScope;
use quill_adapters::{RecordStore, StoreError};
use quill_core::{
    AttributeValue, Clock, ColumnSelector, Condition, GenericRequest, QueryExpression, Record,
};
use uuid::Uuid;

/// Set a record's state and status in one update.
///
/// State machines on this store are a pair of choice attributes; the field
/// names vary by record type, so the caller supplies them.
pub fn set_state<S: RecordStore, C: Clock>(
    scope: &ExecutionScope<S, C>,
    record_type: &str,
    id: Uuid,
    state_field: &str,
    status_field: &str,
    state: i32,
    status: i32,
) -> Result<(), StoreError> {
    scope.block_start("SetState");
    let mut record = Record::new(record_type, id);
    record.set(state_field, AttributeValue::Choice(state));
    record.set(status_field, AttributeValue::Choice(status));
    let result = scope.store().update(&record);
    scope.block_end();
    result
}

/// Drop the audit/change history of one record.
pub fn delete_change_history<S: RecordStore, C: Clock>(
    scope: &ExecutionScope<S, C>,
    record_type: &str,
    id: Uuid,
) -> Result<(), StoreError> {
    scope.block_start("DeleteChangeHistory");
    let result = scope
        .store()
        .execute(&GenericRequest::delete_change_history(record_type, id));
    scope.block_end();
    result.map(|_| ())
}

/// Count the rows of a many-to-many intersect type pointing at `id`.
///
/// Queries the intersect record type for rows whose `filter_attribute`
/// equals the id, selecting only that column, and returns the row count.
pub fn count_related<S: RecordStore, C: Clock>(
    scope: &ExecutionScope<S, C>,
    relationship_type: &str,
    filter_attribute: &str,
    id: Uuid,
) -> Result<usize, StoreError> {
    scope.block_start("CountRelated");
    let query = QueryExpression::new(relationship_type)
        .select(ColumnSelector::columns(&[filter_attribute]))
        .filter(Condition::equal(
            filter_attribute,
            AttributeValue::Text(id.to_string()),
        ))
        .no_lock();
    let result = scope.store().retrieve_multiple(&query.into());
    scope.block_end();
    Ok(result?.len())
}

#[cfg(test)]
#[path = "ops_tests.rs"]
mod tests;
