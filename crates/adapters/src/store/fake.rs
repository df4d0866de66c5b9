// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake record store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{RecordStore, StoreError};
use quill_core::request::QUERY_TO_TEXT;
use quill_core::{ColumnSelector, GenericRequest, GenericResponse, Query, Record, RecordRef};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Recorded store call
#[derive(Debug, Clone)]
pub enum StoreCall {
    Create {
        record_type: String,
        attribute_count: usize,
    },
    Update {
        record_type: String,
        id: Uuid,
    },
    Delete {
        record_type: String,
        id: Uuid,
    },
    Associate {
        record_type: String,
        id: Uuid,
        relationship: String,
        related: Vec<RecordRef>,
    },
    Disassociate {
        record_type: String,
        id: Uuid,
        relationship: String,
        related: Vec<RecordRef>,
    },
    Retrieve {
        record_type: String,
        id: Uuid,
        columns: ColumnSelector,
    },
    RetrieveMultiple {
        query: Query,
    },
    Execute {
        name: String,
    },
}

#[derive(Default)]
struct FakeState {
    calls: Vec<StoreCall>,
    records: HashMap<(String, Uuid), Record>,
    query_results: Vec<Record>,
    fail_next: Option<StoreError>,
    failing_requests: HashSet<String>,
}

/// Fake record store recording every call, with scriptable failures.
#[derive(Clone, Default)]
pub struct FakeStore {
    state: Arc<Mutex<FakeState>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<StoreCall> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Seed a record for retrieval
    pub fn put_record(&self, record: Record) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state
            .records
            .insert((record.record_type.clone(), record.id), record);
    }

    /// Seed the result set returned by `retrieve_multiple`
    pub fn put_query_results(&self, records: Vec<Record>) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .query_results = records;
    }

    /// Fail exactly the next store call with `error`
    pub fn fail_next(&self, error: StoreError) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .fail_next = Some(error);
    }

    /// Make every `execute` of the named request fail
    pub fn fail_request(&self, name: impl Into<String>) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .failing_requests
            .insert(name.into());
    }

    fn record_call(&self, call: StoreCall) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(call);
        match state.fail_next.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl RecordStore for FakeStore {
    fn create(&self, record: &Record) -> Result<Uuid, StoreError> {
        self.record_call(StoreCall::Create {
            record_type: record.record_type.clone(),
            attribute_count: record.attributes.len(),
        })?;
        let id = if record.id.is_nil() {
            Uuid::new_v4()
        } else {
            record.id
        };
        let mut stored = record.clone();
        stored.id = id;
        self.put_record(stored);
        Ok(id)
    }

    fn update(&self, record: &Record) -> Result<(), StoreError> {
        self.record_call(StoreCall::Update {
            record_type: record.record_type.clone(),
            id: record.id,
        })?;
        self.put_record(record.clone());
        Ok(())
    }

    fn delete(&self, record_type: &str, id: Uuid) -> Result<(), StoreError> {
        self.record_call(StoreCall::Delete {
            record_type: record_type.to_string(),
            id,
        })?;
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .records
            .remove(&(record_type.to_string(), id));
        Ok(())
    }

    fn associate(
        &self,
        record_type: &str,
        id: Uuid,
        relationship: &str,
        related: &[RecordRef],
    ) -> Result<(), StoreError> {
        self.record_call(StoreCall::Associate {
            record_type: record_type.to_string(),
            id,
            relationship: relationship.to_string(),
            related: related.to_vec(),
        })
    }

    fn disassociate(
        &self,
        record_type: &str,
        id: Uuid,
        relationship: &str,
        related: &[RecordRef],
    ) -> Result<(), StoreError> {
        self.record_call(StoreCall::Disassociate {
            record_type: record_type.to_string(),
            id,
            relationship: relationship.to_string(),
            related: related.to_vec(),
        })
    }

    fn retrieve(
        &self,
        record_type: &str,
        id: Uuid,
        columns: &ColumnSelector,
    ) -> Result<Record, StoreError> {
        self.record_call(StoreCall::Retrieve {
            record_type: record_type.to_string(),
            id,
            columns: columns.clone(),
        })?;
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .records
            .get(&(record_type.to_string(), id))
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                record_type: record_type.to_string(),
                id,
            })
    }

    fn retrieve_multiple(&self, query: &Query) -> Result<Vec<Record>, StoreError> {
        self.record_call(StoreCall::RetrieveMultiple {
            query: query.clone(),
        })?;
        Ok(self
            .state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .query_results
            .clone())
    }

    fn execute(&self, request: &GenericRequest) -> Result<GenericResponse, StoreError> {
        self.record_call(StoreCall::Execute {
            name: request.name.clone(),
        })?;
        let failing = self
            .state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .failing_requests
            .contains(&request.name);
        if failing {
            return Err(StoreError::Backend(format!(
                "scripted failure: {}",
                request.name
            )));
        }
        if request.name == QUERY_TO_TEXT {
            return Ok(GenericResponse::new(QUERY_TO_TEXT)
                .with_result("text", serde_json::Value::String("{ fake query }".into())));
        }
        Ok(GenericResponse::new(request.name.clone()))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
