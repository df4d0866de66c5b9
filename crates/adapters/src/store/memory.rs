// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory record store

use super::{RecordStore, StoreError};
use quill_core::request::{DELETE_CHANGE_HISTORY, QUERY_TO_TEXT, TEXT_QUERY};
use quill_core::{
    ColumnSelector, GenericRequest, GenericResponse, Operator, Query, QueryExpression, Record,
    RecordRef,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Default)]
struct State {
    records: HashMap<(String, Uuid), Record>,
    associations: HashMap<(String, Uuid, String), Vec<RecordRef>>,
}

/// A complete in-memory implementation of [`RecordStore`].
///
/// Backs tests and demos; clones share the same state. Its textual query
/// language is pretty-printed JSON, which is what the `QueryToText` request
/// answers with.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, across all types.
    pub fn record_count(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .records
            .len()
    }

    /// Related references for one relationship, in association order.
    pub fn related(&self, record_type: &str, id: Uuid, relationship: &str) -> Vec<RecordRef> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .associations
            .get(&(record_type.to_string(), id, relationship.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    fn select_columns(record: &Record, columns: &ColumnSelector) -> Record {
        match columns {
            ColumnSelector::All => record.clone(),
            ColumnSelector::Columns(names) => {
                let mut selected = Record::new(record.record_type.clone(), record.id);
                for name in names {
                    if let Some(value) = record.get(name) {
                        selected.set(name.clone(), value.clone());
                    }
                }
                selected
            }
        }
    }

    fn matches(record: &Record, expr: &QueryExpression) -> bool {
        expr.conditions.iter().all(|c| {
            let value = record.get(&c.attribute);
            match c.operator {
                Operator::Equal => value == Some(&c.value),
                Operator::NotEqual => value != Some(&c.value),
            }
        })
    }
}

impl RecordStore for MemoryStore {
    fn create(&self, record: &Record) -> Result<Uuid, StoreError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let id = if record.id.is_nil() {
            Uuid::new_v4()
        } else {
            record.id
        };
        let key = (record.record_type.clone(), id);
        if state.records.contains_key(&key) {
            return Err(StoreError::Backend(format!(
                "duplicate record: {} {id}",
                record.record_type
            )));
        }
        let mut stored = record.clone();
        stored.id = id;
        state.records.insert(key, stored);
        Ok(id)
    }

    fn update(&self, record: &Record) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let key = (record.record_type.clone(), record.id);
        let Some(stored) = state.records.get_mut(&key) else {
            return Err(StoreError::NotFound {
                record_type: record.record_type.clone(),
                id: record.id,
            });
        };
        // Update semantics: only the supplied attributes change.
        for (name, value) in &record.attributes {
            stored.set(name.clone(), value.clone());
        }
        Ok(())
    }

    fn delete(&self, record_type: &str, id: Uuid) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state
            .records
            .remove(&(record_type.to_string(), id))
            .is_none()
        {
            return Err(StoreError::NotFound {
                record_type: record_type.to_string(),
                id,
            });
        }
        state
            .associations
            .retain(|(t, rid, _), _| !(t == record_type && *rid == id));
        Ok(())
    }

    fn associate(
        &self,
        record_type: &str,
        id: Uuid,
        relationship: &str,
        related: &[RecordRef],
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if !state.records.contains_key(&(record_type.to_string(), id)) {
            return Err(StoreError::NotFound {
                record_type: record_type.to_string(),
                id,
            });
        }
        state
            .associations
            .entry((record_type.to_string(), id, relationship.to_string()))
            .or_default()
            .extend(related.iter().cloned());
        Ok(())
    }

    fn disassociate(
        &self,
        record_type: &str,
        id: Uuid,
        relationship: &str,
        related: &[RecordRef],
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if !state.records.contains_key(&(record_type.to_string(), id)) {
            return Err(StoreError::NotFound {
                record_type: record_type.to_string(),
                id,
            });
        }
        if let Some(refs) = state.associations.get_mut(&(
            record_type.to_string(),
            id,
            relationship.to_string(),
        )) {
            refs.retain(|r| {
                !related
                    .iter()
                    .any(|d| d.record_type == r.record_type && d.id == r.id)
            });
        }
        Ok(())
    }

    fn retrieve(
        &self,
        record_type: &str,
        id: Uuid,
        columns: &ColumnSelector,
    ) -> Result<Record, StoreError> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state
            .records
            .get(&(record_type.to_string(), id))
            .map(|r| Self::select_columns(r, columns))
            .ok_or_else(|| StoreError::NotFound {
                record_type: record_type.to_string(),
                id,
            })
    }

    fn retrieve_multiple(&self, query: &Query) -> Result<Vec<Record>, StoreError> {
        let expr = match query {
            Query::Expression(expr) => expr,
            Query::Text(_) => {
                return Err(StoreError::InvalidQuery(
                    "textual queries go through the TextQuery request".to_string(),
                ))
            }
        };
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let mut matched: Vec<Record> = state
            .records
            .values()
            .filter(|r| r.record_type == expr.record_type && Self::matches(r, expr))
            .map(|r| Self::select_columns(r, &expr.columns))
            .collect();
        matched.sort_by_key(|r| r.id);
        Ok(matched)
    }

    fn execute(&self, request: &GenericRequest) -> Result<GenericResponse, StoreError> {
        match request.name.as_str() {
            QUERY_TO_TEXT => {
                let raw = request
                    .parameters
                    .get("query")
                    .cloned()
                    .ok_or_else(|| StoreError::InvalidQuery("missing query parameter".into()))?;
                let query: Query = serde_json::from_value(raw)
                    .map_err(|e| StoreError::InvalidQuery(e.to_string()))?;
                let text = serde_json::to_string_pretty(&query)
                    .map_err(|e| StoreError::Backend(e.to_string()))?;
                Ok(GenericResponse::new(QUERY_TO_TEXT)
                    .with_result("text", serde_json::Value::String(text)))
            }
            TEXT_QUERY => {
                // The in-memory store accepts the request shape but has no
                // parser for its own rendered query language.
                Ok(GenericResponse::new(TEXT_QUERY)
                    .with_result("records", serde_json::Value::Array(Vec::new())))
            }
            DELETE_CHANGE_HISTORY => Ok(GenericResponse::new(DELETE_CHANGE_HISTORY)),
            other => Err(StoreError::UnsupportedRequest(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
