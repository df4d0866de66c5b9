// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Instrumented store proxy
//!
//! A pure decorator over any [`RecordStore`]: every operation is announced
//! before the call, timed, and reported after it, success or failure. The
//! result or error passes through unmodified; the proxy never retries,
//! transforms, or suppresses anything.

use crate::sink::TraceSink;
use crate::APP_TAG;
use quill_adapters::{RecordStore, StoreError};
use quill_core::{
    Clock, ColumnSelector, GenericRequest, GenericResponse, Query, Record, RecordRef, SystemClock,
};
use uuid::Uuid;

/// Decorator implementing the full store contract with pre/post tracing.
///
/// Stateless apart from the wrapped store and the shared sink handle; the
/// verbose flag lives on the sink and gates the detailed argument and
/// result dumps, never the baseline pre/post lines.
#[derive(Clone)]
pub struct StoreProxy<S: RecordStore, C: Clock = SystemClock> {
    inner: S,
    sink: TraceSink,
    clock: C,
}

impl<S: RecordStore> StoreProxy<S> {
    pub fn new(inner: S, sink: TraceSink) -> Self {
        Self::with_clock(inner, sink, SystemClock)
    }
}

impl<S: RecordStore, C: Clock> StoreProxy<S, C> {
    pub fn with_clock(inner: S, sink: TraceSink, clock: C) -> Self {
        Self { inner, sink, clock }
    }

    /// The wrapped store, for callers that must bypass instrumentation.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn verbose(&self) -> bool {
        self.sink.verbose()
    }

    fn trace(&self, message: &str) {
        self.sink.trace(&format!("{APP_TAG} {message}"), &[]);
    }

    /// Around-call helper: time `call`, then write the post-call line.
    ///
    /// `describe` names the success ("Created", "Retrieved 3 records");
    /// `op` names the operation for the failure line. The post-call line is
    /// written before the result is handed back, so a failing call still
    /// reports its elapsed time.
    fn observe<T>(
        &self,
        op: &str,
        describe: impl FnOnce(&T) -> String,
        call: impl FnOnce(&S) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let start = self.clock.now();
        let result = call(&self.inner);
        let elapsed = self.clock.elapsed_ms(start);
        match &result {
            Ok(value) => self.trace(&format!("{} in: {elapsed} ms", describe(value))),
            Err(e) => self.trace(&format!("{op} failed after {elapsed} ms: {e}")),
        }
        result
    }

    fn dump_refs(&self, heading: &str, related: &[RecordRef]) {
        let refs: String = related.iter().map(|r| format!("\n  {r}")).collect();
        self.trace(&format!("{heading}:{refs}"));
    }
}

impl<S: RecordStore, C: Clock> RecordStore for StoreProxy<S, C> {
    fn create(&self, record: &Record) -> Result<Uuid, StoreError> {
        self.trace(&format!(
            "Create({}) {} ({} attributes)",
            record.record_type,
            record.id,
            record.attributes.len()
        ));
        if self.verbose() {
            self.trace(&format!("\n{}", record.dump(None)));
        }
        self.observe("Create", |_| "Created".to_string(), |s| s.create(record))
    }

    fn update(&self, record: &Record) -> Result<(), StoreError> {
        self.trace(&format!(
            "Update({}) {} ({} attributes)",
            record.record_type,
            record.id,
            record.attributes.len()
        ));
        if self.verbose() {
            self.trace(&format!("\n{}", record.dump(None)));
        }
        self.observe("Update", |_| "Updated".to_string(), |s| s.update(record))
    }

    fn delete(&self, record_type: &str, id: Uuid) -> Result<(), StoreError> {
        self.trace(&format!("Delete({record_type}, {id})"));
        self.observe("Delete", |_| "Deleted".to_string(), |s| {
            s.delete(record_type, id)
        })
    }

    fn associate(
        &self,
        record_type: &str,
        id: Uuid,
        relationship: &str,
        related: &[RecordRef],
    ) -> Result<(), StoreError> {
        self.trace(&format!(
            "Associate({record_type}, {id}, {relationship}, {})",
            related.len()
        ));
        if self.verbose() {
            self.dump_refs("Associated record(s)", related);
        }
        self.observe("Associate", |_| "Associated".to_string(), |s| {
            s.associate(record_type, id, relationship, related)
        })
    }

    fn disassociate(
        &self,
        record_type: &str,
        id: Uuid,
        relationship: &str,
        related: &[RecordRef],
    ) -> Result<(), StoreError> {
        self.trace(&format!(
            "Disassociate({record_type}, {id}, {relationship}, {})",
            related.len()
        ));
        if self.verbose() {
            self.dump_refs("Disassociated record(s)", related);
        }
        self.observe("Disassociate", |_| "Disassociated".to_string(), |s| {
            s.disassociate(record_type, id, relationship, related)
        })
    }

    fn retrieve(
        &self,
        record_type: &str,
        id: Uuid,
        columns: &ColumnSelector,
    ) -> Result<Record, StoreError> {
        self.trace(&format!("Retrieve({record_type}, {id}, {})", columns.len()));
        if self.verbose() {
            match columns {
                ColumnSelector::All => self.trace("Columns: all"),
                ColumnSelector::Columns(cols) => {
                    let list: String = cols.iter().map(|c| format!("\n  {c}")).collect();
                    self.trace(&format!("Columns:{list}"));
                }
            }
        }
        let result = self.observe("Retrieve", |_| "Retrieved".to_string(), |s| {
            s.retrieve(record_type, id, columns)
        });
        if self.verbose() {
            if let Ok(record) = &result {
                self.trace(&format!("Retrieved\n{}", record.dump(None)));
            }
        }
        result
    }

    fn retrieve_multiple(&self, query: &Query) -> Result<Vec<Record>, StoreError> {
        self.trace(&format!("RetrieveMultiple({})", query.target_type()));
        if self.verbose() {
            // Best-effort diagnostic: render the query in the store's own
            // textual form. Its failure must not touch the primary call.
            match self.inner.execute(&GenericRequest::query_to_text(query)) {
                Ok(response) => {
                    if let Some(text) = response.text() {
                        self.trace(&format!("Query: {text}"));
                    }
                }
                Err(e) => {
                    tracing::debug!(error = %e, "query rendering failed");
                    self.trace("(query rendering failed)");
                }
            }
        }
        self.observe(
            "RetrieveMultiple",
            |records: &Vec<Record>| format!("Retrieved {} records", records.len()),
            |s| s.retrieve_multiple(query),
        )
    }

    fn execute(&self, request: &GenericRequest) -> Result<GenericResponse, StoreError> {
        self.trace(&format!("Execute({})", request.name));
        if self.verbose() {
            // Raw payloads keep their own formatting.
            if let Some(text) = request.text_payload() {
                self.sink.trace_raw(text);
            }
        }
        let result = self.observe("Execute", |_| "Executed".to_string(), |s| s.execute(request));
        if self.verbose() {
            if let Ok(response) = &result {
                self.trace(&format!("Response: {} value(s)", response.results.len()));
            }
        }
        result
    }
}

#[cfg(test)]
#[path = "proxy_tests.rs"]
mod tests;
