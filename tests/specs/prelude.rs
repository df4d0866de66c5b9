//! Shared helpers for the spec suite

use quill_adapters::{BufferChannel, FakeStore, RecordStore, StoreError};
use quill_core::{
    ColumnSelector, FakeClock, GenericRequest, GenericResponse, Query, Record, RecordRef,
};
use std::time::Duration;
use uuid::Uuid;

/// Message bodies after the leading date line, per-line timestamps
/// stripped; indentation and raw lines are preserved verbatim.
pub fn bodies(channel: &BufferChannel) -> Vec<String> {
    channel
        .lines()
        .iter()
        .skip(1)
        .map(|l| l.split_once('\t').map(|(_, b)| b).unwrap_or(l).to_string())
        .collect()
}

/// Store wrapper that advances a fake clock while serving each call, so
/// elapsed-time trace lines are deterministic.
#[derive(Clone)]
pub struct SlowStore {
    inner: FakeStore,
    clock: FakeClock,
    delay_ms: u64,
}

impl SlowStore {
    pub fn new(inner: FakeStore, clock: FakeClock, delay_ms: u64) -> Self {
        Self {
            inner,
            clock,
            delay_ms,
        }
    }

    fn tick(&self) {
        self.clock.advance(Duration::from_millis(self.delay_ms));
    }
}

impl RecordStore for SlowStore {
    fn create(&self, record: &Record) -> Result<Uuid, StoreError> {
        self.tick();
        self.inner.create(record)
    }

    fn update(&self, record: &Record) -> Result<(), StoreError> {
        self.tick();
        self.inner.update(record)
    }

    fn delete(&self, record_type: &str, id: Uuid) -> Result<(), StoreError> {
        self.tick();
        self.inner.delete(record_type, id)
    }

    fn associate(
        &self,
        record_type: &str,
        id: Uuid,
        relationship: &str,
        related: &[RecordRef],
    ) -> Result<(), StoreError> {
        self.tick();
        self.inner.associate(record_type, id, relationship, related)
    }

    fn disassociate(
        &self,
        record_type: &str,
        id: Uuid,
        relationship: &str,
        related: &[RecordRef],
    ) -> Result<(), StoreError> {
        self.tick();
        self.inner.disassociate(record_type, id, relationship, related)
    }

    fn retrieve(
        &self,
        record_type: &str,
        id: Uuid,
        columns: &ColumnSelector,
    ) -> Result<Record, StoreError> {
        self.tick();
        self.inner.retrieve(record_type, id, columns)
    }

    fn retrieve_multiple(&self, query: &Query) -> Result<Vec<Record>, StoreError> {
        self.tick();
        self.inner.retrieve_multiple(query)
    }

    fn execute(&self, request: &GenericRequest) -> Result<GenericResponse, StoreError> {
        self.tick();
        self.inner.execute(request)
    }
}
