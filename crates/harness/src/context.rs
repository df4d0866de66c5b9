// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Platform invocation context
//!
//! The host runtime hands an event to the harness together with a context:
//! which message fired, against which record, on behalf of whom, and with
//! which before/after images attached. The scope logs it at construction
//! and business logic reads it through the accessors here.

use quill_core::{Record, RecordRef};
use uuid::Uuid;

/// The record payload an event targets.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Record(Record),
    Reference(RecordRef),
}

/// Context of one host invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionContext {
    /// Message that fired (Create, Update, ...).
    pub message: String,
    /// Registered step name, when the host provides one.
    pub step: Option<String>,
    pub stage: i32,
    pub mode: i32,
    /// Nesting depth of this invocation within the host pipeline.
    pub depth: u32,
    pub correlation_id: Uuid,
    pub record_type: String,
    pub record_id: Uuid,
    pub user_id: Uuid,
    pub initiating_user_id: Uuid,
    pub target: Option<Target>,
    pub pre_image: Option<Record>,
    pub post_image: Option<Record>,
    pub parent: Option<Box<ExecutionContext>>,
}

impl ExecutionContext {
    pub fn new(message: impl Into<String>, record_type: impl Into<String>, record_id: Uuid) -> Self {
        Self {
            message: message.into(),
            step: None,
            stage: 0,
            mode: 0,
            depth: 1,
            correlation_id: Uuid::new_v4(),
            record_type: record_type.into(),
            record_id,
            user_id: Uuid::nil(),
            initiating_user_id: Uuid::nil(),
            target: None,
            pre_image: None,
            post_image: None,
            parent: None,
        }
    }

    pub fn with_target(mut self, record: Record) -> Self {
        self.target = Some(Target::Record(record));
        self
    }

    pub fn with_target_reference(mut self, reference: RecordRef) -> Self {
        self.target = Some(Target::Reference(reference));
        self
    }

    pub fn with_pre_image(mut self, record: Record) -> Self {
        self.pre_image = Some(record);
        self
    }

    pub fn with_post_image(mut self, record: Record) -> Self {
        self.post_image = Some(record);
        self
    }

    pub fn with_parent(mut self, parent: ExecutionContext) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// The target, when the event carries a full record.
    pub fn target_record(&self) -> Option<&Record> {
        match &self.target {
            Some(Target::Record(record)) => Some(record),
            _ => None,
        }
    }

    /// The target, when the event carries only a reference.
    pub fn target_reference(&self) -> Option<&RecordRef> {
        match &self.target {
            Some(Target::Reference(reference)) => Some(reference),
            _ => None,
        }
    }

    pub fn pre_image(&self) -> Option<&Record> {
        self.pre_image.as_ref()
    }

    pub fn post_image(&self) -> Option<&Record> {
        self.post_image.as_ref()
    }

    /// The complete view of the record: target attributes first, then the
    /// post-image's, then the pre-image's.
    pub fn complete_record(&self) -> Option<Record> {
        let target = self.target_record()?;
        Some(target.merge(self.post_image()).merge(self.pre_image()))
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
