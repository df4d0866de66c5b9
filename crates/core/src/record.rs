// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Records, record references, and image-merge semantics

use crate::value::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// A lightweight pointer to a record: type, id, and an optional display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordRef {
    pub record_type: String,
    pub id: Uuid,
    pub name: Option<String>,
}

impl RecordRef {
    pub fn new(record_type: impl Into<String>, id: Uuid) -> Self {
        Self {
            record_type: record_type.into(),
            id,
            name: None,
        }
    }

    pub fn named(record_type: impl Into<String>, id: Uuid, name: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            id,
            name: Some(name.into()),
        }
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} {} {}", self.record_type, self.id, name),
            None => write!(f, "{} {}", self.record_type, self.id),
        }
    }
}

/// A typed record: the unit the store creates, updates, and retrieves.
///
/// Attributes are kept sorted so dumps and comparisons are deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub record_type: String,
    pub id: Uuid,
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl Record {
    pub fn new(record_type: impl Into<String>, id: Uuid) -> Self {
        Self {
            record_type: record_type.into(),
            id,
            attributes: BTreeMap::new(),
        }
    }

    /// Set an attribute, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Whether the record carries a value for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Look up `name` on this record, falling back to a prior image.
    ///
    /// This is the usual pattern for event payloads: the incoming record
    /// carries only changed attributes, the image carries the rest.
    pub fn value_or<'a>(&'a self, name: &str, prior: Option<&'a Record>) -> Option<&'a AttributeValue> {
        self.attributes
            .get(name)
            .or_else(|| prior.and_then(|p| p.attributes.get(name)))
    }

    pub fn text_or(&self, name: &str, prior: Option<&Record>) -> Option<String> {
        self.value_or(name, prior).map(AttributeValue::as_text)
    }

    pub fn integer_or(&self, name: &str, prior: Option<&Record>) -> Option<i64> {
        self.value_or(name, prior).and_then(AttributeValue::as_integer)
    }

    pub fn decimal_or(&self, name: &str, prior: Option<&Record>) -> Option<f64> {
        self.value_or(name, prior).and_then(AttributeValue::as_decimal)
    }

    pub fn boolean_or(&self, name: &str, prior: Option<&Record>) -> Option<bool> {
        self.value_or(name, prior).and_then(AttributeValue::as_boolean)
    }

    pub fn choice_or(&self, name: &str, prior: Option<&Record>) -> Option<i32> {
        self.value_or(name, prior).and_then(AttributeValue::as_choice)
    }

    pub fn reference_or<'a>(&'a self, name: &str, prior: Option<&'a Record>) -> Option<&'a RecordRef> {
        self.value_or(name, prior).and_then(AttributeValue::as_reference)
    }

    /// Id of a reference attribute, with image fallback.
    pub fn reference_id_or(&self, name: &str, prior: Option<&Record>) -> Option<Uuid> {
        self.reference_or(name, prior).map(|r| r.id)
    }

    /// Clone this record, filling in attributes it lacks from `other`.
    ///
    /// Merging a target with its post- and pre-images yields the complete
    /// view of the record as of the event.
    pub fn merge(&self, other: Option<&Record>) -> Record {
        let mut merged = self.clone();
        if let Some(other) = other {
            for (name, value) in &other.attributes {
                merged
                    .attributes
                    .entry(name.clone())
                    .or_insert_with(|| value.clone());
            }
        }
        merged
    }

    pub fn to_ref(&self) -> RecordRef {
        RecordRef::new(self.record_type.clone(), self.id)
    }

    /// Render attributes as newline-joined `name: value` pairs.
    ///
    /// When `prior` holds a different value for a name, the old value is
    /// appended as ` (was: ...)`. Used by verbose trace dumps.
    pub fn dump(&self, prior: Option<&Record>) -> String {
        let mut lines = Vec::with_capacity(self.attributes.len());
        for (name, value) in &self.attributes {
            let old = prior.and_then(|p| p.attributes.get(name));
            match old {
                Some(old) if old != value => {
                    lines.push(format!("  {name}: {value} (was: {old})"));
                }
                _ => lines.push(format!("  {name}: {value}")),
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
