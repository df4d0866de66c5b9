// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Generic store requests and responses
//!
//! The store exposes a handful of operations outside the CRUD surface
//! through a single `execute` entry point. Requests are identified by name
//! and carry an open-shaped parameter map.

use crate::query::Query;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Run a raw query written in the store's textual query language.
pub const TEXT_QUERY: &str = "TextQuery";
/// Translate a structured query into its textual query-language form.
pub const QUERY_TO_TEXT: &str = "QueryToText";
/// Drop the audit/change history of one record.
pub const DELETE_CHANGE_HISTORY: &str = "DeleteChangeHistory";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericRequest {
    pub name: String,
    pub parameters: BTreeMap<String, serde_json::Value>,
}

impl GenericRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    /// A `TextQuery` request carrying a raw query-language payload.
    pub fn text_query(text: impl Into<String>) -> Self {
        GenericRequest::new(TEXT_QUERY)
            .with_parameter("query", serde_json::Value::String(text.into()))
    }

    /// A `QueryToText` request asking the store to render `query` in its
    /// textual query language.
    pub fn query_to_text(query: &Query) -> Self {
        let value = serde_json::to_value(query).unwrap_or(serde_json::Value::Null);
        GenericRequest::new(QUERY_TO_TEXT).with_parameter("query", value)
    }

    pub fn delete_change_history(record_type: impl Into<String>, id: Uuid) -> Self {
        GenericRequest::new(DELETE_CHANGE_HISTORY)
            .with_parameter("record_type", serde_json::Value::String(record_type.into()))
            .with_parameter("id", serde_json::Value::String(id.to_string()))
    }

    /// The raw query-language payload, when this request carries one.
    pub fn text_payload(&self) -> Option<&str> {
        if self.name != TEXT_QUERY {
            return None;
        }
        self.parameters.get("query").and_then(|v| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenericResponse {
    pub name: String,
    pub results: BTreeMap<String, serde_json::Value>,
}

impl GenericResponse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            results: BTreeMap::new(),
        }
    }

    pub fn with_result(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.results.insert(name.into(), value);
        self
    }

    /// The `text` result, for responses that carry a rendered query.
    pub fn text(&self) -> Option<&str> {
        self.results.get("text").and_then(|v| v.as_str())
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
