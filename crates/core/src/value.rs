// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed attribute values with lenient coercion accessors

use crate::record::RecordRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single attribute value on a record.
///
/// The `as_*` accessors coerce leniently: numeric values parse from text,
/// choice values read back as integers, and anything renders as text. A
/// value that cannot be coerced yields `None` rather than an error, so
/// callers pick their own fallback with `unwrap_or`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
    /// Option-set / picklist value, identified by its numeric code.
    Choice(i32),
    Reference(RecordRef),
}

impl AttributeValue {
    /// Render as text. Every variant has a textual form.
    pub fn as_text(&self) -> String {
        self.to_string()
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(v) => Some(*v),
            AttributeValue::Choice(v) => Some(i64::from(*v)),
            AttributeValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            AttributeValue::Decimal(v) => Some(*v),
            AttributeValue::Integer(v) => Some(*v as f64),
            AttributeValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            AttributeValue::Boolean(v) => Some(*v),
            AttributeValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<i32> {
        match self {
            AttributeValue::Choice(v) => Some(*v),
            AttributeValue::Integer(v) => i32::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            AttributeValue::Timestamp(v) => Some(*v),
            AttributeValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&RecordRef> {
        match self {
            AttributeValue::Reference(r) => Some(r),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(s) => write!(f, "{s}"),
            AttributeValue::Integer(v) => write!(f, "{v}"),
            AttributeValue::Decimal(v) => write!(f, "{v}"),
            AttributeValue::Boolean(v) => write!(f, "{v}"),
            AttributeValue::Timestamp(v) => write!(f, "{}", v.to_rfc3339()),
            AttributeValue::Choice(v) => write!(f, "choice({v})"),
            AttributeValue::Reference(r) => write!(f, "{r}"),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Integer(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Boolean(v)
    }
}

impl From<RecordRef> for AttributeValue {
    fn from(r: RecordRef) -> Self {
        AttributeValue::Reference(r)
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
