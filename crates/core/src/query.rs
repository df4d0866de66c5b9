// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured queries against the record store

use crate::value::AttributeValue;
use serde::{Deserialize, Serialize};

/// Which columns a retrieval should bring back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnSelector {
    All,
    Columns(Vec<String>),
}

impl ColumnSelector {
    pub fn columns(names: &[&str]) -> Self {
        ColumnSelector::Columns(names.iter().map(|s| s.to_string()).collect())
    }

    /// Number of explicitly selected columns; 0 for `All`.
    pub fn len(&self) -> usize {
        match self {
            ColumnSelector::All => 0,
            ColumnSelector::Columns(cols) => cols.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Equal,
    NotEqual,
}

/// A single attribute condition, combined with AND semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub attribute: String,
    pub operator: Operator,
    pub value: AttributeValue,
}

impl Condition {
    pub fn equal(attribute: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self {
            attribute: attribute.into(),
            operator: Operator::Equal,
            value: value.into(),
        }
    }

    pub fn not_equal(attribute: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self {
            attribute: attribute.into(),
            operator: Operator::NotEqual,
            value: value.into(),
        }
    }
}

/// A structured query over one record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryExpression {
    pub record_type: String,
    pub columns: ColumnSelector,
    pub conditions: Vec<Condition>,
    /// Hint that the store may read without locking.
    pub no_lock: bool,
}

impl QueryExpression {
    pub fn new(record_type: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            columns: ColumnSelector::All,
            conditions: Vec::new(),
            no_lock: false,
        }
    }

    pub fn select(mut self, columns: ColumnSelector) -> Self {
        self.columns = columns;
        self
    }

    pub fn filter(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn no_lock(mut self) -> Self {
        self.no_lock = true;
        self
    }
}

/// A batch-retrieval query: structured, or raw text in the store's own
/// query language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Query {
    Expression(QueryExpression),
    Text(String),
}

impl Query {
    /// Record type targeted by the query, for compact trace lines.
    pub fn target_type(&self) -> &str {
        match self {
            Query::Expression(expr) => &expr.record_type,
            Query::Text(_) => "text",
        }
    }
}

impl From<QueryExpression> for Query {
    fn from(expr: QueryExpression) -> Self {
        Query::Expression(expr)
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
