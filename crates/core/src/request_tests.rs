// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::query::QueryExpression;

#[test]
fn text_query_carries_payload() {
    let request = GenericRequest::text_query("{\"record_type\":\"account\"}");
    assert_eq!(request.name, TEXT_QUERY);
    assert_eq!(request.text_payload(), Some("{\"record_type\":\"account\"}"));
}

#[test]
fn text_payload_is_none_for_other_requests() {
    let request = GenericRequest::new("Whoami")
        .with_parameter("query", serde_json::Value::String("x".into()));
    assert_eq!(request.text_payload(), None);
}

#[test]
fn query_to_text_embeds_the_query() {
    let query = QueryExpression::new("account").into();
    let request = GenericRequest::query_to_text(&query);

    assert_eq!(request.name, QUERY_TO_TEXT);
    let embedded: Query =
        serde_json::from_value(request.parameters.get("query").unwrap().clone()).unwrap();
    assert_eq!(embedded, query);
}

#[test]
fn delete_change_history_names_the_record() {
    let id = Uuid::new_v4();
    let request = GenericRequest::delete_change_history("account", id);

    assert_eq!(request.name, DELETE_CHANGE_HISTORY);
    assert_eq!(
        request.parameters.get("record_type"),
        Some(&serde_json::Value::String("account".into()))
    );
    assert_eq!(
        request.parameters.get("id"),
        Some(&serde_json::Value::String(id.to_string()))
    );
}

#[test]
fn response_text_accessor() {
    let response =
        GenericResponse::new(QUERY_TO_TEXT).with_result("text", serde_json::Value::String("q".into()));
    assert_eq!(response.text(), Some("q"));
    assert_eq!(GenericResponse::default().text(), None);
}
