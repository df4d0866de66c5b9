// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use uuid::Uuid;

#[test]
fn integer_coerces_from_text() {
    assert_eq!(AttributeValue::Text("42".into()).as_integer(), Some(42));
    assert_eq!(AttributeValue::Text(" 7 ".into()).as_integer(), Some(7));
    assert_eq!(AttributeValue::Text("nope".into()).as_integer(), None);
}

#[test]
fn integer_coerces_from_choice() {
    assert_eq!(AttributeValue::Choice(3).as_integer(), Some(3));
}

#[test]
fn decimal_coerces_from_integer_and_text() {
    assert_eq!(AttributeValue::Integer(2).as_decimal(), Some(2.0));
    assert_eq!(AttributeValue::Text("2.5".into()).as_decimal(), Some(2.5));
}

#[test]
fn boolean_coerces_from_text() {
    assert_eq!(AttributeValue::Text("true".into()).as_boolean(), Some(true));
    assert_eq!(AttributeValue::Boolean(false).as_boolean(), Some(false));
    assert_eq!(AttributeValue::Integer(1).as_boolean(), None);
}

#[test]
fn choice_does_not_coerce_from_text() {
    assert_eq!(AttributeValue::Text("3".into()).as_choice(), None);
    assert_eq!(AttributeValue::Choice(3).as_choice(), Some(3));
}

#[test]
fn timestamp_parses_rfc3339_text() {
    let value = AttributeValue::Text("2026-03-01T12:00:00Z".into());
    let ts = value.as_timestamp().unwrap();
    assert_eq!(ts.to_rfc3339(), "2026-03-01T12:00:00+00:00");
}

#[test]
fn reference_accessor_returns_ref() {
    let r = RecordRef::new("account", Uuid::nil());
    let value = AttributeValue::Reference(r.clone());
    assert_eq!(value.as_reference(), Some(&r));
    assert_eq!(AttributeValue::Integer(1).as_reference(), None);
}

#[test]
fn display_is_stable_for_dumps() {
    assert_eq!(AttributeValue::Text("hi".into()).to_string(), "hi");
    assert_eq!(AttributeValue::Choice(5).to_string(), "choice(5)");
    assert_eq!(AttributeValue::Boolean(true).to_string(), "true");
}

#[test]
fn every_variant_has_a_textual_form() {
    let values = vec![
        AttributeValue::Text("t".into()),
        AttributeValue::Integer(1),
        AttributeValue::Decimal(1.5),
        AttributeValue::Boolean(true),
        AttributeValue::Choice(2),
        AttributeValue::Reference(RecordRef::new("contact", Uuid::nil())),
    ];
    for v in values {
        assert!(!v.as_text().is_empty());
    }
}
