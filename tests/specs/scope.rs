//! Execution scope specs
//!
//! Verify the full unit-of-work lifecycle: context logging, blocks around
//! store work, and the teardown transcript.

use crate::prelude::*;
use quill_adapters::{BufferChannel, FakeStore, RecordStore};
use quill_core::{FakeClock, Record};
use quill_harness::{ExecutionContext, ExecutionScope};
use similar_asserts::assert_eq;
use std::sync::Arc;
use uuid::Uuid;

#[test]
fn unit_of_work_produces_the_full_transcript() {
    let clock = FakeClock::new();
    let channel = BufferChannel::new();
    let scope = ExecutionScope::with_clock(
        FakeStore::new(),
        Some(Arc::new(channel.clone())),
        None,
        clock.clone(),
        false,
    );
    let id = Uuid::from_u128(1);
    scope.block_start("Work");
    scope.store().delete("account", id).unwrap();
    scope.block_end();
    clock.advance_ms(12);
    drop(scope);

    let expected = [
        "*** Enter".to_string(),
        "BEGIN Work".to_string(),
        format!("  [quill] Delete(account, {id})"),
        "  [quill] Deleted in: 0 ms".to_string(),
        "END Work".to_string(),
        "[quill] Internal execution time: 12 ms".to_string(),
        "*** Exit".to_string(),
    ];
    assert_eq!(bodies(&channel).join("\n"), expected.join("\n"));
}

#[test]
fn host_invocation_logs_context_then_incoming_target() {
    let channel = BufferChannel::new();
    let id = Uuid::from_u128(2);
    let ctx = ExecutionContext::new("Update", "account", id)
        .with_target(Record::new("account", id).with("name", "New"))
        .with_pre_image(Record::new("account", id).with("name", "Old"));
    let _scope =
        ExecutionScope::with_context(FakeStore::new(), Some(Arc::new(channel.clone())), ctx);

    let transcript = channel.transcript();
    assert!(transcript.contains("[quill] Context details:"));
    assert!(transcript.contains("Msg:   Update"));
    assert!(transcript.contains("Incoming account\n  name: New (was: Old)"));
}

#[test]
fn run_traces_the_error_and_still_tears_down() {
    let channel = BufferChannel::new();
    let scope = ExecutionScope::new(FakeStore::new(), Some(Arc::new(channel.clone())));

    let err = scope
        .run(|s| -> Result<(), String> {
            s.block_start("Work");
            Err("boom".into())
        })
        .unwrap_err();
    assert_eq!(err, "boom");

    let transcript = channel.transcript();
    assert!(transcript.contains("[quill] *** Error ***\nboom"));
    // The open block is unwound by close, with the consistency warning.
    assert!(transcript.contains("Ending unended blocks"));
    assert!(transcript.contains("END Work"));
    assert!(transcript.contains("*** Exit"));
}

#[test]
fn disabled_scope_stays_silent_but_works() {
    let scope = ExecutionScope::new(FakeStore::new(), None);
    scope.trace("ignored", &[]);
    scope.block_start("Work");
    scope.store().delete("account", Uuid::from_u128(3)).unwrap();
    scope.block_end();
}
