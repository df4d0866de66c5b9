//! Store proxy specs
//!
//! Verify the decorator's pre/post lines, elapsed-time reporting, and the
//! isolation of verbose diagnostics from the primary call.

use crate::prelude::*;
use quill_adapters::{BufferChannel, FakeStore, RecordStore, StoreError};
use quill_core::{FakeClock, Query, QueryExpression, Record};
use quill_harness::{StoreProxy, TraceSink};
use uuid::Uuid;

struct Fixture {
    fake: FakeStore,
    channel: BufferChannel,
    sink: TraceSink,
    proxy: StoreProxy<SlowStore, FakeClock>,
}

fn fixture(delay_ms: u64) -> Fixture {
    let fake = FakeStore::new();
    let clock = FakeClock::new();
    let channel = BufferChannel::new();
    let sink = TraceSink::with_channel(channel.clone());
    let proxy = StoreProxy::with_clock(
        SlowStore::new(fake.clone(), clock.clone(), delay_ms),
        sink.clone(),
        clock,
    );
    Fixture {
        fake,
        channel,
        sink,
        proxy,
    }
}

#[test]
fn create_reports_its_elapsed_time() {
    let f = fixture(5);
    let record = Record::new("account", Uuid::from_u128(1)).with("name", "Acme");
    f.proxy.create(&record).unwrap();

    let lines = bodies(&f.channel);
    assert_eq!(
        lines[1],
        format!("[quill] Create(account) {} (1 attributes)", record.id)
    );
    assert_eq!(lines[2], "[quill] Created in: 5 ms");
}

#[test]
fn failing_call_reports_elapsed_time_then_propagates() {
    let f = fixture(3);
    f.fake.fail_next(StoreError::Backend("down".into()));
    let record = Record::new("account", Uuid::from_u128(2));

    let err = f.proxy.create(&record).unwrap_err();
    assert!(matches!(err, StoreError::Backend(_)));
    assert!(f
        .channel
        .transcript()
        .contains("[quill] Create failed after 3 ms:"));
}

#[test]
fn verbose_query_rendering_failure_leaves_the_primary_call_intact() {
    let f = fixture(0);
    f.sink.set_verbose(true);
    f.fake.fail_request(quill_core::request::QUERY_TO_TEXT);
    f.fake.put_query_results(vec![Record::new("account", Uuid::from_u128(3))]);

    let query: Query = QueryExpression::new("account").into();
    let records = f.proxy.retrieve_multiple(&query).unwrap();
    assert_eq!(records.len(), 1);

    let transcript = f.channel.transcript();
    assert!(transcript.contains("(query rendering failed)"));
    assert!(transcript.contains("Retrieved 1 records in: 0 ms"));
}
