//! Trace sink specs
//!
//! Verify the transcript shape: markers, timestamps, block indentation,
//! and the forced unwind on close.

use crate::prelude::*;
use quill_adapters::BufferChannel;
use quill_harness::TraceSink;
use similar_asserts::assert_eq;

#[test]
fn nested_blocks_round_trip_in_order() {
    let channel = BufferChannel::new();
    let sink = TraceSink::with_channel(channel.clone());
    sink.block_begin("outer");
    sink.block_begin("inner");
    sink.trace("x", &[]);
    sink.block_end();
    sink.trace("y", &[]);
    sink.block_end();
    sink.close();

    let expected = [
        "*** Enter",
        "BEGIN outer",
        "  BEGIN inner",
        "    x",
        "  END inner",
        "  y",
        "END outer",
        "*** Exit",
    ];
    assert_eq!(bodies(&channel).join("\n"), expected.join("\n"));
}

#[test]
fn transcript_opens_with_a_date_line() {
    let channel = BufferChannel::new();
    let sink = TraceSink::with_channel(channel.clone());
    sink.close();

    let lines = channel.lines();
    // YYYY-MM-DD, unstamped.
    assert_eq!(lines[0].len(), 10);
    assert!(!lines[0].contains('\t'));
}

#[test]
fn stamped_lines_carry_a_millisecond_timestamp() {
    let channel = BufferChannel::new();
    let sink = TraceSink::with_channel(channel.clone());
    sink.trace("hello", &[]);
    sink.close();

    for line in channel.lines().iter().skip(1) {
        let (stamp, _) = line.split_once('\t').unwrap();
        // HH:MM:SS.mmm
        assert_eq!(stamp.len(), 12);
        assert_eq!(&stamp[2..3], ":");
        assert_eq!(&stamp[8..9], ".");
    }
}

#[test]
fn closing_with_open_blocks_warns_and_unwinds_lifo() {
    let channel = BufferChannel::new();
    let sink = TraceSink::with_channel(channel.clone());
    sink.block_begin("a");
    sink.block_begin("b");
    sink.close();

    let expected = [
        "*** Enter",
        "BEGIN a",
        "  BEGIN b",
        "[TraceSink] Ending unended blocks - check code consistency!",
        "  END b",
        "END a",
        "*** Exit",
    ];
    assert_eq!(bodies(&channel).join("\n"), expected.join("\n"));
}

#[test]
fn positional_formatting_with_mismatch_fallback() {
    let channel = BufferChannel::new();
    let sink = TraceSink::with_channel(channel.clone());
    sink.trace("found {0} of {1}", &[&3, &10]);
    sink.trace("found {0}", &[&3, &10]);
    sink.close();

    let lines = bodies(&channel);
    assert_eq!(lines[1], "found 3 of 10");
    assert_eq!(lines[2], "found {0}\nTrace Parameters:\n 3\n 10");
}
