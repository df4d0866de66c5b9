// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn writes_one_line_per_call() {
    let channel = WriterChannel::new(Vec::new());
    channel.write_line("first");
    channel.write_line("second");

    let written = String::from_utf8(channel.into_inner()).unwrap();
    assert_eq!(written, "first\nsecond\n");
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("broken pipe"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn swallows_writer_failures() {
    let channel = WriterChannel::new(FailingWriter);
    // Must not panic or surface the error.
    channel.write_line("dropped");
}
