// Tests for output formatting: capture written bytes through a shared
// buffer and check format/quiet behavior.

use super::*;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn new() -> Self {
        Self(Arc::new(Mutex::new(Vec::new())))
    }

    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn writer(format: OutputFormat, quiet: bool) -> (OutputWriter, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let writer = OutputWriter::with_writer(format, false, quiet, Box::new(buffer.clone()));
    (writer, buffer)
}

#[test]
fn success_writes_plain_text_in_human_mode() {
    let (mut out, buffer) = writer(OutputFormat::Human, false);
    out.success("Bindings written to /proj/out").unwrap();
    assert_eq!(buffer.contents(), "Bindings written to /proj/out\n");
}

#[test]
fn success_is_suppressed_in_quiet_mode() {
    let (mut out, buffer) = writer(OutputFormat::Human, true);
    out.success("Bindings written to /proj/out").unwrap();
    assert_eq!(buffer.contents(), "");
}

#[test]
fn human_messages_are_suppressed_in_json_mode() {
    let (mut out, buffer) = writer(OutputFormat::Json, false);
    out.info("resolving layout").unwrap();
    out.success("done").unwrap();
    assert_eq!(buffer.contents(), "");
}

#[test]
fn data_serializes_the_value() {
    #[derive(serde::Serialize)]
    struct Report {
        platform: &'static str,
    }

    let (mut out, buffer) = writer(OutputFormat::Json, false);
    out.data(&Report { platform: "linux" }).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
    assert_eq!(parsed["platform"], "linux");
}

#[test]
fn spinner_is_disabled_with_custom_writers() {
    let (out, _buffer) = writer(OutputFormat::Human, false);
    assert!(out.spinner("Generating bindings...").is_none());
}
