//! The failure diagnostic: exactly one line per failed call, none on success.

use std::io;
use std::sync::{Arc, Mutex};

use status_core::{get_status, STATUS_UNAVAILABLE};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn lines_containing(&self, needle: &str) -> usize {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .filter(|line| line.contains(needle))
            .count()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, Captured) {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .finish();
    let value = tracing::subscriber::with_default(subscriber, f);
    (value, captured)
}

#[test]
fn unresolvable_host_emits_one_diagnostic() {
    let (status, captured) = capture(|| get_status("http://example.invalid/"));

    assert_eq!(status, STATUS_UNAVAILABLE);
    assert_eq!(captured.lines_containing("get_status failed"), 1);
    assert_eq!(captured.lines_containing("example.invalid"), 1);
}

#[test]
fn malformed_url_emits_one_diagnostic() {
    let (status, captured) = capture(|| get_status("not a url"));

    assert_eq!(status, STATUS_UNAVAILABLE);
    assert_eq!(captured.lines_containing("get_status failed"), 1);
}

#[test]
fn success_emits_no_diagnostic() {
    let addr = mock_server::spawn_on_ephemeral_port().unwrap();
    let (status, captured) = capture(|| get_status(&format!("http://{addr}/status/204")));

    assert_eq!(status, 204);
    assert_eq!(captured.lines_containing("get_status failed"), 0);
}
