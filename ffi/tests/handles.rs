//! Handle accounting seen through the C ABI. One test per binary so no other
//! test holds a handle while the counter is compared.

use std::ffi::CString;

use status_ffi::{status_get, status_open_handles};

#[test]
fn open_handles_returns_to_baseline() {
    let addr = mock_server::spawn_on_ephemeral_port().unwrap();
    let ok = CString::new(format!("http://{addr}/status/200")).unwrap();
    let bad = CString::new("http://example.invalid/").unwrap();
    let baseline = status_open_handles();

    for _ in 0..20 {
        assert_eq!(status_get(ok.as_ptr()), 200);
        assert_eq!(status_open_handles(), baseline);
    }

    assert_eq!(status_get(bad.as_ptr()), 0);
    assert_eq!(status_open_handles(), baseline);
}
