//! C entry points against the live mock server.

use std::ffi::CString;
use std::net::SocketAddr;
use std::sync::OnceLock;

use status_ffi::{status_checker_free, status_checker_get, status_checker_new, status_get};

fn server() -> SocketAddr {
    static ADDR: OnceLock<SocketAddr> = OnceLock::new();
    *ADDR.get_or_init(|| mock_server::spawn_on_ephemeral_port().unwrap())
}

fn url(path: &str) -> CString {
    CString::new(format!("http://{}{path}", server())).unwrap()
}

#[test]
fn status_get_returns_204() {
    assert_eq!(status_get(url("/status/204").as_ptr()), 204);
}

#[test]
fn status_get_returns_404() {
    assert_eq!(status_get(url("/status/404").as_ptr()), 404);
}

#[test]
fn status_get_drains_body() {
    assert_eq!(status_get(url("/bytes/1048576").as_ptr()), 200);
}

#[test]
fn checker_handle_reused_across_calls() {
    let checker = status_checker_new();
    assert!(!checker.is_null());

    assert_eq!(status_checker_get(checker, url("/api/health/status").as_ptr()), 200);
    assert_eq!(status_checker_get(checker, url("/status/500").as_ptr()), 500);
    assert_eq!(status_checker_get(checker, url("/redirect").as_ptr()), 302);

    status_checker_free(checker);
}

#[test]
fn refused_connection_returns_zero() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = CString::new(format!("http://{addr}/")).unwrap();
    assert_eq!(status_get(url.as_ptr()), 0);
}
