use std::net::SocketAddr;

use axum::{
    extract::Path,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Upper bound for `/bytes/{n}` so a typo cannot allocate gigabytes.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub const MISLABELED_GZIP_BODY: &str = "this is not gzip at all";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/status/{code}", get(respond_with_status))
        .route("/bytes/{n}", get(respond_with_bytes))
        .route("/redirect", get(redirect))
        .route("/mislabeled-gzip", get(mislabeled_gzip))
        .route("/identity-only", get(identity_only))
        .route("/api/health/status", get(health))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve `app()` on an ephemeral loopback port from a background thread.
///
/// The listener is bound before this returns, so callers can connect to the
/// returned address immediately.
pub fn spawn_on_ephemeral_port() -> Result<SocketAddr, std::io::Error> {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = std_listener.local_addr()?;
    std_listener.set_nonblocking(true)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    std::thread::spawn(move || {
        let served = runtime.block_on(async {
            let listener = TcpListener::from_std(std_listener)?;
            run(listener).await
        });
        if let Err(err) = served {
            tracing::error!(%addr, error = %err, "mock server stopped");
        }
    });

    Ok(addr)
}

async fn respond_with_status(Path(code): Path<u16>) -> Response {
    // Informational codes cannot terminate an exchange.
    let Some(status) = StatusCode::from_u16(code).ok().filter(|s| !s.is_informational()) else {
        return (StatusCode::BAD_REQUEST, "invalid status code\n").into_response();
    };
    if status == StatusCode::NO_CONTENT || status == StatusCode::NOT_MODIFIED {
        return status.into_response();
    }
    (status, format!("status {code}\n")).into_response()
}

async fn respond_with_bytes(Path(n): Path<usize>) -> Vec<u8> {
    vec![b'x'; n.min(MAX_BODY_BYTES)]
}

async fn redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/status/200")])
}

/// Claims gzip but sends plain text.
async fn mislabeled_gzip() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_ENCODING, "gzip")],
        MISLABELED_GZIP_BODY,
    )
}

/// `406` for any request that advertises an `accept-encoding`.
async fn identity_only(headers: HeaderMap) -> StatusCode {
    if headers.contains_key(header::ACCEPT_ENCODING) {
        StatusCode::NOT_ACCEPTABLE
    } else {
        StatusCode::OK
    }
}

async fn health() -> Json<HealthStatus> {
    tracing::info!("GET health status");
    Json(HealthStatus {
        status: "UP".to_string(),
    })
}
