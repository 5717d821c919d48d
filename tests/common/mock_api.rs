//! Mock book API server for fetch tests.

#![allow(dead_code)]

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral port; returns the books endpoint URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api/books")
}

/// Router answering the books route with a fixed JSON value.
pub fn json_books(body: serde_json::Value) -> Router {
    Router::new().route(
        "/api/books",
        get(move || {
            let body = body.clone();
            async move { axum::Json(body) }
        }),
    )
}

/// Router answering the books route with a fixed status and raw body.
pub fn raw_books(status: StatusCode, body: &'static str) -> Router {
    Router::new().route(
        "/api/books",
        get(move || async move { (status, body).into_response() }),
    )
}
