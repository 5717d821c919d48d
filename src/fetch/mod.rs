//! One-shot catalog fetch.
//!
//! The screen issues exactly one GET on startup. The outcome (payload or a
//! display message) is delivered to the event loop as a single [`AppEvent`],
//! after which the fetch state machine is terminal.

use std::sync::mpsc::Sender;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::catalog::{Book, CatalogResponse};
use crate::shutdown::ShutdownHandle;
use crate::ui::events::AppEvent;

/// Errors that can occur while loading the catalog.
///
/// The screen does not distinguish them beyond their display message; all
/// three surface as the error view.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[error("Request failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },

    #[error("Server returned {status}")]
    Status { status: reqwest::StatusCode },

    #[error("Malformed catalog payload: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

/// Build the catalog client with the configured connect timeout.
///
/// No retries and no overall request deadline; anything past the connect
/// timeout relies on whatever the transport enforces.
pub fn build_client(connect_timeout: Duration) -> Result<Client, FetchError> {
    Client::builder()
        .connect_timeout(connect_timeout)
        .build()
        .map_err(|source| FetchError::Client { source })
}

/// Fetch the full catalog from `url`.
///
/// A 2xx response is parsed as `{ "data": [Book...] }` and unwrapped to the
/// inner sequence. Non-2xx statuses and malformed bodies are errors.
pub async fn fetch_catalog(client: &Client, url: &str) -> Result<Vec<Book>, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Request { source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { status });
    }

    let payload: CatalogResponse = response
        .json()
        .await
        .map_err(|source| FetchError::Decode { source })?;

    Ok(payload.data)
}

/// Run the one-shot fetch on the runtime and deliver its outcome.
///
/// If the UI tore down before completion (shutdown signaled or the event
/// receiver gone), the result is dropped instead of delivered.
pub fn spawn_fetch(
    handle: &tokio::runtime::Handle,
    url: String,
    connect_timeout: Duration,
    events: Sender<AppEvent>,
    shutdown: ShutdownHandle,
) {
    handle.spawn(async move {
        let outcome = match build_client(connect_timeout) {
            Ok(client) => fetch_catalog(&client, &url).await,
            Err(err) => Err(err),
        };

        if shutdown.is_shutting_down() {
            tracing::debug!("fetch finished after teardown, discarding result");
            return;
        }

        let event = match outcome {
            Ok(books) => {
                tracing::info!(count = books.len(), %url, "catalog loaded");
                AppEvent::CatalogLoaded(books)
            }
            Err(err) => {
                tracing::warn!(%url, error = %err, "catalog fetch failed");
                AppEvent::CatalogFailed(err.to_string())
            }
        };

        // Send fails only when the receiver is gone, which is teardown.
        let _ = events.send(event);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_code_in_message() {
        let err = FetchError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "Server returned 404 Not Found");
    }

    #[test]
    fn client_builds_with_timeout() {
        assert!(build_client(Duration::from_secs(5)).is_ok());
    }
}
