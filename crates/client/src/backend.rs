//! Backend adapter contract shared by the REST and SharePoint clients.

use async_trait::async_trait;

use rigdesk_core::{Customer, CustomerFields, CustomerId};

/// Errors from a backend adapter.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("Backend error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl BackendError {
    /// `true` when the failure was a 404 on the addressed resource.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Api { status, .. } => *status == 404,
            Self::Request(e) => e
                .status()
                .is_some_and(|s| s == reqwest::StatusCode::NOT_FOUND),
        }
    }
}

/// One customer backend, whatever wire shape it speaks.
///
/// `fetch_all` powers the initial load; the three writes each map to one
/// user action. Writes are unconditional overwrites with no concurrency
/// token beyond what the adapter sends on its own.
#[async_trait]
pub trait CustomerBackend: Send + Sync {
    /// Fetch the full collection.
    async fn fetch_all(&self) -> Result<Vec<Customer>, BackendError>;

    /// Create a record from the given fields; returns the server-assigned id.
    async fn create(&self, fields: &CustomerFields) -> Result<CustomerId, BackendError>;

    /// Overwrite the editable fields of the record with `id`.
    async fn update(&self, id: CustomerId, fields: &CustomerFields) -> Result<(), BackendError>;

    /// Delete the record with `id`.
    async fn delete(&self, id: CustomerId) -> Result<(), BackendError>;
}

// ---- shared response plumbing ----

/// Ensure the response has a success status code. Returns the response
/// unchanged on success, or a [`BackendError::Api`] containing the status
/// and body text on failure.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, BackendError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(BackendError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Parse a successful JSON response body into the expected type.
pub(crate) async fn parse_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, BackendError> {
    let response = ensure_success(response).await?;
    Ok(response.json::<T>().await?)
}

/// Assert the response has a success status code, discarding the body.
pub(crate) async fn check_status(response: reqwest::Response) -> Result<(), BackendError> {
    ensure_success(response).await?;
    Ok(())
}
