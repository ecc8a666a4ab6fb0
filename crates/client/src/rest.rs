//! Generic REST adapter.
//!
//! Speaks the plain customers API: `GET {base}` returns the collection,
//! `POST {base}` creates from draft fields and echoes the assigned id,
//! `PUT {base}/{id}` overwrites a record, `DELETE {base}/{id}` removes it.

use serde::Deserialize;

use async_trait::async_trait;
use rigdesk_core::{Customer, CustomerFields, CustomerId};

use crate::backend::{check_status, parse_json, BackendError, CustomerBackend};

/// HTTP client for a generic customers API.
pub struct RestBackend {
    client: reqwest::Client,
    base_url: String,
}

/// Response returned by the create endpoint.
///
/// The body echoes the submitted fields alongside the assigned id; only
/// the id is needed to reconcile the local collection.
#[derive(Debug, Deserialize)]
struct CreateResponse {
    id: CustomerId,
}

impl RestBackend {
    /// Create a new adapter for the given collection URL.
    ///
    /// * `base_url` - collection endpoint, e.g. `https://host/api/customers`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create an adapter reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn record_url(&self, id: CustomerId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

#[async_trait]
impl CustomerBackend for RestBackend {
    async fn fetch_all(&self) -> Result<Vec<Customer>, BackendError> {
        let response = self.client.get(&self.base_url).send().await?;
        parse_json(response).await
    }

    async fn create(&self, fields: &CustomerFields) -> Result<CustomerId, BackendError> {
        let response = self.client.post(&self.base_url).json(fields).send().await?;
        let created: CreateResponse = parse_json(response).await?;
        Ok(created.id)
    }

    async fn update(&self, id: CustomerId, fields: &CustomerFields) -> Result<(), BackendError> {
        // The update body carries the full record, id included.
        let body = Customer {
            id,
            fields: fields.clone(),
        };
        let response = self
            .client
            .put(self.record_url(id))
            .json(&body)
            .send()
            .await?;
        check_status(response).await
    }

    async fn delete(&self, id: CustomerId) -> Result<(), BackendError> {
        let response = self.client.delete(self.record_url(id)).send().await?;
        check_status(response).await
    }
}
