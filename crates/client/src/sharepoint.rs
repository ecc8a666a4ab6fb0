//! SharePoint list adapter.
//!
//! Items live under `{site}/_api/web/lists/GetByTitle('{list}')/items` with
//! a fixed column mapping. All writes are POSTs carrying the unconditional
//! overwrite precondition (`IF-MATCH: *`); updates and deletes select their
//! verb through the `X-HTTP-Method` override header.

use serde::Deserialize;

use async_trait::async_trait;
use rigdesk_core::{Customer, CustomerFields, CustomerId};

use crate::backend::{check_status, parse_json, BackendError, CustomerBackend};

/// Columns the customer list stores, in `$select` order.
const SELECT_COLUMNS: &str = "Id,Title,field_1,field_2,field_3,field_4,field_5";

/// Plain-JSON content negotiation, so responses come back without the
/// OData metadata envelope.
const ACCEPT_NOMETADATA: &str = "application/json;odata=nometadata";

/// One raw list item, as the list API returns it.
///
/// Columns may be absent on sparsely filled items, so everything except the
/// id and title falls back to its default.
#[derive(Debug, Deserialize)]
pub(crate) struct ListItem {
    #[serde(rename = "Id")]
    id: CustomerId,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "field_1", default)]
    address: String,
    #[serde(rename = "field_2", default)]
    no_rigs: i64,
    #[serde(rename = "field_3", default)]
    no_jackups: i64,
    #[serde(rename = "field_4", default)]
    no_modus: i64,
    #[serde(rename = "field_5", default)]
    site_url: String,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    value: Vec<ListItem>,
}

impl ListItem {
    fn into_customer(self) -> Customer {
        Customer {
            id: self.id,
            fields: CustomerFields {
                name: self.title,
                address: self.address,
                no_rigs: self.no_rigs,
                no_jackups: self.no_jackups,
                no_modus: self.no_modus,
                site_url: self.site_url,
            },
        }
    }
}

/// Map draft fields onto the list's column names.
fn column_payload(fields: &CustomerFields) -> serde_json::Value {
    serde_json::json!({
        "Title": fields.name,
        "field_1": fields.address,
        "field_2": fields.no_rigs,
        "field_3": fields.no_jackups,
        "field_4": fields.no_modus,
        "field_5": fields.site_url,
    })
}

/// HTTP client for one SharePoint customer list.
pub struct SharePointBackend {
    client: reqwest::Client,
    site_url: String,
    list_title: String,
}

impl SharePointBackend {
    /// Create a new adapter for the given site and list.
    ///
    /// * `site_url`   - site collection URL, e.g. `https://tenant.example/sites/ops`.
    /// * `list_title` - display title of the customer list.
    pub fn new(site_url: String, list_title: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            site_url,
            list_title,
        }
    }

    /// Create an adapter reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, site_url: String, list_title: String) -> Self {
        Self {
            client,
            site_url,
            list_title,
        }
    }

    fn items_url(&self) -> String {
        format!(
            "{}/_api/web/lists/GetByTitle('{}')/items",
            self.site_url, self.list_title
        )
    }

    fn item_url(&self, id: CustomerId) -> String {
        format!("{}({})", self.items_url(), id)
    }
}

#[async_trait]
impl CustomerBackend for SharePointBackend {
    async fn fetch_all(&self) -> Result<Vec<Customer>, BackendError> {
        let url = format!("{}?$select={}", self.items_url(), SELECT_COLUMNS);
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, ACCEPT_NOMETADATA)
            .send()
            .await?;
        let list: ListResponse = parse_json(response).await?;
        Ok(list.value.into_iter().map(ListItem::into_customer).collect())
    }

    async fn create(&self, fields: &CustomerFields) -> Result<CustomerId, BackendError> {
        let response = self
            .client
            .post(self.items_url())
            .header(reqwest::header::ACCEPT, ACCEPT_NOMETADATA)
            .json(&column_payload(fields))
            .send()
            .await?;
        let item: ListItem = parse_json(response).await?;
        Ok(item.id)
    }

    async fn update(&self, id: CustomerId, fields: &CustomerFields) -> Result<(), BackendError> {
        let response = self
            .client
            .post(self.item_url(id))
            .header("IF-MATCH", "*")
            .header("X-HTTP-Method", "MERGE")
            .json(&column_payload(fields))
            .send()
            .await?;
        check_status(response).await
    }

    async fn delete(&self, id: CustomerId) -> Result<(), BackendError> {
        let response = self
            .client
            .post(self.item_url(id))
            .header("IF-MATCH", "*")
            .header("X-HTTP-Method", "DELETE")
            .send()
            .await?;
        check_status(response).await
    }
}
