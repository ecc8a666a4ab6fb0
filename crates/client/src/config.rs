//! Backend selection from environment variables.

use std::sync::Arc;

use crate::backend::CustomerBackend;
use crate::rest::RestBackend;
use crate::sharepoint::SharePointBackend;

/// Which backend shape to talk to, and where it lives.
///
/// The sync core never sees this: it receives the finished adapter and
/// stays agnostic to column names and override headers.
#[derive(Debug, Clone)]
pub enum BackendConfig {
    /// Generic REST customers API.
    Rest {
        /// Collection URL, e.g. `https://host/api/customers`.
        api_url: String,
    },
    /// SharePoint list API.
    SharePoint {
        /// Site collection URL.
        site_url: String,
        /// Display title of the customer list.
        list_title: String,
    },
}

impl BackendConfig {
    /// Load the backend selection from environment variables.
    ///
    /// | Env Var               | Default                            |
    /// |-----------------------|------------------------------------|
    /// | `CUSTOMER_BACKEND`    | `rest`                             |
    /// | `CUSTOMER_API_URL`    | `http://localhost:3000/customers`  |
    /// | `SHAREPOINT_SITE_URL` | required for `sharepoint`          |
    /// | `SHAREPOINT_LIST`     | `Customers`                        |
    pub fn from_env() -> Self {
        let kind = std::env::var("CUSTOMER_BACKEND").unwrap_or_else(|_| "rest".into());

        match kind.as_str() {
            "rest" => Self::Rest {
                api_url: std::env::var("CUSTOMER_API_URL")
                    .unwrap_or_else(|_| "http://localhost:3000/customers".into()),
            },
            "sharepoint" => Self::SharePoint {
                site_url: std::env::var("SHAREPOINT_SITE_URL")
                    .expect("SHAREPOINT_SITE_URL must be set for the sharepoint backend"),
                list_title: std::env::var("SHAREPOINT_LIST")
                    .unwrap_or_else(|_| "Customers".into()),
            },
            other => panic!("CUSTOMER_BACKEND must be 'rest' or 'sharepoint', got '{other}'"),
        }
    }

    /// Build the configured adapter.
    pub fn into_backend(self) -> Arc<dyn CustomerBackend> {
        match self {
            Self::Rest { api_url } => Arc::new(RestBackend::new(api_url)),
            Self::SharePoint {
                site_url,
                list_title,
            } => Arc::new(SharePointBackend::new(site_url, list_title)),
        }
    }
}
