//! Backend adapters for the customer directory.
//!
//! The sync core is agnostic to which backend shape it talks to: everything
//! wire-specific (column names, precondition headers, method overrides)
//! stays behind the [`CustomerBackend`] trait. Two adapters are provided,
//! a generic REST API ([`rest::RestBackend`]) and a SharePoint-style list
//! API ([`sharepoint::SharePointBackend`]), selected at configuration time
//! via [`config::BackendConfig`].

pub mod backend;
pub mod config;
pub mod rest;
pub mod sharepoint;

pub use backend::{BackendError, CustomerBackend};
pub use config::BackendConfig;
pub use rest::RestBackend;
pub use sharepoint::SharePointBackend;
