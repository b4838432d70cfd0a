//! Shopify REST Admin API client for blog content.
//!
//! This crate talks to one store's Admin API on behalf of a private app
//! and moves blog content (blogs and their articles) between the store
//! and a local JSON export file.
//!
//! # Overview
//!
//! The main pieces are:
//!
//! - [`StoreCredentials`] / [`Session`]: an explicit authenticated session
//!   against `https://{shop}.myshopify.com/admin`. Sessions are plain
//!   values - there is no process-global "current site", so several
//!   stores can be addressed from one process.
//! - [`BlogStore`]: the four Admin API operations this tool consumes
//!   (list blogs, list a blog's articles, create blog, create article).
//!   Implemented by [`Session`]; tests substitute an in-memory store.
//! - [`export::export_blogs`]: fetch everything, write the JSON export.
//! - [`import::import_blogs`]: read the JSON export and reconcile it
//!   against the destination store by handle, creating only what is
//!   missing.
//!
//! # Example
//!
//! ```rust,ignore
//! use blog_portal_shopify::{Session, StoreCredentials, export, import};
//!
//! let credentials = StoreCredentials::new("my-store", "key", "password".into());
//! let session = Session::connect(&credentials)?;
//!
//! export::export_blogs(&session, "blog_export.json")?;
//! let summary = import::import_blogs(&session, "blog_export.json")?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod export;
pub mod import;
mod session;
mod store;
pub mod types;

pub use session::{Session, StoreCredentials};
pub use store::BlogStore;
pub use types::*;

#[cfg(test)]
pub(crate) mod testing;

use thiserror::Error;

/// Errors that can occur when talking to the Shopify Admin API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// HTTP request failed (connection error, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed (bad API key or password).
    #[error("Unauthorized: check the private app API key and password")]
    Unauthorized,

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The API rejected a create payload (e.g. duplicate handle).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success API response.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned by the API.
        message: String,
    },

    /// Failed to parse a response body.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The store name does not form a valid admin URL.
    #[error("Invalid store domain: {0}")]
    InvalidDomain(String),
}
