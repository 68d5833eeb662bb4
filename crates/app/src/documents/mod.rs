//! Document store
//!
//! The hosted backend exposes named collections of JSON documents. Products,
//! orders and site configuration all live there.

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use serde_json::Value;

mod errors;
mod http;
mod local;

pub use errors::DocumentStoreError;
pub use http::{HttpDocumentStore, HttpDocumentStoreConfig};
pub use local::LocalDocumentStore;

/// Product catalog collection.
pub const PRODUCTS_COLLECTION: &str = "products";

/// Placed orders collection.
pub const ORDERS_COLLECTION: &str = "orders";

/// Site configuration collection.
pub const SITE_CONFIG_COLLECTION: &str = "siteConfig";

/// Site configuration document holding the category list.
pub const CATEGORIES_DOCUMENT: &str = "categories";

/// A stored document and its generated identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier assigned by the store
    pub id: String,

    /// Document fields, always a JSON object
    pub data: Value,
}

/// Collections of JSON documents.
#[automock]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Append a document to a collection, returning its generated id.
    async fn add_document(&self, collection: &str, data: Value)
    -> Result<String, DocumentStoreError>;

    /// Fetch a single document.
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError>;

    /// Fetch every document of a collection.
    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, DocumentStoreError>;

    /// Merge top-level fields of `patch` into an existing document.
    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        patch: Value,
    ) -> Result<(), DocumentStoreError>;
}
