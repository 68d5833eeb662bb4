//! REST client for the hosted document store.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::documents::{Document, DocumentStore, DocumentStoreError};

/// Configuration for connecting to the hosted document store.
#[derive(Debug, Clone)]
pub struct HttpDocumentStoreConfig {
    /// Base URL, e.g. `"https://store.example.com/v1"`.
    pub base_url: String,

    /// Bearer API key, when the store requires one.
    pub api_key: Option<String>,
}

/// HTTP client for the document store.
///
/// Collections map to `{base_url}/{collection}` and documents to
/// `{base_url}/{collection}/{id}`.
#[derive(Debug, Clone)]
pub struct HttpDocumentStore {
    config: HttpDocumentStoreConfig,
    http: Client,
}

impl HttpDocumentStore {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: HttpDocumentStoreConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Create a client around an existing `reqwest` client.
    #[must_use]
    pub fn with_client(config: HttpDocumentStoreConfig, http: Client) -> Self {
        Self { config, http }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{collection}", self.config.base_url.trim_end_matches('/'))
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{id}", self.collection_url(collection))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn add_document(
        &self,
        collection: &str,
        data: Value,
    ) -> Result<String, DocumentStoreError> {
        if !data.is_object() {
            return Err(DocumentStoreError::NotAnObject);
        }

        let response = self
            .authorize(self.http.post(self.collection_url(collection)))
            .json(&data)
            .send()
            .await?;

        let created: CreatedResponse = ensure_success(response, "add").await?.json().await?;

        Ok(created.id)
    }

    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError> {
        let response = self
            .authorize(self.http.get(self.document_url(collection, id)))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let document: Document = ensure_success(response, "get").await?.json().await?;

        Ok(Some(document))
    }

    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, DocumentStoreError> {
        let response = self
            .authorize(self.http.get(self.collection_url(collection)))
            .send()
            .await?;

        let listed: ListResponse = ensure_success(response, "list").await?.json().await?;

        Ok(listed.documents)
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        patch: Value,
    ) -> Result<(), DocumentStoreError> {
        if !patch.is_object() {
            return Err(DocumentStoreError::NotAnObject);
        }

        let response = self
            .authorize(self.http.patch(self.document_url(collection, id)))
            .json(&patch)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(DocumentStoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }

        ensure_success(response, "update").await?;

        Ok(())
    }
}

async fn ensure_success(response: Response, operation: &str) -> Result<Response, DocumentStoreError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    Err(DocumentStoreError::UnexpectedResponse(format!(
        "{operation} request failed with status {status}: {text}"
    )))
}

#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    documents: Vec<Document>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::test::StubServer;

    use super::*;

    fn store(base_url: &str) -> HttpDocumentStore {
        HttpDocumentStore::new(HttpDocumentStoreConfig {
            base_url: base_url.to_string(),
            api_key: None,
        })
    }

    #[test]
    fn urls_join_without_double_slashes() {
        let store = store("https://store.example.com/v1/");

        assert_eq!(
            store.collection_url("orders"),
            "https://store.example.com/v1/orders"
        );
        assert_eq!(
            store.document_url("siteConfig", "categories"),
            "https://store.example.com/v1/siteConfig/categories"
        );
    }

    #[tokio::test]
    async fn non_object_documents_are_rejected_before_sending() {
        let store = store("http://127.0.0.1:9");

        let result = store.add_document("orders", json!([1, 2, 3])).await;

        assert!(
            matches!(result, Err(DocumentStoreError::NotAnObject)),
            "expected NotAnObject, got {result:?}"
        );
    }

    #[test]
    fn list_response_tolerates_missing_documents() -> TestResult {
        let listed: ListResponse = serde_json::from_value(json!({}))?;

        assert!(listed.documents.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn add_returns_the_created_id() -> TestResult {
        let server = StubServer::respond("201 Created", r#"{"id":"order-1"}"#).await?;
        let store = HttpDocumentStore::new(HttpDocumentStoreConfig {
            base_url: server.base_url.clone(),
            api_key: Some("secret".to_string()),
        });

        let id = store.add_document("orders", json!({"total": 510})).await?;
        let request = server.request().await?;

        assert_eq!(id, "order-1");
        assert!(request.starts_with("POST /orders "), "unexpected request: {request}");
        assert!(
            request.to_ascii_lowercase().contains("authorization: bearer secret"),
            "missing bearer key: {request}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn missing_document_reads_as_none() -> TestResult {
        let server = StubServer::respond("404 Not Found", "").await?;

        let document = store(&server.base_url)
            .get_document("siteConfig", "categories")
            .await?;

        assert_eq!(document, None);
        assert!(
            server.request().await?.starts_with("GET /siteConfig/categories "),
            "unexpected request path"
        );

        Ok(())
    }

    #[tokio::test]
    async fn found_document_is_decoded() -> TestResult {
        let server = StubServer::respond(
            "200 OK",
            r#"{"id":"categories","data":{"list":["Makeup"]}}"#,
        )
        .await?;

        let document = store(&server.base_url)
            .get_document("siteConfig", "categories")
            .await?;

        assert_eq!(
            document,
            Some(Document {
                id: "categories".to_string(),
                data: json!({"list": ["Makeup"]}),
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_decodes_documents() -> TestResult {
        let server = StubServer::respond(
            "200 OK",
            r#"{"documents":[{"id":"a","data":{}},{"id":"b","data":{"n":1}}]}"#,
        )
        .await?;

        let documents = store(&server.base_url).list_documents("products").await?;

        assert_eq!(
            documents.iter().map(|document| document.id.as_str()).collect::<Vec<_>>(),
            ["a", "b"]
        );

        Ok(())
    }

    #[tokio::test]
    async fn patching_a_missing_document_is_not_found() -> TestResult {
        let server = StubServer::respond("404 Not Found", "").await?;

        let result = store(&server.base_url)
            .update_document("orders", "order-9", json!({"status": "Shipped"}))
            .await;

        assert!(
            matches!(
                &result,
                Err(DocumentStoreError::NotFound { collection, id })
                    if collection == "orders" && id == "order-9"
            ),
            "expected NotFound, got {result:?}"
        );
        assert!(
            server.request().await?.starts_with("PATCH /orders/order-9 "),
            "unexpected request path"
        );

        Ok(())
    }

    #[tokio::test]
    async fn server_errors_carry_status_and_body() -> TestResult {
        let server = StubServer::respond("500 Internal Server Error", "quota exceeded").await?;

        let result = store(&server.base_url).list_documents("orders").await;

        assert!(
            matches!(
                &result,
                Err(DocumentStoreError::UnexpectedResponse(message))
                    if message.contains("500") && message.contains("quota exceeded")
            ),
            "expected UnexpectedResponse, got {result:?}"
        );

        Ok(())
    }
}
