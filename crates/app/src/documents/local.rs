//! Document store kept in local JSON files.
//!
//! Used when no hosted store is configured. Each collection is a file holding
//! a JSON array of documents in insertion order.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use serde_json::Value;
use tokio::{fs, sync::Mutex};
use uuid::Uuid;

use crate::documents::{Document, DocumentStore, DocumentStoreError};

/// Document store kept as one JSON file per collection.
#[derive(Debug)]
pub struct LocalDocumentStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl LocalDocumentStore {
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store a document under a fixed id, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns an error when the collection file cannot be read or written.
    pub async fn put_document(
        &self,
        collection: &str,
        id: &str,
        data: Value,
    ) -> Result<(), DocumentStoreError> {
        let _guard = self.write_lock.lock().await;

        let mut documents = self.read_collection(collection).await?;

        documents.retain(|document| document.id != id);
        documents.push(Document {
            id: id.to_string(),
            data,
        });

        self.write_collection(collection, &documents).await
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{collection}.json"))
    }

    async fn read_collection(&self, collection: &str) -> Result<Vec<Document>, DocumentStoreError> {
        match fs::read(self.collection_path(collection)).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(error) => Err(error.into()),
        }
    }

    async fn write_collection(
        &self,
        collection: &str,
        documents: &[Document],
    ) -> Result<(), DocumentStoreError> {
        fs::create_dir_all(&self.dir).await?;

        let path = self.collection_path(collection);
        let staging = path.with_extension("json.tmp");

        fs::write(&staging, serde_json::to_vec_pretty(documents)?).await?;
        fs::rename(&staging, &path).await?;

        Ok(())
    }
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn add_document(
        &self,
        collection: &str,
        data: Value,
    ) -> Result<String, DocumentStoreError> {
        if !data.is_object() {
            return Err(DocumentStoreError::NotAnObject);
        }

        let _guard = self.write_lock.lock().await;

        let mut documents = self.read_collection(collection).await?;
        let id = Uuid::now_v7().simple().to_string();

        documents.push(Document {
            id: id.clone(),
            data,
        });

        self.write_collection(collection, &documents).await?;

        Ok(id)
    }

    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError> {
        let documents = self.read_collection(collection).await?;

        Ok(documents.into_iter().find(|document| document.id == id))
    }

    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, DocumentStoreError> {
        self.read_collection(collection).await
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        patch: Value,
    ) -> Result<(), DocumentStoreError> {
        let Value::Object(patch) = patch else {
            return Err(DocumentStoreError::NotAnObject);
        };

        let _guard = self.write_lock.lock().await;

        let mut documents = self.read_collection(collection).await?;

        let document = documents
            .iter_mut()
            .find(|document| document.id == id)
            .ok_or_else(|| DocumentStoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        let Value::Object(fields) = &mut document.data else {
            return Err(DocumentStoreError::NotAnObject);
        };

        fields.extend(patch);

        self.write_collection(collection, &documents).await
    }
}
