//! Products service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use lavanya::catalog::{Categories, NewProduct, Product, filter_by_category};
use mockall::automock;
use tracing::{info, warn};

use crate::{
    clock::Clock,
    documents::{
        CATEGORIES_DOCUMENT, Document, DocumentStore, PRODUCTS_COLLECTION, SITE_CONFIG_COLLECTION,
    },
    domain::products::errors::ProductsServiceError,
};

/// Products kept as documents in the `products` collection.
#[derive(Clone)]
pub struct DocumentProductsService {
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
}

impl DocumentProductsService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

impl Debug for DocumentProductsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("DocumentProductsService").finish_non_exhaustive()
    }
}

fn decode(document: Document) -> Result<Product, serde_json::Error> {
    let mut product: Product = serde_json::from_value(document.data)?;

    product.id = document.id;

    Ok(product)
}

#[async_trait]
impl ProductsService for DocumentProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let documents = self.store.list_documents(PRODUCTS_COLLECTION).await?;

        Ok(documents
            .into_iter()
            .filter_map(|document| {
                let id = document.id.clone();

                decode(document)
                    .inspect_err(|error| {
                        warn!(product_id = %id, "skipping undecodable product: {error}");
                    })
                    .ok()
            })
            .collect())
    }

    async fn get_product(&self, id: &str) -> Result<Product, ProductsServiceError> {
        let document = self
            .store
            .get_document(PRODUCTS_COLLECTION, id)
            .await?
            .ok_or(ProductsServiceError::NotFound)?;

        Ok(decode(document)?)
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, ProductsServiceError> {
        let products = self.list_products().await?;

        Ok(filter_by_category(&products, Some(category))
            .cloned()
            .collect())
    }

    #[tracing::instrument(
        name = "products.service.add_product",
        skip(self, product),
        fields(name = %product.name, category = %product.category),
        err
    )]
    async fn add_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let mut product = product.into_product(self.clock.now())?;

        let data = serde_json::to_value(&product)?;

        product.id = self.store.add_document(PRODUCTS_COLLECTION, data).await?;

        info!(product_id = %product.id, name = %product.name, "product added");

        Ok(product)
    }

    async fn list_categories(&self) -> Result<Categories, ProductsServiceError> {
        let Some(document) = self
            .store
            .get_document(SITE_CONFIG_COLLECTION, CATEGORIES_DOCUMENT)
            .await?
        else {
            return Ok(Categories::default());
        };

        let categories: Categories = serde_json::from_value(document.data)?;

        if categories.names.is_empty() {
            return Ok(Categories::default());
        }

        Ok(categories)
    }
}

/// Product catalog and categories.
#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::NotFound`] for an unknown id.
    async fn get_product(&self, id: &str) -> Result<Product, ProductsServiceError>;

    /// Retrieves products of one category; `"All"` matches every product.
    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, ProductsServiceError>;

    /// Validates and stores a new product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::Invalid`] when the form fails validation.
    async fn add_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Category list from site configuration, or the defaults when unset.
    async fn list_categories(&self) -> Result<Categories, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use lavanya::catalog::{DEFAULT_CATEGORIES, ProductValidationError};
    use rust_decimal::Decimal;
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        clock::MockClock,
        documents::{LocalDocumentStore, MockDocumentStore},
        test::timestamp,
    };

    use super::*;

    fn clock() -> Arc<MockClock> {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .returning(|| timestamp(1_700_000_000_000));

        Arc::new(clock)
    }

    fn new_product(name: &str, category: &str, price: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price: Decimal::from(price),
            category: category.to_string(),
            description: "Long-wear finish".to_string(),
            image: "https://img.example/p.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn added_products_can_be_fetched() -> TestResult {
        let dir = tempfile::tempdir()?;
        let service =
            DocumentProductsService::new(Arc::new(LocalDocumentStore::new(dir.path())), clock());

        let added = service
            .add_product(new_product(" Matte Lipstick ", "Makeup", 450))
            .await?;

        let fetched = service.get_product(&added.id).await?;

        assert_eq!(fetched, added);
        assert_eq!(fetched.name, "Matte Lipstick");
        assert_eq!(fetched.created_at, Some(timestamp(1_700_000_000_000)));

        Ok(())
    }

    #[tokio::test]
    async fn invalid_products_are_not_stored() -> TestResult {
        let mut store = MockDocumentStore::new();
        store.expect_add_document().never();

        let service = DocumentProductsService::new(Arc::new(store), clock());

        let result = service.add_product(new_product("Toner", "Skin", -1)).await;

        assert!(
            matches!(
                result,
                Err(ProductsServiceError::Invalid(
                    ProductValidationError::NegativePrice
                ))
            ),
            "expected NegativePrice, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn category_filter_ignores_case_and_all_matches_everything() -> TestResult {
        let dir = tempfile::tempdir()?;
        let service =
            DocumentProductsService::new(Arc::new(LocalDocumentStore::new(dir.path())), clock());

        service
            .add_product(new_product("Matte Lipstick", "Makeup", 450))
            .await?;
        service
            .add_product(new_product("Rose Toner", "Skin", 120))
            .await?;

        let skin = service.list_by_category("skin").await?;
        let all = service.list_by_category("All").await?;

        assert_eq!(
            skin.iter().map(|product| product.name.as_str()).collect::<Vec<_>>(),
            ["Rose Toner"]
        );
        assert_eq!(all.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() -> TestResult {
        let dir = tempfile::tempdir()?;
        let service =
            DocumentProductsService::new(Arc::new(LocalDocumentStore::new(dir.path())), clock());

        let result = service.get_product("missing").await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn categories_default_when_unset() -> TestResult {
        let dir = tempfile::tempdir()?;
        let service =
            DocumentProductsService::new(Arc::new(LocalDocumentStore::new(dir.path())), clock());

        let categories = service.list_categories().await?;

        assert_eq!(categories.names, DEFAULT_CATEGORIES);

        Ok(())
    }

    #[tokio::test]
    async fn categories_come_from_site_config() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = LocalDocumentStore::new(dir.path());
        store
            .put_document(
                SITE_CONFIG_COLLECTION,
                CATEGORIES_DOCUMENT,
                json!({"list": ["Makeup", "Fragrance"]}),
            )
            .await?;

        let service = DocumentProductsService::new(Arc::new(store), clock());

        let categories = service.list_categories().await?;

        assert_eq!(categories.names, ["Makeup", "Fragrance"]);

        Ok(())
    }
}
