//! Orders service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use lavanya::orders::{OrderId, OrderRecord, OrderStatus, Submitter};
use mockall::automock;
use serde_json::json;
use tracing::{info, warn};

use crate::{
    documents::{Document, DocumentStore, ORDERS_COLLECTION},
    domain::orders::errors::OrdersServiceError,
};

/// Orders kept as documents in the `orders` collection.
#[derive(Clone)]
pub struct DocumentOrdersService {
    store: Arc<dyn DocumentStore>,
}

impl DocumentOrdersService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn stored_orders(&self) -> Result<Vec<(String, OrderRecord)>, OrdersServiceError> {
        let documents = self.store.list_documents(ORDERS_COLLECTION).await?;

        let mut orders: Vec<_> = documents.into_iter().filter_map(decode).collect();

        orders.sort_by(|(_, a), (_, b)| b.created_at.cmp(&a.created_at));

        Ok(orders)
    }
}

impl Debug for DocumentOrdersService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("DocumentOrdersService").finish_non_exhaustive()
    }
}

fn decode(document: Document) -> Option<(String, OrderRecord)> {
    match serde_json::from_value::<OrderRecord>(document.data) {
        Ok(order) => Some((document.id, order)),
        Err(error) => {
            warn!(document_id = %document.id, "skipping undecodable order: {error}");

            None
        }
    }
}

#[async_trait]
impl OrdersService for DocumentOrdersService {
    #[tracing::instrument(
        name = "orders.service.create_order",
        skip(self, order),
        fields(order_id = %order.order_id),
        err
    )]
    async fn create_order(&self, order: &OrderRecord) -> Result<String, OrdersServiceError> {
        let data = serde_json::to_value(order)?;

        let document_id = self.store.add_document(ORDERS_COLLECTION, data).await?;

        info!(
            order_id = %order.order_id,
            document_id = %document_id,
            total = %order.total,
            "order stored"
        );

        Ok(document_id)
    }

    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let orders = self.stored_orders().await?;

        Ok(orders.into_iter().map(|(_, order)| order).collect())
    }

    async fn list_orders_for(&self, uid: &str) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let submitter = Submitter::User(uid.to_string());
        let orders = self.stored_orders().await?;

        Ok(orders
            .into_iter()
            .map(|(_, order)| order)
            .filter(|order| order.user_id == submitter)
            .collect())
    }

    #[tracing::instrument(
        name = "orders.service.update_status",
        skip(self, order_id, status),
        fields(order_id = %order_id, status = %status),
        err
    )]
    async fn update_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let (document_id, mut order) = self
            .stored_orders()
            .await?
            .into_iter()
            .find(|(_, order)| order.order_id == *order_id)
            .ok_or_else(|| OrdersServiceError::NotFound(order_id.clone()))?;

        let previous = order.status;

        order.transition(status)?;

        self.store
            .update_document(
                ORDERS_COLLECTION,
                &document_id,
                json!({ "status": order.status }),
            )
            .await?;

        info!(%order_id, from = %previous, to = %order.status, "order status updated");

        Ok(order)
    }
}

/// Placed orders and their fulfilment status.
#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Store a newly submitted order, returning the store's document id.
    async fn create_order(&self, order: &OrderRecord) -> Result<String, OrdersServiceError>;

    /// Retrieve all orders, newest first.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Retrieve the orders submitted by one user, newest first.
    async fn list_orders_for(&self, uid: &str) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Move an order to a new status.
    ///
    /// # Errors
    ///
    /// - [`OrdersServiceError::NotFound`]: no order has this id.
    /// - [`OrdersServiceError::InvalidTransition`]: the order cannot move to
    ///   `status` from where it is.
    async fn update_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError>;
}
