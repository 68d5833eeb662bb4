//! Carts service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use lavanya::{
    cart::Cart,
    items::{CartItem, ItemId, NewCartItem},
    pricing::Totals,
};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{domain::carts::errors::CartServiceError, storage::CartStore};

/// Acknowledgment returned after adding a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedItem {
    /// Id of the cart line
    pub id: ItemId,

    /// Product name
    pub name: String,

    /// Line quantity after the add
    pub quantity: u32,
}

impl AddedItem {
    /// Message shown to the shopper.
    pub fn message(&self) -> String {
        format!("{} added to cart!", self.name)
    }
}

/// Session cart kept in step with its persisted slot.
///
/// Every mutation is applied to a copy of the cart, written to the store and
/// only then adopted. A failed write leaves the in-memory cart as it was.
pub struct CartService {
    cart: Cart,
    store: Arc<dyn CartStore>,
}

impl CartService {
    /// Hydrate the cart from its store.
    ///
    /// A missing, unreadable or malformed slot yields an empty cart.
    pub fn load(store: Arc<dyn CartStore>) -> Self {
        let cart = match store.load() {
            Ok(Some(value)) => serde_json::from_str::<Cart>(&value).unwrap_or_else(|error| {
                warn!("discarding malformed stored cart: {error}");

                Cart::new()
            }),
            Ok(None) => Cart::new(),
            Err(error) => {
                warn!("failed to read stored cart: {error}");

                Cart::new()
            }
        };

        debug!(lines = cart.len(), "cart hydrated");

        Self { cart, store }
    }

    /// Current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current cart lines.
    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Sum of price times quantity.
    pub fn subtotal(&self) -> Decimal {
        self.cart.subtotal()
    }

    /// Subtotal, delivery charge and grand total.
    pub fn totals(&self, delivery_charge: Decimal) -> Totals {
        Totals::for_cart(&self.cart, delivery_charge)
    }

    /// Add one unit of a product.
    ///
    /// # Errors
    ///
    /// Returns an error when the updated cart cannot be persisted.
    pub fn add_item(&mut self, item: NewCartItem) -> Result<AddedItem, CartServiceError> {
        let mut next = self.cart.clone();
        let id = item.id.clone();
        let name = item.name.clone();

        let quantity = next.add_item(item);

        self.commit(next)?;

        Ok(AddedItem { id, name, quantity })
    }

    /// Remove a line. Returns whether a line was removed.
    ///
    /// # Errors
    ///
    /// Returns an error when the updated cart cannot be persisted.
    pub fn remove_item(&mut self, id: &ItemId) -> Result<bool, CartServiceError> {
        let mut next = self.cart.clone();

        let removed = next.remove_item(id);

        self.commit(next)?;

        Ok(removed)
    }

    /// Adjust a line's quantity by `delta`, never below one.
    ///
    /// Returns the new quantity, or `None` when the line does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error when the updated cart cannot be persisted.
    pub fn update_quantity(
        &mut self,
        id: &ItemId,
        delta: i32,
    ) -> Result<Option<u32>, CartServiceError> {
        let mut next = self.cart.clone();

        let quantity = next.update_quantity(id, delta);

        self.commit(next)?;

        Ok(quantity)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error when the empty cart cannot be persisted.
    pub fn clear(&mut self) -> Result<(), CartServiceError> {
        self.commit(Cart::new())
    }

    fn commit(&mut self, next: Cart) -> Result<(), CartServiceError> {
        let encoded = serde_json::to_string(&next)?;

        self.store.save(&encoded)?;

        self.cart = next;

        debug!(lines = self.cart.len(), "cart persisted");

        Ok(())
    }
}

impl Debug for CartService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CartService")
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}
