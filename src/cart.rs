//! Cart

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::items::{CartItem, ItemId, NewCartItem};

/// Ordered collection of cart lines, keyed by item identifier.
///
/// Identifiers are unique within a cart and every line has a quantity of at
/// least one. Lines leave the cart only through [`Cart::remove_item`] or
/// [`Cart::clear`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from stored lines.
    ///
    /// Lines sharing an identifier are merged into the first occurrence and
    /// quantities below one are raised to one.
    pub fn with_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Self::new();

        for mut item in items {
            item.set_quantity(item.quantity());

            match cart.find_mut(&item.id) {
                Some(existing) => {
                    let merged = existing.quantity().saturating_add(item.quantity());
                    existing.set_quantity(merged);
                }
                None => cart.items.push(item),
            }
        }

        cart
    }

    /// Add one unit of a product, returning the line's new quantity.
    ///
    /// An existing line with the same identifier is incremented; otherwise the
    /// product is appended with a quantity of one.
    pub fn add_item(&mut self, item: NewCartItem) -> u32 {
        if let Some(existing) = self.find_mut(&item.id) {
            existing.set_quantity(existing.quantity().saturating_add(1));

            return existing.quantity();
        }

        self.items.push(CartItem::from(item));

        1
    }

    /// Remove the line with the given identifier. Returns whether a line was removed.
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();

        self.items.retain(|item| &item.id != id);

        self.items.len() != before
    }

    /// Adjust a line's quantity by `delta`, clamping at one.
    ///
    /// Returns the new quantity, or `None` when no line has the identifier.
    pub fn update_quantity(&mut self, id: &ItemId, delta: i32) -> Option<u32> {
        let item = self.find_mut(id)?;

        let adjusted = (i64::from(item.quantity()) + i64::from(delta)).max(1);

        item.set_quantity(u32::try_from(adjusted).unwrap_or(u32::MAX));

        Some(item.quantity())
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price times quantity over all lines.
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total number of units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity())).sum()
    }

    /// Look up a line by identifier.
    pub fn get(&self, id: &ItemId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find_mut(&mut self, id: &ItemId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| &item.id == id)
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Self::with_items(items)
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn product(id: u64, price: i64) -> NewCartItem {
        NewCartItem {
            id: ItemId::from(id),
            name: format!("Product {id}"),
            price: Decimal::from(price),
            category: "Skin".to_string(),
            image: format!("https://img.example/{id}.jpg"),
        }
    }

    #[test]
    fn distinct_ids_each_get_a_line() {
        let mut cart = Cart::new();

        for id in 1..=5 {
            cart.add_item(product(id, 100));
        }

        assert_eq!(cart.len(), 5);
        assert!(cart.items().iter().all(|item| item.quantity() == 1));
    }

    #[test]
    fn adding_same_id_twice_increments_quantity() {
        let mut cart = Cart::new();

        assert_eq!(cart.add_item(product(1, 450)), 1);
        assert_eq!(cart.add_item(product(1, 450)), 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&ItemId::from(1)).map(CartItem::quantity), Some(2));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut cart = Cart::new();

        cart.add_item(product(3, 100));
        cart.add_item(product(1, 100));
        cart.add_item(product(3, 100));

        let ids: Vec<&str> = cart.items().iter().map(|item| item.id.as_str()).collect();

        assert_eq!(ids, ["3", "1"]);
    }

    #[test]
    fn large_negative_delta_clamps_to_one() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100));
        cart.add_item(product(1, 100));

        assert_eq!(cart.update_quantity(&ItemId::from(1), -100), Some(1));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn update_quantity_adds_positive_delta() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100));

        assert_eq!(cart.update_quantity(&ItemId::from(1), 4), Some(5));
    }

    #[test]
    fn update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100));
        let before = cart.clone();

        assert_eq!(cart.update_quantity(&ItemId::from(9), 1), None);
        assert_eq!(cart, before);
    }

    #[test]
    fn removing_unknown_id_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100));
        let before = cart.clone();

        assert!(!cart.remove_item(&ItemId::from(2)));
        assert_eq!(cart, before);
    }

    #[test]
    fn add_twice_then_remove_leaves_no_line() {
        let mut cart = Cart::new();
        cart.add_item(product(5, 300));
        cart.add_item(product(5, 300));

        assert!(cart.remove_item(&ItemId::from(5)));
        assert!(cart.get(&ItemId::from(5)).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn subtotal_sums_price_times_quantity() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 450));
        cart.add_item(product(1, 450));
        cart.add_item(product(2, 120));

        assert_eq!(cart.subtotal(), Decimal::from(1020));
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn empty_cart_subtotal_is_zero() {
        assert_eq!(Cart::new().subtotal(), Decimal::ZERO);
    }

    #[test]
    fn clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 450));
        cart.clear();

        assert!(cart.is_empty());
    }

    #[test]
    fn serialization_round_trip_reproduces_lines() -> TestResult {
        let mut cart = Cart::new();
        cart.add_item(product(1, 450));
        cart.add_item(product(2, 120));
        cart.add_item(product(2, 120));

        let json = serde_json::to_string(&cart)?;
        let restored: Cart = serde_json::from_str(&json)?;

        assert_eq!(restored, cart);

        Ok(())
    }

    #[test]
    fn stored_duplicates_are_merged() -> TestResult {
        let cart: Cart = serde_json::from_str(
            r#"[{"id":1,"name":"A","price":10,"quantity":1},
                {"id":1,"name":"A","price":10,"quantity":2},
                {"id":2,"name":"B","price":5,"quantity":0}]"#,
        )?;

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get(&ItemId::from(1)).map(CartItem::quantity), Some(3));
        assert_eq!(cart.get(&ItemId::from(2)).map(CartItem::quantity), Some(1));

        Ok(())
    }
}
