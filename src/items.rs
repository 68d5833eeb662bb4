//! Items

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a product held in the cart.
///
/// Stored carts written by older clients may carry numeric identifiers, so
/// both JSON strings and integers are accepted and normalised to text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawItemId")]
pub struct ItemId(String);

impl ItemId {
    /// Create an item identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawItemId {
    Text(String),
    Integer(i64),
}

impl From<RawItemId> for ItemId {
    fn from(value: RawItemId) -> Self {
        match value {
            RawItemId::Text(text) => Self(text),
            RawItemId::Integer(number) => Self(number.to_string()),
        }
    }
}

/// A product about to be placed in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    /// Product identifier
    pub id: ItemId,

    /// Display name
    pub name: String,

    /// Unit price in Taka
    pub price: Decimal,

    /// Category label
    pub category: String,

    /// Image reference
    pub image: String,
}

/// A line in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product identifier, unique within a cart
    pub id: ItemId,

    /// Display name
    pub name: String,

    /// Unit price in Taka
    pub price: Decimal,

    #[serde(default = "one")]
    quantity: u32,

    /// Category label
    #[serde(default)]
    pub category: String,

    /// Image reference
    #[serde(default, alias = "img")]
    pub image: String,
}

impl CartItem {
    /// Returns the quantity of this line; never less than one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns price multiplied by quantity.
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }
}

impl From<NewCartItem> for CartItem {
    fn from(item: NewCartItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            quantity: 1,
            category: item.category,
            image: item.image,
        }
    }
}

const fn one() -> u32 {
    1
}
