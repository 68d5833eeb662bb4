//! Catalog

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::items::{ItemId, NewCartItem};

/// A product listed in the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Document identifier
    #[serde(default, skip_serializing)]
    pub id: String,

    /// Product name
    pub name: String,

    /// Unit price in Taka
    pub price: Decimal,

    /// Category label
    #[serde(default)]
    pub category: String,

    /// Long description
    #[serde(default)]
    pub description: String,

    /// Image URL
    #[serde(default, alias = "img")]
    pub image: String,

    /// When the product was added
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl From<&Product> for NewCartItem {
    fn from(product: &Product) -> Self {
        Self {
            id: ItemId::new(product.id.clone()),
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            image: product.image.clone(),
        }
    }
}

/// Product submitted through the admin form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// Product name
    pub name: String,

    /// Unit price in Taka, at most [`PRICE_SCALE`] decimal places
    pub price: Decimal,

    /// Category label
    pub category: String,

    /// Long description
    pub description: String,

    /// Image URL
    pub image: String,
}

/// Decimal places a product price may carry.
pub const PRICE_SCALE: u32 = 2;

/// Reasons a new product is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductValidationError {
    /// The name is blank
    #[error("product name is required")]
    MissingName,

    /// The category is blank
    #[error("product category is required")]
    MissingCategory,

    /// The price is below zero
    #[error("price cannot be negative")]
    NegativePrice,

    /// The price has more decimal places than Taka amounts carry
    #[error("price cannot have more than {PRICE_SCALE} decimal places")]
    TooPrecisePrice,
}

impl NewProduct {
    /// Validate the form and stamp it with a creation time.
    ///
    /// # Errors
    ///
    /// Returns a [`ProductValidationError`] for a blank name or category, a
    /// negative price or a price with sub-poisha precision.
    pub fn into_product(self, created_at: Timestamp) -> Result<Product, ProductValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProductValidationError::MissingName);
        }

        if self.category.trim().is_empty() {
            return Err(ProductValidationError::MissingCategory);
        }

        if self.price < Decimal::ZERO {
            return Err(ProductValidationError::NegativePrice);
        }

        if self.price.normalize().scale() > PRICE_SCALE {
            return Err(ProductValidationError::TooPrecisePrice);
        }

        Ok(Product {
            id: String::new(),
            name: self.name.trim().to_string(),
            price: self.price,
            category: self.category.trim().to_string(),
            description: self.description,
            image: self.image,
            created_at: Some(created_at),
        })
    }
}

/// Pseudo-category that matches every product.
pub const ALL_CATEGORIES: &str = "All";

/// Categories offered when site configuration has none.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Makeup", "Skin", "Hair"];

/// Category list stored in site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categories {
    /// Category names in display order
    #[serde(default, rename = "list")]
    pub names: Vec<String>,
}

impl Default for Categories {
    fn default() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.map(String::from).to_vec(),
        }
    }
}

/// Products whose category matches `category`, ignoring case.
///
/// `None` or [`ALL_CATEGORIES`] yields every product.
pub fn filter_by_category<'a>(
    products: &'a [Product],
    category: Option<&'a str>,
) -> impl Iterator<Item = &'a Product> + 'a {
    let category = category
        .map(str::trim)
        .filter(|category| !category.eq_ignore_ascii_case(ALL_CATEGORIES));

    products.iter().filter(move |product| {
        category.is_none_or(|category| product.category.eq_ignore_ascii_case(category))
    })
}
