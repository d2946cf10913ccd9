//! Product domain model.
//!
//! This module defines the core `Product` type as served by the catalog
//! endpoint, along with its embedded `Rating`. Products are read-only once
//! fetched; the plugin never creates, updates, or deletes them, it only
//! filters and orders them for display.

use serde::{Deserialize, Serialize};

/// A single entry in the remote product catalog.
///
/// Instances are decoded straight from the catalog endpoint's JSON array and
/// are never mutated afterwards. Filtering matches against `title` (substring,
/// case-insensitive), `category` (exact), `price` (closed range), and stock;
/// sorting keys off `price`, `title`, or `rating.rate`.
///
/// # Fields
///
/// - `id`: Unique catalog identifier; the only value that crosses the
///   plugin boundary when the user adds a product to the cart
/// - `title`: Display name, search target, and name-sort key
/// - `price`: Non-negative price in the catalog's currency
/// - `description`: Free-form display text, no logic depends on it
/// - `category`: Open-ended label the catalog assigns, matched exactly
/// - `image`: Image URL, carried through for display purposes only
/// - `rating`: Aggregate review score and count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

/// Aggregate review data attached to every product.
///
/// `count` doubles as the stock signal: the catalog flags items with zero
/// reviews as unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

impl Product {
    /// Returns whether the product counts as in stock.
    ///
    /// Availability is derived from the rating count: a product with at
    /// least one review is in stock, one with zero reviews is not.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront::domain::{Product, Rating};
    ///
    /// let product = Product {
    ///     id: 1,
    ///     title: "Mens Casual T-Shirt".to_string(),
    ///     price: 22.3,
    ///     description: "Slim-fitting style".to_string(),
    ///     category: "men's clothing".to_string(),
    ///     image: "https://example.com/shirt.png".to_string(),
    ///     rating: Rating { rate: 4.1, count: 259 },
    /// };
    /// assert!(product.in_stock());
    /// ```
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.rating.count > 0
    }

    /// Formats the price for display, e.g. `"$22.30"`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Formats the rating for display, e.g. `"4.1 (259)"`.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{:.1} ({})", self.rating.rate, self.rating.count)
    }
}
