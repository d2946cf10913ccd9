//! Decoding of the catalog endpoint's response body.
//!
//! The endpoint serves a single JSON array of product records. Decoding
//! happens once per plugin lifetime, right after the fetch completes; a body
//! that is not valid JSON or does not match the product schema is the one
//! failure mode the plugin recognizes, and the caller handles it by logging
//! and leaving the catalog empty.

use crate::domain::{Product, Result};

/// Decodes the raw response body into the product collection.
///
/// # Errors
///
/// Returns [`CatalogError::Decode`](crate::domain::CatalogError::Decode) when
/// the body is not a JSON array of product records.
pub fn decode_products(body: &[u8]) -> Result<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_slice(body)?;

    tracing::debug!(count = products.len(), "decoded catalog payload");
    Ok(products)
}

/// Collects the distinct categories present in the catalog, sorted.
///
/// The category filter cycles through this list. It is computed once when
/// the catalog arrives since products never change afterwards.
#[must_use]
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = products
        .iter()
        .map(|product| product.category.clone())
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BODY: &str = r#"[
        {
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use and walks in the forest.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 5,
            "title": "John Hardy Women's Legends Naga Gold & Silver Dragon Bracelet",
            "price": 695,
            "description": "From our Legends Collection.",
            "category": "jewelery",
            "image": "https://fakestoreapi.com/img/71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg",
            "rating": { "rate": 4.6, "count": 400 }
        }
    ]"#;

    #[test]
    fn test_decode_sample_payload() {
        let products = decode_products(SAMPLE_BODY.as_bytes()).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].category, "men's clothing");
        assert_eq!(products[0].rating.count, 120);
        // Integer-valued prices decode into the float field.
        assert_eq!(products[1].price, 695.0);
    }

    #[test]
    fn test_decode_rejects_non_json_body() {
        assert!(decode_products(b"<html>502 Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        // A single object instead of an array.
        assert!(decode_products(br#"{"id": 1}"#).is_err());
    }

    #[test]
    fn test_decode_empty_array() {
        let products = decode_products(b"[]").unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_distinct_categories_are_sorted_and_deduped() {
        let products = decode_products(SAMPLE_BODY.as_bytes()).unwrap();
        let mut doubled = products.clone();
        doubled.extend(products);

        let categories = distinct_categories(&doubled);
        assert_eq!(categories, vec!["jewelery", "men's clothing"]);
    }
}
