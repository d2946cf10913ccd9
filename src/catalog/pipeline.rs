//! Pure derivation of the visible product list.
//!
//! Implements the single data transformation in the plugin: filtering the
//! fetched catalog by the current [`Selection`] and ordering the survivors.
//! The function is a pure map over its inputs; it never looks at prior
//! results, so repeated derivations with unchanged input produce identical
//! output.
//!
//! The stages run in a fixed order:
//!
//! ```text
//! search term -> category -> price range -> stock -> stable sort
//! ```
//!
//! The collection is tens of items, so a full linear re-derivation on every
//! selection change is deliberate; there is no indexing or incremental
//! filtering.

use crate::domain::{Product, Selection, SortCriteria, SortOrder};
use std::cmp::Ordering;

/// Derives the filtered, ordered product list for the given selection.
///
/// Filtering retains products that pass all four predicates:
///
/// 1. A non-empty search term must appear in the lower-cased title as a
///    substring; an empty term retains everything.
/// 2. A selected category must equal the product's category exactly
///    (case-sensitive); `None` retains everything.
/// 3. The price must lie in the closed `[min, max]` interval. An inverted
///    interval matches nothing, which is accepted behavior rather than
///    an error.
/// 4. With `in_stock_only`, the rating count must be positive.
///
/// Sorting is stable, so products with equal sort keys keep their relative
/// catalog order under either direction. Name ordering compares lower-cased
/// titles. The selection's view mode plays no part here; it only tells the
/// caller how to render the result.
///
/// # Examples
///
/// ```
/// use storefront::catalog::derive;
/// use storefront::domain::{Product, Rating, Selection};
///
/// let catalog = vec![
///     Product {
///         id: 1,
///         title: "Gold Ring".to_string(),
///         price: 168.0,
///         description: String::new(),
///         category: "jewelery".to_string(),
///         image: String::new(),
///         rating: Rating { rate: 3.9, count: 70 },
///     },
///     Product {
///         id: 2,
///         title: "Canvas Backpack".to_string(),
///         price: 109.95,
///         description: String::new(),
///         category: "men's clothing".to_string(),
///         image: String::new(),
///         rating: Rating { rate: 4.1, count: 120 },
///     },
/// ];
///
/// let mut selection = Selection::default();
/// selection.search_term = "ring".to_string();
///
/// let visible = derive(&catalog, &selection);
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].id, 1);
/// ```
#[must_use]
pub fn derive(products: &[Product], selection: &Selection) -> Vec<Product> {
    let term = selection.search_term.to_lowercase();
    let (min_price, max_price) = selection.price_range;

    let mut items: Vec<Product> = products
        .iter()
        .filter(|product| term.is_empty() || product.title.to_lowercase().contains(&term))
        .filter(|product| {
            selection
                .category
                .as_ref()
                .map_or(true, |category| &product.category == category)
        })
        .filter(|product| product.price >= min_price && product.price <= max_price)
        .filter(|product| !selection.in_stock_only || product.in_stock())
        .cloned()
        .collect();

    items.sort_by(|a, b| {
        let ordering = compare(a, b, selection.sort_criteria);
        match selection.sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });

    items
}

/// Compares two products on the selected sort key, ascending.
///
/// Price and rating are floating-point comparisons; the catalog never serves
/// NaN, but an incomparable pair still degrades to `Equal` rather than
/// panicking, which the stable sort then leaves in catalog order.
fn compare(a: &Product, b: &Product, criteria: SortCriteria) -> Ordering {
    match criteria {
        SortCriteria::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
        SortCriteria::Name => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortCriteria::Rating => a
            .rating
            .rate
            .partial_cmp(&b.rating.rate)
            .unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Rating, ViewMode};

    fn product(id: u64, title: &str, price: f64, category: &str, rate: f64, count: u32) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: format!("{title} description"),
            category: category.to_string(),
            image: format!("https://example.com/{id}.png"),
            rating: Rating { rate, count },
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Canvas Backpack", 109.95, "men's clothing", 3.9, 120),
            product(2, "Slim Fit T-Shirt", 22.3, "men's clothing", 4.1, 259),
            product(3, "Gold Ring", 168.0, "jewelery", 4.6, 400),
            product(4, "Silver Bracelet", 695.0, "jewelery", 4.6, 0),
            product(5, "Portable Drive", 64.0, "electronics", 3.3, 203),
        ]
    }

    fn titles(items: &[Product]) -> Vec<&str> {
        items.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_default_selection_excludes_nothing() {
        let items = derive(&catalog(), &Selection::default());
        assert_eq!(items.len(), 5);
        // Default sort is ascending price.
        assert_eq!(
            titles(&items),
            vec![
                "Slim Fit T-Shirt",
                "Portable Drive",
                "Canvas Backpack",
                "Gold Ring",
                "Silver Bracelet",
            ]
        );
    }

    #[test]
    fn test_search_matches_titles_case_insensitively() {
        let selection = Selection {
            search_term: "SHIRT".to_string(),
            ..Selection::default()
        };

        let items = derive(&catalog(), &selection);
        assert_eq!(titles(&items), vec!["Slim Fit T-Shirt"]);
        for item in &items {
            assert!(item.title.to_lowercase().contains("shirt"));
        }
    }

    #[test]
    fn test_empty_search_term_retains_everything() {
        let selection = Selection {
            search_term: String::new(),
            ..Selection::default()
        };
        assert_eq!(derive(&catalog(), &selection).len(), 5);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let selection = Selection {
            category: Some("jewelery".to_string()),
            ..Selection::default()
        };

        let items = derive(&catalog(), &selection);
        assert_eq!(titles(&items), vec!["Gold Ring", "Silver Bracelet"]);

        // Equality is case-sensitive, so a differently cased label matches nothing.
        let selection = Selection {
            category: Some("Jewelery".to_string()),
            ..Selection::default()
        };
        assert!(derive(&catalog(), &selection).is_empty());
    }

    #[test]
    fn test_price_range_bounds_are_inclusive() {
        let selection = Selection {
            price_range: (64.0, 168.0),
            ..Selection::default()
        };

        let items = derive(&catalog(), &selection);
        assert_eq!(
            titles(&items),
            vec!["Portable Drive", "Canvas Backpack", "Gold Ring"]
        );
        for item in &items {
            assert!(item.price >= 64.0 && item.price <= 168.0);
        }
    }

    #[test]
    fn test_inverted_price_range_yields_empty_view() {
        let selection = Selection {
            price_range: (500.0, 100.0),
            ..Selection::default()
        };
        assert!(derive(&catalog(), &selection).is_empty());
    }

    #[test]
    fn test_stock_filter_drops_zero_count_products() {
        let input = vec![
            product(1, "Shirt", 20.0, "men's clothing", 4.0, 5),
            product(2, "Ring", 20.0, "jewelery", 3.0, 0),
        ];
        let selection = Selection {
            in_stock_only: true,
            ..Selection::default()
        };

        let items = derive(&input, &selection);
        assert_eq!(titles(&items), vec!["Shirt"]);
    }

    #[test]
    fn test_name_sort_orders_alphabetically() {
        let input = vec![
            product(1, "Shirt", 20.0, "men's clothing", 4.0, 5),
            product(2, "Ring", 20.0, "jewelery", 3.0, 0),
        ];
        let selection = Selection {
            sort_criteria: SortCriteria::Name,
            ..Selection::default()
        };

        let items = derive(&input, &selection);
        assert_eq!(titles(&items), vec!["Ring", "Shirt"]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let input = vec![
            product(1, "zebra print scarf", 10.0, "accessories", 4.0, 1),
            product(2, "Alpaca Sweater", 10.0, "accessories", 4.0, 1),
        ];
        let selection = Selection {
            sort_criteria: SortCriteria::Name,
            ..Selection::default()
        };

        let items = derive(&input, &selection);
        assert_eq!(titles(&items), vec!["Alpaca Sweater", "zebra print scarf"]);
    }

    #[test]
    fn test_descending_reverses_ascending_order() {
        let ascending = derive(&catalog(), &Selection::default());
        let selection = Selection {
            sort_order: SortOrder::Descending,
            ..Selection::default()
        };
        let descending = derive(&catalog(), &selection);

        let mut reversed = ascending;
        reversed.reverse();
        assert_eq!(titles(&descending), titles(&reversed));
    }

    #[test]
    fn test_rating_sort_uses_rate_not_count() {
        let selection = Selection {
            sort_criteria: SortCriteria::Rating,
            ..Selection::default()
        };

        let items = derive(&catalog(), &selection);
        assert_eq!(
            titles(&items),
            vec![
                "Portable Drive",
                "Canvas Backpack",
                "Slim Fit T-Shirt",
                "Gold Ring",
                "Silver Bracelet",
            ]
        );
    }

    #[test]
    fn test_equal_keys_preserve_catalog_order() {
        let input = vec![
            product(1, "First", 50.0, "electronics", 4.0, 1),
            product(2, "Second", 50.0, "electronics", 4.0, 1),
            product(3, "Third", 50.0, "electronics", 4.0, 1),
        ];

        let ascending = derive(&input, &Selection::default());
        assert_eq!(titles(&ascending), vec!["First", "Second", "Third"]);

        // Reversing a run of equal keys still preserves input order.
        let selection = Selection {
            sort_order: SortOrder::Descending,
            ..Selection::default()
        };
        let descending = derive(&input, &selection);
        assert_eq!(titles(&descending), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let selection = Selection {
            search_term: "i".to_string(),
            in_stock_only: true,
            sort_criteria: SortCriteria::Rating,
            sort_order: SortOrder::Descending,
            ..Selection::default()
        };

        let first = derive(&catalog(), &selection);
        let second = derive(&catalog(), &selection);
        assert_eq!(first, second);
    }

    #[test]
    fn test_view_mode_never_changes_the_result() {
        let grid = Selection {
            view_mode: ViewMode::Grid,
            ..Selection::default()
        };
        let list = Selection {
            view_mode: ViewMode::List,
            ..Selection::default()
        };
        assert_eq!(derive(&catalog(), &grid), derive(&catalog(), &list));
    }

    #[test]
    fn test_filters_combine() {
        let selection = Selection {
            search_term: "s".to_string(),
            category: Some("jewelery".to_string()),
            price_range: (0.0, 700.0),
            in_stock_only: true,
            ..Selection::default()
        };

        // "Silver Bracelet" matches the term, category, and range but is out
        // of stock; "Gold Ring" has no "s" in its title.
        let items = derive(&catalog(), &selection);
        assert!(items.is_empty());
    }
}
