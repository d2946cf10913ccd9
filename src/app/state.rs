//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with methods for cursor movement, re-derivation of the
//! visible product list, and UI view model generation. It serves as the
//! single source of truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the fetched catalog) from derived state
//! (the visible list, the cursor position) to maintain consistency and
//! simplify state transitions. The visible list is always recomputed from
//! scratch via [`catalog::derive`](crate::catalog::derive) whenever a
//! selection field changes; nothing carries over between derivations.
//!
//! # State Components
//!
//! - **Products**: Master catalog, populated by the one-time fetch and never
//!   mutated afterwards
//! - **Visible**: Subset after applying the current selection, in sort order
//! - **Categories**: Distinct catalog categories the filter cycles through
//! - **Selection**: The user's filter/sort/layout parameters
//! - **Cursor**: Current position within the visible list
//! - **Input Mode**: Controls keybinding interpretation and UI layout
//! - **Themes**: The light/dark pair with the active variant
//!
//! # View Model Computation
//!
//! The `compute_viewmodel` method transforms state into a renderable UI
//! representation, handling windowing for both list rows and grid card rows,
//! search match highlighting, and empty state selection.
//!
//! # Example
//!
//! ```
//! use storefront::app::AppState;
//! use storefront::ui::theme::ThemeSet;
//!
//! let mut state = AppState::new(ThemeSet::default());
//! state.apply_selection();
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.empty_state.is_some());
//! ```

use super::modes::{InputMode, SearchFocus};
use crate::catalog;
use crate::domain::{Product, Selection, ViewMode};
use crate::ui::helpers;
use crate::ui::theme::{Theme, ThemeSet};
use crate::ui::viewmodel::{
    CardItem, CatalogViewModel, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, SearchBarInfo,
    GRID_CARD_HEIGHT, GRID_CARD_WIDTH,
};

/// Characters of title and description shown on a card or list row.
const TITLE_CHARS: usize = 34;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Central application state container.
///
/// Holds the fetched catalog and all transient UI state. Mutated by the event
/// handler in response to user input and system events. View models are
/// computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Master catalog as served by the endpoint.
    ///
    /// Populated at most once per plugin lifetime and never mutated in
    /// place afterwards. Stays empty when the fetch fails.
    pub products: Vec<Product>,

    /// Products matching the current selection, in sort order.
    ///
    /// Recomputed by `apply_selection()` after state changes. Used for
    /// rendering and cursor bounds checking.
    pub visible: Vec<Product>,

    /// Distinct categories present in the catalog, sorted.
    ///
    /// Computed once when the catalog arrives; the category filter cycles
    /// through these values.
    pub categories: Vec<String>,

    /// The user's current filter, sort, and layout parameters.
    pub selection: Selection,

    /// Zero-based index of the selected product within `visible`.
    ///
    /// Clamped to valid bounds by `apply_selection()`. Wraps around during
    /// navigation via `move_selection_up/down()`.
    pub selected_index: usize,

    /// Current input handling mode.
    ///
    /// Determines active keybindings and UI layout (search bar visibility,
    /// footer text). Changed by mode switching events.
    pub input_mode: InputMode,

    /// Light/dark theme pair with the active variant.
    pub themes: ThemeSet,

    /// Unix timestamp of the successful fetch, for the status display.
    pub fetched_at: Option<i64>,

    /// Whether the one-time catalog fetch has been requested.
    ///
    /// Guards against issuing a second request if the host reports the
    /// permission grant more than once.
    pub fetch_started: bool,
}

impl AppState {
    /// Creates a new application state with an empty catalog.
    ///
    /// The catalog stays empty until the fetch completes; selection fields
    /// start at their documented defaults.
    #[must_use]
    pub fn new(themes: ThemeSet) -> Self {
        Self {
            products: vec![],
            visible: vec![],
            categories: vec![],
            selection: Selection::default(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            themes,
            fetched_at: None,
            fetch_started: false,
        }
    }

    /// Returns the currently active theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        self.themes.active()
    }

    /// Installs the fetched catalog and derives the initial visible list.
    ///
    /// Records the fetch timestamp and the distinct category list. Called at
    /// most once per plugin lifetime.
    pub fn set_catalog(&mut self, products: Vec<Product>) {
        self.categories = catalog::distinct_categories(&products);
        self.fetched_at = Some(chrono::Utc::now().timestamp());
        self.products = products;
        self.apply_selection();

        tracing::info!(
            count = self.products.len(),
            categories = self.categories.len(),
            "catalog loaded"
        );
    }

    /// Moves the cursor down by one position, wrapping to the top at the end.
    ///
    /// Called by the `KeyDown` event handler. No-op if the visible list is
    /// empty. In grid layout this advances in reading order, since layout
    /// never changes the underlying sequence.
    pub fn move_selection_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.visible.len();
    }

    /// Moves the cursor up by one position, wrapping to the bottom at the start.
    ///
    /// Called by the `KeyUp` event handler. No-op if the visible list is empty.
    pub fn move_selection_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.visible.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns a reference to the currently selected product, if any.
    ///
    /// Returns `None` while the visible list is empty.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.visible.get(self.selected_index)
    }

    /// Re-derives the visible list from the catalog and current selection.
    ///
    /// The derivation is a pure function of (catalog, selection); see
    /// [`catalog::derive`](crate::catalog::derive) for the filter and sort
    /// contract. Afterwards the cursor is clamped to the new bounds.
    pub fn apply_selection(&mut self) {
        let _span = tracing::debug_span!(
            "apply_selection",
            total_products = self.products.len(),
            search_len = self.selection.search_term.len(),
        )
        .entered();

        self.visible = catalog::derive(&self.products, &self.selection);

        if self.visible.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.visible.len() - 1);
        }

        tracing::debug!(visible_count = self.visible.len(), "selection applied");
    }

    /// Computes a renderable UI view model from current state and pane dimensions.
    ///
    /// Transforms application state into a structured representation optimized
    /// for rendering. Handles windowing (showing a subset of results centered
    /// on the cursor), search match highlighting, label formatting, and empty
    /// state handling.
    ///
    /// # Windowing
    ///
    /// The window is computed in layout units: individual rows in list layout,
    /// card rows in grid layout. The unit containing the cursor sits at the
    /// window midpoint, with the window pulled back at the ends so the pane
    /// stays full whenever enough items exist.
    ///
    /// # Empty States
    ///
    /// An empty catalog produces the full-screen loading state; this is the
    /// same whether the fetch is still pending or failed. A non-empty catalog
    /// whose derivation comes back empty produces the in-place
    /// "No products found" notice instead, keeping the filter chrome visible.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> CatalogViewModel {
        let layout = self.selection.view_mode;

        if self.products.is_empty() {
            return CatalogViewModel {
                cards: vec![],
                selected_index: 0,
                columns: 1,
                layout,
                header: self.compute_header(),
                filter_bar: self.compute_filter_bar(),
                footer: self.compute_footer(),
                empty_state: Some(EmptyState {
                    message: "Loading products...".to_string(),
                    subtitle: "No catalog data yet".to_string(),
                }),
                no_results: None,
                search_bar: self.compute_search_bar(),
            };
        }

        if self.visible.is_empty() {
            return CatalogViewModel {
                cards: vec![],
                selected_index: 0,
                columns: 1,
                layout,
                header: self.compute_header(),
                filter_bar: self.compute_filter_bar(),
                footer: self.compute_footer(),
                empty_state: None,
                no_results: Some("No products found".to_string()),
                search_bar: self.compute_search_bar(),
            };
        }

        let available = self.available_rows(rows).max(1);
        let (columns, unit_height) = match layout {
            ViewMode::List => (1, 1),
            ViewMode::Grid => (Self::grid_columns(cols), GRID_CARD_HEIGHT),
        };

        let visible_units = (available / unit_height).max(1);
        let total_units = (self.visible.len() + columns - 1) / columns;
        let selected_unit = self.selected_index / columns;

        let (start_unit, end_unit) = Self::window(selected_unit, total_units, visible_units);
        let start = start_unit * columns;
        let end = (end_unit * columns).min(self.visible.len());

        let highlight_term = match self.input_mode {
            InputMode::Search(_) if !self.selection.search_term.is_empty() => {
                Some(self.selection.search_term.as_str())
            }
            _ => None,
        };

        let cards: Vec<CardItem> = self.visible[start..end]
            .iter()
            .enumerate()
            .map(|(relative_idx, product)| {
                self.compute_card(product, start + relative_idx, highlight_term)
            })
            .collect();

        CatalogViewModel {
            cards,
            selected_index: self.selected_index.saturating_sub(start),
            columns,
            layout,
            header: self.compute_header(),
            filter_bar: self.compute_filter_bar(),
            footer: self.compute_footer(),
            empty_state: None,
            no_results: None,
            search_bar: self.compute_search_bar(),
        }
    }

    /// Centers a window of `visible_units` on `selected_unit`.
    ///
    /// Returns the `(start, end)` unit range, pulled back at the end of the
    /// sequence so the window stays full whenever enough units exist.
    fn window(selected_unit: usize, total_units: usize, visible_units: usize) -> (usize, usize) {
        let mut start = selected_unit.saturating_sub(visible_units / 2);
        let end = (start + visible_units).min(total_units);

        if end - start < visible_units && total_units >= visible_units {
            start = end.saturating_sub(visible_units);
        }

        (start, end)
    }

    /// Computes the display card for a single product within the window.
    fn compute_card(
        &self,
        product: &Product,
        absolute_idx: usize,
        highlight_term: Option<&str>,
    ) -> CardItem {
        let title = helpers::truncate(&product.title, TITLE_CHARS);
        let highlight_ranges =
            highlight_term.map_or_else(Vec::new, |term| helpers::substring_ranges(&title, term));

        let stock = if product.in_stock() {
            "In stock".to_string()
        } else {
            "Out of stock".to_string()
        };

        CardItem {
            title,
            description: helpers::truncate(&product.description, TITLE_CHARS),
            price: product.price_label(),
            rating: product.rating_label(),
            category: product.category.clone(),
            stock,
            in_stock: product.in_stock(),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    /// Computes header information: title plus visible/total counts.
    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(
                " Storefront ({}/{}) ",
                self.visible.len(),
                self.products.len()
            ),
        }
    }

    /// Computes the filter bar: selection summary left, status right.
    fn compute_filter_bar(&self) -> FilterBarInfo {
        let selection = &self.selection;
        let summary = format!(
            "category: {}  price: {}  stock: {}  sort: {} {}  view: {}",
            selection.category.as_deref().unwrap_or("all"),
            selection.price_range_label(),
            if selection.in_stock_only {
                "in stock"
            } else {
                "all"
            },
            selection.sort_criteria.label(),
            selection.sort_order.label(),
            selection.view_mode.label(),
        );

        let theme_label = self.themes.active_variant().label();
        let status = match self.fetched_ago() {
            Some(age) => format!("{theme_label} theme, fetched {age}"),
            None => format!("{theme_label} theme"),
        };

        FilterBarInfo { summary, status }
    }

    /// Computes footer keybinding text based on the current input mode.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: browse results  Ctrl+n/p: navigate  Type to filter"
                    .to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k or Ctrl+n/p: navigate  Enter: add to cart"
                    .to_string()
            }
            InputMode::Normal => {
                "j/k: move  /: search  c: category  s: sort  o: order  i: stock  [/]: price  g: view  t: theme  Enter: add  q: quit"
                    .to_string()
            }
        };

        FooterInfo { keybindings }
    }

    /// Computes search bar state if in search mode.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.selection.search_term.clone(),
            })
        } else {
            None
        }
    }

    /// Calculates rows available for cards after subtracting UI chrome.
    ///
    /// Accounts for the blank top row, header, border, filter bar, column
    /// header row, bottom border, footer, and trailing blank row; search mode
    /// adds the 3-line search box.
    const fn available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(8),
            InputMode::Search(_) => total_rows.saturating_sub(11),
        }
    }

    /// Number of grid columns that fit the pane width.
    fn grid_columns(cols: usize) -> usize {
        (cols.saturating_sub(1) / GRID_CARD_WIDTH).max(1)
    }

    /// Human-readable age of the fetch, e.g. `"2m ago"`.
    fn fetched_ago(&self) -> Option<String> {
        let fetched_at = self.fetched_at?;
        let diff = chrono::Utc::now().timestamp() - fetched_at;

        Some(if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rating;

    fn product(id: u64, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: format!("{title} description"),
            category: "electronics".to_string(),
            image: String::new(),
            rating: Rating { rate: 4.0, count: 10 },
        }
    }

    fn state_with_products(count: u64) -> AppState {
        let mut state = AppState::new(ThemeSet::default());
        let products: Vec<Product> = (1..=count)
            .map(|id| product(id, &format!("Item {id:02}"), id as f64))
            .collect();
        state.set_catalog(products);
        state
    }

    #[test]
    fn test_set_catalog_populates_derived_fields() {
        let mut state = AppState::new(ThemeSet::default());
        state.set_catalog(vec![
            product(1, "Drive", 64.0),
            Product {
                category: "jewelery".to_string(),
                ..product(2, "Ring", 168.0)
            },
        ]);

        assert_eq!(state.visible.len(), 2);
        assert_eq!(state.categories, vec!["electronics", "jewelery"]);
        assert!(state.fetched_at.is_some());
    }

    #[test]
    fn test_navigation_wraps_both_ways() {
        let mut state = state_with_products(3);

        assert_eq!(state.selected_index, 0);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
        state.move_selection_down();
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn test_navigation_noop_on_empty_list() {
        let mut state = AppState::new(ThemeSet::default());
        state.move_selection_down();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_product().is_none());
    }

    #[test]
    fn test_apply_selection_clamps_cursor() {
        let mut state = state_with_products(10);
        state.selected_index = 9;

        state.selection.price_range = (0.0, 3.0);
        state.apply_selection();

        assert_eq!(state.visible.len(), 3);
        assert_eq!(state.selected_index, 2);
    }

    #[test]
    fn test_empty_catalog_shows_loading_state() {
        let state = AppState::new(ThemeSet::default());
        let vm = state.compute_viewmodel(24, 80);

        assert!(vm.cards.is_empty());
        let empty = vm.empty_state.unwrap();
        assert_eq!(empty.message, "Loading products...");
        assert!(vm.no_results.is_none());
    }

    #[test]
    fn test_filtered_out_catalog_shows_no_results_notice() {
        let mut state = state_with_products(3);
        state.selection.search_term = "zzz".to_string();
        state.apply_selection();

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.cards.is_empty());
        assert!(vm.empty_state.is_none());
        assert_eq!(vm.no_results.as_deref(), Some("No products found"));
    }

    #[test]
    fn test_list_window_centers_on_cursor() {
        let mut state = state_with_products(10);
        state.selection.view_mode = ViewMode::List;
        state.apply_selection();
        state.selected_index = 7;

        // 13 rows minus 8 chrome rows leaves 5 list rows.
        let vm = state.compute_viewmodel(13, 80);
        assert_eq!(vm.columns, 1);
        assert_eq!(vm.cards.len(), 5);
        assert_eq!(vm.cards[0].title, "Item 06");
        assert_eq!(vm.selected_index, 2);
        assert!(vm.cards[2].is_selected);
    }

    #[test]
    fn test_grid_window_moves_by_card_rows() {
        let mut state = state_with_products(8);
        state.selected_index = 7;

        // 18 rows minus 8 chrome leaves 10 rows, two card rows of height 5;
        // 80 columns fit two 38-wide cards.
        let vm = state.compute_viewmodel(18, 80);
        assert_eq!(vm.columns, 2);
        assert_eq!(vm.cards.len(), 4);
        assert_eq!(vm.cards[0].title, "Item 05");
        assert_eq!(vm.selected_index, 3);
    }

    #[test]
    fn test_grid_always_has_at_least_one_column() {
        let state = state_with_products(2);
        let vm = state.compute_viewmodel(24, 10);
        assert_eq!(vm.columns, 1);
    }

    #[test]
    fn test_header_counts_visible_and_total() {
        let mut state = state_with_products(10);
        state.selection.price_range = (0.0, 4.0);
        state.apply_selection();

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.title, " Storefront (4/10) ");
    }

    #[test]
    fn test_filter_bar_summarizes_selection() {
        let mut state = state_with_products(3);
        state.selection.category = Some("electronics".to_string());
        state.selection.in_stock_only = true;
        state.apply_selection();

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(
            vm.filter_bar.summary,
            "category: electronics  price: $0-$1000  stock: in stock  sort: price asc  view: grid"
        );
        assert!(vm.filter_bar.status.starts_with("dark theme"));
        assert!(vm.filter_bar.status.contains("just now"));
    }

    #[test]
    fn test_search_mode_highlights_title_matches() {
        let mut state = state_with_products(3);
        state.input_mode = InputMode::Search(SearchFocus::Typing);
        state.selection.search_term = "item".to_string();
        state.apply_selection();

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.search_bar.is_some());
        assert_eq!(vm.cards[0].highlight_ranges, vec![(0, 4)]);
    }

    #[test]
    fn test_cards_carry_formatted_labels() {
        let mut state = AppState::new(ThemeSet::default());
        let mut zero_stock = product(1, "Bracelet", 695.0);
        zero_stock.rating = Rating { rate: 4.6, count: 0 };
        state.set_catalog(vec![zero_stock]);

        let vm = state.compute_viewmodel(24, 80);
        let card = &vm.cards[0];
        assert_eq!(card.price, "$695.00");
        assert_eq!(card.rating, "4.6 (0)");
        assert_eq!(card.stock, "Out of stock");
        assert!(!card.in_stock);
    }
}
