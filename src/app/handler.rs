//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and system events, translating them into state changes and action
//! sequences. It serves as the primary control flow coordinator for the
//! plugin.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `KeyDown`, `KeyUp`, `AddToCart`
//! - **Input**: `Char`, `Backspace`, `ExitSearch`
//! - **Mode Switching**: `SearchMode`, `FocusSearchBar`, `FocusResults`
//! - **Selection**: `CycleCategory`, `CycleSortCriteria`, `ToggleSortOrder`,
//!   `ToggleInStock`, the price bound events, `ToggleLayout`
//! - **System**: `CatalogFetched`, `CatalogFetchFailed`, `PermissionsResult`
//!
//! # Example
//!
//! ```
//! use storefront::app::{handle_event, AppState, Event};
//! use storefront::ui::theme::ThemeSet;
//!
//! let mut state = AppState::new(ThemeSet::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Product;

/// Events triggered by user input or system changes.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Adds the currently highlighted product to the cart.
    AddToCart,
    /// Enters search mode with typing focus and a fresh query.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the search results list (from typing mode).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,

    /// Advances the category filter to the next distinct category.
    CycleCategory,
    /// Advances the sort criteria: price, name, rating.
    CycleSortCriteria,
    /// Flips the sort direction.
    ToggleSortOrder,
    /// Flips the in-stock-only filter.
    ToggleInStock,
    /// Raises the lower price bound by one step.
    RaiseMinPrice,
    /// Lowers the lower price bound by one step.
    LowerMinPrice,
    /// Raises the upper price bound by one step.
    RaiseMaxPrice,
    /// Lowers the upper price bound by one step.
    LowerMaxPrice,
    /// Switches between grid and list layout.
    ToggleLayout,
    /// Switches between the light and dark theme.
    ToggleTheme,

    /// Delivers the decoded catalog after a successful fetch.
    ///
    /// Installs the master product list, records the fetch timestamp, and
    /// derives the initial visible list.
    CatalogFetched {
        /// Products as served by the endpoint.
        products: Vec<Product>,
    },

    /// Reports a failed catalog fetch.
    ///
    /// Logged but does not affect application state; the catalog stays
    /// empty and the loading screen remains.
    CatalogFetchFailed {
        /// Error message describing the failure.
        error: String,
    },

    /// Reports the outcome of the web access permission request.
    ///
    /// A grant triggers the one-time catalog fetch.
    PermissionsResult {
        /// Whether the user granted web access.
        granted: bool,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler that coordinates all state transitions and
/// side effects. It pattern-matches on event types, calls state mutation methods,
/// and collects actions to be executed by the plugin runtime.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple of (should render, actions to execute in sequence). The action
/// vector may be empty if the event requires no side effects.
///
/// # Errors
///
/// Returns errors from state mutation methods.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type for debugging.
#[allow(clippy::cognitive_complexity, clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::AddToCart => {
            use super::modes::InputMode;

            let Some(product) = state.selected_product() else {
                tracing::debug!("no product selected");
                if matches!(state.input_mode, InputMode::Search(_)) {
                    tracing::debug!("exiting search mode (no selection)");
                    state.input_mode = InputMode::Normal;
                    state.selection.search_term = String::new();
                    state.apply_selection();
                    return Ok((true, vec![]));
                }
                return Ok((false, vec![]));
            };

            tracing::debug!(
                product_id = product.id,
                title = %product.title,
                "product added to cart"
            );

            Ok((
                false,
                vec![Action::AddToCart {
                    product_id: product.id,
                }],
            ))
        }
        Event::SearchMode => {
            use super::modes::{InputMode, SearchFocus};
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.selection.search_term = String::new();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            use super::modes::{InputMode, SearchFocus};
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            use super::modes::{InputMode, SearchFocus};

            if state.selection.search_term.is_empty() {
                state.input_mode = InputMode::Normal;
                state.apply_selection();
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            use super::modes::InputMode;
            tracing::debug!(query = %state.selection.search_term, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.selection.search_term = String::new();
            state.apply_selection();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            use super::modes::InputMode;

            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.selection.search_term.push(*c);

            tracing::trace!(query = %state.selection.search_term, char = %c, "search query updated");

            state.apply_selection();

            Ok((true, vec![]))
        }
        Event::Backspace => {
            use super::modes::InputMode;
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.selection.search_term.pop();

            state.apply_selection();

            Ok((true, vec![]))
        }
        Event::CycleCategory => {
            state.selection.cycle_category(&state.categories);
            tracing::debug!(category = ?state.selection.category, "category filter cycled");
            state.apply_selection();
            Ok((true, vec![]))
        }
        Event::CycleSortCriteria => {
            state.selection.sort_criteria = state.selection.sort_criteria.cycled();
            tracing::debug!(criteria = state.selection.sort_criteria.label(), "sort criteria cycled");
            state.apply_selection();
            Ok((true, vec![]))
        }
        Event::ToggleSortOrder => {
            state.selection.sort_order = state.selection.sort_order.toggled();
            state.apply_selection();
            Ok((true, vec![]))
        }
        Event::ToggleInStock => {
            state.selection.in_stock_only = !state.selection.in_stock_only;
            state.apply_selection();
            Ok((true, vec![]))
        }
        Event::RaiseMinPrice => {
            state.selection.raise_min_price();
            state.apply_selection();
            Ok((true, vec![]))
        }
        Event::LowerMinPrice => {
            state.selection.lower_min_price();
            state.apply_selection();
            Ok((true, vec![]))
        }
        Event::RaiseMaxPrice => {
            state.selection.raise_max_price();
            state.apply_selection();
            Ok((true, vec![]))
        }
        Event::LowerMaxPrice => {
            state.selection.lower_max_price();
            state.apply_selection();
            Ok((true, vec![]))
        }
        Event::ToggleLayout => {
            // Layout has no effect on the derived list, only on rendering.
            state.selection.view_mode = state.selection.view_mode.toggled();
            Ok((true, vec![]))
        }
        Event::ToggleTheme => {
            state.themes.toggle();
            tracing::debug!(theme = state.themes.active_variant().label(), "theme toggled");
            Ok((true, vec![]))
        }
        Event::CatalogFetched { products } => {
            state.set_catalog(products.clone());
            Ok((true, vec![]))
        }
        Event::CatalogFetchFailed { error } => {
            tracing::error!(error = %error, "catalog fetch failed");
            Ok((false, vec![]))
        }
        Event::PermissionsResult { granted } => {
            if !granted {
                tracing::warn!("web access denied, catalog stays empty");
                return Ok((false, vec![]));
            }

            if state.fetch_started {
                tracing::debug!("catalog fetch already requested, skipping");
                return Ok((false, vec![]));
            }

            state.fetch_started = true;
            Ok((false, vec![Action::FetchCatalog]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{InputMode, SearchFocus};
    use crate::domain::{Rating, SortOrder, ViewMode};
    use crate::ui::theme::{ThemeSet, ThemeVariant};

    fn product(id: u64, title: &str, price: f64, category: &str, count: u32) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: Rating { rate: 4.0, count },
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Backpack", 109.95, "men's clothing", 120),
            product(2, "Bracelet", 695.0, "jewelery", 400),
            product(3, "Hard Drive", 64.0, "electronics", 203),
            product(4, "Ring", 168.0, "jewelery", 0),
        ]
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(ThemeSet::default());
        state.set_catalog(catalog());
        state
    }

    #[test]
    fn test_cursor_events_wrap_and_render() {
        let mut state = loaded_state();

        let (render, actions) = handle_event(&mut state, &Event::KeyUp).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.selected_index, 3);

        let (render, _) = handle_event(&mut state, &Event::KeyDown).unwrap();
        assert!(render);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_close_focus_emits_action() {
        let mut state = loaded_state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn test_add_to_cart_emits_selected_product_id() {
        let mut state = loaded_state();
        state.selected_index = 1; // price-ascending order puts the Backpack (id 1) second

        let (render, actions) = handle_event(&mut state, &Event::AddToCart).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::AddToCart { product_id: 1 }]);
    }

    #[test]
    fn test_add_to_cart_without_selection_is_noop_in_normal_mode() {
        let mut state = AppState::new(ThemeSet::default());
        let (render, actions) = handle_event(&mut state, &Event::AddToCart).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_add_to_cart_without_selection_exits_search_mode() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "zzz".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        assert!(state.visible.is_empty());

        let (render, actions) = handle_event(&mut state, &Event::AddToCart).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.visible.len(), 4);
    }

    #[test]
    fn test_search_flow_narrows_then_restores() {
        let mut state = loaded_state();

        handle_event(&mut state, &Event::SearchMode).unwrap();
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Typing));

        for c in "ring".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        assert_eq!(state.visible.len(), 1);
        assert_eq!(state.visible[0].title, "Ring");

        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));

        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.selection.search_term.is_empty());
        assert_eq!(state.visible.len(), 4);
    }

    #[test]
    fn test_focus_results_with_empty_query_returns_to_normal() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_char_ignored_outside_search_mode() {
        let mut state = loaded_state();
        let (render, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.selection.search_term.is_empty());
    }

    #[test]
    fn test_backspace_rewidens_results() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "ringz".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        assert!(state.visible.is_empty());

        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.visible.len(), 1);
    }

    #[test]
    fn test_cycle_category_filters_visible_list() {
        let mut state = loaded_state();

        handle_event(&mut state, &Event::CycleCategory).unwrap();
        assert_eq!(state.selection.category.as_deref(), Some("electronics"));
        assert_eq!(state.visible.len(), 1);

        handle_event(&mut state, &Event::CycleCategory).unwrap();
        assert_eq!(state.selection.category.as_deref(), Some("jewelery"));
        assert_eq!(state.visible.len(), 2);
    }

    #[test]
    fn test_toggle_sort_order_reverses_listing() {
        let mut state = loaded_state();
        assert_eq!(state.visible[0].title, "Hard Drive");

        handle_event(&mut state, &Event::ToggleSortOrder).unwrap();
        assert_eq!(state.selection.sort_order, SortOrder::Descending);
        assert_eq!(state.visible[0].title, "Bracelet");
    }

    #[test]
    fn test_toggle_in_stock_hides_zero_count_products() {
        let mut state = loaded_state();

        handle_event(&mut state, &Event::ToggleInStock).unwrap();
        assert_eq!(state.visible.len(), 3);
        assert!(state.visible.iter().all(|p| p.rating.count > 0));

        handle_event(&mut state, &Event::ToggleInStock).unwrap();
        assert_eq!(state.visible.len(), 4);
    }

    #[test]
    fn test_price_bound_events_filter_visible_list() {
        let mut state = loaded_state();

        // Raise the minimum to 100: drops the 64.00 drive.
        handle_event(&mut state, &Event::RaiseMinPrice).unwrap();
        handle_event(&mut state, &Event::RaiseMinPrice).unwrap();
        assert_eq!(state.selection.price_range, (100.0, 1000.0));
        assert_eq!(state.visible.len(), 3);

        // Pull the maximum down to 200: drops the 695.00 bracelet.
        for _ in 0..16 {
            handle_event(&mut state, &Event::LowerMaxPrice).unwrap();
        }
        assert_eq!(state.selection.price_range, (100.0, 200.0));
        assert_eq!(state.visible.len(), 2);

        handle_event(&mut state, &Event::LowerMinPrice).unwrap();
        assert_eq!(state.selection.price_range, (50.0, 200.0));
        assert_eq!(state.visible.len(), 3);
    }

    #[test]
    fn test_toggle_layout_keeps_visible_list_intact() {
        let mut state = loaded_state();
        let before = state.visible.clone();

        let (render, _) = handle_event(&mut state, &Event::ToggleLayout).unwrap();
        assert!(render);
        assert_eq!(state.selection.view_mode, ViewMode::List);
        assert_eq!(state.visible, before);
    }

    #[test]
    fn test_toggle_theme_flips_active_variant() {
        let mut state = loaded_state();
        assert_eq!(state.themes.active_variant(), ThemeVariant::Dark);

        handle_event(&mut state, &Event::ToggleTheme).unwrap();
        assert_eq!(state.themes.active_variant(), ThemeVariant::Light);
    }

    #[test]
    fn test_catalog_fetched_installs_products() {
        let mut state = AppState::new(ThemeSet::default());
        let (render, actions) =
            handle_event(&mut state, &Event::CatalogFetched { products: catalog() }).unwrap();

        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.products.len(), 4);
        assert_eq!(
            state.categories,
            vec!["electronics", "jewelery", "men's clothing"]
        );
    }

    #[test]
    fn test_catalog_fetch_failed_leaves_state_untouched() {
        let mut state = AppState::new(ThemeSet::default());
        let (render, actions) = handle_event(
            &mut state,
            &Event::CatalogFetchFailed {
                error: "Catalog request failed with status 500".to_string(),
            },
        )
        .unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.products.is_empty());
        assert!(state.fetched_at.is_none());
    }

    #[test]
    fn test_permission_grant_triggers_fetch_exactly_once() {
        let mut state = AppState::new(ThemeSet::default());

        let (_, actions) =
            handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        assert_eq!(actions, vec![Action::FetchCatalog]);
        assert!(state.fetch_started);

        let (_, actions) =
            handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_permission_denial_never_fetches() {
        let mut state = AppState::new(ThemeSet::default());
        let (_, actions) =
            handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();
        assert!(actions.is_empty());
        assert!(!state.fetch_started);
    }
}
