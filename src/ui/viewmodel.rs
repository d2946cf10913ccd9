//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like formatted labels, truncated
//! text, and search highlight ranges. They contain no escape codes and no
//! business logic.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by the renderer.

use crate::domain::selection::ViewMode;

/// Fixed width of one grid card, including the gap to the next column.
pub const GRID_CARD_WIDTH: usize = 38;

/// Rows one grid card occupies, including the trailing separator row.
pub const GRID_CARD_HEIGHT: usize = 5;

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render the plugin UI: the
/// windowed slice of product cards, chrome text (header, filter bar, footer),
/// and the optional search bar and empty states.
#[derive(Debug, Clone)]
pub struct CatalogViewModel {
    /// Product cards within the visible window.
    pub cards: Vec<CardItem>,

    /// Index of the selected card within `cards`.
    pub selected_index: usize,

    /// Number of grid columns (always 1 in list layout).
    pub columns: usize,

    /// Layout the cards should be rendered in.
    pub layout: ViewMode,

    /// Header information (title, counts).
    pub header: HeaderInfo,

    /// Filter bar information (current selection summary, status).
    pub filter_bar: FilterBarInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Full-screen empty state, set only while the catalog itself is empty.
    ///
    /// An empty catalog means the fetch has not completed or failed; the two
    /// cases render identically on purpose.
    pub empty_state: Option<EmptyState>,

    /// Message shown in the card area when filters exclude every product.
    pub no_results: Option<String>,

    /// Optional search bar information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,
}

/// Display information for a single product card.
///
/// All labels are pre-formatted and the title pre-truncated for the active
/// layout, so component renderers only place text and pick colors.
#[derive(Debug, Clone)]
pub struct CardItem {
    /// Display title, truncated to the layout's title width.
    pub title: String,

    /// Single-line description, truncated (grid layout only shows this).
    pub description: String,

    /// Formatted price, e.g. `"$109.95"`.
    pub price: String,

    /// Formatted rating, e.g. `"3.9 (120)"`.
    pub rating: String,

    /// Category label as served by the catalog.
    pub category: String,

    /// Stock label, `"In stock"` or `"Out of stock"`.
    pub stock: String,

    /// Whether the product counts as in stock (drives the stock color).
    pub in_stock: bool,

    /// Whether this card is currently selected.
    pub is_selected: bool,

    /// Character ranges of search matches within `title`.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices,
    /// exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header, e.g. `" Storefront (12/20) "`.
    pub title: String,
}

/// Filter bar display information.
///
/// Rendered as one row below the header: the selection summary on the left,
/// the status (theme, fetch age) on the right.
#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    /// Current selection summary, e.g.
    /// `"category: all  price: $0-$1000  stock: all  sort: price asc  view: grid"`.
    pub summary: String,

    /// Right-aligned status, e.g. `"dark theme, fetched 2m ago"`.
    pub status: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "q: quit  /: search  t: theme").
    pub keybindings: String,
}

/// Empty state message display information.
///
/// Shown full-screen while the catalog is empty.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "Loading products...").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search term text.
    pub query: String,
}
