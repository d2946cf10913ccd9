//! Selection state: the user's current filter, sort, and layout choices.
//!
//! A [`Selection`] is a transient value created with defaults when the plugin
//! loads and dropped when it unloads. Every field changes only through direct
//! user input, and the visible product list is always re-derived from scratch
//! as a pure function of (catalog, selection), so there is no hidden coupling
//! between fields.

/// Amount added or removed by one price-bound step.
const PRICE_STEP: f64 = 50.0;

/// Lowest representable price bound.
const PRICE_FLOOR: f64 = 0.0;

/// Highest representable price bound, effectively unbounded for this catalog.
const PRICE_CEIL: f64 = 1000.0;

/// Sort key applied to the filtered product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriteria {
    /// Numeric ordering on the product price.
    Price,

    /// Case-insensitive lexicographic ordering on the product title.
    Name,

    /// Numeric ordering on the aggregate rating score.
    Rating,
}

impl SortCriteria {
    /// Advances to the next criteria, wrapping after the last one.
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            Self::Price => Self::Name,
            Self::Name => Self::Rating,
            Self::Rating => Self::Price,
        }
    }

    /// Short label for the filter bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Name => "name",
            Self::Rating => "rating",
        }
    }
}

/// Direction of the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Flips between ascending and descending.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Short label for the filter bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Card layout used to render the derived list.
///
/// Layout is a pure rendering concern: switching it never changes which
/// products are shown or in what order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Multi-column cards sized to the pane width.
    Grid,

    /// One row per product with aligned columns.
    List,
}

impl ViewMode {
    /// Flips between grid and list layout.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }

    /// Short label for the filter bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

/// The user's current filter, sort, and layout parameters.
///
/// Defaults select everything: empty search term, no category, the full
/// price range, out-of-stock items included, sorted by ascending price,
/// rendered as a grid.
///
/// # Examples
///
/// ```
/// use storefront::domain::{Selection, SortCriteria, SortOrder, ViewMode};
///
/// let selection = Selection::default();
/// assert_eq!(selection.search_term, "");
/// assert_eq!(selection.category, None);
/// assert_eq!(selection.price_range, (0.0, 1000.0));
/// assert!(!selection.in_stock_only);
/// assert_eq!(selection.sort_criteria, SortCriteria::Price);
/// assert_eq!(selection.sort_order, SortOrder::Ascending);
/// assert_eq!(selection.view_mode, ViewMode::Grid);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Case-insensitive substring matched against product titles.
    pub search_term: String,

    /// Exact category filter; `None` admits every category.
    pub category: Option<String>,

    /// Closed `[min, max]` interval on the product price.
    ///
    /// An inverted interval (min above max) is representable and simply
    /// matches nothing.
    pub price_range: (f64, f64),

    /// When set, products with a zero rating count are excluded.
    pub in_stock_only: bool,

    /// Sort key for the derived list.
    pub sort_criteria: SortCriteria,

    /// Sort direction for the derived list.
    pub sort_order: SortOrder,

    /// Rendering layout; never affects derivation.
    pub view_mode: ViewMode,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: None,
            price_range: (PRICE_FLOOR, PRICE_CEIL),
            in_stock_only: false,
            sort_criteria: SortCriteria::Price,
            sort_order: SortOrder::Ascending,
            view_mode: ViewMode::Grid,
        }
    }
}

impl Selection {
    /// Advances the category filter through the known categories.
    ///
    /// Cycles `None` -> first -> ... -> last -> `None`. A currently selected
    /// category that is no longer in `categories` also resets to `None`.
    pub fn cycle_category(&mut self, categories: &[String]) {
        self.category = match &self.category {
            None => categories.first().cloned(),
            Some(current) => categories
                .iter()
                .position(|c| c == current)
                .and_then(|idx| categories.get(idx + 1))
                .cloned(),
        };
    }

    /// Raises the lower price bound by one step, capped at the ceiling.
    pub fn raise_min_price(&mut self) {
        self.price_range.0 = (self.price_range.0 + PRICE_STEP).min(PRICE_CEIL);
    }

    /// Lowers the lower price bound by one step, capped at the floor.
    pub fn lower_min_price(&mut self) {
        self.price_range.0 = (self.price_range.0 - PRICE_STEP).max(PRICE_FLOOR);
    }

    /// Raises the upper price bound by one step, capped at the ceiling.
    pub fn raise_max_price(&mut self) {
        self.price_range.1 = (self.price_range.1 + PRICE_STEP).min(PRICE_CEIL);
    }

    /// Lowers the upper price bound by one step, capped at the floor.
    pub fn lower_max_price(&mut self) {
        self.price_range.1 = (self.price_range.1 - PRICE_STEP).max(PRICE_FLOOR);
    }

    /// Summarizes the price range for the filter bar, e.g. `"$0-$1000"`.
    #[must_use]
    pub fn price_range_label(&self) -> String {
        format!("${:.0}-${:.0}", self.price_range.0, self.price_range.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<String> {
        vec![
            "electronics".to_string(),
            "jewelery".to_string(),
            "men's clothing".to_string(),
        ]
    }

    #[test]
    fn test_default_selection_excludes_nothing() {
        let selection = Selection::default();
        assert!(selection.search_term.is_empty());
        assert!(selection.category.is_none());
        assert_eq!(selection.price_range, (0.0, 1000.0));
        assert!(!selection.in_stock_only);
    }

    #[test]
    fn test_cycle_category_wraps_back_to_none() {
        let mut selection = Selection::default();
        let cats = categories();

        selection.cycle_category(&cats);
        assert_eq!(selection.category.as_deref(), Some("electronics"));
        selection.cycle_category(&cats);
        assert_eq!(selection.category.as_deref(), Some("jewelery"));
        selection.cycle_category(&cats);
        assert_eq!(selection.category.as_deref(), Some("men's clothing"));
        selection.cycle_category(&cats);
        assert_eq!(selection.category, None);
    }

    #[test]
    fn test_cycle_category_with_no_categories_stays_unset() {
        let mut selection = Selection::default();
        selection.cycle_category(&[]);
        assert_eq!(selection.category, None);
    }

    #[test]
    fn test_cycle_category_resets_when_current_disappears() {
        let mut selection = Selection {
            category: Some("books".to_string()),
            ..Selection::default()
        };
        selection.cycle_category(&categories());
        assert_eq!(selection.category, None);
    }

    #[test]
    fn test_price_steps_clamp_at_bounds() {
        let mut selection = Selection::default();

        selection.lower_min_price();
        assert_eq!(selection.price_range.0, 0.0);

        selection.raise_max_price();
        assert_eq!(selection.price_range.1, 1000.0);

        selection.raise_min_price();
        assert_eq!(selection.price_range.0, 50.0);

        selection.lower_max_price();
        assert_eq!(selection.price_range.1, 950.0);
    }

    #[test]
    fn test_inverted_price_range_is_representable() {
        let mut selection = Selection::default();
        selection.price_range = (100.0, 100.0);

        selection.raise_min_price();
        assert_eq!(selection.price_range, (150.0, 100.0));
    }

    #[test]
    fn test_sort_criteria_cycles_through_all_keys() {
        let start = SortCriteria::Price;
        assert_eq!(start.cycled(), SortCriteria::Name);
        assert_eq!(start.cycled().cycled(), SortCriteria::Rating);
        assert_eq!(start.cycled().cycled().cycled(), SortCriteria::Price);
    }

    #[test]
    fn test_sort_order_and_view_mode_toggle() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
        assert_eq!(ViewMode::List.toggled(), ViewMode::Grid);
    }

    #[test]
    fn test_price_range_label_rounds_to_whole_amounts() {
        let selection = Selection::default();
        assert_eq!(selection.price_range_label(), "$0-$1000");
    }
}
