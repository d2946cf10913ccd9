//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with visible/total counts
//! - [`filters`]: Selection summary and status bar
//! - [`footer`]: Help text and keybinding hints
//! - [`search`]: Search input box (border, query text)
//! - [`list`]: Product list with columns (TITLE, PRICE, RATING, STOCK, CATEGORY)
//! - [`grid`]: Multi-column product cards
//! - [`empty`]: Empty state messages
//!
//! # Layout Modes
//!
//! The module provides two high-level layout functions:
//!
//! - [`render_normal_mode`]: Header + Filter Bar + Cards + Footer
//! - [`render_search_mode`]: Header + Filter Bar + Search Box + Cards + Footer
//!
//! Both delegate the card area to the list or grid renderer according to the
//! view model's layout, or to the no-results notice when the filters exclude
//! everything.

mod empty;
mod filters;
mod footer;
mod grid;
mod header;
mod list;
mod search;

pub use empty::render_empty_state;

use crate::domain::ViewMode;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CatalogViewModel, SearchBarInfo};

use empty::render_no_results;
use filters::render_filter_bar;
use footer::render_footer;
use grid::render_grid;
use header::render_header;
use list::{render_list_headers, render_list_rows};
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/content, content/footer).
///
/// # Parameters
///
/// * `row` - Row position to render the border (1-indexed)
/// * `color` - Hex color for the border
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the card area: list rows, grid cards, or the no-results notice.
///
/// # Returns
///
/// The next available row position
fn render_content(current_row: usize, vm: &CatalogViewModel, theme: &Theme, cols: usize) -> usize {
    if let Some(message) = &vm.no_results {
        return render_no_results(current_row + 2, message, theme, cols);
    }

    match vm.layout {
        ViewMode::List => {
            let row = render_list_headers(current_row, theme);
            render_list_rows(row, &vm.cards, theme, cols)
        }
        ViewMode::Grid => render_grid(current_row + 1, vm, theme),
    }
}

/// Renders the normal mode layout (no search box).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Filter Bar]
/// [Cards: list or grid]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// # Parameters
///
/// * `vm` - View model with product cards and chrome text
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
pub fn render_normal_mode(vm: &CatalogViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);
    let _current_row = render_content(current_row, vm, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the search mode layout (with search box).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Filter Bar]
/// [Search Box - 3 lines]
/// [Cards: list or grid]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// # Parameters
///
/// * `vm` - View model with product cards and chrome text
/// * `search` - Search bar information (query text)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
pub fn render_search_mode(
    vm: &CatalogViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    let _current_row = render_content(current_row, vm, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
