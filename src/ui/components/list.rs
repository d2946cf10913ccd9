//! List layout renderer.
//!
//! This module renders the visible products as a five-column table with
//! TITLE, PRICE, RATING, STOCK, and CATEGORY columns. It supports selection
//! highlighting and search match highlighting.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

/// Combined width of the fixed columns and their separating spaces.
const FIXED_COLS_WIDTH: usize = 37 + 1 + 10 + 1 + 12 + 1 + 14 + 1;

/// Renders the list column headers at the specified row.
///
/// Displays the column headers with bold styling and theme colors. Uses fixed
/// column widths; the CATEGORY column takes the remaining width.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_list_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<37} {:<10} {:<12} {:<14} {:<}",
        "TITLE", "PRICE", "RATING", "STOCK", "CATEGORY"
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all list rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of cards)
pub fn render_list_rows(row: usize, cards: &[CardItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_list_row(current_row, card, theme, cols);
    }
    current_row
}

/// Renders a single list row at the specified row position.
///
/// # Layout
///
/// ```text
/// TITLE (37) PRICE (10) RATING (12) STOCK (14) CATEGORY [padding to fill line]
/// ```
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Search match highlights (unless selected)
/// 3. Per-column accent colors
///
/// The row is padded to fill the entire terminal width to ensure consistent
/// selection background rendering.
fn render_list_row(row: usize, card: &CardItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    if card.highlight_ranges.is_empty() {
        print!("{}", card.title);
    } else {
        helpers::render_highlighted_text(
            &card.title,
            &card.highlight_ranges,
            theme,
            card.is_selected,
        );
    }

    let title_len = card.title.chars().count();
    print!("{}", " ".repeat(37_usize.saturating_sub(title_len)));

    set_column_color(&theme.colors.price_fg, card.is_selected, theme);
    print!(" {:<10}", card.price);

    set_column_color(&theme.colors.rating_fg, card.is_selected, theme);
    print!(" {:<12}", card.rating);

    let stock_color = if card.in_stock {
        &theme.colors.stock_fg
    } else {
        &theme.colors.out_of_stock_fg
    };
    set_column_color(stock_color, card.is_selected, theme);
    print!(" {:<14}", card.stock);

    set_column_color(&theme.colors.category_fg, card.is_selected, theme);
    print!(" {}", card.category);

    let line_len = FIXED_COLS_WIDTH + card.category.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Switches to a column accent color, unless the row is selected.
///
/// Accent colors are suppressed on the selected row so the selection
/// background stays readable.
fn set_column_color(color: &str, is_selected: bool, theme: &Theme) {
    if is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
    } else {
        print!("{}", Theme::fg(color));
    }
}
