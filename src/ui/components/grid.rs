//! Grid layout renderer.
//!
//! This module renders the visible products as fixed-size cards arranged in
//! columns. Cards flow in reading order: left to right, then top to bottom,
//! matching the cursor order of the underlying list.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardItem, CatalogViewModel, GRID_CARD_HEIGHT, GRID_CARD_WIDTH};

/// Text width inside one card cell; the remainder is the gap between columns.
const CARD_INNER_WIDTH: usize = GRID_CARD_WIDTH - 2;

/// Column the leftmost card starts at.
const GRID_LEFT_MARGIN: usize = 2;

/// Renders all card rows starting at the specified row.
///
/// Cards are taken from the view model window in chunks of `vm.columns`; each
/// chunk paints one card row of [`GRID_CARD_HEIGHT`] terminal rows (four
/// content lines plus a separator line).
///
/// # Returns
///
/// The next available row position.
pub fn render_grid(start_row: usize, vm: &CatalogViewModel, theme: &Theme) -> usize {
    let columns = vm.columns.max(1);
    let mut current_row = start_row;

    for chunk in vm.cards.chunks(columns) {
        for (col_idx, card) in chunk.iter().enumerate() {
            let col = GRID_LEFT_MARGIN + col_idx * GRID_CARD_WIDTH;
            render_card(current_row, col, card, theme);
        }
        current_row += GRID_CARD_HEIGHT;
    }

    current_row
}

/// Renders a single card at the given row and column.
///
/// # Layout
///
/// ```text
/// Mens Casual Premium Slim Fit...
/// Slim-fitting style, contrast raglan
/// $22.30       4.1 (259)
/// In stock  men's clothing
/// ```
///
/// Every line is padded to the card's inner width so the selection background
/// forms a solid block. Accent colors are suppressed on the selected card.
fn render_card(row: usize, col: usize, card: &CardItem, theme: &Theme) {
    position_cursor(row, col);
    print!("{}", Theme::bold());
    start_line(card, theme);
    if !card.is_selected {
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
    pad_to_inner(card.title.chars().count());
    print!("{}", Theme::reset());

    position_cursor(row + 1, col);
    start_line(card, theme);
    if !card.is_selected {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", card.description);
    pad_to_inner(card.description.chars().count());
    print!("{}", Theme::reset());

    position_cursor(row + 2, col);
    start_line(card, theme);
    accent(&theme.colors.price_fg, card, theme);
    print!("{:<12}", card.price);
    accent(&theme.colors.rating_fg, card, theme);
    print!(" {}", card.rating);
    pad_to_inner(12 + 1 + card.rating.chars().count());
    print!("{}", Theme::reset());

    position_cursor(row + 3, col);
    start_line(card, theme);
    let stock_color = if card.in_stock {
        &theme.colors.stock_fg
    } else {
        &theme.colors.out_of_stock_fg
    };
    accent(stock_color, card, theme);
    print!("{}", card.stock);
    accent(&theme.colors.category_fg, card, theme);
    print!("  {}", card.category);
    pad_to_inner(card.stock.chars().count() + 2 + card.category.chars().count());
    print!("{}", Theme::reset());
}

/// Opens a card line with the selection colors when the card is selected.
fn start_line(card: &CardItem, theme: &Theme) {
    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }
}

/// Switches to a column accent color, unless the card is selected.
fn accent(color: &str, card: &CardItem, theme: &Theme) {
    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
    } else {
        print!("{}", Theme::fg(color));
    }
}

/// Pads the line to the card's inner width so the selection background forms
/// a solid block.
fn pad_to_inner(used: usize) {
    print!("{}", " ".repeat(CARD_INNER_WIDTH.saturating_sub(used)));
}
