//! Filter bar component renderer.
//!
//! This module renders the one-line filter bar below the header border: the
//! current selection summary on the left, the theme and fetch status on the
//! right.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Renders the filter bar at the specified row.
///
/// # Parameters
///
/// * `row` - Row position to render the bar (1-indexed)
/// * `filter_bar` - Filter bar information (summary and status text)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
///  category: all  price: $0-$1000  ...        dark theme, fetched 2m ago
/// ```
///
/// The gap between summary and status absorbs the remaining width. On panes
/// too narrow for both, the status is dropped and the summary cut to fit.
pub fn render_filter_bar(
    row: usize,
    filter_bar: &FilterBarInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let summary = format!(" {}", filter_bar.summary);
    let status = format!("{} ", filter_bar.status);

    let summary_len = summary.chars().count();
    let status_len = status.chars().count();

    position_cursor(row, 1);

    if summary_len + status_len > cols {
        let cut: String = summary.chars().take(cols).collect();
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{cut}");
        print!("{}", " ".repeat(cols.saturating_sub(cut.chars().count())));
        print!("{}", Theme::reset());
        return row + 1;
    }

    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{summary}");
    print!("{}", " ".repeat(cols.saturating_sub(summary_len + status_len)));

    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{status}");

    print!("{}", Theme::reset());
    row + 1
}
