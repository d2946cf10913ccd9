//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: cursor positioning, search-match highlighting with proper ANSI
//! escape sequence management, char-safe truncation, and the substring scan
//! that produces highlight ranges.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates text to `max_chars` characters, appending `...` when shortened.
///
/// Operates on character boundaries, so multi-byte titles never split
/// mid-character.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Finds every case-insensitive occurrence of `term` within `text`.
///
/// Returns `(start, end)` character index ranges, exclusive end,
/// non-overlapping, in left-to-right order. An empty term produces no
/// ranges. Comparison lowercases per character so indices stay aligned with
/// the original text.
#[must_use]
pub fn substring_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    if term.is_empty() {
        return vec![];
    }

    let haystack: Vec<char> = text
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();
    let needle: Vec<char> = term
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();

    if needle.len() > haystack.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == needle[..] {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }

    ranges
}

/// Renders text with highlighted character ranges for search matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Highlighted sections use match highlight colors unless the
/// item is selected, in which case selection colors take precedence.
///
/// # Character Indices
///
/// Ranges use character indices (not byte indices). The function converts
/// the text to a character vector for proper indexing.
///
/// # Selection Behavior
///
/// When `is_selected` is `true`, match highlighting is disabled to avoid
/// conflicting with selection background colors.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end.min(chars.len())].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("Gold Ring", 34), "Gold Ring");
    }

    #[test]
    fn test_truncate_appends_ellipsis() {
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        // 8 two-byte characters; byte slicing here would panic.
        assert_eq!(truncate("éééééééé", 6), "ééé...");
    }

    #[test]
    fn test_substring_ranges_finds_all_occurrences() {
        assert_eq!(substring_ranges("ring ring", "ring"), vec![(0, 4), (5, 9)]);
    }

    #[test]
    fn test_substring_ranges_are_case_insensitive() {
        assert_eq!(substring_ranges("Gold Ring", "RING"), vec![(5, 9)]);
        assert_eq!(substring_ranges("SHIRT", "shirt"), vec![(0, 5)]);
    }

    #[test]
    fn test_substring_ranges_do_not_overlap() {
        // "aaa" in "aaaa" matches at 0 only, not again at 1.
        assert_eq!(substring_ranges("aaaa", "aaa"), vec![(0, 3)]);
    }

    #[test]
    fn test_substring_ranges_empty_cases() {
        assert!(substring_ranges("Gold Ring", "").is_empty());
        assert!(substring_ranges("", "ring").is_empty());
        assert!(substring_ranges("Gold Ring", "bracelet").is_empty());
    }
}
