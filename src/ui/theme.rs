//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the plugin. Two palettes
//! are built in, `dark` and `light`, and the active one can be flipped at
//! runtime. A custom palette can also be loaded from a TOML file, replacing
//! the built-in palette of whichever variant it declares.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//! variant = "dark"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! price_fg = "#a6e3a1"
//! rating_fg = "#f9e2af"
//! stock_fg = "#94e2d5"
//! out_of_stock_fg = "#f38ba8"
//! category_fg = "#cba6f7"
//! ```
//!
//! # Example
//!
//! ```
//! use storefront::ui::Theme;
//!
//! let theme = Theme::from_name("dark").unwrap();
//! println!("{}", Theme::fg(&theme.colors.header_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The two display variants the plugin can toggle between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    Light,
    Dark,
}

impl ThemeVariant {
    /// Parses a variant from its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Short label for the header, `"light"` or `"dark"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from built-in
/// palettes or custom TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Which variant slot this theme occupies.
    pub variant: ThemeVariant,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#cdd6f4"). Optional fields
/// default to `None`, allowing themes to opt out of certain styling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected card foreground color.
    pub selection_fg: String,
    /// Selected card background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, descriptions, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Price label color.
    pub price_fg: String,
    /// Rating label color.
    pub rating_fg: String,
    /// In-stock label color.
    pub stock_fg: String,
    /// Out-of-stock label color.
    pub out_of_stock_fg: String,
    /// Category label color.
    pub category_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `dark`, `light`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    ///
    /// # Example
    ///
    /// ```
    /// use storefront::ui::Theme;
    ///
    /// let theme = Theme::from_name("dark").unwrap();
    /// assert_eq!(theme.name, "dark");
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "dark" => include_str!("../../themes/dark.toml"),
            "light" => include_str!("../../themes/light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (file not found, permission denied, etc.)
    /// - The TOML content cannot be parsed (invalid syntax, missing fields, type mismatches)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use storefront::ui::Theme;
    ///
    /// let theme = Theme::from_file("/path/to/theme.toml")?;
    /// # Ok::<(), String>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("Failed to read theme file: {e}"))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse theme TOML: {e}"))
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Strips `#` prefix if present, validates length, and parses hex digits.
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// Converts a hex color to RGB and formats as `\x1b[38;2;r;g;bm`.
    ///
    /// # Example
    ///
    /// ```
    /// use storefront::ui::Theme;
    ///
    /// let fg = Theme::fg("#cdd6f4");
    /// print!("{}Colored text{}", fg, Theme::reset());
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    ///
    /// Converts a hex color to RGB and formats as `\x1b[48;2;r;g;bm`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (built-in dark palette).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("dark").expect("Built-in dark theme should always parse")
    }
}

/// The pair of themes the plugin toggles between.
///
/// Holds one theme per variant slot plus the currently active variant. The
/// default pairs the two built-in palettes with `dark` active, matching the
/// plugin's starting appearance.
#[derive(Debug, Clone)]
pub struct ThemeSet {
    light: Theme,
    dark: Theme,
    active: ThemeVariant,
}

impl ThemeSet {
    /// Returns the currently active theme.
    #[must_use]
    pub fn active(&self) -> &Theme {
        match self.active {
            ThemeVariant::Light => &self.light,
            ThemeVariant::Dark => &self.dark,
        }
    }

    /// Returns the active variant.
    #[must_use]
    pub const fn active_variant(&self) -> ThemeVariant {
        self.active
    }

    /// Flips the active variant between light and dark.
    pub fn toggle(&mut self) {
        self.active = match self.active {
            ThemeVariant::Light => ThemeVariant::Dark,
            ThemeVariant::Dark => ThemeVariant::Light,
        };
    }

    /// Sets the active variant directly.
    pub fn set_active(&mut self, variant: ThemeVariant) {
        self.active = variant;
    }

    /// Replaces the slot matching the theme's declared variant.
    ///
    /// Used for custom theme files; the other slot keeps its built-in palette
    /// so toggling still works.
    pub fn replace(&mut self, theme: Theme) {
        match theme.variant {
            ThemeVariant::Light => self.light = theme,
            ThemeVariant::Dark => self.dark = theme,
        }
    }
}

impl Default for ThemeSet {
    /// Returns both built-in palettes with `dark` active.
    ///
    /// # Panics
    ///
    /// Panics if a built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self {
            light: Theme::from_name("light").expect("Built-in light theme should always parse"),
            dark: Theme::default(),
            active: ThemeVariant::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_themes_parse() {
        let dark = Theme::from_name("dark").unwrap();
        assert_eq!(dark.name, "dark");
        assert_eq!(dark.variant, ThemeVariant::Dark);

        let light = Theme::from_name("light").unwrap();
        assert_eq!(light.name, "light");
        assert_eq!(light.variant, ThemeVariant::Light);

        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn test_theme_set_starts_dark_and_toggles() {
        let mut themes = ThemeSet::default();
        assert_eq!(themes.active_variant(), ThemeVariant::Dark);

        themes.toggle();
        assert_eq!(themes.active_variant(), ThemeVariant::Light);
        assert_eq!(themes.active().name, "light");

        themes.toggle();
        assert_eq!(themes.active_variant(), ThemeVariant::Dark);
    }

    #[test]
    fn test_replace_fills_the_declared_slot_only() {
        let mut themes = ThemeSet::default();
        let mut custom = Theme::from_name("light").unwrap();
        custom.name = "paper".to_string();

        themes.replace(custom);
        assert_eq!(themes.active().name, "dark");

        themes.set_active(ThemeVariant::Light);
        assert_eq!(themes.active().name, "paper");
    }

    #[test]
    fn test_from_file_parses_custom_theme() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let toml = r##"
name = "midnight"
variant = "dark"

[colors]
header_fg = "#cdd6f4"
selection_fg = "#1e1e2e"
selection_bg = "#f5c2e7"
text_normal = "#cdd6f4"
text_dim = "#6c7086"
border = "#45475a"
search_bar_border = "#f5c2e7"
match_highlight_fg = "#1e1e2e"
match_highlight_bg = "#f9e2af"
empty_state_fg = "#89b4fa"
price_fg = "#a6e3a1"
rating_fg = "#f9e2af"
stock_fg = "#94e2d5"
out_of_stock_fg = "#f38ba8"
category_fg = "#cba6f7"
"##;
        file.write_all(toml.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "midnight");
        assert_eq!(theme.variant, ThemeVariant::Dark);
        assert!(theme.colors.header_bg.is_none());
    }

    #[test]
    fn test_from_file_rejects_missing_or_invalid_files() {
        assert!(Theme::from_file("/nonexistent/theme.toml").is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"").unwrap();
        assert!(Theme::from_file(file.path()).is_err());
    }

    #[test]
    fn test_color_escape_sequences() {
        assert_eq!(Theme::fg("#ff0000"), "\u{001b}[38;2;255;0;0m");
        assert_eq!(Theme::bg("00ff00"), "\u{001b}[48;2;0;255;0m");
        // Malformed hex falls back to white rather than corrupting output.
        assert_eq!(Theme::fg("nope"), "\u{001b}[38;2;255;255;255m");
    }
}
