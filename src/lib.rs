//! Storefront: A Zellij plugin for browsing a remote product catalog.
//!
//! Storefront is a terminal multiplexer plugin that provides:
//! - A one-time catalog fetch over the Zellij web request API
//! - Substring product search with match highlighting
//! - Category, price range, and stock filters with stable multi-key sorting
//! - Grid and list layouts with light/dark theming

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!              │                        │
//! ┌──────────────────────┐   ┌──────────────────────┐
//! │ UI Layer (ui/)       │   │ Catalog Layer        │
//! │ - Rendering          │   │ (catalog/)           │
//! │ - Theming            │   │ - JSON decoding      │
//! │ - Components         │   │ - Filter/sort        │
//! └──────────────────────┘   └──────────────────────┘
//!              │                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Product model (domain/product)                   │
//! │  - Selection model (domain/selection)               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Catalog decoding and the filter/sort pipeline
//! - [`domain`]: Core domain types (Product, Selection, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/storefront.wasm" {
//!         endpoint "https://fakestoreapi.com/products"
//!         theme "light"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`):
//!    - Parse configuration from Zellij
//!    - Initialize tracing (optional)
//!    - Create `AppState` with the theme pair
//!    - Request web access permission and subscribe to events
//!
//! 2. **Permission Grant**:
//!    - Issue the single catalog GET request
//!
//! 3. **Catalog Arrival**:
//!    - Decode the JSON body into products
//!    - Derive the visible list from the current selection
//!
//! 4. **UI Rendering**:
//!    - Compute view model from state
//!    - Render components (header, filter bar, cards, footer)
//!    - Handle user input (j/k, filters, search, theme, layout)
//!
//! # Examples
//!
//! ## Basic Usage (Library)
//!
//! ```
//! use storefront::{handle_event, initialize, Config, Event};
//!
//! let config = Config {
//!     theme_name: Some("light".to_string()),
//!     ..Config::default()
//! };
//!
//! let mut state = initialize(&config);
//!
//! let events = vec![Event::KeyDown, Event::ToggleLayout];
//! for event in events {
//!     let (_should_render, actions) = handle_event(&mut state, &event)?;
//!     assert!(actions.is_empty());
//! }
//! # Ok::<(), storefront::CatalogError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Pure Derivation
//!
//! The visible list is always recomputed from the full catalog and the
//! current selection parameters:
//! - No incremental filtering state to fall out of sync
//! - Sorting is stable, so equal keys keep catalog order
//! - Layout switching never touches the derived list
//!
//! ## Single Fetch
//!
//! The catalog is requested exactly once, after the web permission grant:
//! - A failed fetch is logged and leaves the catalog empty
//! - The empty catalog renders the same whether pending or failed
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models:
//! - Clear separation between state and display
//! - Enables easier testing and validation
//! - Pre-computes expensive operations (match highlighting, truncation)
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{
    CatalogError, Product, Rating, Result, Selection, SortCriteria, SortOrder, ViewMode,
};
pub use ui::{Theme, ThemeSet, ThemeVariant};

use std::collections::BTreeMap;

/// Catalog endpoint used when the configuration does not name one.
const DEFAULT_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/storefront.wasm" {
///     endpoint "https://fakestoreapi.com/products"
///     theme "dark"
///     theme_file "~/.config/zellij/themes/storefront.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// URL the product catalog is fetched from.
    ///
    /// Must serve a JSON array of products. Default:
    /// `https://fakestoreapi.com/products`
    pub endpoint: String,

    /// Built-in theme name to activate at startup.
    ///
    /// Options: `dark`, `light`. Default: `dark`
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// The loaded theme replaces the built-in of the same variant; `~` is
    /// expanded to the sandbox `/host` mount. See [`ui::theme`] for the
    /// format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts and parses typed values
    /// with fallback defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `endpoint`: String → `String` (falls back to the default endpoint
    ///   when missing or blank)
    /// - `theme`: String → `Option<String>`
    /// - `theme_file`: String → `Option<String>`
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use storefront::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("endpoint".to_string(), "https://example.test/products".to_string());
    /// map.insert("theme".to_string(), "light".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.endpoint, "https://example.test/products");
    /// assert_eq!(config.theme_name.as_deref(), Some("light"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let endpoint = config
            .get("endpoint")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self {
            endpoint,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with:
/// - The built-in light/dark theme pair
/// - A custom theme loaded from `theme_file` replacing the built-in of its
///   variant (load failures are logged and ignored)
/// - The active variant selected by `theme_name`
/// - An empty catalog (populated later by the fetch)
///
/// # Example
///
/// ```
/// use storefront::{initialize, Config};
///
/// let config = Config {
///     theme_name: Some("light".to_string()),
///     ..Config::default()
/// };
///
/// let state = initialize(&config);
/// assert!(state.products.is_empty());
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing storefront plugin");

    let mut themes = ThemeSet::default();

    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        match Theme::from_file(&path) {
            Ok(theme) => themes.replace(theme),
            Err(e) => {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using built-ins");
            }
        }
    }

    if let Some(theme_name) = &config.theme_name {
        match ThemeVariant::from_name(theme_name) {
            Some(variant) => themes.set_active(variant),
            None => {
                tracing::debug!(theme_name = %theme_name, "unknown theme name, keeping default");
            }
        }
    }

    AppState::new(themes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_zellij_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.theme_name.is_none());
        assert!(config.theme_file.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn test_from_zellij_reads_all_keys() {
        let mut map = BTreeMap::new();
        map.insert("endpoint".to_string(), "https://example.test/items".to_string());
        map.insert("theme".to_string(), "light".to_string());
        map.insert("theme_file".to_string(), "~/theme.toml".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.endpoint, "https://example.test/items");
        assert_eq!(config.theme_name.as_deref(), Some("light"));
        assert_eq!(config.theme_file.as_deref(), Some("~/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_blank_endpoint_falls_back_to_default() {
        let mut map = BTreeMap::new();
        map.insert("endpoint".to_string(), "   ".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_initialize_activates_named_theme() {
        let config = Config {
            theme_name: Some("light".to_string()),
            ..Config::default()
        };

        let state = initialize(&config);
        assert_eq!(state.themes.active_variant(), ThemeVariant::Light);
    }

    #[test]
    fn test_initialize_ignores_unknown_theme_name() {
        let config = Config {
            theme_name: Some("solarized".to_string()),
            ..Config::default()
        };

        let state = initialize(&config);
        assert_eq!(state.themes.active_variant(), ThemeVariant::Dark);
    }

    #[test]
    fn test_initialize_ignores_missing_theme_file() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        };

        let state = initialize(&config);
        assert_eq!(state.themes.active_variant(), ThemeVariant::Dark);
    }
}
