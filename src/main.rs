//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Storefront
//! library and the Zellij plugin system. It implements the `ZellijPlugin`
//! trait to handle Zellij events and lifecycle.
//!
//! # Architecture
//!
//! The plugin runs entirely on Zellij's main thread; the only effectful
//! operation is the single catalog fetch issued through the host:
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ web_request  │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  Zellij host     │   │  ← HTTP GET on behalf of the
//! │  │  (catalog fetch) │   │    sandboxed plugin
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `PermissionRequestResult`,
//!    `WebRequestResult` events
//! 3. **Permission Grant**: Issue the catalog GET request (once)
//! 4. **Catalog Arrival**: Decode the body, populate the product list
//! 5. **Update**: Handle events, delegate to library layer
//! 6. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! Zellij events are translated to library events:
//!
//! - `Key(Down)` → `Event::KeyDown`
//! - `Key(Enter)` → `Event::AddToCart` (unless typing in search)
//! - `Key(Esc)` → `Event::ExitSearch` (in search mode)
//! - `PermissionRequestResult` → `Event::PermissionsResult { granted }`
//! - `WebRequestResult` → `Event::CatalogFetched` / `Event::CatalogFetchFailed`
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! In normal mode:
//! - `j`/`Down`: Move down
//! - `k`/`Up`: Move up
//! - `Enter`: Add selected product to cart
//! - `q`/`Esc`: Close plugin
//! - `/`: Enter search mode
//! - `c`: Cycle category filter
//! - `s`: Cycle sort key
//! - `o`: Toggle sort order
//! - `i`: Toggle in-stock filter
//! - `[`/`]`: Lower/raise maximum price
//! - `{`/`}`: Lower/raise minimum price
//! - `g`: Toggle grid/list layout
//! - `t`: Toggle light/dark theme
//!
//! In search mode (typing):
//! - Printable keys: Type characters
//! - `Enter`: Move focus to the results
//! - `Esc`: Exit search
//!
//! In search mode (navigating results):
//! - `j`/`k`: Move selection
//! - `Enter`: Add selected product to cart
//! - `/`: Return to search input
//! - `Esc`: Exit search

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use storefront::catalog::decode_products;
use storefront::{handle_event, Action, CatalogError, Config, Event, InputMode, SearchFocus};

register_plugin!(State);

/// Context key marking the catalog request so its result can be recognized.
const CATALOG_REQUEST: &str = "catalog";

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns like the
/// configured catalog endpoint.
struct State {
    /// Core application state from library layer.
    app: storefront::app::AppState,

    /// URL the catalog is fetched from.
    endpoint: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: storefront::initialize(&default_config),
            endpoint: default_config.endpoint,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// application state, requests permissions, and subscribes to events.
    /// The catalog fetch itself waits for the permission grant.
    ///
    /// # Tracing
    ///
    /// The entire load process is instrumented with OpenTelemetry spans.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `WebAccess`: Fetch the product catalog over HTTP
    ///
    /// # Subscriptions
    ///
    /// - `Key`: Keyboard input
    /// - `PermissionRequestResult`: Gate for the catalog fetch
    /// - `WebRequestResult`: Catalog response delivery
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        storefront::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        tracing::debug!(endpoint = %config.endpoint, "parsed configuration");
        self.app = storefront::initialize(&config);
        tracing::debug!("app state initialized");

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::PermissionRequestResult,
            EventType::WebRequestResult,
        ]);

        self.endpoint.clone_from(&config.endpoint);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to `handle_event`,
    /// and executes resulting actions. Returns `true` if the UI should re-render.
    ///
    /// # Catalog Fetch
    ///
    /// The permission grant triggers the one-time catalog request; the
    /// response arrives later as a `WebRequestResult` tagged with the
    /// request context.
    ///
    /// # Tracing
    ///
    /// Each event is traced with its type for observability.
    ///
    /// # Parameters
    ///
    /// * `event` - Zellij event to process
    ///
    /// # Returns
    ///
    /// - `true` if the plugin UI should re-render
    /// - `false` if the event was ignored or resulted in no state changes
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_event(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Event::PermissionsResult {
                    granted: matches!(status, PermissionStatus::Granted),
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in rows
    /// * `cols` - Terminal width in columns
    fn render(&mut self, rows: usize, cols: usize) {
        storefront::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        // While the search input has focus, printable keys edit the term.
        if self.app.input_mode == InputMode::Search(SearchFocus::Typing) {
            return Some(match key.bare_key {
                BareKey::Esc => Event::ExitSearch,
                BareKey::Enter => Event::FocusResults,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            });
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::AddToCart,
            BareKey::Esc => match self.app.input_mode {
                InputMode::Search(_) => Event::ExitSearch,
                InputMode::Normal => Event::CloseFocus,
            },
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
            },
            BareKey::Char('q') if self.app.input_mode == InputMode::Normal => Event::CloseFocus,
            BareKey::Char('c') if self.app.input_mode == InputMode::Normal => Event::CycleCategory,
            BareKey::Char('s') if self.app.input_mode == InputMode::Normal => {
                Event::CycleSortCriteria
            }
            BareKey::Char('o') if self.app.input_mode == InputMode::Normal => {
                Event::ToggleSortOrder
            }
            BareKey::Char('i') if self.app.input_mode == InputMode::Normal => Event::ToggleInStock,
            BareKey::Char('[') if self.app.input_mode == InputMode::Normal => Event::LowerMaxPrice,
            BareKey::Char(']') if self.app.input_mode == InputMode::Normal => Event::RaiseMaxPrice,
            BareKey::Char('{') if self.app.input_mode == InputMode::Normal => Event::LowerMinPrice,
            BareKey::Char('}') if self.app.input_mode == InputMode::Normal => Event::RaiseMinPrice,
            BareKey::Char('g') if self.app.input_mode == InputMode::Normal => Event::ToggleLayout,
            BareKey::Char('t') if self.app.input_mode == InputMode::Normal => Event::ToggleTheme,
            _ => return None,
        })
    }

    /// Maps web request results to application events.
    ///
    /// Only responses tagged with the catalog request context are handled;
    /// anything else is ignored.
    fn map_web_request_event(
        status: u16,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        if context.get("request").map(String::as_str) != Some(CATALOG_REQUEST) {
            tracing::debug!("ignoring web request result with unknown context");
            return None;
        }

        tracing::debug!(status = status, body_len = body.len(), "catalog response");

        if !(200..300).contains(&status) {
            return Some(Event::CatalogFetchFailed {
                error: CatalogError::Http(status).to_string(),
            });
        }

        match decode_products(body) {
            Ok(products) => Some(Event::CatalogFetched { products }),
            Err(e) => Some(Event::CatalogFetchFailed {
                error: e.to_string(),
            }),
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Close plugin pane
    /// - `FetchCatalog`: Issue the catalog GET request through the host
    /// - `AddToCart`: Record the cart addition (log only)
    ///
    /// # Parameters
    ///
    /// * `action` - Action to execute
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchCatalog => {
                tracing::debug!(endpoint = %self.endpoint, "requesting catalog");
                let mut context = BTreeMap::new();
                context.insert("request".to_string(), CATALOG_REQUEST.to_string());
                web_request(
                    &self.endpoint,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    Vec::new(),
                    context,
                );
            }
            Action::AddToCart { product_id } => {
                tracing::info!(product_id = product_id, "product added to cart");
            }
        }
    }
}
