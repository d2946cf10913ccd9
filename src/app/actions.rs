//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input or
//! system events. Actions bridge pure state transformations and effectful
//! operations like issuing the catalog request or closing the pane.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The plugin runtime
//! executes these actions in sequence via the action processor.

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the action
/// processor. They represent the boundary between pure state transformations
/// and effectful operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,

    /// Issues the one-time GET request for the product catalog.
    ///
    /// Emitted exactly once per plugin lifetime, after the host grants web
    /// access. The runtime resolves the endpoint from its configuration.
    FetchCatalog,

    /// Reports that the user added the selected product to the cart.
    ///
    /// The product id is the only value that crosses the plugin boundary;
    /// there is no cart subsystem behind it.
    AddToCart {
        /// Catalog identifier of the selected product.
        product_id: u64,
    },
}
