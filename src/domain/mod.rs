//! Domain layer for the storefront plugin.
//!
//! This module contains the core domain types and business logic for the plugin,
//! independent of Zellij-specific APIs or infrastructure concerns. It follows
//! domain-driven design principles by keeping business rules isolated from external
//! dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`product`]: Product domain model as served by the catalog endpoint
//! - [`selection`]: The user's filter, sort, and layout choices
//!
//! # Examples
//!
//! ```
//! use storefront::domain::{Result, Selection};
//!
//! fn default_selection() -> Result<Selection> {
//!     Ok(Selection::default())
//! }
//! ```

pub mod error;
pub mod product;
pub mod selection;

pub use error::{CatalogError, Result};
pub use product::{Product, Rating};
pub use selection::{Selection, SortCriteria, SortOrder, ViewMode};
