//! Error types for the storefront plugin.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for storefront plugin operations.
///
/// The catalog fetch is the plugin's only fallible operation, so the variants
/// cover its two failure modes: the endpoint refusing the request and the
/// payload not matching the product schema. Either way the caller logs the
/// error and leaves the catalog empty; there is no retry.
///
/// # Examples
///
/// ```
/// use storefront::domain::CatalogError;
///
/// // Explicit error construction
/// fn reject_status(status: u16) -> Result<(), CatalogError> {
///     Err(CatalogError::Http(status))
/// }
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog endpoint answered with a non-success status.
    ///
    /// Carries the HTTP status code returned by the remote API.
    #[error("Catalog request failed with status {0}")]
    Http(u16),

    /// The catalog payload could not be decoded.
    ///
    /// Occurs when the response body is not valid JSON or does not match the
    /// expected product schema. Automatically converts from `serde_json::Error`
    /// using the `#[from]` attribute.
    #[error("Catalog decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A specialized `Result` type for storefront operations.
///
/// This is a type alias for `std::result::Result<T, CatalogError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use storefront::domain::Result;
///
/// fn refresh_view() -> Result<()> {
///     // Function that may return CatalogError
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, CatalogError>;
