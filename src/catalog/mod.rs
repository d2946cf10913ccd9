//! Catalog layer: decoding the fetched payload and deriving the visible list.
//!
//! The plugin fetches the catalog exactly once; everything else in this
//! module is pure computation over that in-memory collection.
//!
//! # Organization
//!
//! - [`decode`]: JSON payload decoding and category extraction
//! - [`pipeline`]: the filter/sort derivation

pub mod decode;
pub mod pipeline;

pub use decode::{decode_products, distinct_categories};
pub use pipeline::derive;
