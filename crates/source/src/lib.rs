//! Asynchronous catalog loading boundary.
//!
//! The query engine in `declara-catalog` is synchronous and pure; the only
//! asynchronous behavior in the whole system is the one-shot load that makes
//! the catalog available in the first place. This crate models that boundary
//! explicitly: a [`CatalogSource`] resolves to a product collection or fails
//! with a load error. Fire-and-forget: no cancellation, retry, or
//! backpressure semantics.

pub mod loader;

pub use loader::{CatalogSource, SourceError, StaticSource};
