//! Catalog domain for the product disclosure registry.
//!
//! This crate contains the registry's non-presentational core: the product
//! records, the query value object, and a pure query engine (filter, sort,
//! aggregate, lookup). No IO, no HTTP, no storage; the asynchronous loading
//! boundary lives in `declara-source`.

pub mod engine;
pub mod product;
pub mod query;
pub mod sample;

pub use engine::{
    categories, filter_and_sort, find_product, published_count, summarize, StatusCounts,
};
pub use product::{Product, Status, VersionRecord};
pub use query::{Query, SortDirection, SortKey};
pub use sample::sample_catalog;
