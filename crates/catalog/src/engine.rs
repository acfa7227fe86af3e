//! Catalog query engine.
//!
//! Pure, synchronous, stateless: every operation here is a re-entrant
//! computation over immutable inputs. The presentation layer re-evaluates
//! `filter_and_sort` whenever any query component changes and `summarize`
//! whenever the underlying collection changes; neither call mutates the
//! catalog or retains state between invocations.

use core::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use declara_core::ProductId;

use crate::product::{Product, Status};
use crate::query::{Query, SortDirection, SortKey};

/// Headline totals for the catalog, by status.
///
/// By registry convention these are computed over the *unfiltered* catalog:
/// active filters narrow the result list, never the headline numbers. The
/// filtered-list published figure is a separate operation
/// ([`published_count`]) with intentionally different semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub published: usize,
    pub submitted: usize,
    pub draft: usize,
}

/// Evaluate a query against the catalog: conjunctive filtering followed by a
/// stable sort. Returns a fresh ordered list; the input is never mutated.
///
/// All active predicates must hold for a product to appear. Sorting ties keep
/// their filtered relative order, and a repeated call with identical inputs
/// yields an identical sequence.
pub fn filter_and_sort(products: &[Product], query: &Query) -> Vec<Product> {
    let needle = query.search.trim().to_lowercase();

    let mut results: Vec<Product> = products
        .iter()
        .filter(|product| {
            matches_search(product, &needle)
                && matches_category(product, &query.categories)
                && matches_status(product, &query.statuses)
        })
        .cloned()
        .collect();

    results.sort_by(|a, b| compare_products(a, b, query.sort_key, query.sort_dir));
    results
}

/// Count products by status in a single pass.
pub fn summarize(products: &[Product]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: products.len(),
        ..StatusCounts::default()
    };
    for product in products {
        match product.status {
            Status::Published => counts.published += 1,
            Status::Submitted => counts.submitted += 1,
            Status::Draft => counts.draft += 1,
        }
    }
    counts
}

/// Look up a product by id.
///
/// A missing id is an ordinary outcome (stale detail link, mistyped code),
/// not a failure: callers render a not-found state and offer a path back.
pub fn find_product<'a>(products: &'a [Product], id: &ProductId) -> Option<&'a Product> {
    products.iter().find(|product| &product.id == id)
}

/// Distinct categories in first-seen order (drives the filter panel).
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

/// Published count over an already-filtered list (the results-header figure).
///
/// Deliberately distinct from [`summarize`], which reports headline totals
/// over the unfiltered catalog.
pub fn published_count(products: &[Product]) -> usize {
    products
        .iter()
        .filter(|product| product.status == Status::Published)
        .count()
}

fn matches_search(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(needle)
        || product.producer.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

fn matches_category(product: &Product, categories: &[String]) -> bool {
    categories.is_empty() || categories.contains(&product.category)
}

fn matches_status(product: &Product, statuses: &[Status]) -> bool {
    statuses.is_empty() || statuses.contains(&product.status)
}

fn compare_products(a: &Product, b: &Product, key: SortKey, dir: SortDirection) -> Ordering {
    match key {
        SortKey::Name => dir.apply(a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortKey::Priority => dir.apply(a.priority_or_default().cmp(&b.priority_or_default())),
        SortKey::Date => compare_dates(&a.last_updated, &b.last_updated, dir),
    }
}

/// Compare two `last_updated` stamps. A stamp that fails to parse clamps to
/// the end of the list in either direction; two unparseable stamps tie, so
/// the stable sort keeps their filtered relative order.
fn compare_dates(a: &str, b: &str, dir: SortDirection) -> Ordering {
    match (parse_instant(a), parse_instant(b)) {
        (Some(x), Some(y)) => dir.apply(x.cmp(&y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Parse an ISO 8601 stamp as an instant. Accepts full RFC 3339 timestamps
/// and bare dates (midnight UTC); anything else is treated as unparseable.
fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw.trim()) {
        return Some(stamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
