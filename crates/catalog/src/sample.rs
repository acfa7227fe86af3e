//! Embedded sample registry.
//!
//! The nine-product catalog shipped with the registry, embedded as the same
//! camelCase JSON the catalog source publishes.

use declara_core::{DomainError, DomainResult};

use crate::product::Product;

const SAMPLE_CATALOG_JSON: &str = include_str!("../data/products.json");

/// Deserialize the embedded sample catalog.
///
/// Malformed embedded data surfaces as a [`DomainError::Validation`] rather
/// than a panic; callers decide how to degrade.
pub fn sample_catalog() -> DomainResult<Vec<Product>> {
    serde_json::from_str(SAMPLE_CATALOG_JSON)
        .map_err(|e| DomainError::validation(format!("sample catalog: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{find_product, summarize};

    #[test]
    fn sample_catalog_deserializes() {
        let catalog = sample_catalog().unwrap();
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn sample_catalog_headline_totals() {
        let catalog = sample_catalog().unwrap();
        let counts = summarize(&catalog);
        assert_eq!(counts.total, 9);
        assert_eq!(counts.published, 4);
        assert_eq!(counts.submitted, 3);
        assert_eq!(counts.draft, 2);
    }

    #[test]
    fn sample_catalog_ids_are_unique() {
        let catalog = sample_catalog().unwrap();
        for product in &catalog {
            let matches = catalog.iter().filter(|p| p.id == product.id).count();
            assert_eq!(matches, 1, "duplicate id {}", product.id);
        }
    }

    #[test]
    fn every_sample_product_has_versions() {
        let catalog = sample_catalog().unwrap();
        for product in &catalog {
            assert!(!product.versions.is_empty(), "{} has no versions", product.id);
        }
    }

    #[test]
    fn stale_detail_link_yields_not_found() {
        let catalog = sample_catalog().unwrap();
        assert!(find_product(&catalog, &"PROD-999".into()).is_none());
    }
}
