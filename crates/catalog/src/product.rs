//! Catalog records: products, their version history, and lifecycle status.

use serde::{Deserialize, Serialize};

use declara_core::ProductId;

/// Lifecycle label of a product or version disclosure.
///
/// Informational only: this crate records statuses, it does not enforce a
/// workflow between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Draft,
    Submitted,
    Published,
}

impl Status {
    /// The full enumeration, in lifecycle order (drives filter panels).
    pub const ALL: [Status; 3] = [Status::Draft, Status::Submitted, Status::Published];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "Draft",
            Status::Submitted => "Submitted",
            Status::Published => "Published",
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in a product's disclosure history.
///
/// The catalog source orders these newest-first by convention; nothing here
/// enforces it or ties it to the product's `last_updated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    pub version: String,
    /// ISO 8601 date the version was recorded.
    pub date: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A producer-declared product as published in the registry.
///
/// Immutable once loaded; the query engine never mutates products, it only
/// selects and reorders copies of them. Timestamps stay as the ISO 8601
/// strings the source declared so a malformed value degrades at comparison
/// time instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub producer: String,
    pub status: Status,
    pub last_updated: String,
    pub declared_by: String,
    pub declared_date: String,
    pub evidence_count: u32,
    pub versions: Vec<VersionRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<String>,
    /// Optional ranking weight; absent means 0 for sorting purposes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl Product {
    /// Ranking weight used by priority sorting (absent clamps to 0).
    pub fn priority_or_default(&self) -> i64 {
        self.priority.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_canonical_form() {
        for status in Status::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
            let back: Status = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let json = r#"{
            "id": "PROD-100",
            "name": "Cold-Pressed Olive Oil",
            "category": "Food & Beverage",
            "producer": "Aegean Estates",
            "status": "Draft",
            "lastUpdated": "2024-02-01T08:00:00Z",
            "declaredBy": "Nikos Pavlou, Owner",
            "declaredDate": "2024-02-01T08:00:00Z",
            "evidenceCount": 1,
            "versions": [
                { "version": "1.0", "date": "2024-02-01", "status": "Draft" }
            ]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.description, None);
        assert!(product.certifications.is_empty());
        assert_eq!(product.priority, None);
        assert_eq!(product.priority_or_default(), 0);
        assert_eq!(product.versions[0].notes, None);
    }
}
