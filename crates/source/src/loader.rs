use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use declara_catalog::{sample_catalog, Product};

/// Failure of a catalog load.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The source could not be reached or refused to serve.
    #[error("catalog source unavailable: {0}")]
    Unavailable(String),

    /// The source answered but the payload did not deserialize.
    #[error("catalog payload malformed: {0}")]
    Malformed(String),
}

/// Supplier of the initial product collection.
///
/// Loaded once per session; the returned collection is treated as read-only
/// for the remainder of the session.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Product>, SourceError>;
}

/// Source backed by the embedded sample registry, served after a simulated
/// network latency.
#[derive(Debug, Clone)]
pub struct StaticSource {
    latency: Duration,
}

/// Latency of the registry's bootstrap timer.
const DEFAULT_LATENCY: Duration = Duration::from_millis(1200);

impl StaticSource {
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
        }
    }

    /// Override the simulated latency (use `Duration::ZERO` in tests).
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for StaticSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    async fn load(&self) -> Result<Vec<Product>, SourceError> {
        tracing::debug!(latency_ms = self.latency.as_millis() as u64, "loading catalog");
        tokio::time::sleep(self.latency).await;

        let catalog = sample_catalog().map_err(|e| SourceError::Malformed(e.to_string()))?;
        tracing::info!(products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn static_source_resolves_to_the_sample_catalog() {
        let source = StaticSource::with_latency(Duration::ZERO);
        let catalog = source.load().await.unwrap();
        assert_eq!(catalog.len(), 9);
    }

    #[tokio::test]
    async fn source_is_usable_as_a_trait_object() {
        let source: Arc<dyn CatalogSource> = Arc::new(StaticSource::with_latency(Duration::ZERO));
        let catalog = source.load().await.unwrap();
        assert!(!catalog.is_empty());
    }

    #[tokio::test]
    async fn load_failure_is_a_recoverable_error() {
        struct DownSource;

        #[async_trait]
        impl CatalogSource for DownSource {
            async fn load(&self) -> Result<Vec<Product>, SourceError> {
                Err(SourceError::Unavailable("registry offline".to_string()))
            }
        }

        let err = DownSource.load().await.unwrap_err();
        match err {
            SourceError::Unavailable(msg) => assert!(msg.contains("offline")),
            other => panic!("Expected Unavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn repeated_loads_yield_the_same_catalog() {
        let source = StaticSource::with_latency(Duration::ZERO);
        let first = source.load().await.unwrap();
        let second = source.load().await.unwrap();
        assert_eq!(first, second);
    }
}
