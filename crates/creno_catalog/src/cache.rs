// --- File: crates/creno_catalog/src/cache.rs ---
//! Session-lifetime memoization of the built catalog.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use creno_gateway::{FetchOutcome, SlotSource};

use crate::catalog::{build_catalog, Catalog};

/// Lifecycle of the cached catalog.
enum CacheState {
    Empty,
    Populated(Arc<Catalog>),
}

/// Holds the catalog between UI actions so repeated lookups don't repeat the
/// full slot fan-out.
///
/// Owned by the application state and injected into handlers; there is no
/// hidden module-level catalog anywhere.
pub struct CatalogCache {
    state: RwLock<CacheState>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CacheState::Empty),
        }
    }

    /// Returns the populated catalog, building it first if necessary.
    ///
    /// A failed build yields an empty catalog and leaves the cache Empty, so
    /// the next call retries the build instead of serving a cached failure.
    ///
    /// Overlapping calls while Empty each run their own build; there is no
    /// deduplication of in-flight builds. The build is idempotent and
    /// side-effect-free, so the last writer wins with an equivalent value.
    pub async fn ensure(&self, source: &dyn SlotSource) -> Arc<Catalog> {
        if let CacheState::Populated(catalog) = &*self.state.read().await {
            debug!("catalog cache hit ({} slots)", catalog.len());
            return Arc::clone(catalog);
        }

        match build_catalog(source).await {
            FetchOutcome::Fetched(catalog) => {
                let catalog = Arc::new(catalog);
                *self.state.write().await = CacheState::Populated(Arc::clone(&catalog));
                info!("catalog cache populated ({} slots)", catalog.len());
                catalog
            }
            FetchOutcome::Failed => Arc::new(Catalog::default()),
        }
    }

    /// Drops the cached catalog; the next `ensure` performs a full rebuild.
    pub async fn invalidate(&self) {
        *self.state.write().await = CacheState::Empty;
        info!("catalog cache invalidated");
    }

    pub async fn is_populated(&self) -> bool {
        matches!(&*self.state.read().await, CacheState::Populated(_))
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new()
    }
}
