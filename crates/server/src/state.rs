//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use sqlx::PgPool;

use crate::config::ServerConfig;
use crate::models::CategoryBanner;
use crate::services::storage::StorageService;

/// TTL for cached banner reads.
const BANNER_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Cache key: the requested category, or `None` for all categories.
pub type BannerCacheKey = Option<String>;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    pool: PgPool,
    banner_cache: Cache<BannerCacheKey, Vec<CategoryBanner>>,
    storage: StorageService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration
    /// * `pool` - `PostgreSQL` connection pool
    #[must_use]
    pub fn new(config: ServerConfig, pool: PgPool) -> Self {
        let banner_cache = Cache::builder()
            .max_capacity(64)
            .time_to_live(BANNER_CACHE_TTL)
            .build();
        let storage = StorageService::new(config.upload_dir.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                banner_cache,
                storage,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the banner cache (5-minute TTL).
    #[must_use]
    pub fn banner_cache(&self) -> &Cache<BannerCacheKey, Vec<CategoryBanner>> {
        &self.inner.banner_cache
    }

    /// Get a reference to the upload storage service.
    #[must_use]
    pub fn storage(&self) -> &StorageService {
        &self.inner.storage
    }
}
