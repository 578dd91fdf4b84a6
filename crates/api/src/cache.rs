//! In-process cache for public content reads.
//!
//! Each read is stored under a [`QueryKey`] naming its entity family (the
//! table name) and, for single-record reads, the record id. A successful
//! mutation drops every key of its family plus the home-page bundle, so the
//! next read goes back to the database.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use luther_core::content::ContentKind;
use tokio::sync::RwLock;

/// Family of the aggregated home-page read.
pub const HOME_FAMILY: &str = "home";

/// Cache key: entity family plus optional record id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub family: &'static str,
    pub id: Option<String>,
}

impl QueryKey {
    /// Key for a whole-table read, e.g. `projects`.
    pub fn list(kind: ContentKind) -> Self {
        Self {
            family: kind.cache_family(),
            id: None,
        }
    }

    /// Key for a single-record read, e.g. `projects/12`.
    pub fn record(kind: ContentKind, id: impl ToString) -> Self {
        Self {
            family: kind.cache_family(),
            id: Some(id.to_string()),
        }
    }

    pub fn home() -> Self {
        Self {
            family: HOME_FAMILY,
            id: None,
        }
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{}/{id}", self.family),
            None => f.write_str(self.family),
        }
    }
}

struct Entry {
    stored_at: Instant,
    value: Arc<dyn Any + Send + Sync>,
}

/// TTL-bounded map from [`QueryKey`] to a loaded value.
pub struct QueryCache {
    ttl: Duration,
    entries: RwLock<HashMap<QueryKey, Entry>>,
    /// Bumped on every invalidation. A load that started before an
    /// invalidation is returned to its caller but not stored.
    generation: AtomicU64,
}

impl QueryCache {
    /// A zero `ttl` disables caching; every read calls its loader.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
            generation: AtomicU64::new(0),
        }
    }

    /// Return the cached value for `key`, or run `load` and cache its result.
    ///
    /// Loader errors are returned unchanged and nothing is cached.
    pub async fn get_or_load<T, E, F, Fut>(&self, key: QueryKey, load: F) -> Result<T, E>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if self.ttl.is_zero() {
            return load().await;
        }

        if let Some(hit) = self.lookup::<T>(&key).await {
            tracing::trace!(key = %key, "Query cache hit");
            return Ok(hit);
        }

        let generation = self.generation.load(Ordering::Acquire);
        let value = load().await?;

        let mut entries = self.entries.write().await;
        if self.generation.load(Ordering::Acquire) == generation {
            entries.insert(
                key,
                Entry {
                    stored_at: Instant::now(),
                    value: Arc::new(value.clone()),
                },
            );
        }
        Ok(value)
    }

    async fn lookup<T: Clone + 'static>(&self, key: &QueryKey) -> Option<T> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        if entry.stored_at.elapsed() >= self.ttl {
            return None;
        }
        entry.value.downcast_ref::<T>().cloned()
    }

    /// Drop every key of `kind`'s family, and the home bundle when `kind`
    /// appears on the home page.
    pub async fn invalidate(&self, kind: ContentKind) {
        let family = kind.cache_family();
        let include_home = kind.on_home_page();

        let mut entries = self.entries.write().await;
        self.generation.fetch_add(1, Ordering::AcqRel);
        entries.retain(|key, _| {
            key.family != family && !(include_home && key.family == HOME_FAMILY)
        });
        tracing::debug!(family, include_home, "Query cache invalidated");
    }

    /// Number of live and expired entries currently held.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
