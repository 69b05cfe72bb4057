use std::future::Future;
use std::sync::{Arc, Mutex};

use crate::api::ApiError;

/// Lazily fetched, memoized cluster count.
///
/// The count is fetched at most once and then served from the cache
/// (including a cached zero) until someone calls `invalidate`. The cache
/// does not watch cluster mutations itself: the create/delete flows must
/// call `increment`/`decrement`/`invalidate` explicitly.
#[derive(Clone, Default)]
pub struct ClusterCountCache {
    cached: Arc<Mutex<Option<u64>>>,
}

impl ClusterCountCache {
    pub fn cached(&self) -> Option<u64> {
        *self.cached.lock().unwrap()
    }

    /// The cached count, fetching through `fetch` only when unknown.
    /// A failed fetch resets the cache to unknown and propagates the error.
    pub async fn get<F, Fut>(&self, fetch: F) -> Result<u64, ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<u64, ApiError>>,
    {
        if let Some(count) = self.cached() {
            return Ok(count);
        }
        match fetch().await {
            Ok(count) => {
                *self.cached.lock().unwrap() = Some(count);
                Ok(count)
            }
            Err(e) => {
                *self.cached.lock().unwrap() = None;
                Err(e)
            }
        }
    }

    pub fn invalidate(&self) {
        *self.cached.lock().unwrap() = None;
    }

    /// Bump the cached count after a cluster was created. Unknown stays
    /// unknown: without a base value there is nothing to adjust.
    pub fn increment(&self) {
        let mut cached = self.cached.lock().unwrap();
        if let Some(count) = cached.as_mut() {
            *count += 1;
        }
    }

    /// Lower the cached count after a cluster was deleted.
    pub fn decrement(&self) {
        let mut cached = self.cached.lock().unwrap();
        if let Some(count) = cached.as_mut() {
            *count = count.saturating_sub(1);
        }
    }
}
