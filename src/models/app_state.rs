use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::api::ApiClient;
use crate::session::{ClusterCountCache, SessionStore};

/// Process-wide dashboard state. One instance lives for the lifetime of the
/// server; handlers receive clones (all clones share the same interior).
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub session: Arc<Mutex<SessionStore>>,
    pub clusters: ClusterCountCache,
    /// Whether the navigation drawer is rendered. Updated by the guard from
    /// the cluster count on every counted navigation.
    show_drawer: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(api: ApiClient, session: SessionStore) -> Self {
        AppState {
            api,
            session: Arc::new(Mutex::new(session)),
            clusters: ClusterCountCache::default(),
            show_drawer: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn drawer_visible(&self) -> bool {
        self.show_drawer.load(Ordering::Relaxed)
    }

    pub fn set_drawer_visible(&self, visible: bool) {
        self.show_drawer.store(visible, Ordering::Relaxed);
    }
}
