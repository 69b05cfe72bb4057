use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use bkvm::api::ApiError;
use bkvm::guard::{check_navigation, AccessState, GuardDecision};
use bkvm::routes;
use bkvm::session::ClusterCountCache;

fn route(name: &str) -> &'static bkvm::routes::Route {
    routes::find_by_name(name).expect("route missing from table")
}

fn counting_fetch(
    count: u64,
    calls: &Arc<AtomicUsize>,
) -> impl FnOnce() -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<u64, ApiError>> + Send>> {
    let calls = calls.clone();
    move || {
        calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move { Ok(count) })
    }
}

#[tokio::test]
async fn test_logged_out_user_is_redirected_to_login() {
    let cache = ClusterCountCache::default();
    let calls = Arc::new(AtomicUsize::new(0));
    let outcome = check_navigation(route("bookies"), false, &cache, counting_fetch(3, &calls)).await;
    assert_eq!(outcome.decision, GuardDecision::Redirect("/login"));
    // never even asks for the cluster count
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_logged_out_user_may_visit_login() {
    let cache = ClusterCountCache::default();
    let calls = Arc::new(AtomicUsize::new(0));
    let outcome = check_navigation(route("login"), false, &cache, counting_fetch(3, &calls)).await;
    assert_eq!(outcome.decision, GuardDecision::Allow);
}

#[tokio::test]
async fn test_logged_in_user_is_bounced_from_login() {
    let cache = ClusterCountCache::default();
    let calls = Arc::new(AtomicUsize::new(0));
    let outcome = check_navigation(route("login"), true, &cache, counting_fetch(3, &calls)).await;
    assert_eq!(outcome.decision, GuardDecision::Redirect("/"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_zero_clusters_redirects_to_cluster_setup() {
    let cache = ClusterCountCache::default();
    let calls = Arc::new(AtomicUsize::new(0));
    let outcome = check_navigation(route("bookies"), true, &cache, counting_fetch(0, &calls)).await;
    assert_eq!(outcome.decision, GuardDecision::Redirect("/clusters"));
    assert_eq!(outcome.show_drawer, Some(false));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_cluster_setup_bypasses_count_check() {
    let cache = ClusterCountCache::default();
    let calls = Arc::new(AtomicUsize::new(0));
    let outcome = check_navigation(route("clusters"), true, &cache, counting_fetch(3, &calls)).await;
    assert_eq!(outcome.decision, GuardDecision::Allow);
    // the bypass exists to avoid a redirect loop; no fetch happens
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(outcome.show_drawer, None);
}

#[tokio::test]
async fn test_nonzero_clusters_allow_navigation_and_show_drawer() {
    let cache = ClusterCountCache::default();
    let calls = Arc::new(AtomicUsize::new(0));
    let outcome = check_navigation(route("bookies"), true, &cache, counting_fetch(3, &calls)).await;
    assert_eq!(outcome.decision, GuardDecision::Allow);
    assert_eq!(outcome.show_drawer, Some(true));
}

#[tokio::test]
async fn test_count_fetch_failure_allows_navigation_without_drawer() {
    let cache = ClusterCountCache::default();
    let outcome = check_navigation(route("bookies"), true, &cache, || async {
        Err(ApiError::Network("connection refused".to_string()))
    })
    .await;
    assert_eq!(outcome.decision, GuardDecision::Allow);
    assert_eq!(outcome.show_drawer, Some(false));
    // the failed fetch left the cache unknown
    assert_eq!(cache.cached(), None);
}

#[tokio::test]
async fn test_guard_uses_memoized_count() {
    let cache = ClusterCountCache::default();
    let calls = Arc::new(AtomicUsize::new(0));

    let first = check_navigation(route("bookies"), true, &cache, counting_fetch(2, &calls)).await;
    let second = check_navigation(route("ledgers"), true, &cache, counting_fetch(2, &calls)).await;

    assert_eq!(first.decision, GuardDecision::Allow);
    assert_eq!(second.decision, GuardDecision::Allow);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_access_state_derivation() {
    assert_eq!(AccessState::from_parts(false, 5), AccessState::Unauthenticated);
    assert_eq!(AccessState::from_parts(true, 0), AccessState::AuthenticatedNoCluster);
    assert_eq!(AccessState::from_parts(true, 1), AccessState::AuthenticatedReady);
}
