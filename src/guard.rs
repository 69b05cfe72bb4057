use std::future::Future;

use crate::api::ApiError;
use crate::routes::{Route, RouteKind};
use crate::session::ClusterCountCache;

/// Where a navigation attempt ends up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Operator access level, derived from the session and the cluster count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessState {
    Unauthenticated,
    /// Logged in, but no cluster registered yet: everything funnels into
    /// cluster setup until one exists.
    AuthenticatedNoCluster,
    AuthenticatedReady,
}

impl AccessState {
    pub fn from_parts(logged_in: bool, cluster_count: u64) -> Self {
        if !logged_in {
            AccessState::Unauthenticated
        } else if cluster_count == 0 {
            AccessState::AuthenticatedNoCluster
        } else {
            AccessState::AuthenticatedReady
        }
    }
}

/// Result of evaluating the guard for one navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardOutcome {
    pub decision: GuardDecision,
    /// New value for the navigation-drawer visibility flag, when the guard
    /// reached the cluster-count check.
    pub show_drawer: Option<bool>,
}

impl GuardOutcome {
    fn decided(decision: GuardDecision) -> Self {
        GuardOutcome {
            decision,
            show_drawer: None,
        }
    }
}

/// Decide whether a navigation to `route` proceeds, in order:
///
/// 1. the login page bounces logged-in operators to the default route;
/// 2. the login page is otherwise always reachable;
/// 3. everything else requires login;
/// 4. cluster setup skips the count check (it is the page the zero-cluster
///    redirect lands on);
/// 5. remaining routes fetch the memoized cluster count and redirect to
///    cluster setup while it is zero.
///
/// A count fetch failure allows the navigation and hides the drawer; the
/// target view will surface the API error itself.
pub async fn check_navigation<F, Fut>(
    route: &Route,
    logged_in: bool,
    clusters: &ClusterCountCache,
    fetch: F,
) -> GuardOutcome
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<u64, ApiError>>,
{
    if route.kind == RouteKind::Login {
        if logged_in {
            return GuardOutcome::decided(GuardDecision::Redirect("/"));
        }
        return GuardOutcome::decided(GuardDecision::Allow);
    }
    if !logged_in {
        return GuardOutcome::decided(GuardDecision::Redirect("/login"));
    }
    if route.kind == RouteKind::ClusterSetup {
        return GuardOutcome::decided(GuardDecision::Allow);
    }

    match clusters.get(fetch).await {
        Ok(count) => match AccessState::from_parts(logged_in, count) {
            AccessState::AuthenticatedNoCluster => GuardOutcome {
                decision: GuardDecision::Redirect("/clusters"),
                show_drawer: Some(false),
            },
            _ => GuardOutcome {
                decision: GuardDecision::Allow,
                show_drawer: Some(count > 0),
            },
        },
        Err(e) => {
            tracing::warn!(route = route.name, %e, "cluster count unavailable; allowing navigation");
            GuardOutcome {
                decision: GuardDecision::Allow,
                show_drawer: Some(false),
            }
        }
    }
}
