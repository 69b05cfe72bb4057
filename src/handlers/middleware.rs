use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::api;
use crate::guard::{self, GuardDecision};
use crate::models::AppState;
use crate::routes;

/// Runs the navigation guard before every guarded route. Paths that miss
/// the route table entirely go to the error page, mirroring the wildcard
/// entry of the route table.
pub async fn navigation_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let Some(route) = routes::match_path(&path) else {
        return Redirect::to("/error").into_response();
    };

    let logged_in = state.session.lock().await.is_logged();
    let api = state.api.clone();
    let outcome = guard::check_navigation(route, logged_in, &state.clusters, move || async move {
        api::cluster_count(&api).await
    })
    .await;

    if let Some(visible) = outcome.show_drawer {
        state.set_drawer_visible(visible);
    }

    match outcome.decision {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::Redirect(target) => {
            tracing::debug!(from = %path, to = target, "navigation redirected");
            Redirect::to(target).into_response()
        }
    }
}
