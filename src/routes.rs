use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::response::Redirect;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::handlers;
use crate::models::AppState;

/// How the navigation guard treats a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    /// The login page: reachable while logged out, bounced to the default
    /// route while logged in.
    Login,
    /// Cluster management: skips the cluster-count check so an operator with
    /// zero clusters can actually reach the page that creates one.
    ClusterSetup,
    /// Everything else: requires login and a non-zero cluster count.
    Standard,
}

pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    /// Page title; may contain `${param}` placeholders filled per request.
    pub title: &'static str,
    pub kind: RouteKind,
}

pub const ROUTE_TABLE: &[Route] = &[
    Route { path: "/", name: "home", title: "", kind: RouteKind::Standard },
    Route { path: "/login", name: "login", title: "Login", kind: RouteKind::Login },
    Route { path: "/bookies", name: "bookies", title: "Bookies", kind: RouteKind::Standard },
    Route { path: "/ledgers", name: "ledgers", title: "Ledgers", kind: RouteKind::Standard },
    Route { path: "/ledgers/:clusterId/:bookieId", name: "bookie-ledgers", title: "Bookie Ledgers: ${bookieId}", kind: RouteKind::Standard },
    Route { path: "/clusters", name: "clusters", title: "Clusters", kind: RouteKind::ClusterSetup },
    Route { path: "/clusters/:clusterName/delete", name: "cluster-delete", title: "Clusters", kind: RouteKind::ClusterSetup },
    Route { path: "/systemstatus", name: "systemstatus", title: "System status", kind: RouteKind::Standard },
    Route { path: "/systemstatus/refresh", name: "systemstatus-refresh", title: "System status", kind: RouteKind::Standard },
    Route { path: "/error", name: "error", title: "Error", kind: RouteKind::Standard },
    Route { path: "/error/:code", name: "error-code", title: "Error", kind: RouteKind::Standard },
];

/// Resolve a request path against the route table. Unmatched paths are the
/// caller's problem (the router redirects them to the error page).
pub fn match_path(path: &str) -> Option<&'static Route> {
    ROUTE_TABLE.iter().find(|r| path_matches(r.path, path))
}

pub fn find_by_name(name: &str) -> Option<&'static Route> {
    ROUTE_TABLE.iter().find(|r| r.name == name)
}

fn path_matches(pattern: &str, path: &str) -> bool {
    let pat: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let got: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    pat.len() == got.len()
        && pat
            .iter()
            .zip(got.iter())
            .all(|(p, g)| p.starts_with(':') || p == g)
}

// Embed the stylesheet in the binary
const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub fn build_router(state: AppState) -> Router {
    let guarded = Router::new()
        .route("/", get(handlers::auth::root_get))
        .route("/bookies", get(handlers::bookies::bookies_get))
        .route("/ledgers", get(handlers::ledgers::ledgers_get))
        .route("/ledgers/:cluster_id/:bookie_id", get(handlers::ledgers::bookie_ledgers_get))
        .route("/clusters", get(handlers::clusters::clusters_get).post(handlers::clusters::clusters_create))
        .route("/clusters/:cluster_name/delete", post(handlers::clusters::cluster_delete))
        .route("/systemstatus", get(handlers::system::systemstatus_get))
        .route("/systemstatus/refresh", post(handlers::system::systemstatus_refresh))
        .route("/error", get(handlers::errors::error_get))
        .route("/error/:code", get(handlers::errors::error_code_get))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            handlers::middleware::navigation_guard,
        ));

    Router::new()
        .route("/login", get(handlers::auth::login_get).post(handlers::auth::login_post))
        .route("/logout", post(handlers::auth::logout_post))
        .route(
            "/static/styles.css",
            get(|| async {
                (
                    [(axum::http::header::CONTENT_TYPE, "text/css")],
                    DEFAULT_STYLESHEET,
                )
            }),
        )
        .merge(guarded)
        // Extra assets (logos, favicons) dropped into static/ are served with
        // long-lived caching; the embedded stylesheet route above wins for
        // /static/styles.css.
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=31536000, immutable"),
                ))
                .service(ServeDir::new("static")),
        )
        .fallback(|| async { Redirect::to("/error") })
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_path_static_routes() {
        assert_eq!(match_path("/bookies").unwrap().name, "bookies");
        assert_eq!(match_path("/").unwrap().name, "home");
        assert_eq!(match_path("/login").unwrap().kind, RouteKind::Login);
    }

    #[test]
    fn test_match_path_parameterized_routes() {
        assert_eq!(match_path("/ledgers/1/bk-1:3181").unwrap().name, "bookie-ledgers");
        assert_eq!(match_path("/error/503").unwrap().name, "error-code");
    }

    #[test]
    fn test_bookie_ledgers_title_renders_with_bookie_id() {
        let mut params = std::collections::HashMap::new();
        params.insert("bookieId".to_string(), "bk-1:3181".to_string());
        let title = crate::utils::replace_placeholders(
            find_by_name("bookie-ledgers").unwrap().title,
            &params,
        );
        assert_eq!(title, "Bookie Ledgers: bk-1:3181");
    }

    #[test]
    fn test_match_path_unknown_is_none() {
        assert!(match_path("/no/such/route/here").is_none());
        assert!(match_path("/wizard").is_none());
    }
}
