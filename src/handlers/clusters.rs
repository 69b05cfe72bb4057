use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;

use crate::api;
use crate::models::AppState;
use crate::templates::ClustersTemplate;

use super::helpers::{build_template_globals, handle_api_error, render_template};

#[derive(Deserialize)]
pub struct ClusterForm {
    pub name: String,
    pub metadata_service_uri: String,
}

async fn render_clusters(state: AppState, error: Option<String>) -> axum::response::Response {
    let clusters = match api::load_clusters(&state.api).await {
        Ok(list) => list,
        Err(e) => return handle_api_error(&state, e).await,
    };
    let globals = build_template_globals(&state).await;
    render_template(ClustersTemplate {
        logged_in: globals.logged_in,
        show_drawer: globals.show_drawer,
        api_hostname: globals.api_hostname,
        title: "Clusters".to_string(),
        clusters,
        error,
    })
}

pub async fn clusters_get(State(state): State<AppState>) -> impl IntoResponse {
    render_clusters(state, None).await
}

pub async fn clusters_create(
    State(state): State<AppState>,
    Form(form): Form<ClusterForm>,
) -> impl IntoResponse {
    let name = form.name.trim();
    let uri = form.metadata_service_uri.trim();
    if name.is_empty() || uri.is_empty() {
        return render_clusters(state, Some("Name and metadata service URI are required".to_string())).await;
    }
    match api::add_cluster(&state.api, name, uri).await {
        Ok(()) => {
            // The count cache only hears about mutations from us.
            state.clusters.increment();
            Redirect::to("/clusters").into_response()
        }
        Err(e) => {
            if e.is_unauthorized() {
                return handle_api_error(&state, e).await;
            }
            render_clusters(state, Some(e.to_string())).await
        }
    }
}

pub async fn cluster_delete(
    State(state): State<AppState>,
    Path(cluster_name): Path<String>,
) -> impl IntoResponse {
    match api::delete_cluster(&state.api, &cluster_name).await {
        Ok(()) => {
            state.clusters.decrement();
            Redirect::to("/clusters").into_response()
        }
        Err(e) => handle_api_error(&state, e).await,
    }
}
