use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::api;
use crate::models::AppState;
use crate::routes;
use crate::templates::LedgersTemplate;
use crate::utils::{format_bytes, replace_placeholders};

use super::helpers::{build_template_globals, handle_api_error, render_template};

async fn render_ledgers(
    state: AppState,
    title: String,
    cluster_id: Option<&str>,
    bookie_id: Option<&str>,
) -> axum::response::Response {
    let result = match api::load_ledgers(&state.api, cluster_id, bookie_id).await {
        Ok(result) => result,
        Err(e) => return handle_api_error(&state, e).await,
    };
    let globals = build_template_globals(&state).await;
    render_template(LedgersTemplate {
        logged_in: globals.logged_in,
        show_drawer: globals.show_drawer,
        api_hostname: globals.api_hostname,
        title,
        total_ledgers: result.total_ledgers,
        total_size_display: format_bytes(result.total_size, 2),
        ledgers: result.ledgers,
    })
}

pub async fn ledgers_get(State(state): State<AppState>) -> impl IntoResponse {
    render_ledgers(state, "Ledgers".to_string(), None, None).await
}

pub async fn bookie_ledgers_get(
    State(state): State<AppState>,
    Path((cluster_id, bookie_id)): Path<(String, String)>,
) -> impl IntoResponse {
    let template = routes::find_by_name("bookie-ledgers").map(|r| r.title).unwrap_or("Ledgers");
    let mut params = HashMap::new();
    params.insert("clusterId".to_string(), cluster_id.clone());
    params.insert("bookieId".to_string(), bookie_id.clone());
    let title = replace_placeholders(template, &params);
    render_ledgers(state, title, Some(&cluster_id), Some(&bookie_id)).await
}
