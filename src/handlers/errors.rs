use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::models::AppState;
use crate::templates::ErrorTemplate;

use super::helpers::{build_template_globals, render_template};

async fn render_error(state: AppState, code: String) -> axum::response::Response {
    let globals = build_template_globals(&state).await;
    render_template(ErrorTemplate {
        logged_in: globals.logged_in,
        show_drawer: globals.show_drawer,
        api_hostname: globals.api_hostname,
        title: "Error".to_string(),
        code,
    })
}

pub async fn error_get(State(state): State<AppState>) -> impl IntoResponse {
    render_error(state, String::new()).await
}

pub async fn error_code_get(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> impl IntoResponse {
    render_error(state, code).await
}
