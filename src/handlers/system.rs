use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};

use crate::api;
use crate::models::AppState;
use crate::templates::SystemStatusTemplate;

use super::helpers::{build_template_globals, handle_api_error, render_template};

pub async fn systemstatus_get(State(state): State<AppState>) -> impl IntoResponse {
    let status = match api::load_system_status(&state.api).await {
        Ok(status) => status,
        Err(e) => return handle_api_error(&state, e).await,
    };
    let globals = build_template_globals(&state).await;
    render_template(SystemStatusTemplate {
        logged_in: globals.logged_in,
        show_drawer: globals.show_drawer,
        api_hostname: globals.api_hostname,
        title: "System status".to_string(),
        status,
    })
}

pub async fn systemstatus_refresh(State(state): State<AppState>) -> impl IntoResponse {
    match api::refresh_system_status(&state.api).await {
        Ok(_) => Redirect::to("/systemstatus").into_response(),
        Err(e) => handle_api_error(&state, e).await,
    }
}
