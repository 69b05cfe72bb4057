use axum::{
    extract::State,
    response::IntoResponse,
};

use crate::api;
use crate::models::AppState;
use crate::templates::BookiesTemplate;

use super::helpers::{build_template_globals, handle_api_error, render_template};

pub async fn bookies_get(State(state): State<AppState>) -> impl IntoResponse {
    let bookies = match api::load_bookies(&state.api).await {
        Ok(list) => list,
        Err(e) => return handle_api_error(&state, e).await,
    };
    let globals = build_template_globals(&state).await;
    render_template(BookiesTemplate {
        logged_in: globals.logged_in,
        show_drawer: globals.show_drawer,
        api_hostname: globals.api_hostname,
        title: "Bookies".to_string(),
        bookies,
    })
}
