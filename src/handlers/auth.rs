use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect},
};

use crate::api::ApiError;
use crate::models::{AppState, Credentials};
use crate::templates::LoginTemplate;

use super::helpers::{build_template_globals, render_template, TemplateGlobals};

fn login_page(globals: TemplateGlobals, error: Option<String>) -> LoginTemplate {
    LoginTemplate {
        logged_in: globals.logged_in,
        show_drawer: false,
        api_hostname: globals.api_hostname,
        title: "Login".to_string(),
        error,
    }
}

pub async fn login_get(State(state): State<AppState>) -> impl IntoResponse {
    // The guard does not cover /login, so the logged-in bounce lives here too.
    if state.session.lock().await.is_logged() {
        return Redirect::to("/").into_response();
    }
    let globals = build_template_globals(&state).await;
    render_template(login_page(globals, None))
}

pub async fn login_post(
    State(state): State<AppState>,
    Form(credentials): Form<Credentials>,
) -> impl IntoResponse {
    let result = {
        let mut session = state.session.lock().await;
        session.login(&state.api, &credentials).await
    };
    match result {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => {
            let message = match e {
                ApiError::Rejected(_) => "Invalid credentials".to_string(),
                other => other.to_string(),
            };
            let globals = build_template_globals(&state).await;
            render_template(login_page(globals, Some(message)))
        }
    }
}

pub async fn logout_post(State(state): State<AppState>) -> impl IntoResponse {
    state.session.lock().await.logout(&state.api).await;
    Redirect::to("/login")
}

/// Default route: logged-in operators land on the bookies overview.
pub async fn root_get() -> Redirect {
    Redirect::to("/bookies")
}
