use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::api::ApiError;
use crate::models::AppState;
use crate::utils::hostname_from_url;

/// Fields shared by every page template.
pub struct TemplateGlobals {
    pub logged_in: bool,
    pub show_drawer: bool,
    pub api_hostname: String,
}

pub async fn build_template_globals(state: &AppState) -> TemplateGlobals {
    let logged_in = state.session.lock().await.is_logged();
    TemplateGlobals {
        logged_in,
        show_drawer: state.drawer_visible(),
        api_hostname: hostname_from_url(state.api.base_url()),
    }
}

pub fn render_template<T: Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Turn a failed management-API call into a navigation. A 401 means the
/// server-side session died under us: drop the local session and go back to
/// login. Any other HTTP error lands on the error page with its status code;
/// transport-level failures land on the generic error page.
pub async fn handle_api_error(state: &AppState, e: ApiError) -> Response {
    if e.is_unauthorized() {
        state.session.lock().await.logout(&state.api).await;
        return Redirect::to("/login").into_response();
    }
    tracing::error!(%e, "management API call failed");
    match e {
        ApiError::Status { status, .. } => {
            Redirect::to(&format!("/error/{}", status)).into_response()
        }
        _ => Redirect::to("/error").into_response(),
    }
}
