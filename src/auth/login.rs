use axum::{debug_handler, http::StatusCode, response::{Html, IntoResponse, Redirect, Response}, Form};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::{info, warn};

use crate::{include_res, res::escape_html, AppResult};

use super::{users::{demo_users, DEMO_SECRET}, SessionStore};

pub const LOGIN_FAILED: &str =
    "Invalid credentials. Try: alumni, diaspora, or admin with password: User123";

#[derive(Deserialize)]
pub(crate) struct LoginForm {
    pub(crate) username: String,
    pub(crate) password: String,
}

pub(crate) fn render_login(error: Option<&str>) -> String {
    let mut accounts = String::new();
    for user in demo_users() {
        accounts += &include_res!(str, "/pages/demo_account.html")
            .replace("{handle}", user.handle)
            .replace("{label}", user.role.label());
    }

    let error = error
        .map(|e| format!(r#"<p class="alert">{}</p>"#, escape_html(e)))
        .unwrap_or_default();

    include_res!(str, "/pages/login.html")
        .replace("{demo_accounts}", &accounts)
        .replace("{secret}", DEMO_SECRET)
        .replace("{error}", &error)
}

#[debug_handler]
pub(crate) async fn login_page(session: Session) -> AppResult<Response> {
    if SessionStore::load(&session).await?.is_authenticated() {
        return Ok(Redirect::to("/").into_response());
    }
    Ok(Html(render_login(None)).into_response())
}

#[debug_handler]
pub(crate) async fn login(
    session: Session,
    Form(LoginForm { username, password }): Form<LoginForm>,
) -> AppResult<Response> {
    let mut store = SessionStore::load(&session).await?;

    if !store.login(&username, &password) {
        warn!("failed login for {username:?}");
        return Ok((StatusCode::UNAUTHORIZED, Html(render_login(Some(LOGIN_FAILED)))).into_response());
    }

    // fresh id for the signed-in session
    session.cycle_id().await?;
    store.save(&session).await?;
    info!("welcome @{username}");

    Ok(Redirect::to("/").into_response())
}
