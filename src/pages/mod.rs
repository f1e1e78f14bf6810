mod messages;
mod mock;
mod render;
mod route;

use axum::{debug_handler, extract::{Path, Query, State}, response::{Html, IntoResponse, Redirect, Response}, routing::get, Router};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{auth::SessionStore, include_res, res, AppResult, AppState, SharedConnections};

pub use render::render_page;
pub use route::Page;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(shell))
        .route("/page", get(page_default))
        .route("/page/", get(page_default))
        .route("/page/{fragment}", get(page))
        .route("/style.css", get(res::stylesheet))
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageQuery {
    q: Option<String>,
}

/// The single document the browser keeps; its script loads page bodies as
/// the location fragment changes.
#[debug_handler]
pub(crate) async fn shell(session: Session) -> AppResult<Response> {
    let store = SessionStore::load(&session).await?;
    let Some(user) = store.user() else {
        return Ok(Redirect::to("/login").into_response());
    };

    Ok(Html(
        include_res!(str, "/pages/shell.html")
            .replace("{header}", &render::header(user))
    ).into_response())
}

#[debug_handler(state = AppState)]
pub(crate) async fn page(
    Path(fragment): Path<String>,
    Query(PageQuery { q }): Query<PageQuery>,
    State(connections): State<SharedConnections>,
    session: Session,
) -> AppResult<Response> {
    render_fragment(&fragment, q.as_deref().unwrap_or(""), &connections, &session).await
}

#[debug_handler(state = AppState)]
pub(crate) async fn page_default(
    Query(PageQuery { q }): Query<PageQuery>,
    State(connections): State<SharedConnections>,
    session: Session,
) -> AppResult<Response> {
    render_fragment("", q.as_deref().unwrap_or(""), &connections, &session).await
}

async fn render_fragment(
    fragment: &str,
    search: &str,
    connections: &SharedConnections,
    session: &Session,
) -> AppResult<Response> {
    let store = SessionStore::load(session).await?;
    let Some(user) = store.user() else {
        return Ok(Redirect::to("/login").into_response());
    };

    let page = Page::from_fragment(fragment);
    let connections = connections.lock().await;
    Ok(Html(render_page(page, user, &*connections, search)).into_response())
}
