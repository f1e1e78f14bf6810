use axum::{debug_handler, extract::Query, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::info;

use crate::AppResult;

use super::SessionStore;

#[derive(Deserialize)]
pub(crate) struct LogoutQuery {
    pub(crate) return_url: Option<String>,
}

#[debug_handler]
pub(crate) async fn logout(
    Query(LogoutQuery { return_url }): Query<LogoutQuery>,
    session: Session,
) -> AppResult<Redirect> {
    let mut store = SessionStore::load(&session).await?;
    if let Some(user) = store.user() {
        info!("goodbye @{}", user.handle);
    }
    store.logout();
    store.save(&session).await?;

    let return_url = return_url
        .as_deref()
        .filter(|url| url.starts_with('/') && !url.starts_with("//"))
        .unwrap_or("/login");
    Ok(Redirect::to(return_url))
}
