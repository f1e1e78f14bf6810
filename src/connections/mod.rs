mod request;
mod slot;
mod store;

use axum::{debug_handler, extract::{Path, State}, response::Redirect, routing::post, Form, Router};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{auth::{Role, SessionStore}, AppResult, AppState, SharedConnections};

pub use request::{ConnectionRequest, SendOptions, DEFAULT_MESSAGE, JUST_NOW};
pub use slot::{MemorySlot, Slot, SqliteSlot};
pub use store::{ConnectionStore, CONNECTIONS_KEY};

const BACK_TO_NETWORK: &str = "/#network-connections";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(send))
        .route("/{id}/accept", post(accept))
        .route("/{id}/decline", post(decline))
}

#[derive(Debug, Deserialize)]
pub(crate) struct SendForm {
    to: Role,
    message: Option<String>,
}

#[debug_handler(state = AppState)]
pub(crate) async fn send(
    State(connections): State<SharedConnections>,
    session: Session,
    Form(SendForm { to, message }): Form<SendForm>,
) -> AppResult<Redirect> {
    let store = SessionStore::load(&session).await?;
    let Some(user) = store.user() else {
        return Ok(Redirect::to("/login"));
    };

    let message = message.map(|m| m.trim().to_owned()).filter(|m| !m.is_empty());
    connections
        .lock()
        .await
        .send_request(Some(user), to, SendOptions { message, from_name: None })
        .await;

    Ok(Redirect::to(BACK_TO_NETWORK))
}

#[debug_handler(state = AppState)]
pub(crate) async fn accept(
    Path(id): Path<String>,
    State(connections): State<SharedConnections>,
    session: Session,
) -> AppResult<Redirect> {
    if !SessionStore::load(&session).await?.is_authenticated() {
        return Ok(Redirect::to("/login"));
    }

    connections.lock().await.accept_request(&id).await;
    Ok(Redirect::to(BACK_TO_NETWORK))
}

#[debug_handler(state = AppState)]
pub(crate) async fn decline(
    Path(id): Path<String>,
    State(connections): State<SharedConnections>,
    session: Session,
) -> AppResult<Redirect> {
    if !SessionStore::load(&session).await?.is_authenticated() {
        return Ok(Redirect::to("/login"));
    }

    connections.lock().await.decline_request(&id).await;
    Ok(Redirect::to(BACK_TO_NETWORK))
}
