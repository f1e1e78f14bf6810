pub mod auth;
pub mod config;
pub mod connections;
pub mod pages;
pub mod res;

use std::sync::Arc;

use axum::{extract::FromRef, http::StatusCode, response::{IntoResponse, Response}, Router};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

use connections::{ConnectionStore, SqliteSlot};

pub type SharedConnections = Arc<Mutex<ConnectionStore<SqliteSlot>>>;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub connections: SharedConnections,
}

impl AppState {
    pub fn new(connections: ConnectionStore<SqliteSlot>) -> Self {
        Self {
            connections: Arc::new(Mutex::new(connections)),
        }
    }
}

/// Builds the full router: pages, auth and connection routes behind an
/// in-memory cookie session.
pub fn app(state: AppState, inactivity: time::Duration) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(inactivity));

    Router::new()
        .merge(pages::router())
        .merge(auth::router())
        .nest("/connections", connections::router())
        .with_state(state)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
}

pub type AppResult<T> = Result<T, AppError>;
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("{}\n\n{}", self.0, self.0.backtrace()),
        )
            .into_response()
    }
}

impl From<&str> for AppError {
    fn from(err: &str) -> Self {
        Self(anyhow::Error::msg(err.to_owned()))
    }
}

macro_rules! apperr_impl {
    ($E:ty) => {
        impl From<$E> for AppError {
            fn from(err: $E) -> Self {
                Self(anyhow::Error::from(err))
            }
        }
    };
}

apperr_impl!(sqlx::Error);
apperr_impl!(tower_sessions::session::Error);
