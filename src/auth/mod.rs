mod login;
mod logout;
pub mod session;
pub mod users;

use axum::{routing::get, Router};

use crate::AppState;

pub use login::LOGIN_FAILED;
pub use session::SessionStore;
pub use users::{find_demo_user, Role, User};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login::login_page).post(login::login))
        .route("/logout", get(logout::logout))
}
