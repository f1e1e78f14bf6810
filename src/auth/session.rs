use tower_sessions::Session;

use crate::AppResult;

use super::users::{find_demo_user, User, DEMO_SECRET};

/// Cookie-session key holding the signed-in user's handle.
pub const USER_HANDLE: &str = "user_handle";

/// The identity of one browser session. At most one user is signed in.
#[derive(Debug, Default, Clone)]
pub struct SessionStore {
    user: Option<&'static User>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signs in when `secret` is the demo secret and `handle` names a demo
    /// user. A failed attempt leaves the current session as it was.
    pub fn login(&mut self, handle: &str, secret: &str) -> bool {
        if secret != DEMO_SECRET {
            return false;
        }
        let Some(user) = find_demo_user(handle) else {
            return false;
        };
        self.user = Some(user);
        true
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&'static User> {
        self.user
    }

    /// Restores the store from the cookie session. A handle that no longer
    /// names a demo user reads as signed out.
    pub async fn load(session: &Session) -> AppResult<Self> {
        let user = session
            .get::<String>(USER_HANDLE)
            .await?
            .and_then(|handle| find_demo_user(&handle));
        Ok(Self { user })
    }

    pub async fn save(&self, session: &Session) -> AppResult<()> {
        match self.user {
            Some(user) => {
                session.insert(USER_HANDLE, user.handle).await?;
            }
            None => {
                session.clear().await;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::users::{demo_users, Role};

    #[test]
    fn starts_signed_out() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
    }

    #[test]
    fn every_demo_handle_signs_in_with_the_shared_secret() {
        for user in demo_users() {
            let mut store = SessionStore::new();
            assert!(store.login(user.handle, "User123"));
            assert!(store.is_authenticated());
            assert_eq!(store.user(), Some(user));
        }
    }

    #[test]
    fn bad_credentials_leave_the_session_untouched() {
        let mut store = SessionStore::new();
        assert!(!store.login("alumni", "user123"));
        assert!(!store.login("nobody", "User123"));
        assert!(!store.is_authenticated());

        assert!(store.login("diaspora", "User123"));
        assert!(!store.login("admin", "wrong"));
        assert_eq!(store.user().map(|u| u.role), Some(Role::Diaspora));
    }

    #[test]
    fn logout_always_signs_out() {
        let mut store = SessionStore::new();
        store.logout();
        assert!(!store.is_authenticated());

        store.login("admin", "User123");
        store.logout();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn login_switches_users() {
        let mut store = SessionStore::new();
        store.login("alumni", "User123");
        store.login("admin", "User123");
        assert_eq!(store.user().map(|u| u.handle), Some("admin"));
    }
}
