use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::{Role, User};

use super::{
    request::{ConnectionRequest, SendOptions, DEFAULT_MESSAGE, JUST_NOW},
    slot::Slot,
};

/// Slot key the request list lives under.
pub const CONNECTIONS_KEY: &str = "aadf_connect_requests_v1";

/// Pending connection requests, newest first, mirrored to a [`Slot`] after
/// every mutation.
#[derive(Debug)]
pub struct ConnectionStore<S> {
    slot: S,
    requests: Vec<ConnectionRequest>,
}

impl<S: Slot> ConnectionStore<S> {
    /// Loads the persisted list. Missing or unreadable data starts the store
    /// empty.
    pub async fn open(slot: S) -> Self {
        let requests = match slot.read(CONNECTIONS_KEY).await {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("discarding malformed connection requests: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("could not read connection requests: {:#}", e.0);
                Vec::new()
            }
        };

        Self { slot, requests }
    }

    pub fn requests(&self) -> &[ConnectionRequest] {
        &self.requests
    }

    /// Requests addressed to members holding `role`.
    pub fn incoming(&self, role: Role) -> impl Iterator<Item = &ConnectionRequest> {
        self.requests.iter().filter(move |req| req.to_type == role)
    }

    /// Prepends a request from `sender` to everyone holding `to_type`.
    /// Without a signed-in sender nothing happens.
    pub async fn send_request(
        &mut self,
        sender: Option<&User>,
        to_type: Role,
        SendOptions { message, from_name }: SendOptions,
    ) -> Option<String> {
        let sender = sender?;

        let req = ConnectionRequest {
            id: Uuid::new_v4().to_string(),
            from_name: from_name.unwrap_or_else(|| sender.name.to_owned()),
            from_type: sender.role,
            to_type,
            message: Some(message.unwrap_or_else(|| DEFAULT_MESSAGE.to_owned())),
            time: JUST_NOW.to_owned(),
        };
        let id = req.id.clone();

        info!("@{} sent connection request {id} to {to_type}", sender.handle);
        self.requests.insert(0, req);
        self.persist().await;

        Some(id)
    }

    pub async fn accept_request(&mut self, id: &str) -> bool {
        let removed = self.remove(id).await;
        if removed {
            info!("accepted connection request {id}");
        }
        removed
    }

    pub async fn decline_request(&mut self, id: &str) -> bool {
        let removed = self.remove(id).await;
        if removed {
            info!("declined connection request {id}");
        }
        removed
    }

    async fn remove(&mut self, id: &str) -> bool {
        let before = self.requests.len();
        self.requests.retain(|req| req.id != id);
        self.persist().await;
        self.requests.len() != before
    }

    async fn persist(&self) {
        let raw = match serde_json::to_string(&self.requests) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("could not encode connection requests: {e}");
                return;
            }
        };

        if let Err(e) = self.slot.write(CONNECTIONS_KEY, &raw).await {
            warn!("could not persist connection requests: {:#}", e.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{
        auth::find_demo_user,
        connections::slot::MemorySlot,
        AppResult,
    };

    const ALICE: User = User {
        id: "42",
        handle: "alice",
        role: Role::Alumni,
        name: "Alice",
        email: "alice@example.com",
        avatar: None,
    };

    async fn empty_store() -> ConnectionStore<MemorySlot> {
        ConnectionStore::open(MemorySlot::default()).await
    }

    #[tokio::test]
    async fn send_then_decline_leaves_the_list_empty() {
        let mut store = empty_store().await;

        let id = store
            .send_request(Some(&ALICE), Role::Diaspora, SendOptions::with_message("hi"))
            .await
            .unwrap();

        let [req] = store.requests() else {
            panic!("expected exactly one request, got {:?}", store.requests());
        };
        assert_eq!(req.id, id);
        assert_eq!(req.from_name, "Alice");
        assert_eq!(req.from_type, Role::Alumni);
        assert_eq!(req.to_type, Role::Diaspora);
        assert_eq!(req.message.as_deref(), Some("hi"));
        assert_eq!(req.time, "just now");

        assert!(store.decline_request(&id).await);
        assert!(store.requests().is_empty());
    }

    #[tokio::test]
    async fn send_without_a_session_is_a_noop() {
        let mut store = empty_store().await;
        assert_eq!(store.send_request(None, Role::Admin, SendOptions::default()).await, None);
        assert!(store.requests().is_empty());
        assert_eq!(store.slot.read(CONNECTIONS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn sends_are_newest_first_with_distinct_ids() {
        let mut store = empty_store().await;
        let user = find_demo_user("diaspora").unwrap();

        let mut ids = Vec::new();
        for _ in 0..5 {
            ids.push(
                store
                    .send_request(Some(user), Role::Alumni, SendOptions::default())
                    .await
                    .unwrap(),
            );
        }

        assert_eq!(store.requests().len(), 5);
        let stored: Vec<_> = store.requests().iter().map(|r| r.id.clone()).collect();
        ids.reverse();
        assert_eq!(stored, ids);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 5);
    }

    #[tokio::test]
    async fn defaults_come_from_the_session_user() {
        let mut store = empty_store().await;
        let user = find_demo_user("admin").unwrap();

        store.send_request(Some(user), Role::Alumni, SendOptions::default()).await;

        let req = &store.requests()[0];
        assert_eq!(req.from_name, "AADF Staff");
        assert_eq!(req.from_type, Role::Admin);
        assert_eq!(req.message.as_deref(), Some("wants to connect with you"));
    }

    #[tokio::test]
    async fn name_override_keeps_the_session_role() {
        let mut store = empty_store().await;
        let opts = SendOptions {
            from_name: Some("Dr. Smith".to_owned()),
            ..SendOptions::default()
        };

        store.send_request(Some(&ALICE), Role::Admin, opts).await;

        let req = &store.requests()[0];
        assert_eq!(req.from_name, "Dr. Smith");
        assert_eq!(req.from_type, Role::Alumni);
    }

    #[tokio::test]
    async fn removing_an_unknown_id_changes_nothing() {
        let mut store = empty_store().await;
        store.send_request(Some(&ALICE), Role::Diaspora, SendOptions::default()).await;

        assert!(!store.accept_request("missing").await);
        assert!(!store.decline_request("missing").await);
        assert_eq!(store.requests().len(), 1);
    }

    #[tokio::test]
    async fn accept_removes_exactly_one() {
        let mut store = empty_store().await;
        let first = store
            .send_request(Some(&ALICE), Role::Diaspora, SendOptions::default())
            .await
            .unwrap();
        let second = store
            .send_request(Some(&ALICE), Role::Diaspora, SendOptions::default())
            .await
            .unwrap();

        assert!(store.accept_request(&first).await);
        assert_eq!(store.requests().len(), 1);
        assert_eq!(store.requests()[0].id, second);
        assert!(!store.accept_request(&first).await);
    }

    #[tokio::test]
    async fn incoming_filters_by_target_role() {
        let mut store = empty_store().await;
        store.send_request(Some(&ALICE), Role::Diaspora, SendOptions::default()).await;
        store.send_request(Some(&ALICE), Role::Admin, SendOptions::default()).await;
        store.send_request(Some(&ALICE), Role::Diaspora, SendOptions::default()).await;

        assert_eq!(store.incoming(Role::Diaspora).count(), 2);
        assert_eq!(store.incoming(Role::Admin).count(), 1);
        assert_eq!(store.incoming(Role::Alumni).count(), 0);
    }

    #[tokio::test]
    async fn reopening_restores_the_same_list() {
        let mut store = empty_store().await;
        store.send_request(Some(&ALICE), Role::Diaspora, SendOptions::with_message("hi")).await;
        store.send_request(Some(&ALICE), Role::Admin, SendOptions::default()).await;
        let before = store.requests().to_vec();

        let ConnectionStore { slot, .. } = store;
        let reopened = ConnectionStore::open(slot).await;
        assert_eq!(reopened.requests(), before.as_slice());
    }

    #[tokio::test]
    async fn malformed_data_opens_empty() {
        for raw in ["not json", "{\"id\":1}", "[{\"id\":\"x\"}]", ""] {
            let store = ConnectionStore::open(MemorySlot::with_entry(CONNECTIONS_KEY, raw)).await;
            assert!(store.requests().is_empty(), "{raw:?} should open empty");
        }
    }

    #[tokio::test]
    async fn reads_lists_written_elsewhere() {
        let raw = r#"[{"id":"a1","fromName":"Maria Doe","fromType":"diaspora","toType":"alumni","message":"hello","time":"2h ago"}]"#;
        let mut store = ConnectionStore::open(MemorySlot::with_entry(CONNECTIONS_KEY, raw)).await;

        assert_eq!(store.incoming(Role::Alumni).count(), 1);
        assert!(store.accept_request("a1").await);
        assert_eq!(
            store.slot.read(CONNECTIONS_KEY).await.unwrap().as_deref(),
            Some("[]")
        );
    }

    struct FailingSlot;

    impl Slot for FailingSlot {
        async fn read(&self, _key: &str) -> AppResult<Option<String>> {
            Err("disk on fire".into())
        }

        async fn write(&self, _key: &str, _value: &str) -> AppResult<()> {
            Err("disk on fire".into())
        }
    }

    #[tokio::test]
    async fn slot_failures_never_surface() {
        let mut store = ConnectionStore::open(FailingSlot).await;
        assert!(store.requests().is_empty());

        let id = store
            .send_request(Some(&ALICE), Role::Diaspora, SendOptions::default())
            .await
            .unwrap();
        assert_eq!(store.requests().len(), 1);
        assert!(store.decline_request(&id).await);
    }
}
