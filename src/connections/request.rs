use serde::{Deserialize, Serialize};

use crate::auth::Role;

pub const DEFAULT_MESSAGE: &str = "wants to connect with you";
pub const JUST_NOW: &str = "just now";

/// A pending request from one member to everyone holding `to_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRequest {
    pub id: String,
    pub from_name: String,
    pub from_type: Role,
    pub to_type: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub time: String,
}

/// Caller-supplied overrides for a new request. The sender role is always
/// the signed-in user's.
#[derive(Debug, Default, Clone)]
pub struct SendOptions {
    pub message: Option<String>,
    pub from_name: Option<String>,
}

impl SendOptions {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }
}
