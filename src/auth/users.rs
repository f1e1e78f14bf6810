use std::fmt;

use serde::{Deserialize, Serialize};

/// The shared secret every demo account signs in with.
pub const DEMO_SECRET: &str = "User123";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Alumni,
    Diaspora,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Alumni, Role::Diaspora, Role::Admin];

    pub fn id(&self) -> &'static str {
        use Role::*;
        match self {
            Alumni => "alumni",
            Diaspora => "diaspora",
            Admin => "admin",
        }
    }

    /// Badge text shown next to the user in the header.
    pub fn label(&self) -> &'static str {
        use Role::*;
        match self {
            Alumni => "Alumni",
            Diaspora => "Diaspora Professional",
            Admin => "AADF Staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: &'static str,
    pub handle: &'static str,
    pub role: Role,
    pub name: &'static str,
    pub email: &'static str,
    pub avatar: Option<&'static str>,
}

impl User {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

static DEMO_USERS: [User; 3] = [
    User {
        id: "1",
        handle: "alumni",
        role: Role::Alumni,
        name: "John Smith",
        email: "john.smith@email.com",
        avatar: Some("/api/placeholder/64/64"),
    },
    User {
        id: "2",
        handle: "diaspora",
        role: Role::Diaspora,
        name: "Maria Doe",
        email: "maria.doe@email.com",
        avatar: Some("/api/placeholder/64/64"),
    },
    User {
        id: "3",
        handle: "admin",
        role: Role::Admin,
        name: "AADF Staff",
        email: "admin@aadf.org",
        avatar: Some("/api/placeholder/64/64"),
    },
];

pub fn demo_users() -> &'static [User] {
    &DEMO_USERS
}

pub fn find_demo_user(handle: &str) -> Option<&'static User> {
    DEMO_USERS.iter().find(|user| user.handle == handle)
}
