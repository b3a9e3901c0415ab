// SPDX-License-Identifier: MIT

//!
//! User profiles and the shared editing password
//!

use serde::{Deserialize, Serialize};

/// What a user is allowed to do
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    /// Create, edit, and delete events
    pub can_edit: bool,

    /// Import, export, and replace the whole collection
    pub can_administer: bool,
}

/// The locally stored user profile
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,

    /// Free text (not limited to the event roles, e.g. `Admin`)
    pub role: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub permissions: Permissions,
}

impl UserProfile {
    /// The built in demo users
    pub fn demo_users() -> Vec<UserProfile> {
        let user = |id: &str, name: &str, role: &str, can_edit, can_administer| UserProfile {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            avatar_url: None,
            permissions: Permissions {
                can_edit,
                can_administer,
            },
        };
        vec![
            user("u1", "Admin Adminsen", "Admin", true, true),
            user("u2", "Fakultetsadmin Olsen", "Saksbehandler", true, false),
            user("u3", "Student Studentesen", "Student", false, false),
        ]
    }
}

/// The password that unlocks editing
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct SharedPassword(String);

impl SharedPassword {
    pub fn new<S: ToString>(password: S) -> Self {
        Self(password.to_string())
    }

    /// Whether the attempt matches the password
    pub fn verify(&self, attempt: &str) -> bool {
        self.0 == attempt
    }
}

impl Default for SharedPassword {
    fn default() -> Self {
        Self::new("ntnu")
    }
}

// Never print the password
impl std::fmt::Debug for SharedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedPassword(..)")
    }
}
