//! Principal types shared by every portal.
//!
//! DESIGN
//! ======
//! The backend assigns roles; the client treats them as a closed set and
//! rejects anything else at deserialization time instead of carrying an
//! unknown string around.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of principal, assigned server-side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Tutor,
    Admin,
    Manager,
    SuperAdmin,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Student, Role::Tutor, Role::Admin, Role::Manager, Role::SuperAdmin];

    /// Wire name of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Tutor => "tutor",
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::SuperAdmin => "super_admin",
        }
    }

    /// Roles allowed into the admin portal.
    #[must_use]
    pub fn is_admin_tier(self) -> bool {
        matches!(self, Role::Admin | Role::Manager | Role::SuperAdmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| format!("unknown role: {raw}"))
    }
}

/// Profile of the signed-in principal as returned by the auth endpoints.
///
/// Only `role` is mandatory; the remaining fields default when a stored or
/// returned profile omits them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "full_name")]
    pub full_name: String,
    pub role: Role,
    #[serde(default, alias = "avatar_url", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl User {
    /// Name to show in headers: full name, falling back to email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() { &self.email } else { &self.full_name }
    }
}
