//! Type definitions for the GlobalIdentity client.

use serde::{Deserialize, Serialize};

/// Result of a successful user authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authorization {
    /// Authentication token for subsequent calls.
    pub token: String,
    /// Key identifying the authenticated user.
    pub key: String,
}

/// A role granted to a user within an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    /// Role name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Whether the role is active.
    pub active: bool,
}

/// A user registered in an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Key identifying the user.
    pub user_key: String,
    /// User's name.
    pub name: String,
    /// User's email address.
    pub email: String,
    /// Free-form comment about the user in the application.
    pub comment: String,
    /// Whether the account is active.
    pub active: bool,
    /// Whether the account is locked out.
    pub locked_out: bool,
    /// Role names granted to the user (populated when roles are requested).
    pub roles: Vec<String>,
}
