use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque caller identity (wallet address, account id, etc.).
///
/// The core never interprets the string; it only compares identities
/// for equality. Every command takes the caller explicitly instead of
/// trusting ambient session state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Identity(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Identity(s.to_string())
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Identity(s)
    }
}

/// Closed set of roles recognized by the registry.
///
/// Resolved through the access control guard only, never from a
/// free-text field supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    GovernmentAuthority,
}

/// Answer from the access control guard for one (property, caller) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleCheck {
    pub is_owner: bool,
    pub is_government: bool,
}

impl RoleCheck {
    pub fn role(&self) -> Role {
        if self.is_government {
            Role::GovernmentAuthority
        } else {
            Role::User
        }
    }
}
