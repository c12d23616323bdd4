//! Request identity and the ownership rule.

use std::fmt;

/// The authenticated username associated with a request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    pub fn new(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of an ownership check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny,
}

/// Allow iff the caller is the resource owner
pub fn authorize(identity: &Identity, resource_owner: &str) -> Access {
    if identity.as_str() == resource_owner {
        Access::Allow
    } else {
        Access::Deny
    }
}
