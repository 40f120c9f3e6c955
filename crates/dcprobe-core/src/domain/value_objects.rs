//! Domain value objects: Credentials, Datacenter.
//!
//! # Design
//!
//! These are pure value types — equality-by-value, no identity. They hold
//! NO connection logic. Everything that decides whether a descriptor is
//! acceptable lives in `validation.rs`. This file's only job is to define
//! the types, their string representations, and their parsers.
//!
//! `Credentials` is the one value type with a twist: its password must not
//! leak into logs or terminal output, so both `Debug` and `Display` redact
//! it. Code that genuinely needs the raw secret calls
//! [`Credentials::password`] explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

// ── Credentials ───────────────────────────────────────────────────────────────

/// A username/password pair for basic authentication against the endpoint.
///
/// The two fields travel together: a descriptor either carries a full pair
/// or no credentials at all (enforced by `validation.rs`).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The raw secret. Callers are responsible for not rendering this.
    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Redacted — the password never appears in `{:?}` output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:***", self.username)
    }
}

// ── Datacenter ────────────────────────────────────────────────────────────────

/// An opaque named resource returned by the remote inventory query.
///
/// The core never inspects its structure; the name is carried through to
/// output exactly as the backend returned it — no reordering, no dedup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Datacenter(String);

impl Datacenter {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Datacenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Datacenter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DomainError::InvalidDescriptor(
                "datacenter name cannot be empty".into(),
            ));
        }
        Ok(Self(s.to_owned()))
    }
}

impl From<&str> for Datacenter {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}
