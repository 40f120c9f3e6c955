//! Fixture inventory model and loader.
//!
//! Parses an `inventory.toml` fixture describing what a validator backend
//! should answer, converting it into an [`Inventory`] ready for use by the
//! static validator factory.
//!
//! # `inventory.toml` format
//!
//! ```toml
//! # Optional: credentials the endpoint expects. When present, connection
//! # attempts with a different username/password pair are rejected the way
//! # a real endpoint would reject bad basic-auth. When absent, any
//! # descriptor is accepted.
//! [endpoint]
//! username = "root"
//! password = "password"
//!
//! # Datacenter names, answered in exactly this order.
//! datacenters = ["DC0", "DC1"]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use dcprobe_core::{
    domain::{Credentials, Datacenter},
    error::{ProbeError, ProbeResult},
};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of an `inventory.toml` file.
///
/// All fields map 1-to-1 to TOML sections; see the module-level docs for
/// the full format.
#[derive(Debug, Deserialize, Clone)]
pub struct InventoryManifest {
    /// `[endpoint]` section — expected credentials, if any.
    pub endpoint: Option<EndpointSection>,
    /// Datacenter names in answer order.
    pub datacenters: Vec<String>,
}

/// `[endpoint]` section — the credentials the fixture endpoint expects.
#[derive(Debug, Deserialize, Clone)]
pub struct EndpointSection {
    pub username: String,
    pub password: String,
}

// ── Inventory ─────────────────────────────────────────────────────────────────

/// What a static validator backend knows: optionally which credentials to
/// insist on, and which datacenters to answer with.
#[derive(Debug, Clone)]
pub struct Inventory {
    expected: Option<Credentials>,
    datacenters: Vec<Datacenter>,
}

impl Inventory {
    /// An inventory that accepts any descriptor and answers `datacenters`.
    pub fn new(datacenters: impl IntoIterator<Item = Datacenter>) -> Self {
        Self {
            expected: None,
            datacenters: datacenters.into_iter().collect(),
        }
    }

    /// Require the given credentials on connect.
    pub fn with_expected_credentials(mut self, credentials: Credentials) -> Self {
        self.expected = Some(credentials);
        self
    }

    pub fn expected_credentials(&self) -> Option<&Credentials> {
        self.expected.as_ref()
    }

    pub fn datacenters(&self) -> &[Datacenter] {
        &self.datacenters
    }

    /// Load an inventory from a TOML fixture file.
    pub fn load_from_path(path: &Path) -> ProbeResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| ProbeError::Configuration {
            message: format!("cannot read inventory '{}': {}", path.display(), e),
        })?;

        let manifest: InventoryManifest =
            toml::from_str(&raw).map_err(|e| ProbeError::Configuration {
                message: format!("invalid inventory '{}': {}", path.display(), e),
            })?;

        debug!(
            path = %path.display(),
            datacenters = manifest.datacenters.len(),
            "Inventory fixture loaded"
        );

        Ok(Self::from(manifest))
    }
}

impl From<InventoryManifest> for Inventory {
    fn from(manifest: InventoryManifest) -> Self {
        Self {
            expected: manifest
                .endpoint
                .map(|e| Credentials::new(e.username, e.password)),
            datacenters: manifest.datacenters.into_iter().map(Datacenter::new).collect(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
