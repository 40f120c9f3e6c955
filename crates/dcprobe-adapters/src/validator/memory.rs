//! In-memory validator backend over a fixture inventory.
//!
//! This is the shipped implementation of the validator ports: it behaves
//! like a remote endpoint — rejecting bad credentials, failing on demand —
//! without any wire protocol behind it. Integration tests and offline use
//! run entirely against this backend.

use std::path::Path;
use std::sync::{Arc, RwLock};

use tracing::debug;

use dcprobe_core::{
    application::{
        ApplicationError,
        ports::{ValidatorFactory, ValidatorHandle},
    },
    domain::{ConnectionDescriptor, Datacenter, DomainValidator as validator},
    error::ProbeResult,
};

use crate::inventory::Inventory;

/// Thread-safe fixture-backed validator factory.
#[derive(Clone, Debug)]
pub struct StaticValidatorFactory {
    inner: Arc<RwLock<Inventory>>,
    fail_connect: Option<String>,
    fail_query: Option<String>,
}

impl StaticValidatorFactory {
    /// Create a factory answering from the given inventory.
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(inventory)),
            fail_connect: None,
            fail_query: None,
        }
    }

    /// Create a factory from a TOML fixture file.
    pub fn from_toml_file(path: &Path) -> ProbeResult<Self> {
        Ok(Self::new(Inventory::load_from_path(path)?))
    }

    /// Failure injection: every `connect` fails with `reason`.
    pub fn failing_connect(inventory: Inventory, reason: impl Into<String>) -> Self {
        Self {
            fail_connect: Some(reason.into()),
            ..Self::new(inventory)
        }
    }

    /// Failure injection: `connect` succeeds, every query fails with
    /// `reason`.
    pub fn failing_query(inventory: Inventory, reason: impl Into<String>) -> Self {
        Self {
            fail_query: Some(reason.into()),
            ..Self::new(inventory)
        }
    }

    fn authorize(&self, descriptor: &ConnectionDescriptor) -> Result<(), ApplicationError> {
        let inventory = self
            .inner
            .read()
            .map_err(|_| ApplicationError::InventoryLockError)?;

        let Some(expected) = inventory.expected_credentials() else {
            return Ok(()); // fixture accepts anonymous and any-auth connects
        };

        match descriptor.credentials() {
            Some(given) if given == expected => Ok(()),
            Some(given) => Err(ApplicationError::ConnectionFailed {
                reason: format!("authentication rejected for user '{}'", given.username()),
            }),
            None => Err(ApplicationError::ConnectionFailed {
                reason: "endpoint requires credentials".into(),
            }),
        }
    }
}

impl ValidatorFactory for StaticValidatorFactory {
    fn connect(&self, descriptor: &ConnectionDescriptor) -> ProbeResult<Box<dyn ValidatorHandle>> {
        validator::validate_descriptor(descriptor)?;

        if let Some(reason) = &self.fail_connect {
            return Err(ApplicationError::ConnectionFailed {
                reason: reason.clone(),
            }
            .into());
        }

        self.authorize(descriptor)?;

        debug!(
            host = descriptor.host(),
            force = descriptor.force(),
            "Static backend accepted connection"
        );

        let datacenters = self
            .inner
            .read()
            .map_err(|_| ApplicationError::InventoryLockError)?
            .datacenters()
            .to_vec();

        Ok(Box::new(StaticValidatorHandle {
            datacenters,
            fail_query: self.fail_query.clone(),
        }))
    }
}

/// Session handle over a snapshot of the fixture inventory.
///
/// The snapshot is taken at connect time: mutations to the factory's
/// inventory after a handle exists do not change that handle's answers,
/// matching the session semantics of a real endpoint.
pub struct StaticValidatorHandle {
    datacenters: Vec<Datacenter>,
    fail_query: Option<String>,
}

impl ValidatorHandle for StaticValidatorHandle {
    fn list_datacenters(&self) -> ProbeResult<Vec<Datacenter>> {
        if let Some(reason) = &self.fail_query {
            return Err(ApplicationError::QueryFailed {
                reason: reason.clone(),
            }
            .into());
        }

        Ok(self.datacenters.clone())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use dcprobe_core::domain::Credentials;

    fn inventory() -> Inventory {
        Inventory::new([Datacenter::new("DC0"), Datacenter::new("DC1")])
    }

    fn descriptor(user: &str, pass: &str) -> ConnectionDescriptor {
        ConnectionDescriptor::builder()
            .host("192.168.1.86")
            .credentials(user, pass)
            .build()
            .unwrap()
    }

    #[test]
    fn open_inventory_accepts_any_credentials() {
        let factory = StaticValidatorFactory::new(inventory());
        let handle = factory.connect(&descriptor("anyone", "anything")).unwrap();
        assert_eq!(handle.list_datacenters().unwrap().len(), 2);
    }

    #[test]
    fn open_inventory_accepts_anonymous_connect() {
        let factory = StaticValidatorFactory::new(inventory());
        let anonymous = ConnectionDescriptor::builder()
            .host("192.168.1.86")
            .build()
            .unwrap();
        assert!(factory.connect(&anonymous).is_ok());
    }

    #[test]
    fn guarded_inventory_rejects_wrong_password() {
        let factory = StaticValidatorFactory::new(
            inventory().with_expected_credentials(Credentials::new("root", "password")),
        );

        let err = factory
            .connect(&descriptor("root", "wrong"))
            .map(|_| ())
            .unwrap_err();
        assert!(err.to_string().contains("authentication rejected"));
    }

    #[test]
    fn guarded_inventory_rejects_anonymous_connect() {
        let factory = StaticValidatorFactory::new(
            inventory().with_expected_credentials(Credentials::new("root", "password")),
        );
        let anonymous = ConnectionDescriptor::builder()
            .host("192.168.1.86")
            .build()
            .unwrap();

        let err = factory.connect(&anonymous).map(|_| ()).unwrap_err();
        assert!(err.to_string().contains("requires credentials"));
    }

    #[test]
    fn guarded_inventory_accepts_matching_credentials() {
        let factory = StaticValidatorFactory::new(
            inventory().with_expected_credentials(Credentials::new("root", "password")),
        );
        assert!(factory.connect(&descriptor("root", "password")).is_ok());
    }

    #[test]
    fn injected_connect_failure_surfaces_reason() {
        let factory = StaticValidatorFactory::failing_connect(inventory(), "host unreachable");
        let err = factory
            .connect(&descriptor("root", "password"))
            .map(|_| ())
            .unwrap_err();
        assert!(err.to_string().contains("host unreachable"));
    }

    #[test]
    fn injected_query_failure_connects_but_fails_listing() {
        let factory = StaticValidatorFactory::failing_query(inventory(), "session expired");
        let handle = factory.connect(&descriptor("root", "password")).unwrap();
        assert!(handle.list_datacenters().is_err());
    }

    #[test]
    fn handle_answers_in_fixture_order() {
        let factory = StaticValidatorFactory::new(Inventory::new([
            Datacenter::new("DC3"),
            Datacenter::new("DC1"),
            Datacenter::new("DC2"),
        ]));

        let handle = factory.connect(&descriptor("root", "password")).unwrap();
        let names: Vec<String> = handle
            .list_datacenters()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(names, ["DC3", "DC1", "DC2"]);
    }
}
