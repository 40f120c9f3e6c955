//! Bootstrap Service - main application orchestrator.
//!
//! This service coordinates the entire probe workflow:
//! 1. Validate the connection descriptor
//! 2. Obtain a validator handle from the factory port
//! 3. Query the datacenter inventory
//!
//! It implements the driving port (incoming) and uses driven ports
//! (outgoing). The flow is a strict pipeline: each step aborts the run on
//! failure, and the query step is never reached when construction fails.

use tracing::{info, instrument};

use crate::{
    application::ports::{ValidatorFactory, ValidatorHandle},
    domain::{ConnectionDescriptor, Datacenter, DomainValidator as validator},
    error::{ProbeError, ProbeResult},
};

/// Main bootstrap service.
///
/// Orchestrates descriptor validation, session establishment, and the
/// inventory query.
pub struct BootstrapService {
    factory: Box<dyn ValidatorFactory>,
}

impl BootstrapService {
    /// Create a new bootstrap service with the given factory adapter.
    pub fn new(factory: Box<dyn ValidatorFactory>) -> Self {
        Self { factory }
    }

    /// Connect and list datacenters.
    ///
    /// This is the main use case: the returned sequence is finite, fully
    /// materialized, and in backend order.
    #[instrument(skip_all, fields(descriptor = %descriptor))]
    pub fn datacenters(&self, descriptor: &ConnectionDescriptor) -> ProbeResult<Vec<Datacenter>> {
        let handle = self.establish(descriptor)?;

        let datacenters = handle.list_datacenters()?;
        info!(count = datacenters.len(), "Inventory query completed");

        Ok(datacenters)
    }

    /// Connect only: succeed iff a validator handle can be constructed.
    #[instrument(skip_all, fields(descriptor = %descriptor))]
    pub fn check(&self, descriptor: &ConnectionDescriptor) -> ProbeResult<()> {
        self.establish(descriptor).map(|_| ())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Validate the descriptor, then ask the factory for a session handle.
    fn establish(
        &self,
        descriptor: &ConnectionDescriptor,
    ) -> ProbeResult<Box<dyn ValidatorHandle>> {
        validator::validate_descriptor(descriptor).map_err(ProbeError::Domain)?;

        info!(host = descriptor.host(), "Establishing validator session");
        let handle = self.factory.connect(descriptor)?;
        info!("Validator session established");

        Ok(handle)
    }
}
