//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the validator
//! service. The `dcprobe-adapters` crate provides implementations; the
//! core never learns the wire protocol, authentication mechanism, or
//! transport hiding behind them.

use crate::domain::{ConnectionDescriptor, Datacenter};
use crate::error::ProbeResult;

/// Port for establishing a validated session against an endpoint.
///
/// Implemented by:
/// - `dcprobe_adapters::validator::StaticValidatorFactory` (fixture-backed)
/// - a remote control-plane client (future: SOAP/REST session adapter)
///
/// ## Contract
///
/// Given a consistent descriptor, `connect` either returns a usable handle
/// or fails with a connection error. Callers must treat the call as
/// fallible and must not issue queries after a failure — fail-fast, no
/// retry (retrying is the caller's policy decision, not the port's).
pub trait ValidatorFactory: Send + Sync {
    /// Establish a session described by `descriptor`.
    fn connect(&self, descriptor: &ConnectionDescriptor) -> ProbeResult<Box<dyn ValidatorHandle>>;
}

/// Port for queries over an established session.
///
/// The handle is an opaque capability: holding one is proof that
/// construction succeeded. Queries return fully materialized sequences in
/// backend order — the core performs no reordering or deduplication.
pub trait ValidatorHandle: Send + Sync {
    /// List the datacenters visible to this session.
    fn list_datacenters(&self) -> ProbeResult<Vec<Datacenter>>;
}
