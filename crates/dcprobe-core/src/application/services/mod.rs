//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "list the datacenters behind this endpoint".

pub mod bootstrap_service;

pub use bootstrap_service::BootstrapService;
