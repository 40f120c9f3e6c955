//! Domain entities.
//!
//! One aggregate root lives here: the connection descriptor. The opaque
//! values it collaborates with (credentials, datacenters) are value
//! objects in `super::value_objects`.

pub mod descriptor;

pub use descriptor::{ConnectionDescriptor, DescriptorBuilder, HasHost, NoHost};
