use crate::domain::{entities::ConnectionDescriptor, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_descriptor(descriptor: &ConnectionDescriptor) -> Result<(), DomainError> {
        descriptor.validate()
    }
}
