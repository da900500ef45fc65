//! Live adapter for the `IdGenerator` port.

use tracing::warn;
use uuid::{Builder, Uuid};

use crate::error::SecretError;
use crate::ports::IdGenerator;

/// Live ID generator that produces random v4 UUIDs from OS entropy.
pub struct LiveIdGenerator;

impl LiveIdGenerator {
    /// Creates a new live ID generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for LiveIdGenerator {
    fn generate_id(&self) -> Result<Uuid, SecretError> {
        let mut bytes = [0u8; 16];
        // Uuid::new_v4 panics when the entropy source fails; draw the bytes ourselves.
        getrandom::getrandom(&mut bytes).map_err(|e| {
            warn!(error = %e, "OS entropy source failed");
            SecretError::unavailable(format!("OS entropy source failed: {e}"))
        })?;
        Ok(Builder::from_random_bytes(bytes).into_uuid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::{Variant, Version};

    #[test]
    fn generates_unique_ids() {
        let gen = LiveIdGenerator::new();
        let id1 = gen.generate_id().unwrap();
        let id2 = gen.generate_id().unwrap();

        assert_ne!(id1, id2);
        assert_eq!(id1.to_string().len(), 36); // UUID format: 8-4-4-4-12
    }

    #[test]
    fn generates_version_4_rfc_variant() {
        let id = LiveIdGenerator::new().generate_id().unwrap();

        assert_eq!(id.get_version(), Some(Version::Random));
        assert_eq!(id.get_variant(), Variant::RFC4122);
    }
}
