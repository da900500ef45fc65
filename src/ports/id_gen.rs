//! ID generator port for producing random identifiers.

use uuid::Uuid;

use crate::error::SecretError;

/// Produces random identifiers.
///
/// Abstracting ID generation allows deterministic output by substituting
/// a predictable sequence during tests.
pub trait IdGenerator: Send + Sync {
    /// Generates a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SecretError::GenerationUnavailable`] when no identifier can be produced.
    fn generate_id(&self) -> Result<Uuid, SecretError>;
}
