//! Error types.

/// Errors raised while producing or emitting a secret.
#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    /// The randomness source could not produce an identifier.
    #[error("random identifier generation unavailable: {reason}")]
    GenerationUnavailable {
        /// Description of the underlying failure.
        reason: String,
    },
    /// Writing the result line failed.
    #[error("failed to write secret: {0}")]
    Output(#[from] std::io::Error),
    /// Argument parsing failed, or help/version output was requested.
    #[error(transparent)]
    Usage(#[from] clap::Error),
}

impl SecretError {
    /// Builds a [`SecretError::GenerationUnavailable`] from a reason.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::GenerationUnavailable { reason: reason.into() }
    }
}
