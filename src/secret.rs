//! Composite secret generation and formatting.
//!
//! A secret is two independently drawn v4 UUIDs, each rendered without
//! separators and concatenated: 64 lowercase hex characters.

use std::fmt;

use uuid::Uuid;

use crate::error::SecretError;
use crate::ports::IdGenerator;

/// Label printed in front of the secret.
pub const LABEL: &str = "64-char concatenated UUID4s";

/// Separator character in the canonical identifier text.
pub const SEPARATOR: char = '-';

/// Number of identifiers concatenated into one secret.
pub const ID_COUNT: usize = 2;

/// Length in characters of a generated secret.
pub const SECRET_LEN: usize = ID_COUNT * uuid::fmt::Simple::LENGTH;

/// A 64-character lowercase hex secret.
///
/// Only constructible from identifiers, so its length and alphabet are fixed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Secret(String);

impl Secret {
    /// Concatenates the normalized forms of `first` then `second`.
    #[must_use]
    pub fn from_ids(first: Uuid, second: Uuid) -> Self {
        let mut value = String::with_capacity(SECRET_LEN);
        value.push_str(&normalize(first));
        value.push_str(&normalize(second));
        Self(value)
    }

    /// Returns the secret text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keep the value out of debug output and logs.
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Secret").field(&"<redacted>").finish()
    }
}

/// Renders an identifier as 32 hex digits with every separator removed.
#[must_use]
pub fn normalize(id: Uuid) -> String {
    id.simple().to_string()
}

/// Draws two identifiers from `id_gen` and concatenates them into a [`Secret`].
///
/// # Errors
///
/// Returns [`SecretError::GenerationUnavailable`] if either identifier cannot be produced.
pub fn generate_secret(id_gen: &dyn IdGenerator) -> Result<Secret, SecretError> {
    let first = id_gen.generate_id()?;
    let second = id_gen.generate_id()?;
    Ok(Secret::from_ids(first, second))
}

/// Formats the output line as `"<label>: <secret>"`.
#[must_use]
pub fn format_line(label: &str, secret: &Secret) -> String {
    format!("{label}: {secret}")
}
