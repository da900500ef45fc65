//! Scripted adapter for the `IdGenerator` port.

use std::collections::VecDeque;
use std::sync::Mutex;

use uuid::Uuid;

use crate::error::SecretError;
use crate::ports::id_gen::IdGenerator;

/// Yields a fixed sequence of identifiers, then reports the source as unavailable.
///
/// An empty script fails on the first call, which makes it usable as a
/// stand-in for a broken entropy source.
pub struct ScriptedIdGenerator {
    ids: Mutex<VecDeque<Uuid>>,
}

impl ScriptedIdGenerator {
    /// Creates a generator that returns `ids` in order.
    #[must_use]
    pub fn new(ids: impl IntoIterator<Item = Uuid>) -> Self {
        Self { ids: Mutex::new(ids.into_iter().collect()) }
    }

    /// Creates a generator that fails on every call.
    #[must_use]
    pub fn exhausted() -> Self {
        Self { ids: Mutex::new(VecDeque::new()) }
    }
}

impl IdGenerator for ScriptedIdGenerator {
    fn generate_id(&self) -> Result<Uuid, SecretError> {
        let mut ids = self
            .ids
            .lock()
            .map_err(|_| SecretError::unavailable("scripted id source lock poisoned"))?;
        ids.pop_front().ok_or_else(|| SecretError::unavailable("scripted id source exhausted"))
    }
}
