//! Decoding errors for world payloads.
//!
//! The public `decode` functions collapse these into `None`: a malformed entry
//! is skipped, never fatal. The detailed variants exist so the store can log
//! why an entry was dropped.

use thiserror::Error;

/// Reasons a stored payload could not be turned into a [`crate::WorldRecord`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("payload for world '{world}' is not an object")]
    NotAnObject { world: String },

    #[error("payload for world '{world}' does not match the schema: {reason}")]
    Schema { world: String, reason: String },
}

impl DecodeError {
    pub(crate) fn schema(world: &str, reason: impl ToString) -> Self {
        Self::Schema {
            world: world.to_string(),
            reason: reason.to_string(),
        }
    }
}
