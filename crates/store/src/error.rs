//! Store-level errors.
//!
//! Only opening and saving can fail. Lookups degrade to `None` instead.

use thiserror::Error;

use crate::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to load world settings from {location}: {source}")]
    Load {
        location: String,
        #[source]
        source: RepositoryError,
    },

    #[error("failed to save world settings to {location}: {source}")]
    Save {
        location: String,
        #[source]
        source: RepositoryError,
    },

    #[error("failed to encode settings for world '{world}': {source}")]
    Encode {
        world: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
