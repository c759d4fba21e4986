use crate::model::TodoId;
use crate::store::MAX_TODOS;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("{0}")]
    Validation(String),

    #[error("Todo #{0} not found")]
    NotFound(TodoId),

    #[error("Todo list is full ({} todos); erase some before adding more", MAX_TODOS)]
    CapacityExceeded,

    #[error("Todo store at {path} is corrupt: {source}")]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;
