//! Error types for the connections core library.

use crate::models::PersonId;

/// Top-level error enum for the connections core library.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionsError {
    #[error("Person with ID {0} not found")]
    PersonNotFound(PersonId),

    #[error("Invalid experience for person {person_id} at {company}: end {end} is before start {start}")]
    InvalidExperience {
        person_id: PersonId,
        company: String,
        start: String,
        end: String,
    },

    #[error("Invalid date {value:?}: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConnectionsError {
    /// True when the error only reports an unknown target person.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConnectionsError::PersonNotFound(_))
    }
}

#[cfg(feature = "python")]
impl From<ConnectionsError> for pyo3::PyErr {
    fn from(err: ConnectionsError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyIOError, PyKeyError, PyRuntimeError, PyValueError};

        match &err {
            ConnectionsError::PersonNotFound(_) => PyKeyError::new_err(err.to_string()),
            ConnectionsError::InvalidExperience { .. }
            | ConnectionsError::InvalidDate { .. }
            | ConnectionsError::InvalidArgument(_)
            | ConnectionsError::Json(_) => PyValueError::new_err(err.to_string()),
            ConnectionsError::Config(_) => PyRuntimeError::new_err(err.to_string()),
            ConnectionsError::Io(_) => PyIOError::new_err(err.to_string()),
        }
    }
}

pub type ConnectionsResult<T> = Result<T, ConnectionsError>;
