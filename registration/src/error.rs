use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error entry as reported by a master-data service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceError {
    pub error_code: String,
    pub message: String,
}

impl ServiceError {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

/// Failure of a master-data lookup.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MasterDataError {
    /// The service answered with a client error and an error body.
    #[error("master data rejected the lookup ({} errors)", .0.len())]
    Rejected(Vec<ServiceError>),

    /// The service could not be reached or answered unintelligibly.
    #[error("master data unavailable: {0}")]
    Unavailable(String),
}

/// Failures of the packet pipeline collaborators.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("registration id generation failed: {0}")]
    IdGeneration(String),

    #[error("packet creation failed: {0}")]
    Creation(String),

    #[error("packet storage failed: {0}")]
    Storage(String),

    #[error("packet upload failed: {0}")]
    Upload(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RegistrationError>;
