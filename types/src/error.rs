//! Error type for tag parsing.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("unknown biometric type tag: {0}")]
    UnknownBioType(String),
}
