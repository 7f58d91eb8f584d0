//! Collaborators of the packet generator.
//!
//! Transport, id generation, packet assembly, storage and encryption/upload
//! all live behind these traits. The rest of the crate depends only on them.

use crate::error::{MasterDataError, Result, ServiceError};
use crate::packet::{CreatedPacket, PacketUploadResponse, RegistrationPacket};
use idauth_types::Timestamp;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationCenter {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub id: String,
    pub name: String,
}

/// A master-data lookup answer: entities found, or errors explaining why not.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterDataResponse<T> {
    #[serde(default)]
    pub entities: Vec<T>,
    #[serde(default)]
    pub errors: Vec<ServiceError>,
}

impl<T> MasterDataResponse<T> {
    pub fn found(entities: Vec<T>) -> Self {
        Self {
            entities,
            errors: Vec::new(),
        }
    }

    pub fn rejected(errors: Vec<ServiceError>) -> Self {
        Self {
            entities: Vec::new(),
            errors,
        }
    }
}

/// Remote registration master data.
pub trait MasterDataClient: Send + Sync {
    fn center_details(
        &self,
        center_id: &str,
        language: &str,
    ) -> std::result::Result<MasterDataResponse<RegistrationCenter>, MasterDataError>;

    fn machine_details(
        &self,
        machine_id: &str,
        language: &str,
    ) -> std::result::Result<MasterDataResponse<Machine>, MasterDataError>;
}

/// Issues registration ids (RIDs).
pub trait RidGenerator: Send + Sync {
    fn generate(&self, center_id: &str, machine_id: &str) -> Result<String>;
}

/// Assembles the packet bytes.
pub trait PacketCreator: Send + Sync {
    fn create(&self, packet: &RegistrationPacket) -> Result<CreatedPacket>;
}

/// Persists packet bytes and reports where they went.
pub trait PacketStorage: Send + Sync {
    fn store(&self, registration_id: &str, bytes: &[u8]) -> Result<PathBuf>;
}

/// Encrypts and uploads a stored packet.
pub trait PacketUploader: Send + Sync {
    fn upload(
        &self,
        path: &Path,
        registration_id: &str,
        creation_time: Timestamp,
    ) -> Result<PacketUploadResponse>;
}
