//! Packet-generation requests, the packet model, and outcomes.

use idauth_types::Timestamp;
use serde::{Deserialize, Serialize};

/// Error codes carried by [`PacketFailure`].
pub mod codes {
    /// A required request field is missing or malformed.
    pub const INVALID_INPUT: &str = "RPR-PGS-001";
    /// The center or machine lookup succeeded but returned nothing.
    pub const NOT_FOUND: &str = "RPR-PGS-002";
    /// The master-data service could not be consulted.
    pub const MASTER_DATA_UNAVAILABLE: &str = "RPR-PGS-003";
    /// Id generation, creation, storage or upload failed.
    pub const PACKET_PIPELINE: &str = "RPR-PGS-004";
}

/// Appended to a field name when that field is missing.
pub const INVALID_REQUEST: &str = "should not be null or empty";

/// Schema version stamped on generated demographic identities.
pub const ID_SCHEMA_VERSION: f64 = 1.0;

/// A request to generate and upload a registration packet for a UIN.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PacketGeneratorRequest {
    pub uin: String,
    pub registration_type: String,
    pub applicant_type: String,
    pub center_id: String,
    pub machine_id: String,
}

impl PacketGeneratorRequest {
    /// Check that every field is present and the UIN is numeric.
    pub fn validate(&self) -> Result<(), PacketFailure> {
        let fields = [
            ("uin", &self.uin),
            ("registrationType", &self.registration_type),
            ("applicantType", &self.applicant_type),
            ("centerId", &self.center_id),
            ("machineId", &self.machine_id),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(PacketFailure::new(
                codes::INVALID_INPUT,
                format!("{name} {INVALID_REQUEST}"),
            ));
        }
        if !self.uin.trim().bytes().all(|b| b.is_ascii_digit()) {
            return Err(PacketFailure::new(codes::INVALID_INPUT, "uin should be numeric"));
        }
        Ok(())
    }
}

/// Demographic identity section of a packet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicIdentity {
    pub id_schema_version: f64,
    pub uin: String,
}

/// Registration metadata section of a packet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationMetaData {
    pub application_type: String,
    pub center_id: String,
    pub machine_id: String,
    pub registration_category: String,
    pub uin: String,
}

/// Everything a [`PacketCreator`](crate::PacketCreator) needs to build the
/// packet bytes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPacket {
    pub registration_id: String,
    pub demographic: DemographicIdentity,
    pub metadata: RegistrationMetaData,
}

impl RegistrationPacket {
    pub fn build(request: &PacketGeneratorRequest, registration_id: String) -> Self {
        let uin = request.uin.trim().to_string();
        Self {
            registration_id,
            demographic: DemographicIdentity {
                id_schema_version: ID_SCHEMA_VERSION,
                uin: uin.clone(),
            },
            metadata: RegistrationMetaData {
                application_type: request.applicant_type.clone(),
                center_id: request.center_id.clone(),
                machine_id: request.machine_id.clone(),
                registration_category: request.registration_type.clone(),
                uin,
            },
        }
    }
}

/// Packet bytes produced by a creator, with their creation time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedPacket {
    pub bytes: Vec<u8>,
    pub creation_time: Timestamp,
}

/// What the upload service answered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PacketUploadResponse {
    pub registration_id: String,
    pub status: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PacketFailure {
    pub error_code: String,
    pub message: String,
}

impl PacketFailure {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

/// Result of a packet-generation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PacketOutcome {
    Success(PacketUploadResponse),
    Failure(PacketFailure),
}

impl PacketOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn failure(&self) -> Option<&PacketFailure> {
        match self {
            Self::Failure(f) => Some(f),
            Self::Success(_) => None,
        }
    }
}
