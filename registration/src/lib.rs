//! Registration packet generation.
//!
//! Turns a UIN plus center/machine identifiers into an uploaded registration
//! packet: the identifiers are checked against master data, a registration
//! id is issued, and the packet is created, stored and uploaded through
//! injected collaborators. The generator itself owns none of those concerns.

pub mod config;
pub mod error;
pub mod generator;
pub mod packet;
pub mod traits;

pub use config::RegistrationConfig;
pub use error::{MasterDataError, RegistrationError, Result, ServiceError};
pub use generator::{PacketGenerator, PacketServices};
pub use packet::{
    codes, CreatedPacket, DemographicIdentity, PacketFailure, PacketGeneratorRequest,
    PacketOutcome, PacketUploadResponse, RegistrationMetaData, RegistrationPacket,
};
pub use traits::{
    Machine, MasterDataClient, MasterDataResponse, PacketCreator, PacketStorage, PacketUploader,
    RegistrationCenter, RidGenerator,
};
