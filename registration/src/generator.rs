//! Packet generator — validates, builds, stores and uploads one packet.
//!
//! Steps, stopping at the first failure:
//! 1. Request fields present, UIN numeric.
//! 2. Registration id issued for the center/machine pair and the packet built.
//! 3. Center looked up in master data, then (only if the center is valid) the
//!    machine.
//! 4. Packet bytes created, stored, then uploaded.
//!
//! Every failure becomes a [`PacketFailure`] with an error code; the caller
//! always receives a [`PacketOutcome`].

use std::sync::Arc;

use idauth_utils::spans;
use tracing::{debug, info, warn};

use crate::config::RegistrationConfig;
use crate::error::{MasterDataError, RegistrationError, ServiceError};
use crate::packet::{
    codes, PacketFailure, PacketGeneratorRequest, PacketOutcome, PacketUploadResponse,
    RegistrationPacket,
};
use crate::traits::{
    MasterDataClient, MasterDataResponse, PacketCreator, PacketStorage, PacketUploader,
    RidGenerator,
};

/// The collaborators a [`PacketGenerator`] drives.
#[derive(Clone)]
pub struct PacketServices {
    pub rid_generator: Arc<dyn RidGenerator>,
    pub master_data: Arc<dyn MasterDataClient>,
    pub creator: Arc<dyn PacketCreator>,
    pub storage: Arc<dyn PacketStorage>,
    pub uploader: Arc<dyn PacketUploader>,
}

pub struct PacketGenerator {
    config: RegistrationConfig,
    services: PacketServices,
}

impl PacketGenerator {
    pub fn new(config: RegistrationConfig, services: PacketServices) -> Self {
        Self { config, services }
    }

    pub fn config(&self) -> &RegistrationConfig {
        &self.config
    }

    /// Generate, store and upload a packet for `request`.
    pub fn create_packet(&self, request: &PacketGeneratorRequest) -> PacketOutcome {
        let span = spans::packet_span(&request.center_id, &request.machine_id);
        let _enter = span.enter();

        match self.try_create(request) {
            Ok(response) => {
                info!(
                    registration_id = %response.registration_id,
                    status = %response.status,
                    "packet uploaded"
                );
                PacketOutcome::Success(response)
            }
            Err(failure) => {
                warn!(
                    code = %failure.error_code,
                    message = %failure.message,
                    "packet generation failed"
                );
                PacketOutcome::Failure(failure)
            }
        }
    }

    fn try_create(
        &self,
        request: &PacketGeneratorRequest,
    ) -> Result<PacketUploadResponse, PacketFailure> {
        request.validate()?;

        let registration_id = self
            .services
            .rid_generator
            .generate(&request.center_id, &request.machine_id)
            .map_err(pipeline_failure)?;
        let packet = RegistrationPacket::build(request, registration_id);
        debug!(registration_id = %packet.registration_id, "packet built");

        let language = &self.config.primary_language;
        check_lookup(
            self.services.master_data.center_details(&request.center_id, language),
            "registration center",
        )?;
        check_lookup(
            self.services.master_data.machine_details(&request.machine_id, language),
            "machine",
        )?;

        let created = self.services.creator.create(&packet).map_err(pipeline_failure)?;
        let path = self
            .services
            .storage
            .store(&packet.registration_id, &created.bytes)
            .map_err(pipeline_failure)?;
        self.services
            .uploader
            .upload(&path, &packet.registration_id, created.creation_time)
            .map_err(pipeline_failure)
    }
}

/// A lookup is valid when it reports no errors and finds at least one entity.
fn check_lookup<T>(
    lookup: Result<MasterDataResponse<T>, MasterDataError>,
    entity: &str,
) -> Result<(), PacketFailure> {
    match lookup {
        Ok(response) if response.errors.is_empty() && !response.entities.is_empty() => Ok(()),
        Ok(response) => Err(first_error(response.errors, entity)),
        Err(MasterDataError::Rejected(errors)) => Err(first_error(errors, entity)),
        Err(MasterDataError::Unavailable(reason)) => Err(PacketFailure::new(
            codes::MASTER_DATA_UNAVAILABLE,
            reason,
        )),
    }
}

fn first_error(errors: Vec<ServiceError>, entity: &str) -> PacketFailure {
    errors
        .into_iter()
        .next()
        .map(|e| PacketFailure::new(e.error_code, e.message))
        .unwrap_or_else(|| PacketFailure::new(codes::NOT_FOUND, format!("no {entity} found")))
}

fn pipeline_failure(err: RegistrationError) -> PacketFailure {
    PacketFailure::new(codes::PACKET_PIPELINE, err.to_string())
}
