//! Nullable packet pipeline — master data, id generation, creation, storage
//! and upload, all in memory.

use idauth_registration::{
    CreatedPacket, Machine, MasterDataClient, MasterDataError, MasterDataResponse, PacketCreator,
    PacketServices, PacketStorage, PacketUploadResponse, PacketUploader, RegistrationCenter,
    RegistrationError, RegistrationPacket, RidGenerator, ServiceError,
};
use idauth_types::Timestamp;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LookupKind {
    Center,
    Machine,
}

/// In-memory master data.
///
/// Known ids resolve to one entity; unknown ids resolve to an empty answer.
/// Rejections and outages can be scripted per lookup kind.
#[derive(Default)]
pub struct NullMasterData {
    centers: HashSet<String>,
    machines: HashSet<String>,
    rejections: HashMap<LookupKind, Vec<ServiceError>>,
    error_responses: HashMap<LookupKind, Vec<ServiceError>>,
    unavailable: Option<String>,
    lookups: Mutex<Vec<(LookupKind, String, String)>>,
}

impl NullMasterData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_center(mut self, id: impl Into<String>) -> Self {
        self.centers.insert(id.into());
        self
    }

    pub fn with_machine(mut self, id: impl Into<String>) -> Self {
        self.machines.insert(id.into());
        self
    }

    /// Answer `kind` lookups with a client error carrying `errors`.
    pub fn rejecting(mut self, kind: LookupKind, errors: Vec<ServiceError>) -> Self {
        self.rejections.insert(kind, errors);
        self
    }

    /// Answer `kind` lookups successfully, but with `errors` in the body.
    pub fn answering_errors(mut self, kind: LookupKind, errors: Vec<ServiceError>) -> Self {
        self.error_responses.insert(kind, errors);
        self
    }

    /// Fail every lookup as unreachable.
    pub fn unavailable(mut self, reason: impl Into<String>) -> Self {
        self.unavailable = Some(reason.into());
        self
    }

    /// Lookups observed so far: kind, id, language.
    pub fn lookups(&self) -> Vec<(LookupKind, String, String)> {
        self.lookups.lock().unwrap().clone()
    }

    fn lookup<T>(
        &self,
        kind: LookupKind,
        id: &str,
        language: &str,
        known: &HashSet<String>,
        make: impl FnOnce(&str) -> T,
    ) -> Result<MasterDataResponse<T>, MasterDataError> {
        self.lookups
            .lock()
            .unwrap()
            .push((kind, id.to_string(), language.to_string()));

        if let Some(reason) = &self.unavailable {
            return Err(MasterDataError::Unavailable(reason.clone()));
        }
        if let Some(errors) = self.rejections.get(&kind) {
            return Err(MasterDataError::Rejected(errors.clone()));
        }
        if let Some(errors) = self.error_responses.get(&kind) {
            return Ok(MasterDataResponse::rejected(errors.clone()));
        }
        if known.contains(id) {
            Ok(MasterDataResponse::found(vec![make(id)]))
        } else {
            Ok(MasterDataResponse::found(Vec::new()))
        }
    }
}

impl MasterDataClient for NullMasterData {
    fn center_details(
        &self,
        center_id: &str,
        language: &str,
    ) -> Result<MasterDataResponse<RegistrationCenter>, MasterDataError> {
        self.lookup(LookupKind::Center, center_id, language, &self.centers, |id| {
            RegistrationCenter {
                id: id.to_string(),
                name: format!("center {id}"),
            }
        })
    }

    fn machine_details(
        &self,
        machine_id: &str,
        language: &str,
    ) -> Result<MasterDataResponse<Machine>, MasterDataError> {
        self.lookup(LookupKind::Machine, machine_id, language, &self.machines, |id| {
            Machine {
                id: id.to_string(),
                name: format!("machine {id}"),
            }
        })
    }
}

/// Sequential registration ids: `<center><machine><seq:05>`.
#[derive(Default)]
pub struct NullRidGenerator {
    next: Mutex<u64>,
    error: Option<String>,
}

impl NullRidGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            error: Some(reason.into()),
            ..Self::default()
        }
    }
}

impl RidGenerator for NullRidGenerator {
    fn generate(&self, center_id: &str, machine_id: &str) -> Result<String, RegistrationError> {
        if let Some(reason) = &self.error {
            return Err(RegistrationError::IdGeneration(reason.clone()));
        }
        let mut next = self.next.lock().unwrap();
        *next += 1;
        Ok(format!("{center_id}{machine_id}{:05}", *next))
    }
}

/// Builds packet bytes from the packet's id and UIN, stamped with a fixed time.
pub struct NullPacketCreator {
    creation_time: Timestamp,
    error: Option<String>,
    created: Mutex<Vec<RegistrationPacket>>,
}

impl NullPacketCreator {
    pub fn new(creation_time: Timestamp) -> Self {
        Self {
            creation_time,
            error: None,
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            error: Some(reason.into()),
            ..Self::new(Timestamp::EPOCH)
        }
    }

    pub fn created(&self) -> Vec<RegistrationPacket> {
        self.created.lock().unwrap().clone()
    }
}

impl Default for NullPacketCreator {
    fn default() -> Self {
        Self::new(Timestamp::new(1_700_000_000))
    }
}

impl PacketCreator for NullPacketCreator {
    fn create(&self, packet: &RegistrationPacket) -> Result<CreatedPacket, RegistrationError> {
        if let Some(reason) = &self.error {
            return Err(RegistrationError::Creation(reason.clone()));
        }
        self.created.lock().unwrap().push(packet.clone());
        let bytes = format!("{}|{}", packet.registration_id, packet.demographic.uin).into_bytes();
        Ok(CreatedPacket {
            bytes,
            creation_time: self.creation_time,
        })
    }
}

/// Keeps packets in memory, reporting paths under a virtual root.
pub struct NullPacketStorage {
    root: PathBuf,
    error: Option<String>,
    stored: Mutex<HashMap<String, Vec<u8>>>,
}

impl NullPacketStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            error: None,
            stored: Mutex::new(HashMap::new()),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            error: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn get(&self, registration_id: &str) -> Option<Vec<u8>> {
        self.stored.lock().unwrap().get(registration_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.stored.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NullPacketStorage {
    fn default() -> Self {
        Self::new("/null/packets")
    }
}

impl PacketStorage for NullPacketStorage {
    fn store(&self, registration_id: &str, bytes: &[u8]) -> Result<PathBuf, RegistrationError> {
        if let Some(reason) = &self.error {
            return Err(RegistrationError::Storage(reason.clone()));
        }
        self.stored
            .lock()
            .unwrap()
            .insert(registration_id.to_string(), bytes.to_vec());
        Ok(self.root.join(format!("{registration_id}.zip")))
    }
}

/// Records uploads and acknowledges them.
#[derive(Default)]
pub struct NullPacketUploader {
    error: Option<String>,
    uploads: Mutex<Vec<(PathBuf, String, Timestamp)>>,
}

impl NullPacketUploader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            error: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Uploads observed so far: path, registration id, creation time.
    pub fn uploads(&self) -> Vec<(PathBuf, String, Timestamp)> {
        self.uploads.lock().unwrap().clone()
    }
}

impl PacketUploader for NullPacketUploader {
    fn upload(
        &self,
        path: &Path,
        registration_id: &str,
        creation_time: Timestamp,
    ) -> Result<PacketUploadResponse, RegistrationError> {
        if let Some(reason) = &self.error {
            return Err(RegistrationError::Upload(reason.clone()));
        }
        self.uploads.lock().unwrap().push((
            path.to_path_buf(),
            registration_id.to_string(),
            creation_time,
        ));
        Ok(PacketUploadResponse {
            registration_id: registration_id.to_string(),
            status: "SUCCESS".to_string(),
            message: "packet uploaded".to_string(),
        })
    }
}

/// A full set of nullable packet collaborators, kept as concrete handles so
/// tests can inspect them after driving a generator.
pub struct NullPacketServices {
    pub rid_generator: Arc<NullRidGenerator>,
    pub master_data: Arc<NullMasterData>,
    pub creator: Arc<NullPacketCreator>,
    pub storage: Arc<NullPacketStorage>,
    pub uploader: Arc<NullPacketUploader>,
}

impl NullPacketServices {
    pub fn new(master_data: NullMasterData) -> Self {
        Self {
            rid_generator: Arc::new(NullRidGenerator::new()),
            master_data: Arc::new(master_data),
            creator: Arc::new(NullPacketCreator::default()),
            storage: Arc::new(NullPacketStorage::default()),
            uploader: Arc::new(NullPacketUploader::new()),
        }
    }

    pub fn with_rid_generator(mut self, rid_generator: NullRidGenerator) -> Self {
        self.rid_generator = Arc::new(rid_generator);
        self
    }

    pub fn with_creator(mut self, creator: NullPacketCreator) -> Self {
        self.creator = Arc::new(creator);
        self
    }

    pub fn with_storage(mut self, storage: NullPacketStorage) -> Self {
        self.storage = Arc::new(storage);
        self
    }

    pub fn with_uploader(mut self, uploader: NullPacketUploader) -> Self {
        self.uploader = Arc::new(uploader);
        self
    }

    /// Trait-object handles for a `PacketGenerator`.
    pub fn services(&self) -> PacketServices {
        PacketServices {
            rid_generator: self.rid_generator.clone(),
            master_data: self.master_data.clone(),
            creator: self.creator.clone(),
            storage: self.storage.clone(),
            uploader: self.uploader.clone(),
        }
    }
}
