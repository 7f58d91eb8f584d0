//! A single captured biometric record.

use crate::modality::BioType;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// One captured biometric sample as it arrives in an authentication request.
///
/// The type tag is kept exactly as received; [`BiometricSample::modality`]
/// parses it on demand so that unrecognised tags survive deserialization and
/// are simply never matched. The payload and integrity fields are opaque to
/// this crate.
///
/// Samples are built once (the `with_*` methods consume `self`) and only read
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiometricSample {
    bio_type: String,
    #[serde(default)]
    bio_sub_type: Option<String>,
    #[serde(default)]
    bio_value: Vec<u8>,
    #[serde(default)]
    device_provider_id: Option<String>,
    #[serde(default)]
    captured_at: Option<Timestamp>,
    #[serde(default)]
    hash: String,
    #[serde(default)]
    session_key: String,
    #[serde(default)]
    signature: String,
}

impl BiometricSample {
    pub fn new(bio_type: impl Into<String>, bio_value: impl Into<Vec<u8>>) -> Self {
        Self {
            bio_type: bio_type.into(),
            bio_sub_type: None,
            bio_value: bio_value.into(),
            device_provider_id: None,
            captured_at: None,
            hash: String::new(),
            session_key: String::new(),
            signature: String::new(),
        }
    }

    /// Sub-type within the modality, e.g. `"Left Thumb"` or `"Right"`.
    pub fn with_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.bio_sub_type = Some(sub_type.into());
        self
    }

    pub fn with_device_provider(mut self, provider_id: impl Into<String>) -> Self {
        self.device_provider_id = Some(provider_id.into());
        self
    }

    pub fn with_captured_at(mut self, at: Timestamp) -> Self {
        self.captured_at = Some(at);
        self
    }

    /// Attach the integrity envelope that accompanies the payload.
    pub fn with_integrity(
        mut self,
        hash: impl Into<String>,
        session_key: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        self.hash = hash.into();
        self.session_key = session_key.into();
        self.signature = signature.into();
        self
    }

    /// The raw type tag as received.
    pub fn bio_type(&self) -> &str {
        &self.bio_type
    }

    /// The parsed modality, or `None` for an unrecognised tag.
    pub fn modality(&self) -> Option<BioType> {
        BioType::from_tag(&self.bio_type)
    }

    pub fn sub_type(&self) -> Option<&str> {
        self.bio_sub_type.as_deref()
    }

    pub fn value(&self) -> &[u8] {
        &self.bio_value
    }

    pub fn device_provider_id(&self) -> Option<&str> {
        self.device_provider_id.as_deref()
    }

    pub fn captured_at(&self) -> Option<Timestamp> {
        self.captured_at
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn session_key(&self) -> &str {
        &self.session_key
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_optional_fields() {
        let sample = BiometricSample::new("FMR", vec![1, 2, 3])
            .with_sub_type("Left Thumb")
            .with_device_provider("provider-1")
            .with_captured_at(Timestamp::new(42))
            .with_integrity("h", "k", "s");

        assert_eq!(sample.bio_type(), "FMR");
        assert_eq!(sample.modality(), Some(BioType::FingerMinutiae));
        assert_eq!(sample.sub_type(), Some("Left Thumb"));
        assert_eq!(sample.value(), &[1, 2, 3]);
        assert_eq!(sample.device_provider_id(), Some("provider-1"));
        assert_eq!(sample.captured_at(), Some(Timestamp::new(42)));
        assert_eq!((sample.hash(), sample.session_key(), sample.signature()), ("h", "k", "s"));
    }

    #[test]
    fn unknown_tag_has_no_modality() {
        let sample = BiometricSample::new("VOICE", Vec::new());
        assert_eq!(sample.bio_type(), "VOICE");
        assert_eq!(sample.modality(), None);
    }
}
