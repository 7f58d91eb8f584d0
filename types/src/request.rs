//! Authentication request envelope.

use crate::modality::BioType;
use crate::sample::BiometricSample;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An authentication request carrying zero or more biometric samples.
///
/// Only the fields biometric matching needs are modelled; the rest of the
/// request envelope belongs to the transport layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    transaction_id: String,
    #[serde(default)]
    individual_id: String,
    #[serde(default)]
    request_time: Timestamp,
    #[serde(default)]
    biometrics: Vec<BiometricSample>,
}

impl AuthRequest {
    pub fn new(transaction_id: impl Into<String>) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            individual_id: String::new(),
            request_time: Timestamp::now(),
            biometrics: Vec::new(),
        }
    }

    pub fn with_individual_id(mut self, individual_id: impl Into<String>) -> Self {
        self.individual_id = individual_id.into();
        self
    }

    pub fn with_request_time(mut self, at: Timestamp) -> Self {
        self.request_time = at;
        self
    }

    pub fn with_biometrics(mut self, biometrics: Vec<BiometricSample>) -> Self {
        self.biometrics = biometrics;
        self
    }

    pub fn with_sample(mut self, sample: BiometricSample) -> Self {
        self.biometrics.push(sample);
        self
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn individual_id(&self) -> &str {
        &self.individual_id
    }

    pub fn request_time(&self) -> Timestamp {
        self.request_time
    }

    /// All samples in request order.
    pub fn biometrics(&self) -> &[BiometricSample] {
        &self.biometrics
    }

    /// Samples whose tag parses to one of `types`, in request order.
    pub fn samples_of<'a>(
        &'a self,
        types: &'a [BioType],
    ) -> impl Iterator<Item = (BioType, &'a BiometricSample)> + 'a {
        self.biometrics.iter().filter_map(move |s| {
            s.modality()
                .filter(|m| types.contains(m))
                .map(|m| (m, s))
        })
    }

    /// The distinct recognised modalities present in the request.
    pub fn modalities(&self) -> BTreeSet<BioType> {
        self.biometrics.iter().filter_map(|s| s.modality()).collect()
    }
}
