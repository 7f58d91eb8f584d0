//! Capabilities the resolver depends on.
//!
//! Scoring and reference lookup are supplied by the caller. The resolver never
//! reaches for a global registry; whatever implements these traits is passed
//! in on every call.

use crate::error::{FetchError, MatcherError};
use idauth_types::{BioType, BiometricSample};

/// Opaque reference biometric data for one modality/sub-type, as enrolled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BioReference {
    pub modality: Option<BioType>,
    pub sub_type: Option<String>,
    pub template: Vec<u8>,
}

impl BioReference {
    pub fn new(modality: BioType, template: impl Into<Vec<u8>>) -> Self {
        Self {
            modality: Some(modality),
            sub_type: None,
            template: template.into(),
        }
    }

    pub fn with_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.sub_type = Some(sub_type.into());
        self
    }
}

/// Everything a matcher may want to know about the comparison besides the
/// two templates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchContext<'a> {
    pub modality: BioType,
    pub sub_type: Option<&'a str>,
    pub language: &'a str,
    pub request_id: &'a str,
}

/// A pluggable biometric score function.
///
/// Implementations might wrap a vendor SDK, a remote matching service, or a
/// deterministic stub in tests.
pub trait BioMatcher: Send + Sync {
    /// Compare a captured sample against its reference and return a score.
    ///
    /// Scores are non-negative; larger means a closer match.
    fn match_value(
        &self,
        reference: &BioReference,
        candidate: &BiometricSample,
        context: &MatchContext<'_>,
    ) -> Result<f64, MatcherError>;

    /// Human-readable name of this matcher, recorded on every match property.
    fn name(&self) -> &str;
}

/// Source of reference data, and the matcher to compare against it.
pub trait IdInfoFetcher: Send + Sync {
    /// The matcher used to score samples for this identity.
    fn matcher(&self) -> &dyn BioMatcher;

    /// Load the enrolled reference for a modality (and sub-type, if the
    /// sample names one).
    fn reference_template(
        &self,
        modality: BioType,
        sub_type: Option<&str>,
        language: &str,
    ) -> Result<BioReference, FetchError>;
}
