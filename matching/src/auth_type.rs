//! Biometric authentication types and the modalities each one accepts.
//!
//! The set of auth types is closed. Each variant is described by a row of
//! static data: which modalities it draws samples from, whether it matches
//! one sample, several of one modality, or several modalities at once, and
//! how many samples a well-formed request should carry.

use crate::error::{IdentityMatchError, Result};
use crate::matcher::IdInfoFetcher;
use crate::properties::MatchPropertyMap;
use crate::resolver::BioMatchResolver;
use idauth_types::{AuthRequest, BioType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Most fingers a composite fingerprint request may carry.
pub const MAX_FINGERS: usize = 10;

const FMR: &[BioType] = &[BioType::FingerMinutiae];
const FIR: &[BioType] = &[BioType::FingerImage];
const IIR: &[BioType] = &[BioType::IrisImage];
const FACE: &[BioType] = &[BioType::FaceImage];
const ALL: &[BioType] = &BioType::ALL;

/// How an auth type combines the samples it accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchKind {
    /// One sample of one modality.
    Single,
    /// One or more samples of the same modality, aggregated.
    Composite,
    /// Samples of several modalities, each aggregated on its own.
    MultiModal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BioAuthType {
    FgrMin,
    FgrImg,
    IrisImg,
    FaceImg,
    FgrMinComposite,
    FgrImgComposite,
    IrisCompImg,
    MultiModal,
}

impl BioAuthType {
    pub const ALL: [BioAuthType; 8] = [
        BioAuthType::FgrMin,
        BioAuthType::FgrImg,
        BioAuthType::IrisImg,
        BioAuthType::FaceImg,
        BioAuthType::FgrMinComposite,
        BioAuthType::FgrImgComposite,
        BioAuthType::IrisCompImg,
        BioAuthType::MultiModal,
    ];

    /// Stable code used in configuration and on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Self::FgrMin => "FGR_MIN",
            Self::FgrImg => "FGR_IMG",
            Self::IrisImg => "IRIS_IMG",
            Self::FaceImg => "FACE_IMG",
            Self::FgrMinComposite => "FGR_MIN_COMPOSITE",
            Self::FgrImgComposite => "FGR_IMG_COMPOSITE",
            Self::IrisCompImg => "IRIS_COMP_IMG",
            Self::MultiModal => "MULTI_MODAL",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FgrMin => "Fingerprint Minutiae",
            Self::FgrImg => "Fingerprint Image",
            Self::IrisImg => "Iris Image",
            Self::FaceImg => "Face Image",
            Self::FgrMinComposite => "Composite Fingerprint Minutiae",
            Self::FgrImgComposite => "Composite Fingerprint Image",
            Self::IrisCompImg => "Composite Iris Image",
            Self::MultiModal => "Multi Modal",
        }
    }

    pub fn kind(&self) -> MatchKind {
        match self {
            Self::FgrMin | Self::FgrImg | Self::IrisImg | Self::FaceImg => MatchKind::Single,
            Self::FgrMinComposite | Self::FgrImgComposite | Self::IrisCompImg => {
                MatchKind::Composite
            }
            Self::MultiModal => MatchKind::MultiModal,
        }
    }

    /// Modalities whose samples this auth type draws on.
    pub fn expected_types(&self) -> &'static [BioType] {
        match self {
            Self::FgrMin | Self::FgrMinComposite => FMR,
            Self::FgrImg | Self::FgrImgComposite => FIR,
            Self::IrisImg | Self::IrisCompImg => IIR,
            Self::FaceImg => FACE,
            Self::MultiModal => ALL,
        }
    }

    /// Whether `modality` belongs to this auth type's expected set.
    pub fn accepts(&self, modality: BioType) -> bool {
        self.expected_types().contains(&modality)
    }

    /// The single-sample auth type for a modality.
    pub fn for_single_type(modality: BioType) -> Self {
        match modality {
            BioType::FingerMinutiae => Self::FgrMin,
            BioType::FingerImage => Self::FgrImg,
            BioType::IrisImage => Self::IrisImg,
            BioType::FaceImage => Self::FaceImg,
        }
    }

    /// What [`BioAuthType::sample_count`] measures.
    pub fn count_label(&self) -> &'static str {
        match self {
            Self::FgrMin | Self::FgrImg | Self::FgrMinComposite | Self::FgrImgComposite => {
                "number of fingers"
            }
            Self::IrisImg | Self::IrisCompImg => "number of irises",
            Self::FaceImg => "face count",
            Self::MultiModal => "number of modalities",
        }
    }

    fn expected_count(&self) -> &'static str {
        match self {
            Self::FgrMin | Self::FgrImg => "1 finger",
            Self::IrisImg => "1 iris",
            Self::FaceImg => "1 face",
            Self::FgrMinComposite | Self::FgrImgComposite => "2 to 10 fingers",
            Self::IrisCompImg => "2 irises",
            Self::MultiModal => "at least 2 modalities",
        }
    }

    /// Whether `count` (as measured by [`BioAuthType::sample_count`]) is
    /// allowed for this auth type.
    pub fn accepts_count(&self, count: usize) -> bool {
        match self {
            Self::FgrMin | Self::FgrImg | Self::IrisImg | Self::FaceImg => count == 1,
            Self::FgrMinComposite | Self::FgrImgComposite => (2..=MAX_FINGERS).contains(&count),
            Self::IrisCompImg => count == 2,
            Self::MultiModal => count >= 2,
        }
    }

    /// Count the request's applicable samples: samples of the expected
    /// modality, or distinct modalities for [`BioAuthType::MultiModal`].
    pub fn sample_count(&self, request: &AuthRequest) -> usize {
        let expected = self.expected_types();
        match self.kind() {
            MatchKind::MultiModal => request
                .samples_of(expected)
                .map(|(m, _)| m)
                .collect::<BTreeSet<_>>()
                .len(),
            MatchKind::Single | MatchKind::Composite => request.samples_of(expected).count(),
        }
    }

    /// Whether the request carries any sample this auth type can use.
    pub fn is_auth_type_info_available(&self, request: &AuthRequest) -> bool {
        request.samples_of(self.expected_types()).next().is_some()
    }

    /// Check the request's sample count against this auth type's rule.
    ///
    /// Resolution does not call this; it is for request validation ahead of
    /// matching.
    pub fn check_sample_count(&self, request: &AuthRequest) -> Result<usize> {
        let found = self.sample_count(request);
        if self.accepts_count(found) {
            Ok(found)
        } else {
            Err(IdentityMatchError::SampleCountMismatch {
                auth_type: *self,
                expected: self.expected_count(),
                found,
            })
        }
    }

    /// Resolve match properties with the default resolver.
    pub fn match_properties(
        &self,
        request: &AuthRequest,
        fetcher: &dyn IdInfoFetcher,
        language: &str,
    ) -> Result<MatchPropertyMap> {
        BioMatchResolver::default().resolve(request, *self, fetcher, language)
    }
}

impl FromStr for BioAuthType {
    type Err = IdentityMatchError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| IdentityMatchError::UnknownAuthType(s.to_string()))
    }
}

impl fmt::Display for BioAuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
