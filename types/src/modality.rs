//! Biometric modality tags.
//!
//! Every captured sample carries a short type tag (`FMR`, `FIR`, `IIR`,
//! `FACE`). Tags arrive as free text in requests, so parsing is lenient about
//! case and surrounding whitespace but never guesses at unknown tags.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A biometric capture modality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BioType {
    /// Fingerprint minutiae record.
    #[serde(rename = "FMR")]
    FingerMinutiae,
    /// Fingerprint image record.
    #[serde(rename = "FIR")]
    FingerImage,
    /// Iris image record.
    #[serde(rename = "IIR")]
    IrisImage,
    /// Face image.
    #[serde(rename = "FACE")]
    FaceImage,
}

impl BioType {
    /// Every recognised modality, in tag order.
    pub const ALL: [BioType; 4] = [
        BioType::FingerMinutiae,
        BioType::FingerImage,
        BioType::IrisImage,
        BioType::FaceImage,
    ];

    /// The wire tag for this modality.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::FingerMinutiae => "FMR",
            Self::FingerImage => "FIR",
            Self::IrisImage => "IIR",
            Self::FaceImage => "FACE",
        }
    }

    /// Parse a tag, ignoring ASCII case and surrounding whitespace.
    ///
    /// Returns `None` for anything that is not a recognised tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.tag().eq_ignore_ascii_case(tag))
    }
}

impl FromStr for BioType {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| TypesError::UnknownBioType(s.to_string()))
    }
}

impl fmt::Display for BioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
