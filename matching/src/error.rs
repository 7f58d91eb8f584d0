use idauth_types::BioType;
use thiserror::Error;

use crate::auth_type::BioAuthType;

/// Failure reported by a [`BioMatcher`](crate::BioMatcher) implementation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MatcherError {
    #[error("matcher unavailable: {0}")]
    Unavailable(String),

    #[error("matcher rejected sample: {0}")]
    Rejected(String),
}

/// Failure reported by an [`IdInfoFetcher`](crate::IdInfoFetcher) when loading
/// reference data.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("no reference template for {0}")]
    NotFound(String),

    #[error("reference store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum IdentityMatchError {
    #[error("matcher failed for {modality}: {source}")]
    Matcher {
        modality: BioType,
        #[source]
        source: MatcherError,
    },

    #[error("reference fetch failed for {modality}: {source}")]
    ReferenceFetch {
        modality: BioType,
        #[source]
        source: FetchError,
    },

    #[error("matcher returned invalid score {score} for {modality}")]
    InvalidScore { modality: BioType, score: f64 },

    #[error("{auth_type} expects {expected}, found {found}")]
    SampleCountMismatch {
        auth_type: BioAuthType,
        expected: &'static str,
        found: usize,
    },

    #[error("unknown auth type: {0}")]
    UnknownAuthType(String),

    #[error("config error: {0}")]
    Config(String),
}

impl IdentityMatchError {
    /// Whether this error came from an injected capability rather than from
    /// the request itself.
    pub fn is_dependency_failure(&self) -> bool {
        matches!(
            self,
            Self::Matcher { .. } | Self::ReferenceFetch { .. } | Self::InvalidScore { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, IdentityMatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matcher_error_names_modality_and_cause() {
        let err = IdentityMatchError::Matcher {
            modality: BioType::IrisImage,
            source: MatcherError::Unavailable("sdk down".into()),
        };
        let msg = err.to_string();
        assert!(msg.contains("IIR"));
        assert!(msg.contains("sdk down"));
        assert!(err.is_dependency_failure());
    }

    #[test]
    fn count_mismatch_is_not_a_dependency_failure() {
        let err = IdentityMatchError::SampleCountMismatch {
            auth_type: BioAuthType::IrisCompImg,
            expected: "2 irises",
            found: 1,
        };
        assert_eq!(err.to_string(), "IRIS_COMP_IMG expects 2 irises, found 1");
        assert!(!err.is_dependency_failure());
    }
}
