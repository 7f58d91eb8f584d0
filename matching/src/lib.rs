//! Biometric match resolution.
//!
//! Given an authentication request and a [`BioAuthType`], decide which of the
//! request's biometric samples the auth type applies to, score each against
//! its enrolled reference through an injected [`BioMatcher`], and aggregate
//! the scores per modality into a [`MatchPropertyMap`].
//!
//! Three families of auth type exist:
//! - **single**: one sample of one modality (fingerprint minutiae, fingerprint
//!   image, iris, face);
//! - **composite**: several samples of one modality, aggregated;
//! - **multi-modal**: samples of several modalities, one entry per modality.
//!
//! An empty map is a normal outcome meaning "nothing to check". Failures of
//! the injected capabilities are always surfaced as errors.

pub mod aggregation;
pub mod auth_type;
pub mod config;
pub mod error;
pub mod matcher;
pub mod properties;
pub mod resolver;

pub use aggregation::AggregationPolicy;
pub use auth_type::{BioAuthType, MatchKind};
pub use config::MatchingConfig;
pub use error::{FetchError, IdentityMatchError, MatcherError, Result};
pub use matcher::{BioMatcher, BioReference, IdInfoFetcher, MatchContext};
pub use properties::{MatchProperty, MatchPropertyMap};
pub use resolver::BioMatchResolver;
