//! Match-property resolution for a biometric auth type.
//!
//! Algorithm:
//! 1. Keep the request's samples whose tag parses to one of the auth type's
//!    expected modalities, grouped by modality (request order within a group).
//! 2. Nothing left: return an empty map. That is the "skip this check" answer,
//!    not an error.
//! 3. Otherwise, for every kept sample, load its reference from the fetcher
//!    and score it with the fetcher's matcher. Each modality's scores are
//!    aggregated under the resolver's [`AggregationPolicy`] into one
//!    [`MatchProperty`].
//!
//! Single and composite auth types expect one modality and so produce at most
//! one entry; multi-modal produces one entry per modality present. The first
//! failing capability call aborts resolution and its error is returned as-is.

use crate::aggregation::AggregationPolicy;
use crate::auth_type::BioAuthType;
use crate::config::MatchingConfig;
use crate::error::{IdentityMatchError, Result};
use crate::matcher::{BioMatcher, IdInfoFetcher, MatchContext};
use crate::properties::{MatchProperty, MatchPropertyMap};
use idauth_types::{AuthRequest, BioType, BiometricSample};
use idauth_utils::spans;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Resolves which samples an auth type applies to and how they score.
///
/// Holds no per-request state; one resolver can be shared across threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BioMatchResolver {
    policy: AggregationPolicy,
}

impl BioMatchResolver {
    pub fn new(policy: AggregationPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &MatchingConfig) -> Self {
        Self::new(config.aggregation)
    }

    pub fn policy(&self) -> AggregationPolicy {
        self.policy
    }

    /// Build the match properties of `request` for `auth_type`.
    ///
    /// `language` is forwarded untouched to the fetcher, the matcher and each
    /// resulting property.
    pub fn resolve(
        &self,
        request: &AuthRequest,
        auth_type: BioAuthType,
        fetcher: &dyn IdInfoFetcher,
        language: &str,
    ) -> Result<MatchPropertyMap> {
        let span = spans::resolve_span(auth_type.code(), request.biometrics().len());
        let _enter = span.enter();

        let mut grouped: BTreeMap<BioType, Vec<&BiometricSample>> = BTreeMap::new();
        for (modality, sample) in request.samples_of(auth_type.expected_types()) {
            grouped.entry(modality).or_default().push(sample);
        }

        let mut properties = MatchPropertyMap::new();
        if grouped.is_empty() {
            debug!("no applicable samples");
            return Ok(properties);
        }

        let matcher = fetcher.matcher();
        for (modality, samples) in grouped {
            let mut sample_scores = Vec::with_capacity(samples.len());
            for sample in samples {
                let score = self
                    .score_sample(request, modality, sample, fetcher, matcher, language)
                    .inspect_err(|e| warn!(%modality, error = %e, "sample scoring failed"))?;
                sample_scores.push(score);
            }

            let score = self.policy.aggregate(&sample_scores);
            if !score.is_finite() {
                warn!(%modality, score, "aggregate score overflowed");
                return Err(IdentityMatchError::InvalidScore { modality, score });
            }
            debug!(%modality, samples = sample_scores.len(), score, "modality scored");
            properties.insert(MatchProperty {
                modality,
                score,
                sample_scores,
                matcher: matcher.name().to_string(),
                language: language.to_string(),
            });
        }

        Ok(properties)
    }

    fn score_sample(
        &self,
        request: &AuthRequest,
        modality: BioType,
        sample: &BiometricSample,
        fetcher: &dyn IdInfoFetcher,
        matcher: &dyn BioMatcher,
        language: &str,
    ) -> Result<f64> {
        let sub_type = sample.sub_type();
        let reference = fetcher
            .reference_template(modality, sub_type, language)
            .map_err(|source| IdentityMatchError::ReferenceFetch { modality, source })?;

        let context = MatchContext {
            modality,
            sub_type,
            language,
            request_id: request.transaction_id(),
        };
        let score = matcher
            .match_value(&reference, sample, &context)
            .map_err(|source| IdentityMatchError::Matcher { modality, source })?;

        if !score.is_finite() || score < 0.0 {
            return Err(IdentityMatchError::InvalidScore { modality, score });
        }
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchError, MatcherError};
    use crate::matcher::BioReference;

    struct FixedMatcher(f64);

    impl BioMatcher for FixedMatcher {
        fn match_value(
            &self,
            _reference: &BioReference,
            _candidate: &BiometricSample,
            _context: &MatchContext<'_>,
        ) -> std::result::Result<f64, MatcherError> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    /// Scores a sample by the first byte of its payload.
    struct FirstByteMatcher;

    impl BioMatcher for FirstByteMatcher {
        fn match_value(
            &self,
            _reference: &BioReference,
            candidate: &BiometricSample,
            _context: &MatchContext<'_>,
        ) -> std::result::Result<f64, MatcherError> {
            candidate
                .value()
                .first()
                .map(|b| f64::from(*b))
                .ok_or_else(|| MatcherError::Rejected("empty payload".into()))
        }

        fn name(&self) -> &str {
            "first-byte"
        }
    }

    struct Fetcher<M> {
        matcher: M,
        fail: bool,
    }

    impl<M: BioMatcher> IdInfoFetcher for Fetcher<M> {
        fn matcher(&self) -> &dyn BioMatcher {
            &self.matcher
        }

        fn reference_template(
            &self,
            modality: BioType,
            _sub_type: Option<&str>,
            _language: &str,
        ) -> std::result::Result<BioReference, FetchError> {
            if self.fail {
                return Err(FetchError::Unavailable("offline".into()));
            }
            Ok(BioReference::new(modality, Vec::new()))
        }
    }

    fn fixed(score: f64) -> Fetcher<FixedMatcher> {
        Fetcher {
            matcher: FixedMatcher(score),
            fail: false,
        }
    }

    fn request(tags: &[&str]) -> AuthRequest {
        tags.iter().fold(AuthRequest::new("txn"), |req, tag| {
            req.with_sample(BiometricSample::new(*tag, Vec::new()))
        })
    }

    fn scored(samples: &[(&str, u8)]) -> AuthRequest {
        samples.iter().fold(AuthRequest::new("txn"), |req, (tag, b)| {
            req.with_sample(BiometricSample::new(*tag, vec![*b]))
        })
    }

    fn check_single(auth_type: BioAuthType, tag: &str, single: bool) {
        let resolver = BioMatchResolver::default();
        let fetcher = fixed(60.0);

        let empty = resolver.resolve(&request(&[]), auth_type, &fetcher, "").unwrap();
        assert!(empty.is_empty(), "{auth_type} with no samples");

        let tags = if single { vec![tag] } else { vec![tag, tag] };
        let props = resolver.resolve(&request(&tags), auth_type, &fetcher, "").unwrap();
        assert!(!props.is_empty(), "{auth_type} with {tags:?}");
    }

    #[test]
    fn fgr_min_single() {
        check_single(BioAuthType::FgrMin, "FMR", true);
    }

    #[test]
    fn fgr_img_single() {
        check_single(BioAuthType::FgrImg, "FIR", true);
    }

    #[test]
    fn iris_img_single() {
        check_single(BioAuthType::IrisImg, "IIR", true);
    }

    #[test]
    fn face_single() {
        check_single(BioAuthType::FaceImg, "FACE", true);
    }

    #[test]
    fn fgr_min_composite() {
        check_single(BioAuthType::FgrMinComposite, "FMR", false);
    }

    #[test]
    fn fgr_img_composite() {
        check_single(BioAuthType::FgrImgComposite, "FIR", false);
    }

    #[test]
    fn iris_composite() {
        check_single(BioAuthType::IrisCompImg, "IIR", false);
    }

    #[test]
    fn multi_modal_covers_each_modality() {
        let props = BioMatchResolver::default()
            .resolve(&request(&["FIR", "IIR"]), BioAuthType::MultiModal, &fixed(60.0), "")
            .unwrap();
        assert_eq!(props.len(), 2);
        assert!(props.contains(BioType::FingerImage));
        assert!(props.contains(BioType::IrisImage));
    }

    #[test]
    fn mismatched_type_yields_empty_map() {
        let resolver = BioMatchResolver::default();
        let fetcher = fixed(60.0);
        assert!(!resolver
            .resolve(&request(&["FMR"]), BioAuthType::FgrMin, &fetcher, "")
            .unwrap()
            .is_empty());
        assert!(resolver
            .resolve(&request(&["FIR"]), BioAuthType::FgrMin, &fetcher, "")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn composite_aggregates_under_policy() {
        let req = scored(&[("FMR", 40), ("FMR", 80), ("FIR", 5)]);
        let fetcher = Fetcher {
            matcher: FirstByteMatcher,
            fail: false,
        };
        let expect = [
            (AggregationPolicy::Mean, 60.0),
            (AggregationPolicy::Max, 80.0),
            (AggregationPolicy::Sum, 120.0),
        ];
        for (policy, score) in expect {
            let props = BioMatchResolver::new(policy)
                .resolve(&req, BioAuthType::FgrMinComposite, &fetcher, "eng")
                .unwrap();
            let p = props.get(BioType::FingerMinutiae).unwrap();
            assert_eq!(p.score, score, "{policy:?}");
            assert_eq!(p.sample_scores, vec![40.0, 80.0]);
            assert_eq!(p.matcher, "first-byte");
            assert_eq!(p.language, "eng");
            assert_eq!(props.len(), 1);
        }
    }

    #[test]
    fn matcher_failure_is_not_downgraded() {
        let fetcher = Fetcher {
            matcher: FirstByteMatcher,
            fail: false,
        };
        // first sample scores fine, second has no payload
        let req = scored(&[("IIR", 10)]).with_sample(BiometricSample::new("IIR", Vec::new()));
        let err = BioMatchResolver::default()
            .resolve(&req, BioAuthType::IrisCompImg, &fetcher, "")
            .unwrap_err();
        assert!(matches!(
            err,
            IdentityMatchError::Matcher {
                modality: BioType::IrisImage,
                source: MatcherError::Rejected(_),
            }
        ));
    }

    #[test]
    fn fetch_failure_propagates() {
        let fetcher = Fetcher {
            matcher: FixedMatcher(60.0),
            fail: true,
        };
        let err = BioMatchResolver::default()
            .resolve(&request(&["FACE"]), BioAuthType::FaceImg, &fetcher, "")
            .unwrap_err();
        assert!(matches!(
            err,
            IdentityMatchError::ReferenceFetch {
                modality: BioType::FaceImage,
                ..
            }
        ));
    }

    #[test]
    fn fetch_is_skipped_when_nothing_applies() {
        let fetcher = Fetcher {
            matcher: FixedMatcher(60.0),
            fail: true,
        };
        let props = BioMatchResolver::default()
            .resolve(&request(&["FMR"]), BioAuthType::FaceImg, &fetcher, "")
            .unwrap();
        assert!(props.is_empty());
    }

    #[test]
    fn invalid_scores_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, -1.0] {
            let err = BioMatchResolver::default()
                .resolve(&request(&["FMR"]), BioAuthType::FgrMin, &fixed(bad), "")
                .unwrap_err();
            assert!(matches!(err, IdentityMatchError::InvalidScore { .. }), "{bad}");
        }
    }

    #[test]
    fn overflowing_aggregate_is_rejected() {
        for policy in [AggregationPolicy::Sum, AggregationPolicy::Mean] {
            let err = BioMatchResolver::new(policy)
                .resolve(
                    &request(&["FIR", "FIR"]),
                    BioAuthType::FgrImgComposite,
                    &fixed(f64::MAX),
                    "",
                )
                .unwrap_err();
            assert!(
                matches!(
                    err,
                    IdentityMatchError::InvalidScore {
                        modality: BioType::FingerImage,
                        score,
                    } if score.is_infinite()
                ),
                "{policy:?}"
            );
        }
    }

    #[test]
    fn large_finite_scores_survive_max() {
        let props = BioMatchResolver::new(AggregationPolicy::Max)
            .resolve(
                &request(&["FIR", "FIR"]),
                BioAuthType::FgrImgComposite,
                &fixed(f64::MAX),
                "",
            )
            .unwrap();
        assert_eq!(props.get(BioType::FingerImage).map(|p| p.score), Some(f64::MAX));
    }

    #[test]
    fn default_resolver_via_auth_type() {
        let props = BioAuthType::FaceImg
            .match_properties(&request(&["FACE"]), &fixed(70.0), "fra")
            .unwrap();
        assert_eq!(props.get(BioType::FaceImage).map(|p| p.score), Some(70.0));
    }
}
