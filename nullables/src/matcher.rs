//! Nullable matcher — scripted biometric scores.

use idauth_matching::{BioMatcher, BioReference, MatchContext, MatcherError};
use idauth_types::{BioType, BiometricSample};
use std::sync::Mutex;

/// One call observed by a [`NullBioMatcher`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedMatch {
    pub modality: BioType,
    pub sample_tag: String,
    pub sub_type: Option<String>,
    pub language: String,
    pub request_id: String,
}

enum Mode {
    Scores(Vec<f64>),
    Failing(MatcherError),
}

/// A deterministic matcher for testing.
///
/// Returns pre-configured scores in order (cycling), or always fails.
pub struct NullBioMatcher {
    mode: Mode,
    index: Mutex<usize>,
    calls: Mutex<Vec<RecordedMatch>>,
}

impl NullBioMatcher {
    /// Create with a sequence of scores returned call by call.
    ///
    /// An empty sequence behaves like `constant(0.0)`.
    pub fn scripted(scores: Vec<f64>) -> Self {
        Self {
            mode: Mode::Scores(scores),
            index: Mutex::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create with a single score returned for every call.
    pub fn constant(score: f64) -> Self {
        Self::scripted(vec![score])
    }

    /// Create a matcher whose every call fails with `error`.
    pub fn failing(error: MatcherError) -> Self {
        Self {
            mode: Mode::Failing(error),
            index: Mutex::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls observed so far, in order.
    pub fn calls(&self) -> Vec<RecordedMatch> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for NullBioMatcher {
    fn default() -> Self {
        Self::constant(60.0)
    }
}

impl BioMatcher for NullBioMatcher {
    fn match_value(
        &self,
        _reference: &BioReference,
        candidate: &BiometricSample,
        context: &MatchContext<'_>,
    ) -> Result<f64, MatcherError> {
        self.calls.lock().unwrap().push(RecordedMatch {
            modality: context.modality,
            sample_tag: candidate.bio_type().to_string(),
            sub_type: context.sub_type.map(str::to_string),
            language: context.language.to_string(),
            request_id: context.request_id.to_string(),
        });

        match &self.mode {
            Mode::Failing(error) => Err(error.clone()),
            Mode::Scores(scores) if scores.is_empty() => Ok(0.0),
            Mode::Scores(scores) => {
                let mut idx = self.index.lock().unwrap();
                let score = scores[*idx % scores.len()];
                *idx += 1;
                Ok(score)
            }
        }
    }

    fn name(&self) -> &str {
        "null-matcher"
    }
}
