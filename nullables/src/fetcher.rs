//! Nullable reference fetcher — in-memory enrolled templates.

use crate::matcher::NullBioMatcher;
use idauth_matching::{BioMatcher, BioReference, FetchError, IdInfoFetcher};
use idauth_types::BioType;
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory [`IdInfoFetcher`] for testing.
///
/// References are looked up by modality and sub-type, then by modality
/// alone. A modality with nothing enrolled yields an empty template rather
/// than an error, unless the fetcher was built with [`NullIdInfoFetcher::failing`].
pub struct NullIdInfoFetcher {
    matcher: NullBioMatcher,
    references: HashMap<(BioType, Option<String>), BioReference>,
    error: Option<FetchError>,
    fetches: Mutex<Vec<(BioType, Option<String>)>>,
}

impl NullIdInfoFetcher {
    pub fn new(matcher: NullBioMatcher) -> Self {
        Self {
            matcher,
            references: HashMap::new(),
            error: None,
            fetches: Mutex::new(Vec::new()),
        }
    }

    /// A fetcher whose every reference lookup fails with `error`.
    pub fn failing(matcher: NullBioMatcher, error: FetchError) -> Self {
        Self {
            error: Some(error),
            ..Self::new(matcher)
        }
    }

    /// Enrol a reference. Its `modality` must be set to be found.
    pub fn with_reference(mut self, reference: BioReference) -> Self {
        if let Some(modality) = reference.modality {
            self.references
                .insert((modality, reference.sub_type.clone()), reference);
        }
        self
    }

    /// The matcher handed out by [`IdInfoFetcher::matcher`].
    pub fn null_matcher(&self) -> &NullBioMatcher {
        &self.matcher
    }

    /// Reference lookups observed so far, in order.
    pub fn fetches(&self) -> Vec<(BioType, Option<String>)> {
        self.fetches.lock().unwrap().clone()
    }
}

impl Default for NullIdInfoFetcher {
    fn default() -> Self {
        Self::new(NullBioMatcher::default())
    }
}

impl IdInfoFetcher for NullIdInfoFetcher {
    fn matcher(&self) -> &dyn BioMatcher {
        &self.matcher
    }

    fn reference_template(
        &self,
        modality: BioType,
        sub_type: Option<&str>,
        _language: &str,
    ) -> Result<BioReference, FetchError> {
        self.fetches
            .lock()
            .unwrap()
            .push((modality, sub_type.map(str::to_string)));

        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        let exact = self.references.get(&(modality, sub_type.map(str::to_string)));
        Ok(exact
            .or_else(|| self.references.get(&(modality, None)))
            .cloned()
            .unwrap_or_else(|| BioReference::new(modality, Vec::new())))
    }
}
