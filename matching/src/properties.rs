//! Match properties handed to the authentication decision step.

use idauth_types::BioType;
use serde::Serialize;
use std::collections::BTreeMap;

/// The match result for one modality.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchProperty {
    pub modality: BioType,
    /// Aggregated score across `sample_scores`.
    pub score: f64,
    /// Per-sample scores, in request order.
    pub sample_scores: Vec<f64>,
    /// Name reported by the matcher that produced the scores.
    pub matcher: String,
    /// Language token the request was resolved under.
    pub language: String,
}

impl MatchProperty {
    pub fn sample_count(&self) -> usize {
        self.sample_scores.len()
    }
}

/// Match properties keyed by modality.
///
/// Empty means the request offered nothing the auth type could use and the
/// caller should skip this check.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MatchPropertyMap(BTreeMap<BioType, MatchProperty>);

impl MatchPropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, property: MatchProperty) {
        self.0.insert(property.modality, property);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, modality: BioType) -> Option<&MatchProperty> {
        self.0.get(&modality)
    }

    pub fn contains(&self, modality: BioType) -> bool {
        self.0.contains_key(&modality)
    }

    /// Modalities with a property, in tag order.
    pub fn modalities(&self) -> impl Iterator<Item = BioType> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchProperty> {
        self.0.values()
    }
}
