//! How per-sample scores of one modality collapse into a single score.

use serde::{Deserialize, Serialize};

/// Score aggregation applied per modality.
///
/// `Mean` is the default: one weak finger pulls a composite score down, but
/// never zeroes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationPolicy {
    #[default]
    Mean,
    Max,
    Sum,
}

impl AggregationPolicy {
    /// Aggregate a non-empty score list. Returns `0.0` for an empty list.
    pub fn aggregate(&self, scores: &[f64]) -> f64 {
        if scores.is_empty() {
            return 0.0;
        }
        match self {
            Self::Mean => scores.iter().sum::<f64>() / scores.len() as f64,
            Self::Max => scores.iter().copied().fold(f64::MIN, f64::max),
            Self::Sum => scores.iter().sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_scores() {
        assert_eq!(AggregationPolicy::Mean.aggregate(&[60.0, 80.0, 100.0]), 80.0);
    }

    #[test]
    fn max_of_scores() {
        assert_eq!(AggregationPolicy::Max.aggregate(&[60.0, 95.5, 10.0]), 95.5);
    }

    #[test]
    fn sum_of_scores() {
        assert_eq!(AggregationPolicy::Sum.aggregate(&[60.0, 60.0]), 120.0);
    }

    #[test]
    fn single_score_is_identity_for_every_policy() {
        for p in [AggregationPolicy::Mean, AggregationPolicy::Max, AggregationPolicy::Sum] {
            assert_eq!(p.aggregate(&[42.0]), 42.0);
        }
    }

    #[test]
    fn empty_list_aggregates_to_zero() {
        assert_eq!(AggregationPolicy::Max.aggregate(&[]), 0.0);
    }

    #[test]
    fn default_is_mean() {
        assert_eq!(AggregationPolicy::default(), AggregationPolicy::Mean);
    }
}
