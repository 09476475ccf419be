//! Probability mass functions over integer outcomes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{OddsError, OddsResult};

/// Tolerance for floating-point drift in probability sums.
pub const PROB_EPSILON: f64 = 1e-9;

/// A discrete probability distribution over integer outcomes.
///
/// Maps each outcome to its probability mass. A well-formed distribution
/// has no negative probabilities and sums to 1 within [`PROB_EPSILON`];
/// [`Distribution::validate`] checks both. Outcomes are kept ordered, so
/// iteration and serialization are deterministic.
///
/// Serializes as a plain map (JSON objects use string-encoded integer
/// keys) and round-trips losslessly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution {
    probs: BTreeMap<i32, f64>,
}

impl Distribution {
    /// Create an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// A distribution with all mass on a single outcome.
    pub fn point(outcome: i32) -> Self {
        Self {
            probs: BTreeMap::from([(outcome, 1.0)]),
        }
    }

    /// Add probability mass to an outcome, accumulating with any mass
    /// already there.
    pub fn add_mass(&mut self, outcome: i32, prob: f64) {
        *self.probs.entry(outcome).or_insert(0.0) += prob;
    }

    /// The probability of an outcome, 0 if it has no mass.
    pub fn prob(&self, outcome: i32) -> f64 {
        self.probs.get(&outcome).copied().unwrap_or(0.0)
    }

    /// Iterate over (outcome, probability) pairs in outcome order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.probs.iter().map(|(&outcome, &prob)| (outcome, prob))
    }

    /// Number of outcomes carrying mass.
    pub fn len(&self) -> usize {
        self.probs.len()
    }

    /// Returns true if no outcome carries mass.
    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// The smallest outcome with mass, if any.
    pub fn min_outcome(&self) -> Option<i32> {
        self.probs.keys().next().copied()
    }

    /// The largest outcome with mass, if any.
    pub fn max_outcome(&self) -> Option<i32> {
        self.probs.keys().next_back().copied()
    }

    /// Sum of all probability mass.
    pub fn total_mass(&self) -> f64 {
        self.probs.values().sum()
    }

    /// Mass at or above a threshold (the success tail).
    pub fn mass_at_or_above(&self, threshold: i32) -> f64 {
        self.probs.range(threshold..).map(|(_, &p)| p).sum()
    }

    /// Mass at or below a threshold.
    pub fn mass_at_or_below(&self, threshold: i32) -> f64 {
        self.probs.range(..=threshold).map(|(_, &p)| p).sum()
    }

    /// Probability-weighted mean outcome.
    pub fn expected_value(&self) -> f64 {
        self.iter().map(|(outcome, prob)| f64::from(outcome) * prob).sum()
    }

    /// The same distribution with every outcome moved by `offset`.
    pub fn shifted(&self, offset: i32) -> Self {
        Self {
            probs: self.probs.iter().map(|(&o, &p)| (o + offset, p)).collect(),
        }
    }

    /// The same distribution with every probability multiplied by
    /// `factor`. Used to weight a branch or renormalize jointly with an
    /// external scalar.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            probs: self.probs.iter().map(|(&o, &p)| (o, p * factor)).collect(),
        }
    }

    /// Rescale so the total mass is 1. An empty or zero-mass
    /// distribution is returned unchanged.
    pub fn normalized(&self) -> Self {
        let total = self.total_mass();
        if total <= 0.0 {
            return self.clone();
        }
        self.scaled(1.0 / total)
    }

    /// Check that this is a well-formed probability distribution: no
    /// negative mass, total within [`PROB_EPSILON`] of 1.
    pub fn validate(&self) -> OddsResult<()> {
        for (outcome, prob) in self.iter() {
            if prob < 0.0 {
                return Err(OddsError::MalformedDistribution(format!(
                    "negative probability {prob} at outcome {outcome}"
                )));
            }
        }
        let total = self.total_mass();
        if (total - 1.0).abs() > PROB_EPSILON {
            return Err(OddsError::MalformedDistribution(format!(
                "probabilities sum to {total}, expected 1"
            )));
        }
        Ok(())
    }

    /// Outcome and probability columns as parallel vectors, ordered by
    /// outcome. The shape chart layers consume.
    pub fn series(&self) -> (Vec<i32>, Vec<f64>) {
        (
            self.probs.keys().copied().collect(),
            self.probs.values().copied().collect(),
        )
    }
}

impl FromIterator<(i32, f64)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (i32, f64)>>(iter: I) -> Self {
        let mut dist = Self::new();
        for (outcome, prob) in iter {
            dist.add_mass(outcome, prob);
        }
        dist
    }
}
