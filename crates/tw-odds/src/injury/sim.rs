//! Multi-hit injury outcome simulation.
//!
//! For every possible hit count, a branch state is threaded through one
//! injury roll per hit: markers accumulate, a model with any markers is
//! downed for its next roll, and out-of-action mass is absorbed and takes
//! no further rolls. Branches are combined weighted by the hit-count
//! distribution.

use serde::{Deserialize, Serialize};

use crate::dist::Distribution;
use crate::error::{OddsError, OddsResult};
use crate::roll::RollParams;

use super::classify::{HitEffect, classify_hit};
use super::InjuryThresholds;

/// Aggregate outcome of an injury sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryOutcome {
    /// Distribution over accumulated blood markers for models still in play.
    pub blood_markers: Distribution,
    /// Probability the model ends out of action.
    pub out_of_action: f64,
}

/// One branch of the simulation: the marker distribution for paths still
/// in play plus the mass already absorbed out of action.
#[derive(Debug, Clone, PartialEq)]
struct BranchState {
    markers: Distribution,
    out_of_action: f64,
}

impl BranchState {
    /// The identity state: zero markers, nothing absorbed.
    fn unhurt() -> Self {
        Self {
            markers: Distribution::point(0),
            out_of_action: 0.0,
        }
    }

    /// Apply one injury roll to every path in this state, returning the
    /// next state. Paths with markers are downed and use the harsher
    /// effect; mass already out of action is absorbing and untouched.
    fn after_roll(&self, standing: &HitEffect, downed: &HitEffect) -> Self {
        let mut markers = Distribution::new();
        let mut out_of_action = self.out_of_action;
        for (current, prob) in self.markers.iter() {
            let effect = if current > 0 { downed } else { standing };
            for (gained, gain_prob) in effect.markers.iter() {
                markers.add_mass(current + gained, prob * gain_prob);
            }
            out_of_action += prob * effect.out_of_action;
        }
        Self {
            markers,
            out_of_action,
        }
    }
}

/// Combined blood-marker and out-of-action outcome across all hit counts.
///
/// `hit_distribution` maps hit counts to probabilities and must be a
/// well-formed distribution over non-negative counts; it is checked
/// eagerly. Threshold bands are assumed already validated (see
/// [`InjuryThresholds::new`]).
pub fn injury_outcome(
    hit_distribution: &Distribution,
    params: RollParams,
    thresholds: &InjuryThresholds,
) -> OddsResult<InjuryOutcome> {
    hit_distribution.validate()?;
    if let Some(min) = hit_distribution.min_outcome() {
        if min < 0 {
            return Err(OddsError::MalformedDistribution(format!(
                "negative hit count {min}"
            )));
        }
    }

    // The per-roll effect depends only on the downed flag, so both
    // variants are fixed for the whole simulation.
    let standing = classify_hit(params, thresholds, false)?;
    let downed = classify_hit(params, thresholds, true)?;

    let mut blood_markers = Distribution::new();
    let mut out_of_action = 0.0;
    for (hits, hit_prob) in hit_distribution.iter() {
        let branch = (0..hits).fold(BranchState::unhurt(), |state, _| {
            state.after_roll(&standing, &downed)
        });
        for (markers, prob) in branch.markers.iter() {
            blood_markers.add_mass(markers, hit_prob * prob);
        }
        out_of_action += hit_prob * branch.out_of_action;
    }

    // Each branch conserves its mass, so the grand total is 1 up to
    // floating-point drift; renormalize jointly before reporting.
    let total = blood_markers.total_mass() + out_of_action;
    Ok(InjuryOutcome {
        blood_markers: blood_markers.scaled(1.0 / total),
        out_of_action: out_of_action / total,
    })
}
