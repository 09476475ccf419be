//! Per-hit injury classification.

use crate::dist::{Distribution, PROB_EPSILON};
use crate::error::OddsResult;
use crate::roll::{RollParams, roll_distribution};

use super::{InjuryBand, InjuryThresholds};

/// The effect of one injury roll, conditioned on it mattering.
///
/// `markers` is the distribution over blood markers gained and
/// `out_of_action` the chance the roll removes the model outright;
/// together they sum to 1. Mass in the no-effect band is dropped before
/// normalization, so the effect describes only rolls that changed
/// something.
#[derive(Debug, Clone, PartialEq)]
pub struct HitEffect {
    /// Blood markers gained by this roll.
    pub markers: Distribution,
    /// Probability this roll takes the model out of action.
    pub out_of_action: f64,
}

/// Classify one injury roll against the threshold bands.
///
/// A downed model rolls with one extra advantage die, and a downed-band
/// result while already downed gains two markers instead of one. The
/// downed state transition itself belongs to the caller; only the marker
/// count differs here.
pub fn classify_hit(
    params: RollParams,
    thresholds: &InjuryThresholds,
    is_downed: bool,
) -> OddsResult<HitEffect> {
    let params = if is_downed {
        RollParams {
            dice_modifier: params.dice_modifier + 1,
            ..params
        }
    } else {
        params
    };

    let roll = roll_distribution(params)?;

    let mut markers = Distribution::new();
    let mut out_of_action = 0.0;
    for (outcome, prob) in roll.iter() {
        match thresholds.band(outcome) {
            InjuryBand::NoEffect => {}
            InjuryBand::BloodMarker => markers.add_mass(1, prob),
            InjuryBand::Downed => markers.add_mass(if is_downed { 2 } else { 1 }, prob),
            InjuryBand::OutOfAction => out_of_action += prob,
        }
    }

    let harmful = markers.total_mass() + out_of_action;
    if harmful <= PROB_EPSILON {
        // Every reachable outcome was a no-effect; the hit changes nothing.
        return Ok(HitEffect {
            markers: Distribution::point(0),
            out_of_action: 0.0,
        });
    }
    Ok(HitEffect {
        markers: markers.scaled(1.0 / harmful),
        out_of_action: out_of_action / harmful,
    })
}
