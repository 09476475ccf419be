//! Injury rolls: threshold bands, per-hit classification, and the
//! multi-hit outcome simulation.
//!
//! An injury roll lands in one of four contiguous bands: no effect,
//! blood marker, downed, or out of action. Blood markers accumulate
//! across hits, the downed band puts the model in a state that makes
//! later rolls harsher, and out of action removes it from play outright.

pub mod classify;
pub mod sim;

pub use classify::{HitEffect, classify_hit};
pub use sim::{InjuryOutcome, injury_outcome};

use serde::{Deserialize, Serialize};

use crate::error::{OddsError, OddsResult};

/// The four contiguous outcome bands of the injury chart.
///
/// Together the bands partition the whole outcome line: everything at or
/// below `no_effect_max` does nothing, the two closed intervals award
/// blood markers or down the model, and everything at or above
/// `out_of_action_min` takes it out of action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryThresholds {
    /// Highest roll with no effect.
    pub no_effect_max: i32,
    /// Closed interval awarding a blood marker.
    pub blood_marker: (i32, i32),
    /// Closed interval that downs the model.
    pub downed: (i32, i32),
    /// Lowest roll that takes the model out of action.
    pub out_of_action_min: i32,
}

impl Default for InjuryThresholds {
    /// The standard injury chart: 1 no effect, 2-6 blood marker,
    /// 7-8 downed, 9+ out of action.
    fn default() -> Self {
        Self {
            no_effect_max: 1,
            blood_marker: (2, 6),
            downed: (7, 8),
            out_of_action_min: 9,
        }
    }
}

impl InjuryThresholds {
    /// Build a validated set of bands.
    pub fn new(
        no_effect_max: i32,
        blood_marker: (i32, i32),
        downed: (i32, i32),
        out_of_action_min: i32,
    ) -> OddsResult<Self> {
        let thresholds = Self {
            no_effect_max,
            blood_marker,
            downed,
            out_of_action_min,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Check that the bands are non-empty, contiguous, and cover the
    /// whole outcome line. Configurations arriving through
    /// deserialization should be checked here once, before use; the
    /// compute paths assume validated bands.
    pub fn validate(&self) -> OddsResult<()> {
        let (blood_lo, blood_hi) = self.blood_marker;
        let (down_lo, down_hi) = self.downed;
        if blood_lo > blood_hi {
            return Err(OddsError::InvalidThresholds(format!(
                "blood marker band [{blood_lo}, {blood_hi}] is inverted"
            )));
        }
        if down_lo > down_hi {
            return Err(OddsError::InvalidThresholds(format!(
                "downed band [{down_lo}, {down_hi}] is inverted"
            )));
        }
        if blood_lo != self.no_effect_max + 1 {
            return Err(OddsError::InvalidThresholds(format!(
                "blood marker band starts at {blood_lo}, expected {} after the no-effect band",
                self.no_effect_max + 1
            )));
        }
        if down_lo != blood_hi + 1 {
            return Err(OddsError::InvalidThresholds(format!(
                "downed band starts at {down_lo}, expected {} after the blood marker band",
                blood_hi + 1
            )));
        }
        if self.out_of_action_min != down_hi + 1 {
            return Err(OddsError::InvalidThresholds(format!(
                "out-of-action band starts at {}, expected {} after the downed band",
                self.out_of_action_min,
                down_hi + 1
            )));
        }
        Ok(())
    }

    /// Which band a roll outcome lands in. Total over all integers for
    /// validated bands.
    pub fn band(&self, outcome: i32) -> InjuryBand {
        if outcome <= self.no_effect_max {
            InjuryBand::NoEffect
        } else if outcome <= self.blood_marker.1 {
            InjuryBand::BloodMarker
        } else if outcome <= self.downed.1 {
            InjuryBand::Downed
        } else {
            InjuryBand::OutOfAction
        }
    }
}

/// A single injury-roll outcome band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjuryBand {
    /// The roll does nothing.
    NoEffect,
    /// The roll awards one blood marker.
    BloodMarker,
    /// The roll downs the model (or wounds it twice if already down).
    Downed,
    /// The roll removes the model from play.
    OutOfAction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chart_is_valid() {
        assert!(InjuryThresholds::default().validate().is_ok());
    }

    #[test]
    fn bands_classify_default_chart() {
        let t = InjuryThresholds::default();
        assert_eq!(t.band(0), InjuryBand::NoEffect);
        assert_eq!(t.band(1), InjuryBand::NoEffect);
        assert_eq!(t.band(2), InjuryBand::BloodMarker);
        assert_eq!(t.band(6), InjuryBand::BloodMarker);
        assert_eq!(t.band(7), InjuryBand::Downed);
        assert_eq!(t.band(8), InjuryBand::Downed);
        assert_eq!(t.band(9), InjuryBand::OutOfAction);
        assert_eq!(t.band(25), InjuryBand::OutOfAction);
    }

    #[test]
    fn new_accepts_shifted_chart() {
        let t = InjuryThresholds::new(2, (3, 7), (8, 10), 11).unwrap();
        assert_eq!(t.band(3), InjuryBand::BloodMarker);
        assert_eq!(t.band(10), InjuryBand::Downed);
    }

    #[test]
    fn gap_after_no_effect_rejected() {
        assert!(InjuryThresholds::new(1, (3, 6), (7, 8), 9).is_err());
    }

    #[test]
    fn overlap_between_bands_rejected() {
        assert!(InjuryThresholds::new(1, (2, 7), (7, 8), 9).is_err());
    }

    #[test]
    fn gap_before_out_of_action_rejected() {
        assert!(InjuryThresholds::new(1, (2, 6), (7, 8), 10).is_err());
    }

    #[test]
    fn inverted_band_rejected() {
        assert!(InjuryThresholds::new(1, (6, 2), (7, 8), 9).is_err());
    }

    #[test]
    fn round_trip_serde() {
        let t = InjuryThresholds::default();
        let json = serde_json::to_string(&t).unwrap();
        let back: InjuryThresholds = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
