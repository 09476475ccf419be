//! Dice-outcome probability engine for Trenchwarden.
//!
//! Computes exact probability distributions for the 2d6-based mechanics
//! of grimdark trench-warfare wargames: combined rolls with advantage or
//! disadvantage dice and flat modifiers, binomial success counts across
//! independent rolls, and the multi-roll injury sequence that accumulates
//! blood markers, tracks the downed state, and absorbs probability into
//! the out-of-action outcome.
//!
//! Everything here is a pure function over plain values: no I/O, no RNG,
//! no shared state, safe to call from any number of threads. Distributions
//! serialize as plain maps for any transport or presentation layer.

pub mod dist;
pub mod error;
pub mod injury;
pub mod roll;
pub mod success;

pub use dist::{Distribution, PROB_EPSILON};
pub use error::{OddsError, OddsResult};
pub use injury::{
    HitEffect, InjuryBand, InjuryOutcome, InjuryThresholds, classify_hit, injury_outcome,
};
pub use roll::{RollParams, roll_distribution};
pub use success::success_distribution;
