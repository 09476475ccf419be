//! Combined-roll distributions with advantage and disadvantage.
//!
//! The baseline roll is 2d6 summed. A dice modifier expands the pool:
//! positive values roll that many extra dice and keep the best two
//! (advantage), negative values keep the worst two (disadvantage). An
//! optional extra d6 and a flat modifier apply after selection.

use serde::{Deserialize, Serialize};

use crate::dist::Distribution;
use crate::error::{OddsError, OddsResult};

/// Faces on the game's dice.
const FACES: u32 = 6;

/// Dice kept (and rolled, unmodified) in every combined roll.
const BASE_DICE: u32 = 2;

/// Parameters describing a single combined roll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollParams {
    /// Extra dice relative to the 2d6 baseline. Positive rolls that many
    /// more dice and keeps the best two; negative keeps the worst two.
    pub dice_modifier: i32,
    /// Whether one additional d6 is added to the kept sum.
    pub extra_die: bool,
    /// Flat value added to the final result.
    pub flat_modifier: i32,
}

impl RollParams {
    /// Plain 2d6 with no modifiers.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Number of dice rolled before the best or worst two are kept.
    pub fn pool_size(&self) -> u32 {
        BASE_DICE + self.dice_modifier.unsigned_abs()
    }
}

/// Compute the exact outcome distribution for a combined roll.
///
/// Enumerates every multiset of faces the pool can show, weighting each
/// by its number of orderings, so the result is the true fair-dice
/// distribution. Enumeration cost grows as C(n + 5, 5) in the pool size
/// `n`; callers wanting bounded latency should bound `dice_modifier`.
pub fn roll_distribution(params: RollParams) -> OddsResult<Distribution> {
    let pool = params.pool_size();
    if pool < BASE_DICE {
        return Err(OddsError::InvalidRollParameters(format!(
            "pool of {pool} dice is below the minimum of {BASE_DICE}"
        )));
    }

    let total_orderings = f64::from(FACES).powi(pool as i32);
    let mut dist = Distribution::new();
    let mut counts = [0u32; FACES as usize];
    enumerate_counts(pool, 0, &mut counts, &mut |counts| {
        let kept = kept_sum(counts, params.dice_modifier);
        dist.add_mass(kept, orderings(counts) / total_orderings);
    });

    if params.extra_die {
        dist = with_extra_d6(&dist);
    }
    if params.flat_modifier != 0 {
        dist = dist.shifted(params.flat_modifier);
    }
    Ok(dist)
}

/// Visit every face-count vector (c1..c6 summing to the pool size), one
/// per distinct multiset of faces.
fn enumerate_counts(
    remaining: u32,
    face: usize,
    counts: &mut [u32; FACES as usize],
    visit: &mut impl FnMut(&[u32; FACES as usize]),
) {
    if face == counts.len() - 1 {
        counts[face] = remaining;
        visit(counts);
        return;
    }
    for count in 0..=remaining {
        counts[face] = count;
        enumerate_counts(remaining - count, face + 1, counts, visit);
    }
}

/// Number of distinct orderings of the multiset described by `counts`:
/// the multinomial coefficient n! / (c1! .. c6!), built as a product of
/// binomials so intermediate values stay exact in f64 for any pool size
/// worth enumerating.
fn orderings(counts: &[u32; FACES as usize]) -> f64 {
    let mut placed = 0u32;
    let mut coeff = 1.0;
    for &count in counts {
        for pick in 1..=count {
            placed += 1;
            coeff = coeff * f64::from(placed) / f64::from(pick);
        }
    }
    coeff
}

/// Sum of the kept dice for one multiset, by the sign of the modifier.
fn kept_sum(counts: &[u32; FACES as usize], dice_modifier: i32) -> i32 {
    if dice_modifier > 0 {
        best_two(counts)
    } else if dice_modifier < 0 {
        worst_two(counts)
    } else {
        // Pool is exactly the two base dice; sum everything.
        counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as i32 + 1) * c as i32)
            .sum()
    }
}

fn best_two(counts: &[u32; FACES as usize]) -> i32 {
    let mut need = BASE_DICE;
    let mut sum = 0;
    for face in (1..=FACES).rev() {
        let take = counts[face as usize - 1].min(need);
        sum += (face * take) as i32;
        need -= take;
        if need == 0 {
            break;
        }
    }
    sum
}

fn worst_two(counts: &[u32; FACES as usize]) -> i32 {
    let mut need = BASE_DICE;
    let mut sum = 0;
    for face in 1..=FACES {
        let take = counts[face as usize - 1].min(need);
        sum += (face * take) as i32;
        need -= take;
        if need == 0 {
            break;
        }
    }
    sum
}

/// Cross every outcome with one more uniform d6.
fn with_extra_d6(dist: &Distribution) -> Distribution {
    let mut out = Distribution::new();
    for (outcome, prob) in dist.iter() {
        for face in 1..=FACES as i32 {
            out.add_mass(outcome + face, prob / f64::from(FACES));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dist::PROB_EPSILON;

    #[test]
    fn plain_2d6_is_triangular() {
        let dist = roll_distribution(RollParams::plain()).unwrap();
        assert!((dist.prob(2) - 1.0 / 36.0).abs() < PROB_EPSILON);
        assert!((dist.prob(7) - 6.0 / 36.0).abs() < PROB_EPSILON);
        assert!((dist.prob(12) - 1.0 / 36.0).abs() < PROB_EPSILON);
        // Monotone up to the mode and back down
        for outcome in 2..7 {
            assert!(dist.prob(outcome) < dist.prob(outcome + 1));
        }
        for outcome in 7..12 {
            assert!(dist.prob(outcome) > dist.prob(outcome + 1));
        }
    }

    #[test]
    fn distributions_are_normalized() {
        for dice_modifier in -3..=3 {
            for extra_die in [false, true] {
                let params = RollParams {
                    dice_modifier,
                    extra_die,
                    flat_modifier: -2,
                };
                let dist = roll_distribution(params).unwrap();
                assert!(
                    (dist.total_mass() - 1.0).abs() < PROB_EPSILON,
                    "params {params:?} sum {}",
                    dist.total_mass()
                );
            }
        }
    }

    #[test]
    fn advantage_shifts_mass_up() {
        let plain = roll_distribution(RollParams::plain()).unwrap();
        let advantage = roll_distribution(RollParams {
            dice_modifier: 1,
            ..RollParams::plain()
        })
        .unwrap();
        assert!(advantage.mass_at_or_above(7) > plain.mass_at_or_above(7));
    }

    #[test]
    fn disadvantage_shifts_mass_down() {
        let plain = roll_distribution(RollParams::plain()).unwrap();
        let disadvantage = roll_distribution(RollParams {
            dice_modifier: -1,
            ..RollParams::plain()
        })
        .unwrap();
        assert!(disadvantage.mass_at_or_above(7) < plain.mass_at_or_above(7));
    }

    #[test]
    fn best_two_of_three_exact_corners() {
        let dist = roll_distribution(RollParams {
            dice_modifier: 1,
            ..RollParams::plain()
        })
        .unwrap();
        // Twelve needs at least two sixes among three dice: 3 * 5 + 1 orderings.
        assert!((dist.prob(12) - 16.0 / 216.0).abs() < PROB_EPSILON);
        // Two means all three dice came up 1.
        assert!((dist.prob(2) - 1.0 / 216.0).abs() < PROB_EPSILON);
    }

    #[test]
    fn worst_two_mirrors_best_two() {
        let advantage = roll_distribution(RollParams {
            dice_modifier: 2,
            ..RollParams::plain()
        })
        .unwrap();
        let disadvantage = roll_distribution(RollParams {
            dice_modifier: -2,
            ..RollParams::plain()
        })
        .unwrap();
        // Keeping the worst two of fair dice is the reflection of keeping
        // the best two around the 2d6 midpoint of 7.
        for outcome in 2..=12 {
            assert!(
                (advantage.prob(outcome) - disadvantage.prob(14 - outcome)).abs() < PROB_EPSILON,
                "outcome {outcome}"
            );
        }
    }

    #[test]
    fn extra_die_extends_range() {
        let dist = roll_distribution(RollParams {
            extra_die: true,
            ..RollParams::plain()
        })
        .unwrap();
        assert_eq!(dist.min_outcome(), Some(3));
        assert_eq!(dist.max_outcome(), Some(18));
        assert!((dist.total_mass() - 1.0).abs() < PROB_EPSILON);
    }

    #[test]
    fn flat_modifier_shifts_outcomes() {
        let dist = roll_distribution(RollParams {
            flat_modifier: -3,
            ..RollParams::plain()
        })
        .unwrap();
        assert_eq!(dist.min_outcome(), Some(-1));
        assert_eq!(dist.max_outcome(), Some(9));
        assert!((dist.prob(4) - 6.0 / 36.0).abs() < PROB_EPSILON);
    }

    #[test]
    fn pool_size_counts_modifier_magnitude() {
        assert_eq!(RollParams::plain().pool_size(), 2);
        assert_eq!(
            RollParams {
                dice_modifier: 3,
                ..RollParams::plain()
            }
            .pool_size(),
            5
        );
        assert_eq!(
            RollParams {
                dice_modifier: -2,
                ..RollParams::plain()
            }
            .pool_size(),
            4
        );
    }

    #[test]
    fn large_pool_still_normalizes() {
        let dist = roll_distribution(RollParams {
            dice_modifier: 8,
            ..RollParams::plain()
        })
        .unwrap();
        assert!((dist.total_mass() - 1.0).abs() < PROB_EPSILON);
        // Ten dice keeping the best two almost always keep a pair of sixes.
        assert!(dist.prob(12) > 0.5);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let params = RollParams {
            dice_modifier: 2,
            extra_die: true,
            flat_modifier: 1,
        };
        let a = roll_distribution(params).unwrap();
        let b = roll_distribution(params).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn round_trip_serde_params() {
        let params = RollParams {
            dice_modifier: -1,
            extra_die: true,
            flat_modifier: 2,
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: RollParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }
}
