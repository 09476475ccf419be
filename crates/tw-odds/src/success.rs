//! Success counting across independent rolls.

use crate::dist::Distribution;
use crate::error::OddsResult;
use crate::roll::{RollParams, roll_distribution};

/// Distribution of success counts over `num_rolls` independent rolls.
///
/// A roll succeeds when its outcome lands at or above `threshold`. Rolls
/// are modeled as independent and identically distributed, so the result
/// is the binomial distribution B(num_rolls, p) over `0..=num_rolls`,
/// where `p` is the single-roll success probability.
pub fn success_distribution(
    params: RollParams,
    threshold: i32,
    num_rolls: u32,
) -> OddsResult<Distribution> {
    let single = roll_distribution(params)?;
    let p = single.mass_at_or_above(threshold);
    let q = 1.0 - p;

    let mut dist = Distribution::new();
    let mut coeff = 1.0f64;
    for successes in 0..=num_rolls {
        if successes > 0 {
            coeff = coeff * f64::from(num_rolls - successes + 1) / f64::from(successes);
        }
        let mass = coeff * p.powi(successes as i32) * q.powi((num_rolls - successes) as i32);
        dist.add_mass(successes as i32, mass);
    }
    Ok(dist)
}
