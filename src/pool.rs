use itertools::Itertools;

use crate::round::Cleanup;
use crate::util::{count_ratio, factorial, ordered_picks};
use crate::{Distribution, DistributionTable, InvalidArgument, Result};

const FAILURE: f64 = 0.5;
const SPECIAL: f64 = 0.1;
const PLAIN: f64 = 0.4;

/// Highest success count a pool can reach: one per success die plus two
/// bonus successes per pair of tens.
#[must_use]
pub fn max_successes(dice: i32) -> i32 {
    dice + dice / 2 * 2
}

/// Probability of exactly `successes` total successes where exactly `crits`
/// pairs of tens merged into criticals, the rest coming from ordinary
/// success dice and unpaired tens.
///
/// Requires `crits >= 0` and `4 * crits < successes`; the closed form
/// divides by `(successes - 4 * crits - 1)!`. Pools too small to reach
/// `successes` yield probability zero, not an error.
pub fn term_probability(crits: i32, successes: i32, dice: i32) -> Result<f64> {
    if crits < 0 {
        return Err(InvalidArgument("crits must be non-negative"));
    }
    if 4 * crits >= successes {
        return Err(InvalidArgument("crits must satisfy 4 * crits < successes"));
    }
    if successes > dice + 2 * crits {
        return Ok(0.0);
    }
    let picks = ordered_picks(dice, successes - 2 * crits);
    let arrangements = factorial(2 * crits) * factorial(successes - 4 * crits - 1);
    let weight = (1.0 / f64::from(8 * crits + 4) + 1.0 / f64::from(successes - 4 * crits))
        * FAILURE.powi(dice + 2 * crits - successes)
        * SPECIAL.powi(2 * crits)
        * PLAIN.powi(successes - 4 * crits);
    Ok(count_ratio(picks, arrangements) * weight)
}

/// Probability of throwing exactly `successes` successes with `dice` dice,
/// summed over every feasible critical-pair count.
pub fn total_probability(successes: i32, dice: i32, cleanup: Cleanup) -> Result<f64> {
    if successes < 0 || dice < 0 {
        return Err(InvalidArgument("successes and dice must be non-negative"));
    }
    let raw = if successes > max_successes(dice) {
        0.0
    } else if successes % 4 != 0 {
        let mut sum = 0.0;
        for crits in 0..=successes / 4 {
            sum += term_probability(crits, successes, dice)?;
        }
        sum
    } else if successes == 0 {
        FAILURE.powi(dice)
    } else {
        // The crits = successes / 4 boundary sits outside the term formula's
        // domain; it is the paired-tens-only outcome, computed directly.
        let mut sum = 0.0;
        for crits in 0..successes / 4 {
            sum += term_probability(crits, successes, dice)?;
        }
        sum + paired_tens_term(successes, dice)
    };
    Ok(cleanup.apply(raw))
}

/// Every success comes from tens merged into criticals: `successes / 2` tens
/// on distinct dice, failures everywhere else.
fn paired_tens_term(successes: i32, dice: i32) -> f64 {
    let tens = successes / 2;
    count_ratio(ordered_picks(dice, tens), factorial(tens))
        * FAILURE.powi(dice - tens)
        * SPECIAL.powi(tens)
}

/// Full outcome distribution of a pool, indexed by success count.
pub fn distribution(dice: i32, cleanup: Cleanup) -> Result<Distribution> {
    if dice < 0 {
        return Err(InvalidArgument("dice must be non-negative"));
    }
    (0..=max_successes(dice))
        .map(|successes| total_probability(successes, dice, cleanup))
        .try_collect()
}

/// One distribution per pool size, from the empty pool up to `max_dice`.
pub fn distribution_table(max_dice: i32, cleanup: Cleanup) -> Result<DistributionTable> {
    if max_dice < 0 {
        return Err(InvalidArgument("max dice must be non-negative"));
    }
    (0..=max_dice)
        .map(|dice| distribution(dice, cleanup))
        .try_collect()
}
