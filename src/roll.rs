use rand::{thread_rng, Rng, RngCore};

const SUCCESS_FACE: i32 = 6;
const SPECIAL_FACE: i32 = 10;

/// Successes of one thrown pool: every die at `SUCCESS_FACE` or above counts
/// one, and every pair of tens adds two more.
#[must_use]
pub fn roll_rng<G>(dice: i32, rng: &mut G) -> i32
where
    G: RngCore,
{
    let mut successes = 0;
    let mut tens = 0;
    for _ in 0..dice {
        let face = rng.gen_range(1..=SPECIAL_FACE);
        if face >= SUCCESS_FACE {
            successes += 1;
        }
        if face == SPECIAL_FACE {
            tens += 1;
        }
    }
    successes + tens / 2 * 2
}

#[must_use]
pub fn roll(dice: i32) -> i32 {
    roll_rng(dice, &mut thread_rng())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::max_successes;

    #[test]
    fn empty_pool_rolls_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(roll_rng(0, &mut rng), 0);
    }

    #[test]
    fn rolls_stay_within_the_support() {
        let mut rng = StdRng::seed_from_u64(7);
        for dice in 1..=10 {
            for _ in 0..1_000 {
                let successes = roll_rng(dice, &mut rng);
                assert!(successes >= 0);
                assert!(successes <= max_successes(dice));
            }
        }
    }
}
