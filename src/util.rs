use num::rational::Ratio;
use num::{BigUint, ToPrimitive};

pub(crate) fn factorial(n: i32) -> BigUint {
    (2..=n as u64).map(BigUint::from).product()
}

/// Ordered selections of `take` dice out of `pool`: the falling factorial
/// `pool * (pool - 1) * ... * (pool - take + 1)`. Callers keep `0 <= take <= pool`.
pub(crate) fn ordered_picks(pool: i32, take: i32) -> BigUint {
    ((pool - take + 1)..=pool).map(|x| BigUint::from(x as u64)).product()
}

pub(crate) fn count_ratio(numer: BigUint, denom: BigUint) -> f64 {
    Ratio::new(numer, denom).to_f64().unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_small_values() {
        assert_eq!(factorial(0), BigUint::from(1u32));
        assert_eq!(factorial(1), BigUint::from(1u32));
        assert_eq!(factorial(5), BigUint::from(120u32));
        assert_eq!(factorial(10), BigUint::from(3_628_800u32));
    }

    #[test]
    fn ordered_picks_is_falling_factorial() {
        assert_eq!(ordered_picks(10, 0), BigUint::from(1u32));
        assert_eq!(ordered_picks(10, 1), BigUint::from(10u32));
        assert_eq!(ordered_picks(10, 3), BigUint::from(720u32));
        assert_eq!(ordered_picks(4, 4), BigUint::from(24u32));
    }

    #[test]
    fn count_ratio_divides_exactly() {
        assert_eq!(count_ratio(ordered_picks(10, 3), factorial(3)), 120.0);
        assert_eq!(count_ratio(BigUint::from(1u32), BigUint::from(4u32)), 0.25);
    }
}
