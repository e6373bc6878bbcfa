/// Expected success count of a distribution.
#[must_use]
pub fn mean(dist: &[f64]) -> f64 {
    dist.iter()
        .enumerate()
        .fold(0.0, |acc, (successes, p)| acc + successes as f64 * p)
}

#[must_use]
pub fn variance(dist: &[f64]) -> f64 {
    let m = mean(dist);
    dist.iter()
        .enumerate()
        .fold(0.0, |acc, (successes, p)| {
            acc + (successes as f64 - m).powi(2) * p
        })
}

#[must_use]
pub fn stddev(dist: &[f64]) -> f64 {
    variance(dist).sqrt()
}
