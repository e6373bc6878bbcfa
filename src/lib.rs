#[cfg(feature = "chart")]
mod chart;
mod export;
mod pool;
pub mod prelude;
mod print;
mod roll;
mod round;
mod stats;
mod util;

use thiserror::Error;

#[cfg(feature = "chart")]
pub use chart::{ChartResult, PoolChart};
pub use export::{export_csv, write_csv};
pub use pool::{
    distribution, distribution_table, max_successes, term_probability, total_probability,
};
pub use print::PrintExt;
pub use roll::{roll, roll_rng};
pub use round::{round_significant, Cleanup};
pub use stats::{mean, stddev, variance};

/// Probabilities of every success count for one pool, indexed by successes.
pub type Distribution = Vec<f64>;
/// One [`Distribution`] per pool size, indexed by dice count.
pub type DistributionTable = Vec<Distribution>;

pub type Result<T> = core::result::Result<T, InvalidArgument>;

#[derive(Clone, Copy, Debug, Error)]
#[error("invalid argument: {0}")]
pub struct InvalidArgument(pub &'static str);

const SIGNIFICANT_DIGITS: u32 = 12;
