#[cfg(feature = "chart")]
pub use crate::{ChartResult, PoolChart};
pub use crate::{
    distribution, distribution_table, export_csv, max_successes, mean, roll, roll_rng,
    round_significant, stddev, term_probability, total_probability, variance, write_csv, Cleanup,
    Distribution, DistributionTable, InvalidArgument, PrintExt,
};
