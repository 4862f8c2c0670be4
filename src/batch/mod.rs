pub mod scheduler;
pub mod shard;
pub mod stats;

pub use scheduler::{run, BatchOutput, RowFailure};
pub use shard::shard_ranges;
pub use stats::BatchStats;
