use std::time::{Duration, Instant};

/// Wall-clock time and row counters for one batch run.
#[derive(Debug, Clone)]
pub struct BatchStats {
    /// Total execution time.
    pub total_time: Duration,
    /// Rows that produced a classification.
    pub rows_classified: usize,
    /// Rows dropped with a recorded failure.
    pub rows_failed: usize,
}

impl BatchStats {
    /// Create a new stats tracker (call at start of the run).
    pub(crate) fn start() -> BatchStatsBuilder {
        BatchStatsBuilder {
            start_time: Instant::now(),
        }
    }
}

/// Builder for BatchStats - tracks timing from creation to finalize.
pub(crate) struct BatchStatsBuilder {
    start_time: Instant,
}

impl BatchStatsBuilder {
    pub fn finish(self, rows_classified: usize, rows_failed: usize) -> BatchStats {
        BatchStats {
            total_time: self.start_time.elapsed(),
            rows_classified,
            rows_failed,
        }
    }
}
