//! Fan-out/fan-in execution of the pipeline over dataset shards.

use std::sync::mpsc;
use std::thread;

use tracing::{debug, warn};

use super::shard::shard_ranges;
use super::stats::BatchStats;
use crate::core::error::{PipelineError, Result};
use crate::dataset::Record;
use crate::pipelines::sentiment::{ClassifiedRecord, SentimentModel, SentimentPipeline};

/// A row dropped from the result set, with the reason it failed.
#[derive(Debug, Clone)]
pub struct RowFailure {
    pub row: usize,
    pub post_num: String,
    pub reason: String,
}

/// Everything a batch run produces: classified rows in input order, the
/// failures that were skipped, and run statistics.
#[derive(Debug)]
pub struct BatchOutput {
    pub records: Vec<ClassifiedRecord>,
    pub failures: Vec<RowFailure>,
    pub stats: BatchStats,
}

struct ShardOutput {
    shard: usize,
    records: Vec<ClassifiedRecord>,
    failures: Vec<RowFailure>,
}

/// Partitions `records` into `shard_count` contiguous shards and classifies
/// each shard on its own worker thread.
///
/// Workers deliver shard results over a channel in completion order; the
/// final output is re-sorted by original row index. The thread scope joins
/// every worker before returning, so a worker panic propagates instead of
/// hanging the collector. Row-level failures never abort a shard.
pub fn run<M>(
    pipeline: &SentimentPipeline<M>,
    records: &[Record],
    shard_count: usize,
) -> Result<BatchOutput>
where
    M: SentimentModel + Sync,
{
    if shard_count == 0 {
        return Err(PipelineError::Config("shard_count must be at least 1".into()));
    }

    let stats = BatchStats::start();
    let ranges = shard_ranges(records.len(), shard_count);

    let mut classified = Vec::with_capacity(records.len());
    let mut failures = Vec::new();

    thread::scope(|scope| {
        let (tx, rx) = mpsc::channel::<ShardOutput>();
        for (shard, range) in ranges.into_iter().enumerate() {
            let tx = tx.clone();
            let rows = &records[range.clone()];
            scope.spawn(move || {
                let output = classify_shard(pipeline, shard, range.start, rows);
                // The collector outlives every worker; a failed send means
                // it is already gone and there is nobody left to deliver to.
                let _ = tx.send(output);
            });
        }
        drop(tx);

        // Fan-in: completion order, not shard order. The loop ends once
        // every worker has dropped its sender.
        for output in rx {
            debug!(
                shard = output.shard,
                rows = output.records.len(),
                failed = output.failures.len(),
                "shard finished"
            );
            classified.extend(output.records);
            failures.extend(output.failures);
        }
    });

    // Completion order is nondeterministic; restore input order.
    classified.sort_by_key(|record| record.row);
    failures.sort_by_key(|failure| failure.row);

    let stats = stats.finish(classified.len(), failures.len());
    Ok(BatchOutput { records: classified, failures, stats })
}

fn classify_shard<M>(
    pipeline: &SentimentPipeline<M>,
    shard: usize,
    first_row: usize,
    rows: &[Record],
) -> ShardOutput
where
    M: SentimentModel,
{
    let mut records = Vec::with_capacity(rows.len());
    let mut failures = Vec::new();
    for (offset, record) in rows.iter().enumerate() {
        let row = first_row + offset;
        match pipeline.classify_record(row, record) {
            Ok(classified) => records.push(classified),
            Err(err) => {
                warn!(row, post_num = %record.post_num, error = %err, "row skipped");
                failures.push(RowFailure {
                    row,
                    post_num: record.post_num.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }
    ShardOutput { shard, records, failures }
}
