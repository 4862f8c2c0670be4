use std::path::PathBuf;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sentiment_batch::batch;
use sentiment_batch::core::BatchConfig;
use sentiment_batch::dataset;
use sentiment_batch::pipelines::sentiment::SentimentPipelineBuilder;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sentiment-batch.json"));
    let config = BatchConfig::load_or_default(&config_path)?;

    let records = dataset::read_records(&config.input)?;
    info!(rows = records.len(), input = %config.input.display(), "dataset loaded");

    let pipeline = SentimentPipelineBuilder::new(&config.model_dir)
        .max_length(config.max_length)
        .build()?;
    info!(device = ?pipeline.device(), max_length = pipeline.max_length(), "model ready");

    let output = batch::run(&pipeline, &records, config.shard_count)?;
    for failure in &output.failures {
        warn!(row = failure.row, post_num = %failure.post_num, reason = %failure.reason, "row dropped");
    }

    info!("saving results");
    dataset::write_results(&config.output, &output.records)?;
    info!(
        rows = output.stats.rows_classified,
        failed = output.stats.rows_failed,
        elapsed = ?output.stats.total_time,
        output = %config.output.display(),
        "all done"
    );
    Ok(())
}
