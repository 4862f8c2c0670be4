//! Concurrent batch sentiment classification over a table of short posts.
//!
//! The crate reads a CSV of `post_num,time,text` rows, partitions it into
//! contiguous shards, classifies every row on a pool of worker threads with
//! a locally stored BERT sequence classifier, and writes the table back out
//! augmented with three class probabilities and a derived `long`, `neutral`
//! or `short` label.

pub mod batch;
pub mod core;
pub mod dataset;
pub mod models;
pub mod pipelines;
pub mod text;

// Re-export the main working surface
pub use crate::core::{BatchConfig, PipelineError, Result};
pub use batch::{BatchOutput, BatchStats, RowFailure};
pub use dataset::Record;
pub use models::BertSentimentModel;
pub use pipelines::sentiment::{
    ClassScores, ClassifiedRecord, Sentiment, SentimentModel, SentimentPipeline,
    SentimentPipelineBuilder,
};
