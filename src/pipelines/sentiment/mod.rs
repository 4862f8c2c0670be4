//! Sentiment classification pipeline for short forum posts.
//!
//! Every post is canonicalized, encoded to a fixed-length token sequence and
//! scored over the three stance classes; the label falls out of the score
//! comparison. The model behind the pipeline is a trait seam, so the batch
//! machinery runs unchanged against stub backends.
//!
//! ## Main Types
//!
//! - [`SentimentPipeline`] - per-record classification
//! - [`SentimentPipelineBuilder`] - builder for the BERT-backed pipeline
//! - [`SentimentModel`] - trait for classification backends
//! - [`ClassScores`] / [`Sentiment`] - scores and the derived label
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use sentiment_batch::pipelines::sentiment::SentimentPipelineBuilder;
//!
//! # fn run() -> sentiment_batch::Result<()> {
//! let pipeline = SentimentPipelineBuilder::new("model").cpu().build()?;
//!
//! let prediction = pipeline.classify_text("삼성전자 10% 간다")?;
//! println!("{} (long={:.6})", prediction.sentiment, prediction.scores.long);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod model;
pub mod pipeline;

pub use builder::SentimentPipelineBuilder;
pub use model::{ClassScores, Sentiment, SentimentModel};
pub use pipeline::{ClassifiedRecord, Prediction, SentimentPipeline};
