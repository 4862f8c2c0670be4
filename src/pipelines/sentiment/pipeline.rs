use super::model::{ClassScores, Sentiment, SentimentModel};
use crate::core::error::Result;
use crate::dataset::Record;
use crate::text::{canonicalize, TextEncoder};

// ============ Output types ============

/// Scores plus derived label for one piece of text.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub scores: ClassScores,
    pub sentiment: Sentiment,
}

/// A classified dataset row. `row` is the record's index in the input table
/// and is what restores input order after concurrent shards complete.
#[derive(Debug, Clone)]
pub struct ClassifiedRecord {
    pub row: usize,
    pub record: Record,
    pub scores: ClassScores,
    pub sentiment: Sentiment,
}

// ============ Pipeline ============

/// Classifies one record at a time: canonicalize, encode, classify, label.
///
/// Construct with [`SentimentPipelineBuilder`](super::SentimentPipelineBuilder)
/// for the BERT backend; [`SentimentPipeline::new`] wires in any
/// [`SentimentModel`], which is how the tests inject deterministic stubs.
pub struct SentimentPipeline<M: SentimentModel> {
    model: M,
    encoder: TextEncoder,
}

impl<M: SentimentModel> SentimentPipeline<M> {
    pub fn new(model: M, encoder: TextEncoder) -> Self {
        Self { model, encoder }
    }

    pub fn classify_text(&self, text: &str) -> Result<Prediction> {
        let canonical = canonicalize(text);
        let sequence = self.encoder.encode(&canonical)?;
        let scores = self.model.classify(&sequence)?;
        Ok(Prediction {
            scores,
            sentiment: Sentiment::from_scores(&scores),
        })
    }

    /// Classifies one row without mutating it; the caller supplies the row's
    /// index in the source table.
    pub fn classify_record(&self, row: usize, record: &Record) -> Result<ClassifiedRecord> {
        let prediction = self.classify_text(&record.text)?;
        Ok(ClassifiedRecord {
            row,
            record: record.clone(),
            scores: prediction.scores,
            sentiment: prediction.sentiment,
        })
    }

    /// Returns the device the model is running on.
    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }

    pub fn max_length(&self) -> usize {
        self.encoder.max_length()
    }
}
