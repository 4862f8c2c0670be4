use thiserror::Error;

/// Errors produced anywhere in the classification pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    // Model loading
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Invalid model format: {0}")]
    ModelFormat(String),

    // Tokenization
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    // Inference
    #[error("Classification failed: {0}")]
    Classification(String),

    // Configuration / dataset
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    // Pass-through from dependencies
    #[error(transparent)]
    Candle(#[from] candle_core::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
