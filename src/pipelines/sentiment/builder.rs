use std::path::{Path, PathBuf};

use super::pipeline::SentimentPipeline;
use crate::core::config::DEFAULT_MAX_LENGTH;
use crate::core::error::{PipelineError, Result};
use crate::models::BertSentimentModel;
use crate::pipelines::utils::DeviceRequest;
use crate::text::TextEncoder;

/// Builds a [`SentimentPipeline`] backed by a local BERT checkpoint.
pub struct SentimentPipelineBuilder {
    model_dir: PathBuf,
    max_length: usize,
    device_request: DeviceRequest,
}

impl SentimentPipelineBuilder {
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
            max_length: DEFAULT_MAX_LENGTH,
            device_request: DeviceRequest::Default,
        }
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn cpu(mut self) -> Self {
        self.device_request = DeviceRequest::Cpu;
        self
    }

    pub fn cuda_device(mut self, index: usize) -> Self {
        self.device_request = DeviceRequest::Cuda(index);
        self
    }

    pub fn device(mut self, device: candle_core::Device) -> Self {
        self.device_request = DeviceRequest::Explicit(device);
        self
    }

    pub fn build(self) -> Result<SentimentPipeline<BertSentimentModel>> {
        let device = self.device_request.resolve()?;
        let model = BertSentimentModel::from_dir(&self.model_dir, device)?;
        let vocab = locate_vocab(&self.model_dir)?;
        let encoder = TextEncoder::from_vocab_file(&vocab, self.max_length)?;
        Ok(SentimentPipeline::new(model, encoder))
    }
}

fn locate_vocab(model_dir: &Path) -> Result<PathBuf> {
    ["tokenizer/vocab.txt", "vocab.txt"]
        .iter()
        .map(|name| model_dir.join(name))
        .find(|path| path.exists())
        .ok_or_else(|| {
            PipelineError::Vocabulary(format!("no vocab.txt under {}", model_dir.display()))
        })
}
