//! BERT sequence classifier loaded from a local model directory.
//!
//! The directory is expected to hold the encoder configuration
//! (`config.json` or `bert_config.json`) and a weights artifact
//! (`model.safetensors` or `pytorch_model.bin`).

use std::fs;
use std::path::{Path, PathBuf};

use candle_core::{DType, Device, IndexOp, Tensor, D};
use candle_nn::ops::softmax;
use candle_nn::{linear, Linear, Module, VarBuilder};
use candle_transformers::models::bert::{BertModel, Config};
use tracing::info;

use crate::core::error::{PipelineError, Result};
use crate::pipelines::sentiment::model::{ClassScores, SentimentModel};
use crate::text::TokenSequence;

const CLASS_COUNT: usize = 3;

pub struct BertSentimentModel {
    bert: BertModel,
    pooler: Linear,
    classifier: Linear,
    device: Device,
}

impl BertSentimentModel {
    /// Loads configuration and weights from `model_dir` onto `device`.
    pub fn from_dir(model_dir: &Path, device: Device) -> Result<Self> {
        let config_file =
            locate(model_dir, &["config.json", "bert_config.json"]).ok_or_else(|| {
                PipelineError::ModelNotFound(format!(
                    "no config.json or bert_config.json under {}",
                    model_dir.display()
                ))
            })?;
        let config_content = fs::read_to_string(&config_file)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| PipelineError::ModelFormat(format!("cannot parse model config: {e}")))?;

        // The candle config keeps its fields to itself; the classification
        // head needs the hidden size from the same JSON.
        #[derive(serde::Deserialize)]
        struct HeadConfig {
            hidden_size: usize,
        }
        let head: HeadConfig = serde_json::from_str(&config_content)
            .map_err(|e| PipelineError::ModelFormat(format!("cannot parse model config: {e}")))?;

        let weights_file = locate(model_dir, &["model.safetensors", "pytorch_model.bin"])
            .ok_or_else(|| {
                PipelineError::ModelNotFound(format!(
                    "no model.safetensors or pytorch_model.bin under {}",
                    model_dir.display()
                ))
            })?;
        let vb = if weights_file.extension().is_some_and(|ext| ext == "safetensors") {
            unsafe { VarBuilder::from_mmaped_safetensors(&[&weights_file], DType::F32, &device)? }
        } else {
            VarBuilder::from_pth(&weights_file, DType::F32, &device)?
        };

        // Sequence-classification checkpoints usually prefix the encoder
        // with `bert.`; bare encoder exports do not.
        let bert = BertModel::load(vb.pp("bert"), &config)
            .or_else(|_| BertModel::load(vb.clone(), &config))?;
        let pooler = linear(head.hidden_size, head.hidden_size, vb.pp("bert.pooler.dense"))
            .or_else(|_| linear(head.hidden_size, head.hidden_size, vb.pp("pooler.dense")))?;
        let classifier = linear(head.hidden_size, CLASS_COUNT, vb.pp("classifier"))?;

        info!(weights = %weights_file.display(), "classifier weights loaded");

        Ok(Self { bert, pooler, classifier, device })
    }
}

impl SentimentModel for BertSentimentModel {
    fn classify(&self, sequence: &TokenSequence) -> Result<ClassScores> {
        let input_ids = Tensor::new(sequence.ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(sequence.attention_mask(), &self.device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;

        let hidden = self
            .bert
            .forward(&input_ids, &token_type_ids, Some(&attention_mask))?;
        let pooled = self.pooler.forward(&hidden.i((.., 0))?)?.tanh()?;
        let logits = self.classifier.forward(&pooled)?;

        let scores = softmax(&logits, D::Minus1)?
            .squeeze(0)?
            .to_dtype(DType::F64)?
            .to_vec1::<f64>()?;
        match scores.as_slice() {
            [long, neutral, short] => Ok(ClassScores {
                long: *long,
                neutral: *neutral,
                short: *short,
            }),
            other => Err(PipelineError::Classification(format!(
                "expected {CLASS_COUNT} class scores, got {}",
                other.len()
            ))),
        }
    }

    fn device(&self) -> &Device {
        &self.device
    }
}

fn locate(dir: &Path, candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}
