//! Fixed-length token encoding on top of a WordPiece tokenizer.
//!
//! The encoder owns a fully configured [`tokenizers::Tokenizer`] and turns
//! canonical text into exactly `max_length` token ids: sequences that encode
//! longer are truncated from the right (the `[CLS]`/`[SEP]` wrap is applied
//! after truncation, so the terminal `[SEP]` always survives), shorter ones
//! are right-padded with the `[PAD]` id. The classifier expects a batch
//! dimension, so the ids travel together with their attention mask.

use std::path::Path;

use tokenizers::decoders::wordpiece::WordPiece as WordPieceDecoder;
use tokenizers::models::wordpiece::WordPiece;
use tokenizers::normalizers::BertNormalizer;
use tokenizers::pre_tokenizers::bert::BertPreTokenizer;
use tokenizers::processors::bert::BertProcessing;
use tokenizers::{AddedToken, PaddingParams, PaddingStrategy, Tokenizer, TruncationParams};

use crate::core::error::{PipelineError, Result};

/// Pad id used when the vocabulary has no `[PAD]` entry; matches the
/// conventional slot in the Korean WordPiece vocabularies this runs on.
const FALLBACK_PAD_ID: u32 = 1;

/// One encoded input example: ids and attention mask, both exactly
/// `max_length` long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence {
    ids: Vec<u32>,
    attention_mask: Vec<u32>,
}

impl TokenSequence {
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn attention_mask(&self) -> &[u32] {
        &self.attention_mask
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Turns canonical text into fixed-length [`TokenSequence`]s.
pub struct TextEncoder {
    tokenizer: Tokenizer,
    max_length: usize,
}

impl TextEncoder {
    /// Builds the full BERT WordPiece stack from a `vocab.txt` file:
    /// normalizer (clean text, Chinese-char handling, accent stripping,
    /// lowercasing), BERT pre-tokenizer, `[CLS]`/`[SEP]` post-processing and
    /// `[MASK]` registered as a special token.
    pub fn from_vocab_file(vocab: &Path, max_length: usize) -> Result<Self> {
        let vocab = vocab.to_str().ok_or_else(|| {
            PipelineError::Vocabulary(format!("non-UTF8 vocabulary path: {}", vocab.display()))
        })?;
        let wordpiece = WordPiece::from_file(vocab)
            .unk_token("[UNK]".to_string())
            .build()
            .map_err(|e| {
                PipelineError::Vocabulary(format!("cannot load vocabulary from {vocab}: {e}"))
            })?;

        let mut tokenizer = Tokenizer::new(wordpiece);
        tokenizer.with_normalizer(Some(BertNormalizer::new(true, true, Some(true), true)));
        tokenizer.with_pre_tokenizer(Some(BertPreTokenizer));
        tokenizer.with_decoder(Some(WordPieceDecoder::default()));
        tokenizer.add_special_tokens(&[AddedToken::from("[MASK]", true)]);

        let sep = tokenizer
            .token_to_id("[SEP]")
            .ok_or_else(|| PipelineError::Vocabulary("vocabulary has no [SEP] token".into()))?;
        let cls = tokenizer
            .token_to_id("[CLS]")
            .ok_or_else(|| PipelineError::Vocabulary("vocabulary has no [CLS] token".into()))?;
        tokenizer.with_post_processor(Some(BertProcessing::new(
            ("[SEP]".to_string(), sep),
            ("[CLS]".to_string(), cls),
        )));

        Self::from_tokenizer(tokenizer, max_length)
    }

    /// Wraps an already configured tokenizer, installing the fixed-length
    /// truncation and padding contract.
    pub fn from_tokenizer(mut tokenizer: Tokenizer, max_length: usize) -> Result<Self> {
        let pad_id = tokenizer.token_to_id("[PAD]").unwrap_or(FALLBACK_PAD_ID);
        let pad_token = tokenizer
            .id_to_token(pad_id)
            .unwrap_or_else(|| "[PAD]".to_string());

        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length,
                ..Default::default()
            }))
            .map_err(|e| {
                PipelineError::Tokenization(format!("invalid truncation parameters: {e}"))
            })?;
        tokenizer.with_padding(Some(PaddingParams {
            strategy: PaddingStrategy::Fixed(max_length),
            pad_id,
            pad_token,
            ..Default::default()
        }));

        Ok(Self { tokenizer, max_length })
    }

    /// Encodes `text` into exactly `max_length` ids. Empty text is valid and
    /// yields the special-token wrap plus padding.
    pub fn encode(&self, text: &str) -> Result<TokenSequence> {
        let encoding = self.tokenizer.encode(text, true).map_err(|e| {
            PipelineError::Tokenization(format!("cannot encode '{}': {e}", preview(text)))
        })?;
        let ids = encoding.get_ids().to_vec();
        if ids.len() != self.max_length {
            return Err(PipelineError::Tokenization(format!(
                "expected {} ids, got {} for '{}'",
                self.max_length,
                ids.len(),
                preview(text)
            )));
        }
        Ok(TokenSequence {
            ids,
            attention_mask: encoding.get_attention_mask().to_vec(),
        })
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Vocabulary lookup, special tokens included.
    pub fn token_id(&self, token: &str) -> Option<u32> {
        self.tokenizer.token_to_id(token)
    }
}

fn preview(text: &str) -> String {
    text.chars().take(50).collect()
}
