use candle_core::Device;

use crate::core::error::Result;
use crate::text::TokenSequence;

/// Normalized probabilities over the three stance classes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassScores {
    pub long: f64,
    pub neutral: f64,
    pub short: f64,
}

/// Stance label derived from [`ClassScores`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Long,
    Neutral,
    Short,
}

impl Sentiment {
    /// Picks the strictly dominant class. Anything not strictly dominated by
    /// `long` or `neutral`, exact ties included, resolves to `Short`.
    pub fn from_scores(scores: &ClassScores) -> Self {
        if scores.long > scores.neutral && scores.long > scores.short {
            Sentiment::Long
        } else if scores.neutral > scores.long && scores.neutral > scores.short {
            Sentiment::Neutral
        } else {
            Sentiment::Short
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Long => "long",
            Sentiment::Neutral => "neutral",
            Sentiment::Short => "short",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification capability over fixed-length token sequences.
///
/// Implementations are shared read-only across worker threads; a backend
/// whose forward pass cannot run concurrently has to serialize internally.
pub trait SentimentModel {
    fn classify(&self, sequence: &TokenSequence) -> Result<ClassScores>;

    fn device(&self) -> &Device;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(long: f64, neutral: f64, short: f64) -> ClassScores {
        ClassScores { long, neutral, short }
    }

    #[test]
    fn strictly_dominant_class_wins() {
        assert_eq!(Sentiment::from_scores(&scores(0.5, 0.3, 0.2)), Sentiment::Long);
        assert_eq!(Sentiment::from_scores(&scores(0.3, 0.5, 0.2)), Sentiment::Neutral);
        assert_eq!(Sentiment::from_scores(&scores(0.2, 0.3, 0.5)), Sentiment::Short);
    }

    #[test]
    fn ties_fall_back_to_short() {
        assert_eq!(Sentiment::from_scores(&scores(0.4, 0.4, 0.2)), Sentiment::Short);
        let third = 1.0 / 3.0;
        assert_eq!(Sentiment::from_scores(&scores(third, third, third)), Sentiment::Short);
    }

    #[test]
    fn labels_render_lowercase() {
        assert_eq!(Sentiment::Long.to_string(), "long");
        assert_eq!(Sentiment::Neutral.as_str(), "neutral");
        assert_eq!(Sentiment::Short.as_str(), "short");
    }
}
