//! CSV input and output for the batch run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{PipelineError, Result};
use crate::pipelines::sentiment::ClassifiedRecord;

/// One input row: an id, a timestamp, and the post text. Immutable once
/// read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    pub post_num: String,
    pub time: String,
    pub text: String,
}

/// Column order of the output table.
pub const OUTPUT_HEADER: [&str; 7] = [
    "post_num",
    "time",
    "text",
    "long",
    "neutral",
    "short",
    "sentiment",
];

/// Reads the whole input table up front; partitioning needs the full row
/// count.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| PipelineError::Dataset(format!("cannot read {}: {e}", path.display())))?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Writes the augmented table; scores render with six decimals.
pub fn write_results(path: &Path, results: &[ClassifiedRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| PipelineError::Dataset(format!("cannot write {}: {e}", path.display())))?;
    writer.write_record(OUTPUT_HEADER)?;
    for result in results {
        let long = format_score(result.scores.long);
        let neutral = format_score(result.scores.neutral);
        let short = format_score(result.scores.short);
        writer.write_record([
            result.record.post_num.as_str(),
            result.record.time.as_str(),
            result.record.text.as_str(),
            long.as_str(),
            neutral.as_str(),
            short.as_str(),
            result.sentiment.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn format_score(score: f64) -> String {
    format!("{score:.6}")
}

#[cfg(test)]
mod tests {
    use super::format_score;

    #[test]
    fn scores_render_with_six_decimals() {
        assert_eq!(format_score(0.123456789), "0.123457");
        assert_eq!(format_score(1.0), "1.000000");
        assert_eq!(format_score(0.0000004), "0.000000");
    }
}
