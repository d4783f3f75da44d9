// ============================================================
// PIPELINE CONFIGURATION
// ============================================================
// Source locations, output paths, and filter thresholds.
// Loaded from dataprep.toml plus DATAPREP_-prefixed env vars;
// defaults reproduce the reference dataset preparation.

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

use crate::domain::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PipelineConfig {
    /// Gzip-compressed TSV of original questions
    #[validate(url)]
    pub questions_url: String,

    /// Gzip-compressed TSV of duplicate questions
    #[validate(url)]
    pub duplicates_url: String,

    /// Gzip-compressed TSV of answers
    #[validate(url)]
    pub answers_url: String,

    /// Directory the train/test/answer TSVs are written to
    pub output_dir: PathBuf,

    /// Per-table length percentile below which rows are dropped
    #[validate(range(min = 0.0, max = 1.0))]
    pub length_percentile: f64,

    /// Minimum duplicates an answer class needs to survive selection
    #[validate(range(min = 1))]
    pub min_duplicates: usize,

    /// Fraction of each class's duplicates that goes to the training set
    #[validate(range(min = 0.0, max = 1.0))]
    pub train_fraction: f64,

    /// Classes with a training-example count at or below this are dropped
    pub min_train_examples: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            questions_url: "https://bostondata.blob.core.windows.net/stackoverflow/orig-q.tsv.gz"
                .to_string(),
            duplicates_url: "https://bostondata.blob.core.windows.net/stackoverflow/dup-q.tsv.gz"
                .to_string(),
            answers_url: "https://bostondata.blob.core.windows.net/stackoverflow/ans.tsv.gz"
                .to_string(),
            output_dir: PathBuf::from("data"),
            length_percentile: 0.1,
            min_duplicates: 3,
            train_fraction: 0.75,
            min_train_examples: 13,
        }
    }
}

impl PipelineConfig {
    /// Load configuration: defaults, then dataprep.toml, then env vars.
    pub fn load() -> Result<Self> {
        let config: PipelineConfig = Figment::from(Serialized::defaults(PipelineConfig::default()))
            .merge(Toml::file("dataprep.toml"))
            .merge(Env::prefixed("DATAPREP_"))
            .extract()
            .map_err(|e| AppError::ValidationError(format!("Invalid configuration: {}", e)))?;

        config
            .validate()
            .map_err(|e| AppError::ValidationError(format!("Invalid configuration: {}", e)))?;

        Ok(config)
    }
}
