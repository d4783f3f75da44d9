pub mod application;
pub mod domain;
pub mod infrastructure;

use crate::application::DatasetPrepUseCase;
use crate::application::use_cases::dataset_prep::PipelineSummary;
use crate::domain::config::PipelineConfig;
use crate::domain::error::Result;
use crate::infrastructure::http::HttpDatasetFetcher;

/// Load configuration and run the full preparation pipeline.
pub async fn run() -> Result<PipelineSummary> {
    let config = PipelineConfig::load()?;
    let fetcher = HttpDatasetFetcher::new();
    let use_case = DatasetPrepUseCase::new(config, fetcher);
    use_case.run().await
}
