// ============================================================
// DATASET PREPARATION USE CASE
// ============================================================
// Orchestrates the pipeline: download, clean, select, split,
// class-filter, write. Stages run sequentially and each fully
// materializes its output before the next begins.

use crate::application::use_cases::class_filter;
use crate::application::use_cases::selector;
use crate::application::use_cases::splitter;
use crate::application::use_cases::text_cleaner::{char_count, clean_text};
use crate::domain::config::PipelineConfig;
use crate::domain::error::{AppError, Result};
use crate::domain::record::{AnswerRecord, QuestionRecord};
use crate::infrastructure::http::DatasetFetcher;
use crate::infrastructure::tsv::{
    read_answer_table, read_question_table, write_answer_table, write_question_table,
};

/// Row counts of the written artifacts.
#[derive(Debug)]
pub struct PipelineSummary {
    pub train_rows: usize,
    pub test_rows: usize,
    pub answer_rows: usize,
}

pub struct DatasetPrepUseCase<F: DatasetFetcher> {
    config: PipelineConfig,
    fetcher: F,
}

impl<F: DatasetFetcher> DatasetPrepUseCase<F> {
    pub fn new(config: PipelineConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub async fn run(&self) -> Result<PipelineSummary> {
        // Load
        let raw = self.fetcher.fetch(&self.config.questions_url).await?;
        let mut questions = read_question_table(&raw)?;
        let raw = self.fetcher.fetch(&self.config.duplicates_url).await?;
        let mut duplicates = read_question_table(&raw)?;
        let raw = self.fetcher.fetch(&self.config.answers_url).await?;
        let mut answers = read_answer_table(&raw)?;
        tracing::info!(
            "Loaded {} questions, {} duplicates, {} answers",
            questions.len(),
            duplicates.len(),
            answers.len()
        );

        // Clean
        clean_question_table(&mut questions);
        clean_question_table(&mut duplicates);
        clean_answer_table(&mut answers);

        // Select
        let selected = selector::select(
            questions,
            duplicates,
            answers,
            self.config.length_percentile,
            self.config.min_duplicates,
        )?;

        // Split
        let split = splitter::split_train_test(
            selected.questions,
            selected.duplicates,
            self.config.train_fraction,
        );

        // Class-size filter
        let filtered = class_filter::filter_by_class_size(
            split.train,
            split.test,
            selected.answers,
            self.config.min_train_examples,
        );

        // Write
        std::fs::create_dir_all(&self.config.output_dir).map_err(|e| {
            AppError::IoError(format!(
                "Failed to create output directory {}: {}",
                self.config.output_dir.display(),
                e
            ))
        })?;
        write_question_table(
            &self.config.output_dir.join("train_questions.tsv"),
            &filtered.train,
        )?;
        write_question_table(
            &self.config.output_dir.join("test_questions.tsv"),
            &filtered.test,
        )?;
        write_answer_table(&self.config.output_dir.join("answers.tsv"), &filtered.answers)?;

        Ok(PipelineSummary {
            train_rows: filtered.train.len(),
            test_rows: filtered.test.len(),
            answer_rows: filtered.answers.len(),
        })
    }
}

fn clean_question_table(rows: &mut [QuestionRecord]) {
    for row in rows {
        row.text = clean_text(&row.text0);
        row.num_chars = char_count(&row.text);
    }
}

fn clean_answer_table(rows: &mut [AnswerRecord]) {
    for row in rows {
        row.text = clean_text(&row.text0);
        row.num_chars = char_count(&row.text);
    }
}
