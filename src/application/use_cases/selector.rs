// ============================================================
// RECORD SELECTOR
// ============================================================
// Drops near-empty rows, reconciles identifier collisions, enforces
// the 1:1 question-answer mapping, and keeps only answer classes
// with enough duplicates. Step order matters: the dedup runs on the
// post-threshold question set, and duplicate counts only consider
// classes whose answer survived the join.

use std::collections::{HashMap, HashSet};

use crate::domain::error::{AppError, Result};
use crate::domain::record::{AnswerRecord, QuestionRecord};

/// Tables surviving selection. Every `answer_id` is present across all
/// three and has at least the configured number of duplicates.
#[derive(Debug)]
pub struct SelectionOutcome {
    pub questions: Vec<QuestionRecord>,
    pub duplicates: Vec<QuestionRecord>,
    pub answers: Vec<AnswerRecord>,
}

/// Percentile over integer lengths, linearly interpolated between
/// closest ranks. Errors when the input is empty: a table with no
/// non-empty rows has no defined threshold and the run aborts.
pub fn length_percentile(lengths: &[u64], percentile: f64) -> Result<f64> {
    if lengths.is_empty() {
        return Err(AppError::ValidationError(
            "Cannot compute a length percentile over an empty table".to_string(),
        ));
    }

    let mut sorted = lengths.to_vec();
    sorted.sort_unstable();

    let pos = percentile * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let frac = pos - lower as f64;
    let base = sorted[lower] as f64;

    if lower + 1 < sorted.len() {
        Ok(base + frac * (sorted[lower + 1] as f64 - base))
    } else {
        Ok(base)
    }
}

pub fn select(
    questions: Vec<QuestionRecord>,
    duplicates: Vec<QuestionRecord>,
    answers: Vec<AnswerRecord>,
    percentile: f64,
    min_duplicates: usize,
) -> Result<SelectionOutcome> {
    // 1. Empty cleaned text carries no signal
    let mut questions: Vec<_> = questions.into_iter().filter(|r| r.num_chars > 0).collect();
    let mut duplicates: Vec<_> = duplicates.into_iter().filter(|r| r.num_chars > 0).collect();
    let mut answers: Vec<_> = answers.into_iter().filter(|r| r.num_chars > 0).collect();

    // 2. Per-table length thresholds over the non-empty subset
    let questions_p = length_percentile(&collect_lengths(&questions), percentile)?;
    let duplicates_p = length_percentile(&collect_lengths(&duplicates), percentile)?;
    let answers_p = answer_lengths_percentile(&answers, percentile)?;

    // 3. Strictly-greater length filter. Questions and answers compare
    //    against the truncated threshold, duplicates against the raw
    //    float.
    let questions_threshold = questions_p.trunc() as u64;
    let answers_threshold = answers_p.trunc() as u64;
    questions.retain(|r| r.num_chars > questions_threshold);
    duplicates.retain(|r| (r.num_chars as f64) > duplicates_p);
    answers.retain(|r| r.num_chars > answers_threshold);

    tracing::debug!(
        "Length thresholds: questions {:.2}, duplicates {:.2}, answers {:.2}",
        questions_p,
        duplicates_p,
        answers_p
    );

    // 4. A duplicate sharing an Id with a retained original is the same
    //    row seen through both tables; the original wins
    let question_ids: HashSet<i64> = questions.iter().map(|r| r.id).collect();
    duplicates.retain(|r| !question_ids.contains(&r.id));

    // 5. Inner join questions <-> answers on answer_id; rows that fail
    //    to match either side are dropped
    let answer_ids: HashSet<i64> = answers.iter().map(|r| r.id).collect();
    questions.retain(|r| answer_ids.contains(&r.answer_id));
    let matched_answer_ids: HashSet<i64> = questions.iter().map(|r| r.answer_id).collect();
    answers.retain(|r| matched_answer_ids.contains(&r.id));

    // 6. Keep only answer classes with enough duplicates. Duplicates
    //    pointing at answers that did not survive do not count.
    let surviving_answer_ids: HashSet<i64> = answers.iter().map(|r| r.id).collect();
    let mut duplicate_counts: HashMap<i64, usize> = HashMap::new();
    for dup in duplicates.iter().filter(|d| surviving_answer_ids.contains(&d.answer_id)) {
        *duplicate_counts.entry(dup.answer_id).or_insert(0) += 1;
    }

    let keep: HashSet<i64> = duplicate_counts
        .iter()
        .filter(|(_, &count)| count >= min_duplicates)
        .map(|(&answer_id, _)| answer_id)
        .collect();

    questions.retain(|r| keep.contains(&r.answer_id));
    duplicates.retain(|r| keep.contains(&r.answer_id));
    answers.retain(|r| keep.contains(&r.id));

    tracing::info!(
        "Selection kept {} questions, {} duplicates, {} answers ({} classes)",
        questions.len(),
        duplicates.len(),
        answers.len(),
        keep.len()
    );

    Ok(SelectionOutcome {
        questions,
        duplicates,
        answers,
    })
}

fn collect_lengths(rows: &[QuestionRecord]) -> Vec<u64> {
    rows.iter().map(|r| r.num_chars).collect()
}

fn answer_lengths_percentile(rows: &[AnswerRecord], percentile: f64) -> Result<f64> {
    let lengths: Vec<u64> = rows.iter().map(|r| r.num_chars).collect();
    length_percentile(&lengths, percentile)
}
