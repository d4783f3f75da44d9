// ============================================================
// CLASS-SIZE FILTER
// ============================================================
// Annotates rows with the per-class training-example count and
// drops classes too small to train on. The threshold is a fixed
// empirical choice, not derived.

use std::collections::HashMap;

use crate::domain::record::{AnswerRecord, QuestionRecord};

#[derive(Debug)]
pub struct ClassFilterOutcome {
    pub train: Vec<QuestionRecord>,
    pub test: Vec<QuestionRecord>,
    pub answers: Vec<AnswerRecord>,
}

/// Count training examples per answer class, join the count onto the
/// train, test, and answer tables as `NumTrain`, and keep only rows
/// whose class count is strictly greater than `min_train_examples`.
pub fn filter_by_class_size(
    train: Vec<QuestionRecord>,
    test: Vec<QuestionRecord>,
    answers: Vec<AnswerRecord>,
    min_train_examples: u64,
) -> ClassFilterOutcome {
    let mut counts: HashMap<i64, u64> = HashMap::new();
    for row in &train {
        *counts.entry(row.answer_id).or_insert(0) += 1;
    }

    let annotate = |mut row: QuestionRecord| {
        row.num_train = counts.get(&row.answer_id).copied();
        row
    };

    let train: Vec<_> = train
        .into_iter()
        .map(|r| annotate(r))
        .filter(|r| r.num_train.unwrap_or(0) > min_train_examples)
        .collect();
    let test: Vec<_> = test
        .into_iter()
        .map(|r| annotate(r))
        .filter(|r| r.num_train.unwrap_or(0) > min_train_examples)
        .collect();
    let answers: Vec<_> = answers
        .into_iter()
        .map(|mut a| {
            a.num_train = counts.get(&a.id).copied();
            a
        })
        .filter(|a| a.num_train.unwrap_or(0) > min_train_examples)
        .collect();

    tracing::info!(
        "Class-size filter kept {} train rows, {} test rows, {} classes",
        train.len(),
        test.len(),
        answers.len()
    );

    ClassFilterOutcome {
        train,
        test,
        answers,
    }
}
