// ============================================================
// TRAIN/TEST SPLITTER
// ============================================================
// Chronological split of each answer class's duplicates: oldest
// rows train, newest rows test. Original questions always train.

use std::collections::BTreeMap;

use crate::domain::record::QuestionRecord;

#[derive(Debug)]
pub struct SplitOutcome {
    pub train: Vec<QuestionRecord>,
    pub test: Vec<QuestionRecord>,
}

/// Partition duplicates per answer class: sort by creation date
/// ascending, send the oldest `floor(count * train_fraction)` rows to
/// train and the rest to test. Every original question joins the
/// training set unconditionally.
///
/// Rows with identical timestamps keep their input order (stable sort).
pub fn split_train_test(
    questions: Vec<QuestionRecord>,
    duplicates: Vec<QuestionRecord>,
    train_fraction: f64,
) -> SplitOutcome {
    // BTreeMap keyed by answer_id makes the output order deterministic
    let mut by_class: BTreeMap<i64, Vec<QuestionRecord>> = BTreeMap::new();
    for dup in duplicates {
        by_class.entry(dup.answer_id).or_default().push(dup);
    }

    let mut train = questions;
    let mut test = Vec::new();

    for (_, mut group) in by_class {
        group.sort_by_key(|r| r.creation_date);
        let split_index = (group.len() as f64 * train_fraction).floor() as usize;
        let newest = group.split_off(split_index);
        train.extend(group);
        test.extend(newest);
    }

    tracing::info!(
        "Chronological split: {} train rows, {} test rows",
        train.len(),
        test.len()
    );

    SplitOutcome { train, test }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::collections::HashSet;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2016, 1, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn dup(id: i64, answer_id: i64, day: u32) -> QuestionRecord {
        QuestionRecord {
            id,
            answer_id,
            text0: String::new(),
            text: String::new(),
            num_chars: 10,
            creation_date: at(day),
            num_train: None,
        }
    }

    #[test]
    fn test_four_rows_split_three_one() {
        // floor(4 * 0.75) = 3: t1..t3 train, t4 test
        let duplicates = vec![dup(4, 1, 4), dup(1, 1, 1), dup(3, 1, 3), dup(2, 1, 2)];
        let outcome = split_train_test(Vec::new(), duplicates, 0.75);

        let train_ids: Vec<i64> = outcome.train.iter().map(|r| r.id).collect();
        let test_ids: Vec<i64> = outcome.test.iter().map(|r| r.id).collect();
        assert_eq!(train_ids, vec![1, 2, 3]);
        assert_eq!(test_ids, vec![4]);
    }

    #[test]
    fn test_split_is_a_strict_partition() {
        let duplicates: Vec<_> = (0..7)
            .map(|i| dup(i, 1, 1 + i as u32))
            .chain((10..15).map(|i| dup(i, 2, (i - 5) as u32)))
            .collect();
        let total = duplicates.len();
        let outcome = split_train_test(Vec::new(), duplicates, 0.75);

        let train_ids: HashSet<i64> = outcome.train.iter().map(|r| r.id).collect();
        let test_ids: HashSet<i64> = outcome.test.iter().map(|r| r.id).collect();
        assert_eq!(train_ids.len() + test_ids.len(), total);
        assert!(train_ids.is_disjoint(&test_ids));
    }

    #[test]
    fn test_train_holds_oldest_rows_per_class() {
        let duplicates: Vec<_> = (0..8).map(|i| dup(i, 1, 1 + i as u32)).collect();
        let outcome = split_train_test(Vec::new(), duplicates, 0.75);

        // floor(8 * 0.75) = 6 oldest rows train
        assert_eq!(outcome.train.len(), 6);
        assert_eq!(outcome.test.len(), 2);
        let newest_train = outcome.train.iter().map(|r| r.creation_date).max().unwrap();
        let oldest_test = outcome.test.iter().map(|r| r.creation_date).min().unwrap();
        assert!(newest_train < oldest_test);
    }

    #[test]
    fn test_originals_always_train() {
        let questions = vec![dup(100, 1, 1), dup(101, 2, 1)];
        let duplicates = vec![dup(1, 1, 2), dup(2, 1, 3), dup(3, 1, 4), dup(4, 1, 5)];
        let outcome = split_train_test(questions, duplicates, 0.75);

        let train_ids: HashSet<i64> = outcome.train.iter().map(|r| r.id).collect();
        assert!(train_ids.contains(&100));
        assert!(train_ids.contains(&101));
    }

    #[test]
    fn test_single_duplicate_goes_to_test() {
        // floor(1 * 0.75) = 0
        let outcome = split_train_test(Vec::new(), vec![dup(1, 1, 1)], 0.75);
        assert!(outcome.train.is_empty());
        assert_eq!(outcome.test.len(), 1);
    }

    #[test]
    fn test_identical_timestamps_keep_input_order() {
        let duplicates = vec![dup(5, 1, 1), dup(6, 1, 1), dup(7, 1, 1), dup(8, 1, 1)];
        let outcome = split_train_test(Vec::new(), duplicates, 0.75);

        let train_ids: Vec<i64> = outcome.train.iter().map(|r| r.id).collect();
        assert_eq!(train_ids, vec![5, 6, 7]);
        assert_eq!(outcome.test[0].id, 8);
    }
}
