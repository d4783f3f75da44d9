// ============================================================
// TSV WRITER
// ============================================================
// Serialize the prepared tables, tab-separated with a header row,
// first column Id.

use std::path::Path;

use csv::WriterBuilder;

use crate::domain::error::{AppError, Result};
use crate::domain::record::{AnswerRecord, QuestionRecord};

/// Write a train or test question table: Id, AnswerId, Text, NumTrain.
pub fn write_question_table(path: &Path, rows: &[QuestionRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .map_err(|e| AppError::IoError(format!("Failed to create {}: {}", path.display(), e)))?;

    writer
        .write_record(["Id", "AnswerId", "Text", "NumTrain"])
        .map_err(|e| AppError::IoError(format!("Failed to write header: {}", e)))?;

    for row in rows {
        writer
            .write_record([
                row.id.to_string(),
                row.answer_id.to_string(),
                row.text.clone(),
                row.num_train.unwrap_or(0).to_string(),
            ])
            .map_err(|e| AppError::IoError(format!("Failed to write row {}: {}", row.id, e)))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::IoError(format!("Failed to flush {}: {}", path.display(), e)))?;

    tracing::info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Write the filtered answer table: Id, Text, NumTrain.
pub fn write_answer_table(path: &Path, rows: &[AnswerRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .map_err(|e| AppError::IoError(format!("Failed to create {}: {}", path.display(), e)))?;

    writer
        .write_record(["Id", "Text", "NumTrain"])
        .map_err(|e| AppError::IoError(format!("Failed to write header: {}", e)))?;

    for row in rows {
        writer
            .write_record([
                row.id.to_string(),
                row.text.clone(),
                row.num_train.unwrap_or(0).to_string(),
            ])
            .map_err(|e| AppError::IoError(format!("Failed to write row {}: {}", row.id, e)))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::IoError(format!("Failed to flush {}: {}", path.display(), e)))?;

    tracing::info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn question(id: i64, answer_id: i64, text: &str) -> QuestionRecord {
        QuestionRecord {
            id,
            answer_id,
            text0: String::new(),
            text: text.to_string(),
            num_chars: text.chars().count() as u64,
            creation_date: NaiveDate::from_ymd_opt(2016, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            num_train: Some(20),
        }
    }

    #[test]
    fn test_write_question_table() {
        let dir = std::env::temp_dir().join("qamatch_writer_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("train.tsv");

        let rows = vec![question(1, 101, "how do i sort"), question(2, 102, "another one")];
        write_question_table(&path, &rows).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Id\tAnswerId\tText\tNumTrain");
        assert_eq!(lines[1], "1\t101\thow do i sort\t20");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_write_answer_table() {
        let dir = std::env::temp_dir().join("qamatch_writer_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("answers.tsv");

        let rows = vec![AnswerRecord {
            id: 101,
            text0: String::new(),
            text: "use sort()".to_string(),
            num_chars: 10,
            num_train: Some(15),
        }];
        write_answer_table(&path, &rows).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Id\tText\tNumTrain");
        assert_eq!(lines[1], "101\tuse sort()\t15");
    }
}
