// ============================================================
// DATASET RECORD TYPES
// ============================================================
// Rows of the three source tables. No I/O, no async.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A question row. Used for both original questions and duplicates:
/// the two tables share the same column layout and differ only in how
/// the pipeline treats them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Unique row identifier
    pub id: i64,

    /// Identifier of the accepted answer; the classification label
    pub answer_id: i64,

    /// Raw text as downloaded (HTML markup included)
    pub text0: String,

    /// Cleaned, lowercased text
    pub text: String,

    /// Character count of the cleaned text
    pub num_chars: u64,

    /// When the question was posted
    pub creation_date: NaiveDateTime,

    /// Training examples for this answer class; set by the class-size filter
    pub num_train: Option<u64>,
}

impl QuestionRecord {
    pub fn new(id: i64, answer_id: i64, text0: String, creation_date: NaiveDateTime) -> Self {
        Self {
            id,
            answer_id,
            text0,
            text: String::new(),
            num_chars: 0,
            creation_date,
            num_train: None,
        }
    }
}

/// An answer row. Its `id` equals the `answer_id` of exactly one
/// original question once selection has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub id: i64,
    pub text0: String,
    pub text: String,
    pub num_chars: u64,
    pub num_train: Option<u64>,
}

impl AnswerRecord {
    pub fn new(id: i64, text0: String) -> Self {
        Self {
            id,
            text0,
            text: String::new(),
            num_chars: 0,
            num_train: None,
        }
    }
}
