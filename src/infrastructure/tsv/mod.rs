// ============================================================
// TSV INFRASTRUCTURE LAYER
// ============================================================
// Gzip decompression, tab-separated parsing, and TSV output

mod reader;
mod writer;

pub use reader::{read_answer_table, read_question_table};
pub use writer::{write_answer_table, write_question_table};
