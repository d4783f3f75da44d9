// ============================================================
// TSV READER
// ============================================================
// Parse gzip-compressed tab-separated tables into record vectors.
// The raw files carry no header row; column layouts are fixed:
//   questions / duplicates: Id, AnswerId, Text0, CreationDate
//   answers:                Id, Text0

use std::io::Read;

use chrono::{DateTime, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};
use flate2::read::GzDecoder;

use crate::domain::error::{AppError, Result};
use crate::domain::record::{AnswerRecord, QuestionRecord};

/// Parse a gzip-compressed question or duplicate table.
pub fn read_question_table(bytes: &[u8]) -> Result<Vec<QuestionRecord>> {
    let content = decompress(bytes)?;
    let mut rows = Vec::new();

    for (index, record) in tsv_records(&content).enumerate() {
        let record = record.map_err(|e| {
            AppError::ParseError(format!("Failed to parse TSV row {}: {}", index + 1, e))
        })?;

        let id = parse_i64(&record, 0, index, "Id")?;
        let answer_id = parse_i64(&record, 1, index, "AnswerId")?;
        let text0 = record.get(2).unwrap_or("").to_string();
        let creation_date = parse_timestamp(field(&record, 3, index, "CreationDate")?)
            .map_err(|e| annotate_row(e, index))?;

        rows.push(QuestionRecord::new(id, answer_id, text0, creation_date));
    }

    tracing::debug!("Parsed {} question rows", rows.len());
    Ok(rows)
}

/// Parse a gzip-compressed answer table.
pub fn read_answer_table(bytes: &[u8]) -> Result<Vec<AnswerRecord>> {
    let content = decompress(bytes)?;
    let mut rows = Vec::new();

    for (index, record) in tsv_records(&content).enumerate() {
        let record = record.map_err(|e| {
            AppError::ParseError(format!("Failed to parse TSV row {}: {}", index + 1, e))
        })?;

        let id = parse_i64(&record, 0, index, "Id")?;
        let text0 = record.get(1).unwrap_or("").to_string();

        rows.push(AnswerRecord::new(id, text0));
    }

    tracing::debug!("Parsed {} answer rows", rows.len());
    Ok(rows)
}

fn decompress(bytes: &[u8]) -> Result<String> {
    let mut decoder = GzDecoder::new(bytes);
    let mut buffer = Vec::new();
    decoder
        .read_to_end(&mut buffer)
        .map_err(|e| AppError::ParseError(format!("Failed to decompress gzip stream: {}", e)))?;

    // Lossy fallback for stray non-UTF-8 bytes in old posts
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn tsv_records(content: &str) -> impl Iterator<Item = csv::Result<StringRecord>> + '_ {
    ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes())
        .into_records()
}

fn field<'r>(record: &'r StringRecord, idx: usize, row: usize, name: &str) -> Result<&'r str> {
    record.get(idx).ok_or_else(|| {
        AppError::ParseError(format!("Row {}: missing column {}", row + 1, name))
    })
}

fn parse_i64(record: &StringRecord, idx: usize, row: usize, name: &str) -> Result<i64> {
    let raw = field(record, idx, row, name)?;
    raw.trim().parse::<i64>().map_err(|_| {
        AppError::ParseError(format!("Row {}: invalid {} '{}'", row + 1, name, raw))
    })
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt);
        }
    }

    Err(AppError::ParseError(format!(
        "Unrecognized CreationDate '{}'",
        raw
    )))
}

fn annotate_row(err: AppError, row: usize) -> AppError {
    match err {
        AppError::ParseError(msg) => AppError::ParseError(format!("Row {}: {}", row + 1, msg)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn gzip(content: &str) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(content.as_bytes()).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_read_question_table() {
        let content = "1\t101\t<p>How do I sort?</p>\t2016-01-01T12:00:00Z\n\
                       2\t102\t<p>Another one</p>\t2016-02-03 04:05:06\n";
        let rows = read_question_table(&gzip(content)).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].answer_id, 101);
        assert_eq!(rows[0].text0, "<p>How do I sort?</p>");
        assert_eq!(rows[0].creation_date.to_string(), "2016-01-01 12:00:00");
        assert_eq!(rows[1].creation_date.to_string(), "2016-02-03 04:05:06");
    }

    #[test]
    fn test_read_answer_table() {
        let content = "101\t<p>Use sort().</p>\n102\t<p>Like this.</p>\n";
        let rows = read_answer_table(&gzip(content)).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].id, 102);
        assert_eq!(rows[1].text0, "<p>Like this.</p>");
    }

    #[test]
    fn test_empty_text_field() {
        let content = "1\t101\t\t2016-01-01T12:00:00Z\n";
        let rows = read_question_table(&gzip(content)).unwrap();
        assert_eq!(rows[0].text0, "");
    }

    #[test]
    fn test_invalid_id_is_an_error() {
        let content = "abc\t101\ttext\t2016-01-01T12:00:00Z\n";
        assert!(read_question_table(&gzip(content)).is_err());
    }

    #[test]
    fn test_invalid_timestamp_is_an_error() {
        let content = "1\t101\ttext\tnot-a-date\n";
        assert!(read_question_table(&gzip(content)).is_err());
    }

    #[test]
    fn test_not_gzip_is_an_error() {
        assert!(read_question_table(b"plain text").is_err());
    }
}
