//! CSV 파일 기반 도서 소스 어댑터.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::application::ports::BookSource;
use crate::domain::book::BookEntry;
use crate::domain::error::LibraryError;

pub const DEFAULT_AUTHOR_SEPARATOR: &str = ";";

#[derive(Debug, Deserialize)]
struct BookRecord {
    title: String,
    authors: String,
}

/// 헤더가 `title,authors`인 CSV를 읽는다.
/// 한 칸에 여러 저자가 있으면 구분자로 나눈다.
pub struct CsvBookSource {
    author_separator: String,
}

impl Default for CsvBookSource {
    fn default() -> Self {
        Self::new(DEFAULT_AUTHOR_SEPARATOR)
    }
}

impl CsvBookSource {
    pub fn new(author_separator: impl Into<String>) -> Self {
        let separator = author_separator.into();
        Self {
            author_separator: if separator.is_empty() {
                DEFAULT_AUTHOR_SEPARATOR.to_string()
            } else {
                separator
            },
        }
    }

    fn parse_record(&self, record: BookRecord) -> Result<BookEntry, LibraryError> {
        let authors = record
            .authors
            .split(self.author_separator.as_str())
            .map(str::trim);
        BookEntry::new(record.title, authors)
    }
}

impl BookSource for CsvBookSource {
    fn load(&self, path: &Path) -> Result<Vec<BookEntry>, LibraryError> {
        let load_error = |message: String| LibraryError::Load {
            path: path.display().to_string(),
            message,
        };

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|err| load_error(err.to_string()))?;

        let headers = reader
            .headers()
            .map_err(|err| load_error(err.to_string()))?
            .clone();

        let mut books = Vec::new();
        for row in reader.records() {
            // 따옴표 안의 줄바꿈이 있으므로 행 번호는 레코드 시작 위치에서 읽는다.
            let record = row.map_err(|err| load_error(row_message(err.position(), &err)))?;
            let raw = record
                .deserialize::<BookRecord>(Some(&headers))
                .map_err(|err| load_error(row_message(record.position(), &err)))?;
            let book = self
                .parse_record(raw)
                .map_err(|err| load_error(row_message(record.position(), &err)))?;
            books.push(book);
        }

        debug!(path = %path.display(), count = books.len(), "parsed csv");
        Ok(books)
    }
}

fn row_message(position: Option<&csv::Position>, err: &dyn std::fmt::Display) -> String {
    match position {
        Some(pos) => format!("row {}: {err}", pos.line()),
        None => format!("row ?: {err}"),
    }
}
