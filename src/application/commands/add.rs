//! CSV 파일에서 도서를 읽어 추가하는 명령.

use std::path::Path;

use tracing::info;

use super::{Command, ExecutionContext};
use crate::domain::command::CommandType;
use crate::domain::error::LibraryError;
use crate::domain::library::LibraryData;

const CSV_EXTENSION: &str = ".csv";

/// `ADD <path.csv>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    path: String,
}

impl AddCommand {
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Command for AddCommand {
    const KIND: CommandType = CommandType::Add;

    fn parse_arguments(raw: &str) -> Option<Self> {
        let path = raw.trim();
        if path.len() <= CSV_EXTENSION.len() || !path.ends_with(CSV_EXTENSION) {
            return None;
        }

        Some(Self {
            path: path.to_string(),
        })
    }

    fn execute(
        &self,
        data: &mut LibraryData,
        ctx: &ExecutionContext<'_>,
    ) -> Result<(), LibraryError> {
        // 로딩이 모두 끝난 뒤에만 컬렉션을 변경한다.
        let incoming = ctx.book_source.load(Path::new(&self.path))?;
        let (added, skipped) = data.append_unique(incoming);
        info!(path = %self.path, added, skipped, "books loaded");

        ctx.reporter
            .line(&format!("{added} books added from {}.", self.path));
        if skipped > 0 {
            ctx.reporter
                .line(&format!("{skipped} duplicate entries skipped."));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::testing::*;

    #[test]
    fn accepts_only_csv_paths() {
        assert_eq!(AddCommand::new(Some(" books.csv ")).unwrap().path(), "books.csv");
        assert_eq!(
            AddCommand::new(Some("my books/all.csv")).unwrap().path(),
            "my books/all.csv"
        );
        for raw in ["", "   ", ".csv", "books.txt", "books.CSV"] {
            assert!(AddCommand::new(Some(raw)).is_err(), "input {raw:?}");
        }
    }

    #[test]
    fn appends_loaded_books_and_skips_duplicates() {
        let reporter = RecordingReporter::default();
        let source = FixedSource(vec![book("A", &["X"]), book("B", &["Y"])]);
        let mut data = library(vec![book("A", &["X"])]);

        AddCommand::new(Some("books.csv"))
            .unwrap()
            .execute(&mut data, &context(&reporter, &source))
            .unwrap();

        assert_eq!(titles(&data), ["A", "B"]);
        assert_eq!(
            reporter.lines(),
            ["1 books added from books.csv.", "1 duplicate entries skipped."]
        );
    }
}
