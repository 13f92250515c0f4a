//! 제목 검색 명령.

use super::{Command, ExecutionContext, tokens};
use crate::domain::command::CommandType;
use crate::domain::error::LibraryError;
use crate::domain::library::LibraryData;

/// `SEARCH <word>`: 제목에 대한 대소문자 무시 부분 일치.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCommand {
    term: String,
}

impl SearchCommand {
    pub fn term(&self) -> &str {
        &self.term
    }
}

impl Command for SearchCommand {
    const KIND: CommandType = CommandType::Search;

    fn parse_arguments(raw: &str) -> Option<Self> {
        let mut tokens = tokens(raw);
        let term = tokens.next()?;
        if tokens.next().is_some() {
            return None;
        }

        Some(Self {
            term: term.to_string(),
        })
    }

    fn execute(
        &self,
        data: &mut LibraryData,
        ctx: &ExecutionContext<'_>,
    ) -> Result<(), LibraryError> {
        let needle = self.term.to_lowercase();
        let mut hits = 0;
        for book in data.books() {
            if book.title().to_lowercase().contains(&needle) {
                ctx.reporter.line(book.title());
                hits += 1;
            }
        }

        if hits == 0 {
            ctx.reporter
                .line(&format!("No hits found for search term: {}", self.term));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::testing::*;

    #[test]
    fn requires_exactly_one_word() {
        assert_eq!(SearchCommand::new(Some("  dune ")).unwrap().term(), "dune");
        assert!(SearchCommand::new(Some("")).is_err());
        assert!(SearchCommand::new(Some("two words")).is_err());
    }

    #[test]
    fn matches_titles_case_insensitively_in_order() {
        let reporter = RecordingReporter::default();
        let source = FixedSource::default();
        let mut data = library(vec![
            book("Dune", &["Frank Herbert"]),
            book("Emma", &["Jane Austen"]),
            book("Children of Dune", &["Frank Herbert"]),
        ]);
        let before = data.clone();

        SearchCommand::new(Some("DUNE"))
            .unwrap()
            .execute(&mut data, &context(&reporter, &source))
            .unwrap();

        assert_eq!(data, before);
        assert_eq!(reporter.lines(), ["Dune", "Children of Dune"]);
    }

    #[test]
    fn reports_no_hits() {
        let reporter = RecordingReporter::default();
        let source = FixedSource::default();
        let mut data = library(vec![book("Emma", &["Jane Austen"])]);

        SearchCommand::new(Some("zzz"))
            .unwrap()
            .execute(&mut data, &context(&reporter, &source))
            .unwrap();

        assert_eq!(reporter.lines(), ["No hits found for search term: zzz"]);
    }
}
