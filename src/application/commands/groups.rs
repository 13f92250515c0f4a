//! 제목 첫 글자/저자 기준 그룹 출력 명령.

use std::collections::BTreeMap;

use super::list::EMPTY_LIBRARY;
use super::{Command, ExecutionContext, tokens};
use crate::domain::book::BookEntry;
use crate::domain::command::{CommandType, GroupType};
use crate::domain::error::LibraryError;
use crate::domain::library::LibraryData;

const DIGIT_GROUP: &str = "[0-9]";
const GROUP_INDENT: &str = "    ";

/// `GROUPS TITLE|AUTHOR`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupsCommand {
    group_by: GroupType,
}

impl GroupsCommand {
    pub fn group_by(&self) -> GroupType {
        self.group_by
    }
}

impl Command for GroupsCommand {
    const KIND: CommandType = CommandType::Groups;

    fn parse_arguments(raw: &str) -> Option<Self> {
        let mut tokens = tokens(raw);
        let group_by = GroupType::from_keyword(tokens.next()?)?;
        if tokens.next().is_some() {
            return None;
        }

        Some(Self { group_by })
    }

    fn execute(
        &self,
        data: &mut LibraryData,
        ctx: &ExecutionContext<'_>,
    ) -> Result<(), LibraryError> {
        if data.is_empty() {
            ctx.reporter.line(EMPTY_LIBRARY);
            return Ok(());
        }

        let groups = match self.group_by {
            GroupType::Title => group_by_title(data.books()),
            GroupType::Author => group_by_author(data.books()),
        };

        ctx.reporter
            .line(&format!("Grouped data by {}", self.group_by));
        for (group, titles) in groups {
            ctx.reporter.line(&format!("## {group}"));
            for title in titles {
                ctx.reporter.line(&format!("{GROUP_INDENT}{title}"));
            }
        }
        Ok(())
    }
}

fn group_by_title(books: &[BookEntry]) -> BTreeMap<String, Vec<&str>> {
    let mut groups: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for book in books {
        let Some(first) = book.title().chars().next() else {
            continue;
        };
        let key = if first.is_ascii_digit() {
            DIGIT_GROUP.to_string()
        } else {
            first.to_uppercase().collect()
        };
        groups.entry(key).or_default().push(book.title());
    }
    groups
}

fn group_by_author(books: &[BookEntry]) -> BTreeMap<String, Vec<&str>> {
    let mut groups: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for book in books {
        for author in book.authors() {
            let titles = groups.entry(author.clone()).or_default();
            // 한 도서에 같은 저자가 중복 기재된 경우 한 번만 출력한다.
            if !titles.contains(&book.title()) {
                titles.push(book.title());
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::application::commands::testing::*;

    fn run(raw: &str, data: &mut LibraryData) -> Vec<String> {
        let reporter = RecordingReporter::default();
        let source = FixedSource::default();
        GroupsCommand::new(Some(raw))
            .unwrap()
            .execute(data, &context(&reporter, &source))
            .unwrap();
        reporter.lines()
    }

    #[test]
    fn parses_group_type() {
        assert_eq!(
            GroupsCommand::new(Some("AUTHOR")).unwrap().group_by(),
            GroupType::Author
        );
        assert!(GroupsCommand::new(Some("")).is_err());
        assert!(GroupsCommand::new(Some("ISBN")).is_err());
        assert!(GroupsCommand::new(Some("TITLE extra")).is_err());
    }

    #[test]
    fn groups_titles_by_first_letter_with_digit_bucket_last() {
        let mut data = library(vec![
            book("alpha", &["X"]),
            book("1984", &["George Orwell"]),
            book("Beta", &["Y"]),
            book("Another", &["Z"]),
        ]);

        assert_eq!(
            run("TITLE", &mut data),
            [
                "Grouped data by TITLE",
                "## A",
                "    alpha",
                "    Another",
                "## B",
                "    Beta",
                "## [0-9]",
                "    1984",
            ]
        );
    }

    #[test]
    fn lists_shared_books_under_each_author() {
        let mut data = library(vec![
            book("Good Omens", &["Terry Pratchett", "Neil Gaiman"]),
            book("Coraline", &["Neil Gaiman"]),
        ]);

        assert_eq!(
            run("AUTHOR", &mut data),
            [
                "Grouped data by AUTHOR",
                "## Neil Gaiman",
                "    Good Omens",
                "    Coraline",
                "## Terry Pratchett",
                "    Good Omens",
            ]
        );
    }

    #[test]
    fn empty_library_is_reported() {
        let mut data = library(vec![]);
        assert_eq!(run("AUTHOR", &mut data), [EMPTY_LIBRARY]);
    }
}
