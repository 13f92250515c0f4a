use std::path::Path;
use std::sync::Mutex;

use booklib::application::commands::RemoveCommand;
use booklib::application::ports::{BookSource, Reporter};
use booklib::{
    BookEntry, Command, CommandType, ExecutionContext, LibraryCommand, LibraryData, LibraryError,
    ListType, RemoveType,
};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct RecordingReporter {
    lines: Mutex<Vec<String>>,
}

impl RecordingReporter {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn line(&self, text: &str) {
        self.lines.lock().unwrap().push(text.to_string());
    }
}

struct NoSource;

impl BookSource for NoSource {
    fn load(&self, path: &Path) -> Result<Vec<BookEntry>, LibraryError> {
        Err(LibraryError::Load {
            path: path.display().to_string(),
            message: "not available".to_string(),
        })
    }
}

fn book(title: &str, authors: &[&str]) -> BookEntry {
    BookEntry::new(title, authors.iter().copied()).unwrap()
}

fn titles(data: &LibraryData) -> Vec<&str> {
    data.books().iter().map(BookEntry::title).collect()
}

/// 명령을 실행하고 출력 줄을 돌려준다.
fn run(line: &str, data: &mut LibraryData) -> Vec<String> {
    let reporter = RecordingReporter::default();
    let ctx = ExecutionContext {
        reporter: &reporter,
        book_source: &NoSource,
        list_style: ListType::Short,
    };
    LibraryCommand::parse_line(line)
        .unwrap()
        .execute(Some(data), &ctx)
        .unwrap();
    reporter.lines()
}

#[test]
fn construction_fails_without_known_type_keyword() {
    for raw in ["", "  ", "NAME X", "author X", "TITLES X", "X TITLE Y", "ISBN 9780"] {
        let err = LibraryCommand::build(CommandType::Remove, Some(raw)).unwrap_err();
        assert!(
            matches!(err, LibraryError::InvalidArgument { kind: CommandType::Remove, .. }),
            "{raw:?} should be rejected, got {err}"
        );
    }
}

#[test]
fn construction_fails_for_type_without_value() {
    for raw in ["AUTHOR", "TITLE", "  AUTHOR   ", "TITLE\t"] {
        assert!(RemoveCommand::new(Some(raw)).is_err(), "{raw:?}");
    }
    assert!(RemoveCommand::new(None).is_err());
}

#[test]
fn value_whitespace_is_collapsed_and_trimmed() {
    let cmd = RemoveCommand::new(Some("AUTHOR \t Terry    Pratchett  ")).unwrap();
    assert_eq!(cmd.remove_by(), RemoveType::Author);
    assert_eq!(cmd.remove_value(), "Terry Pratchett");
}

#[test]
fn invalid_argument_message_includes_usage() {
    let err = LibraryCommand::parse_line("REMOVE TITLE").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid argument for REMOVE: cannot parse `TITLE` (usage: REMOVE AUTHOR|TITLE <value>)"
    );
}

#[test]
fn author_removal_is_multi_match() {
    let mut data = LibraryData::from_books(vec![
        book("B1", &["X", "Y"]),
        book("B2", &["Z"]),
        book("B3", &["X"]),
    ]);

    let out = run("REMOVE AUTHOR X", &mut data);

    assert_eq!(titles(&data), ["B2"]);
    assert_eq!(out, ["2 books removed for author: X"]);
}

#[test]
fn author_removal_with_no_match_leaves_collection_unchanged() {
    let mut data = LibraryData::from_books(vec![
        book("B1", &["X", "Y"]),
        book("B2", &["Z"]),
        book("B3", &["X"]),
    ]);
    let before = data.clone();

    let out = run("REMOVE AUTHOR Q", &mut data);

    assert_eq!(data, before);
    assert_eq!(out, ["0 books removed for author: Q"]);
}

#[test]
fn multi_word_author_must_match_exactly() {
    let mut data = LibraryData::from_books(vec![
        book("Good Omens", &["Terry Pratchett", "Neil Gaiman"]),
        book("Mort", &["Terry Pratchett"]),
        book("Stardust", &["Neil Gaiman"]),
    ]);

    let out = run("REMOVE AUTHOR   Terry   Pratchett", &mut data);

    assert_eq!(titles(&data), ["Stardust"]);
    assert_eq!(out, ["2 books removed for author: Terry Pratchett"]);
}

#[test]
fn title_removal_preserves_survivor_order() {
    let mut data = LibraryData::from_books(vec![
        book("A", &["X"]),
        book("B", &["Y"]),
        book("C", &["Z"]),
    ]);

    let out = run("REMOVE TITLE B", &mut data);

    assert_eq!(titles(&data), ["A", "C"]);
    assert_eq!(out, ["B: removed successfully."]);
}

#[test]
fn title_removal_with_no_match_reports_not_found() {
    let mut data = LibraryData::from_books(vec![book("A", &["X"]), book("C", &["Z"])]);
    let before = data.clone();

    let out = run("REMOVE TITLE The  Hobbit", &mut data);

    assert_eq!(data, before);
    assert_eq!(out, ["The Hobbit: not found."]);
}

#[test]
fn repeated_title_removal_is_not_found_the_second_time() {
    let mut data = LibraryData::from_books(vec![
        book("A", &["X"]),
        book("B", &["Y"]),
        book("C", &["Z"]),
    ]);

    assert_eq!(run("REMOVE TITLE B", &mut data), ["B: removed successfully."]);
    let after_first = data.clone();
    assert_eq!(run("REMOVE TITLE B", &mut data), ["B: not found."]);
    assert_eq!(data, after_first);
}

#[test]
fn execute_without_data_is_null_data_error() {
    let reporter = RecordingReporter::default();
    let ctx = ExecutionContext {
        reporter: &reporter,
        book_source: &NoSource,
        list_style: ListType::Short,
    };
    let data = LibraryData::from_books(vec![book("A", &["X"])]);
    let before = data.clone();

    let cmd = LibraryCommand::parse_line("REMOVE TITLE A").unwrap();
    let err = cmd.execute(None, &ctx).unwrap_err();

    assert!(matches!(err, LibraryError::NullData { kind: CommandType::Remove }));
    assert_eq!(data, before);
    assert!(reporter.lines().is_empty());
}
