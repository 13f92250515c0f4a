//! 도서 목록 출력 명령.

use super::{Command, ExecutionContext, tokens};
use crate::domain::command::{CommandType, ListType};
use crate::domain::error::LibraryError;
use crate::domain::library::LibraryData;

pub(crate) const EMPTY_LIBRARY: &str = "The library has no book entries.";

/// `LIST [short|long]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCommand {
    /// `None`이면 실행 시 설정된 기본 형식을 따른다.
    style: Option<ListType>,
}

impl ListCommand {
    pub fn style(&self) -> Option<ListType> {
        self.style
    }
}

impl Command for ListCommand {
    const KIND: CommandType = CommandType::List;

    fn parse_arguments(raw: &str) -> Option<Self> {
        let mut tokens = tokens(raw);
        let style = match tokens.next() {
            None => None,
            Some(token) => Some(ListType::from_keyword(token)?),
        };
        if tokens.next().is_some() {
            return None;
        }

        Some(Self { style })
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

        ctx.reporter
            .line(&format!("{} books in library:", data.len()));
        match self.style.unwrap_or(ctx.list_style) {
            ListType::Short => {
                for book in data.books() {
                    ctx.reporter.line(book.title());
                }
            }
            ListType::Long => {
                for book in data.books() {
                    ctx.reporter.line(&book.to_string());
                    ctx.reporter.line("");
                }
            }
        }
        Ok(())
    }
}
