//! 저자/제목 기준 도서 삭제 명령.

use tracing::debug;

use super::{Command, ExecutionContext, tokens};
use crate::domain::command::{CommandType, RemoveType};
use crate::domain::error::LibraryError;
use crate::domain::library::LibraryData;

/// `REMOVE AUTHOR|TITLE <value...>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveCommand {
    remove_by: RemoveType,
    /// 공백 단위 토큰을 한 칸 공백으로 다시 이은 값
    remove_value: String,
}

impl RemoveCommand {
    pub fn remove_by(&self) -> RemoveType {
        self.remove_by
    }

    pub fn remove_value(&self) -> &str {
        &self.remove_value
    }

    /// 저자 목록에 값이 정확히 포함된 도서를 모두 삭제한다.
    /// 여러 도서가 같은 저자를 공유할 수 있으므로 끝까지 순회한다.
    fn remove_by_author(&self, data: &mut LibraryData) -> String {
        let books = data.books_mut();
        let original_size = books.len();

        books.retain(|book| !book.has_author(&self.remove_value));

        let removed = original_size - books.len();
        format!("{removed} books removed for author: {}", self.remove_value)
    }

    /// 제목이 일치하는 첫 도서 하나만 삭제한다. 제목은 컬렉션 내 고유 키로 취급한다.
    fn remove_by_title(&self, data: &mut LibraryData) -> String {
        let books = data.books_mut();
        let Some(idx) = books
            .iter()
            .position(|book| book.title() == self.remove_value)
        else {
            return format!("{}: not found.", self.remove_value);
        };

        books.remove(idx);
        format!("{}: removed successfully.", self.remove_value)
    }
}

impl Command for RemoveCommand {
    const KIND: CommandType = CommandType::Remove;

    fn parse_arguments(raw: &str) -> Option<Self> {
        let mut tokens = tokens(raw);
        let remove_by = RemoveType::from_keyword(tokens.next()?)?;

        let remove_value = tokens.collect::<Vec<_>>().join(" ");
        if remove_value.is_empty() {
            return None;
        }

        Some(Self {
            remove_by,
            remove_value,
        })
    }

    fn execute(
        &self,
        data: &mut LibraryData,
        ctx: &ExecutionContext<'_>,
    ) -> Result<(), LibraryError> {
        debug!(by = %self.remove_by, value = %self.remove_value, "removing books");

        let report = match self.remove_by {
            RemoveType::Author => self.remove_by_author(data),
            RemoveType::Title => self.remove_by_title(data),
        };
        ctx.reporter.line(&report);
        Ok(())
    }
}
