//! 명령 계약(Command)과 명령 종류별 tagged union.
//!
//! 모든 명령은 같은 수명 주기를 따른다.
//! 1. 키워드 뒤의 인자 문자열로 생성되며, 생성 시점이 유일한 검증 지점이다.
//! 2. 생성에 성공한 명령은 항상 실행 가능하다.
//! 3. 실행은 공유 `LibraryData`를 읽거나 제자리에서 변경하고 결과를 `Reporter`로 출력한다.

mod add;
mod groups;
mod list;
mod remove;
mod search;

pub use add::AddCommand;
pub use groups::GroupsCommand;
pub use list::ListCommand;
pub use remove::RemoveCommand;
pub use search::SearchCommand;

use crate::application::ports::{BookSource, Reporter};
use crate::domain::command::{CommandType, ListType};
use crate::domain::error::LibraryError;
use crate::domain::library::LibraryData;

/// 인자 구분 문자. 줄바꿈 없는 공백(U+00A0) 같은 유니코드 공백은 값의 일부로 남는다.
pub(crate) const ARG_DELIMITERS: [char; 5] = [' ', '\t', '\n', '\r', '\x0c'];

/// 구분 문자로 나눈 비어 있지 않은 인자 토큰.
pub(crate) fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(ARG_DELIMITERS).filter(|token| !token.is_empty())
}

/// 명령 실행 시 필요한 협력 객체 묶음.
pub struct ExecutionContext<'a> {
    pub reporter: &'a dyn Reporter,
    pub book_source: &'a dyn BookSource,
    /// 인자 없는 `LIST`에 적용할 출력 형식
    pub list_style: ListType,
}

/// 명령 종류별 인자 해석/실행 계약.
pub trait Command: Sized {
    const KIND: CommandType;

    /// 인자 문자열을 해석한다.
    /// 형식이 맞지 않으면 `None`을 반환하며 어떤 부분 상태도 남기지 않는다.
    fn parse_arguments(raw: &str) -> Option<Self>;

    /// 명령 효과를 적용하고 결과를 보고한다.
    ///
    /// `&mut LibraryData`를 받으므로 같은 컬렉션에 대한 동시 실행은 허용되지 않는다.
    fn execute(
        &self,
        data: &mut LibraryData,
        ctx: &ExecutionContext<'_>,
    ) -> Result<(), LibraryError>;

    /// 인자 문자열로 명령을 생성한다.
    /// 인자가 없거나 해석에 실패하면 `InvalidArgument`.
    fn new(raw: Option<&str>) -> Result<Self, LibraryError> {
        let Some(raw) = raw else {
            return Err(LibraryError::invalid_argument(
                Self::KIND,
                "argument input is missing",
            ));
        };

        Self::parse_arguments(raw).ok_or_else(|| {
            LibraryError::invalid_argument(Self::KIND, format!("cannot parse `{}`", raw.trim()))
        })
    }

    /// 데이터 존재 여부를 먼저 확인한 뒤 실행한다.
    fn execute_on(
        &self,
        data: Option<&mut LibraryData>,
        ctx: &ExecutionContext<'_>,
    ) -> Result<(), LibraryError> {
        let data = data.ok_or(LibraryError::NullData { kind: Self::KIND })?;
        self.execute(data, ctx)
    }
}

/// 생성이 끝난(실행 가능한) 명령.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryCommand {
    Add(AddCommand),
    List(ListCommand),
    Search(SearchCommand),
    Remove(RemoveCommand),
    Groups(GroupsCommand),
}

impl LibraryCommand {
    /// 명령 종류와 인자 문자열로 해당 명령을 생성한다.
    pub fn build(kind: CommandType, raw: Option<&str>) -> Result<Self, LibraryError> {
        Ok(match kind {
            CommandType::Add => Self::Add(AddCommand::new(raw)?),
            CommandType::List => Self::List(ListCommand::new(raw)?),
            CommandType::Search => Self::Search(SearchCommand::new(raw)?),
            CommandType::Remove => Self::Remove(RemoveCommand::new(raw)?),
            CommandType::Groups => Self::Groups(GroupsCommand::new(raw)?),
        })
    }

    /// 입력 한 줄을 `KEYWORD 인자...`로 나눠 명령을 생성한다.
    pub fn parse_line(line: &str) -> Result<Self, LibraryError> {
        let trimmed = line.trim_matches(ARG_DELIMITERS);
        let (keyword, rest) = match trimmed.split_once(ARG_DELIMITERS) {
            Some((keyword, rest)) => (keyword, rest),
            None => (trimmed, ""),
        };

        let Some(kind) = CommandType::from_keyword(keyword) else {
            return Err(LibraryError::UnknownCommand(keyword.to_string()));
        };

        Self::build(kind, Some(rest))
    }

    pub fn kind(&self) -> CommandType {
        match self {
            Self::Add(_) => CommandType::Add,
            Self::List(_) => CommandType::List,
            Self::Search(_) => CommandType::Search,
            Self::Remove(_) => CommandType::Remove,
            Self::Groups(_) => CommandType::Groups,
        }
    }

    /// 명령 종류에 맞는 구현으로 실행을 위임한다.
    pub fn execute(
        &self,
        data: Option<&mut LibraryData>,
        ctx: &ExecutionContext<'_>,
    ) -> Result<(), LibraryError> {
        match self {
            Self::Add(cmd) => cmd.execute_on(data, ctx),
            Self::List(cmd) => cmd.execute_on(data, ctx),
            Self::Search(cmd) => cmd.execute_on(data, ctx),
            Self::Remove(cmd) => cmd.execute_on(data, ctx),
            Self::Groups(cmd) => cmd.execute_on(data, ctx),
        }
    }
}
