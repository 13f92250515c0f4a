//! 입력 한 줄을 명령으로 해석해 라이브러리 데이터에 적용하는 유스케이스.

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::commands::{AddCommand, Command, ExecutionContext, LibraryCommand};
use crate::application::ports::{BookSource, Reporter};
use crate::domain::command::ListType;
use crate::domain::library::LibraryData;

/// 명령 디스패처.
/// 명령은 순서대로 하나씩 끝까지 실행되며, 생성(검증)에 실패한 줄은 데이터를 건드리지 않는다.
pub struct RunCommandUseCase<'a> {
    pub reporter: &'a dyn Reporter,
    pub book_source: &'a dyn BookSource,
    pub list_style: ListType,
}

impl<'a> RunCommandUseCase<'a> {
    /// `KEYWORD 인자...` 한 줄을 실행한다.
    pub fn execute(&self, data: &mut LibraryData, line: &str) -> Result<()> {
        // 사용자에게는 호출자가 오류를 보여준다.
        let command = LibraryCommand::parse_line(line).map_err(|err| {
            debug!(input = line.trim(), "rejected command line");
            err
        })?;
        debug!(kind = %command.kind(), "dispatching command");

        command.execute(Some(data), &self.context())?;
        Ok(())
    }

    /// 시작 시 CSV 파일들을 순서대로 불러온다. 하나라도 실패하면 중단한다.
    pub fn preload(&self, data: &mut LibraryData, paths: &[String]) -> Result<()> {
        let ctx = self.context();
        for path in paths {
            let command = AddCommand::new(Some(path.as_str()))
                .with_context(|| format!("cannot preload `{path}`"))?;
            command
                .execute(data, &ctx)
                .with_context(|| format!("cannot preload `{path}`"))?;
        }
        Ok(())
    }

    fn context(&self) -> ExecutionContext<'a> {
        ExecutionContext {
            reporter: self.reporter,
            book_source: self.book_source,
            list_style: self.list_style,
        }
    }
}
