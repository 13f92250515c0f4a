//! booklib library root.
//! 도서 명령 처리기의 계층(domain/application/infrastructure/interface)을 외부에 노출한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

pub use application::commands::{Command, ExecutionContext, LibraryCommand};
pub use domain::book::BookEntry;
pub use domain::command::{CommandType, GroupType, ListType, RemoveType};
pub use domain::error::LibraryError;
pub use domain::library::LibraryData;

use anyhow::Result;
use interface::cli::AppComposition;

/// 라이브러리 직접 호출용 일괄 실행 함수.
/// 병합 설정과 `files`를 불러온 뒤 `lines`를 순서대로 실행하고 최종 데이터를 돌려준다.
pub fn run_lines(files: &[String], lines: &[String]) -> Result<LibraryData> {
    let composition = AppComposition::load()?;
    let mut data = composition.open_library(files)?;
    interface::cli::run_batch(&composition, &mut data, lines)?;
    Ok(data)
}
