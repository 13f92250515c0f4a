//! 도메인 오류 분류.

use thiserror::Error;

use crate::domain::command::CommandType;

/// 명령 생성/실행과 도서 검증에서 발생하는 오류.
///
/// "찾지 못함", "0건 삭제"는 오류가 아니라 정상 결과로 보고된다.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// 인자 누락 또는 형식 불일치. 명령 생성 시점에만 발생한다.
    #[error("invalid argument for {kind}: {detail} (usage: {usage})", usage = .kind.usage())]
    InvalidArgument { kind: CommandType, detail: String },

    /// 라이브러리 데이터 없이 실행을 시도한 호출 측 계약 위반.
    #[error("{kind}: library data must be provided")]
    NullData { kind: CommandType },

    /// 입력 줄의 첫 키워드가 어떤 명령과도 일치하지 않음.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("invalid book entry: {0}")]
    InvalidBook(String),

    #[error("failed to load books from {path}: {message}")]
    Load { path: String, message: String },
}

impl LibraryError {
    pub fn invalid_argument(kind: CommandType, detail: impl Into<String>) -> Self {
        Self::InvalidArgument {
            kind,
            detail: detail.into(),
        }
    }
}
