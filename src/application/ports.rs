//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::Path;

use anyhow::Result;

use crate::domain::book::BookEntry;
use crate::domain::error::LibraryError;
use crate::infrastructure::config::Config;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 외부 파일에서 도서 목록을 읽어오는 포트.
pub trait BookSource: Send + Sync {
    /// 파일 전체를 검증한 뒤에만 목록을 반환한다. 부분 결과는 돌려주지 않는다.
    fn load(&self, path: &Path) -> Result<Vec<BookEntry>, LibraryError>;
}

/// 명령 실행 결과를 사용자에게 전달하는 출력 포트.
pub trait Reporter: Send + Sync {
    /// 결과 한 줄. 줄바꿈은 구현체가 결정한다.
    fn line(&self, text: &str);
}
