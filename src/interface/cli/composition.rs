//! 애플리케이션 조립(composition root) 모듈.

use anyhow::Result;
use tracing::info;

use crate::application::ports::ConfigRepository;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::run_command::RunCommandUseCase;
use crate::domain::library::LibraryData;
use crate::infrastructure::adapters::{ConsoleReporter, CsvBookSource, JsonConfigRepository};
use crate::infrastructure::config::Config;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    config: Config,
    book_source: CsvBookSource,
    reporter: ConsoleReporter,
}

impl AppComposition {
    /// 병합된 설정을 읽어 실행 조합을 생성한다.
    pub fn load() -> Result<Self> {
        let config_repo = JsonConfigRepository;
        let config = config_repo.load()?;
        Ok(Self::with_config(config_repo, config))
    }

    pub fn with_config(config_repo: JsonConfigRepository, config: Config) -> Self {
        Self {
            book_source: config.book_source(),
            reporter: ConsoleReporter::new(),
            config_repo,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 명령 실행 유스케이스를 생성한다.
    pub fn run_command_usecase(&self) -> RunCommandUseCase<'_> {
        RunCommandUseCase {
            reporter: &self.reporter,
            book_source: &self.book_source,
            list_style: self.config.list_style(),
        }
    }

    /// 설정의 preload 목록 뒤에 CLI로 받은 파일을 이어 불러온 세션 데이터를 만든다.
    pub fn open_library(&self, extra_files: &[String]) -> Result<LibraryData> {
        let mut files = self.config.preload();
        files.extend(extra_files.iter().cloned());

        let mut data = LibraryData::new();
        self.run_command_usecase().preload(&mut data, &files)?;
        info!(files = files.len(), books = data.len(), "library opened");
        Ok(data)
    }
}
