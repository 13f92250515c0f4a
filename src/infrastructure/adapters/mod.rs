//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod csv_book_source;
mod reporter;

pub use config_repository::JsonConfigRepository;
pub use csv_book_source::{CsvBookSource, DEFAULT_AUTHOR_SEPARATOR};
pub use reporter::ConsoleReporter;
