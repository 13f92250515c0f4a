//! Domain layer
//! 도서 엔티티/컬렉션/명령 분류를 외부 의존성 없이 표현한다.

pub mod book;
pub mod command;
pub mod error;
pub mod library;
