//! CLI 인터페이스 모듈 묶음.
//! 인자 파싱/REPL/일괄 실행/조립을 한 네임스페이스로 관리한다.

pub mod batch;
pub mod command;
pub mod composition;
pub mod repl;
pub mod repl_input;

pub use batch::run_batch;
pub use command::{Cli, CliAction, CliRequest};
pub use composition::AppComposition;
pub use repl::run_repl;
