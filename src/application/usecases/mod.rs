pub mod inspect_config;
pub mod run_command;
