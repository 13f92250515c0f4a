//! CLI 명령 파싱 모듈.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "booklib")]
#[command(about = "Line-based command processor for an in-memory book library")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// CSV file to load before running commands (repeatable)
    #[arg(short, long = "file", value_name = "CSV")]
    files: Vec<String>,

    /// Run a command line (e.g. "REMOVE TITLE Dune") instead of the shell (repeatable)
    #[arg(short, long = "exec", value_name = "COMMAND")]
    exec: Vec<String>,

    /// Enable debug logging for booklib
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config and searched paths
    Config,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    InspectConfig,
    Interactive { files: Vec<String> },
    Batch { files: Vec<String>, lines: Vec<String> },
}

#[derive(Debug)]
pub struct CliRequest {
    pub verbose: bool,
    pub action: CliAction,
}

impl Cli {
    pub fn parse_request() -> Result<CliRequest, String> {
        Cli::parse().into_request()
    }

    fn into_request(self) -> Result<CliRequest, String> {
        let action = match self.command {
            Some(Commands::Config) => {
                if !self.exec.is_empty() || !self.files.is_empty() {
                    return Err("`config` cannot be combined with --file or --exec".to_string());
                }
                CliAction::InspectConfig
            }
            None if self.exec.is_empty() => CliAction::Interactive { files: self.files },
            None => CliAction::Batch {
                files: self.files,
                lines: self.exec,
            },
        };

        Ok(CliRequest {
            verbose: self.verbose,
            action,
        })
    }
}
