//! `booklib` 대화형 쉘(REPL) 인터페이스.

use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use tracing::debug;

use crate::domain::library::LibraryData;
use crate::interface::cli::composition::AppComposition;
use crate::interface::cli::repl_input::{SUGGESTIONS, read_repl_input};

/// 한 줄씩 명령을 읽어 EOF 또는 `EXIT`까지 실행한다.
/// 명령 오류는 출력만 하고 다음 입력을 계속 받는다.
pub fn run_repl(composition: &AppComposition, data: &mut LibraryData) -> Result<()> {
    print_welcome(data);
    io::stdout().flush()?;

    let prompt = composition.config().prompt();
    let usecase = composition.run_command_usecase();

    loop {
        let Some(raw_input) = read_repl_input(&prompt)? else {
            if io::stdin().is_terminal() {
                println!();
            }
            break;
        };
        let input = raw_input.trim();
        if input.is_empty() {
            continue;
        }

        match parse_shell_command(input) {
            ShellCommand::Exit => break,
            ShellCommand::Help => print_help(),
            ShellCommand::InspectConfig => match composition.inspect_config_usecase().execute() {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("error: {err:#}"),
            },
            ShellCommand::Library(line) => {
                if let Err(err) = usecase.execute(data, line) {
                    eprintln!("error: {err:#}");
                    eprintln!("hint: type HELP for the list of commands");
                }
            }
        }
    }

    debug!(books = data.len(), "session finished");
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum ShellCommand<'a> {
    Exit,
    Help,
    InspectConfig,
    /// 라이브러리 명령으로 해석할 원본 줄
    Library(&'a str),
}

fn parse_shell_command(input: &str) -> ShellCommand<'_> {
    match input {
        "EXIT" | "QUIT" => ShellCommand::Exit,
        "HELP" => ShellCommand::Help,
        "CONFIG" => ShellCommand::InspectConfig,
        other => ShellCommand::Library(other),
    }
}

fn print_welcome(data: &LibraryData) {
    let interactive = io::stdout().is_terminal();
    if !interactive {
        return;
    }

    let title = paint("booklib interactive shell", "1;36");
    let subtitle = paint("type HELP for commands, EXIT to quit", "2;37");

    println!("+------------------------------------------------------------+");
    println!("| {:<58} |", title);
    println!("| {:<58} |", subtitle);
    println!("+------------------------------------------------------------+");
    println!("| {:<58} |", format!("Books loaded: {}", data.len()));
    println!("+------------------------------------------------------------+");
    println!();
}

fn print_help() {
    println!("Commands:");
    for item in &SUGGESTIONS {
        println!("  {:<30} {}", item.usage, item.description);
    }
}

// 정렬 폭이 깨지지 않도록 제어 시퀀스 길이만큼 폭을 보정한다.
fn paint(text: &str, ansi: &str) -> String {
    let painted = format!("\x1b[{ansi}m{text}\x1b[0m");
    let pad = 58usize.saturating_sub(text.chars().count());
    format!("{painted}{}", " ".repeat(pad))
}
