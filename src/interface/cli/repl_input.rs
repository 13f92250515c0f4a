//! REPL 입력 처리기.
//! TTY에서는 입력 중 실시간으로 키워드 추천과 인자 검증 힌트를 표시한다.

use std::env;
use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use crossterm::{execute, queue};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::application::commands::LibraryCommand;
use crate::domain::command::CommandType;

pub(crate) struct Suggestion {
    pub keyword: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    /// Enter 시 바로 실행하지 않고 `KEYWORD `로 확장할지 여부
    pub needs_args: bool,
}

pub(crate) static SUGGESTIONS: [Suggestion; 8] = [
    Suggestion {
        keyword: "ADD",
        description: "load books from a CSV file",
        usage: CommandType::Add.usage(),
        needs_args: true,
    },
    Suggestion {
        keyword: "LIST",
        description: "list all books",
        usage: CommandType::List.usage(),
        needs_args: false,
    },
    Suggestion {
        keyword: "SEARCH",
        description: "find titles containing a word",
        usage: CommandType::Search.usage(),
        needs_args: true,
    },
    Suggestion {
        keyword: "REMOVE",
        description: "remove books by author or title",
        usage: CommandType::Remove.usage(),
        needs_args: true,
    },
    Suggestion {
        keyword: "GROUPS",
        description: "group books by title or author",
        usage: CommandType::Groups.usage(),
        needs_args: true,
    },
    Suggestion {
        keyword: "CONFIG",
        description: "show effective merged config",
        usage: "CONFIG",
        needs_args: false,
    },
    Suggestion {
        keyword: "HELP",
        description: "show this command list",
        usage: "HELP",
        needs_args: false,
    },
    Suggestion {
        keyword: "EXIT",
        description: "leave the shell",
        usage: "EXIT",
        needs_args: false,
    },
];

const SHELL_KEYWORDS: [&str; 4] = ["CONFIG", "HELP", "EXIT", "QUIT"];

/// REPL 한 줄 입력을 읽는다. EOF면 `None`.
/// - TTY + 지원 터미널: 실시간 추천 + 방향키 선택
/// - non-TTY/미지원 터미널: 일반 라인 입력
pub fn read_repl_input(prompt: &str) -> Result<Option<String>> {
    if !supports_interactive_input() {
        return read_line_fallback(prompt);
    }

    match read_line_interactive(prompt) {
        Ok(v) => Ok(v),
        Err(_) => read_line_fallback(prompt),
    }
}

fn supports_interactive_input() -> bool {
    if !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        return false;
    }

    // dumb 터미널에서는 제어 시퀀스 기반 UI를 비활성화한다.
    if let Ok(term) = env::var("TERM")
        && term.eq_ignore_ascii_case("dumb")
    {
        return false;
    }

    true
}

fn read_line_fallback(prompt: &str) -> Result<Option<String>> {
    // 파이프 입력에서는 프롬프트가 출력에 섞이지 않도록 생략한다.
    if io::stdin().is_terminal() {
        print!("{prompt}> ");
        io::stdout().flush()?;
    }

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(trim_newline(line)))
}

fn read_line_interactive(prompt: &str) -> Result<Option<String>> {
    let mut stdout = io::stdout();
    let _guard = InputGuard::enter(&mut stdout)?;

    let prefix = format!("{prompt}> ");
    let mut input = String::new();
    let mut cursor_chars = 0usize;
    let mut selected_idx = 0usize;

    loop {
        let suggestions = match_suggestions(&input);
        if suggestions.is_empty() {
            selected_idx = 0;
        } else if selected_idx >= suggestions.len() {
            selected_idx = suggestions.len() - 1;
        }

        render_frame(&mut stdout, &prefix, &input, cursor_chars, &suggestions, selected_idx)?;

        match event::read()? {
            Event::Paste(text) => {
                for ch in text.chars().filter(|c| !c.is_control()) {
                    insert_char_at(&mut input, cursor_chars, ch);
                    cursor_chars += 1;
                }
            }
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Enter => {
                        // 인자가 필요한 명령은 즉시 실행하지 않고 인자 입력 상태로 확장한다.
                        if let Some(expanded) = expand_input(&input, &suggestions, selected_idx) {
                            input = expanded;
                            cursor_chars = input.chars().count();
                            continue;
                        }
                        let final_input = finalize_input(&input, &suggestions, selected_idx);
                        commit_line(&mut stdout, &prefix, &final_input)?;
                        return Ok(Some(final_input));
                    }
                    KeyCode::Backspace => {
                        if cursor_chars > 0 {
                            remove_char_at(&mut input, cursor_chars - 1);
                            cursor_chars -= 1;
                        }
                    }
                    KeyCode::Delete => {
                        if cursor_chars < input.chars().count() {
                            remove_char_at(&mut input, cursor_chars);
                        }
                    }
                    KeyCode::Left => {
                        cursor_chars = cursor_chars.saturating_sub(1);
                    }
                    KeyCode::Right => {
                        cursor_chars = (cursor_chars + 1).min(input.chars().count());
                    }
                    KeyCode::Home => {
                        cursor_chars = 0;
                    }
                    KeyCode::End => {
                        cursor_chars = input.chars().count();
                    }
                    KeyCode::Up => {
                        selected_idx = selected_idx.saturating_sub(1);
                    }
                    KeyCode::Down => {
                        if !suggestions.is_empty() {
                            selected_idx = (selected_idx + 1).min(suggestions.len() - 1);
                        }
                    }
                    KeyCode::Tab => {
                        if !suggestions.is_empty() && !input.contains(' ') {
                            input = format!("{} ", suggestions[selected_idx].keyword);
                            cursor_chars = input.chars().count();
                        } else if let Some(completed) = complete_argument(&input) {
                            input = completed;
                            cursor_chars = input.chars().count();
                        }
                    }
                    KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        commit_line(&mut stdout, &prefix, &input)?;
                        return Ok(None);
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        commit_line(&mut stdout, &prefix, &input)?;
                        return Ok(Some("EXIT".to_string()));
                    }
                    KeyCode::Char(ch) => {
                        if !key.modifiers.contains(KeyModifiers::CONTROL)
                            && !key.modifiers.contains(KeyModifiers::ALT)
                        {
                            insert_char_at(&mut input, cursor_chars, ch);
                            cursor_chars += 1;
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

/// 키워드 입력 중(공백 전)일 때만 대소문자 무시 접두 일치로 추천한다.
fn match_suggestions(input: &str) -> Vec<&'static Suggestion> {
    if input.is_empty() || input.contains(' ') {
        return Vec::new();
    }

    let q = input.to_ascii_uppercase();
    SUGGESTIONS
        .iter()
        .filter(|s| s.keyword.starts_with(&q))
        .collect()
}

fn finalize_input(input: &str, suggestions: &[&Suggestion], selected_idx: usize) -> String {
    if !input.contains(' ') && !suggestions.is_empty() {
        return suggestions[selected_idx].keyword.to_string();
    }
    input.to_string()
}

/// 인자가 필요한 명령을 단독 입력 시 공백을 추가해 확장한다.
fn expand_input(input: &str, suggestions: &[&Suggestion], selected_idx: usize) -> Option<String> {
    if input.contains(' ') || suggestions.is_empty() {
        return None;
    }

    let selected = suggestions[selected_idx];
    selected.needs_args.then(|| format!("{} ", selected.keyword))
}

/// 두 번째 토큰(분류 키워드) 탭 완성을 시도한다.
fn complete_argument(input: &str) -> Option<String> {
    let (keyword, rest) = input.split_once(' ')?;
    let choices: &[&str] = match keyword {
        "REMOVE" => &["AUTHOR", "TITLE"],
        "GROUPS" => &["TITLE", "AUTHOR"],
        "LIST" => &["short", "long"],
        _ => return None,
    };

    let rest = rest.trim_start();
    if rest.contains(char::is_whitespace) {
        return None;
    }

    let lowered = rest.to_ascii_lowercase();
    let matches: Vec<&str> = choices
        .iter()
        .copied()
        .filter(|c| c.to_ascii_lowercase().starts_with(&lowered))
        .collect();
    if matches.len() != 1 || rest == matches[0] {
        return None;
    }

    // REMOVE는 값이 뒤따르므로 공백까지 채운다.
    let trailing = if keyword == "REMOVE" { " " } else { "" };
    Some(format!("{keyword} {}{trailing}", matches[0]))
}

/// 현재 입력을 실제 명령 파서로 검증해 힌트를 만든다.
fn realtime_hint(input: &str) -> Option<(Color, String)> {
    let trimmed = input.trim();
    let keyword = trimmed.split_whitespace().next()?;

    if SHELL_KEYWORDS.contains(&keyword) {
        if trimmed == keyword {
            return Some((Color::Green, "ready: press Enter".to_string()));
        }
        return Some((Color::Red, format!("error: {keyword} takes no arguments")));
    }

    let kind = CommandType::from_keyword(keyword)?;
    match LibraryCommand::parse_line(trimmed) {
        Ok(_) => Some((Color::Green, "ready: press Enter to run".to_string())),
        Err(_) => Some((Color::Yellow, format!("hint: {}", kind.usage()))),
    }
}

/// 입력줄 아래에 힌트/추천을 그리고 커서를 입력줄로 되돌린다.
fn render_frame(
    stdout: &mut io::Stdout,
    prefix: &str,
    input: &str,
    cursor_chars: usize,
    suggestions: &[&Suggestion],
    selected_idx: usize,
) -> Result<()> {
    let (w, _) = terminal::size().unwrap_or((120, 40));
    // 마지막 열에 쓰면 자동 줄바꿈이 생기므로 한 칸 여유를 둔다.
    let width = (w as usize).max(20) - 1;

    let mut extra: Vec<(Color, String)> = Vec::new();
    if let Some(hint) = realtime_hint(input) {
        extra.push(hint);
    }
    for (idx, item) in suggestions.iter().enumerate() {
        let marker = if idx == selected_idx { ">" } else { " " };
        extra.push((
            Color::White,
            format!(
                "{marker} {:<8} - {} | usage: {}",
                item.keyword, item.description, item.usage
            ),
        ));
    }

    let available = width.saturating_sub(display_width(prefix));
    queue!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::FromCursorDown),
        Print(prefix),
        Print(tail_with_ellipsis_display(input, available))
    )?;

    for (color, line) in &extra {
        queue!(
            stdout,
            Print("\r\n"),
            SetForegroundColor(*color),
            Print(clip_line_display(line, width)),
            ResetColor
        )?;
    }
    if !extra.is_empty() {
        queue!(stdout, cursor::MoveUp(extra.len() as u16))?;
    }

    let col = prompt_cursor_col(prefix, input, cursor_chars, width) as u16;
    queue!(stdout, cursor::MoveToColumn(col), cursor::Show)?;
    stdout.flush()?;
    Ok(())
}

/// 힌트 영역을 지우고 입력한 줄을 그대로 남긴 채 다음 줄로 넘어간다.
fn commit_line(stdout: &mut io::Stdout, prefix: &str, input: &str) -> Result<()> {
    execute!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::FromCursorDown),
        Print(prefix),
        Print(input),
        Print("\r\n")
    )?;
    Ok(())
}

fn prompt_cursor_col(prefix: &str, input: &str, cursor_chars: usize, width: usize) -> usize {
    let prefix_width = display_width(prefix);
    let available = width.saturating_sub(prefix_width);

    if display_width(input) <= available {
        let before_cursor: String = input.chars().take(cursor_chars).collect();
        return (prefix_width + display_width(&before_cursor)).min(width);
    }

    // 오버플로우 상태에서는 tail 표시 정책상 커서를 입력 끝쪽으로 정렬한다.
    (prefix_width + display_width(&tail_with_ellipsis_display(input, available))).min(width)
}

fn tail_with_ellipsis_display(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if display_width(text) <= max_width {
        return text.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target = max_width - 3;
    let mut tail_rev = String::new();
    let mut used = 0usize;

    for ch in text.chars().rev() {
        let cw = char_display_width(ch);
        if used + cw > target {
            break;
        }
        tail_rev.push(ch);
        used += cw;
    }

    let tail: String = tail_rev.chars().rev().collect();
    format!("...{tail}")
}

fn clip_line_display(line: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if display_width(line) <= max_width {
        return line.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut out = String::new();
    let mut used = 0usize;
    let cap = max_width - 3;

    for ch in line.chars() {
        let cw = char_display_width(ch);
        if used + cw > cap {
            break;
        }
        out.push(ch);
        used += cw;
    }

    out.push_str("...");
    out
}

fn trim_newline(mut s: String) -> String {
    while matches!(s.chars().last(), Some('\n' | '\r')) {
        s.pop();
    }
    s
}

fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn char_display_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

struct InputGuard;

impl InputGuard {
    fn enter(stdout: &mut io::Stdout) -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout, cursor::Show)?;
        Ok(Self)
    }
}

impl Drop for InputGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, ResetColor);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}

fn insert_char_at(input: &mut String, char_idx: usize, ch: char) {
    let byte_idx = byte_index_at_char(input, char_idx);
    input.insert(byte_idx, ch);
}

fn remove_char_at(input: &mut String, char_idx: usize) {
    let start = byte_index_at_char(input, char_idx);
    let end = byte_index_at_char(input, char_idx + 1);
    if start < end && end <= input.len() {
        input.replace_range(start..end, "");
    }
}

fn byte_index_at_char(input: &str, char_idx: usize) -> usize {
    input
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(input.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(input: &str) -> Vec<&'static str> {
        match_suggestions(input).iter().map(|s| s.keyword).collect()
    }

    #[test]
    fn suggestions_follow_keyword_prefix() {
        assert_eq!(keywords("re"), ["REMOVE"]);
        assert_eq!(keywords("E"), ["EXIT"]);
        assert!(keywords("").is_empty());
        assert!(keywords("REMOVE TITLE").is_empty());
    }

    #[test]
    fn enter_expands_commands_that_need_arguments() {
        let suggestions = match_suggestions("rem");
        assert_eq!(expand_input("rem", &suggestions, 0).as_deref(), Some("REMOVE "));

        let suggestions = match_suggestions("li");
        assert_eq!(expand_input("li", &suggestions, 0), None);
        assert_eq!(finalize_input("li", &suggestions, 0), "LIST");
    }

    #[test]
    fn tab_completes_classifier_keyword() {
        assert_eq!(complete_argument("REMOVE au").as_deref(), Some("REMOVE AUTHOR "));
        assert_eq!(complete_argument("GROUPS T").as_deref(), Some("GROUPS TITLE"));
        assert_eq!(complete_argument("LIST l").as_deref(), Some("LIST long"));
        assert_eq!(complete_argument("REMOVE TITLE Du"), None);
        assert_eq!(complete_argument("SEARCH du"), None);
    }

    #[test]
    fn hint_reflects_command_validity() {
        let (color, text) = realtime_hint("REMOVE TITLE").unwrap();
        assert_eq!(color, Color::Yellow);
        assert_eq!(text, "hint: REMOVE AUTHOR|TITLE <value>");

        let (color, _) = realtime_hint("REMOVE TITLE Dune").unwrap();
        assert_eq!(color, Color::Green);

        let (color, _) = realtime_hint("HELP me").unwrap();
        assert_eq!(color, Color::Red);

        assert!(realtime_hint("rem").is_none());
    }

    #[test]
    fn wide_characters_are_clipped_by_display_width() {
        assert_eq!(clip_line_display("abcdef", 5), "ab...");
        assert_eq!(tail_with_ellipsis_display("abcdef", 5), "...ef");
        assert_eq!(clip_line_display("한글제목입니다", 7), "한글...");
    }

    #[test]
    fn char_editing_respects_multibyte_boundaries() {
        let mut input = "제목".to_string();
        insert_char_at(&mut input, 1, 'X');
        assert_eq!(input, "제X목");
        remove_char_at(&mut input, 0);
        assert_eq!(input, "X목");
    }
}
