//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, Write};

use crate::application::ports::Reporter;

/// 명령 결과를 stdout에 한 줄씩 출력하는 리포터.
#[derive(Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn line(&self, text: &str) {
        // 파이프가 먼저 닫힌 경우(`| head`)에도 패닉하지 않도록 쓰기 오류는 무시한다.
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{text}");
    }
}
