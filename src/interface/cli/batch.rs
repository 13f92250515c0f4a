//! `--exec`로 받은 명령 줄을 순서대로 실행한다.

use anyhow::{Context, Result};

use crate::domain::library::LibraryData;
use crate::interface::cli::composition::AppComposition;

/// 첫 실패에서 중단하며, 실패한 줄 번호를 오류에 포함한다.
pub fn run_batch(
    composition: &AppComposition,
    data: &mut LibraryData,
    lines: &[String],
) -> Result<()> {
    let usecase = composition.run_command_usecase();
    for (idx, line) in lines.iter().enumerate() {
        usecase
            .execute(data, line)
            .with_context(|| format!("command {} (`{}`) failed", idx + 1, line.trim()))?;
    }
    Ok(())
}
