//! 설정 스키마와 병합/해석 규칙.

use serde::{Deserialize, Serialize};

use crate::domain::command::ListType;
use crate::infrastructure::adapters::{CsvBookSource, DEFAULT_AUTHOR_SEPARATOR};

pub const DEFAULT_PROMPT: &str = "booklib";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 전역 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// 대화형 쉘 프롬프트 문자열
    pub prompt: Option<String>,
    /// CSV 한 칸 안에서 여러 저자를 나누는 구분자
    pub author_separator: Option<String>,
    /// 시작 시 자동으로 불러올 CSV 파일 목록
    pub preload: Option<Vec<String>>,
    /// 인자 없는 LIST의 출력 형식(short/long)
    pub list_style: Option<String>,
}

impl Config {
    pub fn prompt(&self) -> String {
        self.defaults
            .prompt
            .clone()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string())
    }

    pub fn author_separator(&self) -> String {
        self.defaults
            .author_separator
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_AUTHOR_SEPARATOR.to_string())
    }

    pub fn preload(&self) -> Vec<String> {
        self.defaults.preload.clone().unwrap_or_default()
    }

    /// 알 수 없는 값은 short로 해석한다.
    pub fn list_style(&self) -> ListType {
        self.defaults
            .list_style
            .as_deref()
            .and_then(|raw| ListType::from_keyword(raw.trim()))
            .unwrap_or_default()
    }

    /// 설정된 구분자를 사용하는 CSV 소스를 생성한다.
    pub fn book_source(&self) -> CsvBookSource {
        CsvBookSource::new(self.author_separator())
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub(crate) fn merge_from(&mut self, other: Config) {
        self.defaults.merge_from(other.defaults);
    }
}

impl DefaultsConfig {
    pub(crate) fn merge_from(&mut self, other: DefaultsConfig) {
        if other.prompt.is_some() {
            self.prompt = other.prompt;
        }
        if other.author_separator.is_some() {
            self.author_separator = other.author_separator;
        }
        if other.preload.is_some() {
            self.preload = other.preload;
        }
        if other.list_style.is_some() {
            self.list_style = other.list_style;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_values_override_earlier_ones_field_by_field() {
        let mut merged: Config =
            serde_json::from_str(r#"{"defaults":{"prompt":"lib","list_style":"long"}}"#).unwrap();
        let project: Config =
            serde_json::from_str(r#"{"defaults":{"prompt":"proj","preload":["a.csv"]}}"#).unwrap();

        merged.merge_from(project);

        assert_eq!(merged.prompt(), "proj");
        assert_eq!(merged.list_style(), ListType::Long);
        assert_eq!(merged.preload(), ["a.csv"]);
    }

    #[test]
    fn defaults_apply_when_unset_or_invalid() {
        let config: Config =
            serde_json::from_str(r#"{"defaults":{"list_style":"wide","author_separator":""}}"#)
                .unwrap();

        assert_eq!(config.prompt(), DEFAULT_PROMPT);
        assert_eq!(config.list_style(), ListType::Short);
        assert_eq!(config.author_separator(), DEFAULT_AUTHOR_SEPARATOR);
        assert!(config.preload().is_empty());
    }
}
