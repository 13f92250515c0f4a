//! 명령 종류/인자 분류 열거형.
//! 모든 키워드는 대소문자를 구분해 열거형 이름과 정확히 비교한다.

use std::fmt;

/// 라이브러리 데이터를 대상으로 실행되는 명령 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Add,
    List,
    Search,
    Remove,
    Groups,
}

impl CommandType {
    pub const ALL: [CommandType; 5] = [
        CommandType::Add,
        CommandType::List,
        CommandType::Search,
        CommandType::Remove,
        CommandType::Groups,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::List => "LIST",
            Self::Search => "SEARCH",
            Self::Remove => "REMOVE",
            Self::Groups => "GROUPS",
        }
    }

    pub const fn usage(self) -> &'static str {
        match self {
            Self::Add => "ADD <path.csv>",
            Self::List => "LIST [short|long]",
            Self::Search => "SEARCH <word>",
            Self::Remove => "REMOVE AUTHOR|TITLE <value>",
            Self::Groups => "GROUPS TITLE|AUTHOR",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == keyword)
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 삭제 기준(저자/제목).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveType {
    Author,
    Title,
}

impl RemoveType {
    pub const ALL: [RemoveType; 2] = [RemoveType::Author, RemoveType::Title];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Author => "AUTHOR",
            Self::Title => "TITLE",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == keyword)
    }
}

impl fmt::Display for RemoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 그룹 출력 기준.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupType {
    Title,
    Author,
}

impl GroupType {
    pub const ALL: [GroupType; 2] = [GroupType::Title, GroupType::Author];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "TITLE",
            Self::Author => "AUTHOR",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == keyword)
    }
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 목록 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListType {
    #[default]
    Short,
    Long,
}

impl ListType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "short" => Some(Self::Short),
            "long" => Some(Self::Long),
            _ => None,
        }
    }
}
