//! 도서 엔티티(값 객체).

use std::fmt;

use crate::domain::error::LibraryError;

/// 제목과 저자 목록으로 구성된 불변 도서 레코드.
/// 동등성은 값 비교로 판단한다.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookEntry {
    title: String,
    authors: Vec<String>,
}

impl BookEntry {
    /// 제목/저자를 검증해 도서를 생성한다.
    /// - 제목은 공백이 아니어야 한다.
    /// - 저자는 최소 1명, 각 이름은 공백이 아니어야 한다.
    pub fn new<T, I, A>(title: T, authors: I) -> Result<Self, LibraryError>
    where
        T: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(LibraryError::InvalidBook("title must not be blank".to_string()));
        }

        let authors: Vec<String> = authors
            .into_iter()
            .map(|a| a.into().trim().to_string())
            .collect();
        if authors.is_empty() {
            return Err(LibraryError::InvalidBook(format!(
                "book `{title}` must have at least one author"
            )));
        }
        if authors.iter().any(|a| a.is_empty()) {
            return Err(LibraryError::InvalidBook(format!(
                "book `{title}` has a blank author name"
            )));
        }

        Ok(Self { title, authors })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// 저자 목록에 정확히 일치하는 이름이 있는지 확인한다.
    pub fn has_author(&self, author: &str) -> bool {
        self.authors.iter().any(|a| a == author)
    }
}

impl fmt::Display for BookEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\nby {}", self.title, self.authors.join(", "))
    }
}
