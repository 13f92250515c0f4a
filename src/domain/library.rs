//! 세션 전체에서 공유되는 도서 컬렉션.

use crate::domain::book::BookEntry;

/// 순서가 보존되는 도서 목록 저장소.
///
/// 명령 실행은 `&mut LibraryData`를 받으므로 한 번에 하나의 명령만
/// 컬렉션을 변경할 수 있다. 실행 도중 외부에서 같은 컬렉션을 동시에
/// 수정하는 것은 지원하지 않는다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryData {
    books: Vec<BookEntry>,
}

impl LibraryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_books(books: Vec<BookEntry>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[BookEntry] {
        &self.books
    }

    /// 명령이 제자리(in-place)로 필터링할 수 있도록 원본 컬렉션을 노출한다.
    pub fn books_mut(&mut self) -> &mut Vec<BookEntry> {
        &mut self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn contains(&self, book: &BookEntry) -> bool {
        self.books.contains(book)
    }

    /// 이미 같은 값의 도서가 있으면 건너뛰고 뒤에 추가한다.
    /// 반환값은 (추가 수, 중복 건너뜀 수).
    pub fn append_unique(&mut self, incoming: Vec<BookEntry>) -> (usize, usize) {
        let mut added = 0;
        let mut skipped = 0;
        for book in incoming {
            if self.contains(&book) {
                skipped += 1;
                continue;
            }
            self.books.push(book);
            added += 1;
        }
        (added, skipped)
    }
}
