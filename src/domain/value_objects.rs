use serde::{Deserialize, Serialize};
use std::fmt;

/// 書籍ID - 貸出台帳が扱う書籍の識別子
///
/// カタログ管理（タイトル・著者）はこのコンテキストの責務外。
/// 台帳は識別子の文字列のみを知る。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(String);

impl BookId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 借り手ID - 会員管理コンテキストへの参照
///
/// 会員の詳細（氏名・連絡先・アカウント状態）は知らない。
/// アカウント状態の判定はEligibilityServiceポートに委譲される。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BorrowerId(String);

impl BorrowerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BorrowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_equality_by_value() {
        assert_eq!(BookId::new("book1"), BookId::new("book1"));
        assert_ne!(BookId::new("book1"), BookId::new("book2"));
    }

    #[test]
    fn test_book_id_value() {
        let id = BookId::new("book1");
        assert_eq!(id.value(), "book1");
        assert_eq!(id.to_string(), "book1");
    }

    #[test]
    fn test_borrower_id_value() {
        let id = BorrowerId::new("user");
        assert_eq!(id.value(), "user");
        assert_eq!(id.to_string(), "user");
    }
}
