use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{BookId, BorrowBookError, BorrowerId, ReturnBookError};

/// 貸出記録 - 1人の借り手が1冊を借りている事実
///
/// 不変条件：(書籍, 借り手) の組み合わせにつき記録は最大1件。
/// 貸出成功時に作成され、返却成功時に削除される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub book_id: BookId,
    pub borrower_id: BorrowerId,
    pub borrowed_at: DateTime<Utc>,
}

/// 貸出台帳集約 - 在庫数と貸出記録を所有する
///
/// 不変条件：
/// - 在庫数は負にならない（checkoutは在庫0で拒否される）
/// - 在庫数は登録された累計を超えない（check_inは記録の削除と対で加算される）
/// - 貸出記録が存在する ⇔ その借り手が未返却の1冊を保持している
///
/// 状態はこのインスタンスに閉じる（プロセス全体のシングルトンにしない）。
/// ライフサイクルはアプリケーション層の合成側が所有する。
#[derive(Debug, Default)]
pub struct LendingLedger {
    inventory: HashMap<BookId, u32>,
    loans: HashMap<(BookId, BorrowerId), LoanRecord>,
}

impl LendingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 在庫を登録する
    ///
    /// 未登録の書籍はエントリを0で作成してから加算する。
    /// 既存の書籍への再登録は加算。失敗しない。
    pub fn register(&mut self, book_id: BookId, copies: u32) {
        *self.inventory.entry(book_id).or_insert(0) += copies;
    }

    /// 現在の貸出可能数を返す
    ///
    /// 未登録の書籍は0。純粋な読み取りで副作用なし。
    pub fn available_copies(&self, book_id: &BookId) -> u32 {
        self.inventory.get(book_id).copied().unwrap_or(0)
    }

    /// この借り手がこの書籍の未返却の貸出を持っているか
    pub fn has_active_loan(&self, book_id: &BookId, borrower_id: &BorrowerId) -> bool {
        self.loans
            .contains_key(&(book_id.clone(), borrower_id.clone()))
    }

    /// 1冊を貸し出す
    ///
    /// ビジネスルール：
    /// - 同じ (書籍, 借り手) の貸出記録が既にあれば拒否
    /// - 在庫が0（未登録を含む）なら拒否
    ///
    /// 重複チェックは在庫チェックより先。在庫の増減で
    /// 拒否理由が変わらないようにする。
    pub fn checkout(
        &mut self,
        book_id: BookId,
        borrower_id: BorrowerId,
        borrowed_at: DateTime<Utc>,
    ) -> Result<LoanRecord, BorrowBookError> {
        let key = (book_id.clone(), borrower_id.clone());

        if self.loans.contains_key(&key) {
            return Err(BorrowBookError::AlreadyBorrowed);
        }

        match self.inventory.get_mut(&book_id) {
            Some(copies) if *copies > 0 => *copies -= 1,
            _ => return Err(BorrowBookError::OutOfStock),
        }

        let record = LoanRecord {
            book_id,
            borrower_id,
            borrowed_at,
        };
        self.loans.insert(key, record.clone());

        Ok(record)
    }

    /// 1冊の返却を受け付ける
    ///
    /// (書籍, 借り手) の貸出記録が存在しなければ拒否。
    /// 別の借り手による返却は記録が一致しないため失敗し、
    /// 元の借り手の貸出は影響を受けない。
    pub fn check_in(
        &mut self,
        book_id: &BookId,
        borrower_id: &BorrowerId,
    ) -> Result<LoanRecord, ReturnBookError> {
        let key = (book_id.clone(), borrower_id.clone());

        let record = self
            .loans
            .remove(&key)
            .ok_or(ReturnBookError::LoanNotFound)?;

        *self.inventory.entry(book_id.clone()).or_insert(0) += 1;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn book(id: &str) -> BookId {
        BookId::new(id)
    }

    fn borrower(id: &str) -> BorrowerId {
        BorrowerId::new(id)
    }

    #[test]
    fn test_unknown_book_has_zero_copies() {
        let ledger = LendingLedger::new();
        assert_eq!(ledger.available_copies(&book("book3")), 0);
    }

    #[test]
    fn test_register_creates_entry() {
        let mut ledger = LendingLedger::new();
        ledger.register(book("book1"), 3);
        assert_eq!(ledger.available_copies(&book("book1")), 3);
    }

    #[test]
    fn test_register_is_additive() {
        let mut ledger = LendingLedger::new();
        ledger.register(book("book1"), 3);
        ledger.register(book("book1"), 2);
        assert_eq!(ledger.available_copies(&book("book1")), 5);
    }

    #[test]
    fn test_register_zero_copies() {
        let mut ledger = LendingLedger::new();
        ledger.register(book("book2"), 0);
        assert_eq!(ledger.available_copies(&book("book2")), 0);
    }

    #[test]
    fn test_checkout_decrements_and_creates_loan() {
        let mut ledger = LendingLedger::new();
        ledger.register(book("book1"), 3);

        let result = ledger.checkout(book("book1"), borrower("user"), Utc::now());

        assert!(result.is_ok());
        assert_eq!(ledger.available_copies(&book("book1")), 2);
        assert!(ledger.has_active_loan(&book("book1"), &borrower("user")));
    }

    #[test]
    fn test_checkout_fails_when_out_of_stock() {
        let mut ledger = LendingLedger::new();
        ledger.register(book("book2"), 0);

        let result = ledger.checkout(book("book2"), borrower("user"), Utc::now());

        assert_eq!(result.unwrap_err(), BorrowBookError::OutOfStock);
        assert_eq!(ledger.available_copies(&book("book2")), 0);
        assert!(!ledger.has_active_loan(&book("book2"), &borrower("user")));
    }

    #[test]
    fn test_checkout_fails_for_unknown_book() {
        let mut ledger = LendingLedger::new();

        let result = ledger.checkout(book("book3"), borrower("user"), Utc::now());

        assert_eq!(result.unwrap_err(), BorrowBookError::OutOfStock);
    }

    #[test]
    fn test_checkout_rejects_second_loan_for_same_pair() {
        let mut ledger = LendingLedger::new();
        ledger.register(book("book1"), 3);

        ledger
            .checkout(book("book1"), borrower("user"), Utc::now())
            .unwrap();
        let second = ledger.checkout(book("book1"), borrower("user"), Utc::now());

        assert_eq!(second.unwrap_err(), BorrowBookError::AlreadyBorrowed);
        // 2回目の拒否は在庫を減らさない
        assert_eq!(ledger.available_copies(&book("book1")), 2);
    }

    #[test]
    fn test_checkout_duplicate_rejected_even_when_out_of_stock() {
        // 重複チェックは在庫チェックより先：最後の1冊を借りた本人の
        // 再貸出はOutOfStockではなくAlreadyBorrowedで拒否される
        let mut ledger = LendingLedger::new();
        ledger.register(book("book1"), 1);

        ledger
            .checkout(book("book1"), borrower("user"), Utc::now())
            .unwrap();
        let second = ledger.checkout(book("book1"), borrower("user"), Utc::now());

        assert_eq!(second.unwrap_err(), BorrowBookError::AlreadyBorrowed);
    }

    #[test]
    fn test_check_in_restores_availability() {
        let mut ledger = LendingLedger::new();
        ledger.register(book("book1"), 3);
        ledger
            .checkout(book("book1"), borrower("user"), Utc::now())
            .unwrap();

        let result = ledger.check_in(&book("book1"), &borrower("user"));

        assert!(result.is_ok());
        assert_eq!(ledger.available_copies(&book("book1")), 3);
        assert!(!ledger.has_active_loan(&book("book1"), &borrower("user")));
    }

    #[test]
    fn test_check_in_fails_without_loan() {
        let mut ledger = LendingLedger::new();
        ledger.register(book("book1"), 3);

        let result = ledger.check_in(&book("book1"), &borrower("user"));

        assert_eq!(result.unwrap_err(), ReturnBookError::LoanNotFound);
        assert_eq!(ledger.available_copies(&book("book1")), 3);
    }

    #[test]
    fn test_check_in_fails_for_wrong_borrower() {
        let mut ledger = LendingLedger::new();
        ledger.register(book("book1"), 3);
        ledger
            .checkout(book("book1"), borrower("user"), Utc::now())
            .unwrap();

        let result = ledger.check_in(&book("book1"), &borrower("user1"));

        assert_eq!(result.unwrap_err(), ReturnBookError::LoanNotFound);
        // 元の借り手の貸出は無傷のまま
        assert_eq!(ledger.available_copies(&book("book1")), 2);
        assert!(ledger.has_active_loan(&book("book1"), &borrower("user")));
    }

    #[test]
    fn test_availability_never_exceeds_registered_total() {
        let mut ledger = LendingLedger::new();
        ledger.register(book("book1"), 2);

        ledger
            .checkout(book("book1"), borrower("a"), Utc::now())
            .unwrap();
        ledger
            .checkout(book("book1"), borrower("b"), Utc::now())
            .unwrap();
        assert_eq!(ledger.available_copies(&book("book1")), 0);

        // 3人目は在庫切れで拒否され、在庫は負にならない
        let third = ledger.checkout(book("book1"), borrower("c"), Utc::now());
        assert_eq!(third.unwrap_err(), BorrowBookError::OutOfStock);
        assert_eq!(ledger.available_copies(&book("book1")), 0);

        ledger.check_in(&book("book1"), &borrower("a")).unwrap();
        ledger.check_in(&book("book1"), &borrower("b")).unwrap();
        assert_eq!(ledger.available_copies(&book("book1")), 2);
    }

    #[test]
    fn test_loan_record_carries_borrowed_at() {
        let mut ledger = LendingLedger::new();
        ledger.register(book("book1"), 1);
        let borrowed_at = Utc::now();

        let record = ledger
            .checkout(book("book1"), borrower("user"), borrowed_at)
            .unwrap();

        assert_eq!(record.book_id, book("book1"));
        assert_eq!(record.borrower_id, borrower("user"));
        assert_eq!(record.borrowed_at, borrowed_at);

        let returned = ledger.check_in(&book("book1"), &borrower("user")).unwrap();
        assert_eq!(returned, record);
    }
}
