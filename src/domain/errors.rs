/// 貸出のエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowBookError {
    /// 同じ借り手が同じ書籍を返却せずに再度借りようとした
    AlreadyBorrowed,
    /// 貸出可能な在庫がない（未登録の書籍を含む）
    OutOfStock,
}

/// 返却のエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnBookError {
    /// (書籍, 借り手) に対応する貸出記録が存在しない
    LoanNotFound,
}

/// 延滞料金計算のエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LateFeeError {
    /// 延滞日数が負の値
    NegativeOverdueDays(i64),
}
