use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookId, BorrowerId};

/// コマンド：書籍の在庫を登録する
///
/// 同じ書籍IDへの再登録は加算（置き換えではない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterCopies {
    pub book_id: BookId,
    pub copies: u32,
}

/// コマンド：書籍を貸し出す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowBook {
    pub book_id: BookId,
    pub borrower_id: BorrowerId,
    pub borrowed_at: DateTime<Utc>,
}

/// コマンド：書籍を返却する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBook {
    pub book_id: BookId,
    pub borrower_id: BorrowerId,
}
