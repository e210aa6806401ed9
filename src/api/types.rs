use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::commands::{BorrowBook, RegisterCopies, ReturnBook};
use crate::domain::value_objects::{BookId, BorrowerId};

/// リクエスト（POST /books）
#[derive(Debug, Deserialize)]
pub struct RegisterBookRequest {
    pub book_id: String,
    pub copies: u32,
}

impl RegisterBookRequest {
    pub fn to_command(&self) -> RegisterCopies {
        RegisterCopies {
            book_id: BookId::new(&self.book_id),
            copies: self.copies,
        }
    }
}

/// 在庫レスポンス（POST /books と GET /books/:id/availability）
#[derive(Debug, Serialize, Deserialize)]
pub struct BookAvailabilityResponse {
    pub book_id: String,
    pub available_copies: u32,
}

/// リクエスト（POST /loans）
#[derive(Debug, Deserialize)]
pub struct BorrowBookRequest {
    pub book_id: String,
    pub borrower_id: String,
}

impl BorrowBookRequest {
    pub fn to_command(&self) -> BorrowBook {
        BorrowBook {
            book_id: BookId::new(&self.book_id),
            borrower_id: BorrowerId::new(&self.borrower_id),
            borrowed_at: Utc::now(),
        }
    }
}

/// 貸出成功レスポンス（POST /loans）
#[derive(Debug, Serialize, Deserialize)]
pub struct LoanCreatedResponse {
    pub book_id: String,
    pub borrower_id: String,
    pub borrowed_at: DateTime<Utc>,
}

/// リクエスト（POST /loans/return）
#[derive(Debug, Deserialize)]
pub struct ReturnBookRequest {
    pub book_id: String,
    pub borrower_id: String,
}

impl ReturnBookRequest {
    pub fn to_command(&self) -> ReturnBook {
        ReturnBook {
            book_id: BookId::new(&self.book_id),
            borrower_id: BorrowerId::new(&self.borrower_id),
        }
    }
}

/// 返却成功レスポンス（POST /loans/return）
#[derive(Debug, Serialize, Deserialize)]
pub struct BookReturnedResponse {
    pub book_id: String,
    pub borrower_id: String,
    pub available_copies: u32,
}

/// 延滞料金見積もりのクエリパラメータ（GET /fees/late）
///
/// フラグは省略時false。
#[derive(Debug, Deserialize)]
pub struct LateFeeQuery {
    pub overdue_days: i64,
    #[serde(default)]
    pub bestseller: bool,
    #[serde(default)]
    pub premium_member: bool,
}

/// 延滞料金レスポンス（GET /fees/late）
///
/// feeはDecimalの厳密な文字列としてシリアライズされる（例: "6.00"）。
#[derive(Debug, Serialize, Deserialize)]
pub struct LateFeeResponse {
    pub overdue_days: i64,
    pub bestseller: bool,
    pub premium_member: bool,
    pub fee: Decimal,
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
