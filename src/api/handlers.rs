use crate::application::circulation::{
    BorrowOutcome, ReturnOutcome, ServiceDependencies, available_copies as query_available_copies,
    borrow_book as execute_borrow_book, quote_late_fee as execute_quote_late_fee,
    register_copies as execute_register_copies, return_book as execute_return_book,
};
use crate::domain::value_objects::BookId;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{
        BookAvailabilityResponse, BookReturnedResponse, BorrowBookRequest, ErrorResponse,
        LateFeeQuery, LateFeeResponse, LoanCreatedResponse, RegisterBookRequest, ReturnBookRequest,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /books - 書籍の在庫を登録
///
/// 同じ書籍IDへの再登録は加算。失敗しないため、登録後の在庫数を
/// 照会してそのまま返す。
pub async fn register_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterBookRequest>,
) -> Json<BookAvailabilityResponse> {
    let cmd = req.to_command();
    let book_id = cmd.book_id.clone();

    execute_register_copies(&state.service_deps, cmd);

    // 登録後の在庫を取得して完全な情報を返す
    let available = query_available_copies(&state.service_deps, &book_id);

    Json(BookAvailabilityResponse {
        book_id: book_id.value().to_string(),
        available_copies: available,
    })
}

/// POST /loans - 書籍を貸し出す
///
/// 強制されるビジネスルール:
/// - 借り手のアカウントが有効であること（資格チェックは常に最初）
/// - 在庫があること
/// - 同じ (書籍, 借り手) の未返却の貸出がないこと
///
/// 拒否はビジネスルール違反として422で返し、理由をエラーコードで示す。
pub async fn create_loan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BorrowBookRequest>,
) -> Result<Response, ApiError> {
    let cmd = req.to_command();

    let outcome = execute_borrow_book(&state.service_deps, cmd).await?;

    let response = match outcome {
        BorrowOutcome::Borrowed(record) => (
            StatusCode::CREATED,
            Json(LoanCreatedResponse {
                book_id: record.book_id.value().to_string(),
                borrower_id: record.borrower_id.value().to_string(),
                borrowed_at: record.borrowed_at,
            }),
        )
            .into_response(),
        BorrowOutcome::AccountInactive => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(
                "ACCOUNT_INACTIVE",
                "Borrower account is not active",
            )),
        )
            .into_response(),
        BorrowOutcome::OutOfStock => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(
                "OUT_OF_STOCK",
                "No copies available for loan",
            )),
        )
            .into_response(),
        BorrowOutcome::AlreadyBorrowed => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(
                "ALREADY_BORROWED",
                "Borrower already holds an unreturned copy of this book",
            )),
        )
            .into_response(),
    };

    Ok(response)
}

/// POST /loans/return - 書籍を返却
///
/// 強制されるビジネスルール:
/// - (書籍, 借り手) の貸出記録が存在すること
/// - 返却時に資格の再チェックは行わない
pub async fn return_loan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReturnBookRequest>,
) -> Result<Response, ApiError> {
    let cmd = req.to_command();
    let book_id = cmd.book_id.clone();

    let outcome = execute_return_book(&state.service_deps, cmd).await?;

    let response = match outcome {
        ReturnOutcome::Returned(record) => {
            // 返却後の在庫を取得して確認情報を返す
            let available = query_available_copies(&state.service_deps, &book_id);
            (
                StatusCode::OK,
                Json(BookReturnedResponse {
                    book_id: record.book_id.value().to_string(),
                    borrower_id: record.borrower_id.value().to_string(),
                    available_copies: available,
                }),
            )
                .into_response()
        }
        ReturnOutcome::LoanNotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                "LOAN_NOT_FOUND",
                "No matching loan found for this book and borrower",
            )),
        )
            .into_response(),
    };

    Ok(response)
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /books/:id/availability - 貸出可能数を取得
///
/// 未登録の書籍IDは正常な状態であり、404ではなく0を返す。
pub async fn get_availability(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
) -> Json<BookAvailabilityResponse> {
    let book_id = BookId::new(book_id);
    let available = query_available_copies(&state.service_deps, &book_id);

    Json(BookAvailabilityResponse {
        book_id: book_id.value().to_string(),
        available_copies: available,
    })
}

/// GET /fees/late - 延滞料金の見積もり
///
/// クエリパラメータ:
/// - overdue_days: 延滞日数（必須、0以上）
/// - bestseller: ベストセラーか（オプション、省略時false）
/// - premium_member: プレミアム会員か（オプション、省略時false）
///
/// 負の延滞日数は400 INVALID_ARGUMENT。
pub async fn quote_late_fee(
    State(_state): State<Arc<AppState>>,
    Query(query): Query<LateFeeQuery>,
) -> Result<Json<LateFeeResponse>, ApiError> {
    let fee = execute_quote_late_fee(query.overdue_days, query.bestseller, query.premium_member)?;

    Ok(Json(LateFeeResponse {
        overdue_days: query.overdue_days,
        bestseller: query.bestseller,
        premium_member: query.premium_member,
        fee,
    }))
}
