use crate::domain::commands::{BorrowBook, RegisterCopies, ReturnBook};
use crate::domain::{
    BookId, BorrowBookError, LendingLedger, LoanRecord, ReturnBookError,
};
use crate::ports::{EligibilityService, NotificationService};
use std::sync::{Arc, Mutex};

use super::errors::{CirculationError, Result};

/// アカウント無効時の通知メッセージ（観測可能な契約の一部）
const ACCOUNT_INACTIVE_MESSAGE: &str = "Your account is not active.";

fn borrowed_message(book_id: &BookId) -> String {
    format!("You have borrowed the book: {book_id}")
}

fn returned_message(book_id: &BookId) -> String {
    format!("You have returned the book: {book_id}")
}

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、純粋な関数に依存関係を渡す。
///
/// 台帳の状態はこの合成単位に閉じる。1つの論理操作につき
/// Mutexを1回ロックし、コラボレーターの呼び出しはロックの外で行う
/// （通知や資格チェックが遅くても台帳を塞がない）。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub ledger: Arc<Mutex<LendingLedger>>,
    pub eligibility_service: Arc<dyn EligibilityService>,
    pub notification_service: Arc<dyn NotificationService>,
}

/// 貸出の結果
///
/// 拒否はエラーではなく正常な状態（§エラー設計）。
/// 拒否理由は配信層がHTTPステータスとエラーコードに変換する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowOutcome {
    /// 貸出成功
    Borrowed(LoanRecord),
    /// アカウントが無効（借り手に通知済み）
    AccountInactive,
    /// 在庫なし（通知しない）
    OutOfStock,
    /// 同じ書籍の未返却の貸出が既にある（通知しない）
    AlreadyBorrowed,
}

impl BorrowOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, BorrowOutcome::Borrowed(_))
    }
}

/// 返却の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// 返却成功
    Returned(LoanRecord),
    /// 対応する貸出記録が存在しない（通知しない）
    LoanNotFound,
}

impl ReturnOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, ReturnOutcome::Returned(_))
    }
}

fn lock_ledger(deps: &ServiceDependencies) -> std::sync::MutexGuard<'_, LendingLedger> {
    deps.ledger.lock().expect("lending ledger mutex poisoned")
}

/// 書籍の在庫を登録する
///
/// 加算的で失敗しない。戻り値なし（現在値はavailable_copiesで照会する）。
pub fn register_copies(deps: &ServiceDependencies, cmd: RegisterCopies) {
    lock_ledger(deps).register(cmd.book_id, cmd.copies);
}

/// 現在の貸出可能数を照会する
///
/// 未登録の書籍は0を返す。未知のIDは正常な状態でありエラーではない。
pub fn available_copies(deps: &ServiceDependencies, book_id: &BookId) -> u32 {
    lock_ledger(deps).available_copies(book_id)
}

/// 書籍を貸し出す
///
/// ビジネスルール：
/// - 資格チェックは常に最初。無効なアカウントには在庫を確認せずに
///   「アカウント無効」を通知して拒否する
/// - 在庫0（未登録を含む）は通知なしで拒否
/// - 成功時は在庫を1減らし、貸出記録を作成し、確認を通知する
///
/// 通知は成功パスとアカウント無効パスでのみ送信される。
/// コラボレーターの失敗は捕捉せず型付きエラーとして伝播する。
/// 状態変更後の通知失敗は変更をコミットしたままエラーになる。
pub async fn borrow_book(deps: &ServiceDependencies, cmd: BorrowBook) -> Result<BorrowOutcome> {
    let is_active = deps
        .eligibility_service
        .is_active(&cmd.borrower_id)
        .await
        .map_err(CirculationError::EligibilityServiceError)?;

    if !is_active {
        deps.notification_service
            .notify(&cmd.borrower_id, ACCOUNT_INACTIVE_MESSAGE)
            .await
            .map_err(CirculationError::NotificationServiceError)?;
        return Ok(BorrowOutcome::AccountInactive);
    }

    // 台帳の更新は1回のロックで完結させ、通知はロックの外で行う
    let checkout = lock_ledger(deps).checkout(
        cmd.book_id.clone(),
        cmd.borrower_id.clone(),
        cmd.borrowed_at,
    );

    match checkout {
        Ok(record) => {
            deps.notification_service
                .notify(&cmd.borrower_id, &borrowed_message(&cmd.book_id))
                .await
                .map_err(CirculationError::NotificationServiceError)?;

            tracing::debug!(
                book_id = %cmd.book_id,
                borrower_id = %cmd.borrower_id,
                "book borrowed"
            );

            Ok(BorrowOutcome::Borrowed(record))
        }
        Err(BorrowBookError::AlreadyBorrowed) => Ok(BorrowOutcome::AlreadyBorrowed),
        Err(BorrowBookError::OutOfStock) => Ok(BorrowOutcome::OutOfStock),
    }
}

/// 書籍を返却する
///
/// ビジネスルール：
/// - (書籍, 借り手) の貸出記録が存在すること。なければ通知なしで拒否
/// - 返却時に資格の再チェックは行わない
/// - 成功時は記録を削除し、在庫を1増やし、確認を通知する
pub async fn return_book(deps: &ServiceDependencies, cmd: ReturnBook) -> Result<ReturnOutcome> {
    let check_in = lock_ledger(deps).check_in(&cmd.book_id, &cmd.borrower_id);

    match check_in {
        Ok(record) => {
            deps.notification_service
                .notify(&cmd.borrower_id, &returned_message(&cmd.book_id))
                .await
                .map_err(CirculationError::NotificationServiceError)?;

            tracing::debug!(
                book_id = %cmd.book_id,
                borrower_id = %cmd.borrower_id,
                "book returned"
            );

            Ok(ReturnOutcome::Returned(record))
        }
        Err(ReturnBookError::LoanNotFound) => Ok(ReturnOutcome::LoanNotFound),
    }
}
