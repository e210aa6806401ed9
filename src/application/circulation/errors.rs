use thiserror::Error;

use crate::domain::LateFeeError;

/// 貸出管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum CirculationError {
    /// 延滞日数が負の値
    #[error("Overdue days must not be negative (got {0})")]
    InvalidOverdueDays(i64),

    /// EligibilityServiceのエラー
    #[error("Eligibility service error")]
    EligibilityServiceError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// NotificationServiceのエラー
    #[error("Notification service error")]
    NotificationServiceError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<LateFeeError> for CirculationError {
    fn from(err: LateFeeError) -> Self {
        match err {
            LateFeeError::NegativeOverdueDays(days) => CirculationError::InvalidOverdueDays(days),
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CirculationError>;
