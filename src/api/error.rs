use crate::application::circulation::CirculationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
/// 貸出・返却の拒否（在庫切れなど）はエラーではなく結果型で表現されるため、
/// ここを通るのは引数エラーとコラボレーター障害のみ。
#[derive(Debug)]
pub struct ApiError(CirculationError);

impl From<CirculationError> for ApiError {
    fn from(err: CirculationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self.0 {
            // 400 Bad Request - 引数バリデーション違反
            CirculationError::InvalidOverdueDays(_) => (
                StatusCode::BAD_REQUEST,
                "INVALID_ARGUMENT",
                "Overdue days must not be negative",
            ),

            // 500 Internal Server Error - コラボレーター障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            CirculationError::EligibilityServiceError(ref e) => {
                tracing::error!("Eligibility service error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ELIGIBILITY_SERVICE_ERROR",
                    "Eligibility service error",
                )
            }
            CirculationError::NotificationServiceError(ref e) => {
                tracing::error!("Notification service error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "NOTIFICATION_SERVICE_ERROR",
                    "Notification service error",
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
