use crate::domain::value_objects::BorrowerId;
use crate::ports::notification_service::{NotificationService as NotificationServiceTrait, Result};
use async_trait::async_trait;

/// NotificationServiceのログ実装
///
/// 通知をtracingのログ行として出力する。実際の配信チャネル
/// （メール・SMSなど）はこのコンテキストの責務外なので、
/// 本番の合成ではこのスタンドインを使う。
pub struct NotificationService;

impl NotificationService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn notify(&self, borrower_id: &BorrowerId, message: &str) -> Result<()> {
        tracing::info!(borrower_id = %borrower_id, "notification: {}", message);
        Ok(())
    }
}
