use crate::domain::value_objects::BorrowerId;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 通知サービスポート
///
/// 借り手への通知配信メカニズムを抽象化する。
/// 実装はメール、SMS、プッシュ通知などが考えられる。
///
/// メッセージ文字列は観測可能な契約の一部であり、台帳側が組み立てる。
/// 台帳から見ればfire-and-forget：配信失敗は呼び出し元へそのまま伝播する。
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// 借り手にメッセージを送信する
    async fn notify(&self, borrower_id: &BorrowerId, message: &str) -> Result<()>;
}
