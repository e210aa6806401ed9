use crate::domain::value_objects::BorrowerId;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 貸出資格サービスポート
///
/// 貸出コンテキストと会員コンテキストの境界を維持する。
/// 貸出コンテキストはBorrowerIdのみを知り、アカウントの詳細は知らない。
#[async_trait]
pub trait EligibilityService: Send + Sync {
    /// 借り手のアカウントが現在有効か確認する
    ///
    /// 貸出前の資格チェックに使用される。副作用のない高速なクエリを想定。
    async fn is_active(&self, borrower_id: &BorrowerId) -> Result<bool>;
}
