use rust_decimal::Decimal;

use crate::domain::late_fee::calculate_late_fee;

use super::errors::Result;

/// 延滞料金の見積もりを返す
///
/// 計算本体はドメイン層の純粋関数。ここではドメインエラーを
/// アプリケーション層のエラーに変換するだけ。
pub fn quote_late_fee(
    overdue_days: i64,
    is_bestseller: bool,
    is_premium_member: bool,
) -> Result<Decimal> {
    Ok(calculate_late_fee(
        overdue_days,
        is_bestseller,
        is_premium_member,
    )?)
}
