use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::LateFeeError;

/// 1日あたりの基本延滞料金
pub const DAILY_LATE_FEE: Decimal = dec!(0.50);

/// ベストセラーの1日あたり延滞料金（基本料金の置き換え、加算ではない）
pub const BESTSELLER_DAILY_LATE_FEE: Decimal = dec!(0.75);

/// プレミアム会員の割引率（20%引き = 0.8倍）
pub const PREMIUM_MEMBER_RATE: Decimal = dec!(0.8);

/// 純粋関数：延滞料金を計算する
///
/// ビジネスルール：
/// - 延滞0日なら他のフラグに関わらず0
/// - 1日あたり0.50、ベストセラーは0.75
/// - プレミアム会員はベストセラー調整後の日額から20%引き
/// - 合計 = 日額 × 延滞日数
///
/// 二進浮動小数点の丸め誤差を避けるため、金額は`Decimal`で
/// 厳密に計算し、小数点以下2桁に丸めて返す。
///
/// # エラー
/// 延滞日数が負の場合は`LateFeeError::NegativeOverdueDays`。
/// 何も計算されない。
pub fn calculate_late_fee(
    overdue_days: i64,
    is_bestseller: bool,
    is_premium_member: bool,
) -> Result<Decimal, LateFeeError> {
    if overdue_days < 0 {
        return Err(LateFeeError::NegativeOverdueDays(overdue_days));
    }

    if overdue_days == 0 {
        return Ok(dec!(0.00));
    }

    let mut daily_rate = if is_bestseller {
        BESTSELLER_DAILY_LATE_FEE
    } else {
        DAILY_LATE_FEE
    };

    if is_premium_member {
        daily_rate *= PREMIUM_MEMBER_RATE;
    }

    Ok((daily_rate * Decimal::from(overdue_days)).round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_late_fee_table() {
        // (延滞日数, ベストセラー, プレミアム会員, 期待額)
        let cases = [
            (0, false, false, dec!(0.00)),
            (1, false, false, dec!(0.50)),
            (1, true, false, dec!(0.75)),
            (1, false, true, dec!(0.40)),
            (1, true, true, dec!(0.60)),
            (10, true, false, dec!(7.50)),
            (10, true, true, dec!(6.00)),
        ];

        for (days, bestseller, premium, expected) in cases {
            let fee = calculate_late_fee(days, bestseller, premium).unwrap();
            assert_eq!(
                fee, expected,
                "days={days} bestseller={bestseller} premium={premium}"
            );
        }
    }

    #[test]
    fn test_zero_days_ignores_flags() {
        assert_eq!(calculate_late_fee(0, true, false).unwrap(), dec!(0.00));
        assert_eq!(calculate_late_fee(0, false, true).unwrap(), dec!(0.00));
        assert_eq!(calculate_late_fee(0, true, true).unwrap(), dec!(0.00));
    }

    #[test]
    fn test_negative_days_is_an_error() {
        let result = calculate_late_fee(-1, false, false);
        assert_eq!(result.unwrap_err(), LateFeeError::NegativeOverdueDays(-1));
    }

    #[test]
    fn test_fee_has_two_decimal_places() {
        // 0.75 × 0.8 = 0.60（0.6000ではなく0.60として表現される）
        let fee = calculate_late_fee(1, true, true).unwrap();
        assert_eq!(fee.to_string(), "0.60");

        let fee = calculate_late_fee(10, true, true).unwrap();
        assert_eq!(fee.to_string(), "6.00");
    }
}
