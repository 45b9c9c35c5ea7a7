//! 金额工具
//!
//! Amounts are stored and serialized as `f64` with two decimals. Arithmetic
//! happens in `Decimal` and is rounded once on the way out.

use rust_decimal::prelude::*;

const DECIMAL_PLACES: u32 = 2;

/// A cent of slack when checking tendered amounts
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Round to 2 decimal places without leaving Decimal
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Check if payment is sufficient (paid >= required - tolerance)
pub fn is_payment_sufficient(paid: f64, required: f64) -> bool {
    to_decimal(paid) >= to_decimal(required) - MONEY_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let a = 0.1_f64;
        let b = 0.2_f64;
        assert_ne!(a + b, 0.3);

        let sum_dec = to_decimal(a) + to_decimal(b);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(to_f64(Decimal::new(12345, 3)), 12.35);
        assert_eq!(to_f64(Decimal::new(-12345, 3)), -12.35);
        assert_eq!(to_f64(Decimal::new(12344, 3)), 12.34);
    }

    #[test]
    fn test_non_finite_becomes_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }

    #[test]
    fn test_payment_sufficient_within_tolerance() {
        assert!(is_payment_sufficient(84.48, 84.48));
        assert!(is_payment_sufficient(84.47, 84.48));
        assert!(!is_payment_sufficient(84.46, 84.48));
        assert!(is_payment_sufficient(100.0, 84.48));
    }
}
