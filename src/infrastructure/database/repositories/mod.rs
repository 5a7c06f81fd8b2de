pub mod order_repository;
pub mod product_repository;
pub mod repository_provider;

pub use order_repository::SeaOrmOrderRepository;
pub use product_repository::SeaOrmProductRepository;
pub use repository_provider::SeaOrmRepositoryProvider;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::shared::{AppResult, DomainError};

/// Money at rest is integer cents; the domain speaks two-decimal Decimal.
pub(crate) fn cents_to_decimal(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Scales a two-decimal amount to cents. Prices are bounded, but order totals
/// are sums over unbounded quantities and can exceed an i64; that surfaces as
/// an error rather than a wrapped or truncated value.
pub(crate) fn decimal_to_cents(value: Decimal) -> AppResult<i64> {
    value
        .round_dp(2)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.to_i64())
        .ok_or_else(|| {
            DomainError::InvalidRequest(format!("amount {value} exceeds the storable range")).into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cents_round_trip() {
        assert_eq!(decimal_to_cents(cents_to_decimal(10_50)).unwrap(), 10_50);
        assert_eq!(decimal_to_cents(Decimal::ZERO).unwrap(), 0);
    }

    #[test]
    fn overflowing_total_is_rejected_not_zeroed() {
        // Max storable price times the largest representable quantity scales
        // past i64; this must error, never collapse to a default.
        let total = Decimal::new(9_999_999_999, 2) * Decimal::from(i32::MAX);
        assert!(decimal_to_cents(total).is_err());
    }
}
