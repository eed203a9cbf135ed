use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::Trend;

/// One fetched price observation plus auxiliary market data.
///
/// Created fresh on every successful fetch and never mutated. Fields the
/// source cannot supply (e.g. market cap from a minimal quotation endpoint)
/// are zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSnapshot {
    /// The current price in the quote currency.
    pub price: Decimal,
    pub market_cap: Decimal,
    pub volume_24h: Decimal,
    /// The 24-hour change percentage as reported by the source itself.
    pub change_24h: Decimal,
    /// Name of the provider that supplied this observation.
    pub source: String,
    pub observed_at: DateTime<Utc>,
}

/// The delta between the current price and the price from the previous
/// successful cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceChange {
    pub amount: Decimal,
    pub percentage: Decimal,
    pub trend: Trend,
}

impl PriceChange {
    /// Computes the change between `current` and an optional `previous` price.
    ///
    /// The first cycle has no previous price; that is a neutral zero-change
    /// result, not an error. A non-positive previous price yields a zero
    /// percentage rather than dividing by zero.
    pub fn between(current: Decimal, previous: Option<Decimal>) -> Self {
        let Some(previous) = previous else {
            return Self {
                amount: Decimal::ZERO,
                percentage: Decimal::ZERO,
                trend: Trend::Neutral,
            };
        };

        let amount = current - previous;
        let percentage = if previous > Decimal::ZERO {
            amount / previous * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        Self {
            amount,
            percentage,
            trend: Trend::from_delta(amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn first_cycle_is_neutral_zero_change() {
        let change = PriceChange::between(dec!(0.0275), None);
        assert_eq!(change.amount, Decimal::ZERO);
        assert_eq!(change.percentage, Decimal::ZERO);
        assert_eq!(change.trend, Trend::Neutral);
    }

    #[test]
    fn ten_percent_move_up() {
        let change = PriceChange::between(dec!(0.0275), Some(dec!(0.025)));
        assert_eq!(change.amount, dec!(0.0025));
        assert_eq!(change.percentage, dec!(10));
        assert_eq!(change.trend, Trend::Up);
    }

    #[test]
    fn downward_move_is_negative() {
        let change = PriceChange::between(dec!(0.02), Some(dec!(0.025)));
        assert_eq!(change.amount, dec!(-0.005));
        assert_eq!(change.percentage, dec!(-20));
        assert_eq!(change.trend, Trend::Down);
    }

    #[test]
    fn unchanged_price_is_neutral() {
        let change = PriceChange::between(dec!(0.025), Some(dec!(0.025)));
        assert_eq!(change.amount, Decimal::ZERO);
        assert_eq!(change.trend, Trend::Neutral);
    }

    #[test]
    fn zero_previous_price_does_not_divide() {
        let change = PriceChange::between(dec!(0.025), Some(Decimal::ZERO));
        assert_eq!(change.amount, dec!(0.025));
        assert_eq!(change.percentage, Decimal::ZERO);
        assert_eq!(change.trend, Trend::Up);
    }
}
