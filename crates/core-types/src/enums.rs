use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Qualitative direction of a price delta since the last successful cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    /// Derives the trend from the sign of a price delta.
    ///
    /// An exact zero delta is `Neutral`, never `Up` or `Down`.
    pub fn from_delta(amount: Decimal) -> Self {
        if amount > Decimal::ZERO {
            Trend::Up
        } else if amount < Decimal::ZERO {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn trend_follows_delta_sign() {
        assert_eq!(Trend::from_delta(dec!(0.0001)), Trend::Up);
        assert_eq!(Trend::from_delta(dec!(-0.0001)), Trend::Down);
        assert_eq!(Trend::from_delta(Decimal::ZERO), Trend::Neutral);
    }
}
