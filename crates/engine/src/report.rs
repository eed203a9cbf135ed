use core_types::{PriceChange, PriceSnapshot, Trend};
use rust_decimal::Decimal;

/// Renders the Markdown alert for one observation. Pure function; the same
/// snapshot and change always produce the same text.
///
/// Two change figures appear deliberately: the locally computed move since
/// the last successful cycle, and the 24-hour change the source itself
/// reports. They measure different windows and are labelled apart.
pub fn price_message(symbol: &str, snapshot: &PriceSnapshot, change: &PriceChange) -> String {
    let trend = trend_marker(change.trend);
    let day_marker = if snapshot.change_24h >= Decimal::ZERO {
        "🟢"
    } else {
        "🔴"
    };

    let lines = [
        format!("{trend} *{symbol} Price Update*"),
        String::new(),
        format!("💰 Price: ${}", fmt_value(snapshot.price)),
        format!(
            "🔄 Since last check: {} ({}) {trend}",
            fmt_signed_price(change.amount),
            fmt_signed_percent(change.percentage)
        ),
        format!(
            "📊 24h change: {day_marker} {}",
            fmt_signed_percent(snapshot.change_24h)
        ),
        format!("🏦 Market cap: {}", fmt_aggregate(snapshot.market_cap)),
        format!("📈 24h volume: {}", fmt_aggregate(snapshot.volume_24h)),
        String::new(),
        format!(
            "🔗 {} · {}",
            snapshot.source,
            snapshot.observed_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
    ];

    lines.join("\n")
}

fn trend_marker(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "📈",
        Trend::Down => "📉",
        Trend::Neutral => "➡️",
    }
}

/// Formats a dollar value: six decimal places below 1.0, four at or above.
fn fmt_value(value: Decimal) -> String {
    if value.abs() < Decimal::ONE {
        format!("{value:.6}")
    } else {
        format!("{value:.4}")
    }
}

fn fmt_signed_price(value: Decimal) -> String {
    let sign = if value < Decimal::ZERO { "-" } else { "+" };
    format!("{sign}${}", fmt_value(value.abs()))
}

fn fmt_signed_percent(value: Decimal) -> String {
    let sign = if value < Decimal::ZERO { "-" } else { "+" };
    format!("{sign}{:.2}%", value.abs())
}

/// Large aggregates (market cap, volume). A source that cannot supply the
/// figure reports zero; that renders as "n/a" rather than a misleading $0.
fn fmt_aggregate(value: Decimal) -> String {
    if value.is_zero() {
        "n/a".to_string()
    } else {
        format!("${value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn snapshot(price: Decimal) -> PriceSnapshot {
        PriceSnapshot {
            price,
            market_cap: dec!(260000000),
            volume_24h: dec!(18000000),
            change_24h: dec!(2.45),
            source: "CoinGecko".to_string(),
            observed_at: Utc.with_ymd_and_hms(2026, 8, 8, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn sub_dollar_prices_use_six_decimals() {
        let snap = snapshot(dec!(0.85));
        let change = PriceChange::between(snap.price, None);
        let message = price_message("IOTX", &snap, &change);
        assert!(message.contains("$0.850000"));
    }

    #[test]
    fn dollar_and_above_prices_use_four_decimals() {
        let snap = snapshot(dec!(1.2345));
        let change = PriceChange::between(snap.price, None);
        let message = price_message("IOTX", &snap, &change);
        assert!(message.contains("$1.2345"));
    }

    #[test]
    fn both_change_windows_are_labelled_apart() {
        let snap = snapshot(dec!(0.0275));
        let change = PriceChange::between(snap.price, Some(dec!(0.025)));
        let message = price_message("IOTX", &snap, &change);

        assert!(message.contains("Since last check: +$0.002500 (+10.00%) 📈"));
        assert!(message.contains("24h change: 🟢 +2.45%"));
    }

    #[test]
    fn downward_move_renders_with_minus_sign() {
        let snap = snapshot(dec!(0.02));
        let change = PriceChange::between(snap.price, Some(dec!(0.025)));
        let message = price_message("IOTX", &snap, &change);
        assert!(message.contains("-$0.005000 (-20.00%) 📉"));
    }

    #[test]
    fn zero_aggregates_render_as_na() {
        let mut snap = snapshot(dec!(0.0261));
        snap.market_cap = Decimal::ZERO;
        snap.volume_24h = Decimal::ZERO;
        snap.source = "DIA".to_string();

        let change = PriceChange::between(snap.price, None);
        let message = price_message("IOTX", &snap, &change);

        assert!(message.contains("Market cap: n/a"));
        assert!(message.contains("24h volume: n/a"));
        assert!(message.contains("🔗 DIA"));
    }

    #[test]
    fn first_cycle_reports_a_neutral_zero_move() {
        let snap = snapshot(dec!(0.85));
        let change = PriceChange::between(snap.price, None);
        let message = price_message("IOTX", &snap, &change);
        assert!(message.contains("Since last check: +$0.000000 (+0.00%) ➡️"));
    }
}
