use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

// 日期工具
pub fn local_date<Tz: TimeZone>(now: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    now.with_timezone(tz).date_naive()
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// 数字格式化
fn round_to(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp as usize, rounded)
}

/// Magnitude of a percent move. Moves strictly inside ±0.1 keep four decimals
/// so they do not render as `0.00`.
pub fn format_percent(percent: Decimal) -> String {
    let dp = if percent > dec!(-0.1) && percent < dec!(0.1) { 4 } else { 2 };
    round_to(percent.abs(), dp)
}

pub fn format_money(amount: Decimal) -> String {
    round_to(amount, 2)
}
