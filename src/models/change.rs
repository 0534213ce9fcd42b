use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::{Result, StonksError};
use crate::util::{format_money, format_percent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn verb(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
        }
    }

    /// Contribution to the run's up/down tally.
    pub fn tally(&self) -> i32 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Percent-change bracket. Thresholds at ±7 and ±14.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Moon,
    Rocket,
    Rising,
    Falling,
    Burning,
    Crash,
}

impl Tier {
    pub fn from_percent(percent: Decimal) -> Self {
        if percent >= dec!(14) {
            Tier::Moon
        } else if percent >= dec!(7) {
            Tier::Rocket
        } else if percent >= Decimal::ZERO {
            Tier::Rising
        } else if percent > dec!(-7) {
            Tier::Falling
        } else if percent > dec!(-14) {
            Tier::Burning
        } else {
            Tier::Crash
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Tier::Moon => "🚀🌕",
            Tier::Rocket => "🚀",
            Tier::Rising => "📈",
            Tier::Falling => "📉",
            Tier::Burning => "🔥",
            Tier::Crash => "🔥💥",
        }
    }
}

/// Day-over-day move for one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeResult {
    pub symbol: String,
    pub previous_close: Decimal,
    pub current_close: Decimal,
    pub changed_value: Decimal,
    pub changed_percent: Decimal,
    pub direction: Direction,
    pub tier: Tier,
}

impl ChangeResult {
    pub fn compute(symbol: &str, previous_close: Decimal, current_close: Decimal) -> Result<Self> {
        if previous_close.is_zero() {
            return Err(StonksError::upstream(symbol, "previous close is zero"));
        }

        let changed_value = current_close - previous_close;
        let changed_percent = changed_value
            .checked_div(previous_close)
            .and_then(|ratio| ratio.checked_mul(dec!(100)))
            .ok_or_else(|| StonksError::upstream(symbol, "percent change overflowed"))?;

        let direction = if changed_percent >= Decimal::ZERO {
            Direction::Up
        } else {
            Direction::Down
        };

        Ok(Self {
            symbol: symbol.to_string(),
            previous_close,
            current_close,
            changed_value,
            changed_percent,
            direction,
            tier: Tier::from_percent(changed_percent),
        })
    }

    /// Field text, e.g. `Up 🚀 7.00% to $107.00`.
    pub fn describe(&self) -> String {
        format!(
            "{} {} {}% to ${}",
            self.direction,
            self.tier.emoji(),
            format_percent(self.changed_percent),
            format_money(self.current_close)
        )
    }
}
