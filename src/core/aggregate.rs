use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::DataRow;

/// Direction of a signed metric, used for up/down styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Self::Up
        } else if value < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }
}

/// Headline totals across every row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub current_total: f64,
    pub previous_total: f64,
    pub absolute_delta: f64,
    /// Percent change against the previous period, rounded to one decimal.
    /// `0.0` when the previous total is zero.
    pub percent_delta: f64,
    pub secondary_total: f64,
}

impl SeriesSummary {
    #[must_use]
    pub fn magnitude_trend(self) -> Trend {
        Trend::of(self.absolute_delta)
    }

    #[must_use]
    pub fn secondary_trend(self) -> Trend {
        Trend::of(self.secondary_total)
    }
}

#[must_use]
pub fn aggregate(rows: &[DataRow]) -> SeriesSummary {
    let (current_total, previous_total, secondary_total) = rows.iter().fold(
        (0.0, 0.0, 0.0),
        |(current, previous, secondary), row| {
            (
                current + row.primary_magnitude,
                previous + row.previous_magnitude,
                secondary + row.secondary_delta,
            )
        },
    );
    let absolute_delta = current_total - previous_total;

    SeriesSummary {
        current_total,
        previous_total,
        absolute_delta,
        percent_delta: percent_change(absolute_delta, previous_total),
        secondary_total,
    }
}

/// `delta / base * 100` rounded half away from zero to one decimal.
#[must_use]
pub fn percent_change(delta: f64, base: f64) -> f64 {
    if base == 0.0 || !base.is_finite() || !delta.is_finite() {
        return 0.0;
    }
    let raw = delta / base * 100.0;
    let rounded = Decimal::from_f64(raw)
        .map(|value| value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|value| value.to_f64())
        .unwrap_or(0.0);
    // Normalizes -0.0 so the label never reads "-0.0".
    if rounded == 0.0 { 0.0 } else { rounded }
}
