use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Tick count used by the magnitude (bar) axis.
pub const PRIMARY_TICK_COUNT: usize = 5;
/// Divisions reserved below zero on the delta (line) axis.
pub const DELTA_NEGATIVE_TICKS: usize = 2;
/// Divisions reserved above zero on the delta (line) axis.
pub const DELTA_POSITIVE_TICKS: usize = 3;

/// Tick values for one axis; axes rarely carry more than a handful of ticks.
pub type TickValues = SmallVec<[f64; 8]>;

/// Returns a "nice" axis step from the canonical set `{1, 2, 5, 10} x 10^k`.
///
/// `max_observed <= 0` (or non-finite) yields `1.0` so an empty axis still
/// renders. A `desired_ticks` of zero is treated as one.
#[must_use]
pub fn resolve_step(max_observed: f64, desired_ticks: usize) -> f64 {
    if !max_observed.is_finite() || max_observed <= 0.0 {
        return 1.0;
    }

    let ticks = desired_ticks.max(1) as f64;
    let raw_step = max_observed / ticks;
    let magnitude = 10.0_f64.powf(raw_step.log10().floor());
    if !magnitude.is_finite() || magnitude <= 0.0 {
        return 1.0;
    }

    let normalized = raw_step / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick layout for both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleLayout {
    pub primary_ticks: usize,
    pub delta_negative_ticks: usize,
    pub delta_positive_ticks: usize,
}

impl Default for ScaleLayout {
    fn default() -> Self {
        Self {
            primary_ticks: PRIMARY_TICK_COUNT,
            delta_negative_ticks: DELTA_NEGATIVE_TICKS,
            delta_positive_ticks: DELTA_POSITIVE_TICKS,
        }
    }
}

impl ScaleLayout {
    pub fn validate(self) -> ChartResult<Self> {
        if self.primary_ticks == 0 {
            return Err(ChartError::InvalidData(
                "primary axis tick count must be >= 1".to_owned(),
            ));
        }
        if self.delta_negative_ticks == 0 || self.delta_positive_ticks == 0 {
            return Err(ChartError::InvalidData(
                "delta axis needs at least one tick on each side of zero".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Magnitude axis: `0..=max_value` in `tick_count` steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrimaryScale {
    pub max_value: f64,
    pub step_value: f64,
    pub tick_count: usize,
}

impl PrimaryScale {
    /// Resolves the axis from the largest observed magnitude.
    ///
    /// The step is snapped upward, so `max_value` is normally at or above
    /// `max_observed`; only the step, not the data, decides the range.
    #[must_use]
    pub fn resolve(max_observed: f64, tick_count: usize) -> Self {
        let tick_count = tick_count.max(1);
        let step_value = resolve_step(max_observed, tick_count);
        Self {
            max_value: step_value * tick_count as f64,
            step_value,
            tick_count,
        }
    }

    #[must_use]
    pub fn from_magnitudes(magnitudes: impl IntoIterator<Item = f64>, tick_count: usize) -> Self {
        Self::resolve(finite_max(magnitudes), tick_count)
    }

    #[must_use]
    pub fn tick_values(self) -> TickValues {
        (0..=self.tick_count)
            .map(|index| index as f64 * self.step_value)
            .collect()
    }
}

/// Signed delta axis straddling zero with a fixed asymmetric split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeltaScale {
    pub min_value: f64,
    pub max_value: f64,
    pub step_value: f64,
    pub negative_ticks: usize,
    pub positive_ticks: usize,
}

impl DeltaScale {
    /// Resolves the axis so both sides of zero cover `max_abs_delta`.
    #[must_use]
    pub fn resolve(max_abs_delta: f64, layout: ScaleLayout) -> Self {
        let max_abs = max_abs_delta.abs();
        Self::resolve_split(max_abs, max_abs, layout)
    }

    /// Resolves the axis from the deepest negative and highest positive
    /// delta, given as magnitudes.
    ///
    /// Each side needs its own step to fit into its tick count; the larger
    /// one wins so no delta falls outside the axis. The step never drops
    /// below `1` so integer counts keep integer ticks.
    #[must_use]
    pub fn resolve_split(max_negative: f64, max_positive: f64, layout: ScaleLayout) -> Self {
        let negative_ticks = layout.delta_negative_ticks.max(1);
        let positive_ticks = layout.delta_positive_ticks.max(1);
        let step_value = resolve_step(max_negative.abs(), negative_ticks)
            .max(resolve_step(max_positive.abs(), positive_ticks))
            .max(1.0);
        Self {
            min_value: -(negative_ticks as f64) * step_value,
            max_value: positive_ticks as f64 * step_value,
            step_value,
            negative_ticks,
            positive_ticks,
        }
    }

    #[must_use]
    pub fn from_deltas(deltas: impl IntoIterator<Item = f64>, layout: ScaleLayout) -> Self {
        let (negative, positive): (Vec<f64>, Vec<f64>) = deltas
            .into_iter()
            .filter(|value| value.is_finite())
            .partition(|value| *value < 0.0);
        Self::resolve_split(
            finite_max(negative.into_iter().map(f64::abs)),
            finite_max(positive),
            layout,
        )
    }

    /// True when `value` lies on or inside the axis range.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min_value && value <= self.max_value
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max_value - self.min_value
    }

    /// Bottom to top, always including zero.
    #[must_use]
    pub fn tick_values(self) -> TickValues {
        let negative = self.negative_ticks as isize;
        let positive = self.positive_ticks as isize;
        (-negative..=positive)
            .map(|index| index as f64 * self.step_value)
            .collect()
    }
}

/// Largest finite value, or `0` when there is none.
fn finite_max(values: impl IntoIterator<Item = f64>) -> f64 {
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .max()
        .map_or(0.0, |value| value.0.max(0.0))
}
