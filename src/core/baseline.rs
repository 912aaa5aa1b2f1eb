use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Baseline used for deltas: day-over-day or week-over-week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompareMode {
    #[default]
    Daily,
    Weekly,
}

impl CompareMode {
    /// Length of the period ending at the base date: one day or one week.
    #[must_use]
    pub const fn window_days(self) -> u64 {
        match self {
            Self::Daily => 1,
            Self::Weekly => 7,
        }
    }

    /// Calendar days between the base date and the comparison date.
    ///
    /// Daily compares against the day before. Weekly compares against the
    /// first day of the seven-day window ending at the base date, so
    /// `2025-01-07` pairs with `2025-01-01`.
    #[must_use]
    pub const fn lookback_days(self) -> u64 {
        match self {
            Self::Daily => 1,
            Self::Weekly => self.window_days() - 1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Daily => Self::Weekly,
            Self::Weekly => Self::Daily,
        }
    }
}

pub fn parse_base_date(input: &str) -> ChartResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), ISO_DATE_FORMAT).map_err(|err| {
        ChartError::InvalidDate {
            input: input.to_owned(),
            reason: err.to_string(),
        }
    })
}

/// Comparison date for `base`; see [`CompareMode::lookback_days`].
///
/// Calendar-date subtraction; no wall-clock time is involved.
pub fn resolve_previous(base: NaiveDate, mode: CompareMode) -> ChartResult<NaiveDate> {
    days_before(base, mode.lookback_days())
}

fn days_before(base: NaiveDate, days: u64) -> ChartResult<NaiveDate> {
    base.checked_sub_days(Days::new(days))
        .ok_or_else(|| ChartError::InvalidDate {
            input: base.format(ISO_DATE_FORMAT).to_string(),
            reason: format!("no calendar date {days} day(s) earlier"),
        })
}

/// String-in, string-out variant of [`resolve_previous`].
pub fn resolve_previous_str(base: &str, mode: CompareMode) -> ChartResult<String> {
    let previous = resolve_previous(parse_base_date(base)?, mode)?;
    Ok(previous.format(ISO_DATE_FORMAT).to_string())
}

/// Reference date plus comparison mode; the previous date is always derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonContext {
    base_date: NaiveDate,
    compare_mode: CompareMode,
}

impl ComparisonContext {
    #[must_use]
    pub fn new(base_date: NaiveDate, compare_mode: CompareMode) -> Self {
        Self {
            base_date,
            compare_mode,
        }
    }

    pub fn parse(base_date: &str, compare_mode: CompareMode) -> ChartResult<Self> {
        let context = Self::new(parse_base_date(base_date)?, compare_mode);
        context.previous_date()?;
        Ok(context)
    }

    #[must_use]
    pub fn base_date(self) -> NaiveDate {
        self.base_date
    }

    #[must_use]
    pub fn compare_mode(self) -> CompareMode {
        self.compare_mode
    }

    #[must_use]
    pub fn with_mode(mut self, compare_mode: CompareMode) -> Self {
        self.compare_mode = compare_mode;
        self
    }

    #[must_use]
    pub fn with_base_date(mut self, base_date: NaiveDate) -> Self {
        self.base_date = base_date;
        self
    }

    pub fn previous_date(self) -> ChartResult<NaiveDate> {
        resolve_previous(self.base_date, self.compare_mode)
    }

    /// First day of the period ending at the base date: the base date itself
    /// for daily mode, six days earlier for weekly mode.
    pub fn period_start(self) -> ChartResult<NaiveDate> {
        days_before(self.base_date, self.compare_mode.window_days() - 1)
    }

    /// `"2025-01-07 vs 2025-01-06"`.
    pub fn caption(self) -> ChartResult<String> {
        let previous = self.previous_date()?;
        Ok(format!(
            "{} vs {}",
            self.base_date.format(ISO_DATE_FORMAT),
            previous.format(ISO_DATE_FORMAT)
        ))
    }
}
