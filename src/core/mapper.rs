use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Canvas, DataRow, DeltaScale, PrimaryScale};

/// Pixel geometry of one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlottedPoint {
    /// Slot center; anchors the bar and the line vertex.
    pub x: f64,
    pub bar_left: f64,
    pub bar_width: f64,
    pub bar_top_y: f64,
    pub bar_height: f64,
    pub line_y: f64,
    pub category_width: f64,
    /// Position of the source row in the caller's list.
    pub row_index: usize,
}

impl PlottedPoint {
    #[must_use]
    pub fn slot_left(self) -> f64 {
        self.x - self.category_width / 2.0
    }

    #[must_use]
    pub fn slot_right(self) -> f64 {
        self.x + self.category_width / 2.0
    }

    /// Highest (smallest y) drawn element of the category.
    #[must_use]
    pub fn top_y(self) -> f64 {
        self.bar_top_y.min(self.line_y)
    }
}

/// Maps data-space values onto the shared canvas.
///
/// The mapper holds no incremental state; build a new one whenever rows,
/// scales or the canvas change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    primary: PrimaryScale,
    delta: DeltaScale,
    canvas: Canvas,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(primary: PrimaryScale, delta: DeltaScale, canvas: Canvas) -> Self {
        Self {
            primary,
            delta,
            canvas,
        }
    }

    #[must_use]
    pub fn canvas(self) -> Canvas {
        self.canvas
    }

    #[must_use]
    pub fn primary_scale(self) -> PrimaryScale {
        self.primary
    }

    #[must_use]
    pub fn delta_scale(self) -> DeltaScale {
        self.delta
    }

    #[must_use]
    pub fn slot_width(self, row_count: usize) -> f64 {
        if row_count == 0 {
            return 0.0;
        }
        self.canvas.plot_width() / row_count as f64
    }

    #[must_use]
    pub fn category_center_x(self, index: usize, row_count: usize) -> f64 {
        self.canvas.plot_left() + self.slot_width(row_count) * (index as f64 + 0.5)
    }

    /// Bar height in pixels for a magnitude.
    #[must_use]
    pub fn bar_height(self, magnitude: f64) -> f64 {
        if self.primary.max_value <= 0.0 || !magnitude.is_finite() {
            return 0.0;
        }
        (magnitude.max(0.0) / self.primary.max_value) * self.canvas.plot_height()
    }

    /// Pixel y of a magnitude on the primary axis.
    #[must_use]
    pub fn primary_to_y(self, magnitude: f64) -> f64 {
        self.canvas.plot_bottom() - self.bar_height(magnitude)
    }

    /// Pixel y of a signed delta; `delta.max_value` maps to the plot top.
    #[must_use]
    pub fn delta_to_y(self, delta: f64) -> f64 {
        let span = self.delta.span();
        if span <= 0.0 || !delta.is_finite() {
            return self.zero_line_y();
        }
        let normalized = (self.delta.max_value - delta) / span;
        self.canvas.plot_top() + normalized * self.canvas.plot_height()
    }

    #[must_use]
    pub fn zero_line_y(self) -> f64 {
        let span = self.delta.span();
        if span <= 0.0 {
            return self.canvas.plot_bottom();
        }
        self.canvas.plot_top() + (self.delta.max_value / span) * self.canvas.plot_height()
    }

    /// Index of the slot containing pixel `x`, if any.
    #[must_use]
    pub fn slot_at(self, x: f64, row_count: usize) -> Option<usize> {
        self.canvas.slot_at(x, row_count)
    }

    /// Projects every row into pixel geometry, preserving row order.
    ///
    /// `bar_width_ratio` is the share of each slot covered by its bar.
    #[must_use]
    pub fn project_points(self, rows: &[DataRow], bar_width_ratio: f64) -> Vec<PlottedPoint> {
        let row_count = rows.len();
        if row_count == 0 {
            return Vec::new();
        }
        let ratio = if bar_width_ratio.is_finite() {
            bar_width_ratio.clamp(0.0, 1.0)
        } else {
            1.0
        };

        #[cfg(feature = "parallel-projection")]
        {
            rows.par_iter()
                .enumerate()
                .map(|(index, row)| self.project_single_point(index, row, row_count, ratio))
                .collect()
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            rows.iter()
                .enumerate()
                .map(|(index, row)| self.project_single_point(index, row, row_count, ratio))
                .collect()
        }
    }

    fn project_single_point(
        self,
        index: usize,
        row: &DataRow,
        row_count: usize,
        bar_width_ratio: f64,
    ) -> PlottedPoint {
        let category_width = self.slot_width(row_count);
        let x = self.category_center_x(index, row_count);
        let bar_width = category_width * bar_width_ratio;
        let bar_height = self.bar_height(row.primary_magnitude);

        PlottedPoint {
            x,
            bar_left: x - bar_width / 2.0,
            bar_width,
            bar_top_y: self.canvas.plot_bottom() - bar_height,
            bar_height,
            line_y: self.delta_to_y(row.secondary_delta),
            category_width,
            row_index: index,
        }
    }

    /// `(value, y)` pairs for the primary axis, bottom to top.
    #[must_use]
    pub fn primary_tick_positions(self) -> Vec<(f64, f64)> {
        self.primary
            .tick_values()
            .into_iter()
            .map(|value| (value, self.primary_to_y(value)))
            .collect()
    }

    /// `(value, y)` pairs for the delta axis, bottom to top.
    #[must_use]
    pub fn delta_tick_positions(self) -> Vec<(f64, f64)> {
        self.delta
            .tick_values()
            .into_iter()
            .map(|value| (value, self.delta_to_y(value)))
            .collect()
    }
}

/// Convenience wrapper over [`CoordinateMapper::project_points`].
#[must_use]
pub fn project_points(
    rows: &[DataRow],
    primary: PrimaryScale,
    delta: DeltaScale,
    canvas: Canvas,
    bar_width_ratio: f64,
) -> Vec<PlottedPoint> {
    CoordinateMapper::new(primary, delta, canvas).project_points(rows, bar_width_ratio)
}
