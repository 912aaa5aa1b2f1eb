use serde::{Deserialize, Serialize};

use crate::api::ChartState;
use crate::core::{Canvas, CompareMode, Trend};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipAnchor;
use crate::render::{BarRect, Polyline};

/// Gridline with its formatted label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

/// X-axis category label, centered at `x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLabel {
    pub x: f64,
    pub text: String,
    pub row_index: usize,
}

/// Signed headline figure with its styling direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineMetric {
    pub value: f64,
    pub trend: Trend,
    pub text: String,
}

/// Summary block drawn above the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineSummary {
    pub current_total: String,
    pub previous_total: String,
    pub absolute_delta: HeadlineMetric,
    /// Shares the trend of `absolute_delta`.
    pub percent_delta: HeadlineMetric,
    /// Styled independently of the magnitude delta.
    pub secondary_total: HeadlineMetric,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonCaption {
    pub mode: CompareMode,
    pub base_date: String,
    pub previous_date: String,
    /// First day of the period ending at `base_date`.
    pub period_start: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipLine {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipPayload {
    pub row_index: usize,
    pub label: String,
    pub anchor: TooltipAnchor,
    pub lines: Vec<TooltipLine>,
}

/// Backend-agnostic description of one chart draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRenderDescription {
    pub state: ChartState,
    pub canvas: Canvas,
    pub bars: Vec<BarRect>,
    pub line: Polyline,
    pub line_path: String,
    pub primary_ticks: Vec<AxisTick>,
    pub delta_ticks: Vec<AxisTick>,
    pub zero_line_y: f64,
    pub category_labels: Vec<CategoryLabel>,
    pub summary: HeadlineSummary,
    pub comparison: ComparisonCaption,
    pub tooltip: Option<TooltipPayload>,
}

impl ChartRenderDescription {
    pub fn validate(&self) -> ChartResult<()> {
        self.canvas.validate()?;
        for bar in &self.bars {
            bar.validate()?;
        }
        self.line.validate()?;
        for tick in self.primary_ticks.iter().chain(&self.delta_ticks) {
            if !tick.y.is_finite() || tick.label.is_empty() {
                return Err(ChartError::InvalidData(format!(
                    "axis tick `{}` must have a finite position and a label",
                    tick.value
                )));
            }
        }
        if !self.zero_line_y.is_finite() {
            return Err(ChartError::InvalidData(
                "zero line must be finite".to_owned(),
            ));
        }
        if let Some(tooltip) = &self.tooltip {
            let anchor = tooltip.anchor;
            if !anchor.left.is_finite() || !anchor.top.is_finite() {
                return Err(ChartError::InvalidData(
                    "tooltip anchor must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }

    /// True when there is nothing to plot; axes are still described.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.line.points.is_empty()
    }
}
