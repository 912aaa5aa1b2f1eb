use serde::{Deserialize, Serialize};

use crate::core::{
    Canvas, CompareMode, ComparisonContext, FieldSelector, ScaleLayout, parse_base_date,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipSize;

use super::ChartStyle;

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub canvas: Canvas,
    #[serde(default)]
    pub scale_layout: ScaleLayout,
    #[serde(default)]
    pub field_selector: FieldSelector,
    #[serde(default)]
    pub compare_mode: CompareMode,
    /// ISO calendar date, e.g. `2025-01-07`.
    pub base_date: String,
    #[serde(default = "default_bar_width_ratio")]
    pub bar_width_ratio: f64,
    #[serde(default)]
    pub tooltip_size: TooltipSize,
    #[serde(default)]
    pub style: ChartStyle,
}

fn default_bar_width_ratio() -> f64 {
    0.6
}

impl ChartConfig {
    /// Creates a config with default layout and daily comparison.
    #[must_use]
    pub fn new(canvas: Canvas, base_date: impl Into<String>) -> Self {
        Self {
            canvas,
            scale_layout: ScaleLayout::default(),
            field_selector: FieldSelector::default(),
            compare_mode: CompareMode::default(),
            base_date: base_date.into(),
            bar_width_ratio: default_bar_width_ratio(),
            tooltip_size: TooltipSize::default(),
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_compare_mode(mut self, compare_mode: CompareMode) -> Self {
        self.compare_mode = compare_mode;
        self
    }

    #[must_use]
    pub fn with_scale_layout(mut self, scale_layout: ScaleLayout) -> Self {
        self.scale_layout = scale_layout;
        self
    }

    #[must_use]
    pub fn with_field_selector(mut self, field_selector: FieldSelector) -> Self {
        self.field_selector = field_selector;
        self
    }

    #[must_use]
    pub fn with_bar_width_ratio(mut self, ratio: f64) -> Self {
        self.bar_width_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_tooltip_size(mut self, width: f64, height: f64) -> Self {
        self.tooltip_size = TooltipSize { width, height };
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Validates every field and resolves the comparison dates.
    pub fn validate(&self) -> ChartResult<ComparisonContext> {
        self.canvas.validate()?;
        self.scale_layout.validate()?;
        self.style.validate()?;
        validate_bar_width_ratio(self.bar_width_ratio)?;
        validate_tooltip_size(self.tooltip_size)?;

        let context = ComparisonContext::new(parse_base_date(&self.base_date)?, self.compare_mode);
        context.previous_date()?;
        Ok(context)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}

pub(super) fn validate_bar_width_ratio(ratio: f64) -> ChartResult<()> {
    if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
        return Err(ChartError::InvalidData(
            "bar width ratio must be finite and in (0, 1]".to_owned(),
        ));
    }
    Ok(())
}

fn validate_tooltip_size(size: TooltipSize) -> ChartResult<()> {
    if !size.width.is_finite() || !size.height.is_finite() || size.width < 0.0 || size.height < 0.0
    {
        return Err(ChartError::InvalidData(
            "tooltip size must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}
