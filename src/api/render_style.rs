use serde::{Deserialize, Serialize};

use crate::core::Trend;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, HeadlineMetric};

/// Colors and stroke widths used when building a render description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub bar_color: Color,
    pub active_bar_color: Color,
    pub line_color: Color,
    pub line_stroke_width: f64,
    pub up_color: Color,
    pub down_color: Color,
    pub flat_color: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            bar_color: Color::rgb(0.647, 0.733, 0.871),
            active_bar_color: Color::rgb(0.278, 0.447, 0.769),
            line_color: Color::rgb(0.949, 0.561, 0.259),
            line_stroke_width: 2.0,
            up_color: Color::rgb(0.851, 0.235, 0.235),
            down_color: Color::rgb(0.196, 0.431, 0.878),
            flat_color: Color::rgb(0.45, 0.45, 0.45),
        }
    }
}

impl ChartStyle {
    #[must_use]
    pub fn trend_color(self, trend: Trend) -> Color {
        match trend {
            Trend::Up => self.up_color,
            Trend::Down => self.down_color,
            Trend::Flat => self.flat_color,
        }
    }

    #[must_use]
    pub fn headline_color(self, metric: &HeadlineMetric) -> Color {
        self.trend_color(metric.trend)
    }

    pub fn validate(self) -> ChartResult<Self> {
        for color in [
            self.bar_color,
            self.active_bar_color,
            self.line_color,
            self.up_color,
            self.down_color,
            self.flat_color,
        ] {
            color.validate()?;
        }
        if !self.line_stroke_width.is_finite() || self.line_stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}
