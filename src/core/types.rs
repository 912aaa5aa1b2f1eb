use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Logical drawing surface in pixels.
///
/// The plot area is the canvas minus `padding_x` on the left and right and
/// `padding_y` on the top and bottom. Axis labels live in the padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub padding_x: f64,
    #[serde(default)]
    pub padding_y: f64,
}

impl Canvas {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding_x: 0.0,
            padding_y: 0.0,
        }
    }

    /// Builds a canvas whose height follows `width / aspect_ratio`.
    pub fn from_aspect_ratio(width: f64, aspect_ratio: f64) -> ChartResult<Self> {
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(ChartError::InvalidData(
                "aspect ratio must be finite and > 0".to_owned(),
            ));
        }
        let canvas = Self::new(width, width / aspect_ratio);
        canvas.validate()?;
        Ok(canvas)
    }

    #[must_use]
    pub fn with_padding(mut self, padding_x: f64, padding_y: f64) -> Self {
        self.padding_x = padding_x;
        self.padding_y = padding_y;
        self
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        self.width - 2.0 * self.padding_x
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.height - 2.0 * self.padding_y
    }

    #[must_use]
    pub fn plot_left(self) -> f64 {
        self.padding_x
    }

    #[must_use]
    pub fn plot_right(self) -> f64 {
        self.padding_x + self.plot_width()
    }

    #[must_use]
    pub fn plot_top(self) -> f64 {
        self.padding_y
    }

    #[must_use]
    pub fn plot_bottom(self) -> f64 {
        self.padding_y + self.plot_height()
    }

    #[must_use]
    pub fn plot_contains(self, x: f64, y: f64) -> bool {
        x >= self.plot_left()
            && x <= self.plot_right()
            && y >= self.plot_top()
            && y <= self.plot_bottom()
    }

    /// Index of the equal-width category slot containing pixel `x`, if the
    /// plot is split into `slot_count` slots.
    #[must_use]
    pub fn slot_at(self, x: f64, slot_count: usize) -> Option<usize> {
        if slot_count == 0 || !x.is_finite() {
            return None;
        }
        if x < self.plot_left() || x > self.plot_right() {
            return None;
        }
        let slot_width = self.plot_width() / slot_count as f64;
        let index = ((x - self.plot_left()) / slot_width).floor() as usize;
        Some(index.min(slot_count - 1))
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !self.padding_x.is_finite()
            || !self.padding_y.is_finite()
            || self.padding_x < 0.0
            || self.padding_y < 0.0
        {
            return Err(ChartError::InvalidData(
                "canvas padding must be finite and >= 0".to_owned(),
            ));
        }
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: self.plot_width(),
                height: self.plot_height(),
            });
        }
        Ok(())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(640.0, 320.0).with_padding(48.0, 24.0)
    }
}
