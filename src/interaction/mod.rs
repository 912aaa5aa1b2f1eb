use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Canvas, PlottedPoint};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which category the pointer currently targets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverState {
    pub active_index: Option<usize>,
    pub pointer: PointerPosition,
}

/// Footprint of the tooltip box in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipSize {
    pub width: f64,
    pub height: f64,
}

impl Default for TooltipSize {
    fn default() -> Self {
        Self {
            width: 160.0,
            height: 96.0,
        }
    }
}

/// Top-left corner of the tooltip box plus the point it describes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipAnchor {
    pub left: f64,
    pub top: f64,
    pub target_x: f64,
    pub target_y: f64,
}

/// Gap between the tooltip box and the element it points at.
pub const TOOLTIP_OFFSET_PX: f64 = 8.0;

/// Single owner of [`HoverState`].
///
/// The controller never clears itself when data changes; the chart calls
/// [`InteractionController::bind_row_count`] on every row-set replacement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionController {
    hover: HoverState,
    row_count: usize,
}

impl InteractionController {
    #[must_use]
    pub fn new(row_count: usize) -> Self {
        Self {
            hover: HoverState::default(),
            row_count,
        }
    }

    #[must_use]
    pub fn hover_state(self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn active_index(self) -> Option<usize> {
        self.hover.active_index
    }

    #[must_use]
    pub fn row_count(self) -> usize {
        self.row_count
    }

    /// Activates a category. Out-of-range indices are ignored and `false` is
    /// returned with the previous state untouched.
    pub fn set_active(&mut self, index: Option<usize>, pointer: PointerPosition) -> bool {
        if let Some(index) = index {
            if index >= self.row_count {
                trace!(index, row_count = self.row_count, "ignoring out-of-range hover index");
                return false;
            }
        }
        self.hover = HoverState {
            active_index: index,
            pointer,
        };
        true
    }

    pub fn clear(&mut self) {
        self.hover = HoverState::default();
    }

    /// Clears hover and accepts indices for a new row set.
    pub fn bind_row_count(&mut self, row_count: usize) {
        self.clear();
        self.row_count = row_count;
    }

    /// Category whose slot contains the pointer, if the pointer is inside the
    /// plot area.
    #[must_use]
    pub fn hit_test(x: f64, y: f64, points: &[PlottedPoint], canvas: Canvas) -> Option<usize> {
        if !y.is_finite() || !canvas.plot_contains(x, y) {
            return None;
        }
        let slot = canvas.slot_at(x, points.len())?;
        points.get(slot).map(|point| point.row_index)
    }

    /// Hit-tests and activates in one step; the latest pointer wins.
    pub fn pointer_move(
        &mut self,
        x: f64,
        y: f64,
        points: &[PlottedPoint],
        canvas: Canvas,
    ) -> Option<usize> {
        let index = Self::hit_test(x, y, points, canvas);
        trace!(x, y, ?index, "pointer move");
        if !self.set_active(index, PointerPosition::new(x, y)) {
            self.clear();
        }
        self.hover.active_index
    }

    pub fn pointer_leave(&mut self) {
        trace!("pointer leave");
        self.clear();
    }

    /// Tooltip position for the active point, kept inside `[0, canvas.width]`.
    #[must_use]
    pub fn tooltip_anchor(
        self,
        points: &[PlottedPoint],
        canvas: Canvas,
        size: TooltipSize,
    ) -> Option<TooltipAnchor> {
        let point = points.get(self.hover.active_index?)?;
        let target_y = point.top_y();

        let max_left = (canvas.width - size.width).max(0.0);
        let left = (point.x - size.width / 2.0).clamp(0.0, max_left);
        let top = (target_y - TOOLTIP_OFFSET_PX - size.height).max(0.0);

        Some(TooltipAnchor {
            left,
            top,
            target_x: point.x,
            target_y,
        })
    }
}
