use crate::interaction::{HoverState, InteractionController, PointerPosition, TooltipAnchor};

use super::ComparisonChart;

impl ComparisonChart {
    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.interaction.hover_state()
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.interaction.active_index()
    }

    /// Handles pointer movement: hit-tests the plot and updates hover.
    ///
    /// Returns the category now under the pointer.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<usize> {
        self.interaction
            .pointer_move(x, y, &self.layout.points, self.config.canvas)
    }

    /// Marks pointer as outside the chart.
    pub fn pointer_leave(&mut self) {
        self.interaction.pointer_leave();
    }

    /// Activates a category directly, e.g. from keyboard navigation.
    ///
    /// Out-of-range indices are ignored and `false` is returned.
    pub fn set_active(&mut self, index: Option<usize>) -> bool {
        let pointer = index
            .and_then(|index| self.layout.points.get(index))
            .map(|point| PointerPosition::new(point.x, point.top_y()))
            .unwrap_or_default();
        self.interaction.set_active(index, pointer)
    }

    pub fn clear_hover(&mut self) {
        self.interaction.clear();
    }

    #[must_use]
    pub fn tooltip_anchor(&self) -> Option<TooltipAnchor> {
        self.interaction.tooltip_anchor(
            &self.layout.points,
            self.config.canvas,
            self.config.tooltip_size,
        )
    }

    /// Category at a pixel position without touching hover state.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        InteractionController::hit_test(x, y, &self.layout.points, self.config.canvas)
    }
}
