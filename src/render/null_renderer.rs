use crate::error::ChartResult;
use crate::render::{ChartRenderDescription, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates the description so tests catch invalid geometry before
/// a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_bar_count: usize,
    pub last_tick_count: usize,
    pub last_had_tooltip: bool,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, description: &ChartRenderDescription) -> ChartResult<()> {
        description.validate()?;
        self.last_bar_count = description.bars.len();
        self.last_tick_count = description.primary_ticks.len() + description.delta_ticks.len();
        self.last_had_tooltip = description.tooltip.is_some();
        self.render_count += 1;
        Ok(())
    }
}
