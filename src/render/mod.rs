mod frame;
mod null_renderer;
mod primitives;

pub use frame::{
    AxisTick, CategoryLabel, ChartRenderDescription, ComparisonCaption, HeadlineMetric,
    HeadlineSummary, TooltipLine, TooltipPayload,
};
pub use null_renderer::NullRenderer;
pub use primitives::{BarRect, Color, PathPoint, Polyline};

use crate::error::ChartResult;

/// Contract implemented by any presentation backend.
///
/// Backends receive a fully materialized, deterministic description so
/// drawing code stays isolated from scale math and hover handling.
pub trait Renderer {
    fn render(&mut self, description: &ChartRenderDescription) -> ChartResult<()>;
}
