use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    Canvas, CompareMode, ComparisonContext, CoordinateMapper, DataRow, DeltaScale, FieldSelector,
    ISO_DATE_FORMAT, PlottedPoint, PrimaryScale, RowRecord, ScaleLayout, SeriesSummary, aggregate,
    parse_base_date,
};
use crate::error::ChartResult;
use crate::interaction::InteractionController;

use super::ChartConfig;
use super::engine_config::validate_bar_width_ratio;

/// Lifecycle of the chart as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartState {
    /// No rows; only an empty axis is drawn.
    Empty,
    /// Rows present, scales and points computed.
    Ready,
    /// Ready with an active hover index.
    Hovering,
}

/// Everything derived from rows, canvas and scale layout.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ChartLayout {
    pub(super) mapper: CoordinateMapper,
    pub(super) points: Vec<PlottedPoint>,
    pub(super) summary: SeriesSummary,
}

impl ChartLayout {
    fn derive(rows: &[DataRow], config: &ChartConfig) -> Self {
        let primary = PrimaryScale::from_magnitudes(
            rows.iter().map(|row| row.primary_magnitude),
            config.scale_layout.primary_ticks,
        );
        let delta = DeltaScale::from_deltas(
            rows.iter().map(|row| row.secondary_delta),
            config.scale_layout,
        );
        let mapper = CoordinateMapper::new(primary, delta, config.canvas);
        Self {
            mapper,
            points: mapper.project_points(rows, config.bar_width_ratio),
            summary: aggregate(rows),
        }
    }
}

/// Dual-axis comparison chart: bars for magnitudes, a line for deltas.
///
/// Every setter recomputes derived geometry eagerly, so [`Self::render`] is
/// a cheap, idempotent read. Replacing rows or resizing the canvas always
/// clears the hover state first.
#[derive(Debug, Clone)]
pub struct ComparisonChart {
    pub(super) config: ChartConfig,
    pub(super) comparison: ComparisonContext,
    pub(super) rows: Vec<DataRow>,
    pub(super) layout: ChartLayout,
    pub(super) interaction: InteractionController,
}

impl ComparisonChart {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        let comparison = config.validate()?;
        let layout = ChartLayout::derive(&[], &config);
        Ok(Self {
            config,
            comparison,
            rows: Vec::new(),
            layout,
            interaction: InteractionController::new(0),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    #[must_use]
    pub fn points(&self) -> &[PlottedPoint] {
        &self.layout.points
    }

    #[must_use]
    pub fn primary_scale(&self) -> PrimaryScale {
        self.layout.mapper.primary_scale()
    }

    #[must_use]
    pub fn delta_scale(&self) -> DeltaScale {
        self.layout.mapper.delta_scale()
    }

    #[must_use]
    pub fn summary(&self) -> SeriesSummary {
        self.layout.summary
    }

    #[must_use]
    pub fn comparison(&self) -> ComparisonContext {
        self.comparison
    }

    #[must_use]
    pub fn state(&self) -> ChartState {
        if self.rows.is_empty() {
            ChartState::Empty
        } else if self.interaction.active_index().is_some() {
            ChartState::Hovering
        } else {
            ChartState::Ready
        }
    }

    /// Replaces the row set. Any hover is cleared before geometry is rebuilt.
    pub fn set_rows(&mut self, rows: Vec<DataRow>) {
        let previous_state = self.state();
        self.interaction.bind_row_count(rows.len());
        self.rows = rows;
        self.relayout();
        debug!(
            row_count = self.rows.len(),
            ?previous_state,
            state = ?self.state(),
            "set chart rows"
        );
    }

    /// Extracts rows with the configured [`FieldSelector`] and replaces the
    /// row set.
    pub fn set_records(&mut self, records: &[RowRecord]) {
        let rows = self.config.field_selector.extract_all(records);
        self.set_rows(rows);
    }

    /// Applies to the next [`Self::set_records`] call; current rows stay.
    pub fn set_field_selector(&mut self, selector: FieldSelector) {
        self.config.field_selector = selector;
    }

    pub fn set_canvas(&mut self, canvas: Canvas) -> ChartResult<()> {
        canvas.validate()?;
        self.interaction.bind_row_count(self.rows.len());
        self.config.canvas = canvas;
        self.relayout();
        debug!(width = canvas.width, height = canvas.height, "set chart canvas");
        Ok(())
    }

    pub fn set_scale_layout(&mut self, layout: ScaleLayout) -> ChartResult<()> {
        self.config.scale_layout = layout.validate()?;
        self.relayout();
        Ok(())
    }

    pub fn set_bar_width_ratio(&mut self, ratio: f64) -> ChartResult<()> {
        validate_bar_width_ratio(ratio)?;
        self.config.bar_width_ratio = ratio;
        self.relayout();
        Ok(())
    }

    /// Fails with `InvalidDate` and keeps the previous context on error.
    pub fn set_comparison(&mut self, comparison: ComparisonContext) -> ChartResult<()> {
        comparison.previous_date()?;
        self.comparison = comparison;
        self.config.compare_mode = comparison.compare_mode();
        self.config.base_date = comparison
            .base_date()
            .format(ISO_DATE_FORMAT)
            .to_string();
        debug!(
            base_date = %self.config.base_date,
            mode = comparison.compare_mode().as_str(),
            "set comparison context"
        );
        Ok(())
    }

    pub fn set_compare_mode(&mut self, mode: CompareMode) -> ChartResult<()> {
        self.set_comparison(self.comparison.with_mode(mode))
    }

    pub fn set_base_date(&mut self, base_date: &str) -> ChartResult<()> {
        let base_date = parse_base_date(base_date)?;
        self.set_comparison(self.comparison.with_base_date(base_date))
    }

    fn relayout(&mut self) {
        self.layout = ChartLayout::derive(&self.rows, &self.config);
    }
}
