use crate::core::{DataRow, FieldValue, ISO_DATE_FORMAT, SeriesSummary, percent_change};
use crate::error::ChartResult;
use crate::render::{
    AxisTick, BarRect, CategoryLabel, ChartRenderDescription, ComparisonCaption, HeadlineMetric,
    HeadlineSummary, PathPoint, Polyline, Renderer, TooltipLine, TooltipPayload,
};

use super::label_format::{
    format_axis_value, format_count, format_grouped, format_percent, format_signed,
    precision_from_step,
};
use super::{ChartConfig, ComparisonChart};

/// One-shot render of `rows` under `config`, optionally with `active_index`
/// hovered. Out-of-range indices render without a tooltip.
pub fn render_chart(
    rows: Vec<DataRow>,
    config: ChartConfig,
    active_index: Option<usize>,
) -> ChartResult<ChartRenderDescription> {
    let mut chart = ComparisonChart::new(config)?;
    chart.set_rows(rows);
    chart.set_active(active_index);
    chart.render()
}

impl ComparisonChart {
    /// Builds the full description for the current rows, canvas, comparison
    /// and hover. Calling it repeatedly without changes yields equal output.
    pub fn render(&self) -> ChartResult<ChartRenderDescription> {
        let mapper = self.layout.mapper;
        let style = self.config.style;
        let active = self.interaction.active_index();

        let bars = self
            .layout
            .points
            .iter()
            .map(|point| BarRect {
                x: point.bar_left,
                y: point.bar_top_y,
                width: point.bar_width,
                height: point.bar_height,
                row_index: point.row_index,
                color: if active == Some(point.row_index) {
                    style.active_bar_color
                } else {
                    style.bar_color
                },
            })
            .collect();

        let line = Polyline::new(
            self.layout
                .points
                .iter()
                .map(|point| PathPoint {
                    x: point.x,
                    y: point.line_y,
                })
                .collect(),
            style.line_stroke_width,
            style.line_color,
        );
        let line_path = line.to_svg_path();

        let primary_step = mapper.primary_scale().step_value;
        let primary_ticks = mapper
            .primary_tick_positions()
            .into_iter()
            .map(|(value, y)| AxisTick {
                value,
                y,
                label: format_axis_value(value, primary_step),
            })
            .collect();

        let delta_precision = precision_from_step(mapper.delta_scale().step_value);
        let delta_ticks = mapper
            .delta_tick_positions()
            .into_iter()
            .map(|(value, y)| AxisTick {
                value,
                y,
                label: format_signed(value, delta_precision),
            })
            .collect();

        let category_labels = self
            .layout
            .points
            .iter()
            .zip(&self.rows)
            .map(|(point, row)| CategoryLabel {
                x: point.x,
                text: row.label.clone(),
                row_index: point.row_index,
            })
            .collect();

        Ok(ChartRenderDescription {
            state: self.state(),
            canvas: self.config.canvas,
            bars,
            line,
            line_path,
            primary_ticks,
            delta_ticks,
            zero_line_y: mapper.zero_line_y(),
            category_labels,
            summary: build_headline_summary(self.layout.summary),
            comparison: self.comparison_caption()?,
            tooltip: self.tooltip_payload(),
        })
    }

    /// Renders and hands the description to `renderer`.
    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        let description = self.render()?;
        renderer.render(&description)
    }

    fn comparison_caption(&self) -> ChartResult<ComparisonCaption> {
        let previous = self.comparison.previous_date()?;
        Ok(ComparisonCaption {
            mode: self.comparison.compare_mode(),
            base_date: self.comparison.base_date().format(ISO_DATE_FORMAT).to_string(),
            previous_date: previous.format(ISO_DATE_FORMAT).to_string(),
            period_start: self
                .comparison
                .period_start()?
                .format(ISO_DATE_FORMAT)
                .to_string(),
            text: self.comparison.caption()?,
        })
    }

    /// Tooltip for the active category, rebuilt on every call.
    #[must_use]
    pub fn tooltip_payload(&self) -> Option<TooltipPayload> {
        let index = self.interaction.active_index()?;
        let row = self.rows.get(index)?;
        let anchor = self.tooltip_anchor()?;
        Some(TooltipPayload {
            row_index: index,
            label: row.label.clone(),
            anchor,
            lines: tooltip_lines(row),
        })
    }
}

fn tooltip_lines(row: &DataRow) -> Vec<TooltipLine> {
    let change = row.magnitude_change();
    let change_percent = percent_change(change, row.previous_magnitude);

    let mut lines = vec![
        TooltipLine {
            name: "Current".to_owned(),
            value: format_count(row.primary_magnitude),
        },
        TooltipLine {
            name: "Previous".to_owned(),
            value: format_count(row.previous_magnitude),
        },
        TooltipLine {
            name: "Change".to_owned(),
            value: format!(
                "{} ({}%)",
                format_signed(change, 0),
                format_percent(change_percent)
            ),
        },
        TooltipLine {
            name: "Delta".to_owned(),
            value: format_signed(
                row.secondary_delta,
                precision_from_step(row.secondary_delta.abs()),
            ),
        },
    ];

    lines.extend(row.extras.iter().map(|(name, value)| TooltipLine {
        name: name.clone(),
        value: match value {
            FieldValue::Number(number) => {
                format_grouped(*number, precision_from_step(number.abs()))
            }
            FieldValue::Text(text) => text.clone(),
        },
    }));
    lines
}

/// Formats the headline block; magnitude and secondary metrics are styled
/// independently.
#[must_use]
pub fn build_headline_summary(summary: SeriesSummary) -> HeadlineSummary {
    let magnitude_trend = summary.magnitude_trend();
    HeadlineSummary {
        current_total: format_count(summary.current_total),
        previous_total: format_count(summary.previous_total),
        absolute_delta: HeadlineMetric {
            value: summary.absolute_delta,
            trend: magnitude_trend,
            text: format_signed(summary.absolute_delta, 0),
        },
        percent_delta: HeadlineMetric {
            value: summary.percent_delta,
            trend: magnitude_trend,
            text: format_signed(summary.percent_delta, 1),
        },
        secondary_total: HeadlineMetric {
            value: summary.secondary_total,
            trend: summary.secondary_trend(),
            text: format_signed(
                summary.secondary_total,
                precision_from_step(summary.secondary_total.abs()),
            ),
        },
    }
}
