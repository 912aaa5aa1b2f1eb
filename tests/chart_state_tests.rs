use approx::assert_abs_diff_eq;
use compare_chart::api::render_chart;
use compare_chart::core::{Canvas, CompareMode, DataRow, ScaleLayout, Trend};
use compare_chart::render::{NullRenderer, Renderer};
use compare_chart::{ChartConfig, ChartError, ChartState, ComparisonChart};

fn config() -> ChartConfig {
    ChartConfig::new(Canvas::new(600.0, 300.0), "2025-01-07")
}

fn seoul_busan() -> Vec<DataRow> {
    vec![
        DataRow::new("Seoul", 1_000.0, 900.0, -2.0),
        DataRow::new("Busan", 400.0, 500.0, 1.0),
    ]
}

fn labels(ticks: &[compare_chart::render::AxisTick]) -> Vec<&str> {
    ticks.iter().map(|tick| tick.label.as_str()).collect()
}

#[test]
fn lifecycle_moves_through_empty_ready_and_hovering() {
    let mut chart = ComparisonChart::new(config()).expect("chart init");
    assert_eq!(chart.state(), ChartState::Empty);

    chart.set_rows(seoul_busan());
    assert_eq!(chart.state(), ChartState::Ready);

    assert!(chart.set_active(Some(0)));
    assert_eq!(chart.state(), ChartState::Hovering);

    chart.pointer_leave();
    assert_eq!(chart.state(), ChartState::Ready);

    chart.set_rows(Vec::new());
    assert_eq!(chart.state(), ChartState::Empty);
}

#[test]
fn empty_chart_still_renders_both_axes() {
    let chart = ComparisonChart::new(config()).expect("chart init");
    let description = chart.render().expect("render");

    assert!(description.is_empty());
    assert_eq!(description.state, ChartState::Empty);
    assert!(description.line_path.is_empty());
    assert!(description.tooltip.is_none());
    assert_eq!(labels(&description.primary_ticks), ["0", "1", "2", "3", "4", "5"]);
    assert_eq!(
        labels(&description.delta_ticks),
        ["-2", "-1", "0", "+1", "+2", "+3"]
    );
    assert_eq!(description.summary.current_total, "0");
    assert_eq!(description.summary.percent_delta.text, "0.0");
}

#[test]
fn rendered_axes_follow_nice_steps() {
    let mut chart = ComparisonChart::new(config()).expect("chart init");
    chart.set_rows(seoul_busan());
    let description = chart.render().expect("render");

    assert_eq!(
        labels(&description.primary_ticks),
        ["0", "200", "400", "600", "800", "1,000"]
    );
    assert_abs_diff_eq!(description.primary_ticks[0].y, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(description.primary_ticks[5].y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(description.zero_line_y, 180.0, epsilon = 1e-9);

    assert_eq!(description.bars.len(), 2);
    assert_eq!(description.line.points.len(), 2);
    assert_eq!(description.line_path, "M150.00,300.00L450.00,120.00");
    assert_eq!(description.category_labels[1].text, "Busan");
    assert_abs_diff_eq!(description.category_labels[1].x, 450.0, epsilon = 1e-9);
}

#[test]
fn headline_summary_carries_totals_and_trends() {
    let mut chart = ComparisonChart::new(config()).expect("chart init");
    chart.set_rows(seoul_busan());
    let summary = chart.render().expect("render").summary;

    assert_eq!(summary.current_total, "1,400");
    assert_eq!(summary.previous_total, "1,400");
    assert_eq!(summary.absolute_delta.trend, Trend::Flat);
    assert_eq!(summary.secondary_total.text, "-1");
    assert_eq!(summary.secondary_total.trend, Trend::Down);
}

#[test]
fn active_bar_uses_highlight_color() {
    let mut chart = ComparisonChart::new(config()).expect("chart init");
    chart.set_rows(seoul_busan());
    assert!(chart.set_active(Some(1)));

    let style = chart.config().style;
    let description = chart.render().expect("render");
    assert_eq!(description.bars[0].color, style.bar_color);
    assert_eq!(description.bars[1].color, style.active_bar_color);
    assert_eq!(description.state, ChartState::Hovering);
}

#[test]
fn tooltip_lists_figures_then_extras_in_order() {
    let rows = vec![
        DataRow::new("Seoul", 1_000.0, 900.0, -2.0),
        DataRow::new("Busan", 400.0, 500.0, 1.0)
            .with_extra("fare_total", 1_234_500.0)
            .with_extra("note", "matinee"),
    ];
    let description = render_chart(rows, config(), Some(1)).expect("render");
    let tooltip = description.tooltip.expect("tooltip");

    assert_eq!(tooltip.row_index, 1);
    assert_eq!(tooltip.label, "Busan");
    let values: Vec<(&str, &str)> = tooltip
        .lines
        .iter()
        .map(|line| (line.name.as_str(), line.value.as_str()))
        .collect();
    assert_eq!(
        values,
        [
            ("Current", "400"),
            ("Previous", "500"),
            ("Change", "-100 (-20.0%)"),
            ("Delta", "+1"),
            ("fare_total", "1,234,500"),
            ("note", "matinee"),
        ]
    );
}

#[test]
fn render_chart_ignores_out_of_range_hover() {
    let rows = vec![
        DataRow::new("A", 10.0, 10.0, 0.0),
        DataRow::new("B", 20.0, 10.0, 1.0),
        DataRow::new("C", 30.0, 10.0, -1.0),
    ];
    let description = render_chart(rows, config(), Some(5)).expect("render");
    assert!(description.tooltip.is_none());
    assert_eq!(description.state, ChartState::Ready);
}

#[test]
fn render_is_idempotent() {
    let mut chart = ComparisonChart::new(config()).expect("chart init");
    chart.set_rows(seoul_busan());
    chart.pointer_move(120.0, 40.0);

    let first = chart.render().expect("first render");
    let second = chart.render().expect("second render");
    assert_eq!(first, second);
}

#[test]
fn null_renderer_receives_validated_description() {
    let mut chart = ComparisonChart::new(config()).expect("chart init");
    chart.set_rows(seoul_busan());
    assert!(chart.set_active(Some(0)));

    let mut renderer = NullRenderer::default();
    chart.render_with(&mut renderer).expect("render");
    assert_eq!(renderer.render_count, 1);
    assert_eq!(renderer.last_bar_count, 2);
    assert_eq!(renderer.last_tick_count, 12);
    assert!(renderer.last_had_tooltip);

    let description = chart.render().expect("render");
    renderer.render(&description).expect("render");
    assert_eq!(renderer.render_count, 2);
}

#[test]
fn invalid_canvas_is_rejected_and_state_kept() {
    let mut chart = ComparisonChart::new(config()).expect("chart init");
    chart.set_rows(seoul_busan());
    assert!(chart.set_active(Some(1)));
    let before = chart.render().expect("render");

    let err = chart
        .set_canvas(Canvas::new(0.0, 300.0))
        .expect_err("zero width");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
    let err = chart
        .set_canvas(Canvas::new(100.0, 100.0).with_padding(60.0, 0.0))
        .expect_err("no plot area");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));

    assert_eq!(chart.config().canvas, Canvas::new(600.0, 300.0));
    assert_eq!(chart.active_index(), Some(1));
    assert_eq!(chart.render().expect("render"), before);
}

#[test]
fn invalid_base_date_is_rejected_and_context_kept() {
    let mut chart = ComparisonChart::new(config()).expect("chart init");
    let err = chart.set_base_date("2025-02-30").expect_err("bad date");
    assert!(matches!(err, ChartError::InvalidDate { .. }));
    assert_eq!(chart.config().base_date, "2025-01-07");

    let err = ComparisonChart::new(ChartConfig::new(Canvas::new(600.0, 300.0), "2025-02-30"))
        .expect_err("bad config date");
    assert!(matches!(err, ChartError::InvalidDate { .. }));
}

#[test]
fn comparison_caption_follows_mode_changes() {
    let mut chart = ComparisonChart::new(config()).expect("chart init");
    let daily = chart.render().expect("render").comparison;
    assert_eq!(daily.mode, CompareMode::Daily);
    assert_eq!(daily.previous_date, "2025-01-06");
    assert_eq!(daily.period_start, "2025-01-07");
    assert_eq!(daily.text, "2025-01-07 vs 2025-01-06");

    chart
        .set_compare_mode(CompareMode::Weekly)
        .expect("weekly mode");
    let weekly = chart.render().expect("render").comparison;
    assert_eq!(weekly.previous_date, "2025-01-01");
    assert_eq!(weekly.period_start, "2025-01-01");
    assert_eq!(chart.config().compare_mode, CompareMode::Weekly);

    chart.set_base_date(" 2025-02-14 ").expect("base date");
    assert_eq!(chart.config().base_date, "2025-02-14");
    assert_eq!(
        chart.render().expect("render").comparison.text,
        "2025-02-14 vs 2025-02-08"
    );
}

#[test]
fn scale_layout_change_keeps_hover() {
    let mut chart = ComparisonChart::new(config()).expect("chart init");
    chart.set_rows(seoul_busan());
    assert!(chart.set_active(Some(0)));

    chart
        .set_scale_layout(ScaleLayout {
            primary_ticks: 4,
            delta_negative_ticks: 3,
            delta_positive_ticks: 3,
        })
        .expect("layout");
    assert_eq!(chart.active_index(), Some(0));
    let description = chart.render().expect("render");
    assert_eq!(description.primary_ticks.len(), 5);
    assert_eq!(description.delta_ticks.len(), 7);

    let err = chart
        .set_scale_layout(ScaleLayout {
            primary_ticks: 0,
            ..ScaleLayout::default()
        })
        .expect_err("zero ticks");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn bar_width_ratio_must_be_in_unit_interval() {
    let mut chart = ComparisonChart::new(config()).expect("chart init");
    chart.set_rows(seoul_busan());

    chart.set_bar_width_ratio(1.0).expect("full slot");
    assert_abs_diff_eq!(chart.points()[0].bar_width, 300.0, epsilon = 1e-9);

    for ratio in [0.0, -0.1, 1.5, f64::NAN] {
        assert!(chart.set_bar_width_ratio(ratio).is_err());
    }
    assert_abs_diff_eq!(chart.points()[0].bar_width, 300.0, epsilon = 1e-9);
}

#[test]
fn chart_can_move_between_threads() {
    fn assert_send<T: Send>() {}
    assert_send::<ComparisonChart>();
    assert_send::<ChartConfig>();
}
