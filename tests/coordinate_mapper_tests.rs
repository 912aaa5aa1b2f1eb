use approx::assert_abs_diff_eq;
use compare_chart::core::{
    Canvas, CoordinateMapper, DataRow, DeltaScale, PrimaryScale, ScaleLayout, project_points,
};

fn seoul_busan() -> Vec<DataRow> {
    vec![
        DataRow::new("Seoul", 1_000.0, 900.0, -2.0),
        DataRow::new("Busan", 400.0, 500.0, 1.0),
    ]
}

fn mapper_for(rows: &[DataRow], canvas: Canvas) -> CoordinateMapper {
    let primary = PrimaryScale::from_magnitudes(rows.iter().map(|r| r.primary_magnitude), 5);
    let delta = DeltaScale::from_deltas(
        rows.iter().map(|r| r.secondary_delta),
        ScaleLayout::default(),
    );
    CoordinateMapper::new(primary, delta, canvas)
}

#[test]
fn empty_rows_project_to_no_points() {
    let canvas = Canvas::new(600.0, 300.0);
    let mapper = mapper_for(&[], canvas);
    assert!(mapper.project_points(&[], 0.6).is_empty());
    assert_eq!(mapper.slot_width(0), 0.0);
    assert_eq!(mapper.slot_at(100.0, 0), None);
}

#[test]
fn seoul_and_busan_bars_fill_full_and_forty_percent() {
    let rows = seoul_busan();
    let canvas = Canvas::new(600.0, 300.0);
    let points = mapper_for(&rows, canvas).project_points(&rows, 0.6);

    assert_eq!(points.len(), 2);
    assert_abs_diff_eq!(points[0].bar_height, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].bar_height, 120.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[0].bar_top_y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].bar_top_y, 180.0, epsilon = 1e-9);
}

#[test]
fn categories_are_centered_in_equal_slots() {
    let rows = seoul_busan();
    let canvas = Canvas::new(600.0, 300.0);
    let points = mapper_for(&rows, canvas).project_points(&rows, 0.6);

    assert_abs_diff_eq!(points[0].category_width, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[0].x, 150.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].x, 450.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[0].bar_width, 180.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[0].bar_left, 60.0, epsilon = 1e-9);
    assert_eq!(points[0].row_index, 0);
    assert_eq!(points[1].row_index, 1);
}

#[test]
fn delta_line_uses_asymmetric_axis_not_midpoint() {
    let rows = seoul_busan();
    let canvas = Canvas::new(600.0, 300.0);
    let mapper = mapper_for(&rows, canvas);
    let points = mapper.project_points(&rows, 0.6);

    // Axis is [-2, 3]; zero sits 3/5 of the way down, not at the midpoint.
    assert_abs_diff_eq!(mapper.zero_line_y(), 180.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[0].line_y, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].line_y, 120.0, epsilon = 1e-9);
}

#[test]
fn padding_offsets_the_plot_area() {
    let rows = seoul_busan();
    let canvas = Canvas::new(640.0, 340.0).with_padding(20.0, 20.0);
    let points = mapper_for(&rows, canvas).project_points(&rows, 0.6);

    assert_abs_diff_eq!(points[0].x, 170.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[0].bar_top_y, 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].bar_top_y, 200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].bar_top_y + points[1].bar_height, 320.0, epsilon = 1e-9);
}

#[test]
fn tick_positions_run_bottom_to_top() {
    let rows = seoul_busan();
    let mapper = mapper_for(&rows, Canvas::new(600.0, 300.0));

    let primary = mapper.primary_tick_positions();
    assert_eq!(primary.len(), 6);
    assert_eq!(primary[0], (0.0, 300.0));
    assert_abs_diff_eq!(primary[5].1, 0.0, epsilon = 1e-9);

    let delta = mapper.delta_tick_positions();
    let values: Vec<f64> = delta.iter().map(|(value, _)| *value).collect();
    assert_eq!(values, vec![-2.0, -1.0, 0.0, 1.0, 2.0, 3.0]);
    assert_abs_diff_eq!(delta[0].1, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(delta[5].1, 0.0, epsilon = 1e-9);
}

#[test]
fn single_row_fills_the_whole_width() {
    let rows = vec![DataRow::new("Daegu", 0.0, 0.0, 0.0)];
    let canvas = Canvas::new(500.0, 200.0);
    let primary = PrimaryScale::resolve(0.0, 5);
    let delta = DeltaScale::resolve(0.0, ScaleLayout::default());
    let points = project_points(&rows, primary, delta, canvas, 0.5);

    assert_eq!(points.len(), 1);
    assert_abs_diff_eq!(points[0].x, 250.0, epsilon = 1e-9);
    assert_eq!(points[0].bar_height, 0.0);
    assert_abs_diff_eq!(points[0].bar_top_y, 200.0, epsilon = 1e-9);
}

#[test]
fn slot_lookup_maps_pixels_to_categories() {
    let rows = seoul_busan();
    let mapper = mapper_for(&rows, Canvas::new(600.0, 300.0));

    assert_eq!(mapper.slot_at(10.0, 2), Some(0));
    assert_eq!(mapper.slot_at(299.0, 2), Some(0));
    assert_eq!(mapper.slot_at(301.0, 2), Some(1));
    assert_eq!(mapper.slot_at(600.0, 2), Some(1));
    assert_eq!(mapper.slot_at(601.0, 2), None);
    assert_eq!(mapper.slot_at(-1.0, 2), None);
}

#[test]
fn canvas_validation_rejects_degenerate_plot_area() {
    assert!(Canvas::new(0.0, 100.0).validate().is_err());
    assert!(Canvas::new(100.0, f64::NAN).validate().is_err());
    assert!(Canvas::new(100.0, 100.0).with_padding(50.0, 0.0).validate().is_err());
    assert!(Canvas::new(100.0, 100.0).with_padding(-1.0, 0.0).validate().is_err());
    assert!(Canvas::new(100.0, 100.0).with_padding(10.0, 10.0).validate().is_ok());
}

#[test]
fn aspect_ratio_canvas_derives_height() {
    let canvas = Canvas::from_aspect_ratio(800.0, 2.0).expect("valid ratio");
    assert_eq!(canvas.height, 400.0);
    assert!(Canvas::from_aspect_ratio(800.0, 0.0).is_err());
}

#[test]
fn every_line_vertex_stays_inside_the_plot() {
    let rows = vec![
        DataRow::new("A", 10.0, 5.0, -3.0),
        DataRow::new("B", 5.0, 5.0, 1.0),
    ];
    let canvas = Canvas::default();
    let mapper = mapper_for(&rows, canvas);
    let points = mapper.project_points(&rows, 0.6);

    for point in &points {
        assert!(
            point.line_y >= canvas.plot_top() - 1e-9 && point.line_y <= canvas.plot_bottom() + 1e-9,
            "line y {} outside [{}, {}]",
            point.line_y,
            canvas.plot_top(),
            canvas.plot_bottom()
        );
    }
    // Axis is [-4, 6]; -3 sits one tenth of the way up from the bottom.
    let expected = canvas.plot_bottom() - 0.1 * canvas.plot_height();
    assert_abs_diff_eq!(points[0].line_y, expected, epsilon = 1e-9);
}

#[test]
fn canvas_and_mapper_agree_on_slots() {
    let rows = seoul_busan();
    let canvas = Canvas::new(640.0, 340.0).with_padding(20.0, 20.0);
    let mapper = mapper_for(&rows, canvas);
    for x in [0.0, 20.0, 170.0, 319.9, 320.0, 620.0, 620.1] {
        assert_eq!(mapper.slot_at(x, rows.len()), canvas.slot_at(x, rows.len()));
    }
    assert_eq!(canvas.slot_at(320.0, 2), Some(1));
    assert_eq!(canvas.slot_at(620.0, 2), Some(1));
    assert_eq!(canvas.slot_at(620.1, 2), None);
}
