use index_study::chart::{ChartLabels, ChartRenderer, Line, LineChart, LineColor, PngRenderer};

fn chart_with(points: Vec<(f64, f64)>) -> LineChart {
    let mut chart = LineChart::new("demo", ChartLabels::untitled("x", "y"));
    chart.push_line(Line {
        label: "demo".into(),
        color: LineColor::Black,
        points,
    });
    chart
}

#[test]
fn ranges_fit_the_data_with_vertical_margin() {
    let chart = chart_with(vec![(0.0, 90.0), (10.0, 110.0)]);
    let (x, y) = chart.resolved_ranges();
    assert_eq!(x, 0.0..10.0);
    assert_eq!(y, 89.0..111.0);
}

#[test]
fn fixed_ranges_win_over_fitted_ones() {
    let chart = chart_with(vec![(0.0, 95.0), (69.0, 104.0)])
        .with_x_range(0.0..70.0)
        .with_y_range(90.0..106.0);
    assert_eq!(chart.resolved_ranges(), (0.0..70.0, 90.0..106.0));
}

#[test]
fn flat_or_empty_charts_still_get_a_range() {
    let flat = chart_with(vec![(1.0, 5.0), (2.0, 5.0)]);
    assert_eq!(flat.resolved_ranges().1, 4.0..6.0);

    let empty = LineChart::new("empty", ChartLabels::untitled("x", "y"));
    assert_eq!(empty.resolved_ranges(), (0.0..1.0, 0.0..1.0));
}

#[test]
fn png_files_are_named_after_the_chart() {
    let renderer = PngRenderer::new("/tmp/charts", (640, 480));
    let chart = chart_with(Vec::new());
    assert_eq!(
        renderer.path_for(&chart),
        std::path::PathBuf::from("/tmp/charts/demo.png")
    );
}

#[test]
fn renderer_writes_a_png_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut renderer = PngRenderer::new(dir.path().join("charts"), (320, 240));
    let mut chart = chart_with(vec![(0.0, 99.0), (1.0, 101.5), (2.0, 100.2)]);
    chart.labels.title = Some("Three-Day Moving Average of DJIA".into());
    chart.push_line(Line::from_xy(
        "Non-MA",
        LineColor::Green,
        [0.0, 1.0, 2.0],
        &[98.0, 102.0, 100.0],
    ));

    let path = renderer.render(&chart).unwrap();
    assert_eq!(path, dir.path().join("charts/demo.png"));
    let bytes = std::fs::read(&path).unwrap();
    assert!(!bytes.is_empty());
    assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
}

#[test]
fn lines_pair_points_up_to_the_shorter_side() {
    let line = Line::from_xy("MA", LineColor::Red, [2.0, 3.0, 4.0], &[10.0, 11.0]);
    assert_eq!(line.points, vec![(2.0, 10.0), (3.0, 11.0)]);
}
