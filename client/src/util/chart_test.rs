use super::*;

fn frame() -> ChartFrame {
    ChartFrame {
        width: 120.0,
        height: 120.0,
        padding: 10.0,
        y_max: 10.0,
    }
}

#[test]
fn project_spreads_points_across_inner_width() {
    let pts = frame().project(&[("a", 0.0), ("b", 5.0), ("c", 10.0)]);
    assert_eq!(pts, vec![(10.0, 110.0), (60.0, 60.0), (110.0, 10.0)]);
}

#[test]
fn project_clamps_out_of_domain_values() {
    let pts = frame().project(&[("a", -3.0), ("b", 42.0)]);
    assert_eq!(pts[0].1, 110.0);
    assert_eq!(pts[1].1, 10.0);
}

#[test]
fn single_point_is_centered() {
    assert_eq!(frame().project(&[("a", 5.0)]), vec![(60.0, 60.0)]);
}

#[test]
fn empty_series_draws_nothing() {
    assert!(frame().project(&[]).is_empty());
    assert_eq!(frame().polyline(&[]), "");
}

#[test]
fn polyline_formats_one_decimal() {
    assert_eq!(frame().polyline(&[("a", 0.0), ("b", 10.0)]), "10.0,110.0 110.0,10.0");
}

#[test]
fn grid_lines_cover_domain() {
    assert_eq!(frame().grid_lines(5.0), vec![110.0, 60.0, 10.0]);
    assert!(frame().grid_lines(0.0).is_empty());
}

#[test]
fn trend_badge_styles() {
    let up = TrendBadge { trend: Trend::Up, label: "15% better" };
    let down = TrendBadge { trend: Trend::Down, label: "5% less" };
    assert_eq!(up.class(), "trend trend--up");
    assert_eq!(down.arrow(), "\u{2193}");
}
