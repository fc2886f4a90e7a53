use super::*;

#[test]
fn series_cover_a_full_week_in_order() {
    let days = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    for series in [&MOOD_SERIES, &SLEEP_SERIES] {
        let labels: Vec<&str> = series.iter().map(|(d, _)| *d).collect();
        assert_eq!(labels, days);
    }
}

#[test]
fn series_fit_the_default_chart_domain() {
    let y_max = ChartFrame::default().y_max;
    for (_, value) in MOOD_SERIES.iter().chain(SLEEP_SERIES.iter()) {
        assert!((0.0..=y_max).contains(value));
    }
}

#[test]
fn activity_percentages_are_bounded() {
    assert!(ACTIVITY.iter().all(|(_, pct)| *pct <= 100));
}
