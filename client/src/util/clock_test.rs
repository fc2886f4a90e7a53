use super::*;

#[test]
fn greeting_boundaries() {
    assert_eq!(greeting_for_hour(0), "Good morning");
    assert_eq!(greeting_for_hour(11), "Good morning");
    assert_eq!(greeting_for_hour(12), "Good afternoon");
    assert_eq!(greeting_for_hour(17), "Good afternoon");
    assert_eq!(greeting_for_hour(18), "Good evening");
    assert_eq!(greeting_for_hour(23), "Good evening");
}

#[test]
fn iso_date_is_zero_padded() {
    assert_eq!(format_iso_date(2024, 3, 7), "2024-03-07");
    assert_eq!(format_iso_date(2024, 12, 31), "2024-12-31");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn native_clock_is_deterministic() {
    assert_eq!(current_hour(), 12);
    assert_eq!(today_iso(), "1970-01-01");
}
