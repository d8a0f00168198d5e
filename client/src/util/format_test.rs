use super::*;

#[test]
fn reservation_window_uses_day_month_and_times() {
    assert_eq!(
        format_reservation_window("2024-05-03T09:30:00+00:00", "2024-05-03T11:00:00+00:00"),
        "03 May, 09:30 - 11:00"
    );
}

#[test]
fn reservation_window_keeps_stored_offset() {
    assert_eq!(
        format_reservation_window("2024-12-24T18:00:00-03:00", "2024-12-24T20:15:00-03:00"),
        "24 December, 18:00 - 20:15"
    );
}

#[test]
fn reservation_window_accepts_datetime_local_values() {
    assert_eq!(
        format_reservation_window("2024-01-15T08:00", "2024-01-15T09:45"),
        "15 January, 08:00 - 09:45"
    );
}

#[test]
fn reservation_window_accepts_fractional_seconds() {
    assert_eq!(
        format_reservation_window("2024-07-01T10:00:00.123456+00:00", "2024-07-01T12:00:00Z"),
        "01 July, 10:00 - 12:00"
    );
}

#[test]
fn zoneless_fractional_seconds_are_parsed() {
    assert_eq!(format_date("2024-03-01T09:00:00.123456"), "01/03/2024");
    assert_eq!(format_date("2024-03-01 09:00:00.5"), "01/03/2024");
    assert_eq!(
        format_reservation_window("2024-03-01T09:00:00.123456", "2024-03-01T10:30:00.000001"),
        "01 March, 09:00 - 10:30"
    );
}

#[test]
fn reservation_window_falls_back_verbatim() {
    assert_eq!(format_reservation_window("soon", "later"), "soon - later");
}

#[test]
fn format_date_renders_day_month_year() {
    assert_eq!(format_date("2023-11-02T14:05:09.5+00:00"), "02/11/2023");
    assert_eq!(format_date("2023-11-02 14:05:09"), "02/11/2023");
}

#[test]
fn format_date_falls_back_verbatim() {
    assert_eq!(format_date(""), "");
    assert_eq!(format_date("yesterday"), "yesterday");
}
