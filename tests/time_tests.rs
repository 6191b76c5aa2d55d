use chrono::NaiveDate;
use rattendance::models::Instant;
use rattendance::utils::formatting::{format_hours, hours_num_format};
use rattendance::utils::time::parse_instant;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Instant {
    Instant::At(
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap(),
    )
}

#[test]
fn test_common_layouts() {
    let expected = at(2024, 3, 4, 9, 5, 0);
    for raw in [
        "2024-03-04 09:05:00",
        "2024-03-04T09:05:00",
        "2024-03-04 09:05",
        "2024/03/04 09:05",
        "03/04/2024 09:05",
        "03/04/2024 09:05 AM",
        "04.03.2024 09:05",
        "04 Mar 2024 09:05",
        "2024-03-04T09:05:00Z",
        "2024-03-04T10:05:00+01:00",
        "  2024-03-04 09:05:00  ",
    ] {
        assert_eq!(parse_instant(raw), expected, "layout {raw}");
    }
}

#[test]
fn test_date_only_is_midnight() {
    assert_eq!(parse_instant("2024-03-04"), at(2024, 3, 4, 0, 0, 0));
}

#[test]
fn test_garbage_is_unparsable() {
    for raw in ["", "yesterday", "2024-13-01 09:00", "25:00"] {
        assert_eq!(parse_instant(raw), Instant::Unparsable, "input {raw:?}");
    }
}

#[test]
fn test_spreadsheet_hours_format_matches_text_precision() {
    assert_eq!(hours_num_format(), "0.0000");
    assert_eq!(format_hours(1.0 / 60.0), "0.0167");
}
