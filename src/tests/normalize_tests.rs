use crate::scraper::models::JobType;
use crate::scraper::normalize::{classify_employment, location_from_map_href, posted_date};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 3, 14, 12, 26, 53).unwrap()
}

#[test]
fn posted_date_subtracts_whole_days() {
    let now = noon();

    for days in [0i64, 1, 30, 365] {
        let text = format!("{days} days ago");
        assert_eq!(posted_date(&text, now), Some(now - Duration::days(days)));
    }
}

#[test]
fn posted_date_takes_the_first_digit_run() {
    let now = noon();
    assert_eq!(
        posted_date("posted 12 days ago (2 weeks)", now),
        Some(now - Duration::days(12))
    );
}

#[test]
fn posted_date_keeps_the_wall_clock_time() {
    let now = noon();
    let date = posted_date("5 days ago", now).unwrap();
    assert_eq!(date.time(), now.time());
}

#[test]
fn posted_date_without_digits_fails() {
    assert_eq!(posted_date("yesterday", noon()), None);
}

#[test]
fn full_time_is_detected_in_any_case() {
    assert_eq!(classify_employment("Full Time"), JobType::FullTime);
    assert_eq!(classify_employment("FULL-TIME"), JobType::FullTime);
    assert_eq!(classify_employment("full time"), JobType::FullTime);
}

#[test]
fn everything_else_defaults_to_part_time() {
    assert_eq!(classify_employment("Part Time"), JobType::PartTime);
    assert_eq!(classify_employment("xyz"), JobType::PartTime);
    assert_eq!(classify_employment(""), JobType::PartTime);
}

#[test]
fn location_comes_from_the_q_parameter() {
    assert_eq!(
        location_from_map_href("https://maps.google.com/maps?q=Berlin&z=10"),
        Some("Berlin".to_string())
    );
}

#[test]
fn location_stops_at_the_first_non_word_character() {
    assert_eq!(
        location_from_map_href("?q=Berlin,Germany"),
        Some("Berlin".to_string())
    );
}

#[test]
fn href_without_q_parameter_fails() {
    assert_eq!(location_from_map_href("https://maps.google.com/maps?z=10"), None);
    assert_eq!(location_from_map_href("?q="), None);
}
