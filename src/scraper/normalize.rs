use chrono::{DateTime, Duration, Utc};
use regex::Regex;

use crate::scraper::models::JobType;

/// Resolve an upstream age string ("3 days ago") against `now`.
///
/// The first run of digits is taken as a whole-day count. Upstream only
/// ever expresses listing age in days, so units are not interpreted.
pub fn posted_date(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let re = Regex::new(r"\d+").ok()?;
    let days: i64 = re.find(text)?.as_str().parse().ok()?;
    now.checked_sub_signed(Duration::try_days(days)?)
}

/// Pull the place token out of a map link,
/// e.g. "https://maps.google.com/maps?q=Berlin&z=10" -> "Berlin".
/// The token ends at the first non-word character.
pub fn location_from_map_href(href: &str) -> Option<String> {
    let re = Regex::new(r"q=(\w+)").ok()?;
    let caps = re.captures(href)?;
    Some(caps.get(1)?.as_str().to_string())
}

/// Coarse binary classifier: anything mentioning "full" is full-time,
/// everything else falls back to part-time.
pub fn classify_employment(text: &str) -> JobType {
    if text.to_lowercase().contains("full") {
        JobType::FullTime
    } else {
        JobType::PartTime
    }
}
