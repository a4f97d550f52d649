pub mod formats;

use chrono::{DateTime, Utc};

/// Parse a provider publish date into a UTC timestamp.
///
/// Tried in order: RFC 3339, naive date-time (taken as UTC), bare date
/// (midnight UTC). Blank or unrecognised text gives None.
pub fn parse_published_at(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    // 1. RFC 3339, what the provider normally sends
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    // 2. Date-time without an offset
    if let Some(naive) = formats::parse_naive_datetime(text) {
        return Some(naive.and_utc());
    }

    // 3. Date only
    formats::parse_date_only(text)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
