//! Human-friendly date labels.

use chrono::NaiveDate;

/// "Today", "Tomorrow", otherwise a short label such as "Sun, Oct 25".
pub fn friendly_date(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if today.succ_opt() == Some(date) {
        "Tomorrow".to_string()
    } else {
        date.format("%a, %b %-d").to_string()
    }
}

/// Full label for detail pages, e.g. "Sunday, October 25, 2026".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
