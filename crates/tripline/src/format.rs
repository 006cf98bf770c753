//! Display formatting in the trip timezone.

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::model::ItemInstant;

/// Long-form day heading, e.g. "Thursday, July 10, 2025".
pub fn day_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Time-of-day badge for an item card, e.g. "2:28 PM", rendered in the
/// trip timezone.
///
/// Date-only items carry no time information, so this returns an empty
/// string rather than inventing midnight.
pub fn time_label(when: &ItemInstant, tz: Tz) -> String {
    match when {
        ItemInstant::DateOnly(_) => String::new(),
        ItemInstant::Timed(instant) => instant
            .with_timezone(&tz)
            .format("%l:%M %p")
            .to_string()
            .trim()
            .to_string(),
    }
}
