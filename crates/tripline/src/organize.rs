//! Itinerary organizing.
//!
//! `organize` is the one pure pass from the raw CMS item list to the
//! structure the page renders: parse each item's date, resolve which
//! calendar day it belongs to in the trip timezone, group by day, and
//! sort both the days and the items within each day chronologically.
//! It is synchronous, has no side effects beyond logging, and never
//! fails; items it cannot place are reported in the output instead.

use chrono_tz::Tz;
use tracing::debug;

use crate::date::parse_item_date;
use crate::model::{DayGroup, Itinerary, ItineraryItem, ScheduledItem, SkippedItem};

/// The trip's canonical timezone.
///
/// Day identity and displayed times use this single fixed zone rather
/// than the viewer's locale, so every reader sees the same schedule.
pub const TRIP_TIMEZONE: Tz = chrono_tz::America::Los_Angeles;

/// Groups and sorts `items` into day buckets resolved in `tz`.
///
/// Items whose date field is absent, empty, or unparseable never reach
/// the chronological view; they are recorded in [`Itinerary::skipped`]
/// so callers can see what was excluded. Within a day, items are
/// ordered by ascending instant and equal instants keep their input
/// order.
pub fn organize(items: &[ItineraryItem], tz: Tz) -> Itinerary {
    let mut days: Vec<DayGroup> = Vec::new();
    let mut skipped: Vec<SkippedItem> = Vec::new();

    for item in items {
        let when = item.date.as_deref().and_then(parse_item_date);

        let Some(when) = when else {
            skipped.push(SkippedItem {
                title: item.title.clone(),
                date: item.date.clone(),
            });
            continue;
        };

        let date = when.day_in(tz);
        let scheduled = ScheduledItem {
            item: item.clone(),
            when,
        };

        // Buckets are created in first-seen order and sorted below.
        match days.iter_mut().find(|group| group.date == date) {
            Some(group) => group.items.push(scheduled),
            None => days.push(DayGroup {
                date,
                items: vec![scheduled],
            }),
        }
    }

    for group in &mut days {
        // sort_by_key is stable, so equal instants keep input order.
        group.items.sort_by_key(|entry| entry.when.local_naive(tz));
    }
    days.sort_by_key(|group| group.date);

    debug!(
        "organized itinerary: {} days, {} items, {} skipped",
        days.len(),
        days.iter().map(|g| g.items.len()).sum::<usize>(),
        skipped.len()
    );

    Itinerary { days, skipped }
}
