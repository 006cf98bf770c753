//! Item date parsing.
//!
//! Dates arrive from the CMS in whatever shape the author typed: a full
//! ISO-8601 instant, a zone-less datetime, a bare calendar date, or a
//! locale-formatted date. Parsing is an ordered list of strategies tried
//! in sequence; the first success wins. A string no strategy accepts
//! means the item is excluded from the chronological view.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};
use tracing::warn;

use crate::model::ItemInstant;

/// One way an authored date string can be interpreted.
///
/// Order matters: strict instant formats come before the permissive
/// date-only fallbacks, so a string carrying time information is never
/// demoted to a bare day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// Full ISO-8601 instant with offset or `Z`, optional fractional
    /// seconds.
    Rfc3339,
    /// `YYYY-MM-DDTHH:MM[:SS[.fff]]` with no zone marker. The content
    /// store writes datetimes in UTC, so the missing zone means UTC.
    IsoNoZone,
    /// Bare `YYYY-MM-DD`.
    DateOnly,
    /// Locale date, `M/D/YYYY`.
    SlashDate,
    /// Written-out date, `Month D, YYYY`, with or without a leading
    /// weekday. This is the shape our own day headings use.
    LongDate,
}

/// The fallback chain, in the order strategies are tried.
pub const PARSE_STRATEGIES: [ParseStrategy; 5] = [
    ParseStrategy::Rfc3339,
    ParseStrategy::IsoNoZone,
    ParseStrategy::DateOnly,
    ParseStrategy::SlashDate,
    ParseStrategy::LongDate,
];

const ISO_NO_ZONE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const LONG_DATE_FORMATS: [&str; 2] = ["%A, %B %d, %Y", "%B %d, %Y"];

impl ParseStrategy {
    /// Attempts to parse `raw` under this single strategy.
    pub fn parse(&self, raw: &str) -> Option<ItemInstant> {
        match self {
            ParseStrategy::Rfc3339 => DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| timed(dt.with_timezone(&Utc))),
            ParseStrategy::IsoNoZone => ISO_NO_ZONE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|naive| timed(naive.and_utc())),
            ParseStrategy::DateOnly => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(ItemInstant::DateOnly),
            ParseStrategy::SlashDate => NaiveDate::parse_from_str(raw, "%m/%d/%Y")
                .ok()
                .map(ItemInstant::DateOnly),
            ParseStrategy::LongDate => LONG_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .map(ItemInstant::DateOnly),
        }
    }
}

/// Truncate to whole seconds so instants that differ only in
/// sub-second precision bucket and sort identically.
fn timed(instant: DateTime<Utc>) -> ItemInstant {
    ItemInstant::Timed(instant.with_nanosecond(0).unwrap_or(instant))
}

/// Parses an authored date string through the fallback chain.
///
/// Returns `None` for empty, whitespace-only, or unrecognized strings;
/// the caller drops such items from the view.
pub fn parse_item_date(raw: &str) -> Option<ItemInstant> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for strategy in PARSE_STRATEGIES {
        if let Some(instant) = strategy.parse(raw) {
            return Some(instant);
        }
    }

    warn!("unparseable itinerary date: {:?}", raw);
    None
}
