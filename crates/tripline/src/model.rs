//! Data model for the trip page.
//!
//! The CMS-side records (`PageContent`, `Hero`, `ItineraryItem`) are
//! read-only: they mirror the shape of the home page document in the
//! content store and are decoded straight from its query response. The
//! organizer-side types (`ItemInstant`, `ScheduledItem`, `DayGroup`,
//! `Itinerary`) are what the rendering layer actually consumes.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::Deserialize;

/// A lat/lng pair attached to an itinerary item.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// External map link for the item card.
    pub fn maps_url(&self) -> String {
        format!("https://maps.google.com/maps?q={},{}", self.lat, self.lng)
    }
}

/// Opaque reference to an asset in the content store.
///
/// Resolving this to an actual image URL is the job of the asset
/// pipeline, not this crate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref")]
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRef {
    pub asset: Option<AssetRef>,
}

/// One itinerary entry as authored in the CMS.
///
/// The `date` field is loosely typed on the authoring side: it may be a
/// full instant, a zone-less datetime, a bare calendar date, or missing
/// entirely. See [`crate::date`] for how it is interpreted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItineraryItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub map: Option<GeoPoint>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Hero block at the top of the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hero {
    pub title: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

/// The home page document: hero plus the raw itinerary list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageContent {
    pub hero: Hero,
    #[serde(default)]
    pub itinerary: Vec<ItineraryItem>,
}

/// A successfully parsed item date.
///
/// Authors either pick a calendar day or a full date and time; the two
/// carry different information and must not be conflated. A bare date
/// has no time of day, so it never renders a time label and never
/// shifts across a day boundary during timezone conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemInstant {
    /// A calendar day with no time-of-day information.
    DateOnly(NaiveDate),
    /// An absolute instant, truncated to whole seconds.
    Timed(DateTime<Utc>),
}

impl ItemInstant {
    /// The calendar day this instant belongs to, resolved in `tz`.
    ///
    /// A bare date is already a calendar day and is used as written;
    /// converting it through midnight UTC would move it to the previous
    /// day anywhere west of Greenwich.
    pub fn day_in(&self, tz: Tz) -> NaiveDate {
        match self {
            ItemInstant::DateOnly(date) => *date,
            ItemInstant::Timed(instant) => instant.with_timezone(&tz).date_naive(),
        }
    }

    /// Wall-clock ordering key within a day, in `tz`. Date-only entries
    /// sort at the start of their day.
    pub fn local_naive(&self, tz: Tz) -> NaiveDateTime {
        match self {
            ItemInstant::DateOnly(date) => date.and_time(NaiveTime::MIN),
            ItemInstant::Timed(instant) => instant.with_timezone(&tz).naive_local(),
        }
    }

    pub fn has_time(&self) -> bool {
        matches!(self, ItemInstant::Timed(_))
    }
}

/// An itinerary item together with its parsed date.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledItem {
    pub item: ItineraryItem,
    pub when: ItemInstant,
}

/// All items falling on one zone-adjusted calendar day, in
/// chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub items: Vec<ScheduledItem>,
}

/// An item excluded from the chronological view, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedItem {
    pub title: String,
    /// The raw date string that failed to parse, if one was present.
    pub date: Option<String>,
}

/// The organized view: day groups ascending by calendar day, with
/// unique days, plus the items that were dropped on the way.
///
/// `skipped` exists so that authoring review and tests can see what the
/// page silently excluded; the rendering layer only reads `days`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Itinerary {
    pub days: Vec<DayGroup>,
    pub skipped: Vec<SkippedItem>,
}

impl Itinerary {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of scheduled items across all days.
    pub fn len(&self) -> usize {
        self.days.iter().map(|day| day.items.len()).sum()
    }
}
