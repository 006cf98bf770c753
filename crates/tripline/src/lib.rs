//! Core of the trip itinerary site: turns the loosely-dated item list
//! authored in the CMS into an ordered, day-bucketed view, and tracks
//! which day heading should be pinned to the viewport while scrolling.

pub mod content;
pub mod date;
mod error;
pub mod format;
mod model;
pub mod organize;
pub mod sticky;

pub use content::{decode_page, fetch_home_page, ContentConfig, HOME_PAGE_QUERY};
pub use date::{parse_item_date, ParseStrategy, PARSE_STRATEGIES};
pub use error::{Error, Result};
pub use format::{day_label, time_label};
pub use model::{
    AssetRef, DayGroup, GeoPoint, Hero, ImageRef, ItemInstant, Itinerary, ItineraryItem,
    PageContent, ScheduledItem, SkippedItem,
};
pub use organize::{organize, TRIP_TIMEZONE};
pub use sticky::{
    HeaderPosition, StickyConfig, StickyState, StickyTracker, HEADER_THRESHOLDS,
};
