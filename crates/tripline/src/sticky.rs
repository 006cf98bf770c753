//! Sticky date header tracking.
//!
//! As the reader scrolls the itinerary, the date heading of the section
//! currently at the top of the viewport is mirrored into a fixed
//! overlay. The decision of which date that is (and whether to show the
//! overlay at all) lives here as a plain state machine over observed
//! header positions, so it can be driven and tested without a real
//! rendering surface. A host adapter translates its viewport
//! intersection primitive into [`HeaderPosition`] batches and container
//! events; one tracker is constructed per mount and dropped on unmount.

use chrono::NaiveDate;

/// Intersection thresholds an adapter should observe headers at, so
/// batches fire while a header crosses the viewport edge.
pub const HEADER_THRESHOLDS: [f32; 4] = [0.0, 0.1, 0.5, 1.0];

/// Observed position of one rendered day heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderPosition {
    /// The day this heading labels.
    pub day: NaiveDate,
    /// Top edge offset relative to the viewport top, in pixels.
    /// Negative means scrolled past.
    pub top: f32,
    /// Whether any part of the heading is inside the viewport.
    pub intersecting: bool,
}

/// What the overlay renders: whether it is shown, and for which day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StickyState {
    pub visible: bool,
    pub active_day: Option<NaiveDate>,
}

/// Tracker tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickyConfig {
    /// Band of top offsets, just below the viewport top, inside which
    /// the overlay is suppressed because the real heading is already
    /// readable at that position.
    pub suppress_min: f32,
    pub suppress_max: f32,
    /// Upward margin for the container observer, so the overlay hides
    /// slightly before the itinerary scrolls fully out of view.
    pub container_top_margin: f32,
}

impl Default for StickyConfig {
    fn default() -> Self {
        Self {
            suppress_min: -10.0,
            suppress_max: 50.0,
            container_top_margin: 400.0,
        }
    }
}

/// Per-mount controller deriving [`StickyState`] from position events.
///
/// Header batches and container events are independent producers with
/// no ordering guarantee between them; whichever arrives last wins,
/// and both converge on the same state once scrolling stops.
#[derive(Debug, Default)]
pub struct StickyTracker {
    config: StickyConfig,
    state: StickyState,
}

impl StickyTracker {
    pub fn new(config: StickyConfig) -> Self {
        Self {
            config,
            state: StickyState::default(),
        }
    }

    pub fn state(&self) -> StickyState {
        self.state
    }

    /// Clears back to the initial hidden state (remount).
    pub fn reset(&mut self) {
        self.state = StickyState::default();
    }

    /// Processes one batch of header position records.
    ///
    /// The active day is the last heading, in document order, whose top
    /// edge is at or above the viewport top. If that heading is itself
    /// still visible within the suppression band, the overlay would
    /// duplicate it, so the state stays hidden. An empty batch is a
    /// no-op: observers only deliver headers that changed.
    pub fn handle_header_batch(&mut self, headers: &[HeaderPosition]) -> StickyState {
        if headers.is_empty() {
            return self.state;
        }

        let mut sorted: Vec<HeaderPosition> = headers.to_vec();
        sorted.sort_by(|a, b| a.top.total_cmp(&b.top));

        let mut active: Option<HeaderPosition> = None;
        for header in &sorted {
            if header.top <= 0.0 {
                active = Some(*header);
            }
        }

        self.state = match active {
            Some(header) if self.in_suppress_band(&header) => StickyState::default(),
            Some(header) => StickyState {
                visible: true,
                active_day: Some(header.day),
            },
            None => StickyState::default(),
        };

        self.state
    }

    /// Container-level visibility: once the whole itinerary section is
    /// out of view, the overlay hides regardless of header state.
    pub fn handle_container(&mut self, intersecting: bool) -> StickyState {
        if !intersecting {
            self.state.visible = false;
        }
        self.state
    }

    fn in_suppress_band(&self, header: &HeaderPosition) -> bool {
        header.intersecting
            && header.top >= self.config.suppress_min
            && header.top <= self.config.suppress_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    fn header(d: u32, top: f32, intersecting: bool) -> HeaderPosition {
        HeaderPosition {
            day: day(d),
            top,
            intersecting,
        }
    }

    #[test]
    fn test_last_header_past_top_wins() {
        let mut tracker = StickyTracker::default();
        let state = tracker.handle_header_batch(&[
            header(12, 120.0, true),
            header(10, -250.0, false),
            header(11, -50.0, false),
        ]);
        assert_eq!(
            state,
            StickyState {
                visible: true,
                active_day: Some(day(11)),
            }
        );
    }

    #[test]
    fn test_no_header_past_top_hides() {
        let mut tracker = StickyTracker::default();
        let state = tracker.handle_header_batch(&[
            header(10, 30.0, true),
            header(11, 120.0, true),
            header(12, 400.0, false),
        ]);
        assert_eq!(state, StickyState::default());
    }

    #[test]
    fn test_single_candidate_outside_band_is_shown() {
        let mut tracker = StickyTracker::default();
        let state = tracker.handle_header_batch(&[
            header(10, -50.0, false),
            header(11, 30.0, true),
            header(12, 120.0, true),
        ]);
        assert_eq!(
            state,
            StickyState {
                visible: true,
                active_day: Some(day(10)),
            }
        );
    }

    #[test]
    fn test_candidate_near_top_is_suppressed() {
        let mut tracker = StickyTracker::default();
        // First the overlay is showing for an earlier day.
        tracker.handle_header_batch(&[header(10, -300.0, false), header(11, 500.0, false)]);

        // Then day 10's own heading sits just below the viewport top:
        // showing the overlay would duplicate it.
        let state = tracker.handle_header_batch(&[header(10, -5.0, true), header(11, 300.0, false)]);
        assert_eq!(state, StickyState::default());
    }

    #[test]
    fn test_candidate_in_band_but_not_intersecting_is_shown() {
        let mut tracker = StickyTracker::default();
        let state = tracker.handle_header_batch(&[header(10, -5.0, false)]);
        assert_eq!(
            state,
            StickyState {
                visible: true,
                active_day: Some(day(10)),
            }
        );
    }

    #[test]
    fn test_empty_batch_is_a_no_op() {
        let mut tracker = StickyTracker::default();
        tracker.handle_header_batch(&[header(10, -80.0, false)]);
        let before = tracker.state();
        assert_eq!(tracker.handle_header_batch(&[]), before);
    }

    #[test]
    fn test_container_out_of_view_forces_hidden() {
        let mut tracker = StickyTracker::default();
        tracker.handle_header_batch(&[header(10, -80.0, false)]);
        assert!(tracker.state().visible);

        let state = tracker.handle_container(false);
        assert!(!state.visible);
        // The active day is kept; only visibility is forced off.
        assert_eq!(state.active_day, Some(day(10)));

        // Scrolling back in does not show the overlay by itself; the
        // next header batch decides.
        let state = tracker.handle_container(true);
        assert!(!state.visible);
    }

    #[test]
    fn test_reset_returns_to_default() {
        let mut tracker = StickyTracker::new(StickyConfig::default());
        tracker.handle_header_batch(&[header(10, -80.0, false)]);
        tracker.reset();
        assert_eq!(tracker.state(), StickyState::default());
    }

    #[test]
    fn test_custom_band() {
        let config = StickyConfig {
            suppress_min: 0.0,
            suppress_max: 100.0,
            ..StickyConfig::default()
        };
        let mut tracker = StickyTracker::new(config);
        // top == 0 is a candidate, and with the band starting at 0 it
        // is also suppressed while intersecting.
        let state = tracker.handle_header_batch(&[header(10, 0.0, true)]);
        assert_eq!(state, StickyState::default());
    }
}
