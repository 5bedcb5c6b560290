//! Groups taps of fingers that touched the surface together into multi-finger taps.
//!
//! When a finger is lifted, it is not known yet whether more fingers of the same tap will follow.
//! A tap group is therefore reported only when the group that is currently forming reaches the
//! size of the group confirmed before it. For repeated taps of the same arity this fires as soon
//! as the group is complete. The very first single-finger tap of a sequence is reported when the
//! second one arrives.
use log::debug;
use tactile_geometry::Point;

use crate::{FingerTrack, TAP_GROUP_MAX_GAP, Timestamp};

/// A finished finger track classified as a tap.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TapRecord {
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub start_position: Point,
}

impl TapRecord {
    /// `None` if the track is not finished.
    pub fn from_track(track: &FingerTrack) -> Option<Self> {
        Some(Self {
            start_time: track.start_time(),
            end_time: track.end_time()?,
            start_position: track.start_position(),
        })
    }

    fn is_stale_at(&self, time: Timestamp) -> bool {
        time.saturating_duration_since(self.end_time) > TAP_GROUP_MAX_GAP
    }
}

/// A completed multi-finger tap.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TapGroupCompleted {
    pub finger_count: usize,
    /// Start position of the earliest tap of the confirming group, in device coordinates.
    pub start_position: Point,
}

#[derive(Debug, Default)]
pub struct TapGroups {
    /// The group currently forming.
    pending: Vec<TapRecord>,
    /// The previous group, its size confirms the pending one.
    confirmed: Vec<TapRecord>,
}

impl TapGroups {
    pub fn pending(&self) -> &[TapRecord] {
        &self.pending
    }

    pub fn confirmed(&self) -> &[TapRecord] {
        &self.confirmed
    }

    /// Adds a tap and returns the completed group if it confirmed one.
    pub fn push(&mut self, tap: TapRecord) -> Option<TapGroupCompleted> {
        if self.pending.last().is_some_and(|l| l.is_stale_at(tap.start_time)) {
            self.pending.clear();
        }
        if self.confirmed.last().is_some_and(|l| l.is_stale_at(tap.start_time)) {
            self.confirmed.clear();
        }

        let Some(last) = self.pending.last() else {
            self.pending.push(tap);
            return None;
        };

        if tap.start_time < last.end_time {
            // Overlaps with the pending group, so the finger belongs to it.
            self.pending.push(tap);
        } else {
            self.confirmed = std::mem::replace(&mut self.pending, vec![tap]);
        }

        if self.pending.len() != self.confirmed.len() {
            debug!(
                "Tap groups: {} pending, {} confirmed",
                self.pending.len(),
                self.confirmed.len()
            );
            return None;
        }

        self.complete()
    }

    fn complete(&mut self) -> Option<TapGroupCompleted> {
        let first = self.confirmed.iter().min_by_key(|t| t.start_time)?;
        let completed = TapGroupCompleted {
            finger_count: self.pending.len(),
            start_position: first.start_position,
        };
        self.pending.clear();
        self.confirmed.clear();
        Some(completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap(start: u64, end: u64, x: f64) -> TapRecord {
        TapRecord {
            start_time: Timestamp::from_millis(start),
            end_time: Timestamp::from_millis(end),
            start_position: Point::new(x, 0.0),
        }
    }

    #[test]
    fn first_tap_waits_for_the_second() {
        let mut groups = TapGroups::default();
        assert_eq!(groups.push(tap(0, 50, 1.0)), None);
        assert_eq!(groups.pending().len(), 1);

        let completed = groups.push(tap(200, 250, 2.0)).unwrap();
        assert_eq!(completed.finger_count, 1);
        // Reported at the earliest tap of the confirming group.
        assert_eq!(completed.start_position, Point::new(1.0, 0.0));
        assert!(groups.pending().is_empty());
        assert!(groups.confirmed().is_empty());
    }

    #[test]
    fn overlapping_taps_form_one_group() {
        let mut groups = TapGroups::default();
        assert_eq!(groups.push(tap(10, 80, 1.0)), None);
        assert_eq!(groups.push(tap(0, 90, 2.0)), None);
        assert_eq!(groups.pending().len(), 2);

        // Second two-finger tap.
        assert_eq!(groups.push(tap(300, 370, 3.0)), None);
        assert_eq!(groups.confirmed().len(), 2);
        let completed = groups.push(tap(310, 380, 4.0)).unwrap();
        assert_eq!(completed.finger_count, 2);
        // The tap that started first, not the one lifted first.
        assert_eq!(completed.start_position, Point::new(2.0, 0.0));
    }

    #[test]
    fn stale_groups_are_discarded() {
        let mut groups = TapGroups::default();
        assert_eq!(groups.push(tap(0, 50, 1.0)), None);
        // 701ms after the previous tap ended.
        assert_eq!(groups.push(tap(751, 800, 2.0)), None);
        assert_eq!(groups.pending(), &[tap(751, 800, 2.0)]);
        assert!(groups.confirmed().is_empty());
    }

    #[test]
    fn exactly_the_maximum_gap_still_groups() {
        let mut groups = TapGroups::default();
        assert_eq!(groups.push(tap(0, 50, 1.0)), None);
        assert!(groups.push(tap(750, 800, 2.0)).is_some());
    }

    #[test]
    fn stale_confirmed_group_does_not_confirm() {
        let mut groups = TapGroups::default();
        groups.push(tap(0, 50, 1.0));
        groups.push(tap(10, 60, 1.0));
        assert_eq!(groups.push(tap(500, 900, 2.0)), None);
        assert_eq!(groups.confirmed().len(), 2);
        // Overlaps the pending tap, but the two-finger group ended more than 700ms ago.
        assert_eq!(groups.push(tap(800, 880, 3.0)), None);
        assert!(groups.confirmed().is_empty());
        assert_eq!(groups.pending().len(), 2);
    }

    #[test]
    fn promotion_replaces_a_stale_confirmed_group() {
        let mut groups = TapGroups::default();
        groups.push(tap(0, 50, 1.0));
        groups.push(tap(10, 60, 1.0));
        assert_eq!(groups.push(tap(500, 550, 2.0)), None);
        let completed = groups.push(tap(800, 880, 3.0)).unwrap();
        assert_eq!(completed.finger_count, 1);
        assert_eq!(completed.start_position, Point::new(2.0, 0.0));
    }

    #[test]
    fn larger_group_after_smaller_one_reports_early() {
        let mut groups = TapGroups::default();
        // A two-finger tap followed by a three-finger tap.
        groups.push(tap(0, 50, 1.0));
        groups.push(tap(10, 60, 1.0));
        assert_eq!(groups.push(tap(200, 260, 2.0)), None);
        // The forming group reaches the confirmed size before its third finger is lifted.
        let completed = groups.push(tap(205, 265, 2.5)).unwrap();
        assert_eq!(completed.finger_count, 2);
        assert_eq!(completed.start_position, Point::new(1.0, 0.0));
        // The third finger starts over.
        assert_eq!(groups.push(tap(210, 262, 3.0)), None);
        assert_eq!(groups.pending().len(), 1);
    }
}
