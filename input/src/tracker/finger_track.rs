//! Motion tracking of a single finger, from touching the surface until it is lifted.
use std::time::Duration;

use log::trace;
use tactile_geometry::Point;

use crate::{PointerId, PointerSample, SWIPE_MIN_DISTANCE, SwipeDirection, Timestamp};

#[derive(Clone, Debug)]
pub struct FingerTrack {
    pointer_id: PointerId,
    start_position: Point,
    start_time: Timestamp,
    /// Set when the finger was lifted. A finished track ignores all further motion.
    end_time: Option<Timestamp>,

    last_position: Point,
    last_drag_direction: Option<SwipeDirection>,
    /// Where the currently evaluated drag segment began.
    mark: Point,

    /// Recorded swipes, no two adjacent entries are equal.
    swipes: Vec<SwipeDirection>,
    marked_as_modifier: bool,
}

impl FingerTrack {
    pub fn new(pointer_id: PointerId, start_position: Point, start_time: Timestamp) -> Self {
        Self {
            pointer_id,
            start_position,
            start_time,
            end_time: None,
            last_position: start_position,
            last_drag_direction: None,
            mark: start_position,
            swipes: Vec::new(),
            marked_as_modifier: false,
        }
    }

    pub fn pointer_id(&self) -> PointerId {
        self.pointer_id
    }

    pub fn start_position(&self) -> Point {
        self.start_position
    }

    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    /// `None` as long as the finger is down.
    pub fn end_time(&self) -> Option<Timestamp> {
        self.end_time
    }

    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }

    /// The time the finger touched the surface. While still down, this is measured up to `now`.
    pub fn duration(&self, now: Timestamp) -> Duration {
        self.end_time
            .unwrap_or(now)
            .saturating_duration_since(self.start_time)
    }

    pub fn swipes(&self) -> &[SwipeDirection] {
        &self.swipes
    }

    /// A finger is stationary if it was used as a modifier already, or if it has not recorded a
    /// swipe and stays near its start position.
    pub fn is_stationary(&self) -> bool {
        self.marked_as_modifier
            || (self.swipes.is_empty()
                && self.last_position.squared_distance_to(self.start_position)
                    < SWIPE_MIN_DISTANCE * SWIPE_MIN_DISTANCE)
    }

    /// `false` does not mean that the finger can not act as a modifier, only that it has not been
    /// counted as one yet.
    pub fn is_marked_as_modifier(&self) -> bool {
        self.marked_as_modifier
    }

    pub fn mark_as_modifier(&mut self) {
        self.marked_as_modifier = true;
    }

    /// Updates the track from a snapshot of all pointers currently down.
    ///
    /// Snapshots that do not contain this track's pointer are ignored.
    pub fn track_motion(&mut self, pointers: &[PointerSample]) {
        if let Some(sample) = pointers.iter().find(|p| p.id == self.pointer_id) {
            self.move_to(sample.position);
        }
    }

    pub fn move_to(&mut self, position: Point) {
        if self.is_finished() || position == self.last_position {
            return;
        }

        let drag_direction = SwipeDirection::between(self.last_position, position);

        // A straight drag can only produce one swipe, so the segment is evaluated only when the
        // drag direction changes.
        if self.last_drag_direction != Some(drag_direction) {
            self.record_segment(self.last_position);
            self.last_drag_direction = Some(drag_direction);
        }

        self.last_position = position;
    }

    /// Seals the track at the position where the finger was lifted.
    pub fn finish(&mut self, position: Point, end_time: Timestamp) {
        if self.is_finished() {
            return;
        }

        self.record_segment(position);
        self.end_time = Some(end_time);
        self.last_position = position;
    }

    /// Records the segment from the mark to `to` if it is long enough and does not repeat the
    /// previous swipe.
    fn record_segment(&mut self, to: Point) {
        if self.mark.squared_distance_to(to) < SWIPE_MIN_DISTANCE * SWIPE_MIN_DISTANCE {
            return;
        }

        let direction = SwipeDirection::between(self.mark, to);
        if self.swipes.last() == Some(&direction) {
            return;
        }

        trace!(
            "Pointer {}: swipe {direction} from {:?} to {to:?}",
            self.pointer_id, self.mark
        );
        self.swipes.push(direction);
        self.mark = to;
    }
}
