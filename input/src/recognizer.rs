use std::{collections::HashMap, fmt};

use anyhow::{Result, ensure};
use log::{debug, warn};
use tactile_geometry::{Point, Size};

use crate::{
    FingerTrack, Gesture, PointerId, PointerSample, TAP_MAX_DURATION, TapGroups, TapRecord,
    Timestamp, TouchEvent,
};


pub type GestureListener = Box<dyn FnMut(&Gesture)>;

/// Turns raw touch events into [`Gesture`]s.
///
/// All state is owned by the recognizer and updated synchronously while an event is processed.
/// A recognized gesture is passed to the listener and returned from [`Self::on_event`] before
/// that call returns.
pub struct GestureRecognizer {
    surface: Size,
    fingers: HashMap<PointerId, FingerTrack>,
    /// Fingers that completed a swipe since the last swipe gesture was reported.
    swipe_finger_count: usize,
    taps: TapGroups,
    listener: Option<GestureListener>,
}

impl fmt::Debug for GestureRecognizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureRecognizer")
            .field("surface", &self.surface)
            .field("fingers", &self.fingers)
            .field("swipe_finger_count", &self.swipe_finger_count)
            .field("taps", &self.taps)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl GestureRecognizer {
    /// Creates a recognizer for a surface of the given size in device pixels.
    ///
    /// Panics if the surface is not positive in both dimensions.
    pub fn new(surface: Size) -> Self {
        assert!(
            surface.is_positive(),
            "Surface must be positive, was {}x{}",
            surface.width,
            surface.height
        );
        Self::with_surface(surface)
    }

    pub fn try_new(surface: Size) -> Result<Self> {
        ensure!(
            surface.is_positive(),
            "Surface must be positive, was {}x{}",
            surface.width,
            surface.height
        );
        Ok(Self::with_surface(surface))
    }

    fn with_surface(surface: Size) -> Self {
        Self {
            surface,
            fingers: HashMap::new(),
            swipe_finger_count: 0,
            taps: TapGroups::default(),
            listener: None,
        }
    }

    /// Replaces the listener.
    pub fn set_gesture_listener(&mut self, listener: impl FnMut(&Gesture) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_gesture_listener(&mut self) {
        self.listener = None;
    }

    /// The number of fingers currently down.
    pub fn tracked_fingers(&self) -> usize {
        self.fingers.len()
    }

    pub fn finger_track(&self, id: PointerId) -> Option<&FingerTrack> {
        self.fingers.get(&id)
    }

    /// Processes an event and returns the gesture it completed, if any.
    ///
    /// Events that do not fit the current state, like an up of an unknown pointer, are ignored.
    pub fn on_event(&mut self, event: &TouchEvent) -> Option<Gesture> {
        let gesture = match event {
            TouchEvent::Down { pointer, time } => {
                self.finger_down(pointer, *time);
                None
            }
            TouchEvent::Move { pointers, .. } => {
                // The snapshot carries the positions of all fingers.
                for track in self.fingers.values_mut() {
                    track.track_motion(pointers);
                }
                None
            }
            TouchEvent::Up { pointer, time } => self.finger_up(pointer, *time),
        }?;

        debug!("Gesture recognized: {gesture:?}");
        if let Some(listener) = &mut self.listener {
            listener(&gesture);
        }
        Some(gesture)
    }

    fn finger_down(&mut self, pointer: &PointerSample, time: Timestamp) {
        let track = FingerTrack::new(pointer.id, pointer.position, time);
        if self.fingers.insert(pointer.id, track).is_some() {
            warn!("Pointer {} went down twice, replaced its track", pointer.id);
        }
    }

    fn finger_up(&mut self, pointer: &PointerSample, time: Timestamp) -> Option<Gesture> {
        let Some(mut track) = self.fingers.remove(&pointer.id) else {
            warn!("Ignored up of unknown pointer {}", pointer.id);
            return None;
        };
        track.finish(pointer.position, time);

        // Fingers already counted as modifiers never cause a gesture of their own.
        if track.is_marked_as_modifier() {
            return None;
        }

        if !track.is_stationary() {
            return self.complete_swipe(&track);
        }

        if track.duration(time) <= TAP_MAX_DURATION {
            return self.complete_tap(&track);
        }

        debug!(
            "Pointer {} was neither a tap nor a swipe ({:?} stationary)",
            track.pointer_id(),
            track.duration(time)
        );
        None
    }

    fn complete_swipe(&mut self, track: &FingerTrack) -> Option<Gesture> {
        self.swipe_finger_count += 1;

        // Other fingers are still swiping.
        if self.fingers.values().any(|t| !t.is_stationary()) {
            return None;
        }

        // Only stationary fingers are left, all of them are modifiers of this swipe.
        self.mark_fingers_as_modifiers();

        let gesture = Gesture::from_swipes(
            track.swipes(),
            self.swipe_finger_count,
            self.fingers.len(),
            self.normalized(track.start_position()),
        );
        self.swipe_finger_count = 0;
        gesture
    }

    fn complete_tap(&mut self, track: &FingerTrack) -> Option<Gesture> {
        let completed = self.taps.push(TapRecord::from_track(track)?)?;

        self.mark_fingers_as_modifiers();

        Some(Gesture::tap(
            completed.finger_count,
            self.fingers.len(),
            self.normalized(completed.start_position),
        ))
    }

    fn mark_fingers_as_modifiers(&mut self) {
        for track in self.fingers.values_mut() {
            track.mark_as_modifier();
        }
    }

    fn normalized(&self, position: Point) -> Point {
        position.normalized_in(self.surface)
    }
}
