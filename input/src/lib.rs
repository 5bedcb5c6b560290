//! Recognizes taps, swipes and swipe sequences from raw multi-touch input.
//!
//! Fingers that are held still while other fingers perform a gesture are counted as modifiers,
//! much like a modifier key on a keyboard.
use std::time::Duration;

mod event;
mod gesture;
mod pointer;
mod recognizer;
mod tap_group;
mod timestamp;
mod tracker;

pub use event::*;
pub use gesture::*;
pub use pointer::*;
pub use recognizer::*;
pub use tap_group::*;
pub use timestamp::*;
pub use tracker::*;

/// The minimum length of a drag segment in device pixels to be considered a swipe. Fingers that
/// stay closer to their start position are stationary.
pub const SWIPE_MIN_DISTANCE: f64 = 100.0;

/// The maximum time a stationary finger may touch the surface to count as a tap.
pub const TAP_MAX_DURATION: Duration = Duration::from_millis(100);

/// Taps that start more than this after the previous tap ended do not belong to the same
/// sequence.
pub const TAP_GROUP_MAX_GAP: Duration = Duration::from_millis(700);
