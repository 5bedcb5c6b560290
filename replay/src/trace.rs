use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use tactile_geometry::Size;
use tactile_input::{Gesture, GestureRecognizer, TouchEvent};

/// A recorded sequence of touch events on a surface.
#[derive(Debug, Deserialize)]
pub struct Trace {
    pub surface: Size,
    #[serde(default)]
    pub events: Vec<TouchEvent>,
}

impl Trace {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read trace {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid trace {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Feeds all events to a fresh recognizer and returns the gestures in recognition order.
    pub fn replay(&self) -> Result<Vec<Gesture>> {
        let mut recognizer = GestureRecognizer::try_new(self.surface)?;

        let mut gestures = Vec::new();
        let mut previous = None;
        for event in &self.events {
            let time = event.time();
            if previous.is_some_and(|p| time < p) {
                warn!("Event at {}ms is earlier than its predecessor", time.as_millis());
            }
            previous = Some(time);

            gestures.extend(recognizer.on_event(event));
        }

        info!(
            "Replayed {} events, recognized {} gestures",
            self.events.len(),
            gestures.len()
        );
        Ok(gestures)
    }
}

#[cfg(test)]
mod tests {
    use tactile_geometry::Point;
    use tactile_input::{GestureShape, SwipeDirection};

    use super::*;

    const SWIPE_SEQUENCE: &str = include_str!("../traces/swipe_sequence.toml");
    const DOUBLE_TAP: &str = include_str!("../traces/two_finger_taps.toml");

    #[test]
    fn replays_swipe_sequence() {
        let trace = Trace::parse(SWIPE_SEQUENCE).unwrap();
        assert_eq!(trace.surface, Size::new(1000.0, 2000.0));

        let gestures = trace.replay().unwrap();
        assert_eq!(
            gestures,
            [Gesture {
                finger_count: 1,
                modifier_count: 2,
                start_position: Point::new(0.5, 0.5),
                shape: GestureShape::SwipeSequence(vec![SwipeDirection::Left, SwipeDirection::Up]),
            }]
        );
    }

    #[test]
    fn replays_two_finger_taps() {
        let gestures = Trace::parse(DOUBLE_TAP).unwrap().replay().unwrap();
        assert_eq!(gestures, [Gesture::tap(2, 0, Point::new(0.1, 0.05))]);
    }

    #[test]
    fn empty_trace_has_no_gestures() {
        let trace = Trace::parse("surface = { width = 10, height = 10 }").unwrap();
        assert!(trace.replay().unwrap().is_empty());
    }

    #[test]
    fn rejects_empty_surface() {
        let trace = Trace::parse("surface = { width = 0, height = 10 }").unwrap();
        assert!(trace.replay().is_err());
    }

    #[test]
    fn rejects_unknown_event_kind() {
        let content = r#"
            surface = { width = 10, height = 10 }

            [[events]]
            kind = "hover"
            time = 0
        "#;
        assert!(Trace::parse(content).is_err());
    }
}
